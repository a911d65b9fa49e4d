pub mod fuzzy;
pub mod geo;
pub mod time;

pub use geo::*;
pub use time::*;

use rayon::prelude::*;
use std::cmp::Ordering;

/// Minimum fuzzy score for a name to be considered a hit.
const SEARCH_THRESHOLD: f64 = 0.1;

pub trait Identifiable {
    fn id(&self) -> &str;
    fn name(&self) -> &str;
    fn normalized_name(&self) -> &str;
}

/// Generic fuzzy search over anything with a name, best match first.
/// Ties keep the haystack order.
pub fn search<'a, T>(needle: &str, haystack: &'a [T]) -> Vec<&'a T>
where
    T: Send + Sync + Identifiable,
{
    let normalized_needle = fuzzy::normalize(needle);
    let mut results: Vec<(usize, &T, f64)> = haystack
        .par_iter()
        .enumerate()
        .filter_map(|(i, hay)| {
            let score = fuzzy::score(&normalized_needle, hay.normalized_name())
                .max(fuzzy::score(&normalized_needle, &fuzzy::normalize(hay.id())));
            (score > SEARCH_THRESHOLD).then_some((i, hay, score))
        })
        .collect();

    results.par_sort_unstable_by(|(ai, _, a), (bi, _, b)| {
        b.partial_cmp(a).unwrap_or(Ordering::Equal).then(ai.cmp(bi))
    });
    results.into_iter().map(|(_, entity, _)| entity).collect()
}
