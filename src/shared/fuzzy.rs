use std::cmp;

/// Lowercases and collapses whitespace so "Hall  Building" and "hall building" compare equal.
pub fn normalize(value: &str) -> String {
    value
        .split_whitespace()
        .map(|token| token.to_lowercase())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Levenshtein distance counted in chars.
pub(crate) fn distance(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let mut row: Vec<usize> = (0..=b.len()).collect();
    for (i, ac) in a.iter().enumerate() {
        let mut diagonal = row[0];
        row[0] = i + 1;
        for (j, bc) in b.iter().enumerate() {
            let above = row[j + 1];
            let sub_cost = if ac == bc { 0 } else { 1 };
            row[j + 1] = cmp::min(cmp::min(above + 1, row[j] + 1), diagonal + sub_cost);
            diagonal = above;
        }
    }
    row[b.len()]
}

/// Scores `hay` against `needle`, 1.0 being a perfect match.
/// Each needle token is matched against its best hay token, and a needle
/// token that prefixes a hay token counts as a full match, so "hal" finds
/// "henry f. hall building" while typing.
pub(crate) fn score(needle: &str, hay: &str) -> f64 {
    let needle_tokens: Vec<_> = needle.split_whitespace().collect();
    if needle_tokens.is_empty() {
        return 0.0;
    }
    let hay_tokens: Vec<_> = hay.split_whitespace().collect();
    let total: f64 = needle_tokens
        .iter()
        .map(|needle| {
            hay_tokens
                .iter()
                .map(|hay| score_token(needle, hay))
                .fold(0.0, f64::max)
        })
        .sum();
    total / needle_tokens.len() as f64
}

fn score_token(needle: &str, hay: &str) -> f64 {
    if hay.starts_with(needle) {
        return 1.0;
    }
    let longest = cmp::max(needle.chars().count(), hay.chars().count());
    1.0 - distance(needle, hay) as f64 / longest as f64
}

#[test]
fn fuzzy_empty_vs_empty() {
    assert_eq!(distance("", ""), 0);
}

#[test]
fn fuzzy_empty_vs_nonempty() {
    assert_eq!(distance("", "abc"), 3);
    assert_eq!(distance("abc", ""), 3);
}

#[test]
fn fuzzy_substitution() {
    assert_eq!(distance("hall", "hell"), 1);
}

#[test]
fn fuzzy_insertion_deletion() {
    assert_eq!(distance("loyola", "loyolla"), 1);
    assert_eq!(distance("loyolla", "loyola"), 1);
}

#[test]
fn fuzzy_unicode() {
    assert_eq!(distance("café", "cafe"), 1);
}

#[test]
fn fuzzy_longer_sequence() {
    assert_eq!(distance("intention", "execution"), 5);
}

#[test]
fn prefix_scores_full() {
    assert_eq!(score("hal", "hall building"), 1.0);
}

#[test]
fn token_order_does_not_matter() {
    assert_eq!(score("library vanier", "vanier library"), 1.0);
}

#[test]
fn empty_needle_scores_zero() {
    assert_eq!(score("", "hall building"), 0.0);
}

#[test]
fn normalize_collapses() {
    assert_eq!(normalize("  Hall   BUILDING "), "hall building");
}
