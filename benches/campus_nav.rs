use campus_nav::prelude::*;
use chrono::Weekday;
use criterion::{Criterion, criterion_group, criterion_main};
use std::{env, hint::black_box, path::Path, time::Duration};

fn search(repository: &Repository) {
    let _ = black_box(repository.search_buildings_by_name("hal buildng"));
}

fn nearby(repository: &Repository) {
    let coordinate = Coordinate::from((45.497_163, -73.578_535));
    let _ = black_box(repository.buildings_by_coordinate(&coordinate, Distance::from_meters(500.0)));
}

fn cross_campus(repository: &Repository, from: &str, to: &str) {
    let _ = black_box(
        repository
            .planner(Location::Building(from.into()), Location::room(to, "2"))
            .departure_at(Time::from_hm(9, 0))
            .on(Weekday::Mon)
            .solve(),
    );
}

fn indoor() {
    let _ = black_box(generate_indoor_direction(
        black_box("2"),
        black_box("5"),
        black_box("elevator"),
    ));
}

fn criterion_benchmark(c: &mut Criterion) {
    let bundle_path = match env::var("CAMPUS_NAV_BUNDLE") {
        Ok(path_str) => Path::new(&path_str).to_owned(),
        Err(err) => {
            println!("Missing CAMPUS_NAV_BUNDLE environment variable: {err}");
            return;
        }
    };

    let bundle = BundleReader::new()
        .from_path(bundle_path)
        .expect("Failed to open campus bundle");
    let repository = Repository::new()
        .load_bundle(bundle)
        .expect("Failed to build repository");
    let from = repository
        .buildings_by_campus(Campus::Sgw)
        .first()
        .map(|building| building.id.to_string())
        .expect("Bundle has no SGW building");
    let to = repository
        .buildings_by_campus(Campus::Loyola)
        .first()
        .map(|building| building.id.to_string())
        .expect("Bundle has no Loyola building");

    let mut group = c.benchmark_group("Campus");
    group.measurement_time(Duration::from_secs(10));

    group.bench_function("Indoor direction", |b| b.iter(indoor));
    group.bench_function("Fuzzy search", |b| b.iter(|| search(&repository)));
    group.bench_function("Nearby buildings", |b| b.iter(|| nearby(&repository)));
    group.bench_function("Cross campus plan", |b| {
        b.iter(|| cross_campus(&repository, &from, &to))
    });

    group.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
