// Criterion benchmarks for the Artistly core

use artistly_core::catalog::{self, LANGUAGES, LOCATIONS, PRICE_RANGES};
use artistly_core::core::filters::matches_query;
use artistly_core::{Artist, Directory, FilterSelection, Wizard};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

fn synthetic_artist(id: usize) -> Artist {
    let category = match id % 4 {
        0 => "singers",
        1 => "dancers",
        2 => "speakers",
        _ => "djs",
    };
    Artist {
        id: id.to_string(),
        name: format!("Artist {}", id),
        categories: vec![category.to_string()],
        bio: "Versatile performer available for weddings, corporate events and private functions."
            .to_string(),
        price_range: PRICE_RANGES[id % PRICE_RANGES.len()].to_string(),
        location: LOCATIONS[id % LOCATIONS.len()].to_string(),
        languages: vec![LANGUAGES[id % LANGUAGES.len()].to_string()],
        image: String::new(),
        featured: id % 5 == 0,
        rating: 4.0 + (id % 10) as f64 / 10.0,
        review_count: (id % 200) as u32,
    }
}

fn bench_query_predicate(c: &mut Criterion) {
    let categories = catalog::categories();
    let artist = synthetic_artist(1);

    c.bench_function("matches_query", |b| {
        b.iter(|| {
            matches_query(
                black_box(&artist),
                black_box("wedding"),
                black_box(&categories),
            )
        });
    });
}

fn bench_directory_search(c: &mut Criterion) {
    let directory = Directory::default();
    let selection = FilterSelection {
        categories: vec!["singers".to_string(), "djs".to_string()],
        location: Some(LOCATIONS[0].to_string()),
        price_range: None,
    };

    let mut group = c.benchmark_group("directory_search");

    for artist_count in [10, 50, 100, 500, 1000].iter() {
        let artists: Vec<Artist> = (0..*artist_count).map(synthetic_artist).collect();

        group.bench_with_input(
            BenchmarkId::new("search", artist_count),
            artist_count,
            |b, _| {
                b.iter(|| {
                    directory.search(
                        black_box(&artists),
                        black_box("performer"),
                        black_box(&selection),
                    )
                });
            },
        );
    }

    group.finish();
}

fn bench_wizard_step_validation(c: &mut Criterion) {
    let mut wizard = Wizard::new();
    {
        let form = wizard.form_mut();
        form.name = "Aria Sharma".to_string();
        form.email = "aria.sharma@example.com".to_string();
        form.phone = "+91 9876543210".to_string();
    }

    c.bench_function("wizard_advance_step1", |b| {
        b.iter(|| {
            let mut wizard = wizard.clone();
            black_box(wizard.advance()).ok();
        });
    });
}

criterion_group!(
    benches,
    bench_query_predicate,
    bench_directory_search,
    bench_wizard_step_validation
);

criterion_main!(benches);
