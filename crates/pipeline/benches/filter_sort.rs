//! Benchmarks for the filter and sort stages
//!
//! Run with: cargo bench --package pipeline
//!
//! Uses a synthetic set of 10k candidates, well above a real dashboard load.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use data_loader::{Candidate, Skills};
use pipeline::{FilterPipeline, FilterQuery, SortColumn, SortDirection, sort_view};

const SKILLS: [&str; 6] = ["Python", "Rust", "SQL", "Kubernetes", "React", "Excel"];

fn synthetic_candidates(count: usize) -> Vec<Candidate> {
    (0..count)
        .map(|i| Candidate {
            candidate_id: Some(i.to_string()),
            name: Some(format!("Candidate {:05}", (i * 7919) % count)),
            email: (i % 4 != 0).then(|| format!("user{i}@example.com")),
            skills: Some(Skills {
                technical: Some(vec![
                    SKILLS[i % SKILLS.len()].to_string(),
                    SKILLS[(i / 3) % SKILLS.len()].to_string(),
                ]),
                non_technical: Some(vec!["Teamwork".to_string()]),
            }),
            upload_date: Some(format!("2024-{:02}-{:02}T10:00:00Z", i % 12 + 1, i % 28 + 1)),
            ..Default::default()
        })
        .collect()
}

fn bench_filter(c: &mut Criterion) {
    let candidates = synthetic_candidates(10_000);
    let pipeline = FilterPipeline::dashboard();
    let query = FilterQuery::new("example", "python");

    c.bench_function("dashboard_filter_10k", |b| {
        b.iter(|| {
            let view = pipeline.apply(black_box(&candidates), black_box(&query));
            black_box(view)
        })
    });
}

fn bench_sort(c: &mut Criterion) {
    let candidates = synthetic_candidates(10_000);
    let view: Vec<usize> = (0..candidates.len()).collect();

    c.bench_function("sort_by_skills_10k", |b| {
        b.iter(|| {
            let mut view = view.clone();
            sort_view(
                &mut view,
                black_box(&candidates),
                SortColumn::Skills,
                SortDirection::Ascending,
            );
            black_box(view)
        })
    });

    c.bench_function("sort_by_email_desc_10k", |b| {
        b.iter(|| {
            let mut view = view.clone();
            sort_view(
                &mut view,
                black_box(&candidates),
                SortColumn::Email,
                SortDirection::Descending,
            );
            black_box(view)
        })
    });
}

criterion_group!(benches, bench_filter, bench_sort);
criterion_main!(benches);
