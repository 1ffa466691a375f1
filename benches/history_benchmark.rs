//! Benchmarks for values recomputed on every read.
//!
//! Search history is derived from the whole URL log each time it is shown;
//! sorting copies and reorders the whole story list.
//!
//! Run with: cargo bench

#![allow(missing_docs)] // criterion macros generate undocumented items

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use hacker_stories::api::{QueryUrlBuilder, DEFAULT_API_BASE};
use hacker_stories::model::{Story, StoryId};
use hacker_stories::state::{search_history, sort_stories, SortKey, SortState};

/// URL log of a long session: bursts of paging on a rotating set of terms.
fn long_url_log(len: usize) -> Vec<String> {
    let builder = QueryUrlBuilder::new(DEFAULT_API_BASE).expect("valid base");
    let terms = ["react", "redux", "rust", "tokio", "serde", "go", "node"];
    (0..len)
        .map(|i| builder.build(terms[(i / 4) % terms.len()], (i % 4) as u32))
        .collect()
}

fn many_stories(len: usize) -> Vec<Story> {
    (0..len)
        .map(|i| Story {
            object_id: StoryId::new(i as u64),
            url: format!("https://example.com/{i}"),
            title: format!("Story {}", (i * 7919) % len),
            author: format!("author{}", i % 97),
            num_comments: ((i * 31) % 500) as u32,
            points: ((i * 17) % 1000) as u32,
        })
        .collect()
}

fn bench_search_history(c: &mut Criterion) {
    let mut group = c.benchmark_group("search_history");
    for len in [10, 1_000, 10_000] {
        let urls = long_url_log(len);
        group.bench_function(format!("{len}_urls"), |b| {
            b.iter(|| search_history(black_box(&urls)))
        });
    }
    group.finish();
}

fn bench_sort(c: &mut Criterion) {
    let stories = many_stories(5_000);
    let mut group = c.benchmark_group("sort_stories");
    for key in [SortKey::Title, SortKey::Comments, SortKey::Points] {
        let sort = SortState {
            key,
            is_reverse: false,
        };
        group.bench_function(key.label(), |b| {
            b.iter(|| sort_stories(black_box(&stories), sort))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_search_history, bench_sort);
criterion_main!(benches);
