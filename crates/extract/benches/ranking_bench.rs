//! Benchmarks for aggregation, ranking and classification
//!
//! Run with: cargo bench -p extract

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use extract::{Analysis, Ranking, aggregate_creators, classify_title};
use rank_core::{ContentType, InteractionCounts, InteractionRecord};
use std::hint::black_box;

const TITLES: &[&str] = &[
  "儿童故事第12集：学会分享",
  "恐龙科普：霸王龙有多大",
  "周末去早市买菜",
  "扬州一日游",
  "挖掘机工作啦",
];

fn create_test_records(count: usize, creators: usize) -> Vec<InteractionRecord> {
  (0..count)
    .map(|i| InteractionRecord {
      item_id: format!("note-{}", i),
      creator_id: format!("user-{}", i % creators),
      creator_name: format!("creator {}", i % creators),
      title: TITLES[i % TITLES.len()].to_string(),
      content_type: if i % 3 == 0 { ContentType::Normal } else { ContentType::Video },
      counts: InteractionCounts::new((i * 37 % 5000) as u64, (i % 40) as u64, (i % 90) as u64, (i * 13 % 800) as u64),
    })
    .collect()
}

fn bench_aggregate(c: &mut Criterion) {
  let mut group = c.benchmark_group("aggregate_creators");

  for size in [100, 1000, 5000].iter() {
    let records = create_test_records(*size, size / 10);
    group.throughput(Throughput::Elements(*size as u64));
    group.bench_with_input(BenchmarkId::from_parameter(size), &records, |b, records| {
      b.iter(|| aggregate_creators(black_box(records)));
    });
  }

  group.finish();
}

fn bench_rank(c: &mut Criterion) {
  let mut group = c.benchmark_group("rank");

  for creators in [10, 100, 500].iter() {
    let records = create_test_records(creators * 10, *creators);
    let aggregates = aggregate_creators(&records).expect("non-empty");
    group.bench_with_input(BenchmarkId::from_parameter(creators), &aggregates, |b, aggregates| {
      b.iter(|| Ranking::from_aggregates(black_box(aggregates.clone())));
    });
  }

  group.finish();
}

fn bench_classify(c: &mut Criterion) {
  let mut group = c.benchmark_group("classify_title");

  for title in TITLES {
    group.bench_with_input(BenchmarkId::from_parameter(title), title, |b, title| {
      b.iter(|| classify_title(black_box(title)));
    });
  }

  group.finish();
}

fn bench_full_analysis(c: &mut Criterion) {
  let records = create_test_records(2000, 150);

  c.bench_function("analysis_2000_items", |b| {
    b.iter(|| Analysis::from_records(black_box(records.clone())));
  });
}

criterion_group!(benches, bench_aggregate, bench_rank, bench_classify, bench_full_analysis);
criterion_main!(benches);
