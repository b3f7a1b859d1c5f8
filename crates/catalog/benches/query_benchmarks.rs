use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use storefront_catalog::{Catalog, PageRequest, Price, ProductFilter, ProductSort};

const SIZES: [usize; 3] = [50, 1_000, 10_000];

/// Unfiltered first page: the landing-page request.
fn bench_unfiltered_first_page(c: &mut Criterion) {
    let mut group = c.benchmark_group("unfiltered_first_page");

    for size in SIZES {
        let catalog = Catalog::mock(size, 42);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &catalog, |b, catalog| {
            b.iter(|| {
                catalog
                    .query(None, ProductSort::Id, black_box(PageRequest::default()))
                    .unwrap()
            });
        });
    }

    group.finish();
}

/// Every predicate set, including the case-folded search scan.
fn bench_full_filter(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_filter");
    let filter = ProductFilter::new()
        .with_category("Electronics")
        .with_min_price(Price::from_cents(5_000))
        .with_max_price(Price::from_cents(30_000))
        .with_in_stock(true)
        .with_search_term("quality");

    for size in SIZES {
        let catalog = Catalog::mock(size, 42);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &catalog, |b, catalog| {
            b.iter(|| {
                catalog
                    .query(
                        Some(black_box(&filter)),
                        ProductSort::PriceAsc,
                        PageRequest::new(2, 12).unwrap(),
                    )
                    .unwrap()
            });
        });
    }

    group.finish();
}

fn bench_metadata(c: &mut Criterion) {
    let mut group = c.benchmark_group("metadata");
    let catalog = Catalog::mock(10_000, 42);

    group.bench_function("list_categories", |b| b.iter(|| catalog.list_categories()));
    group.bench_function("price_range", |b| b.iter(|| catalog.price_range().unwrap()));
    group.bench_function("find_by_id_last", |b| {
        b.iter(|| catalog.find_by_id(black_box("prod-10000")))
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_unfiltered_first_page,
    bench_full_filter,
    bench_metadata
);
criterion_main!(benches);
