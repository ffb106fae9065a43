//! Benchmarks for catalog transitions
//!
//! Run with: cargo bench

use bookcase::{transition, Action, Book, CatalogState, Language};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

fn build_catalog(size: usize) -> CatalogState {
    let mut state = CatalogState::default();
    for i in 0..size {
        state = transition(
            &state,
            Action::AddBook(Book::new(
                format!("Book {}", i),
                format!("Author {}", i),
                "Fiction",
            )),
        );
    }
    state
}

fn bench_add_book(c: &mut Criterion) {
    let mut group = c.benchmark_group("add_book");

    for size in [100, 1000, 10_000].iter() {
        let state = build_catalog(*size);

        group.throughput(Throughput::Elements(1));
        group.bench_with_input(BenchmarkId::new("transition", size), &state, |b, state| {
            b.iter(|| {
                let book = Book::new("Dune", "Frank Herbert", "Science Fiction");
                black_box(transition(state, Action::AddBook(book)))
            });
        });
    }

    group.finish();
}

fn bench_delete_book(c: &mut Criterion) {
    let mut group = c.benchmark_group("delete_book");

    for size in [100, 1000, 10_000].iter() {
        let state = build_catalog(*size);
        let middle_id = state.books[size / 2].id;

        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::new("by_id", size), &state, |b, state| {
            b.iter(|| black_box(transition(state, Action::DeleteBook(middle_id))));
        });

        // Worst case: the id matches nothing and every book is scanned
        let missing_id = Book::new("", "", "").id;
        group.bench_with_input(BenchmarkId::new("missing_id", size), &state, |b, state| {
            b.iter(|| black_box(transition(state, Action::DeleteBook(missing_id))));
        });
    }

    group.finish();
}

fn bench_set_language(c: &mut Criterion) {
    let mut group = c.benchmark_group("set_language");

    for size in [100, 1000, 10_000].iter() {
        let state = build_catalog(*size);

        group.bench_with_input(BenchmarkId::new("clone_books", size), &state, |b, state| {
            b.iter(|| black_box(transition(state, Action::SetLanguage(Language::Japanese))));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_add_book,
    bench_delete_book,
    bench_set_language,
);

criterion_main!(benches);
