//! # Sort Benchmarks
//!
//! Performance benchmarks for toposort-core.
//!
//! Run with: `cargo bench -p toposort-core`

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::convert::Infallible;
use std::hint::black_box;
use toposort_core::{NodeProvider, top_sort};

/// Adjacency list over `usize` vertices; entry `v` lists what `v` depends on.
struct AdjacencyDag {
    edges: Vec<Vec<usize>>,
}

impl NodeProvider for AdjacencyDag {
    type Vertex = usize;
    type Id = usize;
    type Error = Infallible;

    fn id(&self, vertex: &usize) -> usize {
        *vertex
    }

    fn child_count(&self, vertex: &usize) -> usize {
        self.edges[*vertex].len()
    }

    fn child(&self, vertex: &usize, index: usize) -> Result<usize, Infallible> {
        Ok(self.edges[*vertex][index])
    }
}

/// A chain where each vertex depends on the previous one.
fn linear_chain(size: usize) -> AdjacencyDag {
    let edges = (0..size)
        .map(|i| if i == 0 { Vec::new() } else { vec![i - 1] })
        .collect();
    AdjacencyDag { edges }
}

/// A hub that depends on every other vertex directly.
fn star(size: usize) -> AdjacencyDag {
    let mut edges = vec![Vec::new(); size];
    edges[0] = (1..size).collect();
    AdjacencyDag { edges }
}

/// Layers of width 10 where each vertex depends on the whole layer below.
fn layered(size: usize) -> AdjacencyDag {
    const WIDTH: usize = 10;
    let edges = (0..size)
        .map(|i| {
            let layer = i / WIDTH;
            if layer == 0 {
                Vec::new()
            } else {
                let below = (layer - 1) * WIDTH;
                (below..below + WIDTH).collect()
            }
        })
        .collect();
    AdjacencyDag { edges }
}

// =============================================================================
// BENCHMARKS
// =============================================================================

fn bench_chain(c: &mut Criterion) {
    let mut group = c.benchmark_group("top_sort_chain");

    for size in [100, 1000, 10000].iter() {
        let dag = linear_chain(*size);
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            b.iter(|| black_box(top_sort(Some(&dag), &[size - 1]).expect("sort")));
        });
    }

    group.finish();
}

fn bench_star(c: &mut Criterion) {
    let mut group = c.benchmark_group("top_sort_star");

    for size in [100, 1000, 10000].iter() {
        let dag = star(*size);
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| black_box(top_sort(Some(&dag), &[0]).expect("sort")));
        });
    }

    group.finish();
}

fn bench_layered(c: &mut Criterion) {
    let mut group = c.benchmark_group("top_sort_layered");

    for size in [100, 1000, 10000].iter() {
        let dag = layered(*size);
        let roots: Vec<usize> = (size - 10..*size).collect();
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| black_box(top_sort(Some(&dag), &roots).expect("sort")));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_chain, bench_star, bench_layered);
criterion_main!(benches);
