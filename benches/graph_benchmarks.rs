use attrgraph::graph::{attributes, AttrValue, GraphStore};
use attrgraph::persistence::{self, Format};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

/// Ring of `size` integer-keyed nodes with a chord every tenth node
fn build_ring(size: i64) -> GraphStore {
    let mut graph = GraphStore::new();
    for i in 0..size {
        graph.add_node_with_attributes(
            i,
            attributes([
                ("name", AttrValue::from(format!("Person{}", i))),
                ("age", AttrValue::from(i % 100)),
            ]),
        );
    }
    for i in 0..size {
        graph.add_edge(i, (i + 1) % size);
        if i % 10 == 0 {
            graph.add_edge(i, (i + size / 2) % size);
        }
    }
    graph
}

/// Benchmark node insertion throughput
fn bench_node_insertion(c: &mut Criterion) {
    let mut group = c.benchmark_group("node_insertion");

    for size in [100, 1000, 10_000].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            b.iter(|| {
                let mut graph = GraphStore::new();
                for i in 0..size {
                    graph.add_node_with_attributes(
                        format!("node{}", i),
                        attributes([("age", i % 100)]),
                    );
                }
                criterion::black_box(graph.node_count());
            });
        });
    }
    group.finish();
}

/// Benchmark weighted edge insertion
fn bench_weighted_edges(c: &mut Criterion) {
    let mut group = c.benchmark_group("weighted_edges");

    for size in [100i64, 1000, 10_000].iter() {
        let triples: Vec<(i64, i64, f64)> =
            (0..*size).map(|i| (i, (i * 7 + 3) % size, i as f64 * 0.5)).collect();

        group.bench_with_input(BenchmarkId::from_parameter(size), &triples, |b, triples| {
            b.iter(|| {
                let mut graph = GraphStore::new();
                graph.add_weighted_edges_from(triples.iter().copied()).unwrap();
                criterion::black_box(graph.edge_count());
            });
        });
    }
    group.finish();
}

/// Benchmark degree and adjacency queries
fn bench_degree_queries(c: &mut Criterion) {
    let mut group = c.benchmark_group("degree_queries");
    let graph = build_ring(10_000);

    group.bench_function("degree_single", |b| {
        b.iter(|| criterion::black_box(graph.degree(5000).unwrap()));
    });

    group.bench_function("degrees_all", |b| {
        b.iter(|| criterion::black_box(graph.degrees().len()));
    });

    group.bench_function("adjacent", |b| {
        b.iter(|| criterion::black_box(graph.adjacent(0).unwrap().len()));
    });

    group.finish();
}

/// Benchmark cascading node removal
fn bench_remove_node(c: &mut Criterion) {
    let graph = build_ring(1000);

    c.bench_function("remove_node_cascade", |b| {
        b.iter(|| {
            let mut copy = graph.clone();
            copy.remove_node(0).unwrap();
            criterion::black_box(copy.edge_count());
        });
    });
}

/// Benchmark GML and JSON serialization
fn bench_serialization(c: &mut Criterion) {
    let mut group = c.benchmark_group("serialization");
    let graph = build_ring(1000);

    for format in [Format::Gml, Format::Json] {
        let text = persistence::to_string(&graph, format).unwrap();

        group.bench_function(format!("write_{}", format), |b| {
            b.iter(|| criterion::black_box(persistence::to_string(&graph, format).unwrap().len()));
        });
        group.bench_function(format!("parse_{}", format), |b| {
            b.iter(|| criterion::black_box(persistence::from_str(&text, format).unwrap().node_count()));
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_node_insertion,
    bench_weighted_edges,
    bench_degree_queries,
    bench_remove_node,
    bench_serialization
);
criterion_main!(benches);
