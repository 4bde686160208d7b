use criterion::{black_box, criterion_group, criterion_main, Criterion};
use halo_visit::adaptors::{EdgeFiltered, NodeFiltered, Reversed};
use halo_visit::graph::CsrGraph;
use halo_visit::traverse::{Bfs, Topo};
use halo_visit::visit::{EdgeRef, VisitedBits, Walker};

fn weighted_graph(nodes: usize, degree: usize) -> CsrGraph<(), u32> {
    let edges = (0..nodes).flat_map(|i| {
        (0..degree).map(move |j| (i, (i * 7 + j * 13 + 1) % nodes, ((i + j) % 10) as u32))
    });
    CsrGraph::from_edges(vec![(); nodes], edges)
}

fn bench_reversed(c: &mut Criterion) {
    let graph = weighted_graph(10_000, 8);

    c.bench_function("bfs_plain", |b| {
        b.iter(|| black_box(Bfs::new(&graph, 0).iter(&graph).count()));
    });

    c.bench_function("bfs_reversed", |b| {
        let r = Reversed(&graph);
        b.iter(|| black_box(Bfs::new(r, 0).iter(r).count()));
    });

    c.bench_function("topo_reversed_cyclic", |b| {
        let r = Reversed(&graph);
        b.iter(|| black_box(Topo::new(r).iter(r).count()));
    });
}

fn bench_filtered(c: &mut Criterion) {
    let graph = weighted_graph(10_000, 8);

    c.bench_function("bfs_node_filtered_closure", |b| {
        let f = NodeFiltered::from_fn(&graph, |n: usize| n % 3 != 0);
        b.iter(|| black_box(Bfs::new(&f, 1).iter(&f).count()));
    });

    c.bench_function("bfs_node_filtered_bitset", |b| {
        let keep: VisitedBits = (0..10_000).filter(|n| n % 3 != 0).collect();
        let f = NodeFiltered(&graph, &keep);
        b.iter(|| black_box(Bfs::new(&f, 1).iter(&f).count()));
    });

    c.bench_function("bfs_edge_filtered", |b| {
        let f = EdgeFiltered::from_fn(&graph, |e| *e.weight() < 7);
        b.iter(|| black_box(Bfs::new(&f, 0).iter(&f).count()));
    });

    c.bench_function("bfs_reversed_edge_filtered", |b| {
        let f = EdgeFiltered::from_fn(&graph, |e| *e.weight() < 7);
        let r = Reversed(&f);
        b.iter(|| black_box(Bfs::new(r, 0).iter(r).count()));
    });
}

criterion_group!(benches, bench_reversed, bench_filtered);
criterion_main!(benches);
