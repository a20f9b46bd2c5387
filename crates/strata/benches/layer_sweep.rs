use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use std::time::Duration;
use strata::graph::{LayoutDirection, LayoutGraph, NodeId};
use strata::{AlternatingLayer, LayerCrossingMinimizer, Sweep, SweepOptions, normalize, order};

const DIRECTION: LayoutDirection = LayoutDirection::VerticalFromSource;

#[derive(Debug, Clone)]
struct LayeredShape {
    layers: usize,
    width: usize,
    edges: Vec<(usize, usize, usize, usize)>,
}

impl LayeredShape {
    fn build(&self) -> (LayoutGraph, Vec<Vec<NodeId>>) {
        let mut g = LayoutGraph::new();
        let mut layering: Vec<Vec<NodeId>> = Vec::with_capacity(self.layers);
        for l in 0..self.layers {
            let layer = (0..self.width)
                .map(|i| g.add_node(format!("l{l}_n{i}")))
                .collect::<Result<Vec<_>, _>>()
                .expect("fresh ids");
            layering.push(layer);
        }
        for &(from_layer, from, to_layer, to) in &self.edges {
            g.add_edge(layering[from_layer][from], layering[to_layer][to])
                .expect("known nodes");
        }
        normalize(&mut g, &mut layering, DIRECTION).expect("forward edges");
        (g, layering)
    }
}

fn build_layered_shape(layers: usize, width: usize, long_every: usize) -> LayeredShape {
    let mut edges: Vec<(usize, usize, usize, usize)> = Vec::new();
    for l in 0..layers.saturating_sub(1) {
        for i in 0..width {
            // Reversed neighbour to create crossing pressure.
            edges.push((l, i, l + 1, width - 1 - i));
            edges.push((l, i, l + 1, (i * 7 + 3) % width));
            // Long edges become segments after normalization.
            if i % long_every == 0 && l + 3 < layers {
                edges.push((l, i, l + 3, (i + width / 2) % width));
            }
        }
    }
    LayeredShape {
        layers,
        width,
        edges,
    }
}

fn bench_min_crossing_layer(c: &mut Criterion) {
    let mut group = c.benchmark_group("min_crossing_layer");

    for width in [16usize, 64, 256] {
        let (g, layering) = build_layered_shape(4, width, 4).build();
        let fixed = AlternatingLayer::from_nodes(layering[0].iter().copied());
        let minimizer = LayerCrossingMinimizer::new(Sweep::Down, DIRECTION);

        group.bench_with_input(BenchmarkId::new("down", width), &layering[1], |b, free| {
            b.iter(|| {
                let result = minimizer
                    .min_crossing_layer(black_box(&g), black_box(&fixed), black_box(free))
                    .expect("valid layering");
                black_box(result.crossing_number);
            })
        });
    }

    group.finish();
}

fn bench_order(c: &mut Criterion) {
    let mut group = c.benchmark_group("order");
    group.measurement_time(Duration::from_secs(10));

    let cases = [
        ("layers_8_w16", 8usize, 16usize),
        ("layers_16_w32", 16usize, 32usize),
        ("layers_24_w64", 24usize, 64usize),
    ];

    for (name, layers, width) in cases {
        let (g, layering) = build_layered_shape(layers, width, 5).build();
        let options = SweepOptions::default();
        group.bench_with_input(BenchmarkId::new("sweep", name), &layering, |b, layering| {
            b.iter(|| {
                let result =
                    order(black_box(&g), DIRECTION, black_box(layering), &options).expect("valid");
                black_box(result.crossings);
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_min_crossing_layer, bench_order);
criterion_main!(benches);
