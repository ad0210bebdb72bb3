#![allow(missing_docs)]

use std::hint::black_box;
use criterion::{criterion_group, criterion_main, Criterion};
use gauntlet_di::{Container, ContainerBuilder};

fn container() -> Container {
    let mut builder = ContainerBuilder::new();
    builder
        .register_fn("leaf", [], Leaf::default).unwrap()
        .register_fn("branch", ["leaf"], |leaf: Leaf| Branch(leaf)).unwrap()
        .register_fn("trunk", ["left", "right"], |left: Branch, right: Branch| Trunk(left, right)).unwrap()
        .register_fn("tree", ["trunk", "leaf"], |trunk: Trunk, leaf: Leaf| Tree(trunk, leaf)).unwrap();
    builder.build()
}

fn benchmark(c: &mut Criterion) {
    let container = container();

    c.bench_function("leaf", |b| b.iter(
        || black_box(container.get::<Leaf>().unwrap())
    ));
    c.bench_function("tree", |b| b.iter(
        || black_box(container.get::<Tree>().unwrap())
    ));
    c.bench_function("validate", |b| b.iter(
        || black_box(container.validate().unwrap())
    ));
}

criterion_group!(benches, benchmark);
criterion_main!(benches);

#[derive(Default, Clone, Debug)]
struct Leaf(#[allow(dead_code)] u64);

#[derive(Clone, Debug)]
struct Branch(#[allow(dead_code)] Leaf);

#[derive(Clone, Debug)]
struct Trunk(#[allow(dead_code)] Branch, #[allow(dead_code)] Branch);

#[derive(Clone, Debug)]
struct Tree(#[allow(dead_code)] Trunk, #[allow(dead_code)] Leaf);
