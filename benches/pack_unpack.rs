use std::hint::black_box;

use bitpack::{DescriptorSet, FieldCodec, FieldLayout};
use criterion::{Criterion, criterion_group, criterion_main};

const LE32: FieldLayout<4> = FieldLayout::from_pairs([(24, 8), (16, 8), (8, 8), (0, 8)]);

fn gen_set(field_count: u32) -> DescriptorSet {
    let width = 32 / field_count;
    let pairs: Vec<(u32, u32)> = (0..field_count)
        .rev()
        .map(|i| (i * (width + 3) + 1, width))
        .collect();

    DescriptorSet::from_pairs(&pairs).unwrap()
}

fn bench_descriptor_set(c: &mut Criterion) {
    let mut buffer = [0u8; 64];

    for &field_count in &[1u32, 4, 8, 32] {
        let set = gen_set(field_count);

        c.bench_function(&format!("set_{}_fields", field_count), |b| {
            b.iter(|| set.set(black_box(&mut buffer), black_box(0xA5C3_0F96)))
        });

        c.bench_function(&format!("get_{}_fields", field_count), |b| {
            b.iter(|| set.get(black_box(&buffer)))
        });
    }
}

fn bench_const_layout(c: &mut Criterion) {
    let mut buffer = [0u8; 4];

    c.bench_function("set_le32_layout", |b| {
        b.iter(|| LE32.set(black_box(&mut buffer), black_box(0xA5C3_0F96)))
    });

    c.bench_function("get_le32_layout", |b| b.iter(|| LE32.get(black_box(&buffer))));
}

criterion_group!(benches, bench_descriptor_set, bench_const_layout);
criterion_main!(benches);
