// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Decode benchmarks: positional vs metadata-driven reconciliation.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use driftcodec::{
    ByteReader, ByteWriter, Endian, LayoutNode, PrimitiveKind, SchemaDescriptorBuilder, Structure,
};
use std::sync::Arc;

fn descriptor() -> Arc<driftcodec::SchemaDescriptor> {
    let vec3 = Arc::new(
        SchemaDescriptorBuilder::new("Vector3")
            .namespace("UnityEngine")
            .field("x", PrimitiveKind::F32)
            .field("y", PrimitiveKind::F32)
            .field("z", PrimitiveKind::F32)
            .build(),
    );
    Arc::new(
        SchemaDescriptorBuilder::new("Particle")
            .field("id", PrimitiveKind::U64)
            .complex_field("position", Arc::clone(&vec3))
            .complex_field("velocity", vec3)
            .field("lifetime", PrimitiveKind::F32)
            .string_field("tag")
            .build(),
    )
}

fn sample_bytes() -> Vec<u8> {
    let mut w = ByteWriter::new(Endian::Little);
    w.write_u64(42);
    for v in [1.0f32, 2.0, 3.0, 0.5, 0.0, -0.5] {
        w.write_f32(v);
    }
    w.write_f32(9.5);
    w.write_string("spark");
    w.into_bytes()
}

fn layout() -> Vec<LayoutNode> {
    vec![
        LayoutNode::new(1, "id", 8),
        LayoutNode::new(1, "position", 12),
        LayoutNode::new(2, "x", 4),
        LayoutNode::new(2, "y", 4),
        LayoutNode::new(2, "z", 4),
        LayoutNode::new(1, "velocity", 12),
        LayoutNode::new(2, "x", 4),
        LayoutNode::new(2, "y", 4),
        LayoutNode::new(2, "z", 4),
        LayoutNode::new(1, "lifetime", 4),
        LayoutNode::new(1, "tag", 12),
    ]
}

fn bench_decode(c: &mut Criterion) {
    let desc = descriptor();
    let bytes = sample_bytes();
    let nodes = layout();

    c.bench_function("decode_positional", |b| {
        b.iter(|| {
            let mut instance = Structure::new(Arc::clone(&desc), 0);
            let mut reader = ByteReader::new(black_box(&bytes), Endian::Little);
            instance.decode(&mut reader).unwrap();
            black_box(instance)
        });
    });

    c.bench_function("decode_with_layout", |b| {
        b.iter(|| {
            let mut instance = Structure::new(Arc::clone(&desc), 0);
            let mut reader = ByteReader::new(black_box(&bytes), Endian::Little);
            instance
                .decode_with_layout(&mut reader, black_box(&nodes), 0)
                .unwrap();
            black_box(instance)
        });
    });

    c.bench_function("encode_canonical", |b| {
        let mut instance = Structure::new(Arc::clone(&desc), 0);
        let mut reader = ByteReader::new(&bytes, Endian::Little);
        instance.decode(&mut reader).unwrap();
        b.iter(|| {
            let mut writer = ByteWriter::new(Endian::Little);
            instance.encode(&mut writer).unwrap();
            black_box(writer.into_bytes())
        });
    });
}

criterion_group!(benches, bench_decode);
criterion_main!(benches);
