//! Benchmarks for raster-rs operations.
//!
//! Run with: `cargo bench`

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};

use raster_core::{ColorMatrix, PixelBuffer, PixelFormat, Point, Rectangle};
use raster_ops::{
    color_transform, copy_pixels, fill_rect, flood_fill, get_pixels, multiply_alpha, resize,
    set_format, unmultiply_alpha,
};

const SIZES: [u32; 3] = [64, 256, 1024];

fn gradient(size: u32, format: PixelFormat) -> PixelBuffer {
    let data = (0..size * size * 4).map(|i| (i % 251) as u8).collect();
    // Length is exactly size * size * 4.
    PixelBuffer::from_data(size, size, format, data).unwrap()
}

/// Benchmark whole-buffer and partial fills.
fn bench_fill(c: &mut Criterion) {
    let mut group = c.benchmark_group("fill");

    for size in SIZES {
        group.throughput(Throughput::Elements(size as u64 * size as u64));
        let mut buf = PixelBuffer::new(size, size, PixelFormat::Rgba32);
        let bounds = buf.view().bounds();
        let inset = Rectangle::new(1.0, 1.0, size as f64 - 2.0, size as f64 - 2.0);

        group.bench_function(BenchmarkId::new("whole_uniform", size), |b| {
            b.iter(|| fill_rect(&mut buf.view_mut(), bounds, black_box(0x7F7F7F7F)))
        });
        group.bench_function(BenchmarkId::new("whole_mixed", size), |b| {
            b.iter(|| fill_rect(&mut buf.view_mut(), bounds, black_box(0x11223344)))
        });
        group.bench_function(BenchmarkId::new("inset", size), |b| {
            b.iter(|| fill_rect(&mut buf.view_mut(), inset, black_box(0x11223344)))
        });
    }

    group.finish();
}

/// Benchmark lookup-table color transforms.
fn bench_color_transform(c: &mut Criterion) {
    let mut group = c.benchmark_group("color_transform");
    let invert = ColorMatrix::from_multipliers([-1.0, -1.0, -1.0, 1.0], [1.0, 1.0, 1.0, 0.0]);

    for size in SIZES {
        group.throughput(Throughput::Elements(size as u64 * size as u64));
        let mut buf = gradient(size, PixelFormat::Bgra32);
        let bounds = buf.view().bounds();
        group.bench_function(BenchmarkId::from_parameter(size), |b| {
            b.iter(|| color_transform(&mut buf.view_mut(), bounds, black_box(&invert)))
        });
    }

    group.finish();
}

/// Benchmark raw, transcoding and compositing blits.
fn bench_copy(c: &mut Criterion) {
    let mut group = c.benchmark_group("copy_pixels");

    for size in SIZES {
        group.throughput(Throughput::Elements(size as u64 * size as u64));
        let src = gradient(size, PixelFormat::Rgba32);
        let src_alpha = gradient(size, PixelFormat::Rgba32).with_transparent(true);
        let bounds = src.view().bounds();
        let mut same = PixelBuffer::new(size, size, PixelFormat::Rgba32);
        let mut other = PixelBuffer::new(size, size, PixelFormat::Argb32);

        group.bench_function(BenchmarkId::new("raw", size), |b| {
            b.iter(|| copy_pixels(&mut same.view_mut(), &src.view(), bounds, Point::ZERO, false))
        });
        group.bench_function(BenchmarkId::new("transcode", size), |b| {
            b.iter(|| copy_pixels(&mut other.view_mut(), &src.view(), bounds, Point::ZERO, false))
        });
        group.bench_function(BenchmarkId::new("over", size), |b| {
            b.iter(|| {
                copy_pixels(&mut same.view_mut(), &src_alpha.view(), bounds, Point::ZERO, true)
            })
        });
    }

    group.finish();
}

/// Benchmark pixel export and in-place reformatting.
fn bench_format(c: &mut Criterion) {
    let mut group = c.benchmark_group("format");

    for size in SIZES {
        group.throughput(Throughput::Bytes(size as u64 * size as u64 * 4));
        let mut buf = gradient(size, PixelFormat::Rgba32);
        let bounds = buf.view().bounds();

        group.bench_function(BenchmarkId::new("get_pixels_same", size), |b| {
            b.iter(|| get_pixels(&buf.view(), bounds, PixelFormat::Rgba32))
        });
        group.bench_function(BenchmarkId::new("get_pixels_bgra", size), |b| {
            b.iter(|| get_pixels(&buf.view(), bounds, PixelFormat::Bgra32))
        });
        group.bench_function(BenchmarkId::new("set_format_pair", size), |b| {
            b.iter(|| {
                set_format(&mut buf, PixelFormat::Argb32);
                set_format(&mut buf, PixelFormat::Rgba32);
            })
        });
        group.bench_function(BenchmarkId::new("premultiply_pair", size), |b| {
            b.iter(|| {
                multiply_alpha(&mut buf);
                unmultiply_alpha(&mut buf);
            })
        });
    }

    group.finish();
}

/// Benchmark bilinear resize.
fn bench_resize(c: &mut Criterion) {
    let mut group = c.benchmark_group("resize");
    let src = gradient(512, PixelFormat::Rgba32);

    for target in [256u32, 512, 1024] {
        group.throughput(Throughput::Elements(target as u64 * target as u64));
        group.bench_with_input(BenchmarkId::from_parameter(target), &target, |b, &t| {
            b.iter(|| resize(&src.view(), t, t))
        });
    }

    group.finish();
}

/// Benchmark flood fill of a whole uniform image.
fn bench_flood_fill(c: &mut Criterion) {
    let mut group = c.benchmark_group("flood_fill");

    for size in [64u32, 256] {
        group.throughput(Throughput::Elements(size as u64 * size as u64));
        let mut buf = PixelBuffer::new(size, size, PixelFormat::Rgba32);
        let mut color = 0u32;
        group.bench_function(BenchmarkId::from_parameter(size), |b| {
            b.iter(|| {
                // alternate colors so every pass refills the image
                color = if color == 0xFFFFFFFF { 0x000000FF } else { 0xFFFFFFFF };
                flood_fill(&mut buf.view_mut(), 0, 0, color)
            })
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_fill,
    bench_color_transform,
    bench_copy,
    bench_format,
    bench_resize,
    bench_flood_fill,
);
criterion_main!(benches);
