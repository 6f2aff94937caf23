use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use getpng::image_pipeline::{ConversionConfig, ImageToPngPipeline, PngCompression};
use image::{ImageFormat, Rgb, RgbImage};
use std::io::Cursor;

fn generate_input_image(width: u32, height: u32) -> Vec<u8> {
    let img = RgbImage::from_fn(width, height, |x, y| {
        Rgb([(x % 256) as u8, (y % 256) as u8, ((x + y) % 256) as u8])
    });
    let mut bytes = Vec::new();
    img.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .unwrap();
    bytes
}

fn benchmark_conversion_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("conversion_by_size");

    let sizes = vec![
        (100, 100, "100x100"),
        (500, 500, "500x500"),
        (1000, 1000, "1000x1000"),
    ];

    for (width, height, label) in sizes {
        let input = generate_input_image(width, height);

        group.bench_with_input(BenchmarkId::from_parameter(label), &input, |b, data| {
            let config = ConversionConfig::default();
            let pipeline = ImageToPngPipeline::new(config);

            b.iter(|| {
                let mut output = Cursor::new(Vec::new());
                let _ = pipeline.convert(black_box(data), &mut output);
            });
        });
    }

    group.finish();
}

fn benchmark_compression_levels(c: &mut Criterion) {
    let mut group = c.benchmark_group("compression_levels");
    let input = generate_input_image(500, 500);

    let compressions = vec![
        (PngCompression::Fast, "fast"),
        (PngCompression::Default, "default"),
        (PngCompression::Best, "best"),
    ];

    for (compression, label) in compressions {
        group.bench_with_input(BenchmarkId::from_parameter(label), &input, |b, data| {
            let config = ConversionConfig::builder().compression(compression).build();
            let pipeline = ImageToPngPipeline::new(config);

            b.iter(|| {
                let mut output = Cursor::new(Vec::new());
                let _ = pipeline.convert(black_box(data), &mut output);
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_conversion_sizes,
    benchmark_compression_levels
);
criterion_main!(benches);
