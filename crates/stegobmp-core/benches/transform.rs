use criterion::{criterion_group, criterion_main, Criterion};
use stegobmp_core::bitmap::{BmpImage, Rect, Rotation, Size};

pub fn crop_and_rotate(c: &mut Criterion) {
    let image = BmpImage::new(Size::new(1024, 768)).expect("Cannot create image");

    c.bench_function("Crop", |b| {
        b.iter(|| {
            image
                .crop(Rect::new(100, 100, 640, 480))
                .expect("Cannot crop image")
        })
    });

    c.bench_function("Rotate Clockwise 90", |b| {
        b.iter(|| {
            image
                .rotate(Rotation::Clockwise90)
                .expect("Cannot rotate image")
        })
    });
}

criterion_group!(benches, crop_and_rotate);
criterion_main!(benches);
