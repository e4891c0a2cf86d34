use criterion::{black_box, criterion_group, criterion_main, Criterion};
use figdrift::pixelmatch::{PixelDiff, PixelMatch};
use figdrift::specs::{compare_specs, DesignSpecsBuilder};
use figdrift::visual::compare;
use figdrift::{Bitmap, FontDescriptor, LiveSpecs, NodeRef};

fn screenshot(width: u32, height: u32, shift: u32) -> Bitmap {
    Bitmap::from_fn(width, height, |x, y| {
        if ((x + shift) / 16 + y / 16) % 2 == 0 {
            [40, 80, 160, 255]
        } else {
            [250, 250, 250, 255]
        }
    })
}

fn bench_pixel_diff(c: &mut Criterion) {
    let a = screenshot(512, 512, 0);
    let b = screenshot(512, 512, 3);
    let matcher = PixelMatch::default();

    c.bench_function("pixelmatch_512", |bench| {
        bench.iter(|| matcher.diff(black_box(&a), black_box(&b), 0.1))
    });

    c.bench_function("compare_with_composite_512", |bench| {
        bench.iter(|| compare(black_box(&a), black_box(&b), 0.1).unwrap())
    });
}

fn bench_spec_compare(c: &mut Criterion) {
    let mut builder = DesignSpecsBuilder::new();
    for i in 0..200u32 {
        let node = NodeRef::new(format!("1:{i}"), format!("Layer {i}"));
        builder.add_color(&format!("#{:02x}{:02x}{:02x}", i, 255 - i, (i * 7) % 256), node.clone());
        builder.add_font(FontDescriptor::new("Inter", 10.0 + (i % 20) as f64, 400), node.clone());
        builder.add_spacing((i % 48) as f64, node);
    }
    let design = builder.build(Default::default());
    let live = LiveSpecs {
        colors: (0..100u32).map(|i| format!("#{:02x}{:02x}00", i * 2, i)).collect(),
        fonts: (0..10).map(|i| FontDescriptor::new("inter", 12.0 + i as f64, 400)).collect(),
        spacing: (0..24).map(|i| (i * 2) as f64).collect(),
        ..Default::default()
    };

    c.bench_function("compare_specs_200", |bench| {
        bench.iter(|| compare_specs(black_box(&design), black_box(&live)).unwrap())
    });
}

criterion_group!(benches, bench_pixel_diff, bench_spec_compare);
criterion_main!(benches);
