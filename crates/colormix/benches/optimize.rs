use colormix::opt::Options;
use colormix::{ColorModel, Optimizer};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

const PALETTE: [&str; 6] = [
    "#ff0000", "#ffff00", "#0000ff", "#00ffff", "#ffffff", "#000000",
];

pub fn run_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("optimize");
    group.sample_size(20);

    for model in [ColorModel::Rgb, ColorModel::Cmyk] {
        group.bench_function(format!("{}-6-colors", model), |b| {
            b.iter(|| {
                let optimizer =
                    Optimizer::new(&PALETTE, "#6b8e23", model, Options::with_seed(1))
                        .expect("palette and target are well-formed");
                black_box(optimizer.run())
            })
        });
    }

    group.finish();
}

criterion_group!(benches, run_benchmarks);
criterion_main!(benches);
