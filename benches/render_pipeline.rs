use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use fractal_canvas::{
    Colour, ExecutionMode, MandelbrotParams, PixelBuffer, SierpinskiParams, render_mandelbrot,
    render_sierpinski,
};

fn bench_mandelbrot(c: &mut Criterion) {
    let mut group = c.benchmark_group("mandelbrot_800x600");
    group.sample_size(10);

    for execution in [ExecutionMode::Serial, ExecutionMode::Parallel] {
        let params = MandelbrotParams::default().with_execution(execution);

        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{:?}", execution)),
            &params,
            |b, params| {
                let mut buffer = PixelBuffer::new(params.viewport.width, params.viewport.height);
                b.iter(|| render_mandelbrot(black_box(params), &mut buffer).unwrap());
            },
        );
    }

    group.finish();
}

fn bench_sierpinski(c: &mut Criterion) {
    let mut group = c.benchmark_group("sierpinski_512");

    for depth in [4, 8, 10] {
        let params = SierpinskiParams::new(512, depth);

        group.bench_with_input(BenchmarkId::from_parameter(depth), &params, |b, params| {
            let mut buffer = PixelBuffer::filled(512, 512, Colour::WHITE);
            b.iter(|| render_sierpinski(black_box(params), &mut buffer).unwrap());
        });
    }

    group.finish();
}

criterion_group!(benches, bench_mandelbrot, bench_sierpinski);
criterion_main!(benches);
