#![feature(test)]
extern crate test;
use shapegeom::common::{solve_cubic, solve_quadratic};
use test::Bencher;

#[bench]
fn bench_cubic_three_real(bb: &mut Bencher) {
    // (x - 1)(x - 2)(x - 3)
    bb.iter(|| {
        solve_cubic(
            test::black_box(1.0),
            test::black_box(-6.0),
            test::black_box(11.0),
            test::black_box(-6.0),
        )
    })
}

#[bench]
fn bench_cubic_one_real(bb: &mut Bencher) {
    // x³ + x + 1
    bb.iter(|| {
        solve_cubic(
            test::black_box(1.0),
            test::black_box(0.0),
            test::black_box(1.0),
            test::black_box(1.0),
        )
    })
}

#[bench]
fn bench_quadratic(bb: &mut Bencher) {
    bb.iter(|| {
        solve_quadratic(
            test::black_box(1.0),
            test::black_box(0.0),
            test::black_box(-4.0),
            test::black_box(0.0),
        )
    })
}
