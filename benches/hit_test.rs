#![feature(test)]
extern crate test;
use shapegeom::{point_inside_polygon, unit_ngon_fit_to_square, NodeFrame, Point, QuadBez};
use test::Bencher;

#[bench]
fn bench_quadbez_distance(bb: &mut Bencher) {
    let q = QuadBez::new((0.0, 0.0), (50.0, -40.0), (100.0, 0.0));
    let p = Point::new(37.0, -11.0);
    bb.iter(|| test::black_box(q).distance_squared_to(test::black_box(p)))
}

#[bench]
fn bench_padded_octagon(bb: &mut Bencher) {
    let base = unit_ngon_fit_to_square(8, 0.0).unwrap();
    let frame = NodeFrame::new((100.0, 100.0), 60.0, 40.0).with_padding(4.0);
    let p = Point::new(128.0, 117.0);
    bb.iter(|| point_inside_polygon(test::black_box(p), &base, &frame))
}
