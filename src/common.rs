//! Common mathematical operations

use arrayvec::ArrayVec;

use crate::log::debug;
use crate::{Point, Vec2};

/// Tolerance on the parametric coefficients of a segment intersection.
///
/// Solutions within `[-SEGMENT_PARAM_TOLERANCE, 1 + SEGMENT_PARAM_TOLERANCE]`
/// count as hits, so crossings that land exactly on an endpoint are not lost
/// to rounding.
pub const SEGMENT_PARAM_TOLERANCE: f64 = 0.001;

/// Largest imaginary part for which a cubic root is treated as real.
pub const ROOT_IMAGINARY_THRESHOLD: f64 = 1e-7;

/// Lengths at or below this are treated as zero when normalizing.
pub const DEGENERATE_LENGTH: f64 = 1e-12;

/// Defines a trait that chooses between libstd or libm implementations of float methods.
macro_rules! define_float_funcs {
    ($(
        fn $name:ident(self $(,$arg:ident: $arg_ty:ty)*) -> $ret:ty
        => $lname:ident;
    )+) => {
        #[cfg(not(feature = "std"))]
        pub(crate) trait FloatFuncs : Sized {
            $(fn $name(self $(,$arg: $arg_ty)*) -> $ret;)+
        }

        #[cfg(not(feature = "std"))]
        impl FloatFuncs for f64 {
            $(fn $name(self $(,$arg: $arg_ty)*) -> $ret {
                #[cfg(feature = "libm")]
                return libm::$lname(self $(,$arg as _)*);

                #[cfg(not(feature = "libm"))]
                compile_error!("shapegeom requires either the `std` or `libm` feature")
            })+
        }
    }
}

define_float_funcs! {
    fn abs(self) -> Self => fabs;
    fn acos(self) -> Self => acos;
    fn atan(self) -> Self => atan;
    fn atan2(self, other: Self) -> Self => atan2;
    fn cbrt(self) -> Self => cbrt;
    fn cos(self) -> Self => cos;
    fn sin(self) -> Self => sin;
    fn sqrt(self) -> Self => sqrt;
}

/// One root of a cubic equation, as a complex number.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CubicRoot {
    /// The real component.
    pub re: f64,
    /// The imaginary component.
    pub im: f64,
}

impl CubicRoot {
    #[inline]
    const fn real(re: f64) -> CubicRoot {
        CubicRoot { re, im: 0.0 }
    }

    /// Is the imaginary part small enough for this root to count as real?
    #[inline]
    pub fn is_real(self) -> bool {
        self.im.abs() < ROOT_IMAGINARY_THRESHOLD
    }
}

/// Find the roots of `a x² + b x + c = val`.
///
/// Returns nothing when the discriminant is negative, and otherwise both
/// roots `(-b + √D) / 2a` and `(-b - √D) / 2a`, in that order. A double
/// root is reported twice.
///
/// When `a` is zero the equation is linear and its single root is returned
/// (or nothing, if `b` is zero as well).
///
/// # Examples
///
/// ```
/// use shapegeom::common::solve_quadratic;
///
/// let roots = solve_quadratic(1.0, 0.0, -4.0, 0.0);
/// assert_eq!(roots.as_slice(), &[2.0, -2.0]);
/// ```
pub fn solve_quadratic(a: f64, b: f64, c: f64, val: f64) -> ArrayVec<f64, 2> {
    let mut result = ArrayVec::new();
    let c = c - val;
    if a == 0.0 {
        let root = -c / b;
        if root.is_finite() {
            result.push(root);
        }
        return result;
    }
    let disc = b * b - 4.0 * a * c;
    if disc < 0.0 {
        return result;
    }
    let sqrt_disc = disc.sqrt();
    let denom = 2.0 * a;
    result.push((-b + sqrt_disc) / denom);
    result.push((-b - sqrt_disc) / denom);
    result
}

/// Find the roots of `a x³ + b x² + c x + d = 0`, using Cardano's method.
///
/// Roots are returned as complex numbers. The sign of the depressed cubic's
/// discriminant selects one of three regimes:
///
/// * positive: one real root and a complex conjugate pair,
/// * zero: three real roots, at least two of them equal,
/// * negative: three distinct real roots, found with the trigonometric form.
///
/// A vanishing leading coefficient degrades to the quadratic (or linear)
/// equation, and fewer roots are returned.
///
/// See: <http://en.wikipedia.org/wiki/Cubic_function#The_nature_of_the_roots>
pub fn solve_cubic(a: f64, b: f64, c: f64, d: f64) -> ArrayVec<CubicRoot, 3> {
    let mut result = ArrayVec::new();
    let b_n = b / a;
    let c_n = c / a;
    let d_n = d / a;
    if !(b_n.is_finite() && c_n.is_finite() && d_n.is_finite()) {
        debug!(leading = a, "cubic leading coefficient vanishes, solving lower degree");
        solve_lower_degree(b, c, d, &mut result);
        return result;
    }
    let (b, c, d) = (b_n, c_n, d_n);

    let q = (3.0 * c - b * b) / 9.0;
    let r = (-(27.0 * d) + b * (9.0 * c - 2.0 * (b * b))) / 54.0;
    let disc = q * q * q + r * r;
    let term1 = b / 3.0;

    if disc > 0.0 {
        let sqrt_disc = disc.sqrt();
        // `cbrt` is the real, sign-preserving cube root.
        let s = (r + sqrt_disc).cbrt();
        let t = (r - sqrt_disc).cbrt();
        let re = -(term1 + (s + t) / 2.0);
        let im = 3.0_f64.sqrt() * (s - t) / 2.0;
        result.push(CubicRoot::real(-term1 + s + t));
        result.push(CubicRoot { re, im });
        result.push(CubicRoot { re, im: -im });
        return result;
    }

    if disc == 0.0 {
        let r13 = r.cbrt();
        result.push(CubicRoot::real(-term1 + 2.0 * r13));
        result.push(CubicRoot::real(-(r13 + term1)));
        result.push(CubicRoot::real(-(r13 + term1)));
        return result;
    }

    // Three distinct real roots; q < 0 here.
    let q = -q;
    let theta = (r / (q * q * q).sqrt()).acos();
    let r13 = 2.0 * q.sqrt();
    for k in 0..3 {
        let phase = (theta + 2.0 * core::f64::consts::PI * k as f64) / 3.0;
        result.push(CubicRoot::real(-term1 + r13 * phase.cos()));
    }
    result
}

fn solve_lower_degree(a: f64, b: f64, c: f64, result: &mut ArrayVec<CubicRoot, 3>) {
    if a == 0.0 {
        let root = -c / b;
        if root.is_finite() {
            result.push(CubicRoot::real(root));
        }
        return;
    }
    let disc = b * b - 4.0 * a * c;
    let denom = 2.0 * a;
    if disc < 0.0 {
        let re = -b / denom;
        let im = (-disc).sqrt() / denom;
        result.push(CubicRoot { re, im });
        result.push(CubicRoot { re, im: -im });
    } else {
        let sqrt_disc = disc.sqrt();
        result.push(CubicRoot::real((-b + sqrt_disc) / denom));
        result.push(CubicRoot::real((-b - sqrt_disc) / denom));
    }
}

/// The median of three values.
#[allow(clippy::float_cmp)]
pub fn mid_of_three(a: f64, b: f64, c: f64) -> f64 {
    if (b <= a && a <= c) || (c <= a && a <= b) {
        a
    } else if (a <= b && b <= c) || (c <= b && b <= a) {
        b
    } else {
        c
    }
}

/// The interior angle at `a` of the triangle `abc`, from the law of cosines.
pub fn triangle_angle(a: Point, b: Point, c: Point) -> f64 {
    let side_a = b.distance(c);
    let side_b = a.distance(c);
    let side_c = a.distance(b);
    ((side_b * side_b + side_c * side_c - side_a * side_a) / (2.0 * side_b * side_c)).acos()
}

/// Rotation, in radians, that turns the downward y axis onto `disp`.
///
/// This is `atan2(disp.y, disp.x) - π/2`, the convention used to orient
/// shapes such as arrowheads along an edge.
#[inline]
pub fn angle_from_displacement(disp: Vec2) -> f64 {
    disp.y.atan2(disp.x) - core::f64::consts::FRAC_PI_2
}
