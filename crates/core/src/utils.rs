//! Geometric primitives used by the graphics state.
//!
//! Provides:
//! - `Point` and `Rect` aliases
//! - `Matrix`, a 2D affine transform in the row-vector convention
//! - point/rect transformation helpers

/// A 2D point (x, y).
pub type Point = (f64, f64);

/// A rectangle defined by (x0, y0, x1, y1) where (x0, y0) is typically bottom-left
/// and (x1, y1) is top-right.
pub type Rect = (f64, f64, f64, f64);

/// Small epsilon for floating-point comparisons.
pub const EPSILON: f64 = 1e-9;

/// Compares two floats for approximate equality.
#[inline]
pub fn approx_eq(a: f64, b: f64, epsilon: f64) -> bool {
    (a - b).abs() < epsilon
}

/// A 6-element affine transformation matrix (a, b, c, d, e, f).
///
/// Represents the 3x3 matrix
///
/// ```text
/// | a b 0 |
/// | c d 0 |
/// | e f 1 |
/// ```
///
/// applied to row vectors, so a point (x, y) maps to (ax + cy + e, bx + dy + f).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Matrix {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
    pub e: f64,
    pub f: f64,
}

/// Identity transformation matrix.
pub const MATRIX_IDENTITY: Matrix = Matrix {
    a: 1.0,
    b: 0.0,
    c: 0.0,
    d: 1.0,
    e: 0.0,
    f: 0.0,
};

impl Default for Matrix {
    fn default() -> Self {
        MATRIX_IDENTITY
    }
}

impl Matrix {
    /// Creates a matrix from its six coefficients.
    pub const fn new(a: f64, b: f64, c: f64, d: f64, e: f64, f: f64) -> Self {
        Self { a, b, c, d, e, f }
    }

    /// The identity transform.
    pub const fn identity() -> Self {
        MATRIX_IDENTITY
    }

    /// A pure translation by (tx, ty).
    pub const fn translating(tx: f64, ty: f64) -> Self {
        Self::new(1.0, 0.0, 0.0, 1.0, tx, ty)
    }

    /// A pure scale by (sx, sy).
    pub const fn scaling(sx: f64, sy: f64) -> Self {
        Self::new(sx, 0.0, 0.0, sy, 0.0, 0.0)
    }

    /// Builds a matrix from the `[a b c d e f]` operand order used by `cm`.
    pub const fn from_array(m: [f64; 6]) -> Self {
        Self::new(m[0], m[1], m[2], m[3], m[4], m[5])
    }

    /// Returns the coefficients in `[a b c d e f]` order.
    pub const fn to_array(&self) -> [f64; 6] {
        [self.a, self.b, self.c, self.d, self.e, self.f]
    }

    /// Multiplies two matrices: result = self × other.
    ///
    /// The result applies `self` first, then `other`. Concatenating a new
    /// matrix `N` onto a CTM `M` is therefore `N.multiply(&M)`.
    pub fn multiply(&self, other: &Matrix) -> Matrix {
        let (s, o) = (self, other);
        Matrix {
            a: s.a * o.a + s.b * o.c,
            b: s.a * o.b + s.b * o.d,
            c: s.c * o.a + s.d * o.c,
            d: s.c * o.b + s.d * o.d,
            e: s.e * o.a + s.f * o.c + o.e,
            f: s.e * o.b + s.f * o.d + o.f,
        }
    }

    /// Returns a value-independent duplicate of this matrix.
    #[inline]
    pub const fn copy(&self) -> Matrix {
        *self
    }

    /// Applies this matrix to a point.
    #[inline]
    pub fn apply_to_point(&self, p: Point) -> Point {
        apply_matrix_pt(self, p)
    }

    /// Length of the transformed unit x vector.
    ///
    /// Used to express user-space lengths such as line widths in device space.
    pub fn scaling_factor(&self) -> f64 {
        self.a.hypot(self.b)
    }

    /// True when the matrix is exactly the identity.
    pub fn is_identity(&self) -> bool {
        *self == MATRIX_IDENTITY
    }
}

/// Applies a matrix to a point.
pub fn apply_matrix_pt(m: &Matrix, v: Point) -> Point {
    let (x, y) = v;
    (m.a * x + m.c * y + m.e, m.b * x + m.d * y + m.f)
}

/// Applies a matrix to a rectangle.
///
/// Note that the result is not a rotated rectangle, but a rectangle with the same
/// orientation that tightly fits the outside of the rotated content.
pub fn apply_matrix_rect(m: &Matrix, rect: Rect) -> Rect {
    let (x0, y0, x1, y1) = rect;
    let corners = [
        apply_matrix_pt(m, (x0, y0)),
        apply_matrix_pt(m, (x1, y0)),
        apply_matrix_pt(m, (x1, y1)),
        apply_matrix_pt(m, (x0, y1)),
    ];
    bbox_of_points(&corners).unwrap_or((0.0, 0.0, 0.0, 0.0))
}

/// Bounding box of a set of points, or `None` for an empty set.
pub fn bbox_of_points(points: &[Point]) -> Option<Rect> {
    let (&(fx, fy), rest) = points.split_first()?;
    Some(rest.iter().fold((fx, fy, fx, fy), |(x0, y0, x1, y1), &(x, y)| {
        (x0.min(x), y0.min(y), x1.max(x), y1.max(y))
    }))
}

/// Intersection of two rectangles. An empty intersection collapses to a
/// zero-area rect at the overlap boundary.
pub fn intersect_rect(r0: Rect, r1: Rect) -> Rect {
    let x0 = r0.0.max(r1.0);
    let y0 = r0.1.max(r1.1);
    let x1 = r0.2.min(r1.2).max(x0);
    let y1 = r0.3.min(r1.3).max(y0);
    (x0, y0, x1, y1)
}
