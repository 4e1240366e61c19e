//! 4x4 homogeneous transform builders.
//!
//! All matrices here act on column vectors: a point `p` is transformed by computing `m * p` with
//! `p` extended to 4 dimensions (`w = 1` for points, `w = 0` for directions). The free functions
//! [`rotate`] and [`translate`] *left-multiply* their input, so the new transform is applied after
//! the existing one.

use crate::{traits::Float, Mat4, Matrix, Vec3};

impl<T: Float> Matrix<T, 4, 4> {
    /// Creates a matrix rotating by `angle` radians around `axis`, following Rodrigues' rotation
    /// formula.
    ///
    /// `axis` is used as-is; it needs to be normalized for the result to be a pure rotation. A zero
    /// `angle` always yields the identity matrix, even for a zero `axis`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use cml::*;
    /// # use approx::assert_abs_diff_eq;
    /// let quarter = std::f64::consts::FRAC_PI_2;
    /// let rot = Mat4::rotation(quarter, Vec3d::Z);
    /// assert_abs_diff_eq!(rot * Vec4d::X, Vec4d::Y, epsilon = 1e-12);
    /// ```
    pub fn rotation<L>(angle: T, axis: Vec3<T, L>) -> Self {
        let [x, y, z] = axis.into_array();
        let (s, c) = angle.sin_cos();
        let t = T::ONE - c;
        let (tx, ty, tz) = (t * x, t * y, t * z);
        let (txy, txz, tyz) = (tx * y, tx * z, ty * z);
        let (sx, sy, sz) = (s * x, s * y, s * z);
        let (o, l) = (T::ZERO, T::ONE);

        #[rustfmt::skip]
        let rotation = Matrix::from_rows([
            [c + tx * x, txy - sz,   txz + sy,   o],
            [txy + sz,   c + ty * y, tyz - sx,   o],
            [txz - sy,   tyz + sx,   c + tz * z, o],
            [o,          o,          o,          l],
        ]);
        rotation
    }

    /// Creates a matrix translating points by `offset`.
    ///
    /// The offset is stored in the last column.
    ///
    /// # Examples
    ///
    /// ```
    /// # use cml::*;
    /// let m = Mat4::translation(vec3(1.0, 2.0, 3.0));
    /// assert_eq!(m * vec4(0.0, 0.0, 0.0, 1.0), vec4(1.0, 2.0, 3.0, 1.0));
    /// // Directions are not affected.
    /// assert_eq!(m * Vec4d::X, Vec4d::X);
    /// ```
    pub fn translation<L>(offset: Vec3<T, L>) -> Self {
        let [x, y, z] = offset.into_array();
        let (o, l) = (T::ZERO, T::ONE);

        #[rustfmt::skip]
        let translation = Matrix::from_rows([
            [l, o, o, x],
            [o, l, o, y],
            [o, o, l, z],
            [o, o, o, l],
        ]);
        translation
    }
}

/// Applies a rotation by `angle` radians around `axis` after `matrix`.
///
/// Returns `Mat4::rotation(angle, axis) * matrix`. See [`Matrix::rotation`].
///
/// # Examples
///
/// ```
/// # use cml::{transform::rotate, *};
/// let m = Mat4::<f64>::identity();
/// assert_eq!(rotate(m, 0.0, vec3(0.0, 0.0, 0.0)), m);
/// ```
pub fn rotate<T: Float, L>(matrix: Mat4<T>, angle: T, axis: Vec3<T, L>) -> Mat4<T> {
    log::trace!("rotate: angle={angle:?}, axis={:?}", axis.as_array());
    Matrix::rotation(angle, axis) * matrix
}

/// Applies a translation by `offset` after `matrix`.
///
/// Returns `Mat4::translation(offset) * matrix`. See [`Matrix::translation`].
pub fn translate<T: Float, L>(matrix: Mat4<T>, offset: Vec3<T, L>) -> Mat4<T> {
    log::trace!("translate: offset={:?}", offset.as_array());
    Matrix::translation(offset) * matrix
}

/// Creates a view matrix for a camera at `eye` looking towards `center`, with `up` pointing
/// roughly upwards.
///
/// The camera basis is built from `f = normalize(center - eye)`, `s = normalize(f × up)` and
/// `u = s × f`. Row `i` of the first three rows holds `[s[i], u[i], -f[i], 0]`, and the
/// translation terms `[-s·eye, -u·eye, f·eye, 1]` form the *last row*. This is the transpose of
/// the usual column-vector view matrix, so transform row vectors with it, or transpose it before
/// multiplying a column vector.
///
/// Degenerate input (`eye == center`, or `up` parallel to the view direction) is not rejected; it
/// produces NaN elements.
///
/// # Examples
///
/// ```
/// # use cml::{transform::look_at, *};
/// let view = look_at(Vec3d::ZERO, -Vec3d::Z, Vec3d::Y);
/// assert_eq!(view, Mat4::<f64>::identity());
/// ```
pub fn look_at<T: Float, L>(eye: Vec3<T, L>, center: Vec3<T, L>, up: Vec3<T, L>) -> Mat4<T> {
    log::trace!(
        "look_at: eye={:?}, center={:?}, up={:?}",
        eye.as_array(),
        center.as_array(),
        up.as_array(),
    );

    let eye: Vec3<T, T> = eye.into_array().into();
    let center: Vec3<T, T> = center.into_array().into();
    let up: Vec3<T, T> = up.into_array().into();

    let view = center - eye;
    if view.length_sq() == T::ZERO {
        log::debug!("look_at: eye and center coincide at {:?}", eye.as_array());
    }
    let f = view.normalized();
    let side = f.cross(up);
    if side.length_sq() == T::ZERO {
        log::debug!(
            "look_at: up vector {:?} is parallel to the view direction",
            up.as_array()
        );
    }
    let s = side.normalized();
    let u = s.cross(f);

    let [sx, sy, sz] = s.into_array();
    let [ux, uy, uz] = u.into_array();
    let [fx, fy, fz] = f.into_array();
    let o = T::ZERO;

    #[rustfmt::skip]
    let view_matrix = Matrix::from_rows([
        [sx,          ux,          -fx,       o],
        [sy,          uy,          -fy,       o],
        [sz,          uz,          -fz,       o],
        [-s.dot(eye), -u.dot(eye), f.dot(eye), T::ONE],
    ]);
    view_matrix
}

/// Creates a perspective projection matrix.
///
/// `fovy` is the vertical field of view in radians, `aspect` the width-to-height ratio of the
/// viewport, and `near`/`far` the distances to the clipping planes.
///
/// With `f = 1 / tan(fovy / 2)`, the result holds `f / aspect` and `f` on the first two diagonal
/// elements, `(far + near) / (near - far)` at `(2, 2)`, `-1` at `(2, 3)` and
/// `2 * far * near / (near - far)` at `(3, 2)`. Everything else is zero.
///
/// # Examples
///
/// ```
/// # use cml::{transform::perspective, units::radians, *};
/// let proj = perspective(radians(90.0f64), 2.0, 1.0, 3.0);
/// assert_eq!(proj[(2, 3)], -1.0);
/// assert_eq!(proj[(3, 2)], -3.0);
/// ```
pub fn perspective<T: Float>(fovy: T, aspect: T, near: T, far: T) -> Mat4<T> {
    log::trace!("perspective: fovy={fovy:?}, aspect={aspect:?}, near={near:?}, far={far:?}");

    let two = T::ONE + T::ONE;
    let f = T::ONE / (fovy / two).tan();
    let o = T::ZERO;

    #[rustfmt::skip]
    let projection = Matrix::from_rows([
        [f / aspect, o, o,                                 o],
        [o,          f, o,                                 o],
        [o,          o, (far + near) / (near - far),       -T::ONE],
        [o,          o, (two * far * near) / (near - far), o],
    ]);
    projection
}

#[cfg(test)]
mod tests {
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

    use approx::{assert_abs_diff_eq, assert_relative_eq};

    use super::*;
    use crate::{mat, vec3, vec4, Mat4d, Vec3d, Vec4d, Vec4f};

    #[test]
    fn zero_rotation_is_identity() {
        let m = Mat4d::from_fn(|r, c| (c + r * 4) as f64);
        assert_eq!(Mat4d::rotation(0.0, Vec3d::ZERO), Mat4d::identity());
        assert_eq!(rotate(m, 0.0, vec3(0.0, 0.0, 0.0)), m);
        assert_eq!(rotate(m, 0.0, Vec3d::X), m);
    }

    #[test]
    fn rotation_elements() {
        let m = Mat4d::rotation(FRAC_PI_2, Vec3d::Z);
        #[rustfmt::skip]
        assert_abs_diff_eq!(m, mat![
            0.0, -1.0, 0.0, 0.0;
            1.0,  0.0, 0.0, 0.0;
            0.0,  0.0, 1.0, 0.0;
            0.0,  0.0, 0.0, 1.0;
        ], epsilon = 1e-12);

        // Rotating about X maps Y onto Z.
        let v = Mat4d::rotation(FRAC_PI_2, Vec3d::X) * Vec4d::Y;
        assert_abs_diff_eq!(v, Vec4d::Z, epsilon = 1e-12);

        // Rotations preserve lengths.
        let axis = vec3(1.0, 1.0, 1.0).normalized();
        let p = vec4(3.0, -1.0, 2.0, 0.0);
        let rotated = Mat4d::rotation(1.234, axis) * p;
        assert_relative_eq!(rotated.length(), p.length(), max_relative = 1e-12);
    }

    #[test]
    fn rotate_composes_on_the_left() {
        let quarter = Mat4d::rotation(FRAC_PI_4, Vec3d::Y);
        let twice = rotate(quarter, FRAC_PI_4, Vec3d::Y);
        assert_abs_diff_eq!(twice, Mat4d::rotation(FRAC_PI_2, Vec3d::Y), epsilon = 1e-12);

        let half = rotate(twice, FRAC_PI_2, Vec3d::Y);
        assert_abs_diff_eq!(half * Vec4d::X, -Vec4d::X, epsilon = 1e-12);
        assert_abs_diff_eq!(half, Mat4d::rotation(PI, Vec3d::Y), epsilon = 1e-12);
    }

    #[test]
    fn translation() {
        let t = Mat4d::translation(vec3(1.0, -2.0, 0.5));
        assert_eq!(t[(0, 3)], 1.0);
        assert_eq!(t[(1, 3)], -2.0);
        assert_eq!(t[(2, 3)], 0.5);
        assert_eq!(t[3], [0.0, 0.0, 0.0, 1.0]);
        assert_eq!(t * vec4(1.0, 1.0, 1.0, 1.0), vec4(2.0, -1.0, 1.5, 1.0));

        let moved = translate(t, vec3(1.0, 1.0, 1.0));
        assert_eq!(moved, Mat4d::translation(vec3(2.0, -1.0, 1.5)));
        assert_eq!(translate(Mat4d::identity(), Vec3d::ZERO), Mat4d::identity());
    }

    #[test]
    fn translation_f32() {
        let t = Mat4::<f32>::translation(vec3(1.0f32, 2.0, 3.0));
        let p = t * Vec4f::from([0.0, 0.0, 0.0, 1.0]);
        assert_eq!(p, [1.0, 2.0, 3.0, 1.0]);
    }

    #[test]
    fn look_at_layout() {
        let eye = vec3(1.0, 2.0, 3.0);
        let view = look_at(eye, eye - Vec3d::Z, Vec3d::Y);
        #[rustfmt::skip]
        assert_eq!(view, mat![
             1.0,  0.0, 0.0, 0.0;
             0.0,  1.0, 0.0, 0.0;
             0.0,  0.0, 1.0, 0.0;
            -1.0, -2.0, -3.0, 1.0;
        ]);

        // Looking down +X: f = X, s = f × up = Z, u = s × f = Y.
        let view = look_at(Vec3d::ZERO, Vec3d::X, Vec3d::Y);
        assert_eq!(view[0], [0.0, 0.0, -1.0, 0.0]);
        assert_eq!(view[1], [0.0, 1.0, 0.0, 0.0]);
        assert_eq!(view[2], [1.0, 0.0, 0.0, 0.0]);
        assert_eq!(view[3], [0.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn look_at_degenerate() {
        let eye = vec3(1.0, 1.0, 1.0);
        let view = look_at(eye, eye, Vec3d::Y);
        assert!(view[(0, 0)].is_nan());

        let view = look_at(Vec3d::ZERO, Vec3d::Y, Vec3d::Y);
        assert!(view[(0, 0)].is_nan());
        assert_eq!(view[(0, 3)], 0.0);
    }

    #[test]
    fn perspective_elements() {
        let p = perspective(FRAC_PI_2, 2.0, 1.0, 3.0);
        let f = 1.0 / (FRAC_PI_2 / 2.0).tan();
        assert_eq!(p[(0, 0)], f / 2.0);
        assert_eq!(p[(1, 1)], f);
        assert_eq!(p[(2, 2)], -2.0);
        assert_eq!(p[(2, 3)], -1.0);
        assert_eq!(p[(3, 2)], -3.0);
        assert_eq!(p[(3, 3)], 0.0);

        let nonzero = p.iter().filter(|&&e| e != 0.0).count();
        assert_eq!(nonzero, 5);
    }
}
