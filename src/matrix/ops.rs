use std::ops::{Add, AddAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::{traits::Number, Matrix, Vector};

impl<T, const R: usize, const C: usize> Index<(usize, usize)> for Matrix<T, R, C> {
    type Output = T;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        &self.0[row][col]
    }
}

impl<T, const R: usize, const C: usize> IndexMut<(usize, usize)> for Matrix<T, R, C> {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        &mut self.0[row][col]
    }
}

/// Row access, so that `mat[row][col]` works.
impl<T, const R: usize, const C: usize> Index<usize> for Matrix<T, R, C> {
    type Output = [T; C];

    #[inline]
    fn index(&self, row: usize) -> &Self::Output {
        &self.0[row]
    }
}

impl<T, const R: usize, const C: usize> IndexMut<usize> for Matrix<T, R, C> {
    #[inline]
    fn index_mut(&mut self, row: usize) -> &mut Self::Output {
        &mut self.0[row]
    }
}

// More general `PartialEq` impl than what the derive generates.
impl<T, U, const R: usize, const C: usize> PartialEq<Matrix<U, R, C>> for Matrix<T, R, C>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &Matrix<U, R, C>) -> bool {
        self.0.eq(&other.0)
    }
}

impl<T, const R: usize, const C: usize> Eq for Matrix<T, R, C> where T: Eq {}

/// Element-wise negation.
impl<T, const R: usize, const C: usize> Neg for Matrix<T, R, C>
where
    T: Neg,
{
    type Output = Matrix<T::Output, R, C>;

    fn neg(self) -> Self::Output {
        self.map(T::neg)
    }
}

/// Element-wise addition.
impl<T, const R: usize, const C: usize> Add for Matrix<T, R, C>
where
    T: Add<Output = T> + Copy,
{
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Matrix::from_fn(|row, col| self.0[row][col] + rhs.0[row][col])
    }
}

impl<T, const R: usize, const C: usize> AddAssign for Matrix<T, R, C>
where
    T: AddAssign,
{
    fn add_assign(&mut self, rhs: Self) {
        self.iter_mut()
            .zip(rhs)
            .for_each(|(lhs, rhs)| *lhs += rhs);
    }
}

/// Element-wise subtraction.
impl<T, const R: usize, const C: usize> Sub for Matrix<T, R, C>
where
    T: Sub<Output = T> + Copy,
{
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Matrix::from_fn(|row, col| self.0[row][col] - rhs.0[row][col])
    }
}

impl<T, const R: usize, const C: usize> SubAssign for Matrix<T, R, C>
where
    T: SubAssign,
{
    fn sub_assign(&mut self, rhs: Self) {
        self.iter_mut()
            .zip(rhs)
            .for_each(|(lhs, rhs)| *lhs -= rhs);
    }
}

/// Matrix * Column Vector.
///
/// Each output element is the dot product of a row of the matrix with the vector.
impl<T, const R: usize, const C: usize, L> Mul<Vector<T, C, L>> for Matrix<T, R, C>
where
    T: Number,
{
    type Output = Vector<T, R, L>;

    fn mul(self, rhs: Vector<T, C, L>) -> Self::Output {
        Vector::from_fn(|row| (0..C).fold(T::ZERO, |acc, col| acc + self[(row, col)] * rhs[col]))
    }
}

/// Matrix * Matrix.
impl<T, const M: usize, const N: usize, const P: usize> Mul<Matrix<T, N, P>> for Matrix<T, M, N>
where
    T: Number,
{
    type Output = Matrix<T, M, P>;

    fn mul(self, rhs: Matrix<T, N, P>) -> Self::Output {
        Matrix::from_fn(|i, j| (0..N).fold(T::ZERO, |acc, k| acc + self[(i, k)] * rhs[(k, j)]))
    }
}

/// Matrix * Scalar.
impl<T, const R: usize, const C: usize> Mul<T> for Matrix<T, R, C>
where
    T: Number,
{
    type Output = Matrix<T, R, C>;

    fn mul(self, rhs: T) -> Self::Output {
        self.map(|elem| elem * rhs)
    }
}

/// Matrix * Scalar.
impl<T, const R: usize, const C: usize> MulAssign<T> for Matrix<T, R, C>
where
    T: MulAssign + Copy,
{
    fn mul_assign(&mut self, rhs: T) {
        self.iter_mut().for_each(|elem| *elem *= rhs);
    }
}

macro_rules! scalar_mul_matrix {
    ($($types:ty),+) => {
        $(
            /// Scalar * Matrix.
            impl<const R: usize, const C: usize> Mul<Matrix<$types, R, C>> for $types {
                type Output = Matrix<$types, R, C>;

                #[inline]
                fn mul(self, rhs: Matrix<$types, R, C>) -> Self::Output {
                    rhs * self
                }
            }
        )+
    };
}
scalar_mul_matrix!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64);

#[cfg(test)]
mod tests {
    use crate::{mat, vec2, vec3, Mat2, Mat3, Mat3x2, Vec3d};

    use super::*;

    #[test]
    fn mat_vec_mul() {
        let mat = mat![0, 1; 2, 3];
        let vec = vec2(4, 5);
        let out = mat * vec;
        assert_eq!(out, [4 * 0 + 5 * 1, 4 * 2 + 5 * 3]);

        #[rustfmt::skip]
        let c = mat![
            1.0, -1.0, 2.0;
            0.0, -3.0, 1.0;
        ];
        let x = vec3(2.0, 1.0, 0.0);
        assert_eq!(c * x, vec2(1.0, -3.0));
        // Treating the vector as a column matrix gives the same result.
        assert_eq!(Vector::from(c * x.into_column()), c * x);
    }

    #[test]
    fn mat_mat_mul() {
        #[rustfmt::skip]
        let a = mat![
             0,  4, -2;
            -4, -3,  0;
        ];
        #[rustfmt::skip]
        let b = mat![
            0,  1;
            1, -1;
            2,  3;
        ];
        let c = a * b;
        assert_eq!(
            c,
            mat![
                0 * 0 + 4 * 1 + -2 * 2, 0 * 1 + 4 * -1 + -2 * 3;
                -4 * 0 + -3 * 1 + 0 * 2, -4 * 1 + -3 * -1 + 0 * 3;
            ]
        );
        assert_eq!(c, mat![0, -10; -3, -1]);

        #[rustfmt::skip]
        let a = Matrix::from_rows([
            [1, 2],
            [3, 4],
            [5, 6],
            [7, 8],
        ]);
        let b = mat![9, 10, 11; 12, 13, 14];
        let c = a * b;
        assert_eq!(c[(0, 1)], a[(0, 0)] * b[(0, 1)] + a[(0, 1)] * b[(1, 1)]);
        assert_eq!(c[(2, 2)], a[(2, 0)] * b[(0, 2)] + a[(2, 1)] * b[(1, 2)]);
    }

    #[test]
    fn identity_law() {
        let d = Mat3::<f64>::from_fn(|row, col| (col + row * 3) as f64);
        let id = Mat3::<f64>::identity();
        assert_eq!(d * id, d);
        assert_eq!(id * d, d);

        let y: Vec3d = Vector::from_fn(|i| i as f64);
        assert_eq!(id * y, y);
        assert_eq!(d * y, vec3(5.0, 14.0, 23.0));

        let tall = Mat3x2::<i32>::from_fn(|row, col| row as i32 - col as i32);
        assert_eq!(Mat3::<i32>::identity() * tall, tall);
        assert_eq!(tall * Mat2::<i32>::identity(), tall);
    }

    #[test]
    fn add_sub_neg() {
        let a = mat![1, 2; 3, 4];
        let b = mat![10, 20; 30, 40];
        assert_eq!(a + b, mat![11, 22; 33, 44]);
        assert_eq!(b - a, mat![9, 18; 27, 36]);
        assert_eq!(-a, mat![-1, -2; -3, -4]);
        assert_eq!(a + -a, Mat2::<i32>::ZERO);

        let mut c = a;
        c += b;
        assert_eq!(c, a + b);
        c -= b;
        assert_eq!(c, a);
    }

    #[test]
    fn scalar() {
        let a: Mat2 = mat![1.0, -2.0; 0.5, 4.0];
        assert_eq!(a * 2.0, mat![2.0, -4.0; 1.0, 8.0]);
        assert_eq!(2.0 * a, a * 2.0);

        let mut b = a;
        b *= 0.5;
        assert_eq!(b, mat![0.5, -1.0; 0.25, 2.0]);

        assert_eq!(3u8 * mat![1u8, 2], mat![3, 6]);
    }

    #[test]
    fn equality() {
        let a = mat![1, 2; 3, 4];
        assert_eq!(a, a);
        assert_ne!(a, mat![1, 2; 3, 5]);
        assert!(mat![f64::NAN] != mat![f64::NAN]);
    }
}
