//! Implementations of `std::ops`.

use std::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

use super::Vector;

impl<T, const N: usize, L> Index<usize> for Vector<T, N, L> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl<T, const N: usize, L> IndexMut<usize> for Vector<T, N, L> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.0[index]
    }
}

// More general impl than what the derive generates.
impl<T, U, const N: usize, L> PartialEq<Vector<U, N, L>> for Vector<T, N, L>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &Vector<U, N, L>) -> bool {
        self.0 == other.0
    }
}

impl<T, const N: usize, L> Eq for Vector<T, N, L> where T: Eq {}

impl<T, U, const N: usize, L> PartialEq<[U; N]> for Vector<T, N, L>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &[U; N]) -> bool {
        self.0.eq(other)
    }
}

impl<T, U, const N: usize, L> PartialEq<Vector<U, N, L>> for [T; N]
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &Vector<U, N, L>) -> bool {
        *self == other.0
    }
}

impl<T, U, const N: usize, L> PartialEq<[U]> for Vector<T, N, L>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &[U]) -> bool {
        self.0.eq(other)
    }
}

/// Element-wise negation.
impl<T, const N: usize, L> Neg for Vector<T, N, L>
where
    T: Neg,
{
    type Output = Vector<T::Output, N, L>;

    fn neg(self) -> Self::Output {
        self.map(T::neg)
    }
}

/// Element-wise addition.
impl<T, const N: usize, L> Add<Vector<T, N, L>> for Vector<T, N, L>
where
    T: Add,
{
    type Output = Vector<T::Output, N, L>;

    fn add(self, rhs: Vector<T, N, L>) -> Self::Output {
        self.zip(rhs).map(|(l, r)| l + r)
    }
}

/// Element-wise addition.
impl<T, const N: usize, L> AddAssign<Vector<T, N, L>> for Vector<T, N, L>
where
    T: AddAssign,
{
    fn add_assign(&mut self, rhs: Vector<T, N, L>) {
        self.iter_mut()
            .zip(rhs.0)
            .for_each(|(lhs, rhs)| *lhs += rhs);
    }
}

/// Element-wise subtraction.
impl<T, const N: usize, L> Sub<Vector<T, N, L>> for Vector<T, N, L>
where
    T: Sub,
{
    type Output = Vector<T::Output, N, L>;

    fn sub(self, rhs: Vector<T, N, L>) -> Self::Output {
        self.zip(rhs).map(|(l, r)| l - r)
    }
}

/// Element-wise subtraction.
impl<T, const N: usize, L> SubAssign<Vector<T, N, L>> for Vector<T, N, L>
where
    T: SubAssign,
{
    fn sub_assign(&mut self, rhs: Vector<T, N, L>) {
        self.iter_mut()
            .zip(rhs.0)
            .for_each(|(lhs, rhs)| *lhs -= rhs);
    }
}

/// Element-wise multiplication.
impl<T, const N: usize, L> Mul<Vector<T, N, L>> for Vector<T, N, L>
where
    T: Mul,
{
    type Output = Vector<T::Output, N, L>;

    fn mul(self, rhs: Vector<T, N, L>) -> Self::Output {
        self.zip(rhs).map(|(a, b)| a * b)
    }
}

/// Element-wise multiplication.
impl<T, const N: usize, L> MulAssign<Vector<T, N, L>> for Vector<T, N, L>
where
    T: MulAssign,
{
    fn mul_assign(&mut self, rhs: Vector<T, N, L>) {
        self.iter_mut()
            .zip(rhs.0)
            .for_each(|(lhs, rhs)| *lhs *= rhs);
    }
}

// NB: supporting both vector-scalar and element-wise vector-vector multiplication rules out a more
// generic `Mul<U> for Vector<T, N, L> where T: Mul<U>`.

/// Vector-Scalar multiplication (scaling).
impl<T, const N: usize, L> Mul<T> for Vector<T, N, L>
where
    T: Mul + Copy,
{
    type Output = Vector<T::Output, N, L>;

    fn mul(self, rhs: T) -> Self::Output {
        self.map(|elem| elem * rhs)
    }
}

/// Vector-Scalar multiplication (scaling).
impl<T, const N: usize, L> MulAssign<T> for Vector<T, N, L>
where
    T: MulAssign + Copy,
{
    fn mul_assign(&mut self, rhs: T) {
        self.iter_mut().for_each(|lhs| *lhs *= rhs);
    }
}

/// Element-wise division.
impl<T, const N: usize, L> Div<Vector<T, N, L>> for Vector<T, N, L>
where
    T: Div,
{
    type Output = Vector<T::Output, N, L>;

    fn div(self, rhs: Vector<T, N, L>) -> Self::Output {
        self.zip(rhs).map(|(a, b)| a / b)
    }
}

/// Element-wise division.
impl<T, const N: usize, L> DivAssign<Vector<T, N, L>> for Vector<T, N, L>
where
    T: DivAssign,
{
    fn div_assign(&mut self, rhs: Vector<T, N, L>) {
        self.iter_mut()
            .zip(rhs.0)
            .for_each(|(lhs, rhs)| *lhs /= rhs);
    }
}

/// Vector-Scalar division.
impl<T, const N: usize, L> Div<T> for Vector<T, N, L>
where
    T: Div + Copy,
{
    type Output = Vector<T::Output, N, L>;

    fn div(self, rhs: T) -> Self::Output {
        self.map(|elem| elem / rhs)
    }
}

/// Vector-Scalar division.
impl<T, const N: usize, L> DivAssign<T> for Vector<T, N, L>
where
    T: DivAssign + Copy,
{
    fn div_assign(&mut self, rhs: T) {
        self.iter_mut().for_each(|lhs| *lhs /= rhs);
    }
}

// Scalar-Vector multiplication has to be spelled out per primitive, since `impl<T> Mul<Vector<T>>
// for T` is not allowed by the orphan rules.
macro_rules! scalar_mul_vector {
    ($($types:ty),+) => {
        $(
            /// Scalar-Vector multiplication (scaling).
            impl<const N: usize, L> Mul<Vector<$types, N, L>> for $types {
                type Output = Vector<$types, N, L>;

                #[inline]
                fn mul(self, rhs: Vector<$types, N, L>) -> Self::Output {
                    rhs * self
                }
            }
        )+
    };
}
scalar_mul_vector!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64);

#[cfg(test)]
mod tests {
    use crate::{vec2, vec3, Vec3d, Vec3i, Vector};

    #[test]
    fn additive_inverse() {
        let v = vec3(5, -6, 7);
        assert_eq!(v + -v, Vec3i::ZERO);
        assert_eq!(-v, [-5, 6, -7]);

        let mut w = v;
        w -= v;
        assert_eq!(w, Vec3i::ZERO);
        w += v;
        assert_eq!(w, v);
    }

    #[test]
    fn elementwise() {
        let a = vec2(5, 6);
        let b = vec2(7, 8);
        assert_eq!(a + b, [12, 14]);
        assert_eq!(a - b, [-2, -2]);
        assert_eq!(a * b, [35, 48]);
        assert_eq!(b / a, [1, 1]);

        let mut c = a;
        c *= b;
        assert_eq!(c, [35, 48]);
        c /= a;
        assert_eq!(c, b);
        c /= vec2(7, 2);
        assert_eq!(c, [1, 4]);
    }

    #[test]
    fn scalar() {
        let a: Vec3d = vec3(5.0, 6.0, 7.0);
        assert_eq!(a * 3.0, [15.0, 18.0, 21.0]);
        assert_eq!(3.0 * a, a * 3.0);
        assert_eq!(a / 2.0, [2.5, 3.0, 3.5]);
        assert_eq!(0.0 * a, Vector::<f64, 3>::ZERO);

        let mut b = a;
        b *= 2.0;
        assert_eq!(b, [10.0, 12.0, 14.0]);
        b /= 2.0;
        assert_eq!(b, a);

        // Integer division truncates, like the element type does.
        assert_eq!(vec2(5u32, 6) / 2, [2, 3]);
        assert_eq!(2u32 * vec2(5u32, 6), [10, 12]);
    }

    #[test]
    fn equality() {
        let a = vec2(5, 6);
        let b = vec2(7, 8);
        assert_eq!(a, a);
        assert_ne!(a, b);
        assert_eq!(a, [5, 6]);
        assert_eq!([5, 6], a);
        assert_eq!(a, [5, 6][..]);
        assert!(vec2(f32::NAN, 0.0) != vec2(f32::NAN, 0.0));
    }
}
