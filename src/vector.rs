use std::{array, fmt, hash, marker::PhantomData, slice};

use crate::{
    error::ShapeError,
    traits::{Cast, Float, Number},
    DefaultType, Matrix, One, Zero,
};

mod ops;
mod view;

/// A 1-dimensional vector.
pub type Vec1<T, L = DefaultType> = Vector<T, 1, L>;
/// A 2-dimensional vector.
pub type Vec2<T, L = DefaultType> = Vector<T, 2, L>;
/// A 3-dimensional vector.
pub type Vec3<T, L = DefaultType> = Vector<T, 3, L>;
/// A 4-dimensional vector.
pub type Vec4<T, L = DefaultType> = Vector<T, 4, L>;

/// A 2-dimensional vector with [`i32`] elements.
pub type Vec2i = Vec2<i32>;
/// A 2-dimensional vector with [`u32`] elements.
pub type Vec2u = Vec2<u32>;
/// A 2-dimensional vector with [`f32`] elements and [`f32`] lengths.
///
/// The `vec2` function always uses the default length type, so build these with `From` instead.
pub type Vec2f = Vec2<f32, f32>;
/// A 2-dimensional vector with [`f64`] elements.
pub type Vec2d = Vec2<f64>;
/// A 3-dimensional vector with [`i32`] elements.
pub type Vec3i = Vec3<i32>;
/// A 3-dimensional vector with [`u32`] elements.
pub type Vec3u = Vec3<u32>;
/// A 3-dimensional vector with [`f32`] elements and [`f32`] lengths.
///
/// The `vec3` function always uses the default length type, so build these with `From` instead.
///
/// ```
/// # use cml::*;
/// let v = Vec3f::from([3.0, 0.0, 4.0]);
/// let len: f32 = v.length();
/// assert_eq!(len, 5.0);
/// assert_eq!(v.normalized(), [0.6, 0.0, 0.8]);
/// ```
pub type Vec3f = Vec3<f32, f32>;
/// A 3-dimensional vector with [`f64`] elements.
pub type Vec3d = Vec3<f64>;
/// A 4-dimensional vector with [`i32`] elements.
pub type Vec4i = Vec4<i32>;
/// A 4-dimensional vector with [`u32`] elements.
pub type Vec4u = Vec4<u32>;
/// A 4-dimensional vector with [`f32`] elements and [`f32`] lengths.
///
/// The `vec4` function always uses the default length type, so build these with `From` instead.
pub type Vec4f = Vec4<f32, f32>;
/// A 4-dimensional vector with [`f64`] elements.
pub type Vec4d = Vec4<f64>;

/// An `N`-element column vector storing elements of type `T`.
///
/// `L` is the floating-point type that length-related results ([`Vector::length`],
/// [`Vector::normalized`], ...) are computed in. It defaults to [`f64`], so integer vectors get
/// exact-enough lengths without any annotations.
///
/// # Construction
///
/// - The freestanding [`vec1`], [`vec2`], [`vec3`] and [`vec4`] functions directly create vectors
///   from provided values.
/// - Vectors can be created from arrays using their [`From`] implementation, and from slices with
///   [`TryFrom`] (which fails with a [`ShapeError`] if the length is wrong).
/// - [`Vector::splat`] and [`Vector::from_fn`] fill a vector from a value or a closure.
/// - [`Vector::ZERO`] and the [`Default`] implementation create all-zero vectors.
/// - [`Vector::resize`] creates a vector of a different dimension from an existing one.
/// - For vectors with 2 to 4 dimensions, `Vector::X`, `Vector::Y`, `Vector::Z` and `Vector::W` can
///   be used to obtain unit vectors pointing in the given direction.
///
/// # Element Access
///
/// - The [`Index`] and [`IndexMut`] impls can be used just like on arrays. Indexing out of bounds
///   panics. [`Vector::get`] and [`Vector::get_mut`] return [`Option`]s instead.
/// - The first four elements can be read with [`x`], [`y`], [`z`], [`w`] (or their color aliases
///   [`r`], [`g`], [`b`], [`a`]), and modified through the `_mut` variants. Calling an accessor on a
///   vector that is too short is rejected at compile time.
/// - [`Vector::iter`] and [`Vector::iter_mut`] traverse the elements in order.
///
/// [`Index`]: std::ops::Index
/// [`IndexMut`]: std::ops::IndexMut
/// [`x`]: Vector::x
/// [`y`]: Vector::y
/// [`z`]: Vector::z
/// [`w`]: Vector::w
/// [`r`]: Vector::r
/// [`g`]: Vector::g
/// [`b`]: Vector::b
/// [`a`]: Vector::a
#[repr(transparent)]
pub struct Vector<T, const N: usize, L = DefaultType>([T; N], PhantomData<fn() -> L>);

#[cfg(feature = "bytemuck")]
unsafe impl<T: bytemuck::Zeroable, const N: usize, L> bytemuck::Zeroable for Vector<T, N, L> {}
#[cfg(feature = "bytemuck")]
unsafe impl<T: bytemuck::Pod, const N: usize, L: 'static> bytemuck::Pod for Vector<T, N, L> {}

impl<T: Zero + Copy, const N: usize, L> Vector<T, N, L> {
    /// A vector with each element initialized to 0.
    pub const ZERO: Self = Self([T::ZERO; N], PhantomData);
}

impl<T: Zero + One, L> Vector<T, 2, L> {
    /// A unit vector pointing in the X direction.
    pub const X: Self = Self([T::ONE, T::ZERO], PhantomData);
    /// A unit vector pointing in the Y direction.
    pub const Y: Self = Self([T::ZERO, T::ONE], PhantomData);
}

impl<T: Zero + One, L> Vector<T, 3, L> {
    /// A unit vector pointing in the X direction.
    pub const X: Self = Self([T::ONE, T::ZERO, T::ZERO], PhantomData);
    /// A unit vector pointing in the Y direction.
    pub const Y: Self = Self([T::ZERO, T::ONE, T::ZERO], PhantomData);
    /// A unit vector pointing in the Z direction.
    pub const Z: Self = Self([T::ZERO, T::ZERO, T::ONE], PhantomData);
}

impl<T: Zero + One, L> Vector<T, 4, L> {
    /// A unit vector pointing in the X direction.
    pub const X: Self = Self([T::ONE, T::ZERO, T::ZERO, T::ZERO], PhantomData);
    /// A unit vector pointing in the Y direction.
    pub const Y: Self = Self([T::ZERO, T::ONE, T::ZERO, T::ZERO], PhantomData);
    /// A unit vector pointing in the Z direction.
    pub const Z: Self = Self([T::ZERO, T::ZERO, T::ONE, T::ZERO], PhantomData);
    /// A unit vector pointing in the W direction.
    pub const W: Self = Self([T::ZERO, T::ZERO, T::ZERO, T::ONE], PhantomData);
}

impl<T, const N: usize, L> Vector<T, N, L> {
    /// Creates a vector with each element initialized to `elem`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use cml::*;
    /// let v: Vec3i = Vector::splat(2);
    /// assert_eq!(v, vec3(2, 2, 2));
    /// ```
    #[inline]
    pub fn splat(elem: T) -> Self
    where
        T: Copy,
    {
        Self([elem; N], PhantomData)
    }

    /// Creates a vector where each element is initialized by invoking a closure with its index.
    ///
    /// Analogous to [`array::from_fn`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use cml::*;
    /// let v: Vec3<usize> = Vector::from_fn(|i| i + 100);
    /// assert_eq!(v, [100, 101, 102]);
    /// ```
    pub fn from_fn<F>(cb: F) -> Self
    where
        F: FnMut(usize) -> T,
    {
        Self(array::from_fn(cb), PhantomData)
    }

    /// Applies a closure to each element, returning a new vector.
    ///
    /// The length type `L` is carried over unchanged.
    pub fn map<F, U>(self, f: F) -> Vector<U, N, L>
    where
        F: FnMut(T) -> U,
    {
        Vector(self.0.map(f), PhantomData)
    }

    /// Merges two [`Vector`]s into one that contains tuples of the original elements.
    pub fn zip<U>(self, other: Vector<U, N, L>) -> Vector<(T, U), N, L> {
        let mut iter = self.0.into_iter().zip(other.0);
        Vector::from_fn(|_| match iter.next() {
            Some(pair) => pair,
            None => unreachable!("both arrays have the same length"),
        })
    }

    /// Returns the number of elements in this vector (`N`).
    ///
    /// # Examples
    ///
    /// ```
    /// # use cml::*;
    /// assert_eq!(vec3(1, 2, 3).dimension(), 3);
    /// ```
    #[inline]
    pub const fn dimension(&self) -> usize {
        N
    }

    /// Returns a reference to the underlying elements as an array of length `N`.
    #[inline]
    pub const fn as_array(&self) -> &[T; N] {
        &self.0
    }

    /// Returns a mutable reference to the underlying elements as an array of length `N`.
    #[inline]
    pub fn as_mut_array(&mut self) -> &mut [T; N] {
        &mut self.0
    }

    /// Returns a reference to the underlying elements as a slice.
    #[inline]
    pub const fn as_slice(&self) -> &[T] {
        &self.0
    }

    /// Returns a mutable reference to the underlying elements as a slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.0
    }

    /// Converts this [`Vector`] into an `N`-element array.
    ///
    /// # Examples
    ///
    /// ```
    /// # use cml::*;
    /// assert_eq!(vec3(1, 2, 3).into_array(), [1, 2, 3]);
    /// ```
    #[inline]
    pub fn into_array(self) -> [T; N] {
        self.0
    }

    /// Returns an iterator over the elements, in index order.
    ///
    /// The iterator borrows `self`, so traversal can be restarted at any time.
    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.0.iter()
    }

    /// Returns an iterator over mutable references to the elements, in index order.
    ///
    /// # Examples
    ///
    /// ```
    /// # use cml::*;
    /// let mut v = vec3(1, 2, 3);
    /// for elem in v.iter_mut() {
    ///     *elem *= 10;
    /// }
    /// assert_eq!(v, [10, 20, 30]);
    /// ```
    #[inline]
    pub fn iter_mut(&mut self) -> slice::IterMut<'_, T> {
        self.0.iter_mut()
    }

    /// Returns a reference to the element at `index`, or [`None`] if out of bounds.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.0.get(index)
    }

    /// Returns a mutable reference to the element at `index`, or [`None`] if out of bounds.
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.0.get_mut(index)
    }

    /// Returns a vector with the contents of `self`, but a potentially different dimension.
    ///
    /// The first `min(N, M)` elements are carried over. If `M > N`, the trailing elements are
    /// initialized with [`T::ZERO`][Zero::ZERO]; if `M < N`, the trailing elements of `self` are
    /// dropped.
    ///
    /// # Examples
    ///
    /// ```
    /// # use cml::*;
    /// let v = vec3(1, 2, 3);
    /// assert_eq!(v.resize::<4>(), [1, 2, 3, 0]);
    /// assert_eq!(v.resize::<2>(), [1, 2]);
    /// ```
    pub fn resize<const M: usize>(self) -> Vector<T, M, L>
    where
        T: Zero,
    {
        let mut elems = self.0.into_iter();
        Vector::from_fn(|_| elems.next().unwrap_or(T::ZERO))
    }

    /// Computes the dot product between `self` and `other`.
    ///
    /// The sum is accumulated in the element type `T`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use cml::*;
    /// let a = vec3(1, 3, -5);
    /// let b = vec3(4, -2, -1);
    /// assert_eq!(a.dot(b), 3);
    /// ```
    pub fn dot(self, other: Self) -> T
    where
        T: Number,
    {
        self.0
            .into_iter()
            .zip(other.0)
            .fold(T::ZERO, |acc, (a, b)| acc + a * b)
    }

    /// Returns the squared length of this [`Vector`], computed in the length type `L`.
    ///
    /// Every element is converted to `L` *before* it is squared, so narrow integer element types
    /// cannot overflow here.
    ///
    /// # Examples
    ///
    /// ```
    /// # use cml::*;
    /// assert_eq!(vec2(4, 0).length_sq(), 16.0);
    /// assert_eq!(vec2(200u8, 0).length_sq(), 40000.0);
    /// ```
    pub fn length_sq(&self) -> L
    where
        T: Cast<L> + Copy,
        L: Number,
    {
        self.0.iter().fold(L::ZERO, |acc, &elem| {
            let elem: L = elem.cast();
            acc + elem * elem
        })
    }

    /// Returns the length of this [`Vector`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use cml::*;
    /// assert_eq!(vec2(3, 4).length(), 5.0);
    /// ```
    #[doc(alias = "norm", alias = "magnitude")]
    pub fn length(&self) -> L
    where
        T: Cast<L> + Copy,
        L: Float,
    {
        self.length_sq().sqrt()
    }

    /// Divides this vector by its length, resulting in a unit vector with elements of type `L`.
    ///
    /// A zero-length vector is not special-cased: the division by zero produces NaN elements.
    ///
    /// # Examples
    ///
    /// ```
    /// # use cml::*;
    /// let z = vec3(0, 0, 4).normalized();
    /// assert_eq!(z, vec3(0.0, 0.0, 1.0));
    ///
    /// let nan = vec2(0.0, 0.0).normalized();
    /// assert!(nan.iter().all(|e| e.is_nan()));
    /// ```
    pub fn normalized(self) -> Vector<L, N, L>
    where
        T: Cast<L> + Copy,
        L: Float,
    {
        let length = self.length();
        self.map(|elem| <T as Cast<L>>::cast(elem) / length)
    }

    /// Scales every element by `scalar`, producing a vector with elements of type `L`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use cml::*;
    /// assert_eq!(vec3(0, 1, 2).interpolated(0.5), vec3(0.0, 0.5, 1.0));
    /// ```
    pub fn interpolated(self, scalar: L) -> Vector<L, N, L>
    where
        T: Cast<L>,
        L: Number,
    {
        self.map(|elem| <T as Cast<L>>::cast(elem) * scalar)
    }

    /// Converts this vector into an `N`x1 column matrix with the same elements.
    ///
    /// # Examples
    ///
    /// ```
    /// # use cml::*;
    /// let col = vec2(7, 8).into_column();
    /// assert_eq!(col, mat![7; 8]);
    /// ```
    pub fn into_column(self) -> Matrix<T, N, 1> {
        Matrix::from_rows(self.0.map(|elem| [elem]))
    }
}

impl<T, L> Vector<T, 2, L> {
    /// Appends another value to the vector, yielding a vector with 3 dimensions.
    pub fn extend(self, value: T) -> Vector<T, 3, L> {
        let [x, y] = self.0;
        Vector([x, y, value], PhantomData)
    }

    /// Rotates `self` by 90° counterclockwise, returning `(-y, x)`.
    ///
    /// The result is always orthogonal to `self`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use cml::*;
    /// let v = vec2(5, 6);
    /// assert_eq!(v.perpendicular(), vec2(-6, 5));
    /// assert_eq!(v.dot(v.perpendicular()), 0);
    /// ```
    pub fn perpendicular(self) -> Self
    where
        T: std::ops::Neg<Output = T>,
    {
        let [x, y] = self.0;
        Self([-y, x], PhantomData)
    }
}

impl<T, L> Vector<T, 3, L> {
    /// Removes the last element of this vector, yielding a vector with 2 elements.
    pub fn truncate(self) -> Vector<T, 2, L> {
        let [x, y, _] = self.0;
        Vector([x, y], PhantomData)
    }

    /// Appends another value to the vector, yielding a vector with 4 dimensions.
    ///
    /// # Examples
    ///
    /// ```
    /// # use cml::*;
    /// let v = vec3(-1.0, 2.0, 3.5).extend(1.0);
    /// assert_eq!(v, vec4(-1.0, 2.0, 3.5, 1.0));
    /// ```
    pub fn extend(self, value: T) -> Vector<T, 4, L> {
        let [x, y, z] = self.0;
        Vector([x, y, z, value], PhantomData)
    }

    /// Computes the cross product of `self` and `other`.
    ///
    /// The result is perpendicular to both inputs. Swapping the arguments inverts its direction.
    ///
    /// # Examples
    ///
    /// ```
    /// # use cml::*;
    /// assert_eq!(Vec3i::X.cross(Vec3i::Y), Vec3i::Z);
    /// assert_eq!(Vec3i::Y.cross(Vec3i::X), -Vec3i::Z);
    /// ```
    pub fn cross(self, other: Self) -> Self
    where
        T: Number,
    {
        let [a1, a2, a3] = self.0;
        let [b1, b2, b3] = other.0;

        #[rustfmt::skip]
        let cross = [
            a2 * b3 - a3 * b2,
            a3 * b1 - a1 * b3,
            a1 * b2 - a2 * b1,
        ];
        Self(cross, PhantomData)
    }
}

impl<T, L> Vector<T, 4, L> {
    /// Removes the last element of this vector, yielding a vector with 3 elements.
    pub fn truncate(self) -> Vector<T, 3, L> {
        let [x, y, z, _] = self.0;
        Vector([x, y, z], PhantomData)
    }
}

impl<T: Clone, const N: usize, L> Clone for Vector<T, N, L> {
    #[inline]
    fn clone(&self) -> Self {
        Self(self.0.clone(), PhantomData)
    }
}

impl<T: Copy, const N: usize, L> Copy for Vector<T, N, L> {}

impl<T: hash::Hash, const N: usize, L> hash::Hash for Vector<T, N, L> {
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        self.0.hash(state);
    }
}

impl<T, const N: usize, L> Default for Vector<T, N, L>
where
    T: Default,
{
    #[inline]
    fn default() -> Self {
        Self::from_fn(|_| T::default())
    }
}

impl<T, const N: usize, L> From<[T; N]> for Vector<T, N, L> {
    #[inline]
    fn from(value: [T; N]) -> Self {
        Self(value, PhantomData)
    }
}

impl<T, const N: usize, L> From<Vector<T, N, L>> for [T; N] {
    #[inline]
    fn from(value: Vector<T, N, L>) -> Self {
        value.0
    }
}

impl<T: Copy, const N: usize, L> TryFrom<&[T]> for Vector<T, N, L> {
    type Error = ShapeError;

    /// Copies the elements of `slice`, which must hold exactly `N` values.
    fn try_from(slice: &[T]) -> Result<Self, Self::Error> {
        ShapeError::check_len(N, slice.len())?;
        Ok(Self::from_fn(|i| slice[i]))
    }
}

impl<T, const N: usize, L> IntoIterator for Vector<T, N, L> {
    type Item = T;
    type IntoIter = array::IntoIter<T, N>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a, T, const N: usize, L> IntoIterator for &'a Vector<T, N, L> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<'a, T, const N: usize, L> IntoIterator for &'a mut Vector<T, N, L> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter_mut()
    }
}

impl<T, const N: usize, L> fmt::Debug for Vector<T, N, L>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut tup = f.debug_tuple("");
        for elem in &self.0 {
            tup.field(elem);
        }
        tup.finish()
    }
}

/// Prints the elements separated by single spaces, on one line.
impl<T, const N: usize, L> fmt::Display for Vector<T, N, L>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, elem) in self.0.iter().enumerate() {
            if i != 0 {
                f.write_str(" ")?;
            }
            elem.fmt(f)?;
        }
        Ok(())
    }
}

impl<T, const N: usize, L> AsRef<[T]> for Vector<T, N, L> {
    #[inline]
    fn as_ref(&self) -> &[T] {
        &self.0
    }
}

impl<T, const N: usize, L> AsRef<[T; N]> for Vector<T, N, L> {
    #[inline]
    fn as_ref(&self) -> &[T; N] {
        &self.0
    }
}

impl<T, const N: usize, L> AsMut<[T]> for Vector<T, N, L> {
    #[inline]
    fn as_mut(&mut self) -> &mut [T] {
        &mut self.0
    }
}

impl<T, const N: usize, L> AsMut<[T; N]> for Vector<T, N, L> {
    #[inline]
    fn as_mut(&mut self) -> &mut [T; N] {
        &mut self.0
    }
}

/// Constructs a [`Vec1`] from its single element.
#[inline]
pub const fn vec1<T>(x: T) -> Vec1<T> {
    Vector([x], PhantomData)
}

/// Constructs a [`Vec2`] from its two elements.
#[inline]
pub const fn vec2<T>(x: T, y: T) -> Vec2<T> {
    Vector([x, y], PhantomData)
}

/// Constructs a [`Vec3`] from its three elements.
#[inline]
pub const fn vec3<T>(x: T, y: T, z: T) -> Vec3<T> {
    Vector([x, y, z], PhantomData)
}

/// Constructs a [`Vec4`] from its four elements.
#[inline]
pub const fn vec4<T>(x: T, y: T, z: T, w: T) -> Vec4<T> {
    Vector([x, y, z, w], PhantomData)
}
