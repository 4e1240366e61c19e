use std::{array, fmt, iter, slice};

use crate::{error::ShapeError, DefaultType, One, Vector, Zero};

mod ops;

/// A 2x2 matrix.
pub type Mat2<T = DefaultType> = Matrix<T, 2, 2>;
/// A 2x2 matrix with [`f32`] elements.
pub type Mat2f = Mat2<f32>;
/// A 2x2 matrix with [`f64`] elements.
pub type Mat2d = Mat2<f64>;
/// A 3x3 matrix.
pub type Mat3<T = DefaultType> = Matrix<T, 3, 3>;
/// A 3x3 matrix with [`f32`] elements.
pub type Mat3f = Mat3<f32>;
/// A 3x3 matrix with [`f64`] elements.
pub type Mat3d = Mat3<f64>;
/// A 4x4 matrix.
pub type Mat4<T = DefaultType> = Matrix<T, 4, 4>;
/// A 4x4 matrix with [`f32`] elements.
pub type Mat4f = Mat4<f32>;
/// A 4x4 matrix with [`f64`] elements.
pub type Mat4d = Mat4<f64>;

/// A matrix with 2 rows and 3 columns.
pub type Mat2x3<T = DefaultType> = Matrix<T, 2, 3>;
/// A matrix with 2 rows and 4 columns.
pub type Mat2x4<T = DefaultType> = Matrix<T, 2, 4>;
/// A matrix with 3 rows and 2 columns.
pub type Mat3x2<T = DefaultType> = Matrix<T, 3, 2>;
/// A matrix with 3 rows and 4 columns.
pub type Mat3x4<T = DefaultType> = Matrix<T, 3, 4>;
/// A matrix with 4 rows and 2 columns.
pub type Mat4x2<T = DefaultType> = Matrix<T, 4, 2>;
/// A matrix with 4 rows and 3 columns.
pub type Mat4x3<T = DefaultType> = Matrix<T, 4, 3>;

/// A matrix with a single column, holding the same elements as a [`Vector`] of length `N`.
pub type ColumnVec<T, const N: usize> = Matrix<T, N, 1>;

/// A row-major matrix with `R` rows and `C` columns, and element type `T`.
///
/// The elements are stored inline as `[[T; C]; R]`, so the element at `(row, col)` sits at
/// position `col + row * C` of [`Matrix::as_slice`].
///
/// # Construction
///
/// - The [`mat!`] macro writes a matrix out row by row, separating rows with `;`. Every row must
///   have the same length, which is checked at compile time.
/// - [`Matrix::from_rows`] wraps an array of row arrays.
/// - [`Matrix::from_fn`] will create each element by invoking a closure with its row and column.
/// - [`Matrix::ZERO`] (and the [`Default`] impl) create matrices full of zeroes, and
///   [`Matrix::identity`] creates square identity matrices.
/// - [`TryFrom<&[T]>`][TryFrom] copies a flat, row-major slice and fails with a [`ShapeError`]
///   if its length is not `R * C`.
///
/// # Element Access
///
/// [`Matrix`] implements the [`Index`] and [`IndexMut`] traits for tuples of `(usize, usize)`. The
/// first element of the tuple is the *row*, the second is the *column*, matching common
/// mathematical notation. Indices are 0-based. Indexing with a single `usize` yields a whole row,
/// so `mat[row][col]` also works.
///
/// ```
/// # use cml::*;
/// let mut mat = mat![0, 1];
/// mat[(0, 0)] = 4;
/// assert_eq!(mat[(0, 0)], 4);
/// assert_eq!(mat[0][1], 1);
/// ```
///
/// Indexing out of bounds will result in a panic, just like it does for slices. [`Matrix::get`] and
/// [`Matrix::get_mut`] return [`Option`]s instead and can be used for checked indexing:
///
/// ```
/// # use cml::*;
/// let mat = mat![0, 1];
/// assert_eq!(mat.get(0, 0), Some(&0));
/// assert_eq!(mat.get(0, 1), Some(&1));
/// assert_eq!(mat.get(0, 2), None);
/// ```
///
/// [`Index`]: std::ops::Index
/// [`IndexMut`]: std::ops::IndexMut
#[derive(Clone, Copy, Hash)]
#[repr(transparent)]
pub struct Matrix<T, const R: usize, const C: usize>([[T; C]; R]);

#[cfg(feature = "bytemuck")]
#[rustfmt::skip]
unsafe impl<T: bytemuck::Zeroable, const R: usize, const C: usize> bytemuck::Zeroable for Matrix<T, R, C> {}
#[cfg(feature = "bytemuck")]
unsafe impl<T: bytemuck::Pod, const R: usize, const C: usize> bytemuck::Pod for Matrix<T, R, C> {}

/// Creates a [`Matrix`] from a list of rows.
///
/// Elements within a row are separated by `,`, and rows are separated by `;`.
///
/// # Examples
///
/// ```
/// # use cml::*;
/// let m = mat![
///     1, 2, 3;
///     4, 5, 6;
/// ];
/// assert_eq!(m, Matrix::from_rows([[1, 2, 3], [4, 5, 6]]));
/// assert_eq!((Mat2x3::<i32>::ROWS, Mat2x3::<i32>::COLS), (2, 3));
/// ```
#[macro_export]
macro_rules! mat {
    ( $( $( $elem:expr ),+ );+ $(;)? ) => {
        $crate::Matrix::from_rows([ $( [ $( $elem ),+ ] ),+ ])
    };
}

impl<T, const R: usize, const C: usize> Matrix<T, R, C> {
    /// The number of rows (`R`).
    pub const ROWS: usize = R;
    /// The number of columns (`C`).
    pub const COLS: usize = C;

    /// Creates a [`Matrix`] from an array of rows.
    ///
    /// # Examples
    ///
    /// ```
    /// # use cml::*;
    /// let mat = Matrix::from_rows([
    ///     [0, 1],
    ///     [2, 3],
    /// ]);
    /// assert_eq!(mat[(1, 0)], 2);
    /// ```
    #[inline]
    pub const fn from_rows(rows: [[T; C]; R]) -> Self {
        Self(rows)
    }

    /// Creates a [`Matrix`] by invoking a closure with the position (row and column) of each element.
    ///
    /// Elements are produced in row-major order. This mirrors [`array::from_fn`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use cml::*;
    /// let mat = Matrix::from_fn(|row, col| row * 10 + col);
    /// assert_eq!(mat, mat![
    ///      0,  1,  2;
    ///     10, 11, 12;
    /// ]);
    /// ```
    pub fn from_fn<F>(mut cb: F) -> Self
    where
        F: FnMut(usize, usize) -> T,
    {
        Self(array::from_fn(|row| array::from_fn(|col| cb(row, col))))
    }

    /// Applies a closure to each element, returning a new matrix.
    ///
    /// # Examples
    ///
    /// ```
    /// # use cml::*;
    /// let mat = mat![0, 1, 2; 3, 4, 5];
    /// assert_eq!(mat.map(|i| i * 2), mat![0, 2, 4; 6, 8, 10]);
    /// ```
    pub fn map<F, U>(self, mut f: F) -> Matrix<U, R, C>
    where
        F: FnMut(T) -> U,
    {
        Matrix(self.0.map(|row| row.map(&mut f)))
    }

    /// Swaps the rows and columns of this matrix.
    ///
    /// # Examples
    ///
    /// ```
    /// # use cml::*;
    /// let mat = mat![
    ///     0, 1, 2;
    ///     3, 4, 5;
    /// ].transpose();
    /// assert_eq!(mat, mat![
    ///     0, 3;
    ///     1, 4;
    ///     2, 5;
    /// ]);
    /// ```
    pub fn transpose(self) -> Matrix<T, C, R>
    where
        T: Copy,
    {
        Matrix::from_fn(|row, col| self.0[col][row])
    }

    /// Returns a reference to the element at `(row, col)`, or [`None`] if out of bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// # use cml::*;
    /// let mat = mat![
    ///     0, 1, 2;
    ///     3, 4, 5;
    /// ];
    /// assert_eq!(mat.get(0, 0), Some(&0));
    /// assert_eq!(mat.get(1, 0), Some(&3));
    /// assert_eq!(mat.get(2, 0), None);
    /// ```
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        self.0.get(row).and_then(|row| row.get(col))
    }

    /// Returns a mutable reference to the element at `(row, col)`, or [`None`] if out of bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// # use cml::*;
    /// let mut mat = mat![
    ///     0, 1, 2;
    ///     3, 4, 5;
    /// ];
    /// if let Some(elem) = mat.get_mut(1, 0) {
    ///     *elem = 999;
    /// }
    /// if let Some(elem) = mat.get_mut(2, 0) {
    ///     *elem = 777;
    /// }
    /// assert_eq!(mat, mat![
    ///     0, 1, 2;
    ///     999, 4, 5;
    /// ]);
    /// ```
    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut T> {
        self.0.get_mut(row).and_then(|row| row.get_mut(col))
    }

    /// Returns the elements as a flat slice in row-major order.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        self.0.as_flattened()
    }

    /// Returns the elements as a flat mutable slice in row-major order.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        self.0.as_flattened_mut()
    }

    /// Returns an iterator over all elements in row-major order.
    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Returns an iterator over mutable references to all elements in row-major order.
    ///
    /// # Examples
    ///
    /// ```
    /// # use cml::*;
    /// let mut mat = mat![1, 2; 3, 4];
    /// mat.iter_mut().for_each(|e| *e *= 2);
    /// assert_eq!(mat, mat![2, 4; 6, 8]);
    /// ```
    #[inline]
    pub fn iter_mut(&mut self) -> slice::IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }

    /// Returns an iterator over the rows of this matrix.
    #[inline]
    pub fn rows(&self) -> slice::Iter<'_, [T; C]> {
        self.0.iter()
    }

    /// Consumes the matrix, returning its rows.
    #[inline]
    pub fn into_rows(self) -> [[T; C]; R] {
        self.0
    }
}

impl<T: Zero + Copy, const R: usize, const C: usize> Matrix<T, R, C> {
    /// A matrix with every element set to 0.
    pub const ZERO: Self = Self([[T::ZERO; C]; R]);
}

impl<T: Zero + One, const N: usize> Matrix<T, N, N> {
    /// Returns the identity matrix.
    ///
    /// The matrix has the value 1 on its diagonal and 0 everywhere else. Multiplying any vector
    /// or matrix with it returns that value unchanged.
    ///
    /// *Note*: Only square matrices have an identity; calling this on any other matrix type does
    /// not compile.
    ///
    /// # Examples
    ///
    /// ```
    /// # use cml::*;
    /// assert_eq!(Mat2::<i32>::identity(), mat![1, 0; 0, 1]);
    /// ```
    pub fn identity() -> Self {
        Self::from_fn(|row, col| if row == col { T::ONE } else { T::ZERO })
    }
}

impl<T, const N: usize> Matrix<T, N, 1> {
    /// Creates a column matrix holding the elements of `vector`.
    pub fn from_column<L>(vector: Vector<T, N, L>) -> Self {
        vector.into_column()
    }
}

impl<T, const N: usize, L> From<Vector<T, N, L>> for Matrix<T, N, 1> {
    #[inline]
    fn from(vector: Vector<T, N, L>) -> Self {
        vector.into_column()
    }
}

impl<T, const N: usize, L> From<Matrix<T, N, 1>> for Vector<T, N, L> {
    fn from(column: Matrix<T, N, 1>) -> Self {
        column.0.map(|[elem]| elem).into()
    }
}

impl<T, const R: usize, const C: usize> From<[[T; C]; R]> for Matrix<T, R, C> {
    #[inline]
    fn from(rows: [[T; C]; R]) -> Self {
        Self(rows)
    }
}

impl<T: Copy, const R: usize, const C: usize> TryFrom<&[T]> for Matrix<T, R, C> {
    type Error = ShapeError;

    /// Copies `R * C` elements from a row-major slice.
    fn try_from(slice: &[T]) -> Result<Self, Self::Error> {
        ShapeError::check_len(R * C, slice.len())?;
        Ok(Self::from_fn(|row, col| slice[col + row * C]))
    }
}

impl<T, const R: usize, const C: usize> Default for Matrix<T, R, C>
where
    T: Default,
{
    fn default() -> Self {
        Self::from_fn(|_, _| T::default())
    }
}

impl<T, const R: usize, const C: usize> IntoIterator for Matrix<T, R, C> {
    type Item = T;
    type IntoIter = iter::Flatten<array::IntoIter<[T; C], R>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter().flatten()
    }
}

impl<'a, T, const R: usize, const C: usize> IntoIterator for &'a Matrix<T, R, C> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T, const R: usize, const C: usize> IntoIterator for &'a mut Matrix<T, R, C> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T: fmt::Debug, const R: usize, const C: usize> fmt::Debug for Matrix<T, R, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        struct FormatRow<'a, T>(&'a [T]);
        impl<T: fmt::Debug> fmt::Debug for FormatRow<'_, T> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("[")?;
                for (i, elem) in self.0.iter().enumerate() {
                    if i != 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{elem:?}")?;
                }
                f.write_str("]")
            }
        }

        f.debug_list()
            .entries(self.0.iter().map(|row| FormatRow(row.as_slice())))
            .finish()
    }
}

/// Prints one line per row, with the elements enclosed in brackets and separated by spaces.
///
/// Every line, including the last one, is terminated by `\n`.
impl<T: fmt::Display, const R: usize, const C: usize> fmt::Display for Matrix<T, R, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.0 {
            f.write_str("[")?;
            for (i, elem) in row.iter().enumerate() {
                if i != 0 {
                    f.write_str(" ")?;
                }
                elem.fmt(f)?;
            }
            f.write_str("]\n")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::{vec3, Vec3d};

    use super::*;

    #[test]
    fn construction() {
        assert_eq!(Mat2x3::<f64>::ZERO, Mat2x3::<f64>::default());
        assert!(Mat3::<f64>::ZERO.iter().all(|&e| e == 0.0));

        #[rustfmt::skip]
        let a = mat![
            0, 4, -2;
            -4, -3, 0;
        ];
        assert_eq!(a, Matrix::from_rows([[0, 4, -2], [-4, -3, 0]]));
        assert_eq!(a, Matrix::from_fn(|r, c| [[0, 4, -2], [-4, -3, 0]][r][c]));
        assert_eq!(Matrix::<i32, 2, 3>::ROWS, 2);
        assert_eq!(Matrix::<i32, 2, 3>::COLS, 3);

        let copy = a;
        let mut other = copy;
        other[(0, 0)] = 100;
        assert_eq!(a[(0, 0)], 0);
        assert_eq!(other[(0, 0)], 100);
    }

    #[test]
    fn from_slice() {
        let flat = [0, 1, 2, 3, 4, 5];
        let m = Mat2x3::<i32>::try_from(&flat[..]).unwrap();
        assert_eq!(m, mat![0, 1, 2; 3, 4, 5]);
        assert_eq!(m.as_slice(), flat);

        let err = Mat3::<i32>::try_from(&flat[..]).unwrap_err();
        assert_eq!(
            err,
            ShapeError::ElementCount {
                expected: 9,
                actual: 6
            }
        );
    }

    #[test]
    fn access() {
        let mut m = Mat3::<usize>::from_fn(|r, c| c + r * 3);
        assert_eq!(m[(1, 2)], 5);
        assert_eq!(m[2][0], 6);
        assert_eq!(m[1], [3, 4, 5]);
        assert_eq!(m.get(2, 2), Some(&8));
        assert_eq!(m.get(3, 0), None);
        assert_eq!(m.get(0, 3), None);

        m[(0, 1)] = 10;
        m[2][2] = 20;
        assert_eq!(m.as_slice(), [0, 10, 2, 3, 4, 5, 6, 7, 20]);
    }

    #[test]
    #[should_panic]
    fn index_out_of_bounds() {
        let m = Mat2::<i32>::identity();
        let row = Mat2::<i32>::ROWS;
        let _elem = m[(row, 0)];
    }

    #[test]
    fn iteration() {
        let mut m = mat![1, 2, 3; 4, 5, 6];
        for elem in &mut m {
            *elem *= 2;
        }
        assert_eq!(m.iter().copied().collect::<Vec<_>>(), [2, 4, 6, 8, 10, 12]);
        assert_eq!((&m).into_iter().count(), 6);
        assert_eq!(m.rows().map(|row| row.iter().sum::<i32>()).collect::<Vec<_>>(), [12, 30]);
        assert_eq!(m.into_iter().last(), Some(12));
    }

    #[test]
    fn fmt() {
        let mat = mat![0, 1; 2, 3];

        // Natural writing order (row-wise) for debug output.
        assert_eq!(format!("{:?}", mat), "[[0, 1], [2, 3]]");

        // `#` modifier prints each row in its own line, but not each individual element.
        assert_eq!(
            format!("{:#?}", mat),
            "
[
    [0, 1],
    [2, 3],
]
"
            .trim()
        );

        assert_eq!(format!("{}", mat), "[0 1]\n[2 3]\n");
        assert_eq!(format!("{}", mat![-0.5, 2.0]), "[-0.5 2]\n");
        assert_eq!(format!("{:?}", Mat2f::ZERO), "[[0.0, 0.0], [0.0, 0.0]]");
    }

    #[test]
    fn identity() {
        assert_eq!(format!("{:?}", Mat2f::identity()), "[[1.0, 0.0], [0.0, 1.0]]");

        let id = Mat4::<u8>::identity();
        for r in 0..4 {
            for c in 0..4 {
                assert_eq!(id[(r, c)], u8::from(r == c));
            }
        }
    }

    #[test]
    fn transpose() {
        let m = mat![1, 2, 3; 4, 5, 6];
        let t = m.transpose();
        assert_eq!(t, mat![1, 4; 2, 5; 3, 6]);
        for r in 0..2 {
            for c in 0..3 {
                assert_eq!(t[(c, r)], m[(r, c)]);
            }
        }
        assert_eq!(t.transpose(), m);
    }

    #[test]
    fn column_conversion() {
        let v = vec3(2.0, 1.0, 0.0);
        let col: ColumnVec<f64, 3> = v.into();
        assert_eq!(col, mat![2.0; 1.0; 0.0]);
        assert_eq!(ColumnVec::from_column(v), col);
        assert_eq!(Vec3d::from(col), v);
    }
}
