//! Named element accessors.

use super::Vector;

macro_rules! accessors {
    ( $( $get:ident, $get_mut:ident => $index:literal ),+ $(,)? ) => {
        impl<T, const N: usize, L> Vector<T, N, L> {
            $(
                #[doc = concat!("Returns element ", stringify!($index), ".")]
                ///
                /// Using this on a vector with too few elements fails to compile.
                #[inline]
                pub fn $get(&self) -> T
                where
                    T: Copy,
                {
                    const { assert!(N > $index, "vector has too few elements for this accessor") };
                    self.0[$index]
                }

                #[doc = concat!("Returns a mutable reference to element ", stringify!($index), ".")]
                ///
                /// Using this on a vector with too few elements fails to compile.
                #[inline]
                pub fn $get_mut(&mut self) -> &mut T {
                    const { assert!(N > $index, "vector has too few elements for this accessor") };
                    &mut self.0[$index]
                }
            )+
        }
    };
}

accessors! {
    x, x_mut => 0,
    y, y_mut => 1,
    z, z_mut => 2,
    w, w_mut => 3,
}

// Color aliases.
accessors! {
    r, r_mut => 0,
    g, g_mut => 1,
    b, b_mut => 2,
    a, a_mut => 3,
}
