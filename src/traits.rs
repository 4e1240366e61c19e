use std::{fmt, ops};

/// Types that have a "zero" value (an additive identity).
pub trait Zero {
    /// The *0* value of this type.
    const ZERO: Self;
}

/// Types that have a "one" value (a multiplicative identity).
pub trait One {
    /// The *1* value of this type.
    const ONE: Self;
}

/// A trait for numeric types that support basic arithmetic operations.
///
/// Negation is not required, so unsigned integers qualify. Operations that need it (like
/// [`Vector::perpendicular`][crate::Vector::perpendicular]) add a separate [`ops::Neg`] bound.
pub trait Number:
    Zero
    + One
    + ops::Add<Output = Self>
    + ops::Sub<Output = Self>
    + ops::Mul<Output = Self>
    + ops::Div<Output = Self>
    + PartialEq
    + Copy
{
}
impl<T> Number for T where
    T: Zero
        + One
        + ops::Add<Output = Self>
        + ops::Sub<Output = Self>
        + ops::Mul<Output = Self>
        + ops::Div<Output = Self>
        + PartialEq
        + Copy
{
}

/// Types that support computing their square root.
pub trait Sqrt {
    fn sqrt(self) -> Self;
}

/// Types that support the trigonometric functions.
pub trait Trig: Sized {
    /// Computes the sine of the angle `self` (in radians).
    fn sin(self) -> Self;
    /// Computes the cosine of the angle `self` (in radians).
    fn cos(self) -> Self;
    /// Computes the tangent of the angle `self` (in radians).
    fn tan(self) -> Self;

    /// Computes sine and cosine of `self` at once.
    fn sin_cos(self) -> (Self, Self)
    where
        Self: Copy,
    {
        (self.sin(), self.cos())
    }
}

/// Lossy numeric conversion, with the semantics of an `as` cast.
///
/// This is how vector elements are brought into the floating-point length type of a
/// [`Vector`][crate::Vector] before squaring and summing them.
pub trait Cast<U> {
    fn cast(self) -> U;
}

/// Floating-point types, usable as the length type `L` of a [`Vector`][crate::Vector] and as the
/// element type of the transform builders.
pub trait Float:
    Number + ops::Neg<Output = Self> + PartialOrd + Sqrt + Trig + Cast<Self> + fmt::Debug
{
    /// Archimedes' constant (π).
    const PI: Self;
    /// The number of degrees in a half turn (180).
    const HALF_TURN_DEGREES: Self;
}

macro_rules! zero_one {
    ($zero:literal, $one:literal => $($types:ty),+) => {
        $(
            impl Zero for $types {
                const ZERO: Self = $zero;
            }

            impl One for $types {
                const ONE: Self = $one;
            }
        )+
    };
}
zero_one!(0, 1 => u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);
zero_one!(0.0, 1.0 => f32, f64);

macro_rules! cast_to_float {
    ($($types:ty),+) => {
        $(
            impl Cast<f32> for $types {
                #[inline]
                fn cast(self) -> f32 {
                    self as f32
                }
            }

            impl Cast<f64> for $types {
                #[inline]
                fn cast(self) -> f64 {
                    self as f64
                }
            }
        )+
    };
}
cast_to_float!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64);

macro_rules! float {
    ($($types:ident),+) => {
        $(
            impl Sqrt for $types {
                #[inline]
                fn sqrt(self) -> Self {
                    $types::sqrt(self)
                }
            }

            impl Trig for $types {
                #[inline]
                fn sin(self) -> Self {
                    $types::sin(self)
                }

                #[inline]
                fn cos(self) -> Self {
                    $types::cos(self)
                }

                #[inline]
                fn tan(self) -> Self {
                    $types::tan(self)
                }

                #[inline]
                fn sin_cos(self) -> (Self, Self) {
                    $types::sin_cos(self)
                }
            }

            impl Float for $types {
                const PI: Self = std::$types::consts::PI;
                const HALF_TURN_DEGREES: Self = 180.0;
            }
        )+
    };
}
float!(f32, f64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constants() {
        assert_eq!(u32::ZERO, 0);
        assert_eq!(i8::ONE, 1);
        assert_eq!(f64::ZERO, 0.0);
        assert_eq!(f32::ONE, 1.0);
    }

    #[test]
    fn cast() {
        let big: i32 = 1 << 20;
        let sq: f64 = Cast::<f64>::cast(big) * Cast::<f64>::cast(big);
        assert_eq!(sq, 1099511627776.0);
        assert_eq!(Cast::<f32>::cast(3u8), 3.0f32);
        assert_eq!(Cast::<f64>::cast(-2.5f32), -2.5f64);
    }

    #[test]
    fn trig() {
        let (sin, cos) = Trig::sin_cos(0.0f64);
        assert_eq!(sin, 0.0);
        assert_eq!(cos, 1.0);
        assert_eq!(Sqrt::sqrt(16.0f32), 4.0);
    }
}
