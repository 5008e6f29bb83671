//! Numeric trait bounds for the pipeline stages.
//!
//! `Number` admits every primitive integer and float, nothing else. Passing a
//! `String` or a user struct to [`square`] fails to type-check.

use std::fmt::{Debug, Display};
use std::ops::{Mul, Rem};

// ============================================================================
// Bounds
// ============================================================================

mod sealed {
    pub trait Sealed {}
}

/// An arithmetic primitive that can be multiplied by itself.
pub trait Number: sealed::Sealed + Copy + PartialEq + Debug + Display + Mul<Output = Self> {}

/// An integral `Number`, the only kind with a parity.
pub trait Integer: Number + Rem<Output = Self> {
    const ZERO: Self;
    const TWO: Self;
}

macro_rules! impl_number {
    ($($t:ty),*) => {
        $(
            impl sealed::Sealed for $t {}
            impl Number for $t {}
        )*
    };
}

macro_rules! impl_integer {
    ($($t:ty),*) => {
        $(
            impl Integer for $t {
                const ZERO: Self = 0;
                const TWO: Self = 2;
            }
        )*
    };
}

impl_number!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);
impl_integer!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

// ============================================================================
// Operations
// ============================================================================

/// Returns `x * x`. Overflow follows the host type's arithmetic rules.
///
/// ```
/// use squares_pipeline::numeric::square;
///
/// assert_eq!(square(7u16), 49);
/// assert_eq!(square(0.5f32), 0.25);
/// ```
///
/// Non-numeric types are rejected at compile time:
///
/// ```compile_fail
/// use squares_pipeline::numeric::square;
///
/// let _ = square(String::from("ab"));
/// ```
///
/// ```compile_fail
/// use squares_pipeline::numeric::square;
/// use std::time::Duration;
///
/// // `Duration` is not a `Number`.
/// let _ = square(Duration::from_secs(2));
/// ```
pub fn square<T: Number>(x: T) -> T {
    x * x
}

/// ```
/// use squares_pipeline::numeric::is_even;
///
/// assert!(is_even(16u8));
/// assert!(!is_even(-9i64));
/// ```
///
/// Floats have no parity:
///
/// ```compile_fail
/// use squares_pipeline::numeric::is_even;
///
/// let _ = is_even(2.0f64);
/// ```
pub fn is_even<T: Integer>(x: T) -> bool {
    x % T::TWO == T::ZERO
}
