#![allow(dead_code)]
mod convert;
mod divmod;
pub mod error;
pub mod format;
pub mod prelude;
pub mod uint128;

/// Create an **[`Uint128`]** from its words.
///
/// ```
/// use uintkit::uint128;
///
/// let a = uint128!(4, 5);
/// assert_eq!(a.upper(), 4);
///
/// let b = uint128!(42);
/// assert_eq!(b.lower(), 42);
/// ```
///
/// The two-argument form takes the upper and lower 64-bit words; the
/// single-argument form converts any primitive integer.
///
#[macro_export]
macro_rules! uint128 {
    ($upper:expr, $lower:expr $(,)*) => {{
        $crate::uint128::Uint128::new($upper, $lower)
    }};
    ($value:expr $(,)*) => {{
        $crate::uint128::Uint128::from($value)
    }};
}
