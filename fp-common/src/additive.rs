//! # Additive Capability
//!
//! The bound required by [`sum`](crate::list::sum): a type with an additive
//! identity and an addition operator.
//!
//! `Default` is not used for the identity because a default value is not an
//! additive identity in general.
//!
//! ## Example
//!
//! ```
//! use fp_common::additive::Additive;
//! use std::time::Duration;
//!
//! assert_eq!(i64::zero() + 7, 7);
//! assert_eq!(Duration::zero() + Duration::from_secs(2), Duration::from_secs(2));
//! ```

use std::num::Wrapping;
use std::ops::Add;
use std::time::Duration;

/// A type closed under `+` that has an additive identity.
///
/// Implementors must satisfy `Self::zero() + x == x` for every `x`.
pub trait Additive: Add<Output = Self> + Sized {
    /// The additive identity.
    fn zero() -> Self;
}

macro_rules! impl_additive {
    ($zero:expr => $($ty:ty),+ $(,)?) => {
        $(
            impl Additive for $ty {
                #[inline]
                fn zero() -> Self {
                    $zero
                }
            }
        )+
    };
}

impl_additive!(0 => i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_additive!(0.0 => f32, f64);

impl<T> Additive for Wrapping<T>
where
    T: Additive,
    Wrapping<T>: Add<Output = Wrapping<T>>,
{
    #[inline]
    fn zero() -> Self {
        Wrapping(T::zero())
    }
}

impl Additive for Duration {
    #[inline]
    fn zero() -> Self {
        Duration::ZERO
    }
}
