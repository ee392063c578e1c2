pub use crate::{
    arithmetic::gcd,
    error::{Error, Result},
    fraction::{Fraction, Mixed},
    operand::Operand,
    zero::{One, Zero},
};

pub mod arithmetic;
pub mod error;
pub mod fraction;
pub mod operand;
pub mod zero;

/// The host integer width of a numerator and a denominator.
pub type Units = i64;

/// Wide enough to hold any product, or sum of two products, of `Units`
/// without loss.
pub type DoubleUnits = i128;
