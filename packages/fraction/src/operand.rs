use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    str::FromStr,
};

use crate::{
    error::{Error, Result},
    fraction::Fraction,
    Units,
};

/// The right-hand side of an arithmetic, comparison or adjacency operation.
///
/// An integer `k` takes part as the fraction `k/1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operand {
    Integer(Units),
    Fraction(Fraction),
}

impl Operand {
    pub const fn to_fraction(self) -> Fraction {
        match self {
            Self::Integer(value) => Fraction::integer(value),
            Self::Fraction(fraction) => fraction,
        }
    }
}

impl From<Units> for Operand {
    fn from(value: Units) -> Self {
        Self::Integer(value)
    }
}

impl From<i32> for Operand {
    fn from(value: i32) -> Self {
        Self::Integer(value.into())
    }
}

impl From<u32> for Operand {
    fn from(value: u32) -> Self {
        Self::Integer(value.into())
    }
}

impl From<Fraction> for Operand {
    fn from(fraction: Fraction) -> Self {
        Self::Fraction(fraction)
    }
}

impl From<Operand> for Fraction {
    fn from(operand: Operand) -> Self {
        operand.to_fraction()
    }
}

/// Text with a `/` is read as a fraction, see [`Fraction::from_str`], any
/// other text as an integer.
impl FromStr for Operand {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        if s.contains('/') {
            s.parse().map(Self::Fraction)
        } else {
            s.trim()
                .parse()
                .map(Self::Integer)
                .map_err(|_| Error::invalid_operand(s))
        }
    }
}

impl Display for Operand {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::Integer(value) => Display::fmt(value, f),
            Self::Fraction(fraction) => Display::fmt(fraction, f),
        }
    }
}
