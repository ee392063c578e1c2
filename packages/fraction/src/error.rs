use std::{any::type_name, fmt::Debug};

use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum Error {
    #[error("[Fraction] Denominator cannot be zero")]
    ZeroDenominator,

    #[error("[Fraction] Cannot divide by zero")]
    DivisionByZero,

    #[error("[Fraction] Operand '{0}' is neither an integer nor a fraction")]
    InvalidOperand(String),

    #[error("[Fraction] Result does not fit the host integer width when evaluating `{details}`")]
    Overflow { details: String },

    #[error("[Fraction] Programming error or invalid serialized object of '{0}' type, cause '{1}'")]
    BrokenInvariant(String, String),
}

impl Error {
    pub fn broken_invariant_if<T>(check: bool, msg: &str) -> Result<()> {
        if check {
            Err(Self::BrokenInvariant(type_name::<T>().into(), msg.into()))
        } else {
            Ok(())
        }
    }

    pub fn overflow<L, R>(lhs: L, op: &str, rhs: R) -> Self
    where
        L: Debug,
        R: Debug,
    {
        Self::Overflow {
            details: format!("({:?} {} {:?})", lhs, op, rhs),
        }
    }

    pub fn invalid_operand<S>(operand: S) -> Self
    where
        S: Into<String>,
    {
        Self::InvalidOperand(operand.into())
    }
}

pub type Result<T> = core::result::Result<T, Error>;
