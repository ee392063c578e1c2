use std::{
    cmp::Ordering,
    fmt::{Display, Formatter, Result as FmtResult},
    ops::{Add, Div, Mul, Sub},
    str::FromStr,
};

use serde::{Deserialize, Serialize};

use crate::{
    arithmetic,
    error::{Error, Result},
    operand::Operand,
    zero::{One, Zero},
    DoubleUnits, Units,
};

/// A rational number kept in lowest terms with a positive denominator.
///
/// Every constructor and every operation reduces its result, so two equal
/// values always have identical components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Fraction {
    numerator: Units,
    denominator: Units,
}

impl Fraction {
    pub const ZERO: Self = Self::integer(Units::ZERO);
    pub const ONE: Self = Self::integer(Units::ONE);

    pub fn new(numerator: Units, denominator: Units) -> Result<Self> {
        if denominator == Units::ZERO {
            Err(Error::ZeroDenominator)
        } else {
            Self::reduced(numerator.into(), denominator.into())
                .ok_or_else(|| Error::overflow(numerator, "/", denominator))
        }
    }

    pub const fn integer(value: Units) -> Self {
        Self {
            numerator: value,
            denominator: Units::ONE,
        }
    }

    pub const fn numerator(&self) -> Units {
        self.numerator
    }

    pub const fn denominator(&self) -> Units {
        self.denominator
    }

    pub fn checked_add<R>(self, rhs: R) -> Result<Self>
    where
        R: Into<Operand>,
    {
        let rhs = rhs.into().to_fraction();
        let (lhs_nom, rhs_nom) = self.cross_numerators(rhs);

        lhs_nom
            .checked_add(rhs_nom)
            .and_then(|nominator| Self::reduced(nominator, self.common_denominator(rhs)))
            .ok_or_else(|| Error::overflow(self, "+", rhs))
    }

    pub fn checked_sub<R>(self, rhs: R) -> Result<Self>
    where
        R: Into<Operand>,
    {
        let rhs = rhs.into().to_fraction();
        let (lhs_nom, rhs_nom) = self.cross_numerators(rhs);

        lhs_nom
            .checked_sub(rhs_nom)
            .and_then(|nominator| Self::reduced(nominator, self.common_denominator(rhs)))
            .ok_or_else(|| Error::overflow(self, "-", rhs))
    }

    pub fn checked_mul<R>(self, rhs: R) -> Result<Self>
    where
        R: Into<Operand>,
    {
        let rhs = rhs.into().to_fraction();

        Self::reduced(
            DoubleUnits::from(self.numerator) * DoubleUnits::from(rhs.numerator),
            self.common_denominator(rhs),
        )
        .ok_or_else(|| Error::overflow(self, "*", rhs))
    }

    // (a / b) / (c / d) = (a * d) / (b * c)
    pub fn checked_div<R>(self, rhs: R) -> Result<Self>
    where
        R: Into<Operand>,
    {
        let rhs = rhs.into().to_fraction();

        if rhs.is_zero() {
            Err(Error::DivisionByZero)
        } else {
            Self::reduced(
                DoubleUnits::from(self.numerator) * DoubleUnits::from(rhs.denominator),
                DoubleUnits::from(self.denominator) * DoubleUnits::from(rhs.numerator),
            )
            .ok_or_else(|| Error::overflow(self, "/", rhs))
        }
    }

    pub fn to_f64(self) -> f64 {
        self.numerator as f64 / self.denominator as f64
    }

    /// Renders as a mixed number, e.g. `2 1/3` for `7/3` and `-3 2/3` for
    /// `-7/3`.
    pub const fn mixed(self) -> Mixed {
        Mixed(self)
    }

    pub fn to_mixed_string(self) -> String {
        self.mixed().to_string()
    }

    pub const fn is_zero(&self) -> bool {
        self.numerator == Units::ZERO
    }

    pub const fn is_integer(&self) -> bool {
        self.denominator == Units::ONE
    }

    pub const fn is_proper(&self) -> bool {
        self.numerator.unsigned_abs() < self.denominator.unsigned_abs()
    }

    /// `true` for `1` and `-1` only.
    pub const fn is_unit(&self) -> bool {
        self.numerator.unsigned_abs() == 1 && self.is_integer()
    }

    /// Two fractions `a/b` and `c/d` are adjacent when `|a*d - c*b| == 1`.
    pub fn is_adjacent_to<R>(&self, rhs: R) -> bool
    where
        R: Into<Operand>,
    {
        let (lhs_nom, rhs_nom) = self.cross_numerators(rhs.into().to_fraction());

        lhs_nom.abs_diff(rhs_nom) == 1
    }

    // from (a / b) and (c / d), to a * d and c * b
    fn cross_numerators(&self, rhs: Self) -> (DoubleUnits, DoubleUnits) {
        (
            DoubleUnits::from(self.numerator) * DoubleUnits::from(rhs.denominator),
            DoubleUnits::from(rhs.numerator) * DoubleUnits::from(self.denominator),
        )
    }

    fn common_denominator(&self, rhs: Self) -> DoubleUnits {
        DoubleUnits::from(self.denominator) * DoubleUnits::from(rhs.denominator)
    }

    /// Brings `nominator / denominator` to lowest terms and a positive
    /// denominator. Returns `None` if the result does not fit `Units`.
    fn reduced(nominator: DoubleUnits, denominator: DoubleUnits) -> Option<Self> {
        debug_assert_ne!(denominator, DoubleUnits::ZERO);

        arithmetic::into_coprime(nominator, denominator)
            .and_then(|(nominator, denominator)| {
                arithmetic::normalize_sign(nominator, denominator)
            })
            .and_then(|(nominator, denominator)| {
                Units::try_from(nominator)
                    .ok()
                    .zip(Units::try_from(denominator).ok())
            })
            .map(|(numerator, denominator)| Self {
                numerator,
                denominator,
            })
    }
}

impl Default for Fraction {
    fn default() -> Self {
        Self::ZERO
    }
}

impl From<Units> for Fraction {
    fn from(value: Units) -> Self {
        Self::integer(value)
    }
}

impl From<Fraction> for f64 {
    fn from(value: Fraction) -> Self {
        value.to_f64()
    }
}

impl<R> Add<R> for Fraction
where
    R: Into<Operand>,
{
    type Output = Result<Self>;

    fn add(self, rhs: R) -> Self::Output {
        self.checked_add(rhs)
    }
}

impl<R> Sub<R> for Fraction
where
    R: Into<Operand>,
{
    type Output = Result<Self>;

    fn sub(self, rhs: R) -> Self::Output {
        self.checked_sub(rhs)
    }
}

impl<R> Mul<R> for Fraction
where
    R: Into<Operand>,
{
    type Output = Result<Self>;

    fn mul(self, rhs: R) -> Self::Output {
        self.checked_mul(rhs)
    }
}

impl<R> Div<R> for Fraction
where
    R: Into<Operand>,
{
    type Output = Result<Self>;

    fn div(self, rhs: R) -> Self::Output {
        self.checked_div(rhs)
    }
}

impl Ord for Fraction {
    fn cmp(&self, other: &Self) -> Ordering {
        if self.denominator == other.denominator {
            self.numerator.cmp(&other.numerator)
        } else {
            let (lhs_nom, rhs_nom) = self.cross_numerators(*other);
            lhs_nom.cmp(&rhs_nom)
        }
    }
}

impl PartialOrd for Fraction {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq<Units> for Fraction {
    fn eq(&self, other: &Units) -> bool {
        *self == Self::integer(*other)
    }
}

impl PartialOrd<Units> for Fraction {
    fn partial_cmp(&self, other: &Units) -> Option<Ordering> {
        Some(self.cmp(&Self::integer(*other)))
    }
}

impl PartialEq<Operand> for Fraction {
    fn eq(&self, other: &Operand) -> bool {
        *self == other.to_fraction()
    }
}

impl PartialOrd<Operand> for Fraction {
    fn partial_cmp(&self, other: &Operand) -> Option<Ordering> {
        Some(self.cmp(&other.to_fraction()))
    }
}

impl Display for Fraction {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        if self.is_integer() {
            write!(f, "{}", self.numerator)
        } else {
            write!(f, "{}/{}", self.numerator, self.denominator)
        }
    }
}

/// Mixed number rendering of a [`Fraction`], see [`Fraction::mixed`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mixed(Fraction);

impl Display for Mixed {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let Fraction {
            numerator,
            denominator,
        } = self.0;

        if self.0.is_proper() {
            Display::fmt(&self.0, f)
        } else {
            // the denominator is positive, so these are floor division and modulo
            let whole = numerator.div_euclid(denominator);
            let remainder = numerator.rem_euclid(denominator);

            if remainder == Units::ZERO {
                write!(f, "{whole}")
            } else {
                write!(f, "{whole} {remainder}/{denominator}")
            }
        }
    }
}

/// Parses `n`, `n/d` and the mixed form `w r/d`, which stands for `w + r/d`
/// with `0 <= r < d`.
impl FromStr for Fraction {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let text = s.trim();

        match text.split_once(char::is_whitespace) {
            Some((whole, part)) => parse_mixed(whole, part.trim_start(), s),
            None => parse_simple(text, s),
        }
    }
}

impl From<Fraction> for String {
    fn from(value: Fraction) -> Self {
        value.to_string()
    }
}

impl TryFrom<String> for Fraction {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        value.parse().and_then(|fraction: Self| {
            Error::broken_invariant_if::<Self>(
                fraction.to_string() != value,
                "the text is not in the reduced `numerator/denominator` form",
            )
            .map(|()| fraction)
        })
    }
}

fn parse_simple(text: &str, input: &str) -> Result<Fraction> {
    match text.split_once('/') {
        Some((nominator, denominator)) => Fraction::new(
            parse_units(nominator, input)?,
            parse_units(denominator, input)?,
        ),
        None => parse_units(text, input).map(Fraction::integer),
    }
}

// the remainder is a non-negative proper fraction, as `Mixed` renders it
fn parse_mixed(whole: &str, part: &str, input: &str) -> Result<Fraction> {
    let (nominator, denominator) = part
        .split_once('/')
        .ok_or_else(|| Error::invalid_operand(input))?;
    let whole_units = parse_units(whole, input)?;
    let nominator = parse_units(nominator, input)?;
    let denominator = parse_units(denominator, input)?;

    if denominator == Units::ZERO {
        Err(Error::ZeroDenominator)
    } else if nominator < Units::ZERO
        || nominator >= denominator
        || (whole_units == Units::ZERO && whole.starts_with('-'))
    {
        Err(Error::invalid_operand(input))
    } else {
        Fraction::new(nominator, denominator).and_then(|part| part.checked_add(whole_units))
    }
}

fn parse_units(text: &str, input: &str) -> Result<Units> {
    text.parse().map_err(|_| Error::invalid_operand(input))
}
