use gcd::Gcd;

use crate::{zero::Zero, DoubleUnits, Units};

/// The greatest common divisor of `|n|` and `|d|`.
///
/// `gcd(n, 0) == |n|` and, by convention, `gcd(0, 0) == 0`.
///
/// The signature admits integers only, so there is no runtime check that
/// the operands are integral.
pub fn gcd(n: Units, d: Units) -> u64 {
    Gcd::gcd(n.unsigned_abs(), d.unsigned_abs())
}

/// Divides both values by their greatest common divisor.
///
/// Returns the values unchanged if both are zero, and `None` if the divisor
/// does not fit `DoubleUnits`.
pub(crate) fn into_coprime(a: DoubleUnits, b: DoubleUnits) -> Option<(DoubleUnits, DoubleUnits)> {
    let gcd: u128 = Gcd::gcd(a.unsigned_abs(), b.unsigned_abs());

    if gcd == u128::ZERO {
        Some((a, b))
    } else {
        DoubleUnits::try_from(gcd)
            .ok()
            .map(|gcd| (a / gcd, b / gcd))
    }
}

/// Moves the sign, if any, into the first value so that the second one is
/// non-negative.
pub(crate) fn normalize_sign(
    a: DoubleUnits,
    b: DoubleUnits,
) -> Option<(DoubleUnits, DoubleUnits)> {
    if b < DoubleUnits::ZERO {
        a.checked_neg().zip(b.checked_neg())
    } else {
        Some((a, b))
    }
}

#[cfg(test)]
mod test {
    use crate::{DoubleUnits, Units};

    #[test]
    fn gcd() {
        assert_eq!(12, super::gcd(24, 36));
        assert_eq!(12, super::gcd(-24, 36));
        assert_eq!(12, super::gcd(24, -36));
        assert_eq!(1, super::gcd(7, 3));
        assert_eq!(5, super::gcd(5, 5));
    }

    #[test]
    fn gcd_with_zero() {
        assert_eq!(7, super::gcd(7, 0));
        assert_eq!(7, super::gcd(-7, 0));
        assert_eq!(7, super::gcd(0, -7));
        assert_eq!(0, super::gcd(0, 0));
    }

    #[test]
    fn gcd_extremes() {
        assert_eq!(1 << 63, super::gcd(Units::MIN, 0));
        assert_eq!(1 << 63, super::gcd(Units::MIN, Units::MIN));
        assert_eq!(1, super::gcd(Units::MIN, Units::MAX));
    }

    #[test]
    fn into_coprime() {
        assert_eq!(Some((2, 3)), super::into_coprime(24, 36));
        assert_eq!(Some((-2, 3)), super::into_coprime(-24, 36));
        assert_eq!(Some((0, 1)), super::into_coprime(0, 5));
        assert_eq!(Some((0, 0)), super::into_coprime(0, 0));
        assert_eq!(None, super::into_coprime(DoubleUnits::MIN, 0));
    }

    #[test]
    fn normalize_sign() {
        assert_eq!(Some((-2, 3)), super::normalize_sign(2, -3));
        assert_eq!(Some((2, 3)), super::normalize_sign(-2, -3));
        assert_eq!(Some((-2, 3)), super::normalize_sign(-2, 3));
        assert_eq!(None, super::normalize_sign(DoubleUnits::MIN, -1));
    }
}
