use serde_test::{assert_de_tokens_error, assert_tokens, Token};

use fraction::{Fraction, Units};

#[test]
fn canonical_text() {
    assert_tokens(&fraction(5, 2), &[Token::Str("5/2")]);
    assert_tokens(&fraction(-2, 3), &[Token::Str("-2/3")]);
    assert_tokens(&fraction(6, 2), &[Token::Str("3")]);
    assert_tokens(&Fraction::ZERO, &[Token::Str("0")]);
}

#[test]
fn non_canonical_text() {
    assert_de_tokens_error::<Fraction>(
        &[Token::Str("4/6")],
        "[Fraction] Programming error or invalid serialized object of 'fraction::fraction::Fraction' type, cause 'the text is not in the reduced `numerator/denominator` form'",
    );
}

#[test]
fn zero_denominator() {
    assert_de_tokens_error::<Fraction>(
        &[Token::Str("1/0")],
        "[Fraction] Denominator cannot be zero",
    );
}

#[test]
fn not_a_fraction() {
    assert_de_tokens_error::<Fraction>(
        &[Token::Str("half")],
        "[Fraction] Operand 'half' is neither an integer nor a fraction",
    );
}

#[test]
fn json() {
    let values = vec![fraction(1, 2), fraction(-7, 3), Fraction::integer(4)];

    let json = serde_json::to_string(&values).expect("serializable fractions");
    assert_eq!(r#"["1/2","-7/3","4"]"#, json);
    assert_eq!(
        values,
        serde_json::from_str::<Vec<Fraction>>(&json).expect("deserializable fractions")
    );
    assert!(serde_json::from_str::<Fraction>(r#""2/-4""#).is_err());
}

fn fraction(numerator: Units, denominator: Units) -> Fraction {
    Fraction::new(numerator, denominator).expect("valid fraction")
}
