use std::cmp::Ordering;

use anyhow::{Context, Result};
use tracing::{debug, warn};

use fraction::{Fraction, Operand, Result as FractionResult};

use crate::args::{Binary, Subcommand};

pub(crate) fn evaluate(subcommand: Subcommand, mixed: bool) -> Result<String> {
    debug!(?subcommand, mixed, "Evaluating");

    match subcommand {
        Subcommand::Add(operands) => arithmetic(operands, "+", Fraction::checked_add, mixed),
        Subcommand::Sub(operands) => arithmetic(operands, "-", Fraction::checked_sub, mixed),
        Subcommand::Mul(operands) => arithmetic(operands, "*", Fraction::checked_mul, mixed),
        Subcommand::Div(operands) => arithmetic(operands, "/", Fraction::checked_div, mixed),
        Subcommand::Cmp(Binary { lhs, rhs }) => Ok(match lhs.cmp(&rhs.to_fraction()) {
            Ordering::Less => "<",
            Ordering::Equal => "=",
            Ordering::Greater => ">",
        }
        .into()),
        Subcommand::Adjacent(Binary { lhs, rhs }) => Ok(lhs.is_adjacent_to(rhs).to_string()),
        Subcommand::Show { value } => Ok(show(value)),
    }
}

fn arithmetic<Op>(
    Binary { lhs, rhs }: Binary,
    symbol: &str,
    op: Op,
    mixed: bool,
) -> Result<String>
where
    Op: FnOnce(Fraction, Operand) -> FractionResult<Fraction>,
{
    op(lhs, rhs)
        .inspect(|result| debug!(%lhs, %rhs, %result, "{symbol}"))
        .inspect_err(|error| warn!(%lhs, %rhs, %error, "{symbol}"))
        .map(|result| render(result, mixed))
        .with_context(|| format!("Evaluating `{lhs} {symbol} {rhs}` failed!"))
}

fn render(value: Fraction, mixed: bool) -> String {
    if mixed {
        value.to_mixed_string()
    } else {
        value.to_string()
    }
}

fn show(value: Fraction) -> String {
    format!(
        "value: {value}\n\
         mixed: {}\n\
         float: {}\n\
         zero: {}\n\
         integer: {}\n\
         proper: {}\n\
         unit: {}",
        value.mixed(),
        value.to_f64(),
        value.is_zero(),
        value.is_integer(),
        value.is_proper(),
        value.is_unit(),
    )
}

#[cfg(test)]
mod test {
    use clap::Parser as _;

    use fraction::Error;

    use crate::args::Parser;

    #[test]
    fn add() {
        assert_eq!("5/6", run(&["add", "1/2", "1/3"]));
        assert_eq!("7/2", run(&["add", "1/2", "3"]));
    }

    #[test]
    fn sub_negative_operands() {
        assert_eq!("5/6", run(&["sub", "1/2", "-1/3"]));
        assert_eq!("-5/6", run(&["sub", "-1/2", "1/3"]));
    }

    #[test]
    fn mul_mixed() {
        assert_eq!("8/15", run(&["mul", "2/3", "4/5"]));
        assert_eq!("2 1/3", run(&["--mixed", "mul", "7/6", "2"]));
    }

    #[test]
    fn mixed_input() {
        assert_eq!("3", run(&["add", "2 1/3", "2/3"]));
    }

    #[test]
    fn div() {
        assert_eq!("15/8", run(&["div", "3/4", "2/5"]));
    }

    #[test]
    fn div_by_zero() {
        let err = try_run(&["div", "1/2", "0"]).expect_err("division by zero");
        assert_eq!(Some(&Error::DivisionByZero), err.downcast_ref::<Error>());
        assert_eq!("Evaluating `1/2 / 0` failed!", err.to_string());
    }

    #[test]
    fn cmp() {
        assert_eq!("<", run(&["cmp", "1/2", "2/3"]));
        assert_eq!("=", run(&["cmp", "2/3", "4/6"]));
        assert_eq!(">", run(&["cmp", "2", "3/2"]));
    }

    #[test]
    fn adjacent() {
        assert_eq!("true", run(&["adjacent", "2/3", "3/4"]));
        assert_eq!("false", run(&["adjacent", "2/3", "5/6"]));
        assert_eq!("true", run(&["adjacent", "2", "3"]));
    }

    #[test]
    fn show() {
        assert_eq!(
            "value: -7/3\n\
             mixed: -3 2/3\n\
             float: -2.3333333333333335\n\
             zero: false\n\
             integer: false\n\
             proper: false\n\
             unit: false",
            run(&["show", "-7/3"])
        );
    }

    #[test]
    fn invalid_operands() {
        assert!(Parser::try_parse_from(["fraction-calc", "add", "1/2", "string"]).is_err());
        assert!(Parser::try_parse_from(["fraction-calc", "add", "1/0", "1"]).is_err());
        assert!(Parser::try_parse_from(["fraction-calc", "show", "1.5"]).is_err());
    }

    fn run(args: &[&str]) -> String {
        try_run(args).expect("successful evaluation")
    }

    fn try_run(args: &[&str]) -> anyhow::Result<String> {
        let Parser {
            mixed, subcommand, ..
        } = Parser::try_parse_from(["fraction-calc"].iter().chain(args))
            .expect("valid arguments");

        super::evaluate(subcommand, mixed)
    }
}
