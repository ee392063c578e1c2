use fraction::{Fraction, Operand};

#[derive(Debug, clap::Parser)]
#[command(version, about = "Exact arithmetic on fractions kept in lowest terms.")]
pub(crate) struct Parser {
    #[arg(
        global = true,
        short,
        long,
        env = "FRACTION_CALC_MIXED",
        help = "Render fractional results as mixed numbers."
    )]
    pub mixed: bool,
    #[arg(
        global = true,
        long,
        env = "FRACTION_CALC_LOG",
        default_value = "warn",
        help = "Log filter directives, written to the standard error."
    )]
    pub log: String,
    #[command(subcommand)]
    pub subcommand: Subcommand,
}

#[derive(Debug, clap::Subcommand)]
pub(crate) enum Subcommand {
    #[command(about = "Print LHS + RHS.")]
    Add(Binary),
    #[command(about = "Print LHS - RHS.")]
    Sub(Binary),
    #[command(about = "Print LHS * RHS.")]
    Mul(Binary),
    #[command(about = "Print LHS / RHS.")]
    Div(Binary),
    #[command(about = "Print `<`, `=` or `>` as LHS compares to RHS.")]
    Cmp(Binary),
    #[command(about = "Print whether the cross products of LHS and RHS differ by one.")]
    Adjacent(Binary),
    #[command(about = "Print the renderings and the classification of VALUE.")]
    Show {
        #[arg(allow_hyphen_values = true)]
        value: Fraction,
    },
}

#[derive(Debug, clap::Args)]
pub(crate) struct Binary {
    #[arg(allow_hyphen_values = true, help = "A fraction `n/d`, `w r/d` or an integer.")]
    pub lhs: Fraction,
    #[arg(allow_hyphen_values = true, help = "A fraction `n/d`, `w r/d` or an integer.")]
    pub rhs: Operand,
}
