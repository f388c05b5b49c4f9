use std::fmt::Display;

use clap::builder::styling::{AnsiColor, Effects, Style, Styles};

/// Notation the input expression is written in.
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Notation {
    /// Polish notation: the operator comes before its two operands
    #[default]
    Prefix,
    /// Reverse Polish notation: the operator comes after its two operands
    Postfix,
}

impl Display for Notation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Prefix => write!(f, "prefix"),
            Self::Postfix => write!(f, "postfix"),
        }
    }
}

#[derive(clap::Parser, Debug, Clone, Default)]
#[clap(styles = CARGO_STYLING)]
pub struct Cli {
    /// Expression file to evaluate; the REPL starts when this is omitted
    pub file: Option<String>,

    /// Read the expression from stdin
    #[arg(long, default_value_t = false)]
    pub stdin: bool,

    /// Do not report errors
    #[arg(short, long, default_value_t = false)]
    pub quiet: bool,

    /// Notation of the input expression
    #[arg(short, long, value_enum, default_value_t = Notation::Prefix)]
    pub notation: Notation,

    /// Print the parsed expression in infix form before its value
    /// (prefix notation only)
    #[arg(long, default_value_t = false)]
    pub print_tree: bool,
}

const HEADER: Style = AnsiColor::Green.on_default().effects(Effects::BOLD);
const USAGE: Style = AnsiColor::Green.on_default().effects(Effects::BOLD);
const LITERAL: Style = AnsiColor::Cyan.on_default().effects(Effects::BOLD);
const PLACEHOLDER: Style = AnsiColor::Cyan.on_default();
const ERROR: Style = AnsiColor::Red.on_default().effects(Effects::BOLD);
const VALID: Style = AnsiColor::Cyan.on_default().effects(Effects::BOLD);
const INVALID: Style = AnsiColor::Yellow.on_default().effects(Effects::BOLD);

/// Cargo's color style
/// [source](https://github.com/crate-ci/clap-cargo/blob/master/src/style.rs)
const CARGO_STYLING: Styles = Styles::styled()
    .header(HEADER)
    .usage(USAGE)
    .literal(LITERAL)
    .placeholder(PLACEHOLDER)
    .error(ERROR)
    .valid(VALID)
    .invalid(INVALID);
