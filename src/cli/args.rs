//! CLI argument parsing using clap.
//!
//! Contains the Cli struct, Commands enum and the variant selector.

use clap::{
    Parser, Subcommand, ValueEnum,
    builder::styling::{AnsiColor, Effects, Styles},
};
use std::path::PathBuf;

use crate::script::Variant;

fn clap_cargo_style() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default() | Effects::BOLD)
        .usage(AnsiColor::Cyan.on_default() | Effects::BOLD)
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Green.on_default())
}

/// Sample arithmetic model
#[derive(Parser, Debug)]
#[command(
    name = "sample-calc",
    version = env!("CARGO_PKG_VERSION"),
    about = "Sample arithmetic model: accumulator, memory and history calculators",
    next_line_help = true,
    styles = clap_cargo_style()
)]
pub struct Cli {
    /// Path to custom settings.toml file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Print a JSON envelope instead of text
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Exercise every calculator variant and print the results
    Demo,

    /// Run the built-in self-check
    SelfCheck,

    /// Sum a list of integers
    Sum {
        #[arg(value_name = "N", allow_negative_numbers = true)]
        numbers: Vec<i64>,

        /// Starting value (overrides defaults.sum_seed)
        #[arg(short, long, allow_negative_numbers = true)]
        initial: Option<i64>,
    },

    /// Multiply a list of integers
    Product {
        #[arg(value_name = "N", allow_negative_numbers = true)]
        numbers: Vec<i64>,

        /// Starting value (overrides defaults.product_seed)
        #[arg(short, long, allow_negative_numbers = true)]
        initial: Option<i64>,
    },

    /// Apply a sequence of operations to one calculator
    #[command(after_help = "Operations: add:N sub:N mul:N div:N value reset \
                            store recall clear sqrt (scientific) history (advanced)")]
    Run {
        /// Calculator variant
        #[arg(short, long, value_enum, default_value_t = VariantArg::Basic)]
        variant: VariantArg,

        /// Starting value (overrides defaults.initial_value)
        #[arg(short, long, allow_negative_numbers = true)]
        initial: Option<i64>,

        /// Operations, e.g. add:5 mul:2 div:3
        #[arg(value_name = "OP", required = true)]
        ops: Vec<String>,
    },

    /// List the public symbols of the calculator model
    Outline,

    /// Write a default .sample-calc/settings.toml
    Init {
        /// Force overwrite existing configuration
        #[arg(short, long)]
        force: bool,
    },

    /// Display active settings
    Config,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum VariantArg {
    Basic,
    Scientific,
    Advanced,
}

impl From<VariantArg> for Variant {
    fn from(arg: VariantArg) -> Self {
        match arg {
            VariantArg::Basic => Variant::Basic,
            VariantArg::Scientific => Variant::Scientific,
            VariantArg::Advanced => Variant::Advanced,
        }
    }
}
