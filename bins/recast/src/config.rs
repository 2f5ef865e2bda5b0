use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "recast", about = "Convert values between runtime types")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Convert a value to a target type
    Convert(ConvertArgs),
    /// List built-in cultures
    Cultures,
    /// List registered specialized converters
    Converters(ConvertersArgs),
}

#[derive(Args, Clone, Debug)]
pub struct ConvertArgs {
    /// Input text. Omitted means a null value.
    pub value: Option<String>,

    /// Target type (`i32`, `decimal`, `datetime?`, ...)
    #[arg(long)]
    pub to: String,

    /// Read the input as this type first, e.g. `f64` to exercise narrowing
    #[arg(long)]
    pub from: Option<String>,

    /// Value returned when the input cannot be converted
    #[arg(long)]
    pub default: Option<String>,

    /// Culture name, overrides the config file
    #[arg(long)]
    pub culture: Option<String>,

    /// Fail instead of printing the default
    #[arg(long)]
    pub strict: bool,

    /// Path to a TOML config file
    #[arg(long, env = "RECAST_CONFIG")]
    pub config: Option<String>,
}

#[derive(Args, Clone, Debug)]
pub struct ConvertersArgs {
    /// Path to a TOML config file
    #[arg(long, env = "RECAST_CONFIG")]
    pub config: Option<String>,
}
