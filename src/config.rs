// src/config.rs
// ============================================================================
// CONFIG - Argumentos de línea de comandos
// ============================================================================
//
// Uso:
//   bin_r8tor4 -i input_f64.dat -o output_f32.dat
//   bin_r8tor4 -i input_f32.dat -o output_f64.dat --reverse
//
// ============================================================================

use std::path::PathBuf;

use clap::Parser;

use crate::dtype::Direction;

pub const DEFAULT_OUTPUT: &str = "outputf32_bin.dat";

#[derive(Parser, Debug)]
#[command(name = "bin_r8tor4")]
#[command(about = "Converting float64 binary data file to float32.")]
#[command(after_help = "-- Files are raw arrays in native byte order, with no header.")]
#[command(version)]
pub struct Args {
    /// Input file name (binary with type float64, float32 with --reverse)
    #[arg(short, long, value_name = "FILE")]
    pub input: PathBuf,

    /// Output file name (binary with type float32, float64 with --reverse)
    #[arg(short, long, value_name = "FILE", default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Convert from float32 to float64 reversely
    #[arg(short, long)]
    pub reverse: bool,

    /// Increase verbosity
    #[arg(short, long)]
    pub verbose: bool,

    /// Reject input whose size is not a whole number of elements
    #[arg(long)]
    pub strict: bool,
}

/// Configuración inmutable de una ejecución
#[derive(Debug, Clone)]
pub struct Config {
    pub input: PathBuf,
    pub output: PathBuf,
    pub direction: Direction,
    pub verbose: bool,
    pub strict: bool,
}

impl Config {
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
            direction: Direction::Narrow,
            verbose: false,
            strict: false,
        }
    }

    pub fn reversed(mut self, reverse: bool) -> Self {
        self.direction = Direction::from_reverse(reverse);
        self
    }

    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        Self {
            input: args.input,
            output: args.output,
            direction: Direction::from_reverse(args.reverse),
            verbose: args.verbose,
            strict: args.strict,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    #[test]
    fn test_short_flags() {
        let args = Args::try_parse_from(["bin_r8tor4", "-i", "a.dat", "-o", "b.dat", "-r", "-v"])
            .unwrap();
        let config = Config::from(args);
        assert_eq!(config.input, PathBuf::from("a.dat"));
        assert_eq!(config.output, PathBuf::from("b.dat"));
        assert_eq!(config.direction, Direction::Widen);
        assert!(config.verbose);
        assert!(!config.strict);
    }

    #[test]
    fn test_long_flags() {
        let args = Args::try_parse_from([
            "bin_r8tor4", "--input", "a.dat", "--output", "b.dat", "--reverse", "--verbose", "--strict",
        ])
        .unwrap();
        assert!(args.reverse);
        assert!(args.verbose);
        assert!(args.strict);
    }

    #[test]
    fn test_defaults() {
        let config = Config::from(Args::try_parse_from(["bin_r8tor4", "-i", "a.dat"]).unwrap());
        assert_eq!(config.output, PathBuf::from(DEFAULT_OUTPUT));
        assert_eq!(config.direction, Direction::Narrow);
        assert!(!config.verbose);
    }

    #[test]
    fn test_missing_input() {
        let err = Args::try_parse_from(["bin_r8tor4", "-o", "b.dat"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn test_unknown_flag() {
        let err = Args::try_parse_from(["bin_r8tor4", "-i", "a.dat", "--bogus"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownArgument);
    }

    #[test]
    fn test_builder() {
        let config = Config::new("x", "y").reversed(true).strict(true);
        assert_eq!(config.direction, Direction::Widen);
        assert!(config.strict);
    }

    #[test]
    fn test_args_definition() {
        use clap::CommandFactory;
        Args::command().debug_assert();
    }
}
