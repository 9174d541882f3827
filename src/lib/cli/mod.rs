pub mod output;

use std::fmt::Display;

use clap::{ArgGroup, Parser, ValueEnum};

use crate::domain::{measurement, suite};
use crate::project_model::compiler;

/// [`CliArgs`] is the command line arguments parser
///
/// #Test
/// ```rust
/// use clap::Parser;
/// use cxxbench::cli::{CliArgs, CppCompiler, Suite};
///
/// let parser = CliArgs::parse_from(["", "-v", "--time"]);
/// assert_eq!(1, parser.verbose);
/// assert!(parser.time);
/// assert!(!parser.graph);
///
/// let parser = CliArgs::parse_from(["", "--suite", "string-literals", "--graph"]);
/// assert_eq!(parser.suite, Some(Suite::StringLiterals));
///
/// let parser = CliArgs::parse_from(["", "--time", "--compiler", "clang", "--iterations", "5"]);
/// assert_eq!(parser.compiler, Some(CppCompiler::CLANG));
/// assert_eq!(parser.iterations, Some(5));
///
/// // One of the modes must always be present
/// assert!(CliArgs::try_parse_from(["", "--suite", "sfinae"]).is_err());
/// ```
#[derive(Parser, Debug)]
#[command(name = "cxxbench")]
#[command(author = "Zero Day Code")]
#[command(version = "0.3.0")]
#[command(
    about = "cxxbench times how long a C++ compiler takes on synthetic code generation strategies",
    long_about = "cxxbench generates synthetic translation units for every configuration of a suite, \
    times the compiler on each of them and plots the results.\n\
    Usage: cxxbench --time > results.txt ; cxxbench --graph < results.txt"
)]
#[command(group(
    ArgGroup::new("mode")
        .required(true)
        .multiple(true)
        .args(["time", "graph"])
))]
pub struct CliArgs {
    #[arg(
        long,
        help = "Compile every configuration of the suite and print one measurement per line"
    )]
    pub time: bool,

    #[arg(
        long,
        help = "Render the measurements read from stdin (or the ones just timed) as a chart"
    )]
    pub graph: bool,

    #[arg(short, long, action = clap::ArgAction::Count, help="cxxbench maximum allowed verbosity level is: '-vv'")]
    pub verbose: u8,

    #[arg(short, long, value_enum, help = "The benchmark suite [default: sfinae]")]
    pub suite: Option<Suite>,

    #[arg(long, value_enum, help = "Which compiler to time")]
    pub compiler: Option<CppCompiler>,

    #[arg(long, help = "An explicit path to the compiler driver")]
    pub driver_path: Option<String>,

    #[arg(short, long, help = "How many times every configuration is compiled")]
    pub iterations: Option<usize>,

    #[arg(long, help = "Seed for the random overload count offsets")]
    pub seed: Option<u64>,

    #[arg(long, value_enum, help = "The line format of the measurements [default: text]")]
    pub format: Option<RecordFormat>,

    #[arg(short, long, help = "Where the chart is written [default: <suite>.svg]")]
    pub output: Option<String>,

    #[arg(long, help = "Use a logarithmic scale for the compile times")]
    pub log_scale: bool,

    #[arg(
        short,
        long,
        help = "The configuration file [default: <root>/cxxbench.toml when present]"
    )]
    pub config: Option<String>,

    #[arg(
        long,
        help = "The working directory where the scratch files and the chart live"
    )]
    pub root: Option<String>,

    #[arg(long, help = "Don't remove the scratch source and object files after timing")]
    pub keep_files: bool,
}

/// [`Suite`] The benchmark suites available as a command line argument
#[derive(ValueEnum, Copy, Clone, Debug, PartialEq, Eq)]
pub enum Suite {
    StringLiterals,
    Sfinae,
}

impl From<Suite> for suite::Suite {
    fn from(value: Suite) -> Self {
        match value {
            Suite::StringLiterals => suite::Suite::StringLiterals,
            Suite::Sfinae => suite::Suite::Sfinae,
        }
    }
}

/// [`CppCompiler`] The C++ compilers available within cxxbench as a command line argument
#[derive(ValueEnum, Copy, Clone, Debug, PartialEq, Eq)]
pub enum CppCompiler {
    CLANG,
    MSVC,
    GCC,
}

impl Display for CppCompiler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match *self {
            CppCompiler::CLANG => write!(f, "clang"),
            CppCompiler::MSVC => write!(f, "msvc"),
            CppCompiler::GCC => write!(f, "gcc"),
        }
    }
}

impl From<CppCompiler> for compiler::CppCompiler {
    fn from(value: CppCompiler) -> Self {
        match value {
            CppCompiler::CLANG => compiler::CppCompiler::CLANG,
            CppCompiler::MSVC => compiler::CppCompiler::MSVC,
            CppCompiler::GCC => compiler::CppCompiler::GCC,
        }
    }
}

/// [`RecordFormat`] The line formats of the measurements
#[derive(ValueEnum, Copy, Clone, Debug, PartialEq, Eq)]
pub enum RecordFormat {
    Text,
    Json,
}

impl From<RecordFormat> for measurement::RecordFormat {
    fn from(value: RecordFormat) -> Self {
        match value {
            RecordFormat::Text => measurement::RecordFormat::Text,
            RecordFormat::Json => measurement::RecordFormat::Json,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_both_modes_at_once() {
        let args = CliArgs::parse_from(["", "--time", "--graph", "--suite", "string-literals"]);
        assert!(args.time && args.graph);
        assert_eq!(
            suite::Suite::from(args.suite.unwrap()),
            suite::Suite::StringLiterals
        );
    }

    #[test]
    fn test_optional_args_default_to_none() {
        let args = CliArgs::parse_from(["", "--graph"]);
        assert!(args.suite.is_none());
        assert!(args.compiler.is_none());
        assert!(args.driver_path.is_none());
        assert!(args.iterations.is_none());
        assert!(args.seed.is_none());
        assert!(args.format.is_none());
        assert!(args.output.is_none());
        assert!(args.config.is_none());
        assert!(args.root.is_none());
        assert!(!args.log_scale);
        assert!(!args.keep_files);
        assert_eq!(args.verbose, 0);
    }

    #[test]
    fn test_unknown_values_are_rejected() {
        assert!(CliArgs::try_parse_from(["", "--time", "--suite", "lambdas"]).is_err());
        assert!(CliArgs::try_parse_from(["", "--time", "--compiler", "icc"]).is_err());
        assert!(CliArgs::try_parse_from(["", "--time", "--format", "csv"]).is_err());
    }

    #[test]
    fn test_value_mappings() {
        assert_eq!(
            compiler::CppCompiler::from(CppCompiler::MSVC),
            compiler::CppCompiler::MSVC
        );
        assert_eq!(
            measurement::RecordFormat::from(RecordFormat::Json),
            measurement::RecordFormat::Json
        );
        assert_eq!(CppCompiler::GCC.to_string(), "gcc");
    }
}
