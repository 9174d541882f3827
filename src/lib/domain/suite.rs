//! The abstraction over a family of synthetic translation units whose compile
//! times are compared against each other

use core::fmt;

use color_eyre::Result;
use serde::{Deserialize, Serialize};

use crate::generators::{sfinae::Sfinae, string_literals::StringLiterals};
use crate::project_model::compiler::{CppCompiler, LanguageLevel};

/// The benchmark suites available within cxxbench
#[derive(Debug, Default, PartialEq, Eq, Copy, Clone, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Suite {
    StringLiterals,
    #[default]
    Sfinae,
}

impl Suite {
    /// Returns the implementation that knows how to generate, schedule and
    /// draw the configurations of this suite
    pub fn as_benchmark(&self) -> &'static dyn BenchmarkSuite {
        match *self {
            Suite::StringLiterals => &StringLiterals,
            Suite::Sfinae => &Sfinae,
        }
    }
}

impl fmt::Display for Suite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_ref())
    }
}

impl AsRef<str> for Suite {
    fn as_ref(&self) -> &str {
        match *self {
            Suite::StringLiterals => "string-literals",
            Suite::Sfinae => "sfinae",
        }
    }
}

/// Identifies one generated translation unit shape inside a suite.
///
/// `strategy` is the primary axis (how the literals are stored, or which
/// `enable_if` flavour is used) and `variant` the secondary one (where the
/// SFINAE happens). Suites with a single axis always use `variant == 0`
#[derive(Debug, PartialEq, Eq, Copy, Clone, Hash, PartialOrd, Ord)]
pub struct Configuration {
    pub strategy: u8,
    pub variant: u8,
}

impl Configuration {
    pub const fn new(strategy: u8, variant: u8) -> Self {
        Self { strategy, variant }
    }
}

impl fmt::Display for Configuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.strategy, self.variant)
    }
}

/// The glyph used to draw the points of a series
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum Marker {
    TriangleUp,
    TriangleLeft,
    TriangleDown,
    TriangleRight,
    Circle,
    /// No glyph at all, only the line joining the points
    None,
}

/// How a suite prefers its measurements to be drawn
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum ChartKind {
    /// A polyline per series, joining the points ordered by size
    Lines,
    /// Scattered points per series, plus a least squares polynomial curve
    ScatterWithFit,
}

/// Presentation details of a single series on the chart
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub struct SeriesStyle {
    pub label: &'static str,
    pub color: (u8, u8, u8),
    pub marker: Marker,
}

/// Represents any benchmark suite and the operations that the harness and
/// the plotter need from it
pub trait BenchmarkSuite {
    fn suite(&self) -> Suite;

    /// The filename of the scratch translation unit, relative to the working directory
    fn scratch_file(&self) -> &'static str;

    /// Every configuration timed for each size, in the order they're timed
    fn configurations(&self) -> &'static [Configuration];

    /// Generates the source code of the translation unit for a configuration
    /// and a size. Fails for configurations that don't belong to the suite
    fn generate(&self, configuration: Configuration, size: usize) -> Result<String>;

    /// Returns the presentation details of a configuration, if it belongs to the suite
    fn series_style(&self, configuration: Configuration) -> Option<SeriesStyle>;

    fn chart_kind(&self) -> ChartKind;

    fn x_label(&self) -> &'static str;

    fn y_label(&self) -> &'static str {
        "compile time (seconds)"
    }

    /// The base sizes of the sweep, before any jitter is applied
    fn default_sizes(&self) -> Vec<usize>;

    /// The maximum distance that a size may be randomly moved from its base
    fn default_jitter(&self) -> usize {
        0
    }

    fn default_iterations(&self) -> usize {
        1
    }

    fn default_compiler(&self) -> CppCompiler;

    fn default_language_level(&self) -> LanguageLevel;

    fn default_extra_args(&self) -> &'static [&'static str] {
        &[]
    }
}
