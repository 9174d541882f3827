//! Seven different ways of storing `n` string literals in a translation unit

use std::fmt::Write;

use color_eyre::{eyre::eyre, Result};

use crate::domain::suite::{
    BenchmarkSuite, ChartKind, Configuration, Marker, SeriesStyle, Suite,
};
use crate::project_model::compiler::{CppCompiler, LanguageLevel};
use crate::utils::constants::error_messages;

pub const STRATEGIES: u8 = 7;

const CONFIGURATIONS: [Configuration; STRATEGIES as usize] = [
    Configuration::new(0, 0),
    Configuration::new(1, 0),
    Configuration::new(2, 0),
    Configuration::new(3, 0),
    Configuration::new(4, 0),
    Configuration::new(5, 0),
    Configuration::new(6, 0),
];

const STYLES: [(&str, (u8, u8, u8)); STRATEGIES as usize] = [
    ("char* variables", (0xff, 0x00, 0x00)),
    ("string variables", (0x00, 0xff, 0x00)),
    ("string functions", (0x00, 0x00, 0xff)),
    ("repeated emplace", (0xff, 0x00, 0xff)),
    ("initializer_list", (0xff, 0xff, 0x00)),
    ("static array of string", (0x00, 0xff, 0xff)),
    ("static array of char*", (0x00, 0x00, 0x00)),
];

/// Generates the translation unit for the storage `strategy` holding `n` literals
///
/// ```rust
/// use cxxbench::generators::string_literals::generate;
///
/// let source = generate(0, 2).unwrap();
/// assert_eq!(
///     source,
///     "#include <string>\n#include <vector>\nconst char *s0 = \"s0\";\nconst char *s1 = \"s1\";\n"
/// );
/// ```
pub fn generate(strategy: u8, n: usize) -> Result<String> {
    let mut out = String::with_capacity(48 * n + 64);
    writeln!(out, "#include <string>")?;
    writeln!(out, "#include <vector>")?;

    match strategy {
        0 => {
            for i in 0..n {
                writeln!(out, "const char *s{i} = \"s{i}\";")?;
            }
        }
        1 => {
            for i in 0..n {
                writeln!(out, "std::string s{i} = \"s{i}\";")?;
            }
        }
        2 => {
            for i in 0..n {
                writeln!(out, "std::string f{i}() {{ return \"s{i}\"; }}")?;
            }
        }
        3 => {
            writeln!(out, "std::vector<std::string> foo() {{")?;
            writeln!(out, "    std::vector<std::string> result;")?;
            for i in 0..n {
                writeln!(out, "    result.emplace_back(\"s{i}\");")?;
            }
            writeln!(out, "    return result;")?;
            writeln!(out, "}}")?;
        }
        4 => {
            writeln!(out, "std::vector<std::string> foo() {{")?;
            writeln!(out, "    return {{")?;
            literal_rows(&mut out, n)?;
            writeln!(out, "    }};")?;
            writeln!(out, "}}")?;
        }
        5 | 6 => {
            let declarator = if strategy == 5 {
                "std::string a"
            } else {
                "const char *a"
            };
            writeln!(out, "std::vector<std::string> foo() {{")?;
            writeln!(out, "    static {declarator}[{n}] = {{")?;
            literal_rows(&mut out, n)?;
            writeln!(out, "    }};")?;
            writeln!(out, "    return std::vector<std::string>(a, a+{n});")?;
            writeln!(out, "}}")?;
        }
        _ => {
            return Err(eyre!(
                "{}: string literals strategy {strategy}",
                error_messages::UNKNOWN_CONFIGURATION
            ))
        }
    }

    Ok(out)
}

fn literal_rows(out: &mut String, n: usize) -> std::fmt::Result {
    for i in 0..n {
        writeln!(out, "        \"s{i}\",")?;
    }
    Ok(())
}

/// The literal counts swept for the vector size chart. The overlapping
/// `10_000..20_000` range is swept twice
pub fn vector_sizes() -> Vec<usize> {
    std::iter::once(10)
        .chain((100..1_000).step_by(100))
        .chain((1_000..20_000).step_by(1_000))
        .chain((10_000..100_000).step_by(10_000))
        .collect()
}

#[derive(Debug, Default, Clone, Copy)]
pub struct StringLiterals;

impl BenchmarkSuite for StringLiterals {
    fn suite(&self) -> Suite {
        Suite::StringLiterals
    }

    fn scratch_file(&self) -> &'static str {
        "x.cc"
    }

    fn configurations(&self) -> &'static [Configuration] {
        &CONFIGURATIONS
    }

    fn generate(&self, configuration: Configuration, size: usize) -> Result<String> {
        if configuration.variant != 0 {
            return Err(eyre!(
                "{}: string literals don't have variants, found {configuration}",
                error_messages::UNKNOWN_CONFIGURATION
            ));
        }
        generate(configuration.strategy, size)
    }

    fn series_style(&self, configuration: Configuration) -> Option<SeriesStyle> {
        if configuration.variant != 0 {
            return None;
        }
        STYLES
            .get(configuration.strategy as usize)
            .map(|&(label, color)| SeriesStyle {
                label,
                color,
                marker: Marker::None,
            })
    }

    fn chart_kind(&self) -> ChartKind {
        ChartKind::Lines
    }

    fn x_label(&self) -> &'static str {
        "vector size"
    }

    fn default_sizes(&self) -> Vec<usize> {
        vector_sizes()
    }

    fn default_compiler(&self) -> CppCompiler {
        CppCompiler::CLANG
    }

    fn default_language_level(&self) -> LanguageLevel {
        LanguageLevel::CPP11
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::test_helpers::{assert_balanced, assert_each_index};

    #[test]
    fn test_generation_is_deterministic() -> Result<()> {
        for strategy in 0..STRATEGIES {
            assert_eq!(generate(strategy, 137)?, generate(strategy, 137)?);
        }
        Ok(())
    }

    #[test]
    fn test_every_index_appears_once() -> Result<()> {
        for n in [0, 1, 10, 250] {
            for strategy in 0..STRATEGIES {
                let source = generate(strategy, n)?;
                assert_balanced(&source);
                assert_each_index(&source, r#""s(\d+)""#, n, 1);
            }
            // The identifiers also follow the index
            assert_each_index(&generate(0, n)?, r"\*s(\d+) =", n, 1);
            assert_each_index(&generate(1, n)?, r"string s(\d+) =", n, 1);
            assert_each_index(&generate(2, n)?, r"string f(\d+)\(\)", n, 1);
        }
        Ok(())
    }

    #[test]
    fn test_static_arrays_declare_their_extent() -> Result<()> {
        let strings = generate(5, 3)?;
        assert!(strings.contains("    static std::string a[3] = {\n"));
        assert!(strings.contains("    return std::vector<std::string>(a, a+3);\n"));

        let pointers = generate(6, 3)?;
        assert!(pointers.contains("    static const char *a[3] = {\n"));
        Ok(())
    }

    #[test]
    fn test_emplace_and_initializer_list_shapes() -> Result<()> {
        assert_eq!(
            generate(3, 1)?,
            "#include <string>\n#include <vector>\n\
             std::vector<std::string> foo() {\n    std::vector<std::string> result;\n    \
             result.emplace_back(\"s0\");\n    return result;\n}\n"
        );
        assert_eq!(
            generate(4, 2)?,
            "#include <string>\n#include <vector>\n\
             std::vector<std::string> foo() {\n    return {\n        \"s0\",\n        \"s1\",\n    };\n}\n"
        );
        Ok(())
    }

    #[test]
    fn test_unknown_strategy() {
        assert!(generate(STRATEGIES, 10).is_err());
        assert!(StringLiterals
            .generate(Configuration::new(0, 1), 10)
            .is_err());
    }

    #[test]
    fn test_vector_sizes_sweep() {
        let sizes = vector_sizes();
        assert_eq!(sizes.len(), 1 + 9 + 19 + 9);
        assert_eq!(sizes[0], 10);
        assert_eq!(&sizes[1..4], &[100, 200, 300]);
        assert_eq!(sizes[10], 1_000);
        assert_eq!(sizes[28], 19_000);
        assert_eq!(sizes[29], 10_000);
        assert_eq!(*sizes.last().unwrap(), 90_000);
    }
}
