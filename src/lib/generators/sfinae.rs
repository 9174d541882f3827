//! Overload sets constrained through different SFINAE idioms.
//!
//! Every generated translation unit declares `overloads` function templates
//! `f(priority_tag<i>)`, each one only viable when its template argument `N`
//! equals `i`, and a `test()` function that calls every one of them through
//! the most derived `priority_tag`. The axes are:
//!
//! - the `enable_if` implementation (`strategy`): the classic struct template
//!   specialized for `false` or for `true`, or the SCARY metabase specialized
//!   for `false` or for `true`
//! - where the constraint lives (`variant`): the return type, a defaulted type
//!   template parameter, a defaulted value template parameter, or a C++20
//!   requires-clause that doesn't use `enable_if` at all

use std::fmt::Write;

use color_eyre::{eyre::eyre, Result};

use crate::domain::suite::{
    BenchmarkSuite, ChartKind, Configuration, Marker, SeriesStyle, Suite,
};
use crate::project_model::compiler::{CppCompiler, LanguageLevel};
use crate::utils::constants::error_messages;

/// The variant that expresses the constraint with a requires-clause
pub const REQUIRES_CLAUSE: u8 = 3;

const CONFIGURATIONS: [Configuration; 13] = [
    Configuration::new(0, 0),
    Configuration::new(0, 1),
    Configuration::new(0, 2),
    Configuration::new(1, 0),
    Configuration::new(1, 1),
    Configuration::new(1, 2),
    Configuration::new(2, 0),
    Configuration::new(2, 1),
    Configuration::new(2, 2),
    Configuration::new(3, 0),
    Configuration::new(3, 1),
    Configuration::new(3, 2),
    Configuration::new(0, REQUIRES_CLAUSE),
];

const COLORS: [(u8, u8, u8); 4] = [
    (0x1f, 0x77, 0xb4),
    (0xff, 0x7f, 0x0e),
    (0x2c, 0xa0, 0x2c),
    (0xd6, 0x27, 0x28),
];

const COMMON_PREAMBLE: &str = "\
template<int N> struct priority_tag : priority_tag<N-1> {};
template<> struct priority_tag<0> {};
template<int N> struct A {};
";

fn enable_if_preamble(strategy: u8) -> Result<&'static str> {
    Ok(match strategy {
        0 => "\
template<bool, class T> struct enable_if { using type = T; };
template<class T> struct enable_if<false, T> {};
template<bool B, class T = void> using enable_if_t = typename enable_if<B, T>::type;
",
        1 => "\
template<bool, class> struct enable_if {};
template<class T> struct enable_if<true, T> { using type = T; };
template<bool B, class T = void> using enable_if_t = typename enable_if<B, T>::type;
",
        2 => "\
template<bool> struct metabase { template<class T> using type = T; };
template<> struct metabase<false> {};
template<bool B, class T = void> using enable_if_t = typename metabase<B>::template type<T>;
",
        3 => "\
template<bool> struct metabase {};
template<> struct metabase<true> { template<class T> using type = T; };
template<bool B, class T = void> using enable_if_t = typename metabase<B>::template type<T>;
",
        _ => {
            return Err(eyre!(
                "{}: enable_if implementation {strategy}",
                error_messages::UNKNOWN_CONFIGURATION
            ))
        }
    })
}

fn write_overload(out: &mut String, variant: u8, i: usize) -> Result<()> {
    match variant {
        0 => writeln!(
            out,
            "template<int N> auto f(priority_tag<{i}>) -> enable_if_t<N=={i}, A<{i}>>;"
        )?,
        1 => writeln!(
            out,
            "template<int N, class = enable_if_t<N=={i}>> auto f(priority_tag<{i}>) -> A<{i}>;"
        )?,
        2 => writeln!(
            out,
            "template<int N, enable_if_t<N=={i}, int> = 0> auto f(priority_tag<{i}>) -> A<{i}>;"
        )?,
        REQUIRES_CLAUSE => writeln!(
            out,
            "template<int N> requires (N=={i}) auto f(priority_tag<{i}>) -> A<{i}>;"
        )?,
        _ => {
            return Err(eyre!(
                "{}: SFINAE position {variant}",
                error_messages::UNKNOWN_CONFIGURATION
            ))
        }
    }
    Ok(())
}

/// Generates the translation unit for an `enable_if` implementation (`strategy`)
/// used at a SFINAE position (`variant`) with `overloads` constrained overloads.
///
/// The requires-clause variant ignores the `enable_if` machinery, so it's only
/// accepted along with strategy `0`
///
/// ```rust
/// use cxxbench::generators::sfinae::generate;
///
/// let source = generate(0, 3, 2).unwrap();
/// assert!(source.contains("template<int N> requires (N==1) auto f(priority_tag<1>) -> A<1>;"));
/// assert!(source.contains("f<0>(priority_tag<2>{});"));
/// assert!(!source.contains("enable_if"));
/// ```
pub fn generate(strategy: u8, variant: u8, overloads: usize) -> Result<String> {
    let mut out = String::with_capacity(96 * overloads + 512);

    if variant == REQUIRES_CLAUSE {
        if strategy != 0 {
            return Err(eyre!(
                "{}: the requires-clause position only pairs with strategy 0, found {strategy}",
                error_messages::UNKNOWN_CONFIGURATION
            ));
        }
    } else {
        out.push_str(enable_if_preamble(strategy)?);
    }
    out.push_str(COMMON_PREAMBLE);

    for i in 0..overloads {
        write_overload(&mut out, variant, i)?;
    }

    writeln!(out, "void test() {{")?;
    for i in 0..overloads {
        writeln!(out, "    f<{i}>(priority_tag<{overloads}>{{}});")?;
    }
    writeln!(out, "}}")?;

    Ok(out)
}

/// The base overload counts of the sweep, before the jitter
pub fn overload_counts() -> Vec<usize> {
    (25..425).step_by(25).collect()
}

#[derive(Debug, Default, Clone, Copy)]
pub struct Sfinae;

impl BenchmarkSuite for Sfinae {
    fn suite(&self) -> Suite {
        Suite::Sfinae
    }

    fn scratch_file(&self) -> &'static str {
        "x.cpp"
    }

    fn configurations(&self) -> &'static [Configuration] {
        &CONFIGURATIONS
    }

    fn generate(&self, configuration: Configuration, size: usize) -> Result<String> {
        generate(configuration.strategy, configuration.variant, size)
    }

    fn series_style(&self, configuration: Configuration) -> Option<SeriesStyle> {
        let Configuration { strategy, variant } = configuration;
        let label = match (strategy, variant) {
            (0, 0) => "enable_if, false specialization, return type SFINAE",
            (1, 0) => "enable_if, true specialization, return type SFINAE",
            (2, 0) => "SCARY, false specialization, return type SFINAE",
            (3, 0) => "SCARY, true specialization, return type SFINAE",
            (0, 1) => "enable_if, false specialization, type parameter",
            (1, 1) => "enable_if, true specialization, type parameter",
            (2, 1) => "SCARY, false specialization, type parameter",
            (3, 1) => "SCARY, true specialization, type parameter",
            (0, 2) => "enable_if, false specialization, value parameter",
            (1, 2) => "enable_if, true specialization, value parameter",
            (2, 2) => "SCARY, false specialization, value parameter",
            (3, 2) => "SCARY, true specialization, value parameter",
            (0, REQUIRES_CLAUSE) => "C++20 requires-clause",
            _ => return None,
        };
        let marker = match (strategy, variant) {
            (_, REQUIRES_CLAUSE) => Marker::Circle,
            (0, _) => Marker::TriangleUp,
            (1, _) => Marker::TriangleLeft,
            (2, _) => Marker::TriangleDown,
            _ => Marker::TriangleRight,
        };

        Some(SeriesStyle {
            label,
            color: COLORS[variant as usize],
            marker,
        })
    }

    fn chart_kind(&self) -> ChartKind {
        ChartKind::ScatterWithFit
    }

    fn x_label(&self) -> &'static str {
        "overloads"
    }

    fn default_sizes(&self) -> Vec<usize> {
        overload_counts()
    }

    fn default_jitter(&self) -> usize {
        10
    }

    fn default_iterations(&self) -> usize {
        3
    }

    fn default_compiler(&self) -> CppCompiler {
        CppCompiler::GCC
    }

    fn default_language_level(&self) -> LanguageLevel {
        LanguageLevel::CPP20
    }

    fn default_extra_args(&self) -> &'static [&'static str] {
        &["-O2"]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::test_helpers::{assert_balanced, assert_each_index};

    #[test]
    fn test_generation_is_deterministic() -> Result<()> {
        for c in CONFIGURATIONS {
            assert_eq!(
                generate(c.strategy, c.variant, 61)?,
                generate(c.strategy, c.variant, 61)?
            );
        }
        Ok(())
    }

    #[test]
    fn test_every_overload_is_declared_and_called_once() -> Result<()> {
        for n in [0, 1, 25, 113] {
            for c in CONFIGURATIONS {
                let source = generate(c.strategy, c.variant, n)?;
                assert_balanced(&source);
                assert_each_index(&source, r"auto f\(priority_tag<(\d+)>\)", n, 1);
                assert_each_index(&source, r"-> (?:enable_if_t<N==\d+, )?A<(\d+)>", n, 1);
                assert_each_index(&source, r"f<(\d+)>\(priority_tag<", n, 1);
            }
        }
        Ok(())
    }

    #[test]
    fn test_calls_use_the_most_derived_tag() -> Result<()> {
        let source = generate(1, 1, 4)?;
        assert_eq!(source.matches("(priority_tag<4>{});").count(), 4);
        Ok(())
    }

    #[test]
    fn test_preamble_matches_the_strategy() -> Result<()> {
        assert!(generate(0, 0, 1)?.contains("template<class T> struct enable_if<false, T> {};"));
        assert!(generate(1, 0, 1)?
            .contains("template<class T> struct enable_if<true, T> { using type = T; };"));
        assert!(generate(2, 1, 1)?.contains("template<> struct metabase<false> {};"));
        assert!(generate(3, 2, 1)?
            .contains("template<> struct metabase<true> { template<class T> using type = T; };"));
        Ok(())
    }

    #[test]
    fn test_sfinae_positions() -> Result<()> {
        assert!(generate(0, 0, 3)?
            .contains("template<int N> auto f(priority_tag<2>) -> enable_if_t<N==2, A<2>>;"));
        assert!(generate(0, 1, 3)?.contains(
            "template<int N, class = enable_if_t<N==2>> auto f(priority_tag<2>) -> A<2>;"
        ));
        assert!(generate(0, 2, 3)?.contains(
            "template<int N, enable_if_t<N==2, int> = 0> auto f(priority_tag<2>) -> A<2>;"
        ));
        Ok(())
    }

    #[test]
    fn test_unknown_configurations() {
        assert!(generate(4, 0, 10).is_err());
        assert!(generate(0, 4, 10).is_err());
        assert!(generate(1, REQUIRES_CLAUSE, 10).is_err());
    }

    #[test]
    fn test_styles() {
        let style = Sfinae
            .series_style(Configuration::new(2, 1))
            .expect("(2, 1) is part of the suite");
        assert_eq!(style.marker, Marker::TriangleDown);
        assert_eq!(style.color, (0xff, 0x7f, 0x0e));
        assert_eq!(style.label, "SCARY, false specialization, type parameter");

        let requires = Sfinae
            .series_style(Configuration::new(0, REQUIRES_CLAUSE))
            .expect("the requires-clause baseline is part of the suite");
        assert_eq!(requires.marker, Marker::Circle);
        assert_eq!(requires.color, (0xd6, 0x27, 0x28));

        assert!(Sfinae.series_style(Configuration::new(3, 3)).is_none());
    }

    #[test]
    fn test_overload_counts() {
        let counts = overload_counts();
        assert_eq!(counts.first(), Some(&25));
        assert_eq!(counts.last(), Some(&400));
        assert_eq!(counts.len(), 16);
    }
}
