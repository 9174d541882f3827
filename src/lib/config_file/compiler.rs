//! file for represent the available configuration properties within cxxbench
//! for setting up the target compiler
use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use crate::project_model::compiler;

/// [`CompilerAttribute`] - Configuration properties for
/// targeting one of the supported compilers
///
/// * `cpp_compiler` - One of the available compilers within cxxbench
/// Possible values => ['clang', 'gcc', 'msvc']
/// * `driver_path` - An optional path to the compiler driver, for
/// compilers that aren't on the PATH or for timing one concrete installation
/// * `cpp_standard` - An string defining the version of the ISO
/// C++ standard that will be passed to the compiler
/// * `extra_args` - A comma separated list of strings that will be passed
/// to the generated command lines, after the language level
///
/// ### Tests
///
/// ```rust
/// use cxxbench::config_file::compiler::{CompilerAttribute, CppCompiler, LanguageLevel};
///
/// const CONFIG_FILE_MOCK: &str = r#"
///     #[compiler]
///     cpp_compiler = 'gcc'
///     driver_path = '/usr/bin/g++-13'
///     cpp_standard = '20'
///     extra_args = ['-O2']
///"#;
///
/// let config: CompilerAttribute = toml::from_str(CONFIG_FILE_MOCK)
///    .expect("A failure happened parsing the cxxbench toml file");
///
/// assert_eq!(config.cpp_compiler, Some(CppCompiler::GCC));
/// assert_eq!(config.driver_path.as_deref(), Some("/usr/bin/g++-13"));
/// assert_eq!(config.cpp_standard, Some(LanguageLevel::CPP20));
/// assert_eq!(config.extra_args.unwrap()[0], "-O2");
/// ```
///
/// > Note: TOML table are toml commented (#) to allow us to parse
/// the inner attributes as the direct type that they belongs to.
/// That commented tables aren't the real TOML, they are just there
/// for testing and exemplification purposes of the inner attributes
/// of the configuration file.
///
/// For a test over a real example, please look at the
/// [`cxxbench::config_file::BenchConfigFile`] doc-test
#[derive(Serialize, Deserialize, Debug, PartialEq, Default)]
#[serde(deny_unknown_fields)]
pub struct CompilerAttribute<'a> {
    pub cpp_compiler: Option<CppCompiler>,
    #[serde(borrow)]
    pub driver_path: Option<Cow<'a, str>>,
    pub cpp_standard: Option<LanguageLevel>,
    #[serde(borrow)]
    pub extra_args: Option<Vec<Cow<'a, str>>>,
}

/// The C++ compilers available within cxxbench
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Clone, Copy)]
pub enum CppCompiler {
    #[serde(alias = "CLANG", alias = "Clang", alias = "clang")]
    CLANG,
    #[serde(alias = "MSVC", alias = "Msvc", alias = "msvc")]
    MSVC,
    #[serde(alias = "GCC", alias = "Gcc", alias = "gcc")]
    GCC,
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

/// The ISO C++ standard levels accepted by the benchmarks
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Clone, Copy)]
pub enum LanguageLevel {
    #[serde(alias = "11")]
    CPP11,
    #[serde(alias = "14")]
    CPP14,
    #[serde(alias = "17")]
    CPP17,
    #[serde(alias = "20")]
    CPP20,
    #[serde(alias = "23")]
    CPP23,
    #[serde(alias = "latest")]
    LATEST,
}

impl From<LanguageLevel> for compiler::LanguageLevel {
    fn from(value: LanguageLevel) -> Self {
        match value {
            LanguageLevel::CPP11 => compiler::LanguageLevel::CPP11,
            LanguageLevel::CPP14 => compiler::LanguageLevel::CPP14,
            LanguageLevel::CPP17 => compiler::LanguageLevel::CPP17,
            LanguageLevel::CPP20 => compiler::LanguageLevel::CPP20,
            LanguageLevel::CPP23 => compiler::LanguageLevel::CPP23,
            LanguageLevel::LATEST => compiler::LanguageLevel::LATEST,
        }
    }
}
