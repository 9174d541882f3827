//! root file for the crate where the datastructures that holds the TOML
//! parsed data lives.
pub mod benchmark;
pub mod compiler;
pub mod plot;

use serde::{Deserialize, Serialize};

use self::{benchmark::BenchmarkAttribute, compiler::CompilerAttribute, plot::PlotAttribute};

/// ```rust
/// use cxxbench::config_file::{
///     BenchConfigFile,
///     compiler::{CppCompiler, LanguageLevel},
/// };
/// use cxxbench::domain::suite::Suite;
///
/// const CONFIG_FILE_MOCK: &str = r#"
///     [compiler]
///     cpp_compiler = 'clang'
///     cpp_standard = '17'
///     extra_args = [ '-O1', '-w' ]
///
///     [benchmark]
///     suite = 'sfinae'
///     sizes = [ 50, 100 ]
///     jitter = 0
///
///     [plot]
///     output = 'overloads.svg'
/// "#;
///
/// let config: BenchConfigFile = cxxbench::config_file::bench_cfg_from_file(CONFIG_FILE_MOCK)
///     .expect("A failure happened parsing the cxxbench toml file");
///
/// let compiler_attribute = config.compiler.as_ref().unwrap();
/// assert_eq!(compiler_attribute.cpp_compiler, Some(CppCompiler::CLANG));
/// assert_eq!(compiler_attribute.cpp_standard, Some(LanguageLevel::CPP17));
/// assert_eq!(compiler_attribute.extra_args.as_ref().unwrap().len(), 2);
///
/// let benchmark_attribute = config.benchmark.as_ref().unwrap();
/// assert_eq!(benchmark_attribute.suite, Some(Suite::Sfinae));
/// assert_eq!(benchmark_attribute.sizes, Some(vec![50, 100]));
/// assert_eq!(benchmark_attribute.jitter, Some(0));
///
/// let plot_attribute = config.plot.as_ref().unwrap();
/// assert_eq!(plot_attribute.output.as_deref(), Some("overloads.svg"));
/// ```
/// The [`BenchConfigFile`] is the type that holds
/// the whole hierarchy of cxxbench config file attributes
/// and properties. Every table is optional, since the suites
/// carry their own defaults
#[derive(Serialize, Deserialize, Debug, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct BenchConfigFile<'a> {
    #[serde(borrow)]
    pub compiler: Option<CompilerAttribute<'a>>,
    #[serde(borrow)]
    pub benchmark: Option<BenchmarkAttribute<'a>>,
    #[serde(borrow)]
    pub plot: Option<PlotAttribute<'a>>,
}

pub fn bench_cfg_from_file(cfg: &'_ str) -> Result<BenchConfigFile<'_>, toml::de::Error> {
    <BenchConfigFile>::deserialize(&mut toml::Deserializer::new(cfg))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_is_a_valid_config() {
        let config = bench_cfg_from_file("").unwrap();
        assert_eq!(config, BenchConfigFile::default());
    }

    #[test]
    fn test_unknown_fields_are_rejected() {
        assert!(bench_cfg_from_file("[compiler]\ncpp_compiller = 'gcc'\n").is_err());
        assert!(bench_cfg_from_file("[targets]\nname = 'x'\n").is_err());
    }

    #[test]
    fn test_escaped_strings_are_owned() {
        let config = bench_cfg_from_file("[compiler]\ndriver_path = \"C:\\\\LLVM\\\\bin\\\\clang++\"\n")
            .unwrap();
        assert_eq!(
            config.compiler.unwrap().driver_path.as_deref(),
            Some("C:\\LLVM\\bin\\clang++")
        );
    }

    #[test]
    fn test_invalid_values() {
        assert!(bench_cfg_from_file("[compiler]\ncpp_compiler = 'icc'\n").is_err());
        assert!(bench_cfg_from_file("[benchmark]\nsuite = 'lambdas'\n").is_err());
        assert!(bench_cfg_from_file("[benchmark]\niterations = -1\n").is_err());
    }
}
