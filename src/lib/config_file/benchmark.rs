//! Specify how the sweep over the suite configurations is performed
use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use crate::domain::measurement::RecordFormat;
use crate::domain::suite::Suite;

/// [`BenchmarkAttribute`] - The properties that drive a timing run
/// * `suite` - Which family of translation units is timed.
/// Possible values => ['string-literals', 'sfinae']
/// * `sizes` - The base sizes of the sweep, replacing the ones of the suite
/// * `jitter` - Maximum random offset applied to every base size
/// * `iterations` - How many times every configuration is compiled. The emitted
/// time is the average of all of them
/// * `seed` - Seed for the random offsets, to reproduce a previous sweep
/// * `scratch_file` - The name of the generated translation unit
/// * `format` - The line format of the emitted measurements.
/// Possible values => ['text', 'json']
///
/// ### Tests
///
/// ```rust
/// use cxxbench::config_file::benchmark::BenchmarkAttribute;
/// use cxxbench::domain::{measurement::RecordFormat, suite::Suite};
///
/// const CONFIG_FILE_MOCK: &str = r#"
///     #[benchmark]
///     suite = 'string-literals'
///     sizes = [10, 100, 1000]
///     iterations = 2
///     seed = 42
///     format = 'json'
/// "#;
///
/// let config: BenchmarkAttribute = toml::from_str(CONFIG_FILE_MOCK)
///    .expect("A failure happened parsing the cxxbench toml file");
///
/// assert_eq!(config.suite, Some(Suite::StringLiterals));
/// assert_eq!(config.sizes, Some(vec![10, 100, 1000]));
/// assert_eq!(config.jitter, None);
/// assert_eq!(config.iterations, Some(2));
/// assert_eq!(config.seed, Some(42));
/// assert_eq!(config.scratch_file, None);
/// assert_eq!(config.format, Some(RecordFormat::Json));
/// ```
#[derive(Serialize, Deserialize, Debug, PartialEq, Default)]
#[serde(deny_unknown_fields)]
pub struct BenchmarkAttribute<'a> {
    pub suite: Option<Suite>,
    pub sizes: Option<Vec<usize>>,
    pub jitter: Option<usize>,
    pub iterations: Option<usize>,
    pub seed: Option<u64>,
    #[serde(borrow)]
    pub scratch_file: Option<Cow<'a, str>>,
    pub format: Option<RecordFormat>,
}
