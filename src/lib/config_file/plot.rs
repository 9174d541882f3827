//! Presentation options of the rendered chart
use std::borrow::Cow;

use serde::{Deserialize, Serialize};

/// [`PlotAttribute`] - Stores the chart rendering configuration
///
/// * `output` - An string representing a relative to the working directory
/// path where the SVG chart is written. Defaults to `<suite>.svg`
/// * `width`, `height` - The chart size in pixels
/// * `log_scale` - Draws the compile times on a logarithmic axis
/// * `fit_degree` - The degree of the polynomial fitted over scattered series
///
/// ```rust
/// use cxxbench::config_file::plot::PlotAttribute;
///
/// const CONFIG_FILE_MOCK: &str = r#"
///     #[plot]
///     output = 'charts/sfinae.svg'
///     width = 800
///     log_scale = true
///"#;
///
/// let config: PlotAttribute = toml::from_str(CONFIG_FILE_MOCK)
///    .expect("A failure happened parsing the cxxbench toml file");
///
/// assert_eq!(config.output.as_deref(), Some("charts/sfinae.svg"));
/// assert_eq!(config.width, Some(800));
/// assert_eq!(config.height, None);
/// assert_eq!(config.log_scale, Some(true));
/// ```
#[derive(Serialize, Deserialize, Debug, PartialEq, Default)]
#[serde(deny_unknown_fields)]
pub struct PlotAttribute<'a> {
    #[serde(borrow)]
    pub output: Option<Cow<'a, str>>,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub log_scale: Option<bool>,
    pub fit_degree: Option<usize>,
}
