use std::path::PathBuf;

#[derive(Debug, PartialEq, Eq, Clone)]
pub struct PlotModel {
    pub output: PathBuf,
    pub width: u32,
    pub height: u32,
    pub log_scale: bool,
    pub fit_degree: usize,
}
