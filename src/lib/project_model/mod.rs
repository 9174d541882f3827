pub mod compiler;
pub mod plot;
pub mod sweep;

use std::path::PathBuf;

use crate::domain::suite::Suite;
use crate::domain::measurement::RecordFormat;

use self::{compiler::CompilerModel, plot::PlotModel, sweep::SweepModel};

/// The read only data that drives one run of the program, already resolved
/// from the cli arguments, the configuration file and the suite defaults
#[derive(Debug, PartialEq, Clone)]
pub struct BenchModel {
    pub suite: Suite,
    pub working_dir: PathBuf,
    pub record_format: RecordFormat,
    pub compiler: CompilerModel,
    pub sweep: SweepModel,
    pub plot: PlotModel,
}
