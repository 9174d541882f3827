//! The timing loop: for every size of the sweep, every configuration of the
//! suite is generated into the scratch file, compiled `iterations` times and
//! reported as one averaged [`Measurement`]

use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Duration;

use color_eyre::{eyre::Context, Result};
use rand::rngs::StdRng;

use crate::cli::output::{
    executors::{compile_command_line, execute_timed_command},
    records::write_measurement,
};
use crate::domain::{
    measurement::Measurement,
    suite::{BenchmarkSuite, Configuration},
};
use crate::project_model::BenchModel;
use crate::utils::{self, constants::error_messages};

/// Times every configuration of the suite for every size of the sweep,
/// emitting each measurement to `out` as soon as it's available
pub fn run_suite<W: Write>(model: &BenchModel, out: &mut W) -> Result<Vec<Measurement>> {
    let bench = model.suite.as_benchmark();
    let configurations = bench.configurations();
    let sweep = &model.sweep;
    let mut rng = sweep.rng();

    log::info!(
        "Timing {} configurations of the {} suite over {} sizes with {} (seed {})",
        configurations.len(),
        model.suite,
        sweep.sizes.len(),
        model.compiler.driver(),
        sweep.seed
    );

    let mut measurements = Vec::with_capacity(sweep.sizes.len() * configurations.len());
    let result = sweep_configurations(model, bench, &mut rng, out, &mut measurements);

    // The artifacts are removed even when the sweep is aborted halfway
    if !sweep.keep_files {
        remove_scratch_artifacts(model)?;
    }

    result.map(|_| measurements)
}

fn sweep_configurations<W: Write>(
    model: &BenchModel,
    bench: &dyn BenchmarkSuite,
    rng: &mut StdRng,
    out: &mut W,
    measurements: &mut Vec<Measurement>,
) -> Result<()> {
    for &base in &model.sweep.sizes {
        for &configuration in bench.configurations() {
            let size = model.sweep.jittered(base, rng);
            let measurement = time_configuration(model, bench, configuration, size)?;
            write_measurement(out, model.record_format, &measurement)?;
            measurements.push(measurement);
        }
    }
    Ok(())
}

/// Generates the translation unit for a configuration and a size, and times
/// the compiler over it
pub fn time_configuration(
    model: &BenchModel,
    bench: &dyn BenchmarkSuite,
    configuration: Configuration,
    size: usize,
) -> Result<Measurement> {
    let source = bench.generate(configuration, size)?;
    utils::fs::create_file(
        &model.working_dir,
        &model.sweep.scratch_file,
        source.as_bytes(),
    )
    .with_context(|| error_messages::FAILURE_WRITING_SCRATCH_FILE)?;

    let arguments = compile_command_line(model);
    let iterations = model.sweep.iterations;
    let mut total = Duration::ZERO;

    for iteration in 1..=iterations {
        let execution = execute_timed_command(model, &arguments)?;
        if !execution.status.success() {
            log::warn!(
                "[{}] - Compilation of {configuration} with size {size} exited with {} ({iteration}/{iterations})",
                model.compiler.cpp_compiler,
                execution.status
            );
        }
        total += execution.elapsed;
    }

    let seconds = total.as_secs_f64() / iterations as f64;
    log::debug!("{configuration} with size {size}: {seconds:.3}s on average");

    Ok(Measurement::new(configuration, size, seconds))
}

/// The files left behind by a timing run: the scratch source, and the object
/// file that the compiler drops in its working directory
fn scratch_artifacts(model: &BenchModel) -> [PathBuf; 2] {
    let scratch = Path::new(&model.sweep.scratch_file);
    let object = scratch
        .file_name()
        .map(PathBuf::from)
        .unwrap_or_else(|| scratch.to_path_buf())
        .with_extension(model.compiler.cpp_compiler.get_obj_file_extension());

    [
        model.working_dir.join(scratch),
        model.working_dir.join(object),
    ]
}

fn remove_scratch_artifacts(model: &BenchModel) -> Result<()> {
    for artifact in scratch_artifacts(model) {
        log::trace!("Removing {artifact:?}");
        utils::fs::remove_file_if_exists(&artifact)?;
    }
    Ok(())
}
