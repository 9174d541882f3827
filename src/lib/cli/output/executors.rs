//! Contains helpers to launch the compiler over the scratch translation unit
//! and to measure how long it takes

use std::process::{Command, ExitStatus, Stdio};
use std::time::{Duration, Instant};

use color_eyre::{eyre::Context, Result};

use crate::cli::output::arguments::{Argument, Arguments};
use crate::project_model::BenchModel;
use crate::utils::constants::error_messages;

/// The outcome of one timed compiler invocation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimedExecution {
    pub status: ExitStatus,
    pub elapsed: Duration,
}

/// Generates the arguments passed to the driver for compiling, but not
/// linking, the scratch translation unit of the model
pub fn compile_command_line(model: &BenchModel) -> Arguments<'_> {
    let compiler = &model.compiler;
    let mut arguments = Arguments::with_capacity(compiler.extra_args.len() + 3);

    arguments.push(compiler.language_level_arg());
    arguments.extend(compiler.extra_args.iter().cloned());
    arguments.push(compiler.cpp_compiler.compile_but_dont_link());
    arguments.push(Argument::from(model.sweep.scratch_file.as_str()));

    arguments
}

/// Executes a new [`std::process::Command`] for the configured compiler from
/// the working directory of the model, measuring the wall-clock time from the
/// spawn of the process until its exit.
///
/// A compiler that can't be launched is an error. A compiler that fails to
/// compile the translation unit is still timed, and the caller decides what
/// to do with the [`ExitStatus`]
pub fn execute_timed_command(
    model: &BenchModel,
    arguments: &Arguments<'_>,
) -> Result<TimedExecution> {
    let compiler = model.compiler.cpp_compiler;
    let driver = model.compiler.driver();
    log::trace!("[{compiler}] - Executing command => {driver} {arguments}");

    let start = Instant::now();
    let status = Command::new(driver)
        .args(arguments.iter())
        .current_dir(&model.working_dir)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .status()
        .with_context(|| {
            format!(
                "[{compiler}] - {}: {driver} {arguments}",
                error_messages::FAILURE_SPAWNING_COMPILER
            )
        })?;
    let elapsed = start.elapsed();

    log::trace!("[{compiler}] - Result: {status:?} in {elapsed:?}");
    Ok(TimedExecution { status, elapsed })
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::domain::{measurement::RecordFormat, suite::Suite};
    use crate::project_model::{
        compiler::{CompilerModel, CppCompiler, LanguageLevel},
        plot::PlotModel,
        sweep::SweepModel,
    };

    fn model(cpp_compiler: CppCompiler, driver_path: Option<&str>) -> BenchModel {
        BenchModel {
            suite: Suite::Sfinae,
            working_dir: std::env::temp_dir(),
            record_format: RecordFormat::Text,
            compiler: CompilerModel {
                cpp_compiler,
                driver_path: driver_path.map(String::from),
                cpp_standard: LanguageLevel::CPP20,
                extra_args: vec![Argument::from("-O2")],
            },
            sweep: SweepModel {
                sizes: vec![1],
                jitter: 0,
                iterations: 1,
                seed: 0,
                scratch_file: "x.cpp".into(),
                keep_files: false,
            },
            plot: PlotModel {
                output: PathBuf::from("out.svg"),
                width: 10,
                height: 10,
                log_scale: false,
                fit_degree: 4,
            },
        }
    }

    #[test]
    fn test_gnu_like_command_line() {
        let model = model(CppCompiler::GCC, None);
        assert_eq!(
            compile_command_line(&model).to_string(),
            "-std=c++20 -O2 -c x.cpp"
        );
    }

    #[test]
    fn test_msvc_command_line() {
        let model = model(CppCompiler::MSVC, None);
        assert_eq!(
            compile_command_line(&model).to_string(),
            "/std:c++20 -O2 /c x.cpp"
        );
    }

    #[test]
    fn test_missing_driver_is_an_error() {
        let model = model(CppCompiler::CLANG, Some("surely-not-a-cxx-driver-on-this-host"));
        let args = compile_command_line(&model);
        assert!(execute_timed_command(&model, &args).is_err());
    }

    #[cfg(unix)]
    #[test]
    fn test_failing_driver_is_still_timed() -> Result<()> {
        let model = model(CppCompiler::GCC, Some("false"));
        let args = compile_command_line(&model);
        let execution = execute_timed_command(&model, &args)?;
        assert!(!execution.status.success());
        Ok(())
    }
}
