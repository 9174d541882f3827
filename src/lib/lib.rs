pub mod cli;
pub mod config_file;
pub mod domain;
pub mod generators;
pub mod harness;
pub mod plot;
pub mod project_model;
pub mod utils;

/// The entry point for the execution of the program.
///
/// This module existence is motivated to let us run
/// integration tests for the whole operations of the program
/// without having to do fancy work about checking the
/// data sent to stdout/stderr
pub mod worker {
    use std::io::{self, BufRead, Write};
    use std::path::{Path, PathBuf};
    use std::{fs, time::Instant};

    use color_eyre::{eyre::Context, Result};

    use crate::{
        cli::{output::records, CliArgs},
        config_file::{self, BenchConfigFile},
        domain::measurement::Measurement,
        harness, plot,
        project_model::BenchModel,
        utils::{self, constants::error_messages, reader},
    };

    /// The main work of the program. Runs the modes requested in the CLI,
    /// reading the measurements to plot from stdin and writing the timed
    /// ones to stdout
    pub fn run_cxxbench(cli_args: &CliArgs, root: &Path) -> Result<()> {
        let stdin = io::stdin();
        let stdout = io::stdout();
        run_with_io(cli_args, root, stdin.lock(), &mut stdout.lock())
    }

    /// Same as [`run_cxxbench`], but over any pair of streams.
    ///
    /// When both modes are requested, the measurements just timed are the
    /// ones drawn, and the input stream is never read
    pub fn run_with_io<R: BufRead, W: Write>(
        cli_args: &CliArgs,
        root: &Path,
        input: R,
        output: &mut W,
    ) -> Result<()> {
        let abs_root = determine_absolute_path_of_the_working_dir(cli_args, root)?;
        let raw_config = load_config_file(cli_args, &abs_root)?;
        let config: BenchConfigFile<'_> = match raw_config.as_deref() {
            Some(raw) => config_file::bench_cfg_from_file(raw)
                .with_context(|| error_messages::PARSE_CFG_FILE)?,
            None => BenchConfigFile::default(),
        };

        let model = reader::build_model(config, cli_args, &abs_root)
            .with_context(|| error_messages::FAILURE_BUILDING_MODEL)?;
        log::trace!("{model:?}");

        perform_main_work(cli_args, &model, input, output)
    }

    fn perform_main_work<R: BufRead, W: Write>(
        cli_args: &CliArgs,
        model: &BenchModel,
        input: R,
        output: &mut W,
    ) -> Result<()> {
        let timed = if cli_args.time {
            let timing_ts = Instant::now();
            let measurements = harness::run_suite(model, output)
                .with_context(|| error_messages::FAILURE_TIMING_SUITE)?;
            log::info!(
                "Timed {} measurements of the {} suite in {:?}",
                measurements.len(),
                model.suite,
                timing_ts.elapsed()
            );
            Some(measurements)
        } else {
            None
        };

        if cli_args.graph {
            let measurements: Vec<Measurement> = match timed {
                Some(measurements) => measurements,
                None => records::read_measurements(input, model.record_format)
                    .with_context(|| error_messages::FAILURE_READING_MEASUREMENTS)?,
            };
            plot::render(model, &measurements)
                .with_context(|| error_messages::FAILURE_RENDERING_PLOT)?;
            log::info!("Chart written to {:?}", model.plot.output);
        }

        Ok(())
    }

    /// Resolves the full path of the working directory. If the `--root`
    /// [`CliArgs`] arg is present, it's resolved against `base`, otherwise
    /// `base` itself is the working directory
    fn determine_absolute_path_of_the_working_dir(
        cli_args: &CliArgs,
        base: &Path,
    ) -> Result<PathBuf> {
        let working_dir = cli_args
            .root
            .as_deref()
            .map(|root| base.join(root))
            .unwrap_or_else(|| base.to_path_buf());

        utils::fs::get_absolute_path(working_dir)
            .with_context(|| error_messages::FAILURE_GATHERING_WORKING_DIR_ABS_PATH)
    }

    /// Reads the raw content of the configuration file that applies to
    /// this run, if any
    fn load_config_file(cli_args: &CliArgs, abs_root: &Path) -> Result<Option<String>> {
        let Some(cfg_path) = reader::find_config_file(abs_root, cli_args.config.as_deref())?
        else {
            return Ok(None);
        };

        log::debug!("Loading the configuration file: {cfg_path:?}");
        fs::read_to_string(&cfg_path)
            .with_context(|| format!("{}: {:?}", error_messages::READ_CFG_FILE, cfg_path))
            .map(Some)
    }

}
