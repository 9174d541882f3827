use std::borrow::Cow;
use std::path::{Path, PathBuf};

use color_eyre::{eyre::eyre, Result};

use crate::{
    cli::{output::arguments::Argument, CliArgs},
    config_file::{
        benchmark::BenchmarkAttribute, compiler::CompilerAttribute, plot::PlotAttribute,
        BenchConfigFile,
    },
    domain::{
        measurement::RecordFormat,
        suite::{BenchmarkSuite, Suite},
    },
    project_model::{
        compiler::CompilerModel, plot::PlotModel, sweep::SweepModel, BenchModel,
    },
    utils::constants::{self, debug_messages, defaults, error_messages},
};

/// Resolves which configuration file applies to this run.
///
/// An explicit `--config` path must exist. Without it, `<root>/cxxbench.toml`
/// is used when present, and the run goes on with the suite defaults otherwise
pub fn find_config_file(root: &Path, explicit: Option<&str>) -> Result<Option<PathBuf>> {
    if let Some(cfg) = explicit {
        let path = root.join(cfg);
        return if path.is_file() {
            Ok(Some(path))
        } else {
            Err(eyre!("{}: {path:?}", error_messages::READ_CFG_FILE))
        };
    }

    let default_path = root
        .join(constants::CONFIG_FILE_NAME)
        .with_extension(constants::CONFIG_FILE_EXT);
    if default_path.is_file() {
        log::debug!("Found the configuration file: {default_path:?}");
        Ok(Some(default_path))
    } else {
        log::debug!("{}", debug_messages::NO_CFG_FILE_FOUND);
        Ok(None)
    }
}

/// Maps the configuration file and the command line arguments into the
/// [`BenchModel`]. The precedence is: cli argument, configuration file, suite default
pub fn build_model(
    config: BenchConfigFile<'_>,
    cli_args: &CliArgs,
    absolute_working_dir: &Path,
) -> Result<BenchModel> {
    log::debug!("{}", debug_messages::MAPPING_CFG_TO_MODEL);

    let suite: Suite = cli_args
        .suite
        .map(Suite::from)
        .or_else(|| config.benchmark.as_ref().and_then(|b| b.suite))
        .unwrap_or_default();
    let bench = suite.as_benchmark();

    let record_format = cli_args
        .format
        .map(RecordFormat::from)
        .or_else(|| config.benchmark.as_ref().and_then(|b| b.format))
        .unwrap_or_default();

    let compiler = assemble_compiler_model(bench, config.compiler, cli_args);
    let sweep = assemble_sweep_model(bench, config.benchmark, cli_args)?;
    let plot = assemble_plot_model(suite, config.plot, cli_args, absolute_working_dir);

    Ok(BenchModel {
        suite,
        working_dir: absolute_working_dir.to_path_buf(),
        record_format,
        compiler,
        sweep,
        plot,
    })
}

fn assemble_compiler_model(
    bench: &dyn BenchmarkSuite,
    config: Option<CompilerAttribute<'_>>,
    cli_args: &CliArgs,
) -> CompilerModel {
    let config = config.unwrap_or_default();

    let extra_args = config
        .extra_args
        .map(|args| {
            args.into_iter()
                .map(|arg| Argument::from(arg.into_owned()))
                .collect()
        })
        .unwrap_or_else(|| {
            bench
                .default_extra_args()
                .iter()
                .map(|arg| Argument::from(*arg))
                .collect()
        });

    CompilerModel {
        cpp_compiler: cli_args
            .compiler
            .map(Into::into)
            .or_else(|| config.cpp_compiler.map(Into::into))
            .unwrap_or_else(|| bench.default_compiler()),
        driver_path: cli_args
            .driver_path
            .clone()
            .or_else(|| config.driver_path.map(Cow::into_owned)),
        cpp_standard: config
            .cpp_standard
            .map(Into::into)
            .unwrap_or_else(|| bench.default_language_level()),
        extra_args,
    }
}

fn assemble_sweep_model(
    bench: &dyn BenchmarkSuite,
    config: Option<BenchmarkAttribute<'_>>,
    cli_args: &CliArgs,
) -> Result<SweepModel> {
    let config = config.unwrap_or_default();

    let iterations = cli_args
        .iterations
        .or(config.iterations)
        .unwrap_or_else(|| bench.default_iterations());
    if iterations == 0 {
        return Err(eyre!(
            "{}: {}",
            error_messages::FAILURE_BUILDING_MODEL,
            error_messages::ZERO_ITERATIONS
        ));
    }

    let sizes = config.sizes.unwrap_or_else(|| bench.default_sizes());
    if sizes.contains(&0) {
        return Err(eyre!(
            "{}: {}",
            error_messages::FAILURE_BUILDING_MODEL,
            error_messages::ZERO_SIZE
        ));
    }

    let seed = cli_args.seed.or(config.seed).unwrap_or_else(|| {
        let seed = rand::random::<u64>();
        log::info!("No seed provided. Using {seed} for this run");
        seed
    });

    Ok(SweepModel {
        sizes,
        jitter: config.jitter.unwrap_or_else(|| bench.default_jitter()),
        iterations,
        seed,
        scratch_file: config
            .scratch_file
            .map(Cow::into_owned)
            .unwrap_or_else(|| bench.scratch_file().to_string()),
        keep_files: cli_args.keep_files,
    })
}

fn assemble_plot_model(
    suite: Suite,
    config: Option<PlotAttribute<'_>>,
    cli_args: &CliArgs,
    working_dir: &Path,
) -> PlotModel {
    let config = config.unwrap_or_default();

    let output = cli_args
        .output
        .as_deref()
        .map(PathBuf::from)
        .or_else(|| config.output.as_deref().map(PathBuf::from))
        .unwrap_or_else(|| {
            PathBuf::from(suite.as_ref()).with_extension(constants::PLOT_FILE_EXT)
        });

    PlotModel {
        // Absolute outputs are kept as they are by the join
        output: working_dir.join(output),
        width: config.width.unwrap_or(defaults::PLOT_WIDTH),
        height: config.height.unwrap_or(defaults::PLOT_HEIGHT),
        log_scale: cli_args.log_scale || config.log_scale.unwrap_or_default(),
        fit_degree: config.fit_degree.unwrap_or(defaults::FIT_DEGREE),
    }
}
