use color_eyre::{
    eyre::{eyre, Context},
    Result,
};
use env_logger::{Builder, Target};
use log::LevelFilter;

#[allow(clippy::comparison_chain)]
/// [`config_logger`] The configuration for `env_logger`
///
/// The measurement lines are written to stdout, so callers are expected to
/// pass [`Target::Stderr`] unless they know that stdout isn't piped anywhere
pub fn config_logger(verbose_level: u8, target: Target) -> Result<()> {
    let mut builder = Builder::from_default_env();

    builder
        .target(target)
        .format_indent(Some(4))
        .format_module_path(false)
        .format_timestamp_millis();

    if verbose_level == 1 {
        builder.filter(None, LevelFilter::Debug);
    } else if verbose_level == 2 {
        builder.filter(None, LevelFilter::Trace);
    } else if verbose_level > 2 {
        return Err(eyre!("cxxbench maximum allowed verbosity level is: '-vv'"));
    } else {
        builder.filter(None, LevelFilter::Info);
    }

    builder
        .try_init()
        .with_context(|| "cxxbench wasn't able to set up the logger")
}
