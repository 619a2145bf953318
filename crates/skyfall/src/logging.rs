//! Log setup. The terminal is busy drawing, so logs only ever go to a file.

use std::fs::OpenOptions;

use color_eyre::eyre::WrapErr;
use env_logger::{Env, Target};
use skyfall_config::Config;

/// Route `log` output to `config.log_file`, filtered by `RUST_LOG`
/// (default `info`). Does nothing when no log file is configured.
pub fn init(config: &Config) -> color_eyre::Result<()> {
    let Some(path) = &config.log_file else {
        return Ok(());
    };
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .wrap_err_with(|| format!("failed to open log file {}", path.display()))?;

    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .target(Target::Pipe(Box::new(file)))
        .try_init()?;
    log::info!("skyfall {} starting", env!("CARGO_PKG_VERSION"));
    Ok(())
}
