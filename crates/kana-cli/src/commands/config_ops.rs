use std::fs;
use std::io::{self, Write};
use std::path::Path;

use kana_core::settings::{self, Settings, SettingsError};
use kana_core::Options;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot read {path}: {source}")]
    Read { path: String, source: io::Error },
    #[error(transparent)]
    Settings(#[from] SettingsError),
    #[error("cannot write output: {0}")]
    Write(#[from] io::Error),
}

pub fn read_settings(path: &Path) -> Result<Settings, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.display().to_string(),
        source,
    })?;
    Ok(settings::parse_settings_toml(&content)?)
}

/// Engine options from a settings file, or the defaults when none is given.
pub fn load_options(path: Option<&Path>) -> Result<Options, ConfigError> {
    match path {
        Some(p) => Ok(read_settings(p)?.options()),
        None => Ok(Options::default()),
    }
}

pub fn settings_export<W: Write>(out: &mut W) -> io::Result<()> {
    out.write_all(settings::default_toml().as_bytes())
}

pub fn settings_validate<W: Write>(path: &Path, out: &mut W) -> Result<(), ConfigError> {
    let opts = read_settings(path)?.options();
    writeln!(
        out,
        "OK: decoder.strict_encoding={}, engine.trailing_sokuon={:?}",
        opts.strict_encoding, opts.trailing_sokuon
    )?;
    Ok(())
}
