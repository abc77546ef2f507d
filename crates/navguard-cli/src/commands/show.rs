// Effective configuration display

use std::io::Write;

use super::{ConfigSource, OutputFormat};

/// Print the configuration selected by `source`.
pub fn run(
    source: &ConfigSource,
    format: OutputFormat,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let config = source.resolve()?;
    let rendered = match format {
        OutputFormat::Toml => config.to_toml_string()?,
        OutputFormat::Json => config.to_json_string()?,
    };
    writeln!(out, "{}", rendered.trim_end())?;
    Ok(())
}
