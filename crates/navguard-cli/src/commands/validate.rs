// Configuration file validation

use std::io::Write;

use anyhow::Context;
use navguard_core::GuardConfig;

/// Load `file`, failing with the validation error if it is unusable.
pub fn run(file: &str, out: &mut impl Write) -> anyhow::Result<()> {
    let config = GuardConfig::load(file)
        .with_context(|| format!("{file} is not a usable guard configuration"))?;
    tracing::debug!(file, prefixes = config.allowed_prefixes.len(), "configuration valid");
    writeln!(
        out,
        "{file}: ok ({} prefixes, fallback {})",
        config.allowed_prefixes.len(),
        config.fallback_path
    )?;
    Ok(())
}
