// Dry-run classification of hrefs

use std::io::Write;

use navguard_core::{ClickDecision, NavigationGuard, PageOrigin};

use super::ConfigSource;

/// Classify each href and print one line per href.
pub fn run(
    source: &ConfigSource,
    origin: &str,
    hrefs: &[String],
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let guard = NavigationGuard::new(source.resolve()?)?;
    let origin = PageOrigin::new(origin);
    tracing::debug!(%origin, count = hrefs.len(), "classifying hrefs");

    for href in hrefs {
        let verdict = match guard.classify(Some(href.as_str()), &origin) {
            ClickDecision::Allow(reason) => format!("allow ({reason})"),
            ClickDecision::Intercept { path } => {
                format!("intercept {path} -> {}", guard.config().fallback_path)
            }
        };
        writeln!(out, "{href}\t{verdict}")?;
    }
    Ok(())
}
