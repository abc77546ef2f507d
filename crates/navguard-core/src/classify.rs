//! # Href Classification
//!
//! Decides whether a raw `href` attribute may navigate normally or must be
//! intercepted. Pure function of the attribute, the page origin and the
//! guard configuration.
//!
//! ```text
//! href ──► exempt scheme? ──► resolve against origin ──► allow-listed path?
//!              │ yes                │ fails                  │ yes
//!              ▼                    ▼                        ▼
//!            Allow                Allow                    Allow
//!                                                            │ no
//!                                     same origin or starts with '/'?
//!                                           │ yes          │ no
//!                                           ▼              ▼
//!                                       Intercept        Allow
//! ```
//!
//! Every failure mode lets the click through.

use std::fmt;

use url::Url;

use crate::config::GuardConfig;

/// Raw href prefixes that are never intercepted.
pub const EXEMPT_PREFIXES: [&str; 4] = ["#", "javascript:", "mailto:", "tel:"];

/// The origin of the page hosting the guard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageOrigin {
    /// Origin as reported by `location.origin`, e.g. `https://app.example.com`.
    serialized: String,
    /// Parsed origin used as the resolution base. `None` for opaque origins
    /// such as `null`, which cannot serve as a base for any href.
    base: Option<Url>,
}

impl PageOrigin {
    /// Wrap the page origin string.
    ///
    /// Parseable input is reduced to its canonical origin, so
    /// `HTTPS://App.Example.com/` and `https://app.example.com` are the same
    /// page origin. Unparseable input such as `null` is kept verbatim.
    pub fn new(origin: impl Into<String>) -> Self {
        let raw = origin.into();
        match Url::parse(&raw) {
            Ok(base) => Self {
                serialized: base.origin().ascii_serialization(),
                base: Some(base),
            },
            Err(_) => Self {
                serialized: raw,
                base: None,
            },
        }
    }

    /// Origin of an already-parsed page URL.
    pub fn from_url(url: &Url) -> Self {
        Self::new(url.origin().ascii_serialization())
    }

    /// The origin string.
    pub fn as_str(&self) -> &str {
        &self.serialized
    }

    /// Resolve `href` the way `new URL(href, origin)` does.
    pub fn resolve(&self, href: &str) -> Option<Url> {
        self.base.as_ref()?.join(href).ok()
    }

    /// Whether `url` shares this page's origin.
    pub fn is_same_origin(&self, url: &Url) -> bool {
        url.origin().ascii_serialization() == self.serialized
    }
}

impl fmt::Display for PageOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.serialized)
    }
}

/// Why a click was let through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AllowReason {
    /// No anchor element encloses the click target.
    NoAnchor,
    /// The anchor has no `href`, or an empty one.
    MissingHref,
    /// Fragment, `javascript:`, `mailto:` or `tel:` link.
    ExemptScheme,
    /// The href could not be resolved into a URL.
    Unresolvable,
    /// The resolved path starts with an allow-listed prefix.
    AllowedPrefix,
    /// Absolute link to another origin.
    CrossOrigin,
}

impl fmt::Display for AllowReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                AllowReason::NoAnchor => "no-anchor",
                AllowReason::MissingHref => "missing-href",
                AllowReason::ExemptScheme => "exempt-scheme",
                AllowReason::Unresolvable => "unresolvable",
                AllowReason::AllowedPrefix => "allowed-prefix",
                AllowReason::CrossOrigin => "cross-origin",
            }
        )
    }
}

/// Outcome of classifying a single href.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickDecision {
    /// Default navigation proceeds.
    Allow(AllowReason),
    /// Default navigation must be cancelled.
    Intercept {
        /// Resolved path that fell outside the allow-list.
        path: String,
    },
}

impl ClickDecision {
    /// Whether this decision cancels navigation.
    pub fn is_intercept(&self) -> bool {
        matches!(self, ClickDecision::Intercept { .. })
    }
}

impl fmt::Display for ClickDecision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClickDecision::Allow(reason) => write!(f, "allow ({reason})"),
            ClickDecision::Intercept { path } => write!(f, "intercept {path}"),
        }
    }
}

/// Whether the raw href is a fragment or pseudo-scheme link.
pub fn is_exempt(href: &str) -> bool {
    EXEMPT_PREFIXES.iter().any(|prefix| href.starts_with(prefix))
}

/// Classify an anchor's raw `href` attribute.
pub fn classify_href(
    href: Option<&str>,
    origin: &PageOrigin,
    config: &GuardConfig,
) -> ClickDecision {
    let href = match href {
        Some(href) if !href.is_empty() => href,
        _ => return ClickDecision::Allow(AllowReason::MissingHref),
    };

    if is_exempt(href) {
        return ClickDecision::Allow(AllowReason::ExemptScheme);
    }

    let Some(url) = origin.resolve(href) else {
        tracing::trace!(href, "href did not resolve, letting it through");
        return ClickDecision::Allow(AllowReason::Unresolvable);
    };

    let path = url.path();
    if config.is_allowed(path) {
        return ClickDecision::Allow(AllowReason::AllowedPrefix);
    }

    if origin.is_same_origin(&url) || href.starts_with('/') {
        ClickDecision::Intercept {
            path: path.to_string(),
        }
    } else {
        ClickDecision::Allow(AllowReason::CrossOrigin)
    }
}
