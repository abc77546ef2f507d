//! # Guard Configuration
//!
//! A guard is parameterised by three options: the ordered allow-list of path
//! prefixes, the fallback location used when the user accepts the prompt, and
//! the prompt text itself. Two presets cover the deployed areas:
//!
//! | Variant | Fallback          | First prefix |
//! |---------|-------------------|--------------|
//! | `admin` | `/admin`          | `/admin`     |
//! | `user`  | `/user/dashboard` | `/user`      |
//!
//! Configuration may be supplied as TOML (files on disk), JSON, or a plain
//! JavaScript object. Field names are accepted in snake_case and camelCase.
//!
//! ```toml
//! variant = "admin"
//! fallback_path = "/admin/home"
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{GuardError, GuardResult};

/// Prefixes shared by both presets: static assets, API and auth endpoints.
const SHARED_PREFIXES: [&str; 8] = [
    "/api", "/js", "/css", "/lib", "/img", "/auth", "/logout", "/static",
];

/// Options for a single navigation guard instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuardConfig {
    /// Path prefixes considered in-scope, checked in order.
    #[serde(alias = "allowedPrefixes")]
    pub allowed_prefixes: Vec<String>,
    /// Location assigned when the user accepts the prompt.
    #[serde(alias = "fallbackPath")]
    pub fallback_path: String,
    /// Text of the confirmation dialog.
    #[serde(alias = "promptMessage")]
    pub prompt_message: String,
}

impl GuardConfig {
    /// Create a configuration from its parts without validating it.
    pub fn new(
        allowed_prefixes: impl IntoIterator<Item = impl Into<String>>,
        fallback_path: impl Into<String>,
        prompt_message: impl Into<String>,
    ) -> Self {
        Self {
            allowed_prefixes: allowed_prefixes.into_iter().map(Into::into).collect(),
            fallback_path: fallback_path.into(),
            prompt_message: prompt_message.into(),
        }
    }

    /// Preset for pages inside the admin area.
    pub fn admin() -> Self {
        Self::new(
            std::iter::once("/admin")
                .chain(SHARED_PREFIXES)
                .chain(std::iter::once("/user")),
            "/admin",
            "This link would navigate outside the admin area. Stay in admin dashboard?",
        )
    }

    /// Preset for pages inside the user area.
    pub fn user() -> Self {
        Self::new(
            std::iter::once("/user")
                .chain(SHARED_PREFIXES)
                .chain(std::iter::once("/admin")),
            "/user/dashboard",
            "This link would navigate outside the user area. Proceed to user dashboard instead?",
        )
    }

    /// Check that the configuration can drive a guard.
    ///
    /// An empty prefix matches every path, so it is rejected rather than
    /// silently disabling the guard.
    pub fn validate(&self) -> GuardResult<()> {
        if self.fallback_path.is_empty() {
            return Err(GuardError::InvalidConfig(
                "fallback_path must not be empty".to_string(),
            ));
        }
        if self.prompt_message.trim().is_empty() {
            return Err(GuardError::InvalidConfig(
                "prompt_message must not be empty".to_string(),
            ));
        }
        if let Some(index) = self.allowed_prefixes.iter().position(String::is_empty) {
            return Err(GuardError::InvalidConfig(format!(
                "allowed_prefixes[{index}] is empty and would allow every path"
            )));
        }
        Ok(())
    }

    /// Whether `path` starts with any allow-listed prefix.
    ///
    /// Exact, case-sensitive prefix match with no normalisation, so
    /// `/admin-evil` is in scope for the `/admin` prefix.
    pub fn is_allowed(&self, path: &str) -> bool {
        self.allowed_prefixes
            .iter()
            .any(|prefix| path.starts_with(prefix.as_str()))
    }

    /// Parse and validate a TOML document (see [`GuardFile`]).
    pub fn from_toml_str(input: &str) -> GuardResult<Self> {
        let file: GuardFile = toml::from_str(input)?;
        file.resolve()
    }

    /// Parse and validate a JSON document (see [`GuardFile`]).
    pub fn from_json_str(input: &str) -> GuardResult<Self> {
        let file: GuardFile = serde_json::from_str(input)?;
        file.resolve()
    }

    /// Load a configuration file. `.json` files are parsed as JSON, anything
    /// else as TOML.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load(path: impl AsRef<std::path::Path>) -> GuardResult<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        tracing::debug!(path = %path.display(), "loading guard configuration");
        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        if is_json {
            Self::from_json_str(&contents)
        } else {
            Self::from_toml_str(&contents)
        }
    }

    /// Serialize to TOML.
    pub fn to_toml_string(&self) -> GuardResult<String> {
        toml::to_string_pretty(self)
            .map_err(|e| GuardError::InvalidConfig(format!("cannot render TOML: {e}")))
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json_string(&self) -> GuardResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl Default for GuardConfig {
    fn default() -> Self {
        Self::admin()
    }
}

/// Built-in guard presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum GuardVariant {
    /// Keeps clicks inside the admin area.
    Admin,
    /// Keeps clicks inside the user area.
    User,
}

impl GuardVariant {
    /// The preset configuration for this variant.
    pub fn config(self) -> GuardConfig {
        match self {
            GuardVariant::Admin => GuardConfig::admin(),
            GuardVariant::User => GuardConfig::user(),
        }
    }
}

impl fmt::Display for GuardVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                GuardVariant::Admin => "admin",
                GuardVariant::User => "user",
            }
        )
    }
}

impl FromStr for GuardVariant {
    type Err = GuardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "admin" => Ok(GuardVariant::Admin),
            "user" => Ok(GuardVariant::User),
            _ => Err(GuardError::UnknownVariant(s.to_string())),
        }
    }
}

impl TryFrom<String> for GuardVariant {
    type Error = GuardError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// On-disk configuration document.
///
/// Either names a `variant` preset, supplies every field, or names a variant
/// and overrides some of its fields.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GuardFile {
    /// Preset to start from.
    #[serde(default)]
    pub variant: Option<GuardVariant>,
    /// Replaces the preset's allow-list when present.
    #[serde(default, alias = "allowedPrefixes")]
    pub allowed_prefixes: Option<Vec<String>>,
    /// Replaces the preset's fallback location when present.
    #[serde(default, alias = "fallbackPath")]
    pub fallback_path: Option<String>,
    /// Replaces the preset's prompt text when present.
    #[serde(default, alias = "promptMessage")]
    pub prompt_message: Option<String>,
}

impl GuardFile {
    /// Merge overrides onto the named preset and validate the result.
    pub fn resolve(self) -> GuardResult<GuardConfig> {
        let config = match self.variant {
            Some(variant) => {
                let base = variant.config();
                GuardConfig {
                    allowed_prefixes: self.allowed_prefixes.unwrap_or(base.allowed_prefixes),
                    fallback_path: self.fallback_path.unwrap_or(base.fallback_path),
                    prompt_message: self.prompt_message.unwrap_or(base.prompt_message),
                }
            }
            None => {
                let missing: Vec<&str> = [
                    ("allowed_prefixes", self.allowed_prefixes.is_none()),
                    ("fallback_path", self.fallback_path.is_none()),
                    ("prompt_message", self.prompt_message.is_none()),
                ]
                .into_iter()
                .filter_map(|(name, absent)| absent.then_some(name))
                .collect();
                if !missing.is_empty() {
                    return Err(GuardError::InvalidConfig(format!(
                        "missing {} (or set `variant`)",
                        missing.join(", ")
                    )));
                }
                GuardConfig {
                    allowed_prefixes: self.allowed_prefixes.unwrap_or_default(),
                    fallback_path: self.fallback_path.unwrap_or_default(),
                    prompt_message: self.prompt_message.unwrap_or_default(),
                }
            }
        };
        config.validate()?;
        Ok(config)
    }
}
