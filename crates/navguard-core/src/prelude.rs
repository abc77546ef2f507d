//! Navguard prelude.
//!
//! Curated re-exports for embedding a guard without pulling in every module.

pub use crate::anchor::LinkNode;
pub use crate::classify::{AllowReason, ClickDecision, PageOrigin};
pub use crate::config::{GuardConfig, GuardVariant};
pub use crate::error::{GuardError, GuardResult};
pub use crate::guard::{ClickEffects, ClickOutcome, NavigationGuard};
