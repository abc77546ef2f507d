//! # Navguard Core
//!
//! Client-side navigation guard: keeps clicks on same-site links inside a
//! protected area (admin or user pages) by checking each link's path against
//! an allow-list of prefixes and asking the user before redirecting back.
//!
//! This is a usability guard, not access control. Nothing here authenticates
//! or authorises anything.
//!
//! The crate has no browser dependency. DOM attachment lives in
//! `navguard-wasm`; everything here runs natively.

pub mod anchor;
pub mod classify;
pub mod config;
pub mod error;
pub mod guard;
pub mod prelude;

pub use anchor::{find_anchor, LinkNode};
pub use classify::{classify_href, is_exempt, AllowReason, ClickDecision, PageOrigin};
pub use config::{GuardConfig, GuardFile, GuardVariant};
pub use error::{GuardError, GuardResult};
pub use guard::{ClickEffects, ClickOutcome, NavigationGuard};
