//! # Navigation Guard
//!
//! Runs the full click pipeline for one guard instance:
//!
//! ```text
//! click target → find_anchor → classify_href → prevent_default → confirm → navigate
//! ```
//!
//! Side effects go through [`ClickEffects`] so the pipeline runs the same in
//! the browser and in native tests.
//!
//! # Usage
//!
//! ```rust,ignore
//! use navguard_core::{GuardVariant, NavigationGuard, PageOrigin};
//!
//! let guard = NavigationGuard::for_variant(GuardVariant::Admin);
//! let outcome = guard.handle_click(target, &PageOrigin::new(origin), &effects)?;
//! ```

use crate::anchor::{find_anchor, LinkNode};
use crate::classify::{classify_href, AllowReason, ClickDecision, PageOrigin};
use crate::config::{GuardConfig, GuardVariant};
use crate::error::GuardResult;

/// Side effects available to the guard while handling a click.
pub trait ClickEffects {
    /// Cancel the click's default navigation.
    fn prevent_default(&self);

    /// Show a blocking yes/no dialog; `true` when the user accepts.
    fn confirm(&self, message: &str) -> bool;

    /// Send the browser to `url`.
    fn navigate(&self, url: &str) -> GuardResult<()>;
}

/// What the guard did with a click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// Default navigation was left alone.
    Passed(AllowReason),
    /// Default navigation was cancelled.
    Cancelled {
        /// Whether the user accepted the redirect to the fallback location.
        redirected: bool,
    },
}

/// A click guard bound to one configuration.
#[derive(Debug, Clone)]
pub struct NavigationGuard {
    config: GuardConfig,
}

impl NavigationGuard {
    /// Create a guard, validating its configuration.
    pub fn new(config: GuardConfig) -> GuardResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Create a guard from a built-in preset.
    pub fn for_variant(variant: GuardVariant) -> Self {
        Self {
            config: variant.config(),
        }
    }

    /// The guard's configuration.
    pub fn config(&self) -> &GuardConfig {
        &self.config
    }

    /// Classify an href without touching any side effects.
    pub fn classify(&self, href: Option<&str>, origin: &PageOrigin) -> ClickDecision {
        classify_href(href, origin, &self.config)
    }

    /// Handle a click whose event target is `target`.
    ///
    /// Errors only when the redirect itself fails; by then navigation has
    /// already been cancelled.
    pub fn handle_click<N, E>(
        &self,
        target: N,
        origin: &PageOrigin,
        effects: &E,
    ) -> GuardResult<ClickOutcome>
    where
        N: LinkNode,
        E: ClickEffects + ?Sized,
    {
        let Some(anchor) = find_anchor(target) else {
            return Ok(ClickOutcome::Passed(AllowReason::NoAnchor));
        };

        let href = anchor.href_attribute();
        let path = match self.classify(href.as_deref(), origin) {
            ClickDecision::Allow(reason) => {
                tracing::trace!(href = ?href, %reason, "click allowed");
                return Ok(ClickOutcome::Passed(reason));
            }
            ClickDecision::Intercept { path } => path,
        };

        effects.prevent_default();
        tracing::info!(
            %path,
            fallback = %self.config.fallback_path,
            "navigation outside guarded area cancelled"
        );

        if !effects.confirm(&self.config.prompt_message) {
            tracing::debug!("redirect declined");
            return Ok(ClickOutcome::Cancelled { redirected: false });
        }

        effects.navigate(&self.config.fallback_path)?;
        Ok(ClickOutcome::Cancelled { redirected: true })
    }
}

impl From<GuardVariant> for NavigationGuard {
    fn from(variant: GuardVariant) -> Self {
        Self::for_variant(variant)
    }
}


#[cfg(test)]
mod tests {
    use super::test_effects::RecordingEffects;
    use super::*;
    use crate::anchor::test_tree::TestNode;
    use crate::error::GuardError;
    use assert_matches::assert_matches;

    fn origin() -> PageOrigin {
        PageOrigin::new("https://app.example.com")
    }

    fn link(href: &str) -> TestNode {
        TestNode::root("BODY").child("MAIN").link(href).child("SPAN")
    }

    #[test]
    fn test_admin_accepts_redirect() {
        let guard = NavigationGuard::for_variant(GuardVariant::Admin);
        let effects = RecordingEffects::accepting();

        let outcome = guard.handle_click(link("/reports"), &origin(), &effects).unwrap();

        assert_eq!(outcome, ClickOutcome::Cancelled { redirected: true });
        assert!(effects.prevented.get());
        assert_eq!(
            effects.prompts.borrow().as_slice(),
            ["This link would navigate outside the admin area. Stay in admin dashboard?"]
        );
        assert_eq!(effects.location.borrow().as_deref(), Some("/admin"));
    }

    #[test]
    fn test_user_accepts_redirect() {
        let guard = NavigationGuard::for_variant(GuardVariant::User);
        let effects = RecordingEffects::accepting();

        guard.handle_click(link("/settings"), &origin(), &effects).unwrap();

        assert_eq!(effects.location.borrow().as_deref(), Some("/user/dashboard"));
    }

    #[test]
    fn test_declined_prompt_leaves_location() {
        let guard = NavigationGuard::for_variant(GuardVariant::User);
        let effects = RecordingEffects::declining();

        let outcome = guard.handle_click(link("/reports"), &origin(), &effects).unwrap();

        assert_eq!(outcome, ClickOutcome::Cancelled { redirected: false });
        assert!(effects.prevented.get());
        assert_eq!(effects.prompts.borrow().len(), 1);
        assert!(effects.location.borrow().is_none());
    }

    #[test]
    fn test_allowed_click_has_no_side_effects() {
        let guard = NavigationGuard::for_variant(GuardVariant::User);
        let effects = RecordingEffects::accepting();

        for href in [
            "/api/v1/items",
            "#section",
            "https://external.example.com/page",
            "http://[invalid",
        ] {
            let outcome = guard.handle_click(link(href), &origin(), &effects).unwrap();
            assert_matches!(outcome, ClickOutcome::Passed(_), "{href}");
        }

        assert!(!effects.prevented.get());
        assert!(effects.prompts.borrow().is_empty());
        assert!(effects.location.borrow().is_none());
    }

    #[test]
    fn test_click_outside_anchor() {
        let guard = NavigationGuard::for_variant(GuardVariant::Admin);
        let effects = RecordingEffects::accepting();
        let target = TestNode::root("BODY").child("BUTTON");

        let outcome = guard.handle_click(target, &origin(), &effects).unwrap();

        assert_eq!(outcome, ClickOutcome::Passed(AllowReason::NoAnchor));
        assert!(!effects.prevented.get());
    }

    #[test]
    fn test_anchor_without_href() {
        let guard = NavigationGuard::for_variant(GuardVariant::Admin);
        let effects = RecordingEffects::accepting();
        let target = TestNode::root("BODY").child("A");

        let outcome = guard.handle_click(target, &origin(), &effects).unwrap();

        assert_eq!(outcome, ClickOutcome::Passed(AllowReason::MissingHref));
    }

    #[test]
    fn test_failed_redirect_still_cancels() {
        let guard = NavigationGuard::for_variant(GuardVariant::Admin);
        let effects = RecordingEffects {
            fail_navigation: true,
            ..RecordingEffects::accepting()
        };

        let result = guard.handle_click(link("/reports"), &origin(), &effects);

        assert_matches!(result, Err(GuardError::Navigation(_)));
        assert!(effects.prevented.get());
    }

    #[test]
    fn test_custom_config() {
        let config = GuardConfig::new(["/portal"], "/portal/home", "Stay in the portal?");
        let guard = NavigationGuard::new(config).unwrap();
        let effects = RecordingEffects::accepting();

        let outcome = guard.handle_click(link("/admin"), &origin(), &effects).unwrap();

        assert_eq!(outcome, ClickOutcome::Cancelled { redirected: true });
        assert_eq!(effects.prompts.borrow().as_slice(), ["Stay in the portal?"]);
        assert_eq!(effects.location.borrow().as_deref(), Some("/portal/home"));
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = GuardConfig::new([""], "/portal", "Stay?");
        assert_matches!(NavigationGuard::new(config), Err(GuardError::InvalidConfig(_)));
    }
}
