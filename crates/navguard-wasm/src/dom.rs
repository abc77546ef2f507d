//! DOM attachment for the navigation guard

use navguard_core::{ClickEffects, GuardError, GuardResult, LinkNode, NavigationGuard, PageOrigin};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, Node, Window};

use crate::error::{WasmError, WasmResult};

/// A DOM node seen through the guard's [`LinkNode`] interface.
#[derive(Debug, Clone)]
pub struct DomNode(Node);

impl DomNode {
    /// The node an event was dispatched to, if it is a node at all.
    pub fn from_event(event: &Event) -> Option<Self> {
        event.target()?.dyn_into::<Node>().ok().map(DomNode)
    }

    /// The wrapped node.
    pub fn node(&self) -> &Node {
        &self.0
    }
}

impl From<Node> for DomNode {
    fn from(node: Node) -> Self {
        DomNode(node)
    }
}

impl From<Element> for DomNode {
    fn from(element: Element) -> Self {
        DomNode(element.into())
    }
}

impl LinkNode for DomNode {
    fn node_name(&self) -> String {
        self.0.node_name()
    }

    fn parent_element(&self) -> Option<Self> {
        self.0.parent_element().map(DomNode::from)
    }

    fn href_attribute(&self) -> Option<String> {
        self.0.dyn_ref::<Element>()?.get_attribute("href")
    }
}

/// Click effects backed by the live event and window.
pub struct BrowserEffects<'a> {
    event: &'a Event,
    window: &'a Window,
}

impl<'a> BrowserEffects<'a> {
    /// Bind effects to one click event.
    pub fn new(event: &'a Event, window: &'a Window) -> Self {
        Self { event, window }
    }
}

impl ClickEffects for BrowserEffects<'_> {
    fn prevent_default(&self) {
        self.event.prevent_default();
    }

    fn confirm(&self, message: &str) -> bool {
        self.window
            .confirm_with_message(message)
            .unwrap_or_else(|e| {
                tracing::warn!(error = ?e, "confirm dialog unavailable, treating as declined");
                false
            })
    }

    fn navigate(&self, url: &str) -> GuardResult<()> {
        self.window
            .location()
            .set_href(url)
            .map_err(|e| GuardError::Navigation(format!("cannot assign location {url}: {e:?}")))
    }
}

/// Register `guard` as a capturing click listener on the document.
///
/// The listener lives for the rest of the page's lifetime.
pub fn install(guard: NavigationGuard) -> WasmResult<()> {
    let window = web_sys::window()
        .ok_or_else(|| WasmError::Environment("no global `window`".to_string()))?;
    let document = window
        .document()
        .ok_or_else(|| WasmError::Environment("window has no document".to_string()))?;

    tracing::debug!(
        fallback = %guard.config().fallback_path,
        prefixes = guard.config().allowed_prefixes.len(),
        "installing navigation guard"
    );

    let handler_window = window.clone();
    let onclick: Closure<dyn Fn(Event)> = Closure::new(move |event: Event| {
        on_click(&guard, &handler_window, &event);
    });
    document.add_event_listener_with_callback_and_bool(
        "click",
        onclick.as_ref().unchecked_ref(),
        true,
    )?;
    onclick.forget();
    Ok(())
}

fn on_click(guard: &NavigationGuard, window: &Window, event: &Event) {
    let Some(target) = DomNode::from_event(event) else {
        return;
    };

    let origin = match window.location().origin() {
        Ok(origin) => PageOrigin::new(origin),
        Err(e) => {
            tracing::warn!(error = ?e, "cannot read page origin, click not checked");
            return;
        }
    };

    let effects = BrowserEffects::new(event, window);
    match guard.handle_click(target, &origin, &effects) {
        Ok(outcome) => tracing::trace!(?outcome, "click handled"),
        Err(e) => tracing::error!(error = %e, "navigation guard could not redirect"),
    }
}
