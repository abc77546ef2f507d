//! Anchor lookup over an abstract element tree

/// Node name of an HTML anchor element.
pub const ANCHOR_NODE_NAME: &str = "A";

/// A node in a document tree, as seen by the click guard.
///
/// Implemented for DOM nodes by the browser binding and for in-memory trees
/// in tests.
pub trait LinkNode: Sized {
    /// The node's `nodeName` (upper case for HTML elements).
    fn node_name(&self) -> String;

    /// The parent element, if any.
    fn parent_element(&self) -> Option<Self>;

    /// The raw `href` attribute, if the node is an element carrying one.
    fn href_attribute(&self) -> Option<String>;

    /// Whether this node is an HTML anchor.
    fn is_anchor(&self) -> bool {
        self.node_name() == ANCHOR_NODE_NAME
    }
}

/// Walk from `start` through its ancestors to the nearest anchor.
///
/// The start node itself is checked first. Only the exact node name `A`
/// matches, so SVG `<a>` elements (node name `a`) are not considered.
pub fn find_anchor<N: LinkNode>(start: N) -> Option<N> {
    let mut current = Some(start);
    while let Some(node) = current {
        if node.is_anchor() {
            return Some(node);
        }
        current = node.parent_element();
    }
    None
}


#[cfg(test)]
mod tests {
    use super::test_tree::TestNode;
    use super::*;

    #[test]
    fn test_target_is_anchor() {
        let link = TestNode::root("BODY").link("/reports");
        let found = find_anchor(link).unwrap();
        assert_eq!(found.href_attribute().as_deref(), Some("/reports"));
    }

    #[test]
    fn test_walks_up_from_nested_target() {
        let icon = TestNode::root("BODY")
            .child("NAV")
            .link("/admin/users")
            .child("SPAN")
            .child("#text");
        let found = find_anchor(icon).unwrap();
        assert_eq!(found.href_attribute().as_deref(), Some("/admin/users"));
    }

    #[test]
    fn test_nearest_anchor_wins() {
        let inner = TestNode::root("BODY")
            .link("/outer")
            .link("/inner")
            .child("IMG");
        let found = find_anchor(inner).unwrap();
        assert_eq!(found.href_attribute().as_deref(), Some("/inner"));
    }

    #[test]
    fn test_no_anchor_in_chain() {
        let button = TestNode::root("HTML").child("BODY").child("BUTTON");
        assert!(find_anchor(button).is_none());
    }

    #[test]
    fn test_lowercase_anchor_ignored() {
        let svg_link = TestNode::root("BODY")
            .child("svg")
            .child_with_href("a", Some("/reports"))
            .child("text");
        assert!(find_anchor(svg_link).is_none());
    }
}
