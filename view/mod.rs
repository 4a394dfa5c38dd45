//! The surface the controller touches: element lookup and mutation behind [`View`],
//! viewport watching behind [`Observer`].
//!
//! Interaction logic is written against these traits only, so it runs the same against the
//! browser document and against the in-memory [`MemoryView`].

mod memory;
pub use memory::*;

#[cfg(test)]
pub(crate) mod fixtures;

use crate::*;

/// Element lookup and in-place mutation of a page
///
/// Mutators take `&self`: the host owns the tree and serializes access, as the browser
/// event loop does for the live document.
pub trait View {
    /// Handle to a single element
    type Node: Clone + PartialEq;

    fn element_by_id(&self, id: &str) -> Option<Self::Node>;

    /// First match of `selector` in document order
    fn query(&self, selector: &str) -> Option<Self::Node> {
        self.query_all(selector).into_iter().next()
    }

    /// All matches of `selector` in document order
    fn query_all(&self, selector: &str) -> Vec<Self::Node>;

    /// All descendants of `scope` matching `selector`
    fn query_all_in(&self, scope: &Self::Node, selector: &str) -> Vec<Self::Node>;

    fn body(&self) -> Option<Self::Node>;

    fn create_element(&self, tag: &str) -> Result<Self::Node>;

    fn append_child(&self, parent: &Self::Node, child: &Self::Node) -> Result;

    /// Whether `node` is `ancestor` or one of its descendants
    fn contains(&self, ancestor: &Self::Node, node: &Self::Node) -> bool;

    fn attribute(&self, node: &Self::Node, name: &str) -> Option<String>;

    fn set_attribute(&self, node: &Self::Node, name: &str, value: &str) -> Result;

    fn has_class(&self, node: &Self::Node, class: &str) -> bool;

    fn add_class(&self, node: &Self::Node, class: &str) -> Result;

    fn remove_class(&self, node: &Self::Node, class: &str) -> Result;

    /// Inline style property, empty when unset
    fn style(&self, node: &Self::Node, property: &str) -> String;

    /// Sets an inline style property, an empty value removes it
    fn set_style(&self, node: &Self::Node, property: &str, value: &str) -> Result;

    /// Replaces the whole inline style declaration
    fn set_css_text(&self, node: &Self::Node, css: &str) -> Result;

    fn set_text(&self, node: &Self::Node, text: &str);

    fn set_inner_html(&self, node: &Self::Node, html: &str);
}

/// Registration side of a viewport intersection watcher
pub trait Observer<N> {
    fn observe(&mut self, node: &N);
    fn unobserve(&mut self, node: &N);
}

/// One intersection change reported by the host
#[derive(Debug, Clone, PartialEq)]
pub struct Intersection<N> {
    pub target: N,
    pub is_intersecting: bool,
}

impl<N> Intersection<N> {
    pub fn entering(target: N) -> Self {
        Self {
            target,
            is_intersecting: true,
        }
    }

    pub fn leaving(target: N) -> Self {
        Self {
            target,
            is_intersecting: false,
        }
    }
}
