use crate::*;

/// Handles into a page built by [`portfolio_page`]
pub(crate) struct Page {
    pub view: MemoryView,
    pub menu: NodeId,
    pub menu_button: NodeId,
    pub menu_link: NodeId,
    pub filters: Vec<NodeId>,
    pub grid: NodeId,
    pub cards: Vec<NodeId>,
    pub load_more: NodeId,
    pub animated: Vec<NodeId>,
    pub footer: NodeId,
}

/// Portfolio page markup with one card per given category
pub(crate) fn portfolio_page(categories: &[&str]) -> Page {
    let view = MemoryView::new();
    let body = view.body().unwrap();

    let nav = view.append(&body, "nav");
    let menu_button = view.append(&nav, "button.menu-btn");
    let menu = view.append(&nav, "div#mobileMenu");
    let menu_link = view.append(&menu, "a");

    let section = view.append(&body, "section.animate-on-scroll");
    let filters = ["all", "residential", "commercial"]
        .iter()
        .map(|_| view.append(&section, "button.btn.secondary"))
        .collect();

    let grid = view.append(&section, "div#projectGrid");
    let cards = categories
        .iter()
        .map(|category| {
            let card = view.append(&grid, "a.card.project-card");
            view.set_attribute(&card, "data-category", category).unwrap();
            card
        })
        .collect();
    let load_more = view.append(&section, "div#loadMoreContainer");

    let highlight = view.append(&body, "div.animate-on-scroll");
    view.set_attribute(&highlight, "data-animation", "slide-in-left")
        .unwrap();
    let footer = view.append(&body, "footer");

    Page {
        view,
        menu,
        menu_button,
        menu_link,
        filters,
        grid,
        cards,
        load_more,
        animated: vec![section, highlight],
        footer,
    }
}

/// Wraps a [`MemoryView`], rejecting style and class writes to one element
///
/// Stands in for browser elements the host cannot style, like an `<svg>` without inline style.
pub(crate) struct RejectingView<'a> {
    pub inner: &'a MemoryView,
    pub rejected: NodeId,
}

impl RejectingView<'_> {
    fn check(&self, node: &NodeId) -> Result {
        if *node == self.rejected {
            let tag = self.inner.tag(node);
            return Err(e!("<{tag}> rejects writes"));
        }
        Ok(())
    }
}

impl View for RejectingView<'_> {
    type Node = NodeId;

    fn element_by_id(&self, id: &str) -> Option<NodeId> {
        self.inner.element_by_id(id)
    }

    fn query_all(&self, selector: &str) -> Vec<NodeId> {
        self.inner.query_all(selector)
    }

    fn query_all_in(&self, scope: &NodeId, selector: &str) -> Vec<NodeId> {
        self.inner.query_all_in(scope, selector)
    }

    fn body(&self) -> Option<NodeId> {
        self.inner.body()
    }

    fn create_element(&self, tag: &str) -> Result<NodeId> {
        self.inner.create_element(tag)
    }

    fn append_child(&self, parent: &NodeId, child: &NodeId) -> Result {
        self.inner.append_child(parent, child)
    }

    fn contains(&self, ancestor: &NodeId, node: &NodeId) -> bool {
        self.inner.contains(ancestor, node)
    }

    fn attribute(&self, node: &NodeId, name: &str) -> Option<String> {
        self.inner.attribute(node, name)
    }

    fn set_attribute(&self, node: &NodeId, name: &str, value: &str) -> Result {
        self.inner.set_attribute(node, name, value)
    }

    fn has_class(&self, node: &NodeId, class: &str) -> bool {
        self.inner.has_class(node, class)
    }

    fn add_class(&self, node: &NodeId, class: &str) -> Result {
        self.check(node)?;
        self.inner.add_class(node, class)
    }

    fn remove_class(&self, node: &NodeId, class: &str) -> Result {
        self.check(node)?;
        self.inner.remove_class(node, class)
    }

    fn style(&self, node: &NodeId, property: &str) -> String {
        self.inner.style(node, property)
    }

    fn set_style(&self, node: &NodeId, property: &str, value: &str) -> Result {
        self.check(node)?;
        self.inner.set_style(node, property, value)
    }

    fn set_css_text(&self, node: &NodeId, css: &str) -> Result {
        self.check(node)?;
        self.inner.set_css_text(node, css)
    }

    fn set_text(&self, node: &NodeId, text: &str) {
        self.inner.set_text(node, text)
    }

    fn set_inner_html(&self, node: &NodeId, html: &str) {
        self.inner.set_inner_html(node, html)
    }
}
