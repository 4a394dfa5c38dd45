use std::cell::RefCell;

use crate::*;

/// Handle to an element of a [`MemoryView`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

#[derive(Debug, Default)]
struct NodeData {
    tag: String,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    attributes: Vec<(String, String)>,
    classes: Vec<String>,
    styles: Vec<(String, String)>,
    text: String,
    inner_html: String,
}

/// In-memory element tree implementing [`View`]
///
/// Supports the selector subset the controller uses: compound selectors made of an optional
/// tag, `#id` and `.class` parts, joined by descendant combinators (`#projectGrid .card`).
/// Markup passed to [`View::set_inner_html`] is stored verbatim, not parsed.
#[derive(Debug)]
pub struct MemoryView {
    nodes: RefCell<Vec<NodeData>>,
    body: NodeId,
}

const ROOT: NodeId = NodeId(0);

impl Default for MemoryView {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryView {
    /// Empty document with a `body`
    pub fn new() -> Self {
        let root = NodeData {
            tag: "#document".into(),
            children: vec![NodeId(1)],
            ..Default::default()
        };
        let body = NodeData {
            tag: "body".into(),
            parent: Some(ROOT),
            ..Default::default()
        };
        Self {
            nodes: RefCell::new(vec![root, body]),
            body: NodeId(1),
        }
    }

    /// Appends an element described by a compound selector like `a.card.project-card` or
    /// `div#mobileMenu` and returns it
    pub fn append(&self, parent: &NodeId, element: &str) -> NodeId {
        let compound = Compound::parse(element);
        let node = self.new_node(compound.tag.as_deref().unwrap_or("div"));
        {
            let mut nodes = self.nodes.borrow_mut();
            let data = &mut nodes[node.0];
            if let Some(id) = compound.id {
                data.attributes.push(("id".into(), id));
            }
            data.classes = compound.classes;
        }
        self.attach(parent, &node);
        node
    }

    pub fn tag(&self, node: &NodeId) -> String {
        self.nodes.borrow()[node.0].tag.clone()
    }

    pub fn classes(&self, node: &NodeId) -> Vec<String> {
        self.nodes.borrow()[node.0].classes.clone()
    }

    pub fn children(&self, node: &NodeId) -> Vec<NodeId> {
        self.nodes.borrow()[node.0].children.clone()
    }

    pub fn text(&self, node: &NodeId) -> String {
        self.nodes.borrow()[node.0].text.clone()
    }

    pub fn inner_html(&self, node: &NodeId) -> String {
        self.nodes.borrow()[node.0].inner_html.clone()
    }

    fn new_node(&self, tag: &str) -> NodeId {
        let mut nodes = self.nodes.borrow_mut();
        nodes.push(NodeData {
            tag: tag.to_ascii_lowercase(),
            ..Default::default()
        });
        NodeId(nodes.len() - 1)
    }

    fn attach(&self, parent: &NodeId, child: &NodeId) {
        let mut nodes = self.nodes.borrow_mut();
        if let Some(previous) = nodes[child.0].parent.take() {
            nodes[previous.0].children.retain(|c| c != child);
        }
        nodes[child.0].parent = Some(*parent);
        nodes[parent.0].children.push(*child);
        nodes[parent.0].inner_html.clear();
    }

    /// Descendants of `scope` in document order, `scope` excluded
    fn descendants(&self, scope: &NodeId) -> Vec<NodeId> {
        let nodes = self.nodes.borrow();
        let mut found = vec![];
        let mut stack: Vec<NodeId> = nodes[scope.0].children.iter().rev().copied().collect();
        while let Some(node) = stack.pop() {
            found.push(node);
            stack.extend(nodes[node.0].children.iter().rev().copied());
        }
        found
    }

    fn matches(&self, node: &NodeId, selector: &[Compound]) -> bool {
        let Some((last, ancestors)) = selector.split_last() else {
            return false;
        };
        let nodes = self.nodes.borrow();
        if !last.matches(&nodes[node.0]) {
            return false;
        }
        // descendant combinators only, so the nearest matching ancestor is always a valid pick
        let mut current = nodes[node.0].parent;
        for compound in ancestors.iter().rev() {
            loop {
                let Some(candidate) = current else {
                    return false;
                };
                current = nodes[candidate.0].parent;
                if candidate != ROOT && compound.matches(&nodes[candidate.0]) {
                    break;
                }
            }
        }
        true
    }

    fn select(&self, scope: &NodeId, selector: &str) -> Vec<NodeId> {
        let selector = Compound::parse_selector(selector);
        self.descendants(scope)
            .into_iter()
            .filter(|node| self.matches(node, &selector))
            .collect()
    }
}

impl View for MemoryView {
    type Node = NodeId;

    fn element_by_id(&self, id: &str) -> Option<NodeId> {
        self.descendants(&ROOT)
            .into_iter()
            .find(|node| self.attribute(node, "id").as_deref() == Some(id))
    }

    fn query_all(&self, selector: &str) -> Vec<NodeId> {
        self.select(&ROOT, selector)
    }

    fn query_all_in(&self, scope: &NodeId, selector: &str) -> Vec<NodeId> {
        self.select(scope, selector)
    }

    fn body(&self) -> Option<NodeId> {
        Some(self.body)
    }

    fn create_element(&self, tag: &str) -> Result<NodeId> {
        Ok(self.new_node(tag))
    }

    fn append_child(&self, parent: &NodeId, child: &NodeId) -> Result {
        if self.contains(child, parent) {
            return Err(e!("cannot append an element into itself"));
        }
        self.attach(parent, child);
        Ok(())
    }

    fn contains(&self, ancestor: &NodeId, node: &NodeId) -> bool {
        let nodes = self.nodes.borrow();
        let mut current = Some(*node);
        while let Some(candidate) = current {
            if candidate == *ancestor {
                return true;
            }
            current = nodes[candidate.0].parent;
        }
        false
    }

    fn attribute(&self, node: &NodeId, name: &str) -> Option<String> {
        let nodes = self.nodes.borrow();
        let data = &nodes[node.0];
        if name == "class" {
            return (!data.classes.is_empty()).then(|| data.classes.join(" "));
        }
        data.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.clone())
    }

    fn set_attribute(&self, node: &NodeId, name: &str, value: &str) -> Result {
        let mut nodes = self.nodes.borrow_mut();
        let data = &mut nodes[node.0];
        if name == "class" {
            data.classes = value.split_whitespace().map(String::from).collect();
            return Ok(());
        }
        match data.attributes.iter_mut().find(|(key, _)| key == name) {
            Some((_, existing)) => *existing = value.to_owned(),
            None => data.attributes.push((name.to_owned(), value.to_owned())),
        }
        Ok(())
    }

    fn has_class(&self, node: &NodeId, class: &str) -> bool {
        self.nodes.borrow()[node.0].classes.iter().any(|c| c == class)
    }

    fn add_class(&self, node: &NodeId, class: &str) -> Result {
        if !self.has_class(node, class) {
            self.nodes.borrow_mut()[node.0].classes.push(class.to_owned());
        }
        Ok(())
    }

    fn remove_class(&self, node: &NodeId, class: &str) -> Result {
        self.nodes.borrow_mut()[node.0].classes.retain(|c| c != class);
        Ok(())
    }

    fn style(&self, node: &NodeId, property: &str) -> String {
        self.nodes.borrow()[node.0]
            .styles
            .iter()
            .find(|(key, _)| key == property)
            .map(|(_, value)| value.clone())
            .unwrap_or_default()
    }

    fn set_style(&self, node: &NodeId, property: &str, value: &str) -> Result {
        let mut nodes = self.nodes.borrow_mut();
        let styles = &mut nodes[node.0].styles;
        styles.retain(|(key, _)| key != property);
        if !value.is_empty() {
            styles.push((property.to_owned(), value.to_owned()));
        }
        Ok(())
    }

    fn set_css_text(&self, node: &NodeId, css: &str) -> Result {
        self.nodes.borrow_mut()[node.0].styles.clear();
        for declaration in css.split(';') {
            let Some((property, value)) = declaration.split_once(':') else {
                continue;
            };
            self.set_style(node, property.trim(), value.trim())?;
        }
        Ok(())
    }

    fn set_text(&self, node: &NodeId, text: &str) {
        self.detach_children(node);
        let mut nodes = self.nodes.borrow_mut();
        nodes[node.0].inner_html.clear();
        nodes[node.0].text = text.to_owned();
    }

    fn set_inner_html(&self, node: &NodeId, html: &str) {
        self.detach_children(node);
        let mut nodes = self.nodes.borrow_mut();
        nodes[node.0].text.clear();
        nodes[node.0].inner_html = html.to_owned();
    }
}

impl MemoryView {
    fn detach_children(&self, node: &NodeId) {
        let mut nodes = self.nodes.borrow_mut();
        let children = std::mem::take(&mut nodes[node.0].children);
        for child in children {
            nodes[child.0].parent = None;
        }
    }
}

/// One compound selector: optional tag plus id and class constraints
#[derive(Debug, Default, PartialEq)]
struct Compound {
    tag: Option<String>,
    id: Option<String>,
    classes: Vec<String>,
}

impl Compound {
    fn parse_selector(selector: &str) -> Vec<Compound> {
        selector.split_whitespace().map(Compound::parse).collect()
    }

    fn parse(raw: &str) -> Compound {
        let mut compound = Compound::default();
        let split = raw.find(['#', '.']).unwrap_or(raw.len());
        let tag = &raw[..split];
        if !tag.is_empty() && tag != "*" {
            compound.tag = Some(tag.to_ascii_lowercase());
        }
        let mut rest = &raw[split..];
        while let Some(marker) = rest.chars().next() {
            let body = &rest[marker.len_utf8()..];
            let end = body.find(['#', '.']).unwrap_or(body.len());
            let name = body[..end].to_owned();
            if marker == '#' {
                compound.id = Some(name);
            } else {
                compound.classes.push(name);
            }
            rest = &body[end..];
        }
        compound
    }

    fn matches(&self, data: &NodeData) -> bool {
        if let Some(tag) = &self.tag {
            if *tag != data.tag {
                return false;
            }
        }
        if let Some(id) = &self.id {
            let has_id = data
                .attributes
                .iter()
                .any(|(key, value)| key == "id" && value == id);
            if !has_id {
                return false;
            }
        }
        self.classes
            .iter()
            .all(|class| data.classes.iter().any(|c| c == class))
    }
}

/// [`Observer`] that only records registrations
#[derive(Debug, Default)]
pub struct MemoryObserver<N> {
    observed: Vec<N>,
}

impl<N: PartialEq + Clone> MemoryObserver<N> {
    pub fn new() -> Self {
        Self { observed: vec![] }
    }

    pub fn observed(&self) -> &[N] {
        &self.observed
    }

    pub fn is_observing(&self, node: &N) -> bool {
        self.observed.contains(node)
    }
}

impl<N: PartialEq + Clone> Observer<N> for MemoryObserver<N> {
    fn observe(&mut self, node: &N) {
        if !self.observed.contains(node) {
            self.observed.push(node.clone());
        }
    }

    fn unobserve(&mut self, node: &N) {
        self.observed.retain(|n| n != node);
    }
}
