use std::fmt;

use crate::*;

/// Which project cards stay visible
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryFilter {
    All,
    Only(String),
}

impl CategoryFilter {
    pub const WILDCARD: &'static str = "all";

    pub fn matches(&self, category: Option<&str>) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(wanted) => category == Some(wanted.as_str()),
        }
    }

    /// Screen reader message for `visible` matching cards
    pub fn announcement(&self, visible: usize) -> String {
        match self {
            CategoryFilter::All => format!("Showing {visible} projects"),
            CategoryFilter::Only(category) => format!("Showing {visible} {category} projects"),
        }
    }
}

impl From<&str> for CategoryFilter {
    fn from(token: &str) -> Self {
        if token == Self::WILDCARD {
            CategoryFilter::All
        } else {
            CategoryFilter::Only(token.to_owned())
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryFilter::All => f.write_str(Self::WILDCARD),
            CategoryFilter::Only(category) => f.write_str(category),
        }
    }
}

/// Category a card is tagged with
pub fn card_category<V: View>(view: &V, config: &PageConfig, card: &V::Node) -> Option<String> {
    view.attribute(card, &config.projects.category_attribute)
}

/// Shows the cards matching `filter`, hides the rest and marks `trigger` as the active filter
/// button. Returns how many cards are visible.
pub fn filter_category<V: View>(
    view: &V,
    config: &PageConfig,
    filter: &CategoryFilter,
    trigger: Option<&V::Node>,
) -> Result<usize> {
    let projects = &config.projects;
    let cards = view.query_all(&projects.card_selector);
    if cards.is_empty() {
        return Err(Error::MissingElement("project cards"));
    }

    let mut visible = 0;
    for card in &cards {
        let show = filter.matches(card_category(view, config, card).as_deref());
        view.set_style(card, "display", if show { "" } else { "none" })?;
        if show {
            visible += 1;
        }
    }

    for button in view.query_all(&projects.filter_button_selector) {
        view.remove_class(&button, &config.active_class)?;
        view.set_attribute(&button, "aria-pressed", "false")?;
    }
    if let Some(trigger) = trigger {
        view.add_class(trigger, &config.active_class)?;
        view.set_attribute(trigger, "aria-pressed", "true")?;
    }

    if let Err(e) = check_pagination_visibility(view, config) {
        debug!(%e, "skipped pagination check");
    }
    announce(view, config, &filter.announcement(visible));

    debug!(%filter, visible, total = cards.len(), "filtered projects");
    Ok(visible)
}
