use std::sync::OnceLock;

use serde::Deserialize;

use crate::*;

/// Holds the [`PageConfig`] shared by the exported entry points
///
/// Filled either by [`configure`] before the first interaction or lazily with defaults.
pub static PAGE_CONFIG: OnceLock<PageConfig> = OnceLock::new();

/// Returns the initialized page config, falling back to [`PageConfig::default`]
pub fn page_config() -> &'static PageConfig {
    PAGE_CONFIG.get_or_init(PageConfig::default)
}

/// Installs a custom config, only allowed before anything has read it
pub fn configure(config: PageConfig) -> Result {
    install(&PAGE_CONFIG, config)
}

fn install(slot: &OnceLock<PageConfig>, config: PageConfig) -> Result {
    slot.set(config).map_err(|_| Error::AlreadyConfigured)
}

/// Describes the markup contract: which ids, selectors and attributes the controller reads
///
/// Every field has a default matching the site markup, so a TOML document only needs to
/// mention what differs:
///
/// ```toml
/// [projects]
/// page_threshold = 9
/// locations = ["Nairobi", "Eldoret"]
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    /// Class marking the active menu button and the active filter button
    pub active_class: String,
    pub menu: MenuConfig,
    pub projects: ProjectsConfig,
    pub animation: AnimationConfig,
    pub announcer: AnnouncerConfig,
}

impl PageConfig {
    pub fn from_toml(source: &str) -> Result<Self> {
        Ok(toml::from_str(source)?)
    }
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            active_class: "active".into(),
            menu: MenuConfig::default(),
            projects: ProjectsConfig::default(),
            animation: AnimationConfig::default(),
            announcer: AnnouncerConfig::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct MenuConfig {
    /// Id of the collapsible panel, default `mobileMenu`
    pub panel_id: String,
    /// Selector of the trigger button, default `.menu-btn`
    pub button_selector: String,
    /// `aria-label` of the button while the menu is open
    pub open_label: String,
    /// `aria-label` of the button while the menu is closed
    pub closed_label: String,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            panel_id: "mobileMenu".into(),
            button_selector: ".menu-btn".into(),
            open_label: "Close Menu".into(),
            closed_label: "Open Menu".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ProjectsConfig {
    pub grid_id: String,
    /// Cards affected by filtering, default `#projectGrid .card`
    pub card_selector: String,
    /// Cards counted by the pagination check (scoped to the grid), default `.project-card`
    pub counted_selector: String,
    pub filter_button_selector: String,
    pub category_attribute: String,
    pub load_more_id: String,
    /// The load more control is shown only when the grid holds more cards than this
    pub page_threshold: usize,
    /// Cards appended per load more
    pub batch_size: usize,
    /// Categories assigned to synthetic cards in rotation
    pub categories: Vec<String>,
    /// Placeholder locations picked at random for synthetic cards
    pub locations: Vec<String>,
    /// Exclusive upper bound of the placeholder project number
    pub max_project_number: u32,
    pub card_class: String,
    pub card_href: String,
}

impl Default for ProjectsConfig {
    fn default() -> Self {
        Self {
            grid_id: "projectGrid".into(),
            card_selector: "#projectGrid .card".into(),
            counted_selector: ".project-card".into(),
            filter_button_selector: ".btn.secondary".into(),
            category_attribute: "data-category".into(),
            load_more_id: "loadMoreContainer".into(),
            page_threshold: 6,
            batch_size: 3,
            categories: vec!["residential".into(), "commercial".into()],
            locations: ["Nairobi", "Kiambu", "Mombasa", "Nakuru"]
                .into_iter()
                .map(String::from)
                .collect(),
            max_project_number: 100,
            card_class: "card project-card".into(),
            card_href: "project.html".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    pub selector: String,
    /// Generic marker added to every animated element
    pub animated_class: String,
    /// Per element attribute naming the animation class
    pub type_attribute: String,
    /// Animation class used when the element has no `type_attribute`
    pub default_animation: String,
    /// Intersection root margin, negative bottom margin triggers before the element is fully in view
    pub root_margin: String,
    /// Minimum visible fraction to count as intersecting
    pub threshold: f64,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            selector: ".animate-on-scroll".into(),
            animated_class: "animated".into(),
            type_attribute: "data-animation".into(),
            default_animation: "fade-in-up".into(),
            root_margin: "0px 0px -100px 0px".into(),
            threshold: 0.1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AnnouncerConfig {
    pub region_id: String,
    pub class: String,
    pub style: String,
}

impl Default for AnnouncerConfig {
    fn default() -> Self {
        Self {
            region_id: "aria-announcement".into(),
            class: "sr-only".into(),
            style: "position: absolute; width: 1px; height: 1px; margin: -1px; padding: 0; \
                    overflow: hidden; clip: rect(0,0,0,0); border: 0;"
                .into(),
        }
    }
}
