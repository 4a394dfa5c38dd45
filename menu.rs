use crate::*;

/// Visibility of the mobile menu panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuState {
    Closed,
    Open,
}

impl MenuState {
    /// Reads the state off the panel's inline `display`: unset or `none` is closed
    pub fn from_display(display: &str) -> Self {
        match display {
            "" | "none" => MenuState::Closed,
            _ => MenuState::Open,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            MenuState::Closed => MenuState::Open,
            MenuState::Open => MenuState::Closed,
        }
    }

    fn display(self) -> &'static str {
        match self {
            MenuState::Closed => "none",
            MenuState::Open => "block",
        }
    }
}

fn menu_elements<V: View>(view: &V, config: &PageConfig) -> Result<(V::Node, V::Node)> {
    let panel = view
        .element_by_id(&config.menu.panel_id)
        .ok_or(Error::MissingElement("mobile menu"))?;
    let button = view
        .query(&config.menu.button_selector)
        .ok_or(Error::MissingElement("mobile menu button"))?;
    Ok((panel, button))
}

/// Current menu state, closed when the panel is missing
pub fn menu_state<V: View>(view: &V, config: &PageConfig) -> MenuState {
    view.element_by_id(&config.menu.panel_id)
        .map(|panel| MenuState::from_display(&view.style(&panel, "display")))
        .unwrap_or(MenuState::Closed)
}

/// Flips the mobile menu and keeps the trigger button's class and ARIA state in sync
pub fn toggle_menu<V: View>(view: &V, config: &PageConfig) -> Result<MenuState> {
    let (panel, button) = menu_elements(view, config)?;
    let next = MenuState::from_display(&view.style(&panel, "display")).toggled();

    view.set_style(&panel, "display", next.display())?;
    let label = match next {
        MenuState::Open => {
            view.add_class(&button, &config.active_class)?;
            view.set_attribute(&button, "aria-expanded", "true")?;
            &config.menu.open_label
        }
        MenuState::Closed => {
            view.remove_class(&button, &config.active_class)?;
            view.set_attribute(&button, "aria-expanded", "false")?;
            &config.menu.closed_label
        }
    };
    view.set_attribute(&button, "aria-label", label)?;

    debug!(state = ?next, "toggled mobile menu");
    Ok(next)
}

/// Closes an open menu when a click lands outside both the panel and its button
///
/// Returns whether the menu was closed.
pub fn handle_outside_click<V: View>(
    view: &V,
    config: &PageConfig,
    target: Option<&V::Node>,
) -> Result<bool> {
    let (panel, button) = menu_elements(view, config)?;
    if MenuState::from_display(&view.style(&panel, "display")) != MenuState::Open {
        return Ok(false);
    }
    if let Some(target) = target {
        if view.contains(&panel, target) || view.contains(&button, target) {
            return Ok(false);
        }
    }
    toggle_menu(view, config)?;
    Ok(true)
}

/// Closes an open menu on `Escape`, returns whether it did
pub fn handle_key<V: View>(view: &V, config: &PageConfig, key: &str) -> Result<bool> {
    if key != "Escape" || menu_state(view, config) != MenuState::Open {
        return Ok(false);
    }
    toggle_menu(view, config)?;
    Ok(true)
}
