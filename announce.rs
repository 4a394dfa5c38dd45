use crate::*;

/// Creates the visually hidden live region screen readers watch, or returns the existing one
pub fn create_live_region<V: View>(view: &V, config: &PageConfig) -> Result<V::Node> {
    let announcer = &config.announcer;
    if let Some(region) = view.element_by_id(&announcer.region_id) {
        return Ok(region);
    }
    let body = view.body().ok_or(Error::MissingElement("document body"))?;

    let region = view.create_element("div")?;
    view.set_attribute(&region, "id", &announcer.region_id)?;
    view.set_attribute(&region, "role", "status")?;
    view.set_attribute(&region, "aria-live", "polite")?;
    view.set_attribute(&region, "aria-atomic", "true")?;
    view.set_attribute(&region, "class", &announcer.class)?;
    view.set_css_text(&region, &announcer.style)?;
    view.append_child(&body, &region)?;

    debug!(id = %announcer.region_id, "created live region");
    Ok(region)
}

/// Replaces the live region text, returns false when there is no region to write to
pub fn announce<V: View>(view: &V, config: &PageConfig, message: &str) -> bool {
    let Some(region) = view.element_by_id(&config.announcer.region_id) else {
        trace!(dropped = message, "no live region");
        return false;
    };
    view.set_text(&region, message);
    true
}
