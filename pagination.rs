use rand::Rng;

use crate::*;

/// Shows the load more control only when the grid holds more cards than the page threshold
///
/// Counts every card in the grid, hidden ones included. Returns whether the control is shown.
pub fn check_pagination_visibility<V: View>(view: &V, config: &PageConfig) -> Result<bool> {
    let projects = &config.projects;
    let grid = view
        .element_by_id(&projects.grid_id)
        .ok_or(Error::MissingElement("project grid"))?;
    let load_more = view
        .element_by_id(&projects.load_more_id)
        .ok_or(Error::MissingElement("load more container"))?;

    let total = view.query_all_in(&grid, &projects.counted_selector).len();
    let shown = total > projects.page_threshold;
    view.set_style(&load_more, "display", if shown { "block" } else { "none" })?;

    trace!(total, shown, "checked pagination");
    Ok(shown)
}

/// Appends a batch of placeholder project cards to the grid
pub fn paginate<V: View, R: Rng + ?Sized>(
    view: &V,
    config: &PageConfig,
    rng: &mut R,
) -> Result<Vec<ProjectCard>> {
    let projects = &config.projects;
    let grid = view
        .element_by_id(&projects.grid_id)
        .ok_or(Error::MissingElement("project grid"))?;

    let cards = ProjectCard::generate_batch(projects, rng);
    for card in &cards {
        let link = view.create_element("a")?;
        view.set_attribute(&link, "class", &projects.card_class)?;
        view.set_attribute(&link, "href", &projects.card_href)?;
        view.set_attribute(&link, &projects.category_attribute, &card.category)?;
        view.set_attribute(&link, "aria-label", &card.aria_label())?;
        view.set_inner_html(&link, &card.render().into_string());
        view.append_child(&grid, &link)?;
    }

    if let Err(e) = check_pagination_visibility(view, config) {
        debug!(%e, "skipped pagination check");
    }
    announce(view, config, &format!("{} more projects loaded", cards.len()));

    debug!(added = cards.len(), "loaded more projects");
    Ok(cards)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::fixtures::portfolio_page;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn threshold_boundary() {
        let config = PageConfig::default();

        let six = portfolio_page(&["residential"; 6]);
        assert!(!check_pagination_visibility(&six.view, &config).unwrap());
        assert_eq!(six.view.style(&six.load_more, "display"), "none");

        let seven = portfolio_page(&["residential"; 7]);
        assert!(check_pagination_visibility(&seven.view, &config).unwrap());
        assert_eq!(seven.view.style(&seven.load_more, "display"), "block");
    }

    #[test]
    fn check_is_idempotent() {
        let page = portfolio_page(&["commercial"; 8]);
        let config = PageConfig::default();
        for _ in 0..3 {
            assert!(check_pagination_visibility(&page.view, &config).unwrap());
        }
        assert_eq!(page.view.style(&page.load_more, "display"), "block");
    }

    #[test]
    fn missing_container_is_reported() {
        let view = MemoryView::new();
        let body = view.body().unwrap();
        view.append(&body, "div#projectGrid");
        let err = check_pagination_visibility(&view, &PageConfig::default()).unwrap_err();
        assert!(matches!(err, Error::MissingElement("load more container")));
    }

    #[test]
    fn load_more_appends_batches() {
        let page = portfolio_page(&["residential", "commercial"]);
        let config = PageConfig::default();
        let mut rng = StdRng::seed_from_u64(2024);

        for round in 1..=3 {
            let added = paginate(&page.view, &config, &mut rng).unwrap();
            assert_eq!(added.len(), 3);
            assert_eq!(page.view.children(&page.grid).len(), 2 + 3 * round);
        }

        let cards = page.view.query_all("#projectGrid .card");
        assert_eq!(cards.len(), 11);
        for card in &cards {
            let category = page.view.attribute(card, "data-category").unwrap();
            assert!(config.projects.categories.contains(&category));
        }
    }

    #[test]
    fn generated_cards_carry_markup() {
        let page = portfolio_page(&[]);
        let config = PageConfig::default();
        let mut rng = StdRng::seed_from_u64(3);

        let added = paginate(&page.view, &config, &mut rng).unwrap();
        let links = page.view.children(&page.grid);
        assert_eq!(links.len(), added.len());

        for (link, card) in links.iter().zip(&added) {
            let view = &page.view;
            assert_eq!(view.tag(link), "a");
            assert!(view.has_class(link, "card") && view.has_class(link, "project-card"));
            assert_eq!(view.attribute(link, "href").as_deref(), Some("project.html"));
            assert_eq!(view.attribute(link, "aria-label"), Some(card.aria_label()));
            assert!(view.inner_html(link).contains(&format!("<h3>Project {}</h3>", card.number)));
        }
    }

    #[test]
    fn load_more_rechecks_and_announces() {
        let page = portfolio_page(&["residential"; 5]);
        let config = PageConfig::default();
        let region = create_live_region(&page.view, &config).unwrap();
        let mut rng = StdRng::seed_from_u64(9);

        check_pagination_visibility(&page.view, &config).unwrap();
        assert_eq!(page.view.style(&page.load_more, "display"), "none");

        paginate(&page.view, &config, &mut rng).unwrap();
        assert_eq!(page.view.style(&page.load_more, "display"), "block");
        assert_eq!(page.view.text(&region), "3 more projects loaded");
    }

    #[test]
    fn missing_grid_is_a_no_op() {
        let view = MemoryView::new();
        let mut rng = StdRng::seed_from_u64(1);
        let err = paginate(&view, &PageConfig::default(), &mut rng).unwrap_err();
        assert!(matches!(err, Error::MissingElement("project grid")));
        assert!(view.query_all(".project-card").is_empty());
    }
}
