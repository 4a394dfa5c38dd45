use crate::*;

/// What the page-ready sequence found and set up
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bootstrap {
    pub live_region: bool,
    /// `None` when scroll animations could not be set up
    pub scroll: Option<ScrollSetup>,
    /// Load more visibility, `None` when the page has no project grid
    pub load_more_shown: Option<bool>,
}

/// Runs once the document is ready: live region, scroll animations, initial pagination check
///
/// Every step runs whatever the previous ones did, failures are logged and recorded.
/// Menu dismissal listeners are host specific and registered by the caller, see
/// [`handle_outside_click`] and [`handle_key`].
pub fn bootstrap<V: View, O: Observer<V::Node>>(
    view: &V,
    config: &PageConfig,
    reduced_motion: bool,
    observer: &mut O,
) -> Result<Bootstrap> {
    let live_region = match create_live_region(view, config) {
        Ok(_) => true,
        Err(e) => {
            warn!(%e, "announcements disabled");
            false
        }
    };
    let scroll = init_scroll_animations(view, config, reduced_motion, observer)
        .map_err(|e| warn!(%e, "scroll animations disabled"))
        .ok();
    let load_more_shown = check_pagination_visibility(view, config).ok();

    info!(?scroll, ?load_more_shown, "page interactions ready");
    Ok(Bootstrap {
        live_region,
        scroll,
        load_more_shown,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::fixtures::{portfolio_page, RejectingView};

    #[test]
    fn prepares_page() {
        let page = portfolio_page(&["residential"; 4]);
        let config = PageConfig::default();
        let mut observer = MemoryObserver::new();

        let ready = bootstrap(&page.view, &config, false, &mut observer).unwrap();

        assert_eq!(
            ready,
            Bootstrap {
                live_region: true,
                scroll: Some(ScrollSetup::Observing(2)),
                load_more_shown: Some(false),
            }
        );
        assert_eq!(page.view.style(&page.load_more, "display"), "none");
        assert_eq!(menu_state(&page.view, &config), MenuState::Closed);
    }

    #[test]
    fn running_twice_keeps_one_live_region() {
        let page = portfolio_page(&[]);
        let config = PageConfig::default();
        let mut observer = MemoryObserver::new();

        bootstrap(&page.view, &config, true, &mut observer).unwrap();
        bootstrap(&page.view, &config, true, &mut observer).unwrap();

        assert_eq!(page.view.query_all("#aria-announcement").len(), 1);
    }

    #[test]
    fn bare_page_still_boots() {
        let view = MemoryView::new();
        let mut observer = MemoryObserver::new();

        let ready = bootstrap(&view, &PageConfig::default(), false, &mut observer).unwrap();

        assert_eq!(ready.scroll, Some(ScrollSetup::Observing(0)));
        assert_eq!(ready.load_more_shown, None);
        assert!(ready.live_region);
    }

    #[test]
    fn full_session() {
        use rand::{rngs::StdRng, SeedableRng};

        let page = portfolio_page(&["residential", "commercial", "residential", "commercial"]);
        let config = PageConfig::default();
        let view = &page.view;
        let mut observer = MemoryObserver::new();
        let mut rng = StdRng::seed_from_u64(11);
        bootstrap(view, &config, false, &mut observer).unwrap();
        let region = view.element_by_id("aria-announcement").unwrap();

        paginate(view, &config, &mut rng).unwrap();
        assert_eq!(view.style(&page.load_more, "display"), "block");

        let shown =
            filter_category(view, &config, &"residential".into(), Some(&page.filters[1])).unwrap();
        // 2 original residential cards plus 2 of the 3 generated ones
        assert_eq!(shown, 4);
        assert_eq!(view.text(&region), "Showing 4 residential projects");

        toggle_menu(view, &config).unwrap();
        assert!(handle_key(view, &config, "Escape").unwrap());
        assert_eq!(menu_state(view, &config), MenuState::Closed);
    }

    #[test]
    fn unstylable_element_keeps_the_rest_of_setup() {
        let page = portfolio_page(&["residential"; 8]);
        let config = PageConfig::default();
        let view = RejectingView {
            inner: &page.view,
            rejected: page.animated[0],
        };
        let mut observer = MemoryObserver::new();

        let ready = bootstrap(&view, &config, true, &mut observer).unwrap();

        assert_eq!(
            ready,
            Bootstrap {
                live_region: true,
                scroll: Some(ScrollSetup::Revealed(1)),
                load_more_shown: Some(true),
            }
        );
        assert_eq!(page.view.style(&page.animated[1], "opacity"), "1");
        assert_eq!(page.view.style(&page.load_more, "display"), "block");
    }
}
