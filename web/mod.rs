//! Browser side: [`WebView`] over the live document, the intersection observer and the
//! functions page markup calls (`toggleMenu()`, `filterCategory('residential', event)`,
//! `paginate()`).

use crate::*;

use js_sys::{Array, Reflect};
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{
    CssStyleDeclaration, Document, Element, Event, HtmlElement, IntersectionObserver,
    IntersectionObserverEntry, IntersectionObserverInit, KeyboardEvent, Node,
};

pub use console_error_panic_hook::set_once as set_panic_hook;
pub use wasm_bindgen::prelude::wasm_bindgen;

const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

/// [`View`] over the window's document
pub struct WebView {
    document: Document,
}

impl WebView {
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    /// View of the current window's document
    pub fn current() -> Result<Self> {
        let document = web_sys::window()
            .ok_or(Error::MissingElement("window"))?
            .document()
            .ok_or(Error::MissingElement("document"))?;
        Ok(Self::new(document))
    }

    pub fn document(&self) -> &Document {
        &self.document
    }
}

fn inline_style(node: &Element) -> Result<CssStyleDeclaration> {
    node.dyn_ref::<HtmlElement>()
        .map(HtmlElement::style)
        .ok_or_else(|| {
            let tag = node.tag_name();
            e!("<{tag}> has no inline style")
        })
}

fn elements(list: web_sys::NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

impl View for WebView {
    type Node = Element;

    fn element_by_id(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }

    fn query(&self, selector: &str) -> Option<Element> {
        self.document.query_selector(selector).ok().flatten()
    }

    fn query_all(&self, selector: &str) -> Vec<Element> {
        match self.document.query_selector_all(selector) {
            Ok(list) => elements(list),
            Err(e) => {
                warn!(selector, error = ?e, "invalid selector");
                vec![]
            }
        }
    }

    fn query_all_in(&self, scope: &Element, selector: &str) -> Vec<Element> {
        match scope.query_selector_all(selector) {
            Ok(list) => elements(list),
            Err(e) => {
                warn!(selector, error = ?e, "invalid selector");
                vec![]
            }
        }
    }

    fn body(&self) -> Option<Element> {
        self.document.body().map(Element::from)
    }

    fn create_element(&self, tag: &str) -> Result<Element> {
        Ok(self.document.create_element(tag)?)
    }

    fn append_child(&self, parent: &Element, child: &Element) -> Result {
        parent.append_child(child)?;
        Ok(())
    }

    fn contains(&self, ancestor: &Element, node: &Element) -> bool {
        let node: &Node = node;
        ancestor.contains(Some(node))
    }

    fn attribute(&self, node: &Element, name: &str) -> Option<String> {
        node.get_attribute(name)
    }

    fn set_attribute(&self, node: &Element, name: &str, value: &str) -> Result {
        Ok(node.set_attribute(name, value)?)
    }

    fn has_class(&self, node: &Element, class: &str) -> bool {
        node.class_list().contains(class)
    }

    fn add_class(&self, node: &Element, class: &str) -> Result {
        Ok(node.class_list().add_1(class)?)
    }

    fn remove_class(&self, node: &Element, class: &str) -> Result {
        Ok(node.class_list().remove_1(class)?)
    }

    fn style(&self, node: &Element, property: &str) -> String {
        inline_style(node)
            .and_then(|style| Ok(style.get_property_value(property)?))
            .unwrap_or_default()
    }

    fn set_style(&self, node: &Element, property: &str, value: &str) -> Result {
        Ok(inline_style(node)?.set_property(property, value)?)
    }

    fn set_css_text(&self, node: &Element, css: &str) -> Result {
        inline_style(node)?.set_css_text(css);
        Ok(())
    }

    fn set_text(&self, node: &Element, text: &str) {
        node.set_text_content(Some(text));
    }

    fn set_inner_html(&self, node: &Element, html: &str) {
        node.set_inner_html(html);
    }
}

/// [`Observer`] backed by a browser `IntersectionObserver`
pub struct WebObserver<'a>(pub &'a IntersectionObserver);

impl Observer<Element> for WebObserver<'_> {
    fn observe(&mut self, node: &Element) {
        self.0.observe(node);
    }

    fn unobserve(&mut self, node: &Element) {
        self.0.unobserve(node);
    }
}

/// Creates the page-lifetime observer that feeds [`handle_intersections`]
fn scroll_observer(config: &'static PageConfig) -> Result<IntersectionObserver> {
    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        move |entries: Array, observer: IntersectionObserver| {
            let entries: Vec<Intersection<Element>> = entries
                .iter()
                .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                .map(|entry| Intersection {
                    target: entry.target(),
                    is_intersecting: entry.is_intersecting(),
                })
                .collect();
            let result = WebView::current().and_then(|view| {
                handle_intersections(&view, config, &entries, &mut WebObserver(&observer))
            });
            if let Err(e) = result {
                warn!(%e, "scroll animation failed");
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_root_margin(&config.animation.root_margin);
    options.set_threshold(&JsValue::from_f64(config.animation.threshold));
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    // the observer calls back for the whole page lifetime
    callback.forget();
    Ok(observer)
}

fn prefers_reduced_motion() -> bool {
    web_sys::window()
        .and_then(|window| window.match_media(REDUCED_MOTION_QUERY).ok().flatten())
        .map(|query| query.matches())
        .unwrap_or(false)
}

/// Element an event was dispatched to, text node targets resolve to their parent
fn event_target(event: &Event) -> Option<Element> {
    let target = event.target()?;
    match target.dyn_into::<Element>() {
        Ok(element) => Some(element),
        Err(target) => target.dyn_into::<Node>().ok()?.parent_element(),
    }
}

fn register_dismissal_listeners(document: &Document, config: &'static PageConfig) -> Result {
    let on_click = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
        let target = event_target(&event);
        let result = WebView::current()
            .and_then(|view| handle_outside_click(&view, config, target.as_ref()));
        if let Err(e) = result {
            trace!(%e, "outside click ignored");
        }
    });
    document.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
    on_click.forget();

    let on_keydown = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
        let Some(key) = event.dyn_ref::<KeyboardEvent>().map(KeyboardEvent::key) else {
            return;
        };
        let result = WebView::current().and_then(|view| handle_key(&view, config, &key));
        if let Err(e) = result {
            trace!(%e, "key ignored");
        }
    });
    document.add_event_listener_with_callback("keydown", on_keydown.as_ref().unchecked_ref())?;
    on_keydown.forget();
    Ok(())
}

fn on_ready() -> Result {
    let config = page_config();
    let view = WebView::current()?;
    let observer = scroll_observer(config)
        .map_err(|e| warn!(%e, "intersection observer unavailable"))
        .ok();
    let result = match &observer {
        Some(observer) => bootstrap(
            &view,
            config,
            prefers_reduced_motion(),
            &mut WebObserver(observer),
        ),
        // nothing would ever scroll into view, reveal everything instead
        None => bootstrap(&view, config, true, &mut MemoryObserver::<Element>::new()),
    };
    if let Err(e) = result {
        warn!(%e, "page setup incomplete");
    }
    register_dismissal_listeners(view.document(), config)
}

/// Initializes tracing into the browser console
pub fn init_tracing() {
    #[cfg(feature = "traces")]
    {
        use tracing_subscriber::fmt::{
            format::{FmtSpan, Pretty},
            time::UtcTime,
        };
        use tracing_subscriber::prelude::*;
        use tracing_web::{performance_layer, MakeWebConsoleWriter};

        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_ansi(false) // Only partially supported across browsers
            .with_timer(UtcTime::rfc_3339())
            .with_writer(MakeWebConsoleWriter::new().with_pretty_level())
            .with_level(false)
            .with_span_events(FmtSpan::ACTIVE);
        let perf_layer = performance_layer().with_details_from_fields(Pretty::default());

        let _ = tracing_subscriber::registry()
            .with(fmt_layer)
            .with(perf_layer)
            .try_init();
    }
}

/// Module entry: schedules page setup for `DOMContentLoaded`, or the next task when already parsed
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    set_panic_hook();
    init_tracing();

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("window not found"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("document not found"))?;
    let ready = Closure::once_into_js(|| {
        if let Err(e) = on_ready() {
            warn!(%e, "page setup failed");
        }
    });
    // setup never runs in the instantiating task, leaving room for `configurePage`
    if document.ready_state() == "loading" {
        document.add_event_listener_with_callback("DOMContentLoaded", ready.unchecked_ref())?;
    } else {
        window.set_timeout_with_callback(ready.unchecked_ref())?;
    }
    Ok(())
}

/// Overrides the page config with a TOML document
///
/// Only takes effect when called right after the module is instantiated, before page setup.
#[wasm_bindgen(js_name = configurePage)]
pub fn configure_page(toml: &str) -> Result<(), JsValue> {
    PageConfig::from_toml(toml)
        .and_then(configure)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

#[wasm_bindgen(js_name = toggleMenu)]
pub fn js_toggle_menu() {
    match WebView::current().and_then(|view| toggle_menu(&view, page_config())) {
        Ok(_) => {}
        Err(Error::MissingElement(_)) => warn!("mobile menu elements not found"),
        Err(e) => warn!(%e, "menu toggle failed"),
    }
}

/// Filters project cards, `event` is the click that triggered it (`window.event` when omitted)
#[wasm_bindgen(js_name = filterCategory)]
pub fn js_filter_category(category: &str, event: Option<Event>) {
    let event = event.or_else(|| {
        let window = web_sys::window()?;
        Reflect::get(&window, &JsValue::from_str("event"))
            .ok()?
            .dyn_into::<Event>()
            .ok()
    });
    let trigger = event.as_ref().and_then(event_target);
    let config = page_config();
    let trigger = trigger.map(|target| {
        target
            .closest(&config.projects.filter_button_selector)
            .ok()
            .flatten()
            .unwrap_or(target)
    });

    let filter = CategoryFilter::from(category);
    let result = WebView::current()
        .and_then(|view| filter_category(&view, config, &filter, trigger.as_ref()));
    match result {
        Ok(_) => {}
        Err(Error::MissingElement(_)) => warn!("no project cards found"),
        Err(e) => warn!(%e, "filter failed"),
    }
}

#[wasm_bindgen(js_name = paginate)]
pub fn js_paginate() {
    let mut rng = rand::thread_rng();
    match WebView::current().and_then(|view| paginate(&view, page_config(), &mut rng)) {
        Ok(_) => {}
        Err(Error::MissingElement(_)) => warn!("project grid not found"),
        Err(e) => warn!(%e, "load more failed"),
    }
}
