use crate::*;

/// Outcome of [`init_scroll_animations`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollSetup {
    /// Reduced motion: this many elements were made visible right away
    Revealed(usize),
    /// This many elements are waiting to enter the viewport
    Observing(usize),
}

/// Animation class for `node`, from its type attribute or the configured default
pub fn animation_type<V: View>(view: &V, config: &PageConfig, node: &V::Node) -> String {
    let animation = &config.animation;
    view.attribute(node, &animation.type_attribute)
        .filter(|value| !value.trim().is_empty())
        .unwrap_or_else(|| animation.default_animation.clone())
}

/// Registers every scroll animated element with `observer`, or reveals them all at once when
/// the user prefers reduced motion
pub fn init_scroll_animations<V: View, O: Observer<V::Node>>(
    view: &V,
    config: &PageConfig,
    reduced_motion: bool,
    observer: &mut O,
) -> Result<ScrollSetup> {
    let elements = view.query_all(&config.animation.selector);

    if reduced_motion {
        let mut revealed = 0;
        for element in &elements {
            match view.set_style(element, "opacity", "1") {
                Ok(()) => revealed += 1,
                Err(e) => warn!(%e, "animated element left hidden"),
            }
        }
        debug!(revealed, total = elements.len(), "reduced motion, revealed animated elements");
        return Ok(ScrollSetup::Revealed(revealed));
    }

    for element in &elements {
        observer.observe(element);
    }
    debug!(count = elements.len(), "observing animated elements");
    Ok(ScrollSetup::Observing(elements.len()))
}

/// Animates elements entering the viewport and stops watching them
///
/// Every intersecting element is unobserved first. Elements already carrying the animated marker
/// are skipped, so a repeated intersection never re-triggers. An element that cannot be classed
/// is logged and left out. Returns how many elements were animated.
pub fn handle_intersections<V: View, O: Observer<V::Node>>(
    view: &V,
    config: &PageConfig,
    entries: &[Intersection<V::Node>],
    observer: &mut O,
) -> Result<usize> {
    let animated_class = &config.animation.animated_class;
    let mut animated = 0;
    for entry in entries.iter().filter(|entry| entry.is_intersecting) {
        let target = &entry.target;
        observer.unobserve(target);
        if view.has_class(target, animated_class) {
            continue;
        }
        let animation = animation_type(view, config, target);
        // marker last, a failed animation class leaves the element unmarked
        let result = view
            .add_class(target, &animation)
            .and_then(|_| view.add_class(target, animated_class));
        match result {
            Ok(()) => {
                trace!(%animation, "animated element");
                animated += 1;
            }
            Err(e) => warn!(%e, %animation, "scroll animation skipped"),
        }
    }
    Ok(animated)
}
