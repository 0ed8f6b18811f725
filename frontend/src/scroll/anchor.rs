use log::warn;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions};

/// Smooth-scrolls the element with `id` into view. Missing ids are logged and
/// ignored so a stale link never breaks the page.
pub fn scroll_to_section(id: &str) {
    let Some(element) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id))
    else {
        warn!("no section with id '{}'", id);
        return;
    };

    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}
