//! In-page fragment routing and the back-to-top control.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

/// Back-to-top class present once the page has scrolled far enough.
pub const SHOW_CLASS: &str = "show";

/// Element id named by an in-page link, or `None` for a bare `#` or a
/// non-fragment href.
pub fn fragment_id(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Window scroll position that puts the target just below the fixed header.
pub fn scroll_target(offset_top: f64, header_offset: f64) -> f64 {
    offset_top - header_offset
}

pub fn back_to_top_visible(scroll_y: f64, threshold: f64) -> bool {
    scroll_y > threshold
}

/// Scroll smoothly to the element named by `href`. Returns `false` when the
/// href is not a usable fragment or nothing on the page has that id.
#[cfg(feature = "browser")]
pub fn follow_fragment(window: &web_sys::Window, document: &web_sys::Document, href: &str, header_offset: f64) -> bool {
    use wasm_bindgen::JsCast;

    let Some(id) = fragment_id(href) else {
        return false;
    };
    let Some(target) = document.get_element_by_id(id) else {
        log::debug!("no element for fragment `#{id}`");
        return false;
    };
    let Some(target) = target.dyn_ref::<web_sys::HtmlElement>() else {
        return false;
    };
    crate::dom::smooth_scroll_to(window, scroll_target(f64::from(target.offset_top()), header_offset));
    true
}

/// Show or hide the back-to-top control for the current scroll offset.
#[cfg(feature = "browser")]
pub fn sync_back_to_top(window: &web_sys::Window, control: &web_sys::Element, threshold: f64) {
    use crate::dom::report;

    let scroll_y = window.scroll_y().unwrap_or(0.0);
    let classes = control.class_list();
    if back_to_top_visible(scroll_y, threshold) {
        report(classes.add_1(SHOW_CLASS), "show back-to-top");
    } else {
        report(classes.remove_1(SHOW_CLASS), "hide back-to-top");
    }
}
