//! DOM lookups, listener plumbing and the startup element inventory.
//!
//! ARCHITECTURE
//! ============
//! [`PageHandles::acquire`] is the only place that looks up required
//! elements. It runs once at startup and fails with the first missing id or
//! selector, so handlers receive elements they can rely on.

use wasm_bindgen::{JsCast, JsValue, closure::Closure};
use web_sys::{Document, Element, EventTarget, HtmlButtonElement, HtmlElement, HtmlFormElement, Window};

use crate::config::Selectors;
use crate::counter::COUNTER_TARGETS;
use crate::error::SetupError;

/// Log a failed DOM call instead of dropping it.
pub fn report(result: Result<(), JsValue>, what: &str) {
    if let Err(err) = result {
        log::warn!("{what} failed: {err:?}");
    }
}

pub fn window_and_document() -> Result<(Window, Document), SetupError> {
    let window = web_sys::window().ok_or(SetupError::NoWindow)?;
    let document = window.document().ok_or(SetupError::NoDocument)?;
    Ok((window, document))
}

pub fn element_by_id(document: &Document, id: &str) -> Result<Element, SetupError> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| SetupError::MissingElement(format!("#{id}")))
}

fn cast<T: JsCast>(element: Element, selector: &str, expected: &'static str) -> Result<T, SetupError> {
    element
        .dyn_into::<T>()
        .map_err(|_| SetupError::WrongElementKind { selector: selector.to_owned(), expected })
}

/// First match of `selector`, which must exist.
pub fn query_one(document: &Document, selector: &str) -> Result<Element, SetupError> {
    document
        .query_selector(selector)
        .map_err(|_| SetupError::BadSelector(selector.to_owned()))?
        .ok_or_else(|| SetupError::MissingElement(selector.to_owned()))
}

/// First match of `selector` under `parent`, which must exist.
pub fn query_within(parent: &Element, selector: &str, parent_label: &str) -> Result<Element, SetupError> {
    parent
        .query_selector(selector)
        .map_err(|_| SetupError::BadSelector(selector.to_owned()))?
        .ok_or_else(|| SetupError::MissingElement(format!("{parent_label} {selector}")))
}

/// Every element matching `selector`; may be empty.
pub fn query_all(document: &Document, selector: &str) -> Result<Vec<Element>, SetupError> {
    let list = document
        .query_selector_all(selector)
        .map_err(|_| SetupError::BadSelector(selector.to_owned()))?;
    Ok((0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_ref::<Element>().cloned())
        .collect())
}

/// Attach `handler` for `event` and leak the closure for the page lifetime.
pub fn listen<F>(target: &EventTarget, event: &str, label: &str, handler: F) -> Result<(), SetupError>
where
    F: FnMut(web_sys::Event) + 'static,
{
    let closure = Closure::<dyn FnMut(web_sys::Event)>::new(handler);
    target
        .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        .map_err(|_| SetupError::Listener { event: event.to_owned(), target: label.to_owned() })?;
    closure.forget();
    Ok(())
}

pub fn viewport_height(window: &Window) -> f64 {
    match window.inner_height() {
        Ok(value) => value.as_f64().unwrap_or(0.0),
        Err(_) => 0.0,
    }
}

pub fn smooth_scroll_to(window: &Window, top: f64) {
    let options = web_sys::ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(web_sys::ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

/// Every element the behavior units need, looked up once.
pub struct PageHandles {
    pub window: Window,
    pub document: Document,
    pub body: HtmlElement,
    pub theme_toggle: Element,
    pub theme_icon: Element,
    pub menu_button: Element,
    pub nav_links: Element,
    pub nav_link_items: Vec<Element>,
    pub fragment_links: Vec<Element>,
    pub back_to_top: Element,
    pub stats_container: Element,
    /// Counter elements paired with their fixed targets.
    pub counters: Vec<(Element, u32)>,
    pub contact_form: HtmlFormElement,
    pub submit_button: HtmlButtonElement,
    pub form_message: Element,
}

impl PageHandles {
    /// Acquire and type-check every required element.
    ///
    /// # Errors
    ///
    /// Returns the first missing, mistyped or unparsable element reference.
    pub fn acquire(window: Window, document: Document, selectors: &Selectors) -> Result<Self, SetupError> {
        let body = document.body().ok_or_else(|| SetupError::MissingElement("body".to_owned()))?;

        let theme_toggle = element_by_id(&document, &selectors.theme_toggle_id)?;
        let theme_icon = query_within(&theme_toggle, "i", &format!("#{}", selectors.theme_toggle_id))?;
        let menu_button = element_by_id(&document, &selectors.menu_button_id)?;
        let nav_links = query_one(&document, &selectors.nav_links)?;
        let nav_link_items = query_all(&document, &selectors.nav_link_items)?;
        let fragment_links = query_all(&document, &selectors.fragment_links)?;
        let back_to_top = element_by_id(&document, &selectors.back_to_top_id)?;
        let stats_container = query_one(&document, &selectors.stats_container)?;

        let counters = COUNTER_TARGETS
            .iter()
            .map(|(id, target)| element_by_id(&document, id).map(|el| (el, *target)))
            .collect::<Result<Vec<_>, _>>()?;

        let form_selector = format!("#{}", selectors.contact_form_id);
        let contact_form: HtmlFormElement =
            cast(element_by_id(&document, &selectors.contact_form_id)?, &form_selector, "form")?;
        let submit_button: HtmlButtonElement = cast(
            query_within(&contact_form, &selectors.submit_button, &form_selector)?,
            &selectors.submit_button,
            "button",
        )?;
        let form_message = element_by_id(&document, &selectors.form_message_id)?;

        Ok(Self {
            window,
            document,
            body,
            theme_toggle,
            theme_icon,
            menu_button,
            nav_links,
            nav_link_items,
            fragment_links,
            back_to_top,
            stats_container,
            counters,
            contact_form,
            submit_button,
            form_message,
        })
    }
}
