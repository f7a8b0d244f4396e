//! Composition root: reads the page config, acquires every element once and
//! hands each behavior unit the handles it needs.

use std::cell::RefCell;
use std::rc::Rc;

use web_sys::Element;

use crate::config::{CONFIG_ELEMENT_ID, PageConfig};
use crate::counter::{self, CounterAnimator, PageCounters};
use crate::dom::{self, PageHandles, report};
use crate::error::SetupError;
use crate::form::{self, NoCorsPost, PageForm, SubmitGuard, TimerSleep};
use crate::menu::{self, PageMenu};
use crate::reveal::{self, PageReveal};
use crate::scroll;
use crate::theme::{self, LocalStorage, PageTheme, ThemeController};

/// Read `#portfolio-config` if the page embeds one; defaults otherwise.
///
/// # Errors
///
/// Returns [`SetupError::Config`] when the embedded JSON is malformed or out
/// of range.
pub fn load_config() -> Result<PageConfig, SetupError> {
    let (_window, document) = dom::window_and_document()?;
    let Some(script) = document.get_element_by_id(CONFIG_ELEMENT_ID) else {
        return Ok(PageConfig::default());
    };
    let text = script.text_content().unwrap_or_default();
    Ok(PageConfig::from_json(&text)?)
}

/// Wire every behavior unit to the current document.
///
/// # Errors
///
/// Fails before any listener is attached if a required element is missing,
/// and afterwards only if the browser refuses a listener.
pub fn mount(config: PageConfig) -> Result<(), SetupError> {
    let (window, document) = dom::window_and_document()?;
    let handles = PageHandles::acquire(window, document, &config.selectors)?;
    let animatable = dom::query_all(&handles.document, &config.selectors.animatable)?;
    let auto_animate = dom::query_all(&handles.document, &config.selectors.auto_animate)?;
    let stat_numbers = dom::query_all(&handles.document, &config.selectors.stat_numbers)?;

    install_theme(&handles, &config)?;
    install_menu(&handles)?;
    install_scroll(&handles, &config)?;
    install_form(&handles, &config)?;

    let reveal = Rc::new(RefCell::new(PageReveal::new(animatable, config.timing.reveal_margin)));
    install_reveal(&handles, &reveal)?;
    log::debug!(
        "portfolio mounted: {} animatable, {} fragment links, {} counters",
        reveal.borrow().len(),
        handles.fragment_links.len(),
        stat_numbers.len()
    );

    let on_load = LoadTasks { handles, config, reveal, auto_animate, stat_numbers };
    on_load.schedule()
}

fn install_theme(handles: &PageHandles, config: &PageConfig) -> Result<(), SetupError> {
    let store = LocalStorage::open(&handles.window);
    let surface = PageTheme { body: handles.body.clone(), icon: handles.theme_icon.clone() };
    let system_dark = theme::system_prefers_dark(&handles.window);
    let mut controller = ThemeController::init(store, surface, &config.theme_storage_key, system_dark);
    log::debug!("theme resolved to {}", controller.current().as_str());

    dom::listen(&handles.theme_toggle, "click", "theme toggle", move |_| {
        let next = controller.toggle();
        log::debug!("theme toggled to {}", next.as_str());
    })
}

fn install_menu(handles: &PageHandles) -> Result<(), SetupError> {
    let page_menu = Rc::new(PageMenu { container: handles.nav_links.clone(), button: handles.menu_button.clone() });

    let toggle_menu = Rc::clone(&page_menu);
    dom::listen(&handles.menu_button, "click", "menu button", move |_| {
        let open = menu::on_toggle(&*toggle_menu);
        log::debug!("menu {}", if open { "opened" } else { "closed" });
    })?;

    for link in &handles.nav_link_items {
        let link_menu = Rc::clone(&page_menu);
        dom::listen(link, "click", "nav link", move |_| menu::on_link_selected(&*link_menu))?;
    }
    Ok(())
}

fn install_scroll(handles: &PageHandles, config: &PageConfig) -> Result<(), SetupError> {
    let header_offset = config.timing.header_offset;
    for anchor in &handles.fragment_links {
        let window = handles.window.clone();
        let document = handles.document.clone();
        let link = anchor.clone();
        dom::listen(anchor, "click", "fragment link", move |event| {
            event.prevent_default();
            let href = link.get_attribute("href").unwrap_or_default();
            scroll::follow_fragment(&window, &document, &href, header_offset);
        })?;
    }

    let threshold = config.timing.back_to_top_threshold;
    let window = handles.window.clone();
    let control = handles.back_to_top.clone();
    dom::listen(&handles.window, "scroll", "window", move |_| {
        scroll::sync_back_to_top(&window, &control, threshold);
    })?;

    let window = handles.window.clone();
    dom::listen(&handles.back_to_top, "click", "back-to-top", move |_| {
        dom::smooth_scroll_to(&window, 0.0);
    })
}

fn install_reveal(handles: &PageHandles, reveal: &Rc<RefCell<PageReveal>>) -> Result<(), SetupError> {
    let window = handles.window.clone();
    let reveal = Rc::clone(reveal);
    dom::listen(&handles.window, "scroll", "window", move |_| {
        reveal.borrow_mut().scan(dom::viewport_height(&window));
    })
}

fn install_form(handles: &PageHandles, config: &PageConfig) -> Result<(), SetupError> {
    let surface = PageForm {
        form: handles.contact_form.clone(),
        button: handles.submit_button.clone(),
        message: handles.form_message.clone(),
    };
    let transport = NoCorsPost { form: handles.contact_form.clone() };
    let copy = Rc::new(config.copy.clone());
    let reset_ms = config.timing.form_reset_ms;
    let guard = Rc::new(SubmitGuard::default());

    dom::listen(&handles.contact_form, "submit", "contact form", move |event| {
        event.prevent_default();
        if !guard.try_begin() {
            log::debug!("contact form submit ignored while sending");
            return;
        }
        let surface = surface.clone();
        let transport = transport.clone();
        let copy = Rc::clone(&copy);
        let guard = Rc::clone(&guard);
        wasm_bindgen_futures::spawn_local(async move {
            let outcome = form::submit(&surface, &transport, &TimerSleep, &copy, reset_ms).await;
            log::debug!("contact form finished: {outcome:?}");
            guard.finish();
        });
    })
}

/// Work deferred to the window `load` event.
struct LoadTasks {
    handles: PageHandles,
    config: PageConfig,
    reveal: Rc<RefCell<PageReveal>>,
    auto_animate: Vec<Element>,
    stat_numbers: Vec<Element>,
}

impl LoadTasks {
    /// Run now if the page already finished loading, otherwise on `load`.
    fn schedule(self) -> Result<(), SetupError> {
        if self.handles.document.ready_state() == "complete" {
            self.run();
            return Ok(());
        }
        let window = self.handles.window.clone();
        let mut pending = Some(self);
        dom::listen(&window, "load", "window", move |_| {
            if let Some(tasks) = pending.take() {
                tasks.run();
            }
        })
    }

    fn run(self) {
        reveal::mark_animatable(&self.auto_animate);

        for (element, target) in &self.handles.counters {
            report(element.set_attribute(counter::TARGET_ATTR, &target.to_string()), "set counter target");
        }

        let mut reveal = self.reveal.borrow_mut();
        reveal.scan(dom::viewport_height(&self.handles.window));
        log::debug!("initial reveal: {} of {} elements visible", reveal.revealed_count(), reveal.len());
        drop(reveal);

        let timing = &self.config.timing;
        let counters = PageCounters::from_elements(self.stat_numbers, timing.counter_divisor);
        let animator = CounterAnimator::new(counters, timing.counter_tick_ms);
        if let Err(err) = counter::observe_stats(&self.handles.stats_container, timing.stats_threshold, animator) {
            log::error!("stat counters disabled: {err}");
        }
    }
}
