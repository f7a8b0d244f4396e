//! Stat counters that count up once the stats block scrolls into view.
//!
//! Each counter is a small state machine (current value, target). One shared
//! interval ticks every unfinished counter; each tick moves a counter to
//! `ceil(current + target / divisor)`, clamped to its target, so counters
//! with bigger targets take bigger steps and all of them land exactly on
//! `"{target}+"`. A second trigger while the interval is live is ignored.

#[cfg(test)]
#[path = "counter_test.rs"]
mod counter_test;

/// Counter element ids and their fixed targets.
pub const COUNTER_TARGETS: [(&str, u32); 4] =
    [("projectCount", 12), ("clientCount", 5), ("experienceCount", 15), ("coffeeCount", 500)];

/// Attribute carrying a counter's target.
pub const TARGET_ATTR: &str = "data-target";

/// Counter text for `value`.
pub fn render(value: u32) -> String {
    format!("{value}+")
}

/// Parse counter text such as `"42+"`. Empty text reads as zero; fractional
/// values round up; anything unparsable yields `None`.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn parse_display(text: &str) -> Option<u32> {
    let digits = text.trim().trim_end_matches('+').trim();
    if digits.is_empty() {
        return Some(0);
    }
    let Ok(value) = digits.parse::<f64>() else {
        return None;
    };
    if !value.is_finite() {
        return None;
    }
    Some(value.max(0.0).ceil().min(f64::from(u32::MAX)) as u32)
}

/// Parse a `data-target` attribute. Missing or malformed targets are zero.
pub fn parse_target(attr: Option<&str>) -> u32 {
    attr.map_or(0, |raw| raw.trim().parse::<u32>().unwrap_or(0))
}

#[derive(Clone, Debug, PartialEq)]
pub struct Counter {
    target: u32,
    current: u32,
    divisor: f64,
}

impl Counter {
    /// A start value above the target is clamped down to it.
    pub fn new(target: u32, start: u32, divisor: f64) -> Self {
        Self { target, current: start.min(target), divisor }
    }

    /// Seed from the counter's current text. Unreadable text finishes
    /// immediately at the target.
    pub fn from_display(target: u32, text: &str, divisor: f64) -> Self {
        Self::new(target, parse_display(text).unwrap_or(target), divisor)
    }

    pub fn current(&self) -> u32 {
        self.current
    }

    pub fn is_done(&self) -> bool {
        self.current >= self.target
    }

    pub fn display(&self) -> String {
        render(self.current)
    }

    /// Advance one tick. Returns `false` once the target has been reached.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn step(&mut self) -> bool {
        if self.is_done() {
            return false;
        }
        let increment = f64::from(self.target) / self.divisor;
        let next = (f64::from(self.current) + increment).ceil();
        // Float rounding can swallow a tiny increment; always move at least one.
        self.current = (next.min(f64::from(self.target)) as u32).max(self.current + 1);
        true
    }
}

/// What a [`CounterSet::start`] call decided.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StartOutcome {
    /// A new run began; the caller drives [`CounterSet::tick`].
    Started,
    AlreadyRunning,
    /// Every counter is at its target. The caller should still render once so
    /// out-of-range or unreadable text snaps to `"{target}+"`.
    Finished,
}

/// All counters of the stats block plus the "already running" guard.
#[derive(Clone, Debug, Default)]
pub struct CounterSet {
    counters: Vec<Counter>,
    running: bool,
}

impl CounterSet {
    pub fn new(counters: Vec<Counter>) -> Self {
        Self { counters, running: false }
    }

    pub fn counters(&self) -> &[Counter] {
        &self.counters
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn all_done(&self) -> bool {
        self.counters.iter().all(Counter::is_done)
    }

    /// Begin animating unless a run is in progress or nothing is left to do.
    pub fn start(&mut self) -> StartOutcome {
        if self.running {
            return StartOutcome::AlreadyRunning;
        }
        if self.all_done() {
            return StartOutcome::Finished;
        }
        self.running = true;
        StartOutcome::Started
    }

    /// Text each counter should show right now.
    pub fn displays(&self) -> Vec<String> {
        self.counters.iter().map(Counter::display).collect()
    }

    /// Advance every unfinished counter by one step; ends the run once all
    /// counters are done. Returns whether anything moved.
    pub fn tick(&mut self) -> bool {
        let mut moved = false;
        for counter in &mut self.counters {
            moved |= counter.step();
        }
        if self.all_done() {
            self.running = false;
        }
        moved
    }
}

/// Counter state bound to the `.stat-number` elements.
#[cfg(feature = "browser")]
pub struct PageCounters {
    elements: Vec<web_sys::Element>,
    set: CounterSet,
}

#[cfg(feature = "browser")]
impl PageCounters {
    /// Read each element's `data-target` and current text.
    pub fn from_elements(elements: Vec<web_sys::Element>, divisor: f64) -> Self {
        let counters = elements
            .iter()
            .map(|el| {
                let target = parse_target(el.get_attribute(TARGET_ATTR).as_deref());
                Counter::from_display(target, &el.text_content().unwrap_or_default(), divisor)
            })
            .collect();
        Self { elements, set: CounterSet::new(counters) }
    }

    fn render(&self) {
        for (element, text) in self.elements.iter().zip(self.set.displays()) {
            element.set_text_content(Some(&text));
        }
    }
}

/// Drives [`PageCounters`] from a single `gloo_timers` interval.
#[cfg(feature = "browser")]
#[derive(Clone)]
pub struct CounterAnimator {
    counters: std::rc::Rc<std::cell::RefCell<PageCounters>>,
    interval: std::rc::Rc<std::cell::RefCell<Option<gloo_timers::callback::Interval>>>,
    tick_ms: u32,
}

#[cfg(feature = "browser")]
impl CounterAnimator {
    pub fn new(counters: PageCounters, tick_ms: u32) -> Self {
        Self {
            counters: std::rc::Rc::new(std::cell::RefCell::new(counters)),
            interval: std::rc::Rc::new(std::cell::RefCell::new(None)),
            tick_ms,
        }
    }

    /// Start the shared tick loop unless it is already running.
    pub fn trigger(&self) {
        use std::rc::Rc;

        let outcome = self.counters.borrow_mut().set.start();
        match outcome {
            StartOutcome::Started => log::debug!("stat counters started"),
            StartOutcome::AlreadyRunning => return,
            StartOutcome::Finished => {
                // Text that was already at or past its target still snaps to "{target}+".
                self.counters.borrow().render();
                return;
            }
        }

        let counters = Rc::clone(&self.counters);
        let slot = Rc::clone(&self.interval);
        let interval = gloo_timers::callback::Interval::new(self.tick_ms, move || {
            let mut state = counters.borrow_mut();
            state.set.tick();
            state.render();
            if !state.set.is_running() {
                // Dropping the interval clears it; wasm-bindgen defers freeing
                // the running callback until it returns.
                slot.borrow_mut().take();
            }
        });
        *self.interval.borrow_mut() = Some(interval);
    }
}

/// Trigger `animator` whenever `container` is at least `threshold` visible.
///
/// # Errors
///
/// Returns [`crate::error::SetupError::Listener`] if the observer cannot be
/// created.
#[cfg(feature = "browser")]
pub fn observe_stats(
    container: &web_sys::Element,
    threshold: f64,
    animator: CounterAnimator,
) -> Result<(), crate::error::SetupError> {
    use wasm_bindgen::{JsCast, JsValue, closure::Closure};

    let callback = Closure::<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>::new(
        move |entries: js_sys::Array, _observer: web_sys::IntersectionObserver| {
            let intersecting = entries.iter().any(|entry| {
                entry
                    .dyn_ref::<web_sys::IntersectionObserverEntry>()
                    .is_some_and(web_sys::IntersectionObserverEntry::is_intersecting)
            });
            if intersecting {
                animator.trigger();
            }
        },
    );

    let options = web_sys::IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(threshold));
    let observer = web_sys::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
        .map_err(|_| crate::error::SetupError::Listener {
            event: "intersection".to_owned(),
            target: "stats container".to_owned(),
        })?;
    observer.observe(container);
    callback.forget();
    Ok(())
}
