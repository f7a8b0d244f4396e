//! Scroll-driven reveal of page sections.
//!
//! An element counts as visible once its top edge rises above
//! `viewport_height - margin` while its bottom edge is still below the top
//! of the viewport. Skill bars reveal by jumping to their `data-width`;
//! everything else gets the `visible` class and leaves the transition to CSS.
//! A revealed element is never checked again.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

/// Class that marks an element as a skill progress bar.
pub const PROGRESS_CLASS: &str = "skill-progress";
/// Class added to revealed non-progress elements.
pub const VISIBLE_CLASS: &str = "visible";
/// Class added on load to cards and timeline items.
pub const ANIMATE_CLASS: &str = "animate";
/// Attribute holding a progress bar's target CSS width.
pub const WIDTH_ATTR: &str = "data-width";

/// Vertical edges of an element relative to the viewport.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub top: f64,
    pub bottom: f64,
}

pub fn is_visible(bounds: Bounds, viewport_height: f64, margin: f64) -> bool {
    bounds.top < viewport_height - margin && bounds.bottom > 0.0
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Role {
    Fade,
    ProgressBar { width: Option<String> },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RevealAction {
    MarkVisible,
    SetWidth(String),
}

/// A progress bar without a target width has nothing to reveal.
pub fn action_for(role: &Role) -> Option<RevealAction> {
    match role {
        Role::Fade => Some(RevealAction::MarkVisible),
        Role::ProgressBar { width: Some(width) } => Some(RevealAction::SetWidth(width.clone())),
        Role::ProgressBar { width: None } => None,
    }
}

/// Per-element "has been revealed" flags.
#[derive(Clone, Debug)]
pub struct RevealTracker {
    revealed: Vec<bool>,
    margin: f64,
}

impl RevealTracker {
    pub fn new(len: usize, margin: f64) -> Self {
        Self { revealed: vec![false; len], margin }
    }

    pub fn is_revealed(&self, index: usize) -> bool {
        self.revealed.get(index).copied().unwrap_or(false)
    }

    pub fn revealed_count(&self) -> usize {
        self.revealed.iter().filter(|r| **r).count()
    }

    /// Check one element. Returns the action to perform the first time it is
    /// seen inside the viewport band; `None` before that and ever after.
    pub fn check(&mut self, index: usize, bounds: Bounds, viewport_height: f64, role: &Role) -> Option<RevealAction> {
        let slot = self.revealed.get_mut(index)?;
        if *slot || !is_visible(bounds, viewport_height, self.margin) {
            return None;
        }
        let action = action_for(role)?;
        *slot = true;
        Some(action)
    }
}

/// Reveal state bound to the page's animatable elements.
#[cfg(feature = "browser")]
pub struct PageReveal {
    elements: Vec<web_sys::Element>,
    tracker: RevealTracker,
}

#[cfg(feature = "browser")]
impl PageReveal {
    pub fn new(elements: Vec<web_sys::Element>, margin: f64) -> Self {
        let tracker = RevealTracker::new(elements.len(), margin);
        Self { elements, tracker }
    }

    pub(crate) fn len(&self) -> usize {
        self.elements.len()
    }

    pub(crate) fn revealed_count(&self) -> usize {
        self.tracker.revealed_count()
    }

    /// Reveal every element that has entered the viewport band.
    pub fn scan(&mut self, viewport_height: f64) {
        use crate::dom::report;
        use wasm_bindgen::JsCast;

        for (index, element) in self.elements.iter().enumerate() {
            if self.tracker.is_revealed(index) {
                continue;
            }
            let rect = element.get_bounding_client_rect();
            let bounds = Bounds { top: rect.top(), bottom: rect.bottom() };
            let role = if element.class_list().contains(PROGRESS_CLASS) {
                Role::ProgressBar { width: element.get_attribute(WIDTH_ATTR) }
            } else {
                Role::Fade
            };
            match self.tracker.check(index, bounds, viewport_height, &role) {
                Some(RevealAction::SetWidth(width)) => {
                    if let Some(bar) = element.dyn_ref::<web_sys::HtmlElement>() {
                        report(bar.style().set_property("width", &width), "set progress width");
                    }
                }
                Some(RevealAction::MarkVisible) => {
                    report(element.class_list().add_1(VISIBLE_CLASS), "mark element visible");
                }
                None => {}
            }
        }
    }
}

/// Tag cards and timeline items as animatable before the first scan.
#[cfg(feature = "browser")]
pub fn mark_animatable(elements: &[web_sys::Element]) {
    for element in elements {
        crate::dom::report(element.class_list().add_1(ANIMATE_CLASS), "add animate class");
    }
}
