//! Page configuration: element selectors, timings and feedback copy.
//!
//! Defaults describe the stock portfolio page. A page can override any field
//! by embedding a JSON object in
//! `<script type="application/json" id="portfolio-config">`; omitted fields
//! keep their defaults.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::error::ConfigError;

/// Id of the optional `<script>` element carrying JSON overrides.
pub const CONFIG_ELEMENT_ID: &str = "portfolio-config";

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PageConfig {
    /// Raise the console log level to `Debug`.
    pub debug: bool,
    /// `localStorage` key holding `"light"` or `"dark"`.
    pub theme_storage_key: String,
    pub selectors: Selectors,
    pub timing: Timing,
    pub copy: FormCopy,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            debug: false,
            theme_storage_key: "theme".to_owned(),
            selectors: Selectors::default(),
            timing: Timing::default(),
            copy: FormCopy::default(),
        }
    }
}

impl PageConfig {
    /// Parse JSON overrides on top of the defaults and validate the result.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON and
    /// [`ConfigError::Invalid`] for out-of-range values.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the behavior units cannot work with.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] naming the offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.theme_storage_key.trim().is_empty() {
            return Err(ConfigError::Invalid("themeStorageKey must not be empty".to_owned()));
        }
        let threshold = self.timing.stats_threshold;
        if !(threshold > 0.0 && threshold <= 1.0) {
            return Err(ConfigError::Invalid(format!(
                "timing.statsThreshold must be in (0, 1], got {threshold}"
            )));
        }
        let divisor = self.timing.counter_divisor;
        if !(divisor.is_finite() && divisor > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "timing.counterDivisor must be positive, got {divisor}"
            )));
        }
        Ok(())
    }
}

/// Element ids (`*_id`) and CSS selectors the page must expose.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Selectors {
    pub theme_toggle_id: String,
    pub menu_button_id: String,
    pub nav_links: String,
    pub nav_link_items: String,
    pub fragment_links: String,
    pub back_to_top_id: String,
    pub animatable: String,
    /// Elements that receive the `animate` class on load.
    pub auto_animate: String,
    pub stats_container: String,
    pub stat_numbers: String,
    pub contact_form_id: String,
    pub submit_button: String,
    pub form_message_id: String,
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            theme_toggle_id: "themeToggle".to_owned(),
            menu_button_id: "mobileMenuBtn".to_owned(),
            nav_links: ".nav-links".to_owned(),
            nav_link_items: ".nav-links a".to_owned(),
            fragment_links: "a[href^=\"#\"]".to_owned(),
            back_to_top_id: "backToTop".to_owned(),
            animatable: ".animate, .project-card, .timeline-item, .skill-progress".to_owned(),
            auto_animate: ".project-card, .timeline-item".to_owned(),
            stats_container: ".about-stats".to_owned(),
            stat_numbers: ".stat-number".to_owned(),
            contact_form_id: "contactForm".to_owned(),
            submit_button: "button[type=\"submit\"]".to_owned(),
            form_message_id: "formMessage".to_owned(),
        }
    }
}

/// Pixel offsets, thresholds and delays.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Timing {
    /// Fixed header height subtracted from fragment scroll targets.
    pub header_offset: f64,
    /// Band below the viewport bottom that does not count as visible.
    pub reveal_margin: f64,
    pub back_to_top_threshold: f64,
    /// Each counter tick advances by `target / counter_divisor`.
    pub counter_divisor: f64,
    pub counter_tick_ms: u32,
    /// Visible fraction of the stats container that starts the counters.
    pub stats_threshold: f64,
    pub form_reset_ms: u32,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            header_offset: 80.0,
            reveal_margin: 100.0,
            back_to_top_threshold: 300.0,
            counter_divisor: 200.0,
            counter_tick_ms: 1,
            stats_threshold: 0.5,
            form_reset_ms: 3000,
        }
    }
}

/// Button labels (HTML) and status messages (text) shown by the contact form.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FormCopy {
    pub sending_label: String,
    pub success_label: String,
    pub error_label: String,
    pub success_message: String,
    pub error_message: String,
}

impl Default for FormCopy {
    fn default() -> Self {
        Self {
            sending_label: "<i class=\"fas fa-spinner fa-spin\"></i> Sending...".to_owned(),
            success_label: "<i class=\"fas fa-check\"></i> Sent Successfully!".to_owned(),
            error_label: "<i class=\"fas fa-exclamation-circle\"></i> Try Again".to_owned(),
            success_message: "Thank you! Your message has been sent.".to_owned(),
            error_message: "Sorry, there was an error sending your message. Please try again.".to_owned(),
        }
    }
}
