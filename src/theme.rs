//! Light/dark theme resolution, persistence and toggle.
//!
//! The stored preference wins; without one the system
//! `(prefers-color-scheme: dark)` signal decides; otherwise the page is light.
//! Dark mode is expressed as the `dark-mode` class on `<body>` plus a
//! sun/moon icon swap inside the toggle button.
//!
//! TRADE-OFFS
//! ==========
//! Persistence is best-effort. An unavailable store reads as "no preference"
//! and a failed write is logged; the visible theme still flips.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

/// Body class present while the dark theme is active.
pub const DARK_CLASS: &str = "dark-mode";

/// Media query consulted when no preference is stored.
pub const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Value written to the preference store.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Font Awesome class shown on the toggle while this theme is active.
    /// The moon offers dark mode; the sun offers light mode.
    pub fn icon_class(self) -> &'static str {
        match self {
            Self::Light => "fa-moon",
            Self::Dark => "fa-sun",
        }
    }
}

/// Resolve the initial theme from the stored value and the system signal.
///
/// `"dark"` selects dark; any other non-empty value selects light. A missing
/// or empty value defers to `system_prefers_dark`.
pub fn resolve(stored: Option<&str>, system_prefers_dark: bool) -> Theme {
    match stored {
        Some("dark") => Theme::Dark,
        Some(value) if !value.is_empty() => Theme::Light,
        _ if system_prefers_dark => Theme::Dark,
        _ => Theme::Light,
    }
}

/// Key/value persistence for the preference.
pub trait PreferenceStore {
    fn load(&self, key: &str) -> Option<String>;

    /// # Errors
    ///
    /// Returns a description of the storage failure.
    fn save(&self, key: &str, value: &str) -> Result<(), String>;
}

/// Where a theme becomes visible (body class and toggle icon).
pub trait ThemeSurface {
    fn show(&self, theme: Theme);
}

/// Owns the active theme and keeps the surface and store in step with it.
pub struct ThemeController<S, V> {
    store: S,
    surface: V,
    key: String,
    current: Theme,
}

impl<S: PreferenceStore, V: ThemeSurface> ThemeController<S, V> {
    /// Resolve the starting theme and show it.
    pub fn init(store: S, surface: V, key: &str, system_prefers_dark: bool) -> Self {
        let stored = store.load(key);
        let current = resolve(stored.as_deref(), system_prefers_dark);
        surface.show(current);
        Self { store, surface, key: key.to_owned(), current }
    }

    pub fn current(&self) -> Theme {
        self.current
    }

    /// Flip the theme, show it, and persist it.
    pub fn toggle(&mut self) -> Theme {
        let next = self.current.toggled();
        self.current = next;
        self.surface.show(next);
        if let Err(err) = self.store.save(&self.key, next.as_str()) {
            log::warn!("theme preference not saved: {err}");
        }
        next
    }
}

/// `localStorage`-backed preference store.
#[cfg(feature = "browser")]
pub struct LocalStorage {
    storage: Option<web_sys::Storage>,
}

#[cfg(feature = "browser")]
impl LocalStorage {
    pub fn open(window: &web_sys::Window) -> Self {
        let storage = match window.local_storage() {
            Ok(storage) => storage,
            Err(err) => {
                log::warn!("localStorage unavailable: {err:?}");
                None
            }
        };
        Self { storage }
    }
}

#[cfg(feature = "browser")]
impl PreferenceStore for LocalStorage {
    fn load(&self, key: &str) -> Option<String> {
        let storage = self.storage.as_ref()?;
        match storage.get_item(key) {
            Ok(value) => value,
            Err(err) => {
                log::warn!("localStorage read of `{key}` failed: {err:?}");
                None
            }
        }
    }

    fn save(&self, key: &str, value: &str) -> Result<(), String> {
        let storage = self
            .storage
            .as_ref()
            .ok_or_else(|| "localStorage unavailable".to_owned())?;
        storage.set_item(key, value).map_err(|err| format!("{err:?}"))
    }
}

/// Read the system dark-mode signal.
#[cfg(feature = "browser")]
pub fn system_prefers_dark(window: &web_sys::Window) -> bool {
    matches!(window.match_media(DARK_SCHEME_QUERY), Ok(Some(mq)) if mq.matches())
}

/// Body class plus the `<i>` icon inside the toggle button.
#[cfg(feature = "browser")]
pub struct PageTheme {
    pub body: web_sys::HtmlElement,
    pub icon: web_sys::Element,
}

#[cfg(feature = "browser")]
impl ThemeSurface for PageTheme {
    fn show(&self, theme: Theme) {
        use crate::dom::report;

        let body_classes = self.body.class_list();
        match theme {
            Theme::Dark => report(body_classes.add_1(DARK_CLASS), "add dark-mode class"),
            Theme::Light => report(body_classes.remove_1(DARK_CLASS), "remove dark-mode class"),
        }
        let icon_classes = self.icon.class_list();
        report(icon_classes.remove_1(theme.toggled().icon_class()), "remove theme icon");
        report(icon_classes.add_1(theme.icon_class()), "add theme icon");
    }
}
