//! Mobile navigation menu.
//!
//! The `active` class on the nav-links container is the only open/closed
//! state. The menu button's markup mirrors it: bars while closed, a cross
//! while open.

#[cfg(test)]
#[path = "menu_test.rs"]
mod menu_test;

/// Container class present while the menu is open.
pub const OPEN_CLASS: &str = "active";

/// Button markup offering to open the menu.
pub const OPEN_GLYPH: &str = "<i class=\"fas fa-bars\"></i>";

/// Button markup offering to close the menu.
pub const CLOSE_GLYPH: &str = "<i class=\"fas fa-times\"></i>";

pub fn glyph_for(open: bool) -> &'static str {
    if open { CLOSE_GLYPH } else { OPEN_GLYPH }
}

/// DOM side of the menu.
pub trait MenuSurface {
    /// Flip the open class and report whether the menu is now open.
    fn flip(&self) -> bool;
    fn close(&self);
    fn set_glyph(&self, markup: &str);
}

/// Menu button clicked.
pub fn on_toggle<M: MenuSurface>(menu: &M) -> bool {
    let open = menu.flip();
    menu.set_glyph(glyph_for(open));
    open
}

/// A navigation link was selected.
pub fn on_link_selected<M: MenuSurface>(menu: &M) {
    menu.close();
    menu.set_glyph(OPEN_GLYPH);
}

#[cfg(feature = "browser")]
pub struct PageMenu {
    pub container: web_sys::Element,
    pub button: web_sys::Element,
}

#[cfg(feature = "browser")]
impl MenuSurface for PageMenu {
    fn flip(&self) -> bool {
        let classes = self.container.class_list();
        match classes.toggle(OPEN_CLASS) {
            Ok(open) => open,
            Err(err) => {
                log::warn!("menu toggle failed: {err:?}");
                classes.contains(OPEN_CLASS)
            }
        }
    }

    fn close(&self) {
        crate::dom::report(self.container.class_list().remove_1(OPEN_CLASS), "close menu");
    }

    fn set_glyph(&self, markup: &str) {
        self.button.set_inner_html(markup);
    }
}
