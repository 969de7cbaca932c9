//! Chat sidebar menu, modal and navbar dropdown state.
//!
//! DESIGN
//! ======
//! Each handler mutates one of these structs and the caller then pushes the
//! flags to the DOM with `util::visibility`. Escape and overlay clicks close
//! every chat modal at once and tell the caller to leave selection mode.

#[cfg(test)]
#[path = "chat_menu_test.rs"]
mod chat_menu_test;

use crate::config::ClientConfig;

/// Open/closed flags for the chat sidebar's menu and modals.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ChatOverlayState {
    pub menu_open: bool,
    pub confirm_delete_open: bool,
    pub create_group_open: bool,
    pub overlay_open: bool,
}

/// What the caller must do after closing everything.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[must_use]
pub struct CloseAll {
    pub exit_selection_mode: bool,
}

impl ChatOverlayState {
    /// Three-dots button: open or close the dropdown.
    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    /// Document click while the menu is open. Clicks inside the menu or on
    /// its button keep it open.
    pub fn click_away(&mut self, inside_menu: bool, on_button: bool) {
        if self.menu_open && !inside_menu && !on_button {
            self.menu_open = false;
        }
    }

    /// "Delete conversations" menu entry. The caller enters selection mode.
    pub fn start_delete_mode(&mut self) {
        self.menu_open = false;
    }

    /// Trash button: ask for confirmation only when something is selected.
    ///
    /// Returns whether the confirmation was opened.
    pub fn request_delete_confirmation(&mut self, selected_count: usize) -> bool {
        if selected_count == 0 {
            return false;
        }
        self.confirm_delete_open = true;
        self.overlay_open = true;
        true
    }

    /// "No" in the confirmation, or the delete finished successfully.
    pub fn cancel_delete(&mut self) {
        self.confirm_delete_open = false;
        self.overlay_open = false;
    }

    pub fn open_create_group(&mut self) {
        self.menu_open = false;
        self.create_group_open = true;
        self.overlay_open = true;
    }

    pub fn close_create_group(&mut self) {
        self.create_group_open = false;
        self.overlay_open = false;
    }

    pub fn escape(&mut self) -> CloseAll {
        self.close_all()
    }

    pub fn overlay_click(&mut self) -> CloseAll {
        self.close_all()
    }

    fn close_all(&mut self) -> CloseAll {
        *self = Self::default();
        log::debug!("chat overlays closed");
        CloseAll { exit_selection_mode: true }
    }
}

/// Dropdown `(top, left)` in page px, anchored under the search bar's right edge.
pub fn menu_position(anchor_bottom: f64, anchor_right: f64, scroll_x: f64, scroll_y: f64, config: &ClientConfig) -> (f64, f64) {
    let top = anchor_bottom + scroll_y + config.menu_offset_top_px;
    let left = anchor_right + scroll_x - config.menu_offset_left_px;
    (top, left)
}

/// Position the element `menu_id` under the first element matching `anchor_selector`.
pub fn place_menu(menu_id: &str, anchor_selector: &str, config: &ClientConfig) {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;

        let Some(window) = web_sys::window() else {
            return;
        };
        let Some(doc) = window.document() else {
            return;
        };
        let Some(anchor) = doc.query_selector(anchor_selector).ok().flatten() else {
            return;
        };
        let Some(menu) = doc
            .get_element_by_id(menu_id)
            .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
        else {
            return;
        };
        let rect = anchor.get_bounding_client_rect();
        let (top, left) = menu_position(
            rect.bottom(),
            rect.right(),
            window.scroll_x().unwrap_or(0.0),
            window.scroll_y().unwrap_or(0.0),
            config,
        );
        let style = menu.style();
        let _ = style.set_property("top", &format!("{top}px"));
        let _ = style.set_property("left", &format!("{left}px"));
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (menu_id, anchor_selector, config);
    }
}

/// Navbar user dropdown and logout confirmation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NavbarState {
    pub dropdown_open: bool,
    pub logout_modal_open: bool,
}

impl NavbarState {
    pub fn toggle_dropdown(&mut self) {
        self.dropdown_open = !self.dropdown_open;
    }

    /// Window click; `inside` covers both the user icon and the dropdown.
    pub fn click_outside(&mut self, inside: bool) {
        if !inside {
            self.dropdown_open = false;
        }
    }

    pub fn open_logout(&mut self) {
        self.dropdown_open = false;
        self.logout_modal_open = true;
    }

    pub fn cancel_logout(&mut self) {
        self.logout_modal_open = false;
    }

    pub fn escape(&mut self) {
        *self = Self::default();
    }
}

/// Where "confirm logout" navigates: the button's `data-url`, or the configured path.
pub fn logout_target<'a>(data_url: Option<&'a str>, config: &'a ClientConfig) -> &'a str {
    data_url
        .map(str::trim)
        .filter(|url| !url.is_empty())
        .unwrap_or(config.logout_path.as_str())
}
