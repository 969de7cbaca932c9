//! Show/hide for modals, overlays and buttons.
//!
//! Elements are hidden with the `hidden` class plus `aria-hidden`, matching
//! the server templates. Requires a browser environment to have any effect.

#[cfg(test)]
#[path = "visibility_test.rs"]
mod visibility_test;

#[cfg(feature = "hydrate")]
const HIDDEN_CLASS: &str = "hidden";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Visibility {
    Shown,
    Hidden,
}

impl Visibility {
    pub fn from_open(open: bool) -> Self {
        if open { Self::Shown } else { Self::Hidden }
    }

    pub fn hidden_class_present(self) -> bool {
        self == Self::Hidden
    }

    /// Value for the `aria-hidden` attribute.
    pub fn aria_hidden(self) -> &'static str {
        match self {
            Self::Shown => "false",
            Self::Hidden => "true",
        }
    }
}

/// Apply `visibility` to the element with `element_id`. Missing elements are ignored.
pub fn apply(element_id: &str, visibility: Visibility) {
    #[cfg(feature = "hydrate")]
    {
        let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|doc| doc.get_element_by_id(element_id))
        else {
            return;
        };
        let class_list = el.class_list();
        if visibility.hidden_class_present() {
            let _ = class_list.add_1(HIDDEN_CLASS);
        } else {
            let _ = class_list.remove_1(HIDDEN_CLASS);
        }
        let _ = el.set_attribute("aria-hidden", visibility.aria_hidden());
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (element_id, visibility);
    }
}
