//! Message composer auto-resize.

#[cfg(test)]
#[path = "composer_test.rs"]
mod composer_test;

/// Height in px for a textarea whose content needs `scroll_height`, capped at `max`.
pub fn composer_height(scroll_height: i32, max: u32) -> u32 {
    u32::try_from(scroll_height).unwrap_or(0).min(max)
}

/// Grow the textarea `element_id` to fit its content, up to `max` px.
pub fn autosize(element_id: &str, max: u32) {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;

        let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|doc| doc.get_element_by_id(element_id))
            .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
        else {
            return;
        };
        let style = el.style();
        // Reset first so scrollHeight can shrink after text is deleted.
        let _ = style.set_property("height", "auto");
        let height = composer_height(el.scroll_height(), max);
        let _ = style.set_property("height", &format!("{height}px"));
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (element_id, max);
    }
}
