//! Theme preference persistence and application.
//!
//! Reads the stored `"dark"`/`"light"` flag from `localStorage` at startup
//! (falling back to the system preference) and applies the `.dark-mode`
//! class to the `<html>` element. Toggle writes the flag back. Requires a
//! browser environment; on the server everything is a light-theme no-op.

#[cfg(feature = "hydrate")]
const STORAGE_KEY: &str = "fitpulse_theme";

use crate::state::ui::Theme;

/// Read the persisted theme preference.
#[must_use]
pub fn read_preference() -> Theme {
    #[cfg(feature = "hydrate")]
    {
        let window = match web_sys::window() {
            Some(w) => w,
            None => return Theme::Light,
        };

        // Stored flag first.
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(val)) = storage.get_item(STORAGE_KEY) {
                if let Some(theme) = Theme::from_stored(&val) {
                    return theme;
                }
            }
        }

        // Fall back to system preference.
        let prefers_dark = window
            .match_media("(prefers-color-scheme: dark)")
            .ok()
            .flatten()
            .map_or(false, |mq| mq.matches());
        if prefers_dark { Theme::Dark } else { Theme::Light }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Theme::Light
    }
}

/// Apply or remove the `.dark-mode` class on the `<html>` element.
pub fn apply(theme: Theme) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
            if let Some(el) = doc.document_element() {
                let class_list = el.class_list();
                if theme == Theme::Dark {
                    let _ = class_list.add_1("dark-mode");
                } else {
                    let _ = class_list.remove_1("dark-mode");
                }
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = theme;
    }
}

/// Flip the theme, apply it, and persist the new flag.
#[must_use]
pub fn toggle(current: Theme) -> Theme {
    let next = current.flipped();
    apply(next);
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.set_item(STORAGE_KEY, next.stored_value());
            }
        }
    }
    next
}
