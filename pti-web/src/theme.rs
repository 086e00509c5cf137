use crate::dom;
use pti_core::{Theme, ThemeCatalog};

/// Write the palette for `theme` onto the root element's custom properties.
pub fn apply_theme(theme: Theme) {
    let Some(root) = dom::root_element() else {
        return;
    };
    let palette = ThemeCatalog::global().palette_of(theme);
    let style = root.style();
    for (property, value) in palette.properties() {
        if let Err(err) = style.set_property(property, value) {
            log::warn!(
                "Failed to set {property} for theme {theme}: {}",
                dom::js_error_message(&err)
            );
        }
    }
}
