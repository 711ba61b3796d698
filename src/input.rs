use js_sys::Reflect;
use wasm_bindgen::JsValue;
use web_sys::DragEvent;

use organelle_match_core::{organelle_by_id, InputMode, Organelle};

pub(crate) const DRAG_MIME: &str = "text/plain";
const DRAG_EFFECT: &str = "move";

/// Probed once at startup. Any touch capability selects tap mode, even on
/// hybrid devices that also have a mouse.
pub(crate) fn detect_input_mode() -> InputMode {
    if has_touch_support() {
        InputMode::Touch
    } else {
        InputMode::Pointer
    }
}

fn has_touch_support() -> bool {
    let Some(window) = web_sys::window() else {
        return false;
    };
    if Reflect::has(&window, &JsValue::from_str("ontouchstart")).unwrap_or(false) {
        return true;
    }
    if window.navigator().max_touch_points() > 0 {
        return true;
    }
    matches_coarse_pointer(&window)
}

fn matches_coarse_pointer(window: &web_sys::Window) -> bool {
    let Ok(Some(query)) = window.match_media("(pointer: coarse)") else {
        return false;
    };
    query.matches()
}

pub(crate) fn begin_drag(event: &DragEvent, organelle_id: &str) {
    let Some(transfer) = event.data_transfer() else {
        return;
    };
    let _ = transfer.set_data(DRAG_MIME, organelle_id);
    transfer.set_effect_allowed(DRAG_EFFECT);
}

pub(crate) fn allow_drop(event: &DragEvent) {
    event.prevent_default();
    if let Some(transfer) = event.data_transfer() {
        transfer.set_drop_effect(DRAG_EFFECT);
    }
}

/// Raw payload of a drop, `None` when the browser hands over nothing.
pub(crate) fn drop_payload(event: &DragEvent) -> Option<String> {
    event.prevent_default();
    let transfer = event.data_transfer()?;
    let raw = transfer.get_data(DRAG_MIME).ok()?;
    if raw.trim().is_empty() {
        None
    } else {
        Some(raw)
    }
}

pub(crate) fn recognize_payload(raw: &str) -> Option<&'static Organelle> {
    organelle_by_id(raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn payload_must_name_a_catalog_entry() {
        assert_eq!(recognize_payload("golgi").map(|o| o.name), Some("Golgi Apparatus"));
        assert!(recognize_payload("https://example.com/golgi.png").is_none());
        assert!(recognize_payload("").is_none());
    }

    #[wasm_bindgen_test]
    fn detection_is_stable() {
        assert_eq!(detect_input_mode(), detect_input_mode());
    }
}
