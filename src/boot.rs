#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{JsCast, JsValue};

#[cfg(target_arch = "wasm32")]
use js_sys::{Function, Reflect};

/// Optional loader overlay installed by `index.html`. Every call is a no-op
/// when the page has none.
#[cfg(target_arch = "wasm32")]
const BOOT_HOOK: &str = "__OM_BOOT";

#[cfg(target_arch = "wasm32")]
fn call(method: &str, args: &[JsValue]) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Ok(boot) = Reflect::get(&window, &JsValue::from_str(BOOT_HOOK)) else {
        return;
    };
    if boot.is_null() || boot.is_undefined() {
        return;
    }
    let Ok(value) = Reflect::get(&boot, &JsValue::from_str(method)) else {
        return;
    };
    let Ok(func) = value.dyn_into::<Function>() else {
        return;
    };
    let array = js_sys::Array::new();
    for arg in args {
        array.push(arg);
    }
    let _ = func.apply(&boot, &array);
}

pub(crate) fn set_phase(label: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        call("setPhase", &[JsValue::from_str(label)]);
    }
    #[cfg(not(target_arch = "wasm32"))]
    let _ = label;
}

pub(crate) fn fail(message: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        call("fail", &[JsValue::from_str(message)]);
    }
    #[cfg(not(target_arch = "wasm32"))]
    let _ = message;
}

pub(crate) fn ready() {
    #[cfg(target_arch = "wasm32")]
    {
        call("ready", &[]);
    }
}
