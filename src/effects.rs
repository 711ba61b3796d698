use gloo::timers::callback::Timeout;
use js_sys::{Function, Object, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::HtmlAudioElement;

const CONFETTI_HOOK: &str = "confetti";
const CONFETTI_PARTICLES: f64 = 120.0;
const CONFETTI_SPREAD: f64 = 80.0;
const CONFETTI_ORIGIN_Y: f64 = 0.6;

pub(crate) fn fire_confetti() -> bool {
    let Some(window) = web_sys::window() else {
        return false;
    };
    let Ok(value) = Reflect::get(&window, &JsValue::from_str(CONFETTI_HOOK)) else {
        return false;
    };
    let Ok(func) = value.dyn_into::<Function>() else {
        return false;
    };
    let Some(options) = confetti_options() else {
        return false;
    };
    func.call1(&window, &options).is_ok()
}

fn confetti_options() -> Option<Object> {
    let origin = Object::new();
    Reflect::set(&origin, &"y".into(), &JsValue::from_f64(CONFETTI_ORIGIN_Y)).ok()?;
    let options = Object::new();
    Reflect::set(
        &options,
        &"particleCount".into(),
        &JsValue::from_f64(CONFETTI_PARTICLES),
    )
    .ok()?;
    Reflect::set(&options, &"spread".into(), &JsValue::from_f64(CONFETTI_SPREAD)).ok()?;
    Reflect::set(&options, &"origin".into(), &origin).ok()?;
    Some(options)
}

pub(crate) fn play_success_sound(audio: Option<HtmlAudioElement>) {
    let Some(audio) = audio else {
        return;
    };
    audio.set_current_time(0.0);
    let Ok(promise) = audio.play() else {
        return;
    };
    // rejected by autoplay policy or a missing file
    spawn_local(async move {
        let _ = JsFuture::from(promise).await;
    });
}

#[derive(Default)]
pub(crate) struct PopupTimer {
    pending: Option<Timeout>,
}

impl PopupTimer {
    pub(crate) fn arm<F>(&mut self, duration_ms: u32, on_expire: F)
    where
        F: FnOnce() + 'static,
    {
        self.cancel();
        if duration_ms == 0 {
            return;
        }
        self.pending = Some(Timeout::new(duration_ms, on_expire));
    }

    pub(crate) fn cancel(&mut self) {
        if let Some(timer) = self.pending.take() {
            timer.cancel();
        }
    }

    #[cfg(test)]
    pub(crate) fn is_armed(&self) -> bool {
        self.pending.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gloo::timers::future::TimeoutFuture;
    use std::cell::Cell;
    use std::rc::Rc;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn confetti_without_hook_is_skipped() {
        let window = web_sys::window().expect("window");
        let _ = Reflect::delete_property(window.as_ref(), &JsValue::from_str(CONFETTI_HOOK));
        assert!(!fire_confetti());
    }

    #[wasm_bindgen_test]
    fn confetti_hook_receives_options() {
        let window = web_sys::window().expect("window");
        let hook = Function::new_with_args("opts", "window.__confettiOpts = opts;");
        Reflect::set(window.as_ref(), &JsValue::from_str(CONFETTI_HOOK), &hook).expect("install hook");
        assert!(fire_confetti());
        let opts = Reflect::get(window.as_ref(), &"__confettiOpts".into()).expect("opts recorded");
        let count = Reflect::get(&opts, &"particleCount".into()).ok().and_then(|v| v.as_f64());
        assert_eq!(count, Some(CONFETTI_PARTICLES));
        let _ = Reflect::delete_property(window.as_ref(), &JsValue::from_str(CONFETTI_HOOK));
    }

    #[wasm_bindgen_test]
    fn missing_audio_is_ignored() {
        play_success_sound(None);
    }

    #[wasm_bindgen_test(async)]
    async fn popup_timer_fires_once_and_rearms() {
        let fired = Rc::new(Cell::new(0u32));
        let mut timer = PopupTimer::default();
        let first = fired.clone();
        timer.arm(20, move || first.set(first.get() + 1));
        let second = fired.clone();
        timer.arm(20, move || second.set(second.get() + 10));
        assert!(timer.is_armed());
        TimeoutFuture::new(60).await;
        assert_eq!(fired.get(), 10);
    }

    #[wasm_bindgen_test]
    fn zero_duration_never_arms() {
        let mut timer = PopupTimer::default();
        timer.arm(0, || {});
        assert!(!timer.is_armed());
    }
}
