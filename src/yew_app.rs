use std::rc::Rc;

use gloo::console;
use web_sys::{DragEvent, Event, HtmlAudioElement, HtmlElement, MouseEvent};
use yew::prelude::*;

use crate::app_core::QuizCore;
use crate::app_runtime;
use crate::effects::{self, PopupTimer};
use crate::input;
use organelle_match_core::{Organelle, QuizAction, QuizEffect, TargetRow};

const ROOT_ID: &str = "quiz-root";
const POPUP_TEXT: &str = "Perfect score! Every organelle is doing its job.";

#[derive(Properties)]
struct AppProps {
    core: Rc<QuizCore>,
    popup_ms: u32,
    success_sound: AttrValue,
}

impl PartialEq for AppProps {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.core, &other.core)
            && self.popup_ms == other.popup_ms
            && self.success_sound == other.success_sound
    }
}

type EffectRunner = Rc<dyn Fn(Vec<QuizEffect>)>;

fn hide_broken_image(event: Event) {
    let Some(img) = event.target_dyn_into::<HtmlElement>() else {
        return;
    };
    let _ = img.style().set_property("display", "none");
}

fn organelle_chip(
    organelle: &'static Organelle,
    selected: bool,
    touch: bool,
    core: &Rc<QuizCore>,
) -> Html {
    let id = organelle.id;
    let ondragstart = (!touch).then(|| {
        Callback::from(move |event: DragEvent| {
            input::begin_drag(&event, id);
        })
    });
    let onclick = touch.then(|| {
        let core = core.clone();
        Callback::from(move |_: MouseEvent| {
            core.apply_action(QuizAction::SelectOrganelle {
                organelle_id: id.to_string(),
            });
        })
    });
    html! {
        <div
            key={id}
            class={classes!("chip", selected.then_some("selected"))}
            data-id={id}
            draggable={if touch { "false" } else { "true" }}
            {ondragstart}
            {onclick}
        >
            <img
                class="org-img"
                alt={organelle.name}
                src={organelle.img}
                draggable="false"
                onerror={Callback::from(hide_broken_image)}
            />
            <div class="chip-label">{ organelle.name }</div>
        </div>
    }
}

fn target_row(row: &TargetRow, touch: bool, core: &Rc<QuizCore>, run_effects: &EffectRunner) -> Html {
    let id = row.target.id;
    let ondragover = (!touch).then(|| Callback::from(|event: DragEvent| input::allow_drop(&event)));
    let ondrop = (!touch).then(|| {
        let core = core.clone();
        let run_effects = run_effects.clone();
        Callback::from(move |event: DragEvent| {
            let Some(raw) = input::drop_payload(&event) else {
                return;
            };
            if input::recognize_payload(&raw).is_none() {
                console::warn!(format!("drop ignored: {raw:?} is not an organelle"));
                return;
            }
            run_effects(core.apply_action(QuizAction::Drop {
                target_id: id.to_string(),
                organelle_id: raw,
            }));
        })
    });
    let onclick = touch.then(|| {
        let core = core.clone();
        let run_effects = run_effects.clone();
        Callback::from(move |_: MouseEvent| {
            run_effects(core.apply_action(QuizAction::TapTarget {
                target_id: id.to_string(),
            }));
        })
    });
    html! {
        <div
            key={id}
            class={classes!("target", row.mark.map(|mark| mark.css_class()))}
            data-id={id}
            {ondragover}
            {ondrop}
            {onclick}
        >
            <div class="target-label">{ row.target.label }</div>
            <div class={classes!("dropSlot", row.placed.is_some().then_some("filled"))}>
                { row.slot_text() }
            </div>
        </div>
    }
}

#[function_component(App)]
fn app(props: &AppProps) -> Html {
    let core = props.core.clone();
    let snapshot = use_state(|| core.snapshot());
    {
        let core = core.clone();
        let snapshot = snapshot.clone();
        use_effect_with((), move |_| {
            let core_for_sub = core.clone();
            let subscription = core.subscribe(Rc::new(move || {
                snapshot.set(core_for_sub.snapshot());
            }));
            move || drop(subscription)
        });
    }
    let popup_visible = use_state(|| false);
    let popup_timer = use_mut_ref(PopupTimer::default);
    let audio_ref = use_node_ref();

    let run_effects: EffectRunner = {
        let popup_visible = popup_visible.clone();
        let popup_timer = popup_timer.clone();
        let audio_ref = audio_ref.clone();
        let popup_ms = props.popup_ms;
        Rc::new(move |requested: Vec<QuizEffect>| {
            for effect in requested {
                if effect != QuizEffect::Celebrate {
                    continue;
                }
                effects::fire_confetti();
                effects::play_success_sound(audio_ref.cast::<HtmlAudioElement>());
                popup_visible.set(true);
                let popup_visible = popup_visible.clone();
                popup_timer
                    .borrow_mut()
                    .arm(popup_ms, move || popup_visible.set(false));
            }
        })
    };

    let on_check = {
        let core = core.clone();
        let run_effects = run_effects.clone();
        Callback::from(move |_: MouseEvent| {
            run_effects(core.apply_action(QuizAction::Check));
        })
    };
    let on_reset = {
        let core = core.clone();
        let popup_visible = popup_visible.clone();
        let popup_timer = popup_timer.clone();
        Callback::from(move |_: MouseEvent| {
            popup_timer.borrow_mut().cancel();
            popup_visible.set(false);
            core.start_new_round();
        })
    };
    let on_popup_close = {
        let popup_visible = popup_visible.clone();
        let popup_timer = popup_timer.clone();
        Callback::from(move |_: MouseEvent| {
            popup_timer.borrow_mut().cancel();
            popup_visible.set(false);
        })
    };

    let snap = (*snapshot).clone();
    let touch = snap.input_mode.is_touch();
    let chips: Html = snap
        .organelles
        .iter()
        .copied()
        .map(|organelle| organelle_chip(organelle, snap.selected_id == Some(organelle.id), touch, &core))
        .collect();
    let rows: Html = snap
        .targets
        .iter()
        .map(|row| target_row(row, touch, &core, &run_effects))
        .collect();
    let hint = match snap.hint.as_ref() {
        Some(text) => html! {
            <p key={snap.hint_nonce.to_string()} id="hint" class="hint">{ text.clone() }</p>
        },
        None => html! {},
    };

    html! {
        <main class={classes!("quiz", if touch { "mode-touch" } else { "mode-pointer" })}>
            <section class="board">
                <div id="organelles" class="organelles">{ chips }</div>
                <div id="targets" class="targets">{ rows }</div>
            </section>
            { hint }
            <div class="controls">
                <button id="checkBtn" type="button" onclick={on_check}>{ "Check Answers" }</button>
                <button id="resetBtn" type="button" onclick={on_reset}>{ "New Round" }</button>
            </div>
            <div id="score" class="score">{ snap.score_label.clone().unwrap_or_default() }</div>
            <div id="moPopup" class="popup" hidden={!*popup_visible} onclick={on_popup_close}>
                <p>{ POPUP_TEXT }</p>
            </div>
            <audio id="successSound" ref={audio_ref} src={props.success_sound.clone()} preload="auto" />
        </main>
    }
}

/// Mounts the quiz into `#quiz-root`. Returns false when the page has no
/// such element.
pub(crate) fn run(core: Rc<QuizCore>) -> bool {
    let Some(root) = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(ROOT_ID))
    else {
        return false;
    };
    let config = app_runtime::init_config();
    let _app_handle = yew::Renderer::<App>::with_root_and_props(
        root,
        AppProps {
            core,
            popup_ms: config.popup_ms,
            success_sound: config.success_sound.into(),
        },
    )
    .render();
    true
}
