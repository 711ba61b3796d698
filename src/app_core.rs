use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo::console;
#[cfg(target_arch = "wasm32")]
use js_sys::Date;

use organelle_match_core::{
    next_round_seed, InputMode, Organelle, QuizAction, QuizController, QuizEffect, TargetRow,
};

pub(crate) type QuizSubscriber = Rc<dyn Fn()>;

pub(crate) struct QuizCore {
    controller: RefCell<QuizController>,
    snapshots: RefCell<SnapshotBuffer>,
    subscribers: Rc<RefCell<Vec<QuizSubscriber>>>,
    fixed_seed: Option<u32>,
    hint_nonce: Cell<u32>,
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct QuizSnapshot {
    pub(crate) round: u32,
    pub(crate) input_mode: InputMode,
    pub(crate) organelles: Vec<&'static Organelle>,
    pub(crate) targets: Vec<TargetRow>,
    pub(crate) selected_id: Option<&'static str>,
    pub(crate) score_label: Option<String>,
    pub(crate) hint: Option<String>,
    pub(crate) hint_nonce: u32,
}

struct SnapshotBuffer {
    front: QuizSnapshot,
    back: QuizSnapshot,
}

impl SnapshotBuffer {
    fn new(controller: &QuizController, hint_nonce: u32) -> Self {
        let snapshot = build_snapshot(controller, hint_nonce);
        Self {
            front: snapshot.clone(),
            back: snapshot,
        }
    }

    fn refresh(&mut self, controller: &QuizController, hint_nonce: u32) {
        fill_snapshot(controller, hint_nonce, &mut self.back);
        std::mem::swap(&mut self.front, &mut self.back);
    }
}

impl QuizCore {
    pub(crate) fn new(input_mode: InputMode, fixed_seed: Option<u32>) -> Rc<Self> {
        let seed = fixed_seed.unwrap_or_else(|| time_nonce(0));
        let controller = QuizController::new(input_mode, seed);
        let snapshots = SnapshotBuffer::new(&controller, 0);
        console::log!(format!("round 1 ({input_mode:?} input, seed {seed:#010x})"));
        Rc::new(Self {
            controller: RefCell::new(controller),
            snapshots: RefCell::new(snapshots),
            subscribers: Rc::new(RefCell::new(Vec::new())),
            fixed_seed,
            hint_nonce: Cell::new(0),
        })
    }

    pub(crate) fn subscribe(&self, subscriber: QuizSubscriber) -> QuizSubscription {
        self.subscribers.borrow_mut().push(subscriber.clone());
        QuizSubscription {
            subscriber,
            subscribers: Rc::clone(&self.subscribers),
        }
    }

    pub(crate) fn snapshot(&self) -> QuizSnapshot {
        self.snapshots.borrow().front.clone()
    }

    pub(crate) fn start_new_round(&self) {
        let seed = {
            let previous = self.controller.borrow().seed();
            self.fixed_seed.unwrap_or_else(|| time_nonce(previous))
        };
        self.apply_action(QuizAction::StartRound { seed });
    }

    pub(crate) fn apply_action(&self, action: QuizAction) -> Vec<QuizEffect> {
        let result = self.controller.borrow_mut().apply(action);
        let effects = match result {
            Ok(effects) => effects,
            Err(err) => {
                console::warn!(format!("ignored input: {err}"));
                return Vec::new();
            }
        };
        for effect in &effects {
            match effect {
                QuizEffect::HintShown => {
                    self.hint_nonce.set(self.hint_nonce.get().wrapping_add(1));
                }
                QuizEffect::Celebrate => {
                    let round = self.controller.borrow().round();
                    console::log!(format!("round {round} solved"));
                }
            }
        }
        self.notify();
        effects
    }

    fn notify(&self) {
        {
            let controller = self.controller.borrow();
            self.snapshots
                .borrow_mut()
                .refresh(&controller, self.hint_nonce.get());
        }
        let subscribers = self.subscribers.borrow().clone();
        for subscriber in subscribers {
            (subscriber)();
        }
    }
}

pub(crate) struct QuizSubscription {
    subscriber: QuizSubscriber,
    subscribers: Rc<RefCell<Vec<QuizSubscriber>>>,
}

impl Drop for QuizSubscription {
    fn drop(&mut self) {
        let mut subscribers = self.subscribers.borrow_mut();
        subscribers.retain(|item| !Rc::ptr_eq(item, &self.subscriber));
    }
}

fn build_snapshot(controller: &QuizController, hint_nonce: u32) -> QuizSnapshot {
    let mut snapshot = QuizSnapshot {
        round: 0,
        input_mode: controller.input_mode(),
        organelles: Vec::new(),
        targets: Vec::new(),
        selected_id: None,
        score_label: None,
        hint: None,
        hint_nonce,
    };
    fill_snapshot(controller, hint_nonce, &mut snapshot);
    snapshot
}

fn fill_snapshot(controller: &QuizController, hint_nonce: u32, snapshot: &mut QuizSnapshot) {
    snapshot.round = controller.round();
    snapshot.input_mode = controller.input_mode();
    snapshot.organelles.clear();
    snapshot.organelles.extend(controller.organelles());
    snapshot.targets = controller.target_rows();
    snapshot.selected_id = controller.selected().map(|organelle| organelle.id);
    snapshot.score_label = controller.feedback().map(|report| report.score_label());
    snapshot.hint = controller.hint().message();
    snapshot.hint_nonce = hint_nonce;
}

fn time_nonce(previous: u32) -> u32 {
    #[cfg(target_arch = "wasm32")]
    {
        let now = Date::now() as u64 as u32;
        return next_round_seed(previous, now);
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let now = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|duration| duration.as_millis() as u32)
            .unwrap_or(0);
        return next_round_seed(previous, now);
    }
}
