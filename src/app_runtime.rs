use std::cell::RefCell;
use std::rc::Rc;

use crate::app_core::QuizCore;
use crate::app_router::{self, InitConfig};
use crate::input;

thread_local! {
    static INIT_CONFIG: RefCell<Option<InitConfig>> = RefCell::new(None);
    static SHARED_CORE: RefCell<Option<Rc<QuizCore>>> = RefCell::new(None);
}

pub(crate) fn set_init_config(config: InitConfig) {
    INIT_CONFIG.with(|slot| {
        *slot.borrow_mut() = Some(config);
    });
}

pub(crate) fn init_config() -> InitConfig {
    INIT_CONFIG
        .with(|slot| slot.borrow().clone())
        .unwrap_or_else(app_router::load_init_config)
}

/// The page-wide quiz. Input mode is resolved the first time this is called
/// and stays fixed for the session.
pub(crate) fn shared_core() -> Rc<QuizCore> {
    if let Some(core) = SHARED_CORE.with(|slot| slot.borrow().clone()) {
        return core;
    }
    let config = init_config();
    let mode = config
        .input_override
        .unwrap_or_else(input::detect_input_mode);
    let core = QuizCore::new(mode, config.seed);
    SHARED_CORE.with(|slot| {
        *slot.borrow_mut() = Some(core.clone());
    });
    core
}
