use std::collections::BTreeMap;

use crate::catalog::{ORGANELLES, TARGETS};
use crate::shuffle::{shuffled_order, ORGANELLE_SALT, TARGET_SALT};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum InputMode {
    /// Drag and drop with a mouse or pen.
    #[default]
    Pointer,
    /// Tap an organelle, then tap a target.
    Touch,
}

impl InputMode {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "pointer" | "mouse" | "drag" => Some(InputMode::Pointer),
            "touch" | "tap" => Some(InputMode::Touch),
            _ => None,
        }
    }

    pub fn is_touch(self) -> bool {
        self == InputMode::Touch
    }
}

#[derive(Clone, Debug)]
pub(crate) struct RoundState {
    /// target id -> organelle id
    pub(crate) placements: BTreeMap<&'static str, &'static str>,
    pub(crate) organelle_order: Vec<usize>,
    pub(crate) target_order: Vec<usize>,
    pub(crate) selected: Option<&'static str>,
    pub(crate) input_mode: InputMode,
    pub(crate) seed: u32,
    pub(crate) round: u32,
}

impl RoundState {
    pub(crate) fn new(input_mode: InputMode, seed: u32, round: u32) -> Self {
        Self {
            placements: BTreeMap::new(),
            organelle_order: shuffled_order(ORGANELLES.len(), seed, ORGANELLE_SALT),
            target_order: shuffled_order(TARGETS.len(), seed, TARGET_SALT),
            selected: None,
            input_mode,
            seed,
            round,
        }
    }
}
