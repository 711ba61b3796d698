#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QuizAction {
    StartRound { seed: u32 },
    /// Pointer-mode drop of a dragged chip onto a target row.
    Drop {
        target_id: String,
        organelle_id: String,
    },
    SelectOrganelle { organelle_id: String },
    TapTarget { target_id: String },
    Check,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuizEffect {
    /// Every target was matched on check.
    Celebrate,
    /// A target was tapped with nothing selected.
    HintShown,
}
