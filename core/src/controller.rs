use std::collections::BTreeMap;

use crate::action::{QuizAction, QuizEffect};
use crate::catalog::{organelle_by_id, target_by_id, Organelle, Target, ORGANELLES, TARGETS};
use crate::error::{IdKind, QuizError};
use crate::grade::{grade, GradeReport, RowMark};
use crate::state::{InputMode, RoundState};

pub const DROP_PLACEHOLDER: &str = "Drop Here";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Placement {
    pub target_id: &'static str,
    pub organelle_id: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TapOutcome {
    Placed(Placement),
    NeedsSelection,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CheckOutcome {
    pub report: GradeReport,
    pub celebrate: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Hint {
    None,
    ChooseOrganelle,
    ChooseTarget { organelle: &'static Organelle },
}

impl Hint {
    pub fn message(&self) -> Option<String> {
        match self {
            Hint::None => None,
            Hint::ChooseOrganelle => Some("Tap an organelle, then tap the function it performs.".to_string()),
            Hint::ChooseTarget { organelle } => Some(format!(
                "{} selected. Now tap the function it performs.",
                organelle.name
            )),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TargetRow {
    pub target: &'static Target,
    pub placed: Option<&'static Organelle>,
    pub mark: Option<RowMark>,
}

impl TargetRow {
    pub fn slot_text(&self) -> &'static str {
        self.placed
            .map(|organelle| organelle.name)
            .unwrap_or(DROP_PLACEHOLDER)
    }
}

/// Owns one round of the quiz. Every mutation goes through the methods
/// below; a failed call leaves the round untouched.
#[derive(Clone, Debug)]
pub struct QuizController {
    round: RoundState,
    feedback: Option<GradeReport>,
}

impl QuizController {
    pub fn new(input_mode: InputMode, seed: u32) -> Self {
        Self {
            round: RoundState::new(input_mode, seed, 1),
            feedback: None,
        }
    }

    /// Drops placements, selection and feedback, and reshuffles both lists.
    pub fn start_new_round(&mut self, seed: u32) {
        let next = self.round.round.wrapping_add(1);
        self.round = RoundState::new(self.round.input_mode, seed, next);
        self.feedback = None;
    }

    pub fn input_mode(&self) -> InputMode {
        self.round.input_mode
    }

    pub fn seed(&self) -> u32 {
        self.round.seed
    }

    pub fn round(&self) -> u32 {
        self.round.round
    }

    pub fn selected(&self) -> Option<&'static Organelle> {
        self.round.selected.and_then(organelle_by_id)
    }

    pub fn placement(&self, target_id: &str) -> Option<&'static str> {
        self.round.placements.get(target_id).copied()
    }

    pub fn placements(&self) -> &BTreeMap<&'static str, &'static str> {
        &self.round.placements
    }

    pub fn feedback(&self) -> Option<&GradeReport> {
        self.feedback.as_ref()
    }

    pub fn organelles(&self) -> impl Iterator<Item = &'static Organelle> + '_ {
        self.round
            .organelle_order
            .iter()
            .filter_map(|idx| ORGANELLES.get(*idx))
    }

    pub fn target_rows(&self) -> Vec<TargetRow> {
        self.round
            .target_order
            .iter()
            .filter_map(|idx| TARGETS.get(*idx))
            .map(|target| TargetRow {
                target,
                placed: self.placement(target.id).and_then(organelle_by_id),
                mark: self
                    .feedback
                    .as_ref()
                    .and_then(|report| report.mark_for(target.id)),
            })
            .collect()
    }

    pub fn place(&mut self, target_id: &str, organelle_id: &str) -> Result<Placement, QuizError> {
        let target = resolve_target(target_id)?;
        let organelle = resolve_organelle(organelle_id)?;
        self.round.placements.insert(target.id, organelle.id);
        self.round.selected = None;
        self.feedback = None;
        Ok(Placement {
            target_id: target.id,
            organelle_id: organelle.id,
        })
    }

    pub fn select_organelle(&mut self, organelle_id: &str) -> Result<&'static Organelle, QuizError> {
        if !self.round.input_mode.is_touch() {
            return Err(QuizError::TapModeOnly);
        }
        let organelle = resolve_organelle(organelle_id)?;
        self.round.selected = Some(organelle.id);
        Ok(organelle)
    }

    pub fn tap_target(&mut self, target_id: &str) -> Result<TapOutcome, QuizError> {
        if !self.round.input_mode.is_touch() {
            return Err(QuizError::TapModeOnly);
        }
        let target = resolve_target(target_id)?;
        let Some(organelle_id) = self.round.selected else {
            return Ok(TapOutcome::NeedsSelection);
        };
        let placement = self.place(target.id, organelle_id)?;
        Ok(TapOutcome::Placed(placement))
    }

    pub fn check_answers(&mut self) -> CheckOutcome {
        let report = grade(&self.round.placements);
        let celebrate = report.is_perfect();
        self.feedback = Some(report.clone());
        CheckOutcome { report, celebrate }
    }

    pub fn hint(&self) -> Hint {
        if !self.round.input_mode.is_touch() {
            return Hint::None;
        }
        match self.selected() {
            Some(organelle) => Hint::ChooseTarget { organelle },
            None => Hint::ChooseOrganelle,
        }
    }

    pub fn apply(&mut self, action: QuizAction) -> Result<Vec<QuizEffect>, QuizError> {
        match action {
            QuizAction::StartRound { seed } => {
                self.start_new_round(seed);
                Ok(Vec::new())
            }
            QuizAction::Drop {
                target_id,
                organelle_id,
            } => {
                self.place(&target_id, &organelle_id)?;
                Ok(Vec::new())
            }
            QuizAction::SelectOrganelle { organelle_id } => {
                self.select_organelle(&organelle_id)?;
                Ok(Vec::new())
            }
            QuizAction::TapTarget { target_id } => match self.tap_target(&target_id)? {
                TapOutcome::Placed(_) => Ok(Vec::new()),
                TapOutcome::NeedsSelection => Ok(vec![QuizEffect::HintShown]),
            },
            QuizAction::Check => {
                let outcome = self.check_answers();
                if outcome.celebrate {
                    Ok(vec![QuizEffect::Celebrate])
                } else {
                    Ok(Vec::new())
                }
            }
        }
    }
}

fn resolve_organelle(raw: &str) -> Result<&'static Organelle, QuizError> {
    if raw.trim().is_empty() {
        return Err(QuizError::EmptyId {
            kind: IdKind::Organelle,
        });
    }
    organelle_by_id(raw).ok_or_else(|| QuizError::UnknownOrganelle(raw.to_string()))
}

fn resolve_target(raw: &str) -> Result<&'static Target, QuizError> {
    if raw.trim().is_empty() {
        return Err(QuizError::EmptyId {
            kind: IdKind::Target,
        });
    }
    target_by_id(raw).ok_or_else(|| QuizError::UnknownTarget(raw.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solve(controller: &mut QuizController) {
        for target in TARGETS {
            controller.place(target.id, target.id).expect("catalog ids are valid");
        }
    }

    #[test]
    fn place_overwrites_previous_value() {
        let mut controller = QuizController::new(InputMode::Pointer, 7);
        controller.place("nucleus", "golgi").unwrap();
        assert_eq!(controller.placement("nucleus"), Some("golgi"));
        controller.place("nucleus", "nucleus").unwrap();
        assert_eq!(controller.placement("nucleus"), Some("nucleus"));
        assert_eq!(controller.placements().len(), 1);
    }

    #[test]
    fn placing_clears_feedback() {
        let mut controller = QuizController::new(InputMode::Pointer, 7);
        controller.check_answers();
        assert!(controller.feedback().is_some());
        controller.place("golgi", "golgi").unwrap();
        assert!(controller.feedback().is_none());
        assert!(controller.target_rows().iter().all(|row| row.mark.is_none()));
    }

    #[test]
    fn unknown_ids_leave_state_alone() {
        let mut controller = QuizController::new(InputMode::Pointer, 7);
        controller.place("golgi", "golgi").unwrap();
        controller.check_answers();
        assert_eq!(
            controller.place("golgi", "chloroplast"),
            Err(QuizError::UnknownOrganelle("chloroplast".to_string()))
        );
        assert_eq!(
            controller.place("photosynthesis", "golgi"),
            Err(QuizError::UnknownTarget("photosynthesis".to_string()))
        );
        assert_eq!(
            controller.place("golgi", "  "),
            Err(QuizError::EmptyId {
                kind: IdKind::Organelle
            })
        );
        assert_eq!(controller.placement("golgi"), Some("golgi"));
        assert!(controller.feedback().is_some());
    }

    #[test]
    fn perfect_check_celebrates_every_time() {
        let mut controller = QuizController::new(InputMode::Pointer, 99);
        solve(&mut controller);
        for _ in 0..3 {
            let effects = controller.apply(QuizAction::Check).unwrap();
            assert_eq!(effects, vec![QuizEffect::Celebrate]);
        }
    }

    #[test]
    fn check_is_idempotent() {
        let mut controller = QuizController::new(InputMode::Pointer, 3);
        controller.place("nucleus", "nucleus").unwrap();
        controller.place("golgi", "membrane").unwrap();
        let first = controller.check_answers();
        let second = controller.check_answers();
        assert_eq!(first, second);
        assert_eq!(first.report.correct, 1);
        assert!(!first.celebrate);
        let rows = controller.target_rows();
        let golgi = rows.iter().find(|row| row.target.id == "golgi").unwrap();
        assert_eq!(golgi.mark, Some(RowMark::Incorrect));
        assert_eq!(golgi.slot_text(), "Plasma Membrane");
    }

    #[test]
    fn reset_clears_everything() {
        let mut controller = QuizController::new(InputMode::Touch, 5);
        solve(&mut controller);
        controller.check_answers();
        controller.select_organelle("lysosomes").unwrap();
        controller.start_new_round(6);
        assert!(controller.placements().is_empty());
        assert!(controller.selected().is_none());
        assert!(controller.feedback().is_none());
        assert_eq!(controller.round(), 2);
        assert_eq!(controller.input_mode(), InputMode::Touch);
        assert!(controller
            .target_rows()
            .iter()
            .all(|row| row.placed.is_none() && row.slot_text() == DROP_PLACEHOLDER));
    }

    #[test]
    fn tap_select_then_place() {
        let mut controller = QuizController::new(InputMode::Touch, 11);
        assert_eq!(controller.hint(), Hint::ChooseOrganelle);
        controller.select_organelle("ribosomes").unwrap();
        assert!(matches!(controller.hint(), Hint::ChooseTarget { organelle } if organelle.id == "ribosomes"));
        let outcome = controller.tap_target("roughER").unwrap();
        assert_eq!(
            outcome,
            TapOutcome::Placed(Placement {
                target_id: "roughER",
                organelle_id: "ribosomes",
            })
        );
        assert_eq!(controller.placement("roughER"), Some("ribosomes"));
        assert!(controller.selected().is_none());
        assert_eq!(controller.hint(), Hint::ChooseOrganelle);
    }

    #[test]
    fn tap_without_selection_only_hints() {
        let mut controller = QuizController::new(InputMode::Touch, 11);
        let effects = controller
            .apply(QuizAction::TapTarget {
                target_id: "membrane".to_string(),
            })
            .unwrap();
        assert_eq!(effects, vec![QuizEffect::HintShown]);
        assert!(controller.placements().is_empty());
    }

    #[test]
    fn tap_actions_need_touch_mode() {
        let mut controller = QuizController::new(InputMode::Pointer, 11);
        assert_eq!(controller.select_organelle("nucleus"), Err(QuizError::TapModeOnly));
        assert_eq!(controller.tap_target("nucleus"), Err(QuizError::TapModeOnly));
        assert_eq!(controller.hint(), Hint::None);
        assert_eq!(Hint::None.message(), None);
    }

    #[test]
    fn reselecting_replaces_selection() {
        let mut controller = QuizController::new(InputMode::Touch, 1);
        controller.select_organelle("nucleus").unwrap();
        controller.select_organelle("golgi").unwrap();
        assert_eq!(controller.selected().map(|o| o.id), Some("golgi"));
    }

    #[test]
    fn direct_placement_drops_pending_selection() {
        let mut controller = QuizController::new(InputMode::Touch, 1);
        controller.select_organelle("golgi").unwrap();
        controller.place("nucleus", "nucleus").unwrap();
        assert!(controller.selected().is_none());
        assert_eq!(controller.hint(), Hint::ChooseOrganelle);
        assert_eq!(controller.tap_target("golgi"), Ok(TapOutcome::NeedsSelection));
        assert_eq!(controller.placement("golgi"), None);
    }

    #[test]
    fn hint_names_the_selection() {
        let mut controller = QuizController::new(InputMode::Touch, 1);
        controller.select_organelle("smoothER").unwrap();
        let message = controller.hint().message().unwrap();
        assert!(message.starts_with("Smooth ER selected"), "{message}");
    }
}
