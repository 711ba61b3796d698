use std::collections::BTreeMap;

use crate::catalog::TARGETS;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RowMark {
    Correct,
    Incorrect,
}

impl RowMark {
    pub fn css_class(self) -> &'static str {
        match self {
            RowMark::Correct => "good",
            RowMark::Incorrect => "bad",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GradeReport {
    /// One mark per target, in catalog order.
    pub marks: Vec<(&'static str, RowMark)>,
    pub correct: usize,
    pub total: usize,
}

impl GradeReport {
    pub fn is_perfect(&self) -> bool {
        self.total > 0 && self.correct == self.total
    }

    pub fn mark_for(&self, target_id: &str) -> Option<RowMark> {
        self.marks
            .iter()
            .find(|(id, _)| *id == target_id)
            .map(|(_, mark)| *mark)
    }

    pub fn score_label(&self) -> String {
        format!("Score: {} / {}", self.correct, self.total)
    }
}

/// Grades placements against the canonical target list. A placement is
/// correct when the placed organelle id equals the target id; display order
/// plays no part.
pub fn grade(placements: &BTreeMap<&'static str, &'static str>) -> GradeReport {
    let mut marks = Vec::with_capacity(TARGETS.len());
    let mut correct = 0;
    for target in TARGETS {
        let mark = match placements.get(target.id) {
            Some(placed) if *placed == target.id => {
                correct += 1;
                RowMark::Correct
            }
            _ => RowMark::Incorrect,
        };
        marks.push((target.id, mark));
    }
    GradeReport {
        marks,
        correct,
        total: TARGETS.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ORGANELLES;

    #[test]
    fn empty_placements_score_zero() {
        let report = grade(&BTreeMap::new());
        assert_eq!(report.correct, 0);
        assert_eq!(report.total, 8);
        assert_eq!(report.score_label(), "Score: 0 / 8");
        assert!(report.marks.iter().all(|(_, mark)| *mark == RowMark::Incorrect));
        assert!(!report.is_perfect());
    }

    #[test]
    fn identity_assignment_is_perfect() {
        let placements: BTreeMap<_, _> = TARGETS.iter().map(|t| (t.id, t.id)).collect();
        let report = grade(&placements);
        assert_eq!(report.correct, 8);
        assert!(report.is_perfect());
        assert_eq!(report.score_label(), "Score: 8 / 8");
    }

    #[test]
    fn swapped_pair_marks_both_rows_bad() {
        let mut placements: BTreeMap<_, _> = TARGETS.iter().map(|t| (t.id, t.id)).collect();
        placements.insert("nucleus", "golgi");
        placements.insert("golgi", "nucleus");
        let report = grade(&placements);
        assert_eq!(report.correct, 6);
        assert_eq!(report.mark_for("nucleus"), Some(RowMark::Incorrect));
        assert_eq!(report.mark_for("golgi"), Some(RowMark::Incorrect));
        assert_eq!(report.mark_for("membrane"), Some(RowMark::Correct));
    }

    #[test]
    fn marks_follow_catalog_order() {
        let report = grade(&BTreeMap::new());
        let ids: Vec<_> = report.marks.iter().map(|(id, _)| *id).collect();
        let expected: Vec<_> = TARGETS.iter().map(|t| t.id).collect();
        assert_eq!(ids, expected);
        assert_eq!(ORGANELLES.len(), report.total);
    }
}
