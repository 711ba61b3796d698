#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Organelle {
    pub id: &'static str,
    pub name: &'static str,
    pub img: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Target {
    /// Id of the organelle that answers this target.
    pub id: &'static str,
    pub label: &'static str,
}

include!(concat!(env!("OUT_DIR"), "/organelle_catalog.rs"));

pub fn organelle_by_id(id: &str) -> Option<&'static Organelle> {
    let trimmed = id.trim();
    ORGANELLES.iter().find(|entry| entry.id == trimmed)
}

pub fn target_by_id(id: &str) -> Option<&'static Target> {
    let trimmed = id.trim();
    TARGETS.iter().find(|entry| entry.id == trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_target_names_an_organelle() {
        assert_eq!(ORGANELLES.len(), TARGETS.len());
        for target in TARGETS {
            assert!(organelle_by_id(target.id).is_some(), "{} has no organelle", target.id);
        }
    }

    #[test]
    fn lookups_trim_but_keep_case() {
        assert_eq!(organelle_by_id(" nucleus ").map(|entry| entry.name), Some("Nucleus"));
        assert_eq!(organelle_by_id("roughER").map(|entry| entry.name), Some("Rough ER"));
        assert!(organelle_by_id("rougher").is_none());
        assert!(target_by_id("membrane").is_some());
        assert!(target_by_id("").is_none());
    }

    #[test]
    fn ships_eight_entries() {
        assert_eq!(ORGANELLES.len(), 8);
        assert_eq!(TARGETS.len(), 8);
    }
}
