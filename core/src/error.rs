#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QuizError {
    #[error("empty {kind} id")]
    EmptyId { kind: IdKind },
    #[error("unknown organelle '{0}'")]
    UnknownOrganelle(String),
    #[error("unknown target '{0}'")]
    UnknownTarget(String),
    #[error("tap placement is only available in touch mode")]
    TapModeOnly,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdKind {
    Organelle,
    Target,
}

impl std::fmt::Display for IdKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IdKind::Organelle => f.write_str("organelle"),
            IdKind::Target => f.write_str("target"),
        }
    }
}
