use async_trait::async_trait;

use super::model::NotificationKind;

/// Icon shown next to a notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconHint {
    Cart,
    Check,
    Remove,
    Alert,
    Heart,
    Info,
}

impl IconHint {
    /// Notification centre category for notices carrying this icon.
    pub fn kind(self) -> NotificationKind {
        match self {
            IconHint::Cart | IconHint::Check | IconHint::Heart => NotificationKind::Success,
            IconHint::Remove | IconHint::Alert | IconHint::Info => NotificationKind::Info,
        }
    }
}

/// User-facing confirmation raised by a use case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub description: String,
    pub icon: IconHint,
}

impl Notice {
    pub fn new(title: impl Into<String>, description: impl Into<String>, icon: IconHint) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            icon,
        }
    }
}

/// Service port for surfacing notices to the shopper.
///
/// Delivery is best effort: callers never depend on it succeeding.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn notify(&self, notice: Notice);
}

/// Short sound played after cart and checkout actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cue {
    Add,
    Remove,
    Success,
}

impl std::fmt::Display for Cue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Cue::Add => write!(f, "add"),
            Cue::Remove => write!(f, "remove"),
            Cue::Success => write!(f, "success"),
        }
    }
}

/// Service port for sound cues. Fire and forget.
pub trait CuePlayer: Send + Sync {
    fn play(&self, cue: Cue);
}
