use std::time::Duration;

use crate::counter::IntervalRange;
use crate::ui::mvi::UiState;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum SettingsState {
    #[default]
    Hidden,
    Visible {
        range: IntervalRange,
        /// Slider position while the user is moving it.
        position: Duration,
        /// Interval the holder currently uses.
        applied: Duration,
    },
}

impl UiState for SettingsState {}

impl SettingsState {
    pub fn is_visible(&self) -> bool {
        !matches!(self, Self::Hidden)
    }

    pub fn position(&self) -> Option<Duration> {
        match self {
            Self::Visible { position, .. } => Some(*position),
            Self::Hidden => None,
        }
    }

    /// Slider has moved away from the applied interval.
    pub fn is_dirty(&self) -> bool {
        matches!(self, Self::Visible { position, applied, .. } if position != applied)
    }

    /// Fraction of the slider track covered, 0.0..=1.0.
    pub fn ratio(&self) -> f64 {
        match self {
            Self::Visible {
                range, position, ..
            } => {
                let span = range.max().saturating_sub(range.min()).as_secs_f64();
                if span == 0.0 {
                    return 1.0;
                }
                let offset = position.saturating_sub(range.min()).as_secs_f64();
                (offset / span).clamp(0.0, 1.0)
            }
            Self::Hidden => 0.0,
        }
    }

    /// Label such as "3.0 seconds".
    pub fn label(&self) -> Option<String> {
        self.position()
            .map(|position| format!("{:.1} seconds", position.as_secs_f64()))
    }
}
