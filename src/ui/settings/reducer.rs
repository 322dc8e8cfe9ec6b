use crate::ui::mvi::Reducer;
use crate::ui::settings::intent::SettingsIntent;
use crate::ui::settings::state::SettingsState;

pub struct SettingsReducer;

impl Reducer for SettingsReducer {
    type State = SettingsState;
    type Intent = SettingsIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            SettingsIntent::Open { interval, range } => {
                let interval = range.snap(interval);
                SettingsState::Visible {
                    range,
                    position: interval,
                    applied: interval,
                }
            }
            SettingsIntent::Close => SettingsState::Hidden,
            SettingsIntent::StepUp => match state {
                SettingsState::Visible {
                    range,
                    position,
                    applied,
                } => SettingsState::Visible {
                    range,
                    position: range.step_up(position),
                    applied,
                },
                other => other,
            },
            SettingsIntent::StepDown => match state {
                SettingsState::Visible {
                    range,
                    position,
                    applied,
                } => SettingsState::Visible {
                    range,
                    position: range.step_down(position),
                    applied,
                },
                other => other,
            },
            SettingsIntent::Commit => match state {
                SettingsState::Visible {
                    range, position, ..
                } => SettingsState::Visible {
                    range,
                    position,
                    applied: position,
                },
                other => other,
            },
            SettingsIntent::Sync { interval } => match state {
                SettingsState::Visible { range, .. } => {
                    let interval = range.snap(interval);
                    SettingsState::Visible {
                        range,
                        position: interval,
                        applied: interval,
                    }
                }
                other => other,
            },
        }
    }
}
