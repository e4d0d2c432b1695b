//! TUI Presenter - Converts Application Events to TUI State
//!
//! ```text
//! PickerController / PresentationTimer (UiEvent)
//!         ↓
//!   TuiPresenter (this module)
//!         ↓
//!   TuiState (view state) → widgets
//! ```

use super::state::{IDLE_PRESENTER, TuiState};
use podium_application::UiEvent;
use podium_domain::HistoryEntry;

/// Folds [`UiEvent`]s into [`TuiState`]
#[derive(Debug, Default)]
pub struct TuiPresenter;

impl TuiPresenter {
    pub fn new() -> Self {
        Self
    }

    pub fn apply(&self, state: &mut TuiState, event: &UiEvent) {
        match event {
            UiEvent::RosterInitialized(snapshot) => {
                state.roster = snapshot.names.clone();
                state.available = snapshot.available;
                state.chosen = snapshot.chosen;
                state.can_draw = snapshot.available > 0;
                state.selected_list = snapshot.selected_list.clone();
                state.presenter = IDLE_PRESENTER.to_string();
                state.drawn.clear();
                state.history.clear();
                state.exhausted = false;
                state.groups.clear();
                state.excluded = 0;
                state.suggestions = None;
            }
            UiEvent::Drawn(drawn) => {
                state.presenter = drawn.name.clone();
                state.drawn.push(drawn.name.clone());
                state.available = drawn.available;
                state.chosen = drawn.chosen;
                state.can_draw = drawn.can_draw;
                state
                    .history
                    .insert(0, HistoryEntry::new(drawn.name.clone(), drawn.drawn_at).label());
            }
            UiEvent::Exhausted => {
                state.exhausted = true;
                state.can_draw = false;
                state.set_flash("Everyone has presented!");
            }
            UiEvent::TimerChanged(snapshot) => {
                state.timer = *snapshot;
                state.timer_expired = false;
            }
            UiEvent::TimerTick(snapshot) => {
                state.timer = *snapshot;
            }
            UiEvent::TimerExpired => {
                state.timer.remaining_seconds = 0;
                state.timer.running = false;
                state.timer_expired = true;
                state.set_flash("Time's up!");
            }
            UiEvent::GroupSuggestions { total, suggestions } => {
                state.suggestions = Some((*total, suggestions.clone()));
                state.groups.clear();
                if suggestions.is_empty() {
                    state.set_flash(format!("No group sizes fit {} student(s)", total));
                }
            }
            UiEvent::GroupsCreated(event) => {
                state.groups = event.groups.clone();
                state.excluded = event.excluded;
                state.suggestions = None;
            }
            UiEvent::ListsChanged { names, selected } => {
                state.lists = names.clone();
                state.selected_list = selected.clone();
            }
            UiEvent::TypesChanged { names } => {
                state.types = names.clone();
                if let Some(selected) = &state.selected_type
                    && !names.contains(&selected.name)
                {
                    state.selected_type = None;
                }
            }
            UiEvent::TypeSelected(presentation_type) => {
                state.selected_type = Some(presentation_type.clone());
            }
            UiEvent::Notice { message } => {
                state.set_flash(message.clone());
            }
        }
    }
}
