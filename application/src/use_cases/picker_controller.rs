//! Picker Controller
//!
//! Single owner of the session state: roster text, draw partition, history,
//! timer, saved lists and presentation types. Front ends call one method
//! per user action and render the [`UiEvent`]s it emits.

use crate::config::TimerSettings;
use crate::error::PickerError;
use crate::ports::roster_source::RosterSourcePort;
use crate::ports::session_logger::{NoSessionLogger, SessionEvent, SessionLogger};
use crate::ports::storage::StoragePort;
use crate::ports::ui_event::{DrawnEvent, GroupsEvent, RosterSnapshot, TimerSnapshot, UiEvent};
use crate::timer::PresentationTimer;
use crate::use_cases::roster_store::RosterStore;
use crate::use_cases::type_catalog::TypeCatalogStore;
use chrono::Local;
use podium_domain::{
    DomainError, DrawEngine, DrawHistory, GroupSuggestion, HistoryEntry, PresentationType, Roster,
    is_csv_path, parse_csv_names, partition, suggest,
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::Path;
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{debug, info};

/// Controller for one instructor session
pub struct PickerController {
    roster_store: RosterStore,
    type_catalog: TypeCatalogStore,
    roster_source: Arc<dyn RosterSourcePort>,
    /// Raw roster text as entered (the textarea)
    roster_text: String,
    roster: Roster,
    engine: DrawEngine,
    history: DrawHistory,
    timer: PresentationTimer,
    settings: TimerSettings,
    /// Saved list currently selected in the list picker
    selected_list: Option<String>,
    rng: StdRng,
    tx: mpsc::UnboundedSender<UiEvent>,
    session_logger: Arc<dyn SessionLogger>,
}

impl PickerController {
    /// Create a controller and restore the previous session's roster.
    pub fn new(
        storage: Arc<dyn StoragePort>,
        roster_source: Arc<dyn RosterSourcePort>,
        settings: TimerSettings,
        tx: mpsc::UnboundedSender<UiEvent>,
    ) -> Self {
        let roster_store = RosterStore::load(storage.clone());
        let type_catalog = TypeCatalogStore::load(storage);
        let roster_text = roster_store.restore_current();
        let roster = Roster::parse(&roster_text);
        let engine = DrawEngine::new(&roster);
        let timer = PresentationTimer::new(&settings, tx.clone());

        info!("Restored roster with {} name(s)", roster.len());

        Self {
            roster_store,
            type_catalog,
            roster_source,
            roster_text,
            roster,
            engine,
            history: DrawHistory::new(),
            timer,
            settings,
            selected_list: None,
            rng: StdRng::from_os_rng(),
            tx,
            session_logger: Arc::new(NoSessionLogger),
        }
    }

    /// Use a fixed RNG (reproducible draws in tests and demos).
    pub fn with_rng(mut self, rng: StdRng) -> Self {
        self.rng = rng;
        self
    }

    pub fn with_session_logger(mut self, logger: Arc<dyn SessionLogger>) -> Self {
        self.timer = PresentationTimer::new(&self.settings, self.tx.clone())
            .with_session_logger(logger.clone());
        self.session_logger = logger;
        self
    }

    /// Emit the full current state, e.g. right after the UI comes up.
    pub fn announce(&self) {
        self.emit(UiEvent::RosterInitialized(self.roster_snapshot()));
        self.emit(UiEvent::TimerChanged(self.timer.snapshot()));
        self.emit_lists_changed();
        self.emit(UiEvent::TypesChanged {
            names: self.type_catalog.names(),
        });
    }

    // ==================== Roster ====================

    /// Replace the roster text and re-initialize everything that depends
    /// on it. The text is persisted for the next session.
    ///
    /// The in-memory reset always happens; a storage failure is returned
    /// afterwards.
    pub fn set_roster_text(&mut self, text: impl Into<String>) -> Result<(), PickerError> {
        self.roster_text = text.into();
        self.initialize();
        self.roster_store.persist_current(&self.roster_text)
    }

    /// Put everyone back in the pool (the reset control).
    pub fn reset_roster(&mut self) {
        self.initialize();
    }

    /// Append a name as a new roster line.
    pub fn add_name(&mut self, name: &str) -> Result<(), PickerError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(DomainError::empty("Name").into());
        }
        let mut text = self.roster_text.trim_end().to_string();
        if !text.is_empty() {
            text.push('\n');
        }
        text.push_str(name);
        self.set_roster_text(text)
    }

    /// Remove the first roster line equal to `name` (after trimming).
    pub fn remove_name(&mut self, name: &str) -> Result<(), PickerError> {
        let name = name.trim();
        let mut lines: Vec<&str> = self.roster_text.lines().collect();
        let position = lines
            .iter()
            .position(|line| line.trim() == name)
            .ok_or_else(|| DomainError::not_found("Name", name))?;
        lines.remove(position);
        let text = lines.join("\n");
        self.set_roster_text(text)
    }

    pub fn clear_roster(&mut self) -> Result<(), PickerError> {
        self.selected_list = None;
        self.set_roster_text(String::new())?;
        self.emit_lists_changed();
        Ok(())
    }

    /// Load a plain text file, one name per line, as the roster.
    pub async fn open_text_file(&mut self, path: &Path) -> Result<usize, PickerError> {
        let text = self.roster_source.read_text(path).await?;
        self.set_roster_text(text)?;
        self.notice(format!(
            "Loaded {} name(s) from {}",
            self.roster.len(),
            path.display()
        ));
        Ok(self.roster.len())
    }

    /// Import names from the first column of a CSV file.
    ///
    /// Any failure leaves the roster unchanged.
    pub async fn import_csv(&mut self, path: &Path) -> Result<usize, PickerError> {
        if !is_csv_path(path) {
            return Err(DomainError::ImportParseFailure(format!(
                "{} is not a .csv file",
                path.display()
            ))
            .into());
        }
        let content = self
            .roster_source
            .read_text(path)
            .await
            .map_err(|e| DomainError::ImportParseFailure(e.to_string()))?;
        let names = parse_csv_names(&content)?;
        let count = names.len();

        info!("Imported {} name(s) from {}", count, path.display());
        self.set_roster_text(names.join("\n"))?;
        self.notice(format!("Imported {} name(s) from CSV", count));
        Ok(count)
    }

    // ==================== Draws ====================

    /// Draw the next presenter, log it and restart the timer for them.
    pub fn draw(&mut self) -> Result<String, PickerError> {
        let name = match self.engine.draw(&mut self.rng) {
            Ok(name) => name,
            Err(e) => {
                if e.is_exhausted() {
                    info!("Draw attempted with nobody left");
                    self.emit(UiEvent::Exhausted);
                    self.session_logger.log(SessionEvent::new(
                        "exhausted",
                        serde_json::json!({ "chosen": self.engine.chosen().len() }),
                    ));
                }
                return Err(e.into());
            }
        };

        let drawn_at = Local::now();
        let (available, chosen) = self.engine.counts();
        info!("Drew '{}' ({} left)", name, available);

        self.emit(UiEvent::Drawn(DrawnEvent {
            name: name.clone(),
            drawn_at,
            available,
            chosen,
            can_draw: self.engine.can_draw(),
        }));
        self.history.record(HistoryEntry::new(name.clone(), drawn_at));
        self.session_logger.log(SessionEvent::new(
            "drawn",
            serde_json::json!({
                "name": name,
                "drawn_at": drawn_at.to_rfc3339(),
                "available": available,
                "chosen": chosen,
            }),
        ));

        self.timer.reset();
        self.timer.toggle();

        Ok(name)
    }

    // ==================== Saved lists ====================

    /// Save the current roster text under `name` and select it.
    pub fn save_list(&mut self, name: &str) -> Result<(), PickerError> {
        let text = self.roster_text.clone();
        self.roster_store.save_as(name, &text)?;
        self.selected_list = Some(name.trim().to_string());
        self.emit_lists_changed();
        self.notice(format!("Saved list '{}'", name.trim()));
        Ok(())
    }

    /// Select a saved list and make it the roster.
    pub fn load_list(&mut self, name: &str) -> Result<(), PickerError> {
        let text = self.roster_store.load_by_name(name)?;
        self.selected_list = Some(name.trim().to_string());
        self.emit_lists_changed();
        self.set_roster_text(text)
    }

    /// Delete the selected list and clear the roster.
    pub fn delete_selected_list(&mut self) -> Result<String, PickerError> {
        let name = self
            .selected_list
            .clone()
            .ok_or_else(|| DomainError::empty("Selected list"))?;
        self.delete_list(&name)?;
        Ok(name)
    }

    /// Delete a saved list. Only the currently selected list can be
    /// deleted; the roster is cleared afterwards.
    pub fn delete_list(&mut self, name: &str) -> Result<(), PickerError> {
        let name = name.trim();
        match self.selected_list.as_deref() {
            None => return Err(DomainError::empty("Selected list").into()),
            Some(selected) if selected != name => {
                return Err(DomainError::not_found("Saved list", name).into());
            }
            Some(_) => {}
        }
        self.roster_store.delete(name)?;
        self.selected_list = None;
        self.emit_lists_changed();
        self.set_roster_text(String::new())?;
        self.notice(format!("Deleted list '{}'", name));
        Ok(())
    }

    pub fn list_names(&self) -> Vec<String> {
        self.roster_store.names()
    }

    pub fn selected_list(&self) -> Option<&str> {
        self.selected_list.as_deref()
    }

    // ==================== Timer ====================

    pub fn set_preset(&mut self, seconds: u32) {
        self.timer.set_preset(seconds);
    }

    /// Apply the n-th configured preset (1-based).
    pub fn apply_preset_slot(&mut self, position: usize) -> Option<u32> {
        let seconds = self.settings.preset(position)?;
        self.timer.set_preset(seconds);
        Some(seconds)
    }

    pub fn toggle_timer(&mut self) {
        self.timer.toggle();
    }

    pub fn start_timer(&mut self) {
        self.timer.start();
    }

    pub fn pause_timer(&mut self) {
        self.timer.pause();
    }

    pub fn reset_timer(&mut self) {
        self.timer.reset();
    }

    pub fn timer(&self) -> TimerSnapshot {
        self.timer.snapshot()
    }

    pub fn settings(&self) -> &TimerSettings {
        &self.settings
    }

    // ==================== Groups ====================

    /// Feasible group sizes for the current roster.
    pub fn suggest_groups(&self) -> Vec<GroupSuggestion> {
        let suggestions = suggest(self.roster.len());
        self.emit(UiEvent::GroupSuggestions {
            total: self.roster.len(),
            suggestions: suggestions.clone(),
        });
        suggestions
    }

    /// Split the whole roster into random groups.
    pub fn create_groups(
        &mut self,
        group_size: usize,
        group_count: usize,
    ) -> Result<Vec<Vec<String>>, PickerError> {
        let groups = partition(self.roster.names(), group_size, group_count, &mut self.rng)?;
        let excluded = self.roster.len() - group_size * group_count;
        info!(
            "Created {} group(s) of {} ({} left out)",
            group_count, group_size, excluded
        );

        self.emit(UiEvent::GroupsCreated(GroupsEvent {
            groups: groups.clone(),
            excluded,
        }));
        self.session_logger.log(SessionEvent::new(
            "groups_created",
            serde_json::json!({ "groups": groups, "excluded": excluded }),
        ));
        Ok(groups)
    }

    // ==================== Presentation types ====================

    pub fn save_type(
        &mut self,
        name: &str,
        description: &str,
        default_duration_seconds: u32,
    ) -> Result<PresentationType, PickerError> {
        let saved = self
            .type_catalog
            .save(name, description, default_duration_seconds)?;
        self.emit(UiEvent::TypesChanged {
            names: self.type_catalog.names(),
        });
        self.notice(format!("Saved presentation type '{}'", saved.name));
        Ok(saved)
    }

    /// Show a type's description and load its duration into the timer.
    pub fn select_type(&mut self, name: &str) -> Result<PresentationType, PickerError> {
        let selected = self.type_catalog.get(name)?;
        debug!("Selected presentation type '{}'", selected.name);
        self.emit(UiEvent::TypeSelected(selected.clone()));
        self.timer.set_preset(selected.default_duration_seconds);
        Ok(selected)
    }

    pub fn delete_type(&mut self, name: &str) -> Result<(), PickerError> {
        self.type_catalog.delete(name)?;
        self.emit(UiEvent::TypesChanged {
            names: self.type_catalog.names(),
        });
        Ok(())
    }

    pub fn type_names(&self) -> Vec<String> {
        self.type_catalog.names()
    }

    pub fn types(&self) -> Vec<PresentationType> {
        self.type_catalog.types()
    }

    // ==================== Reads ====================

    pub fn roster_text(&self) -> &str {
        &self.roster_text
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn engine(&self) -> &DrawEngine {
        &self.engine
    }

    /// `(available, chosen)`
    pub fn counts(&self) -> (usize, usize) {
        self.engine.counts()
    }

    pub fn can_draw(&self) -> bool {
        self.engine.can_draw()
    }

    pub fn history(&self) -> &DrawHistory {
        &self.history
    }

    // ==================== Internals ====================

    fn initialize(&mut self) {
        self.roster = Roster::parse(&self.roster_text);
        self.engine.initialize(&self.roster);
        self.history.clear();
        info!("Roster initialized with {} name(s)", self.roster.len());

        self.emit(UiEvent::RosterInitialized(self.roster_snapshot()));
        self.session_logger.log(SessionEvent::new(
            "roster_initialized",
            serde_json::json!({ "names": self.roster.names() }),
        ));
    }

    fn roster_snapshot(&self) -> RosterSnapshot {
        let (available, chosen) = self.engine.counts();
        RosterSnapshot {
            names: self.roster.names().to_vec(),
            available,
            chosen,
            selected_list: self.selected_list.clone(),
        }
    }

    fn emit_lists_changed(&self) {
        self.emit(UiEvent::ListsChanged {
            names: self.roster_store.names(),
            selected: self.selected_list.clone(),
        });
    }

    fn notice(&self, message: String) {
        self.emit(UiEvent::Notice { message });
    }

    fn emit(&self, event: UiEvent) {
        let _ = self.tx.send(event);
    }
}
