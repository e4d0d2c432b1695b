//! TUI application: main loop
//!
//! Architecture:
//! ```text
//! TuiApp (select! loop, owns the PickerController)
//!   ├─ crossterm EventStream ──> KeyAction / TuiCommand ──> controller
//!   ├─ ui_rx (UiEvent from controller and timer task) ──> TuiPresenter
//!   └─ tick_interval (flash expiry)
//! ```

use super::command::TuiCommand;
use super::mode::{self, InputMode, KeyAction};
use super::presenter::TuiPresenter;
use super::state::{FLASH_DURATION, TuiState};
use super::widgets::{
    MainLayout, groups::GroupsWidget, header::HeaderWidget, help::HelpWidget,
    history::HistoryWidget, input::InputWidget, roster::RosterWidget,
    spotlight::SpotlightWidget, status_bar::StatusBarWidget, timer::TimerWidget,
    types::TypesWidget,
};
use crossterm::{
    event::{Event, EventStream, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::stream::StreamExt;
use podium_application::{PickerController, PickerError, UiEvent};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{debug, info};

/// Main TUI application
pub struct TuiApp {
    controller: PickerController,
    ui_rx: mpsc::UnboundedReceiver<UiEvent>,
    presenter: TuiPresenter,
}

impl TuiApp {
    /// `ui_rx` must be the receiving end of the controller's event channel.
    pub fn new(controller: PickerController, ui_rx: mpsc::UnboundedReceiver<UiEvent>) -> Self {
        Self {
            controller,
            ui_rx,
            presenter: TuiPresenter::new(),
        }
    }

    /// Run the TUI main loop
    pub async fn run(&mut self) -> io::Result<()> {
        let mut session = TerminalSession::enter()?;
        info!("TUI started");
        let result = self.event_loop(&mut session.terminal).await;
        drop(session);
        info!("TUI stopped");
        result
    }

    async fn event_loop(&mut self, terminal: &mut CrosstermTerminal) -> io::Result<()> {
        let mut state = TuiState::new();
        let mut event_stream = EventStream::new();
        let mut tick = tokio::time::interval(Duration::from_millis(250));

        self.controller.announce();

        loop {
            terminal.draw(|frame| self.render(frame, &state))?;

            if state.should_quit {
                return Ok(());
            }

            tokio::select! {
                // Terminal events (keyboard, resize)
                Some(Ok(term_event)) = event_stream.next() => {
                    self.handle_terminal_event(&mut state, term_event).await;
                }

                // UiEvents from the controller and the timer task
                Some(ui_event) = self.ui_rx.recv() => {
                    self.presenter.apply(&mut state, &ui_event);
                }

                // Tick for flash expiry
                _ = tick.tick() => {
                    state.expire_flash(FLASH_DURATION);
                }
            }
        }
    }

    /// Render all widgets
    fn render(&self, frame: &mut ratatui::Frame, state: &TuiState) {
        let layout = MainLayout::compute(frame.area());
        let presets = &self.controller.settings().presets;

        frame.render_widget(HeaderWidget::new(state), layout.header);
        frame.render_widget(SpotlightWidget::new(state), layout.spotlight);
        frame.render_widget(TimerWidget::new(state, presets), layout.timer);
        frame.render_widget(GroupsWidget::new(state), layout.groups);
        frame.render_widget(RosterWidget::new(state), layout.roster);
        frame.render_widget(HistoryWidget::new(state), layout.history);
        frame.render_widget(TypesWidget::new(state), layout.types);
        frame.render_widget(InputWidget::new(state), layout.input);
        frame.render_widget(StatusBarWidget::new(state), layout.status_bar);

        if let Some(position) = InputWidget::cursor_position(state, layout.input) {
            frame.set_cursor_position(position);
        }

        if state.show_help {
            let help_area = MainLayout::centered_overlay(70, 70, frame.area());
            frame.render_widget(ratatui::widgets::Clear, help_area);
            frame.render_widget(HelpWidget::new(), help_area);
        }
    }

    /// Handle a terminal (crossterm) event
    async fn handle_terminal_event(&mut self, state: &mut TuiState, event: Event) {
        let Event::Key(key) = event else {
            // Resize redraws on the next loop
            return;
        };
        if key.kind != KeyEventKind::Press {
            return;
        }

        // If help is showing, Esc or ? closes it
        if state.show_help && matches!(key.code, KeyCode::Esc | KeyCode::Char('?')) {
            state.show_help = false;
            return;
        }

        let action = mode::handle_key_event(state.mode, key);
        self.handle_action(state, action).await;
    }

    /// Handle a semantic key action
    pub async fn handle_action(&mut self, state: &mut TuiState, action: KeyAction) {
        match action {
            KeyAction::None => {}

            // Mode transitions
            KeyAction::EnterInsert => state.mode = InputMode::Insert,
            KeyAction::EnterCommand => {
                state.mode = InputMode::Command;
                state.command_input.clear();
                state.command_cursor = 0;
            }
            KeyAction::ExitToNormal => state.mode = InputMode::Normal,

            // Text editing
            KeyAction::InsertChar(c) => state.insert_char(c),
            KeyAction::DeleteChar => state.delete_char(),
            KeyAction::CursorLeft => state.cursor_left(),
            KeyAction::CursorRight => state.cursor_right(),
            KeyAction::CursorHome => state.cursor_home(),
            KeyAction::CursorEnd => state.cursor_end(),

            // Submit
            KeyAction::SubmitInput => {
                // Stay in Insert mode so several names can be typed in a row
                let name = state.take_input();
                if !name.trim().is_empty() {
                    let result = self.controller.add_name(&name);
                    report(state, result);
                }
            }
            KeyAction::SubmitCommand => {
                let line = state.take_command();
                state.mode = InputMode::Normal;
                if line.trim().is_empty() {
                    return;
                }
                match line.parse::<TuiCommand>() {
                    Ok(command) => self.execute(state, command).await,
                    Err(message) => state.set_flash(message),
                }
            }

            // Picker shortcuts
            KeyAction::Pick => self.execute(state, TuiCommand::Pick).await,
            KeyAction::ResetRoster => self.execute(state, TuiCommand::Reset).await,
            KeyAction::ToggleTimer => self.execute(state, TuiCommand::Toggle).await,
            KeyAction::ResetTimer => self.execute(state, TuiCommand::TimerReset).await,
            KeyAction::Preset(position) => {
                if self.controller.apply_preset_slot(position).is_none() {
                    state.set_flash(format!("No preset {}", position));
                }
            }

            // Application
            KeyAction::ShowHelp => state.show_help = !state.show_help,
            KeyAction::Quit => state.should_quit = true,
        }
    }

    /// Run a parsed `:` command against the controller
    pub async fn execute(&mut self, state: &mut TuiState, command: TuiCommand) {
        debug!("Executing {:?}", command);
        let controller = &mut self.controller;

        match command {
            // Roster
            TuiCommand::Pick => {
                let result = controller.draw().map(|_| ());
                report(state, result);
            }
            TuiCommand::Reset => controller.reset_roster(),
            TuiCommand::Add(name) => report(state, controller.add_name(&name)),
            TuiCommand::Remove(name) => report(state, controller.remove_name(&name)),
            TuiCommand::Clear => report(state, controller.clear_roster()),
            TuiCommand::Open(path) => {
                let result = controller.open_text_file(&path).await.map(|_| ());
                report(state, result);
            }
            TuiCommand::Import(path) => {
                let result = controller.import_csv(&path).await.map(|_| ());
                report(state, result);
            }

            // Saved lists
            TuiCommand::Save(name) => report(state, controller.save_list(&name)),
            TuiCommand::Load(name) => report(state, controller.load_list(&name)),
            TuiCommand::Delete => {
                let result = controller.delete_selected_list().map(|_| ());
                report(state, result);
            }
            TuiCommand::Lists => {
                let names = controller.list_names();
                if names.is_empty() {
                    state.set_flash("No saved lists");
                } else {
                    state.set_flash(format!("Lists: {}", names.join(", ")));
                }
            }

            // Timer
            TuiCommand::Preset(seconds) => controller.set_preset(seconds),
            TuiCommand::Start => controller.start_timer(),
            TuiCommand::Pause => controller.pause_timer(),
            TuiCommand::Toggle => controller.toggle_timer(),
            TuiCommand::TimerReset => controller.reset_timer(),

            // Groups
            TuiCommand::Suggest => {
                controller.suggest_groups();
            }
            TuiCommand::Groups { size, count } => {
                let result = controller.create_groups(size, count).map(|_| ());
                report(state, result);
            }

            // Presentation types
            TuiCommand::Type(name) => {
                let result = controller.select_type(&name).map(|_| ());
                report(state, result);
            }
            TuiCommand::AddType {
                name,
                seconds,
                description,
            } => {
                let result = controller
                    .save_type(&name, &description, seconds)
                    .map(|_| ());
                report(state, result);
            }
            TuiCommand::DeleteType(name) => report(state, controller.delete_type(&name)),
            TuiCommand::Types => {
                let names = controller.type_names();
                if names.is_empty() {
                    state.set_flash("No presentation types");
                } else {
                    state.set_flash(format!("Types: {}", names.join(", ")));
                }
            }

            TuiCommand::Help => state.show_help = true,
            TuiCommand::Quit => state.should_quit = true,
        }
    }
}

type CrosstermTerminal = Terminal<CrosstermBackend<Stdout>>;
type PanicHook = Box<dyn Fn(&std::panic::PanicHookInfo<'_>) + Sync + Send + 'static>;

/// Raw mode plus the alternate screen, undone on drop.
///
/// While the session is alive a panic restores the terminal before the
/// previous hook prints the panic.
struct TerminalSession {
    terminal: CrosstermTerminal,
    _panic_hook: PanicHookGuard,
}

impl TerminalSession {
    fn enter() -> io::Result<Self> {
        enable_raw_mode()?;
        let terminal = execute!(io::stdout(), EnterAlternateScreen)
            .and_then(|_| Terminal::new(CrosstermBackend::new(io::stdout())));
        match terminal {
            Ok(terminal) => Ok(Self {
                terminal,
                _panic_hook: PanicHookGuard::install(restore_terminal),
            }),
            Err(e) => {
                restore_terminal();
                Err(e)
            }
        }
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        restore_terminal();
        let _ = self.terminal.show_cursor();
    }
}

/// Runs `on_panic` ahead of the previous panic hook; puts the previous
/// hook back on drop.
struct PanicHookGuard {
    previous: Arc<PanicHook>,
}

impl PanicHookGuard {
    fn install(on_panic: impl Fn() + Send + Sync + 'static) -> Self {
        let previous: Arc<PanicHook> = Arc::new(std::panic::take_hook());
        let chained = previous.clone();
        std::panic::set_hook(Box::new(move |info| {
            on_panic();
            chained(info);
        }));
        Self { previous }
    }
}

impl Drop for PanicHookGuard {
    fn drop(&mut self) {
        // Hooks can't be swapped while unwinding
        if !std::thread::panicking() {
            let previous = self.previous.clone();
            std::panic::set_hook(Box::new(move |info| previous(info)));
        }
    }
}

fn restore_terminal() {
    let _ = disable_raw_mode();
    let _ = execute!(io::stdout(), LeaveAlternateScreen);
}

/// Show a failed operation in the status bar.
///
/// Exhaustion is already reported through [`UiEvent::Exhausted`].
fn report(state: &mut TuiState, result: Result<(), PickerError>) {
    if let Err(e) = result
        && !e.is_exhausted()
    {
        state.set_flash(e.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use podium_application::{
        InMemoryStorage, RosterSourceError, RosterSourcePort, TimerSettings,
    };
    use std::path::Path;
    use std::sync::Arc;

    struct NoFiles;

    #[async_trait]
    impl RosterSourcePort for NoFiles {
        async fn read_text(&self, path: &Path) -> Result<String, RosterSourceError> {
            Err(RosterSourceError::NotFound(path.display().to_string()))
        }
    }

    fn app() -> TuiApp {
        let (tx, rx) = mpsc::unbounded_channel();
        let controller = PickerController::new(
            Arc::new(InMemoryStorage::new()),
            Arc::new(NoFiles),
            TimerSettings::default(),
            tx,
        );
        TuiApp::new(controller, rx)
    }

    /// Fold every pending controller event into `state`.
    fn pump(app: &mut TuiApp, state: &mut TuiState) {
        while let Ok(event) = app.ui_rx.try_recv() {
            app.presenter.apply(state, &event);
        }
    }

    async fn type_command(app: &mut TuiApp, state: &mut TuiState, line: &str) {
        app.handle_action(state, KeyAction::EnterCommand).await;
        for c in line.chars() {
            app.handle_action(state, KeyAction::InsertChar(c)).await;
        }
        app.handle_action(state, KeyAction::SubmitCommand).await;
        pump(app, state);
    }

    #[tokio::test(start_paused = true)]
    async fn test_insert_mode_adds_names_then_pick() {
        let mut app = app();
        let mut state = TuiState::new();

        app.handle_action(&mut state, KeyAction::EnterInsert).await;
        for name in ["Ann", "Ben"] {
            for c in name.chars() {
                app.handle_action(&mut state, KeyAction::InsertChar(c)).await;
            }
            app.handle_action(&mut state, KeyAction::SubmitInput).await;
        }
        assert_eq!(state.mode, InputMode::Insert);
        app.handle_action(&mut state, KeyAction::ExitToNormal).await;

        app.handle_action(&mut state, KeyAction::Pick).await;
        pump(&mut app, &mut state);

        assert_eq!(state.roster, vec!["Ann", "Ben"]);
        assert_eq!(state.chosen, 1);
        assert_eq!(state.history.len(), 1);
        assert!(state.timer.running);
        assert!(state.roster.contains(&state.presenter));
    }

    #[tokio::test(start_paused = true)]
    async fn test_pick_past_the_end_reports_exhaustion() {
        let mut app = app();
        let mut state = TuiState::new();
        type_command(&mut app, &mut state, "add Ann").await;
        type_command(&mut app, &mut state, "pick").await;
        type_command(&mut app, &mut state, "pick").await;

        assert!(state.exhausted);
        assert!(!state.can_draw);
        let flash = state.flash_message.as_ref().map(|(m, _)| m.as_str());
        assert_eq!(flash, Some("Everyone has presented!"));
    }

    #[tokio::test]
    async fn test_bad_command_flashes_usage() {
        let mut app = app();
        let mut state = TuiState::new();
        type_command(&mut app, &mut state, "groups 4").await;

        assert_eq!(state.mode, InputMode::Normal);
        let flash = state.flash_message.as_ref().map(|(m, _)| m.as_str());
        assert_eq!(flash, Some("Usage: groups <size> <count>"));
    }

    #[tokio::test]
    async fn test_controller_errors_are_flashed() {
        let mut app = app();
        let mut state = TuiState::new();
        type_command(&mut app, &mut state, "load Nowhere").await;

        let flash = state.flash_message.as_ref().map(|(m, _)| m.clone());
        assert!(flash.unwrap().contains("Nowhere"));
    }

    #[tokio::test]
    async fn test_preset_keys_and_types() {
        let mut app = app();
        let mut state = TuiState::new();

        app.handle_action(&mut state, KeyAction::Preset(1)).await;
        pump(&mut app, &mut state);
        assert_eq!(state.timer.remaining_seconds, 60);
        assert_eq!(state.timer.active_preset, Some(60));

        app.handle_action(&mut state, KeyAction::Preset(9)).await;
        let flash = state.flash_message.as_ref().map(|(m, _)| m.as_str());
        assert_eq!(flash, Some("No preset 9"));

        type_command(&mut app, &mut state, "add-type Pitch 90 One slide").await;
        type_command(&mut app, &mut state, "type Pitch").await;
        assert_eq!(state.types, vec!["Pitch"]);
        assert_eq!(state.timer.remaining_seconds, 90);
        assert_eq!(
            state.selected_type.as_ref().map(|t| t.description.as_str()),
            Some("One slide")
        );
    }

    #[tokio::test]
    async fn test_groups_command() {
        let mut app = app();
        let mut state = TuiState::new();
        for name in ["A", "B", "C", "D", "E"] {
            type_command(&mut app, &mut state, &format!("add {name}")).await;
        }

        type_command(&mut app, &mut state, "suggest").await;
        assert_eq!(state.suggestions.as_ref().map(|(t, _)| *t), Some(5));

        type_command(&mut app, &mut state, "groups 2 2").await;
        assert_eq!(state.groups.len(), 2);
        assert_eq!(state.excluded, 1);
    }

    #[test]
    fn test_panic_hook_guard_runs_then_uninstalls() {
        use std::sync::atomic::{AtomicUsize, Ordering};

        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();
        let guard = PanicHookGuard::install(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        fn boom() {
            panic!("boom");
        }

        assert!(std::panic::catch_unwind(boom).is_err());
        assert_eq!(calls.load(Ordering::SeqCst), 1);

        drop(guard);
        assert!(std::panic::catch_unwind(boom).is_err());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_quit_command() {
        let mut app = app();
        let mut state = TuiState::new();
        type_command(&mut app, &mut state, "q").await;
        assert!(state.should_quit);
    }
}
