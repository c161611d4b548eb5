//! Main application state and UI loop
//!
//! Contains the App struct and main UI event handling logic

use crate::country::CountryRecord;
use crate::environment::Environment;
use crate::events::Event as WorkerEvent;
use crate::ui::dashboard::{DashboardState, render_dashboard};
use crate::ui::splash::render_splash;
use crossterm::event::{self, Event, KeyCode};
use ratatui::{Frame, Terminal, backend::Backend};
use std::time::{Duration, Instant};
use tokio::sync::{broadcast, mpsc};

/// UI configuration data grouped by concern
#[derive(Debug, Clone)]
pub struct UIConfig {
    pub with_background_color: bool,
    pub refresh_secs: u64,
}

impl Default for UIConfig {
    fn default() -> Self {
        Self {
            with_background_color: false,
            refresh_secs: crate::consts::dashboard_consts::fetching::DEFAULT_REFRESH_SECS,
        }
    }
}

/// The different screens in the application.
#[derive(Debug)]
pub enum Screen {
    /// Splash screen shown at the start of the application.
    Splash,
    /// Dashboard screen displaying the map and charts.
    Dashboard(Box<DashboardState>),
}

/// Application state
pub struct App {
    /// The start time of the application, used for computing uptime.
    start_time: Instant,

    /// The environment in which the application is running.
    environment: Environment,

    /// The current screen being displayed in the application.
    current_screen: Screen,

    /// Receives log events from the fetch worker.
    event_receiver: mpsc::Receiver<WorkerEvent>,

    /// Receives parsed country tables from the fetch worker.
    data_receiver: mpsc::Receiver<Vec<CountryRecord>>,

    /// Requests an immediate re-fetch.
    refresh_sender: mpsc::Sender<()>,

    /// Broadcasts shutdown signal to the fetch worker.
    shutdown_sender: broadcast::Sender<()>,

    /// UI configuration carried into the dashboard state.
    ui_config: UIConfig,

    /// Events that arrived while the splash screen was up.
    pending_events: Vec<WorkerEvent>,

    /// Table that arrived while the splash screen was up. The startup fetch
    /// usually completes before the splash ends, so this must not be lost.
    pending_records: Option<Vec<CountryRecord>>,
}

impl App {
    /// Creates a new instance of the application.
    pub fn new(
        environment: Environment,
        event_receiver: mpsc::Receiver<WorkerEvent>,
        data_receiver: mpsc::Receiver<Vec<CountryRecord>>,
        refresh_sender: mpsc::Sender<()>,
        shutdown_sender: broadcast::Sender<()>,
        ui_config: UIConfig,
    ) -> Self {
        Self {
            start_time: Instant::now(),
            environment,
            current_screen: Screen::Splash,
            event_receiver,
            data_receiver,
            refresh_sender,
            shutdown_sender,
            ui_config,
            pending_events: Vec::new(),
            pending_records: None,
        }
    }

    /// Drain the worker channels. On the dashboard screen the results go
    /// straight into the state; on the splash screen they are held back and
    /// installed by `enter_dashboard`.
    fn drain_channels(&mut self) {
        while let Ok(event) = self.event_receiver.try_recv() {
            match &mut self.current_screen {
                Screen::Dashboard(state) => state.add_event(event),
                Screen::Splash => self.pending_events.push(event),
            }
        }
        while let Ok(records) = self.data_receiver.try_recv() {
            match &mut self.current_screen {
                Screen::Dashboard(state) => state.set_records(records),
                Screen::Splash => self.pending_records = Some(records),
            }
        }
    }

    fn enter_dashboard(&mut self) {
        let mut state = DashboardState::new(
            self.environment.clone(),
            self.start_time,
            self.ui_config.clone(),
        );
        for event in self.pending_events.drain(..) {
            state.add_event(event);
        }
        if let Some(records) = self.pending_records.take() {
            state.set_records(records);
        }
        self.current_screen = Screen::Dashboard(Box::new(state));
    }
}

/// Runs the application UI in a loop, handling events and rendering the
/// appropriate screen.
pub async fn run<B: Backend>(terminal: &mut Terminal<B>, mut app: App) -> std::io::Result<()> {
    let splash_start = Instant::now();
    let splash_duration = Duration::from_secs(2);

    loop {
        app.drain_channels();

        if let Screen::Dashboard(state) = &mut app.current_screen {
            state.update();
        }
        terminal.draw(|f| render(f, &app.current_screen))?;

        // Handle splash-to-dashboard transition
        if let Screen::Splash = app.current_screen {
            if splash_start.elapsed() >= splash_duration {
                app.enter_dashboard();
                continue;
            }
        }

        // Poll for key events
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                // Skip events that are not KeyEventKind::Press
                if key.kind == event::KeyEventKind::Release {
                    continue;
                }

                // Handle exit events
                if matches!(key.code, KeyCode::Esc | KeyCode::Char('q')) {
                    let _ = app.shutdown_sender.send(());
                    return Ok(());
                }

                match &mut app.current_screen {
                    Screen::Splash => {
                        // Any other key press skips the splash screen
                        app.enter_dashboard();
                    }
                    Screen::Dashboard(state) => {
                        handle_dashboard_key(key.code, state, &app.refresh_sender);
                    }
                }
            }
        }
    }
}

/// Dashboard key bindings: refresh, base layer, marker selection, pan,
/// zoom. Pan steps are in braille dots.
fn handle_dashboard_key(
    code: KeyCode,
    state: &mut DashboardState,
    refresh_sender: &mpsc::Sender<()>,
) {
    match code {
        KeyCode::Char('r') => {
            let _ = refresh_sender.try_send(());
        }
        KeyCode::Char('t') => state.cycle_base_layer(),
        KeyCode::Tab => state.select_next_marker(),
        KeyCode::Left | KeyCode::Char('h') => state.viewport.pan(-8, 0),
        KeyCode::Right | KeyCode::Char('l') => state.viewport.pan(8, 0),
        KeyCode::Up | KeyCode::Char('k') => state.viewport.pan(0, -8),
        KeyCode::Down | KeyCode::Char('j') => state.viewport.pan(0, 8),
        KeyCode::Char('+') | KeyCode::Char('=') => state.viewport.zoom_in(),
        KeyCode::Char('-') => state.viewport.zoom_out(),
        _ => {}
    }
}

/// Renders the current screen based on the application state.
fn render(f: &mut Frame, screen: &Screen) {
    match screen {
        Screen::Splash => render_splash(f),
        Screen::Dashboard(state) => render_dashboard(f, state),
    }
}
