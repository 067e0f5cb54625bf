//! Main TUI application state and logic

use crate::catalog::{build_trace, Visualizer};
use crate::config::{MAX_UI_SPEED, MIN_UI_SPEED};
use crate::playback::PlaybackController;
use crate::trace::{StepKind, TraceGenerator};
use crate::ui::panes::{self, StatePane, StatusRenderData};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use std::time::{Duration, Instant};

/// The main application state
pub struct App<G: TraceGenerator> {
    /// Generator used for every new input
    pub generator: G,

    pub visualizer: Visualizer,

    /// Cursor and timer over the current trace
    pub controller: PlaybackController<G::Kind, G::Payload>,

    /// Raw text the current trace was built from
    pub raw_input: String,

    /// Preset the current input came from, if any
    pub preset_index: Option<usize>,

    /// Edit buffer while the learner is typing new input
    pub editing: Option<String>,

    /// Scroll offset of the step log
    pub steps_scroll: usize,

    /// How long to wait for a key before ticking the controller
    pub poll_interval: Duration,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,

    /// Whether the status message reports rejected input
    pub status_is_error: bool,

    /// Last time space was pressed (for debouncing)
    pub last_space_press: Instant,
}

impl<G> App<G>
where
    G: TraceGenerator,
    G::Payload: StatePane,
{
    pub fn new(
        generator: G,
        visualizer: Visualizer,
        controller: PlaybackController<G::Kind, G::Payload>,
        raw_input: String,
        preset_index: Option<usize>,
        poll_interval: Duration,
    ) -> Self {
        App {
            generator,
            visualizer,
            controller,
            raw_input,
            preset_index,
            editing: None,
            steps_scroll: 0,
            poll_interval,
            should_quit: false,
            status_message: String::from("Ready!"),
            status_is_error: false,
            last_space_press: Instant::now()
                .checked_sub(Duration::from_secs(1))
                .unwrap_or(Instant::now()),
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            // Auto-advance: the controller decides whether its timer is due
            if self.controller.tick() {
                self.set_status(if self.controller.is_playing() {
                    "Playing..."
                } else {
                    "Playback complete"
                });
            }

            // Use poll with timeout to allow auto-play to work
            if event::poll(self.poll_interval)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        // Input box on top, panes in the middle, status bar at bottom
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(size);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(main_chunks[1]);

        panes::render_input_pane(
            frame,
            main_chunks[0],
            &self.raw_input,
            self.editing.as_deref(),
        );

        let step = self.controller.current_step();
        let title = format!("{} · {}", self.visualizer.title(), self.visualizer.family());
        panes::render_state_pane(
            frame,
            columns[0],
            &title,
            step.kind.label(),
            &step.description,
            &step.payload,
        );

        panes::render_steps_pane(
            frame,
            columns[1],
            self.controller.trace(),
            self.controller.cursor(),
            &mut self.steps_scroll,
        );

        panes::render_status_bar(
            frame,
            main_chunks[2],
            &StatusRenderData {
                message: &self.status_message,
                playback: self.controller.status(),
                is_error: self.status_is_error,
                is_editing: self.editing.is_some(),
            },
        );
    }

    /// Handle keyboard events
    fn handle_key_event(&mut self, key: KeyEvent) {
        if self.editing.is_some() {
            self.handle_edit_key(key);
            return;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            KeyCode::Left => {
                self.controller.step_back();
                self.set_status("Stepped backward");
            }
            KeyCode::Right => {
                self.controller.step_forward();
                self.set_status("Stepped forward");
            }
            KeyCode::Char(' ') => {
                // Toggle auto-play mode (with 200ms debounce to prevent key repeat spam)
                if self.last_space_press.elapsed() >= Duration::from_millis(200) {
                    self.last_space_press = Instant::now();
                    self.controller.toggle();
                    if self.controller.is_playing() {
                        self.set_status("Playing...");
                    } else if self.controller.state().at_end() {
                        self.set_status("At the last step: press backspace to restart");
                    } else {
                        self.set_status("Paused");
                    }
                }
            }
            KeyCode::Char('+') | KeyCode::Char('=') => {
                self.change_speed(2.0);
            }
            KeyCode::Char('-') => {
                self.change_speed(0.5);
            }
            KeyCode::Enter => {
                self.controller.jump_to_end();
                self.set_status("Jumped to end");
            }
            KeyCode::Backspace => {
                self.controller.reset();
                self.set_status("Jumped to start");
            }
            KeyCode::Char('p') | KeyCode::Char('P') => {
                self.next_preset();
            }
            KeyCode::Char('e') | KeyCode::Char('E') => {
                self.editing = Some(self.raw_input.clone());
                self.set_status("Editing input");
            }
            _ => {}
        }
    }

    fn handle_edit_key(&mut self, key: KeyEvent) {
        let Some(buffer) = self.editing.as_mut() else {
            return;
        };
        match key.code {
            KeyCode::Esc => {
                self.editing = None;
                self.set_status("Edit cancelled");
            }
            KeyCode::Enter => {
                let text = buffer.clone();
                self.editing = None;
                if self.load_input(&text) {
                    self.preset_index = None;
                }
            }
            KeyCode::Backspace => {
                buffer.pop();
            }
            KeyCode::Char(c) => {
                buffer.push(c);
            }
            _ => {}
        }
    }

    /// Multiply the speed by `factor`, clamped to the UI range
    fn change_speed(&mut self, factor: f64) {
        let speed = (self.controller.speed() * factor).clamp(MIN_UI_SPEED, MAX_UI_SPEED);
        match self.controller.set_speed(speed) {
            Ok(()) => self.set_status(&format!("Speed {}x", speed)),
            Err(e) => self.set_error(&e.to_string()),
        }
    }

    fn next_preset(&mut self) {
        let presets = self.visualizer.presets();
        let index = self.preset_index.map_or(0, |i| (i + 1) % presets.len());
        match self.visualizer.preset(index) {
            Ok(raw) => {
                if self.load_input(raw) {
                    self.preset_index = Some(index);
                }
            }
            Err(e) => self.set_error(&e.to_string()),
        }
    }

    /// Validate `raw` and swap in a new trace. Returns whether it was accepted.
    fn load_input(&mut self, raw: &str) -> bool {
        match build_trace(&self.generator, raw) {
            Ok(trace) => {
                let steps = trace.len();
                self.controller.replace_trace(trace);
                self.raw_input = raw.to_string();
                self.steps_scroll = 0;
                self.set_status(&format!("Loaded {} steps", steps));
                true
            }
            Err(e) => {
                tracing::info!(error = %e, "input rejected");
                self.set_error(&format!("Input rejected: {}", e));
                false
            }
        }
    }

    fn set_status(&mut self, message: &str) {
        self.status_message = message.to_string();
        self.status_is_error = false;
    }

    fn set_error(&mut self, message: &str) {
        self.status_message = message.to_string();
        self.status_is_error = true;
    }
}
