//! TUI pane rendering modules
//!
//! # Pane Modules
//!
//! - [`state`]: the current step's description and algorithm state
//! - [`steps`]: scrolling log of every step in the trace
//! - [`input`]: raw input line and edit buffer
//! - [`status`]: status bar with keybindings and playback state
//! - `utils`: shared span helpers
//!
//! Every pane is a stateless `render_*` function; scroll offsets live in
//! [`crate::ui::App`].

mod utils;

pub mod input;
pub mod state;
pub mod status;
pub mod steps;

pub use input::render_input_pane;
pub use state::{render_state_pane, StatePane};
pub use status::{render_status_bar, StatusRenderData};
pub use steps::render_steps_pane;
