//! # Introduction
//!
//! Stepwise runs a classic interview algorithm over a concrete input and
//! records every observable action as a discrete snapshot. The resulting
//! trace is immutable and deterministic, so it can be stepped forward,
//! backward, or played on a timer.
//!
//! ## Pipeline
//!
//! ```text
//! Raw text → Input adapter → Trace generator → Trace → Playback controller → TUI
//! ```
//!
//! 1. [`input`]: parses and validates raw text into a typed value.
//! 2. [`generators`]: one pure `input → Trace` function per algorithm family.
//! 3. [`trace`]: the shared [`trace::Step`] / [`trace::Trace`] data model and
//!    the [`trace::TraceGenerator`] contract.
//! 4. [`playback`]: cursor state machine with a cancellable auto-advance timer.
//! 5. [`catalog`]: the visualizers the front end offers, with presets.
//! 6. [`ui`]: ratatui-based TUI; not part of the stable library API.
//!
//! ## Algorithm families
//!
//! Pointer rewrite (linked list reversal), stack matching (balanced
//! brackets), and sliding window (longest run without repeats, shortest
//! sub-array reaching a target sum).

pub mod catalog;
pub mod config;
pub mod generators;
pub mod input;
pub mod playback;
pub mod trace;
pub mod ui;
