//! Visualizer catalog and the input → trace pipeline
//!
//! The catalog is the closed list of visualizers the front end can open.
//! Each entry knows its CLI slug, a title and a set of preset inputs. Presets
//! are plain raw text and go through the same input adapter as anything the
//! learner types.

use crate::input::{self, ValidationError};
use crate::trace::{Trace, TraceGenerator};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visualizer {
    Reversal,
    Brackets,
    LongestUnique,
    ShortestSum,
}

impl Visualizer {
    pub const ALL: [Visualizer; 4] = [
        Visualizer::Reversal,
        Visualizer::Brackets,
        Visualizer::LongestUnique,
        Visualizer::ShortestSum,
    ];

    pub fn slug(self) -> &'static str {
        match self {
            Visualizer::Reversal => "reverse-list",
            Visualizer::Brackets => "valid-brackets",
            Visualizer::LongestUnique => "longest-unique",
            Visualizer::ShortestSum => "shortest-sum",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Visualizer::Reversal => "Reverse Linked List",
            Visualizer::Brackets => "Valid Parentheses",
            Visualizer::LongestUnique => "Longest Substring Without Repeating Characters",
            Visualizer::ShortestSum => "Minimum Size Subarray Sum",
        }
    }

    /// Algorithm family, shown next to the title
    pub fn family(self) -> &'static str {
        match self {
            Visualizer::Reversal => "pointer rewrite",
            Visualizer::Brackets => "stack matching",
            Visualizer::LongestUnique | Visualizer::ShortestSum => "sliding window",
        }
    }

    /// Preset raw inputs; the first one is the default
    pub fn presets(self) -> &'static [&'static str] {
        match self {
            Visualizer::Reversal => &["1 2 3 4 5", "42", "", "8 -> 3 -> 5 -> 1"],
            Visualizer::Brackets => &["()[]{}", "([)]", "{[()()]}", "((", ")(", ""],
            Visualizer::LongestUnique => &["abcabcbb", "bbbbb", "pwwkew", "dvdf", ""],
            Visualizer::ShortestSum => &["2 3 1 2 4 3", "1 4 4", "1 1 1 1 1 1 1 1", "9"],
        }
    }

    pub fn preset(self, index: usize) -> Result<&'static str, ValidationError> {
        let presets = self.presets();
        presets
            .get(index)
            .copied()
            .ok_or(ValidationError::UnknownPreset {
                index,
                available: presets.len(),
            })
    }

    pub fn from_slug(slug: &str) -> Result<Self, ValidationError> {
        let wanted = slug.trim().to_ascii_lowercase();
        Visualizer::ALL
            .into_iter()
            .find(|v| v.slug() == wanted)
            .ok_or_else(|| ValidationError::UnknownVisualizer(slug.to_string()))
    }
}

/// Run raw text through the input adapter and `generator`.
///
/// Input errors come back as `Err` and no trace is produced.
pub fn build_trace<G: TraceGenerator>(
    generator: &G,
    raw: &str,
) -> Result<Trace<G::Kind, G::Payload>, ValidationError> {
    let typed = input::parse(raw, &generator.constraints())?;
    let accepted = generator.accept(typed);
    Ok(generator.generate(&accepted))
}
