//! Extraction state for changelog section scanning.
//!
//! [`ExtractState`] tracks where the scanner is relative to the first
//! version section of a changelog. The state only ever advances:
//! `Initial → BeforeYielding → Yielding → End`, with the shortcut
//! `BeforeYielding → End` when a section turns out to be empty.

/// Scan state for extracting the current changelog section.
///
/// # Example
///
/// ```
/// use chlog_core::ExtractState;
///
/// let state = ExtractState::Initial;
/// assert!(!state.is_terminal());
/// assert!(ExtractState::End.is_terminal());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExtractState {
    /// Scanning for the first version heading
    Initial,
    /// Heading seen; skipping spacer lines before the body starts
    BeforeYielding,
    /// Emitting body lines
    Yielding,
    /// Terminal; no further input is classified
    End,
}

impl ExtractState {
    /// Check whether this is the terminal state.
    ///
    /// Once terminal, the extractor classifies no further lines and
    /// callers should stop pulling input.
    pub fn is_terminal(&self) -> bool {
        matches!(self, ExtractState::End)
    }
}

impl std::fmt::Display for ExtractState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExtractState::Initial => write!(f, "initial"),
            ExtractState::BeforeYielding => write!(f, "before-yielding"),
            ExtractState::Yielding => write!(f, "yielding"),
            ExtractState::End => write!(f, "end"),
        }
    }
}
