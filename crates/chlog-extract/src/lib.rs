//! Chlog Extract
//!
//! A line-oriented extractor that pulls the current (topmost) version
//! section out of a changelog document. This is the core engine for chlog.
//!
//! # Overview
//!
//! The extractor consumes one line at a time and decides per line whether
//! it belongs to the body of the first version section. Version sections
//! are introduced by level-2 markdown headings (`## ...`). The first
//! heading opens the section, blank spacer lines between the heading and
//! the body are swallowed, and the next heading (or end of input) closes
//! the section. Heading lines themselves are never part of the output.
//!
//! # Example
//!
//! ```
//! use chlog_extract::CurrentSection;
//!
//! let changelog = "\
//! ## Changelog
//!
//! ### v1.2.0
//!
//! - Fix frobnication on reload
//! - Add --dry-run
//! ### v1.1.0
//! - Old news
//! ";
//!
//! let body: Vec<String> = CurrentSection::new(changelog.lines()).collect();
//! assert_eq!(body, ["- Fix frobnication on reload", "- Add --dry-run"]);
//! ```

use regex::Regex;
use std::sync::LazyLock;

use chlog_core::ExtractState;

// =============================================================================
// Regex patterns
// =============================================================================

/// Regex for version section headings: a level-2 markdown heading.
/// Leading whitespace is tolerated; the line must have been rstripped first.
static HEADING_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\s*## ").unwrap());

/// Check whether a line introduces a new version section.
///
/// The check runs on the line's stripped form, so indented headings count.
/// A bare `##` with no title does not.
///
/// # Example
///
/// ```
/// use chlog_extract::is_heading_line;
///
/// assert!(is_heading_line("## v1.2.0"));
/// assert!(is_heading_line("  ## v1.2.0"));
/// assert!(!is_heading_line("### v1.2.0 notes"));
/// assert!(!is_heading_line("body mentioning ## something"));
/// ```
pub fn is_heading_line(line: &str) -> bool {
    HEADING_RE.is_match(line.trim_end())
}

// =============================================================================
// Extractor
// =============================================================================

/// Streaming extractor for the current changelog section.
///
/// Feed lines in document order via [`process_line`](Self::process_line);
/// each call returns the line (rstripped) when it belongs to the section
/// body, or `None` when it is consumed silently. Once the section is
/// closed the extractor is finished for good: it classifies nothing more,
/// and callers should stop supplying input (see
/// [`is_finished`](Self::is_finished)).
#[derive(Debug, Clone)]
pub struct SectionExtractor {
    state: ExtractState,
}

impl Default for SectionExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl SectionExtractor {
    /// Create a new extractor positioned before any input.
    pub fn new() -> Self {
        Self {
            state: ExtractState::Initial,
        }
    }

    /// Current scan state.
    pub fn state(&self) -> ExtractState {
        self.state
    }

    /// Check whether the section has been fully emitted.
    ///
    /// When this returns true, further [`process_line`](Self::process_line)
    /// calls return `None` regardless of input; callers reading from a
    /// file can stop pulling lines.
    pub fn is_finished(&self) -> bool {
        self.state.is_terminal()
    }

    /// Classify one input line, returning it when it is to be emitted.
    ///
    /// The line is rstripped before classification and the returned slice
    /// is the rstripped form. Heading lines and spacer lines return `None`.
    pub fn process_line<'a>(&mut self, line: &'a str) -> Option<&'a str> {
        let line = line.trim_end();
        match self.state {
            ExtractState::Initial => {
                if is_heading_line(line) {
                    self.state = ExtractState::BeforeYielding;
                }
                None
            }
            ExtractState::BeforeYielding => {
                if is_heading_line(line) {
                    // Empty section: the next version heading arrived
                    // before any body line. Nothing to emit.
                    self.state = ExtractState::End;
                    None
                } else if line.is_empty() {
                    // Spacer line between the heading and the body.
                    None
                } else {
                    self.state = ExtractState::Yielding;
                    Some(line)
                }
            }
            ExtractState::Yielding => {
                if is_heading_line(line) {
                    self.state = ExtractState::End;
                    None
                } else {
                    Some(line)
                }
            }
            ExtractState::End => None,
        }
    }
}

// =============================================================================
// Lazy iteration
// =============================================================================

/// Lazy iterator over the body lines of the current changelog section.
///
/// Wraps any iterator of lines (for example [`str::lines`]) and yields the
/// rstripped body lines of the first non-empty version section. The
/// underlying iterator is not pulled past the heading that closes the
/// section, and the adapter is fused: once the section ends, `next`
/// returns `None` without touching the source again.
#[derive(Debug)]
pub struct CurrentSection<I> {
    lines: I,
    extractor: SectionExtractor,
    exhausted: bool,
}

impl<I> CurrentSection<I> {
    /// Wrap a line iterator.
    pub fn new(lines: I) -> Self {
        Self {
            lines,
            extractor: SectionExtractor::new(),
            exhausted: false,
        }
    }
}

impl<I, S> Iterator for CurrentSection<I>
where
    I: Iterator<Item = S>,
    S: AsRef<str>,
{
    type Item = String;

    fn next(&mut self) -> Option<String> {
        while !self.exhausted && !self.extractor.is_finished() {
            match self.lines.next() {
                Some(line) => {
                    if let Some(body) = self.extractor.process_line(line.as_ref()) {
                        return Some(body.to_string());
                    }
                }
                None => self.exhausted = true,
            }
        }
        None
    }
}

/// Collect the current section of an in-memory changelog document.
///
/// Convenience over [`CurrentSection`] for callers that already hold the
/// whole document. Only the first matched section is materialized.
///
/// # Example
///
/// ```
/// use chlog_extract::current_section;
///
/// let body = current_section("## v1\n\nline A\nline B\n## v2\nline C\n");
/// assert_eq!(body, ["line A", "line B"]);
/// ```
pub fn current_section(document: &str) -> Vec<String> {
    CurrentSection::new(document.lines()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heading_detection() {
        assert!(is_heading_line("## v1.0.0"));
        assert!(is_heading_line("## v1.0.0   "));
        assert!(is_heading_line("\t## v1.0.0"));
        assert!(!is_heading_line("##v1.0.0"));
        assert!(!is_heading_line("## "));
        assert!(!is_heading_line("# Changelog"));
        assert!(!is_heading_line(""));
    }

    #[test]
    fn test_initial_state_consumes_preamble() {
        let mut extractor = SectionExtractor::new();
        assert_eq!(extractor.process_line("# Changelog"), None);
        assert_eq!(extractor.process_line(""), None);
        assert_eq!(extractor.state(), ExtractState::Initial);
    }

    #[test]
    fn test_heading_opens_section() {
        let mut extractor = SectionExtractor::new();
        assert_eq!(extractor.process_line("## v1.0.0"), None);
        assert_eq!(extractor.state(), ExtractState::BeforeYielding);
    }

    #[test]
    fn test_spacer_lines_are_swallowed() {
        let mut extractor = SectionExtractor::new();
        extractor.process_line("## v1.0.0");
        assert_eq!(extractor.process_line(""), None);
        assert_eq!(extractor.process_line("   "), None);
        assert_eq!(extractor.process_line("- change"), Some("- change"));
        assert_eq!(extractor.state(), ExtractState::Yielding);
    }

    #[test]
    fn test_body_lines_are_rstripped() {
        let mut extractor = SectionExtractor::new();
        extractor.process_line("## v1.0.0");
        assert_eq!(extractor.process_line("- change  \t"), Some("- change"));
    }

    #[test]
    fn test_next_heading_ends_section() {
        let mut extractor = SectionExtractor::new();
        extractor.process_line("## v1.0.0");
        extractor.process_line("- change");
        assert_eq!(extractor.process_line("## v0.9.0"), None);
        assert!(extractor.is_finished());
        // Terminal: anything after is ignored.
        assert_eq!(extractor.process_line("- old change"), None);
        assert_eq!(extractor.process_line("## v0.8.0"), None);
    }

    #[test]
    fn test_empty_section_ends_immediately() {
        let mut extractor = SectionExtractor::new();
        extractor.process_line("## v1.0.0");
        assert_eq!(extractor.process_line("## v0.9.0"), None);
        assert!(extractor.is_finished());
    }

    #[test]
    fn test_interior_blank_lines_are_emitted() {
        let mut extractor = SectionExtractor::new();
        extractor.process_line("## v1.0.0");
        assert_eq!(extractor.process_line("- change"), Some("- change"));
        assert_eq!(extractor.process_line(""), Some(""));
        assert_eq!(extractor.process_line("- another"), Some("- another"));
    }

    #[test]
    fn test_current_section_stops_pulling_after_end() {
        let doc = ["## v1", "line A", "## v2", "line C"];
        let mut lines = doc.iter();
        let mut section = CurrentSection::new(&mut lines);
        assert_eq!(section.next(), Some("line A".to_string()));
        assert_eq!(section.next(), None);
        assert_eq!(section.next(), None);
        // The closing heading was consumed but nothing past it.
        assert_eq!(lines.next(), Some(&"line C"));
    }

    #[test]
    fn test_current_section_fused_on_exhausted_input() {
        let mut section = CurrentSection::new("## v1\nline A\n".lines());
        assert_eq!(section.next(), Some("line A".to_string()));
        assert_eq!(section.next(), None);
        assert_eq!(section.next(), None);
    }
}
