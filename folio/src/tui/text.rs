//! Line-building helpers shared by the panels.
//!
//! Panels are plain `Vec<Line>` projections of the view state, so the same
//! output feeds the terminal and headless mode ([`plain_text`]).

use folio_common::Section;
use ratatui::text::{Line, Span};

use super::theme::{tag_style, STYLE_DIM, STYLE_HEADING, STYLE_LABEL, STYLE_LINK, STYLE_TEXT};

/// Indent for the details under a list item
const INDENT: &str = "  ";

pub fn heading(text: impl Into<String>) -> Line<'static> {
    Line::from(Span::styled(text.into(), STYLE_HEADING))
}

pub fn placeholder(section: Section) -> Line<'static> {
    Line::from(Span::styled(format!("{INDENT}{}", section.placeholder()), STYLE_DIM))
}

pub fn detail(text: impl Into<String>) -> Line<'static> {
    Line::from(vec![Span::raw(INDENT), Span::styled(text.into(), STYLE_TEXT)])
}

pub fn dim_detail(text: impl Into<String>) -> Line<'static> {
    Line::from(vec![Span::raw(INDENT), Span::styled(text.into(), STYLE_DIM)])
}

/// `  GitHub: https://github.com/...`
pub fn link(label: &str, url: &str) -> Line<'static> {
    Line::from(vec![
        Span::raw(INDENT),
        Span::styled(format!("{label}: "), STYLE_LABEL),
        Span::styled(url.to_string(), STYLE_LINK),
    ])
}

pub fn blank() -> Line<'static> {
    Line::from("")
}

/// Renders skill tags while numbering them in display order, so the tag under
/// the view's tag cursor can be highlighted. Panels must emit tags in the same
/// order as [`crate::state::ViewState::visible_tags`].
pub struct TagRow {
    cursor: usize,
    next: usize,
}

impl TagRow {
    pub fn new(cursor: usize) -> Self {
        Self { cursor, next: 0 }
    }

    /// `  [Go] [Rust]` with the cursor's tag highlighted
    pub fn line(&mut self, tags: &[String]) -> Line<'static> {
        let mut spans = vec![Span::raw(INDENT)];
        for (i, tag) in tags.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw(" "));
            }
            let selected = self.next == self.cursor;
            spans.push(Span::styled(format!("[{tag}]"), tag_style(selected)));
            self.next += 1;
        }
        Line::from(spans)
    }
}

/// Flatten styled lines to text, one line per row.
pub fn plain_text(lines: &[Line<'_>]) -> String {
    let mut out = String::new();
    for line in lines {
        for span in &line.spans {
            out.push_str(&span.content);
        }
        out.push('\n');
    }
    out
}
