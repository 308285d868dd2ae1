//! TUI color theme
//!
//! Dark palette with one accent for headings and amber skill tags. Titles
//! (profile name, search query) are the accent underlined.

use ratatui::style::{Color, Modifier, Style};

pub const ACCENT: Color = Color::Rgb(97, 218, 251);
pub const TAG_AMBER: Color = Color::Rgb(255, 191, 0);
pub const ERROR_RED: Color = Color::Rgb(255, 85, 85);
pub const LINK_BLUE: Color = Color::Rgb(130, 170, 255);
pub const INFO_DIM: Color = Color::Rgb(140, 140, 150);
pub const BACKGROUND: Color = Color::Rgb(16, 18, 24);

// Pre-computed styles (const fn, shared by all panels)
pub const STYLE_TITLE: Style =
    Style::new().fg(ACCENT).add_modifier(Modifier::BOLD.union(Modifier::UNDERLINED));
pub const STYLE_HEADING: Style = Style::new().fg(ACCENT).add_modifier(Modifier::BOLD);
pub const STYLE_ITEM: Style = Style::new().fg(Color::White).add_modifier(Modifier::BOLD);
pub const STYLE_LABEL: Style = Style::new().fg(TAG_AMBER).add_modifier(Modifier::BOLD);
pub const STYLE_TEXT: Style = Style::new().fg(Color::White);
pub const STYLE_DIM: Style = Style::new().fg(INFO_DIM);
pub const STYLE_KEY: Style = Style::new().fg(TAG_AMBER);
pub const STYLE_LINK: Style = Style::new().fg(LINK_BLUE).add_modifier(Modifier::UNDERLINED);
pub const STYLE_ERROR: Style = Style::new().fg(ERROR_RED).add_modifier(Modifier::BOLD);

/// Skill tag style; the tag under the cursor is drawn reversed
#[must_use]
pub fn tag_style(selected: bool) -> Style {
    let base = Style::new().fg(TAG_AMBER);
    if selected {
        base.add_modifier(Modifier::BOLD | Modifier::REVERSED)
    } else {
        base
    }
}
