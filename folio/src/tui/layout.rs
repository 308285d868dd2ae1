//! Responsive layout engine for the TUI.
//!
//! Adapts the layout based on terminal dimensions so the active panel keeps
//! as many rows as possible on small terminals.

use ratatui::layout::Constraint;

// Width breakpoint
const WIDTH_STACKED_FORMS: u16 = 70; // Below this: skill and search forms stack vertically

// Height breakpoints
const HEIGHT_MINIMAL: u16 = 14; // Below this: tabs + forms + panel only
const HEIGHT_COMPACT: u16 = 22; // Below this: drop the title header

/// Terminal size classification for layout decisions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TerminalSize {
    /// Height < 14: no header, no status bar
    Minimal,
    /// Height 14-22: no header
    Compact,
    /// Height > 22: full layout
    Normal,
}

/// Computed layout configuration based on terminal dimensions.
#[derive(Debug, Clone)]
pub struct LayoutConfig {
    pub size: TerminalSize,

    /// Title bar with profile name and API URL (top)
    pub show_header: bool,

    /// Key hints and request status (bottom)
    pub show_status_bar: bool,

    /// Put the skill form above the search form instead of beside it
    pub stack_forms: bool,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            size: TerminalSize::Normal,
            show_header: true,
            show_status_bar: true,
            stack_forms: false,
        }
    }
}

impl LayoutConfig {
    /// Rows taken by the form area (bordered inputs are 3 rows each).
    pub fn forms_height(&self) -> u16 {
        if self.stack_forms {
            6
        } else {
            3
        }
    }

    /// Vertical constraints: header, tabs, forms, panel, banner, status bar.
    pub fn row_constraints(&self, has_banner: bool) -> [Constraint; 6] {
        [
            Constraint::Length(if self.show_header { 3 } else { 0 }),
            Constraint::Length(3),
            Constraint::Length(self.forms_height()),
            Constraint::Min(0),
            Constraint::Length(u16::from(has_banner)),
            Constraint::Length(if self.show_status_bar { 3 } else { 0 }),
        ]
    }
}

/// Compute layout configuration based on terminal dimensions.
///
/// # Breakpoints
///
/// | Terminal Size | Behavior |
/// |---------------|----------|
/// | Width < 70    | Forms stacked vertically |
/// | Height < 14   | Minimal: no header, no status bar |
/// | Height 14-22  | Compact: no header |
/// | Height > 22   | Full layout |
pub fn compute_layout(width: u16, height: u16) -> LayoutConfig {
    let mut config = LayoutConfig::default();

    if width < WIDTH_STACKED_FORMS {
        config.stack_forms = true;
    }

    if height < HEIGHT_MINIMAL {
        config.size = TerminalSize::Minimal;
        config.show_header = false;
        config.show_status_bar = false;
    } else if height <= HEIGHT_COMPACT {
        config.size = TerminalSize::Compact;
        config.show_header = false;
    }

    config
}
