//! Bottom status bar: key hints for the current focus plus a request indicator.

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::theme::{ACCENT, STYLE_DIM, STYLE_KEY, TAG_AMBER};
use crate::domain::ActionClass;
use crate::state::{Focus, ViewState};

/// What the bar shows on its right-hand side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Indicator {
    Loading,
    Searching,
    Filtering,
    Filtered(String),
    Ready,
}

impl Indicator {
    pub fn for_state(state: &ViewState) -> Self {
        if state.loading {
            Self::Loading
        } else if state.is_pending(ActionClass::Search) {
            Self::Searching
        } else if state.is_pending(ActionClass::ProjectsBySkill) {
            Self::Filtering
        } else if state.is_projects_filtered {
            Self::Filtered(state.active_filter_skill.clone())
        } else {
            Self::Ready
        }
    }

    pub fn label(&self) -> String {
        match self {
            Self::Loading => "[Loading]".to_string(),
            Self::Searching => "[Searching]".to_string(),
            Self::Filtering => "[Filtering]".to_string(),
            Self::Filtered(skill) => format!("[Filtered: {skill}]"),
            Self::Ready => "[Ready]".to_string(),
        }
    }
}

pub struct StatusBar {
    hints: Vec<(&'static str, &'static str)>,
    indicator: Indicator,
}

impl StatusBar {
    pub fn new(state: &ViewState) -> Self {
        let hints = match state.focus {
            Focus::SkillInput | Focus::SearchInput => {
                vec![("Enter", "Submit"), ("Esc", "Cancel")]
            }
            Focus::None if state.profile.is_none() => vec![("R", "Retry"), ("Q", "Quit")],
            Focus::None => vec![
                ("1-4", "Tabs"),
                ("S", "Skill"),
                ("/", "Search"),
                ("←→", "Tag"),
                ("Enter", "Filter"),
                ("A", "All"),
                ("?", "Help"),
                ("Q", "Quit"),
            ],
        };
        Self { hints, indicator: Indicator::for_state(state) }
    }

    pub fn line(&self) -> Line<'static> {
        let mut spans = Vec::with_capacity(self.hints.len() * 2 + 1);
        for (key, action) in &self.hints {
            spans.push(Span::styled(*key, STYLE_KEY));
            spans.push(Span::styled(format!(":{action} "), STYLE_DIM));
        }
        let color = if self.indicator == Indicator::Ready { ACCENT } else { TAG_AMBER };
        spans.push(Span::styled(self.indicator.label(), Style::new().fg(color)));
        Line::from(spans)
    }

    pub fn render(&self, f: &mut Frame, area: Rect) {
        let status = Paragraph::new(vec![self.line()])
            .block(Block::default().borders(Borders::ALL).border_style(Style::new().fg(ACCENT)));
        f.render_widget(status, area);
    }
}
