//! # Terminal User Interface (TUI)
//!
//! Interactive terminal UI using `ratatui`. The screen is a pure projection of
//! [`ViewState`]; key presses become [`Msg`]s through [`msg_for_key`] and go
//! through the same [`ViewState::update`] as everything else.
//!
//! ## Screen
//!
//! ```text
//! ┌ folio | Ada Lovelace | http://localhost:5000 ───────────┐
//! │ Profile │ Projects (3) │ Skills (5) │ Search Results    │
//! ├ Filter by Skill [S] ─────────┬ Search [/] ──────────────┤
//! │ Rust_                        │                          │
//! ├ Projects ────────────────────┴──────────────────────────┤
//! │ ...active panel, scrollable...                          │
//! │ Failed to fetch projects (Esc to dismiss)               │
//! └ 1-4:Tabs S:Skill /:Search ... [Ready] ──────────────────┘
//! ```
//!
//! Until a profile has loaded, the whole screen shows either a loading
//! message or the load error with a retry hint.
//!
//! ## Sub-Modules
//!
//! - `profile`, `projects`, `skills`, `search` - one panel per tab
//! - `text` - shared line builders, also used for headless output
//! - `status` - key hints and request indicator
//! - `layout` - size breakpoints
//! - `theme` - colors and styles

use anyhow::Result;
use crossbeam_channel::Receiver;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::{debug, warn};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Tabs, Wrap},
    Frame, Terminal,
};
use std::io;
use std::time::Duration;
use tokio::sync::mpsc::UnboundedSender;

pub mod layout;
mod profile;
mod projects;
mod search;
mod skills;
mod status;
pub mod text;
mod theme;

use layout::compute_layout;
use status::StatusBar;
use text::plain_text;
use theme::{
    ACCENT, BACKGROUND, INFO_DIM, STYLE_DIM, STYLE_ERROR, STYLE_HEADING, STYLE_KEY, STYLE_TEXT,
    STYLE_TITLE,
};

use crate::domain::{ActionClass, Tab};
use crate::state::{Focus, Msg, Request, ViewState};

/// Input poll interval; also bounds how long a response waits to be drawn
const POLL_INTERVAL: Duration = Duration::from_millis(50);

// =============================================================================
// PROJECTIONS
// =============================================================================

/// Tab labels in navigation order. Counts come from the loaded profile, not
/// from the (possibly filtered) project list.
pub fn tab_titles(state: &ViewState) -> Vec<String> {
    let projects = state.profile.as_ref().map_or(0, |p| p.projects.len());
    let skills = state.profile.as_ref().map_or(0, |p| p.skills.len());
    Tab::ALL
        .iter()
        .map(|tab| match tab {
            Tab::Profile => "Profile".to_string(),
            Tab::Projects => format!("Projects ({projects})"),
            Tab::Skills => format!("Skills ({skills})"),
            Tab::Search => "Search Results".to_string(),
        })
        .collect()
}

/// Lines of the active tab's panel.
pub fn panel_lines(state: &ViewState) -> Vec<Line<'static>> {
    let Some(profile) = &state.profile else {
        return Vec::new();
    };
    match state.active_tab {
        Tab::Profile => profile::profile_lines(profile),
        Tab::Projects => projects::projects_lines(state),
        Tab::Skills => skills::skills_lines(profile, state.tag_cursor),
        Tab::Search => state
            .search_results
            .as_ref()
            .map(|s| search::search_lines(s, state.tag_cursor))
            .unwrap_or_default(),
    }
}

/// Whole view as plain text, for headless mode.
///
/// ```text
/// [Profile] | Projects (1) | Skills (2) | Search Results
///
/// Ada
/// ...
/// ```
pub fn render_plain(state: &ViewState) -> String {
    if state.profile.is_none() {
        return match &state.error {
            Some(error) => format!("{error}\n"),
            None => "Loading profile...\n".to_string(),
        };
    }

    let tabs = Tab::ALL
        .iter()
        .zip(tab_titles(state))
        .filter(|(tab, _)| state.can_select(**tab))
        .map(|(tab, title)| if *tab == state.active_tab { format!("[{title}]") } else { title })
        .collect::<Vec<_>>()
        .join(" | ");

    let mut out = format!("{tabs}\n\n");
    if let Some(error) = &state.error {
        out.push_str(&format!("Error: {error}\n\n"));
    }
    out.push_str(&plain_text(&panel_lines(state)));
    out
}

// =============================================================================
// INPUT
// =============================================================================

/// Map a key press to the message it stands for in the current state.
pub fn msg_for_key(state: &ViewState, key: KeyEvent) -> Option<Msg> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Msg::Quit);
    }
    if state.show_help {
        // Any key closes help
        return Some(Msg::ToggleHelp);
    }

    if state.focus != Focus::None {
        return match key.code {
            KeyCode::Esc => Some(Msg::Blur),
            KeyCode::Enter => Some(Msg::Submit),
            KeyCode::Backspace => Some(Msg::InputBackspace),
            KeyCode::Char(c) => Some(Msg::InputChar(c)),
            _ => None,
        };
    }

    if state.profile.is_none() {
        return match key.code {
            KeyCode::Char('r' | 'R') => Some(Msg::Retry),
            KeyCode::Char('q' | 'Q') | KeyCode::Esc => Some(Msg::Quit),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Char('q' | 'Q') => Some(Msg::Quit),
        KeyCode::Char(c @ '1'..='4') => Tab::from_digit(c).map(Msg::SelectTab),
        KeyCode::Tab => Some(Msg::NextTab),
        KeyCode::BackTab => Some(Msg::PrevTab),
        KeyCode::Char('s' | 'S') => Some(Msg::FocusSkillInput),
        KeyCode::Char('/') => Some(Msg::FocusSearchInput),
        KeyCode::Char('a' | 'A') => Some(Msg::ShowAllProjects),
        KeyCode::Left | KeyCode::Char('h') => Some(Msg::TagCursorPrev),
        KeyCode::Right | KeyCode::Char('l') => Some(Msg::TagCursorNext),
        KeyCode::Enter => Some(Msg::ActivateTag),
        KeyCode::Up | KeyCode::Char('k') => Some(Msg::ScrollUp),
        KeyCode::Down | KeyCode::Char('j') => Some(Msg::ScrollDown),
        KeyCode::Esc => Some(Msg::DismissError),
        KeyCode::Char('?') => Some(Msg::ToggleHelp),
        _ => None,
    }
}

// =============================================================================
// APP
// =============================================================================

/// TUI application. Owns the view state; requests go out to the controller
/// and responses come back as messages.
pub struct App {
    state: ViewState,
    requests: UnboundedSender<Request>,
    responses: Receiver<Msg>,
    api_url: String,
}

impl App {
    #[must_use]
    pub fn new(
        state: ViewState,
        requests: UnboundedSender<Request>,
        responses: Receiver<Msg>,
        api_url: String,
    ) -> Self {
        Self { state, requests, responses, api_url }
    }

    fn dispatch(&mut self, msg: Msg) {
        let (state, request) = std::mem::take(&mut self.state).update(msg);
        self.state = state;
        if let Some(request) = request {
            debug!("dispatching {} request {}", request.kind.class(), request.seq);
            if self.requests.send(request).is_err() {
                warn!("controller stopped; request dropped");
            }
        }
    }

    /// Run the TUI event loop. Dropping the app on return closes the request
    /// channel, which stops the controller.
    ///
    /// # Errors
    /// Returns an error if terminal setup or rendering fails
    pub fn run(mut self) -> Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let result = self.event_loop(&mut terminal);

        // Cleanup terminal
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        result
    }

    fn event_loop(&mut self, terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
        self.dispatch(Msg::Mount);

        loop {
            // Drain controller responses (non-blocking)
            while let Ok(msg) = self.responses.try_recv() {
                self.dispatch(msg);
            }

            let mut limit = 0;
            terminal.draw(|f| limit = draw(f, &self.state, &self.api_url))?;
            if limit != self.state.scroll_limit {
                self.dispatch(Msg::ScrollLimit(limit));
            }

            if event::poll(POLL_INTERVAL)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        if let Some(msg) = msg_for_key(&self.state, key) {
                            self.dispatch(msg);
                        }
                    }
                }
            }

            if self.state.should_quit {
                return Ok(());
            }
        }
    }
}

// =============================================================================
// RENDERING
// =============================================================================

/// Draw one frame. Returns the panel's scroll limit at this size.
fn draw(f: &mut Frame, state: &ViewState, api_url: &str) -> u16 {
    let area = f.area();

    if state.profile.is_none() {
        render_startup(f, area, state);
        return 0;
    }

    let layout = compute_layout(area.width, area.height);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(layout.row_constraints(state.error.is_some()))
        .split(area);

    if layout.show_header {
        render_header(f, rows[0], state, api_url);
    }
    render_tabs(f, rows[1], state);
    render_forms(f, rows[2], state, layout.stack_forms);
    let limit = render_panel(f, rows[3], state);
    if let Some(error) = &state.error {
        let banner = Line::from(vec![
            Span::styled(format!(" {error} "), STYLE_ERROR),
            Span::styled("(Esc to dismiss)", STYLE_DIM),
        ]);
        f.render_widget(Paragraph::new(banner), rows[4]);
    }
    if layout.show_status_bar {
        StatusBar::new(state).render(f, rows[5]);
    }

    if state.show_help {
        render_help_overlay(f, area);
    }
    limit
}

/// Full-screen loading or load-failure view
fn render_startup(f: &mut Frame, area: Rect, state: &ViewState) {
    let lines = match &state.error {
        Some(error) => vec![
            Line::from(Span::styled(error.clone(), STYLE_ERROR)),
            Line::from(""),
            Line::from(vec![
                Span::styled("R", STYLE_KEY),
                Span::styled(" Retry   ", STYLE_TEXT),
                Span::styled("Q", STYLE_KEY),
                Span::styled(" Quit", STYLE_TEXT),
            ]),
        ],
        None => vec![Line::from(Span::styled("Loading profile...", STYLE_DIM))],
    };

    let popup = centered_popup(area, 80, u16::try_from(lines.len() + 2).unwrap_or(u16::MAX));
    f.render_widget(Block::default().style(Style::new().bg(BACKGROUND)), area);
    f.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).border_style(Style::new().fg(ACCENT))),
        popup,
    );
}

fn render_header(f: &mut Frame, area: Rect, state: &ViewState, api_url: &str) {
    let name = state.profile.as_ref().map_or("", |p| p.name.as_str());
    let header = Paragraph::new(Line::from(vec![
        Span::styled("folio", STYLE_HEADING),
        Span::styled(" | ", STYLE_DIM),
        Span::styled(name.to_string(), STYLE_TITLE),
        Span::styled(" | ", STYLE_DIM),
        Span::styled(api_url.to_string(), STYLE_DIM),
    ]))
    .block(Block::default().borders(Borders::ALL).border_style(Style::new().fg(ACCENT)));
    f.render_widget(header, area);
}

fn render_tabs(f: &mut Frame, area: Rect, state: &ViewState) {
    let titles: Vec<Line> = Tab::ALL
        .iter()
        .zip(tab_titles(state))
        .map(|(tab, title)| {
            let style = if state.can_select(*tab) { STYLE_TEXT } else { Style::new().fg(INFO_DIM) };
            Line::from(Span::styled(title, style))
        })
        .collect();

    let tabs = Tabs::new(titles)
        .select(state.active_tab.index())
        .highlight_style(STYLE_HEADING.add_modifier(ratatui::style::Modifier::REVERSED))
        .block(Block::default().borders(Borders::ALL).border_style(Style::new().fg(ACCENT)));
    f.render_widget(tabs, area);
}

fn render_forms(f: &mut Frame, area: Rect, state: &ViewState, stacked: bool) {
    let direction = if stacked { Direction::Vertical } else { Direction::Horizontal };
    let constraints = if stacked {
        [Constraint::Length(3), Constraint::Length(3)]
    } else {
        [Constraint::Percentage(50), Constraint::Percentage(50)]
    };
    let cells = Layout::default().direction(direction).constraints(constraints).split(area);

    let skill_title = if state.is_pending(ActionClass::ProjectsBySkill) {
        " Filter by Skill [S] (filtering...) "
    } else {
        " Filter by Skill [S] "
    };
    let search_title = if state.is_pending(ActionClass::Search) {
        " Search [/] (searching...) "
    } else {
        " Search [/] "
    };

    render_input(f, cells[0], skill_title, &state.skill_input, state.focus == Focus::SkillInput);
    render_input(f, cells[1], search_title, &state.search_query, state.focus == Focus::SearchInput);
}

fn render_input(f: &mut Frame, area: Rect, title: &str, value: &str, focused: bool) {
    let (text, border) = if focused {
        (format!("{value}_"), Style::new().fg(ACCENT))
    } else {
        (value.to_string(), Style::new().fg(INFO_DIM))
    };
    let input = Paragraph::new(text)
        .style(STYLE_TEXT)
        .block(Block::default().borders(Borders::ALL).title(title.to_string()).border_style(border));
    f.render_widget(input, area);
}

/// Furthest scroll offset that still leaves the panel's last row on screen.
#[must_use]
pub fn max_scroll(state: &ViewState, inner: Rect) -> u16 {
    let rows = Paragraph::new(panel_lines(state)).wrap(Wrap { trim: false }).line_count(inner.width);
    u16::try_from(rows).unwrap_or(u16::MAX).saturating_sub(inner.height)
}

fn render_panel(f: &mut Frame, area: Rect, state: &ViewState) -> u16 {
    let title = match state.active_tab {
        Tab::Profile => " Profile ",
        Tab::Projects => " Projects ",
        Tab::Skills => " Skills ",
        Tab::Search => " Search Results ",
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(Style::new().fg(ACCENT))
        .style(Style::new().bg(BACKGROUND));
    let limit = max_scroll(state, block.inner(area));

    // The limit may have shrunk since the last frame
    let panel = Paragraph::new(panel_lines(state))
        .wrap(Wrap { trim: false })
        .scroll((state.scroll.min(limit), 0))
        .block(block);
    f.render_widget(panel, area);
    limit
}

/// Render the help overlay with keyboard shortcuts
fn render_help_overlay(f: &mut Frame, area: Rect) {
    let popup_area = centered_popup(area, 70, 18);

    let key = |k: &'static str, action: &'static str| {
        Line::from(vec![
            Span::styled(format!("  {k:<10}"), STYLE_KEY),
            Span::styled(action, STYLE_TEXT),
        ])
    };

    let help_text = vec![
        Line::from(""),
        Line::from(Span::styled("  Navigation", STYLE_HEADING)),
        key("1-4", "Profile, Projects, Skills, Search Results"),
        key("Tab", "Next tab (Shift+Tab: previous)"),
        key("↑↓ j k", "Scroll the panel"),
        Line::from(""),
        Line::from(Span::styled("  Skills", STYLE_HEADING)),
        key("←→ h l", "Move between skill tags"),
        key("Enter", "Show projects using the selected skill"),
        key("S", "Type a skill to filter projects by"),
        key("A", "Show all projects again"),
        Line::from(""),
        Line::from(Span::styled("  Search", STYLE_HEADING)),
        key("/", "Search skills, projects, education and work"),
        key("Esc", "Cancel input / dismiss error"),
        Line::from(""),
        Line::from(Span::styled("  Press any key to close", STYLE_DIM)),
    ];

    let help_widget = Paragraph::new(help_text).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Help ")
            .style(Style::new().bg(ratatui::style::Color::Black).fg(ACCENT)),
    );

    f.render_widget(Clear, popup_area);
    f.render_widget(help_widget, popup_area);
}

/// Create a centered popup area with given width percentage and height in lines
fn centered_popup(area: Rect, width_percent: u16, height_lines: u16) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Fill(1), Constraint::Length(height_lines), Constraint::Fill(1)])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - width_percent) / 2),
            Constraint::Percentage(width_percent),
            Constraint::Percentage((100 - width_percent) / 2),
        ])
        .split(vertical[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ApiError;
    use crate::state::SearchResults;
    use folio_common::{Profile, Project, SearchResultSet};
    use ratatui::{backend::TestBackend, buffer::Buffer};

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ada() -> Profile {
        Profile {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            skills: vec!["Go".into(), "Rust".into()],
            projects: vec![Project { title: "P1".into(), skills: vec!["Go".into()], ..Default::default() }],
            ..Default::default()
        }
    }

    fn loaded() -> ViewState {
        let profile = ada();
        ViewState { projects: profile.projects.clone(), profile: Some(profile), ..Default::default() }
    }

    fn buffer_text(buffer: &Buffer) -> String {
        buffer.content().iter().map(ratatui::buffer::Cell::symbol).collect()
    }

    #[test]
    fn test_tab_titles_use_profile_counts() {
        let mut state = loaded();
        state.projects.clear();
        state.is_projects_filtered = true;
        assert_eq!(
            tab_titles(&state),
            vec!["Profile", "Projects (1)", "Skills (2)", "Search Results"]
        );
    }

    #[test]
    fn test_keys_before_profile_loads() {
        let state = ViewState::default();
        assert!(matches!(msg_for_key(&state, press(KeyCode::Char('r'))), Some(Msg::Retry)));
        assert!(matches!(msg_for_key(&state, press(KeyCode::Char('q'))), Some(Msg::Quit)));
        assert!(msg_for_key(&state, press(KeyCode::Char('2'))).is_none());
    }

    #[test]
    fn test_focused_input_captures_keys() {
        let state = ViewState { focus: Focus::SkillInput, ..loaded() };
        assert!(matches!(msg_for_key(&state, press(KeyCode::Char('q'))), Some(Msg::InputChar('q'))));
        assert!(matches!(msg_for_key(&state, press(KeyCode::Enter)), Some(Msg::Submit)));
        assert!(matches!(msg_for_key(&state, press(KeyCode::Esc)), Some(Msg::Blur)));
        assert!(matches!(msg_for_key(&state, press(KeyCode::Backspace)), Some(Msg::InputBackspace)));
    }

    #[test]
    fn test_navigation_keys() {
        let state = loaded();
        assert!(matches!(
            msg_for_key(&state, press(KeyCode::Char('3'))),
            Some(Msg::SelectTab(Tab::Skills))
        ));
        assert!(matches!(msg_for_key(&state, press(KeyCode::Char('/'))), Some(Msg::FocusSearchInput)));
        assert!(matches!(msg_for_key(&state, press(KeyCode::Enter)), Some(Msg::ActivateTag)));
        assert!(matches!(msg_for_key(&state, press(KeyCode::Esc)), Some(Msg::DismissError)));

        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(matches!(msg_for_key(&state, ctrl_c), Some(Msg::Quit)));

        let help = ViewState { show_help: true, ..loaded() };
        assert!(matches!(msg_for_key(&help, press(KeyCode::Char('q'))), Some(Msg::ToggleHelp)));
    }

    #[test]
    fn test_render_plain_marks_active_tab_and_hides_search_until_used() {
        let text = render_plain(&loaded());
        assert!(text.starts_with("[Profile] | Projects (1) | Skills (2)\n\nAda\n"));
        assert!(!text.contains("Search Results"));

        let state = ViewState {
            search_results: Some(SearchResults {
                query: "xyz".into(),
                results: SearchResultSet::default(),
            }),
            active_tab: Tab::Search,
            ..loaded()
        };
        let text = render_plain(&state);
        assert!(text.contains("| [Search Results]"));
        assert!(text.contains("No results found for 'xyz'"));
    }

    #[test]
    fn test_render_plain_load_failure() {
        let (state, request) = ViewState::default().update(Msg::Mount);
        let seq = request.map(|r| r.seq).unwrap_or_default();
        let (state, _) = state.update(Msg::ProfileLoaded {
            seq,
            result: Err(ApiError::Status { status: 500, url: "http://x/api/profile".into() }),
        });
        assert_eq!(render_plain(&state), "Failed to load profile. Is the API server running?\n");
    }

    #[test]
    fn test_draw_full_screen_error_and_main_view() {
        let (state, request) = ViewState::default().update(Msg::Mount);
        let seq = request.map(|r| r.seq).unwrap_or_default();
        let (state, _) = state.update(Msg::ProfileLoaded {
            seq,
            result: Err(ApiError::Status { status: 503, url: "http://x/api/profile".into() }),
        });

        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal.draw(|f| { draw(f, &state, "http://x"); }).unwrap();
        let screen = buffer_text(terminal.backend().buffer());
        assert!(screen.contains("Failed to load profile"));
        assert!(screen.contains("Retry"));

        terminal.draw(|f| { draw(f, &loaded(), "http://x"); }).unwrap();
        let screen = buffer_text(terminal.backend().buffer());
        assert!(screen.contains("Projects (1)"));
        assert!(screen.contains("ada@example.com"));
        assert!(screen.contains("[Ready]"));
    }

    #[test]
    fn test_max_scroll_depends_on_panel_height() {
        let state = loaded();
        let rows = u16::try_from(panel_lines(&state).len()).unwrap();
        assert!(rows > 2);

        assert_eq!(max_scroll(&state, Rect::new(0, 0, 200, rows + 10)), 0);
        assert_eq!(max_scroll(&state, Rect::new(0, 0, 200, 2)), rows - 2);
    }

    #[test]
    fn test_draw_reports_scroll_limit_and_clamps_offset() {
        let mut terminal = Terminal::new(TestBackend::new(80, 14)).unwrap();
        let mut limit = 0;
        terminal.draw(|f| limit = draw(f, &loaded(), "http://x")).unwrap();
        assert!(limit > 0, "a 14-row terminal cannot show the whole profile");

        // An offset past the limit still shows the last rows of the panel
        let state = ViewState { scroll: u16::MAX, ..loaded() };
        let mut clamped = 0;
        terminal.draw(|f| clamped = draw(f, &state, "http://x")).unwrap();
        assert_eq!(clamped, limit);
        let screen = buffer_text(terminal.backend().buffer());
        assert!(screen.contains("No links listed"));
    }
}
