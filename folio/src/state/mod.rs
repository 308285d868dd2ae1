//! # View State Store
//!
//! Everything the viewer knows lives in one [`ViewState`] snapshot. It only
//! changes through [`ViewState::update`], a pure transition from
//! `(state, message)` to `(state, request to issue)`. No I/O happens here:
//! the controller executes the returned [`Request`] and feeds the response back
//! in as another [`Msg`].
//!
//! ```text
//!  key / mount ──▶ Msg ──▶ update() ──▶ ViewState ──▶ render
//!                   ▲          │
//!                   │          └──▶ Request{seq} ──▶ Controller ──▶ API
//!                   └──────────── Msg::*Loaded{seq} ◀───────────────┘
//! ```
//!
//! Responses carry the sequence number of the request that produced them and
//! are dropped unless that request is still the latest of its class (see
//! [`RequestTracker`]).

use folio_common::{Profile, Project, SearchResultSet};
use log::debug;

use crate::domain::{ActionClass, ApiError, RequestSeq, Tab};

pub mod tracker;

pub use tracker::RequestTracker;

/// Full-screen message shown when the initial load fails
pub const PROFILE_LOAD_FAILED: &str = "Failed to load profile. Is the API server running?";
/// Inline banner after a failed skill filter
pub const PROJECTS_FETCH_FAILED: &str = "Failed to fetch projects";
/// Inline banner after a failed global search
pub const SEARCH_FAILED: &str = "Failed to perform search";

// =============================================================================
// REQUESTS & MESSAGES
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestKind {
    Profile,
    ProjectsBySkill(String),
    Search(String),
}

impl RequestKind {
    pub fn class(&self) -> ActionClass {
        match self {
            RequestKind::Profile => ActionClass::Profile,
            RequestKind::ProjectsBySkill(_) => ActionClass::ProjectsBySkill,
            RequestKind::Search(_) => ActionClass::Search,
        }
    }
}

/// A read the controller must perform on behalf of the view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub seq: RequestSeq,
    pub kind: RequestKind,
}

/// Input focus for the two text forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    None,
    SkillInput,
    SearchInput,
}

/// Everything that can happen to the view.
#[derive(Debug)]
pub enum Msg {
    /// The view came up; start the initial load
    Mount,
    /// Re-run the initial load after it failed
    Retry,
    ProfileLoaded { seq: RequestSeq, result: Result<Profile, ApiError> },
    ProjectsLoaded { seq: RequestSeq, skill: String, result: Result<Vec<Project>, ApiError> },
    SearchCompleted { seq: RequestSeq, query: String, result: Result<SearchResultSet, ApiError> },

    /// Replace the skill form's text
    SkillInputChanged(String),
    /// Replace the search form's text
    SearchQueryChanged(String),
    SubmitSkillFilter,
    SubmitSearch,
    /// A skill tag was clicked anywhere in the UI
    SkillTagActivated(String),
    ShowAllProjects,

    SelectTab(Tab),
    NextTab,
    PrevTab,

    FocusSkillInput,
    FocusSearchInput,
    InputChar(char),
    InputBackspace,
    /// Submit whichever form has focus
    Submit,
    Blur,

    TagCursorNext,
    TagCursorPrev,
    /// Activate the skill tag under the cursor
    ActivateTag,
    ScrollUp,
    ScrollDown,
    /// Rendered panel height changed; furthest line the panel can scroll to
    ScrollLimit(u16),
    ToggleHelp,
    DismissError,
    Quit,
}

/// A successful search and the query it answered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResults {
    pub query: String,
    pub results: SearchResultSet,
}

// =============================================================================
// VIEW STATE
// =============================================================================

#[derive(Debug, Clone, Default)]
pub struct ViewState {
    /// Last successfully loaded profile
    pub profile: Option<Profile>,
    /// Projects currently displayed (independent of `profile.projects`)
    pub projects: Vec<Project>,
    pub is_projects_filtered: bool,
    pub active_filter_skill: String,
    /// Skill form text
    pub skill_input: String,
    /// Global search form text
    pub search_query: String,
    /// Latest successful search; never cleared once set
    pub search_results: Option<SearchResults>,
    pub active_tab: Tab,
    /// Initial load (or retry) in flight
    pub loading: bool,
    pub error: Option<String>,

    pub focus: Focus,
    /// Index into [`ViewState::visible_tags`]
    pub tag_cursor: usize,
    /// Vertical scroll of the active panel, in lines
    pub scroll: u16,
    /// Upper bound for `scroll`, reported by the renderer
    pub scroll_limit: u16,
    pub show_help: bool,
    pub should_quit: bool,

    pub requests: RequestTracker,
}

impl ViewState {
    /// Apply one message. Returns the new state and the request to issue, if any.
    #[must_use]
    pub fn update(mut self, msg: Msg) -> (Self, Option<Request>) {
        let request = self.apply(msg);
        (self, request)
    }

    fn apply(&mut self, msg: Msg) -> Option<Request> {
        match msg {
            Msg::Mount | Msg::Retry => {
                if self.loading || self.profile.is_some() {
                    return None;
                }
                self.begin_load()
            }
            Msg::ProfileLoaded { seq, result } => {
                self.profile_loaded(seq, result);
                None
            }
            Msg::ProjectsLoaded { seq, skill, result } => {
                self.projects_loaded(seq, skill, result);
                None
            }
            Msg::SearchCompleted { seq, query, result } => {
                self.search_completed(seq, query, result);
                None
            }

            Msg::SkillInputChanged(text) => {
                self.skill_input = text;
                None
            }
            Msg::SearchQueryChanged(text) => {
                self.search_query = text;
                None
            }
            Msg::SubmitSkillFilter => {
                self.focus = Focus::None;
                let skill = self.skill_input.clone();
                self.filter_by_skill(&skill)
            }
            Msg::SubmitSearch => {
                self.focus = Focus::None;
                self.global_search()
            }
            Msg::SkillTagActivated(skill) => {
                self.skill_input.clone_from(&skill);
                self.filter_by_skill(&skill)
            }
            Msg::ShowAllProjects => {
                self.show_all_projects();
                None
            }

            Msg::SelectTab(tab) => {
                self.select_tab(tab);
                None
            }
            Msg::NextTab => {
                self.cycle_tab(1);
                None
            }
            Msg::PrevTab => {
                self.cycle_tab(Tab::ALL.len() - 1);
                None
            }

            Msg::FocusSkillInput => {
                self.focus = Focus::SkillInput;
                None
            }
            Msg::FocusSearchInput => {
                self.focus = Focus::SearchInput;
                None
            }
            Msg::InputChar(c) => {
                if let Some(field) = self.focused_field() {
                    field.push(c);
                }
                None
            }
            Msg::InputBackspace => {
                if let Some(field) = self.focused_field() {
                    field.pop();
                }
                None
            }
            Msg::Submit => match self.focus {
                Focus::SkillInput => self.apply(Msg::SubmitSkillFilter),
                Focus::SearchInput => self.apply(Msg::SubmitSearch),
                Focus::None => None,
            },
            Msg::Blur => {
                self.focus = Focus::None;
                None
            }

            Msg::TagCursorNext => {
                let count = self.visible_tags().len();
                if count > 0 {
                    self.tag_cursor = (self.tag_cursor + 1) % count;
                }
                None
            }
            Msg::TagCursorPrev => {
                let count = self.visible_tags().len();
                if count > 0 {
                    self.tag_cursor = (self.tag_cursor + count - 1) % count;
                }
                None
            }
            Msg::ActivateTag => {
                let skill = self.visible_tags().get(self.tag_cursor).map(|s| (*s).to_string())?;
                self.apply(Msg::SkillTagActivated(skill))
            }
            Msg::ScrollUp => {
                self.scroll = self.scroll.saturating_sub(1);
                None
            }
            Msg::ScrollDown => {
                self.scroll = self.scroll.saturating_add(1).min(self.scroll_limit);
                None
            }
            Msg::ScrollLimit(limit) => {
                self.scroll_limit = limit;
                self.scroll = self.scroll.min(limit);
                None
            }
            Msg::ToggleHelp => {
                self.show_help = !self.show_help;
                None
            }
            Msg::DismissError => {
                // The full-screen load error is only left through a retry
                if self.profile.is_some() {
                    self.error = None;
                }
                None
            }
            Msg::Quit => {
                self.should_quit = true;
                None
            }
        }
    }

    // -------------------------------------------------------------------------
    // Operations
    // -------------------------------------------------------------------------

    fn begin_load(&mut self) -> Option<Request> {
        self.loading = true;
        self.error = None;
        Some(self.issue(RequestKind::Profile))
    }

    fn profile_loaded(&mut self, seq: RequestSeq, result: Result<Profile, ApiError>) {
        if !self.requests.accept(ActionClass::Profile, seq) {
            debug!("discarding stale profile response {seq}");
            return;
        }
        self.loading = false;
        match result {
            Ok(profile) => {
                self.projects = profile.projects.clone();
                self.is_projects_filtered = false;
                self.active_filter_skill.clear();
                self.profile = Some(profile);
                self.error = None;
                self.reset_cursor();
            }
            Err(_) => self.error = Some(PROFILE_LOAD_FAILED.to_string()),
        }
    }

    fn filter_by_skill(&mut self, skill: &str) -> Option<Request> {
        let skill = skill.trim();
        if skill.is_empty() {
            return None;
        }
        self.error = None;
        Some(self.issue(RequestKind::ProjectsBySkill(skill.to_string())))
    }

    fn projects_loaded(
        &mut self,
        seq: RequestSeq,
        skill: String,
        result: Result<Vec<Project>, ApiError>,
    ) {
        if !self.requests.accept(ActionClass::ProjectsBySkill, seq) {
            debug!("discarding stale projects response {seq} for '{skill}'");
            return;
        }
        match result {
            Ok(projects) => {
                self.projects = projects;
                self.is_projects_filtered = true;
                self.active_filter_skill = skill;
                self.active_tab = Tab::Projects;
                self.reset_cursor();
            }
            Err(_) => self.error = Some(PROJECTS_FETCH_FAILED.to_string()),
        }
    }

    fn show_all_projects(&mut self) {
        let Some(profile) = &self.profile else {
            return;
        };
        self.projects = profile.projects.clone();
        self.is_projects_filtered = false;
        self.active_filter_skill.clear();
        self.skill_input.clear();
        // An in-flight filter must not re-apply itself after "show all"
        self.requests.supersede(ActionClass::ProjectsBySkill);
        self.reset_cursor();
    }

    fn global_search(&mut self) -> Option<Request> {
        let query = self.search_query.trim();
        if query.is_empty() {
            return None;
        }
        let query = query.to_string();
        self.error = None;
        Some(self.issue(RequestKind::Search(query)))
    }

    fn search_completed(
        &mut self,
        seq: RequestSeq,
        query: String,
        result: Result<SearchResultSet, ApiError>,
    ) {
        if !self.requests.accept(ActionClass::Search, seq) {
            debug!("discarding stale search response {seq} for '{query}'");
            return;
        }
        match result {
            Ok(results) => {
                self.search_results = Some(SearchResults { query, results });
                self.active_tab = Tab::Search;
                self.reset_cursor();
            }
            Err(_) => self.error = Some(SEARCH_FAILED.to_string()),
        }
    }

    fn select_tab(&mut self, tab: Tab) {
        if !self.can_select(tab) {
            return;
        }
        if self.active_tab != tab {
            self.active_tab = tab;
            self.reset_cursor();
        }
    }

    /// Step `offset` positions forward (mod 4), skipping unreachable tabs.
    fn cycle_tab(&mut self, offset: usize) {
        let len = Tab::ALL.len();
        let mut index = self.active_tab.index();
        for _ in 0..len {
            index = (index + offset) % len;
            let tab = Tab::ALL[index];
            if self.can_select(tab) {
                self.select_tab(tab);
                return;
            }
        }
    }

    // -------------------------------------------------------------------------
    // Helpers
    // -------------------------------------------------------------------------

    fn issue(&mut self, kind: RequestKind) -> Request {
        let seq = self.requests.issue(kind.class());
        Request { seq, kind }
    }

    fn reset_cursor(&mut self) {
        self.tag_cursor = 0;
        self.scroll = 0;
    }

    fn focused_field(&mut self) -> Option<&mut String> {
        match self.focus {
            Focus::SkillInput => Some(&mut self.skill_input),
            Focus::SearchInput => Some(&mut self.search_query),
            Focus::None => None,
        }
    }

    // -------------------------------------------------------------------------
    // Projections
    // -------------------------------------------------------------------------

    /// `Search` needs a result set to show; every other tab is always reachable.
    pub fn can_select(&self, tab: Tab) -> bool {
        tab != Tab::Search || self.search_results.is_some()
    }

    pub fn is_pending(&self, class: ActionClass) -> bool {
        self.requests.is_pending(class)
    }

    /// Skill tags the active tab shows, in render order. The tag cursor
    /// indexes into this list.
    pub fn visible_tags(&self) -> Vec<&str> {
        match self.active_tab {
            Tab::Profile => Vec::new(),
            Tab::Projects => project_tags(&self.projects).collect(),
            Tab::Skills => {
                self.profile.iter().flat_map(|p| p.skills.iter().map(String::as_str)).collect()
            }
            Tab::Search => self
                .search_results
                .iter()
                .flat_map(|s| {
                    s.results
                        .skills
                        .iter()
                        .map(String::as_str)
                        .chain(project_tags(&s.results.projects))
                })
                .collect(),
        }
    }
}

/// Every skill tag of every project, in display order.
pub fn project_tags(projects: &[Project]) -> impl Iterator<Item = &str> {
    projects.iter().flat_map(|p| p.skills.iter().map(String::as_str))
}
