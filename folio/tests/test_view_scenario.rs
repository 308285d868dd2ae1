//! End-to-end view scenarios against an in-memory profile API.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use folio::api::ProfileSource;
use folio::controller::Controller;
use folio::domain::{ApiError, Tab};
use folio::state::{Msg, ViewState, PROFILE_LOAD_FAILED, SEARCH_FAILED};
use folio::tui::text::plain_text;
use folio::tui::{panel_lines, render_plain, tab_titles};
use folio_common::{Profile, Project, SearchResultSet};

/// Serves a fixed profile. Profile loads fail while `profile_failures` is
/// non-zero; every call is recorded.
struct InMemory {
    profile: Profile,
    profile_failures: Mutex<u32>,
    search_results: Mutex<VecDeque<Result<SearchResultSet, ()>>>,
    calls: Mutex<Vec<String>>,
}

impl InMemory {
    fn new(profile: Profile) -> Self {
        Self {
            profile,
            profile_failures: Mutex::new(0),
            search_results: Mutex::new(VecDeque::new()),
            calls: Mutex::new(Vec::new()),
        }
    }

    fn failing_first(self, failures: u32) -> Self {
        *self.profile_failures.lock().unwrap() = failures;
        self
    }

    fn with_search(self, result: Result<SearchResultSet, ()>) -> Self {
        self.search_results.lock().unwrap().push_back(result);
        self
    }

    fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn unavailable(path: &str) -> ApiError {
        ApiError::Status { status: 503, url: format!("http://test{path}") }
    }
}

#[async_trait]
impl ProfileSource for InMemory {
    async fn fetch_profile(&self) -> Result<Profile, ApiError> {
        self.calls.lock().unwrap().push("profile".to_string());
        let mut failures = self.profile_failures.lock().unwrap();
        if *failures > 0 {
            *failures -= 1;
            return Err(Self::unavailable("/api/profile"));
        }
        Ok(self.profile.clone())
    }

    async fn fetch_projects_by_skill(&self, skill: &str) -> Result<Vec<Project>, ApiError> {
        self.calls.lock().unwrap().push(format!("projects?skill={skill}"));
        Ok(self
            .profile
            .projects
            .iter()
            .filter(|p| p.skills.iter().any(|s| s == skill))
            .cloned()
            .collect())
    }

    async fn search(&self, query: &str) -> Result<SearchResultSet, ApiError> {
        self.calls.lock().unwrap().push(format!("search?q={query}"));
        self.search_results
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Ok(SearchResultSet::default()))
            .map_err(|()| Self::unavailable("/api/profile/search"))
    }
}

fn ada() -> Profile {
    Profile {
        name: "Ada".into(),
        email: "ada@example.com".into(),
        skills: vec!["Go".into(), "Rust".into()],
        projects: vec![Project {
            title: "P1".into(),
            description: "First project".into(),
            skills: vec!["Go".into()],
            ..Default::default()
        }],
        ..Default::default()
    }
}

fn setup(source: InMemory) -> (Arc<InMemory>, Controller) {
    let source = Arc::new(source);
    let controller = Controller::new(Arc::clone(&source) as Arc<dyn ProfileSource>);
    (source, controller)
}

#[tokio::test]
async fn test_mount_shows_profile_tab_with_counts() {
    let (source, controller) = setup(InMemory::new(ada()));

    let state = controller.drive(ViewState::default(), Msg::Mount).await;

    assert_eq!(source.calls(), vec!["profile"]);
    assert_eq!(state.active_tab, Tab::Profile);
    assert_eq!(state.projects, ada().projects);
    assert!(!state.is_projects_filtered);

    let titles = tab_titles(&state);
    assert_eq!(titles[1], "Projects (1)");
    assert_eq!(titles[2], "Skills (2)");

    let text = render_plain(&state);
    assert!(text.contains("Ada\nEmail: ada@example.com"));
    assert!(text.contains("No work experience listed"));
}

#[tokio::test]
async fn test_skill_tag_filters_projects_and_switches_tab() {
    let (source, controller) = setup(InMemory::new(ada()));
    let state = controller.drive(ViewState::default(), Msg::Mount).await;
    let state = controller.drive(state, Msg::SelectTab(Tab::Skills)).await;

    // "Go" is the first tag on the skills tab
    let state = controller.drive(state, Msg::ActivateTag).await;

    assert_eq!(source.calls(), vec!["profile", "projects?skill=Go"]);
    assert_eq!(state.active_tab, Tab::Projects);
    assert!(state.is_projects_filtered);
    assert_eq!(state.active_filter_skill, "Go");
    assert_eq!(state.skill_input, "Go");
    assert!(render_plain(&state).contains("Filtered by skill: Go"));

    // Show all restores the profile's list without another request
    let state = controller.drive(state, Msg::ShowAllProjects).await;
    assert_eq!(source.calls().len(), 2);
    assert!(!state.is_projects_filtered);
    assert_eq!(state.projects, ada().projects);
}

#[tokio::test]
async fn test_filter_with_no_matches_suggests_another_skill() {
    let (_, controller) = setup(InMemory::new(ada()));
    let state = controller.drive(ViewState::default(), Msg::Mount).await;

    let state = controller.drive(state, Msg::SkillInputChanged("  COBOL ".into())).await;
    let state = controller.drive(state, Msg::SubmitSkillFilter).await;

    assert_eq!(state.active_filter_skill, "COBOL");
    assert!(state.projects.is_empty());
    assert!(render_plain(&state).contains("No projects found. Try a different skill."));
    // Tab count still reflects the profile
    assert_eq!(tab_titles(&state)[1], "Projects (1)");
}

#[tokio::test]
async fn test_failed_load_then_retry() {
    let (source, controller) = setup(InMemory::new(ada()).failing_first(1));

    let state = controller.drive(ViewState::default(), Msg::Mount).await;
    assert!(state.profile.is_none());
    assert_eq!(state.error.as_deref(), Some(PROFILE_LOAD_FAILED));
    assert_eq!(render_plain(&state), format!("{PROFILE_LOAD_FAILED}\n"));

    let state = controller.drive(state, Msg::Retry).await;
    assert_eq!(source.calls(), vec!["profile", "profile"]);
    assert!(state.error.is_none());
    assert_eq!(state.profile.as_ref().map(|p| p.name.as_str()), Some("Ada"));
}

#[tokio::test]
async fn test_empty_search_shows_no_results() {
    let (source, controller) = setup(InMemory::new(ada()));
    let state = controller.drive(ViewState::default(), Msg::Mount).await;

    let state = controller.drive(state, Msg::SearchQueryChanged("xyz".into())).await;
    let state = controller.drive(state, Msg::SubmitSearch).await;

    assert_eq!(source.calls(), vec!["profile", "search?q=xyz"]);
    assert_eq!(state.active_tab, Tab::Search);
    assert!(render_plain(&state).contains("| [Search Results]"));

    // Only the panel: the tab bar above it always carries "Skills (2)"
    let panel = plain_text(&panel_lines(&state));
    assert!(panel.starts_with("Search Results for 'xyz'\n"));
    assert!(panel.contains("No results found for 'xyz'"));
    assert!(!panel.contains("Skills ("));
}

#[tokio::test]
async fn test_failed_search_keeps_previous_results() {
    let first = SearchResultSet { skills: vec!["Rust".into()], ..Default::default() };
    let (_, controller) =
        setup(InMemory::new(ada()).with_search(Ok(first.clone())).with_search(Err(())));
    let state = controller.drive(ViewState::default(), Msg::Mount).await;

    let state = controller.drive(state, Msg::SearchQueryChanged("rust".into())).await;
    let state = controller.drive(state, Msg::SubmitSearch).await;
    let state = controller.drive(state, Msg::SelectTab(Tab::Profile)).await;

    let state = controller.drive(state, Msg::SearchQueryChanged("go".into())).await;
    let state = controller.drive(state, Msg::SubmitSearch).await;

    assert_eq!(state.error.as_deref(), Some(SEARCH_FAILED));
    assert_eq!(state.active_tab, Tab::Profile);
    let kept = state.search_results.as_ref().expect("results kept");
    assert_eq!(kept.query, "rust");
    assert_eq!(kept.results, first);

    // Non-fatal: the profile stays visible and the error can be dismissed
    let text = render_plain(&state);
    assert!(text.contains(&format!("Error: {SEARCH_FAILED}")));
    assert!(text.contains("Ada"));
    let state = controller.drive(state, Msg::DismissError).await;
    assert!(state.error.is_none());
}

#[tokio::test]
async fn test_blank_inputs_issue_no_requests() {
    let (source, controller) = setup(InMemory::new(ada()));
    let state = controller.drive(ViewState::default(), Msg::Mount).await;

    let state = controller.drive(state, Msg::SkillInputChanged("   ".into())).await;
    let state = controller.drive(state, Msg::SubmitSkillFilter).await;
    let state = controller.drive(state, Msg::SubmitSearch).await;

    assert_eq!(source.calls(), vec!["profile"]);
    assert!(!state.is_projects_filtered);
    assert!(state.search_results.is_none());
}
