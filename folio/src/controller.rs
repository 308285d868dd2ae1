//! # ProfileView Controller
//!
//! Runs the [`Request`]s that [`ViewState::update`] emits against a
//! [`ProfileSource`] and turns each outcome into the [`Msg`] that answers it.
//! Request errors stop here: they are logged and handed to the state as a
//! failed result, never propagated.
//!
//! Two drivers share [`Controller::execute`]:
//! - [`Controller::serve`] - TUI mode. Requests arrive on a tokio channel from
//!   the UI thread; each runs on its own task and the response goes back on a
//!   crossbeam channel. Out-of-order completion is expected and resolved by the
//!   state's sequence tracking.
//! - [`Controller::drive`] - headless mode and tests. Applies a message and
//!   awaits every request it triggers, in order, until the state settles.
//!   [`Controller::run_headless`] chains it over the command line options.

use std::sync::Arc;

use crossbeam_channel::Sender;
use log::{debug, info, warn};
use tokio::sync::mpsc::UnboundedReceiver;

use crate::api::ProfileSource;
use crate::domain::Tab;
use crate::state::{Msg, Request, RequestKind, ViewState};

/// What a headless run applies once the profile has loaded.
#[derive(Debug, Clone, Default)]
pub struct HeadlessRun {
    pub skill: Option<String>,
    pub search: Option<String>,
    pub tab: Option<Tab>,
}

pub struct Controller {
    source: Arc<dyn ProfileSource>,
}

impl Controller {
    pub fn new(source: Arc<dyn ProfileSource>) -> Self {
        Self { source }
    }

    /// Perform one request and wrap the outcome in its response message.
    pub async fn execute(&self, request: Request) -> Msg {
        let Request { seq, kind } = request;
        debug!("executing {} request {seq}", kind.class());

        match kind {
            RequestKind::Profile => {
                let result = self.source.fetch_profile().await;
                match &result {
                    Ok(profile) => info!("loaded profile for {}", profile.name),
                    Err(e) => warn!("profile request {seq} failed: {e}"),
                }
                Msg::ProfileLoaded { seq, result }
            }
            RequestKind::ProjectsBySkill(skill) => {
                let result = self.source.fetch_projects_by_skill(&skill).await;
                match &result {
                    Ok(projects) => debug!("{} projects tagged '{skill}'", projects.len()),
                    Err(e) => warn!("projects request {seq} for '{skill}' failed: {e}"),
                }
                Msg::ProjectsLoaded { seq, skill, result }
            }
            RequestKind::Search(query) => {
                let result = self.source.search(&query).await;
                match &result {
                    Ok(results) => debug!("search '{query}' matched {} items", results.total()),
                    Err(e) => warn!("search request {seq} for '{query}' failed: {e}"),
                }
                Msg::SearchCompleted { seq, query, result }
            }
        }
    }

    /// Serve requests from the UI until it hangs up.
    ///
    /// Returns once the request channel closes; tasks still in flight finish
    /// on their own and find the response channel closed.
    pub async fn serve(
        self: Arc<Self>,
        mut requests: UnboundedReceiver<Request>,
        responses: Sender<Msg>,
    ) {
        while let Some(request) = requests.recv().await {
            let controller = Arc::clone(&self);
            let responses = responses.clone();
            tokio::spawn(async move {
                let msg = controller.execute(request).await;
                if responses.send(msg).is_err() {
                    debug!("view closed, dropping response");
                }
            });
        }
        debug!("request channel closed");
    }

    /// Apply `msg`, then execute and apply every request it leads to.
    pub async fn drive(&self, state: ViewState, msg: Msg) -> ViewState {
        let (mut state, mut pending) = state.update(msg);
        while let Some(request) = pending.take() {
            let response = self.execute(request).await;
            let (next, follow_up) = state.update(response);
            state = next;
            pending = follow_up;
        }
        state
    }

    /// Load the profile, then apply the skill filter, the search and the tab
    /// choice in that order. Stops after the load if it failed.
    pub async fn run_headless(&self, run: &HeadlessRun) -> ViewState {
        let mut state = self.drive(ViewState::default(), Msg::Mount).await;
        if state.profile.is_none() {
            return state;
        }

        if let Some(skill) = &run.skill {
            state = self.drive(state, Msg::SkillTagActivated(skill.clone())).await;
        }
        if let Some(query) = &run.search {
            state = self.drive(state, Msg::SearchQueryChanged(query.clone())).await;
            state = self.drive(state, Msg::SubmitSearch).await;
        }
        if let Some(tab) = run.tab {
            if state.can_select(tab) {
                state = self.drive(state, Msg::SelectTab(tab)).await;
            } else {
                warn!(
                    "the {tab} tab needs a successful --search; showing the {} tab instead",
                    state.active_tab
                );
            }
        }
        state
    }
}
