//! Demo profile API for trying folio without a real backend
//!
//! Serves one fixed profile on the three endpoints folio reads. The skill
//! filter matches tags exactly but ignores case; search is a case-insensitive
//! substring match.
//!
//! ## Usage
//!
//! ```bash
//! cargo run --example demo-server
//!
//! # In another terminal
//! cargo run -- --api-url http://localhost:5000
//! cargo run -- --headless --search rust
//! ```

use axum::{extract::Query, routing::get, Json, Router};
use folio_common::{
    EducationEntry, Profile, ProfileLinks, Project, ProjectLinks, SearchResultSet, WorkEntry,
};
use serde::Deserialize;

#[derive(Deserialize)]
struct SkillQuery {
    #[serde(default)]
    skill: String,
}

#[derive(Deserialize)]
struct SearchQuery {
    #[serde(default)]
    q: String,
}

fn project(title: &str, description: &str, skills: &[&str], github: &str) -> Project {
    Project {
        title: title.to_string(),
        description: description.to_string(),
        skills: skills.iter().map(ToString::to_string).collect(),
        links: ProjectLinks { github: Some(github.to_string()), demo: None },
    }
}

fn fixture() -> Profile {
    Profile {
        name: "Ada Lovelace".to_string(),
        email: "ada@example.com".to_string(),
        education: vec![EducationEntry {
            institution: "University of London".to_string(),
            degree: "BSc".to_string(),
            field_of_study: Some("Mathematics".to_string()),
            start_date: Some("2014-09-01".to_string()),
            end_date: Some("2017-06-30".to_string()),
            description: None,
        }],
        work: vec![
            WorkEntry {
                company: "Analytical Engines Ltd".to_string(),
                position: "Backend Engineer".to_string(),
                start_date: Some("2019-01-07".to_string()),
                end_date: None,
                description: Some("Rust services and data pipelines".to_string()),
            },
            WorkEntry {
                company: "Difference Labs".to_string(),
                position: "Frontend Developer".to_string(),
                start_date: Some("2017-08-01".to_string()),
                end_date: Some("2018-12-21".to_string()),
                description: None,
            },
        ],
        skills: ["Rust", "Go", "React", "PostgreSQL", "Docker"].map(String::from).to_vec(),
        projects: vec![
            project(
                "folio",
                "Terminal viewer for developer profiles",
                &["Rust"],
                "https://github.com/ada/folio",
            ),
            project(
                "ledger-api",
                "Double-entry bookkeeping service",
                &["Go", "PostgreSQL", "Docker"],
                "https://github.com/ada/ledger-api",
            ),
            project(
                "notes",
                "Markdown notes with live preview",
                &["React"],
                "https://github.com/ada/notes",
            ),
        ],
        links: ProfileLinks {
            github: Some("https://github.com/ada".to_string()),
            linkedin: Some("https://linkedin.com/in/ada".to_string()),
            portfolio: None,
        },
    }
}

fn matches(text: &str, needle: &str) -> bool {
    text.to_lowercase().contains(needle)
}

async fn profile() -> Json<Profile> {
    Json(fixture())
}

async fn projects(Query(query): Query<SkillQuery>) -> Json<Vec<Project>> {
    let skill = query.skill.to_lowercase();
    let projects = fixture()
        .projects
        .into_iter()
        .filter(|p| p.skills.iter().any(|s| s.to_lowercase() == skill))
        .collect();
    Json(projects)
}

async fn search(Query(query): Query<SearchQuery>) -> Json<SearchResultSet> {
    let needle = query.q.to_lowercase();
    let profile = fixture();

    Json(SearchResultSet {
        skills: profile.skills.into_iter().filter(|s| matches(s, &needle)).collect(),
        projects: profile
            .projects
            .into_iter()
            .filter(|p| {
                matches(&p.title, &needle)
                    || matches(&p.description, &needle)
                    || p.skills.iter().any(|s| matches(s, &needle))
            })
            .collect(),
        education: profile
            .education
            .into_iter()
            .filter(|e| matches(&e.institution, &needle) || matches(&e.degree, &needle))
            .collect(),
        work: profile
            .work
            .into_iter()
            .filter(|w| matches(&w.company, &needle) || matches(&w.position, &needle))
            .collect(),
    })
}

#[tokio::main]
async fn main() {
    let app = Router::new()
        .route("/api/profile", get(profile))
        .route("/api/profile/projects", get(projects))
        .route("/api/profile/search", get(search));

    let listener = tokio::net::TcpListener::bind("0.0.0.0:5000").await.unwrap();
    println!("Demo profile API listening on http://localhost:5000");
    println!("  GET /api/profile");
    println!("  GET /api/profile/projects?skill=Rust");
    println!("  GET /api/profile/search?q=rust");
    axum::serve(listener, app).await.unwrap();
}
