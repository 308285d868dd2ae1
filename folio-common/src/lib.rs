//! # Shared Data Structures (Profile API ↔ Client)
//!
//! Documents served by the profile API. The client only ever reads them:
//! they are deserialized, held by the view state, and projected into text.
//!
//! Field names follow the API's `camelCase` JSON. Every collection a profile
//! may omit is `#[serde(default)]`, so a sparse document still parses and the
//! renderer falls back to the section's [`Section::placeholder`].
//!
//! ## Key Types
//!
//! - [`Profile`] - The developer's aggregate document (`GET /api/profile`)
//! - [`Project`] - One project with its skill tags (`GET /api/profile/projects`)
//! - [`SearchResultSet`] - Per-section matches (`GET /api/profile/search`)
//! - [`Section`] - Renderable sections and their "no data" text

use serde::{Deserialize, Serialize};

// ============================================================================
// Profile
// ============================================================================

/// The single developer profile document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Profile {
    pub name: String,
    pub email: String,
    pub education: Vec<EducationEntry>,
    pub work: Vec<WorkEntry>,
    pub skills: Vec<String>,
    pub projects: Vec<Project>,
    pub links: ProfileLinks,
}

/// External profile links; any of them may be missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileLinks {
    pub github: Option<String>,
    pub linkedin: Option<String>,
    pub portfolio: Option<String>,
}

impl ProfileLinks {
    /// Present links as `(label, url)` pairs, in display order.
    pub fn labelled(&self) -> Vec<(&'static str, &str)> {
        [("GitHub", &self.github), ("LinkedIn", &self.linkedin), ("Portfolio", &self.portfolio)]
            .into_iter()
            .filter_map(|(label, url)| url.as_deref().map(|u| (label, u)))
            .collect()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EducationEntry {
    pub institution: String,
    pub degree: String,
    #[serde(default)]
    pub field_of_study: Option<String>,
    #[serde(default)]
    pub start_date: Option<String>,
    /// Absent while the entry is ongoing.
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl EducationEntry {
    /// `"BSc in Computer Science"`, or just the degree without a field.
    pub fn qualification(&self) -> String {
        match self.field_of_study.as_deref() {
            Some(field) if !field.is_empty() => format!("{} in {field}", self.degree),
            _ => self.degree.clone(),
        }
    }

    pub fn span(&self) -> String {
        date_span(self.start_date.as_deref(), self.end_date.as_deref())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkEntry {
    pub company: String,
    pub position: String,
    #[serde(default)]
    pub start_date: Option<String>,
    /// Absent while the position is current.
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl WorkEntry {
    pub fn span(&self) -> String {
        date_span(self.start_date.as_deref(), self.end_date.as_deref())
    }
}

// ============================================================================
// Projects
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Skill tags in the order the API lists them.
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub links: ProjectLinks,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectLinks {
    pub github: Option<String>,
    pub demo: Option<String>,
}

impl ProjectLinks {
    pub fn labelled(&self) -> Vec<(&'static str, &str)> {
        [("GitHub", &self.github), ("Live Demo", &self.demo)]
            .into_iter()
            .filter_map(|(label, url)| url.as_deref().map(|u| (label, u)))
            .collect()
    }
}

// ============================================================================
// Search
// ============================================================================

/// Matches for one global search query, one list per profile section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchResultSet {
    pub skills: Vec<String>,
    pub projects: Vec<Project>,
    pub education: Vec<EducationEntry>,
    pub work: Vec<WorkEntry>,
}

impl SearchResultSet {
    /// True when every section came back empty.
    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
            && self.projects.is_empty()
            && self.education.is_empty()
            && self.work.is_empty()
    }

    pub fn total(&self) -> usize {
        self.skills.len() + self.projects.len() + self.education.len() + self.work.len()
    }
}

// ============================================================================
// Sections & Placeholders
// ============================================================================

/// Profile sections that can be empty and must say so.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Education,
    Work,
    Skills,
    Projects,
    Links,
}

impl Section {
    pub const fn placeholder(self) -> &'static str {
        match self {
            Section::Education => "No education listed",
            Section::Work => "No work experience listed",
            Section::Skills => "No skills listed",
            Section::Projects => "No projects listed",
            Section::Links => "No links listed",
        }
    }
}

// ============================================================================
// Dates
// ============================================================================

/// Year component of an ISO date (`2019-09-01`, `2019-09-01T00:00:00Z`).
///
/// Input without a leading 4-digit year yields `""`.
pub fn year_of(date: &str) -> &str {
    match date.trim().get(..4) {
        Some(year) if year.bytes().all(|b| b.is_ascii_digit()) => year,
        _ => "",
    }
}

/// `"2019 - 2023"`, or `"2019 - Present"` for an ongoing entry.
///
/// Unparsable dates on either side render as empty.
pub fn date_span(start: Option<&str>, end: Option<&str>) -> String {
    let start = start.map(year_of).unwrap_or_default();
    let end = end.map_or("Present", year_of);
    format!("{start} - {end}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sparse_profile_parses_with_defaults() {
        let profile: Profile = serde_json::from_str(r#"{"name":"Ada","email":"ada@example.com"}"#)
            .expect("sparse profile should parse");
        assert_eq!(profile.name, "Ada");
        assert!(profile.education.is_empty());
        assert!(profile.work.is_empty());
        assert!(profile.skills.is_empty());
        assert!(profile.projects.is_empty());
        assert!(profile.links.labelled().is_empty());
    }

    #[test]
    fn test_camel_case_fields() {
        let entry: EducationEntry = serde_json::from_str(
            r#"{"institution":"MIT","degree":"BSc","fieldOfStudy":"CS","startDate":"2015-09-01"}"#,
        )
        .unwrap();
        assert_eq!(entry.qualification(), "BSc in CS");
        assert_eq!(entry.span(), "2015 - Present");
    }

    #[test]
    fn test_date_span() {
        assert_eq!(date_span(Some("2019-01-01"), Some("2021-06-30")), "2019 - 2021");
        assert_eq!(date_span(Some("2019-01-01T00:00:00.000Z"), None), "2019 - Present");
        assert_eq!(date_span(None, Some("2020-05-01")), " - 2020");
        assert_eq!(year_of("spring"), "");
    }

    #[test]
    fn test_unparsable_dates_render_empty() {
        assert_eq!(date_span(Some("spring"), None), " - Present");
        assert_eq!(date_span(Some("2019-01-01"), Some("soon")), "2019 - ");
        assert_eq!(date_span(Some("19"), Some("")), " - ");
    }

    #[test]
    fn test_links_order_and_labels() {
        let links = ProfileLinks {
            github: Some("https://github.com/ada".into()),
            linkedin: None,
            portfolio: Some("https://ada.dev".into()),
        };
        assert_eq!(
            links.labelled(),
            vec![("GitHub", "https://github.com/ada"), ("Portfolio", "https://ada.dev")]
        );

        let project = ProjectLinks { github: None, demo: Some("https://demo".into()) };
        assert_eq!(project.labelled(), vec![("Live Demo", "https://demo")]);
    }

    #[test]
    fn test_search_result_emptiness() {
        let empty: SearchResultSet = serde_json::from_str("{}").unwrap();
        assert!(empty.is_empty());

        let hit = SearchResultSet { skills: vec!["Rust".into()], ..Default::default() };
        assert!(!hit.is_empty());
        assert_eq!(hit.total(), 1);
    }
}
