//! Search panel - global search results grouped by section.
//!
//! Sections with no matches are left out entirely. When every section is
//! empty, only the "no results" line is shown.

use ratatui::text::{Line, Span};

use super::projects::project_lines;
use super::text::{blank, detail, heading, TagRow};
use super::theme::{STYLE_DIM, STYLE_ITEM, STYLE_TITLE};
use crate::state::SearchResults;

pub fn no_results_message(query: &str) -> String {
    format!("No results found for '{query}'")
}

pub fn search_lines(search: &SearchResults, tag_cursor: usize) -> Vec<Line<'static>> {
    let results = &search.results;
    let mut lines = vec![
        Line::from(Span::styled(format!("Search Results for '{}'", search.query), STYLE_TITLE)),
        blank(),
    ];

    if results.is_empty() {
        lines.push(Line::from(Span::styled(no_results_message(&search.query), STYLE_DIM)));
        return lines;
    }

    // Tag numbering must follow ViewState::visible_tags: skills, then project tags
    let mut tags = TagRow::new(tag_cursor);

    if !results.skills.is_empty() {
        lines.push(heading(format!("Skills ({})", results.skills.len())));
        lines.push(tags.line(&results.skills));
        lines.push(blank());
    }

    if !results.projects.is_empty() {
        lines.push(heading(format!("Projects ({})", results.projects.len())));
        for project in &results.projects {
            lines.extend(project_lines(project, &mut tags, false));
        }
        lines.push(blank());
    }

    if !results.education.is_empty() {
        lines.push(heading(format!("Education ({})", results.education.len())));
        for entry in &results.education {
            lines.push(Line::from(Span::styled(entry.institution.clone(), STYLE_ITEM)));
            lines.push(detail(entry.qualification()));
        }
        lines.push(blank());
    }

    if !results.work.is_empty() {
        lines.push(heading(format!("Work Experience ({})", results.work.len())));
        for job in &results.work {
            lines.push(Line::from(Span::styled(job.company.clone(), STYLE_ITEM)));
            lines.push(detail(job.position.clone()));
        }
    }

    lines
}
