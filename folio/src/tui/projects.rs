//! Projects panel - the currently displayed project list.
//!
//! The list is either the profile's own projects or the result of the last
//! skill filter. Each project renders as:
//!
//! ```text
//! Title
//!   Description
//!   [Go] [Rust]          <- selectable tags
//!   GitHub: https://...
//! ```

use folio_common::{Project, Section};
use ratatui::text::{Line, Span};

use super::text::{blank, detail, heading, link, placeholder, TagRow};
use super::theme::{STYLE_DIM, STYLE_ITEM, STYLE_KEY, STYLE_LABEL};
use crate::state::ViewState;

/// Shown when a skill filter matched nothing
pub const NO_MATCHING_PROJECTS: &str = "No projects found. Try a different skill.";

pub fn projects_lines(state: &ViewState) -> Vec<Line<'static>> {
    let mut lines = vec![heading("Projects")];

    if state.is_projects_filtered {
        lines.push(Line::from(vec![
            Span::styled("Filtered by skill: ", STYLE_LABEL),
            Span::styled(state.active_filter_skill.clone(), STYLE_ITEM),
            Span::styled("  (", STYLE_DIM),
            Span::styled("A", STYLE_KEY),
            Span::styled(" show all)", STYLE_DIM),
        ]));
    }
    lines.push(blank());

    if state.projects.is_empty() {
        if state.is_projects_filtered {
            lines.push(Line::from(Span::styled(format!("  {NO_MATCHING_PROJECTS}"), STYLE_DIM)));
        } else {
            lines.push(placeholder(Section::Projects));
        }
        return lines;
    }

    let mut tags = TagRow::new(state.tag_cursor);
    for project in &state.projects {
        lines.extend(project_lines(project, &mut tags, true));
        lines.push(blank());
    }
    lines
}

/// One project block. Search results omit the links, as the API's search view does.
pub fn project_lines(project: &Project, tags: &mut TagRow, with_links: bool) -> Vec<Line<'static>> {
    let mut lines = vec![Line::from(Span::styled(project.title.clone(), STYLE_ITEM))];
    if !project.description.is_empty() {
        lines.push(detail(project.description.clone()));
    }
    if !project.skills.is_empty() {
        lines.push(tags.line(&project.skills));
    }
    if with_links {
        lines.extend(project.links.labelled().into_iter().map(|(label, url)| link(label, url)));
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::text::plain_text;
    use folio_common::ProjectLinks;

    fn project(title: &str, skills: &[&str]) -> Project {
        Project {
            title: title.into(),
            description: "A thing".into(),
            skills: skills.iter().map(ToString::to_string).collect(),
            links: ProjectLinks { github: None, demo: Some("https://demo.example".into()) },
        }
    }

    #[test]
    fn test_lists_projects_with_tags_and_links() {
        let state = ViewState { projects: vec![project("P1", &["Go", "Rust"])], ..Default::default() };
        let text = plain_text(&projects_lines(&state));

        assert!(text.contains("P1\n  A thing\n  [Go] [Rust]\n  Live Demo: https://demo.example\n"));
        assert!(!text.contains("Filtered by skill"));
    }

    #[test]
    fn test_unfiltered_empty_list_uses_placeholder() {
        let text = plain_text(&projects_lines(&ViewState::default()));
        assert!(text.contains("No projects listed"));
    }

    #[test]
    fn test_filtered_empty_list_suggests_other_skill() {
        let state = ViewState {
            is_projects_filtered: true,
            active_filter_skill: "COBOL".into(),
            ..Default::default()
        };
        let text = plain_text(&projects_lines(&state));
        assert!(text.contains("Filtered by skill: COBOL"));
        assert!(text.contains(NO_MATCHING_PROJECTS));
    }
}
