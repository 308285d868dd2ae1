//! Skills panel - every profile skill as a selectable tag.

use folio_common::{Profile, Section};
use ratatui::text::Line;

use super::text::{heading, placeholder, TagRow};

pub fn skills_lines(profile: &Profile, tag_cursor: usize) -> Vec<Line<'static>> {
    let mut lines = vec![heading("Skills")];
    if profile.skills.is_empty() {
        lines.push(placeholder(Section::Skills));
    } else {
        lines.push(TagRow::new(tag_cursor).line(&profile.skills));
    }
    lines
}
