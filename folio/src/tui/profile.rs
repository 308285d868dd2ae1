//! Profile panel - name, contact, education, work history and links.
//!
//! ```text
//! Ada Lovelace
//! Email: ada@example.com
//!
//! Education
//! University of London
//!   BSc in Mathematics
//!   1835 - 1837
//! ```

use folio_common::{EducationEntry, Profile, Section, WorkEntry};
use ratatui::text::{Line, Span};

use super::text::{blank, detail, dim_detail, heading, link, placeholder};
use super::theme::{STYLE_ITEM, STYLE_LABEL, STYLE_TEXT, STYLE_TITLE};

pub fn profile_lines(profile: &Profile) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(Span::styled(profile.name.clone(), STYLE_TITLE)),
        Line::from(vec![
            Span::styled("Email: ", STYLE_LABEL),
            Span::styled(profile.email.clone(), STYLE_TEXT),
        ]),
        blank(),
        heading("Education"),
    ];

    if profile.education.is_empty() {
        lines.push(placeholder(Section::Education));
    } else {
        for entry in &profile.education {
            lines.extend(education_lines(entry));
        }
    }

    lines.push(blank());
    lines.push(heading("Work Experience"));
    if profile.work.is_empty() {
        lines.push(placeholder(Section::Work));
    } else {
        for job in &profile.work {
            lines.extend(work_lines(job));
        }
    }

    lines.push(blank());
    lines.push(heading("Links"));
    let links = profile.links.labelled();
    if links.is_empty() {
        lines.push(placeholder(Section::Links));
    } else {
        lines.extend(links.into_iter().map(|(label, url)| link(label, url)));
    }

    lines
}

fn education_lines(entry: &EducationEntry) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(Span::styled(entry.institution.clone(), STYLE_ITEM)),
        detail(entry.qualification()),
        dim_detail(entry.span()),
    ];
    if let Some(description) = &entry.description {
        lines.push(detail(description.clone()));
    }
    lines
}

fn work_lines(job: &WorkEntry) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(Span::styled(job.company.clone(), STYLE_ITEM)),
        detail(job.position.clone()),
        dim_detail(job.span()),
    ];
    if let Some(description) = &job.description {
        lines.push(detail(description.clone()));
    }
    lines
}
