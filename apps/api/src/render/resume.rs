use crate::models::resume::{ResumeRecord, DEFAULT_THEME_COLOR};
use crate::render::document::{Document, Node, Page, PageSize};
use crate::render::metadata::document_title;
use crate::render::styles;

pub const NAME_PLACEHOLDER: &str = "YOUR NAME";
pub const ROLE_PLACEHOLDER: &str = "DESIRED ROLE";
pub const COMPANY_PLACEHOLDER: &str = "Company";
pub const NO_EXPERIENCE_MARKER: &str = "No experience added.";

/// Splits the free-text skills field on commas, trimming each skill and
/// dropping empty segments.
pub fn split_skills(skills: &str) -> Vec<&str> {
    skills
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

/// Maps a record to a single A4 page: contact, skills and education on a
/// theme-colored left column, header and experience on the right.
pub fn render_resume(record: &ResumeRecord) -> Document {
    let theme = if record.theme_color.trim().is_empty() {
        DEFAULT_THEME_COLOR
    } else {
        record.theme_color.as_str()
    };

    Document {
        title: document_title(record),
        pages: vec![Page {
            size: PageSize::A4,
            style: styles::page(),
            children: vec![
                Node::view(styles::left_column(theme), left_column(record)),
                Node::view(styles::right_column(), right_column(record, theme)),
            ],
        }],
    }
}

fn left_column(record: &ResumeRecord) -> Vec<Node> {
    let mut nodes = Vec::new();

    if !record.photo_url.is_empty() {
        nodes.push(Node::image(styles::avatar(), record.photo_url.as_str()));
    }

    nodes.push(Node::text(styles::section_title_left(), "Contact"));
    for contact in [&record.email, &record.phone, &record.link] {
        if !contact.is_empty() {
            nodes.push(Node::text(styles::text_left(), contact.as_str()));
        }
    }

    nodes.push(Node::text(styles::section_title_left(), "Skills"));
    nodes.extend(
        split_skills(&record.skills)
            .into_iter()
            .map(|skill| Node::text(styles::text_left(), format!("• {skill}"))),
    );

    nodes.push(Node::text(styles::section_title_left(), "Education"));
    nodes.extend(record.education_entries.iter().map(|entry| {
        Node::view(
            styles::education_block(),
            vec![
                Node::text(styles::education_course(), entry.course.as_str()),
                Node::text(styles::text_left(), entry.institution.as_str()),
                Node::text(styles::text_left(), entry.year.as_str()),
            ],
        )
    }));

    nodes
}

fn right_column(record: &ResumeRecord, theme: &str) -> Vec<Node> {
    let mut header = vec![
        Node::text(styles::name(theme), or_placeholder(&record.name, NAME_PLACEHOLDER)),
        Node::text(styles::role(), or_placeholder(&record.role, ROLE_PLACEHOLDER)),
    ];
    if !record.summary.is_empty() {
        header.push(Node::text(styles::text_right(), record.summary.as_str()));
    }

    let mut experience = vec![Node::text(
        styles::section_title_right(),
        "Professional Experience",
    )];
    for entry in &record.experience_entries {
        let mut block = vec![Node::view(
            styles::experience_header(),
            vec![
                Node::text(
                    styles::experience_company(theme),
                    or_placeholder(&entry.company, COMPANY_PLACEHOLDER),
                ),
                Node::text(styles::experience_period(), entry.period.as_str()),
            ],
        )];
        if !entry.role.is_empty() {
            block.push(Node::text(styles::experience_role(), entry.role.as_str()));
        }
        if !entry.description.is_empty() {
            block.push(Node::text(styles::text_right(), entry.description.as_str()));
        }
        experience.push(Node::view(styles::experience_block(), block));
    }
    if record.experience_entries.is_empty() {
        experience.push(Node::text(styles::empty_marker(), NO_EXPERIENCE_MARKER));
    }

    vec![
        Node::view(styles::header_block(), header),
        Node::view(Default::default(), experience),
    ]
}

fn or_placeholder<'a>(value: &'a str, placeholder: &'a str) -> &'a str {
    if value.is_empty() {
        placeholder
    } else {
        value
    }
}
