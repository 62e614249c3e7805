use std::{collections::HashSet, fmt};
use url::Url;

use super::{ContactMethod, Project, Skill, CONTACT_METHODS, PROJECTS, SKILLS};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentIssue {
    EmptyTitle { index: usize },
    DuplicateTitle(&'static str),
    NoImages(&'static str),
    BadLink { owner: &'static str, href: &'static str },
    SkillOutOfRange { name: &'static str, level: u8 },
}

impl fmt::Display for ContentIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyTitle { index } => write!(f, "project #{index} has an empty title"),
            Self::DuplicateTitle(title) => write!(f, "project title `{title}` is used more than once"),
            Self::NoImages(title) => write!(f, "project `{title}` has no screenshots"),
            Self::BadLink { owner, href } => write!(f, "`{owner}` links to unusable target `{href}`"),
            Self::SkillOutOfRange { name, level } => {
                write!(f, "skill `{name}` has level {level}, expected 0..=100")
            }
        }
    }
}

impl std::error::Error for ContentIssue {}

fn is_web_link(href: &str) -> bool {
    Url::parse(href)
        .map(|url| matches!(url.scheme(), "http" | "https") && url.host_str().is_some())
        .unwrap_or(false)
}

fn is_contact_link(href: &str) -> bool {
    match Url::parse(href) {
        Ok(url) if url.scheme() == "mailto" => url.path().contains('@'),
        Ok(url) => url.scheme() == "https" && url.host_str().is_some(),
        Err(_) => false,
    }
}

pub fn validate_records(
    projects: &'static [Project],
    contacts: &'static [ContactMethod],
    skills: &'static [Skill],
) -> Result<(), Vec<ContentIssue>> {
    let mut issues = Vec::new();
    let mut seen = HashSet::new();

    for (index, project) in projects.iter().enumerate() {
        if project.title.trim().is_empty() {
            issues.push(ContentIssue::EmptyTitle { index });
        } else if !seen.insert(project.title) {
            issues.push(ContentIssue::DuplicateTitle(project.title));
        }

        if project.images.is_empty() {
            issues.push(ContentIssue::NoImages(project.title));
        }

        for href in [project.github, project.demo] {
            if !is_web_link(href) {
                issues.push(ContentIssue::BadLink { owner: project.title, href });
            }
        }
    }

    for contact in contacts {
        if !is_contact_link(contact.href) {
            issues.push(ContentIssue::BadLink {
                owner: contact.title,
                href: contact.href,
            });
        }
    }

    for skill in skills {
        if skill.level > 100 {
            issues.push(ContentIssue::SkillOutOfRange {
                name: skill.name,
                level: skill.level,
            });
        }
    }

    if issues.is_empty() {
        Ok(())
    } else {
        Err(issues)
    }
}

pub fn validate() -> Result<(), Vec<ContentIssue>> {
    validate_records(PROJECTS, CONTACT_METHODS, SKILLS)
}
