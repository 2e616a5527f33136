//! The canonical, in-memory resume record.
//!
//! A [ResumeData] is built once per run by [build_resume] (or taken straight from
//! [ResumeData::sample]) and is read-only from then on. Every field is independently
//! optional: scalars are [None] when absent or blank, and sections are empty lists.
//! Nothing here enforces consistency between fields; the layout engine simply skips
//! whatever is missing.

mod builder;
mod sample;

pub use builder::*;

use serde::Serialize;

/// The top-level keys recognised in resume input. Anything else is ignored.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ResumeKey {
    Name,
    Title,
    Location,
    Phone,
    Email,
    Website,
    Linkedin,
    Github,
    Summary,
    Skills,
    Experience,
    Projects,
    Education,
    Certifications,
}

impl ResumeKey {
    pub const ALL: [ResumeKey; 14] = [
        ResumeKey::Name,
        ResumeKey::Title,
        ResumeKey::Location,
        ResumeKey::Phone,
        ResumeKey::Email,
        ResumeKey::Website,
        ResumeKey::Linkedin,
        ResumeKey::Github,
        ResumeKey::Summary,
        ResumeKey::Skills,
        ResumeKey::Experience,
        ResumeKey::Projects,
        ResumeKey::Education,
        ResumeKey::Certifications,
    ];

    /// The JSON key for this field
    pub fn as_str(self) -> &'static str {
        match self {
            ResumeKey::Name => "name",
            ResumeKey::Title => "title",
            ResumeKey::Location => "location",
            ResumeKey::Phone => "phone",
            ResumeKey::Email => "email",
            ResumeKey::Website => "website",
            ResumeKey::Linkedin => "linkedin",
            ResumeKey::Github => "github",
            ResumeKey::Summary => "summary",
            ResumeKey::Skills => "skills",
            ResumeKey::Experience => "experience",
            ResumeKey::Projects => "projects",
            ResumeKey::Education => "education",
            ResumeKey::Certifications => "certifications",
        }
    }
}

/// A normalised resume. All strings are trimmed; blank values have been dropped.
#[derive(Debug, Default, Clone, PartialEq, Serialize)]
pub struct ResumeData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub skills: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub experience: Vec<Experience>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub projects: Vec<Project>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub education: Vec<Education>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub certifications: Vec<String>,
}

/// One position held. Blank fields are empty strings.
#[derive(Debug, Default, Clone, PartialEq, Serialize)]
pub struct Experience {
    pub company: String,
    pub role: String,
    pub dates: String,
    pub bullets: Vec<String>,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize)]
pub struct Project {
    pub name: String,
    pub meta: String,
    pub bullets: Vec<String>,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize)]
pub struct Education {
    pub degree: String,
    pub school: String,
    pub dates: String,
}

impl ResumeData {
    /// True when the given top-level field holds nothing worth rendering
    pub fn is_missing(&self, key: ResumeKey) -> bool {
        match key {
            ResumeKey::Name => self.name.is_none(),
            ResumeKey::Title => self.title.is_none(),
            ResumeKey::Location => self.location.is_none(),
            ResumeKey::Phone => self.phone.is_none(),
            ResumeKey::Email => self.email.is_none(),
            ResumeKey::Website => self.website.is_none(),
            ResumeKey::Linkedin => self.linkedin.is_none(),
            ResumeKey::Github => self.github.is_none(),
            ResumeKey::Summary => self.summary.is_none(),
            ResumeKey::Skills => self.skills.is_empty(),
            ResumeKey::Experience => self.experience.is_empty(),
            ResumeKey::Projects => self.projects.is_empty(),
            ResumeKey::Education => self.education.is_empty(),
            ResumeKey::Certifications => self.certifications.is_empty(),
        }
    }

    /// True when every top-level field is missing
    pub fn is_empty(&self) -> bool {
        ResumeKey::ALL.iter().all(|&key| self.is_missing(key))
    }
}

impl Experience {
    pub fn is_blank(&self) -> bool {
        self.company.is_empty()
            && self.role.is_empty()
            && self.dates.is_empty()
            && self.bullets.is_empty()
    }
}

impl Project {
    pub fn is_blank(&self) -> bool {
        self.name.is_empty() && self.meta.is_empty() && self.bullets.is_empty()
    }
}

impl Education {
    pub fn is_blank(&self) -> bool {
        self.degree.is_empty() && self.school.is_empty() && self.dates.is_empty()
    }
}
