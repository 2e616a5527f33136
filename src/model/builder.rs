use super::{Education, Experience, Project, ResumeData, ResumeKey};
use crate::error::ResumeError;
use serde_json::{Map, Value};
use std::path::Path;
use tracing::debug;

static NULL: Value = Value::Null;

/// How missing input is treated while building a [ResumeData]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum BuildMode {
    /// Copy only what the input provides; missing sections stay empty and are skipped
    #[default]
    Strict,
    /// Substitute the built-in sample value for every missing or blank top-level field
    FillDefaults,
}

/// Read, parse, and normalise resume data from disk. With no path, strict mode fails with
/// [ResumeError::MissingData] and fill-defaults mode yields the built-in sample.
pub fn load_resume(path: Option<&Path>, mode: BuildMode) -> Result<ResumeData, ResumeError> {
    let Some(path) = path else {
        return match mode {
            BuildMode::Strict => Err(ResumeError::MissingData),
            BuildMode::FillDefaults => build_resume(&Value::Object(Map::new()), mode),
        };
    };

    let text = std::fs::read_to_string(path).map_err(|source| ResumeError::InputNotFound {
        path: path.to_path_buf(),
        source,
    })?;
    let raw: Value = serde_json::from_str(&text).map_err(|source| ResumeError::InvalidJson {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), ?mode, "loaded resume data");

    build_resume(&raw, mode)
}

/// Build a [ResumeData] from a parsed JSON value. The value must be an object; any subset of
/// the recognised keys may be present and unrecognised keys are ignored. Values of the wrong
/// shape fail with [ResumeError::MalformedInput] naming the offending key.
pub fn build_resume(raw: &Value, mode: BuildMode) -> Result<ResumeData, ResumeError> {
    let object = raw
        .as_object()
        .ok_or_else(|| ResumeError::malformed("<root>", "expected a JSON object"))?;
    let field = |key: ResumeKey| object.get(key.as_str()).unwrap_or(&NULL);

    let mut parsed = ResumeData {
        name: scalar(ResumeKey::Name.as_str(), field(ResumeKey::Name))?,
        title: scalar(ResumeKey::Title.as_str(), field(ResumeKey::Title))?,
        location: scalar(ResumeKey::Location.as_str(), field(ResumeKey::Location))?,
        phone: scalar(ResumeKey::Phone.as_str(), field(ResumeKey::Phone))?,
        email: scalar(ResumeKey::Email.as_str(), field(ResumeKey::Email))?,
        website: scalar(ResumeKey::Website.as_str(), field(ResumeKey::Website))?,
        linkedin: scalar(ResumeKey::Linkedin.as_str(), field(ResumeKey::Linkedin))?,
        github: scalar(ResumeKey::Github.as_str(), field(ResumeKey::Github))?,
        summary: scalar(ResumeKey::Summary.as_str(), field(ResumeKey::Summary))?,
        skills: string_list(ResumeKey::Skills.as_str(), field(ResumeKey::Skills))?,
        experience: object_list(
            ResumeKey::Experience.as_str(),
            field(ResumeKey::Experience),
            |key, entry| {
                Ok(Experience {
                    company: entry_text(key, entry, "company")?,
                    role: entry_text(key, entry, "role")?,
                    dates: entry_text(key, entry, "dates")?,
                    bullets: entry_list(key, entry, "bullets")?,
                })
            },
        )?,
        projects: object_list(
            ResumeKey::Projects.as_str(),
            field(ResumeKey::Projects),
            |key, entry| {
                Ok(Project {
                    name: entry_text(key, entry, "name")?,
                    meta: entry_text(key, entry, "meta")?,
                    bullets: entry_list(key, entry, "bullets")?,
                })
            },
        )?,
        education: object_list(
            ResumeKey::Education.as_str(),
            field(ResumeKey::Education),
            |key, entry| {
                Ok(Education {
                    degree: entry_text(key, entry, "degree")?,
                    school: entry_text(key, entry, "school")?,
                    dates: entry_text(key, entry, "dates")?,
                })
            },
        )?,
        certifications: string_list(
            ResumeKey::Certifications.as_str(),
            field(ResumeKey::Certifications),
        )?,
    };

    // an entry with nothing in it counts as absent, like a blank scalar
    parsed.experience.retain(|job| !job.is_blank());
    parsed.projects.retain(|project| !project.is_blank());
    parsed.education.retain(|school| !school.is_blank());

    Ok(match mode {
        BuildMode::Strict => parsed,
        BuildMode::FillDefaults => fill_defaults(parsed, ResumeData::sample()),
    })
}

/// Replace every missing top-level field of `resume` with the one from `sample`
fn fill_defaults(resume: ResumeData, sample: ResumeData) -> ResumeData {
    fn list<T>(value: Vec<T>, sample: Vec<T>) -> Vec<T> {
        if value.is_empty() {
            sample
        } else {
            value
        }
    }

    for key in ResumeKey::ALL {
        if resume.is_missing(key) {
            debug!(key = key.as_str(), "filling missing field from sample");
        }
    }

    ResumeData {
        name: resume.name.or(sample.name),
        title: resume.title.or(sample.title),
        location: resume.location.or(sample.location),
        phone: resume.phone.or(sample.phone),
        email: resume.email.or(sample.email),
        website: resume.website.or(sample.website),
        linkedin: resume.linkedin.or(sample.linkedin),
        github: resume.github.or(sample.github),
        summary: resume.summary.or(sample.summary),
        skills: list(resume.skills, sample.skills),
        experience: list(resume.experience, sample.experience),
        projects: list(resume.projects, sample.projects),
        education: list(resume.education, sample.education),
        certifications: list(resume.certifications, sample.certifications),
    }
}

/// Scalars are best-effort text: strings are trimmed, numbers and booleans use their JSON
/// form, and null or blank values are absent
fn scalar(key: &str, value: &Value) -> Result<Option<String>, ResumeError> {
    let text = match value {
        Value::Null => return Ok(None),
        Value::String(s) => s.trim().to_string(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Array(_) | Value::Object(_) => {
            return Err(ResumeError::malformed(key, "expected a string"));
        }
    };
    Ok((!text.is_empty()).then_some(text))
}

fn string_list(key: &str, value: &Value) -> Result<Vec<String>, ResumeError> {
    match value {
        Value::Null => Ok(Vec::new()),
        Value::Array(items) => {
            let mut out = Vec::with_capacity(items.len());
            for (i, item) in items.iter().enumerate() {
                if let Some(text) = scalar(&format!("{key}[{i}]"), item)? {
                    out.push(text);
                }
            }
            Ok(out)
        }
        _ => Err(ResumeError::malformed(key, "expected a list of strings")),
    }
}

fn object_list<T, F>(key: &str, value: &Value, mut parse: F) -> Result<Vec<T>, ResumeError>
where
    F: FnMut(&str, &Map<String, Value>) -> Result<T, ResumeError>,
{
    match value {
        Value::Null => Ok(Vec::new()),
        Value::Array(items) => items
            .iter()
            .enumerate()
            .map(|(i, item)| {
                let item_key = format!("{key}[{i}]");
                let entry = item
                    .as_object()
                    .ok_or_else(|| ResumeError::malformed(&item_key, "expected an object"))?;
                parse(&item_key, entry)
            })
            .collect(),
        _ => Err(ResumeError::malformed(key, "expected a list of objects")),
    }
}

fn entry_text(key: &str, entry: &Map<String, Value>, field: &str) -> Result<String, ResumeError> {
    let value = entry.get(field).unwrap_or(&NULL);
    Ok(scalar(&format!("{key}.{field}"), value)?.unwrap_or_default())
}

fn entry_list(
    key: &str,
    entry: &Map<String, Value>,
    field: &str,
) -> Result<Vec<String>, ResumeError> {
    let value = entry.get(field).unwrap_or(&NULL);
    string_list(&format!("{key}.{field}"), value)
}

#[cfg(test)]
mod test {
    use super::*;
    use serde_json::json;

    fn malformed_key(result: Result<ResumeData, ResumeError>) -> String {
        match result {
            Err(ResumeError::MalformedInput { key, .. }) => key,
            other => panic!("expected malformed input, got {other:?}"),
        }
    }

    #[test]
    fn strict_copies_only_what_is_present() {
        let raw = json!({
            "name": "  Jane Doe ",
            "email": "jane@x.com",
            "skills": ["Go", " ", "SQL"],
            "favourite_colour": "green",
        });
        let resume = build_resume(&raw, BuildMode::Strict).expect("valid input");
        assert_eq!(resume.name.as_deref(), Some("Jane Doe"));
        assert_eq!(resume.email.as_deref(), Some("jane@x.com"));
        assert_eq!(resume.skills, vec!["Go", "SQL"]);
        assert!(resume.summary.is_none());
        assert!(resume.experience.is_empty());
        assert!(resume.certifications.is_empty());
    }

    #[test]
    fn blank_and_null_scalars_are_absent() {
        let raw = json!({ "name": "   ", "title": null, "phone": 5551234 });
        let resume = build_resume(&raw, BuildMode::Strict).expect("valid input");
        assert_eq!(resume.name, None);
        assert_eq!(resume.title, None);
        assert_eq!(resume.phone.as_deref(), Some("5551234"));
    }

    #[test]
    fn fill_defaults_only_replaces_missing_fields() {
        let raw = json!({ "name": "Jane Doe", "skills": [] });
        let resume = build_resume(&raw, BuildMode::FillDefaults).expect("valid input");
        let sample = ResumeData::sample();
        assert_eq!(resume.name.as_deref(), Some("Jane Doe"));
        assert_eq!(resume.title, sample.title);
        assert_eq!(resume.skills, sample.skills);
        assert_eq!(resume.experience, sample.experience);
        assert_eq!(resume.certifications, sample.certifications);
    }

    #[test]
    fn blank_entries_count_as_missing() {
        let raw = json!({
            "experience": [{}, { "company": "  ", "bullets": [""] }],
            "projects": [{ "name": " " }],
            "education": [{ "degree": "BSc" }, {}],
        });

        let strict = build_resume(&raw, BuildMode::Strict).expect("valid input");
        assert!(strict.is_missing(ResumeKey::Experience));
        assert!(strict.is_missing(ResumeKey::Projects));
        assert_eq!(strict.education.len(), 1);
        assert_eq!(strict.education[0].degree, "BSc");

        let filled = build_resume(&raw, BuildMode::FillDefaults).expect("valid input");
        let sample = ResumeData::sample();
        assert_eq!(filled.experience, sample.experience);
        assert_eq!(filled.projects, sample.projects);
        assert_eq!(filled.education, strict.education);
    }

    #[test]
    fn fill_defaults_of_nothing_is_the_sample() {
        let resume = build_resume(&json!({}), BuildMode::FillDefaults).expect("valid input");
        assert_eq!(resume, ResumeData::sample());
    }

    #[test]
    fn strict_of_nothing_is_empty() {
        let resume = build_resume(&json!({}), BuildMode::Strict).expect("valid input");
        assert!(resume.is_empty());
    }

    #[test]
    fn entries_are_parsed_in_order() {
        let raw = json!({
            "experience": [
                { "company": "Acme", "role": "Engineer", "dates": "2020 - 2023",
                  "bullets": ["Shipped things", ""] },
                { "company": "Initech" },
            ],
            "projects": [{ "name": "resume-pdf", "meta": "Rust", "bullets": ["Lays out pages"] }],
            "education": [{ "degree": "BSc", "school": "State U", "dates": 2019 }],
        });
        let resume = build_resume(&raw, BuildMode::Strict).expect("valid input");
        assert_eq!(resume.experience.len(), 2);
        assert_eq!(resume.experience[0].bullets, vec!["Shipped things"]);
        assert_eq!(resume.experience[1].company, "Initech");
        assert!(resume.experience[1].role.is_empty());
        assert_eq!(resume.projects[0].meta, "Rust");
        assert_eq!(resume.education[0].dates, "2019");
    }

    #[test]
    fn wrong_shapes_name_the_offending_key() {
        assert_eq!(
            malformed_key(build_resume(&json!([1, 2]), BuildMode::Strict)),
            "<root>"
        );
        assert_eq!(
            malformed_key(build_resume(&json!({ "skills": "Go" }), BuildMode::Strict)),
            "skills"
        );
        assert_eq!(
            malformed_key(build_resume(
                &json!({ "experience": ["Acme"] }),
                BuildMode::Strict
            )),
            "experience[0]"
        );
        assert_eq!(
            malformed_key(build_resume(
                &json!({ "projects": [{ "bullets": [["nested"]] }] }),
                BuildMode::Strict
            )),
            "projects[0].bullets[0]"
        );
        assert_eq!(
            malformed_key(build_resume(
                &json!({ "name": { "first": "Jane" } }),
                BuildMode::FillDefaults
            )),
            "name"
        );
    }

    #[test]
    fn strict_mode_requires_a_path() {
        assert!(matches!(
            load_resume(None, BuildMode::Strict),
            Err(ResumeError::MissingData)
        ));
        let sample = load_resume(None, BuildMode::FillDefaults).expect("sample resume");
        assert_eq!(sample, ResumeData::sample());
    }
}
