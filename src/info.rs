use crate::model::ResumeData;
use crate::refs::{ObjectReferences, RefType};
use chrono::{DateTime, Datelike, FixedOffset, Local, Timelike};
use pdf_writer::{Date as PDate, Pdf, TextStr};

/// Document metadata written to the PDF info dictionary
#[derive(Default, Debug, Clone, PartialEq)]
pub struct Info {
    pub title: Option<String>,
    pub author: Option<String>,
    pub subject: Option<String>,
    /// Comma separated, as Adobe Acrobat suggests
    pub keywords: Option<String>,
}

impl Info {
    /// Derive metadata from a resume: the name becomes the title and author, the
    /// professional title the subject, and the skills the keywords. Absent fields are
    /// simply left out of the info dictionary.
    pub fn from_resume(resume: &ResumeData) -> Info {
        let title = match &resume.name {
            Some(name) => format!("Resume - {name}"),
            None => "Resume".to_string(),
        };
        let keywords = resume
            .skills
            .iter()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(", ");

        Info {
            title: Some(title),
            author: resume.name.clone(),
            subject: resume.title.clone(),
            keywords: (!keywords.is_empty()).then_some(keywords),
        }
    }

    pub(crate) fn write(&self, refs: &mut ObjectReferences, writer: &mut Pdf) {
        let id = refs.gen(RefType::Info);
        let mut info = writer.document_info(id);

        if let Some(title) = &self.title {
            info.title(TextStr(title.as_str()));
        }
        if let Some(author) = &self.author {
            info.author(TextStr(author.as_str()));
        }
        if let Some(subject) = &self.subject {
            info.subject(TextStr(subject.as_str()));
        }
        if let Some(keywords) = &self.keywords {
            info.keywords(TextStr(keywords.as_str()));
        }
        info.creator(TextStr(concat!(
            env!("CARGO_PKG_NAME"),
            " v",
            env!("CARGO_PKG_VERSION")
        )));

        let now = Local::now();
        info.creation_date(pdf_date(&now.fixed_offset()));
    }
}

/// Convert a timestamp into a PDF date, preserving its UTC offset
fn pdf_date(at: &DateTime<FixedOffset>) -> PDate {
    let (offset_hours, offset_minutes) = utc_offset(at);
    PDate::new(at.year() as u16)
        .month(at.month() as u8)
        .day(at.day() as u8)
        .hour(at.hour() as u8)
        .minute(at.minute() as u8)
        .second(at.second() as u8)
        .utc_offset_hour(offset_hours)
        .utc_offset_minute(offset_minutes)
}

/// Split a UTC offset into signed hours and unsigned minutes
fn utc_offset(at: &DateTime<FixedOffset>) -> (i8, u8) {
    let offset = at.offset().local_minus_utc();
    let hours = offset / (60 * 60);
    let minutes = ((offset - (hours * (60 * 60))) / 60).abs();
    (hours as i8, minutes as u8)
}
