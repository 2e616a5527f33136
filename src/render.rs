//! The whole pipeline: resume data in, a single page PDF out.

use crate::config::Config;
use crate::document::Document;
use crate::error::ResumeError;
use crate::font::{FontSet, FontSource};
use crate::info::Info;
use crate::layout::{layout_footer, layout_resume, LayoutSummary, Margins};
use crate::model::{load_resume, ResumeData};
use crate::page::Page;
use crate::pagesize;
use crate::style::StyleProfile;
use chrono::Local;
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// What a call to [generate] produced
#[derive(Debug, Clone, PartialEq)]
pub struct RenderSummary {
    pub output: PathBuf,
    pub layout: LayoutSummary,
    pub fonts: FontSource,
}

/// Load the configured resume data, lay it out, and write the PDF
pub fn generate(config: &Config) -> Result<RenderSummary, ResumeError> {
    let resume = load_resume(config.data.as_deref(), config.mode)?;
    let (document, fonts, layout) = build_document(&resume, config);

    if layout.truncated {
        warn!(
            sections = ?layout.sections,
            "resume does not fit on one page, the remainder was left out"
        );
    }

    write_pdf(document, &config.output)?;
    info!(
        output = %config.output.display(),
        sections = layout.sections.len(),
        dividers = layout.dividers,
        "wrote resume"
    );

    Ok(RenderSummary {
        output: config.output.clone(),
        layout,
        fonts,
    })
}

/// Lay a resume out on a single letter page of a new document. Never fails: missing fonts
/// fall back to the built-in faces and content that does not fit is truncated.
pub fn build_document(resume: &ResumeData, config: &Config) -> (Document, FontSource, LayoutSummary) {
    let mut document = Document::default();
    document.set_info(Info::from_resume(resume));

    let fonts = FontSet::resolve(
        &mut document,
        &config.font_family,
        config.font_dir.as_deref(),
    );
    let profile = StyleProfile::resolve(config.style);
    debug!(style = ?profile.style, fonts = ?fonts.source, "laying out resume");

    let mut page = Page::new(pagesize::LETTER, Some(Margins::all(config.margin)));
    let layout = layout_resume(&document, &fonts, &profile, resume, &mut page);
    if config.timestamp {
        let footer = format!("Generated {}", Local::now().format("%Y-%m-%d"));
        layout_footer(&document, &fonts, &mut page, &footer);
    }
    document.add_page(page);

    (document, fonts.source, layout)
}

/// Serialise the document to `path`, creating or truncating the file
pub fn write_pdf(document: Document, path: &Path) -> Result<(), ResumeError> {
    let output_error = |source| ResumeError::OutputWrite {
        path: path.to_path_buf(),
        source,
    };
    let file = File::create(path).map_err(output_error)?;
    document.write(BufWriter::new(file)).map_err(output_error)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::model::BuildMode;

    #[test]
    fn sample_resume_fills_the_page_without_truncating() {
        let config = Config::default();
        let resume = ResumeData::sample();
        let (document, fonts, layout) = build_document(&resume, &config);
        assert_eq!(fonts, FontSource::Builtin);
        assert!(!layout.truncated, "{layout:?}");
        assert_eq!(layout.sections.len(), 7);
        assert_eq!(layout.dividers, 6);
        assert_eq!(document.pages.len(), 1);
        assert_eq!(
            document.info.and_then(|info| info.title),
            Some("Resume - Alex Morgan".to_string())
        );
    }

    #[test]
    fn footer_is_opt_in() {
        let resume = ResumeData::default();
        let (document, _, _) = build_document(&resume, &Config::default());
        assert!(document.pages[0].contents.is_empty());

        let config = Config {
            timestamp: true,
            ..Default::default()
        };
        let (document, _, _) = build_document(&resume, &config);
        let lines = document.pages[0].text_lines();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].starts_with("Generated "));
    }

    #[test]
    fn strict_mode_needs_data() {
        let config = Config {
            mode: BuildMode::Strict,
            ..Default::default()
        };
        assert!(matches!(generate(&config), Err(ResumeError::MissingData)));
    }
}
