use crate::font::DEFAULT_FAMILY;
use crate::model::BuildMode;
use crate::style::StyleName;
use crate::units::Pt;
use std::path::PathBuf;

/// File written when no output path is given
pub const DEFAULT_OUTPUT: &str = "resume_output.pdf";

/// Margin on every side of the page, 0.75in
pub const DEFAULT_MARGIN: Pt = Pt(54.0);

/// Everything one run of the generator needs to know
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// JSON resume data; `None` means use the built-in sample
    pub data: Option<PathBuf>,
    pub output: PathBuf,
    pub style: StyleName,
    pub mode: BuildMode,
    /// Searched for font files before `./fonts` and the working directory
    pub font_dir: Option<PathBuf>,
    pub font_family: String,
    pub margin: Pt,
    /// Draw a `Generated YYYY-MM-DD` footer
    pub timestamp: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            data: None,
            output: PathBuf::from(DEFAULT_OUTPUT),
            style: StyleName::default(),
            mode: BuildMode::FillDefaults,
            font_dir: None,
            font_family: DEFAULT_FAMILY.to_string(),
            margin: DEFAULT_MARGIN,
            timestamp: false,
        }
    }
}

impl Config {
    /// A config for rendering `data` strictly, everything else defaulted
    pub fn for_data<P: Into<PathBuf>>(data: P) -> Config {
        Config {
            data: Some(data.into()),
            mode: BuildMode::Strict,
            ..Default::default()
        }
    }

    /// The build mode used when none is requested: strict when there is data to be strict
    /// about, otherwise the sample fills everything in
    pub fn default_mode(data: Option<&PathBuf>) -> BuildMode {
        match data {
            Some(_) => BuildMode::Strict,
            None => BuildMode::FillDefaults,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn mode_defaults_follow_the_data_flag() {
        assert_eq!(Config::default().mode, BuildMode::FillDefaults);
        assert_eq!(Config::for_data("me.json").mode, BuildMode::Strict);
        assert_eq!(
            Config::default_mode(Some(&PathBuf::from("me.json"))),
            BuildMode::Strict
        );
        assert_eq!(Config::default_mode(None), BuildMode::FillDefaults);
    }
}
