use super::{BuiltinFont, Font, Weight};
use crate::{document::Document, error::FontWarning};
use id_arena::Id;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Family used when none is configured
pub const DEFAULT_FAMILY: &str = "Inter";

/// Where the faces of a [FontSet] came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FontSource {
    /// Both faces were loaded from these files and will be embedded
    Embedded { regular: PathBuf, bold: PathBuf },
    /// The standard Helvetica pair
    Builtin,
}

/// The regular and bold faces every text role draws from, already added to a document
#[derive(Debug, Clone)]
pub struct FontSet {
    pub regular: Id<Font>,
    pub bold: Id<Font>,
    pub source: FontSource,
}

impl FontSet {
    /// Add the built-in Helvetica pair to the document
    pub fn builtin(doc: &mut Document) -> FontSet {
        FontSet {
            regular: doc.add_font(Font::builtin(BuiltinFont::Helvetica)),
            bold: doc.add_font(Font::builtin(BuiltinFont::HelveticaBold)),
            source: FontSource::Builtin,
        }
    }

    /// Try to load `family` from disk, falling back to the built-in faces when either weight
    /// is missing or unusable. Never fails: the reason for a fallback is only logged.
    ///
    /// The regular face is looked for as `<family>-Regular.ttf` then `<family>.ttf`, the
    /// bold face as `<family>-Bold.ttf`, each in `font_dir` (when given), `./fonts`, and the
    /// working directory, in that order.
    pub fn resolve(doc: &mut Document, family: &str, font_dir: Option<&Path>) -> FontSet {
        let dirs = search_dirs(font_dir);
        let regular = find_face(
            &dirs,
            &[format!("{family}-Regular.ttf"), format!("{family}.ttf")],
        );
        let bold = find_face(&dirs, &[format!("{family}-Bold.ttf")]);

        match (regular, bold) {
            (Ok((regular_path, regular)), Ok((bold_path, bold))) => {
                debug!(
                    family,
                    regular = %regular_path.display(),
                    bold = %bold_path.display(),
                    "embedding font family"
                );
                FontSet {
                    regular: doc.add_font(regular),
                    bold: doc.add_font(bold),
                    source: FontSource::Embedded {
                        regular: regular_path,
                        bold: bold_path,
                    },
                }
            }
            (regular, bold) => {
                for warning in [regular.err(), bold.err()].into_iter().flatten() {
                    debug!(family, %warning, "falling back to built-in Helvetica");
                }
                FontSet::builtin(doc)
            }
        }
    }

    pub fn get(&self, weight: Weight) -> Id<Font> {
        match weight {
            Weight::Regular => self.regular,
            Weight::Bold => self.bold,
        }
    }
}

fn search_dirs(font_dir: Option<&Path>) -> Vec<PathBuf> {
    font_dir
        .map(Path::to_path_buf)
        .into_iter()
        .chain([PathBuf::from("fonts"), PathBuf::from(".")])
        .collect()
}

/// The first candidate file that exists in any directory is loaded; an existing but broken
/// file is reported rather than skipped over
fn find_face(dirs: &[PathBuf], candidates: &[String]) -> Result<(PathBuf, Font), FontWarning> {
    for dir in dirs {
        for file in candidates {
            let path = dir.join(file);
            if path.is_file() {
                return load_face(&path).map(|font| (path, font));
            }
        }
    }
    Err(FontWarning::NotFound {
        file: candidates.join(" or "),
    })
}

fn load_face(path: &Path) -> Result<Font, FontWarning> {
    let bytes = std::fs::read(path).map_err(|source| FontWarning::Unreadable {
        path: path.to_path_buf(),
        source,
    })?;
    let font = Font::load(bytes).map_err(|source| FontWarning::Invalid {
        path: path.to_path_buf(),
        source,
    })?;
    if !font.has_unicode_cmap() {
        return Err(FontWarning::NoUnicodeCmap {
            path: path.to_path_buf(),
        });
    }
    Ok(font)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn missing_family_falls_back_to_builtin() {
        let dir = tempfile::tempdir().expect("temp dir");
        let mut doc = Document::default();
        let fonts = FontSet::resolve(&mut doc, "NoSuchFamily", Some(dir.path()));
        assert_eq!(fonts.source, FontSource::Builtin);
        assert!(!doc.fonts[fonts.regular].is_embedded());
        assert!(!doc.fonts[fonts.bold].is_embedded());
        assert_ne!(fonts.regular, fonts.bold);
    }

    #[test]
    fn corrupt_font_files_fall_back_to_builtin() {
        let dir = tempfile::tempdir().expect("temp dir");
        std::fs::write(dir.path().join("Broken-Regular.ttf"), b"not a font").expect("write");
        std::fs::write(dir.path().join("Broken-Bold.ttf"), b"not a font").expect("write");

        let warning = find_face(&[dir.path().to_path_buf()], &["Broken-Bold.ttf".to_string()])
            .err()
            .expect("broken font is rejected");
        assert!(matches!(warning, FontWarning::Invalid { .. }));

        let mut doc = Document::default();
        let fonts = FontSet::resolve(&mut doc, "Broken", Some(dir.path()));
        assert_eq!(fonts.source, FontSource::Builtin);
    }

    #[test]
    fn configured_directory_is_searched_first() {
        let dirs = search_dirs(Some(Path::new("/opt/fonts")));
        assert_eq!(
            dirs,
            vec![
                PathBuf::from("/opt/fonts"),
                PathBuf::from("fonts"),
                PathBuf::from(".")
            ]
        );
        assert_eq!(search_dirs(None).len(), 2);
    }

    #[test]
    fn weights_map_to_faces() {
        let mut doc = Document::default();
        let fonts = FontSet::builtin(&mut doc);
        assert_eq!(fonts.get(Weight::Regular), fonts.regular);
        assert_eq!(fonts.get(Weight::Bold), fonts.bold);
    }
}
