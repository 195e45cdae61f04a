use std::path::{Path, PathBuf};

use super::paths::output_name;

/// A source document discovered in the working directory, paired with the
/// output page it produces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    /// Entry name as listed in the directory (e.g. "intro.markdown")
    pub name: String,
    /// Path to the source document
    pub source_path: PathBuf,
    /// Path the output page is written to (e.g. ".../intro.html")
    pub output_path: PathBuf,
}

impl Document {
    /// Pair a directory entry with its output page, if its name carries the
    /// source suffix.
    pub fn from_entry(
        dir: &Path,
        name: &str,
        source_suffix: &str,
        output_suffix: &str,
    ) -> Option<Self> {
        let output = output_name(name, source_suffix, output_suffix)?;
        Some(Self {
            name: name.to_string(),
            source_path: dir.join(name),
            output_path: dir.join(output),
        })
    }
}

/// List the documents in `dir` whose entry name ends with `source_suffix`.
///
/// The scan is not recursive, and entries are matched on name alone: a
/// subdirectory named `drafts.markdown` is returned like any file. Order is
/// whatever the directory listing yields.
pub fn discover_documents(
    dir: &Path,
    source_suffix: &str,
    output_suffix: &str,
) -> std::io::Result<Vec<Document>> {
    let mut documents = Vec::new();

    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        let file_name = entry.file_name();

        // Names that aren't valid UTF-8 can't carry the suffix
        let Some(name) = file_name.to_str() else {
            continue;
        };

        if let Some(doc) = Document::from_entry(dir, name, source_suffix, output_suffix) {
            documents.push(doc);
        }
    }

    Ok(documents)
}
