//! Letters dataset: each distinct word of a word list next to its first
//! two letters, as CSV.

use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

pub const DEFAULT_WORDS_PATH: &str = "/usr/share/dict/words";
pub const DEFAULT_OUTPUT_PATH: &str = "letters.csv";

const HEADER: [&str; 3] = ["Word", "FirstLetter", "SecondLetter"];

#[derive(thiserror::Error, Debug)]
pub enum LettersError {
    #[error("failed to open word list {}: {source}", path.display())]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to create {}: {source}", path.display())]
    Create {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("word list and output are the same file: {}", path.display())]
    SameFile { path: PathBuf },

    #[error("failed to read word list: {0}")]
    Read(std::io::Error),

    #[error("failed to write CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("failed to flush CSV: {0}")]
    Flush(std::io::Error),
}

/// Lowercase every word and drop repeats, keeping first-occurrence order.
pub fn unique_lowercase<I>(words: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let mut seen = HashSet::new();
    words
        .into_iter()
        .map(|word| word.to_lowercase())
        .filter(|word| seen.insert(word.clone()))
        .collect()
}

/// The `n`th character of `word` as a string slice, or `""` past the end.
fn nth_char(word: &str, n: usize) -> &str {
    word.char_indices()
        .nth(n)
        .map(|(start, c)| &word[start..start + c.len_utf8()])
        .unwrap_or("")
}

/// Read a newline-separated word list and write the letters CSV.
///
/// Returns the number of data rows written (the header is not counted).
pub fn build_dataset<R: BufRead, W: Write>(words: R, output: W) -> Result<usize, LettersError> {
    let lines = words
        .lines()
        .collect::<Result<Vec<_>, _>>()
        .map_err(LettersError::Read)?;
    let words = unique_lowercase(lines);

    let mut writer = csv::Writer::from_writer(output);
    writer.write_record(HEADER)?;
    for word in &words {
        writer.write_record([word.as_str(), nth_char(word, 0), nth_char(word, 1)])?;
    }
    writer.flush().map_err(LettersError::Flush)?;

    Ok(words.len())
}

/// Build the dataset from the word list at `words_path` into `output_path`.
pub fn build_dataset_file(words_path: &Path, output_path: &Path) -> Result<usize, LettersError> {
    let words = File::open(words_path).map_err(|e| LettersError::Open {
        path: words_path.to_path_buf(),
        source: e,
    })?;
    // Creating the output truncates it, so it must not be the input
    if crate::build::same_path(words_path, output_path) {
        return Err(LettersError::SameFile {
            path: output_path.to_path_buf(),
        });
    }
    let output = File::create(output_path).map_err(|e| LettersError::Create {
        path: output_path.to_path_buf(),
        source: e,
    })?;

    build_dataset(BufReader::new(words), output)
}
