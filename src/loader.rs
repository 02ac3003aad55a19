// File: src/loader.rs
use crate::core::dictionary::MasterDictionary;
use crate::error::{Result, WordlieError};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Reads one word per line, top to bottom. Line order is the frequency rank.
/// Lines are trimmed on both ends, as player input is. Blank lines never
/// reach the dictionary; repeated words keep their first rank.
pub fn load_word_list<R: BufRead>(reader: R) -> io::Result<MasterDictionary> {
    let mut dictionary = MasterDictionary::new();
    for (line_no, line) in reader.lines().enumerate() {
        let line = line?;
        let word = line.trim();
        if word.is_empty() {
            tracing::debug!(line = line_no + 1, "skipping blank line");
            continue;
        }
        if dictionary.add_word(word).is_none() {
            tracing::debug!(line = line_no + 1, word, "skipping duplicate word");
        }
    }
    Ok(dictionary)
}

pub fn load_dictionary_file(path: &Path) -> Result<MasterDictionary> {
    let file = File::open(path)?;
    let dictionary = load_word_list(BufReader::new(file))?;
    if dictionary.is_empty() {
        return Err(WordlieError::EmptyDictionary { path: path.to_path_buf() });
    }

    tracing::info!(
        path = %path.display(),
        words = dictionary.len(),
        letters = dictionary.letters_present().len(),
        "dictionary loaded"
    );
    Ok(dictionary)
}
