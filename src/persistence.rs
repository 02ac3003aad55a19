// File: src/persistence.rs
use crate::config::WordlieConfig;
use crate::core::dictionary::MasterDictionary;
use crate::error::{Result, WordlieError};
use crate::loader::load_dictionary_file;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;
use tempfile::NamedTempFile;

/// Writes the parsed dictionary atomically: a temp file in the same directory
/// is persisted over `path`, so readers never see a half-written snapshot.
pub fn save_snapshot(dictionary: &MasterDictionary, path: &Path) -> Result<()> {
    let parent_dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent_dir)?;

    let temp_file = NamedTempFile::new_in(parent_dir)?;
    {
        let mut writer = BufWriter::new(&temp_file);
        bincode::serialize_into(&mut writer, dictionary)
            .map_err(|e| WordlieError::Snapshot(e.to_string()))?;
        writer.flush()?;
    }

    temp_file
        .persist(path)
        .map_err(|e| WordlieError::Io(e.error))?;
    Ok(())
}

pub fn load_snapshot(path: &Path) -> Result<MasterDictionary> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    bincode::deserialize_from(reader).map_err(|e| WordlieError::Snapshot(e.to_string()))
}

/// True when the snapshot exists and was written no earlier than the word list.
fn snapshot_is_fresh(snapshot: &Path, source: &Path) -> bool {
    let modified = |p: &Path| fs::metadata(p).and_then(|m| m.modified()).ok();
    match (modified(snapshot), modified(source)) {
        (Some(snap), Some(src)) => snap >= src,
        (Some(_), None) => true,
        _ => false,
    }
}

/// Loads the master dictionary, preferring a fresh snapshot over the text list.
/// Snapshot problems only cost a reparse; a missing or empty word list is fatal.
pub fn load_or_build(config: &WordlieConfig) -> Result<MasterDictionary> {
    let Some(snapshot_path) = &config.snapshot_path else {
        return load_dictionary_file(&config.dictionary_path);
    };

    if snapshot_is_fresh(snapshot_path, &config.dictionary_path) {
        match load_snapshot(snapshot_path) {
            Ok(dictionary) if !dictionary.is_empty() => {
                tracing::info!(
                    path = %snapshot_path.display(),
                    words = dictionary.len(),
                    "dictionary restored from snapshot"
                );
                return Ok(dictionary);
            }
            Ok(_) => tracing::warn!(path = %snapshot_path.display(), "snapshot is empty, rebuilding"),
            Err(e) => tracing::warn!(path = %snapshot_path.display(), error = %e, "snapshot unreadable, rebuilding"),
        }
    }

    let dictionary = load_dictionary_file(&config.dictionary_path)?;
    match save_snapshot(&dictionary, snapshot_path) {
        Ok(()) => tracing::info!(path = %snapshot_path.display(), "snapshot written"),
        Err(e) => tracing::warn!(path = %snapshot_path.display(), error = %e, "could not write snapshot"),
    }
    Ok(dictionary)
}
