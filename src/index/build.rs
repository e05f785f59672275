use crate::index::reader::IndexReader;
use crate::index::suffix_array::SuffixIndex;
use crate::index::types::BuildOptions;
use crate::index::writer::IndexWriter;
use crate::utils::progress::spinner;
use anyhow::{Context, Result};
use log::{info, warn};
use std::fs;
use std::path::Path;

/// Derive an index name from a corpus file name
pub fn default_name(corpus_path: &Path) -> Option<String> {
    corpus_path
        .file_stem()
        .and_then(|s| s.to_str())
        .map(|s| s.to_string())
}

/// Build an index from a corpus file and store it in `index_dir`
pub fn build_index(
    corpus_path: &Path,
    name: &str,
    index_dir: &Path,
    options: &BuildOptions,
) -> Result<SuffixIndex> {
    build_index_with_progress(corpus_path, name, index_dir, options, false)
}

/// Build an index with optional silent mode
pub fn build_index_with_progress(
    corpus_path: &Path,
    name: &str,
    index_dir: &Path,
    options: &BuildOptions,
    silent: bool,
) -> Result<SuffixIndex> {
    if !silent {
        println!("Indexing: {}", corpus_path.display());
    }

    // Phase 1: Load the corpus
    let text = fs::read(corpus_path)
        .with_context(|| format!("Failed to read corpus {}", corpus_path.display()))?;
    info!("Read {} bytes from {}", text.len(), corpus_path.display());

    if IndexReader::exists(index_dir, name) {
        warn!("Overwriting existing index '{}'", name);
    }

    // Phase 2: Sort suffixes and compute LCP values
    let sort_spinner = spinner("Sorting suffixes...", silent);
    let index = SuffixIndex::build(name, text, options)
        .with_context(|| format!("Failed to build index '{}'", name))?;
    if let Some(spinner) = sort_spinner {
        spinner.finish_with_message(format!("Sorted {} suffixes", index.len()));
    }

    // Phase 3: Persist
    let write_spinner = spinner("Writing index files...", silent);
    IndexWriter::write(index_dir, &index)
        .with_context(|| format!("Failed to write index '{}'", name))?;
    if let Some(spinner) = write_spinner {
        spinner.finish_with_message("Index complete");
    }

    if !silent {
        println!("Index stored at: {}", index_dir.display());
    }

    Ok(index)
}
