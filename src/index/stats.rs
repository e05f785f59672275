use crate::index::reader::IndexReader;
use crate::index::suffix_array::SuffixIndex;
use crate::index::types::{CORPUS_EXT, LCP_EXT, SUFFIX_EXT};
use crate::index::writer::file_path;
use crate::utils::list_index_names;
use anyhow::{Context, Result};
use serde::Serialize;
use std::path::Path;

/// Summary numbers for one index
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IndexStats {
    pub name: String,
    pub corpus_bytes: usize,
    pub suffix_count: usize,
    pub distinct_first_bytes: usize,
    pub max_lcp: u32,
    pub mean_lcp: f64,
}

impl IndexStats {
    pub fn compute(index: &SuffixIndex) -> Self {
        let text = index.text();
        let mut seen = [false; 256];
        for &pos in index.suffixes() {
            seen[text[pos as usize] as usize] = true;
        }

        let lcp = index.lcp();
        let max_lcp = lcp.iter().copied().max().unwrap_or(0);
        let mean_lcp = if lcp.len() > 1 {
            lcp.iter().map(|&v| v as f64).sum::<f64>() / (lcp.len() - 1) as f64
        } else {
            0.0
        };

        Self {
            name: index.name().to_string(),
            corpus_bytes: text.len(),
            suffix_count: index.len(),
            distinct_first_bytes: seen.iter().filter(|&&s| s).count(),
            max_lcp,
            mean_lcp,
        }
    }
}

/// Display index statistics
pub fn show_stats(index_dir: &Path, name: &str) -> Result<()> {
    let index = IndexReader::open(index_dir, name)
        .with_context(|| format!("Failed to open index '{}'", name))?;
    let stats = IndexStats::compute(&index);

    println!("Index Statistics");
    println!("================");
    println!();
    println!("Name:             {}", stats.name);
    println!("Index location:   {}", index_dir.display());
    println!("Corpus size:      {}", format_size(stats.corpus_bytes as u64));
    println!("Suffixes:         {}", stats.suffix_count);
    println!("Distinct starts:  {}", stats.distinct_first_bytes);
    println!("Longest LCP:      {}", stats.max_lcp);
    println!("Mean LCP:         {:.2}", stats.mean_lcp);

    println!();
    println!("Files:");
    for ext in [CORPUS_EXT, SUFFIX_EXT, LCP_EXT] {
        let path = file_path(index_dir, name, ext);
        let size = std::fs::metadata(&path).map(|m| m.len()).unwrap_or(0);
        println!("  {:10} {}", format!("{}.{}", name, ext), format_size(size));
    }

    Ok(())
}

/// List all indexes in a directory
pub fn list_indexes(index_dir: &Path) -> Result<()> {
    let names = list_index_names(index_dir)?;

    if names.is_empty() {
        println!("No indexes found in {}", index_dir.display());
        return Ok(());
    }

    println!("Indexes");
    println!("=======");
    println!();

    for name in names {
        let status = if IndexReader::exists(index_dir, &name) {
            ""
        } else {
            " [incomplete]"
        };
        println!("  {}{}", name, status);
    }

    Ok(())
}

/// Format byte size to human readable
pub fn format_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if bytes >= GB {
        format!("{:.2} GB", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.2} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.2} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} bytes", bytes)
    }
}
