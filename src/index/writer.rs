//! Index writer
//!
//! Persists a [`SuffixIndex`] as three flat files in a base directory:
//! - `<name>.dat`: raw corpus bytes
//! - `<name>.idx`: suffix count, 128-byte name field, sorted offsets
//! - `<name>.lcp`: LCP values aligned with the offsets
//!
//! All integers are little-endian u32.

use super::error::{IndexError, Result};
use super::suffix_array::SuffixIndex;
use super::types::*;
use crate::utils::encode_u32_slice;
use log::debug;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Entries buffered before each write call
const WRITE_CHUNK: usize = 1024;

/// Writes index files to a directory
pub struct IndexWriter;

impl IndexWriter {
    /// Write all three files for `index` into `dir`, creating it if needed
    pub fn write(dir: &Path, index: &SuffixIndex) -> Result<()> {
        fs::create_dir_all(dir).map_err(|e| IndexError::io(dir, e))?;

        Self::write_corpus(dir, index)?;
        Self::write_suffixes(dir, index)?;
        Self::write_lcp(dir, index)?;

        debug!(
            "Wrote index '{}' ({} suffixes) to {}",
            index.name(),
            index.len(),
            dir.display()
        );
        Ok(())
    }

    /// Write raw corpus bytes to `<name>.dat`
    fn write_corpus(dir: &Path, index: &SuffixIndex) -> Result<()> {
        let path = file_path(dir, index.name(), CORPUS_EXT);
        write_file(&path, |file| file.write_all(index.text()))
    }

    /// Write header and sorted offsets to `<name>.idx`
    fn write_suffixes(dir: &Path, index: &SuffixIndex) -> Result<()> {
        let path = file_path(dir, index.name(), SUFFIX_EXT);
        write_file(&path, |file| {
            file.write_all(&(index.len() as u32).to_le_bytes())?;
            file.write_all(&encode_name_field(index.name()))?;
            write_u32_chunks(file, index.suffixes())
        })
    }

    /// Write LCP values to `<name>.lcp`
    fn write_lcp(dir: &Path, index: &SuffixIndex) -> Result<()> {
        let path = file_path(dir, index.name(), LCP_EXT);
        write_file(&path, |file| write_u32_chunks(file, index.lcp()))
    }
}

/// Path of one of the three files of `name`
pub fn file_path(dir: &Path, name: &str, ext: &str) -> PathBuf {
    dir.join(format!("{}.{}", name, ext))
}

fn write_file<F>(path: &Path, body: F) -> Result<()>
where
    F: FnOnce(&mut BufWriter<File>) -> std::io::Result<()>,
{
    let run = || -> std::io::Result<()> {
        let mut file = BufWriter::with_capacity(65536, File::create(path)?);
        body(&mut file)?;
        file.flush()
    };
    run().map_err(|e| IndexError::io(path, e))
}

/// Write u32 values using a buffer to reduce system call overhead
fn write_u32_chunks(file: &mut BufWriter<File>, values: &[u32]) -> std::io::Result<()> {
    let mut buffer = Vec::with_capacity(WRITE_CHUNK * 4);
    for chunk in values.chunks(WRITE_CHUNK) {
        buffer.clear();
        encode_u32_slice(chunk, &mut buffer);
        file.write_all(&buffer)?;
    }
    Ok(())
}
