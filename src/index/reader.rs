//! Index reader
//!
//! Loads the three files written by [`IndexWriter`](super::writer::IndexWriter)
//! through memory maps and reassembles a [`SuffixIndex`] without rerunning the
//! build pipeline. Nothing is repaired: any disagreement between the files is
//! reported as a corrupt index.

use super::error::{IndexError, Result};
use super::suffix_array::SuffixIndex;
use super::types::*;
use super::writer::file_path;
use crate::utils::{decode_u32_slice, read_u32_le};
use log::{debug, info};
use memmap2::Mmap;
use std::fs::File;
use std::path::Path;

/// Reader for persisted indexes
pub struct IndexReader;

impl IndexReader {
    /// Load the index `name` from `dir`
    pub fn open(dir: &Path, name: &str) -> Result<SuffixIndex> {
        validate_name(name)?;

        let text = read_mapped(&file_path(dir, name, CORPUS_EXT))?;
        let suffixes = Self::read_suffixes(dir, name)?;
        let lcp = Self::read_lcp(dir, name)?;

        if suffixes.len() != lcp.len() {
            return Err(IndexError::corrupt(
                name,
                format!(
                    "{} offsets in .{} but {} values in .{}",
                    suffixes.len(),
                    SUFFIX_EXT,
                    lcp.len(),
                    LCP_EXT
                ),
            ));
        }

        let index = SuffixIndex::from_parts(name, text, suffixes, lcp)?;
        info!(
            "Loaded index '{}' ({} bytes, {} suffixes)",
            name,
            index.text().len(),
            index.len()
        );
        Ok(index)
    }

    /// Whether all three files of `name` exist in `dir`
    pub fn exists(dir: &Path, name: &str) -> bool {
        [CORPUS_EXT, SUFFIX_EXT, LCP_EXT]
            .iter()
            .all(|ext| file_path(dir, name, ext).is_file())
    }

    /// Read and validate `<name>.idx`
    fn read_suffixes(dir: &Path, name: &str) -> Result<Vec<TextPosition>> {
        let data = read_mapped(&file_path(dir, name, SUFFIX_EXT))?;

        if data.len() < IDX_HEADER_SIZE {
            return Err(IndexError::corrupt(
                name,
                format!(".{} file too small for its header", SUFFIX_EXT),
            ));
        }

        let found = decode_name_field(&data[4..IDX_HEADER_SIZE]);
        if found != name {
            return Err(IndexError::NameMismatch {
                expected: name.to_string(),
                found,
            });
        }

        let count = read_u32_le(&data, 0).unwrap_or(0) as usize;
        let body = &data[IDX_HEADER_SIZE..];
        if body.len() != count * 4 {
            return Err(IndexError::corrupt(
                name,
                format!(
                    "count field says {} offsets but .{} holds {} bytes of them",
                    count,
                    SUFFIX_EXT,
                    body.len()
                ),
            ));
        }

        decode_u32_slice(body)
            .ok_or_else(|| IndexError::corrupt(name, "ragged offset table"))
    }

    /// Read `<name>.lcp`
    fn read_lcp(dir: &Path, name: &str) -> Result<Vec<LcpValue>> {
        let data = read_mapped(&file_path(dir, name, LCP_EXT))?;
        decode_u32_slice(&data).ok_or_else(|| {
            IndexError::corrupt(
                name,
                format!(".{} size {} is not a multiple of 4", LCP_EXT, data.len()),
            )
        })
    }
}

/// Read a whole file through a memory map
///
/// Empty files are not mapped.
fn read_mapped(path: &Path) -> Result<Vec<u8>> {
    let file = File::open(path).map_err(|e| IndexError::io(path, e))?;
    let len = file
        .metadata()
        .map_err(|e| IndexError::io(path, e))?
        .len();
    if len == 0 {
        return Ok(Vec::new());
    }

    let mmap = unsafe { Mmap::map(&file) }.map_err(|e| IndexError::io(path, e))?;
    debug!("Mapped {} ({} bytes)", path.display(), mmap.len());
    Ok(mmap.to_vec())
}
