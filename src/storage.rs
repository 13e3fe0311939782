// File: ./src/storage.rs
//! File access helpers shared by the three tools.
//!
//! Inputs are read whole; outputs go through a temp-file-plus-rename so a
//! failed run never leaves a partial file behind.

use crate::error::{Error, Result};
use std::fs;
use std::path::Path;

/// Read a whole input file, reporting a typed error when it is missing.
pub fn read_bytes(path: &Path) -> Result<Vec<u8>> {
    if !path.is_file() {
        return Err(Error::FileNotFound(path.to_path_buf()));
    }
    Ok(fs::read(path)?)
}

/// Read a whole input file as strict UTF-8.
pub fn read_to_string(path: &Path) -> Result<String> {
    if !path.is_file() {
        return Err(Error::FileNotFound(path.to_path_buf()));
    }
    Ok(fs::read_to_string(path)?)
}

pub fn atomic_write<P: AsRef<Path>, C: AsRef<[u8]>>(path: P, contents: C) -> Result<()> {
    let path = path.as_ref();
    let tmp_path = path.with_extension("tmp");
    fs::write(&tmp_path, contents)?;
    fs::rename(tmp_path, path)?;
    Ok(())
}
