#![cfg(feature = "std")]
/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::fs::{File, OpenOptions};
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

use crate::bytestream::{ByteIoError, Storage};

/// Files on the host filesystem, resolved against a root directory
///
/// Absolute names ignore the root.
#[derive(Clone, Debug)]
pub struct FileStorage {
    root: PathBuf
}

impl FileStorage {
    pub fn new<P: Into<PathBuf>>(root: P) -> FileStorage {
        FileStorage { root: root.into() }
    }
    /// Resolve paths relative to the process working directory
    pub fn current_dir() -> FileStorage {
        FileStorage::new("")
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn path_of(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }
}

impl Storage for FileStorage {
    type Reader<'a> = BufReader<File>;
    type Writer<'a> = BufWriter<File>;

    fn open_read(&mut self, name: &str) -> Result<Self::Reader<'_>, ByteIoError> {
        let path = self.path_of(name);
        let file = File::open(&path)
            .map_err(|e| ByteIoError::CannotOpen(format!("{}: {e}", path.display())))?;
        Ok(BufReader::new(file))
    }

    fn open_write(&mut self, name: &str) -> Result<Self::Writer<'_>, ByteIoError> {
        let path = self.path_of(name);
        let file = OpenOptions::new()
            .write(true)
            .truncate(true)
            .create(true)
            .open(&path)
            .map_err(|e| ByteIoError::CannotOpen(format!("{}: {e}", path.display())))?;
        Ok(BufWriter::new(file))
    }
}
