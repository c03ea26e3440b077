/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Opening named streams
//!
//! A [`Storage`] hands out readers and writers by name. The codec never
//! opens anything itself, it is given a stream, so the same decoder runs
//! against a desktop filesystem, an SD card driver or plain memory.
use alloc::collections::BTreeMap;
use alloc::format;
use alloc::string::{String, ToString};
use alloc::vec::Vec;

#[cfg(feature = "std")]
pub use fs::FileStorage;

use crate::bytestream::{ByteIoError, ByteReaderTrait, ByteWriterTrait, MCursor};

mod fs;

/// A place streams can be opened from
///
/// Dropping a returned stream closes it.
pub trait Storage {
    type Reader<'a>: ByteReaderTrait
    where
        Self: 'a;
    type Writer<'a>: ByteWriterTrait
    where
        Self: 'a;

    /// Open an existing stream for reading
    ///
    /// # Errors
    /// [`ByteIoError::CannotOpen`] if `name` does not exist or cannot be read
    fn open_read(&mut self, name: &str) -> Result<Self::Reader<'_>, ByteIoError>;

    /// Open a stream for writing, creating it or truncating what was there
    ///
    /// # Errors
    /// [`ByteIoError::CannotOpen`] if `name` cannot be created
    fn open_write(&mut self, name: &str) -> Result<Self::Writer<'_>, ByteIoError>;
}

/// Named files kept in memory
///
/// Useful on targets without a filesystem and in tests.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    files: BTreeMap<String, Vec<u8>>
}

impl MemoryStorage {
    pub fn new() -> MemoryStorage {
        MemoryStorage::default()
    }
    /// Store `contents` under `name`, replacing an existing file
    pub fn insert(&mut self, name: &str, contents: Vec<u8>) {
        self.files.insert(name.to_string(), contents);
    }
    /// Contents of `name`, if present
    pub fn get(&self, name: &str) -> Option<&[u8]> {
        self.files.get(name).map(Vec::as_slice)
    }
    pub fn contains(&self, name: &str) -> bool {
        self.files.contains_key(name)
    }
    pub fn remove(&mut self, name: &str) -> Option<Vec<u8>> {
        self.files.remove(name)
    }
}

impl Storage for MemoryStorage {
    type Reader<'a> = MCursor<&'a [u8]>;
    type Writer<'a> = &'a mut Vec<u8>;

    fn open_read(&mut self, name: &str) -> Result<Self::Reader<'_>, ByteIoError> {
        match self.files.get(name) {
            Some(contents) => Ok(MCursor::new(contents.as_slice())),
            None => Err(ByteIoError::CannotOpen(format!("{name}: no such file")))
        }
    }

    fn open_write(&mut self, name: &str) -> Result<Self::Writer<'_>, ByteIoError> {
        if name.is_empty() {
            return Err(ByteIoError::CannotOpen("empty file name".to_string()));
        }
        let file = self.files.entry(name.to_string()).or_default();
        file.clear();
        Ok(file)
    }
}
