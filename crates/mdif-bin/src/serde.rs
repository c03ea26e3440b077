/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

/// Header information of one probed file
pub struct Metadata<'a> {
    file:   &'a str,
    size:   u64,
    width:  usize,
    height: usize
}

impl<'a> Metadata<'a> {
    pub fn new(file: &'a str, size: u64, width: usize, height: usize) -> Metadata<'a> {
        Metadata {
            file,
            size,
            width,
            height
        }
    }
}

impl Serialize for Metadata<'_> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer
    {
        let mut state = serializer.serialize_struct("Metadata", 5)?;

        state.serialize_field("file", self.file)?;
        state.serialize_field("size", &self.size)?;
        state.serialize_field("width", &self.width)?;
        state.serialize_field("height", &self.height)?;
        state.serialize_field("pixels", &(self.width * self.height))?;

        state.end()
    }
}
