/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::path::{Path, PathBuf};

use mdif::MdifImage;
use nanorand::{Rng, WyRand};
use serde::Deserialize;

#[cfg(test)]
mod end_to_end;
#[cfg(test)]
mod headers;
#[cfg(test)]
mod procs;
#[cfg(test)]
mod storage;

/// One decode case from a json fixture
#[derive(Clone, Deserialize, Debug)]
pub struct TestEntry {
    pub name:    String,
    pub bytes:   Vec<u8>,
    /// Expected error kind, `None` if decoding succeeds
    pub kind:    Option<String>,
    pub width:   Option<usize>,
    pub height:  Option<usize>,
    /// Expected interleaved pixels of a successful decode
    pub rgba:    Option<Vec<u8>>,
    pub comment: Option<String>
}

pub fn fixture_path(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests").join(name)
}

/// A scratch directory unique to this process and `test`
pub fn scratch_dir(test: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("mdif-tests-{}-{test}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

pub fn random_image(rng: &mut WyRand, width: i16, height: i16) -> MdifImage {
    let mut image = MdifImage::new(width, height);
    rng.fill_bytes(image.red_mut());
    rng.fill_bytes(image.green_mut());
    rng.fill_bytes(image.blue_mut());
    rng.fill_bytes(image.alpha_mut());
    image
}
