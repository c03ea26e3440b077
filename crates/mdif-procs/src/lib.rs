/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Pixel operations for `mdif` images
//!
//! Every operation reads an [`MdifImage`](mdif::MdifImage) and never mutates it,
//! results are returned as freshly allocated buffers or images.
//!
//! # Example
//! - Smooth an image and compute its luma
//! ```
//! use mdif::MdifImage;
//! use mdif_procs::{antialias, grayscale};
//!
//! let mut image = MdifImage::new(3, 3);
//! image.set_pixel(1, 1, [255, 255, 255, 255]).unwrap();
//!
//! let smooth = antialias(&image).unwrap();
//! let luma = grayscale(&smooth).unwrap();
//! assert_eq!(luma.len(), 9);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![warn(
    clippy::correctness,
    clippy::perf,
    clippy::pedantic,
    clippy::inline_always,
    clippy::missing_errors_doc,
    clippy::panic
)]
#![allow(
    clippy::needless_return,
    clippy::similar_names,
    clippy::inline_always,
    clippy::doc_markdown,
    clippy::module_name_repetitions,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc,
    clippy::wildcard_imports
)]
extern crate alloc;

pub use antialias::antialias;
pub use errors::ProcErrors;
pub use grayscale::{grayscale, grayscale_into};

pub mod antialias;
pub mod errors;
pub mod grayscale;
mod utils;
