/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! MDIF is a minimal raster container with four planar 8 bit channels,
//! small enough to decode on a microcontroller. It has the following format:
//! ```text
//! ╔════════╤═══════════════════════════════════════════════════╗
//! ║ Bytes  │ Description                                       ║
//! ╠════════╪═══════════════════════════════════════════════════╣
//! ║ 2      │ "NT" magic value                                  ║
//! ╟────────┼───────────────────────────────────────────────────╢
//! ║ 2      │ 16-Bit LE signed integer (width), 1 to 1024       ║
//! ╟────────┼───────────────────────────────────────────────────╢
//! ║ 2      │ 16-Bit LE signed integer (height), 1 to 1024      ║
//! ╟────────┼───────────────────────────────────────────────────╢
//! ║ N      │ red channel, row-major, N = width*height          ║
//! ╟────────┼───────────────────────────────────────────────────╢
//! ║ N      │ blue channel                                      ║
//! ╟────────┼───────────────────────────────────────────────────╢
//! ║ N      │ green channel                                     ║
//! ╟────────┼───────────────────────────────────────────────────╢
//! ║ N      │ alpha channel                                     ║
//! ╚════════╧═══════════════════════════════════════════════════╝
//!```
//! Note that blue is stored before green.
//!
//! # Example
//! - Round trip through named in memory storage
//! ```
//! use mdif::mdif_core::bytestream::MemoryStorage;
//! use mdif::MdifImage;
//!
//! let mut image = MdifImage::new(2, 2);
//! image.red_mut().copy_from_slice(&[10, 20, 30, 40]);
//! image.alpha_mut().fill(255);
//!
//! let mut storage = MemoryStorage::new();
//! mdif::write_to(&mut storage, "square.mdif", &image).unwrap();
//! assert_eq!(storage.get("square.mdif").map(<[u8]>::len), Some(22));
//!
//! let decoded = mdif::read_from(&mut storage, "square.mdif").unwrap();
//! assert_eq!(decoded, image);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![macro_use]
extern crate alloc;

pub use decoder::*;
pub use encoder::*;
pub use errors::*;
pub use image::*;
pub use mdif_core;
use mdif_core::bytestream::{ByteReaderTrait, ByteWriterTrait, Storage};
use mdif_core::log::debug;

pub mod constants;
mod decoder;
mod encoder;
mod errors;
mod image;

/// Decode an image from `source`
///
/// `source` is consumed, pass `&mut reader` to keep using it afterwards.
pub fn decode<T: ByteReaderTrait>(source: T) -> Result<MdifImage, MdifDecodeErrors> {
    MdifDecoder::new(source).decode()
}

/// Encode `image` into `sink`, returning the number of bytes written
pub fn encode<T: ByteWriterTrait>(image: &MdifImage, sink: T) -> Result<usize, MdifEncodeErrors> {
    MdifEncoder::new(image).encode(sink)
}

/// Open `name` in `storage` and decode it
///
/// The stream is closed before this returns.
///
/// # Errors
/// [`MdifDecodeErrors::InvalidFileHandle`] if `name` cannot be opened,
/// otherwise whatever [`MdifDecoder::decode`] reports
pub fn read_from<S: Storage>(storage: &mut S, name: &str) -> Result<MdifImage, MdifDecodeErrors> {
    debug!("Reading {}", name);

    let stream = storage
        .open_read(name)
        .map_err(MdifDecodeErrors::InvalidFileHandle)?;
    decode(stream)
}

/// Encode `image` into a new stream called `name` in `storage`
///
/// Dimensions are checked first, so an invalid image never creates
/// or truncates `name`.
///
/// # Errors
/// [`MdifEncodeErrors::InvalidFileHandle`] if `name` cannot be created,
/// otherwise whatever [`MdifEncoder::encode`] reports
pub fn write_to<S: Storage>(
    storage: &mut S, name: &str, image: &MdifImage
) -> Result<usize, MdifEncodeErrors> {
    debug!("Writing {}", name);

    let encoder = MdifEncoder::new(image);
    encoder.check_dimensions()?;

    let stream = storage
        .open_write(name)
        .map_err(MdifEncodeErrors::InvalidFileHandle)?;
    encoder.encode(stream)
}
