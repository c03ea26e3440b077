/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Errors possible during decoding, encoding and image construction.
use core::fmt::{Debug, Display, Formatter};

use mdif_core::bytestream::ByteIoError;

use crate::image::Channel;

/// The broad class an error belongs to
///
/// Every error in this crate and in `mdif-procs` maps to one of these,
/// tools use [`error_message`] to turn it into a diagnostic.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum ErrorKind {
    /// Storage could not be opened
    InvalidFileHandle,
    /// The stream ended before a field or channel was complete
    ReadError,
    /// The sink refused part of a field or channel
    WriteError,
    /// The stream does not start with `NT`
    InvalidSignature,
    /// Width outside `1..=1024`
    InvalidWidth,
    /// Height outside `1..=1024`
    InvalidHeight,
    /// Channel memory could not be allocated
    CannotAllocate,
    /// The image handed to a pixel operation is unusable
    ImageError,
    /// An output or input buffer handed to an operation is unusable
    InvalidArgument
}

impl ErrorKind {
    /// A static description of this kind of error
    pub const fn message(self) -> &'static str {
        match self {
            ErrorKind::InvalidFileHandle => "Invalid file handle",
            ErrorKind::ReadError => "Error reading MDIF file",
            ErrorKind::WriteError => "Error writing MDIF file",
            ErrorKind::InvalidSignature => "Invalid MDIF signature",
            ErrorKind::InvalidWidth => "Invalid image width (must be between 1 and 1024)",
            ErrorKind::InvalidHeight => "Invalid image height (must be between 1 and 1024)",
            ErrorKind::CannotAllocate => "Cannot allocate memory for channels",
            ErrorKind::ImageError => "Image error",
            ErrorKind::InvalidArgument => "Invalid argument"
        }
    }
}

impl Display for ErrorKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.message())
    }
}

/// Map an error kind to a static diagnostic message
///
/// # Example
/// ```
/// use mdif::{error_message, ErrorKind};
/// assert_eq!(error_message(ErrorKind::InvalidSignature), "Invalid MDIF signature");
/// ```
pub const fn error_message(kind: ErrorKind) -> &'static str {
    kind.message()
}

/// Possible Errors that may occur during decoding
pub enum MdifDecodeErrors {
    /// The storage could not open the requested stream
    InvalidFileHandle(ByteIoError),
    /// The stream ended early
    ReadError(ByteIoError),
    /// The first two bytes are not `NT`, the argument is what was found
    InvalidSignature([u8; 2]),
    /// Width outside of the allowed range.
    ///
    /// # Arguments
    /// - 1st argument is the width found in the stream
    /// - 2nd argument is the configured maximum
    InvalidWidth(i16, usize),
    /// Height outside of the allowed range.
    ///
    /// # Arguments
    /// - 1st argument is the height found in the stream
    /// - 2nd argument is the configured maximum
    InvalidHeight(i16, usize),
    /// Allocating a channel of this many bytes failed
    CannotAllocate(usize)
}

impl MdifDecodeErrors {
    pub const fn kind(&self) -> ErrorKind {
        match self {
            MdifDecodeErrors::InvalidFileHandle(_) => ErrorKind::InvalidFileHandle,
            MdifDecodeErrors::ReadError(_) => ErrorKind::ReadError,
            MdifDecodeErrors::InvalidSignature(_) => ErrorKind::InvalidSignature,
            MdifDecodeErrors::InvalidWidth(..) => ErrorKind::InvalidWidth,
            MdifDecodeErrors::InvalidHeight(..) => ErrorKind::InvalidHeight,
            MdifDecodeErrors::CannotAllocate(_) => ErrorKind::CannotAllocate
        }
    }
}

impl Debug for MdifDecodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            MdifDecodeErrors::InvalidFileHandle(err) => {
                writeln!(f, "Invalid file handle: {:?}", err)
            }
            MdifDecodeErrors::ReadError(err) => {
                writeln!(f, "Error reading MDIF file: {:?}", err)
            }
            MdifDecodeErrors::InvalidSignature(found) => {
                writeln!(
                    f,
                    "Invalid MDIF signature, expected `NT` but found {:?}",
                    found
                )
            }
            MdifDecodeErrors::InvalidWidth(width, max) => {
                writeln!(f, "Invalid image width {width}, expected 1 to {max}")
            }
            MdifDecodeErrors::InvalidHeight(height, max) => {
                writeln!(f, "Invalid image height {height}, expected 1 to {max}")
            }
            MdifDecodeErrors::CannotAllocate(size) => {
                writeln!(f, "Cannot allocate {size} bytes for channels")
            }
        }
    }
}

impl Display for MdifDecodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "{:?}", self)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for MdifDecodeErrors {}

impl From<ByteIoError> for MdifDecodeErrors {
    fn from(value: ByteIoError) -> Self {
        MdifDecodeErrors::ReadError(value)
    }
}

/// Errors encountered during encoding
pub enum MdifEncodeErrors {
    /// The storage could not open the requested stream
    InvalidFileHandle(ByteIoError),
    /// The sink did not take all bytes
    WriteError(ByteIoError),
    /// Width outside `1..=1024`, nothing was written
    InvalidWidth(i16),
    /// Height outside `1..=1024`, nothing was written
    InvalidHeight(i16)
}

impl MdifEncodeErrors {
    pub const fn kind(&self) -> ErrorKind {
        match self {
            MdifEncodeErrors::InvalidFileHandle(_) => ErrorKind::InvalidFileHandle,
            MdifEncodeErrors::WriteError(_) => ErrorKind::WriteError,
            MdifEncodeErrors::InvalidWidth(_) => ErrorKind::InvalidWidth,
            MdifEncodeErrors::InvalidHeight(_) => ErrorKind::InvalidHeight
        }
    }
}

impl Debug for MdifEncodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            MdifEncodeErrors::InvalidFileHandle(err) => {
                writeln!(f, "Invalid file handle: {:?}", err)
            }
            MdifEncodeErrors::WriteError(err) => {
                writeln!(f, "Error writing MDIF file: {:?}", err)
            }
            MdifEncodeErrors::InvalidWidth(width) => {
                writeln!(f, "Cannot encode image width {width}, expected 1 to 1024")
            }
            MdifEncodeErrors::InvalidHeight(height) => {
                writeln!(f, "Cannot encode image height {height}, expected 1 to 1024")
            }
        }
    }
}

impl Display for MdifEncodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "{:?}", self)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for MdifEncodeErrors {}

impl From<ByteIoError> for MdifEncodeErrors {
    fn from(value: ByteIoError) -> Self {
        MdifEncodeErrors::WriteError(value)
    }
}

/// Errors raised when building or editing an [`MdifImage`](crate::MdifImage)
/// from caller supplied data
#[derive(Copy, Clone, Eq, PartialEq)]
pub enum MdifImageErrors {
    /// A channel does not hold `width*height` bytes
    ///
    /// channel, expected, found
    ChannelLength(Channel, usize, usize),
    /// An interleaved RGBA buffer does not hold `width*height*4` bytes
    ///
    /// expected, found
    InterleavedLength(usize, usize),
    /// A pixel coordinate lies outside the image
    OutOfBounds(usize, usize)
}

impl MdifImageErrors {
    pub const fn kind(&self) -> ErrorKind {
        ErrorKind::InvalidArgument
    }
}

impl Debug for MdifImageErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            MdifImageErrors::ChannelLength(channel, expected, found) => {
                writeln!(
                    f,
                    "{channel:?} channel has {found} bytes, expected {expected}"
                )
            }
            MdifImageErrors::InterleavedLength(expected, found) => {
                writeln!(
                    f,
                    "Interleaved buffer has {found} bytes, expected {expected}"
                )
            }
            MdifImageErrors::OutOfBounds(x, y) => {
                writeln!(f, "Pixel ({x},{y}) is outside the image")
            }
        }
    }
}

impl Display for MdifImageErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "{:?}", self)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for MdifImageErrors {}
