/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! Traits for reading and writing images in mdif
//!
//! This exposes the traits and implementations for readers
//! and writers used by the mdif decoder and encoder.

use crate::bytestream::reader::ByteIoError;

/// The Input trait implemented for readers.
///
/// This provides the basic functions needed for heap free I/O on
/// both hosted and bare metal targets.
///
/// # Considerations
///
/// If you have an in memory buffer, use [`MCursor`](crate::bytestream::MCursor).
/// With the `std` feature, anything wrapped in a [`BufReader`](std::io::BufReader)
/// works too, which covers files.
pub trait ByteReaderTrait {
    /// Read exact bytes required to fill `buf` or return an error if that isn't possible
    ///
    /// ## Arguments
    ///  - `buf`: Buffer to fill with bytes from the underlying reader
    ///  ## Errors
    /// If the reader cannot fill `buf` completely, e.g because of EOF
    fn read_exact_bytes(&mut self, buf: &mut [u8]) -> Result<(), ByteIoError>;

    /// Read exact bytes required to fill `buf` or return an error if that isn't possible
    ///
    /// This is the same as [`read_exact_bytes`](Self::read_exact_bytes) but implemented as a separate
    /// method to allow some implementations to optimize it to cost fewer instructions
    fn read_const_bytes<const N: usize>(&mut self, buf: &mut [u8; N]) -> Result<(), ByteIoError> {
        self.read_exact_bytes(buf)
    }

    /// Read bytes into `buf` returning how many bytes you have read or an error if one occurred
    ///
    /// This doesn't guarantee that buf will be filled with bytes for such a guarantee see
    /// [`read_exact_bytes`](Self::read_exact_bytes)
    ///
    /// ## Returns
    ///  - `Ok(usize)` - Actual bytes read into the buffer
    ///  - `Err()` - The error encountered when reading bytes for which we couldn't recover
    fn read_bytes(&mut self, buf: &mut [u8]) -> Result<usize, ByteIoError>;
}

/// The writer trait implemented for the mdif encoder
///
/// Anything that implements this trait can be used as a sink
/// for writing encoded images
pub trait ByteWriterTrait {
    /// Write some bytes into the sink returning number of bytes written or
    /// an error if something bad happened
    ///
    /// An implementation is free to write less bytes that are in buf, so the bytes written
    /// cannot be guaranteed to be fully written
    fn write_bytes(&mut self, buf: &[u8]) -> Result<usize, ByteIoError>;
    /// Write all bytes to the buffer or return an error if something occurred
    ///
    /// This will always write all bytes, if it can't fully write all bytes, it will
    /// error out
    fn write_all_bytes(&mut self, buf: &[u8]) -> Result<(), ByteIoError>;
    /// Write a fixed number of bytes and error out if we can't write the bytes
    ///
    /// This is provided to allow for optimized writes where possible. (when the compiler can const fold them)
    fn write_const_bytes<const N: usize>(&mut self, buf: &[u8; N]) -> Result<(), ByteIoError> {
        self.write_all_bytes(buf)
    }
    /// Ensure bytes are written to the sink.
    ///
    /// After this, the encoder should be able to guarantee that all in-core data is synced with the
    /// storage device
    fn flush_bytes(&mut self) -> Result<(), ByteIoError>;

    /// A hint to tell the implementation how big of a size we expect the image to be
    ///
    /// An implementation like in memory `Vec` can use this to reserve additional memory to
    /// prevent reallocation when encoding. Others are free to ignore it.
    fn reserve_capacity(&mut self, _size: usize) -> Result<(), ByteIoError> {
        Ok(())
    }
}

// Borrowed streams, lets callers keep their reader or writer
// after the codec is done with it.
impl<T: ByteReaderTrait + ?Sized> ByteReaderTrait for &mut T {
    #[inline(always)]
    fn read_exact_bytes(&mut self, buf: &mut [u8]) -> Result<(), ByteIoError> {
        (**self).read_exact_bytes(buf)
    }

    #[inline(always)]
    fn read_const_bytes<const N: usize>(&mut self, buf: &mut [u8; N]) -> Result<(), ByteIoError> {
        (**self).read_const_bytes(buf)
    }

    #[inline(always)]
    fn read_bytes(&mut self, buf: &mut [u8]) -> Result<usize, ByteIoError> {
        (**self).read_bytes(buf)
    }
}

impl<T: ByteWriterTrait + ?Sized> ByteWriterTrait for &mut T {
    #[inline(always)]
    fn write_bytes(&mut self, buf: &[u8]) -> Result<usize, ByteIoError> {
        (**self).write_bytes(buf)
    }

    #[inline(always)]
    fn write_all_bytes(&mut self, buf: &[u8]) -> Result<(), ByteIoError> {
        (**self).write_all_bytes(buf)
    }

    #[inline(always)]
    fn write_const_bytes<const N: usize>(&mut self, buf: &[u8; N]) -> Result<(), ByteIoError> {
        (**self).write_const_bytes(buf)
    }

    fn flush_bytes(&mut self) -> Result<(), ByteIoError> {
        (**self).flush_bytes()
    }

    fn reserve_capacity(&mut self, size: usize) -> Result<(), ByteIoError> {
        (**self).reserve_capacity(size)
    }
}
