/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use alloc::vec::Vec;

use crate::bytestream::{ByteIoError, ByteWriterTrait};

/// A writer into a fixed, caller provided buffer
///
/// This is the sink for targets that cannot grow memory, e.g a frame
/// buffer or a DMA region on a microcontroller. Writes that don't fit
/// are refused whole and leave the buffer untouched.
pub struct SliceWriter<'a> {
    buffer:   &'a mut [u8],
    position: usize
}

impl<'a> SliceWriter<'a> {
    pub fn new(buffer: &'a mut [u8]) -> SliceWriter<'a> {
        SliceWriter {
            buffer,
            position: 0
        }
    }
    /// Return number of unwritten bytes in this buffer
    pub const fn bytes_left(&self) -> usize {
        self.buffer.len().saturating_sub(self.position)
    }
    /// Return the number of bytes written so far
    pub const fn position(&self) -> usize {
        self.position
    }
}

impl ByteWriterTrait for SliceWriter<'_> {
    fn write_bytes(&mut self, buf: &[u8]) -> Result<usize, ByteIoError> {
        let amt = core::cmp::min(buf.len(), self.bytes_left());
        self.buffer[self.position..self.position + amt].copy_from_slice(&buf[..amt]);
        self.position += amt;
        Ok(amt)
    }

    fn write_all_bytes(&mut self, buf: &[u8]) -> Result<(), ByteIoError> {
        if buf.len() > self.bytes_left() {
            return Err(ByteIoError::NotEnoughBuffer(buf.len(), self.bytes_left()));
        }
        self.buffer[self.position..self.position + buf.len()].copy_from_slice(buf);
        self.position += buf.len();
        Ok(())
    }

    fn flush_bytes(&mut self) -> Result<(), ByteIoError> {
        Ok(())
    }
}

impl ByteWriterTrait for Vec<u8> {
    fn write_bytes(&mut self, buf: &[u8]) -> Result<usize, ByteIoError> {
        self.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn write_all_bytes(&mut self, buf: &[u8]) -> Result<(), ByteIoError> {
        self.extend_from_slice(buf);
        Ok(())
    }

    fn flush_bytes(&mut self) -> Result<(), ByteIoError> {
        Ok(())
    }

    fn reserve_capacity(&mut self, size: usize) -> Result<(), ByteIoError> {
        self.try_reserve(size)
            .map_err(|_| ByteIoError::Generic("Cannot reserve memory for the output"))
    }
}
