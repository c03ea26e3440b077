/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use crate::bytestream::{ByteIoError, ByteReaderTrait};

/// An in memory reader, usable without `std`
///
/// Failed reads do not move the position.
pub struct MCursor<T: AsRef<[u8]>> {
    stream:   T,
    position: usize
}

impl<T: AsRef<[u8]>> MCursor<T> {
    pub fn new(buffer: T) -> MCursor<T> {
        MCursor {
            stream:   buffer,
            position: 0
        }
    }
    /// Number of bytes consumed so far
    pub const fn position(&self) -> usize {
        self.position
    }
    /// Number of bytes not yet consumed
    pub fn remaining(&self) -> usize {
        self.stream.as_ref().len().saturating_sub(self.position)
    }

    pub fn into_inner(self) -> T {
        self.stream
    }
}

impl<T: AsRef<[u8]>> ByteReaderTrait for MCursor<T> {
    #[inline(always)]
    fn read_exact_bytes(&mut self, buf: &mut [u8]) -> Result<(), ByteIoError> {
        let remaining = self.remaining();
        if buf.len() > remaining {
            return Err(ByteIoError::NotEnoughBytes(buf.len(), remaining));
        }
        let start = self.position;
        buf.copy_from_slice(&self.stream.as_ref()[start..start + buf.len()]);
        self.position += buf.len();
        Ok(())
    }

    #[inline(always)]
    fn read_bytes(&mut self, buf: &mut [u8]) -> Result<usize, ByteIoError> {
        let data = self.stream.as_ref();
        let start = core::cmp::min(self.position, data.len());
        let end = core::cmp::min(start + buf.len(), data.len());

        buf[..end - start].copy_from_slice(&data[start..end]);
        self.position = end;

        Ok(end - start)
    }
}
