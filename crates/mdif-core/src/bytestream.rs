/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Byte stream readers and writers
//!
//! This is the only I/O surface the codec sees. Platform backends
//! (a file on a desktop, a file on an SD card, a buffer in RAM) implement
//! [`ByteReaderTrait`] and [`ByteWriterTrait`] once, and [`Storage`] for
//! opening them by name.
//!
//! Closing a stream is dropping it; writers are flushed by the encoder
//! before they are dropped.
pub use reader::*;
pub use storage::*;
pub use traits::*;
pub use writer::*;

mod reader;
mod storage;
mod traits;
mod writer;
