/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Core routines shared by the mdif crates
//!
//! It currently contains
//!
//! - Byte stream readers and writers with endian aware reads and writes,
//!   the single I/O abstraction the codec talks to
//! - A storage capability for opening named streams, with a filesystem
//!   and an in-memory backend
//! - Decoder options
//! - A logging facade that compiles to nothing when the `log` feature is off
//!
//! This library is `#[no_std]` with `alloc` needed for defining `Vec`,
//! so it runs on microcontrollers that have an allocator but no OS.
//!
//! # Features
//!  - `std`: Enables std readers and writers and the filesystem storage.
//!
//!  - `log`: Routes the [`log`](crate::log) macros to the `log` crate.
#![cfg_attr(not(feature = "std"), no_std)]
#![macro_use]
extern crate alloc;

pub mod bytestream;
pub mod log;
pub mod options;
