/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

pub use mdif_core::options::MAX_DIMENSIONS;

/// Magic bytes every mdif stream starts with
pub const MDIF_SIGNATURE: [u8; 2] = *b"NT";

/// signature + width + height
pub const MDIF_HEADER_SIZE: usize = 2 + 2 + 2;

/// Smallest width or height an mdif stream may carry
pub const MIN_DIMENSIONS: usize = 1;
