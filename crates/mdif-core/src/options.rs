/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Decoder options

/// The largest width or height an mdif stream may carry.
///
/// This bounds a decoded image to 4 MiB of channel data.
pub const MAX_DIMENSIONS: usize = 1024;

/// Limits the decoder enforces on the stream it reads.
///
/// Limits can be lowered to fit a smaller memory budget, they can never be
/// raised above [`MAX_DIMENSIONS`], larger values are clamped.
///
/// # Example
/// ```
/// use mdif_core::options::DecoderOptions;
/// // a board that can only afford 128x128 images
/// let options = DecoderOptions::default()
///     .set_max_width(128)
///     .set_max_height(128);
/// assert_eq!(options.max_width(), 128);
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct DecoderOptions {
    max_width:  usize,
    max_height: usize
}

impl DecoderOptions {
    /// Get maximum width configured for which the decoder
    /// should not try to decode images greater than this width
    pub const fn max_width(&self) -> usize {
        self.max_width
    }

    /// Get maximum height configured for which the decoder should
    /// not try to decode images greater than this height
    pub const fn max_height(&self) -> usize {
        self.max_height
    }

    /// Set the maximum width for which the decoder should not try
    /// decoding images greater than that width
    ///
    /// Values above [`MAX_DIMENSIONS`] are clamped to it.
    #[must_use]
    pub fn set_max_width(mut self, width: usize) -> Self {
        self.max_width = width.min(MAX_DIMENSIONS);
        self
    }

    /// Set the maximum height for which the decoder should not try
    /// decoding images greater than that height
    ///
    /// Values above [`MAX_DIMENSIONS`] are clamped to it.
    #[must_use]
    pub fn set_max_height(mut self, height: usize) -> Self {
        self.max_height = height.min(MAX_DIMENSIONS);
        self
    }
}

impl Default for DecoderOptions {
    fn default() -> Self {
        Self {
            max_width:  MAX_DIMENSIONS,
            max_height: MAX_DIMENSIONS
        }
    }
}
