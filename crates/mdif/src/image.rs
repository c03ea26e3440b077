/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! The in memory image
use alloc::vec;
use alloc::vec::Vec;

use crate::constants::{MAX_DIMENSIONS, MDIF_SIGNATURE, MIN_DIMENSIONS};
use crate::errors::MdifImageErrors;

/// One of the four byte planes of an image
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Channel {
    Red,
    Green,
    Blue,
    Alpha
}

impl Channel {
    /// Declared order, also the order of an interleaved RGBA pixel
    pub const ALL: [Channel; 4] = [Channel::Red, Channel::Green, Channel::Blue, Channel::Alpha];

    /// Order channels are stored in a stream.
    ///
    /// Blue comes before green, existing files depend on it.
    pub const WIRE_ORDER: [Channel; 4] =
        [Channel::Red, Channel::Blue, Channel::Green, Channel::Alpha];

    /// Position of this channel in an interleaved RGBA pixel
    pub const fn rgba_offset(self) -> usize {
        match self {
            Channel::Red => 0,
            Channel::Green => 1,
            Channel::Blue => 2,
            Channel::Alpha => 3
        }
    }
}

/// Whether `width` and `height` are both inside `1..=1024`
pub const fn dimensions_are_valid(width: i16, height: i16) -> bool {
    dimension_is_valid(width) && dimension_is_valid(height)
}

pub(crate) const fn dimension_is_valid(value: i16) -> bool {
    value >= MIN_DIMENSIONS as i16 && value <= MAX_DIMENSIONS as i16
}

/// A dimension as an index bound, non-positive values give an empty extent
const fn extent(value: i16) -> usize {
    if value > 0 {
        value as usize
    } else {
        0
    }
}

/// An RGBA image stored as four planar 8 bit channels
///
/// Pixel `(x, y)` lives at index `y * width + x` of every channel,
/// rows run top to bottom.
///
/// The four channels always have the same length, `width * height`.
/// They are created together, dropped together, and only handed out as
/// slices so none of them can be resized on its own.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MdifImage {
    signature: [u8; 2],
    width:     i16,
    height:    i16,
    red:       Vec<u8>,
    green:     Vec<u8>,
    blue:      Vec<u8>,
    alpha:     Vec<u8>
}

impl MdifImage {
    /// Create an image of `width` by `height` with every channel zeroed.
    ///
    /// Dimensions are **not** validated here, an image of e.g 2000x10 can be
    /// built and edited in memory. The limits of `1..=1024` are enforced when
    /// the image is encoded or decoded. A non-positive dimension gives empty
    /// channels.
    ///
    /// # Example
    /// ```
    /// use mdif::MdifImage;
    /// let image = MdifImage::new(4, 3);
    /// assert_eq!(image.pixel_count(), 12);
    /// assert!(image.red().iter().all(|x| *x == 0));
    /// ```
    pub fn new(width: i16, height: i16) -> MdifImage {
        let pixel_count = extent(width) * extent(height);

        MdifImage {
            signature: MDIF_SIGNATURE,
            width,
            height,
            red: vec![0; pixel_count],
            green: vec![0; pixel_count],
            blue: vec![0; pixel_count],
            alpha: vec![0; pixel_count]
        }
    }

    /// Create an image from existing channels
    ///
    /// # Errors
    /// [`MdifImageErrors::ChannelLength`] if any channel does not hold
    /// exactly `width * height` bytes
    pub fn from_channels(
        width: i16, height: i16, red: Vec<u8>, green: Vec<u8>, blue: Vec<u8>, alpha: Vec<u8>
    ) -> Result<MdifImage, MdifImageErrors> {
        let expected = extent(width) * extent(height);

        for (channel, data) in Channel::ALL.iter().zip([&red, &green, &blue, &alpha]) {
            if data.len() != expected {
                return Err(MdifImageErrors::ChannelLength(
                    *channel,
                    expected,
                    data.len()
                ));
            }
        }
        Ok(MdifImage {
            signature: MDIF_SIGNATURE,
            width,
            height,
            red,
            green,
            blue,
            alpha
        })
    }

    /// Assemble a decoded image, channels in declared order.
    ///
    /// The decoder allocated every channel with `width * height` bytes.
    pub(crate) fn from_decoded(width: i16, height: i16, channels: [Vec<u8>; 4]) -> MdifImage {
        let [red, green, blue, alpha] = channels;

        debug_assert!([&green, &blue, &alpha].iter().all(|c| c.len() == red.len()));

        MdifImage {
            signature: MDIF_SIGNATURE,
            width,
            height,
            red,
            green,
            blue,
            alpha
        }
    }

    /// Split an interleaved `RGBARGBA...` buffer into channels
    ///
    /// # Errors
    /// [`MdifImageErrors::InterleavedLength`] if `pixels` is not
    /// `width * height * 4` bytes long
    pub fn from_rgba(width: i16, height: i16, pixels: &[u8]) -> Result<MdifImage, MdifImageErrors> {
        let mut image = MdifImage::new(width, height);
        let expected = image.pixel_count() * 4;

        if pixels.len() != expected {
            return Err(MdifImageErrors::InterleavedLength(expected, pixels.len()));
        }
        for (pos, pixel) in pixels.chunks_exact(4).enumerate() {
            image.red[pos] = pixel[0];
            image.green[pos] = pixel[1];
            image.blue[pos] = pixel[2];
            image.alpha[pos] = pixel[3];
        }
        Ok(image)
    }

    /// Interleave the channels into an `RGBARGBA...` buffer, e.g for blitting
    pub fn to_rgba(&self) -> Vec<u8> {
        let mut output = vec![0; self.pixel_count() * 4];

        for ((((out, r), g), b), a) in output
            .chunks_exact_mut(4)
            .zip(&self.red)
            .zip(&self.green)
            .zip(&self.blue)
            .zip(&self.alpha)
        {
            out.copy_from_slice(&[*r, *g, *b, *a]);
        }
        output
    }

    /// The format tag, always `NT`
    pub const fn signature(&self) -> [u8; 2] {
        self.signature
    }

    pub const fn width(&self) -> i16 {
        self.width
    }

    pub const fn height(&self) -> i16 {
        self.height
    }

    /// Width and height as index bounds, `(width, height)`
    pub const fn dimensions(&self) -> (usize, usize) {
        (extent(self.width), extent(self.height))
    }

    /// Number of pixels, the length of each channel
    pub fn pixel_count(&self) -> usize {
        self.red.len()
    }

    /// Whether the image can be stored, see [`dimensions_are_valid`]
    pub const fn has_valid_dimensions(&self) -> bool {
        dimensions_are_valid(self.width, self.height)
    }

    pub fn red(&self) -> &[u8] {
        &self.red
    }

    pub fn green(&self) -> &[u8] {
        &self.green
    }

    pub fn blue(&self) -> &[u8] {
        &self.blue
    }

    pub fn alpha(&self) -> &[u8] {
        &self.alpha
    }

    pub fn red_mut(&mut self) -> &mut [u8] {
        &mut self.red
    }

    pub fn green_mut(&mut self) -> &mut [u8] {
        &mut self.green
    }

    pub fn blue_mut(&mut self) -> &mut [u8] {
        &mut self.blue
    }

    pub fn alpha_mut(&mut self) -> &mut [u8] {
        &mut self.alpha
    }

    pub fn channel(&self, channel: Channel) -> &[u8] {
        match channel {
            Channel::Red => &self.red,
            Channel::Green => &self.green,
            Channel::Blue => &self.blue,
            Channel::Alpha => &self.alpha
        }
    }

    pub fn channel_mut(&mut self, channel: Channel) -> &mut [u8] {
        match channel {
            Channel::Red => &mut self.red,
            Channel::Green => &mut self.green,
            Channel::Blue => &mut self.blue,
            Channel::Alpha => &mut self.alpha
        }
    }

    fn index_of(&self, x: usize, y: usize) -> Option<usize> {
        let (width, height) = self.dimensions();
        if x < width && y < height {
            Some(y * width + x)
        } else {
            None
        }
    }

    /// The `[r, g, b, a]` value at `(x, y)`, or `None` outside the image
    pub fn pixel(&self, x: usize, y: usize) -> Option<[u8; 4]> {
        let pos = self.index_of(x, y)?;
        Some([self.red[pos], self.green[pos], self.blue[pos], self.alpha[pos]])
    }

    /// Overwrite the pixel at `(x, y)` with `[r, g, b, a]`
    ///
    /// # Errors
    /// [`MdifImageErrors::OutOfBounds`] if `(x, y)` is outside the image
    pub fn set_pixel(&mut self, x: usize, y: usize, rgba: [u8; 4]) -> Result<(), MdifImageErrors> {
        let pos = self
            .index_of(x, y)
            .ok_or(MdifImageErrors::OutOfBounds(x, y))?;

        self.red[pos] = rgba[0];
        self.green[pos] = rgba[1];
        self.blue[pos] = rgba[2];
        self.alpha[pos] = rgba[3];
        Ok(())
    }
}
