/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use alloc::vec::Vec;

use mdif_core::bytestream::{ByteReader, ByteReaderTrait};
use mdif_core::log::trace;
use mdif_core::options::DecoderOptions;

use crate::constants::MDIF_SIGNATURE;
use crate::errors::MdifDecodeErrors;
use crate::image::{Channel, MdifImage};

/// An MDIF decoder
///
/// The decoder owns the stream it reads from. Calling [`decode`] consumes
/// the decoder, so the stream is closed once it returns, on success
/// and on every error.
///
/// Use [`decode_headers`] to learn the dimensions without allocating
/// any channel.
///
/// # Example
/// ```
/// use mdif::MdifDecoder;
/// use mdif_core::bytestream::MCursor;
///
/// let file = [b'N', b'T', 1, 0, 1, 0, 10, 20, 30, 255];
/// let image = MdifDecoder::new(MCursor::new(&file)).decode().unwrap();
/// assert_eq!(image.pixel(0, 0), Some([10, 30, 20, 255]));
/// ```
///
/// [`decode`]: MdifDecoder::decode
/// [`decode_headers`]: MdifDecoder::decode_headers
pub struct MdifDecoder<T: ByteReaderTrait> {
    stream:          ByteReader<T>,
    options:         DecoderOptions,
    width:           i16,
    height:          i16,
    decoded_headers: bool
}

impl<T: ByteReaderTrait> MdifDecoder<T> {
    /// Create a new decoder with the default limits of 1024x1024
    pub fn new(stream: T) -> MdifDecoder<T> {
        MdifDecoder::new_with_options(stream, DecoderOptions::default())
    }

    /// Create a new decoder that obeys tighter limits
    ///
    /// # Example
    /// ```
    /// use mdif::{ErrorKind, MdifDecoder};
    /// use mdif_core::bytestream::MCursor;
    /// use mdif_core::options::DecoderOptions;
    ///
    /// let options = DecoderOptions::default().set_max_width(1);
    /// let file = [b'N', b'T', 2, 0, 1, 0];
    /// let err = MdifDecoder::new_with_options(MCursor::new(&file), options)
    ///     .decode()
    ///     .unwrap_err();
    /// assert_eq!(err.kind(), ErrorKind::InvalidWidth);
    /// ```
    pub fn new_with_options(stream: T, options: DecoderOptions) -> MdifDecoder<T> {
        MdifDecoder {
            stream: ByteReader::new(stream),
            options,
            width: 0,
            height: 0,
            decoded_headers: false
        }
    }

    /// Read and validate the 6 byte header
    ///
    /// Fields are read in order and the first failure is returned.
    /// Dimensions are only checked after both of them were read.
    pub fn decode_headers(&mut self) -> Result<(), MdifDecodeErrors> {
        if self.decoded_headers {
            return Ok(());
        }
        let signature = self.stream.read_fixed_bytes_or_error::<2>()?;

        if signature != MDIF_SIGNATURE {
            return Err(MdifDecodeErrors::InvalidSignature(signature));
        }
        let width = self.stream.get_i16_le_err()?;
        let height = self.stream.get_i16_le_err()?;

        trace!("Image width: {}", width);
        trace!("Image height: {}", height);

        if width < 1 || width as usize > self.options.max_width() {
            return Err(MdifDecodeErrors::InvalidWidth(
                width,
                self.options.max_width()
            ));
        }
        if height < 1 || height as usize > self.options.max_height() {
            return Err(MdifDecodeErrors::InvalidHeight(
                height,
                self.options.max_height()
            ));
        }
        self.width = width;
        self.height = height;
        self.decoded_headers = true;

        Ok(())
    }

    /// Return the width and height of the image
    ///
    /// Or none if the headers haven't been decoded
    pub const fn dimensions(&self) -> Option<(usize, usize)> {
        if self.decoded_headers {
            return Some((self.width as usize, self.height as usize));
        }
        None
    }

    /// Bytes needed for one channel, or none if the headers haven't been decoded
    pub const fn output_buffer_size(&self) -> Option<usize> {
        match self.dimensions() {
            Some((width, height)) => Some(width * height),
            None => None
        }
    }

    /// Decode the stream into an image
    ///
    /// Channels are read red, blue, green, alpha, the order they were
    /// written in. Channels filled before a failing read are dropped
    /// along with the stream.
    pub fn decode(mut self) -> Result<MdifImage, MdifDecodeErrors> {
        self.decode_headers()?;

        let pixel_count = self.width as usize * self.height as usize;

        trace!("Pixel count: {}", pixel_count);

        let mut red = allocate_channel(pixel_count)?;
        let mut green = allocate_channel(pixel_count)?;
        let mut blue = allocate_channel(pixel_count)?;
        let mut alpha = allocate_channel(pixel_count)?;

        for channel in Channel::WIRE_ORDER {
            let data = match channel {
                Channel::Red => &mut red,
                Channel::Green => &mut green,
                Channel::Blue => &mut blue,
                Channel::Alpha => &mut alpha
            };
            self.stream.read_exact_bytes(data)?;
        }
        trace!("Finished decoding image");

        Ok(MdifImage::from_decoded(
            self.width,
            self.height,
            [red, green, blue, alpha]
        ))
    }
}

fn allocate_channel(size: usize) -> Result<Vec<u8>, MdifDecodeErrors> {
    let mut channel = Vec::new();
    channel
        .try_reserve_exact(size)
        .map_err(|_| MdifDecodeErrors::CannotAllocate(size))?;
    channel.resize(size, 0);
    Ok(channel)
}

#[cfg(test)]
mod tests {
    use alloc::vec;
    use alloc::vec::Vec;

    use mdif_core::bytestream::MCursor;

    use crate::decoder::MdifDecoder;
    use crate::errors::{ErrorKind, MdifDecodeErrors};

    fn header(signature: &[u8; 2], width: i16, height: i16) -> Vec<u8> {
        let mut data = signature.to_vec();
        data.extend_from_slice(&width.to_le_bytes());
        data.extend_from_slice(&height.to_le_bytes());
        data
    }

    #[test]
    fn bad_signature_stops_after_two_bytes() {
        let data = header(b"NX", 2, 2);
        let mut cursor = MCursor::new(&data);

        let err = MdifDecoder::new(&mut cursor).decode().unwrap_err();

        assert!(matches!(err, MdifDecodeErrors::InvalidSignature(s) if s == *b"NX"));
        assert_eq!(cursor.position(), 2);
    }

    #[test]
    fn signature_is_not_a_c_string() {
        // a NUL in the second byte must not end the comparison early
        let data = header(b"N\0", 1, 1);
        let err = MdifDecoder::new(MCursor::new(&data)).decode().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidSignature);
    }

    #[test]
    fn truncated_header_is_read_error() {
        let full = header(b"NT", 1, 1);
        for len in 0..full.len() {
            let err = MdifDecoder::new(MCursor::new(&full[..len]))
                .decode()
                .unwrap_err();
            assert_eq!(err.kind(), ErrorKind::ReadError, "header truncated to {len} bytes");
        }
    }

    #[test]
    fn dimensions_are_checked_after_both_fields() {
        // width invalid and height missing: the short read wins
        let mut data = header(b"NT", 0, 0);
        data.truncate(5);
        let err = MdifDecoder::new(MCursor::new(&data)).decode().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ReadError);
    }

    #[test]
    fn out_of_range_dimensions() {
        let cases = [
            (0, 1, ErrorKind::InvalidWidth),
            (-3, 1, ErrorKind::InvalidWidth),
            (1025, 1, ErrorKind::InvalidWidth),
            (1, 0, ErrorKind::InvalidHeight),
            (1, 1025, ErrorKind::InvalidHeight),
            (0, 0, ErrorKind::InvalidWidth)
        ];
        for (width, height, kind) in cases {
            let data = header(b"NT", width, height);
            let mut decoder = MdifDecoder::new(MCursor::new(&data));

            assert_eq!(decoder.decode_headers().unwrap_err().kind(), kind);
            assert_eq!(decoder.output_buffer_size(), None);
        }
    }

    #[test]
    fn headers_only_probe() {
        let data = header(b"NT", 1024, 3);
        let mut decoder = MdifDecoder::new(MCursor::new(&data));

        decoder.decode_headers().unwrap();
        assert_eq!(decoder.dimensions(), Some((1024, 3)));
        assert_eq!(decoder.output_buffer_size(), Some(3072));
        // but no channel data follows
        assert_eq!(decoder.decode().unwrap_err().kind(), ErrorKind::ReadError);
    }

    #[test]
    fn short_channel_is_read_error() {
        let mut data = header(b"NT", 2, 1);
        // red, blue, green present, alpha missing a byte
        data.extend_from_slice(&[1, 2, 3, 4, 5, 6, 7]);
        let err = MdifDecoder::new(MCursor::new(&data)).decode().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ReadError);
    }

    #[test]
    fn channels_are_read_in_wire_order() {
        let mut data = header(b"NT", 2, 1);
        data.extend_from_slice(&[1, 2, 3, 4, 5, 6, 7, 8]);
        let image = MdifDecoder::new(MCursor::new(&data)).decode().unwrap();

        assert_eq!(image.red(), &[1, 2]);
        assert_eq!(image.blue(), &[3, 4]);
        assert_eq!(image.green(), &[5, 6]);
        assert_eq!(image.alpha(), &[7, 8]);
        assert_eq!(image.signature(), *b"NT");
    }

    #[test]
    fn trailing_bytes_are_ignored() {
        let mut data = header(b"NT", 1, 1);
        data.extend_from_slice(&[9, 9, 9, 9, 0xAA, 0xBB]);
        let image = MdifDecoder::new(MCursor::new(&data)).decode().unwrap();
        assert_eq!(image.to_rgba(), vec![9, 9, 9, 9]);
    }
}
