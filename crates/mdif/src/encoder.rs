/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Encoding support for MDIF
use mdif_core::bytestream::{ByteWriter, ByteWriterTrait};
use mdif_core::log::trace;

use crate::constants::{MDIF_HEADER_SIZE, MDIF_SIGNATURE};
use crate::errors::MdifEncodeErrors;
use crate::image::{dimension_is_valid, Channel, MdifImage};

/// An MDIF encoder
///
/// The encoder borrows the image, the sink is handed over on [`encode`]
/// and dropped (closing it) once encoding ends.
///
/// # Example
/// - Encodes a 2 by 2 image
/// ```
/// use mdif::{MdifEncoder, MdifImage};
///
/// let image = MdifImage::new(2, 2);
/// let mut output = vec![];
///
/// let written = MdifEncoder::new(&image).encode(&mut output).unwrap();
/// assert_eq!(written, 22);
/// assert_eq!(&output[..2], b"NT");
/// ```
///
/// [`encode`]: MdifEncoder::encode
pub struct MdifEncoder<'a> {
    image: &'a MdifImage
}

impl<'a> MdifEncoder<'a> {
    /// Create a new encoder which will encode `image`
    pub fn new(image: &'a MdifImage) -> MdifEncoder<'a> {
        MdifEncoder { image }
    }

    /// Check that the image dimensions can be stored
    ///
    /// Width is checked before height.
    pub fn check_dimensions(&self) -> Result<(), MdifEncodeErrors> {
        if !dimension_is_valid(self.image.width()) {
            return Err(MdifEncodeErrors::InvalidWidth(self.image.width()));
        }
        if !dimension_is_valid(self.image.height()) {
            return Err(MdifEncodeErrors::InvalidHeight(self.image.height()));
        }
        Ok(())
    }

    fn encode_headers<T: ByteWriterTrait>(
        &self, stream: &mut ByteWriter<T>
    ) -> Result<(), MdifEncodeErrors> {
        stream.write_const_bytes(&MDIF_SIGNATURE)?;
        stream.write_i16_le_err(self.image.width())?;
        stream.write_i16_le_err(self.image.height())?;
        Ok(())
    }

    /// Encode the image into `sink`, returning the number of bytes written
    ///
    /// Invalid dimensions are reported before the sink is touched.
    /// A sink that refuses any part of the output gives
    /// [`MdifEncodeErrors::WriteError`], bytes already accepted stay where they are.
    pub fn encode<T: ByteWriterTrait>(&self, sink: T) -> Result<usize, MdifEncodeErrors> {
        self.check_dimensions()?;

        trace!("Image width: {}", self.image.width());
        trace!("Image height: {}", self.image.height());

        let mut stream = ByteWriter::new(sink);

        stream.reserve(calc_out_size(self.image))?;

        self.encode_headers(&mut stream)?;

        for channel in Channel::WIRE_ORDER {
            stream.write_all(self.image.channel(channel))?;
        }
        stream.flush()?;

        trace!("Wrote {} bytes", stream.bytes_written());

        Ok(stream.bytes_written())
    }
}

#[inline]
fn calc_out_size(image: &MdifImage) -> usize {
    MDIF_HEADER_SIZE + image.pixel_count() * 4
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use mdif_core::bytestream::SliceWriter;

    use crate::encoder::MdifEncoder;
    use crate::errors::ErrorKind;
    use crate::image::MdifImage;

    #[test]
    fn two_by_two_layout() {
        let mut image = MdifImage::new(2, 2);
        image.red_mut().copy_from_slice(&[1, 2, 3, 4]);
        image.green_mut().copy_from_slice(&[5, 6, 7, 8]);
        image.blue_mut().copy_from_slice(&[9, 10, 11, 12]);
        image.alpha_mut().fill(255);

        let mut output = Vec::new();
        let written = MdifEncoder::new(&image).encode(&mut output).unwrap();

        assert_eq!(written, 22);
        assert_eq!(
            output,
            [
                b'N', b'T', 2, 0, 2, 0, // header
                1, 2, 3, 4, // red
                9, 10, 11, 12, // blue
                5, 6, 7, 8, // green
                255, 255, 255, 255 // alpha
            ]
        );
    }

    #[test]
    fn short_sink_is_write_error() {
        let image = MdifImage::new(4, 4);
        let mut buffer = [0_u8; 30];

        let err = MdifEncoder::new(&image)
            .encode(SliceWriter::new(&mut buffer))
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::WriteError);
        // header went through before the sink filled up
        assert_eq!(&buffer[..2], b"NT");
    }

    #[test]
    fn invalid_dimensions_write_nothing() {
        let cases = [
            (0, 4, ErrorKind::InvalidWidth),
            (1025, 4, ErrorKind::InvalidWidth),
            (0, 0, ErrorKind::InvalidWidth),
            (4, -1, ErrorKind::InvalidHeight),
            (4, 1025, ErrorKind::InvalidHeight)
        ];
        for (width, height, kind) in cases {
            let image = MdifImage::new(width, height);
            let mut output = Vec::new();

            let err = MdifEncoder::new(&image).encode(&mut output).unwrap_err();
            assert_eq!(err.kind(), kind);
            assert!(output.is_empty());
        }
    }

    #[test]
    fn exact_sized_slice() {
        let image = MdifImage::new(3, 1);
        let mut buffer = [0_u8; 18];
        let mut writer = SliceWriter::new(&mut buffer);

        assert_eq!(MdifEncoder::new(&image).encode(&mut writer).unwrap(), 18);
        assert_eq!(writer.bytes_left(), 0);
    }
}
