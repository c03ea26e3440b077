/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use mdif::{ErrorKind, MdifDecoder, MdifImage};
use mdif_core::bytestream::{MCursor, MemoryStorage, SliceWriter};
use mdif_core::options::DecoderOptions;
use nanorand::{Rng, WyRand};

use crate::random_image;

#[test]
fn two_by_two_example() {
    let mut image = MdifImage::new(2, 2);
    image.red_mut().copy_from_slice(&[10, 20, 30, 40]);
    image.alpha_mut().fill(255);

    let mut storage = MemoryStorage::new();
    let written = mdif::write_to(&mut storage, "example.mdif", &image).unwrap();
    assert_eq!(written, 22);

    let bytes = storage.get("example.mdif").unwrap();
    assert_eq!(
        bytes,
        [
            b'N', b'T', 2, 0, 2, 0, //
            10, 20, 30, 40, // red
            0, 0, 0, 0, // blue
            0, 0, 0, 0, // green
            255, 255, 255, 255 // alpha
        ]
    );

    let decoded = mdif::read_from(&mut storage, "example.mdif").unwrap();
    assert_eq!(decoded, image);
    assert_eq!(decoded.pixel(1, 1), Some([40, 0, 0, 255]));
}

#[test]
fn random_round_trips() {
    let mut rng = WyRand::new_seed(0x6d646966);
    let mut storage = MemoryStorage::new();

    for round in 0..50 {
        let width = rng.generate_range(1_u16..=1024) as i16;
        let height = rng.generate_range(1_u16..=16) as i16;
        let image = random_image(&mut rng, width, height);
        let name = format!("round-{round}.mdif");

        mdif::write_to(&mut storage, &name, &image).unwrap();
        assert_eq!(mdif::read_from(&mut storage, &name).unwrap(), image);
    }
}

#[test]
fn bounds_are_symmetric() {
    for (width, height, kind) in [
        (0, 1, ErrorKind::InvalidWidth),
        (1025, 1, ErrorKind::InvalidWidth),
        (1, -7, ErrorKind::InvalidHeight),
        (1, 1025, ErrorKind::InvalidHeight)
    ] {
        let mut output = Vec::new();
        let err = mdif::encode(&MdifImage::new(width, height), &mut output).unwrap_err();
        assert_eq!(err.kind(), kind);
        assert!(output.is_empty());

        let mut header = b"NT".to_vec();
        header.extend_from_slice(&width.to_le_bytes());
        header.extend_from_slice(&height.to_le_bytes());
        let err = mdif::decode(MCursor::new(&header)).unwrap_err();
        assert_eq!(err.kind(), kind);
    }
}

#[test]
fn lowered_limits() {
    let image = MdifImage::new(64, 8);
    let mut output = Vec::new();
    mdif::encode(&image, &mut output).unwrap();

    let options = DecoderOptions::default().set_max_height(4);
    let err = MdifDecoder::new_with_options(MCursor::new(&output), options)
        .decode()
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidHeight);

    // raising past the format limit is clamped
    let options = DecoderOptions::default().set_max_width(5000);
    assert_eq!(options.max_width(), 1024);
}

#[test]
fn reader_can_be_kept() {
    let mut rng = WyRand::new_seed(5);
    let first = random_image(&mut rng, 3, 3);
    let second = random_image(&mut rng, 2, 5);

    let mut output = Vec::new();
    mdif::encode(&first, &mut output).unwrap();
    mdif::encode(&second, &mut output).unwrap();

    // two images back to back in one stream
    let mut cursor = MCursor::new(&output);
    assert_eq!(mdif::decode(&mut cursor).unwrap(), first);
    assert_eq!(mdif::decode(&mut cursor).unwrap(), second);
    assert_eq!(cursor.remaining(), 0);
}

#[test]
fn fixed_buffer_sink() {
    let image = MdifImage::new(4, 4);

    let mut exact = [0_u8; 6 + 64];
    assert_eq!(mdif::encode(&image, SliceWriter::new(&mut exact)).unwrap(), 70);

    let mut short = [0_u8; 69];
    let err = mdif::encode(&image, SliceWriter::new(&mut short)).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::WriteError);
}
