/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::fs::File;
use std::io::{BufReader, BufWriter};

use mdif::{ErrorKind, MdifDecoder, MdifEncoder};
use mdif_core::bytestream::{FileStorage, MemoryStorage};
use nanorand::WyRand;

use crate::{random_image, scratch_dir};

#[test]
fn file_storage_round_trip() {
    let dir = scratch_dir("file-round-trip");
    let mut storage = FileStorage::new(&dir);
    let mut rng = WyRand::new_seed(0xfeed);

    let image = random_image(&mut rng, 37, 21);

    let written = mdif::write_to(&mut storage, "noise.mdif", &image).unwrap();
    assert_eq!(written, 6 + 4 * 37 * 21);

    let on_disk = std::fs::metadata(dir.join("noise.mdif")).unwrap().len();
    assert_eq!(on_disk, written as u64);

    let decoded = mdif::read_from(&mut storage, "noise.mdif").unwrap();
    assert_eq!(decoded, image);

    std::fs::remove_dir_all(dir).unwrap();
}

#[test]
fn missing_file_is_invalid_file_handle() {
    let dir = scratch_dir("missing-file");
    let mut storage = FileStorage::new(&dir);

    let err = mdif::read_from(&mut storage, "absent.mdif").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidFileHandle);

    std::fs::remove_dir_all(dir).unwrap();
}

#[test]
fn unwritable_path_is_invalid_file_handle() {
    let dir = scratch_dir("unwritable");
    let mut storage = FileStorage::new(&dir);

    let image = mdif::MdifImage::new(1, 1);
    let err = mdif::write_to(&mut storage, "no/such/dir/out.mdif", &image).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidFileHandle);

    std::fs::remove_dir_all(dir).unwrap();
}

#[test]
fn std_buffered_streams() {
    let dir = scratch_dir("buffered");
    let path = dir.join("buffered.mdif");
    let mut rng = WyRand::new_seed(3);
    let image = random_image(&mut rng, 5, 9);

    let writer = BufWriter::new(File::create(&path).unwrap());
    MdifEncoder::new(&image).encode(writer).unwrap();

    let reader = BufReader::new(File::open(&path).unwrap());
    let mut decoder = MdifDecoder::new(reader);

    decoder.decode_headers().unwrap();
    assert_eq!(decoder.dimensions(), Some((5, 9)));
    assert_eq!(decoder.decode().unwrap(), image);

    std::fs::remove_dir_all(dir).unwrap();
}

#[test]
fn memory_and_file_storage_agree() {
    let dir = scratch_dir("agree");
    let mut files = FileStorage::new(&dir);
    let mut memory = MemoryStorage::new();
    let mut rng = WyRand::new_seed(99);
    let image = random_image(&mut rng, 12, 12);

    mdif::write_to(&mut files, "a.mdif", &image).unwrap();
    mdif::write_to(&mut memory, "a.mdif", &image).unwrap();

    let from_disk = std::fs::read(dir.join("a.mdif")).unwrap();
    assert_eq!(memory.get("a.mdif"), Some(from_disk.as_slice()));

    std::fs::remove_dir_all(dir).unwrap();
}
