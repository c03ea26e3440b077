/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::fs::read;

use mdif::MdifDecoder;
use mdif_core::bytestream::MCursor;

use crate::{fixture_path, TestEntry};

#[test]
#[allow(clippy::uninlined_format_args)]
fn test_headers() {
    let json_file = read(fixture_path("headers.json")).unwrap();

    let entries: Vec<TestEntry> = serde_json::from_slice(&json_file).unwrap();

    let mut failures = Vec::new();

    for entry in &entries {
        let result = MdifDecoder::new(MCursor::new(&entry.bytes)).decode();

        let outcome = match (&result, &entry.kind) {
            (Ok(image), None) => {
                let dims_ok = Some(image.dimensions().0) == entry.width
                    && Some(image.dimensions().1) == entry.height;
                let pixels_ok = entry.rgba.as_ref().map_or(true, |p| *p == image.to_rgba());

                if dims_ok && pixels_ok {
                    continue;
                }
                format!("decoded {:?} does not match", image)
            }
            (Err(err), Some(kind)) => {
                if format!("{:?}", err.kind()) == *kind {
                    continue;
                }
                format!("expected {} but found {:?}", kind, err.kind())
            }
            (Ok(_), Some(kind)) => format!("expected {} but decoding succeeded", kind),
            (Err(err), None) => format!("unexpected error {:?}", err)
        };
        eprintln!("Case {:?}: {}\nConfig:{:#?}\n", entry.name, outcome, entry);
        failures.push(entry.name.clone());
    }
    assert!(failures.is_empty(), "Failing cases {:?}", failures);
}
