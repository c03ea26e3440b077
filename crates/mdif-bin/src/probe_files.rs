/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use clap::ArgMatches;
use log::debug;
use mdif::{MdifDecodeErrors, MdifDecoder};
use mdif_core::bytestream::{FileStorage, Storage};
use mdif_core::options::DecoderOptions;

use crate::errors::CliErrors;
use crate::serde::Metadata;

/// Read the header of one file and describe it
pub fn probe_file(
    storage: &mut FileStorage, file: &str, options: DecoderOptions
) -> Result<String, CliErrors> {
    let stream = storage
        .open_read(file)
        .map_err(MdifDecodeErrors::InvalidFileHandle)?;

    let size = stream.get_ref().metadata()?.len();

    let mut decoder = MdifDecoder::new_with_options(stream, options);
    decoder.decode_headers()?;

    let (width, height) = decoder
        .dimensions()
        .ok_or_else(|| format!("No dimensions for {file}"))?;

    debug!("Probed {} as {}x{}", file, width, height);

    let metadata = Metadata::new(file, size, width, height);
    Ok(serde_json::to_string_pretty(&metadata)?)
}

/// Probe input files, extract metadata, and print to standard output.
pub fn probe_input_files(
    args: &ArgMatches, storage: &mut FileStorage, options: DecoderOptions
) -> Result<(), CliErrors> {
    for in_file in args.get_many::<String>("in").into_iter().flatten() {
        println!("{}", probe_file(storage, in_file, options)?);
    }
    Ok(())
}
