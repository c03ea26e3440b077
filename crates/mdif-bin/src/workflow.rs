/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::fmt::Write;
use std::path::Path;

use clap::ArgMatches;
use log::info;
use mdif::MdifImage;
use mdif_core::bytestream::{FileStorage, Storage};
use mdif_core::options::DecoderOptions;

use crate::cmd_parsers::{active_matches, get_decoder_options};
use crate::draw::{circle, gradient};
use crate::errors::CliErrors;
use crate::probe_files::probe_input_files;

fn get_path<'a>(args: &'a ArgMatches, id: &str) -> Result<&'a str, CliErrors> {
    args.get_one::<String>(id)
        .map(String::as_str)
        .ok_or_else(|| CliErrors::GenericString(format!("Missing argument {id}")))
}

pub(crate) fn create_and_exec_workflow_from_cmd(args: &ArgMatches) -> Result<(), CliErrors> {
    let options = get_decoder_options(active_matches(args));
    let mut storage = FileStorage::current_dir();

    match args.subcommand() {
        Some(("probe", sub)) => probe_input_files(sub, &mut storage, options),
        Some(("gradient", sub)) => {
            let width = sub.get_one::<i16>("width").copied().unwrap_or(256);
            let height = sub.get_one::<i16>("height").copied().unwrap_or(256);

            write_image(&mut storage, get_path(sub, "out")?, &gradient(width, height))
        }
        Some(("circle", sub)) => {
            let size = sub.get_one::<i16>("size").copied().unwrap_or(256);
            let radius = sub.get_one::<u16>("radius").copied().unwrap_or(50);

            let mut image = circle(size, radius);

            if sub.get_flag("antialias") {
                info!("Antialiasing circle");
                image = mdif_procs::antialias(&image)?;
            }
            write_image(&mut storage, get_path(sub, "out")?, &image)
        }
        Some(("grayscale", sub)) => {
            let columns = sub.get_one::<u16>("columns").copied().unwrap_or(5);
            let image = read_image(&mut storage, get_path(sub, "in")?, options)?;

            let luma = mdif_procs::grayscale(&image)?;
            print!("{}", format_luma_table(&luma, usize::from(columns)));
            Ok(())
        }
        Some(("antialias", sub)) => {
            let in_file = get_path(sub, "in")?;
            let out_file = get_path(sub, "out")?;

            verify_file_paths(in_file, out_file)?;

            let image = read_image(&mut storage, in_file, options)?;
            let smooth = mdif_procs::antialias(&image)?;

            write_image(&mut storage, out_file, &smooth)
        }
        _ => Err(CliErrors::GenericString("No command given".to_string()))
    }
}

fn read_image(
    storage: &mut FileStorage, file: &str, options: DecoderOptions
) -> Result<MdifImage, CliErrors> {
    info!("Reading {}", file);

    let stream = storage
        .open_read(file)
        .map_err(mdif::MdifDecodeErrors::InvalidFileHandle)?;

    Ok(mdif::MdifDecoder::new_with_options(stream, options).decode()?)
}

fn write_image(storage: &mut FileStorage, file: &str, image: &MdifImage) -> Result<(), CliErrors> {
    let written = mdif::write_to(storage, file, image)?;

    info!("Wrote {} bytes to {}", written, file);
    Ok(())
}

/// Lay luma values out `columns` to a line with two decimals
pub(crate) fn format_luma_table(luma: &[f32], columns: usize) -> String {
    let mut table = String::with_capacity(luma.len() * 6);

    for row in luma.chunks(columns.max(1)) {
        for value in row {
            // writing to a String cannot fail
            let _ = write!(table, " {value:.2}\t");
        }
        table.push('\n');
    }
    table
}

fn verify_file_paths(p0: &str, p1: &str) -> Result<(), CliErrors> {
    if p0 == p1 {
        return Err(CliErrors::GenericString(format!(
            "Cannot use {:?} as both input and output",
            p0
        )));
    }
    let in_path = Path::new(p0);

    if !in_path.exists() {
        return Err(CliErrors::GenericString(format!(
            "Path {:?}, does not exist",
            in_path
        )));
    }

    if !in_path.is_file() {
        return Err(CliErrors::GenericString(format!(
            "Path {:?} is not a file",
            in_path
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::workflow::{format_luma_table, verify_file_paths};

    #[test]
    fn luma_table_wraps_rows() {
        let table = format_luma_table(&[0.0, 0.5, 1.0, 0.299], 3);
        assert_eq!(table, " 0.00\t 0.50\t 1.00\t\n 0.30\t\n");
    }

    #[test]
    fn same_input_and_output_is_refused() {
        let err = verify_file_paths("a.mdif", "a.mdif").unwrap_err();
        assert!(format!("{err:?}").contains("both input and output"));
    }

    #[test]
    fn missing_input_is_refused() {
        assert!(verify_file_paths("/this/does/not/exist.mdif", "b.mdif").is_err());
    }
}
