/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use clap::ArgMatches;
use mdif_core::options::DecoderOptions;

pub mod global_options;

/// The matches of the invoked subcommand, or the top level ones
/// if none was given.
///
/// Global flags are visible from both.
pub fn active_matches(options: &ArgMatches) -> &ArgMatches {
    options.subcommand().map_or(options, |(_, sub)| sub)
}

pub fn get_decoder_options(options: &ArgMatches) -> DecoderOptions {
    let max_width = options.get_one::<u16>("max-width").copied().unwrap_or(1024);
    let max_height = options
        .get_one::<u16>("max-height")
        .copied()
        .unwrap_or(1024);

    DecoderOptions::default()
        .set_max_width(usize::from(max_width))
        .set_max_height(usize::from(max_height))
}
