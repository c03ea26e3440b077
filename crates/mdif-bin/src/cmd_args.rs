/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use clap::{value_parser, Arg, ArgAction, Command};

use crate::cmd_args::help_strings::{
    ANTIALIAS_HELP, CIRCLE_HELP, GRADIENT_HELP, GRAYSCALE_HELP, PROBE_HELP
};

pub(crate) mod help_strings;

fn input_arg() -> Arg {
    Arg::new("in")
        .short('i')
        .long("input")
        .help("Input file to read data from")
        .required(true)
}

fn output_arg() -> Arg {
    Arg::new("out")
        .short('o')
        .long("output")
        .help("Output to write the data to")
        .required(true)
}

#[rustfmt::skip]
fn probe() -> Command {
    Command::new("probe")
        .about("Print image metadata as JSON")
        .long_about(PROBE_HELP)
        .arg(Arg::new("in")
            .help("Files to probe")
            .action(ArgAction::Append)
            .num_args(1..)
            .required(true))
}

#[rustfmt::skip]
fn gradient() -> Command {
    Command::new("gradient")
        .about("Create a red to blue gradient image")
        .long_about(GRADIENT_HELP)
        .arg(output_arg())
        .arg(Arg::new("width")
            .long("width")
            .help("Image width")
            .value_parser(value_parser!(i16).range(1..=1024))
            .default_value("256"))
        .arg(Arg::new("height")
            .long("height")
            .help("Image height")
            .value_parser(value_parser!(i16).range(1..=1024))
            .default_value("256"))
}

#[rustfmt::skip]
fn circle() -> Command {
    Command::new("circle")
        .about("Draw a white circle on a transparent image")
        .long_about(CIRCLE_HELP)
        .arg(output_arg())
        .arg(Arg::new("size")
            .long("size")
            .help("Width and height of the image")
            .value_parser(value_parser!(i16).range(1..=1024))
            .default_value("256"))
        .arg(Arg::new("radius")
            .long("radius")
            .help("Circle radius in pixels")
            .value_parser(value_parser!(u16))
            .default_value("50"))
        .arg(Arg::new("antialias")
            .long("antialias")
            .action(ArgAction::SetTrue)
            .help("Smooth the circle edge before writing"))
}

#[rustfmt::skip]
fn grayscale() -> Command {
    Command::new("grayscale")
        .about("Print the luma table of an image")
        .long_about(GRAYSCALE_HELP)
        .arg(input_arg())
        .arg(Arg::new("columns")
            .long("columns")
            .help("Values printed per line")
            .value_parser(value_parser!(u16).range(1..))
            .default_value("5"))
}

#[rustfmt::skip]
fn antialias() -> Command {
    Command::new("antialias")
        .about("Antialias an image")
        .long_about(ANTIALIAS_HELP)
        .arg(input_arg())
        .arg(output_arg())
}

#[rustfmt::skip]
pub fn create_cmd_args() -> Command {
    Command::new("mdif")
        .about("Inspect, create and transform mdif images")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(probe())
        .subcommand(gradient())
        .subcommand(circle())
        .subcommand(grayscale())
        .subcommand(antialias())
        .arg(Arg::new("debug")
            .long("debug")
            .global(true)
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display debug information and higher"))
        .arg(Arg::new("trace")
            .long("trace")
            .global(true)
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display very verbose information"))
        .arg(Arg::new("warn")
            .long("warn")
            .global(true)
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display warnings and errors"))
        .arg(Arg::new("info")
            .long("info")
            .global(true)
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display information about the decoding options"))
        .arg(Arg::new("max-width")
            .long("max-width")
            .global(true)
            .help_heading("ADVANCED")
            .help("Refuse to decode images wider than this")
            .value_parser(value_parser!(u16).range(1..=1024))
            .default_value("1024"))
        .arg(Arg::new("max-height")
            .long("max-height")
            .global(true)
            .help_heading("ADVANCED")
            .help("Refuse to decode images taller than this")
            .value_parser(value_parser!(u16).range(1..=1024))
            .default_value("1024"))
}

#[cfg(test)]
mod tests {
    use crate::cmd_args::create_cmd_args;

    #[test]
    fn command_is_well_formed() {
        create_cmd_args().debug_assert();
    }

    #[test]
    fn defaults_and_globals() {
        let matches = create_cmd_args()
            .try_get_matches_from(["mdif", "gradient", "-o", "out.mdif", "--trace"])
            .unwrap();
        let (name, sub) = matches.subcommand().unwrap();

        assert_eq!(name, "gradient");
        assert_eq!(sub.get_one::<i16>("width"), Some(&256));
        assert_eq!(sub.get_one::<bool>("trace"), Some(&true));
        assert_eq!(sub.get_one::<u16>("max-width"), Some(&1024));
    }

    #[test]
    fn out_of_range_dimensions_are_rejected() {
        let result = create_cmd_args().try_get_matches_from([
            "mdif", "gradient", "-o", "out.mdif", "--width", "1025"
        ]);
        assert!(result.is_err());
    }
}
