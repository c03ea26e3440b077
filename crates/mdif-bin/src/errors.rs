/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::fmt::{Debug, Display, Formatter};

use mdif::{error_message, ErrorKind, MdifDecodeErrors, MdifEncodeErrors};
use mdif_procs::ProcErrors;

/// Everything that can stop a command
pub enum CliErrors {
    DecodeErrors(MdifDecodeErrors),
    EncodeErrors(MdifEncodeErrors),
    ProcErrors(ProcErrors),
    IoErrors(std::io::Error),
    JsonErrors(serde_json::Error),
    GenericString(String)
}

impl CliErrors {
    /// The library error kind behind this error, if it came from one
    pub fn kind(&self) -> Option<ErrorKind> {
        match self {
            CliErrors::DecodeErrors(err) => Some(err.kind()),
            CliErrors::EncodeErrors(err) => Some(err.kind()),
            CliErrors::ProcErrors(err) => Some(err.kind()),
            _ => None
        }
    }
}

impl Debug for CliErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if let Some(kind) = self.kind() {
            write!(f, "{}: ", error_message(kind))?;
        }
        match self {
            CliErrors::DecodeErrors(err) => writeln!(f, "{err:?}"),
            CliErrors::EncodeErrors(err) => writeln!(f, "{err:?}"),
            CliErrors::ProcErrors(err) => writeln!(f, "{err:?}"),
            CliErrors::IoErrors(err) => writeln!(f, "I/O error {err}"),
            CliErrors::JsonErrors(err) => writeln!(f, "JSON error {err}"),
            CliErrors::GenericString(err) => writeln!(f, "{err}")
        }
    }
}

impl Display for CliErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{:?}", self)
    }
}

impl std::error::Error for CliErrors {}

impl From<MdifDecodeErrors> for CliErrors {
    fn from(value: MdifDecodeErrors) -> Self {
        CliErrors::DecodeErrors(value)
    }
}

impl From<MdifEncodeErrors> for CliErrors {
    fn from(value: MdifEncodeErrors) -> Self {
        CliErrors::EncodeErrors(value)
    }
}

impl From<ProcErrors> for CliErrors {
    fn from(value: ProcErrors) -> Self {
        CliErrors::ProcErrors(value)
    }
}

impl From<std::io::Error> for CliErrors {
    fn from(value: std::io::Error) -> Self {
        CliErrors::IoErrors(value)
    }
}

impl From<serde_json::Error> for CliErrors {
    fn from(value: serde_json::Error) -> Self {
        CliErrors::JsonErrors(value)
    }
}

impl From<String> for CliErrors {
    fn from(value: String) -> Self {
        CliErrors::GenericString(value)
    }
}
