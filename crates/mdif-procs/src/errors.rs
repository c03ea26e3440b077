/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use core::fmt::{Debug, Display, Formatter};

use mdif::ErrorKind;

/// Errors returned by pixel operations
#[derive(Copy, Clone, Eq, PartialEq)]
pub enum ProcErrors {
    /// The image has a width or height outside `1..=1024`
    ///
    /// width, height
    ImageError(i16, i16),
    /// A caller provided buffer does not fit the image
    ///
    /// expected, found
    InvalidArgument(usize, usize)
}

impl ProcErrors {
    pub const fn kind(&self) -> ErrorKind {
        match self {
            ProcErrors::ImageError(..) => ErrorKind::ImageError,
            ProcErrors::InvalidArgument(..) => ErrorKind::InvalidArgument
        }
    }
}

impl Debug for ProcErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            ProcErrors::ImageError(width, height) => {
                writeln!(f, "Unusable image of {width}x{height}")
            }
            ProcErrors::InvalidArgument(expected, found) => {
                writeln!(
                    f,
                    "Unusable buffer of {found} values, the image needs {expected}"
                )
            }
        }
    }
}

impl Display for ProcErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "{:?}", self)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ProcErrors {}
