/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use mdif::MdifImage;

use crate::errors::ProcErrors;

/// Refuse images whose dimensions could never have been stored
pub(crate) fn check_image(image: &MdifImage) -> Result<(), ProcErrors> {
    if !image.has_valid_dimensions() {
        return Err(ProcErrors::ImageError(image.width(), image.height()));
    }
    Ok(())
}
