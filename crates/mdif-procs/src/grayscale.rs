/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Convert an image to normalized luma
//!
//! Luma uses the Rec. 601 weights,
//! `(0.299 * r + 0.587 * g + 0.114 * b) / 255`, alpha is ignored.
use alloc::vec;
use alloc::vec::Vec;

use mdif::MdifImage;
use mdif_core::log::trace;

use crate::errors::ProcErrors;
use crate::utils::check_image;

/// Compute the luma of every pixel, in `[0.0, 1.0]` and row-major order
///
/// # Errors
/// [`ProcErrors::ImageError`] if the image dimensions are outside `1..=1024`
pub fn grayscale(image: &MdifImage) -> Result<Vec<f32>, ProcErrors> {
    check_image(image)?;

    let mut output = vec![0.0; image.pixel_count()];
    grayscale_into(image, &mut output)?;

    Ok(output)
}

/// Compute the luma of every pixel into a caller provided buffer
///
/// Only the first `width * height` values of `output` are written.
///
/// # Errors
/// - [`ProcErrors::ImageError`] if the image dimensions are outside `1..=1024`
/// - [`ProcErrors::InvalidArgument`] if `output` holds fewer than `width * height` values
pub fn grayscale_into(image: &MdifImage, output: &mut [f32]) -> Result<(), ProcErrors> {
    check_image(image)?;

    let pixel_count = image.pixel_count();

    if output.len() < pixel_count {
        return Err(ProcErrors::InvalidArgument(pixel_count, output.len()));
    }
    trace!("Converting {} pixels to luma", pixel_count);

    convert_rgb_to_luma_scalar(
        (image.red(), image.green(), image.blue()),
        &mut output[..pixel_count]
    );
    Ok(())
}

fn convert_rgb_to_luma_scalar((r, g, b): (&[u8], &[u8], &[u8]), luma: &mut [f32]) {
    const R_COEF: f32 = 0.299 / 255.0;
    const G_COEF: f32 = 0.587 / 255.0;
    const B_COEF: f32 = 0.114 / 255.0;

    for (((r_v, g_v), b_v), l_out) in r.iter().zip(g.iter()).zip(b.iter()).zip(luma.iter_mut()) {
        let l = R_COEF * f32::from(*r_v) + G_COEF * f32::from(*g_v) + B_COEF * f32::from(*b_v);
        // the weights sum to one, rounding may push white a hair past it
        *l_out = l.min(1.0);
    }
}
