/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Smooth an image with a 3x3 box blur
use mdif::{Channel, MdifImage};
use mdif_core::log::trace;

use crate::errors::ProcErrors;
use crate::utils::check_image;

/// Antialias an image, returning a new image of the same dimensions
///
/// Every channel, alpha included, is replaced by the rounded mean of the
/// 3x3 neighbourhood around each pixel. See [`box_blur_3x3`] for how
/// borders are handled.
///
/// # Errors
/// [`ProcErrors::ImageError`] if the image dimensions are outside `1..=1024`
pub fn antialias(image: &MdifImage) -> Result<MdifImage, ProcErrors> {
    check_image(image)?;

    let (width, height) = image.dimensions();

    trace!("Antialiasing {}x{} image", width, height);

    let mut output = MdifImage::new(image.width(), image.height());

    for channel in Channel::ALL {
        box_blur_3x3(
            image.channel(channel),
            output.channel_mut(channel),
            width,
            height
        )?;
    }
    Ok(output)
}

/// Blur one channel with a 3x3 box
///
/// Near borders the window shrinks to the pixels inside the channel, so
/// edges average 6 samples and corners 4. Means round half up,
/// which keeps a uniform channel unchanged.
///
/// # Errors
/// [`ProcErrors::InvalidArgument`] if `in_channel` or `out_channel` does not
/// hold exactly `width * height` values, nothing is written in that case
#[allow(clippy::cast_possible_truncation)]
pub fn box_blur_3x3(
    in_channel: &[u8], out_channel: &mut [u8], width: usize, height: usize
) -> Result<(), ProcErrors> {
    let expected = width.saturating_mul(height);

    for found in [in_channel.len(), out_channel.len()] {
        if found != expected {
            return Err(ProcErrors::InvalidArgument(expected, found));
        }
    }
    if expected == 0 {
        return Ok(());
    }
    for (y, out_row) in out_channel
        .chunks_exact_mut(width)
        .take(height)
        .enumerate()
    {
        let y_start = y.saturating_sub(1);
        let y_end = (y + 1).min(height - 1);

        for (x, out) in out_row.iter_mut().enumerate() {
            let x_start = x.saturating_sub(1);
            let x_end = (x + 1).min(width - 1);

            let mut sum = 0_u32;

            for in_row in in_channel[y_start * width..(y_end + 1) * width].chunks_exact(width) {
                sum += in_row[x_start..=x_end]
                    .iter()
                    .map(|v| u32::from(*v))
                    .sum::<u32>();
            }
            let count = ((y_end - y_start + 1) * (x_end - x_start + 1)) as u32;

            *out = ((sum + count / 2) / count) as u8;
        }
    }
    Ok(())
}
