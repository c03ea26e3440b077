/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Synthetic test images
use mdif::MdifImage;

/// A horizontal gradient, red on the left fading to blue on the right
///
/// Green is zero and alpha opaque.
#[allow(clippy::cast_possible_truncation)]
pub fn gradient(width: i16, height: i16) -> MdifImage {
    let mut image = MdifImage::new(width, height);
    let (w, _) = image.dimensions();

    if w == 0 {
        return image;
    }
    // a single column has nothing to fade across
    let span = (w - 1).max(1);

    let red_row: Vec<u8> = (0..w).map(|x| (255 * (w - 1 - x) / span) as u8).collect();
    let blue_row: Vec<u8> = (0..w).map(|x| (255 * x / span) as u8).collect();

    for row in image.red_mut().chunks_exact_mut(w) {
        row.copy_from_slice(&red_row);
    }
    for row in image.blue_mut().chunks_exact_mut(w) {
        row.copy_from_slice(&blue_row);
    }
    image.alpha_mut().fill(255);

    image
}

/// A filled opaque white circle centered on a `size` by `size`
/// transparent black image
pub fn circle(size: i16, radius: u16) -> MdifImage {
    let mut image = MdifImage::new(size, size);
    let (width, height) = image.dimensions();

    let center = i64::from(size) / 2;
    let radius = i64::from(radius);

    for y in 0..height {
        for x in 0..width {
            let dx = x as i64 - center;
            let dy = y as i64 - center;

            if dx * dx + dy * dy <= radius * radius {
                let pos = y * width + x;
                image.red_mut()[pos] = 255;
                image.green_mut()[pos] = 255;
                image.blue_mut()[pos] = 255;
                image.alpha_mut()[pos] = 255;
            }
        }
    }
    image
}
