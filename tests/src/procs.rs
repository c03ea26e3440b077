/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use mdif::{Channel, ErrorKind, MdifImage};
use mdif_core::bytestream::MemoryStorage;
use mdif_procs::{antialias, grayscale, grayscale_into};
use nanorand::WyRand;

use crate::random_image;

/// Red fading into blue, like the gradient the command line tool draws
fn red_to_blue(width: i16) -> MdifImage {
    let mut image = MdifImage::new(width, 1);
    let span = u32::from(width.unsigned_abs()) - 1;

    for x in 0..width as usize {
        let blue = (255 * x as u32 / span) as u8;
        image.set_pixel(x, 0, [255 - blue, 0, blue, 255]).unwrap();
    }
    image
}

#[test]
fn gradient_luma_falls_from_red_to_blue() {
    let mut storage = MemoryStorage::new();
    mdif::write_to(&mut storage, "gradient.mdif", &red_to_blue(5)).unwrap();
    let image = mdif::read_from(&mut storage, "gradient.mdif").unwrap();

    let luma = grayscale(&image).unwrap();

    assert!((luma[0] - 0.299).abs() < 1e-4);
    assert!((luma[4] - 0.114).abs() < 1e-4);
    assert!(luma.windows(2).all(|w| w[0] > w[1]));
}

#[test]
fn antialias_survives_a_round_trip() {
    let mut rng = WyRand::new_seed(17);
    let image = random_image(&mut rng, 40, 30);

    let smooth = antialias(&image).unwrap();
    assert_eq!(smooth.dimensions(), image.dimensions());

    let mut storage = MemoryStorage::new();
    mdif::write_to(&mut storage, "smooth.mdif", &smooth).unwrap();
    assert_eq!(mdif::read_from(&mut storage, "smooth.mdif").unwrap(), smooth);
}

#[test]
fn antialias_pulls_outliers_toward_background() {
    let mut image = MdifImage::new(9, 9);
    for channel in Channel::ALL {
        image.channel_mut(channel).fill(200);
    }
    image.set_pixel(4, 4, [0, 0, 0, 0]).unwrap();

    let smooth = antialias(&image).unwrap();
    let center = smooth.pixel(4, 4).unwrap();

    for value in center {
        assert!(value > 0 && value < 200);
    }
    // far from the outlier nothing changes
    assert_eq!(smooth.pixel(0, 0), Some([200; 4]));
}

#[test]
fn procs_refuse_unstorable_images() {
    let image = MdifImage::new(1025, 1);

    assert_eq!(grayscale(&image).unwrap_err().kind(), ErrorKind::ImageError);
    assert_eq!(antialias(&image).unwrap_err().kind(), ErrorKind::ImageError);

    let mut out = [0.0_f32; 1];
    let err = grayscale_into(&MdifImage::new(2, 1), &mut out).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
}
