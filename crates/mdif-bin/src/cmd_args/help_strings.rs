/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

pub static PROBE_HELP: &str = "Print image metadata as JSON

Only the 6 byte header of each file is read, channel data
is never loaded, so probing large files is cheap.";

pub static GRADIENT_HELP: &str = "Create a horizontal gradient

Red fades out from the left edge while blue fades in toward
the right edge, green is zero and alpha is fully opaque.";

pub static CIRCLE_HELP: &str = "Draw a filled white circle

The circle is centered in a square, transparent black image.
Pass --antialias to smooth its edge with a 3x3 box blur.";

pub static GRAYSCALE_HELP: &str = "Print the luma of every pixel

Values are between 0.00 and 1.00, printed row by row with
--columns values per line.";

pub static ANTIALIAS_HELP: &str = "Smooth an image with a 3x3 box blur

Every channel, alpha included, is replaced by the mean of the
pixel's neighbourhood. Borders average fewer samples.";
