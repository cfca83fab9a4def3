pub static THRESHOLD_HELP: &str = "Minimum channel value for a pixel to be set

Channels are compared on a 0-255 scale, 16 bit images are reduced
to 8 bits first. A pixel is set only if red, green, blue and alpha
all meet their thresholds.";

pub static COMPACT_HELP: &str = "Pack 8 pixels into one byte

Pixels are packed most significant bit first, so the leftmost
pixel of every group of 8 ends up in bit 7.";

pub static REMAINDER_HELP: &str = "Handle widths that are not a multiple of 8

drop: leave trailing pixels of each row out of the array
pad:  emit one extra byte per row, unused low bits are cleared";
