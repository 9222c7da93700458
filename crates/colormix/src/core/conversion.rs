use crate::Float;

/// Convert the floating point channel values to 24-bit representation.
///
/// This function rounds each channel to the nearest integer and then clamps it
/// to `0x00..=0xff`. Not-a-number becomes zero.
pub(crate) fn to_24bit(channels: &[Float; 3]) -> [u8; 3] {
    #[inline]
    fn convert(value: Float) -> u8 {
        if value.is_nan() {
            0
        } else {
            value.round().clamp(0.0, 255.0) as u8
        }
    }

    [convert(channels[0]), convert(channels[1]), convert(channels[2])]
}

// --------------------------------------------------------------------------------------------------------------------

/// Convert 24-bit RGB channels to CMYK percentages.
///
/// The key is the complement of the largest channel. Cyan, magenta, and
/// yellow are the complements of the remaining channels, rescaled to the range
/// left over by the key. Black, whose key is 100%, would require dividing
/// zero by zero and hence is special-cased to exactly `[0, 0, 0, 100]`.
pub(crate) fn rgb_to_cmyk(channels: &[u8; 3]) -> [Float; 4] {
    let [r, g, b] = *channels;
    if r == 0 && g == 0 && b == 0 {
        return [0.0, 0.0, 0.0, 100.0];
    }

    let r = r as Float / 255.0;
    let g = g as Float / 255.0;
    let b = b as Float / 255.0;

    let k = 1.0 - r.max(g).max(b);
    let scale = 1.0 - k;
    let c = (1.0 - r - k) / scale;
    let m = (1.0 - g - k) / scale;
    let y = (1.0 - b - k) / scale;

    [c * 100.0, m * 100.0, y * 100.0, k * 100.0]
}

/// Convert CMYK percentages to 24-bit RGB channels.
///
/// This is the algebraic inverse of [`rgb_to_cmyk`] up to rounding. Since a
/// key of 100% forces all channels to zero, all CMYK quadruples with that key
/// map to black.
pub(crate) fn cmyk_to_rgb(components: &[Float; 4]) -> [u8; 3] {
    let [c, m, y, k] = *components;
    let white = 255.0 * (1.0 - k / 100.0);

    to_24bit(&[
        white * (1.0 - c / 100.0),
        white * (1.0 - m / 100.0),
        white * (1.0 - y / 100.0),
    ])
}

// ====================================================================================================================
