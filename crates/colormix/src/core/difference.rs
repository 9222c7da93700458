use super::{rgb_to_cmyk, ColorModel};
use crate::Float;

/// Compute the Euclidian distance between the two coordinate slices.
#[inline]
fn euclidian(coordinates1: &[Float], coordinates2: &[Float]) -> Float {
    coordinates1
        .iter()
        .zip(coordinates2)
        .map(|(c1, c2)| {
            let delta = c1 - c2;
            delta * delta
        })
        .sum::<Float>()
        .sqrt()
}

/// Compute the distance between the two 24-bit colors in the given model.
///
/// For RGB, this function computes the Euclidian distance between the three
/// channels. For CMYK, it converts both colors and computes the Euclidian
/// distance between the four components. No channel or component is weighted.
pub(crate) fn distance(model: ColorModel, color1: &[u8; 3], color2: &[u8; 3]) -> Float {
    match model {
        ColorModel::Rgb => {
            let [r1, g1, b1] = (*color1).map(Float::from);
            let [r2, g2, b2] = (*color2).map(Float::from);
            euclidian(&[r1, g1, b1], &[r2, g2, b2])
        }
        ColorModel::Cmyk => euclidian(&rgb_to_cmyk(color1), &rgb_to_cmyk(color2)),
    }
}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use super::distance;
    use crate::{assert_close_enough, ColorModel};

    const SAMPLES: [[u8; 3]; 6] = [
        [0, 0, 0],
        [255, 255, 255],
        [0x12, 0x34, 0x56],
        [255, 0, 0],
        [0, 0, 255],
        [0x80, 0x00, 0x80],
    ];

    #[test]
    fn test_identity_and_symmetry() {
        for model in [ColorModel::Rgb, ColorModel::Cmyk] {
            for color1 in &SAMPLES {
                assert_eq!(distance(model, color1, color1), 0.0);

                for color2 in &SAMPLES {
                    let d = distance(model, color1, color2);
                    assert!(d >= 0.0, "{} {:?} {:?}", model, color1, color2);
                    assert!(d <= model.max_distance() + 1e-3);
                    assert_close_enough!(d, distance(model, color2, color1));
                }
            }
        }
    }

    #[test]
    fn test_triangle_inequality() {
        for model in [ColorModel::Rgb, ColorModel::Cmyk] {
            for a in &SAMPLES {
                for b in &SAMPLES {
                    for c in &SAMPLES {
                        let direct = distance(model, a, c);
                        let detour = distance(model, a, b) + distance(model, b, c);
                        assert!(direct <= detour + 1e-3, "{} {:?} {:?} {:?}", model, a, b, c);
                    }
                }
            }
        }
    }

    #[test]
    fn test_extremes() {
        let black = [0, 0, 0];
        let white = [255, 255, 255];

        assert_close_enough!(
            distance(ColorModel::Rgb, &black, &white),
            ColorModel::Rgb.max_distance()
        );
        assert!((distance(ColorModel::Rgb, &black, &white) - 441.67).abs() < 0.01);
        assert_close_enough!(distance(ColorModel::Cmyk, &black, &white), 100.0);
        assert_close_enough!(
            distance(ColorModel::Cmyk, &[255, 0, 0], &[0, 255, 255]),
            (30_000.0 as crate::Float).sqrt()
        );
    }
}
