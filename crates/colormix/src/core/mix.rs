use super::{cmyk_to_rgb, rgb_to_cmyk, to_24bit, ColorModel};
use crate::Float;

/// Mix the 24-bit colors with the given percentages in the given model.
///
/// The caller is responsible for providing as many percentages as colors.
/// In RGB, the percentages are used as is, i.e., divided by 100. In CMYK, they
/// are normalized by their total, and a zero total produces black.
pub(crate) fn mix<'c, C>(model: ColorModel, colors: C, percentages: &[Float]) -> [u8; 3]
where
    C: IntoIterator<Item = &'c [u8; 3]>,
{
    match model {
        ColorModel::Rgb => {
            let mut channels: [Float; 3] = [0.0; 3];
            for (color, percentage) in colors.into_iter().zip(percentages) {
                let weight = percentage / 100.0;
                for (channel, value) in channels.iter_mut().zip(color) {
                    *channel += Float::from(*value) * weight;
                }
            }

            to_24bit(&channels)
        }
        ColorModel::Cmyk => {
            let total: Float = percentages.iter().sum();
            if total == 0.0 || !total.is_finite() {
                return [0, 0, 0];
            }

            let mut components: [Float; 4] = [0.0; 4];
            for (color, percentage) in colors.into_iter().zip(percentages) {
                let weight = percentage / total;
                for (component, value) in components.iter_mut().zip(rgb_to_cmyk(color)) {
                    *component += value * weight;
                }
            }

            cmyk_to_rgb(&components)
        }
    }
}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use super::mix;
    use crate::ColorModel;

    const RED: [u8; 3] = [255, 0, 0];
    const BLUE: [u8; 3] = [0, 0, 255];
    const BLACK: [u8; 3] = [0, 0, 0];

    #[test]
    fn test_single_color() {
        for model in [ColorModel::Rgb, ColorModel::Cmyk] {
            for color in [[0x12, 0x34, 0x56], [0, 0, 0], [255, 255, 255], [1, 2, 3]] {
                assert_eq!(mix(model, &[color], &[100.0]), color, "{}", model);
            }
        }
    }

    #[test]
    fn test_all_or_nothing() {
        assert_eq!(mix(ColorModel::Rgb, &[RED, BLUE], &[100.0, 0.0]), RED);
        assert_eq!(mix(ColorModel::Rgb, &[RED, BLUE], &[0.0, 100.0]), BLUE);
        assert_eq!(mix(ColorModel::Cmyk, &[RED, BLUE], &[100.0, 0.0]), RED);
    }

    #[test]
    fn test_half_and_half() {
        assert_eq!(
            mix(ColorModel::Rgb, &[RED, BLUE], &[50.0, 50.0]),
            [0x80, 0x00, 0x80]
        );
        assert_eq!(
            mix(ColorModel::Cmyk, &[RED, BLUE], &[50.0, 50.0]),
            [0x80, 0x00, 0x80]
        );

        // Key darkens green and blue twice as much as red.
        assert_eq!(
            mix(ColorModel::Cmyk, &[RED, BLACK], &[50.0, 50.0]),
            [0x80, 0x40, 0x40]
        );
        assert_eq!(
            mix(ColorModel::Rgb, &[RED, BLACK], &[50.0, 50.0]),
            [0x80, 0x00, 0x00]
        );
    }

    #[test]
    fn test_degenerate() {
        let nothing: [[u8; 3]; 0] = [];
        for model in [ColorModel::Rgb, ColorModel::Cmyk] {
            assert_eq!(mix(model, &nothing, &[]), BLACK);
            assert_eq!(mix(model, &[RED, BLUE], &[0.0, 0.0]), BLACK);
        }
    }

    #[test]
    fn test_cmyk_normalizes() {
        assert_eq!(
            mix(ColorModel::Cmyk, &[RED, BLUE], &[1.0, 1.0]),
            mix(ColorModel::Cmyk, &[RED, BLUE], &[50.0, 50.0])
        );
        assert_eq!(mix(ColorModel::Rgb, &[RED, BLUE], &[1.0, 1.0]), [3, 0, 3]);
    }
}
