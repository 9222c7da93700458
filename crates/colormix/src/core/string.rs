use crate::error::ColorFormatError;
use crate::Float;

/// Parse a 24-bit color in hashed hexadecimal format.
///
/// This function trims leading and trailing white space and then expects a
/// `#` followed by exactly six hexadecimal digits, in either case. If
/// successful, it returns the three channels as unsigned bytes.
pub(crate) fn parse_hashed(s: &str) -> Result<[u8; 3], ColorFormatError> {
    let s = s.trim();
    if !s.starts_with('#') {
        return Err(ColorFormatError::UnknownFormat);
    } else if s.len() != 7 {
        return Err(ColorFormatError::UnexpectedCharacters);
    }

    fn parse_channel(s: &str, index: usize) -> Result<u8, ColorFormatError> {
        let t = s
            .get(1 + 2 * index..3 + 2 * index)
            .ok_or(ColorFormatError::UnexpectedCharacters)?;
        if !t.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ColorFormatError::MalformedHex);
        }
        u8::from_str_radix(t, 16).map_err(|_| ColorFormatError::MalformedHex)
    }

    let r = parse_channel(s, 0)?;
    let g = parse_channel(s, 1)?;
    let b = parse_channel(s, 2)?;
    Ok([r, g, b])
}

// --------------------------------------------------------------------------------------------------------------------

/// Format the CMYK components as percentages.
///
/// This function respects the formatter's precision, defaulting to 2 digits
/// past the decimal.
pub(crate) fn format_cmyk(
    components: &[Float; 4],
    f: &mut std::fmt::Formatter<'_>,
) -> std::fmt::Result {
    let precision = f.precision().unwrap_or(2);
    let [c, m, y, k] = *components;

    f.write_fmt(format_args!(
        "C: {:.*}%, M: {:.*}%, Y: {:.*}%, K: {:.*}%",
        precision, c, precision, m, precision, y, precision, k
    ))
}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use super::{parse_hashed, ColorFormatError};

    #[test]
    fn test_parse_hashed() -> Result<(), ColorFormatError> {
        assert_eq!(parse_hashed("#123456")?, [0x12_u8, 0x34, 0x56]);
        assert_eq!(parse_hashed("  #ABCdef \n")?, [0xab_u8, 0xcd, 0xef]);
        assert_eq!(parse_hashed("#000000")?, [0_u8, 0, 0]);
        assert_eq!(parse_hashed("#ffffff")?, [0xff_u8, 0xff, 0xff]);

        assert_eq!(parse_hashed("ffffff"), Err(ColorFormatError::UnknownFormat));
        assert_eq!(parse_hashed(""), Err(ColorFormatError::UnknownFormat));
        assert_eq!(
            parse_hashed("#fff"),
            Err(ColorFormatError::UnexpectedCharacters)
        );
        assert_eq!(
            parse_hashed("#1234567"),
            Err(ColorFormatError::UnexpectedCharacters)
        );
        assert_eq!(
            parse_hashed("#💩00"),
            Err(ColorFormatError::UnexpectedCharacters)
        );
        assert_eq!(parse_hashed("#00ff0g"), Err(ColorFormatError::MalformedHex));
        assert_eq!(parse_hashed("#+1ff00"), Err(ColorFormatError::MalformedHex));

        Ok(())
    }
}
