use crate::error::ColorFormatError;

/// Parse a 24-bit color in hexadecimal format.
///
/// The leading `#` is optional and the six hexadecimal digits may use either
/// case. If successful, this function returns the three coordinates as
/// unsigned bytes.
pub(crate) fn parse_hex(s: &str) -> Result<[u8; 3], ColorFormatError> {
    let digits = s.strip_prefix('#').unwrap_or(s);
    if digits.len() != 6 {
        return Err(ColorFormatError::UnexpectedCharacters);
    } else if !digits.is_ascii() {
        return Err(ColorFormatError::UnexpectedCharacters);
    }

    fn parse_coordinate(s: &str, index: usize) -> Result<u8, ColorFormatError> {
        let t = s
            .get(2 * index..2 * (index + 1))
            .ok_or(ColorFormatError::UnexpectedCharacters)?;
        if !t.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ColorFormatError::MalformedHex);
        }
        u8::from_str_radix(t, 16).map_err(|_| ColorFormatError::MalformedHex)
    }

    let c1 = parse_coordinate(digits, 0)?;
    let c2 = parse_coordinate(digits, 1)?;
    let c3 = parse_coordinate(digits, 2)?;
    Ok([c1, c2, c3])
}

/// Format the packed 24-bit color as `#RRGGBB` with uppercase digits.
pub(crate) fn format_hex(packed: u32) -> String {
    format!("#{:06X}", packed & 0xff_ffff)
}

/// Pack the three 8-bit coordinates into one 24-bit integer.
#[inline]
pub(crate) fn pack(coordinates: [u8; 3]) -> u32 {
    let [r, g, b] = coordinates;
    (u32::from(r) << 16) | (u32::from(g) << 8) | u32::from(b)
}
