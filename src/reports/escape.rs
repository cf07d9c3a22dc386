//! Text encoding utilities for PDF output.
//!
//! Reports use the standard Type 1 fonts with `WinAnsiEncoding`, so every
//! string drawn on a page has to be converted to single-byte WinAnsi
//! codes first. Product metadata comes from users and may contain:
//! - Characters outside the WinAnsi repertoire (CJK, emoji)
//! - Control characters that would corrupt text operators
//! - Tabs and line breaks inside what should be a single line
//!
//! Delimiter escaping of `(`, `)` and `\` is left to the PDF writer.

/// Replacement byte for characters WinAnsi cannot represent
const REPLACEMENT: u8 = b'?';

/// Encode a string as WinAnsi (Windows-1252) bytes.
///
/// Printable ASCII and Latin-1 map directly; typographic punctuation in
/// the 0x80-0x9F block is mapped to its Windows-1252 slot; anything else
/// becomes `?`. Control characters become spaces.
///
/// # Examples
///
/// ```
/// use product_transparency::reports::escape::encode_win_ansi;
///
/// assert_eq!(encode_win_ansi("Café"), b"Caf\xe9".to_vec());
/// assert_eq!(encode_win_ansi("CO₂"), b"CO?".to_vec());
/// ```
#[must_use]
pub fn encode_win_ansi(s: &str) -> Vec<u8> {
    s.chars().map(win_ansi_byte).collect()
}

fn win_ansi_byte(c: char) -> u8 {
    match c {
        '\t' | '\n' | '\r' => b' ',
        c if c.is_control() => b' ',
        c if (c as u32) < 0x80 => c as u8,
        c if (0xA0..=0xFF).contains(&(c as u32)) => c as u32 as u8,
        '€' => 0x80,
        '‚' => 0x82,
        '„' => 0x84,
        '…' => 0x85,
        '‘' => 0x91,
        '’' => 0x92,
        '“' => 0x93,
        '”' => 0x94,
        '•' => 0x95,
        '–' => 0x96,
        '—' => 0x97,
        '™' => 0x99,
        'Œ' => 0x8C,
        'œ' => 0x9C,
        'Š' => 0x8A,
        'š' => 0x9A,
        'Ž' => 0x8E,
        'ž' => 0x9E,
        'Ÿ' => 0x9F,
        _ => REPLACEMENT,
    }
}

/// Collapse line breaks and tabs so a value renders on one logical line.
///
/// # Examples
///
/// ```
/// use product_transparency::reports::escape::single_line;
///
/// assert_eq!(single_line("Mill A\nMill B\tDhaka"), "Mill A Mill B Dhaka");
/// ```
#[must_use]
pub fn single_line(s: &str) -> String {
    s.split(|c: char| c == '\n' || c == '\r' || c == '\t')
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
