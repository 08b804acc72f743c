// Keytrace Character Mapper
// Static key-code to output-byte tables for the US-QWERTY layout

/// Newline terminator appended when a run ends.
pub const NEWLINE: u8 = 0x0A;

/// Marker emitted for a backspace press. Deliberately outside printable
/// ASCII so transcript consumers can distinguish it from typed text.
pub const BACKSPACE_MARKER: u8 = 0xAE;

/// Sentinel emitted for a key code with no mapping entry. Outside printable
/// ASCII and distinct from every legitimate table output.
pub const UNKNOWN_KEY: u8 = 0xB2;

/// Unshifted glyphs for the main US-QWERTY block.
#[rustfmt::skip]
const UNSHIFTED_GLYPHS: &[(u16, u8)] = &[
    (2,  b'1'), (3,  b'2'), (4,  b'3'), (5,  b'4'), (6,  b'5'),
    (7,  b'6'), (8,  b'7'), (9,  b'8'), (10, b'9'), (11, b'0'),
    (12, b'-'), (13, b'='),
    (16, b'q'), (17, b'w'), (18, b'e'), (19, b'r'), (20, b't'),
    (21, b'y'), (22, b'u'), (23, b'i'), (24, b'o'), (25, b'p'),
    (26, b'['), (27, b']'),
    (30, b'a'), (31, b's'), (32, b'd'), (33, b'f'), (34, b'g'),
    (35, b'h'), (36, b'j'), (37, b'k'), (38, b'l'),
    (39, b';'), (40, b'\''), (41, b'`'), (43, b'\\'),
    (44, b'z'), (45, b'x'), (46, b'c'), (47, b'v'), (48, b'b'),
    (49, b'n'), (50, b'm'),
    (51, b','), (52, b'.'), (53, b'/'),
];

/// Shifted glyphs for the same codes as [`UNSHIFTED_GLYPHS`].
#[rustfmt::skip]
const SHIFTED_GLYPHS: &[(u16, u8)] = &[
    (2,  b'!'), (3,  b'@'), (4,  b'#'), (5,  b'$'), (6,  b'%'),
    (7,  b'^'), (8,  b'&'), (9,  b'*'), (10, b'('), (11, b')'),
    (12, b'_'), (13, b'+'),
    (16, b'Q'), (17, b'W'), (18, b'E'), (19, b'R'), (20, b'T'),
    (21, b'Y'), (22, b'U'), (23, b'I'), (24, b'O'), (25, b'P'),
    (26, b'{'), (27, b'}'),
    (30, b'A'), (31, b'S'), (32, b'D'), (33, b'F'), (34, b'G'),
    (35, b'H'), (36, b'J'), (37, b'K'), (38, b'L'),
    (39, b':'), (40, b'"'), (41, b'~'), (43, b'|'),
    (44, b'Z'), (45, b'X'), (46, b'C'), (47, b'V'), (48, b'B'),
    (49, b'N'), (50, b'M'),
    (51, b'<'), (52, b'>'), (53, b'?'),
];

/// Glyphs for keys whose output ignores shift state.
#[rustfmt::skip]
const NONSHIFTABLE_GLYPHS: &[(u16, u8)] = &[
    (14, BACKSPACE_MARKER), // BACKSPACE
    (15, b'\t'),            // TAB
    (28, NEWLINE),          // ENTER
    (57, b' '),             // SPACE
];

const fn lookup(table: &[(u16, u8)], code: u16) -> u8 {
    let mut i = 0;
    while i < table.len() {
        if table[i].0 == code {
            return table[i].1;
        }
        i += 1;
    }
    UNKNOWN_KEY
}

/// Glyph produced by `code` with shift released. Total; out-of-table codes
/// map to [`UNKNOWN_KEY`].
#[inline]
pub const fn unshifted_glyph(code: u16) -> u8 {
    lookup(UNSHIFTED_GLYPHS, code)
}

/// Glyph produced by `code` with shift engaged. Total; out-of-table codes
/// map to [`UNKNOWN_KEY`].
#[inline]
pub const fn shifted_glyph(code: u16) -> u8 {
    lookup(SHIFTED_GLYPHS, code)
}

/// Glyph produced by a non-shiftable key. Total; out-of-table codes map to
/// [`UNKNOWN_KEY`].
#[inline]
pub const fn nonshiftable_glyph(code: u16) -> u8 {
    lookup(NONSHIFTABLE_GLYPHS, code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unshifted_table_exhaustive() {
        let expected: &[(u16, u8)] = &[
            (2, b'1'),
            (3, b'2'),
            (4, b'3'),
            (5, b'4'),
            (6, b'5'),
            (7, b'6'),
            (8, b'7'),
            (9, b'8'),
            (10, b'9'),
            (11, b'0'),
            (12, b'-'),
            (13, b'='),
            (16, b'q'),
            (17, b'w'),
            (18, b'e'),
            (19, b'r'),
            (20, b't'),
            (21, b'y'),
            (22, b'u'),
            (23, b'i'),
            (24, b'o'),
            (25, b'p'),
            (26, b'['),
            (27, b']'),
            (30, b'a'),
            (31, b's'),
            (32, b'd'),
            (33, b'f'),
            (34, b'g'),
            (35, b'h'),
            (36, b'j'),
            (37, b'k'),
            (38, b'l'),
            (39, b';'),
            (40, b'\''),
            (41, b'`'),
            (43, b'\\'),
            (44, b'z'),
            (45, b'x'),
            (46, b'c'),
            (47, b'v'),
            (48, b'b'),
            (49, b'n'),
            (50, b'm'),
            (51, b','),
            (52, b'.'),
            (53, b'/'),
        ];
        for &(code, glyph) in expected {
            assert_eq!(unshifted_glyph(code), glyph, "code {}", code);
        }
    }

    #[test]
    fn test_shifted_table_exhaustive() {
        let expected: &[(u16, u8)] = &[
            (2, b'!'),
            (3, b'@'),
            (4, b'#'),
            (5, b'$'),
            (6, b'%'),
            (7, b'^'),
            (8, b'&'),
            (9, b'*'),
            (10, b'('),
            (11, b')'),
            (12, b'_'),
            (13, b'+'),
            (16, b'Q'),
            (17, b'W'),
            (18, b'E'),
            (19, b'R'),
            (20, b'T'),
            (21, b'Y'),
            (22, b'U'),
            (23, b'I'),
            (24, b'O'),
            (25, b'P'),
            (26, b'{'),
            (27, b'}'),
            (30, b'A'),
            (31, b'S'),
            (32, b'D'),
            (33, b'F'),
            (34, b'G'),
            (35, b'H'),
            (36, b'J'),
            (37, b'K'),
            (38, b'L'),
            (39, b':'),
            (40, b'"'),
            (41, b'~'),
            (43, b'|'),
            (44, b'Z'),
            (45, b'X'),
            (46, b'C'),
            (47, b'V'),
            (48, b'B'),
            (49, b'N'),
            (50, b'M'),
            (51, b'<'),
            (52, b'>'),
            (53, b'?'),
        ];
        for &(code, glyph) in expected {
            assert_eq!(shifted_glyph(code), glyph, "code {}", code);
        }
    }

    #[test]
    fn test_nonshiftable_table() {
        assert_eq!(nonshiftable_glyph(14), BACKSPACE_MARKER);
        assert_eq!(nonshiftable_glyph(15), b'\t');
        assert_eq!(nonshiftable_glyph(28), NEWLINE);
        assert_eq!(nonshiftable_glyph(57), b' ');
    }

    #[test]
    fn test_out_of_table_codes_return_unknown() {
        // ESC, CAPSLOCK, F1, an arbitrary high code
        for code in [1, 58, 59, 0x2ff] {
            assert_eq!(unshifted_glyph(code), UNKNOWN_KEY);
            assert_eq!(shifted_glyph(code), UNKNOWN_KEY);
            assert_eq!(nonshiftable_glyph(code), UNKNOWN_KEY);
        }
    }

    #[test]
    fn test_sentinels_never_collide_with_table_output() {
        for &(_, glyph) in UNSHIFTED_GLYPHS.iter().chain(SHIFTED_GLYPHS) {
            assert_ne!(glyph, UNKNOWN_KEY);
            assert_ne!(glyph, BACKSPACE_MARKER);
        }
        // BACKSPACE_MARKER is a legitimate non-shiftable output; only the
        // unknown sentinel must stay reserved there.
        for &(_, glyph) in NONSHIFTABLE_GLYPHS {
            assert_ne!(glyph, UNKNOWN_KEY);
        }
    }

    #[test]
    fn test_shifted_and_unshifted_cover_the_same_codes() {
        assert_eq!(UNSHIFTED_GLYPHS.len(), SHIFTED_GLYPHS.len());
        for (unshifted, shifted) in UNSHIFTED_GLYPHS.iter().zip(SHIFTED_GLYPHS) {
            assert_eq!(unshifted.0, shifted.0);
        }
    }
}
