// Keytrace Input Layer - Keycode Classification
// Partitions key codes into shift modifiers, non-shiftable keys, and the rest

/// Key codes that toggle the shift state (LEFT_SHIFT, RIGHT_SHIFT).
const SHIFT_KEY_CODES: &[u16] = &[42, 54];

/// Key codes whose output ignores shift state
/// (BACKSPACE, TAB, ENTER, SPACE).
const NONSHIFTABLE_KEY_CODES: &[u16] = &[14, 15, 28, 57];

const fn contains(codes: &[u16], code: u16) -> bool {
    let mut i = 0;
    while i < codes.len() {
        if codes[i] == code {
            return true;
        }
        i += 1;
    }
    false
}

/// Check if a key code is a shift modifier (O(1) over a static array).
#[inline]
pub const fn is_shift_key(code: u16) -> bool {
    contains(SHIFT_KEY_CODES, code)
}

/// Check if a key code produces the same output regardless of shift state.
#[inline]
pub const fn is_nonshiftable_key(code: u16) -> bool {
    contains(NONSHIFTABLE_KEY_CODES, code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_shift_key() {
        assert!(is_shift_key(42)); // LEFT_SHIFT
        assert!(is_shift_key(54)); // RIGHT_SHIFT

        assert!(!is_shift_key(29)); // LEFT_CTRL
        assert!(!is_shift_key(30)); // A
        assert!(!is_shift_key(58)); // CAPSLOCK
    }

    #[test]
    fn test_is_nonshiftable_key() {
        assert!(is_nonshiftable_key(14)); // BACKSPACE
        assert!(is_nonshiftable_key(15)); // TAB
        assert!(is_nonshiftable_key(28)); // ENTER
        assert!(is_nonshiftable_key(57)); // SPACE

        assert!(!is_nonshiftable_key(30)); // A
        assert!(!is_nonshiftable_key(96)); // KPENTER
    }

    #[test]
    fn test_classes_are_disjoint() {
        for code in 0..0x300u16 {
            assert!(
                !(is_shift_key(code) && is_nonshiftable_key(code)),
                "code {} classified as both shift and non-shiftable",
                code
            );
        }
    }
}
