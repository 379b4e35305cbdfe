//! Conversion between 0-based indices and the single uppercase letters used to label rows
//! and columns (`0 -> 'A'`, `1 -> 'B'`, ...).

use crate::error::MAX_DIMENSION;

/// Returns the label for `index`, or `None` past `'Z'`.
pub fn index_to_letter(index: usize) -> Option<char> {
    if index < MAX_DIMENSION {
        Some((b'A' + index as u8) as char)
    } else {
        None
    }
}

/// Returns the index labelled by `letter`, or `None` if it is not an uppercase ASCII letter.
pub fn letter_to_index(letter: char) -> Option<usize> {
    if letter.is_ascii_uppercase() {
        Some((letter as u8 - b'A') as usize)
    } else {
        None
    }
}

/// The first `count` labels, `"ABC..."`.
pub fn labels(count: usize) -> String {
    (0..count.min(MAX_DIMENSION)).filter_map(index_to_letter).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letters_both_ways() {
        assert_eq!(index_to_letter(0), Some('A'));
        assert_eq!(index_to_letter(2), Some('C'));
        assert_eq!(index_to_letter(25), Some('Z'));
        assert_eq!(index_to_letter(26), None);

        assert_eq!(letter_to_index('A'), Some(0));
        assert_eq!(letter_to_index('Z'), Some(25));
        assert_eq!(letter_to_index('a'), None);
        assert_eq!(letter_to_index('['), None);
        assert_eq!(letter_to_index('É'), None);

        for i in 0..26 {
            assert_eq!(letter_to_index(index_to_letter(i).unwrap()), Some(i));
        }
    }

    #[test]
    fn test_labels() {
        assert_eq!(labels(5), "ABCDE");
        assert_eq!(labels(30).len(), 26);
    }
}
