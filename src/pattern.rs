//! # Case-Insensitive Pattern Construction
//!
//! ctpg's regex machinery has no case-insensitive match flag, so every
//! keyword is spelled out as a sequence of two-character classes instead.

/// Builds the case-insensitive character-class pattern for a keyword
///
/// Every character `c` becomes the 4-character bracket expression
/// `[<lower><upper>]`, so `"or"` becomes `"[oO][rR]"`. Characters without a
/// case distinction produce a class with two identical halves; the input is
/// assumed to be a lowercase alphabetic word and is not validated.
#[must_use]
pub fn case_insensitive(keyword: &str) -> String {
    let mut pattern = String::with_capacity(4 * keyword.len());
    for c in keyword.chars() {
        pattern.push('[');
        pattern.push(c.to_ascii_lowercase());
        pattern.push(c.to_ascii_uppercase());
        pattern.push(']');
    }
    pattern
}

#[cfg(test)]
mod tests {
    #[test]
    fn select() {
        assert_eq!(super::case_insensitive("select"), "[sS][eE][lL][eE][cC][tT]");
    }

    #[test]
    fn block_structure() {
        for kw in crate::KEYWORDS {
            let pattern = super::case_insensitive(kw);
            assert_eq!(pattern.len(), 4 * kw.len());
            for (c, block) in kw.chars().zip(pattern.as_bytes().chunks(4)) {
                assert_eq!(block[0], b'[');
                assert_eq!(block[1], c.to_ascii_lowercase() as u8);
                assert_eq!(block[2], c.to_ascii_uppercase() as u8);
                assert_eq!(block[3], b']');
            }
        }
    }

    #[test]
    fn empty() {
        assert_eq!(super::case_insensitive(""), "");
    }
}
