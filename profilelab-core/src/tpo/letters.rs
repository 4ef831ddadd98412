//! Period letters.
//!
//! 0..=25 → `A`..`Z`, 26..=51 → `a`..`z`, then `AA`..`AZ`, `BA`..`BZ`, ...
//! continuing as bijective base-26 (`ZZ` is followed by `AAA`).

pub fn period_letter(index: usize) -> String {
    match index {
        0..=25 => char::from(b'A' + index as u8).to_string(),
        26..=51 => char::from(b'a' + (index - 26) as u8).to_string(),
        _ => bijective_base26(index - 52 + 26),
    }
}

/// Spreadsheet-column style: 0 → A, 25 → Z, 26 → AA.
fn bijective_base26(mut n: usize) -> String {
    let mut out = Vec::new();
    loop {
        out.push(b'A' + (n % 26) as u8);
        if n < 26 {
            break;
        }
        n = n / 26 - 1;
    }
    out.reverse();
    String::from_utf8(out).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_letters() {
        assert_eq!(period_letter(0), "A");
        assert_eq!(period_letter(25), "Z");
        assert_eq!(period_letter(26), "a");
        assert_eq!(period_letter(51), "z");
    }

    #[test]
    fn overflow_letters() {
        assert_eq!(period_letter(52), "AA");
        assert_eq!(period_letter(77), "AZ");
        assert_eq!(period_letter(78), "BA");
        assert_eq!(period_letter(52 + 26 * 26 - 1), "ZZ");
        assert_eq!(period_letter(52 + 26 * 26), "AAA");
    }

    #[test]
    fn letters_are_unique() {
        let letters: std::collections::HashSet<String> = (0..2000).map(period_letter).collect();
        assert_eq!(letters.len(), 2000);
    }
}
