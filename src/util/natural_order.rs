// src/util/natural_order.rs
use std::cmp::Ordering;

/// Case-insensitive natural-order string comparison.
///
/// Digit runs compare numerically ("Ep 2" < "Ep 10"), everything else
/// compares by lowercased characters. Leading zeros do not affect the
/// numeric value.
pub fn compare_natural(a: &str, b: &str) -> Ordering {
    let a: Vec<char> = a.chars().flat_map(char::to_lowercase).collect();
    let b: Vec<char> = b.chars().flat_map(char::to_lowercase).collect();

    let mut i = 0;
    let mut j = 0;
    while i < a.len() && j < b.len() {
        if a[i].is_ascii_digit() && b[j].is_ascii_digit() {
            let (a_digits, a_next) = digit_run(&a, i);
            let (b_digits, b_next) = digit_run(&b, j);
            // equal-length runs of stripped digits compare lexicographically,
            // shorter runs are smaller numbers
            let ordering = a_digits
                .len()
                .cmp(&b_digits.len())
                .then_with(|| a_digits.cmp(b_digits));
            if ordering != Ordering::Equal {
                return ordering;
            }
            i = a_next;
            j = b_next;
        } else {
            let ordering = a[i].cmp(&b[j]);
            if ordering != Ordering::Equal {
                return ordering;
            }
            i += 1;
            j += 1;
        }
    }
    (a.len() - i).cmp(&(b.len() - j))
}

/// Returns the digit run starting at `start` with leading zeros stripped,
/// and the index just past the run.
fn digit_run(chars: &[char], start: usize) -> (&[char], usize) {
    let mut end = start;
    while end < chars.len() && chars[end].is_ascii_digit() {
        end += 1;
    }
    let mut first = start;
    while first + 1 < end && chars[first] == '0' {
        first += 1;
    }
    (&chars[first..end], end)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_runs_compare_numerically() {
        assert_eq!(compare_natural("Ep 2", "Ep 10"), Ordering::Less);
        assert_eq!(compare_natural("image10", "image2"), Ordering::Greater);
        assert_eq!(compare_natural("01", "1"), Ordering::Equal);
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(compare_natural("My Show", "my show"), Ordering::Equal);
        assert_eq!(compare_natural("Alpha", "beta"), Ordering::Less);
    }

    #[test]
    fn test_plain_lexicographic_fallback() {
        assert_eq!(compare_natural("abc", "abd"), Ordering::Less);
        assert_eq!(compare_natural("abc", "abc def"), Ordering::Less);
        assert_eq!(compare_natural("", ""), Ordering::Equal);
    }

    #[test]
    fn test_mixed_segments() {
        assert_eq!(compare_natural("s1e9", "S1E10"), Ordering::Less);
        assert_eq!(compare_natural("ova 2 part 3", "OVA 2 part 10"), Ordering::Less);
    }
}
