//! GC-content of a sequence.

use crate::algo::math::percentage;

/// Count the number of C,G nucleotides in an upper-case sequence.
pub fn gc_count(seq: &str) -> usize {
    seq.bytes().fold(0, |acc, nt| acc + usize::from(nt == b'C' || nt == b'G'))
}

/// Count the number of A,C,G,T nucleotides in an upper-case sequence.
pub fn valid_count(seq: &str) -> usize {
    seq.bytes().fold(0, |acc, nt| acc + usize::from(matches!(nt, b'A' | b'C' | b'G' | b'T')))
}

/// Calculate GC-content (between 0 and 100, rounded to two decimals).
/// Characters other than A,C,G,T (in any case) do not contribute to the denominator.
/// Returns None if there are no valid nucleotides at all.
pub fn gc_percentage(seq: &str) -> Option<f64> {
    let seq = seq.to_uppercase();
    percentage(gc_count(&seq), valid_count(&seq))
}

/// Same as `gc_percentage`, but returns 0 if there are no valid nucleotides.
pub fn gc_content(seq: &str) -> f64 {
    gc_percentage(seq).unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_and_no_gc() {
        assert_eq!(gc_content(""), 0.0);
        assert_eq!(gc_content("AAAA"), 0.0);
        assert_eq!(gc_content("NNNN"), 0.0);
    }

    #[test]
    fn full_and_half() {
        assert_eq!(gc_content("GCGC"), 100.0);
        assert_eq!(gc_content("atgc"), 50.0);
        assert_eq!(gc_content("ATGCGC"), 66.67);
    }

    #[test]
    fn ties_round_to_even() {
        let seq = format!("G{}", "A".repeat(31));
        assert_eq!(gc_content(&seq), 3.12);
        let seq = format!("GCGCG{}", "T".repeat(27));
        assert_eq!(gc_content(&seq), 15.62);
    }

    #[test]
    fn no_valid_nucleotides() {
        assert_eq!(gc_percentage(""), None);
        assert_eq!(gc_percentage("NNNN"), None);
        assert_eq!(gc_percentage("AAAA"), Some(0.0));
    }

    #[test]
    fn ignores_unknown_characters() {
        assert_eq!(gc_content("GCXX"), 100.0);
        assert_eq!(gc_content("G-A-N"), 50.0);
    }
}
