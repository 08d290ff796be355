use crate::algo::math::percentage;

/// Percentage of identical characters at the same positions, computed over the shorter sequence.
/// Comparison is case-sensitive, and the tail of the longer sequence is ignored.
/// Returns None if either sequence is empty.
pub fn similarity_percentage(seq1: &str, seq2: &str) -> Option<f64> {
    let min_len = seq1.chars().count().min(seq2.chars().count());
    let matches = seq1.chars().zip(seq2.chars()).filter(|(a, b)| a == b).count();
    percentage(matches, min_len)
}

/// Same as `similarity_percentage`, but returns 0 if either sequence is empty.
pub fn sequence_similarity(seq1: &str, seq2: &str) -> f64 {
    similarity_percentage(seq1, seq2).unwrap_or(0.0)
}
