/// Counts non-overlapping occurrences of `pattern` in `seq`, ignoring case.
/// Scanning goes left to right and resumes right after each match.
///
/// Empty pattern matches at every character boundary, so the result is `number of characters + 1`.
pub fn mutation_check(seq: &str, pattern: &str) -> usize {
    let seq = seq.to_uppercase();
    let pattern = pattern.to_uppercase();
    seq.matches(pattern.as_str()).count()
}
