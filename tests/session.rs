use dnanalyzer::{
    command::analyze::interactive,
    seq::{gc_content, mutation_check, sequence_similarity, disease_detection, motif},
};

fn session(stdin: &str, rules: Option<&[motif::Rule]>) -> (String, Vec<motif::MotifResult>) {
    let mut input = stdin.as_bytes();
    let mut out = Vec::new();
    let results = interactive(&mut input, &mut out, rules).expect("session failed");
    (String::from_utf8(out).expect("non-UTF8 output"), results)
}

#[test]
fn single_sequence_transcript() {
    let (out, results) = session("GTGAAACAGCAGCAG\n\nAAA\n", None);
    assert!(results.is_empty());
    assert_eq!(out, "----- DNA Sequence Analyzer -----\n\
        Enter DNA Sequence 1: Enter DNA Sequence 2 (optional for comparison): \n\
        GC Content of Sequence 1: 53.33%\n\
        \n\
        Enter mutation pattern to detect (e.g., ATG): Occurrences of 'AAA' in Sequence 1: 1\n\
        \n\
        --- Potential Disease-Linked Mutations Detected ---\n\
        - Sickle Cell Anemia (GTG mutation)\n\
        - Huntington's Disease (CAG repeat expansion)\n\
        \n\
        ----- Analysis Complete -----\n");
}

#[test]
fn two_sequences() {
    let (out, _) = session("ACGT\nACGA\ncg\n", None);
    assert!(out.contains("GC Content of Sequence 1: 50.0%\nGC Content of Sequence 2: 50.0%\n"));
    assert!(out.contains("Occurrences of 'cg' in Sequence 1: 1\n"));
    assert!(out.contains("\nSimilarity between Sequence 1 and Sequence 2: 75.0%\n"));
    assert!(out.contains("\nNo known disease mutations detected in Sequence 1.\n"));
}

#[test]
fn motif_results_are_returned() {
    let (out, results) = session("aaaaaaTTTcg\n\nA\n", Some(motif::DEFAULT_RULES.as_slice()));
    assert_eq!(results.len(), 3);
    assert_eq!(results[0].examples, vec!["ATTT"]);
    assert_eq!(results[1].count, 1);
    assert_eq!(results[2].examples, vec!["AAAAAA"]);
    let motif_pos = out.find("--- Motif Scan of Sequence 1 ---").unwrap();
    let complete_pos = out.find("----- Analysis Complete -----").unwrap();
    assert!(motif_pos < complete_pos);

    let mut csv = Vec::new();
    motif::write_csv(&mut csv, &results).unwrap();
    let csv = String::from_utf8(csv).unwrap();
    assert_eq!(csv.lines().count(), 4);
    assert_eq!(csv.lines().nth(3), Some("\"Poly-A tail\",\"Motif\",\"A{6,}\",\"1\",\"AAAAAA\""));
}

#[test]
fn analyses_are_repeatable() {
    let seq = "GTGCAGCAGCAGTATCCGC";
    assert_eq!(gc_content(seq), gc_content(seq));
    assert_eq!(mutation_check(seq, "cag"), 3);
    assert_eq!(mutation_check(seq, "cag"), mutation_check(seq, "CAG"));
    assert_eq!(sequence_similarity(seq, "GTG"), 100.0);
    assert_eq!(disease_detection(seq), disease_detection(seq));
    assert_eq!(disease_detection(seq).len(), 4);
}

#[test]
fn percentages_follow_original_rounding() {
    let seq1 = format!("G{}", "A".repeat(31));
    let seq2 = format!("G{}", "T".repeat(31));
    let (out, _) = session(&format!("{}\n{}\nG\n", seq1, seq2), None);
    assert!(out.contains("GC Content of Sequence 1: 3.12%\n"));
    assert!(out.contains("GC Content of Sequence 2: 3.12%\n"));
    assert!(out.contains("Similarity between Sequence 1 and Sequence 2: 3.12%\n"));

    let (out, _) = session("NNNN\n\nA\n", None);
    assert!(out.contains("GC Content of Sequence 1: 0%\n"));
}
