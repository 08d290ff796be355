//! Fixed marker patterns, standing in for disease-linked mutations.
//! These are didactic and not medically meaningful.

use std::fmt::{self, Display, Formatter};

/// Condition, flagged by one of the markers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Finding {
    /// Name of the condition.
    pub condition: &'static str,
    /// Short description of the triggering pattern.
    pub trigger: &'static str,
}

impl Display for Finding {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{} ({})", self.condition, self.trigger)
    }
}

/// Marker: finding + test over an upper-case sequence.
struct Marker {
    finding: Finding,
    test: fn(&[u8]) -> bool,
}

/// Does `seq` contain at least `min_copies` contiguous copies of `unit`?
/// Empty unit never forms a repeat.
pub fn has_tandem_repeat(seq: &[u8], unit: &[u8], min_copies: usize) -> bool {
    if unit.is_empty() {
        return false;
    }
    if min_copies == 0 {
        return true;
    }
    let span = unit.len() * min_copies;
    if seq.len() < span {
        return false;
    }
    (0..=seq.len() - span).any(|start|
        seq[start..start + span].chunks_exact(unit.len()).all(|chunk| chunk == unit))
}

fn contains(seq: &[u8], subseq: &[u8]) -> bool {
    seq.windows(subseq.len()).any(|window| window == subseq)
}

/// Markers in the output order.
const MARKERS: [Marker; 4] = [
    Marker {
        finding: Finding { condition: "Sickle Cell Anemia", trigger: "GTG mutation" },
        test: |seq| contains(seq, b"GTG"),
    },
    Marker {
        finding: Finding { condition: "Huntington's Disease", trigger: "CAG repeat expansion" },
        test: |seq| has_tandem_repeat(seq, b"CAG", 3),
    },
    Marker {
        finding: Finding { condition: "Tay-Sachs Disease", trigger: "TATC insertion" },
        test: |seq| contains(seq, b"TATC"),
    },
    Marker {
        finding: Finding { condition: "Achondroplasia", trigger: "G380R mutation" },
        test: |seq| contains(seq, b"CGC"),
    },
];

/// Tests all markers independently (case-insensitive) and returns the matching findings.
/// Output order is fixed and does not depend on the marker positions in the sequence.
pub fn disease_detection(seq: &str) -> Vec<Finding> {
    let seq = seq.to_uppercase();
    MARKERS.iter()
        .filter(|marker| (marker.test)(seq.as_bytes()))
        .map(|marker| marker.finding)
        .collect()
}
