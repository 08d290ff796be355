//! Interactive analysis of one or two sequences.

use std::io::{BufRead, Write};
use crate::{
    Error,
    err::add_path,
    ext::fmt::Percent,
    seq::{
        gc_percentage, mutation_check, similarity_percentage, disease_detection,
        motif::{self, Rule, MotifResult},
    },
};

/// Writes the prompt and reads one line, without surrounding whitespace.
/// End of input is read as an empty line.
fn prompt(input: &mut impl BufRead, out: &mut impl Write, message: &str) -> Result<String, Error> {
    write!(out, "{}", message).map_err(add_path!(!))?;
    out.flush().map_err(add_path!(!))?;
    let mut line = String::new();
    input.read_line(&mut line).map_err(add_path!(!))?;
    Ok(line.trim().to_owned())
}

/// Runs the interactive session: asks for two sequences and a mutation pattern, prints all statistics.
/// If `rules` are given, sequence 1 is additionally scanned with the motif catalogue,
/// and the scan results are returned.
pub fn interactive(
    input: &mut impl BufRead,
    out: &mut impl Write,
    rules: Option<&[Rule]>,
) -> Result<Vec<MotifResult>, Error>
{
    writeln!(out, "----- DNA Sequence Analyzer -----").map_err(add_path!(!))?;
    let seq1 = prompt(input, out, "Enter DNA Sequence 1: ")?;
    let seq2 = prompt(input, out, "Enter DNA Sequence 2 (optional for comparison): ")?;
    log::debug!("Sequence 1: {} characters, sequence 2: {} characters", seq1.chars().count(), seq2.chars().count());

    writeln!(out, "\nGC Content of Sequence 1: {}%", Percent(gc_percentage(&seq1))).map_err(add_path!(!))?;
    if !seq2.is_empty() {
        writeln!(out, "GC Content of Sequence 2: {}%", Percent(gc_percentage(&seq2))).map_err(add_path!(!))?;
    }

    let mutation = prompt(input, out, "\nEnter mutation pattern to detect (e.g., ATG): ")?;
    if mutation.is_empty() {
        log::warn!("Empty mutation pattern matches at every position");
    }
    writeln!(out, "Occurrences of '{}' in Sequence 1: {}", mutation, mutation_check(&seq1, &mutation))
        .map_err(add_path!(!))?;

    if !seq2.is_empty() {
        writeln!(out, "\nSimilarity between Sequence 1 and Sequence 2: {}%",
            Percent(similarity_percentage(&seq1, &seq2))).map_err(add_path!(!))?;
    }

    let findings = disease_detection(&seq1);
    if findings.is_empty() {
        writeln!(out, "\nNo known disease mutations detected in Sequence 1.").map_err(add_path!(!))?;
    } else {
        writeln!(out, "\n--- Potential Disease-Linked Mutations Detected ---").map_err(add_path!(!))?;
        for finding in findings.iter() {
            writeln!(out, "- {}", finding).map_err(add_path!(!))?;
        }
    }

    let mut results = Vec::new();
    if let Some(rules) = rules {
        results = motif::scan_rules(&seq1.to_uppercase(), rules);
        write_motifs(out, &results).map_err(add_path!(!))?;
    }

    writeln!(out, "\n----- Analysis Complete -----").map_err(add_path!(!))?;
    out.flush().map_err(add_path!(!))?;
    Ok(results)
}

fn write_motifs(out: &mut impl Write, results: &[MotifResult]) -> std::io::Result<()> {
    if results.is_empty() {
        return writeln!(out, "\nNo motif rules could be applied to Sequence 1.");
    }
    writeln!(out, "\n--- Motif Scan of Sequence 1 ---")?;
    for res in results.iter() {
        write!(out, "- {} [{}]: {} match{}", res.name, res.category, res.count,
            if res.count == 1 { "" } else { "es" })?;
        if !res.examples.is_empty() {
            write!(out, " ({})", res.examples.join(", "))?;
        }
        writeln!(out)?;
    }
    Ok(())
}
