//! Scanning a sequence with a catalogue of regex motif rules.

use std::{
    fs,
    io::{self, Write},
    path::Path,
};
use regex::{Regex, RegexBuilder};
use crate::{
    Error,
    err::{add_path, error},
};

/// At most this many matched texts are kept for each rule.
pub const MAX_EXAMPLES: usize = 5;

/// Flags, used when the rule source is not written as `/body/flags`.
const DEFAULT_FLAGS: &'static str = "gi";

/// Motif rule.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Rule {
    pub id: u64,
    pub name: String,
    pub category: String,
    /// Regular expression source, either plain or in the `/body/flags` form.
    /// Rules without source are skipped during scanning.
    pub source: Option<String>,
}

impl Rule {
    pub fn new(id: u64, name: impl Into<String>, category: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            category: category.into(),
            source: Some(source.into()),
        }
    }

    /// Loads rule from a JSON object with keys `id`, `name`, `category` and optional `regex` or `pattern`.
    /// `regex` takes precedence over `pattern`.
    pub fn load(obj: &json::JsonValue) -> Result<Self, Error> {
        let id = obj["id"].as_u64().ok_or_else(|| error!(ParsingError,
            "Failed to parse motif rule '{}': missing or incorrect field 'id'", obj))?;
        let name = obj["name"].as_str().ok_or_else(|| error!(ParsingError,
            "Failed to parse motif rule '{}': missing or incorrect field 'name'", obj))?;
        let category = obj["category"].as_str().ok_or_else(|| error!(ParsingError,
            "Failed to parse motif rule '{}': missing or incorrect field 'category'", obj))?;
        let source = obj["regex"].as_str().or_else(|| obj["pattern"].as_str());
        Ok(Self {
            id,
            name: name.to_owned(),
            category: category.to_owned(),
            source: source.map(str::to_owned),
        })
    }

    /// Compiles rule source. Returns None if the source is missing or empty.
    pub fn regex(&self) -> Option<Result<Regex, regex::Error>> {
        match self.source.as_deref() {
            None | Some("") => None,
            Some(s) => Some(build_regex(s)),
        }
    }
}

lazy_static::lazy_static! {
    /// Catalogue, used when no rules file is provided.
    pub static ref DEFAULT_RULES: Vec<Rule> = vec![
        Rule::new(1, "AT-rich motif", "Motif", "AT{3,}"),
        Rule::new(2, "CpG island", "Epigenetics", "CG"),
        Rule::new(3, "Poly-A tail", "Motif", "A{6,}"),
    ];

    static ref DELIMITED: Regex = Regex::new(r"^/(.*)/([gimsuy]*)$").unwrap();
}

/// Builds regex from the `/body/flags` form or from the plain source (flags `gi` are used then).
/// Flags `i` (case-insensitive), `m` (multi-line) and `s` (dot matches new line) are supported,
/// flags `g`, `u` and `y` are accepted and ignored.
pub fn build_regex(source: &str) -> Result<Regex, regex::Error> {
    let (body, flags) = match DELIMITED.captures(source) {
        Some(caps) => {
            let (_, [body, flags]) = caps.extract();
            (body, flags)
        }
        None => (source, DEFAULT_FLAGS),
    };
    RegexBuilder::new(body)
        .case_insensitive(flags.contains('i'))
        .multi_line(flags.contains('m'))
        .dot_matches_new_line(flags.contains('s'))
        .build()
}

/// Single regex match.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Hit<'a> {
    pub start: usize,
    pub text: &'a str,
}

/// Returns all non-overlapping matches, from left to right.
pub fn scan<'a>(seq: &'a str, regex: &Regex) -> Vec<Hit<'a>> {
    regex.find_iter(seq).map(|m| Hit { start: m.start(), text: m.as_str() }).collect()
}

/// Scan summary for one rule.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MotifResult {
    pub id: u64,
    pub name: String,
    pub category: String,
    pub regex: String,
    pub count: usize,
    /// First `MAX_EXAMPLES` matched texts.
    pub examples: Vec<String>,
}

/// Scans the sequence with every rule. Rules without source or with invalid regex are skipped.
pub fn scan_rules(seq: &str, rules: &[Rule]) -> Vec<MotifResult> {
    let mut results = Vec::with_capacity(rules.len());
    for rule in rules {
        let regex = match rule.regex() {
            Some(Ok(regex)) => regex,
            Some(Err(e)) => {
                log::warn!("Skipping motif rule '{}': cannot compile regex: {}", rule.name, e);
                continue;
            }
            None => {
                log::warn!("Skipping motif rule '{}': no regex or pattern", rule.name);
                continue;
            }
        };
        let hits = scan(seq, &regex);
        log::debug!("    Motif rule '{}': {} matches", rule.name, hits.len());
        results.push(MotifResult {
            id: rule.id,
            name: rule.name.clone(),
            category: rule.category.clone(),
            regex: rule.source.clone().unwrap_or_default(),
            count: hits.len(),
            examples: hits.iter().take(MAX_EXAMPLES).map(|hit| hit.text.to_owned()).collect(),
        });
    }
    results
}

/// Parses motif catalogue from JSON text: an array of rule objects.
pub fn parse_rules(text: &str) -> Result<Vec<Rule>, Error> {
    let obj = json::parse(text)?;
    if let json::JsonValue::Array(arr) = &obj {
        arr.iter().map(Rule::load).collect()
    } else {
        Err(error!(ParsingError, "Motif catalogue must be a JSON array of rules"))
    }
}

/// Loads motif catalogue from a JSON file.
pub fn load_rules(filename: &Path) -> Result<Vec<Rule>, Error> {
    let text = fs::read_to_string(filename).map_err(add_path!(filename))?;
    let rules = parse_rules(&text)?;
    log::info!("Loaded {} motif rules from {}", rules.len(), crate::ext::fmt::path(filename));
    Ok(rules)
}

/// Writes a single CSV value in double quotes (inner quotes are doubled).
fn write_quoted(f: &mut impl Write, val: &str) -> io::Result<()> {
    write!(f, "\"{}\"", val.replace('"', "\"\""))
}

/// Writes motif results as CSV with columns Test, Category, Regex, Matches, Examples.
/// Examples are joined with a space.
pub fn write_csv(f: &mut impl Write, results: &[MotifResult]) -> io::Result<()> {
    writeln!(f, "\"Test\",\"Category\",\"Regex\",\"Matches\",\"Examples\"")?;
    for res in results {
        write_quoted(f, &res.name)?;
        write!(f, ",")?;
        write_quoted(f, &res.category)?;
        write!(f, ",")?;
        write_quoted(f, &res.regex)?;
        write!(f, ",\"{}\",", res.count)?;
        write_quoted(f, &res.examples.join(" "))?;
        writeln!(f)?;
    }
    Ok(())
}

/// Writes the catalogue without scanning: id, name, category and regex source of every rule.
/// Rules without source are shown with `-`.
pub fn write_catalog(f: &mut impl Write, rules: &[Rule]) -> io::Result<()> {
    writeln!(f, "{:>4}  {}", "#", "Name [Category]  Pattern")?;
    for rule in rules {
        writeln!(f, "{:>4}  {} [{}]  {}", rule.id, rule.name, rule.category,
            rule.source.as_deref().filter(|s| !s.is_empty()).unwrap_or("-"))?;
    }
    Ok(())
}
