use std::{
    fmt::{self, Display},
    path::{Path, PathBuf},
};

/// Pretty path formatting: replace $HOME with ~, put quotes around if needed.
pub fn path(path: &Path) -> String {
    lazy_static::lazy_static!{
        static ref HOME: Option<PathBuf> = std::env::var_os("HOME").map(|s| PathBuf::from(s));
    }
    if let Some(home) = (*HOME).as_ref() {
        if let Ok(suffix) = path.strip_prefix(home) {
            let tilde_path = Path::new("~").join(suffix);
            let s = tilde_path.to_string_lossy();
            return if s.contains(char::is_whitespace) { format!("'{}'", s) } else { s.into_owned() };
        }
    }
    let s = path.to_string_lossy();
    if s.contains(char::is_whitespace) { format!("'{}'", s) } else { s.into_owned() }
}

/// Formats a percentage with the shortest exact representation,
/// but always keeps at least one digit after the decimal point (`50.0`, `33.33`).
/// Undefined percentage (zero denominator) is written as a plain `0`.
#[derive(Clone, Copy, Debug)]
pub struct Percent(pub Option<f64>);

impl Display for Percent {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.0 {
            None => write!(f, "0"),
            Some(val) if val.is_finite() && val.fract() == 0.0 => write!(f, "{:.1}", val),
            Some(val) => write!(f, "{}", val),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_keeps_one_decimal() {
        assert_eq!(Percent(Some(0.0)).to_string(), "0.0");
        assert_eq!(Percent(Some(50.0)).to_string(), "50.0");
        assert_eq!(Percent(Some(100.0)).to_string(), "100.0");
        assert_eq!(Percent(Some(33.33)).to_string(), "33.33");
        assert_eq!(Percent(Some(66.7)).to_string(), "66.7");
    }

    #[test]
    fn undefined_percent() {
        assert_eq!(Percent(None).to_string(), "0");
    }

    #[test]
    fn plain_paths() {
        assert_eq!(path(Path::new("rules.json")), "rules.json");
        assert_eq!(path(Path::new("my rules.json")), "'my rules.json'");
    }
}
