use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

use crate::input::{Edit, EditEffect, EditRejected, InputBuffer, Key};
use crate::lookup::{CompanyTable, LookupError};
use crate::models::{DecodedRecord, ValidationOutcome};

/// Company names from `explicit`, else from `BOLETO_COMPANY_TABLE`, else
/// only the built-in table.
pub fn load_names(explicit: Option<&Path>) -> Result<CompanyTable, LookupError> {
    let path: Option<PathBuf> = explicit
        .map(Path::to_path_buf)
        .or_else(crate::config::company_table_path);
    match path {
        Some(path) => CompanyTable::load(path),
        None => Ok(CompanyTable::new()),
    }
}

/// Non-empty, non-comment lines of a batch file, trimmed.
pub fn read_lines<P: AsRef<Path>>(path: P) -> Result<Vec<String>, std::io::Error> {
    let content = fs::read_to_string(path)?;
    Ok(content
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty() && !l.starts_with('#'))
        .map(str::to_string)
        .collect())
}

/// Human-readable field listing for a decoded record.
pub fn format_record(record: &DecodedRecord) -> String {
    let mut out = String::new();
    let name = |n: &Option<String>| n.clone().unwrap_or_else(|| "-".to_string());
    let _ = writeln!(out, "  product:      {}", record.product);
    let _ = writeln!(
        out,
        "  segment:      {} ({})",
        record.segment_code,
        name(&record.segment_name)
    );
    let _ = writeln!(out, "  value type:   {}", record.value_type);
    let _ = writeln!(out, "  check digit:  {}", record.error_check_digit);
    let _ = writeln!(out, "  value:        {}", record.value);
    let _ = writeln!(
        out,
        "  company:      {} ({})",
        record.company_id,
        name(&record.company_name)
    );
    let _ = writeln!(out, "  free field:   {}", record.free_field);
    let _ = write!(out, "  payload:      {}", record.payload);
    out
}

/// One-line description of an outcome
pub fn outcome_summary(outcome: &ValidationOutcome) -> String {
    match outcome {
        ValidationOutcome::Valid(record) => format!(
            "valid: company {} value {}",
            record.company_id, record.value
        ),
        ValidationOutcome::Invalid(reason) => format!("invalid: {}", reason),
    }
}

/// Result of feeding one named key into a buffer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyStep {
    /// Key name as given
    pub key: String,
    /// What the buffer did with it
    pub result: Result<EditEffect, EditRejected>,
    /// Masked display after the key
    pub masked: String,
}

/// Feed DOM-style key names into `buffer`, caret kept at the position the
/// previous edits left it.
pub fn replay_keys<I, S>(buffer: &mut InputBuffer, keys: I) -> Vec<KeyStep>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut caret = buffer.len();
    keys.into_iter()
        .map(|name| {
            let name = name.as_ref();
            let key = Key::from_name(name);
            let result = buffer.apply(Edit::key(key).at(caret));
            match (&result, key) {
                (Ok(EditEffect::Changed { caret: next }), _) => caret = *next,
                (Ok(EditEffect::Moved), Key::Left) => caret = caret.saturating_sub(1),
                (Ok(EditEffect::Moved), Key::Right) => caret = (caret + 1).min(buffer.len()),
                (Ok(EditEffect::Moved), Key::Home) => caret = 0,
                (Ok(EditEffect::Moved), Key::End) => caret = buffer.len(),
                _ => {}
            }
            KeyStep {
                key: name.to_string(),
                result,
                masked: buffer.masked(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replay_keys_tracks_caret() {
        let mut buf = InputBuffer::new();
        let steps = replay_keys(&mut buf, ["1", "2", "3", "ArrowLeft", "Backspace", "9", "x"]);
        assert_eq!(buf.digits(), "193");
        assert_eq!(steps.len(), 7);
        assert_eq!(steps[3].result, Ok(EditEffect::Moved));
        assert_eq!(steps[6].result, Err(EditRejected::DisallowedKey));
        assert_eq!(steps[5].masked.trim_end(), "193");
    }

    #[test]
    fn test_replay_home_then_backspace_is_rejected() {
        let mut buf = InputBuffer::new();
        let steps = replay_keys(&mut buf, ["4", "Home", "Backspace", "Delete"]);
        assert_eq!(steps[2].result, Err(EditRejected::AtStart));
        assert!(steps[3].result.is_ok());
        assert!(buf.is_empty());
    }

    #[test]
    fn test_format_record_lists_fields() {
        let outcome = crate::decode("846700000009699001090116033141666512101001037833");
        let text = format_record(outcome.record().unwrap());
        assert!(text.contains("company:      0109 (Live TIM)"));
        assert!(text.contains("value:        69.90"));
        assert_eq!(outcome_summary(&outcome), "valid: company 0109 value 69.90");
    }

    #[test]
    fn test_read_lines_missing_file() {
        assert!(read_lines("/nonexistent/boleto/lines.txt").is_err());
    }
}
