//! Parsing of uploaded Q&A files (CSV, JSON list, line-oriented text).
//!
//! Every public entry point is lossy by contract: unreadable or malformed
//! input is logged and yields no entries.

use std::path::Path;

use serde_json::Value;
use thiserror::Error;
use tracing::{info, warn};
use walkdir::WalkDir;

use super::QnaEntry;

const QUESTION_HEADERS: &[&str] = &["question", "q", "query", "prompt"];
const ANSWER_HEADERS: &[&str] = &["answer", "a", "ans", "response", "reply"];

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("csv: {0}")]
    Csv(#[from] csv::Error),
    #[error("json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("json document is not a list")]
    NotAList,
    #[error("json list item {0} is not an object")]
    NotAnObject(usize),
    #[error("unsupported file type: {0}")]
    UnsupportedFormat(String),
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}

/// Upload formats, chosen by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QnaFormat {
    Csv,
    Json,
    Text,
}

impl QnaFormat {
    pub fn from_name(name: &str) -> Option<Self> {
        let ext = Path::new(name).extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "csv" => Some(Self::Csv),
            "json" => Some(Self::Json),
            "txt" => Some(Self::Text),
            _ => None,
        }
    }
}

/// Parse raw upload bytes; `name` picks the format and becomes each entry's source.
pub fn load_qna_bytes(name: &str, raw: &[u8]) -> Vec<QnaEntry> {
    match parse_upload(name, raw) {
        Ok(entries) => {
            info!(source = %name, entries = entries.len(), "parsed q&a upload");
            entries
        }
        Err(err) => {
            warn!(source = %name, error = %err, "discarding unreadable q&a upload");
            Vec::new()
        }
    }
}

/// Read and parse a Q&A file from disk.
pub fn load_qna_file(path: &Path) -> Vec<QnaEntry> {
    let name = path
        .file_name()
        .and_then(|s| s.to_str())
        .unwrap_or_default()
        .to_string();
    match std::fs::read(path) {
        Ok(raw) => load_qna_bytes(&name, &raw),
        Err(err) => {
            warn!(path = %path.display(), error = %IngestError::from(err), "cannot read q&a file");
            Vec::new()
        }
    }
}

/// Parse every supported file under `root`, in sorted path order.
pub fn load_qna_dir(root: &Path) -> Vec<QnaEntry> {
    let mut entries = Vec::new();
    for item in WalkDir::new(root).sort_by_file_name() {
        let item = match item {
            Ok(item) => item,
            Err(err) => {
                warn!(error = %err, "skipping unreadable directory entry");
                continue;
            }
        };
        if !item.file_type().is_file() {
            continue;
        }
        let supported = item
            .file_name()
            .to_str()
            .and_then(QnaFormat::from_name)
            .is_some();
        if supported {
            entries.extend(load_qna_file(item.path()));
        }
    }
    entries
}

fn parse_upload(name: &str, raw: &[u8]) -> Result<Vec<QnaEntry>, IngestError> {
    let format =
        QnaFormat::from_name(name).ok_or_else(|| IngestError::UnsupportedFormat(name.into()))?;
    let text = decode(raw);
    match format {
        QnaFormat::Csv => parse_csv(&text, name),
        QnaFormat::Json => parse_json(&text, name),
        QnaFormat::Text => Ok(parse_lines(&text, name)),
    }
}

/// UTF-8, then BOM-marked UTF-16, then Latin-1 (which never fails).
pub fn decode(raw: &[u8]) -> String {
    if let Ok(text) = std::str::from_utf8(raw) {
        return text.strip_prefix('\u{feff}').unwrap_or(text).to_string();
    }
    let utf16 = match raw {
        [0xFF, 0xFE, rest @ ..] => Some((rest, u16::from_le_bytes as fn([u8; 2]) -> u16)),
        [0xFE, 0xFF, rest @ ..] => Some((rest, u16::from_be_bytes as fn([u8; 2]) -> u16)),
        _ => None,
    };
    if let Some((rest, to_unit)) = utf16 {
        if rest.len() % 2 == 0 {
            let units: Vec<u16> = rest
                .chunks_exact(2)
                .map(|pair| to_unit([pair[0], pair[1]]))
                .collect();
            if let Ok(text) = String::from_utf16(&units) {
                return text;
            }
        }
    }
    raw.iter().map(|&b| b as char).collect()
}

fn sniff_delimiter(header_line: &str) -> u8 {
    if header_line.contains('\t') {
        b'\t'
    } else if header_line.contains(',') {
        b','
    } else if header_line.contains(';') {
        b';'
    } else if header_line.contains('|') {
        b'|'
    } else {
        b','
    }
}

fn parse_csv(text: &str, source: &str) -> Result<Vec<QnaEntry>, IngestError> {
    let first_line = text.lines().next().unwrap_or_default();
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(sniff_delimiter(first_line))
        .from_reader(text.as_bytes());
    let rows = reader
        .records()
        .collect::<Result<Vec<csv::StringRecord>, _>>()?;
    let Some(first) = rows.first() else {
        return Ok(Vec::new());
    };

    let header: Vec<String> = first.iter().map(|c| c.trim().to_lowercase()).collect();
    let q_idx = header
        .iter()
        .rposition(|h| QUESTION_HEADERS.contains(&h.as_str()));
    let a_idx = header
        .iter()
        .rposition(|h| ANSWER_HEADERS.contains(&h.as_str()));
    let (q_idx, a_idx, body) = match (q_idx, a_idx) {
        (Some(q), Some(a)) => (q, a, &rows[1..]),
        _ => (0, 1, &rows[..]),
    };

    Ok(body
        .iter()
        .filter_map(|row| pair(row.get(q_idx)?, row.get(a_idx)?, source))
        .collect())
}

fn parse_json(text: &str, source: &str) -> Result<Vec<QnaEntry>, IngestError> {
    let doc: Value = serde_json::from_str(text)?;
    let items = doc.as_array().ok_or(IngestError::NotAList)?;
    let mut entries = Vec::new();
    for (idx, item) in items.iter().enumerate() {
        let obj = item.as_object().ok_or(IngestError::NotAnObject(idx))?;
        // First alias holding a non-empty string wins, even if it is only
        // whitespace; later aliases are not consulted.
        let field = |names: &[&str]| {
            names
                .iter()
                .filter_map(|n| obj.get(*n).and_then(Value::as_str))
                .find(|v| !v.is_empty())
        };
        if let (Some(q), Some(a)) = (field(QUESTION_HEADERS), field(ANSWER_HEADERS)) {
            entries.extend(pair(q, a, source));
        }
    }
    Ok(entries)
}

fn parse_lines(text: &str, source: &str) -> Vec<QnaEntry> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter_map(|line| line.split_once(":::").or_else(|| line.split_once(',')))
        .filter_map(|(q, a)| pair(q, a, source))
        .collect()
}

fn pair(question: &str, answer: &str, source: &str) -> Option<QnaEntry> {
    let (q, a) = (question.trim(), answer.trim());
    (!q.is_empty() && !a.is_empty()).then(|| QnaEntry::new(q, a, source))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn csv_with_header_uses_named_columns() {
        let text = "id,Answer,Question\n1,A raised body temperature.,What is fever?\n2,,blank\n";
        let entries = load_qna_bytes("faq.csv", text.as_bytes());
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].question, "What is fever?");
        assert_eq!(entries[0].answer, "A raised body temperature.");
        assert_eq!(entries[0].source, "faq.csv");
    }

    #[test]
    fn csv_without_header_is_positional() {
        let text = "What is fever?;Raised temperature\nshort\n";
        let entries = load_qna_bytes("faq.CSV", text.as_bytes());
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].answer, "Raised temperature");
    }

    #[test]
    fn json_accepts_field_variants() {
        let text = r#"[{"prompt":"What is fever?","reply":"Hot."},{"q":"Cold?","ans":"Chilly."},{"q":"","a":"x"}]"#;
        let entries = load_qna_bytes("faq.json", text.as_bytes());
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[1].question, "Cold?");
        assert_eq!(entries[1].answer, "Chilly.");
    }

    #[test]
    fn json_alias_fallback_skips_only_empty_values() {
        let text = r#"[
            {"question":"","q":"Cold?","answer":"Chilly."},
            {"question":"   ","q":"Flu?","answer":"Rest."}
        ]"#;
        let entries = load_qna_bytes("faq.json", text.as_bytes());
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].question, "Cold?");
    }

    #[test]
    fn malformed_json_yields_nothing() {
        assert!(load_qna_bytes("faq.json", b"{not json").is_empty());
        assert!(load_qna_bytes("faq.json", br#"{"q":"a","a":"b"}"#).is_empty());
        assert!(load_qna_bytes("faq.json", br#"[{"q":"a","a":"b"}, 3]"#).is_empty());
    }

    #[test]
    fn text_prefers_triple_colon_over_comma() {
        let text = "What is fever, really? ::: Hot, mostly.\nCold?,Chilly\nno delimiter\n\n";
        let entries = load_qna_bytes("faq.txt", text.as_bytes());
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].question, "What is fever, really?");
        assert_eq!(entries[0].answer, "Hot, mostly.");
        assert_eq!(entries[1].question, "Cold?");
    }

    #[test]
    fn unsupported_extension_is_ignored() {
        assert!(load_qna_bytes("faq.xlsx", b"q,a\nx,y").is_empty());
        assert_eq!(QnaFormat::from_name("notes.TXT"), Some(QnaFormat::Text));
    }

    #[test]
    fn decodes_utf16_and_latin1() {
        let mut utf16 = vec![0xFF, 0xFE];
        for unit in "Q?:::A".encode_utf16() {
            utf16.extend_from_slice(&unit.to_le_bytes());
        }
        assert_eq!(decode(&utf16), "Q?:::A");
        assert_eq!(decode(&[0x63, 0x61, 0x66, 0xE9]), "café");
        assert_eq!(decode("\u{feff}q,a".as_bytes()), "q,a");
    }
}
