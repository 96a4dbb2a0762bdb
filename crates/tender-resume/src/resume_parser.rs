use crate::{ParsedResume, ResumeError, ResumeResult};

use once_cell::sync::Lazy;
use regex::Regex;
use tender_core::UploadFile;

pub const SNIPPET_CHARS: usize = 1000;

const PDF_MIME: &str = "application/pdf";
const NAME_SCAN_LINES: usize = 10;
const NAME_MIN_WORDS: usize = 2;
const NAME_MAX_WORDS: usize = 4;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}").expect("valid email regex")
});
static PHONE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(\+\d{1,3}[-.\s]?)?\(?\d{3}\)?[-.\s]?\d{3}[-.\s]?\d{4}")
        .expect("valid phone regex")
});

/// Extract contact details from plain text
pub fn parse_text(text: &str) -> ParsedResume {
    let first_match = |re: &Regex| {
        re.find(text)
            .map(|m| m.as_str().to_string())
            .unwrap_or_default()
    };

    ParsedResume {
        name: extract_name(text).unwrap_or_default(),
        email: first_match(&EMAIL_RE),
        phone: first_match(&PHONE_RE),
        text: text.chars().take(SNIPPET_CHARS).collect(),
    }
}

/// Extract text from PDF bytes, then parse it
pub fn parse_pdf(bytes: &[u8]) -> ResumeResult<ParsedResume> {
    let text = pdf_extract::extract_text_from_mem(bytes).map_err(|e| {
        log::warn!("PDF text extraction failed: {}", e);
        ResumeError::pdf(e.to_string())
    })?;
    log::debug!("Extracted {} characters of resume text", text.len());
    Ok(parse_text(&text))
}

/// Only PDFs are parsed; anything else yields an empty result
pub fn parse_document(mime_type: Option<&str>, bytes: &[u8]) -> ResumeResult<ParsedResume> {
    match mime_type {
        Some(PDF_MIME) => parse_pdf(bytes),
        other => {
            log::debug!("Skipping resume parse for type {:?}", other);
            Ok(ParsedResume::default())
        }
    }
}

pub fn parse_upload(file: &UploadFile) -> ResumeResult<ParsedResume> {
    parse_document(file.mime_type.as_deref(), &file.bytes)
}

/// First line among the leading few with 2-4 words and no digits
fn extract_name(text: &str) -> Option<String> {
    text.lines()
        .take(NAME_SCAN_LINES)
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .find(|line| {
            let words = line.split_whitespace().count();
            (NAME_MIN_WORDS..=NAME_MAX_WORDS).contains(&words)
                && !line.chars().any(|c| c.is_ascii_digit())
        })
        .map(String::from)
}
