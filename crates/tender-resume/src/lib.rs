//! tender-resume
//!
//! Best-effort contact details from a resume so the profile form can be
//! pre-filled. Heuristic only; every field may come back empty.

mod error;
mod parsed_resume;
mod resume_parser;

pub use error::{ResumeError, Result as ResumeResult};
pub use parsed_resume::ParsedResume;
pub use resume_parser::{SNIPPET_CHARS, parse_document, parse_pdf, parse_text, parse_upload};
