use serde::Serialize;

/// Contact details pulled from a resume. Empty strings mean "not found".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ParsedResume {
    pub name: String,
    pub email: String,
    pub phone: String,
    /// Leading slice of the extracted text
    pub text: String,
}

impl ParsedResume {
    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.email.is_empty() && self.phone.is_empty()
    }
}
