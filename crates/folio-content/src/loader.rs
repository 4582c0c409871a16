//! JSON loader for résumé documents

use std::path::Path;
use tracing::info;

use crate::model::Resume;
use crate::ContentError;

/// Parse a résumé from a JSON string
pub fn load_from_str(json: &str) -> Result<Resume, ContentError> {
    let resume: Resume = serde_json::from_str(json)?;
    if resume.profile.name.trim().is_empty() {
        return Err(ContentError::Empty);
    }
    Ok(resume)
}

/// Load a résumé from a JSON file on disk
pub fn load_from_path(path: &Path) -> Result<Resume, ContentError> {
    let json = std::fs::read_to_string(path)?;
    let resume = load_from_str(&json)?;
    info!(
        path = %path.display(),
        experience = resume.experience.len(),
        certifications = resume.certifications.len(),
        "loaded resume document"
    );
    Ok(resume)
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = r#"{
        "profile": { "name": "Ada Lovelace", "title": "Engineer" },
        "experience": [
            { "title": "Analyst", "company": "Babbage & Co", "period": "1842" }
        ]
    }"#;

    #[test]
    fn test_minimal_document_loads() {
        let resume = load_from_str(MINIMAL).unwrap();
        assert_eq!(resume.profile.name, "Ada Lovelace");
        assert_eq!(resume.experience.len(), 1);
        assert!(resume.certifications.is_empty());
    }

    #[test]
    fn test_missing_profile_name_is_rejected() {
        let json = r#"{ "profile": { "name": "  ", "title": "x" } }"#;
        assert!(matches!(load_from_str(json), Err(ContentError::Empty)));
    }

    #[test]
    fn test_malformed_json_is_a_parse_error() {
        assert!(matches!(
            load_from_str("{ not json"),
            Err(ContentError::Parse(_))
        ));
    }
}
