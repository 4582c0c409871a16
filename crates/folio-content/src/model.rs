//! Résumé document model

use serde::{Serialize, Deserialize};

/// A complete résumé/portfolio document. The entry orders are meaningful:
/// insertion order is display order, and the sets do not change at runtime.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Resume {
    pub profile: Profile,

    #[serde(default)]
    pub skills: Vec<SkillGroup>,

    #[serde(default)]
    pub experience: Vec<ExperienceEntry>,

    #[serde(default)]
    pub certifications: Vec<Certification>,

    #[serde(default)]
    pub education: Vec<EducationEntry>,

    #[serde(default)]
    pub links: Vec<Link>,
}

impl Resume {
    /// Index of the experience entry marked active in the document, used
    /// as the carousel's starting slide. Resolved once; the navigator owns
    /// the index afterwards.
    pub fn initial_experience_index(&self) -> usize {
        self.experience
            .iter()
            .position(|e| e.initial)
            .unwrap_or(0)
    }
}

/// Who the résumé is about
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub title: String,

    #[serde(default)]
    pub summary: String,

    #[serde(default)]
    pub location: String,

    #[serde(default)]
    pub email: String,
}

/// A named group of skills (e.g. "Languages", "Tooling")
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillGroup {
    pub name: String,
    pub skills: Vec<Skill>,
}

/// One skill with a 0-100 proficiency level for the bar view
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    pub level: u8,
}

/// One position held
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub title: String,
    pub company: String,
    pub period: String,

    #[serde(default)]
    pub summary: String,

    #[serde(default)]
    pub highlights: Vec<String>,

    /// Marks the slide shown first in the experience carousel
    #[serde(default)]
    pub initial: bool,
}

/// One certification card
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Certification {
    pub name: String,
    pub issuer: String,

    #[serde(default)]
    pub year: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EducationEntry {
    pub school: String,
    pub degree: String,

    #[serde(default)]
    pub period: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Link {
    pub label: String,
    pub url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(title: &str, initial: bool) -> ExperienceEntry {
        ExperienceEntry {
            title: title.to_string(),
            company: "Acme".to_string(),
            period: "2020".to_string(),
            summary: String::new(),
            highlights: Vec::new(),
            initial,
        }
    }

    #[test]
    fn test_initial_index_from_marker() {
        let resume = Resume {
            experience: vec![entry("a", false), entry("b", true), entry("c", false)],
            ..Default::default()
        };
        assert_eq!(resume.initial_experience_index(), 1);
    }

    #[test]
    fn test_initial_index_defaults_to_zero() {
        let resume = Resume {
            experience: vec![entry("a", false), entry("b", false)],
            ..Default::default()
        };
        assert_eq!(resume.initial_experience_index(), 0);

        let empty = Resume::default();
        assert_eq!(empty.initial_experience_index(), 0);
    }
}
