//! Embedded sample résumé shown when no document is supplied

use tracing::error;

use folio_content::Resume;

const SAMPLE_JSON: &str = r#"{
    "profile": {
        "name": "Jordan Reyes",
        "title": "Systems Engineer",
        "summary": "Engineer with a decade of experience building data pipelines, visualization tooling, and the occasional compiler. Happiest somewhere between a profiler and a whiteboard.",
        "location": "Lisbon, Portugal",
        "email": "jordan@example.com"
    },
    "skills": [
        {
            "name": "Languages",
            "skills": [
                { "name": "Rust", "level": 92 },
                { "name": "Python", "level": 85 },
                { "name": "SQL", "level": 78 }
            ]
        },
        {
            "name": "Systems",
            "skills": [
                { "name": "Distributed pipelines", "level": 88 },
                { "name": "Profiling & tuning", "level": 80 },
                { "name": "GPU rendering", "level": 62 }
            ]
        },
        {
            "name": "Tooling",
            "skills": [
                { "name": "CI/CD", "level": 75 },
                { "name": "Observability", "level": 82 }
            ]
        }
    ],
    "experience": [
        {
            "title": "Staff Engineer",
            "company": "Meridian Data",
            "period": "2022 — present",
            "summary": "Own the ingestion platform feeding every analytics product.",
            "highlights": [
                "Cut p99 ingestion latency from 4.1s to 240ms",
                "Led the migration to columnar storage across 14 services",
                "Mentor a team of six engineers"
            ],
            "initial": true
        },
        {
            "title": "Senior Engineer",
            "company": "Halide Systems",
            "period": "2019 — 2022",
            "summary": "Built real-time visualization tooling for sensor fleets.",
            "highlights": [
                "Shipped a 60 FPS plot viewer over million-point series",
                "Designed the time-synchronized multi-view protocol"
            ]
        },
        {
            "title": "Software Engineer",
            "company": "Corvo Labs",
            "period": "2016 — 2019",
            "summary": "Backend services for a print-on-demand marketplace.",
            "highlights": [
                "Rewrote order routing, halving fulfillment errors"
            ]
        },
        {
            "title": "Junior Developer",
            "company": "Atelier Web",
            "period": "2014 — 2016",
            "summary": "Full-stack work on client portfolio sites.",
            "highlights": []
        }
    ],
    "certifications": [
        { "name": "Certified Kubernetes Administrator", "issuer": "CNCF", "year": "2023" },
        { "name": "AWS Solutions Architect — Associate", "issuer": "Amazon", "year": "2021" },
        { "name": "PostgreSQL Professional", "issuer": "EDB", "year": "2020" }
    ],
    "education": [
        { "school": "Instituto Superior Técnico", "degree": "MSc, Computer Engineering", "period": "2012 — 2014" },
        { "school": "Universidade do Porto", "degree": "BSc, Computer Science", "period": "2009 — 2012" }
    ],
    "links": [
        { "label": "GitHub", "url": "https://github.com/jordanreyes" },
        { "label": "Writing", "url": "https://jordanreyes.example.com" }
    ]
}"#;

/// Parse the embedded sample document. Falls back to an empty résumé if
/// the embedded JSON is ever broken, rather than failing startup.
pub fn sample_resume() -> Resume {
    match folio_content::load_from_str(SAMPLE_JSON) {
        Ok(resume) => resume,
        Err(err) => {
            error!(%err, "embedded sample resume failed to parse");
            Resume::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{Duration, Instant};

    use folio_core::navigator::{NavigatorConfig, SlideNavigator};

    #[test]
    fn test_sample_resume_parses() {
        let resume = sample_resume();
        assert_eq!(resume.profile.name, "Jordan Reyes");
        assert_eq!(resume.experience.len(), 4);
        assert_eq!(resume.initial_experience_index(), 0);
        assert!(!resume.certifications.is_empty());
    }

    #[test]
    fn test_experience_carousel_cycles_back_to_first_title() {
        // Clicking "next" once per slide returns to the starting card
        let resume = sample_resume();
        let len = resume.experience.len();
        let initial = resume.initial_experience_index();
        let initial_title = resume.experience[initial].title.clone();

        let mut nav = SlideNavigator::new(len, initial, NavigatorConfig::carousel());
        let mut now = Instant::now();
        for _ in 0..len {
            assert!(nav.next(now));
            now += Duration::from_millis(500);
            nav.tick(now);
        }
        assert_eq!(nav.current_index(), initial);
        assert_eq!(resume.experience[nav.current_index()].title, initial_title);
    }
}
