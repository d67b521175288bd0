//! Resume data structures
//!
//! Field names serialize as camelCase to stay compatible with JSON
//! exports from web resume builders. Every field defaults to empty on
//! deserialization: a partially filled resume is always valid input, it
//! just earns fewer structure points.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ResumeRecord {
    pub personal_details: PersonalDetails,
    pub summary: String,
    pub experience: Vec<Experience>,
    pub education: Vec<Education>,
    pub skills: Vec<Skill>,
    pub certifications: Vec<Certification>,
    pub volunteering: Vec<Volunteering>,
    pub awards: Vec<Award>,
    pub publications: Vec<Publication>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PersonalDetails {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub linkedin: String,
    pub github: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Experience {
    pub company: String,
    pub position: String,
    pub start_date: String,
    pub end_date: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Education {
    pub institution: String,
    pub degree: String,
    pub graduation_date: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Skill {
    pub name: String,
    /// Informational self-rating (1-5). Not used in scoring.
    pub level: u8,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Certification {
    pub name: String,
    pub issuer: String,
    pub date: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Volunteering {
    pub role: String,
    pub organization: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Award {
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Publication {
    pub title: String,
    pub publisher: String,
    pub date: String,
}

impl ResumeRecord {
    /// Names of the sections that are present with at least one entry
    pub fn present_sections(&self) -> Vec<&'static str> {
        let mut sections = Vec::new();
        if !self.summary.trim().is_empty() {
            sections.push("Summary");
        }
        if !self.experience.is_empty() {
            sections.push("Experience");
        }
        if !self.education.is_empty() {
            sections.push("Education");
        }
        if !self.skills.is_empty() {
            sections.push("Skills");
        }
        if !self.certifications.is_empty() {
            sections.push("Certifications");
        }
        if !self.volunteering.is_empty() {
            sections.push("Volunteering");
        }
        if !self.awards.is_empty() {
            sections.push("Awards");
        }
        if !self.publications.is_empty() {
            sections.push("Publications");
        }
        sections
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_json_deserializes_to_default() {
        let record: ResumeRecord = serde_json::from_str("{}").unwrap();
        assert_eq!(record, ResumeRecord::default());
        assert!(record.present_sections().is_empty());
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let json = r#"{
            "summary": "Engineer with 5 years of experience",
            "experience": [{"company": "Acme", "position": "Developer"}],
            "skills": [{"name": "Rust"}]
        }"#;
        let record: ResumeRecord = serde_json::from_str(json).unwrap();

        assert_eq!(record.experience.len(), 1);
        assert_eq!(record.experience[0].company, "Acme");
        assert!(record.experience[0].description.is_empty());
        assert_eq!(record.skills[0].level, 0);
        assert_eq!(
            record.present_sections(),
            vec!["Summary", "Experience", "Skills"]
        );
    }

    #[test]
    fn test_camel_case_round_trip() {
        let mut record = ResumeRecord::default();
        record.education.push(Education {
            institution: "MIT".to_string(),
            degree: "BSc".to_string(),
            graduation_date: "2020".to_string(),
        });

        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("graduationDate"));

        let parsed: ResumeRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, record);
    }
}
