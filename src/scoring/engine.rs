//! Keyword-overlap scoring engine
//!
//! The fraction of job-description keywords found in the resume text forms
//! the base score, fixed bonuses for resume structure and content quality
//! are added on top, and the sum is clamped to 100. All of it is pure and
//! deterministic.

use crate::error::{Result, ResumeScorerError};
use crate::resume::ResumeRecord;
use crate::scoring::keywords::extract_keywords;
use aho_corasick::AhoCorasick;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Action verbs that earn the content-quality bonus. Fixed list, matched
/// case-insensitively as substrings of experience descriptions.
pub const ACTION_VERBS: &[&str] = &[
    "achieved",
    "developed",
    "implemented",
    "created",
    "managed",
    "led",
    "increased",
    "decreased",
    "improved",
    "designed",
];

/// Result of one scoring pass. Constructed fresh per call, never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    /// Final clamped score, 0..=100
    pub overall_score: u8,
    /// Fraction of job keywords found in the resume text, 0..1
    pub keyword_match_ratio: f32,
    /// Section-presence bonus, 0..=28
    pub structure_bonus: u8,
    /// Quantifiable-results and action-verb bonus, 0..=10
    pub content_bonus: u8,
}

impl ScoreBreakdown {
    pub fn zero() -> Self {
        Self {
            overall_score: 0,
            keyword_match_ratio: 0.0,
            structure_bonus: 0,
            content_bonus: 0,
        }
    }
}

/// Matched and missing job keywords, sorted for stable output
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordAnalysis {
    pub matched: Vec<String>,
    pub missing: Vec<String>,
}

impl KeywordAnalysis {
    pub fn total(&self) -> usize {
        self.matched.len() + self.missing.len()
    }

    pub fn coverage(&self) -> f32 {
        if self.total() == 0 {
            0.0
        } else {
            self.matched.len() as f32 / self.total() as f32
        }
    }
}

/// Scoring abstraction so a model-backed provider can replace the keyword
/// heuristic without touching callers
pub trait ScoreProvider {
    fn score(&self, resume: &ResumeRecord, job_description: &str) -> ScoreBreakdown;
}

/// Default [`ScoreProvider`]: the keyword-overlap heuristic
pub struct KeywordScorer {
    quantifiable: Regex,
    action_verbs: AhoCorasick,
}

impl KeywordScorer {
    pub fn new() -> Result<Self> {
        // Percentages, multipliers, currency amounts, or any bare digit run
        let quantifiable = Regex::new(r"\d+%|\d+x|\$\d+|\d+")
            .map_err(|e| ResumeScorerError::AnalysisFailed(format!("Invalid pattern: {}", e)))?;

        let action_verbs = AhoCorasick::builder()
            .ascii_case_insensitive(true)
            .build(ACTION_VERBS)
            .map_err(|e| {
                ResumeScorerError::AnalysisFailed(format!("Failed to build verb matcher: {}", e))
            })?;

        Ok(Self {
            quantifiable,
            action_verbs,
        })
    }

    /// Flatten a resume into one plain-text blob for keyword comparison.
    ///
    /// Fixed order: summary, experience (position company description),
    /// education (degree institution), skill names, certification names,
    /// volunteering (role organization description), awards
    /// (name description), publications (title publisher). Empty fields
    /// and empty sequences are skipped, never an error.
    pub fn aggregate_content(resume: &ResumeRecord) -> String {
        let mut sections: Vec<String> = Vec::new();

        sections.push(resume.summary.trim().to_string());
        for exp in &resume.experience {
            sections.push(join_fields(&[&exp.position, &exp.company, &exp.description]));
        }
        for edu in &resume.education {
            sections.push(join_fields(&[&edu.degree, &edu.institution]));
        }
        for skill in &resume.skills {
            sections.push(skill.name.trim().to_string());
        }
        for cert in &resume.certifications {
            sections.push(cert.name.trim().to_string());
        }
        for vol in &resume.volunteering {
            sections.push(join_fields(&[&vol.role, &vol.organization, &vol.description]));
        }
        for award in &resume.awards {
            sections.push(join_fields(&[&award.name, &award.description]));
        }
        for publication in &resume.publications {
            sections.push(join_fields(&[&publication.title, &publication.publisher]));
        }

        sections.retain(|s| !s.is_empty());
        sections.join(" ")
    }

    /// Fraction of job keywords present as substrings of the resume text.
    ///
    /// Substring (not whole-word) containment is deliberate and part of the
    /// numeric contract: matching is recall-biased, so "java" also counts
    /// when it appears inside "javascript".
    pub fn relevance_ratio(resume_text: &str, job_keywords: &HashSet<String>) -> f32 {
        if job_keywords.is_empty() {
            return 0.0;
        }

        let resume_text = resume_text.to_lowercase();
        let matched = job_keywords
            .iter()
            .filter(|keyword| resume_text.contains(keyword.as_str()))
            .count();

        matched as f32 / job_keywords.len() as f32
    }

    /// Fixed bonus for each section present with at least one entry.
    /// Essential sections are worth 5, supplementary ones 2; maximum 28.
    pub fn structure_bonus(resume: &ResumeRecord) -> u8 {
        let mut bonus = 0;

        if !resume.summary.trim().is_empty() {
            bonus += 5;
        }
        if !resume.experience.is_empty() {
            bonus += 5;
        }
        if !resume.education.is_empty() {
            bonus += 5;
        }
        if !resume.skills.is_empty() {
            bonus += 5;
        }
        if !resume.certifications.is_empty() {
            bonus += 2;
        }
        if !resume.volunteering.is_empty() {
            bonus += 2;
        }
        if !resume.awards.is_empty() {
            bonus += 2;
        }
        if !resume.publications.is_empty() {
            bonus += 2;
        }

        bonus
    }

    /// True if any experience description carries a quantifiable result
    pub fn has_quantifiable_results(&self, resume: &ResumeRecord) -> bool {
        resume
            .experience
            .iter()
            .any(|exp| self.quantifiable.is_match(&exp.description))
    }

    /// True if any experience description uses one of the action verbs
    pub fn has_action_verbs(&self, resume: &ResumeRecord) -> bool {
        resume
            .experience
            .iter()
            .any(|exp| self.action_verbs.is_match(&exp.description))
    }

    /// Content-quality bonus: +5 for quantifiable results, +5 for action
    /// verbs. Both checks are existential over the whole experience list.
    pub fn content_bonus(&self, resume: &ResumeRecord) -> u8 {
        let mut bonus = 0;
        if self.has_quantifiable_results(resume) {
            bonus += 5;
        }
        if self.has_action_verbs(resume) {
            bonus += 5;
        }
        bonus
    }

    /// Score a resume against a job description.
    ///
    /// An empty job description short-circuits the whole function to an
    /// all-zero breakdown, bonuses included. A whitespace-only description
    /// instead flows through extraction, yields no keywords, and still
    /// earns the bonuses.
    pub fn calculate_score(&self, resume: &ResumeRecord, job_description: &str) -> ScoreBreakdown {
        if job_description.is_empty() {
            return ScoreBreakdown::zero();
        }

        let job_keywords = extract_keywords(job_description);
        let resume_text = Self::aggregate_content(resume);
        let ratio = Self::relevance_ratio(&resume_text, &job_keywords);
        let structure_bonus = Self::structure_bonus(resume);
        let content_bonus = self.content_bonus(resume);

        let total = ratio * 100.0 + f32::from(structure_bonus) + f32::from(content_bonus);
        // All terms are non-negative, so only the upper bound needs clamping
        let overall_score = total.min(100.0).round() as u8;

        ScoreBreakdown {
            overall_score,
            keyword_match_ratio: ratio,
            structure_bonus,
            content_bonus,
        }
    }

    /// Which job keywords the resume covers and which it misses
    pub fn keyword_analysis(&self, resume: &ResumeRecord, job_description: &str) -> KeywordAnalysis {
        let job_keywords = extract_keywords(job_description);
        let resume_text = Self::aggregate_content(resume).to_lowercase();

        let (mut matched, mut missing): (Vec<String>, Vec<String>) = job_keywords
            .into_iter()
            .partition(|keyword| resume_text.contains(keyword.as_str()));

        matched.sort();
        missing.sort();

        KeywordAnalysis { matched, missing }
    }
}

impl ScoreProvider for KeywordScorer {
    fn score(&self, resume: &ResumeRecord, job_description: &str) -> ScoreBreakdown {
        self.calculate_score(resume, job_description)
    }
}

impl Default for KeywordScorer {
    fn default() -> Self {
        Self::new().expect("Failed to create default keyword scorer")
    }
}

fn join_fields(fields: &[&str]) -> String {
    fields
        .iter()
        .map(|f| f.trim())
        .filter(|f| !f.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
