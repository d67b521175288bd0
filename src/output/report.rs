//! Score report assembly
//!
//! The engine produces a bare `ScoreBreakdown`; everything a reader sees on
//! top of it (matched/missing keywords, suggestions, verdict, stats) is
//! derived here, deterministically, from the same inputs.

use crate::config::Config;
use crate::resume::ResumeRecord;
use crate::scoring::{KeywordAnalysis, KeywordScorer, ScoreBreakdown};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use unicode_segmentation::UnicodeSegmentation;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreReport {
    pub breakdown: ScoreBreakdown,
    pub keyword_analysis: KeywordAnalysis,
    pub suggestions: Vec<Suggestion>,
    pub verdict: String,
    pub resume_stats: ResumeStats,
    pub metadata: ReportMetadata,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Suggestion {
    pub title: String,
    pub description: String,
    pub priority: Priority,
    pub section: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Priority {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResumeStats {
    pub word_count: usize,
    pub sections_present: Vec<String>,
    pub experience_entries: usize,
    pub skill_count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMetadata {
    pub generated_at: DateTime<Utc>,
    pub scorer_version: String,
    pub resume_file: String,
    pub job_file: String,
    pub processing_time_ms: u64,
}

impl ScoreReport {
    pub fn build(
        scorer: &KeywordScorer,
        resume: &ResumeRecord,
        job_description: &str,
        config: &Config,
        resume_file: String,
        job_file: String,
        processing_time_ms: u64,
    ) -> Self {
        let breakdown = scorer.calculate_score(resume, job_description);
        let keyword_analysis = scorer.keyword_analysis(resume, job_description);
        let suggestions = build_suggestions(
            scorer,
            resume,
            &keyword_analysis,
            config.output.max_keyword_suggestions,
        );
        let verdict = verdict_for(breakdown.overall_score);
        let resume_stats = resume_stats(resume);

        Self {
            breakdown,
            keyword_analysis,
            suggestions,
            verdict,
            resume_stats,
            metadata: ReportMetadata {
                generated_at: Utc::now(),
                scorer_version: env!("CARGO_PKG_VERSION").to_string(),
                resume_file,
                job_file,
                processing_time_ms,
            },
        }
    }
}

fn verdict_for(score: u8) -> String {
    match score {
        90..=100 => "Excellent match - strong candidate for this role",
        80..=89 => "Very good match - minor improvements could help",
        70..=79 => "Good match - some targeted improvements recommended",
        60..=69 => "Fair match - several improvements needed",
        50..=59 => "Below average match - significant improvements required",
        _ => "Poor match - major revisions needed",
    }
    .to_string()
}

fn resume_stats(resume: &ResumeRecord) -> ResumeStats {
    let content = KeywordScorer::aggregate_content(resume);
    ResumeStats {
        word_count: content.unicode_words().count(),
        sections_present: resume
            .present_sections()
            .iter()
            .map(|s| s.to_string())
            .collect(),
        experience_entries: resume.experience.len(),
        skill_count: resume.skills.len(),
    }
}

fn build_suggestions(
    scorer: &KeywordScorer,
    resume: &ResumeRecord,
    keyword_analysis: &KeywordAnalysis,
    max_keyword_suggestions: usize,
) -> Vec<Suggestion> {
    let mut suggestions = Vec::new();

    for missing in keyword_analysis.missing.iter().take(max_keyword_suggestions) {
        suggestions.push(Suggestion {
            title: format!("Add missing keyword: {}", missing),
            description: format!(
                "Include '{}' in your resume to match the job requirements",
                missing
            ),
            priority: Priority::High,
            section: "Skills".to_string(),
        });
    }

    if !resume.experience.is_empty() && !scorer.has_quantifiable_results(resume) {
        suggestions.push(Suggestion {
            title: "Quantify your achievements".to_string(),
            description: "Add measurable results (percentages, amounts, multipliers) \
                          to your work experience descriptions"
                .to_string(),
            priority: Priority::Medium,
            section: "Experience".to_string(),
        });
    }

    if !resume.experience.is_empty() && !scorer.has_action_verbs(resume) {
        suggestions.push(Suggestion {
            title: "Use action verbs".to_string(),
            description: "Start experience bullet points with verbs like 'developed', \
                          'led' or 'improved'"
                .to_string(),
            priority: Priority::Medium,
            section: "Experience".to_string(),
        });
    }

    if resume.summary.trim().is_empty() {
        suggestions.push(Suggestion {
            title: "Add a professional summary".to_string(),
            description: "A short summary at the top helps both recruiters and \
                          tracking systems place your profile"
                .to_string(),
            priority: Priority::Medium,
            section: "Summary".to_string(),
        });
    }

    if resume.skills.is_empty() {
        suggestions.push(Suggestion {
            title: "Add a skills section".to_string(),
            description: "List your technical abilities so keyword matching has \
                          something to work with"
                .to_string(),
            priority: Priority::Low,
            section: "Skills".to_string(),
        });
    }

    suggestions
}
