//! Integration tests for the resume scorer

use resume_scorer::config::Config;
use resume_scorer::input::manager::InputManager;
use resume_scorer::output::report::ScoreReport;
use resume_scorer::scoring::KeywordScorer;
use std::path::Path;

#[tokio::test]
async fn test_resume_loading_from_json() {
    let manager = InputManager::new();
    let path = Path::new("tests/fixtures/sample_resume.json");

    let resume = manager.load_resume(path).await.unwrap();

    assert_eq!(resume.personal_details.name, "John Doe");
    assert_eq!(resume.experience.len(), 2);
    assert_eq!(resume.experience[0].company, "Acme Corp");
    assert_eq!(resume.skills.len(), 4);
    assert!(resume.volunteering.is_empty());
}

#[tokio::test]
async fn test_text_extraction_from_txt() {
    let mut manager = InputManager::new();
    let path = Path::new("tests/fixtures/sample_job.txt");

    let text = manager.extract_text(path).await.unwrap();

    assert!(text.contains("Senior Backend Engineer"));
    assert!(text.contains("Rust"));
    assert!(text.contains("Kubernetes"));
}

#[tokio::test]
async fn test_text_extraction_from_markdown() {
    let mut manager = InputManager::new();
    let path = Path::new("tests/fixtures/sample_job.md");

    let text = manager.extract_text(path).await.unwrap();

    assert!(text.contains("Senior Backend Engineer"));
    assert!(text.contains("backend"));
    // Should not contain markdown formatting
    assert!(!text.contains("**"));
    assert!(!text.contains("##"));
}

#[tokio::test]
async fn test_caching_functionality() {
    let mut manager = InputManager::new();
    let path = Path::new("tests/fixtures/sample_job.txt");

    let text1 = manager.extract_text(path).await.unwrap();
    assert_eq!(manager.cache_size(), 1);

    let text2 = manager.extract_text(path).await.unwrap();
    assert_eq!(text1, text2);
    assert_eq!(manager.cache_size(), 1);
}

#[tokio::test]
async fn test_unsupported_file_type() {
    let mut manager = InputManager::new();
    let path = Path::new("tests/fixtures/sample_resume.json");

    // JSON is a resume format, not a job description format
    let result = manager.extract_text(path).await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_nonexistent_file() {
    let mut manager = InputManager::new();
    let path = Path::new("tests/fixtures/nonexistent.txt");

    let result = manager.extract_text(path).await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_end_to_end_scoring() {
    let mut manager = InputManager::new();
    let resume = manager
        .load_resume(Path::new("tests/fixtures/sample_resume.json"))
        .await
        .unwrap();
    let job_text = manager
        .extract_text(Path::new("tests/fixtures/sample_job.txt"))
        .await
        .unwrap();

    let scorer = KeywordScorer::new().unwrap();
    let breakdown = scorer.calculate_score(&resume, &job_text);

    // The fixture resume covers most of the job keywords and carries
    // quantified, verb-led experience descriptions
    assert!(breakdown.keyword_match_ratio >= 0.5);
    assert_eq!(breakdown.structure_bonus, 22);
    assert_eq!(breakdown.content_bonus, 10);
    assert!(breakdown.overall_score <= 100);
    assert!(breakdown.overall_score >= 80);

    // Same inputs, same score
    assert_eq!(breakdown, scorer.calculate_score(&resume, &job_text));
}

#[tokio::test]
async fn test_empty_job_description_scores_zero() {
    let manager = InputManager::new();
    let resume = manager
        .load_resume(Path::new("tests/fixtures/sample_resume.json"))
        .await
        .unwrap();

    let scorer = KeywordScorer::new().unwrap();
    let breakdown = scorer.calculate_score(&resume, "");
    assert_eq!(breakdown.overall_score, 0);
}

#[tokio::test]
async fn test_report_generation_from_fixtures() {
    let mut manager = InputManager::new();
    let resume = manager
        .load_resume(Path::new("tests/fixtures/sample_resume.json"))
        .await
        .unwrap();
    let job_text = manager
        .extract_text(Path::new("tests/fixtures/sample_job.md"))
        .await
        .unwrap();

    let scorer = KeywordScorer::new().unwrap();
    let report = ScoreReport::build(
        &scorer,
        &resume,
        &job_text,
        &Config::default(),
        "sample_resume.json".to_string(),
        "sample_job.md".to_string(),
        5,
    );

    assert!(report.breakdown.overall_score > 0);
    assert!(report.keyword_analysis.matched.contains(&"rust".to_string()));
    assert!(!report.resume_stats.sections_present.is_empty());
    assert_eq!(report.metadata.resume_file, "sample_resume.json");
}
