//! Resume scorer: resume and job description relevance scoring tool

mod cli;
mod config;
mod error;
mod input;
mod output;
mod resume;
mod scoring;
mod storage;

use clap::Parser;
use cli::{Cli, Commands, ConfigAction, ResumeAction};
use config::Config;
use error::{Result, ResumeScorerError};
use input::manager::InputManager;
use log::{error, info};
use output::report::ScoreReport;
use output::ReportGenerator;
use resume::ResumeRecord;
use scoring::KeywordScorer;
use std::path::{Path, PathBuf};
use std::process;
use std::time::Instant;
use storage::{FileStore, ResumeStore};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config = match load_config(cli.config.clone()) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = run_command(cli.command, config).await {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

fn load_config(path: Option<PathBuf>) -> Result<Config> {
    match path {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
}

async fn run_command(command: Commands, config: Config) -> Result<()> {
    match command {
        Commands::Score {
            resume,
            job,
            detailed,
            output,
            save,
        } => {
            info!("Starting resume scoring");

            cli::validate_file_extension(&job, &["txt", "md", "markdown"])
                .map_err(|e| ResumeScorerError::InvalidInput(format!("Job description file: {}", e)))?;

            let output_format =
                cli::parse_output_format(&output).map_err(ResumeScorerError::InvalidInput)?;

            let started = Instant::now();

            let mut input_manager = InputManager::new();
            let resume_record = resolve_resume(&input_manager, &resume, &config).await?;
            let job_text = input_manager.extract_text(&job).await?;

            info!(
                "Inputs loaded: resume sections = {}, job description = {} characters",
                resume_record.present_sections().len(),
                job_text.len()
            );

            let scorer = KeywordScorer::new()?;
            let report = ScoreReport::build(
                &scorer,
                &resume_record,
                &job_text,
                &config,
                resume.clone(),
                job.to_string_lossy().to_string(),
                started.elapsed().as_millis() as u64,
            );

            let detailed = detailed || config.output.detailed;
            let generator = ReportGenerator::new(config.output.color_output, detailed);
            println!("{}", generator.format(&report, &output_format)?);

            if let Some(save_path) = save {
                generator.save_to_file(&report, &output_format, &save_path)?;
                println!("Report saved to {}", save_path.display());
            }
        }

        Commands::Resumes { action } => {
            let mut store = ResumeStore::open(config.data_dir().clone())?;
            run_resume_action(&mut store, action).await?;
        }

        Commands::Config { action } => match action {
            Some(ConfigAction::Show) | None => {
                println!("Current Configuration\n");
                println!("Data directory: {}", config.data_dir().display());
                println!("Output format: {:?}", config.output.format);
                println!("Detailed output: {}", config.output.detailed);
                println!("Color output: {}", config.output.color_output);
                println!(
                    "Max keyword suggestions: {}",
                    config.output.max_keyword_suggestions
                );
            }

            Some(ConfigAction::Reset) => {
                let default_config = Config::default();
                default_config.save()?;
                println!("Configuration reset to defaults");
            }
        },
    }

    Ok(())
}

/// A `--resume` argument is either a path to a JSON file or the name of a
/// saved resume in the store.
async fn resolve_resume(
    input_manager: &InputManager,
    resume: &str,
    config: &Config,
) -> Result<ResumeRecord> {
    let path = Path::new(resume);
    if path.extension().is_some() {
        input_manager.load_resume(path).await
    } else {
        let store = ResumeStore::open(config.data_dir().clone())?;
        store.load(resume)
    }
}

async fn run_resume_action(
    store: &mut ResumeStore<FileStore>,
    action: ResumeAction,
) -> Result<()> {
    match action {
        ResumeAction::List => {
            let names = store.list()?;
            if names.is_empty() {
                println!("No saved resumes yet.");
                println!("Save one with: resume-scorer resumes save <name> <file.json>");
            } else {
                println!("Saved resumes:");
                for name in names {
                    println!("  • {}", name);
                }
            }
        }

        ResumeAction::Save { name, file } => {
            cli::validate_file_extension(&file, &["json"])
                .map_err(|e| ResumeScorerError::InvalidInput(format!("Resume file: {}", e)))?;
            let record = InputManager::new().load_resume(&file).await?;
            store.save(&name, &record)?;
            println!("Resume '{}' saved", name);
        }

        ResumeAction::Show { name } => {
            let record = store.load(&name)?;
            println!("{}", serde_json::to_string_pretty(&record)?);
        }

        ResumeAction::Remove { name } => {
            store.delete(&name)?;
            println!("Resume '{}' removed", name);
        }
    }

    Ok(())
}
