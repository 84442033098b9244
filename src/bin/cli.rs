//! quizforge CLI - generate quiz tests from textbook PDFs
//!
//! Usage: quizforge-cli <COMMAND>
//!
//! Machine-readable results (the `{success, ...}` envelope) go to stdout;
//! progress and diagnostics go to stderr, so output can be piped.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use quizforge_lib::{concepts, export, pipeline, settings};
use quizforge_lib::export::CombinedExport;
use quizforge_lib::pipeline::{PipelineParams, Strategy};

#[derive(Parser)]
#[command(name = "quizforge-cli")]
#[command(version, about = "Generate quiz tests from textbook PDFs", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Suppress progress output
    #[arg(long, short, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate tests from a PDF (AI strategy by default)
    Generate {
        /// Path to the chapter PDF
        pdf: PathBuf,
        /// Subject, e.g. "Mathematics"
        subject: String,
        /// Grade, e.g. "Class 3"
        grade: String,
        /// Board, e.g. "CBSE"
        board: String,
        /// Question source: ai, static or template
        #[arg(long, default_value = "ai")]
        strategy: String,
        /// Chapter number (required for static/template strategies)
        #[arg(long)]
        chapter: Option<u32>,
        /// AI provider override: primary, secondary or local
        #[arg(long)]
        provider: Option<String>,
        /// Questions per test
        #[arg(long, default_value_t = 10)]
        num_questions: usize,
        /// Test duration in minutes
        #[arg(long, default_value_t = 30)]
        duration: u32,
        /// Directory for per-test JSON files (skipped when absent)
        #[arg(long)]
        out: Option<PathBuf>,
        /// Also write a SQL import script to this path
        #[arg(long)]
        sql: Option<PathBuf>,
    },
    /// Emit the static question bank for one chapter (no PDF needed)
    Bank {
        /// Chapter number (1-14)
        #[arg(long)]
        chapter: u32,
        #[arg(long, default_value = "Mathematics")]
        subject: String,
        #[arg(long, default_value = "Class 3")]
        grade: String,
        #[arg(long, default_value = "CBSE")]
        board: String,
        /// Test duration in minutes
        #[arg(long, default_value_t = 20)]
        duration: u32,
        /// Output directory for the chapter JSON file
        #[arg(long, default_value = "tests")]
        out: PathBuf,
        /// Also write a SQL import script to this path
        #[arg(long)]
        sql: Option<PathBuf>,
    },
    /// Regenerate the SQL import script from a combined JSON file
    Sql {
        /// Combined export file ({tests, metadata})
        combined: PathBuf,
        /// Write the script here instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Configuration settings
    Config {
        #[command(subcommand)]
        cmd: ConfigCommands,
    },
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Show provider and API key status (keys are masked)
    Show,
    /// Store the OpenAI API key
    SetOpenaiKey { key: String },
    /// Store the Gemini API key
    SetGeminiKey { key: String },
    /// Remove all stored API keys
    ClearKeys,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    settings::init(settings::default_data_dir());

    let result = run(cli).await;

    if let Err(error) = result {
        // Error envelope on stdout, mirrors the success payload shape
        let payload = serde_json::json!({ "success": false, "error": error });
        println!("{}", payload);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), String> {
    match cli.command {
        Commands::Generate {
            pdf,
            subject,
            grade,
            board,
            strategy,
            chapter,
            provider,
            num_questions,
            duration,
            out,
            sql,
        } => {
            let params = PipelineParams {
                subject,
                grade,
                board,
                num_questions,
                duration,
            };

            let strategy = match strategy.as_str() {
                "ai" => Strategy::Ai(settings::resolve_provider(provider.as_deref())?),
                "static" => Strategy::Static {
                    chapter: chapter.ok_or("--chapter is required with --strategy static")?,
                },
                "template" => Strategy::Template {
                    chapter: chapter.ok_or("--chapter is required with --strategy template")?,
                },
                other => return Err(format!("Unknown strategy '{}'. Expected ai, static or template.", other)),
            };

            let output = pipeline::generate_from_pdf(&pdf, &params, &strategy).await?;

            if let Some(dir) = out {
                for (i, test) in output.tests.iter().enumerate() {
                    let path = dir.join(format!("test_{}.json", i + 1));
                    export::write_json(test, &path)?;
                    if !cli.quiet {
                        eprintln!("Saved {}", path.display());
                    }
                }
            }
            if let Some(path) = sql {
                export::write_sql(&output.tests, &path)?;
                if !cli.quiet {
                    eprintln!("SQL statements saved to: {}", path.display());
                }
            }

            let json = serde_json::to_string(&output)
                .map_err(|e| format!("Failed to serialize output: {}", e))?;
            println!("{}", json);
            Ok(())
        }

        Commands::Bank {
            chapter,
            subject,
            grade,
            board,
            duration,
            out,
            sql,
        } => {
            let params = PipelineParams {
                subject,
                grade,
                board,
                num_questions: 10,
                duration,
            };

            let tests = pipeline::tests_for_chapter(chapter, &params, false);
            let path = out.join(format!("chapter_{}_tests.json", chapter));
            export::write_json(&tests, &path)?;

            if !cli.quiet {
                eprintln!(
                    "Generated {} tests for Chapter {}: {}",
                    tests.len(),
                    chapter,
                    concepts::chapter_title(chapter)
                );
                eprintln!("Saved to: {}", path.display());
            }

            if let Some(sql_path) = sql {
                export::write_sql(&tests, &sql_path)?;
                if !cli.quiet {
                    eprintln!("SQL statements saved to: {}", sql_path.display());
                }
            }
            Ok(())
        }

        Commands::Sql { combined, out } => {
            let content = std::fs::read_to_string(&combined)
                .map_err(|e| format!("Failed to read {}: {}", combined.display(), e))?;
            let combined_export: CombinedExport = serde_json::from_str(&content)
                .map_err(|e| format!("{} is not a combined export file: {}", combined.display(), e))?;

            let script = export::sql_script(&combined_export.tests)?;
            match out {
                Some(path) => {
                    std::fs::write(&path, &script)
                        .map_err(|e| format!("Failed to write {}: {}", path.display(), e))?;
                    if !cli.quiet {
                        eprintln!("SQL statements saved to: {}", path.display());
                    }
                }
                None => print!("{}", script),
            }
            Ok(())
        }

        Commands::Config { cmd } => match cmd {
            ConfigCommands::Show => {
                let openai = settings::get_openai_api_key()
                    .map(|k| settings::mask_key(&k))
                    .unwrap_or_else(|| "not set".to_string());
                let gemini = settings::get_gemini_api_key()
                    .map(|k| settings::mask_key(&k))
                    .unwrap_or_else(|| "not set".to_string());
                println!("OpenAI API key: {}", openai);
                println!("Gemini API key: {}", gemini);
                Ok(())
            }
            ConfigCommands::SetOpenaiKey { key } => {
                settings::set_openai_api_key(Some(key))?;
                println!("OpenAI API key saved");
                Ok(())
            }
            ConfigCommands::SetGeminiKey { key } => {
                settings::set_gemini_api_key(Some(key))?;
                println!("Gemini API key saved");
                Ok(())
            }
            ConfigCommands::ClearKeys => {
                settings::set_openai_api_key(None)?;
                settings::set_gemini_api_key(None)?;
                println!("API keys cleared");
                Ok(())
            }
        },
    }
}
