//! Batch test generation over the Class 3 Math textbook
//!
//! Runs the static-bank pipeline for chapters 1-14 sequentially.
//! Usage: cargo run --bin batch_generate --release
//!
//! PDF paths follow the textbook's file naming: cemm101.pdf .. cemm114.pdf.
//! Chapters whose PDF is missing or has no text layer are skipped, not
//! fatal; the combined export and SQL script cover whatever succeeded.

use std::path::PathBuf;

use quizforge_lib::export::{self, CombinedExport};
use quizforge_lib::pipeline::{self, PipelineParams, Strategy};
use quizforge_lib::{concepts, extract};

const FIRST_CHAPTER: u32 = 1;
const LAST_CHAPTER: u32 = 14;

const PDF_DIR: &str = "tmp";
const OUT_DIR: &str = "tmp/tests";

/// Conventional PDF path for a chapter: cemm10{N} for single-digit
/// chapters, cemm1{N} for two-digit ones.
fn chapter_pdf_path(chapter: u32) -> PathBuf {
    if chapter < 10 {
        PathBuf::from(PDF_DIR).join(format!("cemm10{}.pdf", chapter))
    } else {
        PathBuf::from(PDF_DIR).join(format!("cemm1{}.pdf", chapter))
    }
}

#[tokio::main]
async fn main() {
    println!("==============================================");
    println!("  Batch Test Generation - Class 3 Mathematics");
    println!("==============================================");
    println!();

    let params = PipelineParams {
        subject: "Mathematics".to_string(),
        grade: "3rd Grade".to_string(),
        board: "CBSE".to_string(),
        num_questions: 10,
        duration: 30,
    };

    let mut all_tests = Vec::new();
    let mut skipped: Vec<u32> = Vec::new();

    for chapter in FIRST_CHAPTER..=LAST_CHAPTER {
        println!("----------------------------------------------");
        println!(
            "[Batch] Chapter {}: {}",
            chapter,
            concepts::chapter_title(chapter)
        );

        let pdf_path = chapter_pdf_path(chapter);
        if !pdf_path.exists() {
            println!("[Batch] PDF not found: {}, skipping", pdf_path.display());
            skipped.push(chapter);
            continue;
        }

        let pdf_text = extract::extract_text(&pdf_path);
        if pdf_text.trim().is_empty() {
            println!(
                "[Batch] No text extracted from {}, skipping",
                pdf_path.display()
            );
            skipped.push(chapter);
            continue;
        }
        println!(
            "[Batch] Extracted {} characters from {}",
            pdf_text.len(),
            pdf_path.display()
        );

        let strategy = Strategy::Static { chapter };
        let output = match pipeline::generate_from_pdf(&pdf_path, &params, &strategy).await {
            Ok(output) => output,
            Err(e) => {
                eprintln!("[Batch] ERROR: chapter {} failed: {}", chapter, e);
                skipped.push(chapter);
                continue;
            }
        };

        let chapter_file = PathBuf::from(OUT_DIR).join(format!("chapter_{}_tests.json", chapter));
        if let Err(e) = export::write_json(&output.tests, &chapter_file) {
            eprintln!("[Batch] ERROR: {}", e);
            std::process::exit(1);
        }

        let question_count: usize = output.tests.iter().map(|t| t.questions.len()).sum();
        println!(
            "[Batch] {} tests, {} questions -> {}",
            output.tests.len(),
            question_count,
            chapter_file.display()
        );
        all_tests.extend(output.tests);
    }

    println!("----------------------------------------------");

    let combined = CombinedExport::new(
        all_tests,
        "Class 3 Math chapters 1-14 (cemm101.pdf - cemm114.pdf)",
    );
    let combined_file = PathBuf::from(OUT_DIR).join("all_class3_math_tests.json");
    let sql_file = PathBuf::from(OUT_DIR).join("import_class3_math_tests.sql");

    if let Err(e) = export::write_json(&combined, &combined_file) {
        eprintln!("[Batch] ERROR: {}", e);
        std::process::exit(1);
    }
    if let Err(e) = export::write_sql(&combined.tests, &sql_file) {
        eprintln!("[Batch] ERROR: {}", e);
        std::process::exit(1);
    }

    println!(
        "[Batch] Done: {} tests, {} questions",
        combined.metadata.total_tests, combined.metadata.total_questions
    );
    println!("[Batch] Combined JSON: {}", combined_file.display());
    println!("[Batch] SQL script:    {}", sql_file.display());
    if !skipped.is_empty() {
        println!("[Batch] Skipped chapters: {:?}", skipped);
    }
}
