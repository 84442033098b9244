//! quizforge: generate multiple-choice quiz tests from textbook PDFs
//!
//! Linear batch pipeline: extract text, tag concepts, source questions
//! (static bank, AI provider, or arithmetic templates), assemble tests,
//! export JSON/SQL for the web app importer.

pub mod ai_client;
pub mod bank;
pub mod concepts;
pub mod export;
pub mod extract;
pub mod models;
pub mod pipeline;
pub mod settings;
pub mod utils;
