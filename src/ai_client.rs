//! AI question generation
//!
//! Sends chapter content plus a target concept to a text-completion
//! provider and parses the JSON reply into question records. Three
//! backends behind one entry point:
//! - OpenAI chat completions (primary)
//! - Google Gemini (secondary; tries direct PDF upload, falls back once
//!   to extracted text)
//! - Ollama running locally
//!
//! Validation policy is uniform: every element must carry all four
//! fields with 4 options and an in-range answer index, and fewer valid
//! questions than requested fails the whole concept. No partial results.

use std::path::Path;

use base64::Engine;
use serde::{Deserialize, Serialize};

use crate::extract;
use crate::models::Question;
use crate::settings::{Provider, ProviderConfig};
use crate::utils::safe_truncate;

/// What to generate questions about
#[derive(Debug, Clone)]
pub struct QuestionRequest<'a> {
    pub concept: &'a str,
    pub subject: &'a str,
    pub grade: &'a str,
    pub num_questions: usize,
}

/// Generate questions for one concept using the configured provider.
///
/// `pdf_text` is the already-extracted chapter text; `pdf_path` is kept
/// around for the Gemini upload mode, which sends the document itself.
pub async fn generate_questions(
    config: &ProviderConfig,
    req: &QuestionRequest<'_>,
    pdf_path: &Path,
    pdf_text: &str,
) -> Result<Vec<Question>, String> {
    match config.provider {
        Provider::Primary => generate_openai(config, req, pdf_text).await,
        Provider::Secondary => generate_gemini(config, req, pdf_path, pdf_text).await,
        Provider::Local => generate_ollama(config, req, pdf_text).await,
    }
}

/// Prompt shared by the text-based providers
fn build_prompt(req: &QuestionRequest<'_>, pdf_text: &str) -> String {
    format!(
        r#"You are an expert educational content creator specializing in {subject} for {grade} students.

Complete PDF Content:
{pdf_text}

Concept to focus on: {concept}

Create {num} high-quality multiple choice questions that:
1. Are directly based on the PDF content provided
2. Test understanding of the specific concept: {concept}
3. Are appropriate for {grade} level
4. Have exactly 4 answer options (A, B, C, D)
5. Include detailed explanations for the correct answer
6. Are educationally valuable and accurate
7. Progress from basic to more challenging within the concept

For each question, provide:
- question: The question text
- options: Array of 4 options
- correctAnswer: Index (0-3) of correct option
- explanation: Detailed explanation of why the answer is correct

Return ONLY a valid JSON array with this exact structure:
[
  {{
    "question": "Question text here",
    "options": ["Option A", "Option B", "Option C", "Option D"],
    "correctAnswer": 1,
    "explanation": "Detailed explanation here"
  }}
]

Ensure all questions are factually accurate and directly related to the PDF content."#,
        subject = req.subject,
        grade = req.grade,
        concept = req.concept,
        num = req.num_questions,
        pdf_text = pdf_text,
    )
}

/// Gemini variant: the document travels as an attachment, so the prompt
/// carries only the instructions. Gemini tends to cite page numbers and
/// pictures, hence the extra constraints.
fn build_gemini_prompt(req: &QuestionRequest<'_>) -> String {
    format!(
        r#"You are an expert educational content creator specializing in {subject} for {grade} students.

Create {num} multiple choice questions for the concept: {concept}

Requirements:
- Questions based on PDF content
- Appropriate for {grade} level
- 4 answer options (A, B, C, D)
- Include explanations
- Educational and accurate
- Do NOT reference page numbers in questions
- Do NOT rely on pictures, images, or visual elements from the PDF
- Make questions self-contained and clear using only text content

Return ONLY a valid JSON array:
[
  {{
    "question": "Question text here",
    "options": ["Option A", "Option B", "Option C", "Option D"],
    "correctAnswer": 1,
    "explanation": "Explanation here"
  }}
]"#,
        subject = req.subject,
        grade = req.grade,
        concept = req.concept,
        num = req.num_questions,
    )
}

// ==================== Response parsing & validation ====================

/// Strip Markdown code-fence delimiters from a raw AI reply
fn strip_code_fences(text: &str) -> String {
    let mut text = text.trim();
    if text.starts_with("```json") {
        text = &text[7..];
    } else if text.starts_with("```") {
        text = &text[3..];
    }
    if text.ends_with("```") {
        text = &text[..text.len() - 3];
    }
    text.trim().to_string()
}

/// Parse the raw AI reply into validated questions.
///
/// Elements missing a field, with the wrong option count, or an
/// out-of-range answer index are discarded. If fewer valid questions
/// remain than requested, the whole batch fails.
pub fn parse_questions(raw: &str, num_questions: usize) -> Result<Vec<Question>, String> {
    let json_text = strip_code_fences(raw);

    let values: Vec<serde_json::Value> = serde_json::from_str(&json_text)
        .map_err(|e| format!("AI response is not a JSON array: {}", e))?;

    let mut validated: Vec<Question> = Vec::new();
    for value in values {
        if let Ok(q) = serde_json::from_value::<Question>(value) {
            if q.is_valid() {
                validated.push(q);
            }
        }
    }

    if validated.len() >= num_questions {
        validated.truncate(num_questions);
        Ok(validated)
    } else {
        Err(format!(
            "AI generated only {} valid questions out of {} requested. Please try again.",
            validated.len(),
            num_questions
        ))
    }
}

fn http_client(config: &ProviderConfig) -> Result<reqwest::Client, String> {
    reqwest::Client::builder()
        .timeout(std::time::Duration::from_millis(config.timeout_ms))
        .build()
        .map_err(|e| format!("Failed to build HTTP client: {}", e))
}

// ==================== OpenAI (primary) ====================

#[derive(Debug, Serialize)]
struct OpenAiMessage {
    role: String,
    content: String,
}

#[derive(Debug, Serialize)]
struct OpenAiRequest {
    model: String,
    messages: Vec<OpenAiMessage>,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Debug, Deserialize)]
struct OpenAiResponse {
    choices: Vec<OpenAiChoice>,
}

#[derive(Debug, Deserialize)]
struct OpenAiChoice {
    message: OpenAiMessageContent,
}

#[derive(Debug, Deserialize)]
struct OpenAiMessageContent {
    content: String,
}

async fn generate_openai(
    config: &ProviderConfig,
    req: &QuestionRequest<'_>,
    pdf_text: &str,
) -> Result<Vec<Question>, String> {
    let api_key = config.api_key.as_deref().ok_or(
        "OPENAI_API_KEY not found. AI-powered test generation requires a valid OpenAI API key.",
    )?;

    let request = OpenAiRequest {
        model: config.model.clone(),
        messages: vec![
            OpenAiMessage {
                role: "system".to_string(),
                content: "You are an expert educational content creator. Always respond with valid JSON only."
                    .to_string(),
            },
            OpenAiMessage {
                role: "user".to_string(),
                content: build_prompt(req, pdf_text),
            },
        ],
        max_tokens: 4000,
        temperature: 0.7,
    };

    let response = http_client(config)?
        .post("https://api.openai.com/v1/chat/completions")
        .header("Authorization", format!("Bearer {}", api_key))
        .header("Content-Type", "application/json")
        .json(&request)
        .send()
        .await
        .map_err(|e| format!("OpenAI HTTP request failed: {}", e))?;

    if !response.status().is_success() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        return Err(format!("OpenAI API error {}: {}", status, body));
    }

    let api_response: OpenAiResponse = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse OpenAI response: {}", e))?;

    let text = api_response
        .choices
        .first()
        .map(|c| c.message.content.clone())
        .ok_or("No completion in OpenAI response")?;

    parse_questions(&text, req.num_questions)
        .map_err(|e| format!("OpenAI generation failed: {}", e))
}

// ==================== Gemini (secondary) ====================

#[derive(Debug, Serialize)]
struct GeminiRequest {
    contents: Vec<GeminiContent>,
}

#[derive(Debug, Serialize)]
struct GeminiContent {
    parts: Vec<GeminiPart>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
enum GeminiPart {
    Text(String),
    #[serde(rename_all = "camelCase")]
    InlineData { mime_type: String, data: String },
}

#[derive(Debug, Deserialize)]
struct GeminiResponse {
    candidates: Vec<GeminiCandidate>,
}

#[derive(Debug, Deserialize)]
struct GeminiCandidate {
    content: GeminiReplyContent,
}

#[derive(Debug, Deserialize)]
struct GeminiReplyContent {
    parts: Vec<GeminiReplyPart>,
}

#[derive(Debug, Deserialize)]
struct GeminiReplyPart {
    text: String,
}

/// Try the PDF upload mode first; if it fails, retry once with the fast
/// extracted-text mode. No further retries.
async fn generate_gemini(
    config: &ProviderConfig,
    req: &QuestionRequest<'_>,
    pdf_path: &Path,
    pdf_text: &str,
) -> Result<Vec<Question>, String> {
    match generate_gemini_once(config, req, GeminiInput::Pdf(pdf_path)).await {
        Ok(questions) => Ok(questions),
        Err(upload_err) => {
            eprintln!(
                "PDF upload failed, trying fast text extraction: {}",
                upload_err
            );
            let text = safe_truncate(pdf_text, 2000);
            if text.is_empty() {
                return Err(format!(
                    "Gemini generation failed: {}; text fallback has no extracted text",
                    upload_err
                ));
            }
            generate_gemini_once(config, req, GeminiInput::Text(text)).await
        }
    }
}

enum GeminiInput<'a> {
    Pdf(&'a Path),
    Text(&'a str),
}

async fn generate_gemini_once(
    config: &ProviderConfig,
    req: &QuestionRequest<'_>,
    input: GeminiInput<'_>,
) -> Result<Vec<Question>, String> {
    let api_key = config.api_key.as_deref().ok_or(
        "GEMINI_API_KEY not found. Please get a free API key from https://makersuite.google.com/app/apikey",
    )?;

    let mut parts = vec![GeminiPart::Text(build_gemini_prompt(req))];
    match input {
        GeminiInput::Pdf(path) => {
            let bytes = extract::load_pdf_bytes(path)?;
            parts.push(GeminiPart::InlineData {
                mime_type: "application/pdf".to_string(),
                data: base64::engine::general_purpose::STANDARD.encode(bytes),
            });
        }
        GeminiInput::Text(text) => {
            parts.push(GeminiPart::Text(text.to_string()));
        }
    }

    let url = format!(
        "https://generativelanguage.googleapis.com/v1beta/models/{}:generateContent?key={}",
        config.model, api_key
    );

    let request = GeminiRequest {
        contents: vec![GeminiContent { parts }],
    };

    let response = http_client(config)?
        .post(&url)
        .header("Content-Type", "application/json")
        .json(&request)
        .send()
        .await
        .map_err(|e| format!("Gemini HTTP request failed: {}", e))?;

    if !response.status().is_success() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        return Err(format!("Gemini API error {}: {}", status, body));
    }

    let api_response: GeminiResponse = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse Gemini response: {}", e))?;

    let text = api_response
        .candidates
        .first()
        .and_then(|c| c.content.parts.first())
        .map(|p| p.text.clone())
        .ok_or("No candidate text in Gemini response")?;

    parse_questions(&text, req.num_questions)
        .map_err(|e| format!("Gemini generation failed: {}", e))
}

// ==================== Ollama (local) ====================

#[derive(Debug, Serialize)]
struct OllamaRequest {
    model: String,
    prompt: String,
    stream: bool,
}

#[derive(Debug, Deserialize)]
struct OllamaResponse {
    response: String,
}

async fn generate_ollama(
    config: &ProviderConfig,
    req: &QuestionRequest<'_>,
    pdf_text: &str,
) -> Result<Vec<Question>, String> {
    // Local models get a shorter context than the hosted ones
    let prompt = build_prompt(req, safe_truncate(pdf_text, 3000));

    let request = OllamaRequest {
        model: config.model.clone(),
        prompt,
        stream: false,
    };

    let response = http_client(config)?
        .post("http://localhost:11434/api/generate")
        .json(&request)
        .send()
        .await
        .map_err(|e| {
            if e.is_connect() {
                "Ollama is not running. Please start Ollama with: ollama serve".to_string()
            } else {
                format!("Ollama HTTP request failed: {}", e)
            }
        })?;

    if !response.status().is_success() {
        return Err(format!("Ollama API error: {}", response.status()));
    }

    let api_response: OllamaResponse = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse Ollama response: {}", e))?;

    parse_questions(&api_response.response, req.num_questions)
        .map_err(|e| format!("Ollama generation failed: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_question_json(prompt: &str) -> String {
        format!(
            r#"{{"question": "{}", "options": ["A", "B", "C", "D"], "correctAnswer": 1, "explanation": "because"}}"#,
            prompt
        )
    }

    #[test]
    fn test_parse_plain_json_array() {
        let raw = format!("[{}]", valid_question_json("What is 2 + 2?"));
        let questions = parse_questions(&raw, 1).unwrap();
        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].correct_answer, 1);
    }

    #[test]
    fn test_parse_strips_markdown_fences() {
        let raw = format!("```json\n[{}]\n```", valid_question_json("Q"));
        let questions = parse_questions(&raw, 1).unwrap();
        assert_eq!(questions.len(), 1);

        let raw = format!("```\n[{}]\n```", valid_question_json("Q"));
        assert_eq!(parse_questions(&raw, 1).unwrap().len(), 1);
    }

    #[test]
    fn test_truncates_surplus_questions() {
        let raw = format!(
            "[{},{},{}]",
            valid_question_json("a"),
            valid_question_json("b"),
            valid_question_json("c")
        );
        let questions = parse_questions(&raw, 2).unwrap();
        assert_eq!(questions.len(), 2);
        assert_eq!(questions[0].question, "a");
    }

    #[test]
    fn test_under_count_fails_whole_batch() {
        // 8 valid + 2 malformed out of 10 requested must fail, not return 8
        let mut elements: Vec<String> = (0..8).map(|i| valid_question_json(&format!("q{}", i))).collect();
        elements.push(r#"{"question": "missing fields"}"#.to_string());
        elements.push(
            r#"{"question": "bad index", "options": ["A", "B", "C", "D"], "correctAnswer": 7, "explanation": "x"}"#
                .to_string(),
        );
        let raw = format!("[{}]", elements.join(","));

        let err = parse_questions(&raw, 10).unwrap_err();
        assert!(err.contains("only 8 valid questions out of 10"), "got: {}", err);
    }

    #[test]
    fn test_wrong_option_count_is_discarded() {
        let raw = r#"[{"question": "q", "options": ["A", "B", "C"], "correctAnswer": 0, "explanation": "x"}]"#;
        let err = parse_questions(raw, 1).unwrap_err();
        assert!(err.contains("only 0 valid"));
    }

    #[test]
    fn test_non_array_reply_is_an_error() {
        assert!(parse_questions("not json at all", 1).is_err());
        assert!(parse_questions(r#"{"question": "obj not array"}"#, 1).is_err());
    }

    #[test]
    fn test_prompt_embeds_request() {
        let req = QuestionRequest {
            concept: "Money Recognition",
            subject: "Mathematics",
            grade: "Class 3",
            num_questions: 10,
        };
        let prompt = build_prompt(&req, "one rupee is 100 paise");
        assert!(prompt.contains("Money Recognition"));
        assert!(prompt.contains("Create 10 high-quality"));
        assert!(prompt.contains("one rupee is 100 paise"));
    }
}
