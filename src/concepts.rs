//! Concept tagging
//!
//! Two interchangeable sources of concept tags, selected explicitly by the
//! caller (never mixed in one run):
//! - keyword scan over extracted text, per subject
//! - a static per-chapter table for the hand-written question bank
//!
//! Both are deterministic and never return an empty list.

/// Fallback pair used when nothing matches, so downstream stages always
/// receive at least one concept.
pub const DEFAULT_CONCEPTS: [&str; 2] = ["Basic Concepts", "Advanced Topics"];

/// Maximum number of concepts (and therefore tests) per PDF
const MAX_CONCEPTS: usize = 3;

/// Keyword groups per subject, tested in declaration order.
/// A group matches if any of its keywords appears in the lower-cased text.
const MATH_GROUPS: &[(&[&str], &str)] = &[
    (&["add", "addition", "plus"], "Addition"),
    (&["subtract", "subtraction", "minus"], "Subtraction"),
    (&["multiply", "multiplication", "times"], "Multiplication"),
    (&["divide", "division", "share"], "Division"),
    (&["shape", "circle", "square"], "Shapes and Geometry"),
    (&["time", "clock", "hour"], "Time and Measurement"),
    (&["money", "rupee", "coin"], "Money and Currency"),
    (&["pattern", "sequence"], "Patterns and Sequences"),
    (&["data", "chart", "graph"], "Data and Charts"),
    (&["length", "measure", "long"], "Measurement"),
];

const SCIENCE_GROUPS: &[(&[&str], &str)] = &[
    (&["plant", "tree", "leaf"], "Plants and Nature"),
    (&["animal", "bird", "fish"], "Animals"),
    (&["water", "air", "weather"], "Environment"),
    (&["body", "health", "food"], "Human Body and Health"),
];

/// Scan extracted text for concept keywords.
///
/// Groups are tested in declaration order and the first matches win;
/// at most 3 concepts are returned. If nothing matches (including an
/// unknown subject), the fixed default pair is returned.
pub fn concepts_from_text(text: &str, subject: &str) -> Vec<String> {
    let text_lower = text.to_lowercase();

    let groups = match subject.to_lowercase().as_str() {
        "mathematics" => MATH_GROUPS,
        "science" => SCIENCE_GROUPS,
        _ => &[],
    };

    let mut concepts: Vec<String> = groups
        .iter()
        .filter(|(keywords, _)| keywords.iter().any(|k| text_lower.contains(k)))
        .map(|(_, name)| name.to_string())
        .collect();

    if concepts.is_empty() {
        concepts = DEFAULT_CONCEPTS.iter().map(|s| s.to_string()).collect();
    }

    concepts.truncate(MAX_CONCEPTS);
    concepts
}

/// Chapter titles for the Class 3 Math textbook (chapters 1-14)
const CHAPTER_TITLES: &[(u32, &str)] = &[
    (1, "What's in a Name?"),
    (2, "Fun with Numbers"),
    (3, "Give and Take"),
    (4, "Long and Short"),
    (5, "Shapes and Designs"),
    (6, "Fun with Give and Take"),
    (7, "Time Goes On"),
    (8, "Who is Heavier?"),
    (9, "How Many Times?"),
    (10, "Play with Patterns"),
    (11, "Jugs and Mugs"),
    (12, "Can We Share?"),
    (13, "Smart Charts"),
    (14, "Rupees and Paise"),
];

/// Concept pairs for the static question bank, keyed by chapter
const CHAPTER_CONCEPTS: &[(u32, [&str; 2])] = &[
    (1, ["Basic Counting and Number Recognition", "Name Length and Letter Counting"]),
    (2, ["Number Sequence and Counting", "Place Value and Number Comparison"]),
    (3, ["Addition with Carrying", "Subtraction with Borrowing"]),
    (4, ["Length Measurement", "Comparing Lengths"]),
    (5, ["Basic Geometric Shapes", "Pattern Recognition"]),
    (6, ["Advanced Addition Strategies", "Advanced Subtraction Strategies"]),
    (7, ["Reading Time on Clock", "Time Intervals and Duration"]),
    (8, ["Weight Comparison", "Units of Weight"]),
    (9, ["Introduction to Multiplication", "Multiplication Tables"]),
    (10, ["Number Patterns", "Shape Patterns"]),
    (11, ["Volume and Capacity", "Liquid Measurement"]),
    (12, ["Introduction to Division", "Equal Sharing"]),
    (13, ["Data Collection and Organization", "Reading Charts and Graphs"]),
    (14, ["Money Recognition", "Currency Conversion"]),
];

/// Title of a textbook chapter, or "Chapter N" for unknown chapters.
pub fn chapter_title(chapter: u32) -> String {
    CHAPTER_TITLES
        .iter()
        .find(|(n, _)| *n == chapter)
        .map(|(_, t)| t.to_string())
        .unwrap_or_else(|| format!("Chapter {}", chapter))
}

/// Concepts for a chapter from the static table. Unknown chapters get
/// the default pair.
pub fn chapter_concepts(chapter: u32) -> Vec<String> {
    CHAPTER_CONCEPTS
        .iter()
        .find(|(n, _)| *n == chapter)
        .map(|(_, pair)| pair.iter().map(|s| s.to_string()).collect())
        .unwrap_or_else(|| DEFAULT_CONCEPTS.iter().map(|s| s.to_string()).collect())
}

/// Derive a test title from PDF text: prefer a chapter/lesson heading in
/// the first 20 lines, fall back to keyword-derived topic names.
pub fn title_from_text(text: &str, subject: &str, grade: &str) -> String {
    for line in text.lines().take(20) {
        let line = line.trim();
        if line.len() > 10 && line.len() < 100 {
            let lower = line.to_lowercase();
            if lower.contains("chapter") || lower.contains("lesson") {
                return format!("{} {} - {}", grade, subject, line);
            }
        }
    }

    let lower = text.to_lowercase();
    let topic = if lower.contains("money") || lower.contains("rupee") {
        "Money and Currency"
    } else if lower.contains("time") || lower.contains("clock") {
        "Time and Measurement"
    } else if lower.contains("shape") || lower.contains("geometry") {
        "Shapes and Geometry"
    } else if lower.contains("add") || lower.contains("subtract") {
        "Numbers and Operations"
    } else {
        "Chapter Content"
    };
    format!("{} {} - {}", grade, subject, topic)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_currency_text_tags_money_first() {
        let text = "One rupee coin and fifty paise coin";
        let concepts = concepts_from_text(text, "Mathematics");
        assert_eq!(concepts[0], "Money and Currency");
    }

    #[test]
    fn test_declaration_order_wins() {
        // Text matching addition, money and patterns: order must follow
        // the group table, capped at 3.
        let text = "addition of money amounts follows a pattern in this chart";
        let concepts = concepts_from_text(text, "Mathematics");
        assert_eq!(
            concepts,
            vec!["Addition", "Money and Currency", "Patterns and Sequences"]
        );
    }

    #[test]
    fn test_no_match_returns_default_pair() {
        let concepts = concepts_from_text("zzz", "Mathematics");
        assert_eq!(concepts, vec!["Basic Concepts", "Advanced Topics"]);
        // Unknown subject behaves the same
        let concepts = concepts_from_text("addition", "History");
        assert_eq!(concepts, vec!["Basic Concepts", "Advanced Topics"]);
    }

    #[test]
    fn test_determinism() {
        let text = "plants need water and air; animals eat food";
        let a = concepts_from_text(text, "Science");
        let b = concepts_from_text(text, "Science");
        assert_eq!(a, b);
    }

    #[test]
    fn test_chapter_tables() {
        assert_eq!(chapter_title(14), "Rupees and Paise");
        assert_eq!(chapter_title(99), "Chapter 99");
        assert_eq!(
            chapter_concepts(14),
            vec!["Money Recognition", "Currency Conversion"]
        );
        assert_eq!(chapter_concepts(42), vec!["Basic Concepts", "Advanced Topics"]);
    }

    #[test]
    fn test_title_from_heading_line() {
        let text = "NCERT\nChapter 14: Rupees and Paise\nmore text";
        let title = title_from_text(text, "Mathematics", "Class 3");
        assert_eq!(title, "Class 3 Mathematics - Chapter 14: Rupees and Paise");
    }

    #[test]
    fn test_title_fallback_from_keywords() {
        let title = title_from_text("rupee paise", "Mathematics", "Class 3");
        assert_eq!(title, "Class 3 Mathematics - Money and Currency");
    }
}
