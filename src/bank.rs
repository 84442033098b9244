//! Static question bank
//!
//! One consolidated table replacing the hand-written banks that used to be
//! duplicated across per-chapter scripts. Lookup is by (chapter, concept
//! index); chapters without an entry fall back to the templated arithmetic
//! generator, which guarantees every concept yields some output.

use crate::models::Question;

/// A question literal in the bank
struct BankQuestion {
    question: &'static str,
    options: [&'static str; 4],
    correct_answer: usize,
    explanation: &'static str,
}

impl BankQuestion {
    fn to_question(&self) -> Question {
        Question {
            question: self.question.to_string(),
            options: self.options.iter().map(|s| s.to_string()).collect(),
            correct_answer: self.correct_answer,
            explanation: self.explanation.to_string(),
        }
    }
}

/// Bank entries keyed by (chapter, concept index within the chapter)
struct BankEntry {
    chapter: u32,
    concept: usize,
    questions: &'static [BankQuestion],
}

/// Chapter 1: What's in a Name? - counting and number recognition
const CHAPTER_1_COUNTING: &[BankQuestion] = &[
    BankQuestion {
        question: "How many letters are in the word 'CAT'?",
        options: ["2", "3", "4", "5"],
        correct_answer: 1,
        explanation: "The word 'CAT' has 3 letters: C, A, T.",
    },
    BankQuestion {
        question: "What comes after the number 5?",
        options: ["4", "6", "7", "8"],
        correct_answer: 1,
        explanation: "After 5 comes 6 in the number sequence.",
    },
    BankQuestion {
        question: "How many fingers do you have on one hand?",
        options: ["4", "5", "6", "7"],
        correct_answer: 1,
        explanation: "You have 5 fingers on one hand.",
    },
    BankQuestion {
        question: "What is the next number after 9?",
        options: ["8", "10", "11", "12"],
        correct_answer: 1,
        explanation: "After 9 comes 10 in the number sequence.",
    },
    BankQuestion {
        question: "How many wheels does a bicycle have?",
        options: ["1", "2", "3", "4"],
        correct_answer: 1,
        explanation: "A bicycle has 2 wheels.",
    },
    BankQuestion {
        question: "What comes before the number 7?",
        options: ["5", "6", "8", "9"],
        correct_answer: 1,
        explanation: "Before 7 comes 6 in the number sequence.",
    },
    BankQuestion {
        question: "How many days are in a week?",
        options: ["5", "6", "7", "8"],
        correct_answer: 2,
        explanation: "There are 7 days in a week.",
    },
    BankQuestion {
        question: "What is the number between 4 and 6?",
        options: ["3", "5", "7", "8"],
        correct_answer: 1,
        explanation: "The number between 4 and 6 is 5.",
    },
    BankQuestion {
        question: "How many sides does a triangle have?",
        options: ["2", "3", "4", "5"],
        correct_answer: 1,
        explanation: "A triangle has 3 sides.",
    },
    BankQuestion {
        question: "What comes after 19?",
        options: ["18", "20", "21", "22"],
        correct_answer: 1,
        explanation: "After 19 comes 20 in the number sequence.",
    },
];

/// Chapter 1: name length and letter counting
const CHAPTER_1_LETTERS: &[BankQuestion] = &[
    BankQuestion {
        question: "How many letters are in the number name 'SEVENTEEN'?",
        options: ["8 letters", "9 letters", "10 letters", "11 letters"],
        correct_answer: 2,
        explanation: "S-E-V-E-N-T-E-E-N = 10 letters.",
    },
    BankQuestion {
        question: "Which number between 1 and 99 has the longest name?",
        options: ["99", "77", "88", "66"],
        correct_answer: 0,
        explanation: "Ninety-nine has more letters than other numbers in this range.",
    },
    BankQuestion {
        question: "If your roll number is 43, how many letters are in its number name 'FORTY-THREE'?",
        options: ["9 letters", "10 letters", "11 letters", "12 letters"],
        correct_answer: 2,
        explanation: "F-O-R-T-Y-T-H-R-E-E = 11 letters.",
    },
    BankQuestion {
        question: "How many letters are in the word 'MATHEMATICS'?",
        options: ["10 letters", "11 letters", "12 letters", "13 letters"],
        correct_answer: 1,
        explanation: "M-A-T-H-E-M-A-T-I-C-S = 11 letters.",
    },
    BankQuestion {
        question: "If you write the number 25 in words, how many letters does it have?",
        options: ["8 letters", "9 letters", "10 letters", "11 letters"],
        correct_answer: 2,
        explanation: "TWENTY-FIVE = T-W-E-N-T-Y-F-I-V-E = 10 letters.",
    },
    BankQuestion {
        question: "Which number name has the fewest letters?",
        options: ["ONE", "TWO", "THREE", "FOUR"],
        correct_answer: 0,
        explanation: "ONE = 3 letters, TWO = 3 letters, THREE = 5 letters, FOUR = 4 letters. ONE and TWO both have 3 letters.",
    },
    BankQuestion {
        question: "How many letters are in the number name 'EIGHTY-EIGHT'?",
        options: ["10 letters", "11 letters", "12 letters", "13 letters"],
        correct_answer: 2,
        explanation: "E-I-G-H-T-Y-E-I-G-H-T = 12 letters.",
    },
    BankQuestion {
        question: "Count the letters in the word 'ELEPHANT'. How many letters does it have?",
        options: ["7 letters", "8 letters", "9 letters", "6 letters"],
        correct_answer: 1,
        explanation: "E-L-E-P-H-A-N-T = 8 letters.",
    },
    BankQuestion {
        question: "Which animal name has the most letters: tiger, elephant, or deer?",
        options: ["tiger", "elephant", "deer", "All have the same number"],
        correct_answer: 1,
        explanation: "Elephant has 8 letters, tiger has 5 letters, and deer has 4 letters.",
    },
    BankQuestion {
        question: "How many letters are in the word 'CAT'?",
        options: ["2", "3", "4", "5"],
        correct_answer: 1,
        explanation: "The word 'CAT' has 3 letters: C, A, T.",
    },
];

/// Chapter 2: Fun with Numbers - sequence, comparison, place value
const CHAPTER_2_NUMBERS: &[BankQuestion] = &[
    BankQuestion {
        question: "What comes after 99?",
        options: ["98", "100", "101", "102"],
        correct_answer: 1,
        explanation: "After 99 comes 100, which is the next number in sequence.",
    },
    BankQuestion {
        question: "Which number is greater: 45 or 54?",
        options: ["45", "54", "Both are equal", "Cannot determine"],
        correct_answer: 1,
        explanation: "54 is greater than 45 because 5 > 4 in the tens place.",
    },
    BankQuestion {
        question: "What is the place value of 7 in 75?",
        options: ["Ones", "Tens", "Hundreds", "Thousands"],
        correct_answer: 1,
        explanation: "In 75, the digit 7 is in the tens place.",
    },
    BankQuestion {
        question: "Which number comes between 25 and 27?",
        options: ["24", "26", "28", "29"],
        correct_answer: 1,
        explanation: "26 comes between 25 and 27.",
    },
    BankQuestion {
        question: "What is 10 more than 35?",
        options: ["34", "36", "45", "55"],
        correct_answer: 2,
        explanation: "35 + 10 = 45.",
    },
    BankQuestion {
        question: "Which number is smaller: 67 or 76?",
        options: ["67", "76", "Both are equal", "Cannot determine"],
        correct_answer: 0,
        explanation: "67 is smaller than 76 because 6 < 7 in the tens place.",
    },
    BankQuestion {
        question: "What is the expanded form of 48?",
        options: ["40 + 8", "4 + 8", "40 + 80", "4 + 80"],
        correct_answer: 0,
        explanation: "48 = 40 + 8 (4 tens + 8 ones).",
    },
    BankQuestion {
        question: "What comes before 50?",
        options: ["48", "49", "51", "52"],
        correct_answer: 1,
        explanation: "Before 50 comes 49.",
    },
    BankQuestion {
        question: "Which number has 6 in the ones place?",
        options: ["16", "26", "36", "All of the above"],
        correct_answer: 3,
        explanation: "All numbers 16, 26, and 36 have 6 in the ones place.",
    },
    BankQuestion {
        question: "What is 20 less than 80?",
        options: ["60", "70", "100", "1000"],
        correct_answer: 0,
        explanation: "80 - 20 = 60.",
    },
];

/// Chapter 3: Give and Take - addition with carrying, subtraction with borrowing
const CHAPTER_3_GIVE_AND_TAKE: &[BankQuestion] = &[
    BankQuestion {
        question: "What is 25 + 17?",
        options: ["32", "42", "52", "62"],
        correct_answer: 1,
        explanation: "25 + 17 = 42. Add ones: 5 + 7 = 12, write 2 carry 1. Add tens: 2 + 1 + 1 = 4.",
    },
    BankQuestion {
        question: "What is 48 - 19?",
        options: ["27", "29", "31", "33"],
        correct_answer: 1,
        explanation: "48 - 19 = 29. Borrow 1 from tens: 18 - 9 = 9, then 3 - 1 = 2.",
    },
    BankQuestion {
        question: "What is 36 + 28?",
        options: ["54", "64", "74", "84"],
        correct_answer: 1,
        explanation: "36 + 28 = 64. Add ones: 6 + 8 = 14, write 4 carry 1. Add tens: 3 + 2 + 1 = 6.",
    },
    BankQuestion {
        question: "What is 52 - 24?",
        options: ["26", "28", "30", "32"],
        correct_answer: 1,
        explanation: "52 - 24 = 28. Borrow 1 from tens: 12 - 4 = 8, then 4 - 2 = 2.",
    },
    BankQuestion {
        question: "What is 67 + 15?",
        options: ["72", "82", "92", "102"],
        correct_answer: 1,
        explanation: "67 + 15 = 82. Add ones: 7 + 5 = 12, write 2 carry 1. Add tens: 6 + 1 + 1 = 8.",
    },
    BankQuestion {
        question: "What is 83 - 35?",
        options: ["48", "58", "68", "78"],
        correct_answer: 0,
        explanation: "83 - 35 = 48. Borrow 1 from tens: 13 - 5 = 8, then 7 - 3 = 4.",
    },
    BankQuestion {
        question: "What is 29 + 37?",
        options: ["56", "66", "76", "86"],
        correct_answer: 1,
        explanation: "29 + 37 = 66. Add ones: 9 + 7 = 16, write 6 carry 1. Add tens: 2 + 3 + 1 = 6.",
    },
    BankQuestion {
        question: "What is 71 - 18?",
        options: ["53", "63", "73", "83"],
        correct_answer: 0,
        explanation: "71 - 18 = 53. Borrow 1 from tens: 11 - 8 = 3, then 6 - 1 = 5.",
    },
    BankQuestion {
        question: "What is 45 + 26?",
        options: ["61", "71", "81", "91"],
        correct_answer: 1,
        explanation: "45 + 26 = 71. Add ones: 5 + 6 = 11, write 1 carry 1. Add tens: 4 + 2 + 1 = 7.",
    },
    BankQuestion {
        question: "What is 94 - 27?",
        options: ["67", "77", "87", "97"],
        correct_answer: 0,
        explanation: "94 - 27 = 67. Borrow 1 from tens: 14 - 7 = 7, then 8 - 2 = 6.",
    },
];

/// Chapter 14: Rupees and Paise - money recognition
const CHAPTER_14_MONEY: &[BankQuestion] = &[
    BankQuestion {
        question: "How many paise make 1 rupee?",
        options: ["50 paise", "100 paise", "25 paise", "200 paise"],
        correct_answer: 1,
        explanation: "1 rupee = 100 paise.",
    },
    BankQuestion {
        question: "Which coin is worth 50 paise?",
        options: ["Half rupee", "Quarter rupee", "One rupee", "Two rupee"],
        correct_answer: 0,
        explanation: "50 paise coin is called half rupee.",
    },
    BankQuestion {
        question: "What is the value of 5 one-rupee coins?",
        options: ["5 rupees", "10 rupees", "15 rupees", "20 rupees"],
        correct_answer: 0,
        explanation: "5 \u{00d7} 1 rupee = 5 rupees.",
    },
    BankQuestion {
        question: "How much is 2 rupees and 50 paise?",
        options: ["2.50 rupees", "2.05 rupees", "2.25 rupees", "2.75 rupees"],
        correct_answer: 0,
        explanation: "2 rupees + 50 paise = 2.50 rupees.",
    },
    BankQuestion {
        question: "Which is the smallest denomination coin?",
        options: ["1 rupee", "50 paise", "25 paise", "10 paise"],
        correct_answer: 3,
        explanation: "10 paise is the smallest denomination coin.",
    },
    BankQuestion {
        question: "What is 1 rupee written as paise?",
        options: ["10 paise", "50 paise", "100 paise", "200 paise"],
        correct_answer: 2,
        explanation: "1 rupee = 100 paise.",
    },
    BankQuestion {
        question: "How many 25 paise coins make 1 rupee?",
        options: ["2 coins", "3 coins", "4 coins", "5 coins"],
        correct_answer: 2,
        explanation: "4 \u{00d7} 25 paise = 100 paise = 1 rupee.",
    },
    BankQuestion {
        question: "What is the value of 3 half-rupee coins?",
        options: ["1.50 rupees", "2.00 rupees", "2.50 rupees", "3.00 rupees"],
        correct_answer: 0,
        explanation: "3 \u{00d7} 50 paise = 150 paise = 1.50 rupees.",
    },
    BankQuestion {
        question: "Which note is worth 10 rupees?",
        options: ["Five rupee note", "Ten rupee note", "Twenty rupee note", "Fifty rupee note"],
        correct_answer: 1,
        explanation: "Ten rupee note is worth 10 rupees.",
    },
    BankQuestion {
        question: "How much money do you have if you have 1 five-rupee note and 2 one-rupee coins?",
        options: ["6 rupees", "7 rupees", "8 rupees", "9 rupees"],
        correct_answer: 1,
        explanation: "5 rupees + 2 rupees = 7 rupees.",
    },
];

/// Chapter 14: Rupees and Paise - currency conversion
const CHAPTER_14_CONVERSION: &[BankQuestion] = &[
    BankQuestion {
        question: "Convert 250 paise to rupees.",
        options: ["2.50 rupees", "2.25 rupees", "2.75 rupees", "3.00 rupees"],
        correct_answer: 0,
        explanation: "250 paise = 250 \u{00f7} 100 = 2.50 rupees.",
    },
    BankQuestion {
        question: "How many paise are in 3.75 rupees?",
        options: ["375 paise", "350 paise", "400 paise", "425 paise"],
        correct_answer: 0,
        explanation: "3.75 rupees = 3.75 \u{00d7} 100 = 375 paise.",
    },
    BankQuestion {
        question: "If you have 500 paise, how many rupees do you have?",
        options: ["4 rupees", "5 rupees", "6 rupees", "7 rupees"],
        correct_answer: 1,
        explanation: "500 paise = 500 \u{00f7} 100 = 5 rupees.",
    },
    BankQuestion {
        question: "Convert 1.25 rupees to paise.",
        options: ["125 paise", "150 paise", "175 paise", "200 paise"],
        correct_answer: 0,
        explanation: "1.25 rupees = 1.25 \u{00d7} 100 = 125 paise.",
    },
    BankQuestion {
        question: "How much is 4 rupees and 80 paise in paise?",
        options: ["480 paise", "400 paise", "380 paise", "420 paise"],
        correct_answer: 0,
        explanation: "4 rupees + 80 paise = 400 paise + 80 paise = 480 paise.",
    },
    BankQuestion {
        question: "Convert 600 paise to rupees and paise.",
        options: ["6 rupees 0 paise", "5 rupees 100 paise", "6 rupees 50 paise", "7 rupees 0 paise"],
        correct_answer: 0,
        explanation: "600 paise = 6 rupees 0 paise.",
    },
    BankQuestion {
        question: "If 1 rupee = 100 paise, then 2.50 rupees = ?",
        options: ["250 paise", "200 paise", "300 paise", "350 paise"],
        correct_answer: 0,
        explanation: "2.50 rupees = 2.50 \u{00d7} 100 = 250 paise.",
    },
    BankQuestion {
        question: "How many rupees are in 750 paise?",
        options: ["7.50 rupees", "7.25 rupees", "7.75 rupees", "8.00 rupees"],
        correct_answer: 0,
        explanation: "750 paise = 750 \u{00f7} 100 = 7.50 rupees.",
    },
    BankQuestion {
        question: "Convert 1.80 rupees to paise.",
        options: ["180 paise", "160 paise", "200 paise", "220 paise"],
        correct_answer: 0,
        explanation: "1.80 rupees = 1.80 \u{00d7} 100 = 180 paise.",
    },
    BankQuestion {
        question: "If you have 3 rupees and 25 paise, how many total paise do you have?",
        options: ["325 paise", "300 paise", "350 paise", "375 paise"],
        correct_answer: 0,
        explanation: "3 rupees + 25 paise = 300 paise + 25 paise = 325 paise.",
    },
];

/// The whole bank. Concept indices follow `concepts::chapter_concepts`.
const BANK: &[BankEntry] = &[
    BankEntry { chapter: 1, concept: 0, questions: CHAPTER_1_COUNTING },
    BankEntry { chapter: 1, concept: 1, questions: CHAPTER_1_LETTERS },
    BankEntry { chapter: 2, concept: 0, questions: CHAPTER_2_NUMBERS },
    BankEntry { chapter: 3, concept: 0, questions: CHAPTER_3_GIVE_AND_TAKE },
    BankEntry { chapter: 14, concept: 0, questions: CHAPTER_14_MONEY },
    BankEntry { chapter: 14, concept: 1, questions: CHAPTER_14_CONVERSION },
];

/// Look up the static bank. Returns None when the (chapter, concept)
/// pair has no hand-written questions; callers fall back to
/// `template_questions`.
pub fn lookup(chapter: u32, concept_index: usize) -> Option<Vec<Question>> {
    BANK.iter()
        .find(|e| e.chapter == chapter && e.concept == concept_index)
        .map(|e| e.questions.iter().map(|q| q.to_question()).collect())
}

/// Static strategy entry point: bank questions when present, arithmetic
/// templates otherwise.
pub fn questions_for(chapter: u32, concept_index: usize) -> Vec<Question> {
    lookup(chapter, concept_index).unwrap_or_else(|| template_questions(chapter))
}

/// Templated arithmetic placeholder questions for chapters without a
/// hand-written bank. The correct numeric answer always sits at the same
/// option index per template. Placeholder content, not real pedagogy.
pub fn template_questions(chapter: u32) -> Vec<Question> {
    let n = chapter as i64;

    vec![
        Question {
            question: format!("What is {} + {}?", n * 2, n * 3),
            options: num_options(n * 5, 2),
            correct_answer: 1,
            explanation: format!("{} + {} = {}.", n * 2, n * 3, n * 5),
        },
        Question {
            question: format!("What is {} - {}?", n * 4, n * 2),
            options: num_options(n * 2, 1),
            correct_answer: 1,
            explanation: format!("{} - {} = {}.", n * 4, n * 2, n * 2),
        },
        Question {
            question: format!("How many tens are in {}?", n * 10),
            options: num_options(n, 1),
            correct_answer: 1,
            explanation: format!("In {}, there are {} tens.", n * 10, n),
        },
        Question {
            question: format!("What is {} \u{00d7} 3?", n),
            options: num_options(n * 3, 3),
            correct_answer: 1,
            explanation: format!("{} \u{00d7} 3 = {}.", n, n * 3),
        },
        Question {
            question: format!("Which is greater: {} or {}?", n * 4, n * 5),
            options: vec![
                (n * 4).to_string(),
                (n * 5).to_string(),
                "Both are equal".to_string(),
                "Cannot determine".to_string(),
            ],
            correct_answer: 1,
            explanation: format!("{} is greater than {}.", n * 5, n * 4),
        },
        Question {
            question: format!("What is the next number after {}?", n * 6),
            options: vec![
                (n * 6).to_string(),
                (n * 6 + 1).to_string(),
                (n * 6 + 2).to_string(),
                (n * 6 + 3).to_string(),
            ],
            correct_answer: 1,
            explanation: format!("After {} comes {}.", n * 6, n * 6 + 1),
        },
        Question {
            question: format!("How many ones are in {}?", n * 7),
            options: vec![
                (n * 7 % 10 - 1).to_string(),
                (n * 7 % 10).to_string(),
                (n * 7 % 10 + 1).to_string(),
                (n * 7 % 10 + 2).to_string(),
            ],
            correct_answer: 1,
            explanation: format!("In {}, there are {} ones.", n * 7, n * 7 % 10),
        },
        Question {
            question: format!("What is {} \u{00f7} 2?", n * 8),
            options: num_options(n * 4, 2),
            correct_answer: 1,
            explanation: format!("{} \u{00f7} 2 = {}.", n * 8, n * 4),
        },
        Question {
            question: format!("Which is smaller: {} or {}?", n * 9, n * 10),
            options: vec![
                (n * 9).to_string(),
                (n * 10).to_string(),
                "Both are equal".to_string(),
                "Cannot determine".to_string(),
            ],
            correct_answer: 0,
            explanation: format!("{} is smaller than {}.", n * 9, n * 10),
        },
        Question {
            question: format!("What is {} - {}?", n * 11, n),
            options: num_options(n * 10, 1),
            correct_answer: 1,
            explanation: format!("{} - {} = {}.", n * 11, n, n * 10),
        },
    ]
}

/// Option row for a numeric answer: the correct value at index 1,
/// distractors offset by `step`.
fn num_options(answer: i64, step: i64) -> Vec<String> {
    vec![
        (answer - step).to_string(),
        answer.to_string(),
        (answer + step).to_string(),
        (answer + 2 * step).to_string(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chapter_14_money_bank() {
        let questions = lookup(14, 0).expect("chapter 14 has a money bank");
        assert_eq!(questions.len(), 10);
        // "1 rupee = 100 paise" sits at option index 1
        assert_eq!(questions[0].question, "How many paise make 1 rupee?");
        assert_eq!(questions[0].correct_answer, 1);
        assert!(questions.iter().all(|q| q.is_valid()));
    }

    #[test]
    fn test_chapter_14_conversion_bank() {
        let questions = lookup(14, 1).unwrap();
        assert_eq!(questions.len(), 10);
        assert!(questions.iter().all(|q| q.is_valid()));
    }

    #[test]
    fn test_unknown_pair_falls_back_to_templates() {
        assert!(lookup(7, 0).is_none());
        let questions = questions_for(7, 0);
        assert_eq!(questions.len(), 10);
        assert!(questions.iter().all(|q| q.is_valid()));
    }

    #[test]
    fn test_template_arithmetic_is_consistent() {
        let questions = template_questions(7);
        // 7*2 + 7*3 = 35, correct option at index 1
        assert_eq!(questions[0].question, "What is 14 + 21?");
        assert_eq!(questions[0].options[questions[0].correct_answer], "35");
        // division template: 56 / 2 = 28
        assert_eq!(questions[7].options[questions[7].correct_answer], "28");
    }

    #[test]
    fn test_all_bank_entries_are_valid() {
        for entry in super::BANK {
            let qs = lookup(entry.chapter, entry.concept).unwrap();
            assert!(!qs.is_empty());
            for q in &qs {
                assert!(q.is_valid(), "invalid bank question: {}", q.question);
            }
        }
    }
}
