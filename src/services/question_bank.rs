//! Deterministic fallback question bank.
//!
//! Used whenever AI generation fails at any stage. Pure: no network, no
//! randomness, identical output for identical input.

use phf::phf_map;
use tracing::info;

use crate::models::Question;
use crate::services::response_parser::QUESTION_COUNT;

/// One hand-authored question template.
struct Template {
    question: &'static str,
    options: [&'static str; 4],
    correct_answer: &'static str,
    explanation: &'static str,
}

const MATHEMATICS: &[Template] = &[
    Template {
        question: "What is 2 + 2?",
        options: ["A. 3", "B. 4", "C. 5", "D. 6"],
        correct_answer: "B",
        explanation: "Basic addition: 2 + 2 = 4",
    },
    Template {
        question: "What is 10 - 3?",
        options: ["A. 6", "B. 7", "C. 8", "D. 9"],
        correct_answer: "B",
        explanation: "Basic subtraction: 10 - 3 = 7",
    },
    Template {
        question: "What is 3 \u{d7} 4?",
        options: ["A. 10", "B. 11", "C. 12", "D. 13"],
        correct_answer: "C",
        explanation: "Basic multiplication: 3 \u{d7} 4 = 12",
    },
];

const ENGLISH: &[Template] = &[
    Template {
        question: "What is the plural of 'child'?",
        options: ["A. childs", "B. children", "C. childes", "D. child"],
        correct_answer: "B",
        explanation: "The plural of child is children",
    },
    Template {
        question: "Which is a noun?",
        options: ["A. run", "B. quickly", "C. book", "D. beautiful"],
        correct_answer: "C",
        explanation: "A book is a thing, making it a noun",
    },
    Template {
        question: "What is a verb?",
        options: [
            "A. action word",
            "B. describing word",
            "C. naming word",
            "D. joining word",
        ],
        correct_answer: "A",
        explanation: "A verb is an action word",
    },
];

const SCIENCE: &[Template] = &[
    Template {
        question: "What do plants need to grow?",
        options: [
            "A. only water",
            "B. only sunlight",
            "C. water and sunlight",
            "D. only soil",
        ],
        correct_answer: "C",
        explanation: "Plants need both water and sunlight to grow",
    },
    Template {
        question: "How many legs does a spider have?",
        options: ["A. 6", "B. 8", "C. 10", "D. 12"],
        correct_answer: "B",
        explanation: "Spiders have 8 legs",
    },
    Template {
        question: "What is the largest planet?",
        options: ["A. Earth", "B. Mars", "C. Jupiter", "D. Venus"],
        correct_answer: "C",
        explanation: "Jupiter is the largest planet in our solar system",
    },
];

/// Subject name -> templates. Subjects outside this set fall back to the
/// Mathematics templates.
static TEMPLATES: phf::Map<&'static str, &'static [Template]> = phf_map! {
    "Mathematics" => MATHEMATICS,
    "English" => ENGLISH,
    "Science" => SCIENCE,
};

/// Produce a full batch of [`QUESTION_COUNT`] questions from the templates.
///
/// Cycles through the chosen template sequence with wraparound. Repeats past
/// the first pass get a "Question N: " prefix so the batch holds no
/// duplicate question text; options, answer and explanation stay identical.
pub fn fallback_questions(subject: &str, level: &str) -> Vec<Question> {
    info!("generating fallback questions for {} - {}", subject, level);

    let templates = TEMPLATES.get(subject).copied().unwrap_or(MATHEMATICS);

    (0..QUESTION_COUNT)
        .map(|i| {
            let template = &templates[i % templates.len()];
            let question = if i >= templates.len() {
                format!("Question {}: {}", i + 1, template.question)
            } else {
                template.question.to_string()
            };

            Question {
                id: (i + 1) as u32,
                question,
                options: template.options.iter().map(|s| s.to_string()).collect(),
                correct_answer: template.correct_answer.to_string(),
                explanation: template.explanation.to_string(),
                difficulty: level.to_string(),
                subject: subject.to_string(),
            }
        })
        .collect()
}
