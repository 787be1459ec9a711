//! Quiz questions and the built-in question banks

use serde::{Deserialize, Serialize};

use super::boss::BossArchetype;
use crate::consts::{CHOICES_PER_QUESTION, MAP_COUNT, QUESTIONS_PER_BOSS};
use crate::error::QuizError;

/// A multiple-choice question
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    prompt: String,
    choices: [String; CHOICES_PER_QUESTION],
    correct: usize,
}

impl Question {
    pub fn new(
        prompt: impl Into<String>,
        choices: [String; CHOICES_PER_QUESTION],
        correct: usize,
    ) -> Result<Self, QuizError> {
        if correct >= CHOICES_PER_QUESTION {
            return Err(QuizError::InvalidCorrectIndex {
                index: correct,
                choices: CHOICES_PER_QUESTION,
            });
        }
        Ok(Self {
            prompt: prompt.into(),
            choices,
            correct,
        })
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn choices(&self) -> &[String; CHOICES_PER_QUESTION] {
        &self.choices
    }

    pub fn correct_index(&self) -> usize {
        self.correct
    }

    pub fn correct_answer(&self) -> &str {
        &self.choices[self.correct]
    }

    pub fn is_correct(&self, choice: usize) -> bool {
        choice == self.correct
    }

    /// Deserialized questions skip `new`, so re-check the index
    pub fn validate(&self) -> Result<(), QuizError> {
        if self.correct >= CHOICES_PER_QUESTION {
            return Err(QuizError::InvalidCorrectIndex {
                index: self.correct,
                choices: CHOICES_PER_QUESTION,
            });
        }
        Ok(())
    }
}

/// Check a custom bank has the right size and valid answers
pub fn validate_bank(questions: &[Question]) -> Result<(), QuizError> {
    if questions.len() != QUESTIONS_PER_BOSS {
        return Err(QuizError::WrongBankSize {
            actual: questions.len(),
            expected: QUESTIONS_PER_BOSS,
        });
    }
    questions.iter().try_for_each(Question::validate)
}

struct QuestionDef {
    prompt: &'static str,
    choices: [&'static str; CHOICES_PER_QUESTION],
    correct: usize,
}

impl QuestionDef {
    fn to_question(&self) -> Question {
        Question {
            prompt: self.prompt.to_string(),
            choices: self.choices.map(str::to_string),
            correct: self.correct,
        }
    }
}

const fn q(
    prompt: &'static str,
    choices: [&'static str; CHOICES_PER_QUESTION],
    correct: usize,
) -> QuestionDef {
    QuestionDef {
        prompt,
        choices,
        correct,
    }
}

const BANKS: [[QuestionDef; QUESTIONS_PER_BOSS]; MAP_COUNT] = [
    // PC cases
    [
        q(
            "What is the main purpose of a computer case?",
            [
                "To protect internal components",
                "To make the computer faster",
                "To improve graphics",
                "To store files",
            ],
            0,
        ),
        q(
            "Which of these is NOT typically found on a PC case front panel?",
            ["CPU socket", "USB ports", "Power button", "Audio jacks"],
            0,
        ),
        q(
            "What does ATX stand for in ATX case?",
            [
                "Advanced Technology Extended",
                "Automatic Thermal Xchange",
                "Additional Transistor Xtension",
                "Audio Transfer Xport",
            ],
            0,
        ),
        q(
            "Which type of PC case is typically the smallest?",
            ["Mini-ITX", "Mid-Tower", "Full-Tower", "Super-Tower"],
            0,
        ),
        q(
            "What feature helps improve airflow in a PC case?",
            ["Mesh front panel", "Solid front panel", "No side panel", "Heavy weight"],
            0,
        ),
    ],
    // Cooling
    [
        q(
            "What is the main purpose of a CPU cooler?",
            [
                "To remove heat from the CPU",
                "To make the computer quieter",
                "To add RGB lighting",
                "To speed up processing",
            ],
            0,
        ),
        q(
            "Which cooling method typically achieves lower CPU temperatures?",
            ["Liquid cooling", "Air cooling", "Passive cooling", "No cooling"],
            0,
        ),
        q(
            "What is the purpose of thermal paste?",
            [
                "To fill microscopic gaps between CPU and heatsink",
                "To glue components together",
                "To paint the motherboard",
                "To clean dust",
            ],
            0,
        ),
        q(
            "Which direction should case fans typically be mounted to ensure proper airflow?",
            [
                "Front: intake, Rear: exhaust",
                "Front: exhaust, Rear: intake",
                "All intake",
                "All exhaust",
            ],
            0,
        ),
        q(
            "What happens if a computer overheats?",
            [
                "It may shut down or throttle performance",
                "It will run faster",
                "Battery life will improve",
                "Storage capacity increases",
            ],
            0,
        ),
    ],
    // Storage and memory
    [
        q(
            "Which storage device typically has the fastest read/write speeds?",
            ["NVMe SSD", "SATA SSD", "HDD", "External USB Drive"],
            0,
        ),
        q(
            "What does SSD stand for?",
            [
                "Solid State Drive",
                "Super Speed Drive",
                "Static Storage Device",
                "System Storage Data",
            ],
            0,
        ),
        q(
            "What is the main advantage of an HDD over an SSD?",
            [
                "Lower cost per gigabyte",
                "Faster speed",
                "More durability",
                "Less power consumption",
            ],
            0,
        ),
        q(
            "What does RAM stand for?",
            [
                "Random Access Memory",
                "Rapid Access Mode",
                "Read Access Module",
                "Remote Access Memory",
            ],
            0,
        ),
        q(
            "Which type of memory is volatile and loses its data when power is turned off?",
            ["RAM", "SSD", "HDD", "USB Flash Drive"],
            0,
        ),
    ],
    // Power supplies and motherboards
    [
        q(
            "What does PSU stand for in computing?",
            [
                "Power Supply Unit",
                "Processing System Utility",
                "Primary Storage Unit",
                "Peripheral Support Utility",
            ],
            0,
        ),
        q(
            "What is the main function of a motherboard?",
            [
                "To connect and allow communication between components",
                "To store data",
                "To process calculations",
                "To cool the system",
            ],
            0,
        ),
        q(
            "What does the 80 Plus certification on a PSU indicate?",
            [
                "Energy efficiency",
                "Maximum wattage",
                "Manufacturing quality",
                "Cable length",
            ],
            0,
        ),
        q(
            "Which of these is NOT a common motherboard form factor?",
            ["XLT", "ATX", "Micro-ATX", "Mini-ITX"],
            0,
        ),
        q(
            "What component on the motherboard stores the BIOS?",
            ["ROM chip", "RAM", "CPU", "GPU"],
            0,
        ),
    ],
    // Final boss: general computing
    [
        q(
            "Which technology uses artificial neural networks to mimic human learning?",
            ["Deep Learning", "Overclocking", "Defragmentation", "Virtualization"],
            0,
        ),
        q(
            "What is responsible for rendering graphics in a computer?",
            ["GPU", "CPU", "RAM", "PSU"],
            0,
        ),
        q(
            "What is the brain of the computer?",
            ["CPU", "RAM", "Motherboard", "Hard Drive"],
            0,
        ),
        q(
            "What does IoT stand for?",
            [
                "Internet of Things",
                "Input/Output Technology",
                "Internal Operating Transistor",
                "Integrated Output Terminal",
            ],
            0,
        ),
        q(
            "What is the purpose of an operating system?",
            [
                "To manage hardware resources and provide services for applications",
                "To connect to the internet",
                "To create documents and spreadsheets",
                "To protect against viruses",
            ],
            0,
        ),
    ],
];

/// Built-in bank by index (0..MAP_COUNT), in fixed order
pub fn question_bank(bank: usize) -> Option<Vec<Question>> {
    BANKS
        .get(bank)
        .map(|defs| defs.iter().map(QuestionDef::to_question).collect())
}

/// Bank asked by an archetype. Every archetype's bank id is below `MAP_COUNT`.
pub fn archetype_bank(archetype: BossArchetype) -> Vec<Question> {
    BANKS[archetype.info().question_bank]
        .iter()
        .map(QuestionDef::to_question)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_bank_is_valid() {
        for bank in 0..MAP_COUNT {
            let questions = question_bank(bank).unwrap();
            assert_eq!(validate_bank(&questions), Ok(()));
        }
        assert!(question_bank(MAP_COUNT).is_none());
    }

    #[test]
    fn test_every_archetype_has_full_bank() {
        for (i, archetype) in BossArchetype::ALL.into_iter().enumerate() {
            let bank = archetype_bank(archetype);
            assert_eq!(bank.len(), QUESTIONS_PER_BOSS);
            assert_eq!(Some(bank), question_bank(i));
        }
    }

    #[test]
    fn test_bank_order_is_fixed() {
        let a = question_bank(2).unwrap();
        let b = question_bank(2).unwrap();
        assert_eq!(a, b);
        assert_eq!(a[1].prompt(), "What does SSD stand for?");
    }

    #[test]
    fn test_question_rejects_bad_index() {
        let choices = ["a", "b", "c", "d"].map(String::from);
        assert_eq!(
            Question::new("?", choices.clone(), 4),
            Err(QuizError::InvalidCorrectIndex { index: 4, choices: 4 })
        );
        let ok = Question::new("?", choices, 2).unwrap();
        assert!(ok.is_correct(2));
        assert_eq!(ok.correct_answer(), "c");
    }

    #[test]
    fn test_wrong_bank_size() {
        let mut bank = question_bank(0).unwrap();
        bank.pop();
        assert_eq!(
            validate_bank(&bank),
            Err(QuizError::WrongBankSize { actual: 4, expected: 5 })
        );
    }

    #[test]
    fn test_deserialized_question_is_validated() {
        let json = r#"{"prompt":"?","choices":["a","b","c","d"],"correct":7}"#;
        let q: Question = serde_json::from_str(json).unwrap();
        assert!(q.validate().is_err());
    }
}
