//! Fixed question bank for the bike-part quiz

use super::category::{CATEGORY_COUNT, Category};

/// One selectable answer within a question
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizOption {
    pub text: &'static str,
    pub category: Category,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Question {
    /// 1-based position shown to the respondent
    pub number: usize,
    pub prompt: &'static str,
    pub options: [QuizOption; CATEGORY_COUNT],
}

impl Question {
    /// Option at a 0-based position
    pub fn option(&self, position: usize) -> Option<&QuizOption> {
        self.options.get(position)
    }

    /// Label shown next to an option, e.g. `"A — Take charge and plot the course."`
    pub fn option_label(option: &QuizOption) -> String {
        format!("{} — {}", option.category.symbol(), option.text)
    }
}

const fn opts(texts: [&'static str; CATEGORY_COUNT]) -> [QuizOption; CATEGORY_COUNT] {
    [
        QuizOption { text: texts[0], category: Category::A },
        QuizOption { text: texts[1], category: Category::B },
        QuizOption { text: texts[2], category: Category::C },
        QuizOption { text: texts[3], category: Category::D },
        QuizOption { text: texts[4], category: Category::E },
        QuizOption { text: texts[5], category: Category::F },
    ]
}

pub const QUIZ_TITLE: &str = "Which Part of the Bicycle Are You?";

pub const QUESTIONS: [Question; 8] = [
    Question {
        number: 1,
        prompt: "In a group project, you’re the one who…",
        options: opts([
            "Steers the group in the right direction.",
            "Holds everything together when things get messy.",
            "Keeps everyone motivated and moving forward.",
            "Smoothly connects people and ideas.",
            "Tracks the details no one else notices.",
            "Adds a spark of fun and makes it enjoyable.",
        ]),
    },
    Question {
        number: 2,
        prompt: "When faced with a big challenge, your instinct is to…",
        options: opts([
            "Take charge and plot the course.",
            "Stay grounded and reliable no matter what.",
            "Push harder until it’s done.",
            "Shift gears and adapt to what’s needed.",
            "Double-check everything to prevent mistakes.",
            "Lighten the mood and keep people engaged.",
        ]),
    },
    Question {
        number: 3,
        prompt: "Your friends would describe you as…",
        options: opts([
            "A leader.",
            "Dependable.",
            "Determined.",
            "Flexible.",
            "Observant.",
            "Fun.",
        ]),
    },
    Question {
        number: 4,
        prompt: "On a trip, your role in the group is…",
        options: opts([
            "The navigator with the plan.",
            "The one carrying the load.",
            "The timekeeper who keeps everyone moving.",
            "The connector who introduces people and plans meetups.",
            "The logistics brain who checks details and reservations.",
            "The storyteller who makes it an adventure.",
        ]),
    },
    Question {
        number: 5,
        prompt: "On a tough day, you…",
        options: opts([
            "Keep your eyes on the big picture.",
            "Stay steady and supportive for others.",
            "Push yourself (and the team) to keep going.",
            "Adjust quickly until you find a smoother path.",
            "Quietly fix things before they cause issues.",
            "Remind everyone to smile and breathe.",
        ]),
    },
    Question {
        number: 6,
        prompt: "If you were a tool, you’d be…",
        options: opts([
            "A compass.",
            "A sturdy toolbox.",
            "A power drill.",
            "A multi-tool.",
            "A level/ruler.",
            "A whistle.",
        ]),
    },
    Question {
        number: 7,
        prompt: "Your working style is closest to…",
        options: opts([
            "Set direction first, then execute.",
            "Build a solid foundation and protect it.",
            "Drive momentum and keep pace high.",
            "Adapt on the fly and keep things linked.",
            "Checklists, QA, and risk-proofing.",
            "Energize the room and keep it human.",
        ]),
    },
    Question {
        number: 8,
        prompt: "When teammates disagree, you…",
        options: opts([
            "Facilitate and choose a course.",
            "Stabilize the team so emotions don’t break things.",
            "Focus on action so you don’t stall.",
            "Translate perspectives so people understand each other.",
            "Surface the facts and constraints.",
            "Diffuse tension with respectful levity.",
        ]),
    },
];

/// The full ordered question bank
pub fn questions() -> &'static [Question] {
    &QUESTIONS
}

pub fn question_count() -> usize {
    QUESTIONS.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_are_sequential() {
        for (i, q) in questions().iter().enumerate() {
            assert_eq!(q.number, i + 1);
        }
        assert_eq!(question_count(), 8);
    }

    #[test]
    fn every_question_offers_each_category_once_in_order() {
        for q in questions() {
            let cats: Vec<Category> = q.options.iter().map(|o| o.category).collect();
            assert_eq!(cats, Category::ALL.to_vec(), "question {}", q.number);
        }
    }

    #[test]
    fn option_lookup_by_position() {
        let q = &questions()[2];
        assert_eq!(q.option(0).unwrap().text, "A leader.");
        assert_eq!(q.option(5).unwrap().text, "Fun.");
        assert!(q.option(6).is_none());
    }

    #[test]
    fn option_label_prefixes_symbol() {
        let q = &questions()[5];
        assert_eq!(
            Question::option_label(q.option(3).unwrap()),
            "D — A multi-tool."
        );
    }
}
