//! The six bike-part categories a respondent can match

use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of categories in the fixed enumeration
pub const CATEGORY_COUNT: usize = 6;

/// Bike-part category, declared in the fixed enumeration order A..F.
///
/// Every ordering the quiz reports (tally rows, winners, export lines) follows
/// this declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    A,
    B,
    C,
    D,
    E,
    F,
}

/// Display metadata attached to a category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryInfo {
    pub name: &'static str,
    pub icon: &'static str,
    pub blurb: &'static str,
}

const INFO: [CategoryInfo; CATEGORY_COUNT] = [
    CategoryInfo {
        name: "Handlebars",
        icon: "🛞",
        blurb: "Guide & orient. You steer toward clear goals and help others balance along the way.",
    },
    CategoryInfo {
        name: "Frame",
        icon: "🛠️",
        blurb: "Backbone & stability. You provide structure, safety, and consistency under pressure.",
    },
    CategoryInfo {
        name: "Pedals",
        icon: "⚡",
        blurb: "Drive & momentum. You supply the effort that turns plans into forward motion.",
    },
    CategoryInfo {
        name: "Chain",
        icon: "⛓️",
        blurb: "Connection & adaptability. You link people and ideas, shifting smoothly between roles.",
    },
    CategoryInfo {
        name: "Brakes",
        icon: "🛑",
        blurb: "Judgment & protection. You spot risks early and know when to slow down or stop.",
    },
    CategoryInfo {
        name: "Bell",
        icon: "🔔",
        blurb: "Signal & spark. You keep things human—bringing attention, clarity, and joy when needed.",
    },
];

impl Category {
    /// All categories in fixed enumeration order
    pub const ALL: [Category; CATEGORY_COUNT] = [
        Category::A,
        Category::B,
        Category::C,
        Category::D,
        Category::E,
        Category::F,
    ];

    /// Position in the fixed enumeration (0..6)
    pub fn index(self) -> usize {
        match self {
            Category::A => 0,
            Category::B => 1,
            Category::C => 2,
            Category::D => 3,
            Category::E => 4,
            Category::F => 5,
        }
    }

    pub fn from_index(index: usize) -> Option<Category> {
        Self::ALL.get(index).copied()
    }

    /// Single-letter symbol used on the input boundary
    pub fn symbol(self) -> char {
        match self {
            Category::A => 'A',
            Category::B => 'B',
            Category::C => 'C',
            Category::D => 'D',
            Category::E => 'E',
            Category::F => 'F',
        }
    }

    pub fn from_symbol(symbol: char) -> Option<Category> {
        match symbol.to_ascii_uppercase() {
            'A' => Some(Category::A),
            'B' => Some(Category::B),
            'C' => Some(Category::C),
            'D' => Some(Category::D),
            'E' => Some(Category::E),
            'F' => Some(Category::F),
            _ => None,
        }
    }

    pub fn info(self) -> &'static CategoryInfo {
        &INFO[self.index()]
    }

    pub fn name(self) -> &'static str {
        self.info().name
    }

    pub fn icon(self) -> &'static str {
        self.info().icon
    }

    pub fn blurb(self) -> &'static str {
        self.info().blurb
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
