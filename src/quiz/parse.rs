//! Turn free-form answer tokens into category picks

use strsim::jaro_winkler;

use super::category::Category;
use crate::error::{QuizError, Result};

const FUZZY_THRESHOLD: f64 = 0.85;

/// Parse one answer token.
///
/// Returns `Ok(None)` for a deliberate skip (`""`, `"-"`, `"skip"`).
/// Accepts a letter `a`-`f`, an option number `1`-`6`, or a category name
/// (case-insensitive, singular or plural, with close misspellings resolved
/// by Jaro-Winkler similarity).
pub fn parse_answer(token: &str) -> Result<Option<Category>> {
    let trimmed = token.trim();
    if trimmed.is_empty() || trimmed == "-" || trimmed.eq_ignore_ascii_case("skip") {
        return Ok(None);
    }

    let mut chars = trimmed.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        if let Some(category) = Category::from_symbol(c) {
            return Ok(Some(category));
        }
        if let Some(digit) = c.to_digit(10)
            && (1..=6).contains(&digit)
        {
            return Ok(Category::from_index(digit as usize - 1));
        }
    }

    let input = trimmed.to_lowercase();

    // Strategy 1: exact name, or name with/without a trailing "s"
    for category in Category::ALL {
        let name = category.name().to_lowercase();
        if name == input
            || name.strip_suffix('s') == Some(input.as_str())
            || input.strip_suffix('s') == Some(name.as_str())
        {
            return Ok(Some(category));
        }
    }

    // Strategy 2: fuzzy match
    let scored: Vec<(Category, f64)> = Category::ALL
        .iter()
        .map(|c| (*c, jaro_winkler(&c.name().to_lowercase(), &input)))
        .collect();
    let best = scored.iter().map(|(_, s)| *s).fold(0.0_f64, f64::max);

    if best > FUZZY_THRESHOLD {
        let top: Vec<Category> = scored
            .iter()
            .filter(|(_, s)| (s - best).abs() < 0.000001)
            .map(|(c, _)| *c)
            .collect();
        if let [only] = top.as_slice() {
            return Ok(Some(*only));
        }
    }

    let mut message = format!(
        "'{}' is not a valid answer. Use A-F, 1-6, a part name ({}), or '-' to skip",
        trimmed,
        Category::ALL
            .iter()
            .map(|c| c.name())
            .collect::<Vec<_>>()
            .join(", ")
    );
    if let Some((closest, _)) = scored
        .iter()
        .filter(|(_, s)| *s > 0.7)
        .max_by(|a, b| a.1.total_cmp(&b.1))
    {
        message.push_str(&format!(". Did you mean '{}'?", closest.name()));
    }

    Err(QuizError::InvalidAnswer { message })
}

/// Parse a list of tokens, keeping skips as `None` so positions line up with questions
pub fn parse_answers<S: AsRef<str>>(tokens: &[S]) -> Result<Vec<Option<Category>>> {
    tokens.iter().map(|t| parse_answer(t.as_ref())).collect()
}
