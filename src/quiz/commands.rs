use prettytable::{Table, row};
use std::io::{BufRead, Write};
use std::path::Path;

use super::answers::AnswerSet;
use super::bank::{self, Question};
use super::category::Category;
use super::parse::{parse_answer, parse_answers};
use super::report;
use super::scorer::{self, ScoreResult};
use crate::config::{Config, DisplayConfig};
use crate::error::{QuizError, Result};
use crate::export::write_export;

/// Export request from the command line: `None` = no export,
/// `Some(None)` = export to the configured location, `Some(Some(p))` = export to `p`
pub type ExportRequest<'a> = Option<Option<&'a Path>>;

/// Print every question with its lettered options
pub fn print_questions<W: Write>(out: &mut W) -> Result<()> {
    for q in bank::questions() {
        write_question(out, q)?;
        writeln!(out)?;
    }
    Ok(())
}

/// Print the six categories as a table
pub fn print_categories<W: Write>(out: &mut W) -> Result<()> {
    let mut table = Table::new();
    table.add_row(row!["Symbol", "Part", "Icon", "Blurb"]);
    for c in Category::ALL {
        table.add_row(row![c.symbol(), c.name(), c.icon(), c.blurb()]);
    }
    table.print(out)?;
    Ok(())
}

/// Print summary line, details and the bar-chart breakdown
pub fn print_result<W: Write>(out: &mut W, result: &ScoreResult, display: &DisplayConfig) -> Result<()> {
    writeln!(out, "{}", report::summary_line(result, display.show_icons))?;
    for line in report::detail_lines(result, display.show_icons) {
        if result.is_blend() {
            writeln!(out, "- {}", line)?;
        } else {
            writeln!(out, "{}", line)?;
        }
    }
    writeln!(out)?;
    writeln!(out, "Your answer breakdown")?;
    for bar in report::render_bars(&result.tally, display.bar_width, &display.bar_glyph) {
        writeln!(out, "  {}", bar)?;
    }
    Ok(())
}

/// Score answers given as tokens, one per question in order (`-` skips a question).
///
/// Returns `Ok(None)` after printing the warning when nothing was answered.
pub fn run_score<W: Write>(
    out: &mut W,
    tokens: &[String],
    json: bool,
    export: ExportRequest<'_>,
    config: &Config,
) -> Result<Option<ScoreResult>> {
    let parsed = parse_answers(tokens)?;
    let mut answers = AnswerSet::for_bank();
    if parsed.len() > answers.len() {
        return Err(QuizError::InvalidAnswer {
            message: format!(
                "got {} answers but the quiz has {} questions",
                parsed.len(),
                answers.len()
            ),
        });
    }
    for (i, pick) in parsed.into_iter().enumerate() {
        if let Some(category) = pick {
            answers.select(i, category)?;
        }
    }
    tracing::debug!(answered = answers.answered_count(), "scoring command-line answers");

    finish(out, &answers, json, export, config)
}

/// Interactive quiz over a line-oriented reader/writer pair.
///
/// EOF ends the quiz early; whatever was answered so far is scored.
pub fn run_play<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    export: ExportRequest<'_>,
    config: &Config,
) -> Result<Option<ScoreResult>> {
    writeln!(out, "🚲 {}", config.quiz.title)?;
    writeln!(
        out,
        "Answer with A-F, 1-6, or a part name. Press Enter or type '-' to skip a question."
    )?;
    writeln!(out)?;

    let mut answers = AnswerSet::for_bank();
    'questions: for (i, q) in bank::questions().iter().enumerate() {
        write_question(out, q)?;
        loop {
            write!(out, "> ")?;
            out.flush()?;
            let mut line = String::new();
            if input.read_line(&mut line)? == 0 {
                tracing::debug!(question = q.number, "input closed, scoring early");
                writeln!(out)?;
                break 'questions;
            }
            match parse_answer(&line) {
                Ok(Some(category)) => {
                    answers.select(i, category)?;
                    break;
                }
                Ok(None) => break,
                Err(e) => writeln!(out, "{}", e)?,
            }
        }
        writeln!(out)?;
    }

    finish(out, &answers, false, export, config)
}

fn finish<W: Write>(
    out: &mut W,
    answers: &AnswerSet,
    json: bool,
    export: ExportRequest<'_>,
    config: &Config,
) -> Result<Option<ScoreResult>> {
    let result = match scorer::score(answers.selections()) {
        Ok(result) => result,
        Err(e) if e.is_no_answers() => {
            tracing::warn!("result requested with no answers");
            writeln!(out, "warning: {}", e)?;
            return Ok(None);
        }
        Err(e) => return Err(e),
    };
    tracing::info!(
        answered = result.answered(),
        blend = result.is_blend(),
        winners = %report::winner_names(&result),
        "quiz scored"
    );

    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(&result)?)?;
    } else {
        print_result(out, &result, &config.display)?;
    }

    if let Some(target) = export {
        let path = write_export(&result, target, &config.quiz)?;
        if !json {
            writeln!(out)?;
            writeln!(out, "Saved result to {}", path.display())?;
        }
    }

    Ok(Some(result))
}

fn write_question<W: Write>(out: &mut W, q: &Question) -> Result<()> {
    writeln!(out, "{}) {}", q.number, q.prompt)?;
    for option in &q.options {
        writeln!(out, "   {}", Question::option_label(option))?;
    }
    Ok(())
}
