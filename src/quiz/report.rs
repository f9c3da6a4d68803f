//! Display and export text derived from a `ScoreResult`

use super::category::Category;
use super::scorer::{ScoreResult, Tally};

pub const EXPORT_HEADER: &str = "Bike Part Personality Quiz Result";
pub const EXPORT_RULE: &str = "-------------------------------";
pub const DEFAULT_EXPORT_FILE_NAME: &str = "bike_quiz_result.txt";

/// Comma-separated winner names in enumeration order
pub fn winner_names(result: &ScoreResult) -> String {
    result
        .winners
        .iter()
        .map(|c| c.name())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Headline naming the winner(s), optionally with the winner's icon
pub fn summary_line(result: &ScoreResult, with_icon: bool) -> String {
    match result.primary() {
        Some(c) if with_icon => format!("You are the {} {}", c.name(), c.icon()),
        Some(c) => format!("You are the {}", c.name()),
        None => format!("You are a blend: {}", winner_names(result)),
    }
}

/// Lines shown under the summary line.
///
/// A clean match gets its blurb; a blend lists every winner with its blurb.
pub fn detail_lines(result: &ScoreResult, with_icon: bool) -> Vec<String> {
    match result.primary() {
        Some(c) => vec![c.blurb().to_string()],
        None => result
            .winners
            .iter()
            .map(|c| {
                if with_icon {
                    format!("{} {} — {}", c.name(), c.icon(), c.blurb())
                } else {
                    format!("{} — {}", c.name(), c.blurb())
                }
            })
            .collect(),
    }
}

/// `(name, count)` rows for all six categories in enumeration order
pub fn breakdown(tally: &Tally) -> Vec<(&'static str, usize)> {
    tally.iter().map(|(c, n)| (c.name(), n)).collect()
}

/// Plain-text export block
pub fn export_text(result: &ScoreResult) -> String {
    let mut out = String::new();
    out.push_str(EXPORT_HEADER);
    out.push('\n');
    out.push_str(EXPORT_RULE);
    out.push('\n');
    out.push_str(&format!("Top match: {}\n", winner_names(result)));
    for (name, count) in breakdown(&result.tally) {
        out.push_str(&format!("{}: {}\n", name, count));
    }
    out
}

/// Horizontal text bars, one row per category.
///
/// The longest bar is `width` glyphs; zero counts render an empty bar.
pub fn render_bars(tally: &Tally, width: usize, glyph: &str) -> Vec<String> {
    let max = tally.max();
    let label_width = Category::ALL
        .iter()
        .map(|c| c.name().chars().count())
        .max()
        .unwrap_or(0);

    tally
        .iter()
        .map(|(c, count)| {
            let len = if max == 0 {
                0
            } else {
                // round to nearest, but never hide a non-zero count
                let scaled = (count * width + max / 2) / max;
                if count > 0 { scaled.max(1) } else { 0 }
            };
            format!(
                "{:<label_width$} | {} {}",
                c.name(),
                glyph.repeat(len),
                count,
                label_width = label_width
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::scorer::score;
    use Category::*;

    #[test]
    fn single_winner_summary() {
        let result = score([E, E, A]).unwrap();
        assert_eq!(summary_line(&result, true), "You are the Brakes 🛑");
        assert_eq!(summary_line(&result, false), "You are the Brakes");
        assert_eq!(detail_lines(&result, true), vec![E.blurb().to_string()]);
    }

    #[test]
    fn blend_summary_lists_all_winners() {
        let result = score([F, B]).unwrap();
        assert_eq!(summary_line(&result, true), "You are a blend: Frame, Bell");
        let details = detail_lines(&result, true);
        assert_eq!(details.len(), 2);
        assert!(details[0].starts_with("Frame 🛠️ — Backbone"));
        assert!(details[1].starts_with("Bell 🔔 — Signal"));
    }

    #[test]
    fn blend_details_drop_icons_when_asked() {
        let result = score([A, B]).unwrap();
        let details = detail_lines(&result, false);
        assert!(details[0].starts_with("Handlebars — "));
        assert!(details[1].starts_with("Frame — "));
        assert!(details.iter().all(|d| !d.contains(A.icon()) && !d.contains(B.icon())));
    }

    #[test]
    fn breakdown_is_zero_filled_and_ordered() {
        let result = score([D]).unwrap();
        assert_eq!(
            breakdown(&result.tally),
            vec![
                ("Handlebars", 0),
                ("Frame", 0),
                ("Pedals", 0),
                ("Chain", 1),
                ("Brakes", 0),
                ("Bell", 0),
            ]
        );
    }

    #[test]
    fn export_block_matches_golden_output() {
        let result = score([A, A, B]).unwrap();
        let expected = "\
Bike Part Personality Quiz Result
-------------------------------
Top match: Handlebars
Handlebars: 2
Frame: 1
Pedals: 0
Chain: 0
Brakes: 0
Bell: 0
";
        assert_eq!(export_text(&result), expected);
    }

    #[test]
    fn export_single_winner_has_one_name_and_six_rows() {
        let result = score([F, F, F]).unwrap();
        let text = export_text(&result);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 9);
        assert_eq!(lines[2], "Top match: Bell");
        let names: Vec<&str> = lines[3..]
            .iter()
            .map(|l| l.split(':').next().unwrap())
            .collect();
        assert_eq!(
            names,
            vec!["Handlebars", "Frame", "Pedals", "Chain", "Brakes", "Bell"]
        );
    }

    #[test]
    fn export_blend_names_in_enumeration_order() {
        let result = score([D, C, D, C]).unwrap();
        assert!(export_text(&result).contains("Top match: Pedals, Chain\n"));
    }

    #[test]
    fn bars_scale_to_width() {
        let result = score([A, A, A, A, B]).unwrap();
        let bars = render_bars(&result.tally, 8, "#");
        assert_eq!(bars.len(), 6);
        assert_eq!(bars[0], "Handlebars | ######## 4");
        assert_eq!(bars[1], "Frame      | ## 1");
        assert_eq!(bars[2], "Pedals     |  0");
    }
}
