use std::io;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use bike_quiz::config::Config;
use bike_quiz::export::write_export;
use bike_quiz::quiz::bank::{self, Question};
use bike_quiz::quiz::{Category, QuizSession, report};
use bike_quiz::{LogSink, init_tracing, load_env};
use clap::Parser;
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::{execute, terminal};
use ratatui::prelude::*;
use ratatui::widgets::*;

#[derive(Parser)]
#[command(name = "quiz_tui")]
#[command(about = "Full-screen bike-part personality quiz")]
struct Cli {
    /// Config file (defaults to BIKE_QUIZ_CONFIG or bike_quiz.toml)
    #[arg(long)]
    config: Option<PathBuf>,
}

struct App {
    session: QuizSession,
    config: Config,
    showing_result: bool,
    status: String,
}

impl App {
    fn new(config: Config) -> Self {
        Self {
            session: QuizSession::new(),
            config,
            showing_result: false,
            status: String::new(),
        }
    }

    /// Returns true when the app should exit
    fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) -> bool {
        if code == KeyCode::Char('c') && modifiers.contains(KeyModifiers::CONTROL) {
            return true;
        }

        if self.showing_result {
            match code {
                KeyCode::Char('q') => return true,
                KeyCode::Char('x') => self.export(),
                KeyCode::Char('n') => self.restart(),
                _ => self.showing_result = false,
            }
            return false;
        }

        match code {
            KeyCode::Char('q') | KeyCode::Esc => return true,
            KeyCode::Up | KeyCode::Char('k') => self.session.previous_option(),
            KeyCode::Down | KeyCode::Char('j') => self.session.next_option(),
            KeyCode::Left | KeyCode::Char('h') | KeyCode::BackTab => {
                self.session.previous_question()
            }
            KeyCode::Right | KeyCode::Char('l') | KeyCode::Tab => self.session.next_question(),
            KeyCode::Home => self.session.jump_to(0),
            KeyCode::End => self.session.jump_to(bank::question_count() - 1),
            KeyCode::Enter | KeyCode::Char(' ') => {
                if let Ok(category) = self.session.choose_highlighted() {
                    self.status = format!("Picked {}", category);
                    self.session.next_question();
                }
            }
            KeyCode::Backspace | KeyCode::Delete => {
                if let Ok(Some(previous)) = self.session.clear_current() {
                    self.status = format!("Cleared {}", previous);
                }
            }
            KeyCode::Char('r') => self.show_result(),
            KeyCode::Char('x') => self.export(),
            KeyCode::Char('n') => self.restart(),
            KeyCode::Char(c) => {
                if let Some(category) = Category::from_symbol(c)
                    && self.session.choose(category).is_ok()
                {
                    self.status = format!("Picked {}", category);
                    self.session.next_question();
                }
            }
            _ => {}
        }
        false
    }

    fn show_result(&mut self) {
        match self.session.result() {
            Ok(result) => {
                tracing::info!(winners = %report::winner_names(&result), "result shown");
                self.status.clear();
                self.showing_result = true;
            }
            Err(e) => self.status = format!("warning: {}", e),
        }
    }

    fn export(&mut self) {
        self.status = match self.session.result() {
            Ok(result) => match write_export(&result, None, &self.config.quiz) {
                Ok(path) => format!("Saved result to {}", path.display()),
                Err(e) => {
                    tracing::error!("export failed: {}", e);
                    format!("Export failed: {}", e)
                }
            },
            Err(e) => format!("warning: {}", e),
        };
    }

    fn restart(&mut self) {
        self.session.reset();
        self.showing_result = false;
        self.status = "Started over".to_string();
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    load_env();
    let config = Config::load(cli.config.as_deref())?;
    init_tracing(&config.runtime, LogSink::FileOnly);

    terminal::enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, terminal::EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut tui = Terminal::new(backend)?;

    let mut app = App::new(config);
    let outcome = run(&mut tui, &mut app);

    terminal::disable_raw_mode()?;
    execute!(tui.backend_mut(), terminal::LeaveAlternateScreen)?;
    tui.show_cursor()?;
    outcome
}

fn run<B: Backend>(tui: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        tui.draw(|f| ui(f, app))?;

        if event::poll(Duration::from_millis(250))?
            && let Event::Key(k) = event::read()?
            && k.kind == KeyEventKind::Press
            && app.handle_key(k.code, k.modifiers)
        {
            break;
        }
    }
    Ok(())
}

fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(12),
            Constraint::Length(4),
        ])
        .split(f.size());

    let header = Paragraph::new(Line::from(vec![
        Span::styled(
            format!("🚲 {}", app.config.quiz.title),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  |  "),
        Span::raw(format!(
            "Answered {}/{}",
            app.session.answers().answered_count(),
            bank::question_count()
        )),
    ]))
    .block(Block::default().borders(Borders::ALL).title("Bike Part Personality Quiz"));
    f.render_widget(header, chunks[0]);

    if app.showing_result {
        render_result(f, chunks[1], app);
    } else {
        render_questions(f, chunks[1], app);
    }

    let keys = if app.showing_result {
        "Keys: x export • n new quiz • q quit • any other key back to questions"
    } else {
        "Keys: ↑/↓ option • ←/→ Home/End question • a-f or Enter pick • Backspace clear • r result • x export • q quit"
    };
    let help = Paragraph::new(vec![
        Line::raw(keys),
        Line::styled(app.status.clone(), Style::default().fg(Color::Yellow)),
    ])
    .block(Block::default().borders(Borders::ALL).title("Help"));
    f.render_widget(help, chunks[2]);
}

fn render_questions(f: &mut Frame, area: Rect, app: &App) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(14), Constraint::Min(30)])
        .split(area);

    let items: Vec<ListItem> = bank::questions()
        .iter()
        .enumerate()
        .map(|(i, q)| {
            let mark = app
                .session
                .answers()
                .get(i)
                .map(|c| c.symbol())
                .unwrap_or('·');
            ListItem::new(format!("{:>2}. [{}]", q.number, mark))
        })
        .collect();
    let mut question_state =
        ListState::default().with_selected(Some(app.session.current_index()));
    let questions = List::new(items)
        .block(Block::default().borders(Borders::ALL).title("Questions"))
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED));
    f.render_stateful_widget(questions, cols[0], &mut question_state);

    let q = app.session.current_question();
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(4), Constraint::Min(8)])
        .split(cols[1]);

    let prompt = Paragraph::new(q.prompt)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!("Question {}", q.number)),
        )
        .wrap(Wrap { trim: true });
    f.render_widget(prompt, rows[0]);

    let chosen = app.session.answers().get(app.session.current_index());
    let option_items: Vec<ListItem> = q
        .options
        .iter()
        .map(|o| {
            let picked = chosen == Some(o.category);
            let marker = if picked { "●" } else { "○" };
            let style = if picked {
                Style::default().fg(Color::Green)
            } else {
                Style::default()
            };
            ListItem::new(format!("{} {}", marker, Question::option_label(o))).style(style)
        })
        .collect();
    let mut option_state = ListState::default().with_selected(Some(app.session.highlighted()));
    let options = List::new(option_items)
        .block(Block::default().borders(Borders::ALL).title("Options"))
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");
    f.render_stateful_widget(options, rows[1], &mut option_state);
}

fn render_result(f: &mut Frame, area: Rect, app: &App) {
    let result = match app.session.result() {
        Ok(result) => result,
        Err(e) => {
            let p = Paragraph::new(format!("warning: {}", e))
                .block(Block::default().borders(Borders::ALL).title("Result"));
            f.render_widget(p, area);
            return;
        }
    };

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(8), Constraint::Min(10)])
        .split(area);

    let mut lines = vec![Line::styled(
        report::summary_line(&result, app.config.display.show_icons),
        Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD),
    )];
    lines.extend(
        report::detail_lines(&result, app.config.display.show_icons)
            .into_iter()
            .map(Line::raw),
    );
    let title = if result.is_blend() { "Blend" } else { "Your match" };
    let summary = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(title))
        .wrap(Wrap { trim: true });
    f.render_widget(summary, rows[0]);

    let data: Vec<(&str, u64)> = report::breakdown(&result.tally)
        .into_iter()
        .map(|(name, count)| (name, count as u64))
        .collect();
    let chart = BarChart::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Your answer breakdown"),
        )
        .data(data.as_slice())
        .bar_width(10)
        .bar_gap(2)
        .max(result.max_count as u64)
        .bar_style(Style::default().fg(Color::Cyan))
        .value_style(Style::default().fg(Color::Black).bg(Color::Cyan));
    f.render_widget(chart, rows[1]);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(app: &mut App, code: KeyCode) -> bool {
        app.handle_key(code, KeyModifiers::NONE)
    }

    #[test]
    fn letter_keys_answer_and_advance() {
        let mut app = App::new(Config::default());
        assert!(!press(&mut app, KeyCode::Char('c')));
        assert_eq!(app.session.answers().get(0), Some(Category::C));
        assert_eq!(app.session.current_index(), 1);
        assert_eq!(app.status, "Picked Pedals");
    }

    #[test]
    fn ctrl_c_quits_even_though_c_is_an_answer() {
        let mut app = App::new(Config::default());
        assert!(app.handle_key(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert_eq!(app.session.answers().answered_count(), 0);
    }

    #[test]
    fn result_without_answers_stays_on_questions() {
        let mut app = App::new(Config::default());
        press(&mut app, KeyCode::Char('r'));
        assert!(!app.showing_result);
        assert!(app.status.starts_with("warning: Please answer"));
    }

    #[test]
    fn result_view_and_back() {
        let mut app = App::new(Config::default());
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.session.answers().get(0), Some(Category::B));
        press(&mut app, KeyCode::Char('r'));
        assert!(app.showing_result);
        press(&mut app, KeyCode::Char('a'));
        assert!(!app.showing_result);
        press(&mut app, KeyCode::Char('n'));
        assert_eq!(app.session.answers().answered_count(), 0);
    }

    #[test]
    fn home_and_end_jump_between_first_and_last_question() {
        let mut app = App::new(Config::default());
        press(&mut app, KeyCode::End);
        assert_eq!(app.session.current_index(), bank::question_count() - 1);
        press(&mut app, KeyCode::Home);
        assert_eq!(app.session.current_index(), 0);
    }

    #[test]
    fn x_key_writes_export_to_configured_dir() {
        let dir = std::env::temp_dir().join("bike_quiz_tui_export");
        let _ = std::fs::remove_dir_all(&dir);
        let mut config = Config::default();
        config.quiz.export_dir = Some(dir.to_string_lossy().into_owned());

        let mut app = App::new(config);
        press(&mut app, KeyCode::Char('e'));
        press(&mut app, KeyCode::Char('x'));

        let written = dir.join("bike_quiz_result.txt");
        assert_eq!(app.status, format!("Saved result to {}", written.display()));
        assert!(std::fs::read_to_string(&written)
            .unwrap()
            .contains("Top match: Brakes\n"));
    }

    #[test]
    fn x_key_without_answers_only_warns() {
        let dir = std::env::temp_dir().join("bike_quiz_tui_no_export");
        let _ = std::fs::remove_dir_all(&dir);
        let mut config = Config::default();
        config.quiz.export_dir = Some(dir.to_string_lossy().into_owned());

        let mut app = App::new(config);
        press(&mut app, KeyCode::Char('x'));
        assert!(app.status.starts_with("warning: "));
        assert!(!dir.exists());
    }
}
