pub mod answers;
pub mod bank;
pub mod category;
pub mod commands;
pub mod parse;
pub mod report;
pub mod scorer;
pub mod session;

pub use answers::AnswerSet;
pub use category::Category;
pub use scorer::{ScoreResult, Tally, score};
pub use session::QuizSession;
