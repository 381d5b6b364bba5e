pub mod bank;
pub mod io;
pub mod markup;

// Re-export key types for easier usage
pub use bank::{BankError, Question, QuestionBank, RenderedQuestion};
pub use io::*;
pub use markup::{Highlight, HighlightColor, compile};
