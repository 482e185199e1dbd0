pub mod prompt;
pub mod style;

pub use prompt::{parse_confirmation, Confirmer, TerminalConfirmer};
pub use style::{paint, Style};
