//! Various configuration options to control tag reading

mod parse_options;

pub use parse_options::{ParseOptions, ParsingMode};
