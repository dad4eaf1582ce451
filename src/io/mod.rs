//! Text input parsing and plan output.

mod parser;
mod writer;

pub use parser::{parse_file, parse_str};
pub use writer::{render_plan, write_plan, write_plan_file};
