//! CLI domain: parse, route, output, and presentation only.
//! No domain orchestration; single route table dispatches to the history tracker.

mod output;
mod parse;
mod presentation;
mod route;

pub use output::map_error;
pub use parse::{Cli, Commands};
pub use presentation::{
    format_history_json, format_history_text, format_last_context, format_session_list,
    format_visit_result,
};
pub use route::RunContext;
