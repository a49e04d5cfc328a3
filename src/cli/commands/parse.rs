//! `taskline parse`: show what quick entry extracts, without saving.

use chrono::NaiveDateTime;

use crate::cli::args::{OutputFormat, ParseArgs};
use crate::error::TasklineError;
use crate::features::nlp::TaskTextParser;
use crate::output::format_parsed;

/// Execute the parse command.
///
/// `--now` replaces `now` when given.
///
/// # Errors
///
/// Returns an error if JSON output fails.
pub fn parse(
    parser: TaskTextParser,
    args: &ParseArgs,
    now: NaiveDateTime,
    format: OutputFormat,
) -> Result<String, TasklineError> {
    let now = args.now.unwrap_or(now);
    let text = args.text();
    let parsed = parser.parse(&text, now);
    format_parsed(&text, &parsed, now.date(), format)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn args(text: &str, now: Option<NaiveDateTime>) -> ParseArgs {
        ParseArgs {
            text: vec![text.to_string()],
            now,
        }
    }

    #[test]
    fn test_now_override_drives_rollover() {
        let wall = NaiveDate::from_ymd_opt(2026, 1, 10).unwrap().and_hms_opt(9, 0, 0).unwrap();
        let april = NaiveDate::from_ymd_opt(2026, 4, 2).unwrap().and_hms_opt(9, 0, 0).unwrap();

        let output = parse(TaskTextParser::default(), &args("3/17 urgent", Some(april)), wall, OutputFormat::Json)
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["dueDate"], "2027-03-17T00:00:00");
        assert_eq!(value["priority"], "high");
        assert_eq!(value["title"], "");
    }

    #[test]
    fn test_plain_text_has_no_matches() {
        let now = NaiveDate::from_ymd_opt(2026, 4, 15).unwrap().and_hms_opt(9, 0, 0).unwrap();
        let output = parse(TaskTextParser::default(), &args("  buy   milk ", None), now, OutputFormat::Json)
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["title"], "buy milk");
        assert_eq!(value["matches"].as_array().map(Vec::len), Some(0));
    }
}
