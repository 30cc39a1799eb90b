//! Per-input report lines.

use isomatch_grammar::DatetimeComponents;
use serde::Serialize;

use crate::error::AppResult;

pub use isomatch_core::config::ReportFormat;

#[derive(Debug, Serialize)]
struct JsonLine<'r, 'a> {
    input: &'r str,
    matched: bool,
    components: Option<&'r DatetimeComponents<'a>>,
}

/// Renders the outcome for one input.
///
/// Text lines read `INPUT: date=D, time=T, tzinfo=Z` (`tzinfo=None` when
/// absent) or `INPUT: not matched`. JSON lines carry the full decomposition.
///
/// ## Errors
/// Returns an error if JSON serialization fails.
pub fn render(
    input: &str,
    components: Option<&DatetimeComponents<'_>>,
    format: ReportFormat,
) -> AppResult<String> {
    match format {
        ReportFormat::Text => Ok(render_text(input, components)),
        ReportFormat::Json => Ok(serde_json::to_string(&JsonLine {
            input,
            matched: components.is_some(),
            components,
        })?),
    }
}

fn render_text(input: &str, components: Option<&DatetimeComponents<'_>>) -> String {
    let Some(components) = components else {
        return format!("{input}: not matched");
    };

    format!(
        "{input}: date={}, time={}, tzinfo={}",
        components.date(),
        components.time(),
        components.tzinfo().unwrap_or("None")
    )
}

#[cfg(test)]
mod tests {
    use isomatch_grammar::decompose;

    use super::*;

    #[test]
    fn text_line_for_match() {
        let input = "2020-W01-2T12:34:56+12:34";
        let line = render(input, decompose(input).as_ref(), ReportFormat::Text).unwrap();

        assert_eq!(
            line,
            "2020-W01-2T12:34:56+12:34: date=2020-W01-2, time=12:34:56, tzinfo=+12:34"
        );
    }

    #[test]
    fn text_line_without_tzinfo() {
        let input = "20200102T123456";
        let line = render(input, decompose(input).as_ref(), ReportFormat::Text).unwrap();

        assert_eq!(
            line,
            "20200102T123456: date=20200102, time=123456, tzinfo=None"
        );
    }

    #[test]
    fn text_line_for_no_match() {
        let line = render("2020-0102T12", None, ReportFormat::Text).unwrap();
        assert_eq!(line, "2020-0102T12: not matched");
    }

    #[test]
    fn json_line_for_match() {
        let input = "2020123T12Z";
        let line = render(input, decompose(input).as_ref(), ReportFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&line).unwrap();

        assert_eq!(value["input"], input);
        assert_eq!(value["matched"], true);
        assert_eq!(value["components"]["date"]["ordinalday"], "123");
        assert_eq!(value["components"]["tzinfo"]["text"], "Z");
    }

    #[test]
    fn json_line_for_no_match() {
        let line = render("nope", None, ReportFormat::Json).unwrap();
        assert_eq!(line, r#"{"input":"nope","matched":false,"components":null}"#);
    }
}
