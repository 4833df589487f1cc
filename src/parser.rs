use std::collections::HashMap;

use chrono::{NaiveDate, NaiveDateTime};

use crate::command::{Command, TaskKind};
use crate::error::DukeError;
use crate::task::DateValue;

/// Key for the unlabeled text before the first `/` of an input line.
pub const DEFAULT_KEY: &str = "default";
/// Marks a replayed add so it produces no output and no save.
pub const SILENT_KEY: &str = "silent";
/// Marks a replayed add whose stored done flag was set.
pub const COMPLETED_KEY: &str = "completed";

/// The named parameters of one input line. Built once per line, read-only
/// afterwards. Keys are case-sensitive; values may be empty.
#[derive(Debug, Default, Clone)]
pub struct ParameterMap(HashMap<String, String>);

impl ParameterMap {
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    fn insert(&mut self, key: &str, value: &str) {
        self.0.insert(key.to_string(), value.to_string());
    }
}

/// Splits everything after the command keyword into a ParameterMap.
///
/// Segments are `/`-delimited; the first one (if non-blank) becomes the
/// `default` value, each later one splits on its first whitespace run into
/// name and value. A segment with no value is dropped, and a duplicate name
/// overwrites the earlier one. There is no escaping: a description that
/// itself contains `/` is split apart. Known limitation, kept as-is.
pub fn parse_parameters(rest: &str) -> ParameterMap {
    let mut map = ParameterMap::default();
    let mut segments = rest.split('/');

    if let Some(first) = segments.next() {
        let first = first.trim();
        if !first.is_empty() {
            map.insert(DEFAULT_KEY, first);
        }
    }

    for segment in segments {
        let segment = segment.trim();
        if let Some((name, value)) = segment.split_once(char::is_whitespace) {
            map.insert(name.trim(), value.trim());
        }
    }

    map
}

/// Maps one raw input line to a command, or `UnknownCommand` for a keyword
/// outside the supported set.
pub fn parse_command(line: &str) -> Result<Command, DukeError> {
    let trimmed = line.trim();
    let (keyword, rest) = match trimmed.split_once(char::is_whitespace) {
        Some((keyword, rest)) => (keyword, rest),
        None => (trimmed, ""),
    };
    let params = parse_parameters(rest);

    match keyword {
        "bye" => Ok(Command::Exit),
        "list" => Ok(Command::List),
        "mark" => Ok(Command::Mark(params)),
        "unmark" => Ok(Command::Unmark(params)),
        "delete" => Ok(Command::Delete(params)),
        "todo" => Ok(Command::Add {
            kind: TaskKind::Todo,
            params,
        }),
        "deadline" => Ok(Command::Add {
            kind: TaskKind::Deadline,
            params,
        }),
        "event" => Ok(Command::Add {
            kind: TaskKind::Event,
            params,
        }),
        other => Err(DukeError::UnknownCommand(other.to_string())),
    }
}

/// Parses `DD-MM-YYYY`, optionally followed by ` HHMM`. The datetime form
/// is tried first; which form matches decides the precision tag.
pub fn parse_temporal(text: &str) -> Result<DateValue, DukeError> {
    let text = text.trim();
    if let Ok(dt) = NaiveDateTime::parse_from_str(text, "%d-%m-%Y %H%M") {
        return Ok(DateValue::DateTime(dt));
    }
    if let Ok(d) = NaiveDate::parse_from_str(text, "%d-%m-%Y") {
        return Ok(DateValue::Date(d));
    }
    Err(DukeError::InvalidDateFormat(text.to_string()))
}

/// Rebuilds an add command from one storage record, tagged so that replaying
/// it is silent and restores the stored done flag. Records that are too
/// short or carry an unknown type tag yield `None` and are skipped by the
/// loader.
pub fn parse_stored_record(record: &str) -> Option<Command> {
    let fields: Vec<&str> = record.trim().split(" | ").collect();
    if fields.len() < 3 {
        return None;
    }

    let kind = match fields[0] {
        "T" => TaskKind::Todo,
        "D" => TaskKind::Deadline,
        "E" => TaskKind::Event,
        _ => return None,
    };

    let mut params = ParameterMap::default();
    params.insert(DEFAULT_KEY, fields[2]);
    params.insert(SILENT_KEY, "");
    if fields[1] == "1" {
        params.insert(COMPLETED_KEY, "");
    }
    if let Some(first_date) = fields.get(3) {
        params.insert("by", first_date);
        params.insert("from", first_date);
    }
    if let Some(second_date) = fields.get(4) {
        params.insert("to", second_date);
    }

    Some(Command::Add { kind, params })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_default_and_named_parameters() {
        let params = parse_parameters("Submit report /by 01-12-2024 1800");
        assert_eq!(params.get(DEFAULT_KEY), Some("Submit report"));
        assert_eq!(params.get("by"), Some("01-12-2024 1800"));
    }

    #[test]
    fn blank_leading_segment_has_no_default() {
        let params = parse_parameters("  /by tomorrow");
        assert!(!params.contains(DEFAULT_KEY));
        assert_eq!(params.get("by"), Some("tomorrow"));
    }

    #[test]
    fn valueless_segment_is_dropped() {
        // "read a/b": the "b" segment has no whitespace, so no value.
        let params = parse_parameters("read a/b");
        assert_eq!(params.get(DEFAULT_KEY), Some("read a"));
        assert!(!params.contains("b"));
    }

    #[test]
    fn duplicate_name_overwrites() {
        let params = parse_parameters("x /by 01-01-2024 /by 02-01-2024");
        assert_eq!(params.get("by"), Some("02-01-2024"));
    }

    #[test]
    fn recognizes_all_keywords() {
        assert!(matches!(parse_command("bye").unwrap(), Command::Exit));
        assert!(matches!(parse_command("list").unwrap(), Command::List));
        assert!(matches!(parse_command("mark 1").unwrap(), Command::Mark(_)));
        assert!(matches!(
            parse_command("unmark 1").unwrap(),
            Command::Unmark(_)
        ));
        assert!(matches!(
            parse_command("delete 1").unwrap(),
            Command::Delete(_)
        ));
        assert!(matches!(
            parse_command("todo read").unwrap(),
            Command::Add {
                kind: TaskKind::Todo,
                ..
            }
        ));
    }

    #[test]
    fn unknown_keyword_is_reported() {
        assert_eq!(
            parse_command("blah whatever").unwrap_err(),
            DukeError::UnknownCommand("blah".to_string())
        );
    }

    #[test]
    fn temporal_prefers_datetime_then_date() {
        assert!(matches!(
            parse_temporal("01-12-2024 1800").unwrap(),
            DateValue::DateTime(_)
        ));
        assert!(matches!(
            parse_temporal("01-12-2024").unwrap(),
            DateValue::Date(_)
        ));
        assert_eq!(
            parse_temporal("2024-12-01").unwrap_err(),
            DukeError::InvalidDateFormat("2024-12-01".to_string())
        );
    }

    #[test]
    fn stored_record_replays_as_completed_silent_add() {
        let cmd = parse_stored_record("D | 1 | submit report | 01-12-2024 1800").unwrap();
        match cmd {
            Command::Add { kind, params } => {
                assert!(matches!(kind, TaskKind::Deadline));
                assert_eq!(params.get(DEFAULT_KEY), Some("submit report"));
                assert_eq!(params.get("by"), Some("01-12-2024 1800"));
                assert!(params.contains(SILENT_KEY));
                assert!(params.contains(COMPLETED_KEY));
            }
            other => panic!("expected add, got {other:?}"),
        }
    }

    #[test]
    fn short_or_unknown_records_are_skipped() {
        assert!(parse_stored_record("T | 1").is_none());
        assert!(parse_stored_record("Z | 0 | mystery").is_none());
        assert!(parse_stored_record("").is_none());
    }
}
