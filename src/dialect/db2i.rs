use chrono::{NaiveDateTime, Timelike};
use once_cell::sync::Lazy;
use regex::Regex;

use super::Dialect;
use crate::profile::Db2iProfile;

/// Reserved words that always need quoting when used as identifiers.
const RESERVED_KEYWORDS: &[&str] =
    &["group", "user", "order", "table", "index", "primary", "key", "column", "label", "value"];

static FUNCTION_CALL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*\s*\(.*\)$").expect("function call pattern is valid")
});

/// Special registers DB2 for i resolves without parentheses.
const SPECIAL_REGISTERS: &[&str] = &[
    "CURRENT_DATE",
    "CURRENT_TIME",
    "CURRENT_TIMESTAMP",
    "CURRENT DATE",
    "CURRENT TIME",
    "CURRENT TIMESTAMP",
];

/// Formatting and capability rules for IBM DB2 running on IBM i.
///
/// The major version and the boolean-type flag come from the host's
/// connection profile; this type never probes anything itself.
#[derive(Debug, Default, Clone)]
pub struct Db2i {
    major_version: Option<u32>,
    supports_boolean_type: bool,
}

impl Db2i {
    pub fn new() -> Self {
        Db2i::default()
    }

    pub fn with_major_version(major_version: u32) -> Self {
        Db2i { major_version: Some(major_version), ..Db2i::default() }
    }

    pub fn from_profile(profile: &Db2iProfile) -> Self {
        Db2i {
            major_version: profile.major_version,
            supports_boolean_type: profile.supports_boolean_type,
        }
    }

    fn quote_identifier(name: &str) -> String {
        let plain = !name.is_empty()
            && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '@' || c == '#');
        if plain && !RESERVED_KEYWORDS.contains(&name.to_ascii_lowercase().as_str()) {
            name.to_string()
        } else {
            format!("\"{}\"", name.replace('"', "\"\""))
        }
    }
}

impl Dialect for Db2i {
    fn short_name(&self) -> &'static str {
        "db2i"
    }

    fn escape_table_name(
        &self,
        catalog: Option<&str>,
        schema: Option<&str>,
        table: &str,
    ) -> String {
        let mut parts = Vec::with_capacity(3);
        if let Some(catalog) = catalog {
            parts.push(Db2i::quote_identifier(catalog));
        }
        if let Some(schema) = schema {
            parts.push(Db2i::quote_identifier(schema));
        }
        parts.push(Db2i::quote_identifier(table));
        parts.join(".")
    }

    fn escape_column_name(&self, column: &str) -> String {
        Db2i::quote_identifier(column)
    }

    fn escape_string_literal(&self, text: &str) -> String {
        text.replace('\'', "''")
    }

    fn date_literal(&self, value: &NaiveDateTime) -> String {
        // midnight with no sub-second part means a plain date value
        if value.hour() == 0
            && value.minute() == 0
            && value.second() == 0
            && value.nanosecond() == 0
        {
            format!("'{}'", value.format("%Y-%m-%d"))
        } else {
            format!("'{}'", value.format("%Y-%m-%d %H:%M:%S"))
        }
    }

    fn true_literal(&self) -> &'static str {
        if self.supports_boolean_type {
            "TRUE"
        } else {
            "1"
        }
    }

    fn false_literal(&self) -> &'static str {
        if self.supports_boolean_type {
            "FALSE"
        } else {
            "0"
        }
    }

    fn looks_like_function_call(&self, text: &str) -> bool {
        let trimmed = text.trim();
        FUNCTION_CALL.is_match(trimmed)
            || SPECIAL_REGISTERS.iter().any(|register| trimmed.eq_ignore_ascii_case(register))
    }

    fn major_version(&self) -> Option<u32> {
        self.major_version
    }
}
