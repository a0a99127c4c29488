use chrono::NaiveDateTime;

use crate::dialect::Dialect;

/// A typed column value carried by insert and upsert statements.
#[derive(Debug, Clone, PartialEq)]
pub enum ColumnValue {
    Null,
    Text(String),
    Date(NaiveDateTime),
    Boolean(bool),
    /// A database function expression such as `CURRENT_TIMESTAMP`; passed
    /// through unescaped, the caller has validated it.
    Function(String),
    /// Pre-rendered SQL the caller takes responsibility for.
    Raw(String),
}

impl ColumnValue {
    /// Builds a text value, normalizing the `"NULL"` sentinel (any casing)
    /// to [`ColumnValue::Null`] so format-time code has a single null path.
    pub fn text(value: impl Into<String>) -> Self {
        let value = value.into();
        if value.eq_ignore_ascii_case("NULL") {
            ColumnValue::Null
        } else {
            ColumnValue::Text(value)
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, ColumnValue::Null)
    }
}

/// Formats a value as a literal for the given dialect.
///
/// With `for_source_tuple` set, nulls format to the empty string so the
/// caller can drop them from the source tuple together with their
/// separator; otherwise nulls render as the `NULL` keyword. Never fails:
/// anything unrecognized falls through to its raw text form.
pub fn format_value(dialect: &dyn Dialect, value: &ColumnValue, for_source_tuple: bool) -> String {
    match value {
        ColumnValue::Null => {
            if for_source_tuple {
                String::new()
            } else {
                "NULL".to_string()
            }
        }
        ColumnValue::Text(text) if !dialect.looks_like_function_call(text) => {
            dialect.quote_string_literal(text)
        }
        ColumnValue::Date(date) => dialect.date_literal(date),
        ColumnValue::Boolean(true) => dialect.true_literal().to_string(),
        ColumnValue::Boolean(false) => dialect.false_literal().to_string(),
        ColumnValue::Function(expression) => expression.clone(),
        ColumnValue::Text(text) | ColumnValue::Raw(text) => text.clone(),
    }
}

/// Renders one row's parenthesized VALUES tuple for a multi-row INSERT.
pub fn render_row_tuple(dialect: &dyn Dialect, columns: &[(String, ColumnValue)]) -> String {
    let values = columns
        .iter()
        .map(|(_, value)| format_value(dialect, value, false))
        .collect::<Vec<_>>()
        .join(", ");
    format!("({values})")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialect::Db2i;
    use chrono::NaiveDate;

    #[test]
    fn null_renders_keyword_or_disappears() {
        let dialect = Db2i::new();
        assert_eq!(format_value(&dialect, &ColumnValue::Null, false), "NULL");
        assert_eq!(format_value(&dialect, &ColumnValue::Null, true), "");
    }

    #[test]
    fn null_sentinel_string_is_normalized() {
        assert!(ColumnValue::text("NULL").is_null());
        assert!(ColumnValue::text("null").is_null());
        assert!(!ColumnValue::text("NULLable").is_null());
    }

    #[test]
    fn text_is_quoted_and_escaped() {
        let dialect = Db2i::new();
        let value = ColumnValue::text("O'Reilly");
        assert_eq!(format_value(&dialect, &value, false), "'O''Reilly'");
    }

    #[test]
    fn function_looking_text_passes_through_unescaped() {
        let dialect = Db2i::new();
        let value = ColumnValue::text("COALESCE(a, 'b')");
        assert_eq!(format_value(&dialect, &value, false), "COALESCE(a, 'b')");

        let register = ColumnValue::text("CURRENT_TIMESTAMP");
        assert_eq!(format_value(&dialect, &register, false), "CURRENT_TIMESTAMP");
    }

    #[test]
    fn booleans_substitute_dialect_literals() {
        let dialect = Db2i::new();
        assert_eq!(format_value(&dialect, &ColumnValue::Boolean(true), false), "1");
        assert_eq!(format_value(&dialect, &ColumnValue::Boolean(false), false), "0");
    }

    #[test]
    fn dates_use_the_dialect_literal() {
        let dialect = Db2i::new();
        let date = NaiveDate::from_ymd_opt(2017, 3, 14)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        assert_eq!(format_value(&dialect, &ColumnValue::Date(date), false), "'2017-03-14'");
    }

    #[test]
    fn raw_values_pass_through() {
        let dialect = Db2i::new();
        let value = ColumnValue::Raw("DEFAULT".to_string());
        assert_eq!(format_value(&dialect, &value, false), "DEFAULT");
    }

    #[test]
    fn row_tuple_renders_all_values_in_order() {
        let dialect = Db2i::new();
        let columns = vec![
            ("id".to_string(), ColumnValue::Raw("1".to_string())),
            ("name".to_string(), ColumnValue::text("ada")),
            ("active".to_string(), ColumnValue::Boolean(true)),
        ];
        assert_eq!(render_row_tuple(&dialect, &columns), "(1, 'ada', 1)");
    }
}
