use std::sync::OnceLock;

use regex::Regex;

/// Tables the service owns. Constraint names are parsed against these so that
/// table names containing underscores (`baked_goods`) split correctly.
const KNOWN_TABLES: &[&str] = &["baked_goods", "bakeries"];

/// Suffixes PostgreSQL appends to generated constraint names.
const CONSTRAINT_SUFFIXES: &[&str] = &["_fkey", "_key", "_check", "_not_null", "_idx"];

/// Utility for parsing PostgreSQL constraint violation messages.
pub struct ConstraintParser;

struct RegexPatterns {
    key_value: Regex,
    column_name: Regex,
    relation_name: Regex,
}

static REGEX_PATTERNS: OnceLock<RegexPatterns> = OnceLock::new();

impl ConstraintParser {
    fn patterns() -> &'static RegexPatterns {
        REGEX_PATTERNS.get_or_init(|| RegexPatterns {
            // "Key (bakery_id)=(99) is not present in table ..."
            key_value: Regex::new(r"Key \(([^)]+)\)=\(([^)]*)\)").expect("valid regex"),
            column_name: Regex::new(r#"column "([^"]+)""#).expect("valid regex"),
            // Matches both `table "x"` and `relation "x"`
            relation_name: Regex::new(r#"(?:table|relation) "([^"]+)""#).expect("valid regex"),
        })
    }

    /// Splits a generated constraint name into `(table, column)`.
    ///
    /// `baked_goods_bakery_id_fkey` -> `("baked_goods", "bakery_id")`
    pub fn parse_constraint_name(constraint_name: &str) -> Option<(String, String)> {
        let stem = CONSTRAINT_SUFFIXES
            .iter()
            .find_map(|suffix| constraint_name.strip_suffix(suffix))?;

        KNOWN_TABLES.iter().find_map(|table| {
            let column = stem.strip_prefix(table)?.strip_prefix('_')?;
            (!column.is_empty()).then(|| (table.to_string(), column.to_string()))
        })
    }

    /// Extracts `(table, column, value)` from a unique or foreign key violation.
    pub fn parse_key_violation(
        message: &str,
        constraint_name: Option<&str>,
    ) -> Option<(String, String, String)> {
        let key_value = Self::extract_key_value_from_message(message);

        if let Some((table, column)) = constraint_name.and_then(Self::parse_constraint_name) {
            let value = key_value
                .map(|(_, value)| value)
                .unwrap_or_else(|| "unknown".to_string());
            return Some((table, column, value));
        }

        let (column, value) = key_value?;
        let table = Self::extract_table_from_message(message)
            .unwrap_or_else(|| "resource".to_string());
        Some((table, column, value))
    }

    /// Extracts `(table, column)` from a not-null or check violation.
    pub fn parse_column_violation(
        message: &str,
        constraint_name: Option<&str>,
    ) -> Option<(String, String)> {
        if let Some(column) = Self::extract_column_from_message(message) {
            let table = Self::extract_table_from_message(message)
                .unwrap_or_else(|| "resource".to_string());
            return Some((table, column));
        }
        constraint_name.and_then(Self::parse_constraint_name)
    }

    pub fn extract_column_from_message(message: &str) -> Option<String> {
        Self::patterns()
            .column_name
            .captures(message)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().to_string())
    }

    pub fn extract_table_from_message(message: &str) -> Option<String> {
        Self::patterns()
            .relation_name
            .captures(message)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().to_string())
    }

    pub fn extract_key_value_from_message(message: &str) -> Option<(String, String)> {
        Self::patterns().key_value.captures(message).and_then(|caps| {
            let field = caps.get(1)?.as_str().to_string();
            let value = caps.get(2)?.as_str().to_string();
            Some((field, value))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_constraint_name_with_underscored_table() {
        assert_eq!(
            ConstraintParser::parse_constraint_name("baked_goods_bakery_id_fkey"),
            Some(("baked_goods".to_string(), "bakery_id".to_string()))
        );
        assert_eq!(
            ConstraintParser::parse_constraint_name("baked_goods_price_check"),
            Some(("baked_goods".to_string(), "price".to_string()))
        );
        assert_eq!(
            ConstraintParser::parse_constraint_name("bakeries_name_key"),
            Some(("bakeries".to_string(), "name".to_string()))
        );
    }

    #[test]
    fn test_parse_constraint_name_rejects_unknown_shapes() {
        assert_eq!(ConstraintParser::parse_constraint_name("bakeries_pkey_x"), None);
        assert_eq!(ConstraintParser::parse_constraint_name("orders_user_id_fkey"), None);
        assert_eq!(ConstraintParser::parse_constraint_name("bakeries_fkey"), None);
    }

    #[test]
    fn test_parse_foreign_key_violation() {
        let message = "insert or update on table \"baked_goods\" violates foreign key constraint \"baked_goods_bakery_id_fkey\"\nDETAIL: Key (bakery_id)=(999) is not present in table \"bakeries\".";
        let result =
            ConstraintParser::parse_key_violation(message, Some("baked_goods_bakery_id_fkey"));
        assert_eq!(
            result,
            Some((
                "baked_goods".to_string(),
                "bakery_id".to_string(),
                "999".to_string()
            ))
        );
    }

    #[test]
    fn test_parse_key_violation_without_constraint_name() {
        let message = "duplicate key value violates unique constraint\nDETAIL: Key (name)=(Rise) already exists.";
        let result = ConstraintParser::parse_key_violation(message, None);
        assert_eq!(
            result,
            Some(("resource".to_string(), "name".to_string(), "Rise".to_string()))
        );
    }

    #[test]
    fn test_parse_not_null_violation() {
        let message =
            "null value in column \"name\" of relation \"bakeries\" violates not-null constraint";
        assert_eq!(
            ConstraintParser::parse_column_violation(message, None),
            Some(("bakeries".to_string(), "name".to_string()))
        );
    }

    #[test]
    fn test_graceful_parsing_failures() {
        assert_eq!(ConstraintParser::parse_key_violation("something odd", None), None);
        assert_eq!(ConstraintParser::parse_column_violation("", None), None);
    }
}
