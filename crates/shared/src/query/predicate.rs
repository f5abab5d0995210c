use sqlx::{Postgres, QueryBuilder};
use uuid::Uuid;

/// A join path a predicate needs in order to reach a related entity's
/// column. Joins are deduplicated by alias when predicates are composed, so
/// two filters on the same related entity share one JOIN clause.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Join {
    pub table: &'static str,
    pub alias: &'static str,
    pub on: &'static str,
}

/// One elementary filter condition over a searchable collection.
///
/// Predicates are built independently from optional request fields and then
/// composed by [`super::SearchQuery`]. The optional constructors return
/// `None` for absent values AND for blank strings, so an empty query
/// parameter contributes nothing instead of becoming an
/// equality-to-empty-string filter.
#[derive(Debug, Clone)]
pub enum Predicate {
    /// Soft-delete exclusion on `<alias>.deleted_at`. Composed
    /// unconditionally as the first condition of every search.
    NotDeleted { alias: &'static str },
    IdEq {
        column: &'static str,
        value: Uuid,
        join: Option<Join>,
    },
    TextEq {
        column: &'static str,
        value: String,
        join: Option<Join>,
    },
    /// Case-sensitive substring match (`LIKE '%...%'`); the needle has
    /// LIKE metacharacters escaped so user input is matched literally.
    Contains { column: &'static str, value: String },
}

impl Predicate {
    pub fn not_deleted(alias: &'static str) -> Predicate {
        Predicate::NotDeleted { alias }
    }

    pub fn id_eq(column: &'static str, value: Option<Uuid>) -> Option<Predicate> {
        value.map(|value| Predicate::IdEq {
            column,
            value,
            join: None,
        })
    }

    pub fn id_eq_via(join: Join, column: &'static str, value: Option<Uuid>) -> Option<Predicate> {
        value.map(|value| Predicate::IdEq {
            column,
            value,
            join: Some(join),
        })
    }

    pub fn text_eq(column: &'static str, value: Option<&str>) -> Option<Predicate> {
        present(value).map(|value| Predicate::TextEq {
            column,
            value,
            join: None,
        })
    }

    pub fn text_eq_via(join: Join, column: &'static str, value: Option<&str>) -> Option<Predicate> {
        present(value).map(|value| Predicate::TextEq {
            column,
            value,
            join: Some(join),
        })
    }

    pub fn contains(column: &'static str, value: Option<&str>) -> Option<Predicate> {
        present(value).map(|value| Predicate::Contains { column, value })
    }

    pub(crate) fn join(&self) -> Option<Join> {
        match self {
            Predicate::IdEq { join, .. } | Predicate::TextEq { join, .. } => *join,
            _ => None,
        }
    }

    pub(crate) fn push_sql(&self, builder: &mut QueryBuilder<'static, Postgres>) {
        match self {
            Predicate::NotDeleted { alias } => {
                builder.push(alias);
                builder.push(".deleted_at IS NULL");
            }
            Predicate::IdEq { column, value, .. } => {
                builder.push(column);
                builder.push(" = ");
                builder.push_bind(*value);
            }
            Predicate::TextEq { column, value, .. } => {
                builder.push(column);
                builder.push(" = ");
                builder.push_bind(value.clone());
            }
            Predicate::Contains { column, value } => {
                builder.push(column);
                builder.push(" LIKE ");
                builder.push_bind(format!("%{}%", escape_like(value)));
            }
        }
    }
}

/// Blank strings count as "no filter supplied".
fn present(value: Option<&str>) -> Option<String> {
    value
        .filter(|v| !v.trim().is_empty())
        .map(|v| v.to_string())
}

fn escape_like(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        if matches!(ch, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_values_build_no_predicate() {
        assert!(Predicate::id_eq("s.store_id", None).is_none());
        assert!(Predicate::text_eq("a.city", None).is_none());
        assert!(Predicate::contains("s.store_name", None).is_none());
    }

    #[test]
    fn blank_strings_behave_like_absent_values() {
        assert!(Predicate::text_eq("a.city", Some("")).is_none());
        assert!(Predicate::text_eq("a.city", Some("   ")).is_none());
        assert!(Predicate::contains("s.store_name", Some("")).is_none());
        assert!(Predicate::contains("s.store_name", Some("\t")).is_none());
    }

    #[test]
    fn present_values_keep_their_original_form() {
        let predicate = Predicate::contains("s.store_name", Some("  pizza"));
        match predicate {
            Some(Predicate::Contains { value, .. }) => assert_eq!(value, "  pizza"),
            other => panic!("unexpected predicate: {other:?}"),
        }
    }

    #[test]
    fn contains_escapes_like_metacharacters() {
        let mut builder = QueryBuilder::new("");
        Predicate::contains("m.name", Some("50%_off"))
            .unwrap()
            .push_sql(&mut builder);

        assert_eq!(builder.sql(), "m.name LIKE $1");
        assert_eq!(escape_like("50%_off"), "50\\%\\_off");
        assert_eq!(escape_like("a\\b"), "a\\\\b");
    }
}
