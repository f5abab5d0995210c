use crate::{
    errors::DomainError,
    query::predicate::{Join, Predicate},
};
use sqlx::{Postgres, QueryBuilder};

/// Zero-based result window. Construction rejects malformed windows before
/// any SQL is composed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: i64,
    size: i64,
}

impl PageRequest {
    pub fn new(page: i64, size: i64) -> Result<Self, DomainError> {
        if page < 0 {
            return Err(DomainError::InvalidArgument(format!(
                "page index must be >= 0, got {page}"
            )));
        }
        if size <= 0 {
            return Err(DomainError::InvalidArgument(format!(
                "page size must be > 0, got {size}"
            )));
        }

        Ok(Self { page, size })
    }

    pub fn page(&self) -> i64 {
        self.page
    }

    pub fn size(&self) -> i64 {
        self.size
    }

    fn offset(&self) -> i64 {
        self.page * self.size
    }
}

/// A filtered, paginated query plan over one searchable table.
///
/// The plan is seeded with the soft-delete exclusion and folds present
/// predicates in with AND; absent predicates (`None`) are skipped entirely.
/// Joins required by predicates are collected once per alias. The same plan
/// yields the windowed SELECT and the matching COUNT so totals always agree
/// with the filter set.
///
/// Sorting is fixed: newest first by creation time, primary key as the tie
/// break so page boundaries are stable across calls.
#[derive(Debug, Clone)]
pub struct SearchQuery {
    table: &'static str,
    alias: &'static str,
    id_column: &'static str,
    predicates: Vec<Predicate>,
    joins: Vec<Join>,
}

impl SearchQuery {
    pub fn over(table: &'static str, alias: &'static str, id_column: &'static str) -> Self {
        Self {
            table,
            alias,
            id_column,
            predicates: vec![Predicate::not_deleted(alias)],
            joins: Vec::new(),
        }
    }

    pub fn filter(mut self, predicate: Option<Predicate>) -> Self {
        if let Some(predicate) = predicate {
            if let Some(join) = predicate.join() {
                if !self.joins.iter().any(|j| j.alias == join.alias) {
                    self.joins.push(join);
                }
            }
            self.predicates.push(predicate);
        }
        self
    }

    pub fn select(&self, columns: &str, page: &PageRequest) -> QueryBuilder<'static, Postgres> {
        let mut builder = QueryBuilder::new(format!("SELECT {columns}"));
        self.push_from(&mut builder);
        self.push_where(&mut builder);

        builder.push(format!(
            " ORDER BY {alias}.created_at DESC, {alias}.{id} DESC",
            alias = self.alias,
            id = self.id_column,
        ));
        builder.push(" LIMIT ");
        builder.push_bind(page.size());
        builder.push(" OFFSET ");
        builder.push_bind(page.offset());

        builder
    }

    pub fn count(&self) -> QueryBuilder<'static, Postgres> {
        let mut builder = QueryBuilder::new("SELECT COUNT(*)");
        self.push_from(&mut builder);
        self.push_where(&mut builder);
        builder
    }

    fn push_from(&self, builder: &mut QueryBuilder<'static, Postgres>) {
        builder.push(format!(" FROM {} {}", self.table, self.alias));
        for join in &self.joins {
            builder.push(format!(" JOIN {} {} ON {}", join.table, join.alias, join.on));
        }
    }

    fn push_where(&self, builder: &mut QueryBuilder<'static, Postgres>) {
        builder.push(" WHERE ");
        for (i, predicate) in self.predicates.iter().enumerate() {
            if i > 0 {
                builder.push(" AND ");
            }
            predicate.push_sql(builder);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    const AREA_JOIN: Join = Join {
        table: "p_areas",
        alias: "a",
        on: "a.area_id = s.area_id",
    };

    fn page() -> PageRequest {
        PageRequest::new(0, 10).unwrap()
    }

    #[test]
    fn page_request_rejects_bad_windows() {
        assert!(matches!(
            PageRequest::new(-1, 10),
            Err(DomainError::InvalidArgument(_))
        ));
        assert!(matches!(
            PageRequest::new(0, 0),
            Err(DomainError::InvalidArgument(_))
        ));
        assert!(matches!(
            PageRequest::new(0, -5),
            Err(DomainError::InvalidArgument(_))
        ));
    }

    #[test]
    fn page_request_window_math() {
        let page = PageRequest::new(3, 25).unwrap();
        assert_eq!(page.size(), 25);
        assert_eq!(page.offset(), 75);
    }

    #[test]
    fn no_filters_yields_only_the_soft_delete_constraint() {
        let plan = SearchQuery::over("p_stores", "s", "store_id")
            .filter(Predicate::contains("s.store_name", None))
            .filter(Predicate::id_eq("s.store_id", None));

        let select = plan.select("s.*", &page());
        assert_eq!(
            select.sql(),
            "SELECT s.* FROM p_stores s WHERE s.deleted_at IS NULL \
             ORDER BY s.created_at DESC, s.store_id DESC LIMIT $1 OFFSET $2"
        );
    }

    #[test]
    fn blank_text_filter_contributes_nothing() {
        let plan = SearchQuery::over("p_stores", "s", "store_id")
            .filter(Predicate::text_eq_via(AREA_JOIN, "a.name", Some("Downtown")))
            .filter(Predicate::contains("s.store_name", Some("")));

        let sql = plan.select("s.*", &page()).sql().to_string();
        assert!(sql.contains("a.name = $1"));
        assert!(!sql.contains("store_name"));
    }

    #[test]
    fn present_filters_are_conjoined_in_order() {
        let store_id = Uuid::new_v4();
        let plan = SearchQuery::over("p_stores", "s", "store_id")
            .filter(Predicate::contains("s.store_name", Some("cat")))
            .filter(Predicate::id_eq("s.store_id", Some(store_id)));

        assert_eq!(
            plan.select("s.*", &page()).sql(),
            "SELECT s.* FROM p_stores s WHERE s.deleted_at IS NULL \
             AND s.store_name LIKE $1 AND s.store_id = $2 \
             ORDER BY s.created_at DESC, s.store_id DESC LIMIT $3 OFFSET $4"
        );
    }

    #[test]
    fn joined_predicates_pull_their_join_path_in_once() {
        let area_id = Uuid::new_v4();
        let plan = SearchQuery::over("p_stores", "s", "store_id")
            .filter(Predicate::text_eq_via(AREA_JOIN, "a.name", Some("Downtown")))
            .filter(Predicate::id_eq_via(AREA_JOIN, "a.area_id", Some(area_id)));

        let sql = plan.select("s.*", &page()).sql().to_string();
        assert_eq!(
            sql.matches("JOIN p_areas a ON a.area_id = s.area_id").count(),
            1
        );
        assert!(sql.contains("a.name = $1"));
        assert!(sql.contains("a.area_id = $2"));
    }

    #[test]
    fn unjoined_plan_has_no_join_clause() {
        let plan = SearchQuery::over("p_areas", "a", "area_id")
            .filter(Predicate::text_eq("a.city", Some("Seoul")));

        assert!(!plan.select("a.*", &page()).sql().contains("JOIN"));
    }

    #[test]
    fn count_shares_the_filter_set_without_window_or_sort() {
        let plan = SearchQuery::over("p_stores", "s", "store_id")
            .filter(Predicate::text_eq_via(AREA_JOIN, "a.name", Some("Downtown")));

        assert_eq!(
            plan.count().sql(),
            "SELECT COUNT(*) FROM p_stores s JOIN p_areas a ON a.area_id = s.area_id \
             WHERE s.deleted_at IS NULL AND a.name = $1"
        );
    }

    #[test]
    fn sort_is_fixed_with_id_tie_break() {
        let plan = SearchQuery::over("p_ai_logs", "l", "ai_log_id");
        let sql = plan.select("l.*", &page()).sql().to_string();
        assert!(sql.contains("ORDER BY l.created_at DESC, l.ai_log_id DESC"));
    }
}
