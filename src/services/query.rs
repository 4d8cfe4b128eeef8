use crate::models::{Priority, SortField, SortOrder, TodoFilter, TodoQuery};

pub const DEFAULT_LIMIT: u32 = 10;
pub const MAX_LIMIT: u32 = 100;

/// Listing parameters as the caller supplied them, before normalization.
#[derive(Debug, Clone, Default)]
pub struct ListTodosRequest {
    pub page: i64,
    pub limit: i64,
    pub search: Option<String>,
    pub sort_by: Option<String>,
    pub sort_order: Option<String>,
    pub completed: Option<bool>,
    pub category_id: Option<i64>,
    pub priority: Option<String>,
}

impl ListTodosRequest {
    /// Clamps paging, falls back to default sorting and drops unknown priority filters.
    pub fn normalize(self) -> TodoQuery {
        let page = if self.page < 1 {
            1
        } else {
            u32::try_from(self.page).unwrap_or(u32::MAX)
        };
        let limit = match u32::try_from(self.limit) {
            Ok(limit) if (1..=MAX_LIMIT).contains(&limit) => limit,
            _ => DEFAULT_LIMIT,
        };

        TodoQuery {
            page,
            limit,
            search: self.search.filter(|s| !s.is_empty()),
            sort_by: parse_sort_field(self.sort_by.as_deref()),
            sort_order: parse_sort_order(self.sort_order.as_deref()),
            filter: TodoFilter {
                completed: self.completed,
                category_id: self.category_id,
                priority: self
                    .priority
                    .as_deref()
                    .and_then(|p| p.parse::<Priority>().ok()),
            },
        }
    }
}

fn parse_sort_field(raw: Option<&str>) -> SortField {
    match raw {
        Some("title") => SortField::Title,
        Some("updated_at") => SortField::UpdatedAt,
        Some("due_date") => SortField::DueDate,
        Some("priority") => SortField::Priority,
        _ => SortField::CreatedAt,
    }
}

fn parse_sort_order(raw: Option<&str>) -> SortOrder {
    match raw {
        Some("asc") => SortOrder::Asc,
        _ => SortOrder::Desc,
    }
}
