use super::Priority;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortField {
    Title,
    #[default]
    CreatedAt,
    UpdatedAt,
    DueDate,
    Priority,
}

impl SortField {
    pub fn column(&self) -> &'static str {
        match self {
            SortField::Title => "t.title",
            SortField::CreatedAt => "t.created_at",
            SortField::UpdatedAt => "t.updated_at",
            SortField::DueDate => "t.due_date",
            SortField::Priority => "t.priority",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    pub fn keyword(&self) -> &'static str {
        match self {
            SortOrder::Asc => "ASC",
            SortOrder::Desc => "DESC",
        }
    }
}

/// Equality filters for todo listing. `None` means the dimension is not filtered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoFilter {
    pub completed: Option<bool>,
    pub category_id: Option<i64>,
    pub priority: Option<Priority>,
}

/// Normalized listing parameters handed to the persistence layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoQuery {
    pub page: u32,
    pub limit: u32,
    pub search: Option<String>,
    pub sort_by: SortField,
    pub sort_order: SortOrder,
    pub filter: TodoFilter,
}

impl TodoQuery {
    pub fn offset(&self) -> i64 {
        i64::from(self.page.saturating_sub(1)) * i64::from(self.limit)
    }
}

impl Default for TodoQuery {
    fn default() -> Self {
        Self {
            page: 1,
            limit: 10,
            search: None,
            sort_by: SortField::default(),
            sort_order: SortOrder::default(),
            filter: TodoFilter::default(),
        }
    }
}
