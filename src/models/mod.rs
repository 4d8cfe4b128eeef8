pub mod category;
pub mod pagination;
pub mod query;
pub mod todo;

pub use category::{Category, CategoryInput};
pub use pagination::{Paginated, Pagination};
pub use query::{SortField, SortOrder, TodoFilter, TodoQuery};
pub use todo::{InvalidPriority, NewTodo, Priority, Todo, TodoInput};
