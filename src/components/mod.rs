//! UI Components
//!
//! Pages and the reusable Leptos components they are built from.

mod user_header;
mod priority_selector;
mod new_todo_form;
mod todo_row;
mod tier_board;
mod todo_page;
mod completed_page;
mod delete_confirm_button;
mod blog_list;
mod blog_detail;
mod blog_editor;
mod auth_page;

pub use user_header::UserHeader;
pub use priority_selector::PrioritySelector;
pub use new_todo_form::NewTodoForm;
pub use todo_row::TodoRow;
pub use tier_board::TierBoardView;
pub use todo_page::TodoPage;
pub use completed_page::CompletedPage;
pub use delete_confirm_button::DeleteConfirmButton;
pub use blog_list::BlogListPage;
pub use blog_detail::BlogDetailPage;
pub use blog_editor::{BlogEditorPage, EditorMode};
pub use auth_page::AuthPage;
