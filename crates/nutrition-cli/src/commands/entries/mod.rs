mod add;
mod clear;
mod delete;
mod edit;
mod export;
mod list;
mod show;

pub use add::handle_add;
pub use clear::handle_clear;
pub use delete::handle_delete;
pub use edit::handle_edit;
pub use export::handle_export;
pub use list::handle_list;
pub use show::handle_show;
