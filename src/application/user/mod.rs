//! User handlers - administrative account management.
//!
//! Users are created by the verification flow; the handlers here only
//! read, correct, and remove existing accounts on behalf of an admin.

mod delete_user;
mod get_user;
mod list_users;
mod update_user;

pub use delete_user::DeleteUserHandler;
pub use get_user::GetUserHandler;
pub use list_users::ListUsersHandler;
pub use update_user::{UpdateUserCommand, UpdateUserHandler};
