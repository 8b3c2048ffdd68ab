mod errors;
mod user;

pub use errors::CoordinationError;
pub use user::{
    DeleteConfirmation, create_user, delete_user, get_user, list_users, update_user,
};
