mod errors;
mod storage;
mod types;

pub use errors::UserError;
pub use storage::UserStore;
pub use types::{User, UserInput};
