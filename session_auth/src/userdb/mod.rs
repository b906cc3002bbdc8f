mod errors;
mod types;
mod user;

pub use errors::UserError;
pub use types::{AuthProvider, User, UserRole};
pub use user::UserStore;

pub(crate) async fn init() -> Result<(), UserError> {
    UserStore::init().await
}
