mod auth;
mod errors;

pub use auth::{
    IssuedSession, authenticate_user, delete_user_account, login_with_provider, register_user,
    sign_out,
};
pub use errors::CoordinationError;
