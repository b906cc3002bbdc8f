mod store_type;
mod sqlite;
mod postgres;

pub use store_type::UserStore;
