pub mod admin;
pub mod callback;
pub mod profile;
pub mod quote;
pub mod transaction;
