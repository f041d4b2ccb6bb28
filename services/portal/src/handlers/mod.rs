pub mod admin;
pub mod dashboard;
pub mod extract;
pub mod guard;
pub mod health;
pub mod profile;
pub mod quote;
pub mod session;
pub mod transaction;
