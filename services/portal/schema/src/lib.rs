//! sea-orm entities for the portal database.

pub mod profiles;
pub mod quotes;
pub mod transactions;
