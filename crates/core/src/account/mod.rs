//! Account summaries and balance upkeep.

pub mod service;
pub mod types;

pub use service::AccountService;
pub use types::{Account, AccountKind, AccountStatus};
