//! Application services for user accounts.

mod account;

pub use account::{
    AccountService, AccountServiceError, AccountServiceResult, LoginRequest, SignUpRequest,
};
