/// Module containing the account service for accounts and transactions
pub mod account_service;
/// Module containing the site service for site search and linking
pub mod site_service;
/// Module containing the user service for registration
pub mod user_service;

pub use crate::application::interfaces::account::*;
pub use crate::application::interfaces::site::*;
pub use crate::application::interfaces::user::*;
