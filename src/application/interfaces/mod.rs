/// Account service interface
pub mod account;
/// Site service interface
pub mod site;
/// User service interface
pub mod user;
