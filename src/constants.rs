/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

/// User agent string used in HTTP requests to identify this client to the Yodlee API
pub const USER_AGENT: &str = "yodlee-client/0.1.0";

/// Base URL of the live (production) REST API
pub const LIVE_BASE_URL: &str = "https://rest.developer.yodlee.com/services/srest/restserver/v1.0/";

/// Host serving the per-cobrand sandbox REST API.
///
/// The sandbox base URL embeds the cobrand username:
/// `https://{SANDBOX_HOST}/private-{username}/v1.0/`
pub const SANDBOX_HOST: &str = "yisandbox.yodleeinteractive.com/services/srest";

/// Minutes a freshly issued session token is considered valid
pub const DEFAULT_SESSION_TTL_MINUTES: i64 = 20;
/// Upper bound accepted for the session ttl (one day)
pub const MAX_SESSION_TTL_MINUTES: i64 = 24 * 60;

/// Default REST timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Cobrand authentication endpoint
pub const COBRAND_LOGIN_PATH: &str = "authenticate/coblogin";
/// User authentication endpoint
pub const USER_LOGIN_PATH: &str = "authenticate/login";
/// Site accounts of the logged-in user
pub const SITE_ACCOUNTS_PATH: &str = "jsonsdk/SiteAccountManagement/getSiteAccounts";
/// Transaction search for the logged-in user
pub const TRANSACTION_SEARCH_PATH: &str =
    "jsonsdk/TransactionSearchService/executeUserSearchRequest";
/// Login form description for a site
pub const SITE_LOGIN_FORM_PATH: &str = "jsonsdk/SiteAccountManagement/getSiteLoginForm";
/// Free-text site search
pub const SITE_SEARCH_PATH: &str = "jsonsdk/SiteTraversal/searchSite";
/// User registration
pub const REGISTER_PATH: &str = "jsonsdk/UserRegistration/register3";
/// Links a site account to the logged-in user
pub const ADD_SITE_ACCOUNT_PATH: &str = "jsonsdk/SiteAccountManagement/addSiteAccount1";
/// Refresh status of a linked site account
pub const SITE_REFRESH_INFO_PATH: &str = "jsonsdk/Refresh/getSiteRefreshInfo";

/// Default container type for transaction searches
pub const DEFAULT_CONTAINER_TYPE: &str = "All";
/// Default higher fetch limit for transaction searches
pub const DEFAULT_HIGHER_FETCH_LIMIT: u32 = 500;
/// Default lower fetch limit for transaction searches
pub const DEFAULT_LOWER_FETCH_LIMIT: u32 = 1;
/// Default first result returned by a transaction search
pub const DEFAULT_START_NUMBER: u32 = 1;
/// Default last result returned by a transaction search
pub const DEFAULT_END_NUMBER: u32 = 5;
/// Default currency filter for transaction searches
pub const DEFAULT_CURRENCY_CODE: &str = "USD";

/// Credential type sent on user registration
pub const PASSWORD_CREDENTIALS_TYPE: &str = "com.yodlee.ext.login.PasswordCredentials";
