// Server configuration
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: &str = "3000";
pub const DEFAULT_DATA_PATH: &str = "data";
pub const DEFAULT_LOG_FILTER: &str = "money_matters=info";

// Session configuration
pub const SESSION_NAME: &str = "money_matters_session";
pub const SESSION_EXPIRY_DAYS: i64 = 30;
pub const MIN_SESSION_SECRET_LENGTH: usize = 64;

// Session keys
pub const SESSION_KEY_USERNAME: &str = "username";
pub const SESSION_KEY_THEME: &str = "theme";
pub const SESSION_KEY_ACCOUNT_CREATED: &str = "account_created";

// Storage layout
pub const USERS_FILE: &str = "users.json";
pub const EXPENSES_FILE_PREFIX: &str = "expenses_";
pub const JSON_EXTENSION: &str = "json";

// Validation limits
pub const MAX_CATEGORY_NAME_LENGTH: usize = 100;

// Error messages
pub const ERR_STORAGE: &str = "Storage access error";
pub const ERR_SESSION: &str = "Session unavailable";
pub const ERR_INVALID_CREDENTIALS: &str = "Invalid credentials";
pub const ERR_UNAUTHORIZED: &str = "Not logged in";
pub const ERR_NO_HINT: &str = "No recovery hint found";
