use wof_core::config::{env_or, require_env, split_list};

pub const DEFAULT_MAIL_API_URL: &str = "https://api.resend.com";
pub const DEFAULT_MAIL_FROM: &str = "send@vedicvarma.com";

/// OTP service configuration loaded from environment variables.
#[derive(Debug)]
pub struct OtpConfig {
    /// PostgreSQL connection URL.
    pub database_url: String,
    /// HMAC secret for the session token handed out after verification. Env var: `SECRET_KEY`.
    pub session_secret: String,
    /// Bearer key for the mail provider.
    pub mail_api_key: String,
    /// Mail provider base URL (default Resend).
    pub mail_api_url: String,
    /// Sender address on OTP emails.
    pub mail_from: String,
    /// Usernames (email local parts) with admin access. Env var: `ALLOWED_ADMIN`, comma separated.
    pub allowed_admins: Vec<String>,
    /// TCP port to listen on (default 3114). Env var: `OTP_PORT`.
    pub otp_port: u16,
    /// Seconds between expiry sweeps (default 60).
    pub sweep_interval_secs: u64,
}

impl OtpConfig {
    pub fn from_env() -> Self {
        Self {
            database_url: require_env("DATABASE_URL"),
            session_secret: require_env("SECRET_KEY"),
            mail_api_key: require_env("MAIL_API_KEY"),
            mail_api_url: env_or("MAIL_API_URL", DEFAULT_MAIL_API_URL.to_owned()),
            mail_from: env_or("MAIL_FROM", DEFAULT_MAIL_FROM.to_owned()),
            allowed_admins: split_list(&env_or("ALLOWED_ADMIN", String::new())),
            otp_port: env_or("OTP_PORT", 3114),
            sweep_interval_secs: env_or("OTP_SWEEP_INTERVAL_SECS", 60u64).max(1),
        }
    }
}
