use std::env;

/// Environment configuration
/// Loads and validates environment variables
pub struct Config {
    pub database_url: String,
    pub jwt_secret: String,
    pub mail: Option<MailConfig>,
}

/// Settings for the transactional mail relay. When absent the server falls
/// back to logging login codes instead of sending them (local development).
pub struct MailConfig {
    pub api_url: String,
    pub api_key: String,
    pub from_address: String,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        dotenvy::dotenv().ok();

        let database_url =
            env::var("DATABASE_URL").map_err(|_| "DATABASE_URL must be set".to_string())?;

        let jwt_secret =
            env::var("JWT_SECRET").map_err(|_| "JWT_SECRET must be set".to_string())?;

        let mail = match (env::var("MAIL_API_URL"), env::var("MAIL_API_KEY")) {
            (Ok(api_url), Ok(api_key)) => {
                let from_address =
                    env::var("MAIL_FROM").unwrap_or_else(|_| "no-reply@girenad.org".to_string());
                Some(MailConfig {
                    api_url,
                    api_key,
                    from_address,
                })
            }
            _ => None,
        };

        Ok(Self {
            database_url,
            jwt_secret,
            mail,
        })
    }
}
