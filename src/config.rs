use std::env;

/// Token signing and validation settings, bound once at startup and passed
/// explicitly to every component that needs them.
#[derive(Debug, Clone)]
pub struct JwtSettings {
    /// Shared HS256 signing secret.
    pub secret: String,
    /// Lifetime of newly issued tokens, in hours.
    pub token_ttl_hours: i64,
    /// Whether incoming tokens must carry an `exp` claim.
    ///
    /// The legacy deployment accepted tokens without an expiry claim forever.
    /// Setting this to `false` reproduces that behavior; the default is the
    /// safe policy (require expiry).
    pub require_token_expiry: bool,
}

/// Database connection settings.
#[derive(Debug, Clone)]
pub struct DbSettings {
    pub connection_string: String,
    pub max_connections: u32,
}

pub struct Config {
    pub jwt: JwtSettings,
    pub db: DbSettings,
    pub server_host: String,
    pub server_port: u16,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            jwt: JwtSettings {
                secret: env::var("JWT_SECRET").expect("JWT_SECRET must be set"),
                token_ttl_hours: env::var("JWT_TOKEN_TTL_HOURS")
                    .unwrap_or_else(|_| "24".to_string())
                    .parse()
                    .expect("JWT_TOKEN_TTL_HOURS must be a number"),
                require_token_expiry: env::var("JWT_REQUIRE_TOKEN_EXPIRY")
                    .unwrap_or_else(|_| "true".to_string())
                    .parse()
                    .expect("JWT_REQUIRE_TOKEN_EXPIRY must be true or false"),
            },
            db: DbSettings {
                connection_string: env::var("DATABASE_URL").expect("DATABASE_URL must be set"),
                max_connections: env::var("DATABASE_MAX_CONNECTIONS")
                    .unwrap_or_else(|_| "5".to_string())
                    .parse()
                    .expect("DATABASE_MAX_CONNECTIONS must be a number"),
            },
            server_host: env::var("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            server_port: env::var("SERVER_PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .expect("SERVER_PORT must be a number"),
        }
    }

    pub fn server_url(&self) -> String {
        format!("http://{}:{}", self.server_host, self.server_port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_from_env() {
        env::set_var("JWT_SECRET", "test-secret");
        env::set_var("DATABASE_URL", "postgres://test");
        env::remove_var("JWT_TOKEN_TTL_HOURS");
        env::remove_var("JWT_REQUIRE_TOKEN_EXPIRY");
        env::remove_var("SERVER_PORT");
        env::remove_var("SERVER_HOST");

        let config = Config::from_env();

        assert_eq!(config.jwt.secret, "test-secret");
        assert_eq!(config.jwt.token_ttl_hours, 24);
        assert!(config.jwt.require_token_expiry);
        assert_eq!(config.db.connection_string, "postgres://test");
        assert_eq!(config.db.max_connections, 5);
        assert_eq!(config.server_port, 8080);
        assert_eq!(config.server_host, "127.0.0.1");

        // Custom values, including the legacy expiry policy opt-out.
        env::set_var("JWT_TOKEN_TTL_HOURS", "1");
        env::set_var("JWT_REQUIRE_TOKEN_EXPIRY", "false");
        env::set_var("SERVER_PORT", "3000");
        env::set_var("SERVER_HOST", "0.0.0.0");

        let config = Config::from_env();

        assert_eq!(config.jwt.token_ttl_hours, 1);
        assert!(!config.jwt.require_token_expiry);
        assert_eq!(config.server_port, 3000);
        assert_eq!(config.server_url(), "http://0.0.0.0:3000");

        env::remove_var("JWT_TOKEN_TTL_HOURS");
        env::remove_var("JWT_REQUIRE_TOKEN_EXPIRY");
        env::remove_var("SERVER_PORT");
        env::remove_var("SERVER_HOST");
    }
}
