//! Server configuration loaded from environment variables.

/// Identity-provider connection settings.
#[derive(Debug, Clone)]
pub struct IdentityConfig {
    /// Base URL of the provider's auth API
    /// (e.g. `https://<project>.supabase.co/auth/v1`).
    pub base_url: String,
    /// Project API key sent with every provider request.
    pub api_key: String,
    /// Where the browser OAuth flow lands after Google sign-in.
    pub google_redirect_url: String,
}

/// Generative-backend settings for the insights feature.
#[derive(Debug, Clone)]
pub struct InsightsConfig {
    /// OpenAI-compatible API base URL.
    pub base_url: String,
    /// Bearer key, if the backend requires one.
    pub api_key: Option<String>,
    /// Model name passed with each completion request.
    pub model: String,
}

/// Top-level server configuration.
///
/// All fields except the collaborator credentials have defaults suitable
/// for local development. In production, override via environment
/// variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3001`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS`.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Identity-provider settings.
    pub identity: IdentityConfig,
    /// Insights-backend settings.
    pub insights: InsightsConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Required | Default                       |
    /// |------------------------|----------|-------------------------------|
    /// | `HOST`                 | no       | `0.0.0.0`                     |
    /// | `PORT`                 | no       | `3001`                        |
    /// | `CORS_ORIGINS`         | no       | `http://localhost:5173`       |
    /// | `REQUEST_TIMEOUT_SECS` | no       | `30`                          |
    /// | `IDENTITY_URL`         | **yes**  | --                            |
    /// | `IDENTITY_API_KEY`     | **yes**  | --                            |
    /// | `GOOGLE_REDIRECT_URL`  | no       | `http://localhost:5173/dashboard` |
    /// | `INSIGHTS_URL`         | no       | `https://api.openai.com/v1`   |
    /// | `INSIGHTS_API_KEY`     | no       | --                            |
    /// | `INSIGHTS_MODEL`       | no       | `gpt-4o-mini`                 |
    ///
    /// # Panics
    ///
    /// Panics when a required variable is missing or a numeric variable
    /// fails to parse -- misconfiguration should fail at startup.
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3001".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let identity = IdentityConfig {
            base_url: std::env::var("IDENTITY_URL")
                .expect("IDENTITY_URL must be set in the environment"),
            api_key: std::env::var("IDENTITY_API_KEY")
                .expect("IDENTITY_API_KEY must be set in the environment"),
            google_redirect_url: std::env::var("GOOGLE_REDIRECT_URL")
                .unwrap_or_else(|_| "http://localhost:5173/dashboard".into()),
        };

        let insights = InsightsConfig {
            base_url: std::env::var("INSIGHTS_URL")
                .unwrap_or_else(|_| "https://api.openai.com/v1".into()),
            api_key: std::env::var("INSIGHTS_API_KEY").ok(),
            model: std::env::var("INSIGHTS_MODEL").unwrap_or_else(|_| "gpt-4o-mini".into()),
        };

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            identity,
            insights,
        }
    }
}
