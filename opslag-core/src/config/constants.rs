/// Model ID constants for the generation service
pub mod models {
    pub mod openai {
        pub const DEFAULT_MODEL: &str = "gpt-4o";
        pub const SUPPORTED_MODELS: &[&str] =
            &["gpt-4o", "gpt-4o-mini", "gpt-4.1", "gpt-4.1-mini"];

        pub const GPT_4O: &str = "gpt-4o";
        pub const GPT_4O_MINI: &str = "gpt-4o-mini";
    }
}

/// Generation request defaults
pub mod generation {
    /// Fixed sampling temperature for every request.
    pub const TEMPERATURE: f32 = 0.7;

    /// Reply used when the service answers with no candidates.
    pub const EMPTY_REPLY: &str = "Ingen svar.";

    /// Upper bound on a single upstream round-trip.
    pub const REQUEST_TIMEOUT_SECS: u64 = 60;
}

/// Dataset storage conventions
pub mod datasets {
    /// File extension a stored dataset must carry.
    pub const FILE_EXTENSION: &str = "csv";

    /// Column expected to hold historical post bodies when present.
    pub const POST_BODY_COLUMN: &str = "ad_creative_bodies";

    pub const DEFAULT_DATA_DIR: &str = "data";
}

/// Environment variable names for credentials
pub mod api_keys {
    pub const OPENAI_ENV: &str = "OPENAI_API_KEY";
}

/// Upstream service endpoints
pub mod urls {
    pub const OPENAI_API_BASE: &str = "https://api.openai.com/v1";
}

/// HTTP server defaults
pub mod server {
    pub const DEFAULT_BIND: &str = "127.0.0.1:3001";
}

/// Default configuration file name
pub mod config_files {
    pub const DEFAULT_CONFIG_FILE: &str = "opslag.toml";
}
