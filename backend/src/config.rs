use anyhow::anyhow;

/// Runtime configuration, loaded once at startup and injected through
/// `AppState` so handlers never touch the process environment directly.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub port: u16,
    pub sendfox: Option<SendFoxConfig>,
}

/// SendFox credentials. Present only when both `SENDFOX_API_TOKEN` and
/// `SENDFOX_LIST_ID` are set; otherwise submissions are logged instead of
/// forwarded.
#[derive(Debug, Clone)]
pub struct SendFoxConfig {
    pub api_token: String,
    pub list_id: u64,
    pub base_url: String,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let port = std::env::var("PORT")
            .unwrap_or_else(|_| "3001".to_string())
            .parse()
            .map_err(|_| anyhow!("PORT must be a valid port number"))?;

        let api_token = std::env::var("SENDFOX_API_TOKEN")
            .ok()
            .filter(|s| !s.trim().is_empty());
        let list_id = std::env::var("SENDFOX_LIST_ID")
            .ok()
            .filter(|s| !s.trim().is_empty());

        let sendfox = match (api_token, list_id) {
            (Some(api_token), Some(list_id)) => Some(SendFoxConfig {
                api_token,
                list_id: list_id
                    .parse()
                    .map_err(|_| anyhow!("SENDFOX_LIST_ID must be a numeric list id"))?,
                base_url: std::env::var("SENDFOX_API_URL")
                    .unwrap_or_else(|_| "https://api.sendfox.com".to_string()),
            }),
            _ => None,
        };

        Ok(Self { port, sendfox })
    }
}
