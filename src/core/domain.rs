use serde::{Deserialize, Serialize};

// Identifiable defines the common trait shared by stored objects; the id is
// the primary key of the store.
pub trait Identifiable : Sync + Send {
    fn id(&self) -> String;
}

const DEFAULT_HTTP_PORT: u16 = 3000;

// Configuration abstracts config options for the catalog service
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub(crate) struct Configuration {
    pub http_port: u16,
    pub seed_file: Option<String>,
}

impl Configuration {
    pub fn new() -> Self {
        Configuration {
            http_port: std::env::var("HTTP_PORT").ok()
                .and_then(|port| port.parse::<u16>().ok())
                .unwrap_or(DEFAULT_HTTP_PORT),
            seed_file: std::env::var("SEED_FILE").ok(),
        }
    }
}
