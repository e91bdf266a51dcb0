mod config;
mod repos;
mod services;
mod system;

pub use config::{Config, OcrConfig};
pub use repos::{DatabaseUrls, IReminderRepo, ITransactionRepo, Repos};
pub use services::ocr::{
    create_ocr_provider, ClovaOpenAiOcrProvider, IOcrProvider, OcrProviderError,
    StaticOcrProvider,
};
use std::sync::Arc;
pub use system::{ISys, RealSys};
use tracing::warn;

#[derive(Clone)]
pub struct FincvContext {
    pub repos: Repos,
    pub config: Config,
    pub sys: Arc<dyn ISys>,
    pub ocr: Arc<dyn IOcrProvider>,
}

struct ContextParams {
    database_urls: DatabaseUrls,
}

impl FincvContext {
    fn from_parts(repos: Repos, config: Config) -> Self {
        let ocr = create_ocr_provider(&config.ocr);
        Self {
            repos,
            config,
            sys: Arc::new(RealSys {}),
            ocr,
        }
    }

    async fn create(params: ContextParams) -> anyhow::Result<Self> {
        let config = Config::new();
        let repos = Repos::create_postgres(&params.database_urls, config.local_offset).await?;
        Ok(Self::from_parts(repos, config))
    }

    pub fn create_inmemory() -> Self {
        let config = Config::new();
        let repos = Repos::create_inmemory(config.local_offset);
        Self::from_parts(repos, config)
    }
}

impl DatabaseUrls {
    /// Every store reads its own variable and falls back to `DATABASE_URL`.
    /// Returns `None` unless all four stores resolve to a connection string.
    pub fn from_env() -> Option<Self> {
        let shared = non_empty_env("DATABASE_URL");
        let resolve = |name: &str| non_empty_env(name).or_else(|| shared.clone());

        let accounts = resolve("ACCOUNT_DATABASE_URL");
        let documents = resolve("DOCUMENT_DATABASE_URL");
        let transactions = resolve("TRANSACTION_DATABASE_URL");
        let reminders = resolve("REMINDER_DATABASE_URL");

        match (accounts, documents, transactions, reminders) {
            (Some(accounts), Some(documents), Some(transactions), Some(reminders)) => Some(Self {
                accounts,
                documents,
                transactions,
                reminders,
            }),
            (None, None, None, None) => None,
            _ => {
                warn!("Only some of the stores have a database url configured. Set DATABASE_URL or all of ACCOUNT_DATABASE_URL, DOCUMENT_DATABASE_URL, TRANSACTION_DATABASE_URL and REMINDER_DATABASE_URL.");
                None
            }
        }
    }
}

fn non_empty_env(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

/// Will setup the infrastructure context given the environment.
/// Without any database url the stores are kept in memory.
pub async fn setup_context() -> anyhow::Result<FincvContext> {
    match DatabaseUrls::from_env() {
        Some(database_urls) => FincvContext::create(ContextParams { database_urls }).await,
        None => {
            warn!("No database url is configured, every store will be kept in memory and lost on shutdown.");
            Ok(FincvContext::create_inmemory())
        }
    }
}
