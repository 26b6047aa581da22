use anyhow::Context;
use pgtl_config::PgtlConfig;
use pgtl_db::service::ReleaseStore;

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub store: ReleaseStore,
    pub config: PgtlConfig,
}

impl AppContext {
    /// Open the release store described by `config`.
    pub async fn init(config: PgtlConfig) -> anyhow::Result<Self> {
        let location = if config.database.is_remote() {
            config.database.url.as_str()
        } else {
            config.database.path.as_str()
        };
        tracing::debug!(%location, "opening release store");

        let store = ReleaseStore::open(&config)
            .await
            .with_context(|| format!("cannot open release database at {location}"))?;

        Ok(Self { store, config })
    }
}
