use pgtl_config::PgtlConfig;

use crate::cli::GlobalFlags;

/// Load layered config (with `.env`) and apply command-line overrides.
pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<PgtlConfig> {
    let config = PgtlConfig::load_with_dotenv()?;
    Ok(apply_overrides(config, flags))
}

fn apply_overrides(mut config: PgtlConfig, flags: &GlobalFlags) -> PgtlConfig {
    if let Some(path) = &flags.db {
        tracing::debug!(%path, "using --db override; remote database settings ignored");
        config.database.path.clone_from(path);
        config.database.url.clear();
        config.database.auth_token.clear();
    }
    config
}
