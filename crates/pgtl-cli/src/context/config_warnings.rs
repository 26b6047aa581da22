use pgtl_config::PgtlConfig;

/// Config sections that can be set from `PGTL_<SECTION>__<KEY>` env vars.
const SECTIONS: [&str; 3] = ["DATABASE", "LAYOUT", "GENERAL"];

/// Emit warnings for likely mistyped env var keys and half-configured remotes.
pub fn warn_unconfigured(config: &PgtlConfig) {
    for warning in collect_unconfigured_warnings(config, std::env::vars()) {
        tracing::warn!("{warning}");
    }
}

fn collect_unconfigured_warnings<I>(config: &PgtlConfig, env: I) -> Vec<String>
where
    I: IntoIterator<Item = (String, String)>,
{
    let env_keys = env.into_iter().map(|(key, _)| key).collect::<Vec<_>>();

    let mut warnings = Vec::new();

    for section in SECTIONS {
        let single = format!("PGTL_{section}_");
        let double = format!("PGTL_{section}__");
        if let Some(key) = env_keys
            .iter()
            .find(|key| key.starts_with(&single) && !key.starts_with(&double))
        {
            warnings.push(format!(
                "{key} is ignored. Use double underscores to nest config keys (example: {double}{}).",
                key.trim_start_matches(&single)
            ));
        }
    }

    if config.database.has_url_without_token() {
        warnings.push(
            "database.url is set without database.auth_token; using the local database file instead. Set PGTL_DATABASE__AUTH_TOKEN."
                .to_string(),
        );
    }

    warnings
}

#[cfg(test)]
mod tests {
    use pgtl_config::PgtlConfig;

    use super::collect_unconfigured_warnings;

    fn env(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn warns_for_single_underscore_nesting() {
        let warnings = collect_unconfigured_warnings(
            &PgtlConfig::default(),
            env(&[
                ("PGTL_DATABASE_PATH", "/tmp/x.db"),
                ("PGTL_LAYOUT_RIGHT_LABEL_COUNT", "4"),
                ("PGTL_GENERAL_DEFAULT_LIMIT", "10"),
            ]),
        );

        assert_eq!(warnings.len(), 3);
        assert!(warnings[0].contains("PGTL_DATABASE__PATH"));
        assert!(warnings[1].contains("PGTL_LAYOUT__RIGHT_LABEL_COUNT"));
    }

    #[test]
    fn does_not_warn_for_well_formed_keys() {
        let warnings = collect_unconfigured_warnings(
            &PgtlConfig::default(),
            env(&[
                ("PGTL_DATABASE__PATH", "/tmp/x.db"),
                ("PGTL_LOG", "debug"),
                ("HOME", "/root"),
            ]),
        );

        assert!(warnings.is_empty());
    }

    #[test]
    fn warns_for_url_without_token() {
        let mut config = PgtlConfig::default();
        config.database.url = "libsql://releases.turso.io".to_string();

        let warnings = collect_unconfigured_warnings(&config, Vec::new());
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("auth_token"));
    }
}
