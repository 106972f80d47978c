use std::{fs, path::Path};

use anyhow::Context;
use swipe_core::SwipeConfig;

const ENV_PREFIX: &str = "SWIPE__";

/// Defaults, then the TOML file (if any), then `SWIPE__*` environment
/// overrides. Validation happens when the deck is built.
pub fn load_settings(path: Option<&Path>) -> anyhow::Result<SwipeConfig> {
    let mut config = match path {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .with_context(|| format!("failed to read config '{}'", path.display()))?;
            toml::from_str::<SwipeConfig>(&raw)
                .with_context(|| format!("failed to parse config '{}'", path.display()))?
        }
        None => SwipeConfig::default_v1(),
    };

    apply_overrides(&mut config, |key| std::env::var(format!("{ENV_PREFIX}{key}")).ok())?;
    Ok(config)
}

fn apply_overrides(
    config: &mut SwipeConfig,
    lookup: impl Fn(&str) -> Option<String>,
) -> anyhow::Result<()> {
    let float = |key: &str| -> anyhow::Result<Option<f64>> {
        lookup(key)
            .map(|v| {
                v.trim()
                    .parse::<f64>()
                    .with_context(|| format!("{ENV_PREFIX}{key}: not a number: '{v}'"))
            })
            .transpose()
    };

    if let Some(v) = float("SWIPE_THRESHOLD")? {
        config.swipe_threshold = v;
    }
    if let Some(v) = float("ROTATION_DEGREES")? {
        config.rotation_degrees = v;
    }
    if let Some(v) = float("FLY_OUT_MULTIPLIER")? {
        config.fly_out_multiplier = v;
    }
    if let Some(v) = float("HINT_THRESHOLD")? {
        config.hint_threshold = v;
    }
    if let Some(v) = lookup("RELEASE_DURATION_MS") {
        config.release_duration_ms = v
            .trim()
            .parse::<u64>()
            .with_context(|| format!("{ENV_PREFIX}RELEASE_DURATION_MS: not an integer: '{v}'"))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn overrides_replace_only_named_fields() {
        let vars = env(&[("SWIPE_THRESHOLD", "90"), ("RELEASE_DURATION_MS", "200")]);
        let mut config = SwipeConfig::default_v1();
        apply_overrides(&mut config, |k| vars.get(k).cloned()).unwrap();

        assert_eq!(config.swipe_threshold, 90.0);
        assert_eq!(config.release_duration_ms, 200);
        assert_eq!(config.hint_threshold, 40.0);
    }

    #[test]
    fn malformed_override_is_an_error() {
        let vars = env(&[("HINT_THRESHOLD", "forty")]);
        let mut config = SwipeConfig::default_v1();
        let err = apply_overrides(&mut config, |k| vars.get(k).cloned()).unwrap_err();
        assert!(err.to_string().contains("SWIPE__HINT_THRESHOLD"));
    }

    #[test]
    fn toml_file_keeps_unset_defaults() {
        let config: SwipeConfig = toml::from_str(
            r#"
            swipe_threshold = 100.0

            [lookahead]
            opacity = 0.5
            "#,
        )
        .unwrap();
        assert_eq!(config.swipe_threshold, 100.0);
        assert_eq!(config.rotation_degrees, 15.0);
        assert_eq!(config.lookahead.opacity, 0.5);
        assert_eq!(config.lookahead.scale, 0.96);
    }
}
