//! One-shot token generation mode
//!
//! Loads settings, builds the bidder registry, runs a single generation pass
//! and renders the token JSON for stdout.

use crate::{
    BiddingTokenManager, Result, Settings,
    bidder::BidderRegistry,
    config::{BidderSpec, ConfigLoader, default_config_path},
    sdk::initialize_sdk,
};
use std::path::PathBuf;
use std::sync::Arc;

/// Arguments for generate mode
#[derive(Debug, Clone, Default)]
pub struct GenerateArgs {
    /// Settings file; falls back to the default location when it exists
    pub config: Option<PathBuf>,
    /// Extra bidders as `NAME` or `NAME=TOKEN`
    pub bidders: Vec<String>,
    /// Force advanced bidding off
    pub disable_bidding: bool,
}

/// Resolve settings from the config file, environment and CLI arguments
pub fn load_settings(args: &GenerateArgs) -> Result<Settings> {
    let config_path = match &args.config {
        Some(path) if !path.exists() => {
            return Err(crate::Error::config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }
        Some(path) => Some(path.clone()),
        None => default_config_path().filter(|path| path.exists()),
    };

    let mut settings = ConfigLoader::new().load(config_path.as_deref())?;

    for bidder in &args.bidders {
        settings.bidding.bidders.push(BidderSpec::parse(bidder)?);
    }

    if args.disable_bidding {
        settings.bidding.enabled = false;
    }

    Ok(settings)
}

/// Run a single generation pass and return the JSON to print
///
/// Prints `{}` when bidding is disabled, matching what ad-request assembly
/// would attach.
pub async fn run_generate_mode(settings: &Settings) -> anyhow::Result<String> {
    let configuration = BidderRegistry::from_specs(&settings.bidding.bidders)
        .into_configuration()
        .with_advanced_bidding_enabled(settings.bidding.enabled);

    let manager = Arc::new(BiddingTokenManager::new());
    let summary = initialize_sdk(&configuration, &manager).await?;

    tracing::debug!(?summary, "Generation pass finished");

    if !manager.is_bidding_enabled() {
        tracing::info!("Advanced bidding disabled, no tokens attached");
        return Ok("{}".to_string());
    }

    Ok(manager
        .current_token_map_as_json()
        .await
        .unwrap_or_else(|| "{}".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[tokio::test]
    async fn test_run_with_cli_bidders() {
        let args = GenerateArgs {
            config: None,
            bidders: vec!["AdNetworkA=tokenA".to_string(), "AdNetworkB".to_string()],
            disable_bidding: false,
        };

        let settings = load_settings(&args).unwrap();
        let output = run_generate_mode(&settings).await.unwrap();
        let json: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(json["AdNetworkA"], "tokenA");
        assert!(json.get("AdNetworkB").is_none());
    }

    #[tokio::test]
    async fn test_run_with_bidding_disabled() {
        let args = GenerateArgs {
            bidders: vec!["AdNetworkA=tokenA".to_string()],
            disable_bidding: true,
            ..Default::default()
        };

        let settings = load_settings(&args).unwrap();
        assert!(!settings.bidding.enabled);
        assert_eq!(run_generate_mode(&settings).await.unwrap(), "{}");
    }

    #[test]
    fn test_missing_explicit_config_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let args = GenerateArgs {
            config: Some(dir.path().join("missing.toml")),
            ..Default::default()
        };

        let err = load_settings(&args).unwrap_err();
        assert!(err.to_string().contains("Configuration file not found"));
    }

    #[tokio::test]
    async fn test_empty_token_in_config_file_is_omitted() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(
            temp_file,
            r#"
[[bidding.bidders]]
name = "EmptyToken"
token = ""

[[bidding.bidders]]
name = "AdNetworkA"
token = "tokenA"
        "#
        )
        .unwrap();

        let args = GenerateArgs {
            config: Some(temp_file.path().to_path_buf()),
            ..Default::default()
        };

        let settings = load_settings(&args).unwrap();
        let output = run_generate_mode(&settings).await.unwrap();
        assert_eq!(output, r#"{"AdNetworkA":"tokenA"}"#);
    }

    #[test]
    fn test_cli_bidders_append_to_file_bidders() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(
            temp_file,
            r#"
[[bidding.bidders]]
name = "FromFile"
token = "file_token"
        "#
        )
        .unwrap();

        let args = GenerateArgs {
            config: Some(temp_file.path().to_path_buf()),
            bidders: vec!["FromCli=cli_token".to_string()],
            disable_bidding: false,
        };

        let settings = load_settings(&args).unwrap();
        let names: Vec<&str> = settings
            .bidding
            .bidders
            .iter()
            .map(|b| b.name.as_str())
            .collect();
        assert_eq!(names, vec!["FromFile", "FromCli"]);
    }
}
