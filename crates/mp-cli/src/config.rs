use anyhow::{Context, Result};
use clap::Args;
use mp_core::{Config as CoreConfig, Region};

/// Connection settings; each flag falls back to its environment variable
#[derive(Args, Debug, Clone)]
pub struct ConnectionArgs {
  /// MetalpriceAPI key
  #[arg(long, env = "METALPRICE_API_KEY", hide_env_values = true, global = true)]
  pub api_key: Option<String>,

  /// Regional host: primary or alternate (eu). Unknown values mean primary.
  #[arg(long, env = "METALPRICE_REGION", default_value = "primary", global = true)]
  pub region: String,

  /// Request timeout in seconds
  #[arg(long, env = "METALPRICE_TIMEOUT_SECS", default_value_t = mp_core::DEFAULT_TIMEOUT_SECS, global = true)]
  pub timeout: u64,

  /// Override the primary host
  #[arg(long, env = "METALPRICE_BASE_URL", global = true, hide = true)]
  pub base_url: Option<String>,

  /// Override the alternate host
  #[arg(long, env = "METALPRICE_EU_BASE_URL", global = true, hide = true)]
  pub eu_base_url: Option<String>,
}

impl ConnectionArgs {
  pub fn to_config(&self) -> Result<CoreConfig> {
    let api_key = self
      .api_key
      .clone()
      .filter(|k| !k.is_empty())
      .context("METALPRICE_API_KEY environment variable not set (or pass --api-key)")?;

    let mut config = CoreConfig::default_with_key(api_key);
    config.region = Region::from(self.region.as_str());
    config.timeout_secs = self.timeout;
    if let Some(url) = &self.base_url {
      config.primary_url = url.clone();
    }
    if let Some(url) = &self.eu_base_url {
      config.alternate_url = url.clone();
    }
    config.validate().context("Invalid MetalpriceAPI configuration")?;
    Ok(config)
  }
}
