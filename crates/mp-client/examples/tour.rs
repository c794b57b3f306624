//! Tour of every MetalpriceAPI endpoint
//!
//! Reads `METALPRICE_API_KEY` (and optionally `METALPRICE_REGION`) from the
//! environment or a `.env` file, then calls each endpoint once and prints
//! the payload.
//!
//! ```sh
//! METALPRICE_API_KEY=... cargo run -p mp-client --example tour
//! ```

use mp_client::{
  CaratOptions, ChangeOptions, ConvertOptions, HistoricalOptions, LiveOptions, MetalpriceClient,
  TimeframeOptions,
};
use mp_core::Config;

const METALS: [&str; 4] = ["XAU", "XAG", "XPD", "XPT"];

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
  // Initialize logging
  tracing_subscriber::fmt::init();
  dotenvy::dotenv().ok();

  let config = Config::from_env().map_err(|e| {
    eprintln!("Set METALPRICE_API_KEY to run this example");
    e
  })?;
  let client = MetalpriceClient::from_config(config)?;

  let symbols = client.list_symbols().await?;
  println!("{} symbols available", symbols.data.symbols.len());

  let live = client.fetch_live(&LiveOptions::default().base("USD").currencies(METALS)).await?;
  println!("Live: {:#?}", live.data);

  let historical = client
    .fetch_historical("2024-02-05", &HistoricalOptions::default().base("USD").currencies(METALS))
    .await?;
  println!("Historical: {:#?}", historical.data);

  let converted = client
    .convert("USD", "EUR", 100.0, &ConvertOptions::default().date("2024-02-05"))
    .await?;
  println!("100 USD = {} EUR", converted.data.result);

  let timeframe = client
    .fetch_timeframe(
      "2024-02-05",
      "2024-02-06",
      &TimeframeOptions::default().base("USD").currencies(METALS),
    )
    .await?;
  for (date, rates) in &timeframe.data.rates {
    println!("{}: {:?}", date, rates);
  }

  let change = client
    .fetch_change("2024-02-05", "2024-02-06", &ChangeOptions::default().base("USD").currencies(METALS))
    .await?;
  for (code, delta) in &change.data.rates {
    println!("{}: {:+.4}%", code, delta.change_pct);
  }

  let carat = client.fetch_carat(&CaratOptions::default().base("USD").date("2024-02-06")).await?;
  println!("Carat: {:#?}", carat.data.data);

  let usage = client.fetch_usage().await?;
  println!(
    "Plan {}: {} of {} requests used",
    usage.data.result.plan, usage.data.result.used, usage.data.result.total
  );

  Ok(())
}
