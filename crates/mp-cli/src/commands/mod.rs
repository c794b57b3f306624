use anyhow::{Result, anyhow};
use clap::Subcommand;
use mp_client::{
  ApiResponse, CaratOptions, ChangeOptions, ConvertOptions, HistoricalOptions, HourlyOptions,
  LiveOptions, MetalpriceClient, OhlcOptions, TimeframeOptions, Unit,
};
use serde::Serialize;
use tracing::info;

fn parse_unit(s: &str) -> Result<Unit, String> {
  Unit::parse(s).ok_or_else(|| format!("unknown unit '{}', expected troy_oz, gram or kilogram", s))
}

#[derive(Subcommand, Debug)]
pub enum Command {
  /// List supported currency and metal codes
  Symbols,

  /// Latest rates
  Live {
    #[arg(short, long)]
    base: Option<String>,

    /// Comma separated codes, e.g. XAU,XAG
    #[arg(short, long, value_delimiter = ',')]
    currencies: Vec<String>,

    #[arg(short, long, value_parser = parse_unit)]
    unit: Option<Unit>,

    #[arg(long)]
    purity: Option<String>,

    #[arg(long)]
    math: Option<String>,
  },

  /// Rates for a past day
  Historical {
    /// Day in YYYY-MM-DD format
    date: String,

    #[arg(short, long)]
    base: Option<String>,

    #[arg(short, long, value_delimiter = ',')]
    currencies: Vec<String>,

    #[arg(short, long, value_parser = parse_unit)]
    unit: Option<Unit>,
  },

  /// Hourly rates
  Hourly {
    #[arg(short, long)]
    base: Option<String>,

    #[arg(long)]
    currency: Option<String>,

    #[arg(short, long, value_parser = parse_unit)]
    unit: Option<Unit>,

    #[arg(long)]
    start_date: Option<String>,

    #[arg(long)]
    end_date: Option<String>,

    #[arg(long)]
    math: Option<String>,

    #[arg(long)]
    date_type: Option<String>,
  },

  /// Open, high, low and close for a pair
  Ohlc {
    base: String,

    currency: String,

    #[arg(short, long)]
    date: Option<String>,

    #[arg(short, long, value_parser = parse_unit)]
    unit: Option<Unit>,

    #[arg(long)]
    date_type: Option<String>,
  },

  /// Convert an amount between currencies or metals
  Convert {
    from: String,

    to: String,

    amount: f64,

    #[arg(short, long)]
    date: Option<String>,

    #[arg(short, long, value_parser = parse_unit)]
    unit: Option<Unit>,
  },

  /// Daily rates between two dates
  Timeframe {
    start_date: String,

    end_date: String,

    #[arg(short, long)]
    base: Option<String>,

    #[arg(short, long, value_delimiter = ',')]
    currencies: Vec<String>,

    #[arg(short, long, value_parser = parse_unit)]
    unit: Option<Unit>,
  },

  /// Change between two dates
  Change {
    start_date: String,

    end_date: String,

    #[arg(short, long)]
    base: Option<String>,

    #[arg(short, long, value_delimiter = ',')]
    currencies: Vec<String>,

    #[arg(long)]
    date_type: Option<String>,
  },

  /// Gold prices per carat
  Carat {
    #[arg(short, long)]
    base: Option<String>,

    #[arg(long)]
    currency: Option<String>,

    #[arg(short, long)]
    date: Option<String>,
  },

  /// Quota usage for the current plan
  Usage,
}

pub async fn execute(cmd: Command, client: &MetalpriceClient, compact: bool) -> Result<()> {
  match cmd {
    Command::Symbols => print(client.list_symbols().await?, compact),
    Command::Live { base, currencies, unit, purity, math } => {
      let options = LiveOptions { base, currencies, unit, purity, math };
      print(client.fetch_live(&options).await?, compact)
    }
    Command::Historical { date, base, currencies, unit } => {
      let options = HistoricalOptions { base, currencies, unit };
      print(client.fetch_historical(&date, &options).await?, compact)
    }
    Command::Hourly { base, currency, unit, start_date, end_date, math, date_type } => {
      let options = HourlyOptions { base, currency, unit, start_date, end_date, math, date_type };
      print(client.fetch_hourly(&options).await?, compact)
    }
    Command::Ohlc { base, currency, date, unit, date_type } => {
      let options = OhlcOptions { date, unit, date_type };
      print(client.fetch_ohlc(&base, &currency, &options).await?, compact)
    }
    Command::Convert { from, to, amount, date, unit } => {
      if !amount.is_finite() {
        return Err(anyhow!("amount must be a finite number"));
      }
      let options = ConvertOptions { date, unit };
      print(client.convert(&from, &to, amount, &options).await?, compact)
    }
    Command::Timeframe { start_date, end_date, base, currencies, unit } => {
      let options = TimeframeOptions { base, currencies, unit };
      print(client.fetch_timeframe(&start_date, &end_date, &options).await?, compact)
    }
    Command::Change { start_date, end_date, base, currencies, date_type } => {
      let options = ChangeOptions { base, currencies, date_type };
      print(client.fetch_change(&start_date, &end_date, &options).await?, compact)
    }
    Command::Carat { base, currency, date } => {
      let options = CaratOptions { base, currency, date };
      print(client.fetch_carat(&options).await?, compact)
    }
    Command::Usage => print(client.fetch_usage().await?, compact),
  }
}

fn print<T: Serialize>(response: ApiResponse<T>, compact: bool) -> Result<()> {
  info!("HTTP {}", response.status);
  let rendered = if compact {
    serde_json::to_string(&response.data)?
  } else {
    serde_json::to_string_pretty(&response.data)?
  };
  println!("{}", rendered);
  Ok(())
}
