/*
 *
 *
 *
 *
 * MIT License
 * Copyright (c) 2025. Dwight J. Browne
 * dwight[-dot-]browne[-at-]dwightjbrowne[-dot-]com
 *
 *
 * Permission is hereby granted, free of charge, to any person obtaining a copy
 * of this software and associated documentation files (the "Software"), to deal
 * in the Software without restriction, including without limitation the rights
 * to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
 * copies of the Software, and to permit persons to whom the Software is
 * furnished to do so, subject to the following conditions:
 *
 * The above copyright notice and this permission notice shall be included in all
 * copies or substantial portions of the Software.
 *
 * THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
 * IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
 * FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
 * AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
 * LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
 * OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
 * SOFTWARE.
 */

use anyhow::Result;
use clap::Parser;
use dotenvy::dotenv;
use mp_client::MetalpriceClient;

mod commands;
use commands::Command;

mod config;
use config::ConnectionArgs;

#[derive(Parser, Debug)]
#[command(author, version, about = "Query MetalpriceAPI from the command line", long_about = None)]
#[command(name = "metalprice")]
#[command(propagate_version = true)]
struct Cli {
  #[command(subcommand)]
  command: Command,

  #[command(flatten)]
  connection: ConnectionArgs,

  /// Print JSON on a single line
  #[arg(long, global = true)]
  compact: bool,

  /// Verbose output
  #[arg(short, long, global = true)]
  verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
  // Load environment variables before clap reads its env fallbacks
  dotenv().ok();

  // Parse CLI arguments
  let cli = Cli::parse();

  // Initialize logging
  let log_level = if cli.verbose { "debug" } else { "warn" };
  tracing_subscriber::fmt().with_env_filter(log_level).with_writer(std::io::stderr).init();

  let config = cli.connection.to_config()?;
  let client = MetalpriceClient::from_config(config)?;

  commands::execute(cli.command, &client, cli.compact).await
}

#[cfg(test)]
mod tests {
  use super::*;
  use mp_core::{Region, Unit};

  fn parse(args: &[&str]) -> Cli {
    let mut argv = vec!["metalprice", "--api-key", "cli_key"];
    argv.extend_from_slice(args);
    Cli::try_parse_from(argv).expect("arguments should parse")
  }

  #[test]
  fn test_live_currencies_are_split() {
    let cli = parse(&["live", "--base", "USD", "--currencies", "XAU,XAG", "--unit", "gram"]);
    match cli.command {
      Command::Live { base, currencies, unit, .. } => {
        assert_eq!(base.as_deref(), Some("USD"));
        assert_eq!(currencies, vec!["XAU", "XAG"]);
        assert_eq!(unit, Some(Unit::Gram));
      }
      other => panic!("unexpected command {:?}", other),
    }
  }

  #[test]
  fn test_convert_positionals() {
    let cli = parse(&["convert", "USD", "EUR", "0", "--date", "2024-02-05"]);
    match cli.command {
      Command::Convert { from, to, amount, date, unit } => {
        assert_eq!((from.as_str(), to.as_str()), ("USD", "EUR"));
        assert_eq!(amount, 0.0);
        assert_eq!(date.as_deref(), Some("2024-02-05"));
        assert!(unit.is_none());
      }
      other => panic!("unexpected command {:?}", other),
    }
  }

  #[test]
  fn test_region_flag_is_permissive() {
    let cli = parse(&["--region", "eu", "usage"]);
    assert_eq!(cli.connection.to_config().unwrap().region, Region::Alternate);

    let cli = parse(&["usage", "--region", "nowhere"]);
    assert_eq!(cli.connection.to_config().unwrap().region, Region::Primary);
  }

  #[test]
  fn test_unknown_unit_is_rejected() {
    let result = Cli::try_parse_from(["metalprice", "--api-key", "k", "live", "--unit", "stone"]);
    assert!(result.is_err());
  }

  #[test]
  fn test_historical_requires_date() {
    assert!(Cli::try_parse_from(["metalprice", "--api-key", "k", "historical"]).is_err());
  }
}
