use std::{
    fmt::Display,
    io::{self, Write},
    process::ExitCode,
};

use anyhow::Context;
use chrono::{DateTime, Local, TimeZone, Utc};
use clap::Parser;
use jacket_core::{Config, ForecastError, ForecastSource, Report, WeatherApiClient};
use tracing::debug;

use crate::output;

/// Top-level CLI struct. The tool takes no arguments beyond `--help` and
/// `--version`; the location comes from the caller's IP address.
#[derive(Debug, Parser)]
#[command(name = "jacket", version, about = "Do you need a jacket today?")]
pub struct Cli {}

impl Cli {
    pub async fn run(self) -> anyhow::Result<ExitCode> {
        let config = match load_config(|name| std::env::var(name).ok(), &mut io::stdout())? {
            Ok(config) => config,
            Err(code) => return Ok(ExitCode::from(code)),
        };

        let client = WeatherApiClient::new(config).context("Failed to build HTTP client")?;

        let mut stdout = io::stdout();
        show(&client, Utc::now(), &Local, &mut stdout).await?;

        Ok(ExitCode::SUCCESS)
    }
}

/// Exit status when `WEATHER_API_KEY` is unset or empty.
pub(crate) const MISSING_KEY_EXIT: u8 = 1;

/// Resolve the configuration, or the exit status to stop with.
///
/// A missing key is reported on `out` and maps to exit code 1; nothing else
/// is attempted in that case.
pub(crate) fn load_config<F, W>(lookup: F, out: &mut W) -> io::Result<Result<Config, u8>>
where
    F: FnOnce(&str) -> Option<String>,
    W: Write,
{
    match Config::from_lookup(lookup) {
        Ok(config) => {
            debug!(?config, "configuration loaded");
            Ok(Ok(config))
        }
        Err(err) => {
            writeln!(out, "{err}")?;
            Ok(Err(MISSING_KEY_EXIT))
        }
    }
}

/// Fetch the forecast from `source` and print the report to `out` as of `now`.
///
/// A rejected request prints its status code before the error is returned.
pub(crate) async fn show<Tz, W>(
    source: &dyn ForecastSource,
    now: DateTime<Utc>,
    tz: &Tz,
    out: &mut W,
) -> anyhow::Result<()>
where
    Tz: TimeZone,
    Tz::Offset: Display,
    W: Write,
{
    let forecast = match source.fetch_forecast().await {
        Ok(forecast) => forecast,
        Err(ForecastError::Status(code)) => {
            writeln!(out, "Status code: {code}")?;
            return Err(ForecastError::Status(code).into());
        }
        Err(err) => return Err(err.into()),
    };

    let report = Report::build(&forecast, now, tz)?;
    output::render(&report, out).context("Failed to write report")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use jacket_core::{ForecastResponse, model::decode};

    #[derive(Debug)]
    enum FakeSource {
        Body(String),
        Status(u16),
    }

    #[async_trait]
    impl ForecastSource for FakeSource {
        async fn fetch_forecast(&self) -> Result<ForecastResponse, ForecastError> {
            match self {
                FakeSource::Body(body) => decode(body.as_bytes()),
                FakeSource::Status(code) => Err(ForecastError::Status(*code)),
            }
        }
    }

    fn paris() -> FakeSource {
        let two_pm = Utc.with_ymd_and_hms(2024, 6, 1, 14, 0, 0).unwrap();
        FakeSource::Body(
            serde_json::json!({
                "location": {"name": "Paris", "country": "France"},
                "current": {"temp_f": 72, "condition": {"text": "Sunny"}},
                "forecast": {"forecastday": [{"hour": [{
                    "time_epoch": two_pm.timestamp(),
                    "temp_f": 55,
                    "condition": {"text": "Sunny"},
                    "chance_of_rain": 10
                }]}]}
            })
            .to_string(),
        )
    }

    #[tokio::test]
    #[allow(clippy::await_holding_lock)]
    async fn show_prints_paris_report() {
        let _colors = output::force_colors(false);

        let now = Utc.with_ymd_and_hms(2024, 6, 1, 9, 0, 0).unwrap();
        let mut out = Vec::new();
        show(&paris(), now, &Utc, &mut out).await.expect("report renders");

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<_> = text.lines().collect();

        assert_eq!(lines[0], "You might need a jacket");
        assert_eq!(lines[1], "Paris, France: 72F, Sunny");

        let row: Vec<_> = lines[5].split('|').map(str::trim).filter(|c| !c.is_empty()).collect();
        assert_eq!(row, ["14:00", "55F", "10%", "Sunny"]);
    }

    #[tokio::test]
    async fn show_prints_status_code_on_rejection() {
        let mut out = Vec::new();
        let err = show(&FakeSource::Status(401), Utc::now(), &Utc, &mut out)
            .await
            .unwrap_err();

        assert_eq!(String::from_utf8(out).unwrap(), "Status code: 401\n");
        assert!(matches!(
            err.downcast_ref::<ForecastError>(),
            Some(ForecastError::Status(401))
        ));
    }

    #[tokio::test]
    async fn show_prints_nothing_on_decode_failure() {
        let mut out = Vec::new();
        let err = show(&FakeSource::Body("{}".into()), Utc::now(), &Utc, &mut out)
            .await
            .unwrap_err();

        assert!(out.is_empty());
        assert!(matches!(
            err.downcast_ref::<ForecastError>(),
            Some(ForecastError::Decode(_))
        ));
    }

    #[test]
    fn missing_api_key_exits_with_code_one() {
        let mut out = Vec::new();
        let code = load_config(|_| None, &mut out).unwrap().unwrap_err();

        assert_eq!(code, 1);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Missing WEATHER_API_KEY environment variable\n"
        );
    }

    #[test]
    fn empty_api_key_exits_with_code_one() {
        let mut out = Vec::new();
        let code = load_config(|_| Some(String::new()), &mut out).unwrap().unwrap_err();

        assert_eq!(code, MISSING_KEY_EXIT);
        assert!(!out.is_empty());
    }

    #[test]
    fn present_api_key_loads_silently() {
        let mut out = Vec::new();
        let config = load_config(|_| Some("KEY".to_string()), &mut out)
            .unwrap()
            .expect("key is present");

        assert_eq!(config.api_key, "KEY");
        assert!(out.is_empty());
    }

    #[test]
    fn cli_accepts_no_arguments() {
        assert!(Cli::try_parse_from(["jacket"]).is_ok());
        assert!(Cli::try_parse_from(["jacket", "--units", "metric"]).is_err());
        assert!(Cli::try_parse_from(["jacket", "London"]).is_err());
    }
}
