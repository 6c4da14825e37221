mod logging;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand};
use ganzhi_base::{
    FourPillars, Gender, analyze_wuxing_full, analyze_wuxing_simple, breakdown,
    detect_combinations, ten_god_distribution, ten_god_frequency,
};
use ganzhi_config::Config;
use ganzhi_core::{CalendarLookup, TableCalendar, TableSolarTerms};
use ganzhi_search::{analyze_chart, four_pillars_for, luck_schedule};
use ganzhi_time::CivilTime;
use serde::Serialize;
use serde_json::json;
use tracing::debug;

const DEFAULT_CONFIG: &str = "ganzhi.toml";

#[derive(Parser)]
#[command(name = "ganzhi", about = "Four Pillars chart CLI", version)]
struct Cli {
    /// Config file (default: ./ganzhi.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Solar term table (JSON), overrides [data] solar_terms
    #[arg(long, global = true)]
    terms: Option<PathBuf>,
    /// Debug logging for the ganzhi crates
    #[arg(short, long, global = true)]
    verbose: bool,
    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pretty: bool,
    #[command(subcommand)]
    command: Commands,
}

/// A chart given either as a timestamp or as four pillar strings.
#[derive(Args, Debug)]
struct ChartInput {
    /// Local timestamp (YYYY-MM-DD HH:MM[:SS])
    #[arg(long, required_unless_present = "pillars", conflicts_with = "pillars")]
    date: Option<String>,
    /// Four pillars in year/month/day/hour order, e.g. "丙子 辛丑 癸亥 庚申"
    #[arg(long)]
    pillars: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Year, month, day and hour pillars for a timestamp
    Pillars {
        /// Local timestamp (YYYY-MM-DD HH:MM[:SS])
        #[arg(long)]
        date: String,
    },
    /// Five-element tally and per-pillar breakdown
    Wuxing {
        #[command(flatten)]
        input: ChartInput,
        /// Include hidden stems in the tally
        #[arg(long)]
        full: bool,
    },
    /// Branch combination patterns
    Combos {
        #[command(flatten)]
        input: ChartInput,
    },
    /// Ten-god distribution against the day master
    TenGods {
        #[command(flatten)]
        input: ChartInput,
    },
    /// Every classification of one chart
    Report {
        #[command(flatten)]
        input: ChartInput,
    },
    /// Luck cycles for a birth
    Luck {
        /// Local birth timestamp (YYYY-MM-DD HH:MM[:SS])
        #[arg(long)]
        date: String,
        /// male / female (m, f, 男, 女)
        #[arg(long)]
        gender: String,
        /// Number of cycles (default from [luck] count)
        #[arg(long)]
        count: Option<u32>,
    },
    /// Lunar date for a solar date
    Lunar {
        /// Solar date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
        /// Calendar table (JSON), overrides [data] calendar
        #[arg(long)]
        calendar: Option<PathBuf>,
    },
    /// Solar date for a lunar date
    Solar {
        /// Lunar date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
        /// Calendar table (JSON), overrides [data] calendar
        #[arg(long)]
        calendar: Option<PathBuf>,
    },
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(p) => Config::load(p).with_context(|| format!("loading config {}", p.display())),
        None if Path::new(DEFAULT_CONFIG).exists() => Config::load(Path::new(DEFAULT_CONFIG))
            .with_context(|| format!("loading config {DEFAULT_CONFIG}")),
        None => Ok(Config::default()),
    }
}

fn load_terms(cli_path: Option<&PathBuf>, config: &Config) -> Result<TableSolarTerms> {
    let Some(path) = cli_path.or(config.data.solar_terms.as_ref()) else {
        bail!("no solar term table: pass --terms or set [data] solar_terms");
    };
    TableSolarTerms::load(path).with_context(|| format!("loading solar terms {}", path.display()))
}

fn load_calendar(cli_path: Option<&PathBuf>, config: &Config) -> Result<TableCalendar> {
    let Some(path) = cli_path.or(config.data.calendar.as_ref()) else {
        bail!("no calendar table: pass --calendar or set [data] calendar");
    };
    TableCalendar::load(path).with_context(|| format!("loading calendar {}", path.display()))
}

fn parse_date(s: &str) -> Result<CivilTime> {
    s.parse().with_context(|| format!("invalid --date {s:?}"))
}

fn parse_pillars(s: &str) -> Result<FourPillars> {
    let parts: Vec<&str> = s.split_whitespace().collect();
    FourPillars::from_strs(&parts).with_context(|| format!("invalid --pillars {s:?}"))
}

/// Resolve a chart input; the term table is only loaded for timestamps.
fn resolve_chart(input: &ChartInput, cli: &Cli, config: &Config) -> Result<FourPillars> {
    match (&input.pillars, &input.date) {
        (Some(p), _) => parse_pillars(p),
        (None, Some(d)) => {
            let provider = load_terms(cli.terms.as_ref(), config)?;
            Ok(four_pillars_for(&provider, &parse_date(d)?)?)
        }
        (None, None) => bail!("either --date or --pillars is required"),
    }
}

fn emit<T: Serialize>(value: &T, pretty: bool) -> Result<()> {
    let out = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{out}");
    Ok(())
}

fn run(cli: &Cli, config: &Config) -> Result<()> {
    match &cli.command {
        Commands::Pillars { date } => {
            let provider = load_terms(cli.terms.as_ref(), config)?;
            let chart = four_pillars_for(&provider, &parse_date(date)?)?;
            emit(
                &json!({
                    "pillars": chart,
                    "year": chart.year,
                    "month": chart.month,
                    "day": chart.day,
                    "hour": chart.hour,
                }),
                cli.pretty,
            )
        }

        Commands::Wuxing { input, full } => {
            let chart = resolve_chart(input, cli, config)?;
            let tally = if *full {
                analyze_wuxing_full(&chart)
            } else {
                analyze_wuxing_simple(&chart)
            };
            emit(
                &json!({
                    "pillars": chart,
                    "tally": tally,
                    "missing": tally.missing(),
                    "breakdown": breakdown(&chart),
                }),
                cli.pretty,
            )
        }

        Commands::Combos { input } => {
            let chart = resolve_chart(input, cli, config)?;
            emit(&detect_combinations(&chart), cli.pretty)
        }

        Commands::TenGods { input } => {
            let chart = resolve_chart(input, cli, config)?;
            emit(
                &json!({
                    "day_master": chart.day_master(),
                    "distribution": ten_god_distribution(&chart),
                    "frequency": ten_god_frequency(&chart),
                }),
                cli.pretty,
            )
        }

        Commands::Report { input } => {
            let chart = resolve_chart(input, cli, config)?;
            emit(&analyze_chart(&chart), cli.pretty)
        }

        Commands::Luck {
            date,
            gender,
            count,
        } => {
            let provider = load_terms(cli.terms.as_ref(), config)?;
            let gender: Gender = gender.parse()?;
            let count = count.unwrap_or(config.luck.count);
            let schedule = luck_schedule(&provider, &parse_date(date)?, gender, count)?;
            emit(&schedule, cli.pretty)
        }

        Commands::Lunar { date, calendar } => {
            let cal = load_calendar(calendar.as_ref(), config)?;
            emit(
                &json!({ "solar": date, "lunar": cal.solar_to_lunar(date) }),
                cli.pretty,
            )
        }

        Commands::Solar { date, calendar } => {
            let cal = load_calendar(calendar.as_ref(), config)?;
            emit(
                &json!({ "lunar": date, "solar": cal.lunar_to_solar(date) }),
                cli.pretty,
            )
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;
    logging::init(&config.log.filter, cli.verbose);
    debug!(?config, "configuration");
    run(&cli, &config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_luck_command() {
        let cli = Cli::try_parse_from([
            "ganzhi",
            "luck",
            "--date",
            "1997-01-21 16:30",
            "--gender",
            "female",
            "--count",
            "4",
            "--terms",
            "terms.json",
        ])
        .unwrap();
        assert_eq!(cli.terms, Some(PathBuf::from("terms.json")));
        match cli.command {
            Commands::Luck { gender, count, .. } => {
                assert_eq!(gender, "female");
                assert_eq!(count, Some(4));
            }
            _ => panic!("expected luck"),
        }
    }

    #[test]
    fn chart_input_requires_one_source() {
        assert!(Cli::try_parse_from(["ganzhi", "combos"]).is_err());
        assert!(
            Cli::try_parse_from([
                "ganzhi",
                "combos",
                "--date",
                "1997-01-21",
                "--pillars",
                "丙子 辛丑 癸亥 庚申",
            ])
            .is_err()
        );
    }

    #[test]
    fn pillars_input_needs_no_tables() {
        let cli = Cli::try_parse_from(["ganzhi", "report", "--pillars", "丙子 辛丑 癸亥 庚申"])
            .unwrap();
        let Commands::Report { input } = &cli.command else {
            panic!("expected report");
        };
        let chart = resolve_chart(input, &cli, &Config::default()).unwrap();
        assert_eq!(chart.day_master().symbol(), "癸");
    }

    #[test]
    fn date_input_without_table_fails() {
        let cli = Cli::try_parse_from(["ganzhi", "ten-gods", "--date", "1997-01-21"]).unwrap();
        let Commands::TenGods { input } = &cli.command else {
            panic!("expected ten-gods");
        };
        assert!(resolve_chart(input, &cli, &Config::default()).is_err());
    }

    #[test]
    fn bad_pillars_rejected() {
        assert!(parse_pillars("丙子 辛丑 癸亥").is_err());
        assert!(parse_pillars("丙子 辛丑 癸亥 XX").is_err());
    }
}
