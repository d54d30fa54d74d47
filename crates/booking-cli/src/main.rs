//! `careops-slots` CLI — resolve bookable times from availability slots.
//!
//! ## Usage
//!
//! ```sh
//! # Times bookable on a date, slots JSON on stdin
//! curl -s $API/api/public/workspaces/acme/services/$ID/availability \
//!   | careops-slots slots --date 2026-03-16
//!
//! # Same, from a file, as a JSON array
//! careops-slots slots -i slots.json --date 2026-03-16 --json
//!
//! # Offer slots outside the default 08:00-19:30 picker range
//! careops-slots slots -i slots.json --date 2026-03-16 --cover
//!
//! # Check one time
//! careops-slots check -i slots.json --date 2026-03-16 --time 09:30
//!
//! # Weekdays with availability
//! careops-slots days -i slots.json
//!
//! # Ask the live API (base URL from --api-url or CAREOPS_API_URL,
//! # request timeout from CAREOPS_HTTP_TIMEOUT_SECS)
//! careops-slots fetch --workspace acme --service $ID --date 2026-03-16
//! ```

use std::io::{self, IsTerminal, Read};

use anyhow::{Context, Result};
use booking_client::{BookingClient, ClientConfig};
use booking_engine::slot::weekday_index;
use booking_engine::{AvailabilityResolver, SlotPolicy, SlotRecord, TimeGrid};
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};
use uuid::Uuid;

#[derive(Parser)]
#[command(
    name = "careops-slots",
    version,
    about = "Resolve bookable time slots from weekly availability"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log debug output to stderr (overrides RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Args)]
struct SlotSource {
    /// Slots JSON file (reads from stdin if omitted)
    #[arg(short, long)]
    input: Option<String>,
    /// Fail on invalid slot records instead of skipping them
    #[arg(long)]
    strict: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// List bookable start times on a date
    Slots {
        #[command(flatten)]
        source: SlotSource,
        /// Date to resolve (YYYY-MM-DD)
        #[arg(short, long)]
        date: NaiveDate,
        /// Print a JSON array instead of one time per line
        #[arg(long)]
        json: bool,
        /// Widen the picker grid to cover every slot
        #[arg(long)]
        cover: bool,
    },
    /// Check whether one time is bookable on a date
    Check {
        #[command(flatten)]
        source: SlotSource,
        /// Date to check (YYYY-MM-DD)
        #[arg(short, long)]
        date: NaiveDate,
        /// Time to check (HH:MM)
        #[arg(short, long)]
        time: String,
    },
    /// List weekdays that have availability
    Days {
        #[command(flatten)]
        source: SlotSource,
    },
    /// Load a service's availability from the booking API
    Fetch {
        /// Workspace slug
        #[arg(short, long)]
        workspace: String,
        /// Service type id
        #[arg(short, long)]
        service: Uuid,
        /// Date to resolve; lists available weekdays when omitted
        #[arg(short, long)]
        date: Option<NaiveDate>,
        /// Booking API base URL [default: $CAREOPS_API_URL or http://localhost:8000]
        #[arg(long)]
        api_url: Option<String>,
        /// Fail on invalid slot records instead of skipping them
        #[arg(long)]
        strict: bool,
        /// Print JSON instead of plain lines
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Slots {
            source,
            date,
            json,
            cover,
        } => {
            let mut resolver = load_resolver(&source)?;
            if cover {
                let grid = TimeGrid::covering(resolver.slots(), resolver.grid().step_minutes())
                    .context("Failed to build covering grid")?;
                resolver = resolver.with_grid(grid);
            }
            report_hidden(&resolver);
            print_times(&resolver, date, json)?;
        }
        Commands::Check { source, date, time } => {
            let resolver = load_resolver(&source)?;
            let available = resolver
                .is_time_available(date, &time)
                .with_context(|| format!("Failed to check {} on {}", time, date))?;
            println!("{}", if available { "available" } else { "unavailable" });
        }
        Commands::Days { source } => {
            let resolver = load_resolver(&source)?;
            print_days(&resolver, false)?;
        }
        Commands::Fetch {
            workspace,
            service,
            date,
            api_url,
            strict,
            json,
        } => {
            let mut config = ClientConfig::from_env();
            if let Some(api_url) = api_url {
                config.base_url = api_url;
            }
            let client =
                BookingClient::new(&config).context("Failed to create booking API client")?;
            let runtime = tokio::runtime::Runtime::new().context("Failed to start runtime")?;
            let resolver = runtime
                .block_on(client.load_resolver(&workspace, service, slot_policy(strict)))
                .with_context(|| format!("Failed to load availability for service {}", service))?;
            report_hidden(&resolver);
            match date {
                Some(date) => print_times(&resolver, date, json)?,
                None => print_days(&resolver, json)?,
            }
        }
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let env_filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    let _ = fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .compact()
        .with_ansi(io::stderr().is_terminal())
        .with_writer(io::stderr)
        .try_init();
}

fn slot_policy(strict: bool) -> SlotPolicy {
    if strict {
        SlotPolicy::Strict
    } else {
        SlotPolicy::Lenient
    }
}

fn load_resolver(source: &SlotSource) -> Result<AvailabilityResolver> {
    let json = read_input(source.input.as_deref())?;
    let records = SlotRecord::parse_list(&json).context("Failed to parse slots JSON")?;
    AvailabilityResolver::from_records(&records, slot_policy(source.strict))
        .context("Invalid availability slot")
}

fn report_hidden(resolver: &AvailabilityResolver) {
    for slot in resolver.hidden_by_grid() {
        tracing::warn!(
            day = %slot.day(),
            start = %slot.start(),
            end = %slot.end(),
            "slot has times the picker does not offer (use --cover)"
        );
    }
}

fn print_times(resolver: &AvailabilityResolver, date: NaiveDate, json: bool) -> Result<()> {
    let times = resolver.available_time_slots(Some(date));
    if json {
        println!("{}", serde_json::to_string(&times)?);
    } else if times.is_empty() {
        eprintln!("No times available on {}", date);
    } else {
        for time in times {
            println!("{}", time);
        }
    }
    Ok(())
}

fn print_days(resolver: &AvailabilityResolver, json: bool) -> Result<()> {
    let days = resolver.available_weekdays();
    if json {
        let indexes: Vec<u8> = days.iter().map(|d| weekday_index(*d)).collect();
        println!("{}", serde_json::to_string(&indexes)?);
    } else if days.is_empty() {
        eprintln!("No availability configured");
    } else {
        for day in days {
            println!("{}", day);
        }
    }
    Ok(())
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}
