use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use dialoguer::Input;
use tracing::debug;

use scheduler::catalog::{self, models::Term};
use scheduler::{display, filter, ics, utils};

#[derive(Parser)]
#[clap(version, about, long_about = None)]
struct Args {
    /// The catalog of courses, as JSON (`-` to read stdin)
    #[clap(value_parser)]
    catalog: PathBuf,

    /// The term you want to build a schedule for, i.e.: F or fall
    #[clap(short, long, value_parser)]
    term: Option<Term>,

    /// Print the catalog with the parsed meeting times as JSON
    #[clap(short, long)]
    json: bool,

    /// Export the schedule to iCalendar format (.ics)
    #[clap(short, long, value_name = "FILE NAME")]
    export: Option<String>,

    /// First day of the term, i.e.: 2024-09-23
    #[clap(short, long)]
    first_day: Option<String>,

    /// Number of weeks in the term
    #[clap(
        short,
        long,
        default_value_t = 10,
        value_parser = clap::value_parser!(u32).range(1..=520)
    )]
    weeks: u32,

    /// Log level, overridden by RUST_LOG
    #[clap(short, long, default_value = "warn")]
    log_level: String,
}

fn main() -> Result<()> {
    let args = Args::parse();
    utils::init_logging(&args.log_level);

    let raw = catalog::load_path(&args.catalog)
        .with_context(|| format!("loading {}", args.catalog.display()))?;
    let catalog = catalog::enrich_schedule(&raw);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&catalog)?);
        return Ok(());
    }

    println!("{}", catalog.title);
    let term = match args.term {
        Some(term) => term,
        None => filter::term()?,
    };
    debug!(%term, "browsing");

    let selection = filter::courses(&catalog, term)?;

    if let Some(mut filename) = args.export {
        let date = match args.first_day {
            None => Input::<String>::new()
                .with_prompt(format!("First day of the {term} term (YYYY-MM-DD)"))
                .interact_text()?,
            Some(day) => day,
        };
        let first_day = ics::parse_first_day(&date)?;

        // Export the calendar
        let calendar = ics::build(selection.iter(), first_day, args.weeks)?;
        ics::export(&calendar, &mut filename)?;

        println!("Calendar exported => {filename}");
    } else {
        // Show the schedule
        println!("{}", display::table(selection.iter(), &selection));
    }

    Ok(())
}
