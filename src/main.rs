//! Command-line front end.
//!
//! Loads a JSON dataset, applies the filter panel inputs given as arguments,
//! runs the search and prints the requested page of the table.
//!
//! ```text
//! searchlist accounts.json --industry Energy --from 2024-01-01 \
//!     --sort Name --direction desc --page 2 --page-size 20
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use chrono::NaiveDate;
use clap::Parser;

use searchlist::app::{FilterField, SortDirection};
use searchlist::observability::init_tracing;
use searchlist::source::{JsonFileSource, SourceWorker};
use searchlist::{initialize, Config, Event, Runtime};

#[derive(Debug, Parser)]
#[command(name = "searchlist", version, about = "Search, filter, sort and page records from a JSON dataset")]
struct Cli {
    /// JSON dataset to query.
    #[arg(value_name = "DATASET")]
    dataset: PathBuf,

    /// TOML configuration file.
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Free text matched against the record name.
    #[arg(short, long)]
    name: Option<String>,

    /// Category to match exactly.
    #[arg(short, long)]
    industry: Option<String>,

    /// Earliest created date (YYYY-MM-DD).
    #[arg(long, value_parser = parse_date)]
    from: Option<String>,

    /// Latest created date (YYYY-MM-DD).
    #[arg(long, value_parser = parse_date)]
    to: Option<String>,

    /// Field to sort by; enables column sorting.
    #[arg(short, long, value_name = "FIELD")]
    sort: Option<String>,

    #[arg(short, long, default_value_t = SortDirection::Ascending)]
    direction: SortDirection,

    /// Text to find in any column of the fetched records; enables table search.
    #[arg(short, long, value_name = "TEXT")]
    find: Option<String>,

    /// 1-based page to show.
    #[arg(short, long, default_value_t = 1)]
    page: usize,

    /// Rows per page; overrides the configuration.
    #[arg(long)]
    page_size: Option<usize>,

    /// Output width in characters.
    #[arg(short, long, default_value_t = 100)]
    width: usize,

    /// Print the parameterized filter query before the table.
    #[arg(long)]
    show_query: bool,
}

fn parse_date(value: &str) -> Result<String, String> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map(|_| value.to_string())
        .map_err(|e| format!("expected YYYY-MM-DD: {e}"))
}

fn load_config(cli: &Cli) -> searchlist::Result<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::from_toml_file(path)?,
        None => Config::default(),
    };

    if let Some(page_size) = cli.page_size.filter(|size| *size > 0) {
        config.page_size = page_size;
    }
    if cli.sort.is_some() {
        config.disable_sort = false;
    }
    if cli.find.is_some() {
        config.disable_search = false;
    }
    Ok(config)
}

fn run(cli: &Cli) -> searchlist::Result<()> {
    let config = load_config(cli)?;
    init_tracing(&config);

    let source = JsonFileSource::from_path(&cli.dataset)?;
    let mut runtime = Runtime::new(initialize(&config), SourceWorker::new(Box::new(source)));

    runtime.dispatch(Event::Mount)?;

    let inputs = [
        (FilterField::FreeText, &cli.name),
        (FilterField::Category, &cli.industry),
        (FilterField::FromDate, &cli.from),
        (FilterField::ToDate, &cli.to),
    ];
    for (field, value) in inputs {
        if let Some(value) = value {
            runtime.dispatch(Event::FilterChanged {
                field,
                value: value.clone(),
            })?;
        }
    }

    runtime.dispatch(Event::Search)?;

    if let Some(field) = &cli.sort {
        runtime.dispatch(Event::Sort {
            field: field.clone(),
            direction: cli.direction,
        })?;
    }
    if let Some(text) = &cli.find {
        runtime.dispatch(Event::TableSearchText(text.clone()))?;
    }
    for _ in 1..cli.page {
        if !runtime.dispatch(Event::NextPage)? {
            break;
        }
    }

    if cli.show_query {
        let bound = runtime.state().table.criteria().filter_expression.bind();
        println!("WHERE {}", bound.text);
        for (index, param) in bound.params.iter().enumerate() {
            println!("  :p{index} = {param}");
        }
        println!();
    }

    println!("{}", runtime.render(cli.width));

    match runtime.state().table.failure() {
        Some(failure) => Err(failure),
        None => Ok(()),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "searchlist failed");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
