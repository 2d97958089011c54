//! Replays page enhancement against a saved records page.
//!
//! ```text
//! mngr-enhance page.html --url 'http://localhost/tables/public/users/records?sort_column=name' \
//!     --click 'c-table thead th[data-column=email]' --dblclick 'c-table tbody tr' \
//!     --columns id,name,email
//! ```

use std::fs::{self, File};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{ArgAction, ArgMatches, CommandFactory, FromArgMatches, Parser, ValueEnum};
use log::LevelFilter;
use mngr_enhance::{Enhancer, EnhancerConfig, KeyScheme, Location, Report, SortOrder};
use pagedom::{Document, Event, Markup, Selector};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode, WriteLogger};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum SchemeArg {
    /// Rows carry data-schema, data-table and data-record.
    Attribute,
    /// Rows carry data-table-oid and data-record-id.
    Identifier,
}

impl From<SchemeArg> for KeyScheme {
    fn from(arg: SchemeArg) -> Self {
        match arg {
            SchemeArg::Attribute => KeyScheme::AttributeKeyed,
            SchemeArg::Identifier => KeyScheme::IdentifierKeyed,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "mngr-enhance", version, about)]
struct Cli {
    /// Saved HTML of the page.
    html: PathBuf,

    /// URL the page was served from.
    #[arg(long)]
    url: String,

    /// Enhancer configuration file (TOML).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the configured key scheme.
    #[arg(long, value_enum)]
    scheme: Option<SchemeArg>,

    /// Single-click the first element matching SELECTOR. Clicks replay in
    /// command-line order, interleaved with --dblclick.
    #[arg(long, value_name = "SELECTOR")]
    click: Vec<String>,

    /// Double-click the first element matching SELECTOR.
    #[arg(long = "dblclick", value_name = "SELECTOR")]
    double_click: Vec<String>,

    /// Table columns in order. Each navigation is followed by the sort order
    /// the server resolves for it.
    #[arg(long, value_name = "COLUMN", value_delimiter = ',')]
    columns: Vec<String>,

    /// Write logs to this file instead of stderr.
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

/// One replayed click: `detail` is the click counter the event carries.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Click {
    selector: String,
    detail: u32,
}

impl Click {
    fn label(&self) -> &'static str {
        if self.detail >= 2 { "dblclick" } else { "click" }
    }
}

/// `--click` and `--dblclick` values in the order they were given.
fn ordered_clicks(matches: &ArgMatches) -> Vec<Click> {
    let mut clicks = Vec::new();

    for (id, detail) in [("click", 1), ("double_click", 2)] {
        let (Some(indices), Some(values)) =
            (matches.indices_of(id), matches.get_many::<String>(id))
        else {
            continue;
        };

        clicks.extend(indices.zip(values).map(|(index, selector)| {
            (
                index,
                Click {
                    selector: selector.clone(),
                    detail,
                },
            )
        }));
    }

    clicks.sort_by_key(|(index, _)| *index);
    clicks.into_iter().map(|(_, click)| click).collect()
}

fn main() {
    let matches = Cli::command().get_matches();
    let clicks = ordered_clicks(&matches);
    let cli = match Cli::from_arg_matches(&matches) {
        Ok(cli) => cli,
        Err(e) => e.exit(),
    };

    if let Err(e) = run(cli, &clicks) {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run(cli: Cli, clicks: &[Click]) -> Result<()> {
    init_logging(cli.verbose, cli.log_file.as_deref())?;

    let mut config = match &cli.config {
        Some(path) => EnhancerConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => EnhancerConfig::default(),
    };
    if let Some(scheme) = cli.scheme {
        config = config.with_scheme(scheme.into());
    }

    let enhancer = Enhancer::new(config).context("building enhancer")?;
    let location = Location::parse(&cli.url).with_context(|| format!("parsing url {}", cli.url))?;
    let html = fs::read_to_string(&cli.html)
        .with_context(|| format!("reading {}", cli.html.display()))?;

    let mut document = Document::parsed(Markup::document(&html));
    let report = enhancer.enhance(&mut document, &location);
    print_report(&report);

    log::debug!(
        "replaying {} clicks, {} double-clicks",
        cli.click.len(),
        cli.double_click.len()
    );
    for click in clicks {
        let label = click.label();
        let selector_text = click.selector.as_str();
        let selector = Selector::parse(selector_text)
            .with_context(|| format!("parsing selector {selector_text:?}"))?;

        let Some(target) = document.query_selector(&selector).map(|el| el.id.clone()) else {
            log::warn!("no element matches {selector_text:?}");
            println!("{label} {selector_text}: no element");
            continue;
        };

        let event = Event::click(target, click.detail);
        let Some(navigation) = enhancer.handle_click(&document, &location, &event) else {
            println!("{label} {selector_text}: no navigation");
            continue;
        };
        println!("{label} {selector_text}: {navigation}");

        if !cli.columns.is_empty() {
            let params = navigation.into_location().params();
            match SortOrder::resolve(&params, cli.columns.as_slice()) {
                Some(order) => println!("  server order: {} {}", order.column, order.direction),
                None => println!("  server order: -"),
            }
        }
    }

    Ok(())
}

fn print_report(report: &Report) {
    println!("nav link: {}", report.nav_link.as_deref().unwrap_or("-"));
    println!("tab link: {}", report.tab_link.as_deref().unwrap_or("-"));
    match &report.sorted_header {
        Some((id, direction)) => println!("sorted header: {id} ({direction})"),
        None => println!("sorted header: -"),
    }
    println!(
        "bound: {} rows, {} headers",
        report.bound_rows, report.bound_headers
    );
}

fn init_logging(verbose: u8, log_file: Option<&Path>) -> Result<()> {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    let result = match log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("creating log file {}", path.display()))?;
            WriteLogger::init(level, Config::default(), file)
        }
        None => TermLogger::init(level, Config::default(), TerminalMode::Stderr, ColorChoice::Auto),
    };

    result.context("initializing logger")
}
