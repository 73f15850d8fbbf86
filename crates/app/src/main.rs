use std::fmt;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use quest_core::model::{Catalog, ParseSectionError, ResourceLibrary, Section};
use services::{Clock, QuestService};
use tracing::info;
use tracing_subscriber::EnvFilter;
use ui::{App, UiApp, build_app_context};

const DEFAULT_TITLE: &str = "Art & Literature Quest";
const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidSection(ParseSectionError),
    EmptyTitle,
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidSection(err) => write!(f, "invalid --section value: {err}"),
            ArgsError::EmptyTitle => write!(f, "--title cannot be empty"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

struct DesktopApp {
    title: String,
    start_section: Section,
    catalog: Arc<Catalog>,
    resources: Arc<ResourceLibrary>,
}

impl UiApp for DesktopApp {
    fn quest_title(&self) -> String {
        self.title.clone()
    }

    fn start_session(&self) -> QuestService {
        QuestService::new(Arc::clone(&self.catalog))
            .with_clock(Clock::system())
            .with_start_section(self.start_section)
    }

    fn resources(&self) -> Arc<ResourceLibrary> {
        Arc::clone(&self.resources)
    }
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--section <name>] [--title <text>] [--log <filter>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --section home   (one of home, tasks, resources, results)");
    eprintln!("  --title \"{DEFAULT_TITLE}\"");
    eprintln!("  --log {DEFAULT_LOG_FILTER}");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  QUEST_START_SECTION, QUEST_LOG");
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Args {
    section: Section,
    title: String,
    log_filter: String,
}

impl Args {
    /// Defaults with environment overrides applied.
    fn from_env() -> Result<Self, ArgsError> {
        let section = match std::env::var("QUEST_START_SECTION") {
            Ok(raw) => raw.parse().map_err(ArgsError::InvalidSection)?,
            Err(_) => Section::default(),
        };
        let log_filter =
            std::env::var("QUEST_LOG").unwrap_or_else(|_| DEFAULT_LOG_FILTER.to_string());

        Ok(Self {
            section,
            title: DEFAULT_TITLE.to_string(),
            log_filter,
        })
    }

    fn parse(mut self, args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--section" => {
                    let value = require_value(args, "--section")?;
                    self.section = value.parse().map_err(ArgsError::InvalidSection)?;
                }
                "--title" => {
                    let value = require_value(args, "--title")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::EmptyTitle);
                    }
                    self.title = value.trim().to_string();
                }
                "--log" => {
                    self.log_filter = require_value(args, "--log")?;
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(self)
    }
}

fn init_tracing(filter: &str) -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_new(filter)?;
    tracing_subscriber::fmt().with_env_filter(filter).init();
    Ok(())
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv = std::env::args().skip(1);
    let args = Args::from_env()
        .and_then(|defaults| defaults.parse(&mut argv))
        .map_err(|e| {
            eprintln!("{e}");
            print_usage();
            e
        })?;

    init_tracing(&args.log_filter)?;

    let catalog = Arc::new(Catalog::reference());
    let resources = Arc::new(ResourceLibrary::reference()?);
    info!(
        tasks = catalog.len(),
        points = catalog.total_points(),
        section = %args.section,
        "starting quest"
    );

    let app = DesktopApp {
        title: args.title.clone(),
        start_section: args.section,
        catalog,
        resources,
    };
    let context = build_app_context(Arc::new(app));

    // tao may open always-on-top in some macOS dev setups.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title(args.title)
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

#[tokio::main]
async fn main() {
    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(2);
    }
}
