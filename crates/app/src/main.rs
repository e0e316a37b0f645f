use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use client::ClientConfig;
use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use quiz_core::model::Language;
use services::{AppServices, Clock};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use ui::{App, UiApp, build_app_context};

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    MissingCatalog,
    InvalidLanguage { raw: String },
    InvalidTimeBudget { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::MissingCatalog => write!(f, "offline requires --catalog <json>"),
            ArgsError::InvalidLanguage { raw } => write!(f, "unsupported --language value: {raw}"),
            ArgsError::InvalidTimeBudget { raw } => {
                write!(f, "invalid --time-budget value: {raw}")
            }
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
    services: AppServices,
    language: Language,
}

impl UiApp for DesktopApp {
    fn services(&self) -> AppServices {
        self.services.clone()
    }

    fn initial_language(&self) -> Language {
        self.language
    }
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- ui      [--server <url>] [--language <code>] [--time-budget <secs>]");
    eprintln!("  cargo run -p app -- offline --catalog <json> [--language <code>] [--time-budget <secs>]");
    eprintln!();
    eprintln!("Defaults for ui:");
    eprintln!("  --server {}", client::DEFAULT_SERVER_URL);
    eprintln!();
    eprintln!("Environment (a .env file is read too):");
    eprintln!("  QUIZ_SERVER_URL, QUIZ_LANGUAGE, QUIZ_TIME_BUDGET, RUST_LOG");
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Ui,
    Offline,
}

impl Command {
    fn from_arg(arg: &str) -> Option<Self> {
        match arg {
            "ui" => Some(Self::Ui),
            "offline" => Some(Self::Offline),
            _ => None,
        }
    }
}

#[derive(Debug, Default)]
struct Args {
    server: Option<String>,
    catalog: Option<PathBuf>,
    language: Option<Language>,
    time_budget: Option<u32>,
}

fn parse_language(raw: String) -> Result<Language, ArgsError> {
    raw.parse()
        .map_err(|_| ArgsError::InvalidLanguage { raw })
}

fn parse_time_budget(raw: String) -> Result<u32, ArgsError> {
    raw.trim()
        .parse()
        .map_err(|_| ArgsError::InvalidTimeBudget { raw })
}

impl Args {
    fn parse(
        cmd: Command,
        args: &mut impl Iterator<Item = String>,
    ) -> Result<Self, ArgsError> {
        let mut parsed = Args {
            server: std::env::var("QUIZ_SERVER_URL")
                .ok()
                .filter(|value| !value.trim().is_empty()),
            time_budget: std::env::var("QUIZ_TIME_BUDGET")
                .ok()
                .and_then(|value| value.trim().parse().ok()),
            ..Args::default()
        };

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--server" if cmd == Command::Ui => {
                    parsed.server = Some(require_value(args, "--server")?);
                }
                "--catalog" if cmd == Command::Offline => {
                    parsed.catalog = Some(PathBuf::from(require_value(args, "--catalog")?));
                }
                "--language" => {
                    parsed.language = Some(parse_language(require_value(args, "--language")?)?);
                }
                "--time-budget" => {
                    parsed.time_budget =
                        Some(parse_time_budget(require_value(args, "--time-budget")?)?);
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        if cmd == Command::Offline && parsed.catalog.is_none() {
            return Err(ArgsError::MissingCatalog);
        }
        Ok(parsed)
    }

    /// Flag, then the saved preference, then the system locale.
    fn language(&self) -> Language {
        if let Some(language) = self.language {
            return language;
        }
        let saved = std::env::var("QUIZ_LANGUAGE").ok();
        let locale = std::env::var("LANG").ok();
        Language::detect(saved.as_deref(), locale.as_deref())
    }
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "services=info,client=info,app=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv: Vec<String> = std::env::args().skip(1).collect();

    // No subcommand means the networked UI.
    let cmd = match argv.first().map(String::as_str) {
        None => Command::Ui,
        Some("--help" | "-h") => {
            print_usage();
            return Ok(());
        }
        Some(first) if first.starts_with("--") => Command::Ui,
        Some(first) => Command::from_arg(first).ok_or_else(|| {
            eprintln!("unknown subcommand: {first}");
            print_usage();
            ArgsError::UnknownArg(first.to_string())
        })?,
    };

    if !argv.is_empty() && !argv[0].starts_with("--") {
        argv.remove(0);
    }

    let mut iter = argv.into_iter();
    let parsed = Args::parse(cmd, &mut iter).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    let clock = Clock::system();
    let services = match (cmd, parsed.catalog.as_deref()) {
        (Command::Offline, Some(path)) => AppServices::offline(path, clock)?,
        (Command::Offline, None) => return Err(ArgsError::MissingCatalog.into()),
        (Command::Ui, _) => {
            let config = match parsed.server.as_deref() {
                Some(url) => ClientConfig::new(url)?,
                None => ClientConfig::from_env()?,
            };
            tracing::info!("using quiz server {}", config.base_url);
            AppServices::http(config, clock)?
        }
    }
    .with_default_time_budget(parsed.time_budget);

    let language = parsed.language();
    tracing::info!("starting quiz app ({:?}, language {})", cmd, language);

    let app: Arc<dyn UiApp> = Arc::new(DesktopApp { services, language });
    let context = build_app_context(&app);

    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Quiz")
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
    if let Err(e) = dotenvy::dotenv() {
        if !e.not_found() {
            eprintln!("ignoring .env: {e}");
        }
    }
    init_tracing();

    if let Err(err) = run().await {
        eprintln!("{err}");
        std::process::exit(2);
    }
}
