use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use oedipus_core::games::ChorusMode;
use oedipus_core::model::Content;
use services::{AppConfig, AppServices, ChorusPicker, ContentSource, QuizTimer};
use tracing::info;
use tracing_subscriber::EnvFilter;
use ui::{App, UiApp, build_app_context};

const DEFAULT_LOG_FILTER: &str = "oedipus=info,services=info,ui=info";

#[derive(Debug, PartialEq, Eq)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidQuizDelay { raw: String },
    InvalidContentPath { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidQuizDelay { raw } => {
                write!(f, "invalid --quiz-delay-ms value: {raw}")
            }
            ArgsError::InvalidContentPath { raw } => write!(f, "invalid --content value: {raw:?}"),
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
}

impl UiApp for DesktopApp {
    fn content(&self) -> Arc<Content> {
        self.services.content()
    }

    fn quiz_timer(&self) -> QuizTimer {
        self.services.quiz_timer()
    }

    fn chorus(&self) -> ChorusPicker {
        self.services.chorus()
    }
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  oedipus [--content <path>] [--quiz-delay-ms <n>] [--no-repeat-chorus] [--check]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --content <path>      load page content from a JSON file instead of the bundled copy");
    eprintln!("  --quiz-delay-ms <n>   pause after a quiz answer before the next question (default 2000)");
    eprintln!("  --no-repeat-chorus    never show the same chorus quote twice in a row");
    eprintln!("  --check               validate the content and exit");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  OEDIPUS_CONTENT, OEDIPUS_QUIZ_DELAY_MS, RUST_LOG");
}

#[derive(Debug, PartialEq, Eq)]
enum Command {
    Launch(AppConfig),
    Check(AppConfig),
    Help,
}

fn parse_content_path(raw: String) -> Result<ContentSource, ArgsError> {
    if raw.trim().is_empty() {
        return Err(ArgsError::InvalidContentPath { raw });
    }
    Ok(ContentSource::File(PathBuf::from(raw)))
}

fn parse_quiz_delay(raw: String) -> Result<Duration, ArgsError> {
    raw.trim()
        .parse::<u64>()
        .map(Duration::from_millis)
        .map_err(|_| ArgsError::InvalidQuizDelay { raw })
}

/// Resolve flags over environment defaults. `env` looks up a variable by name.
fn parse_args(
    args: impl IntoIterator<Item = String>,
    env: impl Fn(&str) -> Option<String>,
) -> Result<Command, ArgsError> {
    let mut config = AppConfig::default();
    if let Some(raw) = env("OEDIPUS_CONTENT") {
        config.content = parse_content_path(raw)?;
    }
    if let Some(raw) = env("OEDIPUS_QUIZ_DELAY_MS") {
        config.quiz_delay = parse_quiz_delay(raw)?;
    }

    let mut check = false;
    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--content" => {
                config.content = parse_content_path(require_value(&mut args, "--content")?)?;
            }
            "--quiz-delay-ms" => {
                config.quiz_delay = parse_quiz_delay(require_value(&mut args, "--quiz-delay-ms")?)?;
            }
            "--no-repeat-chorus" => config.chorus_mode = ChorusMode::NoImmediateRepeat,
            "--check" => check = true,
            "--help" | "-h" => return Ok(Command::Help),
            _ => return Err(ArgsError::UnknownArg(arg)),
        }
    }

    Ok(if check {
        Command::Check(config)
    } else {
        Command::Launch(config)
    })
}

fn init_logging() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let command = parse_args(std::env::args().skip(1), |key| std::env::var(key).ok())
        .inspect_err(|err| {
            eprintln!("{err}");
            print_usage();
        })?;

    let config = match command {
        Command::Help => {
            print_usage();
            return Ok(());
        }
        Command::Check(config) => {
            let services = AppServices::new(&config)?;
            let content = services.content();
            println!(
                "content ok: {} catalog entries, {} quiz questions, {} scenarios",
                content.catalog.len(),
                content.games.quiz.len(),
                content.games.prophecy.len()
            );
            return Ok(());
        }
        Command::Launch(config) => config,
    };

    let services = AppServices::new(&config)?;
    info!(source = ?config.content, "launching desktop window");
    let app: Arc<dyn UiApp> = Arc::new(DesktopApp { services });
    let context = build_app_context(&app);

    // Some tao backends start the window pinned above others; keep it a normal window.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Oedipus Rex")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

fn main() {
    init_logging();
    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(2);
    }
}
