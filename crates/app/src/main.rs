mod logging;

use std::fmt;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use services::PlannerService;
use tracing::info;
use ui::{App, UiApp, build_app_context};

const DEFAULT_TITLE: &str = "DayMaster";

#[derive(Debug, PartialEq, Eq)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidTitle { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidTitle { raw } => write!(f, "invalid --title value: {raw:?}"),
        }
    }
}

impl std::error::Error for ArgsError {}

/// Startup failure from argument parsing or logging setup.
type RunError = Box<dyn std::error::Error + Send + Sync>;

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

struct DesktopApp {
    title: String,
    planner: Arc<PlannerService>,
}

impl UiApp for DesktopApp {
    fn app_name(&self) -> &str {
        &self.title
    }

    fn planner(&self) -> Arc<PlannerService> {
        Arc::clone(&self.planner)
    }
}

#[derive(Debug, PartialEq, Eq)]
struct Args {
    log_filter: String,
    title: String,
    always_on_top: bool,
}

#[derive(Debug, PartialEq, Eq)]
enum Command {
    Run(Args),
    Help,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  daymaster [--log <filter>] [--title <text>] [--always-on-top]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --log {}", logging::DEFAULT_LOG_FILTER);
    eprintln!("  --title {DEFAULT_TITLE}");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  DAYMASTER_LOG, DAYMASTER_TITLE");
}

impl Command {
    /// Flags win over environment values, which win over defaults.
    fn parse(
        mut args: impl Iterator<Item = String>,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ArgsError> {
        let mut log_filter = env("DAYMASTER_LOG")
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| logging::DEFAULT_LOG_FILTER.to_string());
        let mut title = env("DAYMASTER_TITLE")
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_TITLE.to_string());
        let mut always_on_top = false;

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--log" => log_filter = require_value(&mut args, "--log")?,
                "--title" => {
                    let value = require_value(&mut args, "--title")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidTitle { raw: value });
                    }
                    title = value;
                }
                "--always-on-top" => always_on_top = true,
                "--help" | "-h" => return Ok(Self::Help),
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self::Run(Args {
            log_filter,
            title,
            always_on_top,
        }))
    }
}

fn run() -> Result<(), RunError> {
    let command = Command::parse(std::env::args().skip(1), |key| std::env::var(key).ok())
        .map_err(|e| {
            eprintln!("{e}");
            print_usage();
            e
        })?;

    let args = match command {
        Command::Help => {
            print_usage();
            return Ok(());
        }
        Command::Run(args) => args,
    };

    logging::enable_logging(&args.log_filter)?;

    // One session per process; it is dropped when the window closes.
    let planner = Arc::new(PlannerService::new());
    let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
        title: args.title.clone(),
        planner,
    });
    let context = build_app_context(&app);

    info!(title = %args.title, always_on_top = args.always_on_top, "launching desktop window");

    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title(args.title)
            .with_always_on_top(args.always_on_top),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(2);
    }
}
