use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use services::config::parse_base_url;
use services::{
    Clock, HttpQuestionProvider, QuestionProvider, QuizConfig, QuizLoopService, QuizType,
    StaticQuestionProvider,
};
use tracing::info;
use tracing_subscriber::EnvFilter;
use ui::{App, UiApp, build_app_context};

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidQuizType { raw: String },
    InvalidBaseUrl { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidQuizType { raw } => write!(f, "invalid --type value: {raw:?}"),
            ArgsError::InvalidBaseUrl { raw } => write!(f, "invalid --base-url value: {raw}"),
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
    quiz_type: QuizType,
    quiz_loop: Arc<QuizLoopService>,
}

impl UiApp for DesktopApp {
    fn default_quiz_type(&self) -> QuizType {
        self.quiz_type.clone()
    }

    fn quiz_loop(&self) -> Arc<QuizLoopService> {
        Arc::clone(&self.quiz_loop)
    }
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--type <quiz_type>] [--base-url <url>] [--questions <file.json>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --type general");
    eprintln!("  --base-url http://127.0.0.1:8080");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  QUIZ_TYPE, QUIZ_BASE_URL, QUIZ_QUESTIONS_FILE,");
    eprintln!("  QUIZ_TICK_MS, QUIZ_ADVANCE_DELAY_MS, QUIZ_TIME_LIMIT_SECS, RUST_LOG");
}

/// Apply command-line overrides on top of the environment config.
fn apply_args(
    mut config: QuizConfig,
    args: &mut impl Iterator<Item = String>,
) -> Result<Option<QuizConfig>, ArgsError> {
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--type" => {
                let value = require_value(args, "--type")?;
                config.quiz_type = QuizType::new(value.clone())
                    .map_err(|_| ArgsError::InvalidQuizType { raw: value })?;
            }
            "--base-url" => {
                let value = require_value(args, "--base-url")?;
                config.base_url = parse_base_url(&value)
                    .map_err(|_| ArgsError::InvalidBaseUrl { raw: value })?;
            }
            "--questions" => {
                let value = require_value(args, "--questions")?;
                config.questions_file = Some(PathBuf::from(value));
            }
            "--help" | "-h" => return Ok(None),
            _ => return Err(ArgsError::UnknownArg(arg)),
        }
    }
    Ok(Some(config))
}

async fn build_provider(
    config: &QuizConfig,
) -> Result<Arc<dyn QuestionProvider>, Box<dyn std::error::Error>> {
    if let Some(path) = &config.questions_file {
        info!(path = %path.display(), "using local question file");
        let provider = StaticQuestionProvider::from_file(path).await?.with_shuffle(true);
        return Ok(Arc::new(provider));
    }
    info!(base_url = %config.base_url, "using question api");
    Ok(Arc::new(HttpQuestionProvider::new(config.base_url.clone())))
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = QuizConfig::from_env()?;
    let mut argv = std::env::args().skip(1);
    let Some(config) = apply_args(config, &mut argv).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?
    else {
        print_usage();
        return Ok(());
    };

    let provider = build_provider(&config).await?;
    let quiz_loop = QuizLoopService::new(Clock::system(), provider).with_config(&config);

    let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
        quiz_type: config.quiz_type.clone(),
        quiz_loop: Arc::new(quiz_loop),
    });
    let context = build_app_context(&app);

    info!(quiz_type = %config.quiz_type, "launching quiz window");

    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Timed Quiz")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

#[tokio::main]
async fn main() {
    init_tracing();
    if let Err(err) = run().await {
        eprintln!("{err}");
        std::process::exit(2);
    }
}
