// src/main.rs
use anyhow::Context;
use clap::Parser;
use log::LevelFilter;
use log4rs::{
    append::console::ConsoleAppender,
    append::file::FileAppender,
    config::{Appender, Root},
    encode::pattern::PatternEncoder,
    filter::threshold::ThresholdFilter,
    Config,
};
use notion_reviews::{
    list_categories, list_reviews, page_to_markdown, serve, AppState, BlockTreeConverter, Command,
    CommandLineInput, NotionId, ReviewResponse, ReviewsResponse, ServiceConfig,
};
use std::fs;

/// Sets up logging configuration.
fn setup_logging(verbose: bool) -> anyhow::Result<()> {
    let log_level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let log_file_path = std::env::temp_dir().join("notion_reviews.log");
    if let Some(parent) = log_file_path.parent() {
        fs::create_dir_all(parent)?;
    }

    let pattern = if verbose {
        "{d(%Y-%m-%d %H:%M:%S)} [{l}] {t} - {m}{n}"
    } else {
        "{d(%H:%M:%S)} [{l}] - {m}{n}"
    };

    // stdout is reserved for command output.
    let stderr_appender = ConsoleAppender::builder()
        .target(log4rs::append::console::Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(pattern)))
        .build();

    let file_appender = FileAppender::builder()
        .encoder(Box::new(PatternEncoder::new(
            "{d(%Y-%m-%d %H:%M:%S)} [{l}] {t} - {m}{n}",
        )))
        .build(&log_file_path)
        .with_context(|| format!("Failed to open log file {}", log_file_path.display()))?;

    let config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr_appender)))
        .appender(
            Appender::builder()
                .filter(Box::new(ThresholdFilter::new(LevelFilter::Debug)))
                .build("file", Box::new(file_appender)),
        )
        .build(
            Root::builder()
                .appender("stderr")
                .appender("file")
                .build(log_level),
        )?;

    log4rs::init_config(config)?;
    log::debug!("Logging initialized. Log file: {}", log_file_path.display());
    Ok(())
}

fn print_json<T: serde::Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let dotenv = dotenvy::dotenv();
    let cli = CommandLineInput::parse();

    setup_logging(cli.verbose).context("Failed to initialize logging")?;
    if let Ok(path) = dotenv {
        log::debug!("Loaded environment from {}", path.display());
    }

    let config = ServiceConfig::resolve(&cli)?;

    match cli.command() {
        Command::Serve { bind } => {
            let listener = tokio::net::TcpListener::bind(&bind)
                .await
                .with_context(|| format!("Failed to bind {}", bind))?;
            serve(listener, AppState::new(config)).await?;
        }
        Command::Reviews => {
            let database = config.require_database_id()?;
            let reviews = list_reviews(&config.client()?, database).await?;
            print_json(&ReviewsResponse { reviews })?;
        }
        Command::Categories => {
            let database = config.require_database_id()?;
            let categories = list_categories(&config.client()?, database).await?;
            print_json(&categories)?;
        }
        Command::Review { page_id } => {
            let page = NotionId::parse(&page_id)?;
            let converter = BlockTreeConverter::default();
            let review = page_to_markdown(&config.client()?, &converter, &page).await?;
            print_json(&ReviewResponse { review })?;
        }
    }

    Ok(())
}
