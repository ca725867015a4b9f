use clap::Parser;
use imfboplib::convert::{self, Config};
use std::io;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Пути входа и выхода фиксированы, флагов нет.
#[derive(Parser, Debug)]
#[command(
    name = "imfbop",
    version,
    about = "Конвертация выгрузки World Bank/IMF (net trade, BoP) из XML в JSON"
)]
struct Cli {}

fn init_logging() {
    // stdout занят диагностическими дампами, логи уходят в stderr
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "imfbop=info,imfboplib=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn main() -> ExitCode {
    let _cli = Cli::parse();
    init_logging();

    let cfg = Config::default();
    let stdout = io::stdout();
    match convert::run(&cfg, stdout.lock()) {
        Ok(summary) => {
            tracing::info!(records = summary.records, "conversion finished");
            println!("DONE");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("imfbop: {e}");
            ExitCode::FAILURE
        }
    }
}
