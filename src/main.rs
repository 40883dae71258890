use bayes_posterior::utils::logger;
use bayes_posterior::{
    AppConfig, BatchRunner, BayesError, CliConfig, OutputFormat, PosteriorEngine, PriorProvider,
    Result,
};
use clap::Parser;

fn main() {
    let cli = CliConfig::parse();

    // 初始化日誌
    if cli.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting bayes CLI");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    if let Err(e) = run(cli) {
        tracing::error!(
            "❌ Posterior computation failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());

        let exit_code = e.exit_code();
        if exit_code > 0 {
            std::process::exit(exit_code);
        }
    }
}

fn run(cli: CliConfig) -> Result<()> {
    let config = AppConfig::load(cli)?;

    if let Some(path) = config.batch_path() {
        tracing::info!("📁 Running batch from: {}", path);
        if config.format() != OutputFormat::Text {
            tracing::warn!("⚠️ options.format is ignored in batch mode; output is CSV");
        }
        let stdout = std::io::stdout();
        let summary = BatchRunner::new(config.strict())
            .with_base_priors(config.priors())
            .run_file(path, stdout.lock())?;
        if summary.failed > 0 {
            tracing::warn!("⚠️ {} of {} rows had no posterior", summary.failed, summary.rows);
        }
        return Ok(());
    }

    let report = PosteriorEngine::new(&config).run()?;
    let rendered = report
        .render(config.format())
        .map_err(BayesError::SerializationError)?;
    println!("{}", rendered);

    Ok(())
}
