use clap::Parser;
use leetcode_etl::utils::error::{EtlError, ErrorSeverity};
use leetcode_etl::utils::{logger, validation::Validate};
use leetcode_etl::{CliConfig, EtlEngine, LeetCodePipeline, LocalStorage};

fn report_failure(stage: &str, e: &EtlError) {
    tracing::error!(
        "❌ {}: {} (Category: {:?}, Severity: {:?})",
        stage,
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
}

fn exit_code(e: &EtlError) -> i32 {
    match e.severity() {
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose, config.json_logs);

    tracing::info!("Starting leetcode-etl");
    tracing::info!(
        "Difficulties: {}",
        config
            .difficulties
            .iter()
            .map(|d| d.label())
            .collect::<Vec<_>>()
            .join(", ")
    );
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    // 設定錯誤時不發出任何網路請求
    if let Err(e) = config.validate() {
        report_failure("Configuration validation failed", &e);
        std::process::exit(1);
    }

    let monitor_enabled = config.monitor;
    if monitor_enabled {
        tracing::info!("🔍 System monitoring enabled");
    }

    let storage = LocalStorage::new(config.output_path.clone());
    let pipeline = match LeetCodePipeline::new(storage, config) {
        Ok(pipeline) => pipeline,
        Err(e) => {
            report_failure("Failed to create HTTP client", &e);
            std::process::exit(exit_code(&e));
        }
    };

    let engine = EtlEngine::new_with_monitoring(pipeline, monitor_enabled);

    match engine.run().await {
        Ok(summary) => {
            tracing::info!("✅ ETL process completed successfully!");
            println!(
                "✅ Exported {} problems to {}",
                summary.exported, summary.output_path
            );
            if summary.failed > 0 {
                println!("⚠️ {} problems could not be fetched", summary.failed);
            }
        }
        Err(e) => {
            report_failure("ETL process failed", &e);

            std::process::exit(exit_code(&e));
        }
    }

    Ok(())
}
