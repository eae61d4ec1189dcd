use dragon_bank::prelude::*;

#[tokio::main]
async fn main() {
    let config = match AppConfig::from_args(std::env::args()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(2);
        }
    };

    tracing_subscriber::fmt()
        .with_max_level(config.log_level())
        .with_writer(std::io::stderr)
        .init();

    let exit_code = CliApp::new("dragon-bank")
        .run(|mut writer| async move {
            let report = run_ledger(&config, &mut writer).await?;
            tracing::info!(
                applied = report.applied,
                rejected = report.rejected,
                "Ledger processed"
            );
            Ok::<(), AppError>(())
        })
        .await;

    std::process::exit(exit_code);
}
