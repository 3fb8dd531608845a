use chrono::Utc;
use clap::Parser;
use jobseek::app::terminal::render_view;
use jobseek::utils::error::{ErrorSeverity, JobSearchError};
use jobseek::utils::{logger, validation::Validate};
use jobseek::{
    CliConfig, HttpJobBackend, InMemoryAddressBar, SearchController, SearchOutcome,
    StaticSession,
};

fn exit_code(error: &JobSearchError) -> i32 {
    match error.severity() {
        ErrorSeverity::Low => 1,      // 輸入錯誤
        ErrorSeverity::Medium => 2,   // 可重試
        ErrorSeverity::High => 1,     // 後端或設定錯誤
        ErrorSeverity::Critical => 3, // 系統錯誤
    }
}

fn fail(error: &JobSearchError) -> ! {
    tracing::error!(
        "❌ {} (Category: {:?}, Severity: {:?})",
        error,
        error.category(),
        error.severity()
    );
    eprintln!("❌ {}", error.user_friendly_message());
    eprintln!("💡 Suggestion: {}", error.recovery_suggestion());
    std::process::exit(exit_code(error));
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    let settings = match cli.settings() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("❌ Failed to load configuration: {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    // 初始化日誌
    logger::init_cli_logger(settings.verbose);
    tracing::info!("🚀 Starting jobseek");
    tracing::debug!("Settings: {:?}", settings);

    if let Err(e) = settings.validate() {
        fail(&e);
    }

    let backend = HttpJobBackend::from_config(&settings)?;
    let session = StaticSession::from_config(&settings);
    let address_bar = InMemoryAddressBar::new(&cli.url);

    let mut last_outcome = None;
    let controller = if cli.has_filters() || cli.clear {
        let controller = SearchController::new(backend, address_bar, session, settings.page_limit);

        if cli.clear {
            controller.update_query(|q| {
                q.reset();
                Ok(())
            })?;
        }

        let edited = controller.update_query(|q| {
            if let Some(designation) = &cli.designation {
                q.set_designation(designation.as_str());
            }
            if let Some(location) = &cli.location {
                q.set_location(location.as_str());
            }
            if cli.exp_min.is_some() || cli.exp_max.is_some() {
                let (min, max) = q.experience_range();
                q.set_experience_range(cli.exp_min.unwrap_or(min), cli.exp_max.unwrap_or(max))?;
            }
            if !cli.sources.is_empty() {
                q.set_sources(cli.sources.iter().copied());
            }
            Ok(())
        });
        if let Err(e) = edited {
            fail(&e);
        }

        match controller.submit_search().await {
            Ok(outcome) => last_outcome = Some(outcome),
            Err(e) => fail(&e),
        }
        controller
    } else {
        SearchController::initialize(backend, address_bar, session, settings.page_limit).await
    };

    if let Some(page) = cli.page {
        match controller.change_page(page).await {
            Ok(outcome) => last_outcome = Some(outcome),
            Err(e) => fail(&e),
        }
    }

    print!("{}", render_view(&controller.view(), Utc::now()));

    let url = controller.url_params();
    if !url.is_empty() {
        println!("🔗 Share this search: ?{}", url.to_query_string());
    }

    if let Some(SearchOutcome::Failed { error, .. }) = &last_outcome {
        tracing::error!("💡 Recovery suggestion: {}", error.recovery_suggestion());
        if error.is_retryable() {
            eprintln!("🔁 This looks temporary, run the same command again to retry");
        }
        std::process::exit(exit_code(error));
    }

    Ok(())
}
