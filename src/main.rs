use artistly_core::{
    catalog,
    config::Settings,
    Directory, FilterSelection, MockSubmissionGateway, Step, SubmissionFilter, SubmissionQueue,
    SubmissionStatus, Wizard,
};
use tracing::info;

/// Demo driver: boots logging and configuration, then walks the directory
/// filter engine, the dashboard submission queue and the onboarding wizard
/// over the reference dataset.
#[tokio::main]
async fn main() {
    // Load configuration
    let settings = Settings::load().unwrap_or_else(|e| {
        panic!("Configuration error: {e}");
    });

    // Initialize logging (env vars override the configured defaults)
    let log_level =
        std::env::var("LOG_LEVEL").unwrap_or_else(|_| settings.logging.level.clone());
    let log_format =
        std::env::var("LOG_FORMAT").unwrap_or_else(|_| settings.logging.format.clone());

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&log_level))
        .with_target(false)
        .with_level(true);

    if log_format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.init();
    }

    info!("Starting Artistly core demo...");

    // Directory filter engine
    let directory = Directory::default();
    let artists = catalog::sample_artists();

    let by_name = directory.search(&artists, "sharma", &FilterSelection::default());
    info!(query = "sharma", results = by_name.len(), "directory search");

    let singers = directory.search(&artists, "", &FilterSelection::for_category("singers"));
    let names: Vec<&str> = singers
        .iter()
        .take(settings.directory.max_results)
        .map(|a| a.name.as_str())
        .collect();
    info!(category = "singers", results = singers.len(), ?names, "directory filter");

    let featured = directory.featured(&artists);
    info!(results = featured.len(), "featured artists");

    // Manager dashboard: submission queue
    let mut queue = SubmissionQueue::new(catalog::sample_submissions());
    let pending = SubmissionFilter {
        status: Some(SubmissionStatus::Pending),
        ..SubmissionFilter::default()
    };
    info!(pending = queue.filter(&pending).len(), "submissions awaiting review");

    match queue.update_status("1", SubmissionStatus::Approved) {
        Ok(notice) => info!(submission = %notice.submission_id, "{}", notice.message),
        Err(e) => info!("review action refused: {e}"),
    }

    // Onboarding wizard: full journey against the mock gateway
    let gateway = MockSubmissionGateway::new(settings.submission.simulated_delay());
    let mut wizard = Wizard::new();

    {
        let form = wizard.form_mut();
        form.name = "Sanya Malhotra".to_string();
        form.email = "sanya@example.com".to_string();
        form.phone = "+91 9876543214".to_string();
        form.bio = "Multi-talented performer specializing in fusion of Indian classical and western styles."
            .to_string();
        form.categories = vec!["Singers".to_string(), "Dancers".to_string()];
        form.languages = vec!["Hindi".to_string(), "English".to_string()];
        form.experience = "5-10".to_string();
        form.price_range = "₹30,000 - ₹60,000".to_string();
        form.location = "Pune, Maharashtra".to_string();
    }

    while wizard.step() != Step::Review {
        match wizard.advance() {
            Ok(step) => info!(step = step.number(), title = step.title(), "wizard advanced"),
            Err(e) => {
                info!("wizard blocked: {e}");
                return;
            }
        }
    }

    match wizard.submit(&gateway).await {
        Ok(receipt) => info!(
            submission = %receipt.submission_id,
            "wizard complete: {}", receipt.message
        ),
        Err(e) => info!("submission failed: {e}"),
    }
}
