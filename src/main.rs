use anyhow::Context;
use posts_api_suite::configuration::get_configuration;
use posts_api_suite::fixtures::TestUser;
use posts_api_suite::runner::run_scenarios;
use posts_api_suite::scenarios::{Scenario, ScenarioContext};
use posts_api_suite::telemetry::{get_subscriber, init_subscriber};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr so that stdout only carries the report
    let subscriber = get_subscriber("posts-api-suite".into(), "info".into(), std::io::stderr);
    init_subscriber(subscriber);

    let configuration = get_configuration().context("Failed to read configuration.")?;
    let scenarios = Scenario::select(configuration.suite.only.as_deref())?;
    let client = configuration
        .target
        .client()
        .context("Failed to build the HTTP client.")?;

    let context = ScenarioContext {
        client,
        user: TestUser::generate_excluding(&configuration.suite.known_post_ids),
        suite: configuration.suite,
    };
    let report = run_scenarios(&context, &scenarios).await;
    println!("{}", report);

    if !report.is_success() {
        anyhow::bail!(
            "{} of {} scenarios failed",
            report.failed_count(),
            report.outcomes.len()
        );
    }
    Ok(())
}
