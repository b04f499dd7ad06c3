use posts_api_suite::configuration::get_configuration;
use posts_api_suite::error::ScenarioError;
use posts_api_suite::fixtures::TestUser;
use posts_api_suite::scenarios::{Scenario, ScenarioContext};
use posts_api_suite::telemetry::{get_subscriber, init_subscriber};
use reqwest::StatusCode;
use std::sync::LazyLock;
use wiremock::MockServer;

// Ensure that the `tracing` stack is only initialised once using `LazyLock`
static TRACING: LazyLock<()> = LazyLock::new(|| {
    let default_filter_level = "info".to_string();
    let subscriber_name = "test".to_string();
    // The sink is part of the type returned by `get_subscriber`,
    // hence the two branches.
    if std::env::var("TEST_LOG").is_ok() {
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::stdout);
        init_subscriber(subscriber);
    } else {
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::sink);
        init_subscriber(subscriber);
    }
});

/// A mock posts API plus the context the scenarios run with.
pub struct TestApi {
    pub server: MockServer,
    pub context: ScenarioContext,
}

impl TestApi {
    pub fn user(&self) -> &TestUser {
        &self.context.user
    }

    pub fn post_path(&self) -> String {
        format!("/posts/{}", self.user().post_id)
    }

    pub async fn run(&self, scenario: Scenario) -> Result<(), ScenarioError> {
        scenario.run(&self.context).await
    }
}

pub async fn spawn_api() -> TestApi {
    LazyLock::force(&TRACING);

    let server = MockServer::start().await;

    let configuration = {
        let mut c = get_configuration().expect("Failed to read configuration.");
        c.target.base_url = server.uri();
        c.target.timeout_milliseconds = 2_000;
        c.suite.only = None;
        c
    };
    let client = configuration
        .target
        .client()
        .expect("Failed to build the API client.");

    let user = TestUser::generate_excluding(&configuration.suite.known_post_ids);

    TestApi {
        server,
        context: ScenarioContext {
            client,
            user,
            suite: configuration.suite,
        },
    }
}

pub fn posts(count: usize) -> serde_json::Value {
    (1..=count)
        .map(|id| {
            serde_json::json!({
                "id": id,
                "title": format!("post {}", id),
                "content": "lorem ipsum",
                "author": "Ursula Le Guin"
            })
        })
        .collect::<Vec<_>>()
        .into()
}

pub fn assert_unexpected_status(error: &ScenarioError, expected: StatusCode, actual: StatusCode) {
    match error {
        ScenarioError::UnexpectedStatus {
            expected: e,
            actual: a,
        } => {
            assert_eq!(*e, expected, "Wrong expected status recorded");
            assert_eq!(*a, actual, "Wrong actual status recorded");
        }
        other => panic!("Expected a status mismatch, got: {:?}", other),
    }
}
