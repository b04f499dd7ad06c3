use crate::helpers::{TestApi, posts, spawn_api};
use posts_api_suite::api_client::PostsApiClient;
use posts_api_suite::error::ScenarioError;
use posts_api_suite::runner::run_scenarios;
use posts_api_suite::scenarios::Scenario;
use wiremock::matchers::{header_exists, method, path};
use wiremock::{Mock, ResponseTemplate};

/// Mounts a backend that behaves like a freshly seeded posts API for one run.
async fn mount_conforming_api(api: &TestApi) {
    let user = api.user();
    let post_path = api.post_path();
    let updated = serde_json::json!({
        "id": user.post_id,
        "title": user.title,
        "content": user.content_updated,
        "author": user.author
    });

    Mock::given(method("GET"))
        .and(path("/posts"))
        .respond_with(ResponseTemplate::new(200).set_body_json(posts(10)))
        .mount(&api.server)
        .await;
    for id in [55, 60] {
        Mock::given(method("GET"))
            .and(path(format!("/posts/{}", id)))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"id": id})))
            .mount(&api.server)
            .await;
    }
    Mock::given(method("POST"))
        .and(path("/register"))
        .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({})))
        .mount(&api.server)
        .await;
    Mock::given(method("POST"))
        .and(path("/login"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"accessToken": "t0k3n"})),
        )
        .mount(&api.server)
        .await;
    Mock::given(method("POST"))
        .and(path("/664/posts"))
        .and(header_exists("Authorization"))
        .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
            "id": 1,
            "title": user.title,
            "text": user.content
        })))
        .with_priority(1)
        .mount(&api.server)
        .await;
    Mock::given(method("POST"))
        .and(path("/664/posts"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&api.server)
        .await;
    Mock::given(method("POST"))
        .and(path("/posts"))
        .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({})))
        .mount(&api.server)
        .await;
    // The first update happens before the pinned post exists
    Mock::given(method("PUT"))
        .and(path(post_path.clone()))
        .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!({})))
        .up_to_n_times(1)
        .with_priority(1)
        .mount(&api.server)
        .await;
    Mock::given(method("PUT"))
        .and(path(post_path.clone()))
        .respond_with(ResponseTemplate::new(200).set_body_json(updated))
        .mount(&api.server)
        .await;
    Mock::given(method("DELETE"))
        .and(path(post_path.clone()))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .expect(1)
        .mount(&api.server)
        .await;
    Mock::given(method("GET"))
        .and(path(post_path))
        .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!({})))
        .expect(1)
        .mount(&api.server)
        .await;
}

#[tokio::test]
async fn full_suite_passes_against_a_conforming_api() {
    // Arrange
    let api = spawn_api().await;
    mount_conforming_api(&api).await;

    // Act
    let report = run_scenarios(&api.context, &Scenario::ALL).await;

    // Assert
    let failures: Vec<String> = report
        .failures()
        .map(|o| format!("{}: {}", o.scenario, o.result.as_ref().unwrap_err()))
        .collect();
    assert!(report.is_success(), "Failed scenarios: {:?}", failures);
    assert_eq!(report.passed_count(), Scenario::ALL.len());
    let order: Vec<Scenario> = report.outcomes.iter().map(|o| o.scenario).collect();
    assert_eq!(order, Scenario::ALL.to_vec());
}

#[tokio::test]
async fn a_failing_scenario_does_not_stop_the_ones_after_it() {
    // Arrange
    // Nothing mounted: every request gets wiremock's default 404
    let api = spawn_api().await;

    // Act
    let report = run_scenarios(&api.context, &Scenario::ALL).await;

    // Assert
    assert_eq!(report.outcomes.len(), Scenario::ALL.len());
    let passed: Vec<Scenario> = report
        .outcomes
        .iter()
        .filter(|o| o.passed())
        .map(|o| o.scenario)
        .collect();
    assert_eq!(
        passed,
        vec![Scenario::UpdateNonExisting, Scenario::DeleteNonExisting]
    );
    assert_eq!(report.failed_count(), 8);
    assert!(!report.is_success());
}

#[tokio::test]
async fn unreachable_api_is_reported_as_transport_failures() {
    // Arrange
    let api = spawn_api().await;
    // Bind then release a port so that nothing is listening on it
    let port = std::net::TcpListener::bind("127.0.0.1:0")
        .and_then(|listener| listener.local_addr())
        .unwrap()
        .port();
    let mut context = api.context.clone();
    context.client = PostsApiClient::new(
        format!("http://127.0.0.1:{}", port),
        std::time::Duration::from_millis(500),
    )
    .unwrap();

    // Act
    let report = run_scenarios(&context, &Scenario::ALL).await;

    // Assert
    assert_eq!(report.failed_count(), Scenario::ALL.len());
    for outcome in &report.outcomes {
        assert!(
            matches!(outcome.result, Err(ScenarioError::Transport(_))),
            "{} did not fail with a transport error",
            outcome.scenario
        );
    }
}

#[tokio::test]
async fn only_selected_scenarios_send_requests() {
    // Arrange
    let api = spawn_api().await;
    Mock::given(method("GET"))
        .and(path("/posts"))
        .respond_with(ResponseTemplate::new(200).set_body_json(posts(1)))
        .expect(1)
        .mount(&api.server)
        .await;
    let names = vec!["list-all-posts".to_string()];
    let selected = Scenario::select(Some(names.as_slice())).unwrap();

    // Act
    let report = run_scenarios(&api.context, &selected).await;

    // Assert
    assert!(report.is_success());
    assert_eq!(report.outcomes.len(), 1);
    let received = api.server.received_requests().await.unwrap();
    assert_eq!(received.len(), 1);
}
