use crate::error::ScenarioError;
use crate::scenarios::{Scenario, ScenarioContext};
use std::error::Error;
use std::time::{Duration, Instant};
use tracing::Instrument;
use uuid::Uuid;

#[derive(Debug)]
pub struct ScenarioOutcome {
    pub scenario: Scenario,
    pub result: Result<(), ScenarioError>,
    pub elapsed: Duration,
}

impl ScenarioOutcome {
    pub fn passed(&self) -> bool {
        self.result.is_ok()
    }
}

#[derive(Debug)]
pub struct RunReport {
    pub run_id: Uuid,
    pub outcomes: Vec<ScenarioOutcome>,
}

impl RunReport {
    pub fn passed_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.passed()).count()
    }

    pub fn failed_count(&self) -> usize {
        self.outcomes.len() - self.passed_count()
    }

    pub fn is_success(&self) -> bool {
        self.failed_count() == 0
    }

    pub fn failures(&self) -> impl Iterator<Item = &ScenarioOutcome> {
        self.outcomes.iter().filter(|o| !o.passed())
    }
}

impl std::fmt::Display for RunReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "run {}", self.run_id)?;
        for outcome in &self.outcomes {
            let millis = outcome.elapsed.as_millis();
            match &outcome.result {
                Ok(()) => writeln!(f, "  ok    {} ({}ms)", outcome.scenario, millis)?,
                Err(e) => {
                    write!(f, "  FAIL  {} ({}ms): {}", outcome.scenario, millis, e)?;
                    let mut current = e.source();
                    while let Some(cause) = current {
                        write!(f, ": {}", cause)?;
                        current = cause.source();
                    }
                    writeln!(f)?;
                }
            }
        }
        write!(
            f,
            "{} passed, {} failed",
            self.passed_count(),
            self.failed_count()
        )
    }
}

/// Runs the scenarios one after another, in the order given.
///
/// A failing scenario is recorded and does not stop the ones after it.
#[tracing::instrument(
    name = "Running scenario suite",
    skip_all,
    fields(run_id = tracing::field::Empty, base_url = %ctx.client.base_url())
)]
pub async fn run_scenarios(ctx: &ScenarioContext, scenarios: &[Scenario]) -> RunReport {
    let run_id = Uuid::new_v4();
    tracing::Span::current().record("run_id", tracing::field::display(run_id));

    let mut outcomes = Vec::with_capacity(scenarios.len());
    for &scenario in scenarios {
        outcomes.push(run_scenario(ctx, scenario).await);
    }

    let report = RunReport { run_id, outcomes };
    tracing::info!(
        passed = report.passed_count(),
        failed = report.failed_count(),
        "Scenario suite finished"
    );
    report
}

async fn run_scenario(ctx: &ScenarioContext, scenario: Scenario) -> ScenarioOutcome {
    let span = tracing::info_span!(
        "Running scenario",
        scenario = %scenario,
        description = scenario.description()
    );
    let started = Instant::now();
    let result = scenario.run(ctx).instrument(span.clone()).await;
    let elapsed = started.elapsed();

    span.in_scope(|| match &result {
        Ok(()) => tracing::info!(elapsed_ms = elapsed.as_millis() as u64, "Scenario passed"),
        Err(e) => tracing::error!(
            elapsed_ms = elapsed.as_millis() as u64,
            "Scenario failed: {:?}",
            e
        ),
    });

    ScenarioOutcome {
        scenario,
        result,
        elapsed,
    }
}
