//! Step definitions driving outcome construction and extraction.

use crate::fixtures::{OutcomeState, ScenarioOutcome};
use anyhow::{Result, anyhow, ensure};
use rstest_bdd_macros::{given, then, when};
use test_helpers::{errors::TestError, panic};

fn take_outcome(outcome_state: &OutcomeState) -> Result<ScenarioOutcome> {
    outcome_state
        .outcome
        .take()
        .ok_or_else(|| anyhow!("no outcome was constructed"))
}

#[given("a real outcome holding {value:i32}")]
fn real_outcome(outcome_state: &OutcomeState, value: i32) {
    outcome_state.outcome.set(ScenarioOutcome::real(value));
}

#[given("a fake outcome carrying the error {message}")]
fn fake_outcome(outcome_state: &OutcomeState, message: String) {
    outcome_state
        .outcome
        .set(ScenarioOutcome::fake(TestError::new(message)));
}

#[given("a pair of {value:i32} and the error {message}")]
fn pair_with_error(outcome_state: &OutcomeState, value: i32, message: String) {
    outcome_state
        .outcome
        .set(ScenarioOutcome::of(value, Some(TestError::new(message))));
}

#[given("a pair of {value:i32} and no error")]
fn pair_without_error(outcome_state: &OutcomeState, value: i32) {
    outcome_state.outcome.set(ScenarioOutcome::of(value, None));
}

#[when("a fake outcome is built without an error")]
fn build_without_error(outcome_state: &OutcomeState) -> Result<()> {
    match panic::capture(|| ScenarioOutcome::from_error(None)) {
        Ok(outcome) => Err(anyhow!("construction unexpectedly produced {outcome:?}")),
        Err(message) => {
            outcome_state.construction_panic.set(message);
            Ok(())
        }
    }
}

#[then("the outcome reports no error")]
fn reports_no_error(outcome_state: &OutcomeState) -> Result<()> {
    let error = outcome_state
        .outcome
        .with_ref(|outcome| outcome.error().cloned())
        .ok_or_else(|| anyhow!("no outcome was constructed"))?;
    ensure!(error.is_none(), "expected a real outcome, found {error:?}");
    Ok(())
}

#[then("the outcome reports the error {message}")]
fn reports_error(outcome_state: &OutcomeState, message: String) -> Result<()> {
    let error = outcome_state
        .outcome
        .with_ref(|outcome| outcome.error().cloned())
        .ok_or_else(|| anyhow!("no outcome was constructed"))?;
    ensure!(
        error.as_ref().map(TestError::message) == Some(message.as_str()),
        "expected error {message:?}, found {error:?}"
    );
    Ok(())
}

#[then("the value is {expected:i32}")]
fn value_is(outcome_state: &OutcomeState, expected: i32) -> Result<()> {
    let value = panic::capture(|| take_outcome(outcome_state).map(ScenarioOutcome::value))
        .map_err(|message| anyhow!("extraction panicked: {message}"))??;
    ensure!(value == expected, "expected {expected}, found {value}");
    Ok(())
}

#[then("extracting the value panics mentioning {message}")]
fn extraction_panics(outcome_state: &OutcomeState, message: String) -> Result<()> {
    let outcome = take_outcome(outcome_state)?;
    let text = panic::message(|| outcome.value())
        .ok_or_else(|| anyhow!("extracting a fake value must panic"))?;
    ensure!(
        text.contains(&message),
        "panic message {text:?} does not mention {message:?}"
    );
    Ok(())
}

#[then("construction panics and no outcome exists")]
fn construction_panicked(outcome_state: &OutcomeState) -> Result<()> {
    ensure!(
        outcome_state.outcome.is_empty(),
        "no outcome may exist after a failed construction"
    );
    let message = outcome_state
        .construction_panic
        .take()
        .ok_or_else(|| anyhow!("construction did not panic"))?;
    ensure!(
        message.contains("without an error"),
        "unexpected panic message {message:?}"
    );
    Ok(())
}
