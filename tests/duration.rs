use chrono::{DateTime, Duration, TimeZone, Utc};

use runsight::{NodeRun, PipelineStatus, duration_of};

fn t0() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap()
}

fn seconds_formatter() -> impl Fn(DateTime<Utc>, DateTime<Utc>) -> String {
    |start, end| format!("{}s", (end - start).num_seconds())
}

fn active_run() -> NodeRun {
    NodeRun {
        id: 7,
        num: 1,
        workflow_node_id: 2,
        status: PipelineStatus::Building,
        start: t0(),
        done: None,
        can_be_run: false,
    }
}

#[test]
fn absent_node_run_has_no_duration() {
    assert_eq!(duration_of(None, t0(), &seconds_formatter()), None);
}

#[test]
fn active_run_measures_against_now_and_keeps_growing() {
    let run = active_run();
    let fmt = seconds_formatter();

    let early = duration_of(Some(&run), t0() + Duration::seconds(5), &fmt);
    let later = duration_of(Some(&run), t0() + Duration::seconds(42), &fmt);

    assert_eq!(early.as_deref(), Some("5s"));
    assert_eq!(later.as_deref(), Some("42s"));
}

#[test]
fn terminal_run_measures_against_done_and_is_stable() {
    let mut run = active_run();
    run.status = PipelineStatus::Success;
    run.done = Some(t0() + Duration::seconds(90));
    let fmt = seconds_formatter();

    // "now" keeps moving, the result does not.
    let first = duration_of(Some(&run), t0() + Duration::seconds(100), &fmt);
    let second = duration_of(Some(&run), t0() + Duration::seconds(2000), &fmt);

    assert_eq!(first.as_deref(), Some("90s"));
    assert_eq!(first, second);
}

#[test]
fn terminal_run_without_done_instant_has_no_duration() {
    let mut run = active_run();
    run.status = PipelineStatus::Stopped;
    run.done = None;

    assert_eq!(
        duration_of(Some(&run), t0() + Duration::seconds(10), &seconds_formatter()),
        None
    );
}
