use chrono::{DateTime, Duration, TimeZone, Utc};
use proptest::prelude::*;

use runsight::{Node, NodeRun, PipelineStatus, RunSnapshot, Selection, Workflow, can_be_run};

fn t0() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap()
}

fn any_status() -> impl Strategy<Value = PipelineStatus> {
    prop_oneof![
        Just(PipelineStatus::Queued),
        Just(PipelineStatus::Waiting),
        Just(PipelineStatus::Building),
        Just(PipelineStatus::Success),
        Just(PipelineStatus::Fail),
        Just(PipelineStatus::Stopped),
        Just(PipelineStatus::Skipped),
        Just(PipelineStatus::Disabled),
        Just(PipelineStatus::NeverBuilt),
    ]
}

fn active_status() -> impl Strategy<Value = PipelineStatus> {
    prop_oneof![
        Just(PipelineStatus::Queued),
        Just(PipelineStatus::Waiting),
        Just(PipelineStatus::Building),
    ]
}

fn terminal_status() -> impl Strategy<Value = PipelineStatus> {
    any_status().prop_filter("terminal statuses only", |s| s.is_terminal())
}

fn node(id: i64, children: &[i64]) -> Node {
    Node {
        id,
        pipeline_name: format!("pipeline-{id}"),
        children: children.to_vec(),
    }
}

fn chain() -> Workflow {
    Workflow::from_nodes(1, [node(1, &[2]), node(2, &[])])
}

fn node_run(id: i64, num: i64, workflow_node_id: i64, status: PipelineStatus) -> NodeRun {
    NodeRun {
        id,
        num,
        workflow_node_id,
        status,
        start: t0(),
        done: status.is_terminal().then(|| t0() + Duration::minutes(1)),
        can_be_run: false,
    }
}

proptest! {
    /// Rule 1: a node-run matching the selection carries the verdict,
    /// whatever the run status, record status or parent state.
    #[test]
    fn stored_flag_always_wins(
        flag in any::<bool>(),
        record_status in any_status(),
        run_status in any_status(),
        parent_status in any_status(),
    ) {
        let mut record = node_run(7, 3, 2, record_status);
        record.can_be_run = flag;

        let run = RunSnapshot {
            status: run_status,
            workflow: chain(),
            nodes: [
                (1, vec![node_run(5, 3, 1, parent_status)]),
                (2, vec![record]),
            ]
            .into_iter()
            .collect(),
        };
        let selection = Selection {
            node_id: Some(2),
            run_id: Some(7),
            run_number: Some(3),
        };

        prop_assert_eq!(can_be_run(&chain(), &run, 2, &selection), flag);
    }

    /// Rule 2: a terminal run re-permits any node with a prior execution,
    /// whatever state that execution ended in.
    #[test]
    fn terminal_run_repermits_executed_nodes(
        run_status in terminal_status(),
        record_status in any_status(),
    ) {
        let run = RunSnapshot {
            status: run_status,
            workflow: chain(),
            nodes: [(2, vec![node_run(7, 1, 2, record_status)])].into_iter().collect(),
        };

        prop_assert!(can_be_run(&chain(), &run, 2, &Selection::default()));
    }

    /// Rule 4: while the run is active, an active parent representative
    /// blocks the child no matter which active status it has.
    #[test]
    fn active_parent_blocks_under_active_run(
        run_status in active_status(),
        parent_status in active_status(),
    ) {
        let run = RunSnapshot {
            status: run_status,
            workflow: chain(),
            nodes: [(1, vec![node_run(5, 1, 1, parent_status)])].into_iter().collect(),
        };

        prop_assert!(!can_be_run(&chain(), &run, 2, &Selection::default()));
    }

    /// Rule 4: a declared parent with no run entry blocks, whatever the
    /// other parent's terminal state.
    #[test]
    fn missing_parent_entry_blocks(finished_parent in terminal_status()) {
        let workflow = Workflow::from_nodes(
            1,
            [node(1, &[2, 3]), node(2, &[4]), node(3, &[4]), node(4, &[])],
        );
        let run = RunSnapshot {
            status: PipelineStatus::Building,
            workflow: workflow.clone(),
            nodes: [(2, vec![node_run(5, 1, 2, finished_parent)])].into_iter().collect(),
        };

        prop_assert!(!can_be_run(&workflow, &run, 4, &Selection::default()));
    }
}
