// src/run/eligibility.rs

//! The run-eligibility evaluator: may this node be (re)triggered right now?

use crate::graph::{NodeId, Workflow};
use crate::run::snapshot::{RunSnapshot, Selection};

/// Decide whether `target` may currently be (re)triggered within `run`.
///
/// Pure function of its inputs. Rules are evaluated in strict order, first
/// match wins:
///
/// 1. A node-run under `target` matching the selection's `(run_id, num)`
///    already carries the server's own eligibility verdict; return it as is.
/// 2. The run is terminal and `target` executed at least once (under a
///    different run number): a finished run permits re-triggering any node
///    that already ran.
/// 3. The run is terminal, `target` never executed, and `target` is the
///    root: the root of a finished run may always be (re)started.
/// 4. Otherwise, scan every entry in the snapshot's node-run map (not just
///    the parents). The *first* node-run of each sequence represents that
///    node's current state, even when retries exist. A still-active parent
///    blocks immediately; a parent that never produced an entry blocks at
///    the end of the scan.
///
/// The scan resolves graph-edit skew optimistically: an entry whose node no
/// longer exists in the current `workflow` allows the run immediately. This
/// is a deliberate bias toward allowing runs over blocking them when the
/// definition was edited mid-run; do not tighten it into stricter blocking.
///
/// A node with no declared parents (and no blocking entry) is always
/// runnable once reached: the scan finds zero of zero parents.
pub fn can_be_run(
    workflow: &Workflow,
    run: &RunSnapshot,
    target: NodeId,
    selection: &Selection,
) -> bool {
    // Rule 1: authoritative record.
    if let (Some(run_id), Some(num)) = (selection.run_id, selection.run_number) {
        if let Some(node_run) = run.find_node_run(target, run_id, num) {
            return node_run.can_be_run;
        }
    }

    let run_is_terminal = run.status.is_terminal();
    let prior_runs = run.node_runs(target);

    // Rule 2: terminal run, some prior execution of the target exists.
    if run_is_terminal && !prior_runs.is_empty() {
        return true;
    }

    // Rule 3: terminal run, target never executed, target is the root.
    if run_is_terminal && prior_runs.is_empty() && target == workflow.root_id {
        return true;
    }

    // Rule 4: dependency scan.
    let parents = workflow.parent_ids(target);
    let mut parents_found = 0usize;

    for runs in run.nodes.values() {
        let Some(representative) = runs.first() else {
            continue;
        };

        if parents.contains(&representative.workflow_node_id) {
            if representative.status.is_active() {
                // A parent is still running; the target cannot run yet.
                return false;
            }
            parents_found += 1;
        } else if workflow.node(representative.workflow_node_id).is_none() {
            // The definition was edited since this entry was created.
            // Stale graph data resolves in favor of allowing the run.
            return true;
        }
    }

    // A declared parent that never produced an entry has not executed yet.
    parents_found == parents.len()
}
