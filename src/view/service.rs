// src/view/service.rs

use async_trait::async_trait;
use tracing::{info, warn};

use crate::errors::Result;
use crate::run::{PipelineStatus, Selection};
use crate::view::broadcast::RunBroadcaster;

/// External service that can cancel a running node-run.
///
/// The crate only triggers cancellation through this seam; it never decides
/// eligibility with it.
#[async_trait]
pub trait RunQueryService {
    async fn stop_node_run(
        &self,
        project_key: &str,
        workflow_name: &str,
        run_number: i64,
        node_run_id: i64,
    ) -> Result<()>;
}

/// Ask the external service to stop the node-run addressed by `selection`,
/// then optimistically mark it stopped in the latest snapshot.
///
/// On success the matched node-run and the overall run status are set to
/// [`PipelineStatus::Stopped`] and the patched snapshot is republished so
/// every other consumer observes it. On failure the error is surfaced
/// unmodified and no local state changes; only the next poll can correct
/// the picture.
pub async fn stop_node_run(
    svc: &impl RunQueryService,
    project_key: &str,
    workflow_name: &str,
    selection: &Selection,
    broadcaster: &RunBroadcaster,
) -> Result<()> {
    let (Some(run_id), Some(run_number)) = (selection.run_id, selection.run_number) else {
        warn!("stop requested without a concrete node-run selected; ignoring");
        return Ok(());
    };

    svc.stop_node_run(project_key, workflow_name, run_number, run_id)
        .await?;

    info!(run_id, run_number, "node-run stopped; republishing snapshot");

    if let Some(mut snapshot) = broadcaster.latest() {
        snapshot.status = PipelineStatus::Stopped;
        if let Some(node_id) = selection.node_id {
            if let Some(node_run) = snapshot
                .nodes
                .get_mut(&node_id)
                .and_then(|runs| runs.iter_mut().find(|r| r.id == run_id && r.num == run_number))
            {
                node_run.status = PipelineStatus::Stopped;
            }
        }
        broadcaster.publish(snapshot);
    }

    Ok(())
}
