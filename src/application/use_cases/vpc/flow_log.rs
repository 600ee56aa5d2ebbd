//! Traffic-Log Binder

use crate::domain::gateways::ResourceProvisioner;
use crate::domain::models::args::FlowLogArgs;
use crate::domain::models::{with_name_tag, CreatedResource, FlowLogConfig, ResourceId, ResourceKind, TopologyRequest};
use crate::shared::errors::ResourceCreationError;

use super::FLOW_LOG_CONTEXT;

/// Attach a flow log to `vpc_id`, copying the configuration verbatim
///
/// The caller decides whether logging is enabled; this always creates one flow log.
///
/// # Errors
///
/// Returns `ResourceCreationError` if the provisioner rejects the flow log.
pub async fn bind_flow_log(
    provisioner: &dyn ResourceProvisioner,
    request: &TopologyRequest,
    vpc_id: &ResourceId,
    config: &FlowLogConfig,
) -> Result<CreatedResource, ResourceCreationError> {
    let args = FlowLogArgs {
        vpc_id: vpc_id.clone(),
        traffic_type: config.traffic_type.clone(),
        log_destination_type: config.log_destination_type.clone(),
        log_destination: config.log_destination.clone(),
        destination_options: config.destination_options.clone(),
        tags: with_name_tag(&request.tags, &request.name),
    };

    let flow_log = provisioner.create_flow_log(&request.name, &args).await.map_err(|e| {
        tracing::warn!(name = %request.name, error = %e, "Flow log creation failed");
        ResourceCreationError::new(FLOW_LOG_CONTEXT, ResourceKind::FlowLog, &request.name, e)
    })?;

    tracing::debug!(flow_log_id = %flow_log.id, traffic_type = %args.traffic_type, "Flow log bound");
    Ok(flow_log)
}
