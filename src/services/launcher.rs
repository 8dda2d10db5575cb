use crate::domain::{CreatedService, ServiceOrchestrator, ServiceSpec};
use anyhow::Result;
use std::sync::Arc;
use tracing::info;

pub struct ServiceLauncher {
    orchestrator: Arc<dyn ServiceOrchestrator>,
}

impl ServiceLauncher {
    pub fn new(orchestrator: Arc<dyn ServiceOrchestrator>) -> Self {
        Self { orchestrator }
    }

    /// Submits one create-service call and hands back the resulting ARN.
    /// Failures are terminal for the invocation; there is no retry.
    pub async fn launch(&self, spec: &ServiceSpec) -> Result<CreatedService> {
        info!(
            "creating service {} on cluster {} from {}",
            spec.service_name, spec.cluster, spec.task_definition
        );

        let created = self.orchestrator.create_service(spec).await?;

        info!("service created: {}", created.arn);
        Ok(created)
    }
}
