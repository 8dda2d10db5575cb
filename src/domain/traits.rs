use super::{CreatedService, ServiceSpec};
use anyhow::Result;
use async_trait::async_trait;

/// Trait for the container-orchestration control plane
#[async_trait]
pub trait ServiceOrchestrator: Send + Sync {
    /// Create a service from a spec and return its identifier
    async fn create_service(&self, spec: &ServiceSpec) -> Result<CreatedService>;
}
