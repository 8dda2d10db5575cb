use crate::domain::{CreatedService, ServiceOrchestrator, ServiceSpec};
use anyhow::{Result, bail};
use async_trait::async_trait;
use std::sync::RwLock;

/// In-memory stand-in for the ECS control plane. Records every spec it is
/// handed and can be armed to fail with a given message.
pub struct MockOrchestrator {
    calls: RwLock<Vec<ServiceSpec>>,
    arn: RwLock<String>,
    fail_with: RwLock<Option<String>>,
}

impl MockOrchestrator {
    pub fn new() -> Self {
        Self::with_arn("arn:aws:ecs:us-east-1:000000000000:service/mock")
    }

    pub fn with_arn(arn: &str) -> Self {
        Self {
            calls: RwLock::new(Vec::new()),
            arn: RwLock::new(arn.to_string()),
            fail_with: RwLock::new(None),
        }
    }

    pub fn set_fail_with(&self, message: &str) {
        *self.fail_with.write().unwrap() = Some(message.to_string());
    }

    pub fn calls(&self) -> Vec<ServiceSpec> {
        self.calls.read().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.read().unwrap().len()
    }
}

impl Default for MockOrchestrator {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ServiceOrchestrator for MockOrchestrator {
    async fn create_service(&self, spec: &ServiceSpec) -> Result<CreatedService> {
        self.calls.write().unwrap().push(spec.clone());

        if let Some(ref message) = *self.fail_with.read().unwrap() {
            bail!("{message}");
        }

        Ok(CreatedService {
            arn: self.arn.read().unwrap().clone(),
        })
    }
}
