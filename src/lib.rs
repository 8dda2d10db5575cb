pub mod cli;
pub mod domain;
pub mod infra;
pub mod services;

// Make test_support available for integration tests
pub mod test_support;

pub use domain::{
    CreatedService, LaunchMode, NetworkAttachment, ServiceOrchestrator, ServiceSpec,
};
pub use infra::EcsAdapter;
pub use services::ServiceLauncher;
