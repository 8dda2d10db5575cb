mod service;
pub mod traits;

pub use service::{CreatedService, DESIRED_TASK_COUNT, LaunchMode, NetworkAttachment, ServiceSpec};
pub use traits::ServiceOrchestrator;
