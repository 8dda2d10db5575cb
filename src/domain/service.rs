/// How the control plane provisions compute for the service's tasks.
///
/// The tool only launches serverless services, so Fargate is the only mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaunchMode {
    Fargate,
}

/// Number of task copies requested for every service. Fixed by design.
pub const DESIRED_TASK_COUNT: i32 = 1;

/// VPC attachment for the service's tasks: which subnets they run in and
/// which security groups gate their traffic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkAttachment {
    pub security_groups: Vec<String>,
    pub subnets: Vec<String>,
}

impl NetworkAttachment {
    /// Builds an attachment from the raw CLI strings. Each string may carry
    /// several comma-separated identifiers.
    pub fn parse(security_groups: &str, subnets: &str) -> Self {
        Self {
            security_groups: split_ids(security_groups),
            subnets: split_ids(subnets),
        }
    }
}

fn split_ids(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Everything the control plane needs to create one service.
///
/// Built fresh per invocation and immutable afterwards. `desired_count` and
/// `launch_mode` are set by the constructor, never by callers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceSpec {
    pub cluster: String,
    pub service_name: String,
    pub task_definition: String,
    pub network: NetworkAttachment,
    pub desired_count: i32,
    pub launch_mode: LaunchMode,
}

impl ServiceSpec {
    pub fn new(
        cluster: String,
        service_name: String,
        task_definition: String,
        network: NetworkAttachment,
    ) -> Self {
        Self {
            cluster,
            service_name,
            task_definition,
            network,
            desired_count: DESIRED_TASK_COUNT,
            launch_mode: LaunchMode::Fargate,
        }
    }
}

/// What the control plane hands back once the service exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedService {
    pub arn: String,
}
