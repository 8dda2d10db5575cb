use crate::domain::{NetworkAttachment, ServiceSpec};
use crate::infra::EcsAdapter;
use crate::infra::config::load_app_config;
use crate::services::ServiceLauncher;
use anyhow::Result;
use clap::Args;
use std::path::Path;
use std::sync::Arc;
use tracing::debug;

#[derive(Args)]
pub struct LaunchArgs {
    /// Name of the ECS cluster
    #[arg(value_name = "CLUSTER_NAME")]
    pub cluster_name: String,

    /// Name of the ECS service to create
    #[arg(value_name = "SERVICE_NAME")]
    pub service_name: String,

    /// Security group id(s), comma-separated
    #[arg(value_name = "SECURITY_GROUPS")]
    pub security_groups: String,

    /// Subnet id(s), comma-separated
    #[arg(value_name = "SUBNETS")]
    pub subnets: String,

    /// Task definition family:revision or full ARN
    #[arg(value_name = "TASK_DEFINITION")]
    pub task_definition: String,
}

pub async fn run(args: LaunchArgs, config_dir: &Path, region: Option<String>) -> Result<()> {
    let config = load_app_config(config_dir)?;
    let region = config.resolve_region(region);
    debug!("using region {region}");

    let adapter = EcsAdapter::connect(&region).await;
    let launcher = ServiceLauncher::new(Arc::new(adapter));

    let spec = ServiceSpec::new(
        args.cluster_name,
        args.service_name,
        args.task_definition,
        NetworkAttachment::parse(&args.security_groups, &args.subnets),
    );

    let created = launcher.launch(&spec).await?;
    println!("The ARN of the service is {}", created.arn);

    Ok(())
}
