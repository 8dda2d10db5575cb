use crate::domain::{CreatedService, LaunchMode, ServiceOrchestrator, ServiceSpec};
use anyhow::{Context, Result, anyhow};
use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_sdk_ecs::Client;
use aws_sdk_ecs::config::Region;
use aws_sdk_ecs::error::{DisplayErrorContext, ProvideErrorMetadata};
use aws_sdk_ecs::types::{AwsVpcConfiguration, LaunchType, NetworkConfiguration};

/// ECS-backed implementation of `ServiceOrchestrator`.
///
/// Owns the SDK client for the lifetime of the invocation; dropping the
/// adapter releases the underlying connection pool.
pub struct EcsAdapter {
    client: Client,
}

impl EcsAdapter {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Resolves credentials from the default provider chain and binds the
    /// client to the given region.
    pub async fn connect(region: &str) -> Self {
        let config = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(region.to_owned()))
            .load()
            .await;

        Self::new(Client::new(&config))
    }
}

#[async_trait]
impl ServiceOrchestrator for EcsAdapter {
    async fn create_service(&self, spec: &ServiceSpec) -> Result<CreatedService> {
        let vpc = AwsVpcConfiguration::builder()
            .set_subnets(Some(spec.network.subnets.clone()))
            .set_security_groups(Some(spec.network.security_groups.clone()))
            .build()
            .context("building VPC attachment")?;

        let network = NetworkConfiguration::builder()
            .awsvpc_configuration(vpc)
            .build();

        let response = self
            .client
            .create_service()
            .cluster(&spec.cluster)
            .service_name(&spec.service_name)
            .task_definition(&spec.task_definition)
            .desired_count(spec.desired_count)
            .launch_type(launch_type(spec.launch_mode))
            .network_configuration(network)
            .send()
            .await
            .map_err(|err| {
                // Surface the provider's own message when there is one;
                // transport errors fall back to the full error chain.
                match err.as_service_error().and_then(ProvideErrorMetadata::message) {
                    Some(message) => anyhow!("{message}"),
                    None => anyhow!("{}", DisplayErrorContext(&err)),
                }
            })?;

        let arn = response
            .service()
            .and_then(|service| service.service_arn())
            .context("create-service response carried no service ARN")?;

        Ok(CreatedService {
            arn: arn.to_owned(),
        })
    }
}

fn launch_type(mode: LaunchMode) -> LaunchType {
    match mode {
        LaunchMode::Fargate => LaunchType::Fargate,
    }
}
