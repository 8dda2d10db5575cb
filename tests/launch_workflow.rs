use anyhow::Result;
use ecsup::domain::{LaunchMode, NetworkAttachment, ServiceSpec};
use ecsup::services::ServiceLauncher;
use ecsup::test_support::MockOrchestrator;
use std::sync::Arc;

fn spec_from_args(
    cluster: &str,
    service: &str,
    security_groups: &str,
    subnets: &str,
    task_definition: &str,
) -> ServiceSpec {
    ServiceSpec::new(
        cluster.to_string(),
        service.to_string(),
        task_definition.to_string(),
        NetworkAttachment::parse(security_groups, subnets),
    )
}

#[tokio::test]
async fn launch_prints_back_the_exact_arn() -> Result<()> {
    let mock = Arc::new(MockOrchestrator::with_arn(
        "arn:aws:ecs:us-east-1:123456789012:service/X",
    ));
    let launcher = ServiceLauncher::new(mock.clone());

    let spec = spec_from_args("prod", "web", "sg-aaa", "subnet-1", "web-task:3");
    let created = launcher.launch(&spec).await?;

    assert_eq!(created.arn, "arn:aws:ecs:us-east-1:123456789012:service/X");
    assert_eq!(mock.call_count(), 1, "exactly one remote call per invocation");

    Ok(())
}

#[tokio::test]
async fn launch_surfaces_the_provider_error() {
    let mock = Arc::new(MockOrchestrator::new());
    mock.set_fail_with("Invalid subnet");
    let launcher = ServiceLauncher::new(mock.clone());

    let spec = spec_from_args("prod", "web", "sg-aaa", "subnet-bad", "web-task:3");
    let err = launcher.launch(&spec).await.unwrap_err();

    assert_eq!(err.to_string(), "Invalid subnet");
    assert_eq!(mock.call_count(), 1);
}

#[tokio::test]
async fn request_shape_is_fixed_regardless_of_inputs() -> Result<()> {
    let mock = Arc::new(MockOrchestrator::new());
    let launcher = ServiceLauncher::new(mock.clone());

    let inputs = [
        ("prod", "web", "sg-aaa", "subnet-1", "web-task:3"),
        ("staging", "api", "sg-a,sg-b", "subnet-1,subnet-2", "api-task"),
    ];

    for (cluster, service, sgs, subnets, taskdef) in inputs {
        let spec = spec_from_args(cluster, service, sgs, subnets, taskdef);
        launcher.launch(&spec).await?;
    }

    for call in mock.calls() {
        assert_eq!(call.desired_count, 1);
        assert_eq!(call.launch_mode, LaunchMode::Fargate);
    }

    Ok(())
}

#[tokio::test]
async fn multi_value_network_ids_reach_the_orchestrator_split() -> Result<()> {
    let mock = Arc::new(MockOrchestrator::new());
    let launcher = ServiceLauncher::new(mock.clone());

    let spec = spec_from_args("prod", "web", "sg-a,sg-b", "subnet-1,subnet-2", "web-task:3");
    launcher.launch(&spec).await?;

    let calls = mock.calls();
    assert_eq!(calls[0].network.security_groups, vec!["sg-a", "sg-b"]);
    assert_eq!(calls[0].network.subnets, vec!["subnet-1", "subnet-2"]);

    Ok(())
}

#[tokio::test]
async fn orchestrator_handle_is_released_after_the_run() -> Result<()> {
    let mock = Arc::new(MockOrchestrator::new());

    {
        let launcher = ServiceLauncher::new(mock.clone());
        let spec = spec_from_args("prod", "web", "sg-aaa", "subnet-1", "web-task:3");
        launcher.launch(&spec).await?;
    }

    assert_eq!(Arc::strong_count(&mock), 1, "launcher must drop its handle");

    Ok(())
}
