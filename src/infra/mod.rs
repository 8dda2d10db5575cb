pub mod config;
pub mod ecs_adapter;

pub use ecs_adapter::EcsAdapter;
