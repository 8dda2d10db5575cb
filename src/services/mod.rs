mod launcher;

pub use launcher::ServiceLauncher;
