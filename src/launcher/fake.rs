use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tokio::time::Instant;

use super::{ProcessTable, Spawner};
use crate::error::LaunchError;
use crate::invocation::Invocation;

#[derive(Default, Clone)]
pub struct RecordingSpawner {
    pub spawned: Arc<Mutex<Vec<(Invocation, Instant)>>>,
    pub fail_program: Option<String>,
}

impl RecordingSpawner {
    pub fn failing(program: &str) -> Self {
        Self {
            fail_program: Some(program.to_string()),
            ..Self::default()
        }
    }

    pub fn programs(&self) -> Vec<String> {
        self.spawned
            .lock()
            .unwrap()
            .iter()
            .map(|(inv, _)| inv.program.clone())
            .collect()
    }
}

#[async_trait]
impl Spawner for RecordingSpawner {
    async fn spawn(&self, invocation: &Invocation) -> Result<(), LaunchError> {
        self.spawned
            .lock()
            .unwrap()
            .push((invocation.clone(), Instant::now()));
        if self.fail_program.as_deref() == Some(invocation.program.as_str()) {
            return Err(LaunchError::ProcessSpawnFailure {
                program: invocation.program.clone(),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "No such file or directory"),
            });
        }
        Ok(())
    }
}

pub struct FixedTable {
    pub running: bool,
    pub probes: Arc<Mutex<Vec<String>>>,
}

impl FixedTable {
    pub fn new(running: bool) -> Self {
        Self {
            running,
            probes: Arc::default(),
        }
    }
}

#[async_trait]
impl ProcessTable for FixedTable {
    async fn is_running(&self, app_name: &str) -> bool {
        self.probes.lock().unwrap().push(app_name.to_string());
        self.running
    }
}
