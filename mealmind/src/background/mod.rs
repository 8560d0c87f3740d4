pub mod data_loader;

use std::collections::HashMap;
use std::future::Future;
use tokio::task::JoinHandle;

pub const SUGGEST_MEALS_TASK: &str = "suggest_meals";
pub const GENERATE_IMAGE_TASK: &str = "generate_image";
pub const LOAD_PANTRY_TASK: &str = "load_pantry";

/// Manages background request tasks.
/// Tracks running tasks by id so a newer request supersedes an older one.
pub struct BackgroundTaskManager {
    tasks: HashMap<String, JoinHandle<()>>,
}

impl BackgroundTaskManager {
    pub fn new() -> Self {
        Self {
            tasks: HashMap::new(),
        }
    }

    /// Spawn a background request task.
    /// If a task with the same ID already exists, it will be cancelled first
    pub fn spawn_load_task<F>(&mut self, task_id: &str, future: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        // Cancel existing task with same ID (prevents stale data)
        if let Some(handle) = self.tasks.remove(task_id) {
            tracing::debug!("Aborting superseded task '{}'", task_id);
            handle.abort();
        }

        // Spawn new task
        let handle = tokio::spawn(future);
        self.tasks.insert(task_id.to_string(), handle);
    }

    /// Detached task that nothing waits on or supersedes
    pub fn spawn_detached<F>(&self, future: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        tokio::spawn(future);
    }

    pub fn is_running(&self, task_id: &str) -> bool {
        self.tasks
            .get(task_id)
            .is_some_and(|handle| !handle.is_finished())
    }

    /// Cancel all running tasks (used on shutdown)
    pub fn cancel_all(&mut self) {
        for (_, handle) in self.tasks.drain() {
            handle.abort();
        }
    }
}

impl Default for BackgroundTaskManager {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for BackgroundTaskManager {
    fn drop(&mut self) {
        self.cancel_all();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use tokio::sync::oneshot;

    #[tokio::test]
    async fn test_spawning_same_id_aborts_previous_task() {
        let mut manager = BackgroundTaskManager::new();
        let (first_tx, first_rx) = oneshot::channel::<()>();
        let (second_tx, second_rx) = oneshot::channel::<()>();

        manager.spawn_load_task(SUGGEST_MEALS_TASK, async move {
            tokio::time::sleep(Duration::from_secs(60)).await;
            let _ = first_tx.send(());
        });
        manager.spawn_load_task(SUGGEST_MEALS_TASK, async move {
            let _ = second_tx.send(());
        });

        assert!(second_rx.await.is_ok());
        // Aborting drops the first future along with its sender
        assert!(first_rx.await.is_err());
    }

    #[tokio::test]
    async fn test_different_ids_run_side_by_side() {
        let mut manager = BackgroundTaskManager::new();
        let (pantry_tx, pantry_rx) = oneshot::channel::<()>();
        let (image_tx, image_rx) = oneshot::channel::<()>();

        manager.spawn_load_task(LOAD_PANTRY_TASK, async move {
            let _ = pantry_tx.send(());
        });
        manager.spawn_load_task(GENERATE_IMAGE_TASK, async move {
            let _ = image_tx.send(());
        });

        assert!(pantry_rx.await.is_ok());
        assert!(image_rx.await.is_ok());
    }

    #[tokio::test]
    async fn test_cancel_all_stops_running_tasks() {
        let mut manager = BackgroundTaskManager::new();
        manager.spawn_load_task(LOAD_PANTRY_TASK, async {
            tokio::time::sleep(Duration::from_secs(60)).await;
        });
        assert!(manager.is_running(LOAD_PANTRY_TASK));

        manager.cancel_all();
        assert!(!manager.is_running(LOAD_PANTRY_TASK));
    }
}
