//! Virtual-time continuation queue driving every deferred shell transition.
//!
//! Nothing here touches a real clock. The host arms a browser timeout for [`Scheduler::next_due`]
//! and reports elapsed time back through `DesktopAction::Tick`; tests advance time directly.
//! Tasks run in `(due, id)` order and observe their own due time as "now", so a single large
//! tick and many small ticks produce identical state.

use serde::{Deserialize, Serialize};

use crate::model::{AppId, BootTag};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TaskId(pub u64);

/// Lifecycle of one scheduled task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskPhase {
    Pending,
    Running,
    Done,
}

/// Deferred continuation applied by the reducer when its task comes due.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScheduledAction {
    FinishEntrance { app_id: AppId },
    FinishClose { app_id: AppId },
    FinishMinimize { app_id: AppId },
    BootTypeChar,
    BootStageDone,
    BootDecorativeLine { tag: BootTag, text_index: usize },
    BootFadeOut,
    BootRemoveOverlay,
    GreetingTypeChar,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct ScheduledTask {
    id: TaskId,
    due_ms: u64,
    action: ScheduledAction,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Scheduler {
    now_ms: u64,
    next_id: u64,
    queue: Vec<ScheduledTask>,
    running: Option<TaskId>,
}

impl Scheduler {
    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    /// Queues `action` to run `delay_ms` after the current virtual time.
    pub fn schedule(&mut self, delay_ms: u64, action: ScheduledAction) -> TaskId {
        let id = TaskId(self.next_id);
        self.next_id = self.next_id.saturating_add(1);
        self.queue.push(ScheduledTask {
            id,
            due_ms: self.now_ms.saturating_add(delay_ms),
            action,
        });
        id
    }

    pub fn next_due(&self) -> Option<u64> {
        self.queue.iter().map(|task| task.due_ms).min()
    }

    /// Returns `None` for ids this scheduler never issued.
    pub fn phase(&self, id: TaskId) -> Option<TaskPhase> {
        if id.0 >= self.next_id {
            return None;
        }
        if self.running == Some(id) {
            return Some(TaskPhase::Running);
        }
        if self.queue.iter().any(|task| task.id == id) {
            return Some(TaskPhase::Pending);
        }
        Some(TaskPhase::Done)
    }

    /// Removes the earliest task due at or before `limit_ms`, marks it running, and moves the
    /// virtual clock to its due time.
    pub fn begin_next_due(&mut self, limit_ms: u64) -> Option<(TaskId, ScheduledAction)> {
        let index = self
            .queue
            .iter()
            .enumerate()
            .filter(|(_, task)| task.due_ms <= limit_ms)
            .min_by_key(|(_, task)| (task.due_ms, task.id))
            .map(|(index, _)| index)?;
        let task = self.queue.remove(index);
        self.now_ms = self.now_ms.max(task.due_ms);
        self.running = Some(task.id);
        Some((task.id, task.action))
    }

    pub fn finish(&mut self, id: TaskId) {
        if self.running == Some(id) {
            self.running = None;
        }
    }

    /// Advances the virtual clock without running anything. Never moves backwards.
    pub fn settle(&mut self, now_ms: u64) {
        self.now_ms = self.now_ms.max(now_ms);
    }
}
