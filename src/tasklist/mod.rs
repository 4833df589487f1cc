use crate::error::DukeError;
use crate::task::Task;

/// The ordered task collection. Indices are 0-based here; the commands
/// translate from the 1-based numbers users type.
#[derive(Debug, Default, PartialEq)]
pub struct TaskList {
    items: Vec<Task>,
}

impl TaskList {
    pub fn add(&mut self, task: Task) {
        self.items.push(task);
    }

    /// Sets the done flag at `idx` and returns the updated task.
    pub fn set_done(&mut self, idx: usize, done: bool) -> Result<&Task, DukeError> {
        let size = self.items.len();
        let task = self.items.get_mut(idx).ok_or(DukeError::OutOfRange {
            index: idx as i64 + 1,
            size,
        })?;
        task.set_done(done);
        Ok(&*task)
    }

    /// Removes and returns the task at `idx`; later tasks shift down.
    pub fn remove(&mut self, idx: usize) -> Result<Task, DukeError> {
        if idx >= self.items.len() {
            return Err(DukeError::OutOfRange {
                index: idx as i64 + 1,
                size: self.items.len(),
            });
        }
        Ok(self.items.remove(idx))
    }

    pub fn get(&self, idx: usize) -> Option<&Task> {
        self.items.get(idx)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Task> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
