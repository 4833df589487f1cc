use std::path::Path;

use tracing::warn;

use crate::error::DukeError;
use crate::parser::{self, ParameterMap};
use crate::persistence;
use crate::task::Task;
use crate::tasklist::TaskList;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskKind {
    Todo,
    Deadline,
    Event,
}

/// One parsed input line, ready to run against the task list. Each variant
/// validates its own parameters on execute and converts them to typed
/// values there; the ParameterMap goes no further.
#[derive(Debug)]
pub enum Command {
    Add { kind: TaskKind, params: ParameterMap },
    Mark(ParameterMap),
    Unmark(ParameterMap),
    Delete(ParameterMap),
    List,
    Exit,
}

impl Command {
    /// Read by the session loop; `Exit` itself does nothing on execute.
    pub fn is_exit(&self) -> bool {
        matches!(self, Command::Exit)
    }

    /// Runs the command. `Ok(None)` means no output: silent replayed adds
    /// and the exit command. Mutating commands save to `data_path` before
    /// returning.
    pub fn execute(
        &self,
        tasks: &mut TaskList,
        data_path: &Path,
    ) -> Result<Option<String>, DukeError> {
        match self {
            Command::Add { kind, params } => execute_add(*kind, params, tasks, data_path),
            Command::Mark(params) => execute_set_done(params, tasks, data_path, true),
            Command::Unmark(params) => execute_set_done(params, tasks, data_path, false),
            Command::Delete(params) => execute_delete(params, tasks, data_path),
            Command::List => Ok(Some(render_list(tasks))),
            Command::Exit => Ok(None),
        }
    }
}

fn execute_add(
    kind: TaskKind,
    params: &ParameterMap,
    tasks: &mut TaskList,
    data_path: &Path,
) -> Result<Option<String>, DukeError> {
    let description = params
        .get(parser::DEFAULT_KEY)
        .ok_or(DukeError::MissingParameter("description"))?
        .to_string();
    let done = params.contains(parser::COMPLETED_KEY);

    let task = match kind {
        TaskKind::Todo => Task::Todo { description, done },
        TaskKind::Deadline => {
            let by = params
                .get("by")
                .ok_or(DukeError::MissingParameter("due date/time"))?;
            Task::Deadline {
                description,
                done,
                by: parser::parse_temporal(by)?,
            }
        }
        TaskKind::Event => {
            let from = params
                .get("from")
                .ok_or(DukeError::MissingParameter("start date/time"))?;
            let to = params
                .get("to")
                .ok_or(DukeError::MissingParameter("end date/time"))?;
            let from = parser::parse_temporal(from)?;
            let to = parser::parse_temporal(to)?;
            if !from.same_precision(&to) {
                return Err(DukeError::InconsistentDateFormat);
            }
            if from > to {
                return Err(DukeError::InvalidDateRange);
            }
            Task::Event {
                description,
                done,
                from,
                to,
            }
        }
    };

    let rendered = task.to_string();
    tasks.add(task);

    // The bulk-load replay path adds every stored task silently; saving
    // there would rewrite the file while it is still being read.
    if params.contains(parser::SILENT_KEY) {
        return Ok(None);
    }

    let mut response = format!(
        "Got it. I've added this task:\n  {rendered}\nNow you have {} tasks in the list.",
        tasks.len()
    );
    append_save_warning(&mut response, tasks, data_path);
    Ok(Some(response))
}

fn execute_set_done(
    params: &ParameterMap,
    tasks: &mut TaskList,
    data_path: &Path,
    done: bool,
) -> Result<Option<String>, DukeError> {
    let idx = resolve_index(params, tasks)?;
    let task = tasks.set_done(idx, done)?;

    let mut response = if done {
        format!("Nice! I've marked this task as done:\n  {task}")
    } else {
        format!("OK, I've marked this task as not done yet:\n  {task}")
    };
    append_save_warning(&mut response, tasks, data_path);
    Ok(Some(response))
}

fn execute_delete(
    params: &ParameterMap,
    tasks: &mut TaskList,
    data_path: &Path,
) -> Result<Option<String>, DukeError> {
    let idx = resolve_index(params, tasks)?;
    let removed = tasks.remove(idx)?;

    let mut response = format!(
        "Noted. I've removed this task:\n  {removed}\nNow you have {} tasks in the list.",
        tasks.len()
    );
    append_save_warning(&mut response, tasks, data_path);
    Ok(Some(response))
}

fn render_list(tasks: &TaskList) -> String {
    if tasks.is_empty() {
        return "There are no tasks to list.".to_string();
    }
    tasks
        .iter()
        .enumerate()
        .map(|(i, task)| format!("{}. {task}", i + 1))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Turns the `default` parameter into a 0-based index. Checks run in a
/// fixed order: empty list, missing parameter, not a number, below one,
/// past the end.
fn resolve_index(params: &ParameterMap, tasks: &TaskList) -> Result<usize, DukeError> {
    if tasks.is_empty() {
        return Err(DukeError::EmptyList);
    }
    let text = params
        .get(parser::DEFAULT_KEY)
        .ok_or(DukeError::MissingParameter("task number"))?;
    let number: i64 = text
        .trim()
        .parse()
        .map_err(|_| DukeError::NotANumber(text.to_string()))?;
    if number < 1 {
        return Err(DukeError::NegativeIndex);
    }
    if number as usize > tasks.len() {
        return Err(DukeError::OutOfRange {
            index: number,
            size: tasks.len(),
        });
    }
    Ok((number - 1) as usize)
}

/// A failed save must not fail the command: the in-memory mutation already
/// happened, so report it and warn the user instead.
fn append_save_warning(response: &mut String, tasks: &TaskList, data_path: &Path) {
    if let Err(err) = persistence::save(data_path, tasks) {
        warn!(path = %data_path.display(), error = %err, "could not save tasks");
        response.push_str(&format!("\nWarning: your tasks could not be saved ({err})."));
    }
}
