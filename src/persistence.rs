use std::{
    fs, io,
    path::{Path, PathBuf},
};

use anyhow::{anyhow, Result};
use directories::ProjectDirs;
use tracing::{debug, warn};

use crate::parser;
use crate::tasklist::TaskList;

pub fn default_path() -> Result<PathBuf> {
    let proj = ProjectDirs::from("dev", "duke", "duke")
        .ok_or_else(|| anyhow!("Cannot determine data directory"))?;
    let dir = proj.data_dir().to_path_buf();
    Ok(dir.join("tasks.txt"))
}

/// Loads the task list from `path`, replaying each record through the same
/// add path as live input. A missing or unreadable file yields an empty
/// list; a record that is corrupt or fails validation is skipped. Loading
/// never fails.
pub fn load(path: &Path) -> TaskList {
    let mut tasks = TaskList::default();

    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return tasks,
        Err(err) => {
            warn!(path = %path.display(), error = %err, "could not read task file, starting empty");
            return tasks;
        }
    };

    for line in text.lines() {
        if line.trim().is_empty() {
            continue;
        }
        match parser::parse_stored_record(line) {
            Some(command) => {
                if let Err(err) = command.execute(&mut tasks, path) {
                    warn!(record = line, error = %err, "skipping stored task");
                }
            }
            None => warn!(record = line, "skipping unreadable task record"),
        }
    }

    debug!(path = %path.display(), count = tasks.len(), "loaded tasks");
    tasks
}

/// One record per line, in list order.
pub fn serialize(list: &TaskList) -> String {
    let mut out = String::new();
    for task in list.iter() {
        out.push_str(&task.data_string());
        out.push('\n');
    }
    out
}

pub fn save(path: &Path, list: &TaskList) -> Result<()> {
    let tmp = path.with_extension("txt.tmp");
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&tmp, serialize(list))?;
    fs::rename(&tmp, path)?;
    debug!(path = %path.display(), count = list.len(), "saved tasks");
    Ok(())
}
