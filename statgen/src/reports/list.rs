//! List command report data structures.

use std::path::{Path, PathBuf};

use statgen_manifest::Manifest;

use super::output::{Output, Report};

#[derive(Debug)]
struct TaskInfo {
    name: String,
    sentinel_suffix: String,
    sources: Vec<(String, PathBuf)>,
}

/// The task table with header paths as they will be opened.
#[derive(Debug)]
pub struct ListReport {
    tasks: Vec<TaskInfo>,
}

impl ListReport {
    pub fn new(manifest: &Manifest, root: &Path) -> Self {
        let tasks = manifest
            .tasks
            .iter()
            .map(|task| TaskInfo {
                name: task.name.clone(),
                sentinel_suffix: task.sentinel_suffix.clone(),
                sources: task
                    .sources
                    .iter()
                    .map(|s| (s.enum_name.clone(), root.join(&s.path)))
                    .collect(),
            })
            .collect();
        Self { tasks }
    }
}

impl Report for ListReport {
    fn render(&self, out: &mut dyn Output) {
        for (i, task) in self.tasks.iter().enumerate() {
            if i > 0 {
                out.newline();
            }
            out.section(&format!(
                "{} (sentinels: *{})",
                task.name, task.sentinel_suffix
            ));
            for (enum_name, path) in &task.sources {
                out.list_item(&format!("enum {} in {}", enum_name, path.display()));
            }
        }
    }
}
