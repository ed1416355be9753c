use serde::de::DeserializeOwned;

use crate::store::models::{FileEntry, Message, Project, TodoList};

/// Initial contents for a [`WorkspaceStore`](crate::WorkspaceStore). The
/// store takes ownership of the records and serves every request from them;
/// nothing is read again after construction.
#[derive(Debug, Clone, Default)]
pub struct SeedData {
    pub projects: Vec<Project>,
    pub todo_lists: Vec<TodoList>,
    pub messages: Vec<Message>,
    pub files: Vec<FileEntry>,
}

impl SeedData {
    /// The embedded demo dataset: a few projects with lists, threads, and a
    /// small file tree.
    pub fn demo() -> Self {
        Self {
            projects: parse(include_str!("../seed/projects.json")),
            todo_lists: parse(include_str!("../seed/todo_lists.json")),
            messages: parse(include_str!("../seed/messages.json")),
            files: parse(include_str!("../seed/files.json")),
        }
    }
}

fn parse<T: DeserializeOwned>(raw: &str) -> T {
    serde_json::from_str(raw).expect("embedded seed data is valid JSON")
}
