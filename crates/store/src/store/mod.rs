pub mod models;

mod files;
mod messages;
mod projects;
mod todos;

pub use files::{
    format_size, CreateFileRequest, CreateFolderRequest, NewComment, NewVersion, UpdateFileRequest,
};
pub use messages::{CreateMessageRequest, NewReply, UpdateMessageRequest};
pub use projects::CreateProjectRequest;
pub use todos::{NewTask, UpdateListRequest, UpdateTaskRequest};

use tokio::sync::broadcast;

use crate::config::LatencyProfile;
use crate::error::{Result, StoreError};
use crate::notify::{Notification, Notifier};
use crate::seed::SeedData;
use models::{CommentId, FileEntry, Message, MessageId, Project, ReplyId, TodoList};

/// In-memory workspace state: projects, to-do lists, message threads, and
/// the file tree, served through asynchronous CRUD operations.
///
/// Reads take `&self`, writes take `&mut self`: one logical caller drives
/// the store at a time, and every mutation applies atomically at the moment
/// its operation resolves. Operations hand back owned copies, never
/// references into the tables.
pub struct WorkspaceStore {
    projects: Vec<Project>,
    todo_lists: Vec<TodoList>,
    messages: Vec<Message>,
    files: Vec<FileEntry>,
    next_message_id: MessageId,
    next_reply_id: ReplyId,
    next_comment_id: CommentId,
    latency: LatencyProfile,
    notifier: Notifier,
}

impl WorkspaceStore {
    pub fn new(seed: SeedData, latency: LatencyProfile) -> Self {
        // Message, reply, and comment ids come from running counters and are
        // never handed out twice; the other collections assign max + 1 at
        // insert time.
        let next_message_id = next_id(seed.messages.iter().map(|m| m.id));
        let next_reply_id = next_id(
            seed.messages
                .iter()
                .flat_map(|m| m.replies.iter().map(|r| r.id)),
        );
        let next_comment_id = next_id(
            seed.files
                .iter()
                .flat_map(|f| f.comments.iter().map(|c| c.id)),
        );

        tracing::debug!(
            projects = seed.projects.len(),
            todo_lists = seed.todo_lists.len(),
            messages = seed.messages.len(),
            files = seed.files.len(),
            "workspace store initialized"
        );

        Self {
            projects: seed.projects,
            todo_lists: seed.todo_lists,
            messages: seed.messages,
            files: seed.files,
            next_message_id,
            next_reply_id,
            next_comment_id,
            latency,
            notifier: Notifier::new(),
        }
    }

    /// Store loaded with the embedded demo dataset and interactive latency.
    pub fn demo() -> Self {
        Self::new(SeedData::demo(), LatencyProfile::interactive())
    }

    /// Empty store with zero latency.
    pub fn empty() -> Self {
        Self::new(SeedData::default(), LatencyProfile::zero())
    }

    /// Subscribes to the notification side channel. Every write operation
    /// reports its outcome here; reads stay silent.
    pub fn subscribe(&self) -> broadcast::Receiver<Notification> {
        self.notifier.subscribe()
    }

    fn fail<T>(&self, error: StoreError) -> Result<T> {
        self.notifier.error(error.to_string());
        Err(error)
    }
}

// Next id for a collection: one past the current maximum, 1 when empty.
fn next_id<I>(ids: I) -> u32
where
    I: Iterator<Item = u32>,
{
    ids.max().map_or(1, |max| max + 1)
}
