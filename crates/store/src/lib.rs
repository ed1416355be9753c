//! In-memory workspace store for project collaboration: projects, to-do
//! lists, message threads, and a file manager with versioning and comments.
//!
//! Every operation is asynchronous and resolves after a configurable
//! artificial delay, emulating the request/response contract of a remote API
//! without any network underneath. State lives for the lifetime of the store
//! instance; nothing is persisted.

pub mod config;
pub mod error;
pub mod notify;
pub mod seed;
pub mod store;

pub use config::{LatencyProfile, OpWeight};
pub use error::{Result, StoreError};
pub use notify::{Notification, Severity};
pub use seed::SeedData;
pub use store::models::{
    Comment, CommentId, FileEntry, FileId, FileKind, FileVersion, ListId, Message, MessageId,
    Project, ProjectId, Reply, ReplyId, Task, TaskId, TeamMember, TodoList, VersionId,
};
pub use store::{
    format_size, CreateFileRequest, CreateFolderRequest, CreateMessageRequest,
    CreateProjectRequest, NewComment, NewReply, NewTask, NewVersion, UpdateFileRequest,
    UpdateListRequest, UpdateMessageRequest, UpdateTaskRequest, WorkspaceStore,
};
