use thiserror::Error;

use crate::store::models::{
    CommentId, FileId, ListId, MessageId, ProjectId, ReplyId, TaskId, VersionId,
};

/// Operation failures. Every missing record is a distinct error carrying the
/// id the caller asked for; absence is never reported as an empty success.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Project {0} not found")]
    ProjectNotFound(ProjectId),
    #[error("List {0} not found")]
    ListNotFound(ListId),
    #[error("Task {0} not found")]
    TaskNotFound(TaskId),
    #[error("Message {0} not found")]
    MessageNotFound(MessageId),
    #[error("Reply {0} not found")]
    ReplyNotFound(ReplyId),
    #[error("File {0} not found")]
    FileNotFound(FileId),
    #[error("Folder {0} not found")]
    FolderNotFound(FileId),
    #[error("Version {0} not found")]
    VersionNotFound(VersionId),
    #[error("Comment {0} not found")]
    CommentNotFound(CommentId),
    #[error("{0}")]
    Validation(String),
}

pub type Result<T> = std::result::Result<T, StoreError>;
