use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

// All ids are small process-local integers. The aliases document which id
// space a value belongs to; none of them are interchangeable.
pub type ProjectId = u32;
pub type ListId = u32;
pub type TaskId = u32;
pub type MessageId = u32;
pub type ReplyId = u32;
pub type FileId = u32;
pub type VersionId = u32;
pub type CommentId = u32;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamMember {
    pub name: String,
    pub avatar: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub id: ProjectId,
    pub name: String,
    pub description: String,
    pub color: String,
    pub team_members: Vec<TeamMember>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TodoList {
    pub id: ListId,
    pub project_id: ProjectId,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub tasks: Vec<Task>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    pub completed: bool,
    pub assignee: Option<String>,
    pub due_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub id: MessageId,
    pub project_id: ProjectId,
    pub title: String,
    pub content: String,
    pub author: String,
    pub author_avatar: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub replies: Vec<Reply>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reply {
    pub id: ReplyId,
    pub content: String,
    pub author: String,
    pub avatar: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Either a folder or a regular file tagged with a MIME-like content type.
/// Folders live in the same flat table as files and are distinguished by
/// kind alone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FileKind {
    Folder,
    Mime(String),
}

impl FileKind {
    pub fn is_folder(&self) -> bool {
        matches!(self, FileKind::Folder)
    }
}

impl From<String> for FileKind {
    fn from(value: String) -> Self {
        if value == "folder" {
            FileKind::Folder
        } else {
            FileKind::Mime(value)
        }
    }
}

impl From<FileKind> for String {
    fn from(value: FileKind) -> Self {
        match value {
            FileKind::Folder => "folder".to_string(),
            FileKind::Mime(mime) => mime,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileEntry {
    pub id: FileId,
    pub project_id: ProjectId,
    /// `None` means the entry sits at the workspace root.
    pub folder_id: Option<FileId>,
    pub name: String,
    pub kind: FileKind,
    pub size: u64,
    /// Content reference. Always mirrors the newest version; `None` for
    /// folders, which carry no content.
    pub url: Option<String>,
    pub upload_date: DateTime<Utc>,
    pub uploaded_by: String,
    pub description: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub versions: Vec<FileVersion>,
    #[serde(default)]
    pub comments: Vec<Comment>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileVersion {
    pub id: VersionId,
    pub label: String,
    pub upload_date: DateTime<Utc>,
    pub uploaded_by: String,
    pub size: u64,
    pub url: String,
    pub changes: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comment {
    pub id: CommentId,
    pub author: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
