use chrono::Utc;
use serde::Deserialize;

use crate::config::OpWeight;
use crate::error::{Result, StoreError};
use crate::store::models::{
    Comment, CommentId, FileEntry, FileId, FileKind, FileVersion, ProjectId, VersionId,
};
use crate::store::{next_id, WorkspaceStore};

#[derive(Debug, Clone, Deserialize)]
pub struct CreateFileRequest {
    pub project_id: ProjectId,
    pub folder_id: Option<FileId>,
    pub name: String,
    /// MIME-like content type; `"folder"` is rejected here, folders go
    /// through [`WorkspaceStore::create_folder`].
    pub kind: String,
    pub size: u64,
    pub url: String,
    pub uploaded_by: String,
    pub description: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Explicit version history. Left empty, the store creates version
    /// "1.0" from the metadata above.
    #[serde(default)]
    pub versions: Vec<NewVersion>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateFolderRequest {
    pub project_id: ProjectId,
    pub folder_id: Option<FileId>,
    pub name: String,
    pub created_by: String,
}

// The closed set of file fields a caller is allowed to change. Content and
// upload metadata only move through add_version / rollback_to_version.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateFileRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub tags: Option<Vec<String>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewVersion {
    pub label: String,
    pub uploaded_by: String,
    pub size: u64,
    pub url: String,
    pub changes: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewComment {
    pub author: String,
    pub content: String,
}

impl WorkspaceStore {
    pub async fn files_by_project(&self, project_id: ProjectId) -> Result<Vec<FileEntry>> {
        self.latency.wait(OpWeight::Read).await;

        Ok(self
            .files
            .iter()
            .filter(|file| file.project_id == project_id)
            .cloned()
            .collect())
    }

    pub async fn file(&self, id: FileId) -> Result<FileEntry> {
        self.latency.wait(OpWeight::Read).await;

        self.files
            .iter()
            .find(|file| file.id == id)
            .cloned()
            .ok_or(StoreError::FileNotFound(id))
    }

    /// Directory listing. `None` lists the workspace root.
    pub async fn files_in_folder(
        &self,
        project_id: ProjectId,
        folder_id: Option<FileId>,
    ) -> Result<Vec<FileEntry>> {
        self.latency.wait(OpWeight::Read).await;

        Ok(self
            .files
            .iter()
            .filter(|file| file.project_id == project_id && file.folder_id == folder_id)
            .cloned()
            .collect())
    }

    pub async fn create_file(&mut self, request: CreateFileRequest) -> Result<FileEntry> {
        self.latency.wait(OpWeight::Create).await;

        if request.name.trim().is_empty() {
            return self.fail(StoreError::Validation("File name is required".to_string()));
        }
        let kind = FileKind::from(request.kind);
        if kind.is_folder() {
            return self.fail(StoreError::Validation(
                "Folders are created with create_folder".to_string(),
            ));
        }
        if let Some(folder_id) = request.folder_id {
            if let Err(error) = self.check_parent_folder(request.project_id, folder_id) {
                return self.fail(error);
            }
        }

        let now = Utc::now();
        let mut versions: Vec<FileVersion> = request
            .versions
            .into_iter()
            .enumerate()
            .map(|(index, version)| FileVersion {
                id: index as VersionId + 1,
                label: version.label,
                upload_date: now,
                uploaded_by: version.uploaded_by,
                size: version.size,
                url: version.url,
                changes: version.changes,
            })
            .collect();
        if versions.is_empty() {
            versions.push(FileVersion {
                id: 1,
                label: "1.0".to_string(),
                upload_date: now,
                uploaded_by: request.uploaded_by.clone(),
                size: request.size,
                url: request.url.clone(),
                changes: "Initial version".to_string(),
            });
        }

        // The entry's own metadata mirrors whichever version is newest.
        let newest = versions[versions.len() - 1].clone();
        let entry = FileEntry {
            id: next_id(self.files.iter().map(|f| f.id)),
            project_id: request.project_id,
            folder_id: request.folder_id,
            name: request.name,
            kind,
            size: newest.size,
            url: Some(newest.url),
            upload_date: newest.upload_date,
            uploaded_by: newest.uploaded_by,
            description: request.description,
            tags: request.tags,
            versions,
            comments: Vec::new(),
        };
        self.files.push(entry.clone());

        self.notifier
            .success(format!("{} uploaded successfully", entry.name));
        Ok(entry)
    }

    pub async fn create_folder(&mut self, request: CreateFolderRequest) -> Result<FileEntry> {
        self.latency.wait(OpWeight::Create).await;

        if request.name.trim().is_empty() {
            return self.fail(StoreError::Validation(
                "Folder name is required".to_string(),
            ));
        }
        if let Some(folder_id) = request.folder_id {
            if let Err(error) = self.check_parent_folder(request.project_id, folder_id) {
                return self.fail(error);
            }
        }

        let entry = FileEntry {
            id: next_id(self.files.iter().map(|f| f.id)),
            project_id: request.project_id,
            folder_id: request.folder_id,
            name: request.name,
            kind: FileKind::Folder,
            size: 0,
            url: None,
            upload_date: Utc::now(),
            uploaded_by: request.created_by,
            description: None,
            tags: Vec::new(),
            versions: Vec::new(),
            comments: Vec::new(),
        };
        self.files.push(entry.clone());

        self.notifier.success("Folder created successfully");
        Ok(entry)
    }

    pub async fn update_file(
        &mut self,
        id: FileId,
        request: UpdateFileRequest,
    ) -> Result<FileEntry> {
        self.latency.wait(OpWeight::Write).await;

        let Some(index) = self.file_index(id) else {
            return self.fail(StoreError::FileNotFound(id));
        };

        let file = &mut self.files[index];
        if let Some(name) = request.name {
            file.name = name;
        }
        if let Some(description) = request.description {
            file.description = Some(description);
        }
        if let Some(tags) = request.tags {
            file.tags = tags;
        }
        let updated = file.clone();

        self.notifier.success("File updated");
        Ok(updated)
    }

    pub async fn add_version(&mut self, file_id: FileId, version: NewVersion) -> Result<FileEntry> {
        self.latency.wait(OpWeight::Write).await;

        let Some(index) = self.file_index(file_id) else {
            return self.fail(StoreError::FileNotFound(file_id));
        };
        if self.files[index].kind.is_folder() {
            return self.fail(StoreError::Validation(
                "Folders do not have versions".to_string(),
            ));
        }

        let file = &mut self.files[index];
        let version = FileVersion {
            id: next_id(file.versions.iter().map(|v| v.id)),
            label: version.label,
            upload_date: Utc::now(),
            uploaded_by: version.uploaded_by,
            size: version.size,
            url: version.url,
            changes: version.changes,
        };
        // Mirror the newest version onto the entry itself.
        file.url = Some(version.url.clone());
        file.size = version.size;
        file.upload_date = version.upload_date;
        file.uploaded_by = version.uploaded_by.clone();
        file.versions.push(version);
        let updated = file.clone();

        self.notifier.success("New version uploaded");
        Ok(updated)
    }

    /// Restores the content reference and size of an earlier version. The
    /// version list and the upload metadata stay exactly as they are.
    pub async fn rollback_to_version(
        &mut self,
        file_id: FileId,
        version_id: VersionId,
    ) -> Result<FileEntry> {
        self.latency.wait(OpWeight::Write).await;

        let Some(index) = self.file_index(file_id) else {
            return self.fail(StoreError::FileNotFound(file_id));
        };
        let Some(version_index) = self.files[index]
            .versions
            .iter()
            .position(|v| v.id == version_id)
        else {
            return self.fail(StoreError::VersionNotFound(version_id));
        };

        let file = &mut self.files[index];
        let FileVersion {
            url, size, label, ..
        } = file.versions[version_index].clone();
        file.url = Some(url);
        file.size = size;
        let updated = file.clone();

        self.notifier
            .success(format!("Rolled back to version {label}"));
        Ok(updated)
    }

    pub async fn add_comment(&mut self, file_id: FileId, comment: NewComment) -> Result<Comment> {
        self.latency.wait(OpWeight::Write).await;

        if comment.content.trim().is_empty() {
            return self.fail(StoreError::Validation(
                "Comment content is required".to_string(),
            ));
        }
        let Some(index) = self.file_index(file_id) else {
            return self.fail(StoreError::FileNotFound(file_id));
        };
        if self.files[index].kind.is_folder() {
            return self.fail(StoreError::Validation(
                "Folders do not have comments".to_string(),
            ));
        }

        let now = Utc::now();
        let comment = Comment {
            id: self.next_comment_id,
            author: comment.author,
            content: comment.content,
            created_at: now,
            updated_at: now,
        };
        self.next_comment_id += 1;
        self.files[index].comments.push(comment.clone());

        self.notifier.success("Comment added");
        Ok(comment)
    }

    pub async fn update_comment(
        &mut self,
        file_id: FileId,
        comment_id: CommentId,
        content: String,
    ) -> Result<Comment> {
        self.latency.wait(OpWeight::Write).await;

        let Some(file_index) = self.file_index(file_id) else {
            return self.fail(StoreError::FileNotFound(file_id));
        };
        let Some(comment_index) = self.files[file_index]
            .comments
            .iter()
            .position(|c| c.id == comment_id)
        else {
            return self.fail(StoreError::CommentNotFound(comment_id));
        };

        let comment = &mut self.files[file_index].comments[comment_index];
        comment.content = content;
        comment.updated_at = Utc::now();
        let updated = comment.clone();

        self.notifier.success("Comment updated");
        Ok(updated)
    }

    pub async fn delete_comment(&mut self, file_id: FileId, comment_id: CommentId) -> Result<Comment> {
        self.latency.wait(OpWeight::Write).await;

        let Some(file_index) = self.file_index(file_id) else {
            return self.fail(StoreError::FileNotFound(file_id));
        };
        let Some(comment_index) = self.files[file_index]
            .comments
            .iter()
            .position(|c| c.id == comment_id)
        else {
            return self.fail(StoreError::CommentNotFound(comment_id));
        };

        let removed = self.files[file_index].comments.remove(comment_index);

        self.notifier.success("Comment deleted");
        Ok(removed)
    }

    pub async fn delete_file(&mut self, file_id: FileId) -> Result<FileEntry> {
        self.latency.wait(OpWeight::Write).await;

        let Some(index) = self.file_index(file_id) else {
            return self.fail(StoreError::FileNotFound(file_id));
        };

        let removed = self.files.remove(index);

        // A folder takes its whole subtree with it, so no surviving entry is
        // left pointing at a missing parent.
        if removed.kind.is_folder() {
            let mut doomed = vec![removed.id];
            let mut cursor = 0;
            while cursor < doomed.len() {
                let parent = doomed[cursor];
                doomed.extend(
                    self.files
                        .iter()
                        .filter(|f| f.folder_id == Some(parent))
                        .map(|f| f.id),
                );
                cursor += 1;
            }
            self.files.retain(|f| !doomed.contains(&f.id));
            tracing::debug!(folder = removed.id, "removed folder subtree");
        }

        self.notifier
            .success(format!("{} deleted successfully", removed.name));
        Ok(removed)
    }

    /// Case-insensitive substring search over name, description, and tags.
    pub async fn search_files(
        &self,
        project_id: ProjectId,
        query: &str,
    ) -> Result<Vec<FileEntry>> {
        self.latency.wait(OpWeight::Read).await;

        let needle = query.to_lowercase();
        Ok(self
            .files
            .iter()
            .filter(|file| file.project_id == project_id && matches_query(file, &needle))
            .cloned()
            .collect())
    }

    fn file_index(&self, id: FileId) -> Option<usize> {
        self.files.iter().position(|f| f.id == id)
    }

    fn check_parent_folder(
        &self,
        project_id: ProjectId,
        folder_id: FileId,
    ) -> std::result::Result<(), StoreError> {
        match self
            .files
            .iter()
            .find(|f| f.id == folder_id && f.project_id == project_id)
        {
            Some(entry) if entry.kind.is_folder() => Ok(()),
            Some(entry) => Err(StoreError::Validation(format!(
                "{} is not a folder",
                entry.name
            ))),
            None => Err(StoreError::FolderNotFound(folder_id)),
        }
    }
}

fn matches_query(file: &FileEntry, needle: &str) -> bool {
    file.name.to_lowercase().contains(needle)
        || file
            .description
            .as_ref()
            .is_some_and(|description| description.to_lowercase().contains(needle))
        || file.tags.iter().any(|tag| tag.to_lowercase().contains(needle))
}

/// Human-readable size, e.g. `2.4 MB`.
pub fn format_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["B", "KB", "MB", "GB"];

    if bytes < 1024 {
        return format!("{bytes} B");
    }
    let exponent = ((bytes as f64).log2() / 10.0).floor() as usize;
    let exponent = exponent.min(UNITS.len() - 1);
    let value = bytes as f64 / (1u64 << (10 * exponent)) as f64;
    format!("{:.1} {}", value, UNITS[exponent])
}
