use chrono::Utc;
use serde::Deserialize;

use crate::config::OpWeight;
use crate::error::{Result, StoreError};
use crate::store::models::{Message, MessageId, ProjectId, Reply, ReplyId};
use crate::store::WorkspaceStore;

#[derive(Debug, Clone, Deserialize)]
pub struct CreateMessageRequest {
    pub project_id: ProjectId,
    pub title: String,
    pub content: String,
    pub author: String,
    pub author_avatar: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateMessageRequest {
    pub title: Option<String>,
    pub content: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewReply {
    pub content: String,
    pub author: String,
    pub avatar: Option<String>,
}

impl WorkspaceStore {
    pub async fn messages_by_project(&self, project_id: ProjectId) -> Result<Vec<Message>> {
        self.latency.wait(OpWeight::Read).await;

        let mut messages: Vec<Message> = self
            .messages
            .iter()
            .filter(|message| message.project_id == project_id)
            .cloned()
            .collect();
        // Newest thread first.
        messages.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(messages)
    }

    pub async fn message(&self, id: MessageId) -> Result<Message> {
        self.latency.wait(OpWeight::Read).await;

        self.messages
            .iter()
            .find(|message| message.id == id)
            .cloned()
            .ok_or(StoreError::MessageNotFound(id))
    }

    pub async fn create_message(&mut self, request: CreateMessageRequest) -> Result<Message> {
        self.latency.wait(OpWeight::Create).await;

        if request.title.trim().is_empty() {
            return self.fail(StoreError::Validation(
                "Message title is required".to_string(),
            ));
        }

        let now = Utc::now();
        let message = Message {
            id: self.next_message_id,
            project_id: request.project_id,
            title: request.title,
            content: request.content,
            author: request.author,
            author_avatar: request.author_avatar,
            created_at: now,
            updated_at: now,
            replies: Vec::new(),
        };
        self.next_message_id += 1;
        self.messages.push(message.clone());

        self.notifier.success("Message thread created successfully");
        Ok(message)
    }

    pub async fn update_message(
        &mut self,
        id: MessageId,
        request: UpdateMessageRequest,
    ) -> Result<Message> {
        self.latency.wait(OpWeight::Write).await;

        let Some(index) = self.message_index(id) else {
            return self.fail(StoreError::MessageNotFound(id));
        };

        let message = &mut self.messages[index];
        if let Some(title) = request.title {
            message.title = title;
        }
        if let Some(content) = request.content {
            message.content = content;
        }
        message.updated_at = Utc::now();
        let updated = message.clone();

        self.notifier.success("Message updated successfully");
        Ok(updated)
    }

    pub async fn delete_message(&mut self, id: MessageId) -> Result<()> {
        self.latency.wait(OpWeight::Write).await;

        let Some(index) = self.message_index(id) else {
            return self.fail(StoreError::MessageNotFound(id));
        };

        self.messages.remove(index);

        self.notifier.success("Message thread deleted successfully");
        Ok(())
    }

    pub async fn add_reply(&mut self, message_id: MessageId, reply: NewReply) -> Result<Reply> {
        self.latency.wait(OpWeight::Create).await;

        if reply.content.trim().is_empty() {
            return self.fail(StoreError::Validation(
                "Reply content is required".to_string(),
            ));
        }

        let Some(index) = self.message_index(message_id) else {
            return self.fail(StoreError::MessageNotFound(message_id));
        };

        let now = Utc::now();
        let reply = Reply {
            id: self.next_reply_id,
            content: reply.content,
            author: reply.author,
            avatar: reply.avatar,
            created_at: now,
            updated_at: now,
        };
        self.next_reply_id += 1;
        self.messages[index].replies.push(reply.clone());

        self.notifier.success("Reply added successfully");
        Ok(reply)
    }

    pub async fn update_reply(
        &mut self,
        message_id: MessageId,
        reply_id: ReplyId,
        content: String,
    ) -> Result<Reply> {
        self.latency.wait(OpWeight::Write).await;

        let Some(message_index) = self.message_index(message_id) else {
            return self.fail(StoreError::MessageNotFound(message_id));
        };
        let Some(reply_index) = self.messages[message_index]
            .replies
            .iter()
            .position(|r| r.id == reply_id)
        else {
            return self.fail(StoreError::ReplyNotFound(reply_id));
        };

        let reply = &mut self.messages[message_index].replies[reply_index];
        reply.content = content;
        reply.updated_at = Utc::now();
        let updated = reply.clone();

        self.notifier.success("Reply updated successfully");
        Ok(updated)
    }

    pub async fn delete_reply(&mut self, message_id: MessageId, reply_id: ReplyId) -> Result<()> {
        self.latency.wait(OpWeight::Write).await;

        let Some(message_index) = self.message_index(message_id) else {
            return self.fail(StoreError::MessageNotFound(message_id));
        };
        let Some(reply_index) = self.messages[message_index]
            .replies
            .iter()
            .position(|r| r.id == reply_id)
        else {
            return self.fail(StoreError::ReplyNotFound(reply_id));
        };

        self.messages[message_index].replies.remove(reply_index);

        self.notifier.success("Reply deleted successfully");
        Ok(())
    }

    fn message_index(&self, id: MessageId) -> Option<usize> {
        self.messages.iter().position(|m| m.id == id)
    }
}
