use chrono::{NaiveDate, Utc};
use serde::Deserialize;

use crate::config::OpWeight;
use crate::error::{Result, StoreError};
use crate::store::models::{ListId, ProjectId, Task, TaskId, TodoList};
use crate::store::{next_id, WorkspaceStore};

#[derive(Debug, Clone, Deserialize)]
pub struct NewTask {
    pub title: String,
    pub assignee: Option<String>,
    pub due_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateListRequest {
    pub name: Option<String>,
}

// The closed set of task fields a caller is allowed to change. Fields left
// as `None` keep their current value.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateTaskRequest {
    pub title: Option<String>,
    pub completed: Option<bool>,
    pub assignee: Option<String>,
    pub due_date: Option<NaiveDate>,
}

impl WorkspaceStore {
    pub async fn lists_by_project(&self, project_id: ProjectId) -> Result<Vec<TodoList>> {
        self.latency.wait(OpWeight::Read).await;

        Ok(self
            .todo_lists
            .iter()
            .filter(|list| list.project_id == project_id)
            .cloned()
            .collect())
    }

    pub async fn create_list(&mut self, project_id: ProjectId, name: String) -> Result<TodoList> {
        self.latency.wait(OpWeight::Create).await;

        if name.trim().is_empty() {
            return self.fail(StoreError::Validation("List name is required".to_string()));
        }

        let list = TodoList {
            id: next_id(self.todo_lists.iter().map(|l| l.id)),
            project_id,
            name,
            created_at: Utc::now(),
            tasks: Vec::new(),
        };
        self.todo_lists.push(list.clone());

        self.notifier.success("To-do list created");
        Ok(list)
    }

    pub async fn update_list(
        &mut self,
        list_id: ListId,
        request: UpdateListRequest,
    ) -> Result<TodoList> {
        self.latency.wait(OpWeight::Write).await;

        let Some(index) = self.list_index(list_id) else {
            return self.fail(StoreError::ListNotFound(list_id));
        };

        let list = &mut self.todo_lists[index];
        if let Some(name) = request.name {
            list.name = name;
        }
        let updated = list.clone();

        self.notifier.success("List updated");
        Ok(updated)
    }

    pub async fn delete_list(&mut self, list_id: ListId) -> Result<TodoList> {
        self.latency.wait(OpWeight::Write).await;

        let Some(index) = self.list_index(list_id) else {
            return self.fail(StoreError::ListNotFound(list_id));
        };

        // Tasks live inside the list, so the cascade is the removal itself.
        let removed = self.todo_lists.remove(index);

        self.notifier.success("List deleted");
        Ok(removed)
    }

    pub async fn add_task(&mut self, list_id: ListId, task: NewTask) -> Result<Task> {
        self.latency.wait(OpWeight::Create).await;

        if task.title.trim().is_empty() {
            return self.fail(StoreError::Validation("Task title is required".to_string()));
        }

        let Some(index) = self.list_index(list_id) else {
            return self.fail(StoreError::ListNotFound(list_id));
        };

        let list = &mut self.todo_lists[index];
        let task = Task {
            id: next_id(list.tasks.iter().map(|t| t.id)),
            title: task.title,
            completed: false,
            assignee: task.assignee,
            due_date: task.due_date,
            created_at: Utc::now(),
        };
        list.tasks.push(task.clone());

        self.notifier.success("Task added");
        Ok(task)
    }

    pub async fn update_task(
        &mut self,
        list_id: ListId,
        task_id: TaskId,
        request: UpdateTaskRequest,
    ) -> Result<Task> {
        self.latency.wait(OpWeight::Write).await;

        let Some(list_index) = self.list_index(list_id) else {
            return self.fail(StoreError::ListNotFound(list_id));
        };
        let Some(task_index) = self.todo_lists[list_index]
            .tasks
            .iter()
            .position(|t| t.id == task_id)
        else {
            return self.fail(StoreError::TaskNotFound(task_id));
        };

        let task = &mut self.todo_lists[list_index].tasks[task_index];
        if let Some(title) = request.title {
            task.title = title;
        }
        if let Some(completed) = request.completed {
            task.completed = completed;
        }
        if let Some(assignee) = request.assignee {
            task.assignee = Some(assignee);
        }
        if let Some(due_date) = request.due_date {
            task.due_date = Some(due_date);
        }
        let updated = task.clone();

        self.notifier.success("Task updated");
        Ok(updated)
    }

    pub async fn delete_task(&mut self, list_id: ListId, task_id: TaskId) -> Result<Task> {
        self.latency.wait(OpWeight::Write).await;

        let Some(list_index) = self.list_index(list_id) else {
            return self.fail(StoreError::ListNotFound(list_id));
        };
        let Some(task_index) = self.todo_lists[list_index]
            .tasks
            .iter()
            .position(|t| t.id == task_id)
        else {
            return self.fail(StoreError::TaskNotFound(task_id));
        };

        let removed = self.todo_lists[list_index].tasks.remove(task_index);

        self.notifier.success("Task deleted");
        Ok(removed)
    }

    fn list_index(&self, list_id: ListId) -> Option<usize> {
        self.todo_lists.iter().position(|l| l.id == list_id)
    }
}
