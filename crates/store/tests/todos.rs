use huddle_store::{
    CreateProjectRequest, NewTask, ProjectId, StoreError, UpdateListRequest, UpdateTaskRequest,
    WorkspaceStore,
};

async fn store_with_project() -> (WorkspaceStore, ProjectId) {
    let mut store = WorkspaceStore::empty();
    let project = store
        .create_project(CreateProjectRequest {
            name: "Autumn Launch".to_string(),
            description: "Everything needed for the autumn release".to_string(),
            color: "#1d4ed8".to_string(),
            team_members: Vec::new(),
        })
        .await
        .expect("project creation succeeds");
    (store, project.id)
}

fn new_task(title: &str) -> NewTask {
    NewTask {
        title: title.to_string(),
        assignee: None,
        due_date: None,
    }
}

#[tokio::test]
async fn list_task_walkthrough() {
    let (mut store, project_id) = store_with_project().await;

    let list = store
        .create_list(project_id, "Launch".to_string())
        .await
        .unwrap();
    assert_eq!(list.id, 1);
    assert!(list.tasks.is_empty());

    let task = store.add_task(list.id, new_task("Write docs")).await.unwrap();
    assert_eq!(task.id, 1);
    assert!(!task.completed);

    let updated = store
        .update_task(
            list.id,
            task.id,
            UpdateTaskRequest {
                completed: Some(true),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert!(updated.completed);
    assert_eq!(updated.title, "Write docs");
    assert_eq!(updated.assignee, None);
    assert_eq!(updated.due_date, None);

    store.delete_list(list.id).await.unwrap();
    let lists = store.lists_by_project(project_id).await.unwrap();
    assert!(lists.is_empty());
}

#[tokio::test]
async fn task_ids_are_scoped_to_their_list() {
    let (mut store, project_id) = store_with_project().await;

    let design = store
        .create_list(project_id, "Design".to_string())
        .await
        .unwrap();
    let content = store
        .create_list(project_id, "Content".to_string())
        .await
        .unwrap();

    let first = store.add_task(design.id, new_task("Hero image")).await.unwrap();
    let second = store.add_task(design.id, new_task("Color audit")).await.unwrap();
    let other = store.add_task(content.id, new_task("Pricing copy")).await.unwrap();

    assert_eq!(first.id, 1);
    assert_eq!(second.id, 2);
    assert_eq!(other.id, 1);
}

#[tokio::test]
async fn deleting_a_list_takes_its_tasks_with_it() {
    let (mut store, project_id) = store_with_project().await;

    let list = store
        .create_list(project_id, "Design".to_string())
        .await
        .unwrap();
    store.add_task(list.id, new_task("One")).await.unwrap();
    store.add_task(list.id, new_task("Two")).await.unwrap();

    let removed = store.delete_list(list.id).await.unwrap();
    assert_eq!(removed.tasks.len(), 2);

    let missing = store.delete_task(list.id, 1).await;
    assert!(matches!(missing, Err(StoreError::ListNotFound(id)) if id == list.id));
}

#[tokio::test]
async fn updating_a_missing_task_fails() {
    let (mut store, project_id) = store_with_project().await;

    let list = store
        .create_list(project_id, "Design".to_string())
        .await
        .unwrap();

    let missing_task = store
        .update_task(list.id, 7, UpdateTaskRequest::default())
        .await;
    assert!(matches!(missing_task, Err(StoreError::TaskNotFound(7))));

    let missing_list = store.update_task(99, 1, UpdateTaskRequest::default()).await;
    assert!(matches!(missing_list, Err(StoreError::ListNotFound(99))));
}

#[tokio::test]
async fn list_ids_grow_from_the_maximum() {
    let (mut store, project_id) = store_with_project().await;

    let first = store
        .create_list(project_id, "First".to_string())
        .await
        .unwrap();
    let second = store
        .create_list(project_id, "Second".to_string())
        .await
        .unwrap();
    assert_eq!((first.id, second.id), (1, 2));

    store.delete_list(first.id).await.unwrap();
    let third = store
        .create_list(project_id, "Third".to_string())
        .await
        .unwrap();
    assert_eq!(third.id, 3);
}

#[tokio::test]
async fn renaming_keeps_tasks_intact() {
    let (mut store, project_id) = store_with_project().await;

    let list = store
        .create_list(project_id, "Design".to_string())
        .await
        .unwrap();
    store.add_task(list.id, new_task("Hero image")).await.unwrap();

    let renamed = store
        .update_list(
            list.id,
            UpdateListRequest {
                name: Some("Visual design".to_string()),
            },
        )
        .await
        .unwrap();
    assert_eq!(renamed.name, "Visual design");
    assert_eq!(renamed.tasks.len(), 1);
}

#[tokio::test]
async fn blank_names_are_rejected() {
    let (mut store, project_id) = store_with_project().await;

    let blank_list = store.create_list(project_id, "   ".to_string()).await;
    assert!(matches!(blank_list, Err(StoreError::Validation(_))));

    let list = store
        .create_list(project_id, "Design".to_string())
        .await
        .unwrap();
    let blank_task = store.add_task(list.id, new_task("  ")).await;
    assert!(matches!(blank_task, Err(StoreError::Validation(_))));
}
