use std::time::Duration;

use tokio::sync::broadcast::error::TryRecvError;

use huddle_store::{
    CreateMessageRequest, CreateProjectRequest, LatencyProfile, NewComment, SeedData, Severity,
    StoreError, WorkspaceStore,
};

fn project(name: &str) -> CreateProjectRequest {
    CreateProjectRequest {
        name: name.to_string(),
        description: format!("{name} description"),
        color: "#1d4ed8".to_string(),
        team_members: Vec::new(),
    }
}

fn thread(project_id: u32, title: &str) -> CreateMessageRequest {
    CreateMessageRequest {
        project_id,
        title: title.to_string(),
        content: format!("{title} body"),
        author: "Dana".to_string(),
        author_avatar: None,
    }
}

#[tokio::test]
async fn demo_seed_loads_consistent_state() {
    let store = WorkspaceStore::new(SeedData::demo(), LatencyProfile::zero());

    let projects = store.projects().await.unwrap();
    assert!(!projects.is_empty());

    for project in &projects {
        let files = store.files_by_project(project.id).await.unwrap();
        for file in &files {
            if file.kind.is_folder() {
                assert_eq!(file.size, 0);
                assert_eq!(file.url, None);
                assert!(file.versions.is_empty());
                assert!(file.comments.is_empty());
            } else {
                let newest = file
                    .versions
                    .last()
                    .expect("seeded files carry their version history");
                assert_eq!(file.url.as_deref(), Some(newest.url.as_str()));
                assert_eq!(file.size, newest.size);
                assert_eq!(file.uploaded_by, newest.uploaded_by);
                assert_eq!(file.upload_date, newest.upload_date);
            }
            if let Some(folder_id) = file.folder_id {
                let parent = files
                    .iter()
                    .find(|f| f.id == folder_id)
                    .expect("parent folder exists in the same project");
                assert!(parent.kind.is_folder());
            }
        }
    }
}

#[tokio::test]
async fn seeded_counters_continue_past_the_seed_maxima() {
    let mut store = WorkspaceStore::new(SeedData::demo(), LatencyProfile::zero());

    let seed = SeedData::demo();
    let max_comment = seed
        .files
        .iter()
        .flat_map(|f| f.comments.iter().map(|c| c.id))
        .max()
        .unwrap();
    let commented_file = seed
        .files
        .iter()
        .find(|f| !f.kind.is_folder())
        .unwrap()
        .id;

    let comment = store
        .add_comment(
            commented_file,
            NewComment {
                author: "Dana".to_string(),
                content: "Fresh comment".to_string(),
            },
        )
        .await
        .unwrap();
    assert_eq!(comment.id, max_comment + 1);
}

#[tokio::test]
async fn project_ids_extend_the_seed() {
    let mut store = WorkspaceStore::new(SeedData::demo(), LatencyProfile::zero());

    let before = store.projects().await.unwrap();
    let max = before.iter().map(|p| p.id).max().unwrap();

    let created = store.create_project(project("New Initiative")).await.unwrap();
    assert_eq!(created.id, max + 1);
}

#[tokio::test]
async fn creating_into_an_empty_store_starts_at_one() {
    let mut store = WorkspaceStore::empty();

    let created = store.create_project(project("First")).await.unwrap();
    assert_eq!(created.id, 1);
}

#[tokio::test]
async fn message_ids_are_never_reused() {
    let mut store = WorkspaceStore::empty();

    let first = store.create_message(thread(1, "first")).await.unwrap();
    let second = store.create_message(thread(1, "second")).await.unwrap();
    store.delete_message(second.id).await.unwrap();
    let third = store.create_message(thread(1, "third")).await.unwrap();

    assert_eq!(first.id, 1);
    assert!(third.id > second.id);
}

#[tokio::test]
async fn writes_report_on_the_notification_channel() {
    let mut store = WorkspaceStore::empty();
    let mut notifications = store.subscribe();

    let created = store.create_project(project("Launch")).await.unwrap();
    store
        .create_list(created.id, "Checklist".to_string())
        .await
        .unwrap();
    let missing = store.delete_list(42).await;
    assert!(matches!(missing, Err(StoreError::ListNotFound(42))));

    let first = notifications.recv().await.unwrap();
    assert_eq!(first.severity, Severity::Success);
    let second = notifications.recv().await.unwrap();
    assert_eq!(second.severity, Severity::Success);
    let third = notifications.recv().await.unwrap();
    assert_eq!(third.severity, Severity::Error);
    assert!(third.message.contains("42"));
}

#[tokio::test]
async fn reads_stay_silent() {
    let mut store = WorkspaceStore::empty();
    store.create_project(project("Launch")).await.unwrap();

    let mut notifications = store.subscribe();
    store.projects().await.unwrap();
    store.project(1).await.unwrap();

    assert!(matches!(notifications.try_recv(), Err(TryRecvError::Empty)));
}

#[tokio::test(start_paused = true)]
async fn interactive_latency_is_timer_driven() {
    let mut store = WorkspaceStore::new(SeedData::default(), LatencyProfile::interactive());

    let started = tokio::time::Instant::now();
    store.create_project(project("Launch")).await.unwrap();
    store.projects().await.unwrap();

    // Paused-clock time only moves when timers fire, so the virtual elapsed
    // time covers the configured delays without any real waiting.
    let profile = LatencyProfile::interactive();
    assert!(started.elapsed() >= profile.create + profile.read);
}

#[tokio::test]
async fn zero_latency_skips_the_timer() {
    let mut store = WorkspaceStore::empty();

    let started = std::time::Instant::now();
    store.create_project(project("Launch")).await.unwrap();
    assert!(started.elapsed() < Duration::from_secs(1));
}
