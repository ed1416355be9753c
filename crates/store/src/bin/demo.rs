use std::time::Duration;

use huddle_store::{
    format_size, CreateMessageRequest, CreateProjectRequest, NewReply, NewTask, NewVersion,
    Severity, UpdateTaskRequest, WorkspaceStore,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "huddle_store=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut store = WorkspaceStore::demo();

    // Mirror the notification channel to the terminal, the way the UI
    // surfaces toasts.
    let mut notifications = store.subscribe();
    let printer = tokio::spawn(async move {
        while let Ok(notification) = notifications.recv().await {
            let prefix = match notification.severity {
                Severity::Success => "ok",
                Severity::Error => "error",
            };
            println!("  [{prefix}] {}", notification.message);
        }
    });

    let projects = store.projects().await?;
    println!("{} projects in the workspace:", projects.len());
    for project in &projects {
        println!("  #{} {}: {}", project.id, project.name, project.description);
    }

    let project = store
        .create_project(CreateProjectRequest {
            name: "Spring launch".to_string(),
            description: "Everything needed for the spring release".to_string(),
            color: "#1d4ed8".to_string(),
            team_members: Vec::new(),
        })
        .await?;

    let list = store
        .create_list(project.id, "Launch checklist".to_string())
        .await?;
    let task = store
        .add_task(
            list.id,
            NewTask {
                title: "Write the announcement".to_string(),
                assignee: Some("Dana".to_string()),
                due_date: None,
            },
        )
        .await?;
    store
        .update_task(
            list.id,
            task.id,
            UpdateTaskRequest {
                completed: Some(true),
                ..Default::default()
            },
        )
        .await?;

    let thread = store
        .create_message(CreateMessageRequest {
            project_id: project.id,
            title: "Kickoff".to_string(),
            content: "Who owns the launch notes?".to_string(),
            author: "Dana".to_string(),
            author_avatar: None,
        })
        .await?;
    store
        .add_reply(
            thread.id,
            NewReply {
                content: "On it.".to_string(),
                author: "Priya".to_string(),
                avatar: None,
            },
        )
        .await?;

    // Version round-trip on a seeded file.
    let files = store.files_by_project(1).await?;
    if let Some(file) = files.iter().find(|f| !f.kind.is_folder()) {
        let updated = store
            .add_version(
                file.id,
                NewVersion {
                    label: "2.0".to_string(),
                    uploaded_by: "Dana".to_string(),
                    size: file.size + 1024,
                    url: "https://files.huddle.dev/demo/v2".to_string(),
                    changes: "Refreshed copy".to_string(),
                },
            )
            .await?;
        println!(
            "{} now has {} versions ({})",
            updated.name,
            updated.versions.len(),
            format_size(updated.size)
        );
        if let Some(first) = updated.versions.first() {
            store.rollback_to_version(updated.id, first.id).await?;
        }
    }

    // A failing call surfaces on the channel too.
    let _ = store.delete_list(9999).await;

    // Let the printer drain before shutting down.
    tokio::time::sleep(Duration::from_millis(50)).await;
    printer.abort();

    Ok(())
}
