use clap::Args;
use storefront_app::{
    database,
    domain::tasks::{PgTasksService, TasksService},
};

#[derive(Debug, Args)]
pub(crate) struct ListTasksArgs {
    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,
}

pub(crate) async fn run(args: ListTasksArgs) -> Result<(), String> {
    let pool = database::connect(&args.database_url)
        .await
        .map_err(|error| format!("failed to connect to database: {error}"))?;

    let tasks = PgTasksService::new(pool)
        .list_tasks()
        .await
        .map_err(|error| format!("failed to list tasks: {error}"))?;

    if tasks.is_empty() {
        println!("no tasks found");
        return Ok(());
    }

    for task in tasks {
        println!("task_id: {}", task.id());
        println!("title: {}", task.title());
        println!("description: {}", task.description());
        println!("created_at: {}", task.created_at());
        println!(
            "updated_at: {}",
            task.updated_at()
                .map_or_else(|| "never".to_string(), |value| value.to_string())
        );
        println!();
    }

    Ok(())
}
