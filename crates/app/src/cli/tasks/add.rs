use clap::Args;
use storefront_app::{
    database,
    domain::tasks::{PgTasksService, TasksService, commands::AddTaskCommand},
};

#[derive(Debug, Args)]
pub(crate) struct AddTaskArgs {
    /// Task title
    #[arg(long)]
    title: String,

    /// Task description
    #[arg(long, default_value = "")]
    description: String,

    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,
}

pub(crate) async fn run(args: AddTaskArgs) -> Result<(), String> {
    let title = args.title.trim();

    if title.is_empty() {
        return Err("title cannot be empty".to_string());
    }

    let pool = database::connect(&args.database_url)
        .await
        .map_err(|error| format!("failed to connect to database: {error}"))?;

    let task = PgTasksService::new(pool)
        .add_task(AddTaskCommand::new(title, args.description.trim()))
        .await
        .map_err(|error| format!("failed to add task: {error}"))?;

    println!("task_id: {}", task.id());
    println!("title: {}", task.title());
    println!("created_at: {}", task.created_at());

    Ok(())
}
