use clap::{Args, Subcommand};

mod add;
mod list;

#[derive(Debug, Args)]
pub(crate) struct TasksCommand {
    #[command(subcommand)]
    command: TasksSubcommand,
}

#[derive(Debug, Subcommand)]
enum TasksSubcommand {
    /// Insert a task
    Add(add::AddTaskArgs),

    /// Print every stored task
    List(list::ListTasksArgs),
}

pub(crate) async fn run(command: TasksCommand) -> Result<(), String> {
    match command.command {
        TasksSubcommand::Add(args) => add::run(args).await,
        TasksSubcommand::List(args) => list::run(args).await,
    }
}
