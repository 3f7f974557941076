mod app;
mod config;
mod input;
mod logging;
mod render;
mod transport;

use dotenv::dotenv;
use todo_core::{TodoClient, TodoService};

use crate::config::Config;
use crate::transport::UreqTransport;

fn main() -> anyhow::Result<()> {
    dotenv().ok();
    let config = Config::from_env();
    logging::setup_logging(config.log_file.as_deref())?;

    let client = TodoClient::new(&config.api_url);
    let transport = UreqTransport::new();

    match std::env::args().nth(1).as_deref() {
        Some("list") => print_list(client, transport),
        Some(other) => anyhow::bail!("unknown command {other:?}; run without arguments or with `list`"),
        None => app::run(client, &transport),
    }
}

/// Non-interactive dump of the current list.
fn print_list(client: TodoClient, transport: UreqTransport) -> anyhow::Result<()> {
    let service = TodoService::new(client, transport);
    let todos = service.list_todos()?;
    if todos.is_empty() {
        println!("No todos found.");
        return Ok(());
    }
    for todo in todos {
        let mark = if todo.completed { "x" } else { " " };
        if todo.description.is_empty() {
            println!("[{mark}] {:>4}  {}", todo.id, todo.title);
        } else {
            println!("[{mark}] {:>4}  {}  ({})", todo.id, todo.title, todo.description);
        }
    }
    Ok(())
}
