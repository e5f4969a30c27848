//! Interactive terminal client for the remote todo collection.

use std::io::Write as _;
use std::sync::Arc;
use std::time::Duration;

use todo_client::view::{self, Input, TodoForm};
use todo_client::{
    AppState, ClientConfig, HttpTodoApi, TodoAction, TodoEnvironment, TodoReducer,
};
use todo_sync_core::environment::SystemClock;
use todo_sync_runtime::Store;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);
const SHUTDOWN_TIMEOUT: Duration = Duration::from_secs(5);

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "todo_client=info,todo_sync_runtime=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let config = ClientConfig::from_env();
    tracing::info!(base_url = %config.base_url, "Starting todo client");

    let env = TodoEnvironment::new(HttpTodoApi::new(&config), Arc::new(SystemClock));
    let store = Store::new(AppState::new(), TodoReducer::new(), env);

    // Initial sync before handing over the prompt.
    let outcome = store
        .send_and_wait_for(
            TodoAction::FetchTodos,
            |a| {
                matches!(
                    a,
                    TodoAction::TodosFetched { .. } | TodoAction::FetchFailed { .. }
                )
            },
            REQUEST_TIMEOUT,
        )
        .await;
    if let Err(e) = outcome {
        tracing::warn!(error = %e, "Initial fetch did not complete");
    }

    println!("{}", view::HELP);
    print_screen(&store).await;

    let mut form = TodoForm::new();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        prompt()?;
        let Some(line) = lines.next_line().await? else {
            break;
        };

        let snapshot = store.state(Clone::clone).await;
        match view::parse_input(&line, &snapshot, &mut form) {
            Input::Intent(action) => {
                let mut handle = store.send(action).await?;
                if let Err(e) = handle.wait_with_timeout(REQUEST_TIMEOUT).await {
                    tracing::warn!(error = %e, "Request still pending");
                }
                print_screen(&store).await;
            }
            Input::Render => print_screen(&store).await,
            Input::Help => println!("{}", view::HELP),
            Input::Quit => break,
            Input::Noop(Some(message)) => println!("{message}"),
            Input::Noop(None) => {}
        }
    }

    store.shutdown(SHUTDOWN_TIMEOUT).await?;
    Ok(())
}

async fn print_screen(
    store: &Store<AppState, TodoAction, TodoEnvironment<HttpTodoApi>, TodoReducer<HttpTodoApi>>,
) {
    let screen = store.state(view::render).await;
    print!("{screen}");
}

fn prompt() -> std::io::Result<()> {
    print!("> ");
    std::io::stdout().flush()
}
