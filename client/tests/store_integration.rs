//! End-to-end tests running the todo client against the in-memory service.
//!
//! Each test drives a real store: the intent reduces, the network effect
//! runs on the runtime, and the outcome feeds back through the reducer.
//! `EffectHandle::wait` pins down the moment reconciliation is done.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)] // Test code can use unwrap/expect/panic

use std::time::Duration;

use todo_client::{
    AppState, MockTodoApi, TodoAction, TodoEnvironment, TodoId, TodoRecord, TodoReducer, UserId,
};
use todo_sync_runtime::Store;
use todo_sync_testing::test_clock;

type TestStore =
    Store<AppState, TodoAction, TodoEnvironment<MockTodoApi>, TodoReducer<MockTodoApi>>;

fn record(id: u64, user: u64, title: &str, completed: bool) -> TodoRecord {
    TodoRecord {
        id: TodoId::new(id),
        user_id: UserId::new(user),
        title: title.to_string(),
        completed,
    }
}

fn store_with(api: MockTodoApi) -> TestStore {
    let env = TodoEnvironment::new(api, test_clock());
    Store::new(AppState::new(), TodoReducer::new(), env)
}

async fn send_and_settle(store: &TestStore, action: TodoAction) {
    let mut handle = store.send(action).await.unwrap();
    handle
        .wait_with_timeout(Duration::from_secs(5))
        .await
        .unwrap();
}

#[tokio::test]
async fn fetch_mirrors_the_remote_collection() {
    let api = MockTodoApi::new(vec![record(1, 5, "A", false), record(2, 7, "B", true)]);
    let store = store_with(api);

    send_and_settle(&store, TodoAction::FetchTodos).await;

    let (count, loading, synced) = store
        .state(|s| (s.list.count(), s.list.loading, s.list.last_synced_at))
        .await;
    assert_eq!(count, 2);
    assert!(!loading);
    assert!(synced.is_some());
}

#[tokio::test]
async fn create_appends_the_echoed_record() {
    let api = MockTodoApi::new(vec![record(1, 5, "A", false)]);
    let store = store_with(api.clone());

    send_and_settle(&store, TodoAction::FetchTodos).await;
    send_and_settle(
        &store,
        TodoAction::CreateTodo {
            user_id: UserId::new(5),
            title: "B".to_string(),
        },
    )
    .await;

    let todos = store.state(|s| s.list.todos.clone()).await;
    assert_eq!(todos.len(), 2);
    assert_eq!(todos[1], record(2, 5, "B", false));
    // The service accepted the same record.
    assert_eq!(api.records().len(), 2);
}

#[tokio::test]
async fn delete_removes_by_the_requested_id() {
    let api = MockTodoApi::new(vec![record(1, 5, "A", false), record(2, 5, "B", false)]);
    let store = store_with(api);

    send_and_settle(&store, TodoAction::FetchTodos).await;
    send_and_settle(&store, TodoAction::DeleteTodo { id: TodoId::new(1) }).await;

    let ids = store
        .state(|s| s.list.todos.iter().map(|t| t.id).collect::<Vec<_>>())
        .await;
    assert_eq!(ids, vec![TodoId::new(2)]);
}

#[tokio::test]
async fn toggle_round_trips_through_the_service() {
    let api = MockTodoApi::new(vec![record(1, 5, "A", false)]);
    let store = store_with(api.clone());

    send_and_settle(&store, TodoAction::FetchTodos).await;
    send_and_settle(
        &store,
        TodoAction::ToggleCompleted {
            id: TodoId::new(1),
            completed: false,
        },
    )
    .await;

    let todo = store.state(|s| s.list.todos[0].clone()).await;
    assert_eq!(todo, record(1, 5, "A", true));
    assert!(api.records()[0].completed);
}

#[tokio::test]
async fn rejected_fetch_records_the_failure_and_keeps_the_mirror() {
    let api = MockTodoApi::new(vec![record(1, 5, "A", false)]);
    let store = store_with(api.clone());

    send_and_settle(&store, TodoAction::FetchTodos).await;

    api.fail_with("Network Error");
    send_and_settle(&store, TodoAction::FetchTodos).await;

    let (count, loading, error) = store
        .state(|s| (s.list.count(), s.list.loading, s.list.error.clone()))
        .await;
    assert_eq!(count, 1);
    assert!(!loading);
    assert_eq!(error.as_deref(), Some("Network Error"));
}

#[tokio::test]
async fn retry_after_failure_clears_the_error() {
    let api = MockTodoApi::new(vec![record(1, 5, "A", false)]);
    let store = store_with(api.clone());

    api.fail_with("Network Error");
    send_and_settle(&store, TodoAction::FetchTodos).await;
    assert!(store.state(|s| s.list.error.is_some()).await);

    api.recover();
    send_and_settle(&store, TodoAction::FetchTodos).await;

    let (count, error) = store.state(|s| (s.list.count(), s.list.error.clone())).await;
    assert_eq!(count, 1);
    assert!(error.is_none());
}

#[tokio::test]
async fn create_after_delete_never_reuses_a_live_id() {
    let api = MockTodoApi::new(vec![
        record(1, 5, "A", false),
        record(2, 5, "B", false),
        record(3, 5, "C", false),
    ]);
    let store = store_with(api);

    send_and_settle(&store, TodoAction::FetchTodos).await;
    send_and_settle(&store, TodoAction::DeleteTodo { id: TodoId::new(2) }).await;
    send_and_settle(
        &store,
        TodoAction::CreateTodo {
            user_id: UserId::new(5),
            title: "D".to_string(),
        },
    )
    .await;

    let mut ids = store
        .state(|s| s.list.todos.iter().map(|t| t.id.get()).collect::<Vec<_>>())
        .await;
    ids.sort_unstable();
    assert_eq!(ids, vec![1, 3, 4]);
}

#[tokio::test]
async fn filter_selection_survives_data_changes() {
    let api = MockTodoApi::new(vec![record(1, 5, "A", false), record(2, 7, "B", false)]);
    let store = store_with(api);

    send_and_settle(&store, TodoAction::FetchTodos).await;
    store
        .send(TodoAction::SelectUser {
            user_id: Some(UserId::new(5)),
        })
        .await
        .unwrap();
    send_and_settle(&store, TodoAction::DeleteTodo { id: TodoId::new(2) }).await;

    let (selected, visible) = store
        .state(|s| (s.filter.selected_user, s.filtered().len()))
        .await;
    assert_eq!(selected, Some(UserId::new(5)));
    assert_eq!(visible, 1);
}

#[tokio::test]
async fn concurrent_operations_all_reconcile() {
    let api = MockTodoApi::new(vec![record(1, 5, "A", false), record(2, 5, "B", false)]);
    let store = store_with(api);

    send_and_settle(&store, TodoAction::FetchTodos).await;

    let create = store.send(TodoAction::CreateTodo {
        user_id: UserId::new(5),
        title: "C".to_string(),
    });
    let delete = store.send(TodoAction::DeleteTodo { id: TodoId::new(1) });
    let (create, delete) = tokio::join!(create, delete);
    create.unwrap().wait().await;
    delete.unwrap().wait().await;

    let mut ids = store
        .state(|s| s.list.todos.iter().map(|t| t.id.get()).collect::<Vec<_>>())
        .await;
    ids.sort_unstable();
    assert_eq!(ids, vec![2, 3]);
    assert!(!store.state(|s| s.list.loading).await);
}

#[tokio::test]
async fn send_and_wait_for_observes_the_fetch_outcome() {
    let api = MockTodoApi::new(vec![record(1, 5, "A", false)]);
    let store = store_with(api);

    let outcome = store
        .send_and_wait_for(
            TodoAction::FetchTodos,
            |a| matches!(a, TodoAction::TodosFetched { .. } | TodoAction::FetchFailed { .. }),
            Duration::from_secs(5),
        )
        .await
        .unwrap();

    assert!(matches!(outcome, TodoAction::TodosFetched { ref todos } if todos.len() == 1));
}

#[tokio::test]
async fn shutdown_rejects_new_intents() {
    let store = store_with(MockTodoApi::new(vec![]));

    store.shutdown(Duration::from_secs(1)).await.unwrap();
    let result = store.send(TodoAction::FetchTodos).await;

    assert!(result.is_err());
}
