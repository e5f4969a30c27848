//! Terminal view: form state, command parsing, and rendering.
//!
//! The view owns no domain data. It reads the shared state snapshot,
//! translates user commands into intent actions, and keeps only the form
//! draft (title text, picked owner, and which record an edit targets).

use crate::actions::TodoAction;
use crate::state::AppState;
use crate::types::{TodoId, UserId};
use std::fmt::Write as _;

/// Draft being composed in the entry form.
///
/// In create mode `edit_target` is `None` and submission produces a
/// `CreateTodo` intent. Selecting a record for editing copies its title
/// and owner into the draft; submission then produces an `UpdateTodo`
/// intent that preserves the record's current completion flag.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TodoForm {
    /// Draft title text
    pub title: String,
    /// Owner of the draft; loaded from the record when editing, otherwise
    /// the filter selection applies on creation
    pub user: Option<UserId>,
    /// Record under edit, if the form is in edit mode
    pub edit_target: Option<TodoId>,
}

impl TodoForm {
    /// Creates an empty form in create mode
    #[must_use]
    pub const fn new() -> Self {
        Self {
            title: String::new(),
            user: None,
            edit_target: None,
        }
    }

    /// Switch the form into edit mode for an existing record.
    ///
    /// Copies the record's current title and owner into the draft. Returns
    /// false and leaves the form untouched if the id is not in the
    /// collection.
    pub fn begin_edit(&mut self, state: &AppState, id: TodoId) -> bool {
        match state.list.get(id) {
            Some(todo) => {
                self.title = todo.title.clone();
                self.user = Some(todo.user_id);
                self.edit_target = Some(id);
                true
            }
            None => false,
        }
    }

    /// Submit the draft, producing the intent it describes.
    ///
    /// Returns `None` for a blank title or, in create mode, when no owner
    /// can be determined (neither the form nor the filter picked a user).
    /// A successful submission clears the draft and leaves edit mode.
    pub fn submit(&mut self, state: &AppState) -> Option<TodoAction> {
        let title = self.title.trim().to_string();
        if title.is_empty() {
            return None;
        }

        let action = match self.edit_target {
            Some(id) => {
                let existing = state.list.get(id)?;
                TodoAction::UpdateTodo {
                    id,
                    user_id: existing.user_id,
                    title,
                    completed: existing.completed,
                }
            }
            None => {
                let user_id = self.user.or(state.filter.selected_user)?;
                TodoAction::CreateTodo { user_id, title }
            }
        };

        self.title.clear();
        self.user = None;
        self.edit_target = None;
        Some(action)
    }
}

/// What a line of user input asks the client to do
#[derive(Clone, Debug, PartialEq)]
pub enum Input {
    /// Dispatch an action to the store
    Intent(TodoAction),
    /// Redraw the current state
    Render,
    /// Print the command reference
    Help,
    /// Exit the client
    Quit,
    /// Nothing actionable (blank line or a rejected command)
    Noop(Option<String>),
}

/// Command reference printed for `help`
pub const HELP: &str = "\
Commands:
  refresh              fetch the collection from the server
  select <user>        filter the list to one user's todos
  select none          clear the user filter (list goes empty)
  add <title>          create a todo for the selected user
  edit <id> <title>    replace a todo's title
  toggle <id>          flip a todo's completion flag
  rm <id>              delete a todo
  list                 redraw the list
  help                 show this reference
  quit                 exit";

/// Parse one line of input into an [`Input`].
///
/// Commands that need current data (`toggle` reads the present completion
/// flag, `edit` the present record) resolve it from the state snapshot at
/// parse time.
#[must_use]
pub fn parse_input(line: &str, state: &AppState, form: &mut TodoForm) -> Input {
    let line = line.trim();
    if line.is_empty() {
        return Input::Noop(None);
    }

    let (command, rest) = match line.split_once(char::is_whitespace) {
        Some((command, rest)) => (command, rest.trim()),
        None => (line, ""),
    };

    match command {
        "refresh" => Input::Intent(TodoAction::FetchTodos),

        "select" => match rest {
            "" => Input::Noop(Some("usage: select <user>|none".to_string())),
            "none" => Input::Intent(TodoAction::SelectUser { user_id: None }),
            raw => match raw.parse::<u64>() {
                Ok(user) => Input::Intent(TodoAction::SelectUser {
                    user_id: Some(UserId::new(user)),
                }),
                Err(_) => Input::Noop(Some(format!("not a user id: {raw}"))),
            },
        },

        "add" => {
            form.title = rest.to_string();
            form.user = None;
            form.edit_target = None;
            match form.submit(state) {
                Some(action) => Input::Intent(action),
                None if rest.is_empty() => Input::Noop(Some("usage: add <title>".to_string())),
                None => Input::Noop(Some("select a user before adding".to_string())),
            }
        }

        "edit" => {
            let (raw_id, title) = match rest.split_once(char::is_whitespace) {
                Some((raw_id, title)) => (raw_id, title.trim()),
                None => (rest, ""),
            };
            let Ok(id) = raw_id.parse::<u64>() else {
                return Input::Noop(Some("usage: edit <id> <title>".to_string()));
            };
            if !form.begin_edit(state, TodoId::new(id)) {
                return Input::Noop(Some(format!("no todo with id {id}")));
            }
            if !title.is_empty() {
                form.title = title.to_string();
            }
            match form.submit(state) {
                Some(action) => Input::Intent(action),
                None => Input::Noop(Some("usage: edit <id> <title>".to_string())),
            }
        }

        "toggle" => match rest.parse::<u64>() {
            Ok(raw) => {
                let id = TodoId::new(raw);
                match state.list.get(id) {
                    Some(todo) => Input::Intent(TodoAction::ToggleCompleted {
                        id,
                        completed: todo.completed,
                    }),
                    None => Input::Noop(Some(format!("no todo with id {raw}"))),
                }
            }
            Err(_) => Input::Noop(Some("usage: toggle <id>".to_string())),
        },

        "rm" => match rest.parse::<u64>() {
            Ok(raw) => Input::Intent(TodoAction::DeleteTodo {
                id: TodoId::new(raw),
            }),
            Err(_) => Input::Noop(Some("usage: rm <id>".to_string())),
        },

        "list" | "users" => Input::Render,
        "help" => Input::Help,
        "quit" | "exit" => Input::Quit,

        other => Input::Noop(Some(format!("unknown command: {other} (try help)"))),
    }
}

/// Render the current state as a terminal screen
#[must_use]
pub fn render(state: &AppState) -> String {
    let mut out = String::new();

    let status = if state.list.loading { "syncing" } else { "idle" };
    let _ = write!(out, "status: {status}");
    if let Some(synced) = state.list.last_synced_at {
        let _ = write!(out, " | synced {}", synced.format("%H:%M:%S"));
    }
    if let Some(error) = &state.list.error {
        let _ = write!(out, " | error: {error}");
    }
    out.push('\n');

    let users = state.list.unique_users();
    if users.is_empty() {
        out.push_str("users: (none)\n");
    } else {
        let names: Vec<String> = users
            .iter()
            .map(|u| match state.filter.selected_user {
                Some(selected) if selected == *u => format!("[{u}]"),
                _ => u.to_string(),
            })
            .collect();
        let _ = writeln!(out, "users: {}", names.join(" "));
    }

    match state.filter.selected_user {
        None => out.push_str("select a user to see their todos\n"),
        Some(user) => {
            let visible = state.filtered();
            let _ = writeln!(out, "todos for user {user} ({} shown):", visible.len());
            for todo in visible {
                let mark = if todo.completed { "x" } else { " " };
                let _ = writeln!(out, "  [{mark}] #{} {}", todo.id, todo.title);
            }
        }
    }

    out
}
