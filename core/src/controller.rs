//! UI state and the handlers that reconcile it with server responses.
//!
//! # Design
//! Every network-backed action follows the same split as `TodoClient`:
//! `begin_*` updates the in-flight flags and returns a [`PendingRequest`], the
//! host executes the request, and [`TodoController::complete`] applies the
//! outcome. A front end can draw between the two halves so "Saving..." and
//! friends are visible while the request is out.
//!
//! After the initial load the list is never re-fetched. Create prepends the
//! server's copy, update replaces by id, delete filters by id.

use tracing::{debug, warn};

use crate::client::TodoClient;
use crate::error::{ApiError, SaveError};
use crate::form::TodoForm;
use crate::http::{HttpRequest, HttpResponse, Transport};
use crate::store::TodoList;
use crate::types::{TodoId, UpdateTodo};

const LOAD_FAILED: &str = "Failed to load todos.";
const SAVE_FAILED: &str = "Failed to save todo.";
const EDIT_FAILED: &str = "Failed to load item for edit.";
const DELETE_FAILED: &str = "Failed to delete item.";

/// Which handler consumes the response of a pending request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    Load,
    Create,
    Update(TodoId),
    Edit(TodoId),
    Delete(TodoId),
}

/// A built request tagged with the operation that will consume its response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingRequest {
    pub operation: Operation,
    pub request: HttpRequest,
}

#[derive(Debug, Clone)]
pub struct TodoController {
    client: TodoClient,
    todos: TodoList,
    form: TodoForm,
    editing_id: Option<TodoId>,
    confirm_delete: Option<TodoId>,
    loading: bool,
    saving: bool,
    deleting: bool,
    error: Option<String>,
}

impl TodoController {
    pub fn new(client: TodoClient) -> Self {
        Self {
            client,
            todos: TodoList::new(),
            form: TodoForm::default(),
            editing_id: None,
            confirm_delete: None,
            loading: false,
            saving: false,
            deleting: false,
            error: None,
        }
    }

    pub fn todos(&self) -> &TodoList {
        &self.todos
    }

    pub fn form(&self) -> &TodoForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut TodoForm {
        &mut self.form
    }

    pub fn editing_id(&self) -> Option<&TodoId> {
        self.editing_id.as_ref()
    }

    pub fn is_editing(&self) -> bool {
        self.editing_id.is_some()
    }

    /// Target of the open delete dialog, if it is open.
    pub fn confirm_delete(&self) -> Option<&TodoId> {
        self.confirm_delete.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_saving(&self) -> bool {
        self.saving
    }

    pub fn is_deleting(&self) -> bool {
        self.deleting
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn begin_load(&mut self) -> PendingRequest {
        self.loading = true;
        self.error = None;
        PendingRequest {
            operation: Operation::Load,
            request: self.client.build_list_todos(),
        }
    }

    /// Validation failures leave every piece of state untouched.
    pub fn begin_save(&mut self) -> Result<PendingRequest, SaveError> {
        let payload = self.form.validate()?;
        if self.saving {
            return Err(SaveError::InProgress);
        }
        let pending = match &self.editing_id {
            Some(id) => PendingRequest {
                operation: Operation::Update(id.clone()),
                request: self.client.build_update_todo(id, &UpdateTodo::from(payload))?,
            },
            None => PendingRequest {
                operation: Operation::Create,
                request: self.client.build_create_todo(&payload)?,
            },
        };
        self.saving = true;
        self.error = None;
        Ok(pending)
    }

    pub fn begin_edit(&mut self, id: TodoId) -> PendingRequest {
        self.error = None;
        PendingRequest {
            request: self.client.build_get_todo(&id),
            operation: Operation::Edit(id),
        }
    }

    pub fn cancel_edit(&mut self) {
        self.editing_id = None;
        self.form.reset();
    }

    pub fn open_delete_confirm(&mut self, id: TodoId) {
        self.confirm_delete = Some(id);
    }

    pub fn close_delete_confirm(&mut self) {
        self.confirm_delete = None;
    }

    /// `None` when no dialog is open or a delete is already running.
    pub fn begin_delete(&mut self) -> Option<PendingRequest> {
        if self.deleting {
            return None;
        }
        let id = self.confirm_delete.clone()?;
        self.deleting = true;
        self.error = None;
        Some(PendingRequest {
            request: self.client.build_delete_todo(&id),
            operation: Operation::Delete(id),
        })
    }

    /// Applies the outcome of a request produced by one of the `begin_*` methods.
    pub fn complete(&mut self, pending: PendingRequest, outcome: Result<HttpResponse, ApiError>) {
        match pending.operation {
            Operation::Load => {
                self.loading = false;
                match outcome.and_then(|r| self.client.parse_list_todos(r)) {
                    Ok(items) => {
                        debug!(count = items.len(), "loaded todos");
                        self.todos.replace_all(items);
                    }
                    Err(err) => self.fail(&err, LOAD_FAILED),
                }
            }
            Operation::Create => {
                self.saving = false;
                match outcome.and_then(|r| self.client.parse_create_todo(r)) {
                    Ok(created) => {
                        debug!(id = %created.id, "created todo");
                        self.todos.prepend(created);
                        self.form.reset();
                    }
                    Err(err) => self.fail(&err, SAVE_FAILED),
                }
            }
            Operation::Update(id) => {
                self.saving = false;
                match outcome.and_then(|r| self.client.parse_update_todo(r)) {
                    Ok(updated) => {
                        debug!(%id, "updated todo");
                        self.todos.replace(&id, updated);
                        self.editing_id = None;
                        self.form.reset();
                    }
                    Err(err) => self.fail(&err, SAVE_FAILED),
                }
            }
            Operation::Edit(id) => match outcome.and_then(|r| self.client.parse_get_todo(r)) {
                Ok(item) => {
                    self.form = TodoForm::from_todo(&item);
                    self.editing_id = Some(id);
                }
                Err(err) => self.fail(&err, EDIT_FAILED),
            },
            Operation::Delete(id) => {
                self.deleting = false;
                match outcome.and_then(|r| self.client.parse_delete_todo(r)) {
                    Ok(()) => {
                        debug!(%id, "deleted todo");
                        self.todos.remove(&id);
                        self.confirm_delete = None;
                        if self.editing_id.as_ref() == Some(&id) {
                            self.cancel_edit();
                        }
                    }
                    Err(err) => self.fail(&err, DELETE_FAILED),
                }
            }
        }
    }

    /// Executes `pending` on `transport` and applies the result.
    pub fn dispatch<T: Transport>(&mut self, transport: &T, pending: PendingRequest) {
        let outcome = transport.execute(pending.request.clone());
        self.complete(pending, outcome);
    }

    fn fail(&mut self, err: &ApiError, fallback: &str) {
        warn!(error = %err, "{fallback}");
        self.error = Some(describe(err, fallback));
    }
}

/// User-facing message for `err`, or `fallback` when the error carries no detail.
fn describe(err: &ApiError, fallback: &str) -> String {
    match err {
        ApiError::Transport(reason) if reason.trim().is_empty() => fallback.to_string(),
        other => other.to_string(),
    }
}
