//! Blocking convenience wrapper pairing a `TodoClient` with a `Transport`.

use tracing::debug;

use crate::client::TodoClient;
use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse, Transport};
use crate::types::{CreateTodo, Todo, TodoId, UpdateTodo};

/// Runs each CRUD operation as build, execute, parse.
#[derive(Debug, Clone)]
pub struct TodoService<T> {
    client: TodoClient,
    transport: T,
}

impl<T: Transport> TodoService<T> {
    pub fn new(client: TodoClient, transport: T) -> Self {
        Self { client, transport }
    }

    pub fn list_todos(&self) -> Result<Vec<Todo>, ApiError> {
        let response = self.send(self.client.build_list_todos())?;
        self.client.parse_list_todos(response)
    }

    pub fn get_todo(&self, id: &TodoId) -> Result<Todo, ApiError> {
        let response = self.send(self.client.build_get_todo(id))?;
        self.client.parse_get_todo(response)
    }

    pub fn create_todo(&self, input: &CreateTodo) -> Result<Todo, ApiError> {
        let response = self.send(self.client.build_create_todo(input)?)?;
        self.client.parse_create_todo(response)
    }

    pub fn update_todo(&self, id: &TodoId, input: &UpdateTodo) -> Result<Todo, ApiError> {
        let response = self.send(self.client.build_update_todo(id, input)?)?;
        self.client.parse_update_todo(response)
    }

    pub fn delete_todo(&self, id: &TodoId) -> Result<(), ApiError> {
        let response = self.send(self.client.build_delete_todo(id))?;
        self.client.parse_delete_todo(response)
    }

    fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        debug!(method = request.method.as_str(), path = %request.path, "sending request");
        let response = self.transport.execute(request)?;
        debug!(status = response.status, "received response");
        Ok(response)
    }
}
