//! Synchronous client core and UI state for the todo manager.
//!
//! # Overview
//! Builds `HttpRequest` values and parses `HttpResponse` values without
//! touching the network (host-does-IO pattern). The host supplies a
//! [`Transport`] to execute the round-trip, which keeps everything here
//! deterministic and testable.
//!
//! # Design
//! - `TodoClient` is stateless; it holds only `base_url`.
//! - Each CRUD operation is split into `build_*` (produces request) and
//!   `parse_*` (consumes response), so the I/O boundary is explicit.
//! - `TodoController` applies the same split to UI actions: `begin_*` returns
//!   a pending request, `complete` reconciles the local list with the reply.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod client;
pub mod controller;
pub mod error;
pub mod form;
pub mod http;
pub mod service;
pub mod store;
pub mod types;

pub use client::TodoClient;
pub use controller::{Operation, PendingRequest, TodoController};
pub use error::{ApiError, FormError, SaveError};
pub use form::TodoForm;
pub use crate::http::{HttpMethod, HttpRequest, HttpResponse, Transport};
pub use service::TodoService;
pub use store::TodoList;
pub use types::{CreateTodo, Todo, TodoId, UpdateTodo};
