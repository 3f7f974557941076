use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::{App, Focus};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.should_quit = true;
        return;
    }
    // Keys are dropped while a request is queued, like disabled buttons.
    if app.has_pending() {
        return;
    }
    if app.alert.take().is_some() {
        return;
    }
    if app.controller.confirm_delete().is_some() {
        handle_dialog_key(app, key);
        return;
    }

    match key.code {
        KeyCode::Tab => {
            app.focus = app.focus.next();
            return;
        }
        KeyCode::BackTab => {
            app.focus = app.focus.prev();
            return;
        }
        KeyCode::Esc if app.controller.is_editing() => {
            app.controller.cancel_edit();
            return;
        }
        _ => {}
    }

    match app.focus {
        Focus::Title | Focus::Description => handle_text_key(app, key),
        Focus::Completed => handle_completed_key(app, key),
        Focus::Table => handle_table_key(app, key),
    }
}

fn handle_dialog_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('y') | KeyCode::Enter => app.delete_confirmed(),
        KeyCode::Char('n') | KeyCode::Esc => {
            if !app.controller.is_deleting() {
                app.controller.close_delete_confirm();
            }
        }
        _ => {}
    }
}

fn handle_text_key(app: &mut App, key: KeyEvent) {
    if key.code == KeyCode::Enter {
        app.save();
        return;
    }
    let focus = app.focus;
    let form = app.controller.form_mut();
    let field = match focus {
        Focus::Title => &mut form.title,
        _ => &mut form.description,
    };
    match key.code {
        KeyCode::Backspace => {
            field.pop();
        }
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => field.push(c),
        _ => {}
    }
}

fn handle_completed_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char(' ') | KeyCode::Left | KeyCode::Right => {
            app.controller.form_mut().toggle_completed();
        }
        KeyCode::Enter => app.save(),
        _ => {}
    }
}

fn handle_table_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => app.select_prev(),
        KeyCode::Down | KeyCode::Char('j') => app.select_next(),
        KeyCode::Enter | KeyCode::Char('e') => app.edit_selected(),
        KeyCode::Delete | KeyCode::Char('d') => app.confirm_delete_selected(),
        KeyCode::Char('a') => app.focus = Focus::Title,
        KeyCode::Char('q') => app.should_quit = true,
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::collections::VecDeque;

    use todo_core::{ApiError, HttpMethod, HttpRequest, HttpResponse, TodoClient, Transport};

    use super::*;

    #[derive(Default)]
    struct Scripted {
        replies: RefCell<VecDeque<HttpResponse>>,
        seen: RefCell<Vec<HttpRequest>>,
    }

    impl Scripted {
        fn with(replies: &[(u16, &str)]) -> Self {
            let scripted = Self::default();
            for (status, body) in replies {
                scripted
                    .replies
                    .borrow_mut()
                    .push_back(HttpResponse::new(*status, *body));
            }
            scripted
        }

        fn push(&self, status: u16, body: &str) {
            self.replies.borrow_mut().push_back(HttpResponse::new(status, body));
        }
    }

    impl Transport for Scripted {
        fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
            self.seen.borrow_mut().push(request);
            self.replies
                .borrow_mut()
                .pop_front()
                .ok_or_else(|| ApiError::Transport("no scripted reply".to_string()))
        }
    }

    const TWO: &str = r#"[{"id":1,"title":"Buy milk","description":"2L","completed":false},
                          {"id":2,"title":"Walk dog","description":null,"completed":true}]"#;

    fn press(app: &mut App, code: KeyCode) {
        handle_key(app, KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    fn started(transport: &Scripted) -> App {
        let mut app = App::new(TodoClient::new("http://api"));
        assert!(app.run_pending(transport));
        app
    }

    #[test]
    fn typing_and_enter_creates_todo() {
        let transport = Scripted::with(&[(200, "[]")]);
        let mut app = started(&transport);

        type_text(&mut app, "Buy bread");
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "rye");
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Char(' '));
        assert!(app.controller.form().completed);

        press(&mut app, KeyCode::Enter);
        assert!(app.controller.is_saving());
        transport.push(201, r#"{"id":5,"title":"Buy bread","description":"rye","completed":true}"#);
        app.run_pending(&transport);

        assert_eq!(app.controller.todos().len(), 1);
        assert!(app.controller.form().is_blank());
        let body = transport.seen.borrow()[1].body.clone().unwrap();
        let body: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(body["description"], "rye");
    }

    #[test]
    fn empty_title_raises_alert_until_next_key() {
        let transport = Scripted::with(&[(200, "[]")]);
        let mut app = started(&transport);

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.alert.as_deref(), Some("Title is required"));
        assert!(!app.has_pending());

        // The dismissing key is swallowed.
        press(&mut app, KeyCode::Char('x'));
        assert!(app.alert.is_none());
        assert_eq!(app.controller.form().title, "");
    }

    #[test]
    fn edit_from_table_then_cancel() {
        let transport = Scripted::with(&[(200, TWO)]);
        let mut app = started(&transport);

        press(&mut app, KeyCode::BackTab);
        assert_eq!(app.focus, Focus::Table);
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Char('e'));
        transport.push(200, r#"{"id":2,"title":"Walk dog","description":null,"completed":true}"#);
        app.run_pending(&transport);

        assert_eq!(transport.seen.borrow()[1].path, "http://api/todos/2");
        assert!(app.controller.is_editing());
        assert_eq!(app.focus, Focus::Title);
        assert_eq!(app.controller.form().title, "Walk dog");

        press(&mut app, KeyCode::Esc);
        assert!(!app.controller.is_editing());
        assert!(app.controller.form().is_blank());
    }

    #[test]
    fn delete_goes_through_dialog() {
        let transport = Scripted::with(&[(200, TWO)]);
        let mut app = started(&transport);
        app.focus = Focus::Table;

        press(&mut app, KeyCode::Char('d'));
        assert!(app.controller.confirm_delete().is_some());

        // Declining leaves the list alone.
        press(&mut app, KeyCode::Char('n'));
        assert!(app.controller.confirm_delete().is_none());
        assert_eq!(app.controller.todos().len(), 2);

        press(&mut app, KeyCode::Char('d'));
        press(&mut app, KeyCode::Char('y'));
        assert!(app.controller.is_deleting());
        transport.push(204, "");
        app.run_pending(&transport);

        assert_eq!(transport.seen.borrow()[1].method, HttpMethod::Delete);
        assert_eq!(app.controller.todos().len(), 1);
        assert!(app.controller.confirm_delete().is_none());
        assert_eq!(app.selected_id().map(|id| id.to_string()).as_deref(), Some("2"));
    }

    #[test]
    fn selection_is_clamped_after_delete_of_last_row() {
        let transport = Scripted::with(&[(200, TWO)]);
        let mut app = started(&transport);
        app.focus = Focus::Table;
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Down);
        assert_eq!(app.selected, 1);

        press(&mut app, KeyCode::Char('d'));
        press(&mut app, KeyCode::Enter);
        transport.push(204, "");
        app.run_pending(&transport);
        assert_eq!(app.selected, 0);
    }

    #[test]
    fn keys_are_ignored_while_request_is_queued() {
        let mut app = App::new(TodoClient::new("http://api"));
        assert!(app.has_pending());
        type_text(&mut app, "abc");
        assert_eq!(app.controller.form().title, "");
    }

    #[test]
    fn ctrl_c_and_q_quit() {
        let transport = Scripted::with(&[(200, "[]")]);
        let mut app = started(&transport);
        handle_key(&mut app, KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);

        let transport = Scripted::with(&[(200, "[]")]);
        let mut app = started(&transport);
        press(&mut app, KeyCode::Char('q'));
        assert!(!app.should_quit, "q types into the title field");
        app.focus = Focus::Table;
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn list_is_fetched_once_per_session() {
        let transport = Scripted::with(&[(200, TWO)]);
        let mut app = started(&transport);
        app.focus = Focus::Table;
        press(&mut app, KeyCode::Char('r'));
        press(&mut app, KeyCode::Down);
        assert!(!app.has_pending());
        assert!(!app.controller.is_loading());
        assert_eq!(transport.seen.borrow().len(), 1);
        assert_eq!(app.selected, 1);
    }
}
