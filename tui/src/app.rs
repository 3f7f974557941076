use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use todo_core::{Operation, PendingRequest, SaveError, TodoClient, TodoController, TodoId, Transport};
use tracing::info;

use crate::input;
use crate::render;

/// Which part of the screen receives typed keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Title,
    Description,
    Completed,
    Table,
}

impl Focus {
    pub fn next(self) -> Self {
        match self {
            Focus::Title => Focus::Description,
            Focus::Description => Focus::Completed,
            Focus::Completed => Focus::Table,
            Focus::Table => Focus::Title,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Focus::Title => Focus::Table,
            Focus::Description => Focus::Title,
            Focus::Completed => Focus::Description,
            Focus::Table => Focus::Completed,
        }
    }
}

/// Controller state plus what only the terminal needs.
pub struct App {
    pub controller: TodoController,
    pub focus: Focus,
    pub selected: usize,
    /// Blocking notice, e.g. a validation failure. Cleared by the next key.
    pub alert: Option<String>,
    pub should_quit: bool,
    pending: Option<PendingRequest>,
}

impl App {
    /// Starts with the initial load queued.
    pub fn new(client: TodoClient) -> Self {
        let mut controller = TodoController::new(client);
        let pending = controller.begin_load();
        Self {
            controller,
            focus: Focus::Title,
            selected: 0,
            alert: None,
            should_quit: false,
            pending: Some(pending),
        }
    }

    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Executes the queued request, if any. Returns whether one ran.
    pub fn run_pending<T: Transport>(&mut self, transport: &T) -> bool {
        let Some(pending) = self.pending.take() else {
            return false;
        };
        let opened_edit = matches!(pending.operation, Operation::Edit(_));
        self.controller.dispatch(transport, pending);
        if opened_edit && self.controller.is_editing() {
            self.focus = Focus::Title;
        }
        self.clamp_selection();
        true
    }

    pub fn selected_id(&self) -> Option<TodoId> {
        self.controller
            .todos()
            .as_slice()
            .get(self.selected)
            .map(|t| t.id.clone())
    }

    pub fn select_next(&mut self) {
        if self.selected + 1 < self.controller.todos().len() {
            self.selected += 1;
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn save(&mut self) {
        match self.controller.begin_save() {
            Ok(pending) => self.pending = Some(pending),
            Err(SaveError::InProgress) => {}
            Err(err) => self.alert = Some(err.to_string()),
        }
    }

    pub fn edit_selected(&mut self) {
        if let Some(id) = self.selected_id() {
            let pending = self.controller.begin_edit(id);
            self.pending = Some(pending);
        }
    }

    pub fn confirm_delete_selected(&mut self) {
        if let Some(id) = self.selected_id() {
            self.controller.open_delete_confirm(id);
        }
    }

    pub fn delete_confirmed(&mut self) {
        if let Some(pending) = self.controller.begin_delete() {
            self.pending = Some(pending);
        }
    }

    fn clamp_selection(&mut self) {
        let len = self.controller.todos().len();
        if self.selected >= len {
            self.selected = len.saturating_sub(1);
        }
    }
}

/// Takes over the terminal until the user quits.
pub fn run<T: Transport>(client: TodoClient, transport: &T) -> anyhow::Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    info!(base_url = client.base_url(), "starting todo manager");
    let mut app = App::new(client);
    let result = run_event_loop(&mut terminal, &mut app, transport);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_event_loop<T: Transport>(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    transport: &T,
) -> anyhow::Result<()> {
    loop {
        terminal.draw(|frame| render::render(frame, app))?;

        // The frame above shows the in-flight flag; now do the I/O.
        if app.run_pending(transport) {
            continue;
        }

        if event::poll(Duration::from_millis(250))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    input::handle_key(app, key);
                }
            }
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}
