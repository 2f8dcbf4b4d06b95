//! Demo application state and input routing.

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

use tabula::prelude::*;
use tabula_dom::{Edges, Element, Event, Key, Modifiers, Size, Style};

use crate::user::User;

const INPUT_ID: &str = "add-user";
const ADD_BUTTON_ID: &str = "add-button";
const TABLE_ID: &str = "users";

const INPUT_WIDTH: u16 = 40;

/// Lines outside the table body: page padding and gaps, title, input,
/// button, status and help, plus the table's summary, header and footer.
const PAGE_CHROME: u16 = 18;

/// Which widget receives key presses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Input,
    AddButton,
    Table,
}

impl Focus {
    fn next(self) -> Self {
        match self {
            Focus::Input => Focus::AddButton,
            Focus::AddButton => Focus::Table,
            Focus::Table => Focus::Input,
        }
    }

    fn prev(self) -> Self {
        match self {
            Focus::Input => Focus::Table,
            Focus::AddButton => Focus::Input,
            Focus::Table => Focus::AddButton,
        }
    }
}

pub struct App {
    theme: Theme,
    users: Vec<Arc<User>>,
    input: InputField,
    table: DataTable<User>,
    focus: Focus,
    status: Rc<RefCell<String>>,
    quit: bool,
}

impl App {
    pub fn new(users: Vec<User>, loading: bool) -> Self {
        let users: Vec<Arc<User>> = users.into_iter().map(Arc::new).collect();
        let status = Rc::new(RefCell::new(String::from("No rows selected")));

        let input = InputField::new()
            .id(INPUT_ID)
            .label("Add User")
            .placeholder("Enter name")
            .variant(InputVariant::Outlined)
            .size(InputSize::Md)
            .on_change(|value| log::trace!("Input changed: {value:?}"));

        let status_sink = Rc::clone(&status);
        let table = DataTable::new(vec![
            Column::new("1", "ID", "id").sortable(),
            Column::new("2", "Name", "name").sortable(),
            Column::new("3", "Email", "email"),
        ])
        .id(TABLE_ID)
        .with_records(users.clone())
        .selectable(true)
        .loading(loading)
        .on_selection_change(move |selected: &[Arc<User>]| {
            let names: Vec<&str> = selected.iter().map(|u| u.name.as_str()).collect();
            log::info!("Selected: {names:?}");
            *status_sink.borrow_mut() = if names.is_empty() {
                String::from("No rows selected")
            } else {
                format!("Selected: {}", names.join(", "))
            };
        });

        let mut app = Self {
            theme: Theme::default(),
            users,
            input,
            table,
            focus: Focus::Input,
            status,
            quit: false,
        };
        app.set_focus(Focus::Input);
        app
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }

    pub fn is_loading(&self) -> bool {
        self.table.is_loading()
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn users(&self) -> &[Arc<User>] {
        &self.users
    }

    pub fn status(&self) -> String {
        self.status.borrow().clone()
    }

    /// Advance the loading animation.
    pub fn tick(&mut self) {
        self.table.tick();
    }

    /// The simulated load finished; show the rows.
    pub fn finish_loading(&mut self) {
        log::info!("Data loaded: {} users", self.users.len());
        self.table.set_loading(false);
    }

    /// Size the table viewport so the page fits a terminal `height` rows tall.
    pub fn fit_to_height(&mut self, height: u16) {
        let rows = usize::from(height.saturating_sub(PAGE_CHROME)).max(1);
        log::debug!("Table viewport: {rows} rows for height {height}");
        self.table.set_viewport_height(Some(rows));
    }

    fn set_focus(&mut self, focus: Focus) {
        if self.focus != focus {
            log::debug!("Focus: {:?} -> {focus:?}", self.focus);
        }
        self.focus = focus;
        self.input.set_focused(focus == Focus::Input);
        self.table.set_focused(focus == Focus::Table);
    }

    /// Append a user named after the input value and clear the input.
    fn add_user(&mut self) -> bool {
        let Some(user) = User::from_name(self.users.len(), self.input.text()) else {
            log::debug!("Add ignored: empty name");
            return false;
        };
        log::info!("Adding user {} <{}>", user.name, user.email);
        self.users.push(Arc::new(user));
        self.table.set_records(self.users.clone());
        self.input.set_value("");
        true
    }

    // -------------------------------------------------------------------------
    // Input routing
    // -------------------------------------------------------------------------

    /// Handle an event; `hit` resolves a screen position to an element id.
    pub fn handle_event(&mut self, event: Event, hit: impl FnOnce(u16, u16) -> Option<String>) {
        match event {
            Event::Key { key, modifiers } => self.handle_key(key, modifiers),
            Event::Click { x, y, .. } => {
                if let Some(target) = hit(x, y) {
                    self.handle_click(&target);
                }
            }
            Event::Scroll { delta_y, .. } => {
                self.table.scroll_by(delta_y.into());
            }
            Event::Resize { height, .. } => self.fit_to_height(height),
        }
    }

    pub fn handle_key(&mut self, key: Key, modifiers: Modifiers) {
        match key {
            Key::Char('c' | 'q') if modifiers.ctrl => {
                log::info!("Quit requested");
                self.quit = true;
                return;
            }
            Key::Tab => {
                self.set_focus(self.focus.next());
                return;
            }
            Key::BackTab => {
                self.set_focus(self.focus.prev());
                return;
            }
            _ => {}
        }

        let result = match self.focus {
            Focus::Input if key == Key::Enter => self.add_user().into(),
            Focus::Input => self.input.on_key(key, modifiers),
            Focus::AddButton if matches!(key, Key::Enter | Key::Char(' ')) => {
                self.add_user().into()
            }
            Focus::AddButton => EventResult::Ignored,
            Focus::Table => self.table.on_key(key, modifiers),
        };

        if !result.is_handled() {
            log::trace!("Unhandled key {key:?} in {:?}", self.focus);
        }
    }

    pub fn handle_click(&mut self, target: &str) {
        log::debug!("Click: {target}");
        if target == ADD_BUTTON_ID {
            self.set_focus(Focus::AddButton);
            self.add_user();
        } else if self.input.on_click(target).is_handled() {
            self.set_focus(Focus::Input);
        } else if self.table.on_click(target).is_handled() {
            self.set_focus(Focus::Table);
        }
    }

    // -------------------------------------------------------------------------
    // Rendering
    // -------------------------------------------------------------------------

    pub fn render(&self) -> Element {
        let theme = &self.theme;

        let button_style = if self.focus == Focus::AddButton {
            Style::new().background(theme.accent).foreground(theme.background).bold()
        } else {
            Style::new().background(theme.surface).foreground(theme.primary).bold()
        };

        Element::col()
            .id("root")
            .width(Size::Fill)
            .height(Size::Fill)
            .padding(Edges::symmetric(1, 2))
            .gap(1)
            .style(Style::new().background(theme.background).foreground(theme.primary))
            .child(Element::text("Tabula Demo").style(Style::new().foreground(theme.primary).bold()))
            .child(
                Element::col()
                    .width(Size::Fixed(INPUT_WIDTH))
                    .child(self.input.render(theme)),
            )
            .child(
                Element::text("ADD")
                    .id(ADD_BUTTON_ID)
                    .padding(Edges::horizontal(2))
                    .style(button_style)
                    .clickable(true),
            )
            .child(self.table.render(theme))
            .child(Element::text(self.status()).style(Style::new().foreground(theme.secondary)))
            .child(
                Element::text("Tab focus · Enter add · Space select · a all · s sort · Ctrl+Q quit")
                    .style(Style::new().foreground(theme.muted)),
            )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::user::initial_users;

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_key(Key::Char(c), Modifiers::new());
        }
    }

    fn table_names(app: &App) -> Vec<String> {
        app.table.displayed().map(|u| u.name.clone()).collect()
    }

    #[test]
    fn enter_adds_user_and_clears_input() {
        let mut app = App::new(initial_users(), false);
        type_text(&mut app, "Alice");
        app.handle_key(Key::Enter, Modifiers::new());

        assert_eq!(app.users().len(), 3);
        let added = &app.users()[2];
        assert_eq!(added.id, 3);
        assert_eq!(added.email, "alice@example.com");
        assert_eq!(app.input.text(), "");
        assert_eq!(table_names(&app), ["web", "hello", "Alice"]);
    }

    #[test]
    fn empty_name_is_ignored() {
        let mut app = App::new(initial_users(), false);
        app.handle_click(ADD_BUTTON_ID);
        assert_eq!(app.users().len(), 2);
        assert_eq!(app.focus(), Focus::AddButton);
    }

    #[test]
    fn tab_cycles_focus() {
        let mut app = App::new(initial_users(), false);
        assert_eq!(app.focus(), Focus::Input);
        app.handle_key(Key::Tab, Modifiers::new());
        assert_eq!(app.focus(), Focus::AddButton);
        app.handle_key(Key::Tab, Modifiers::new());
        assert_eq!(app.focus(), Focus::Table);
        app.handle_key(Key::Tab, Modifiers::new());
        assert_eq!(app.focus(), Focus::Input);
        app.handle_key(Key::BackTab, Modifiers::new());
        assert_eq!(app.focus(), Focus::Table);
    }

    #[test]
    fn selection_updates_status() {
        let mut app = App::new(initial_users(), false);
        app.handle_click("users:row:1");
        assert_eq!(app.focus(), Focus::Table);
        assert_eq!(app.status(), "Selected: hello");

        app.handle_key(Key::Char('a'), Modifiers::new());
        assert_eq!(app.status(), "Selected: web, hello");

        app.handle_click("users:clear");
        assert_eq!(app.status(), "No rows selected");
    }

    #[test]
    fn table_ignores_input_while_loading() {
        let mut app = App::new(initial_users(), true);
        app.handle_click("users:sort:1");
        assert!(app.table.sort().is_none());

        app.finish_loading();
        assert!(!app.is_loading());
        app.handle_click("users:sort:1");
        assert_eq!(table_names(&app), ["hello", "web"]);
    }

    #[test]
    fn ctrl_q_quits() {
        let mut app = App::new(initial_users(), false);
        app.handle_key(Key::Char('q'), Modifiers::new());
        assert!(!app.should_quit());
        app.handle_key(Key::Char('q'), Modifiers::ctrl());
        assert!(app.should_quit());
    }

    fn paint(app: &App, width: u16, height: u16) -> Vec<String> {
        let root = app.render();
        let layout = tabula_dom::layout(&root, tabula_dom::Rect::from_size(width, height));
        let mut buf = tabula_dom::Buffer::new(width, height);
        tabula_dom::render::render_to_buffer(&root, &layout, &mut buf);
        buf.lines()
    }

    fn many_users(n: usize) -> Vec<User> {
        (0..n).filter_map(|i| User::from_name(i, &format!("user{i}"))).collect()
    }

    #[test]
    fn page_fits_terminal_height() {
        let mut app = App::new(many_users(40), false);
        app.fit_to_height(24);
        app.set_focus(Focus::Table);
        app.handle_key(Key::Char('a'), Modifiers::new());

        let lines = paint(&app, 100, 24);

        assert!(lines.iter().any(|l| l.contains("40 of 40 rows selected")));
        assert!(lines.iter().any(|l| l.contains("user5@example.com")));
        assert!(!lines.iter().any(|l| l.contains("user6@example.com")));
        assert!(lines.iter().any(|l| l.contains("Ctrl+Q quit")));
    }

    #[test]
    fn scrolling_and_resizing_move_the_viewport() {
        let mut app = App::new(many_users(40), false);
        app.handle_event(Event::Resize { width: 100, height: 20 }, |_, _| None);
        assert_eq!(app.table.viewport(), Some(2));

        app.handle_event(Event::Scroll { x: 0, y: 0, delta_y: 1 }, |_, _| None);
        assert_eq!(app.table.scroll_offset(), 1);
        assert!(paint(&app, 100, 20).iter().any(|l| l.contains("user2@example.com")));
    }

    #[test]
    fn render_shows_title_and_rows() {
        let app = App::new(initial_users(), false);
        let tree = app.render();
        assert!(tabula_dom::element::contains_text(&tree, "Tabula Demo"));
        assert!(tabula_dom::element::contains_text(&tree, "hello@example.com"));
    }
}
