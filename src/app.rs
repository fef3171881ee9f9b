use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::config::DEFAULT_DATE_FORMAT;
use crate::messages::{CategoryFilter, FilterState, Message, MessageStore};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    Editing,
}

pub struct App {
    pub should_quit: bool,
    pub input_mode: InputMode,
    /// Cursor inside the search text, counted in characters
    pub cursor_position: usize,
    pub selected: usize,
    pub date_format: String,
    pub status_message: Option<String>,

    store: MessageStore,
    filter: FilterState,
}

impl App {
    pub fn new(store: MessageStore, filter: FilterState) -> Self {
        let cursor_position = filter.query().chars().count();
        Self {
            should_quit: false,
            input_mode: InputMode::Normal,
            cursor_position,
            selected: 0,
            date_format: DEFAULT_DATE_FORMAT.to_string(),
            status_message: None,
            store,
            filter,
        }
    }

    pub fn with_date_format(mut self, date_format: impl Into<String>) -> Self {
        self.date_format = date_format.into();
        self
    }

    pub fn store(&self) -> &MessageStore {
        &self.store
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub fn visible_messages(&self) -> Vec<&Message> {
        self.filter.apply(self.store.all())
    }

    pub fn selected_message(&self) -> Option<&Message> {
        self.visible_messages().get(self.selected).copied()
    }

    pub fn set_category(&mut self, category: CategoryFilter) {
        if self.filter.category() == category {
            return;
        }
        self.filter.set_category(category);
        self.clamp_selection();
        let shown = self.visible_messages().len();
        log::debug!("category filter set to {} ({} visible)", category, shown);
        self.status_message = Some(format!("Filter: {} ({} shown)", category.label(), shown));
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.filter.set_query(query);
        self.cursor_position = self.cursor_position.min(self.filter.query().chars().count());
        self.clamp_selection();
        log::debug!(
            "search query set to {:?} ({} visible)",
            self.filter.query(),
            self.visible_messages().len()
        );
    }

    pub fn handle_input(&mut self, event: Event) {
        if let Event::Key(key) = event {
            if key.kind == KeyEventKind::Press {
                self.handle_key_event(key);
            }
        }
    }

    fn handle_key_event(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.quit();
            return;
        }

        match self.input_mode {
            InputMode::Normal => match key.code {
                KeyCode::Char('q') => self.quit(),
                KeyCode::Char('/') | KeyCode::Char('i') => {
                    self.input_mode = InputMode::Editing;
                    self.cursor_position = self.filter.query().chars().count();
                }
                KeyCode::Tab => self.set_category(self.filter.category().next()),
                KeyCode::BackTab => self.set_category(self.filter.category().previous()),
                KeyCode::Char(c @ '0'..='3') => {
                    let index = c as usize - '0' as usize;
                    self.set_category(CategoryFilter::ALL_OPTIONS[index]);
                }
                KeyCode::Up | KeyCode::Char('k') => self.move_selection(-1),
                KeyCode::Down | KeyCode::Char('j') => self.move_selection(1),
                KeyCode::PageUp => self.move_selection(-10),
                KeyCode::PageDown => self.move_selection(10),
                KeyCode::Home => self.selected = 0,
                KeyCode::End => {
                    self.selected = self.visible_messages().len().saturating_sub(1);
                }
                KeyCode::Esc => {
                    if !self.filter.query().is_empty() {
                        self.cursor_position = 0;
                        self.set_query("");
                    }
                }
                _ => {}
            },
            InputMode::Editing => match key.code {
                KeyCode::Enter => {
                    self.input_mode = InputMode::Normal;
                }
                KeyCode::Esc => {
                    self.cursor_position = 0;
                    self.set_query("");
                    self.input_mode = InputMode::Normal;
                }
                KeyCode::Char(c) => {
                    let mut query = self.filter.query().to_string();
                    query.insert(byte_index(&query, self.cursor_position), c);
                    self.cursor_position += 1;
                    self.set_query(query);
                }
                KeyCode::Backspace => {
                    if self.cursor_position > 0 {
                        let mut query = self.filter.query().to_string();
                        query.remove(byte_index(&query, self.cursor_position - 1));
                        self.cursor_position -= 1;
                        self.set_query(query);
                    }
                }
                KeyCode::Delete => {
                    if self.cursor_position < self.filter.query().chars().count() {
                        let mut query = self.filter.query().to_string();
                        query.remove(byte_index(&query, self.cursor_position));
                        self.set_query(query);
                    }
                }
                KeyCode::Left => {
                    self.cursor_position = self.cursor_position.saturating_sub(1);
                }
                KeyCode::Right => {
                    if self.cursor_position < self.filter.query().chars().count() {
                        self.cursor_position += 1;
                    }
                }
                KeyCode::Home => {
                    self.cursor_position = 0;
                }
                KeyCode::End => {
                    self.cursor_position = self.filter.query().chars().count();
                }
                _ => {}
            },
        }
    }

    fn quit(&mut self) {
        log::info!("quit requested");
        self.should_quit = true;
    }

    fn move_selection(&mut self, delta: isize) {
        let len = self.visible_messages().len();
        if len == 0 {
            self.selected = 0;
            return;
        }
        let target = self.selected as isize + delta;
        self.selected = target.clamp(0, len as isize - 1) as usize;
    }

    fn clamp_selection(&mut self) {
        let len = self.visible_messages().len();
        self.selected = self.selected.min(len.saturating_sub(1));
    }
}

fn byte_index(text: &str, char_position: usize) -> usize {
    text.char_indices()
        .nth(char_position)
        .map(|(index, _)| index)
        .unwrap_or(text.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::messages::sample_messages;

    fn app() -> App {
        App::new(
            MessageStore::new(sample_messages()).unwrap(),
            FilterState::default(),
        )
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_input(Event::Key(KeyEvent::new(code, KeyModifiers::NONE)));
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    fn visible_ids(app: &App) -> Vec<u32> {
        app.visible_messages().iter().map(|m| m.id).collect()
    }

    #[test]
    fn starts_with_everything_visible() {
        let app = app();
        assert_eq!(app.input_mode, InputMode::Normal);
        assert_eq!(visible_ids(&app), vec![1, 2, 3]);
        assert_eq!(app.selected_message().map(|m| m.id), Some(1));
    }

    #[test]
    fn typing_filters_on_every_keystroke() {
        let mut app = app();
        press(&mut app, KeyCode::Char('/'));
        assert_eq!(app.input_mode, InputMode::Editing);

        type_text(&mut app, "Git");
        assert_eq!(app.filter().query(), "Git");
        assert_eq!(visible_ids(&app), vec![3]);

        press(&mut app, KeyCode::Backspace);
        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.filter().query(), "G");

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.input_mode, InputMode::Normal);
        assert_eq!(app.filter().query(), "G");
    }

    #[test]
    fn q_is_text_while_editing() {
        let mut app = app();
        press(&mut app, KeyCode::Char('i'));
        press(&mut app, KeyCode::Char('q'));
        assert!(!app.should_quit);
        assert_eq!(app.filter().query(), "q");
    }

    #[test]
    fn escape_while_editing_clears_search() {
        let mut app = app();
        press(&mut app, KeyCode::Char('/'));
        type_text(&mut app, "tech");
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.input_mode, InputMode::Normal);
        assert_eq!(app.filter().query(), "");
        assert_eq!(visible_ids(&app).len(), 3);
    }

    #[test]
    fn cursor_editing_handles_multibyte_text() {
        let mut app = app();
        press(&mut app, KeyCode::Char('/'));
        type_text(&mut app, "né");
        press(&mut app, KeyCode::Left);
        press(&mut app, KeyCode::Char('x'));
        assert_eq!(app.filter().query(), "nxé");
        press(&mut app, KeyCode::Delete);
        assert_eq!(app.filter().query(), "nx");
        press(&mut app, KeyCode::Home);
        press(&mut app, KeyCode::Delete);
        assert_eq!(app.filter().query(), "x");
        assert_eq!(app.cursor_position, 0);
    }

    #[test]
    fn tab_cycles_categories() {
        let mut app = app();
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.filter().category(), CategoryFilter::Recruitment);
        assert_eq!(visible_ids(&app), vec![1, 3]);

        press(&mut app, KeyCode::Tab);
        assert_eq!(app.filter().category(), CategoryFilter::Sales);
        assert_eq!(visible_ids(&app), vec![2]);

        press(&mut app, KeyCode::BackTab);
        assert_eq!(app.filter().category(), CategoryFilter::Recruitment);
        assert!(app.status_message.is_some());
    }

    #[test]
    fn digits_select_category_directly() {
        let mut app = app();
        press(&mut app, KeyCode::Char('3'));
        assert_eq!(app.filter().category(), CategoryFilter::General);
        assert!(app.visible_messages().is_empty());
        assert!(app.selected_message().is_none());

        press(&mut app, KeyCode::Char('0'));
        assert_eq!(app.filter().category(), CategoryFilter::All);
    }

    #[test]
    fn selection_is_clamped_to_visible_list() {
        let mut app = app();
        press(&mut app, KeyCode::End);
        assert_eq!(app.selected, 2);
        press(&mut app, KeyCode::Down);
        assert_eq!(app.selected, 2);

        press(&mut app, KeyCode::Char('2'));
        assert_eq!(app.selected, 0);
        assert_eq!(app.selected_message().map(|m| m.id), Some(2));

        press(&mut app, KeyCode::Char('0'));
        press(&mut app, KeyCode::PageDown);
        assert_eq!(app.selected, 2);
        press(&mut app, KeyCode::PageUp);
        assert_eq!(app.selected, 0);
    }

    #[test]
    fn quit_keys() {
        let mut app = app();
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);

        let mut app = self::app();
        press(&mut app, KeyCode::Char('/'));
        app.handle_input(Event::Key(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL,
        )));
        assert!(app.should_quit);
    }
}
