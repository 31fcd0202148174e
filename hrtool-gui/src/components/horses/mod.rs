use hrtool_lib::{
    Repository,
    repository::{HorseForm, HorseId},
    views::list::ListView,
};
use iced::{
    Element, Length, Task,
    widget::{Column, column, container, row, scrollable, text, text_input},
};
use tracing::{debug, warn};

use crate::components::horses::editor::Editor;

pub mod editor;
pub mod list;

#[derive(Debug, Clone)]
pub enum Message {
    SearchChanged(String),
    EditPressed(HorseId),
    DeletePressed(HorseId),
    // Components
    Editor(editor::Message),
}

/// Action used for communicating with the parent component
pub enum Action {
    None,
    Run(Task<Message>),
    /// The collection changed
    Saved,
    /// The form was rejected, the message should be shown to the user
    Alert(String),
    /// The user wants this horse gone, pending confirmation
    ConfirmDelete { id: HorseId, name: String },
}

/// The main page: the horse form on the left, the searchable list on the right.
pub struct HorsesPage {
    repo: Repository,
    search: String,
    view: ListView,
    // Components
    editor: Editor,
}

impl HorsesPage {
    pub fn new(repo: Repository) -> Self {
        let view = repo.list_view("");

        Self {
            repo,
            search: String::new(),
            view,
            editor: Editor::new(),
        }
    }

    /// Render the list again with the current search applied.
    pub fn refresh(&mut self) {
        self.view = self.repo.list_view(&self.search);
    }

    /// Remove a horse after the user confirmed it.
    pub fn delete(&mut self, id: &HorseId) {
        let removed = self.repo.remove(id);
        if !removed.value {
            debug!("Horse {id} was already gone");
        }
        self.refresh();
    }

    pub fn update(&mut self, message: Message) -> Action {
        match message {
            Message::SearchChanged(query) => {
                self.search = query;
                self.refresh();
            }
            Message::EditPressed(id) => match self.repo.find(&id) {
                Some(horse) => self.editor.load(&horse),
                None => warn!("Cannot edit unknown horse {id}"),
            },
            Message::DeletePressed(id) => {
                if let Some(horse) = self.repo.find(&id) {
                    return Action::ConfirmDelete {
                        id,
                        name: horse.name,
                    };
                }
            }
            Message::Editor(message) => match self.editor.update(message) {
                editor::Action::None => (),
                editor::Action::Run(task) => return Action::Run(task.map(Message::Editor)),
                editor::Action::Submit(form) => return self.submit(&form),
            },
        }

        Action::None
    }

    fn submit(&mut self, form: &HorseForm) -> Action {
        match self.repo.submit(form) {
            Ok(committed) => {
                if !committed.persisted {
                    warn!("{} is kept in memory only", committed.value.name);
                }
                self.editor.clear();
                self.refresh();
                Action::Saved
            }
            Err(e) => Action::Alert(e.to_string()),
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let listing: Element<'_, Message> = match self.view.empty_message {
            Some(message) => container(text(message)).padding(20).into(),
            None => scrollable(
                Column::with_children(self.view.rows.iter().map(list::horse_row)).spacing(6),
            )
            .height(Length::Fill)
            .into(),
        };

        row![
            container(self.editor.view().map(Message::Editor)).width(Length::FillPortion(1)),
            column![
                text_input("Search horses...", &self.search).on_input(Message::SearchChanged),
                text(&self.view.count_label).size(12),
                listing,
            ]
            .spacing(8)
            .width(Length::FillPortion(2)),
        ]
        .spacing(20)
        .padding(20)
        .height(Length::Fill)
        .into()
    }
}

#[cfg(test)]
mod test {
    use hrtool_lib::repository::{Horse, config::CoreConfig};

    use super::*;

    fn page() -> HorsesPage {
        let repo = Repository::in_memory(CoreConfig::default());
        let _ = repo.put(Horse::new("1", "Bella").with_breed("Friesian"));
        let _ = repo.put(Horse::new("2", "Storm").with_breed("Arabian"));
        HorsesPage::new(repo)
    }

    fn type_name(page: &mut HorsesPage, name: &str) {
        let _ = page.update(Message::Editor(editor::Message::NameInput(name.into())));
    }

    #[test]
    fn test_initial_list() {
        let page = page();

        assert_eq!(page.view.rows.len(), 2);
        assert_eq!(page.view.count_label, "2 horses");
        assert_eq!(page.view.empty_message, None);
    }

    #[test]
    fn test_search_narrows_list() {
        let mut page = page();

        let _ = page.update(Message::SearchChanged("arab".into()));
        assert_eq!(page.view.rows.len(), 1);
        assert_eq!(page.view.count_label, "1 horse");

        let _ = page.update(Message::SearchChanged(String::new()));
        assert_eq!(page.view.rows.len(), 2);
    }

    #[test]
    fn test_save_adds_row_and_clears_form() {
        let mut page = page();

        type_name(&mut page, "Pip");
        let action = page.update(Message::Editor(editor::Message::SavePressed));

        assert!(matches!(action, Action::Saved));
        assert_eq!(page.view.rows.len(), 3);
        assert_eq!(page.editor.form(), &HorseForm::default());
    }

    #[test]
    fn test_blank_name_alerts() {
        let mut page = page();

        type_name(&mut page, "   ");
        let action = page.update(Message::Editor(editor::Message::SavePressed));

        let Action::Alert(message) = action else {
            panic!("a blank name should be rejected");
        };
        assert_eq!(message, "Name is required.");
        assert_eq!(page.repo.len(), 2);
        // Kept so the user can fix it
        assert_eq!(page.editor.form().name, "   ");
    }

    #[test]
    fn test_edit_replaces_in_place() {
        let mut page = page();

        let _ = page.update(Message::EditPressed("2".into()));
        assert_eq!(page.editor.form().title(), "Edit Horse");

        type_name(&mut page, "Thunder");
        let _ = page.update(Message::Editor(editor::Message::SavePressed));

        assert_eq!(page.repo.len(), 2);
        assert_eq!(
            page.repo.find(&"2".into()).map(|h| h.name),
            Some("Thunder".to_string())
        );
    }

    #[test]
    fn test_delete_needs_confirmation() {
        let mut page = page();

        let Action::ConfirmDelete { id, name } = page.update(Message::DeletePressed("1".into()))
        else {
            panic!("deleting should ask first");
        };
        assert_eq!(name, "Bella");
        // Nothing happens until the parent confirms
        assert_eq!(page.repo.len(), 2);

        page.delete(&id);
        assert_eq!(page.repo.len(), 1);
        assert_eq!(page.view.rows.len(), 1);
        assert!(page.repo.find(&"2".into()).is_some());
    }

    #[test]
    fn test_delete_unknown_is_ignored() {
        let mut page = page();

        assert!(matches!(
            page.update(Message::DeletePressed("404".into())),
            Action::None
        ));
    }
}
