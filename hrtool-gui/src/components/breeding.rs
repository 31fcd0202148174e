use derive_more::Deref;
use hrtool_lib::{Repository, views::breeding::SelectOption};
use iced::{
    Element, Length,
    widget::{column, combo_box, container, row, text},
};

#[derive(Debug, Clone)]
pub enum Message {
    MareSelected(SelectOption),
    StallionSelected(SelectOption),
}

/// Breeding planner. For now it only offers the mare and stallion selection lists, which are
/// always built from every horse regardless of the search on the horses page.
pub struct BreedingPage {
    repo: Repository,
    mares: Selector,
    stallions: Selector,
}

impl BreedingPage {
    pub fn new(repo: Repository) -> Self {
        let mut page = Self {
            repo,
            mares: Selector::default(),
            stallions: Selector::default(),
        };
        page.refresh();
        page
    }

    /// Rebuild both lists from the repository. Selections survive if the horse is still listed.
    pub fn refresh(&mut self) {
        let options = self.repo.breeding_options();

        self.mares.reload(options.mares);
        self.stallions.reload(options.stallions);
    }

    pub fn update(&mut self, message: Message) {
        match message {
            Message::MareSelected(option) => self.mares.select(option),
            Message::StallionSelected(option) => self.stallions.select(option),
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        container(
            column![
                text("Breeding").size(24),
                row![
                    text("Mare").width(120),
                    combo_box(
                        &self.mares.state,
                        self.mares.placeholder(),
                        self.mares.selected.as_ref(),
                        Message::MareSelected
                    ),
                ]
                .spacing(8),
                row![
                    text("Stallion").width(120),
                    combo_box(
                        &self.stallions.state,
                        self.stallions.placeholder(),
                        self.stallions.selected.as_ref(),
                        Message::StallionSelected
                    ),
                ]
                .spacing(8),
            ]
            .spacing(12)
            .max_width(480),
        )
        .padding(20)
        .width(Length::Fill)
        .into()
    }
}

/// The options of one list, plus the widget state and current choice.
#[derive(Deref)]
struct Selector {
    #[deref]
    options: Vec<SelectOption>,
    state: combo_box::State<SelectOption>,
    selected: Option<SelectOption>,
}

impl Selector {
    fn reload(&mut self, options: Vec<SelectOption>) {
        self.selected = self.selected.take().filter(|s| options.contains(s));
        self.state = combo_box::State::new(options.clone());
        self.options = options;
    }

    /// Choosing the placeholder entry clears the selection.
    fn select(&mut self, option: SelectOption) {
        self.selected = (!option.is_placeholder()).then_some(option);
    }

    fn placeholder(&self) -> &str {
        self.first()
            .filter(|o| o.is_placeholder())
            .map_or("Select...", |o| o.label.as_str())
    }
}

impl Default for Selector {
    fn default() -> Self {
        Self {
            state: combo_box::State::new(Vec::new()),
            options: Vec::new(),
            selected: None,
        }
    }
}

#[cfg(test)]
mod test {
    use hrtool_lib::repository::{HorseForm, Sex, config::CoreConfig};

    use super::*;

    fn repo() -> Repository {
        let repo = Repository::in_memory(CoreConfig::default());
        for (name, sex) in [
            ("Bella", Sex::Mare),
            ("Storm", Sex::Stallion),
            ("Pip", Sex::Foal),
        ] {
            let _ = repo.submit(&HorseForm {
                name: name.into(),
                sex,
                ..Default::default()
            });
        }
        repo
    }

    #[test]
    fn test_lists_follow_store() {
        let page = BreedingPage::new(repo());

        // Placeholder plus the horses
        assert_eq!(page.mares.len(), 3);
        assert_eq!(page.stallions.len(), 2);
        assert_eq!(page.mares.placeholder(), "Select mare...");
    }

    #[test]
    fn test_selection_survives_refresh() {
        let repo = repo();
        let mut page = BreedingPage::new(repo.clone());
        let storm = page.stallions.get(1).cloned().unwrap();

        page.update(Message::StallionSelected(storm.clone()));
        page.refresh();
        assert_eq!(page.stallions.selected, Some(storm.clone()));

        let _ = repo.remove(&storm.value.as_str().into());
        page.refresh();
        assert_eq!(page.stallions.selected, None);
        assert_eq!(page.stallions.len(), 1);
    }

    #[test]
    fn test_placeholder_clears_selection() {
        let mut page = BreedingPage::new(repo());
        let bella = page.mares.get(1).cloned().unwrap();
        let placeholder = page.mares.first().cloned().unwrap();

        page.update(Message::MareSelected(bella));
        page.update(Message::MareSelected(placeholder));

        assert_eq!(page.mares.selected, None);
    }
}
