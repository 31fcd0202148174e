use iced::{
    Element,
    widget::{Row, button, text},
};
use strum::{Display, EnumIter, IntoEnumIterator};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Display, EnumIter)]
pub enum Page {
    #[default]
    Horses,
    Breeding,
    Finance,
}

#[derive(Debug, Clone)]
pub enum Message {
    PageSelected(Page),
}

/// Tracks which page is visible. Switching pages never touches the horse records.
#[derive(Debug, Default)]
pub struct Navigation {
    active: Page,
}

impl Navigation {
    pub fn active(&self) -> Page {
        self.active
    }

    pub fn update(&mut self, message: Message) {
        match message {
            Message::PageSelected(page) => self.active = page,
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        Row::with_children(Page::iter().map(|page| {
            let style = if page == self.active {
                button::primary
            } else {
                button::subtle
            };

            button(text(page.to_string()))
                .style(style)
                .on_press(Message::PageSelected(page))
                .into()
        }))
        .spacing(4)
        .into()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_starts_on_horses() {
        assert_eq!(Navigation::default().active(), Page::Horses);
    }

    #[test]
    fn test_select_page() {
        let mut nav = Navigation::default();

        nav.update(Message::PageSelected(Page::Finance));
        assert_eq!(nav.active(), Page::Finance);

        nav.update(Message::PageSelected(Page::Breeding));
        assert_eq!(nav.active(), Page::Breeding);
    }
}
