use std::sync::Arc;

use hrtool_lib::{
    Repository,
    repository::{HorseId, config::CoreConfig},
};
use iced::{
    Color, Element,
    Length::{self, Fill},
    Task, Theme, application,
    widget::{button, center, column, container, mouse_area, opaque, row, space, stack, text},
};
use parking_lot::RwLock;
use tracing::{Level, error};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use crate::{
    components::{
        breeding::{self, BreedingPage},
        finance::{self, FinancePage},
        horses::{self, HorsesPage},
        nav::{self, Navigation, Page},
    },
    config::{Cfg, GuiConfig},
};

pub mod components;
pub mod config;

fn main() -> iced::Result {
    application(App::new, App::update, App::view)
        .theme(App::theme)
        .title(App::title)
        .run()
}

#[derive(Debug, Clone)]
enum Message {
    ThemeButtonPressed,
    DeleteConfirmed(HorseId),
    DialogClosed,
    // Components
    Nav(nav::Message),
    Horses(horses::Message),
    Breeding(breeding::Message),
    Finance(finance::Message),
}

/// Modal shown on top of the current page.
enum Dialog {
    ConfirmDelete { id: HorseId, name: String },
    Alert(String),
}

struct App {
    title: String,
    cfg: Cfg,
    theme: Theme,
    dialog: Option<Dialog>,
    // Components
    nav: Navigation,
    horses: HorsesPage,
    breeding: BreedingPage,
    finance: FinancePage,
}

impl App {
    pub fn new() -> (Self, Task<Message>) {
        // Human friendly panicking in release mode
        human_panic::setup_panic!();

        // Logging
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::TRACE)
            .with_env_filter(EnvFilter::from_default_env())
            .finish();
        if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
            eprintln!("setting default subscriber failed: {e}");
        }

        let (repo, dialog) = match Repository::new() {
            Ok(repo) => (repo, None),
            Err(e) => {
                error!("Unable to open the horse records: {e}");
                (
                    Repository::in_memory(CoreConfig::default()),
                    Some(Dialog::Alert(format!(
                        "Unable to open the horse records, changes won't be saved: {e}"
                    ))),
                )
            }
        };
        let cfg = Arc::new(RwLock::new(GuiConfig::load()));
        let theme = cfg.read().theme();

        (
            Self {
                title: "HR Tool".into(),
                cfg,
                theme,
                dialog,
                nav: Navigation::default(),
                horses: HorsesPage::new(repo.clone()),
                breeding: BreedingPage::new(repo),
                finance: FinancePage::default(),
            },
            Task::none(),
        )
    }

    // Update application state based on messages passed by view()
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::ThemeButtonPressed => {
                let mut cfg = self.cfg.write();
                cfg.theme = cfg.theme.next();
                cfg.save();
                self.theme = cfg.theme();
            }
            Message::DeleteConfirmed(id) => {
                self.dialog = None;
                self.horses.delete(&id);
                self.breeding.refresh();
            }
            Message::DialogClosed => self.dialog = None,
            // Redirect messages to relevant child components
            Message::Nav(message) => self.nav.update(message),
            Message::Horses(message) => match self.horses.update(message) {
                horses::Action::None => (),
                horses::Action::Run(task) => return task.map(Message::Horses),
                horses::Action::Saved => self.breeding.refresh(),
                horses::Action::Alert(message) => self.dialog = Some(Dialog::Alert(message)),
                horses::Action::ConfirmDelete { id, name } => {
                    self.dialog = Some(Dialog::ConfirmDelete { id, name });
                }
            },
            Message::Breeding(message) => self.breeding.update(message),
            Message::Finance(message) => self.finance.update(message),
        }

        Task::none()
    }

    // Render the application and pass along messages from components to update()
    pub fn view(&self) -> Element<'_, Message> {
        let page = match self.nav.active() {
            Page::Horses => self.horses.view().map(Message::Horses),
            Page::Breeding => self.breeding.view().map(Message::Breeding),
            Page::Finance => self.finance.view().map(Message::Finance),
        };

        let content = column![
            // Top bar
            row![
                text(&self.title).size(20),
                space::horizontal(),
                self.nav.view().map(Message::Nav),
                button(text(self.cfg.read().theme.to_string()))
                    .style(button::subtle)
                    .on_press(Message::ThemeButtonPressed),
            ]
            .spacing(12)
            .padding(8),
            page,
        ]
        .height(Fill);

        match &self.dialog {
            Some(dialog) => modal(content, dialog.view(), Some(Message::DialogClosed)),
            None => content.into(),
        }
    }

    pub fn title(&self) -> String {
        self.title.clone()
    }

    pub fn theme(&self) -> Theme {
        self.theme.clone()
    }
}

impl Dialog {
    fn view(&self) -> Element<'_, Message> {
        let (body, actions) = match self {
            Dialog::ConfirmDelete { id, name } => (
                text(format!("Delete {name}? This cannot be undone.")),
                row![
                    button("Cancel")
                        .style(button::subtle)
                        .on_press(Message::DialogClosed),
                    button("Delete")
                        .style(button::danger)
                        .on_press(Message::DeleteConfirmed(id.clone())),
                ],
            ),
            Dialog::Alert(message) => (
                text(message),
                row![button("OK").on_press(Message::DialogClosed)],
            ),
        };

        container(
            column![body, row![space::horizontal(), actions.spacing(8)]]
                .spacing(20)
                .width(360),
        )
        .padding(20)
        .style(container::rounded_box)
        .into()
    }
}

pub fn modal<'a, Message>(
    base: impl Into<Element<'a, Message>>,
    content: impl Into<Element<'a, Message>>,
    on_click_outside: Option<Message>,
) -> Element<'a, Message>
where
    Message: Clone + 'a,
{
    let mouse_area = mouse_area(center(opaque(content)).style(|_theme| {
        container::Style {
            background: Some(
                Color {
                    a: 0.8,
                    ..Color::BLACK
                }
                .into(),
            ),
            ..container::Style::default()
        }
    }));

    stack![
        base.into(),
        opaque(if let Some(msg) = on_click_outside {
            mouse_area.on_press(msg)
        } else {
            mouse_area
        })
    ]
    .width(Length::Fill)
    .height(Length::Fill)
    .into()
}
