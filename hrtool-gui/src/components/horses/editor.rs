use std::fmt::{self, Display, Formatter};

use hrtool_lib::repository::{Horse, HorseForm, Role, Sex};
use iced::{
    Element, Length, Task,
    widget::{button, column, combo_box, container, row, space, text, text_input},
};
use rfd::AsyncFileDialog;

#[derive(Debug, Clone)]
pub enum Message {
    NameInput(String),
    SexSelected(Sex),
    BreedInput(String),
    LifeNumberInput(String),
    GpInput(String),
    RoleSelected(RoleOption),
    ImageUrlInput(String),
    BrowseImagePressed,
    ImagePicked(Option<String>),
    NotesInput(String),
    SavePressed,
    ResetPressed,
}

/// Action used for communicating with the parent component
pub enum Action {
    None,
    Run(Task<Message>),
    Submit(HorseForm),
}

/// Entry in the role selector, including "no role".
#[derive(Debug, Clone, PartialEq)]
pub struct RoleOption(Option<Role>);

impl Display for RoleOption {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Some(role) => write!(f, "{role}"),
            None => f.write_str("None"),
        }
    }
}

/// The add/edit horse form.
pub struct Editor {
    form: HorseForm,
    role: RoleOption,
    sex_options: combo_box::State<Sex>,
    role_options: combo_box::State<RoleOption>,
}

impl Editor {
    pub fn new() -> Self {
        let roles = std::iter::once(RoleOption(None))
            .chain(Role::CHOICES.into_iter().map(|r| RoleOption(Some(r))))
            .collect();

        Self {
            form: HorseForm::default(),
            role: RoleOption(None),
            sex_options: combo_box::State::new(Sex::CHOICES.to_vec()),
            role_options: combo_box::State::new(roles),
        }
    }

    /// Load an existing [`Horse`] for editing.
    pub fn load(&mut self, horse: &Horse) {
        self.form = HorseForm::edit(horse);
        self.role = RoleOption(self.form.role.clone());
    }

    /// Reset the form to "Add Horse"
    pub fn clear(&mut self) {
        self.form.reset();
        self.role = RoleOption(None);
    }

    pub fn form(&self) -> &HorseForm {
        &self.form
    }

    pub fn update(&mut self, message: Message) -> Action {
        match message {
            Message::NameInput(content) => self.form.name = content,
            Message::SexSelected(sex) => self.form.sex = sex,
            Message::BreedInput(content) => self.form.breed = content,
            Message::LifeNumberInput(content) => self.form.life_number = content,
            Message::GpInput(content) => self.form.gp_overall = content,
            Message::RoleSelected(option) => {
                self.form.role = option.0.clone();
                self.role = option;
            }
            Message::ImageUrlInput(content) => self.form.image_url = content,
            Message::BrowseImagePressed => {
                return Action::Run(Task::perform(
                    async {
                        AsyncFileDialog::new()
                            .add_filter("Images", &["png", "jpg", "jpeg", "gif", "webp"])
                            .pick_file()
                            .await
                            .map(|file_handle| file_handle.path().display().to_string())
                    },
                    Message::ImagePicked,
                ));
            }
            Message::ImagePicked(path) => {
                if let Some(path) = path {
                    self.form.image_url = path;
                }
            }
            Message::NotesInput(content) => self.form.notes = content,
            // The form is kept until the parent confirms the save, so a rejected submit can be
            // corrected
            Message::SavePressed => return Action::Submit(self.form.clone()),
            Message::ResetPressed => self.clear(),
        }

        Action::None
    }

    pub fn view(&self) -> Element<'_, Message> {
        let form = &self.form;

        container(
            column![
                text(form.title()).size(20),
                field(
                    "Name",
                    text_input("Name", &form.name)
                        .on_input(Message::NameInput)
                        .on_submit(Message::SavePressed)
                ),
                field(
                    "Sex",
                    combo_box(
                        &self.sex_options,
                        "Sex",
                        Some(&form.sex),
                        Message::SexSelected
                    )
                ),
                field(
                    "Breed",
                    text_input("Breed", &form.breed).on_input(Message::BreedInput)
                ),
                field(
                    "Life number",
                    text_input("Life number", &form.life_number)
                        .on_input(Message::LifeNumberInput)
                ),
                field(
                    "GP overall",
                    text_input("GP overall", &form.gp_overall).on_input(Message::GpInput)
                ),
                field(
                    "Role",
                    combo_box(
                        &self.role_options,
                        "Role",
                        Some(&self.role),
                        Message::RoleSelected
                    )
                ),
                field(
                    "Image",
                    row![
                        text_input("https://...", &form.image_url)
                            .on_input(Message::ImageUrlInput),
                        button("Browse...").on_press(Message::BrowseImagePressed),
                    ]
                    .spacing(4)
                ),
                field(
                    "Notes",
                    text_input("Notes", &form.notes).on_input(Message::NotesInput)
                ),
                space::vertical(),
                row![
                    space::horizontal(),
                    button("Reset")
                        .style(button::subtle)
                        .on_press(Message::ResetPressed),
                    button("Save").on_press(Message::SavePressed),
                ]
                .spacing(8),
            ]
            .spacing(8),
        )
        .padding(20)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(container::rounded_box)
        .into()
    }
}

impl Default for Editor {
    fn default() -> Self {
        Self::new()
    }
}

fn field<'a>(label: &'a str, input: impl Into<Element<'a, Message>>) -> Element<'a, Message> {
    column![text(label).size(12), input.into()].spacing(2).into()
}
