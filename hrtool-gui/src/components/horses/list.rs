use hrtool_lib::views::list::{HorseRow, Tag, TagStyle};
use iced::{
    Alignment, Element, Length, Theme, border,
    widget::{Row, button, column, container, row, space, text, tooltip},
};

use crate::components::horses::Message;

const AVATAR_SIZE: f32 = 48.0;

/// Draw a single horse with its tags and the edit/delete actions.
pub fn horse_row(horse: &HorseRow) -> Element<'_, Message> {
    let mut details = column![text(&horse.title).size(16)].spacing(2);

    if !horse.summary.is_empty() {
        details = details.push(text(&horse.summary).size(12));
    }

    if horse.has_tags() {
        let mut tags = Row::new().spacing(4);
        if let Some(tag) = &horse.role_tag {
            tags = tags.push(pill(tag));
        }
        if horse.notes_tag {
            tags = tags.push(pill(&Tag {
                label: "Notes".into(),
                style: TagStyle::Plain,
            }));
        }
        details = details.push(tags);
    }

    container(
        row![
            avatar(horse),
            details,
            space::horizontal(),
            button("Edit")
                .style(button::subtle)
                .on_press(Message::EditPressed(horse.id.clone())),
            button("Delete")
                .style(button::danger)
                .on_press(Message::DeletePressed(horse.id.clone())),
        ]
        .spacing(12)
        .align_y(Alignment::Center),
    )
    .padding(8)
    .width(Length::Fill)
    .style(container::bordered_box)
    .into()
}

/// Initials badge. Images aren't loaded, so the source shows up on hover.
fn avatar(horse: &HorseRow) -> Element<'_, Message> {
    let initial = horse
        .alt
        .chars()
        .next()
        .map(|c| c.to_uppercase().to_string())
        .unwrap_or_default();

    let badge = container(text(initial).size(20))
        .center_x(AVATAR_SIZE)
        .center_y(AVATAR_SIZE)
        .style(|theme: &Theme| {
            let palette = theme.extended_palette();
            container::Style {
                background: Some(palette.background.strong.color.into()),
                text_color: Some(palette.background.strong.text),
                border: border::rounded(AVATAR_SIZE / 2.0),
                ..container::Style::default()
            }
        });

    tooltip(
        badge,
        container(text(&horse.avatar).size(12))
            .padding(4)
            .style(container::rounded_box),
        tooltip::Position::Bottom,
    )
    .into()
}

fn pill<'a>(tag: &Tag) -> Element<'a, Message> {
    let style = tag.style;

    container(text(tag.label.clone()).size(11))
        .padding([2, 8])
        .style(move |theme: &Theme| {
            let palette = theme.extended_palette();
            let pair = match style {
                TagStyle::Broodmare => palette.success.weak,
                TagStyle::Stud => palette.primary.weak,
                TagStyle::Sales => palette.danger.weak,
                TagStyle::Plain => palette.background.weak,
            };

            container::Style {
                background: Some(pair.color.into()),
                text_color: Some(pair.text),
                border: border::rounded(8),
                ..container::Style::default()
            }
        })
        .into()
}
