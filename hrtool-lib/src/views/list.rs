//! Display rows for the horse list.

use strum::{AsRefStr, Display};

use crate::repository::{Horse, HorseId, Role};

pub const EMPTY_MESSAGE: &str = "No horses yet. Add some on the left.";

const SEPARATOR: &str = " · ";

/// Visual variant of a role tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, AsRefStr)]
#[strum(serialize_all = "kebab-case")]
pub enum TagStyle {
    Broodmare,
    Stud,
    Sales,
    /// A role outside the known set
    Plain,
}

impl From<&Role> for TagStyle {
    fn from(role: &Role) -> Self {
        match role {
            Role::Broodmare => TagStyle::Broodmare,
            Role::Stud => TagStyle::Stud,
            Role::Sales => TagStyle::Sales,
            Role::Other(_) => TagStyle::Plain,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Tag {
    pub label: String,
    pub style: TagStyle,
}

/// One horse, ready to draw.
#[derive(Debug, Clone, PartialEq)]
pub struct HorseRow {
    /// Target of the row's edit and delete actions
    pub id: HorseId,
    pub avatar: String,
    pub alt: String,
    pub title: String,
    /// Sex, breed, life number and score, whichever are set. May be empty.
    pub summary: String,
    pub role_tag: Option<Tag>,
    /// Set when the horse has notes; the notes themselves aren't shown in the list
    pub notes_tag: bool,
}

impl HorseRow {
    pub fn new(horse: &Horse, placeholder: &str) -> Self {
        let avatar = if horse.image_url.is_empty() {
            placeholder
        } else {
            horse.image_url.as_str()
        };

        Self {
            id: horse.id.clone(),
            avatar: avatar.into(),
            alt: non_empty_or(&horse.name, "Horse"),
            title: non_empty_or(&horse.name, "Unnamed horse"),
            summary: summary(horse),
            role_tag: horse.role.as_ref().map(|role| Tag {
                label: role.to_string(),
                style: role.into(),
            }),
            notes_tag: !horse.notes.is_empty(),
        }
    }

    pub fn has_tags(&self) -> bool {
        self.role_tag.is_some() || self.notes_tag
    }
}

/// The rendered horse list: rows, the count label and the empty-state message.
#[derive(Debug, Clone, PartialEq)]
pub struct ListView {
    pub rows: Vec<HorseRow>,
    pub count_label: String,
    /// Shown instead of rows when there are none
    pub empty_message: Option<&'static str>,
}

impl ListView {
    pub fn render<'a>(horses: impl IntoIterator<Item = &'a Horse>, placeholder: &str) -> Self {
        let rows: Vec<HorseRow> = horses
            .into_iter()
            .map(|h| HorseRow::new(h, placeholder))
            .collect();

        Self {
            count_label: count_label(rows.len()),
            empty_message: rows.is_empty().then_some(EMPTY_MESSAGE),
            rows,
        }
    }
}

pub fn count_label(count: usize) -> String {
    match count {
        1 => "1 horse".into(),
        n => format!("{n} horses"),
    }
}

fn summary(horse: &Horse) -> String {
    let mut bits: Vec<String> = Vec::new();

    if !horse.sex.as_str().is_empty() {
        bits.push(horse.sex.to_string());
    }
    if !horse.breed.is_empty() {
        bits.push(horse.breed.clone());
    }
    if !horse.life_number.is_empty() {
        bits.push(format!("#{}", horse.life_number));
    }
    if let Some(score) = horse.gp_overall.value() {
        bits.push(format!("GP {score}"));
    }

    bits.join(SEPARATOR)
}

fn non_empty_or(value: &str, fallback: &str) -> String {
    if value.is_empty() {
        fallback.into()
    } else {
        value.into()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::repository::{Score, Sex};

    const PLACEHOLDER: &str = "https://example.com/placeholder.png";

    #[test]
    fn test_full_row() {
        let horse = Horse::new("1", "Bella")
            .with_sex(Sex::Mare)
            .with_breed("Arabian")
            .with_life_number("123")
            .with_gp_overall(812.5)
            .with_role(Role::Broodmare)
            .with_notes("Quiet")
            .with_image_url("https://example.com/bella.png");

        let row = HorseRow::new(&horse, PLACEHOLDER);

        assert_eq!(row.avatar, "https://example.com/bella.png");
        assert_eq!(row.title, "Bella");
        assert_eq!(row.summary, "Mare · Arabian · #123 · GP 812.5");
        assert_eq!(
            row.role_tag,
            Some(Tag {
                label: "Broodmare".into(),
                style: TagStyle::Broodmare
            })
        );
        assert!(row.notes_tag);
    }

    #[test]
    fn test_sparse_row() {
        let mut horse = Horse::new("2", "").with_sex(Sex::Other(String::new()));
        horse.gp_overall = Score::Null;

        let row = HorseRow::new(&horse, PLACEHOLDER);

        assert_eq!(row.avatar, PLACEHOLDER);
        assert_eq!(row.title, "Unnamed horse");
        assert_eq!(row.alt, "Horse");
        assert_eq!(row.summary, "");
        assert!(!row.has_tags());
    }

    #[test]
    fn test_zero_score_is_shown() {
        let horse = Horse::new("3", "Pip").with_sex(Sex::Foal).with_gp_overall(0.0);

        assert_eq!(HorseRow::new(&horse, PLACEHOLDER).summary, "Foal · GP 0");
    }

    #[test]
    fn test_unknown_role_is_plain() {
        let horse = Horse::new("4", "Dusty").with_role(Role::Other("Riding".into()));

        let tag = HorseRow::new(&horse, PLACEHOLDER).role_tag.unwrap();

        assert_eq!(tag.label, "Riding");
        assert_eq!(tag.style, TagStyle::Plain);
        assert_eq!(tag.style.as_ref(), "plain");
    }

    #[test]
    fn test_count_label() {
        assert_eq!(count_label(0), "0 horses");
        assert_eq!(count_label(1), "1 horse");
        assert_eq!(count_label(2), "2 horses");
    }

    #[test]
    fn test_empty_list() {
        let none: [Horse; 0] = [];
        let view = ListView::render(&none, PLACEHOLDER);

        assert!(view.rows.is_empty());
        assert_eq!(view.count_label, "0 horses");
        assert_eq!(view.empty_message, Some(EMPTY_MESSAGE));
    }

    #[test]
    fn test_rows_follow_input_order() {
        let herd = [Horse::new("b", "Storm"), Horse::new("a", "Bella")];

        let view = ListView::render(&herd, PLACEHOLDER);

        let titles: Vec<_> = view.rows.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, ["Storm", "Bella"]);
        assert_eq!(view.count_label, "2 horses");
        assert_eq!(view.empty_message, None);
    }
}
