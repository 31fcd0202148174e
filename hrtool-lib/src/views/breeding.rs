use std::fmt::{self, Display, Formatter};

use crate::repository::{Horse, Sex};

/// One entry of a selection list. The placeholder entry has an empty value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    fn placeholder(label: &str) -> Self {
        Self {
            value: String::new(),
            label: label.into(),
        }
    }

    fn horse(horse: &Horse, fallback: &str) -> Self {
        let label = if horse.name.is_empty() {
            fallback
        } else {
            horse.name.as_str()
        };

        Self {
            value: horse.id.to_string(),
            label: label.into(),
        }
    }

    pub fn is_placeholder(&self) -> bool {
        self.value.is_empty()
    }
}

impl Display for SelectOption {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

/// The two selection lists on the breeding page.
#[derive(Debug, Clone, PartialEq)]
pub struct BreedingOptions {
    /// Mares and foals
    pub mares: Vec<SelectOption>,
    pub stallions: Vec<SelectOption>,
}

impl BreedingOptions {
    /// Build both lists from the whole collection, keeping store order.
    pub fn project(horses: &[Horse]) -> Self {
        let mut mares = vec![SelectOption::placeholder("Select mare...")];
        let mut stallions = vec![SelectOption::placeholder("Select stallion...")];

        for horse in horses {
            match horse.sex {
                Sex::Mare | Sex::Foal => mares.push(SelectOption::horse(horse, "Unnamed mare")),
                Sex::Stallion => stallions.push(SelectOption::horse(horse, "Unnamed stallion")),
                Sex::Other(_) => {}
            }
        }

        Self { mares, stallions }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn labels(options: &[SelectOption]) -> Vec<&str> {
        options.iter().map(|o| o.label.as_str()).collect()
    }

    #[test]
    fn test_empty_store() {
        let options = BreedingOptions::project(&[]);

        assert_eq!(labels(&options.mares), ["Select mare..."]);
        assert_eq!(labels(&options.stallions), ["Select stallion..."]);
        assert!(options.mares.iter().all(SelectOption::is_placeholder));
    }

    #[test]
    fn test_split_by_sex() {
        let herd = [
            Horse::new("1", "Bella").with_sex(Sex::Mare),
            Horse::new("2", "Storm").with_sex(Sex::Stallion),
            Horse::new("3", "").with_sex(Sex::Foal),
            Horse::new("4", "Dusty").with_sex(Sex::Other("Gelding".into())),
            Horse::new("5", "").with_sex(Sex::Stallion),
        ];

        let options = BreedingOptions::project(&herd);

        assert_eq!(
            labels(&options.mares),
            ["Select mare...", "Bella", "Unnamed mare"]
        );
        assert_eq!(
            labels(&options.stallions),
            ["Select stallion...", "Storm", "Unnamed stallion"]
        );

        let values: Vec<_> = options.stallions.iter().map(|o| o.value.as_str()).collect();
        assert_eq!(values, ["", "2", "5"]);
    }
}
