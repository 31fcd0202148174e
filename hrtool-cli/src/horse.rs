use clap::Subcommand;
use colored::{ColoredString, Colorize};
use hrtool_lib::{
    Repository,
    repository::{HorseForm, HorseId, Role, Sex},
    views::list::{HorseRow, Tag, TagStyle},
};
use sysexits::ExitCode;

use crate::{fail, prompt::confirm, unsaved};

const DELETE_QUESTION: &str = "Delete this horse?";

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// List horses, optionally filtered by a search query
    List {
        #[arg(short, long, default_value = "")]
        search: String,
    },
    /// Show every field of a horse
    Show { id: String },
    /// Add a new horse
    Add {
        #[arg(long)]
        name: String,
        /// Use this id instead of generating one
        #[arg(long)]
        id: Option<String>,
        #[command(flatten)]
        fields: Fields,
    },
    /// Change fields of an existing horse
    Edit {
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[command(flatten)]
        fields: Fields,
    },
    /// Delete a horse
    Remove {
        id: String,
        /// Don't ask for confirmation
        #[arg(short, long)]
        yes: bool,
    },
}

#[derive(clap::Args, Debug, Clone, Default)]
pub struct Fields {
    /// Mare, Stallion or Foal
    #[arg(long)]
    sex: Option<String>,
    #[arg(long)]
    breed: Option<String>,
    #[arg(long)]
    life_number: Option<String>,
    /// Overall GP score. An empty value clears it.
    #[arg(long)]
    gp: Option<String>,
    /// Broodmare, Stud or Sales. An empty value clears it.
    #[arg(long)]
    role: Option<String>,
    #[arg(long)]
    image_url: Option<String>,
    #[arg(long)]
    notes: Option<String>,
}

impl Fields {
    /// Overwrite the form fields that were given on the command line.
    fn apply(&self, form: &mut HorseForm) {
        if let Some(sex) = &self.sex {
            form.sex = Sex::from(sex.clone());
        }
        if let Some(breed) = &self.breed {
            form.breed = breed.clone();
        }
        if let Some(life_number) = &self.life_number {
            form.life_number = life_number.clone();
        }
        if let Some(gp) = &self.gp {
            form.gp_overall = gp.clone();
        }
        if let Some(role) = &self.role {
            form.role = Role::parse(role.trim());
        }
        if let Some(image_url) = &self.image_url {
            form.image_url = image_url.clone();
        }
        if let Some(notes) = &self.notes {
            form.notes = notes.clone();
        }
    }
}

pub fn handle(repo: &Repository, cmd: &Command) -> ExitCode {
    match cmd {
        Command::List { search } => {
            let view = repo.list_view(search);

            match view.empty_message {
                Some(message) => println!("{}", message.dimmed()),
                None => view.rows.iter().for_each(print_row),
            }
            println!("{}", view.count_label.bold());

            ExitCode::Ok
        }
        Command::Show { id } => {
            let Some(horse) = repo.find(&HorseId::new(id.as_str())) else {
                return not_found(id);
            };

            println!("{} {}", "Id:".bold(), horse.id);
            println!("{} {}", "Name:".bold(), horse.name);
            println!("{} {}", "Sex:".bold(), horse.sex);
            println!("{} {}", "Breed:".bold(), horse.breed);
            println!("{} {}", "Life number:".bold(), horse.life_number);
            println!("{} {}", "GP overall:".bold(), horse.gp_overall);
            println!(
                "{} {}",
                "Role:".bold(),
                horse.role.as_ref().map(Role::as_str).unwrap_or_default()
            );
            println!("{} {}", "Image:".bold(), horse.image_url);
            println!("{} {}", "Notes:".bold(), horse.notes);
            if let Some(updated_at) = horse.updated_at {
                println!("{} {}", "Updated:".bold(), updated_at.to_rfc3339());
            }

            ExitCode::Ok
        }
        Command::Add { name, id, fields } => {
            let mut form = HorseForm {
                id: id.clone().unwrap_or_default(),
                name: name.clone(),
                ..Default::default()
            };
            fields.apply(&mut form);

            submit(repo, &form)
        }
        Command::Edit { id, name, fields } => {
            let Some(horse) = repo.find(&HorseId::new(id.as_str())) else {
                return not_found(id);
            };

            let mut form = HorseForm::edit(&horse);
            if let Some(name) = name {
                form.name = name.clone();
            }
            fields.apply(&mut form);

            submit(repo, &form)
        }
        Command::Remove { id, yes } => {
            let id = HorseId::new(id.as_str());
            let Some(horse) = repo.find(&id) else {
                return not_found(id.as_str());
            };

            println!("{}", horse.name.as_str().bold());
            if !yes && !confirm(DELETE_QUESTION) {
                println!("Nothing deleted");
                return ExitCode::Ok;
            }

            if !repo.remove(&id).persisted {
                return unsaved();
            }
            println!("Deleted {}", horse.name);

            ExitCode::Ok
        }
    }
}

fn submit(repo: &Repository, form: &HorseForm) -> ExitCode {
    let verb = if form.is_editing() { "Updated" } else { "Added" };

    match repo.submit(form) {
        Ok(committed) if !committed.persisted => unsaved(),
        Ok(committed) => {
            println!("{verb} {} ({})", committed.value.name.bold(), committed.value.id);
            ExitCode::Ok
        }
        Err(e) => fail(&e),
    }
}

fn not_found(id: &str) -> ExitCode {
    eprintln!("{} no horse with id {id}", "error:".red().bold());
    ExitCode::NoInput
}

fn print_row(row: &HorseRow) {
    let mut line = format!("{} {}", row.title.bold(), format!("[{}]", row.id).dimmed());

    if !row.summary.is_empty() {
        line.push_str(&format!("  {}", row.summary));
    }
    if let Some(tag) = &row.role_tag {
        line.push_str(&format!("  {}", paint(tag)));
    }
    if row.notes_tag {
        line.push_str(&format!("  {}", "(Notes)".italic()));
    }

    println!("{line}");
}

fn paint(tag: &Tag) -> ColoredString {
    let label = format!("({})", tag.label);

    match tag.style {
        TagStyle::Broodmare => label.magenta(),
        TagStyle::Stud => label.blue(),
        TagStyle::Sales => label.green(),
        TagStyle::Plain => label.normal(),
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::prompt::confirm_with;

    #[test]
    fn test_fields_override_form() {
        let mut form = HorseForm {
            name: "Bella".into(),
            breed: "Arabian".into(),
            gp_overall: "800".into(),
            role: Some(Role::Broodmare),
            ..Default::default()
        };
        let fields = Fields {
            breed: Some("Thoroughbred".into()),
            gp: Some(String::new()),
            role: Some(String::new()),
            sex: Some("Foal".into()),
            ..Default::default()
        };

        fields.apply(&mut form);

        assert_eq!(form.name, "Bella");
        assert_eq!(form.breed, "Thoroughbred");
        assert_eq!(form.gp_overall, "");
        assert_eq!(form.role, None);
        assert_eq!(form.sex, Sex::Foal);
    }

    #[test]
    fn test_paint_keeps_label() {
        let tag = Tag {
            label: "Stud".into(),
            style: TagStyle::Stud,
        };

        assert!(paint(&tag).to_string().contains("(Stud)"));
    }

    #[test]
    fn test_delete_question() {
        let mut output = Vec::new();

        assert!(!confirm_with(&mut "n\n".as_bytes(), &mut output, DELETE_QUESTION));
        assert_eq!(
            String::from_utf8(output).unwrap(),
            "Delete this horse? [y/N] "
        );
    }
}
