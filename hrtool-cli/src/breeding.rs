use colored::Colorize;
use hrtool_lib::{Repository, views::breeding::SelectOption};
use sysexits::ExitCode;

pub fn handle(repo: &Repository) -> ExitCode {
    let options = repo.breeding_options();

    print_options("Mares & foals", &options.mares);
    println!();
    print_options("Stallions", &options.stallions);

    ExitCode::Ok
}

fn print_options(heading: &str, options: &[SelectOption]) {
    println!("{}", heading.bold());

    let mut horses = options.iter().filter(|o| !o.is_placeholder()).peekable();
    if horses.peek().is_none() {
        println!("  {}", "none".dimmed());
    }
    for option in horses {
        println!("  {} {}", option.label, format!("[{}]", option.value).dimmed());
    }
}
