//! Interactive confirmation on the terminal.

use std::io::{self, BufRead, Write};

use colored::Colorize;

use notion_core::purge::CONFIRMATION_PHRASE;
use notion_core::{Prompt, PurgePlan};

use crate::output;

/// Shows the warning banner and reads one line from standard input.
#[derive(Debug, Default)]
pub struct StdinPrompt;

impl Prompt for StdinPrompt {
    fn ask(&mut self, plan: &PurgePlan) -> io::Result<String> {
        print_banner(plan);

        print!("Type '{}' to confirm: ", CONFIRMATION_PHRASE);
        io::stdout().flush()?;

        let mut input = String::new();
        io::stdin().lock().read_line(&mut input)?;
        Ok(input)
    }
}

fn print_banner(plan: &PurgePlan) {
    output::rule('=');
    println!("{}", "⚠  DANGER: CLEAR ALL NOTION DATA".red().bold());
    output::rule('=');
    println!("This will archive every page in your linked Notion databases.");
    println!("Databases to be cleared:");
    for target in plan.targets() {
        println!(" - {} ({})", target.label, target.id);
    }
    output::rule('-');
}
