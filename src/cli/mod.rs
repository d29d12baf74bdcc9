pub mod commands;

pub use commands::{Cli, Commands};

use console::style;
use dialoguer::{theme::ColorfulTheme, Select};
use lang_toggle::state::AppState;
use lang_toggle::ui::page_view;
use lang_toggle::utils::error::TogglerError;
use rust_i18n::t;
use std::path::Path;

/// Interactive terminal session: render the page, click the toggle, inspect
/// elements and history
pub fn run_interactive(page: Option<&Path>) -> anyhow::Result<()> {
    let mut state = match page {
        Some(path) => match AppState::open(path) {
            Ok(state) => state,
            Err(err) => {
                report_error(&err);
                std::process::exit(1);
            }
        },
        None => {
            println!("{}", style(t!("interactive.using_sample")).dim());
            AppState::sample()?
        }
    };

    println!(
        "{}",
        t!("interactive.loaded", source = state.source_name())
    );
    print!("{}", page_view::render(&state.page));

    loop {
        let choices = vec![
            t!("menu.toggle").to_string(),
            t!("menu.show").to_string(),
            t!("menu.elements").to_string(),
            t!("menu.history").to_string(),
            t!("menu.quit").to_string(),
        ];

        let selection = Select::with_theme(&ColorfulTheme::default())
            .with_prompt(t!(
                "menu.prompt",
                lang = state.current_language().native_name()
            ))
            .items(&choices)
            .default(0)
            .interact()?;

        match selection {
            0 => {
                let lang = state.toggle();
                println!(
                    "{}",
                    style(t!("interactive.switched", lang = lang.native_name())).green()
                );
                print!("{}", page_view::render(&state.page));
            }
            1 => {
                print!("{}", page_view::render(&state.page));
            }
            2 => {
                for element in &state.page.elements {
                    println!("{}", page_view::describe(element));
                }
                let incomplete = state.page.incomplete_elements().len();
                if incomplete > 0 {
                    println!(
                        "{}",
                        style(t!("interactive.incomplete", count = incomplete)).yellow()
                    );
                }
            }
            3 => {
                if state.history.is_empty() {
                    println!("{}", t!("interactive.no_history"));
                } else {
                    for event in &state.history {
                        println!("{}", event.format());
                    }
                }
            }
            _ => break,
        }
    }

    Ok(())
}

/// Print an error the way the interactive views do
fn report_error(err: &TogglerError) {
    eprintln!("{} {}", style("error:").red().bold(), err.user_message());
}
