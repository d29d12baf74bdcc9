// Load i18n translations
rust_i18n::i18n!("locales", fallback = "en");

mod cli;

use clap::Parser;
use lang_toggle::models::Page;
use lang_toggle::services::{LanguageToggler, PageService};
use lang_toggle::ui::page_view;
use lang_toggle::utils::{i18n, logger};
use rust_i18n::t;

fn main() -> anyhow::Result<()> {
    // Initialize logger
    logger::init();

    // Set UI language for the tool's own messages
    i18n::set_language();

    tracing::info!("lang-toggle - Starting...");
    tracing::info!("UI language: {}", i18n::current_language());

    let cli = cli::Cli::parse();

    if cli.interactive || cli.command.is_none() {
        // Run interactive mode
        cli::run_interactive(cli.page.as_deref())?;
    } else {
        // Handle command-line commands
        match cli.command {
            Some(cli::Commands::Render { file, clicks }) => {
                let mut page = PageService::load_page(&file)?;
                let mut toggler = LanguageToggler::initialize(&mut page)?;

                for _ in 0..clicks {
                    toggler.toggle(&mut page);
                }

                print!("{}", page_view::render(&page));
            }
            Some(cli::Commands::Elements { file }) => {
                let page = PageService::load_page(&file)?;

                if page.elements.is_empty() {
                    println!("{}", t!("elements.none"));
                } else {
                    for element in &page.elements {
                        println!("{}", page_view::describe(element));
                    }
                }
            }
            Some(cli::Commands::Check { file }) => {
                let page = PageService::load_page(&file)?;
                let missing = page.missing_translations();

                if missing.is_empty() {
                    println!("{}", t!("check.ok", count = page.elements.len()));
                } else {
                    for (index, attribute) in &missing {
                        println!(
                            "{}",
                            t!("check.missing", index = index, attribute = attribute)
                        );
                    }
                    std::process::exit(1);
                }
            }
            Some(cli::Commands::Sample { write }) => {
                let sample = Page::sample();
                match write {
                    Some(path) => {
                        PageService::save_page(&path, &sample)?;
                        println!("{}", t!("sample.written", path = path.display()));
                    }
                    None => print!("{}", toml::to_string_pretty(&sample)?),
                }
            }
            None => unreachable!(),
        }
    }

    Ok(())
}
