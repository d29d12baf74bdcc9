use crate::models::{Language, Page, TranslatableElement};
use console::style;

/// Render a page to a terminal-friendly string
///
/// Text elements show their visible text, image elements their current
/// source. The toggle control is drawn last with its label.
pub fn render(page: &Page) -> String {
    let mut out = String::new();

    if let Some(title) = &page.title {
        out.push_str(&format!("{}\n", style(title).bold().underlined()));
        out.push('\n');
    }

    for element in &page.elements {
        out.push_str(&render_element(element));
        out.push('\n');
    }

    if let Some(control) = &page.toggle {
        out.push('\n');
        out.push_str(&format!(
            "{} {}\n",
            style(format!("[{}]", control.id)).dim(),
            style(&control.label).cyan().bold()
        ));
    }

    out
}

fn render_element(element: &TranslatableElement) -> String {
    let id = element
        .id()
        .map(|id| format!("{} ", style(format!("#{}", id)).dim()))
        .unwrap_or_default();

    match element {
        TranslatableElement::Text(el) => format!("{}{}", id, el.text),
        TranslatableElement::Image(el) => {
            format!("{}{} {}", id, style("(image)").magenta(), el.src)
        }
    }
}

/// One-line summary of an element's source values, for listings
pub fn describe(element: &TranslatableElement) -> String {
    format!(
        "{:5} {:12} data-es={:?} data-en={:?}",
        element.kind(),
        element.id().unwrap_or("-"),
        element.translation(Language::Es).unwrap_or(""),
        element.translation(Language::En).unwrap_or("")
    )
}
