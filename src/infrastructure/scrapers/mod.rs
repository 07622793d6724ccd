use crate::error::{GameError, Result};
use scraper::{ElementRef, Selector};

pub(crate) mod detail;
pub(crate) mod listing;

pub(crate) fn parse_selector(selector: &str) -> Result<Selector> {
    Selector::parse(selector).map_err(|e| GameError::Selector(format!("{selector}: {e}")))
}

pub(crate) fn element_text(element: ElementRef<'_>) -> String {
    element.text().collect::<String>()
}

pub(crate) fn trimmed_text(element: ElementRef<'_>) -> String {
    element_text(element).trim().to_string()
}

pub(crate) fn attr(element: ElementRef<'_>, name: &str) -> Option<String> {
    element.value().attr(name).map(str::to_string)
}
