use std::fmt::Display;

use inquire::{InquireError, Select, Text};
use miette::Diagnostic;
use thiserror::Error;

pub(crate) fn select<T: Display>(items: Vec<T>, prompt: &str) -> Result<T, Error> {
    Select::new(prompt, items).prompt().map_err(Error)
}

pub(crate) fn get_input(prompt: &str) -> Result<String, Error> {
    Text::new(prompt).prompt().map_err(Error)
}

#[derive(Debug, Diagnostic, Error)]
#[error("Failed to get user input")]
#[diagnostic(
    code(prompt),
    help("`browse` is interactive, run it from a terminal or use `render` instead.")
)]
pub(crate) struct Error(#[source] InquireError);
