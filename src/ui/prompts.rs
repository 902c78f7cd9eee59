use anyhow::Result;
use dialoguer::{Input, Select};

/// Yes/No question answered with the arrow keys
///
/// # Arguments
/// * `prompt` - The question to ask
/// * `default_yes` - Preselect "Yes" instead of "No"
///
/// # Returns
/// * `Ok(true)` - User picked "Yes"
/// * `Ok(false)` - User picked "No"
pub fn prompt_confirmation(prompt: &str, default_yes: bool) -> Result<bool> {
    let selection = Select::new()
        .with_prompt(prompt)
        .items(&["Yes", "No"])
        .default(if default_yes { 0 } else { 1 })
        .interact()?;

    Ok(selection == 0)
}

/// Deleting a calculator defaults to "No"
pub fn prompt_delete_confirmation(calculator_name: &str) -> Result<bool> {
    prompt_confirmation(
        &format!("Delete calculator '{}'? Its share link will stop working.", calculator_name),
        false,
    )
}

/// Free text answer, prefilled with `default` when given
pub fn text_input(prompt: &str, default: Option<&str>) -> Result<String> {
    let mut input = Input::<String>::new().with_prompt(prompt);
    if let Some(default) = default {
        input = input.default(default.to_string());
    }
    Ok(input.interact_text()?)
}

pub fn confirm(message: &str, default: bool) -> Result<bool> {
    prompt_confirmation(message, default)
}
