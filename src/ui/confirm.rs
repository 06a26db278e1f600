//! User confirmation prompts for destructive operations

use dialoguer::{theme::ColorfulTheme, Confirm};

use crate::error::{ForemanError, Result};

/// Ask the user to confirm an action
///
/// Returns `Ok(true)` without prompting when `skip` is set (`--yes` or batch
/// mode). Defaults to "no".
pub fn confirm_action(prompt: &str, skip: bool) -> Result<bool> {
    if skip {
        return Ok(true);
    }

    Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .default(false)
        .interact()
        .map_err(|e| ForemanError::Config(format!("Failed to read confirmation: {}", e)))
}
