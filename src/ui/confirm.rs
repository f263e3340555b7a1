//! User confirmation prompts for destructive operations

use dialoguer::Confirm;

/// Ask the user to confirm `prompt`
///
/// Returns `true` without prompting when `skip` is set (`--yes`).
pub fn confirm_action(prompt: &str, skip: bool) -> Result<bool, dialoguer::Error> {
    if skip {
        return Ok(true);
    }
    Confirm::new()
        .with_prompt(prompt)
        .default(false)
        .interact()
}

/// Refusal message for destructive commands run in batch mode without `--yes`
pub fn batch_refusal(action: &str) -> String {
    format!(
        "Refusing to {} in batch mode without confirmation. Re-run with --yes (-y).",
        action
    )
}
