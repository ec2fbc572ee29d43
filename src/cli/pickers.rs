use std::str::FromStr;

use inquire::validator::Validation;
use inquire::{CustomType, Text};

use crate::validation::validate_text;

/// Returns `value`, or prompts for it unless running non-interactively.
pub fn require_text(
    value: Option<String>,
    flag: &str,
    label: &str,
    non_interactive: bool,
) -> anyhow::Result<String> {
    if let Some(v) = value {
        return Ok(v);
    }
    if non_interactive {
        anyhow::bail!("--{flag} is required in non-interactive mode");
    }

    let field = label.to_string();
    Ok(Text::new(&format!("{label}:"))
        .with_validator(move |input: &str| {
            Ok(validate_text(input, &field)
                .map(|()| Validation::Valid)
                .unwrap_or_else(|e| Validation::Invalid(e.to_string().into())))
        })
        .prompt()?)
}

/// Numeric counterpart of [`require_text`].
pub fn require_value<T>(
    value: Option<T>,
    flag: &str,
    label: &str,
    non_interactive: bool,
) -> anyhow::Result<T>
where
    T: Clone + FromStr + ToString,
{
    if let Some(v) = value {
        return Ok(v);
    }
    if non_interactive {
        anyhow::bail!("--{flag} is required in non-interactive mode");
    }

    Ok(CustomType::<T>::new(&format!("{label}:"))
        .with_error_message("Please enter a valid number")
        .prompt()?)
}

pub fn confirm_action(message: &str, yes: bool, non_interactive: bool) -> anyhow::Result<bool> {
    if yes {
        Ok(true)
    } else if non_interactive {
        anyhow::bail!("--yes is required for destructive operations in non-interactive mode");
    } else {
        Ok(inquire::Confirm::new(message)
            .with_default(false)
            .prompt()?)
    }
}
