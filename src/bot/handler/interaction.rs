//! Interaction handler for slash commands.

use serenity::all::{
    Context, CreateInteractionResponse, CreateInteractionResponseMessage, Interaction,
};

use crate::{bot::command, error::AppError};

const GENERIC_ERROR: &str = "There was an error while executing this command.";

/// Text sent back to the user when a command could not run.
///
/// Unknown commands get the generic message alone; any other failure has the error
/// appended in a code block.
fn error_reply(error: &AppError) -> String {
    match error {
        AppError::UnknownCommand(_) => GENERIC_ERROR.to_string(),
        other => format!("{}\n```\n{}\n```", GENERIC_ERROR, other),
    }
}

/// Handles the interaction_create event.
///
/// Only slash commands are handled; every other interaction kind is ignored. A failed
/// command is logged and answered with an ephemeral error message. Failures to send
/// that answer are ignored.
///
/// # Arguments
/// - `ctx` - Discord context for replying
/// - `interaction` - The interaction received from Discord
pub async fn handle_interaction_create(ctx: Context, interaction: Interaction) {
    let Interaction::Command(command) = interaction else {
        return;
    };

    let Err(e) = command::dispatch(&ctx, &command).await else {
        return;
    };

    tracing::error!(
        "Command /{} from user {} failed: {}",
        command.data.name,
        command.user.id,
        e
    );

    let data = CreateInteractionResponseMessage::new()
        .content(error_reply(&e))
        .ephemeral(true);
    let _ = command
        .create_response(&ctx.http, CreateInteractionResponse::Message(data))
        .await;
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Tests the reply for a command that does not exist.
    ///
    /// Expected: the generic message without details
    #[test]
    fn unknown_command_gets_generic_reply() {
        let reply = error_reply(&AppError::UnknownCommand("nope".to_string()));

        assert_eq!(reply, GENERIC_ERROR);
    }

    /// Tests the reply for a command that failed while running.
    ///
    /// Expected: the generic message followed by the error in a code block
    #[test]
    fn failed_command_reply_includes_error() {
        let error = AppError::from(serenity::Error::Other("Unknown interaction"));

        let reply = error_reply(&error);

        assert_eq!(
            reply,
            "There was an error while executing this command.\n```\nUnknown interaction\n```"
        );
    }
}
