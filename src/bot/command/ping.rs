use serenity::all::{
    CommandInteraction, Context, CreateInteractionResponse, CreateInteractionResponseMessage,
};

use crate::error::AppError;

pub const NAME: &str = "ping";

/// Replies with `Pong!` so moderators can check the bot is alive.
pub async fn run(ctx: &Context, command: &CommandInteraction) -> Result<(), AppError> {
    let data = CreateInteractionResponseMessage::new()
        .content("Pong!")
        .ephemeral(true);

    command
        .create_response(&ctx.http, CreateInteractionResponse::Message(data))
        .await?;

    Ok(())
}
