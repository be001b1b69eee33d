use sea_orm::DatabaseConnection;
use serenity::all::{
    Context, CreateInteractionResponse, CreateInteractionResponseMessage, Interaction,
};
use tracing::{debug, error, warn};

use crate::bot::commands;
use crate::bot::sink::{DiscordNotifier, DiscordRoleSink};
use crate::config::Config;
use crate::service::scoring::ScoringService;

/// Handles slash command invocations by dispatching to the command modules.
pub async fn handle_interaction_create(
    db: &DatabaseConnection,
    config: &Config,
    ctx: Context,
    interaction: Interaction,
) {
    let Interaction::Command(command) = interaction else {
        return;
    };

    debug!(
        "Received /{} from {}",
        command.data.name, command.user.name
    );

    let roles = DiscordRoleSink::new(ctx.http.clone(), config.guild_id);
    let notifier = DiscordNotifier::new(ctx.http.clone(), config.scoring.announce_channel_id);
    let service = ScoringService::new(db, &config.scoring, &roles, &notifier);

    let content = match command.data.name.as_str() {
        "level" => commands::level::run(&service, &command).await,
        "levelup" => commands::levelup::run(&service, &command).await,
        "leveldown" => commands::leveldown::run(&service, &command).await,
        "clearall" => commands::clearall::run(&service, &command).await,
        other => {
            warn!("Unknown command received: {}", other);
            format!("Unknown command '{}'.", other)
        }
    };

    let response =
        CreateInteractionResponse::Message(CreateInteractionResponseMessage::new().content(content));

    if let Err(err) = command.create_response(&ctx.http, response).await {
        error!(
            "Failed to respond to /{}: {:?}",
            command.data.name, err
        );
    }
}
