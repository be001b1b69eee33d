use serenity::all::{CommandInteraction, CreateCommand, Permissions};
use tracing::error;

use crate::service::scoring::ScoringService;
use crate::service::sink::{Notifier, RoleSink};

pub fn register() -> CreateCommand {
    CreateCommand::new("clearall")
        .description("Wipe every member's stored XP")
        .default_member_permissions(Permissions::ADMINISTRATOR)
}

pub async fn run<R: RoleSink, N: Notifier>(
    service: &ScoringService<'_, R, N>,
    _command: &CommandInteraction,
) -> String {
    match service.clear_all().await {
        Ok(removed) => format!("Cleared the XP store. {} records removed.", removed),
        Err(err) => {
            error!("Failed to clear the XP store: {:?}", err);
            "Something went wrong clearing the XP store.".to_string()
        }
    }
}
