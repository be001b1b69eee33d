use serenity::all::{
    CommandInteraction, CommandOptionType, CreateCommand, CreateCommandOption, Permissions,
};
use tracing::error;

use crate::bot::commands::member_and_amount;
use crate::service::scoring::ScoringService;
use crate::service::sink::{Notifier, RoleSink};

pub fn register() -> CreateCommand {
    CreateCommand::new("leveldown")
        .description("Remove XP from a member")
        .default_member_permissions(Permissions::ADMINISTRATOR)
        .add_option(
            CreateCommandOption::new(CommandOptionType::User, "member", "Member to remove XP from")
                .required(true),
        )
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::Integer,
                "amount",
                "Amount of XP to remove",
            )
            .required(true),
        )
}

pub async fn run<R: RoleSink, N: Notifier>(
    service: &ScoringService<'_, R, N>,
    command: &CommandInteraction,
) -> String {
    let Some((member_id, amount)) = member_and_amount(&command.data.options()) else {
        return "Both a member and an amount are required.".to_string();
    };

    if amount <= 0 {
        return "The amount must be a positive number of XP.".to_string();
    }

    match service.admin_adjust(member_id, -amount).await {
        Ok(adjustment) => format!(
            "Removed {} XP from <@{}>. They are now level {} with {} XP.",
            -adjustment.applied_delta(),
            member_id,
            adjustment.level_after,
            adjustment.xp_after
        ),
        Err(err) => {
            error!(
                "Failed to remove {} XP from {}: {:?}",
                amount, member_id, err
            );
            "Something went wrong applying that adjustment.".to_string()
        }
    }
}
