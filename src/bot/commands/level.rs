use serenity::all::{
    CommandInteraction, CommandOptionType, CreateCommand, CreateCommandOption, ResolvedOption,
    ResolvedValue,
};
use tracing::error;

use crate::model::member::MemberStanding;
use crate::model::rank::ThresholdBasis;
use crate::service::scoring::ScoringService;
use crate::service::sink::{Notifier, RoleSink};

pub fn register() -> CreateCommand {
    CreateCommand::new("level")
        .description("Show a member's level, XP, and rank progress")
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::User,
                "member",
                "Member to look up (defaults to you)",
            )
            .required(false),
        )
}

pub async fn run<R: RoleSink, N: Notifier>(
    service: &ScoringService<'_, R, N>,
    command: &CommandInteraction,
) -> String {
    let member_id = target_member(&command.data.options()).unwrap_or_else(|| command.user.id.get());

    match service.standing(member_id).await {
        Ok(standing) => format_standing(&standing),
        Err(err) => {
            error!("Failed to load standing for {}: {:?}", member_id, err);
            "Something went wrong looking that member up.".to_string()
        }
    }
}

fn target_member(options: &[ResolvedOption<'_>]) -> Option<u64> {
    options.iter().find_map(|option| match (option.name, &option.value) {
        ("member", ResolvedValue::User(user, _)) => Some(user.id.get()),
        _ => None,
    })
}

/// Renders a member's standing into the command reply.
fn format_standing(standing: &MemberStanding) -> String {
    let mut reply = format!(
        "<@{}> is level {} with {} XP",
        standing.member_id, standing.level, standing.xp
    );

    match &standing.rank {
        Some(rank) => reply.push_str(&format!(", holding the **{}** rank.", rank)),
        None => reply.push('.'),
    }

    if let Some(next) = &standing.next_rank {
        match standing.basis {
            ThresholdBasis::Xp => reply.push_str(&format!(
                " Next rank: **{}** at {} XP ({} XP to go).",
                next.role, next.at, next.remaining
            )),
            ThresholdBasis::Level => reply.push_str(&format!(
                " Next rank: **{}** at level {} ({} to go).",
                next.role, next.at, next.remaining
            )),
        }
    }

    if standing.in_voice {
        reply.push_str(" They are in a voice channel right now.");
    }

    reply
}

#[cfg(test)]
mod tests {
    use crate::model::member::NextRank;

    use super::*;

    fn standing() -> MemberStanding {
        MemberStanding {
            member_id: 77,
            xp: 1500,
            level: 15,
            rank: Some("Gamers".to_string()),
            next_rank: Some(NextRank {
                role: "Elite".to_string(),
                at: 5000,
                remaining: 3500,
            }),
            basis: ThresholdBasis::Xp,
            in_voice: false,
        }
    }

    /// A member inside the table should see their rank and the distance to
    /// the next one. Expected: mention, rank, and progress in one line.
    #[test]
    fn reply_includes_rank_and_progress() {
        let reply = format_standing(&standing());

        assert_eq!(
            reply,
            "<@77> is level 15 with 1500 XP, holding the **Gamers** rank. \
             Next rank: **Elite** at 5000 XP (3500 XP to go)."
        );
    }

    /// A member at the top of the table has nothing left to chase.
    /// Expected: no next rank sentence.
    #[test]
    fn reply_omits_progress_at_the_top_tier() {
        let mut standing = standing();
        standing.rank = Some("Elite".to_string());
        standing.next_rank = None;

        let reply = format_standing(&standing);

        assert!(!reply.contains("Next rank"));
        assert!(reply.ends_with("holding the **Elite** rank."));
    }

    /// A member below the lowest threshold holds no rank yet.
    /// Expected: no rank clause, progress toward the first tier.
    #[test]
    fn reply_handles_unranked_members() {
        let mut standing = standing();
        standing.xp = 0;
        standing.level = 1;
        standing.rank = None;
        standing.next_rank = Some(NextRank {
            role: "Rookie".to_string(),
            at: 100,
            remaining: 100,
        });

        let reply = format_standing(&standing);

        assert!(reply.starts_with("<@77> is level 1 with 0 XP."));
        assert!(reply.contains("Next rank: **Rookie** at 100 XP (100 XP to go)."));
    }

    /// Level-based tables describe progress in levels, not XP.
    /// Expected: "at level N" wording.
    #[test]
    fn reply_speaks_in_levels_for_level_tables() {
        let mut standing = standing();
        standing.basis = ThresholdBasis::Level;
        standing.next_rank = Some(NextRank {
            role: "Elite".to_string(),
            at: 50,
            remaining: 35,
        });

        let reply = format_standing(&standing);

        assert!(reply.contains("Next rank: **Elite** at level 50 (35 to go)."));
    }

    /// An open voice session is worth surfacing in the reply.
    /// Expected: a voice suffix.
    #[test]
    fn reply_mentions_an_open_voice_session() {
        let mut standing = standing();
        standing.in_voice = true;

        let reply = format_standing(&standing);

        assert!(reply.ends_with("They are in a voice channel right now."));
    }
}
