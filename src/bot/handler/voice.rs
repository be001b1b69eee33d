use chrono::Utc;
use sea_orm::DatabaseConnection;
use serenity::all::{Context, VoiceState};
use tracing::{debug, error};

use crate::bot::sink::{DiscordNotifier, DiscordRoleSink};
use crate::config::Config;
use crate::service::scoring::ScoringService;

/// What a voice state update means for session accounting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SessionAction {
    /// The member is in a channel. Settle any open session, then restart the clock.
    Restart,
    /// The member disconnected. Settle any open session.
    Settle,
}

/// Maps a voice state to the session bookkeeping it requires.
///
/// Discord sends the same event shape for joins, disconnects, channel hops,
/// and mute toggles. Working from the new state alone keeps the accounting
/// correct without a gateway cache: every update while the member is in voice
/// closes the running interval and opens the next one, so hops and toggles
/// segment a session without dropping or double-counting time.
fn session_action(state: &VoiceState) -> SessionAction {
    if state.channel_id.is_some() {
        SessionAction::Restart
    } else {
        SessionAction::Settle
    }
}

/// Handles voice state changes by opening and settling voice sessions.
pub async fn handle_voice_state_update(
    db: &DatabaseConnection,
    config: &Config,
    ctx: Context,
    _old: Option<VoiceState>,
    new: VoiceState,
) {
    if new.member.as_ref().is_some_and(|member| member.user.bot) {
        return;
    }

    if new.guild_id.map(|id| id.get()) != Some(config.guild_id) {
        return;
    }

    let member_id = new.user_id.get();
    let now = Utc::now().timestamp();

    let roles = DiscordRoleSink::new(ctx.http.clone(), config.guild_id);
    let notifier = DiscordNotifier::new(ctx.http.clone(), config.scoring.announce_channel_id);
    let service = ScoringService::new(db, &config.scoring, &roles, &notifier);

    match service.close_voice(member_id, now).await {
        Ok(Some(adjustment)) => debug!(
            "Settled voice session for {}: {} XP",
            member_id,
            adjustment.applied_delta()
        ),
        Ok(None) => (),
        Err(err) => error!("Failed to settle voice session for {}: {:?}", member_id, err),
    }

    if session_action(&new) == SessionAction::Restart {
        if let Err(err) = service.open_voice(member_id, now).await {
            error!("Failed to open voice session for {}: {:?}", member_id, err);
        }
    }
}
