use crate::error::{config::ConfigError, AppError};
use crate::model::rank::{RankTable, RankTier, ThresholdBasis};

const DEFAULT_TEXT_MESSAGE_XP: i64 = 10;
const DEFAULT_VOICE_XP_PER_MINUTE: i64 = 1;
const DEFAULT_RANK_THRESHOLDS: &str = "0:Rookie,1000:Gamers,5000:Elite";
const DEFAULT_LIVENESS_ADDR: &str = "0.0.0.0:8080";

pub struct Config {
    pub database_url: String,

    pub discord_bot_token: String,
    pub guild_id: u64,

    pub welcome_channel_id: Option<u64>,
    pub log_channel_id: Option<u64>,

    pub liveness_addr: String,

    pub scoring: ScoringConfig,
}

/// Tunables consumed by the scoring engine.
///
/// Split out of `Config` so services and tests can be handed award amounts
/// and the rank table without the bot token and connection strings.
pub struct ScoringConfig {
    /// XP awarded per qualifying text message.
    pub text_message_xp: i64,
    /// XP awarded per full minute of voice presence.
    pub voice_xp_per_minute: i64,
    /// Whether organic XP gains are announced, not just level-ups.
    pub announce_xp_gains: bool,
    /// Channel receiving level-up and gain announcements, if any.
    pub announce_channel_id: Option<u64>,
    /// Rank tier table for role reconciliation.
    pub table: RankTable,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let basis = match optional("RANK_THRESHOLD_BASIS") {
            Some(value) => parse_basis("RANK_THRESHOLD_BASIS", &value)?,
            None => ThresholdBasis::Xp,
        };
        let thresholds = optional("RANK_THRESHOLDS")
            .unwrap_or_else(|| DEFAULT_RANK_THRESHOLDS.to_string());
        let tiers = parse_thresholds("RANK_THRESHOLDS", &thresholds)?;

        Ok(Self {
            database_url: require("DATABASE_URL")?,
            discord_bot_token: require("DISCORD_BOT_TOKEN")?,
            guild_id: parse_u64("DISCORD_GUILD_ID", &require("DISCORD_GUILD_ID")?)?,
            welcome_channel_id: optional_u64("WELCOME_CHANNEL_ID")?,
            log_channel_id: optional_u64("LOG_CHANNEL_ID")?,
            liveness_addr: optional("LIVENESS_ADDR")
                .unwrap_or_else(|| DEFAULT_LIVENESS_ADDR.to_string()),
            scoring: ScoringConfig {
                text_message_xp: optional_award("TEXT_MESSAGE_XP", DEFAULT_TEXT_MESSAGE_XP)?,
                voice_xp_per_minute: optional_award(
                    "VOICE_XP_PER_MINUTE",
                    DEFAULT_VOICE_XP_PER_MINUTE,
                )?,
                announce_xp_gains: match optional("ANNOUNCE_XP_GAINS") {
                    Some(value) => parse_bool("ANNOUNCE_XP_GAINS", &value)?,
                    None => false,
                },
                announce_channel_id: optional_u64("ANNOUNCE_CHANNEL_ID")?,
                table: RankTable::new(basis, tiers),
            },
        })
    }
}

fn require(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}

/// Reads an optional variable, treating unset and blank the same.
fn optional(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn parse_u64(name: &str, value: &str) -> Result<u64, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::InvalidEnvVar {
        name: name.to_string(),
        reason: format!("'{}' is not an unsigned integer", value),
    })
}

fn optional_u64(name: &str) -> Result<Option<u64>, ConfigError> {
    optional(name).map(|value| parse_u64(name, &value)).transpose()
}

/// Parses a non-negative XP award amount, falling back to a default when unset.
fn optional_award(name: &str, default: i64) -> Result<i64, ConfigError> {
    let Some(value) = optional(name) else {
        return Ok(default);
    };
    let amount: i64 = value.parse().map_err(|_| ConfigError::InvalidEnvVar {
        name: name.to_string(),
        reason: format!("'{}' is not an integer", value),
    })?;
    if amount < 0 {
        return Err(ConfigError::InvalidEnvVar {
            name: name.to_string(),
            reason: "award amounts cannot be negative".to_string(),
        });
    }
    Ok(amount)
}

fn parse_bool(name: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        other => Err(ConfigError::InvalidEnvVar {
            name: name.to_string(),
            reason: format!("'{}' is not a boolean", other),
        }),
    }
}

fn parse_basis(name: &str, value: &str) -> Result<ThresholdBasis, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "xp" => Ok(ThresholdBasis::Xp),
        "level" => Ok(ThresholdBasis::Level),
        other => Err(ConfigError::InvalidEnvVar {
            name: name.to_string(),
            reason: format!("unknown threshold basis '{}', expected 'xp' or 'level'", other),
        }),
    }
}

/// Parses a `min:Role,min:Role,...` threshold list.
///
/// Each entry is a non-negative integer threshold, a colon, and a role name
/// (which may contain spaces). Thresholds must be unique; at least one entry
/// is required.
fn parse_thresholds(name: &str, value: &str) -> Result<Vec<RankTier>, ConfigError> {
    let invalid = |reason: String| ConfigError::InvalidEnvVar {
        name: name.to_string(),
        reason,
    };

    let mut tiers = Vec::new();
    for entry in value.split(',') {
        let entry = entry.trim();
        if entry.is_empty() {
            continue;
        }

        let (min, role) = entry
            .split_once(':')
            .ok_or_else(|| invalid(format!("entry '{}' is missing a ':' separator", entry)))?;

        let min: i64 = min
            .trim()
            .parse()
            .map_err(|_| invalid(format!("threshold '{}' is not an integer", min.trim())))?;
        if min < 0 {
            return Err(invalid(format!("threshold {} is negative", min)));
        }

        let role = role.trim();
        if role.is_empty() {
            return Err(invalid(format!("entry '{}' has an empty role name", entry)));
        }

        if tiers.iter().any(|tier: &RankTier| tier.min == min) {
            return Err(invalid(format!("duplicate threshold {}", min)));
        }

        tiers.push(RankTier::new(min, role));
    }

    if tiers.is_empty() {
        return Err(invalid("no tiers configured".to_string()));
    }

    Ok(tiers)
}
