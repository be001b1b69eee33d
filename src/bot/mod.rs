//! Discord bot integration for XP accrual and rank maintenance.
//!
//! This module provides the Discord-facing half of the application: gateway
//! event handlers that convert member activity into XP awards, slash commands
//! for looking up and adjusting XP, and the Serenity-backed sinks the scoring
//! engine uses to mutate roles and post announcements.
//!
//! The bot runs in the main task and reconnects on gateway failures. Event
//! handlers construct the scoring service per event from the shared database
//! connection and the HTTP handle on the event context.
//!
//! # Gateway Intents
//!
//! The bot requires the following gateway intents:
//! - `GUILDS` - Guild availability and slash command context
//! - `GUILD_MESSAGES` - Message events for text activity awards
//! - `GUILD_MEMBERS` - Join/leave events (privileged intent)
//! - `GUILD_VOICE_STATES` - Voice join/leave/move events for session tracking
//!
//! Note: `GUILD_MEMBERS` is a privileged intent and must be explicitly enabled
//! in the Discord Developer Portal for the bot application.

pub mod commands;
pub mod handler;
pub mod sink;
pub mod start;
