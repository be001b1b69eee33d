//! Slash command definitions and execution.
//!
//! Each command module provides `register()`, which builds the command for
//! guild registration, and `run()`, which executes it against the scoring
//! service and returns the reply content. Admin commands rely on Discord's
//! default member permission gate rather than re-checking permissions here.

use serenity::all::{CreateCommand, ResolvedOption, ResolvedValue};

pub mod clearall;
pub mod level;
pub mod leveldown;
pub mod levelup;

/// Builds every command this bot registers in the guild.
pub fn all() -> Vec<CreateCommand> {
    vec![
        level::register(),
        levelup::register(),
        leveldown::register(),
        clearall::register(),
    ]
}

/// Extracts the member and amount arguments shared by the adjustment commands.
pub(crate) fn member_and_amount(options: &[ResolvedOption<'_>]) -> Option<(u64, i64)> {
    let mut member_id = None;
    let mut amount = None;

    for option in options {
        match (option.name, &option.value) {
            ("member", ResolvedValue::User(user, _)) => member_id = Some(user.id.get()),
            ("amount", ResolvedValue::Integer(value)) => amount = Some(*value),
            _ => (),
        }
    }

    Some((member_id?, amount?))
}
