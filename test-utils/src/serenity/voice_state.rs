//! Test factory for creating Serenity VoiceState objects.
//!
//! This module provides a factory function for creating mock Serenity `VoiceState`
//! structs for testing purposes. The factory creates valid VoiceState objects by
//! deserializing JSON, simulating what Discord's gateway would deliver on a
//! voice state update.

use serenity::all::VoiceState;

/// Creates a test Serenity VoiceState with customizable fields.
///
/// Creates a VoiceState object by deserializing JSON with the provided values.
/// A `channel_id` of `None` models a member who is not connected to any voice
/// channel, which is how Discord signals a leave. All other fields are set to
/// reasonable defaults (not deafened, not muted, not suppressed).
///
/// # Arguments
/// - `user_id` - Discord user ID (snowflake)
/// - `channel_id` - Voice channel the user occupies, or `None` when disconnected
///
/// # Returns
/// - `VoiceState` - A valid Serenity VoiceState struct for testing
///
/// # Panics
/// - If the JSON cannot be deserialized into a VoiceState (indicates invalid test data)
///
/// # Examples
///
/// ```rust,ignore
/// use test_utils::serenity::voice_state::create_test_voice_state;
///
/// // Member sitting in a voice channel
/// let state = create_test_voice_state(123456789, Some(111222333));
/// assert!(state.channel_id.is_some());
///
/// // Member disconnected from voice
/// let state = create_test_voice_state(123456789, None);
/// assert!(state.channel_id.is_none());
/// ```
pub fn create_test_voice_state(user_id: u64, channel_id: Option<u64>) -> VoiceState {
    serde_json::from_value(serde_json::json!({
        "guild_id": null,
        "channel_id": channel_id.map(|id| id.to_string()),
        "user_id": user_id.to_string(),
        "member": null,
        "session_id": "test-session",
        "deaf": false,
        "mute": false,
        "self_deaf": false,
        "self_mute": false,
        "self_stream": null,
        "self_video": false,
        "suppress": false,
        "request_to_speak_timestamp": null,
    }))
    .expect("Failed to create test voice state - invalid JSON structure")
}
