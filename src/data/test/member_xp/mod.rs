use crate::data::member_xp::MemberXpRepository;
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod add_xp;
mod clear_all;
mod close_voice_session;
mod get_xp;
mod open_voice_session;
mod set_xp;
