pub mod member_xp;
pub mod prelude;
