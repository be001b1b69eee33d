pub use super::member_xp::Entity as MemberXp;
