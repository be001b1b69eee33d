mod member_xp;
