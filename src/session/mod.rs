pub(crate) mod reveal_session;
