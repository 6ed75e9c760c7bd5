//! Specials

mod handlers;

pub(crate) use handlers::*;
