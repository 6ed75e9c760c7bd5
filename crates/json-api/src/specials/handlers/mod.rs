//! Special Handlers

pub(crate) mod index;
