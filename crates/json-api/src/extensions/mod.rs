//! Extension traits

mod depot;
mod format;
mod result;

pub(crate) use depot::DepotExt as _;
pub(crate) use format::{BasketFormat, FormatExt as _};
pub(crate) use result::ResultExt as _;
