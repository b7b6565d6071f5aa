//! Ad Spaces

mod errors;
mod handlers;

pub(crate) use handlers::*;
