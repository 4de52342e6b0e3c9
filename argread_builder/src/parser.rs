mod dispatch;
mod token;

pub(crate) use token::{is_long_name, is_short_name};
