pub(crate) mod input;
pub(crate) mod log;
pub(crate) mod parse;
pub(crate) mod report;
