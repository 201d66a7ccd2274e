pub(crate) mod resolved;
pub(crate) mod validate;
