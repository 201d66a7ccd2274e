pub(crate) mod root;
pub(crate) mod sink;
