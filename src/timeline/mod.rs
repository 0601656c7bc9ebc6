pub(crate) mod assemble;
pub(crate) mod begin;
pub(crate) mod erase;
pub(crate) mod keys;
pub(crate) mod line;
pub(crate) mod topology;
