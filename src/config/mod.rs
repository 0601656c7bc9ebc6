pub(crate) mod geometry;
pub(crate) mod params;
pub(crate) mod request;
