pub(crate) mod driver;
pub(crate) mod ease;
pub(crate) mod preset;
pub(crate) mod track;
