pub(crate) mod params;
pub(crate) mod wave_surface;
