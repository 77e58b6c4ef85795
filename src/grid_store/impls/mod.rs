mod place_start_assets;

pub use place_start_assets::*;
