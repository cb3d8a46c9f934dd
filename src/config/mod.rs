mod model;
mod persistence;

pub(crate) use model::{AppConfig, GeoConfig};
pub(crate) use persistence::{
    config_path, load_config, load_config_from, preferences_path, save_config_to,
};
