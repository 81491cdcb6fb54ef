use crate::config::{
    Config, Overrides, config_file_path, ensure_config_file, process_env, resolve_options,
};
use crate::error::AppError;
use crate::format::display_path;
use crate::model::ErrorPolicy;

pub struct ConfigOptions {
    pub show_path: bool,
    pub init: bool,
}

pub fn execute_config(options: ConfigOptions) -> Result<(), AppError> {
    if options.init {
        let path = ensure_config_file()?;
        println!("Configuration file ready: {}", display_path(&path));
    }

    if options.show_path {
        let path = config_file_path()?;
        println!("Configuration file: {}", display_path(&path));
    }

    if !options.show_path && !options.init {
        let path = config_file_path()?;
        let config = Config::load_from(&path)?;
        let effective = resolve_options(Overrides::default(), process_env, &config)?;

        println!("Configuration file: {}", display_path(&path));
        println!("files  = {}", effective.include_files);
        println!("top    = {}", effective.top_n);
        println!("strict = {}", effective.on_error == ErrorPolicy::Abort);
    }

    Ok(())
}
