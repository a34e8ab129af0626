use crate::cli::{args::ConfigAction, config::load_config, global::GlobalArgs};
use bua_prep::PrepConfig;

pub fn handle(action: ConfigAction, global: &GlobalArgs) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ConfigAction::Show => handle_show(global),
        ConfigAction::Path => handle_path(global),
    }
}

fn handle_show(global: &GlobalArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config(global)?;
    print!("{}", config.to_toml()?);
    Ok(())
}

fn handle_path(global: &GlobalArgs) -> Result<(), Box<dyn std::error::Error>> {
    println!("(built-in defaults)");
    let mut layers = PrepConfig::search_paths(&global.dir);
    if let Some(explicit) = &global.config {
        layers.push(explicit.clone());
    }
    for path in layers {
        let marker = if path.exists() { "found" } else { "missing" };
        println!("{} [{}]", path.display(), marker);
    }
    Ok(())
}
