use std::{fs, path::Path};

use anyhow::{Result, bail};

use super::{CommandResult, CommandSummary};
use crate::{
    config::{CONFIG_FILE_NAME, default_config_json},
    notices::Notice,
};

pub fn init() -> Result<CommandResult> {
    let config_path = Path::new(CONFIG_FILE_NAME);
    if config_path.exists() {
        bail!("{} already exists", CONFIG_FILE_NAME);
    }

    fs::write(config_path, default_config_json()?)?;

    Ok(CommandResult::new(
        CommandSummary::Init,
        vec![Notice::info(format!("Created {}", CONFIG_FILE_NAME))],
    ))
}
