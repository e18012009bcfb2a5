use crate::commands::{CmdMessage, CmdResult};
use crate::config::StorefrontConfig;
use crate::error::Result;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

/// Reads or updates the config stored in `dir`.
///
/// Unknown keys and invalid values are reported as error messages; the file is only written
/// when the new value was accepted.
pub fn run(dir: &Path, action: ConfigAction) -> Result<CmdResult> {
    let mut config = StorefrontConfig::load(dir)?;

    match action {
        ConfigAction::ShowAll => Ok(CmdResult::default().with_config(config)),
        ConfigAction::ShowKey(key) => {
            let mut result = CmdResult::default();
            match config.get(&key) {
                Some(value) => result.add_message(CmdMessage::info(value)),
                None => {
                    result.add_message(CmdMessage::error(format!("Unknown config key: {}", key)))
                }
            }
            Ok(result)
        }
        ConfigAction::Set(key, value) => {
            if let Err(e) = config.set(&key, &value) {
                let mut result = CmdResult::default();
                result.add_message(CmdMessage::error(e));
                return Ok(result);
            }
            config.save(dir)?;
            tracing::debug!(dir = %dir.display(), key = %key, "config saved");

            let shown = config.get(&key).unwrap_or(value);
            let mut result = CmdResult::default().with_config(config);
            result.add_message(CmdMessage::success(format!("{} set to {}", key, shown)));
            Ok(result)
        }
    }
}
