use crate::commands::{CmdMessage, CmdResult};
use crate::config::TodozConfig;
use crate::error::{Result, TodozError};
use std::path::Path;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

pub fn run(dir: &Path, action: ConfigAction) -> Result<CmdResult> {
    let mut config = TodozConfig::load(dir)?;
    let mut result = CmdResult::default();

    match action {
        ConfigAction::ShowAll => {}
        ConfigAction::ShowKey(key) => match config.get(&key) {
            Some(val) => result.add_message(CmdMessage::info(val)),
            None => result.add_message(CmdMessage::error(format!("Unknown config key: {}", key))),
        },
        ConfigAction::Set(key, value) => match config.set(&key, &value) {
            Ok(()) => {
                config.save(dir)?;
                let shown = config.get(&key).unwrap_or(value);
                result.add_message(CmdMessage::success(format!("{} set to {}", key, shown)));
            }
            Err(TodozError::Config(msg)) => result.add_message(CmdMessage::error(msg)),
            Err(e) => return Err(e),
        },
    }

    Ok(result.with_config(config))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use tempfile::TempDir;

    #[test]
    fn show_all_returns_config() {
        let dir = TempDir::new().unwrap();
        let result = run(dir.path(), ConfigAction::ShowAll).unwrap();
        assert_eq!(result.config, Some(TodozConfig::default()));
    }

    #[test]
    fn set_persists_and_reports() {
        let dir = TempDir::new().unwrap();
        let action = ConfigAction::Set("default-filter".into(), "completed".into());
        let result = run(dir.path(), action).unwrap();

        assert_eq!(result.messages[0].level, MessageLevel::Success);
        assert_eq!(result.messages[0].content, "default-filter set to completed");

        let shown = run(dir.path(), ConfigAction::ShowKey("default-filter".into())).unwrap();
        assert_eq!(shown.messages[0].content, "completed");
    }

    #[test]
    fn bad_value_is_an_error_message_and_nothing_saved() {
        let dir = TempDir::new().unwrap();
        let action = ConfigAction::Set("seed-samples".into(), "sometimes".into());
        let result = run(dir.path(), action).unwrap();

        assert!(result.has_errors());
        assert!(!dir.path().join("config.json").exists());
    }

    #[test]
    fn unknown_key_is_an_error_message() {
        let dir = TempDir::new().unwrap();
        let result = run(dir.path(), ConfigAction::ShowKey("theme".into())).unwrap();
        assert!(result.has_errors());
    }

    #[test]
    fn reserved_storage_key_is_refused() {
        let dir = TempDir::new().unwrap();
        let action = ConfigAction::Set("storage-key".into(), "config".into());
        let result = run(dir.path(), action).unwrap();

        assert!(result.has_errors());
        assert!(!dir.path().join("config.json").exists());
    }
}
