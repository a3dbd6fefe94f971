use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{success, warning};
use std::path::Path;
use std::process::Command;

pub struct ConfigLogic;

impl ConfigLogic {
    /// Print the effective configuration as YAML.
    pub fn print(cfg: &Config) -> AppResult<()> {
        let yaml = serde_yaml::to_string(cfg)?;
        println!("📄 Current configuration:\n");
        println!("{}", yaml);
        Ok(())
    }

    fn default_editor() -> String {
        std::env::var("EDITOR")
            .or_else(|_| std::env::var("VISUAL"))
            .unwrap_or_else(|_| {
                if cfg!(target_os = "windows") {
                    "notepad".to_string()
                } else {
                    "nano".to_string()
                }
            })
    }

    /// Open `path` in the requested editor, falling back to $EDITOR/$VISUAL.
    pub fn edit(path: &Path, editor: &Option<String>) -> AppResult<()> {
        let default_editor = Self::default_editor();
        let editor_to_use = editor.clone().unwrap_or_else(|| default_editor.clone());

        match Command::new(&editor_to_use).arg(path).status() {
            Ok(s) if s.success() => {
                success(format!(
                    "Configuration file edited successfully using '{}'",
                    editor_to_use
                ));
                return Ok(());
            }
            _ => warning(format!(
                "Editor '{}' not available, falling back to '{}'",
                editor_to_use, default_editor
            )),
        }

        match Command::new(&default_editor).arg(path).status() {
            Ok(s) if s.success() => {
                success(format!(
                    "Configuration file edited successfully using fallback '{}'",
                    default_editor
                ));
                Ok(())
            }
            Ok(_) => Err(AppError::Config(format!(
                "editor '{}' exited with an error",
                default_editor
            ))),
            Err(e) => Err(AppError::Config(e.to_string())),
        }
    }
}
