//! Config command implementation

use crate::cli::{ConfigArgs, ConfigSubcommand};
use crate::error::{self, Result};
use crate::notify;
use crate::scalar::{self, KeyPath, ScalarValue};
use crate::ui;
use crate::workspace::Workspace;

use super::helpers;

pub fn run(workspace: &Workspace, args: ConfigArgs) -> Result<()> {
    match args.command {
        ConfigSubcommand::Get { path } => {
            println!("{}", get(workspace, &path)?);
            Ok(())
        }
        ConfigSubcommand::Set { path, value, bool } => {
            let value = if bool {
                ScalarValue::Bool(helpers::parse_bool(&value)?)
            } else {
                ScalarValue::Text(value)
            };
            set(workspace, &path, &value)
        }
    }
}

/// Value at `path`; a missing key is an error here.
pub fn get(workspace: &Workspace, path: &str) -> Result<String> {
    let key: KeyPath = path.parse()?;
    let buffer = workspace.load_config()?;
    scalar::get(&key, &buffer).ok_or_else(|| error::section::key_not_found(key.to_string()))
}

pub fn set(workspace: &Workspace, path: &str, value: &ScalarValue) -> Result<()> {
    let key: KeyPath = path.parse()?;
    let buffer = workspace.load_config()?;
    let updated = scalar::set(&key, value, &buffer)?;
    workspace.save_config(&updated)?;
    let shown = notify::display_value(key.leaf(), &value.to_string());
    println!("{}", ui::success(&format!("{key} = {shown}")));
    Ok(())
}
