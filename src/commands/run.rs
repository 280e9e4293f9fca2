//! Run and edit command implementations

use crate::cli::{EditArgs, EditTarget};
use crate::error::Result;
use crate::external;
use crate::platform::ParseDiagnostic;
use crate::ui;
use crate::workspace::Workspace;

/// Run the scraper once in the foreground.
pub fn run(workspace: &Workspace) -> Result<()> {
    let settings = &workspace.settings;
    println!("Running: cd {} && {}", settings.workdir, settings.runner);
    let status = external::run_job(&settings.workdir, &settings.runner)?;
    if status.success() {
        println!("{}", ui::success("Job finished"));
    } else {
        println!("{}", ui::warning(&format!("Job exited with {status}")));
    }
    Ok(())
}

pub fn edit(workspace: &Workspace, args: &EditArgs) -> Result<()> {
    open(workspace, args.target).map(drop)
}

/// Open a file in the editor and wait for it to close.
///
/// After a config edit the platform section is re-read and its problems
/// are printed. Returns them so callers can act on them.
pub fn open(workspace: &Workspace, target: EditTarget) -> Result<Vec<ParseDiagnostic>> {
    let path = match target {
        EditTarget::Config => workspace.config_path(),
        EditTarget::Keywords => workspace.keywords_path(),
    };
    let status = external::open_in_editor(&workspace.settings.editor(), path)?;
    if !status.success() {
        println!("{}", ui::warning(&format!("Editor exited with {status}")));
    }
    if target != EditTarget::Config {
        return Ok(Vec::new());
    }
    // surface problems introduced by hand edits
    let diagnostics = workspace
        .load_platforms()
        .map(|(_, section)| section.diagnostics)
        .unwrap_or_default();
    for diagnostic in &diagnostics {
        println!("{}", ui::warning(&diagnostic.to_string()));
    }
    Ok(diagnostics)
}

#[cfg(all(test, unix))]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::settings::Settings;
    use tempfile::TempDir;

    fn workspace(temp: &TempDir, editor: &str) -> Workspace {
        let mut settings = Settings::default().with_overrides(
            Some(temp.path().join("config.yaml")),
            Some(temp.path().join("frequency_words.txt")),
            None,
        );
        settings.editor = Some(editor.to_string());
        Workspace::new(settings)
    }

    #[test]
    fn test_open_config_reports_platform_problems() {
        let temp = TempDir::new().unwrap();
        let ws = workspace(&temp, "true");
        std::fs::write(ws.config_path(), "platforms:\n  - id: a\n  - id: a\n").unwrap();
        let diagnostics = open(&ws, EditTarget::Config).unwrap();
        assert_eq!(
            diagnostics,
            vec![ParseDiagnostic::DuplicateId {
                id: "a".to_string(),
                line: 2
            }]
        );
    }

    #[test]
    fn test_open_keywords_passes_path_to_editor() {
        let temp = TempDir::new().unwrap();
        let ws = workspace(&temp, "test -s");
        std::fs::write(ws.keywords_path(), "AI\n").unwrap();
        assert!(open(&ws, EditTarget::Keywords).unwrap().is_empty());
    }

    #[test]
    fn test_open_config_without_section_is_quiet() {
        let temp = TempDir::new().unwrap();
        let ws = workspace(&temp, "true");
        std::fs::write(ws.config_path(), "app: 1\n").unwrap();
        assert!(open(&ws, EditTarget::Config).unwrap().is_empty());
    }

    #[test]
    fn test_open_with_missing_editor_fails() {
        let temp = TempDir::new().unwrap();
        let ws = workspace(&temp, "trendctl-no-such-editor");
        assert!(open(&ws, EditTarget::Keywords).is_err());
    }
}
