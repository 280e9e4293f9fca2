//! Common test utilities for trendctl integration tests

use assert_cmd::Command;
use std::path::PathBuf;
use tempfile::TempDir;

pub const CONFIG_FILE: &str = "config.yaml";
pub const KEYWORDS_FILE: &str = "frequency_words.txt";
pub const CRONTAB_FILE: &str = "crontab";
pub const SETTINGS_FILE: &str = "settings.yaml";

/// Editor name that is never installed
pub const MISSING_EDITOR: &str = "trendctl-no-such-editor";

/// A realistic scraper config with enabled and disabled platforms
pub const SAMPLE_CONFIG: &str = r#"app:
  version_check_url: "https://example.com/version"  # update check

crawler:
  request_interval: 1000

platforms:
  - id: "toutiao"
    name: "今日头条"
  - id: "baidu"
    name: "百度热搜"
  # - id: "zhihu"
  #   name: "知乎"

notification:
  enable_notification: true  # master switch
  push_window:
    enabled: false
    time_range:
      start: "20:00"
      end: "22:00"
  webhooks:
    feishu_url: ""
    dingtalk_url: ""
    wework_url: ""
    telegram_bot_token: ""
    telegram_chat_id: ""
    email_from: ""
    email_password: ""
    email_to: ""
    email_smtp_server: ""
    ntfy_topic: ""
"#;

pub const SAMPLE_KEYWORDS: &str = "AI\n芯片\n\n手机+华为\n手机!苹果\n";

/// A temp directory holding the scraper's files plus a settings file
/// pointing trendctl at them
#[allow(dead_code)]
pub struct TestWorkspace {
    pub temp: TempDir,
    pub path: PathBuf,
}

#[allow(dead_code)]
impl TestWorkspace {
    /// Create an empty workspace with a settings file
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        let workspace = Self { temp, path };
        workspace.write_settings("true", MISSING_EDITOR);
        workspace
    }

    /// Workspace with the sample config, keywords and an hourly crontab
    pub fn with_samples() -> Self {
        let workspace = Self::new();
        workspace.write_file(CONFIG_FILE, SAMPLE_CONFIG);
        workspace.write_file(KEYWORDS_FILE, SAMPLE_KEYWORDS);
        workspace.write_file(
            CRONTAB_FILE,
            &format!("0 * * * * cd {} && true\n", workspace.path.display()),
        );
        workspace
    }

    /// Rewrite the settings file with a different job command and editor
    pub fn write_settings(&self, runner: &str, editor: &str) {
        let settings = format!(
            "config_path: {}\nkeywords_path: {}\ncrontab_path: {}\nworkdir: {}\nrunner: {runner}\neditor: {editor}\n",
            self.path.join(CONFIG_FILE).display(),
            self.path.join(KEYWORDS_FILE).display(),
            self.path.join(CRONTAB_FILE).display(),
            self.path.display(),
        );
        self.write_file(SETTINGS_FILE, &settings);
    }

    pub fn write_file(&self, path: &str, content: &str) {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }

    pub fn read_file(&self, path: &str) -> String {
        std::fs::read_to_string(self.path.join(path)).expect("Failed to read file")
    }

    pub fn file_exists(&self, path: &str) -> bool {
        self.path.join(path).exists()
    }

    /// trendctl bound to this workspace, isolated from the caller's env
    pub fn cmd(&self) -> Command {
        let mut cmd = trendctl_cmd();
        cmd.env_remove("TRENDCTL_CONFIG")
            .env_remove("TRENDCTL_KEYWORDS")
            .env_remove("TRENDCTL_CRONTAB")
            .env_remove("TRENDCTL_LOG")
            .env("TRENDCTL_SETTINGS", self.path.join(SETTINGS_FILE))
            .env("NO_COLOR", "1");
        cmd
    }
}

// Temporary fix for deprecated cargo_bin - will be updated when build-dir issues are resolved
#[allow(deprecated)]
pub fn trendctl_cmd() -> Command {
    Command::cargo_bin("trendctl").expect("trendctl binary")
}
