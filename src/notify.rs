//! Notification channels, email details and the push window
//!
//! Everything here is a thin catalog over [`crate::scalar`]: which keys
//! exist, how to label them, and how to show their values.

use serde::Serialize;

use crate::buffer::LineBuffer;
use crate::error::Result;
use crate::scalar::{self, KeyPath, ScalarValue};

/// Master switch for all notifications
pub const ENABLE_KEY: &str = "enable_notification";

pub const WINDOW_ENABLED_KEY: &str = "push_window.enabled";
pub const WINDOW_START_KEY: &str = "push_window.time_range.start";
pub const WINDOW_END_KEY: &str = "push_window.time_range.end";

/// Input word that empties a text value
pub const CLEAR_WORD: &str = "clear";

/// A push channel and the keys that configure it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Channel {
    pub name: &'static str,
    pub label: &'static str,
    /// Key whose presence decides whether the channel is configured
    pub key: &'static str,
    /// Further keys the channel needs
    pub extra_keys: &'static [&'static str],
}

pub const CHANNELS: &[Channel] = &[
    Channel {
        name: "feishu",
        label: "Feishu",
        key: "feishu_url",
        extra_keys: &[],
    },
    Channel {
        name: "dingtalk",
        label: "DingTalk",
        key: "dingtalk_url",
        extra_keys: &[],
    },
    Channel {
        name: "wework",
        label: "WeCom",
        key: "wework_url",
        extra_keys: &[],
    },
    Channel {
        name: "telegram",
        label: "Telegram",
        key: "telegram_bot_token",
        extra_keys: &["telegram_chat_id"],
    },
    Channel {
        name: "email",
        label: "Email",
        key: "email_to",
        extra_keys: &["email_from", "email_password", "email_smtp_server"],
    },
    Channel {
        name: "ntfy",
        label: "ntfy",
        key: "ntfy_topic",
        extra_keys: &[],
    },
];

pub fn channel(name: &str) -> Option<&'static Channel> {
    CHANNELS.iter().find(|c| c.name == name)
}

/// Email detail keys with their labels
pub const EMAIL_FIELDS: &[(&str, &str)] = &[
    ("email_to", "Recipient"),
    ("email_from", "Sender"),
    ("email_password", "Password"),
    ("email_smtp_server", "SMTP server"),
];

const SECRET_KEYS: &[&str] = &["email_password", "telegram_bot_token"];
const MASK: &str = "********";

/// Whether a key's value must never be printed
pub fn is_secret(key: &str) -> bool {
    SECRET_KEYS.contains(&key)
}

/// Display form of a value: secrets masked, empty shown as a dash
pub fn display_value(key: &str, value: &str) -> String {
    if value.is_empty() {
        if key == "email_smtp_server" {
            return "(auto-detect)".to_string();
        }
        return "-".to_string();
    }
    if is_secret(key) {
        MASK.to_string()
    } else {
        value.to_string()
    }
}

/// Configured state of one channel
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChannelStatus {
    pub name: &'static str,
    pub label: &'static str,
    /// The channel's key exists in the file
    pub present: bool,
    pub configured: bool,
}

/// Overall notification state
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NotifyStatus {
    pub enabled: bool,
    pub channels: Vec<ChannelStatus>,
}

/// Push window settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PushWindow {
    pub enabled: bool,
    pub start: Option<String>,
    pub end: Option<String>,
}

pub(crate) fn key(path: &str) -> Result<KeyPath> {
    path.parse()
}

pub fn status(buffer: &LineBuffer) -> Result<NotifyStatus> {
    let enabled = scalar::get_bool(&key(ENABLE_KEY)?, buffer).unwrap_or(false);
    let mut channels = Vec::with_capacity(CHANNELS.len());
    for channel in CHANNELS {
        let value = scalar::get(&key(channel.key)?, buffer);
        channels.push(ChannelStatus {
            name: channel.name,
            label: channel.label,
            present: value.is_some(),
            configured: value.is_some_and(|v| !v.is_empty()),
        });
    }
    Ok(NotifyStatus { enabled, channels })
}

/// Flip the master switch, returning the new state and buffer.
pub fn toggle_enabled(buffer: &LineBuffer) -> Result<(bool, LineBuffer)> {
    toggle(ENABLE_KEY, buffer)
}

pub fn window(buffer: &LineBuffer) -> Result<PushWindow> {
    Ok(PushWindow {
        enabled: scalar::get_bool(&key(WINDOW_ENABLED_KEY)?, buffer).unwrap_or(false),
        start: scalar::get(&key(WINDOW_START_KEY)?, buffer),
        end: scalar::get(&key(WINDOW_END_KEY)?, buffer),
    })
}

pub fn toggle_window(buffer: &LineBuffer) -> Result<(bool, LineBuffer)> {
    toggle(WINDOW_ENABLED_KEY, buffer)
}

/// Set a text key; the [`CLEAR_WORD`] input empties it.
pub fn set_text(path: &str, input: &str, buffer: &LineBuffer) -> Result<LineBuffer> {
    let input = input.trim();
    let value = if input.eq_ignore_ascii_case(CLEAR_WORD) {
        ""
    } else {
        input
    };
    scalar::set(&key(path)?, &ScalarValue::text(value), buffer)
}

fn toggle(path: &str, buffer: &LineBuffer) -> Result<(bool, LineBuffer)> {
    let path = key(path)?;
    let enabled = !scalar::get_bool(&path, buffer).unwrap_or(false);
    let updated = scalar::set(&path, &ScalarValue::Bool(enabled), buffer)?;
    Ok((enabled, updated))
}
