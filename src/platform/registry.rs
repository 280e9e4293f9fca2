//! Well-known platform ids and their display names
//!
//! Used to suggest a display name when the operator adds a platform by id
//! only, and to show a reference list while adding.

/// Known platform ids in display order, with their default names.
pub const KNOWN_PLATFORMS: &[(&str, &str)] = &[
    ("weibo", "微博"),
    ("zhihu", "知乎"),
    ("baidu", "百度热搜"),
    ("toutiao", "今日头条"),
    ("tencent", "腾讯新闻"),
    ("douyin", "抖音"),
    ("bilibili-hot-search", "B站热搜"),
    ("tieba", "百度贴吧"),
    ("ithome", "IT之家"),
    ("thepaper", "澎湃新闻"),
    ("ifeng", "凤凰网"),
    ("wallstreetcn-hot", "华尔街见闻"),
    ("36kr", "36氪"),
    ("sspai", "少数派"),
    ("juejin", "掘金"),
    ("csdn", "CSDN"),
];

/// Display name for a known id
pub fn known_name(id: &str) -> Option<&'static str> {
    KNOWN_PLATFORMS
        .iter()
        .find(|(known, _)| *known == id)
        .map(|(_, name)| *name)
}

/// Name to use when the operator gave none: the known name, else the id.
pub fn default_name(id: &str) -> String {
    known_name(id).map_or_else(|| id.to_string(), str::to_string)
}
