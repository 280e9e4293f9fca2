//! Keyword groups file
//!
//! The keyword file is a list of keyword expressions, one per line, with
//! blank lines separating groups. Expressions are opaque here: `AI`,
//! `手机+华为` (required word) and `手机!苹果` (excluded word) are all just
//! strings. An empty file means "monitor everything".

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

#[cfg(test)]
mod tests;

/// One blank-line-delimited group of keyword expressions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KeywordGroup(Vec<String>);

impl KeywordGroup {
    /// Build a group from raw words; words are trimmed and empties dropped.
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self(clean_words(words))
    }

    pub fn words(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.0.iter().any(|w| w == word)
    }

    /// First few words joined, for menus: `a, b, c...`
    pub fn preview(&self, max: usize) -> String {
        let shown: Vec<&str> = self.0.iter().take(max).map(String::as_str).collect();
        let mut preview = shown.join(", ");
        if self.0.len() > max {
            preview.push_str("...");
        }
        preview
    }
}

/// One numbered keyword in the flattened listing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberedKeyword<'a> {
    /// 1-based position across all groups
    pub position: usize,
    /// 0-based group index
    pub group: usize,
    /// 0-based index inside the group
    pub word: usize,
    pub text: &'a str,
}

/// The whole keyword file as ordered groups
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KeywordDocument {
    groups: Vec<KeywordGroup>,
}

impl KeywordDocument {
    pub fn new(groups: Vec<KeywordGroup>) -> Self {
        Self {
            groups: groups.into_iter().filter(|g| !g.is_empty()).collect(),
        }
    }

    /// Split text into groups at blank lines.
    ///
    /// Any run of blank lines is one separator, so no empty group is ever
    /// produced.
    pub fn decode(text: &str) -> Self {
        let mut groups = Vec::new();
        let mut current: Vec<String> = Vec::new();

        for line in text.lines() {
            let line = line.trim();
            if line.is_empty() {
                if !current.is_empty() {
                    groups.push(KeywordGroup(std::mem::take(&mut current)));
                }
            } else {
                current.push(line.to_string());
            }
        }
        if !current.is_empty() {
            groups.push(KeywordGroup(current));
        }

        Self { groups }
    }

    /// Join groups with one blank line between them.
    ///
    /// Non-empty output always ends with a single newline; a document with
    /// no groups encodes to the empty string.
    pub fn encode(&self) -> String {
        if self.groups.is_empty() {
            return String::new();
        }
        let mut out = self
            .groups
            .iter()
            .map(|g| g.0.join("\n"))
            .collect::<Vec<_>>()
            .join("\n\n");
        out.push('\n');
        out
    }

    pub fn groups(&self) -> &[KeywordGroup] {
        &self.groups
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Total number of keywords across groups
    pub fn keyword_count(&self) -> usize {
        self.groups.iter().map(KeywordGroup::len).sum()
    }

    /// Flattened listing with 1-based global positions.
    ///
    /// Positions are only meaningful until the next mutation.
    pub fn numbered(&self) -> impl Iterator<Item = NumberedKeyword<'_>> {
        self.groups
            .iter()
            .enumerate()
            .flat_map(|(g, group)| {
                group
                    .0
                    .iter()
                    .enumerate()
                    .map(move |(w, text)| (g, w, text.as_str()))
            })
            .enumerate()
            .map(|(i, (group, word, text))| NumberedKeyword {
                position: i + 1,
                group,
                word,
                text,
            })
    }

    /// Append words to an existing group, skipping ones already present.
    ///
    /// Returns how many words were added, or `None` for an unknown group.
    pub fn add_to_group<I, S>(&mut self, group: usize, words: I) -> Option<usize>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let target = self.groups.get_mut(group)?;
        let mut added = 0;
        for word in clean_words(words) {
            if !target.contains(&word) {
                target.0.push(word);
                added += 1;
            }
        }
        Some(added)
    }

    /// Append a new group. Returns false (and changes nothing) when no
    /// non-empty word was given.
    pub fn push_group<I, S>(&mut self, words: I) -> bool
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let group = KeywordGroup::new(words);
        if group.is_empty() {
            return false;
        }
        self.groups.push(group);
        true
    }

    /// Remove keywords by 1-based global position.
    ///
    /// All positions are resolved against the current numbering before
    /// anything is removed; unknown positions are ignored and groups left
    /// empty are dropped. Returns the number of keywords removed.
    pub fn remove_positions(&mut self, positions: &[usize]) -> usize {
        let targets: HashSet<(usize, usize)> = self
            .numbered()
            .filter(|k| positions.contains(&k.position))
            .map(|k| (k.group, k.word))
            .collect();
        if targets.is_empty() {
            return 0;
        }

        let groups = std::mem::take(&mut self.groups);
        self.groups = groups
            .into_iter()
            .enumerate()
            .filter_map(|(g, group)| {
                let kept: Vec<String> = group
                    .0
                    .into_iter()
                    .enumerate()
                    .filter(|(w, _)| !targets.contains(&(g, *w)))
                    .map(|(_, word)| word)
                    .collect();
                (!kept.is_empty()).then_some(KeywordGroup(kept))
            })
            .collect();
        targets.len()
    }

    /// Remove whole groups by 0-based index. Returns how many were removed.
    pub fn remove_groups(&mut self, indices: &[usize]) -> usize {
        let before = self.groups.len();
        let groups = std::mem::take(&mut self.groups);
        self.groups = groups
            .into_iter()
            .enumerate()
            .filter(|(g, _)| !indices.contains(g))
            .map(|(_, group)| group)
            .collect();
        before - self.groups.len()
    }

    /// Drop every group
    pub fn clear(&mut self) {
        self.groups.clear();
    }
}

fn clean_words<I, S>(words: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    words
        .into_iter()
        .flat_map(|w| {
            w.as_ref()
                .lines()
                .map(str::trim)
                .filter(|l| !l.is_empty())
                .map(str::to_string)
                .collect::<Vec<_>>()
        })
        .collect()
}
