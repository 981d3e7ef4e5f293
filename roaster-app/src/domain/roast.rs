use regex_lite::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

static SCORE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\d{1,3})(?:\s*/\s*(\d{1,3}))?").expect("score pattern is valid")
});

const DEFAULT_DENOMINATOR: &str = "100";
const MISSING_SCORE: &str = "—";

/// Labeled sections pulled out of the model's freeform reply.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoastResult {
    pub score_raw: String,
    pub roast: String,
    pub tip: String,
    pub extras: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Score,
    Roast,
    Tip,
}

impl Section {
    fn detect(line: &str) -> Option<(Self, &str)> {
        [("score:", Self::Score), ("roast:", Self::Roast), ("tip:", Self::Tip)]
            .into_iter()
            .find_map(|(label, section)| {
                let head = line.get(..label.len())?;
                head.eq_ignore_ascii_case(label)
                    .then(|| (section, line[label.len()..].trim()))
            })
    }
}

/// Splits a reply into Score/Roast/Tip sections. Never fails: text it cannot
/// place lands in `extras`, and missing sections stay empty.
///
/// `Score:` is a one-line field, so prose after it goes to `extras` until the
/// next label. A repeated label appends to the section it names.
pub fn parse_roast_reply(text: &str) -> RoastResult {
    let mut result = RoastResult::default();
    let mut active: Option<Section> = None;

    for line in text.lines().map(str::trim).filter(|l| !l.is_empty()) {
        if let Some((section, rest)) = Section::detect(line) {
            append_line(result.section_mut(section), rest);
            active = (section != Section::Score).then_some(section);
            continue;
        }

        match active {
            Some(section) => append_line(result.section_mut(section), line),
            None => result.extras.push(line.to_string()),
        }
    }

    result
}

fn append_line(target: &mut String, line: &str) {
    if line.is_empty() {
        return;
    }
    if !target.is_empty() {
        target.push('\n');
    }
    target.push_str(line);
}

impl RoastResult {
    fn section_mut(&mut self, section: Section) -> &mut String {
        match section {
            Section::Score => &mut self.score_raw,
            Section::Roast => &mut self.roast,
            Section::Tip => &mut self.tip,
        }
    }

    pub fn score(&self) -> ScoreDisplay {
        ScoreDisplay::from_raw(&self.score_raw)
    }

    pub fn roast_paragraphs(&self) -> Vec<&str> {
        paragraphs(&self.roast)
    }

    pub fn tip_paragraphs(&self) -> Vec<&str> {
        paragraphs(&self.tip)
    }

    /// First sentence of the roast, used as the share snippet.
    pub fn first_sentence(&self) -> Option<&str> {
        let roast = self.roast.trim();
        if roast.is_empty() {
            return None;
        }

        let mut chars = roast.char_indices().peekable();
        while let Some((idx, c)) = chars.next() {
            let next_is_space = chars.peek().is_some_and(|(_, n)| n.is_whitespace());
            if c == '.' && next_is_space {
                return Some(&roast[..=idx]);
            }
        }
        Some(roast)
    }
}

fn paragraphs(text: &str) -> Vec<&str> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect()
}

/// How the score badge is shown: the parsed number when one is found,
/// otherwise the raw label text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreDisplay {
    pub value: Option<u32>,
    pub denominator: String,
    pub fallback_text: String,
}

impl ScoreDisplay {
    pub fn from_raw(raw: &str) -> Self {
        let fallback_text = if raw.is_empty() {
            MISSING_SCORE.to_string()
        } else {
            raw.to_string()
        };

        let Some(caps) = SCORE_PATTERN.captures(raw) else {
            return Self {
                value: None,
                denominator: DEFAULT_DENOMINATOR.to_string(),
                fallback_text,
            };
        };

        Self {
            value: caps.get(1).and_then(|m| m.as_str().parse().ok()),
            denominator: caps
                .get(2)
                .map_or(DEFAULT_DENOMINATOR, |m| m.as_str())
                .to_string(),
            fallback_text,
        }
    }

    /// Text for the big number on the badge.
    pub fn headline(&self) -> String {
        self.value
            .map(|v| v.to_string())
            .unwrap_or_else(|| self.fallback_text.clone())
    }
}
