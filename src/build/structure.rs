//! Parsing the question-bank structure out of the README document.
//!
//! The README classifies question files with three kinds of lines:
//!
//! ```markdown
//! # *UNIT 1*
//! ### Unit 1 - 4 marks
//! Q. What is a perceptron [Click Here](Q1.md)
//! ```
//!
//! Scanning is a single pass carrying two pieces of state, the current unit
//! and the current marks tier. A unit header never resets the marks tier;
//! a marks header before any unit header is ignored; a question line before
//! both are set is dropped. Everything else is ignored.

/// A question line: its text and the source file it links to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionRef {
    pub text: String,
    pub file: String,
}

/// Questions grouped under one marks tier, e.g. "4-marks".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarksTier {
    pub label: String,
    pub questions: Vec<QuestionRef>,
}

/// Marks tiers grouped under one unit, e.g. "Unit 1".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitSection {
    pub label: String,
    pub tiers: Vec<MarksTier>,
}

/// The parsed classification, in insertion order at every level.
#[derive(Debug, Default)]
pub struct Structure {
    pub units: Vec<UnitSection>,
}

impl Structure {
    /// Index of the unit with the given label, creating it if absent.
    fn unit_entry(&mut self, label: &str) -> usize {
        if let Some(index) = self.units.iter().position(|u| u.label == label) {
            return index;
        }
        self.units.push(UnitSection {
            label: label.to_string(),
            tiers: Vec::new(),
        });
        self.units.len() - 1
    }
}

impl UnitSection {
    /// The tier with the given label, creating it if absent.
    fn tier_entry(&mut self, label: &str) -> &mut MarksTier {
        if let Some(index) = self.tiers.iter().position(|t| t.label == label) {
            return &mut self.tiers[index];
        }
        self.tiers.push(MarksTier {
            label: label.to_string(),
            questions: Vec::new(),
        });
        self.tiers.last_mut().unwrap()
    }
}

/// What a single README line classifies as.
#[derive(Debug, PartialEq, Eq)]
enum LineKind {
    /// `#`, optional `*`s, "UNIT", a number (case-insensitive)
    UnitHeader(u32),
    /// `###`, "Unit", a number, `-`, a number, "marks" (case-insensitive)
    MarksHeader(u32),
    /// `Q`, optional `.`, whitespace, text, then a `[Click Here](file)` link
    Question(QuestionRef),
    Other,
}

/// Scan the structure document and build the unit/marks classification.
pub fn parse_structure(text: &str) -> Structure {
    let mut structure = Structure::default();
    let mut current_unit: Option<usize> = None;
    let mut current_tier: Option<String> = None;

    for line in text.lines() {
        match classify_line(line) {
            LineKind::UnitHeader(n) => {
                let label = format!("Unit {n}");
                current_unit = Some(structure.unit_entry(&label));
                // The marks tier deliberately carries over across units
            }
            LineKind::MarksHeader(n) => {
                if current_unit.is_some() {
                    current_tier = Some(format!("{n}-marks"));
                }
            }
            LineKind::Question(question) => {
                if let (Some(unit), Some(tier)) = (current_unit, current_tier.as_deref()) {
                    structure.units[unit].tier_entry(tier).questions.push(question);
                }
            }
            LineKind::Other => {}
        }
    }

    structure
}

fn classify_line(line: &str) -> LineKind {
    let line = line.trim();

    if let Some(rest) = line.strip_prefix("###") {
        if let Some(n) = parse_marks_header(rest) {
            return LineKind::MarksHeader(n);
        }
    } else if let Some(rest) = line.strip_prefix('#') {
        if !rest.starts_with('#') {
            if let Some(n) = parse_unit_header(rest) {
                return LineKind::UnitHeader(n);
            }
        }
    }

    if let Some(question) = parse_question(line) {
        return LineKind::Question(question);
    }

    LineKind::Other
}

/// Match the remainder of a unit header after its `#`: optional `*`s, the
/// word "unit", then a number. Trailing text is not constrained.
fn parse_unit_header(rest: &str) -> Option<u32> {
    let s = rest.trim_start().trim_start_matches('*').trim_start();
    let s = strip_keyword(s, "unit")?;
    let (n, _) = take_number(s.trim_start())?;
    Some(n)
}

/// Match the remainder of a marks header after its `###`: "unit", a number,
/// `-`, a number, "marks". The captured number is the marks count.
fn parse_marks_header(rest: &str) -> Option<u32> {
    let s = strip_keyword(rest.trim_start(), "unit")?;
    let (_, s) = take_number(s.trim_start())?;
    let s = s.trim_start().strip_prefix('-')?;
    let (marks, s) = take_number(s.trim_start())?;
    strip_keyword(s.trim_start(), "marks")?;
    Some(marks)
}

/// Match a question line: `Q`, optional `.`, at least one whitespace
/// character, the question text, then a literal `[Click Here](file)` link.
fn parse_question(line: &str) -> Option<QuestionRef> {
    const LINK_OPEN: &str = "[Click Here](";

    let rest = line.strip_prefix(['Q', 'q'])?;
    let rest = rest.strip_prefix('.').unwrap_or(rest);
    let after_gap = rest.trim_start();
    if after_gap.len() == rest.len() {
        return None;
    }

    let (text, link) = after_gap.split_once(LINK_OPEN)?;
    let (file, _) = link.split_once(')')?;

    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    Some(QuestionRef {
        text: text.to_string(),
        file: file.trim().to_string(),
    })
}

/// Strip a keyword prefix case-insensitively.
fn strip_keyword<'a>(s: &'a str, keyword: &str) -> Option<&'a str> {
    let prefix = s.get(..keyword.len())?;
    if prefix.eq_ignore_ascii_case(keyword) {
        Some(&s[keyword.len()..])
    } else {
        None
    }
}

/// Take a run of ASCII digits from the front of the string.
fn take_number(s: &str) -> Option<(u32, &str)> {
    let end = s
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(s.len());
    if end == 0 {
        return None;
    }
    let n = s[..end].parse().ok()?;
    Some((n, &s[end..]))
}
