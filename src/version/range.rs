// src/version/range.rs

//! Range expression tokenizer and single-pass token rewriter
//!
//! A source range such as `~1.2 || >= 2.0 < 3.0` is split into alternating
//! version pieces and delimiters. Each token is then rewritten left to right
//! by [`rewrite_token`], which threads a single [`PrefixMode`] slot from one
//! token to the next. The only rewrite that reaches backwards is the hyphen
//! range, which prefixes the already emitted lower bound with `>=`.

use regex::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;

static DELIMITER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r" - |<|>|=|\|\||[ ]|,|~|\^").unwrap());

/// Operators whose trailing space is dropped before tokenizing
const SPACED_OPERATORS: [&str; 6] = ["<", ">", "=", "~", "^", "||"];

/// A delimiter kept in the token sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delimiter {
    /// `" - "`, inclusive hyphen range
    Hyphen,
    Less,
    Greater,
    Equal,
    /// `||`, disjunction
    Or,
    /// A bare space, implied conjunction
    Space,
    /// `,`, explicit conjunction
    Comma,
    Tilde,
    Caret,
}

impl Delimiter {
    fn from_match(s: &str) -> Option<Self> {
        match s {
            " - " => Some(Self::Hyphen),
            "<" => Some(Self::Less),
            ">" => Some(Self::Greater),
            "=" => Some(Self::Equal),
            "||" => Some(Self::Or),
            " " => Some(Self::Space),
            "," => Some(Self::Comma),
            "~" => Some(Self::Tilde),
            "^" => Some(Self::Caret),
            _ => None,
        }
    }

    /// Source text of the delimiter
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hyphen => " - ",
            Self::Less => "<",
            Self::Greater => ">",
            Self::Equal => "=",
            Self::Or => "||",
            Self::Space => " ",
            Self::Comma => ",",
            Self::Tilde => "~",
            Self::Caret => "^",
        }
    }
}

/// One element of a tokenized range expression
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeToken<'a> {
    /// Text between two delimiters; may be empty
    Version(&'a str),
    Delimiter(Delimiter),
}

/// Pending state carried from one token to the next
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PrefixMode {
    #[default]
    None,
    /// The next version token becomes a closed-open range
    FloorExpand,
}

/// What a single token turns into
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rewrite<'a> {
    /// Emit this text in place of the token
    Emit(Cow<'a, str>),
    /// Version token to run through version conversion
    Version(&'a str),
    /// Version token to expand into `>=token,<bumped`
    ///
    /// `ceiling` is `None` when the minor segment cannot be bumped.
    FloorExpand {
        floor: &'a str,
        ceiling: Option<String>,
    },
    /// Close a hyphen range: prefix the previous element with `>=` and emit `,<=`
    HyphenBound,
}

/// Drop the space after each operator so operands sit next to them
pub fn normalize_operator_spacing(range: &str) -> String {
    let mut range = range.to_string();
    for op in SPACED_OPERATORS {
        range = range.replace(&format!("{} ", op), op);
    }
    range.replace(" ||", "||")
}

/// Split a range into version pieces and delimiters, keeping both
///
/// The sequence always starts and ends with a version piece, and pieces and
/// delimiters alternate.
pub fn tokenize_range(range: &str) -> Vec<RangeToken<'_>> {
    let mut tokens = Vec::new();
    let mut last = 0;

    for m in DELIMITER_RE.find_iter(range) {
        tokens.push(RangeToken::Version(&range[last..m.start()]));
        if let Some(delimiter) = Delimiter::from_match(m.as_str()) {
            tokens.push(RangeToken::Delimiter(delimiter));
        }
        last = m.end();
    }
    tokens.push(RangeToken::Version(&range[last..]));

    tokens
}

/// Rewrite one token given the pending prefix mode
///
/// Returns the rewrite together with the mode to hand to the next token.
pub fn rewrite_token<'a>(token: RangeToken<'a>, mode: PrefixMode) -> (Rewrite<'a>, PrefixMode) {
    match token {
        RangeToken::Version("") => (Rewrite::Emit(Cow::Borrowed("")), mode),
        RangeToken::Version(version) => match mode {
            PrefixMode::FloorExpand => (
                Rewrite::FloorExpand {
                    floor: version,
                    ceiling: bump_minor(version),
                },
                PrefixMode::None,
            ),
            PrefixMode::None => (Rewrite::Version(version), PrefixMode::None),
        },
        RangeToken::Delimiter(delimiter) => match delimiter {
            Delimiter::Less | Delimiter::Greater | Delimiter::Equal | Delimiter::Comma => {
                (Rewrite::Emit(Cow::Borrowed(delimiter.as_str())), mode)
            }
            Delimiter::Hyphen => (Rewrite::HyphenBound, mode),
            Delimiter::Tilde => (Rewrite::Emit(Cow::Borrowed("")), PrefixMode::FloorExpand),
            // Composer's `~` bounds by precision, which matches caret for the
            // common non-zero major case. Zero-major carets are not re-derived.
            Delimiter::Caret => (Rewrite::Emit(Cow::Borrowed("~")), mode),
            Delimiter::Space => (Rewrite::Emit(Cow::Borrowed(",")), mode),
            Delimiter::Or => (Rewrite::Emit(Cow::Borrowed("|")), mode),
        },
    }
}

/// Compute the exclusive upper bound of a floor-expanded version
///
/// `1.2.3` becomes `1.3`, `1.2` becomes `1.3` and `1` becomes `1.1`. Only the
/// leading digits of the second segment count, so `1.x` becomes `1.1`.
///
/// Returns `None` when the minor does not fit in a `u64` or has no successor.
pub fn bump_minor(version: &str) -> Option<String> {
    let mut segments = version.split('.');
    let major = segments.next().filter(|s| !s.is_empty()).unwrap_or("0");

    let Some(minor) = segments.next() else {
        return Some(format!("{}.1", major));
    };

    let digits_len = minor.bytes().take_while(u8::is_ascii_digit).count();
    let minor = match &minor[..digits_len] {
        "" => 0,
        digits => digits.parse::<u64>().ok()?,
    };
    Some(format!("{}.{}", major, minor.checked_add(1)?))
}
