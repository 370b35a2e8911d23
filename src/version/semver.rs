// src/version/semver.rs

//! Semver to Composer version translation
//!
//! Source registries (npm, bower) write versions and ranges in the semver
//! grammar. Composer wants numbered pre-release identifiers and its own
//! operator set, so both single versions and compound ranges are rewritten
//! here before they reach dependency resolution.

use super::normalizer::{ComposerNormalizer, Stability, VersionNormalizer};
use super::range::{normalize_operator_spacing, rewrite_token, tokenize_range, PrefixMode, Rewrite};
use super::VersionConverter;
use crate::error::{Error, Result};
use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

/// Numeric core of 1-3 segments directly followed by a stability marker
static SUFFIXED_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^((?:[0-9]+|x|\*)(?:\.(?:[0-9]+|x|\*)){0,2})(?:[a-z]+|[-+][a-z]+|[-+][0-9]+)")
        .unwrap()
});

/// Ordinal left over after the stability word
static ORDINAL_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[0-9]+|\.[0-9]+$").unwrap());

/// Ordinal used when the source version has none
const DEFAULT_ORDINAL: &str = "1";

/// Converter from semver syntax to Composer syntax
#[derive(Debug, Clone, Default)]
pub struct SemverConverter<N = ComposerNormalizer> {
    normalizer: N,
}

impl SemverConverter<ComposerNormalizer> {
    /// Create a converter validating against the Composer grammar
    pub fn new() -> Self {
        Self::default()
    }
}

impl<N: VersionNormalizer> SemverConverter<N> {
    /// Create a converter backed by a custom normalizer
    pub fn with_normalizer(normalizer: N) -> Self {
        Self { normalizer }
    }

    /// Get the normalizer used for validation
    pub fn normalizer(&self) -> &N {
        &self.normalizer
    }

    /// Resolve the stability of a raw suffix word
    ///
    /// Short aliases are recognised before the normalizer is consulted;
    /// `stable` and unknown words collapse to `patch`.
    fn stability_of(&self, word: &str) -> Stability {
        match word {
            "" => Stability::Patch,
            "a" => Stability::Alpha,
            "b" | "pre" => Stability::Beta,
            _ => match self.normalizer.classify(word) {
                s @ (Stability::Alpha | Stability::Beta | Stability::Rc | Stability::Dev) => s,
                Stability::Stable | Stability::Patch => Stability::Patch,
            },
        }
    }

    /// Rebuild `core` + suffix `tail` as `core-<stability><ordinal>`
    fn compose(&self, core: &str, tail: &str) -> String {
        let tail = tail.strip_prefix(['-', '+']).unwrap_or(tail);
        let word_len = tail.bytes().take_while(u8::is_ascii_lowercase).count();
        let (word, rest) = tail.split_at(word_len);
        let stability = self.stability_of(word);

        let mut version = format!("{}-{}", core, stability);
        if stability != Stability::Dev {
            match ORDINAL_RE.find(rest) {
                Some(ordinal) => version.push_str(ordinal.as_str()),
                None => version.push_str(DEFAULT_ORDINAL),
            }
        }

        version
    }
}

impl<N: VersionNormalizer> VersionConverter for SemverConverter<N> {
    fn convert_version(&self, version: &str) -> Result<String> {
        let core = SUFFIXED_RE
            .captures(version)
            .and_then(|caps| caps.get(1));

        let converted = match core {
            Some(core) => {
                let converted = self.compose(core.as_str(), &version[core.end()..]);
                debug!("Converted version {} -> {}", version, converted);
                converted
            }
            None => version.to_string(),
        };

        self.normalizer.validate(&converted)?;
        Ok(converted)
    }

    fn convert_range(&self, range: &str) -> Result<String> {
        let normalized = normalize_operator_spacing(range);

        let (parts, _) = tokenize_range(&normalized).into_iter().try_fold(
            (Vec::<String>::new(), PrefixMode::None),
            |(mut parts, mode), token| {
                let (rewrite, next) = rewrite_token(token, mode);
                match rewrite {
                    Rewrite::Emit(text) => parts.push(text.into_owned()),
                    Rewrite::Version(version) => parts.push(self.convert_version(version)?),
                    Rewrite::FloorExpand { floor, ceiling } => {
                        let ceiling = ceiling.ok_or_else(|| {
                            Error::invalid_version(floor, "minor version is too large to bump")
                        })?;
                        parts.push(format!(
                            ">={},<{}",
                            self.convert_version(floor)?,
                            self.convert_version(&ceiling)?
                        ));
                    }
                    Rewrite::HyphenBound => {
                        if let Some(lower) = parts.last_mut() {
                            lower.insert_str(0, ">=");
                        }
                        parts.push(",<=".to_string());
                    }
                }
                Ok::<_, Error>((parts, next))
            },
        )?;

        let converted = parts.concat();
        debug!("Converted range {:?} -> {:?}", range, converted);
        Ok(converted)
    }
}
