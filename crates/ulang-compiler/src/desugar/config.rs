//! Version windows and compatibility thresholds that steer desugaring.

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Language versions a package may target.
pub mod verse_version {
    pub const MINIMUM: u32 = 0;
    pub const MAXIMUM: u32 = 1;
    pub const DEFAULT: u32 = 0;
    /// First version where a clause may not mix commas with semicolons or newlines.
    pub const DONT_MIX_COMMA_AND_SEMICOLON_IN_BLOCKS: u32 = 1;
}

/// Release a package was uploaded with, encoded as `major * 100 + minor`.
pub mod fn_version {
    /// 20.30: `<localizes>` functions take their parameters as written.
    pub const ENABLE_NAMED_PARAMETERS_FOR_LOCALIZE: u32 = 2030;
    /// 29.00: the separator rules apply regardless of language version.
    pub const ENFORCE_DONT_MIX_COMMA_AND_SEMICOLON: u32 = 2900;
    /// Packages that were never uploaded are treated as current.
    pub const LATEST: u32 = u32::MAX;
}

/// Settings of one desugaring run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DesugarConfig {
    pub minimum_verse_version: u32,
    pub maximum_verse_version: u32,
    /// Used when a package does not override its language version.
    pub default_verse_version: u32,
    pub dont_mix_comma_and_semicolon_version: u32,
    pub named_localize_parameters_fn_version: u32,
    pub enforce_dont_mix_fn_version: u32,
}

impl Default for DesugarConfig {
    fn default() -> Self {
        Self {
            minimum_verse_version: verse_version::MINIMUM,
            maximum_verse_version: verse_version::MAXIMUM,
            default_verse_version: verse_version::DEFAULT,
            dont_mix_comma_and_semicolon_version:
                verse_version::DONT_MIX_COMMA_AND_SEMICOLON_IN_BLOCKS,
            named_localize_parameters_fn_version: fn_version::ENABLE_NAMED_PARAMETERS_FOR_LOCALIZE,
            enforce_dont_mix_fn_version: fn_version::ENFORCE_DONT_MIX_COMMA_AND_SEMICOLON,
        }
    }
}

impl DesugarConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject windows that no package could satisfy.
    pub fn validate(&self) -> Result<()> {
        if self.minimum_verse_version > self.maximum_verse_version {
            return Err(Error::InvalidConfig(format!(
                "minimum language version {} is above maximum {}",
                self.minimum_verse_version, self.maximum_verse_version
            )));
        }
        if !self.is_supported_version(self.default_verse_version) {
            return Err(Error::InvalidConfig(format!(
                "default language version {} is outside {}..={}",
                self.default_verse_version, self.minimum_verse_version, self.maximum_verse_version
            )));
        }
        Ok(())
    }

    /// Version a package compiles with, given its optional override.
    pub fn effective_version(&self, requested: Option<u32>) -> u32 {
        requested.unwrap_or(self.default_verse_version)
    }

    pub fn is_supported_version(&self, version: u32) -> bool {
        (self.minimum_verse_version..=self.maximum_verse_version).contains(&version)
    }

    /// Whether `<localizes>` functions of a package uploaded at `uploaded_at` use named parameters.
    pub fn uses_named_localize_parameters(&self, uploaded_at: u32) -> bool {
        uploaded_at >= self.named_localize_parameters_fn_version
    }

    /// Whether a comma list inside a semicolon clause stays a plain tuple.
    pub fn forbids_mixed_separators(&self, effective_version: u32, uploaded_at: u32) -> bool {
        effective_version >= self.dont_mix_comma_and_semicolon_version
            || uploaded_at >= self.enforce_dont_mix_fn_version
    }
}
