use std::path::Path;

use anyhow::{bail, Context};
use jcmp_diff::CompareOptions;
use serde::{Deserialize, Serialize};

use crate::cli::CompareArgs;
use crate::render::RenderOptions;

/// Effective settings: a TOML file (all fields optional) overlaid by flags.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub compare: CompareOptions,
    pub render: RenderOptions,
}

impl Settings {
    /// Load settings from `path`, or defaults when no path is given.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading settings from {}", path.display()))?;
        let settings: Self = toml::from_str(&text)
            .with_context(|| format!("parsing settings in {}", path.display()))?;
        settings
            .validate()
            .with_context(|| format!("invalid settings in {}", path.display()))?;
        tracing::debug!(path = %path.display(), "loaded settings");
        Ok(settings)
    }

    /// Reject values that would make every comparison fail.
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.compare.max_depth == 0 {
            bail!("max_depth must be at least 1 (the root object counts as depth 1)");
        }
        Ok(())
    }

    pub fn apply_overrides(&mut self, args: &CompareArgs) {
        if let Some(policy) = args.policy {
            self.compare.equality = policy.into();
        }
        if let Some(depth) = args.max_depth {
            self.compare.max_depth = depth;
        }
        if args.changes_only {
            self.render.show_unchanged = false;
        }
        if args.no_color {
            self.render.color = false;
        }
    }

    pub fn to_toml(&self) -> anyhow::Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}
