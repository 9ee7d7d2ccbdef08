//! Caller-supplied conversion options.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Target framework for emitted source code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Framework {
    React,
    Vue,
    Angular,
}

impl Framework {
    pub fn as_str(self) -> &'static str {
        match self {
            Framework::React => "react",
            Framework::Vue => "vue",
            Framework::Angular => "angular",
        }
    }
}

impl fmt::Display for Framework {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Device class a build targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Device {
    Desktop,
    Tablet,
    Mobile,
}

/// WCAG conformance target for the accessibility enrichment pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AccessibilityLevel {
    #[serde(rename = "a")]
    A,
    #[serde(rename = "aa")]
    Aa,
    #[serde(rename = "aaa")]
    Aaa,
}

impl AccessibilityLevel {
    /// Minimum color contrast ratio enforced after enrichment.
    pub fn contrast_floor(self) -> f64 {
        match self {
            AccessibilityLevel::A | AccessibilityLevel::Aa => 4.5,
            AccessibilityLevel::Aaa => 7.0,
        }
    }
}

/// Optional performance budget. Its mere presence activates the
/// performance enrichment pass.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PerformanceBudget {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_bundle_size: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_load_time: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_lcp: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_fid: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_cls: Option<f64>,
}

/// Configuration for a single compilation request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversionOptions {
    pub framework: Framework,
    pub target_devices: Vec<Device>,
    pub accessibility_level: AccessibilityLevel,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub performance_budget: Option<PerformanceBudget>,
}

impl ConversionOptions {
    /// Options for the given framework: desktop-only, level AA, no budget.
    pub fn new(framework: Framework) -> Self {
        Self {
            framework,
            target_devices: vec![Device::Desktop],
            accessibility_level: AccessibilityLevel::Aa,
            performance_budget: None,
        }
    }

    /// Attach a performance budget.
    pub fn with_budget(mut self, budget: PerformanceBudget) -> Self {
        self.performance_budget = Some(budget);
        self
    }
}
