//! Core data types for GPU Bench.

use crate::error::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// GPU vendor a record is grouped under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Brand {
    Nvidia,
    Amd,
    Intel,
}

impl Brand {
    pub const ALL: [Brand; 3] = [Brand::Nvidia, Brand::Amd, Brand::Intel];

    /// Lowercase identifier used by catalogs and filters
    pub fn id(&self) -> &'static str {
        match self {
            Brand::Nvidia => "nvidia",
            Brand::Amd => "amd",
            Brand::Intel => "intel",
        }
    }
}

impl fmt::Display for Brand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Brand::Nvidia => write!(f, "NVIDIA"),
            Brand::Amd => write!(f, "AMD"),
            Brand::Intel => write!(f, "Intel"),
        }
    }
}

impl FromStr for Brand {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "nvidia" => Ok(Brand::Nvidia),
            "amd" => Ok(Brand::Amd),
            "intel" => Ok(Brand::Intel),
            _ => Err(ValidationError::UnknownBrand(s.to_string())),
        }
    }
}

/// Explicit form factor override carried by a catalog entry (`type` field).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormFactor {
    Desktop,
    Mobile,
}

impl FromStr for FormFactor {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "desktop" => Ok(FormFactor::Desktop),
            "mobile" => Ok(FormFactor::Mobile),
            _ => Err(ValidationError::UnknownFormFactor(s.to_string())),
        }
    }
}

/// Static metadata describing one score type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreTypeDescriptor {
    pub id: &'static str,
    pub label: &'static str,
    pub description: &'static str,
}

/// One of the four synthetic benchmark categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScoreType {
    #[serde(rename = "timeSpy")]
    TimeSpy,
    #[serde(rename = "timeSpyEx")]
    TimeSpyExtreme,
    #[serde(rename = "portRoyal")]
    PortRoyal,
    #[serde(rename = "steelNomad")]
    SteelNomad,
}

const SCORE_TYPES: [ScoreTypeDescriptor; 4] = [
    ScoreTypeDescriptor {
        id: "timeSpy",
        label: "Time Spy",
        description: "2K rasterization",
    },
    ScoreTypeDescriptor {
        id: "timeSpyEx",
        label: "Time Spy Extreme",
        description: "4K rasterization",
    },
    ScoreTypeDescriptor {
        id: "portRoyal",
        label: "Port Royal",
        description: "Ray tracing",
    },
    ScoreTypeDescriptor {
        id: "steelNomad",
        label: "Steel Nomad",
        description: "4K heavy rasterization",
    },
];

impl ScoreType {
    /// All score types in display order
    pub const ALL: [ScoreType; 4] = [
        ScoreType::TimeSpy,
        ScoreType::TimeSpyExtreme,
        ScoreType::PortRoyal,
        ScoreType::SteelNomad,
    ];

    pub fn descriptor(&self) -> &'static ScoreTypeDescriptor {
        match self {
            ScoreType::TimeSpy => &SCORE_TYPES[0],
            ScoreType::TimeSpyExtreme => &SCORE_TYPES[1],
            ScoreType::PortRoyal => &SCORE_TYPES[2],
            ScoreType::SteelNomad => &SCORE_TYPES[3],
        }
    }

    pub fn id(&self) -> &'static str {
        self.descriptor().id
    }

    pub fn label(&self) -> &'static str {
        self.descriptor().label
    }

    pub fn description(&self) -> &'static str {
        self.descriptor().description
    }
}

impl Default for ScoreType {
    fn default() -> Self {
        ScoreType::TimeSpy
    }
}

impl fmt::Display for ScoreType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for ScoreType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ScoreType::ALL
            .into_iter()
            .find(|t| t.id() == s)
            .ok_or_else(|| ValidationError::UnknownScoreType(s.to_string()))
    }
}

/// Four benchmark scores of one GPU. `0` means "not benchmarked".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scores {
    #[serde(rename = "timeSpy", default)]
    pub time_spy: u32,
    #[serde(rename = "timeSpyEx", default)]
    pub time_spy_extreme: u32,
    #[serde(rename = "portRoyal", default)]
    pub port_royal: u32,
    #[serde(rename = "steelNomad", default)]
    pub steel_nomad: u32,
}

impl Scores {
    pub const fn new(time_spy: u32, time_spy_extreme: u32, port_royal: u32, steel_nomad: u32) -> Self {
        Scores {
            time_spy,
            time_spy_extreme,
            port_royal,
            steel_nomad,
        }
    }

    pub fn get(&self, score_type: ScoreType) -> u32 {
        match score_type {
            ScoreType::TimeSpy => self.time_spy,
            ScoreType::TimeSpyExtreme => self.time_spy_extreme,
            ScoreType::PortRoyal => self.port_royal,
            ScoreType::SteelNomad => self.steel_nomad,
        }
    }
}

/// One GPU model with its benchmark results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GpuRecord {
    pub name: String,
    pub brand: Brand,
    pub mobile: bool,
    #[serde(flatten)]
    pub scores: Scores,
}

impl GpuRecord {
    pub fn new(name: impl Into<String>, brand: Brand, mobile: bool, scores: Scores) -> Self {
        GpuRecord {
            name: name.into(),
            brand,
            mobile,
            scores,
        }
    }

    /// Score for the given type (`0` when not benchmarked)
    pub fn score(&self, score_type: ScoreType) -> u32 {
        self.scores.get(score_type)
    }

    /// Records are identified by name.
    pub fn same_as(&self, other: &GpuRecord) -> bool {
        self.name == other.name
    }
}

/// Brand / form factor filter applied to the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Filter {
    All,
    Nvidia,
    Amd,
    Intel,
    Desktop,
    Mobile,
}

impl Filter {
    pub const ALL: [Filter; 6] = [
        Filter::All,
        Filter::Nvidia,
        Filter::Amd,
        Filter::Intel,
        Filter::Desktop,
        Filter::Mobile,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            Filter::All => "all",
            Filter::Nvidia => "nvidia",
            Filter::Amd => "amd",
            Filter::Intel => "intel",
            Filter::Desktop => "desktop",
            Filter::Mobile => "mobile",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Filter::All => "All",
            Filter::Nvidia => "NVIDIA",
            Filter::Amd => "AMD",
            Filter::Intel => "Intel",
            Filter::Desktop => "Desktop",
            Filter::Mobile => "Mobile",
        }
    }

    /// Whether a record passes this filter
    pub fn matches(&self, record: &GpuRecord) -> bool {
        match self {
            Filter::All => true,
            Filter::Nvidia => record.brand == Brand::Nvidia,
            Filter::Amd => record.brand == Brand::Amd,
            Filter::Intel => record.brand == Brand::Intel,
            Filter::Desktop => !record.mobile,
            Filter::Mobile => record.mobile,
        }
    }
}

impl Default for Filter {
    fn default() -> Self {
        Filter::All
    }
}

impl FromStr for Filter {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Filter::ALL
            .into_iter()
            .find(|f| f.id() == s)
            .ok_or_else(|| ValidationError::UnknownFilter(s.to_string()))
    }
}

/// Sort direction for the ranked list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Desc,
    Asc,
}

impl Default for SortOrder {
    fn default() -> Self {
        SortOrder::Desc
    }
}

impl FromStr for SortOrder {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "desc" => Ok(SortOrder::Desc),
            "asc" => Ok(SortOrder::Asc),
            _ => Err(ValidationError::UnknownSortOrder(s.to_string())),
        }
    }
}

/// Interaction mode: side-by-side comparison or baseline-relative view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Comparison,
    Benchmark,
}

impl Mode {
    pub fn is_benchmark(&self) -> bool {
        matches!(self, Mode::Benchmark)
    }

    pub fn toggled(&self) -> Mode {
        match self {
            Mode::Comparison => Mode::Benchmark,
            Mode::Benchmark => Mode::Comparison,
        }
    }
}
