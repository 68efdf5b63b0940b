//! Global run constants shared by every generated combination.
//!
//! Defaults reproduce the reference experiment; a JSON file may override any
//! subset of fields.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{GenError, Result};
use crate::namelist::DoubleLiteral;
use crate::params::CaseVariant;

/// Dynamical core time-integration type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AtmosDynType {
    /// Horizontally explicit, vertically implicit.
    #[serde(rename = "FVM-HEVI")]
    FvmHevi,
    /// Horizontally and vertically explicit.
    #[serde(rename = "FVM-HEVE")]
    FvmHeve,
}

impl AtmosDynType {
    pub fn as_str(self) -> &'static str {
        match self {
            AtmosDynType::FvmHevi => "FVM-HEVI",
            AtmosDynType::FvmHeve => "FVM-HEVE",
        }
    }
}

/// Duration and history cadence of one case variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RunSchedule {
    /// Simulation length in seconds.
    pub duration_sec: DoubleLiteral,
    /// History output interval in hours.
    pub history_interval_hour: DoubleLiteral,
}

/// Deserialises through [`ConfigFile`]: any field left out, at the top level
/// or inside `ctrl`/`steady`, keeps its default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "ConfigFile")]
pub struct GenConfig {
    /// Reference time step, left as a comment beside TIME_DT.
    pub time_dt_sec: DoubleLiteral,
    pub atmos_dyn_type: AtmosDynType,
    /// Maximum amplitude of the zonal wind perturbation (m/s) in CTRL runs.
    pub wind_perturbation: f64,
    pub ctrl: RunSchedule,
    pub steady: RunSchedule,
}

impl Default for GenConfig {
    fn default() -> Self {
        Self {
            time_dt_sec: literal("720.0D0"),
            atmos_dyn_type: AtmosDynType::FvmHevi,
            wind_perturbation: 1.0,
            ctrl: RunSchedule {
                duration_sec: literal("1296000.D0"),
                history_interval_hour: literal("12.D0"),
            },
            steady: RunSchedule {
                duration_sec: literal("86400.D0"),
                history_interval_hour: literal("1.D0"),
            },
        }
    }
}

// ── Config file ───────────────────────────────────────────────────────────────

/// On-disk form of [`GenConfig`] where every field is optional.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    time_dt_sec: Option<DoubleLiteral>,
    atmos_dyn_type: Option<AtmosDynType>,
    wind_perturbation: Option<f64>,
    ctrl: Option<ScheduleFile>,
    steady: Option<ScheduleFile>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ScheduleFile {
    duration_sec: Option<DoubleLiteral>,
    history_interval_hour: Option<DoubleLiteral>,
}

impl ScheduleFile {
    fn merge_over(self, base: RunSchedule) -> RunSchedule {
        RunSchedule {
            duration_sec: self.duration_sec.unwrap_or(base.duration_sec),
            history_interval_hour: self.history_interval_hour.unwrap_or(base.history_interval_hour),
        }
    }
}

impl From<ConfigFile> for GenConfig {
    fn from(file: ConfigFile) -> Self {
        let base = GenConfig::default();
        Self {
            time_dt_sec: file.time_dt_sec.unwrap_or(base.time_dt_sec),
            atmos_dyn_type: file.atmos_dyn_type.unwrap_or(base.atmos_dyn_type),
            wind_perturbation: file.wind_perturbation.unwrap_or(base.wind_perturbation),
            ctrl: file.ctrl.unwrap_or_default().merge_over(base.ctrl),
            steady: file.steady.unwrap_or_default().merge_over(base.steady),
        }
    }
}

impl GenConfig {
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| GenError::ReadFile {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text)
    }

    /// Initial wind perturbation amplitude for a case; STEADY is unperturbed.
    pub fn perturbation_for(&self, case: CaseVariant) -> f64 {
        match case {
            CaseVariant::Ctrl => self.wind_perturbation,
            CaseVariant::Steady => 0.0,
        }
    }

    pub fn schedule_for(&self, case: CaseVariant) -> &RunSchedule {
        match case {
            CaseVariant::Ctrl => &self.ctrl,
            CaseVariant::Steady => &self.steady,
        }
    }
}

fn literal(s: &'static str) -> DoubleLiteral {
    DoubleLiteral::builtin(s)
}
