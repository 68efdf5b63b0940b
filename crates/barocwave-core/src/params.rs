//! Fixed parameter tables for the baroclinic wave channel experiment.
//!
//! Computational domain: Lx = 40000 km, Ly = 6000 km, Lz = 30 km.
//! Every table is declared in the order combinations are generated.

use serde::Serialize;

/// Family prefix shared by every finite-volume flux scheme tag.
pub const SCHEME_FAMILY_PREFIX: &str = "FVM_";

// ── Resolution ────────────────────────────────────────────────────────────────

/// Grid geometry, dynamics step and process decomposition for one resolution.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ResolutionProfile {
    pub tag: &'static str,
    /// Horizontal spacing in metres.
    pub dx: f64,
    pub dy: f64,
    /// Vertical spacing in metres.
    pub dz: f64,
    pub kmax: u32,
    /// Cells per process in x.
    pub imax: u32,
    /// Cells per process in y.
    pub jmax: u32,
    /// Dynamics time step in seconds.
    pub dt_dyn: f64,
    pub nprocx: u32,
    pub nprocy: u32,
}

impl ResolutionProfile {
    pub fn by_tag(tag: &str) -> Option<&'static ResolutionProfile> {
        RESOLUTIONS.iter().find(|r| r.tag == tag)
    }
}

#[allow(clippy::too_many_arguments)]
const fn resol(
    tag: &'static str,
    dxy: f64,
    dz: f64,
    kmax: u32,
    imax: u32,
    jmax: u32,
    dt_dyn: f64,
    nprocx: u32,
    nprocy: u32,
) -> ResolutionProfile {
    ResolutionProfile { tag, dx: dxy, dy: dxy, dz, kmax, imax, jmax, dt_dyn, nprocx, nprocy }
}

pub static RESOLUTIONS: [ResolutionProfile; 11] = [
    // grid 100x30x30, dt = 12 min
    resol("400km",     400.0e3, 1000.0,  30, 20, 15, 720.0,  5, 1),
    // grid 100x30x60
    resol("400kmL60",  400.0e3,  500.0,  60, 20, 15, 360.0,  5, 1),
    // grid 200x60x30, dt = 6 min
    resol("200km",     200.0e3, 1000.0,  30, 20, 15, 360.0, 10, 2),
    resol("200kmL60",  200.0e3,  500.0,  60, 20, 15, 180.0, 10, 2),
    resol("200kmL120", 200.0e3,  250.0, 120, 20, 15, 360.0, 10, 2),
    // grid 400x120x30, dt = 3 min
    resol("100km",     100.0e3, 1000.0,  30, 20, 30, 180.0, 20, 2),
    resol("100kmL60",  100.0e3,  500.0,  60, 20, 30,  90.0, 20, 2),
    // grid 800x240x30, dt = 1.2 min
    resol("050km",      50.0e3, 1000.0,  30, 40, 30,  72.0, 20, 4),
    resol("050kmL60",   50.0e3,  500.0,  60, 40, 30,  72.0, 20, 4),
    // grid 1600x480x30, dt = 0.6 min
    resol("025km",      25.0e3, 1000.0,  30, 80, 60,  36.0, 20, 4),
    resol("025kmL60",   25.0e3,  500.0,  60, 80, 60,  36.0, 20, 4),
];

// ── Case variant ──────────────────────────────────────────────────────────────

/// Experiment variant: perturbed control run or unperturbed steady state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum CaseVariant {
    #[serde(rename = "CTRL")]
    Ctrl,
    #[serde(rename = "STEADY")]
    Steady,
}

impl CaseVariant {
    pub const ALL: [CaseVariant; 2] = [CaseVariant::Ctrl, CaseVariant::Steady];

    pub fn tag(self) -> &'static str {
        match self {
            CaseVariant::Ctrl => "CTRL",
            CaseVariant::Steady => "STEADY",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.tag() == tag)
    }
}

// ── Numeric scheme ────────────────────────────────────────────────────────────

/// Finite-volume flux discretisation used for both dynamics and tracers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum NumericScheme {
    #[serde(rename = "FVM_CD2")]
    Cd2,
    #[serde(rename = "FVM_CD4")]
    Cd4,
    #[serde(rename = "FVM_CD6")]
    Cd6,
    #[serde(rename = "FVM_UD1")]
    Ud1,
    #[serde(rename = "FVM_UD3")]
    Ud3,
    #[serde(rename = "FVM_UD5")]
    Ud5,
}

impl NumericScheme {
    pub const ALL: [NumericScheme; 6] = [
        NumericScheme::Cd2,
        NumericScheme::Cd4,
        NumericScheme::Cd6,
        NumericScheme::Ud1,
        NumericScheme::Ud3,
        NumericScheme::Ud5,
    ];

    pub fn tag(self) -> &'static str {
        match self {
            NumericScheme::Cd2 => "FVM_CD2",
            NumericScheme::Cd4 => "FVM_CD4",
            NumericScheme::Cd6 => "FVM_CD6",
            NumericScheme::Ud1 => "FVM_UD1",
            NumericScheme::Ud3 => "FVM_UD3",
            NumericScheme::Ud5 => "FVM_UD5",
        }
    }

    /// Tag with the scheme-family prefix removed, as the model expects it.
    pub fn flux_type(self) -> &'static str {
        let tag = self.tag();
        tag.strip_prefix(SCHEME_FAMILY_PREFIX).unwrap_or(tag)
    }

    /// Accepts either the full tag (`FVM_CD2`) or the bare flux type (`CD2`).
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|s| s.tag() == tag || s.flux_type() == tag)
    }
}

// ── Flux correction ───────────────────────────────────────────────────────────

/// Flux-corrected transport for tracers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum CorrectionFlag {
    #[serde(rename = "F")]
    Off,
    #[serde(rename = "T")]
    On,
}

impl CorrectionFlag {
    pub const ALL: [CorrectionFlag; 2] = [CorrectionFlag::Off, CorrectionFlag::On];

    /// Logical literal written into the run namelist.
    pub fn literal(self) -> &'static str {
        match self {
            CorrectionFlag::Off => "F",
            CorrectionFlag::On => "T",
        }
    }

    pub fn dir_suffix(self) -> &'static str {
        match self {
            CorrectionFlag::Off => "",
            CorrectionFlag::On => "_FCT",
        }
    }
}
