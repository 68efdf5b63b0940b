//! Namelist rendering for one combination.
//!
//! Both functions are pure: the output depends only on the combination and
//! the global config.

use crate::combination::Combination;
use crate::config::GenConfig;
use crate::error::Result;
use crate::namelist::real;
use crate::template::{Vars, INIT_TEMPLATE, RUN_TEMPLATE};

fn grid_vars(combo: &Combination) -> Vars {
    let r = combo.resolution;
    Vars::from([
        ("NPRCX", r.nprocx.to_string()),
        ("NPRCY", r.nprocy.to_string()),
        ("KMAX", r.kmax.to_string()),
        ("IMAX", r.imax.to_string()),
        ("JMAX", r.jmax.to_string()),
        ("DZ", real(r.dz)),
        ("DX", real(r.dx)),
        ("DY", real(r.dy)),
    ])
}

pub fn init_vars(combo: &Combination, cfg: &GenConfig) -> Vars {
    let mut vars = grid_vars(combo);
    vars.insert("UP", real(cfg.perturbation_for(combo.case)));
    vars
}

pub fn run_vars(combo: &Combination, cfg: &GenConfig) -> Vars {
    let schedule = cfg.schedule_for(combo.case);
    let mut vars = grid_vars(combo);
    vars.extend([
        ("TIME_DURATION", schedule.duration_sec.to_string()),
        ("DTSEC_DYN", real(combo.resolution.dt_dyn)),
        ("TIME_DT_SEC", cfg.time_dt_sec.to_string()),
        ("ATMOS_DYN_TYPE", cfg.atmos_dyn_type.as_str().to_owned()),
        ("FLUX_TYPE", combo.scheme.flux_type().to_owned()),
        ("FCT_FLAG", combo.fct.literal().to_owned()),
        ("HIST_INTERVAL", schedule.history_interval_hour.to_string()),
    ]);
    vars
}

/// Text of `init.conf`.
pub fn render_init(combo: &Combination, cfg: &GenConfig) -> Result<String> {
    INIT_TEMPLATE.render(&init_vars(combo, cfg))
}

/// Text of `run.conf`.
pub fn render_run(combo: &Combination, cfg: &GenConfig) -> Result<String> {
    RUN_TEMPLATE.render(&run_vars(combo, cfg))
}
