//! Generation pass: enumerate, resolve, render, write.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::combination::{Combination, Selection};
use crate::config::GenConfig;
use crate::error::{GenError, Result};
use crate::layout::{combination_dir, ensure_dir, INIT_FILE_NAME, RUN_FILE_NAME};
use crate::render::{render_init, render_run};

/// Files written (or planned, in a dry run) for one combination.
#[derive(Debug, Clone, Serialize)]
pub struct OutputArtifact {
    pub resolution: &'static str,
    pub case: &'static str,
    pub scheme: &'static str,
    pub fct: &'static str,
    pub dir: PathBuf,
    pub init_conf: PathBuf,
    pub run_conf: PathBuf,
}

impl OutputArtifact {
    fn new(root: &Path, combo: &Combination) -> Self {
        let dir = combination_dir(root, combo);
        Self {
            resolution: combo.resolution.tag,
            case: combo.case.tag(),
            scheme: combo.scheme.tag(),
            fct: combo.fct.literal(),
            init_conf: dir.join(INIT_FILE_NAME),
            run_conf: dir.join(RUN_FILE_NAME),
            dir,
        }
    }
}

/// Summary of one generation pass, serialisable as a manifest.
#[derive(Debug, Clone, Serialize)]
pub struct GenerationReport {
    pub root: PathBuf,
    pub dry_run: bool,
    pub config: GenConfig,
    pub dirs_created: usize,
    pub artifacts: Vec<OutputArtifact>,
}

/// Writes `init.conf` and `run.conf` for every selected combination under
/// `root`. Existing files are overwritten.
pub struct ConfGenerator {
    root: PathBuf,
    config: GenConfig,
    dry_run: bool,
}

impl ConfGenerator {
    pub fn new(root: impl Into<PathBuf>, config: GenConfig) -> Self {
        Self { root: root.into(), config, dry_run: false }
    }

    /// Resolve and render without touching the filesystem.
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Run the generation pass. Stops at the first I/O failure; files
    /// already written are left in place.
    pub fn generate(&self, selection: &Selection) -> Result<GenerationReport> {
        let mut artifacts = Vec::with_capacity(selection.len());
        let mut dirs_created = 0usize;

        for combo in selection.combinations() {
            let artifact = OutputArtifact::new(&self.root, &combo);
            tracing::info!(dir = %artifact.dir.display(), "generating init.conf and run.conf");

            // Both files are rendered before any filesystem change.
            let init_text = render_init(&combo, &self.config)?;
            let run_text = render_run(&combo, &self.config)?;

            if !self.dry_run {
                if ensure_dir(&artifact.dir)? {
                    dirs_created += 1;
                }
                write_file(&artifact.init_conf, &init_text)?;
                write_file(&artifact.run_conf, &run_text)?;
            }
            artifacts.push(artifact);
        }

        tracing::info!(
            combinations = artifacts.len(),
            dirs_created,
            dry_run = self.dry_run,
            "generation complete"
        );

        Ok(GenerationReport {
            root: self.root.clone(),
            dry_run: self.dry_run,
            config: self.config.clone(),
            dirs_created,
            artifacts,
        })
    }
}

fn write_file(path: &Path, text: &str) -> Result<()> {
    fs::write(path, text).map_err(|source| GenError::WriteFile { path: path.to_path_buf(), source })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::RESOLUTIONS;

    fn read(path: &Path) -> String {
        fs::read_to_string(path).unwrap()
    }

    fn single_resolution(tag: &str) -> Selection {
        Selection::from_tags(&[tag], &[], &[]).unwrap()
    }

    #[test]
    fn end_to_end_400km_ctrl_cd2() {
        let tmp = tempfile::tempdir().unwrap();
        let gen = ConfGenerator::new(tmp.path(), GenConfig::default());
        let report = gen.generate(&single_resolution("400km")).unwrap();
        assert_eq!(report.artifacts.len(), 2 * 6 * 2);

        let dir = tmp.path().join("400km/CTRL/CD2");
        assert!(dir.is_dir());

        let init = read(&dir.join("init.conf"));
        assert!(init.contains(" KMAX = 30, \n"));
        assert!(init.contains(" IMAX = 20, IHALO = 3, \n"));
        assert!(init.contains(" JMAX = 15, JHALO = 3,\n"));
        assert!(init.contains(" Up         = 1.0,\n"));

        let run = read(&dir.join("run.conf"));
        assert!(run.contains(" KMAX = 30, \n"));
        assert!(run.contains(" TIME_DT                    = 720.0, !720.0D0,\n"));
        assert!(run.contains(" TIME_DURATION              = 1296000.D0,\n"));
        assert!(run.contains(" ATMOS_DYN_FVM_FLUX_TYPE        = \"CD2\",             \n"));
        assert!(run.contains(" ATMOS_DYN_FLAG_FCT_TRACER      = F, \n"));
    }

    #[test]
    fn one_directory_with_two_files_per_combination() {
        let tmp = tempfile::tempdir().unwrap();
        let sel = Selection::from_tags(&["200kmL120", "025km"], &[], &[]).unwrap();
        let report = ConfGenerator::new(tmp.path(), GenConfig::default()).generate(&sel).unwrap();

        assert_eq!(report.artifacts.len(), sel.len());
        assert_eq!(report.dirs_created, sel.len());
        for a in &report.artifacts {
            let names: Vec<_> = fs::read_dir(&a.dir)
                .unwrap()
                .map(|e| e.unwrap().file_name().into_string().unwrap())
                .collect();
            assert_eq!(names.len(), 2, "{}", a.dir.display());
            assert!(a.init_conf.is_file() && a.run_conf.is_file());
        }
    }

    #[test]
    fn fct_branch_paths_and_flag() {
        let tmp = tempfile::tempdir().unwrap();
        let sel = Selection::from_tags(&["050km"], &["STEADY"], &["UD1"]).unwrap();
        let report = ConfGenerator::new(tmp.path(), GenConfig::default()).generate(&sel).unwrap();

        let dirs: Vec<_> = report.artifacts.iter().map(|a| a.dir.clone()).collect();
        assert_eq!(
            dirs,
            [tmp.path().join("050km/STEADY/UD1"), tmp.path().join("050km/STEADY/UD1_FCT")]
        );
        assert!(read(&dirs[0].join("run.conf")).contains("ATMOS_DYN_FLAG_FCT_TRACER      = F, "));
        assert!(read(&dirs[1].join("run.conf")).contains("ATMOS_DYN_FLAG_FCT_TRACER      = T, "));
        assert!(read(&dirs[1].join("init.conf")).contains(" Up         = 0.0,\n"));
    }

    #[test]
    fn regeneration_is_idempotent_and_overwrites() {
        let tmp = tempfile::tempdir().unwrap();
        let sel = single_resolution("100km");
        let gen = ConfGenerator::new(tmp.path(), GenConfig::default());

        let first = gen.generate(&sel).unwrap();
        let path = &first.artifacts[0].run_conf;
        let original = read(path);
        fs::write(path, "stale").unwrap();

        let second = gen.generate(&sel).unwrap();
        assert_eq!(second.dirs_created, 0);
        assert_eq!(read(path), original);
    }

    #[test]
    fn dry_run_touches_nothing() {
        let tmp = tempfile::tempdir().unwrap();
        let report = ConfGenerator::new(tmp.path(), GenConfig::default())
            .dry_run(true)
            .generate(&Selection::all())
            .unwrap();

        assert_eq!(report.artifacts.len(), RESOLUTIONS.len() * 24);
        assert_eq!(report.dirs_created, 0);
        assert_eq!(fs::read_dir(tmp.path()).unwrap().count(), 0);
    }

    #[test]
    fn write_failure_aborts_the_run() {
        let tmp = tempfile::tempdir().unwrap();
        // A directory where run.conf should go makes the write fail.
        fs::create_dir_all(tmp.path().join("400km/CTRL/CD2/run.conf")).unwrap();

        let err = ConfGenerator::new(tmp.path(), GenConfig::default())
            .generate(&single_resolution("400km"))
            .unwrap_err();
        assert!(matches!(err, GenError::WriteFile { .. }), "got {err:?}");
        assert!(tmp.path().join("400km/CTRL/CD2/init.conf").is_file());
        assert!(!tmp.path().join("400km/CTRL/CD2_FCT").exists());
    }

    #[test]
    fn report_serialises_as_manifest() {
        let report = ConfGenerator::new("out", GenConfig::default())
            .dry_run(true)
            .generate(&single_resolution("400km"))
            .unwrap();
        let json: serde_json::Value = serde_json::to_value(&report).unwrap();
        assert_eq!(json["artifacts"][0]["scheme"], "FVM_CD2");
        assert_eq!(json["artifacts"][1]["fct"], "T");
        assert_eq!(json["config"]["ctrl"]["duration_sec"], "1296000.D0");
    }
}
