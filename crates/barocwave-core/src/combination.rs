//! Cross-product enumeration of the parameter tables.

use serde::Serialize;

use crate::error::{GenError, Result};
use crate::params::{CaseVariant, CorrectionFlag, NumericScheme, ResolutionProfile, RESOLUTIONS};

/// One point of the experiment matrix.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Combination {
    pub resolution: &'static ResolutionProfile,
    pub case: CaseVariant,
    pub scheme: NumericScheme,
    pub fct: CorrectionFlag,
}

/// Subset of each dimension to generate. Declaration order is kept
/// regardless of the order tags were given in.
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    pub resolutions: Vec<&'static ResolutionProfile>,
    pub cases: Vec<CaseVariant>,
    pub schemes: Vec<NumericScheme>,
    pub fct: Vec<CorrectionFlag>,
}

impl Default for Selection {
    fn default() -> Self {
        Self::all()
    }
}

impl Selection {
    pub fn all() -> Self {
        Self {
            resolutions: RESOLUTIONS.iter().collect(),
            cases: CaseVariant::ALL.to_vec(),
            schemes: NumericScheme::ALL.to_vec(),
            fct: CorrectionFlag::ALL.to_vec(),
        }
    }

    /// Build a selection from tag filters. An empty filter keeps the whole
    /// dimension.
    pub fn from_tags<S: AsRef<str>>(resolutions: &[S], cases: &[S], schemes: &[S]) -> Result<Self> {
        let resolutions = filter_by_tags(
            "resolution",
            RESOLUTIONS.iter().collect(),
            resolutions,
            |tag| ResolutionProfile::by_tag(tag),
        )?;
        let cases = filter_by_tags("case", CaseVariant::ALL.to_vec(), cases, CaseVariant::from_tag)?;
        let schemes = filter_by_tags("scheme", NumericScheme::ALL.to_vec(), schemes, NumericScheme::from_tag)?;

        Ok(Self { resolutions, cases, schemes, fct: CorrectionFlag::ALL.to_vec() })
    }

    pub fn len(&self) -> usize {
        self.resolutions.len() * self.cases.len() * self.schemes.len() * self.fct.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Nested resolution → case → scheme → flag order.
    pub fn combinations(&self) -> impl Iterator<Item = Combination> + '_ {
        self.resolutions.iter().flat_map(move |&resolution| {
            self.cases.iter().flat_map(move |&case| {
                self.schemes.iter().flat_map(move |&scheme| {
                    self.fct.iter().map(move |&fct| Combination { resolution, case, scheme, fct })
                })
            })
        })
    }
}

fn filter_by_tags<T: PartialEq, S: AsRef<str>>(
    dimension: &'static str,
    all: Vec<T>,
    tags: &[S],
    lookup: impl Fn(&str) -> Option<T>,
) -> Result<Vec<T>> {
    if tags.is_empty() {
        return Ok(all);
    }
    let mut wanted = Vec::with_capacity(tags.len());
    for tag in tags {
        let tag = tag.as_ref();
        let item = lookup(tag).ok_or_else(|| GenError::UnknownTag { dimension, tag: tag.to_owned() })?;
        wanted.push(item);
    }
    Ok(all.into_iter().filter(|item| wanted.contains(item)).collect())
}

/// Every combination of the full tables.
pub fn all_combinations() -> Vec<Combination> {
    Selection::all().combinations().collect()
}
