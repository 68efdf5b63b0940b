//! `${NAME}` placeholder substitution over the embedded namelist templates.

use std::collections::BTreeMap;

use crate::error::{GenError, Result};

/// A fixed text with `${NAME}` placeholders.
#[derive(Debug, Clone, Copy)]
pub struct Template {
    pub name: &'static str,
    pub text: &'static str,
}

pub const INIT_TEMPLATE: Template = Template {
    name: "init.conf",
    text: include_str!("../templates/init.conf.tmpl"),
};

pub const RUN_TEMPLATE: Template = Template {
    name: "run.conf",
    text: include_str!("../templates/run.conf.tmpl"),
};

/// Placeholder values keyed by name.
pub type Vars = BTreeMap<&'static str, String>;

impl Template {
    /// Substitute every placeholder. Any name missing from `vars` is an error;
    /// unused entries in `vars` are ignored.
    pub fn render(&self, vars: &Vars) -> Result<String> {
        let mut out = String::with_capacity(self.text.len() + 64);
        let mut rest = self.text;
        let mut offset = 0usize;

        while let Some(start) = rest.find("${") {
            out.push_str(&rest[..start]);
            let after = &rest[start + 2..];
            let Some(end) = after.find('}') else {
                return Err(GenError::UnterminatedPlaceholder {
                    template: self.name,
                    offset: offset + start,
                });
            };
            let key = &after[..end];
            let value = vars.get(key).ok_or_else(|| GenError::UnresolvedPlaceholder {
                template: self.name,
                name: key.to_owned(),
            })?;
            out.push_str(value);

            let consumed = start + 2 + end + 1;
            rest = &rest[consumed..];
            offset += consumed;
        }
        out.push_str(rest);
        Ok(out)
    }

    /// Placeholder names in order of first appearance.
    pub fn placeholders(&self) -> Vec<&'static str> {
        let mut names = Vec::new();
        let mut rest = self.text;
        while let Some(start) = rest.find("${") {
            let after = &rest[start + 2..];
            let Some(end) = after.find('}') else { break };
            let key = &after[..end];
            if !names.contains(&key) {
                names.push(key);
            }
            rest = &after[end + 1..];
        }
        names
    }
}
