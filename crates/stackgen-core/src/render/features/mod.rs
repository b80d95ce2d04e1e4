//! Optional backend capabilities
//!
//! Each capability renders on its own from just the options it needs, so
//! toggling one never changes the files of another. The backend renderers
//! merge the fragments with [`super::assemble`].

pub mod auth;
pub mod database;
pub mod logger;
pub mod rate_limit;
pub mod swagger;

use super::Fragment;
use crate::config::{BackendOptions, ProjectName};
use crate::error::Result;

/// Fragments for every enabled capability, database first
pub fn backend_fragments(name: &ProjectName, opts: &BackendOptions) -> Result<Vec<Fragment>> {
    let framework = opts.framework;
    let mut fragments = vec![database::render(
        framework,
        name,
        opts.database,
        opts.easy_mongoo,
    )?];

    if opts.auth {
        fragments.push(auth::render(framework, opts.database)?);
    }
    if opts.logger {
        fragments.push(logger::render(framework, name)?);
    }
    if opts.rate_limiter {
        fragments.push(rate_limit::render(framework)?);
    }
    if opts.swagger {
        fragments.push(swagger::render(framework, name)?);
    }

    Ok(fragments)
}

#[cfg(test)]
pub(crate) fn paths(fragment: &Fragment) -> Vec<&str> {
    fragment
        .files
        .iter()
        .filter_map(|f| f.path.to_str())
        .collect()
}

#[cfg(test)]
pub(crate) fn dependency_names(fragment: &Fragment) -> Vec<&str> {
    fragment.dependencies.iter().map(|(name, _)| *name).collect()
}
