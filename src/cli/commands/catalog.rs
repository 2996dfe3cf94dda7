//! Describe the loaded catalogs

use bountyboard::api;
use bountyboard::context::AppContext;
use bountyboard::output::{OutputMode, Render};

/// List every site, or the defects of one
pub fn catalog(ctx: &AppContext, site: Option<u32>, mode: OutputMode) -> anyhow::Result<()> {
    match site {
        Some(id) => api::get_site_catalog(ctx, id)?.render(mode),
        None => api::list_sites(ctx)?.render(mode),
    }
    Ok(())
}
