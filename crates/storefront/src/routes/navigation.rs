//! Category and brand tiles.

use axum::{extract::Path, response::Redirect};
use pocketshop_core::Section;
use tower_sessions::Session;
use tracing::instrument;

use crate::error::{AppError, Result};
use crate::home::handlers::select_listing_filter;
use crate::services::VisitorSession;

/// Store `{section: [id]}` as the listing filter and redirect to the listing.
///
/// Only ids from the static category and brand lists are accepted.
#[instrument(skip(session))]
pub async fn browse(
    session: Session,
    Path((section, id)): Path<(String, String)>,
) -> Result<Redirect> {
    let section: Section = section
        .parse()
        .map_err(|e: pocketshop_core::SectionParseError| AppError::BadRequest(e.to_string()))?;

    let entry = section
        .find(&id)
        .ok_or_else(|| AppError::NotFound(format!("{} {id}", section.as_str())))?;

    let route = select_listing_filter(&VisitorSession(session), section, entry.id).await?;

    Ok(Redirect::to(route.path()))
}
