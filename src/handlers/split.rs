use askama::Template;
use axum::{extract::State, response::Html};

use crate::service::split::compute_split;
use crate::views::{ShareRow, SplitTemplate};
use crate::{SplitError, router::AppState};

/// GET /split -> what each payer's expenses come to per participant.
pub async fn split_expenses(State(state): State<AppState>) -> Result<Html<String>, SplitError> {
    let totals = state.storage.list_grouped_by_payer().await?;
    let shares = compute_split(&totals)
        .into_iter()
        .map(|(payer, share)| ShareRow {
            payer,
            share: format!("{share:.2}"),
        })
        .collect();
    Ok(Html(SplitTemplate { shares }.render()?))
}
