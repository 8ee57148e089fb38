//! The `summit search` command: validate input, filter, sort, print.

use anyhow::Result;
use tracing::info;

use summit_core::criteria::CriteriaInput;
use summit_core::error::QueryError;
use summit_core::filter::{run_query, QueryOutcome};
use summit_core::sort::{Column, TableView};

use crate::config::Config;
use crate::render;
use crate::sqlite_source;

pub const NO_RESULTS_MESSAGE: &str = "The search yielded no results. Please try again.";

pub async fn run_search(
    config: &Config,
    input: CriteriaInput,
    sort: &[Column],
    json: bool,
) -> Result<()> {
    // Input boundary: numeric text is rejected here, before any catalog work.
    let criteria = input.into_criteria(&config.input.limits())?;

    let catalog = sqlite_source::load_catalog(config).await?;

    let matches = match run_query(&catalog, &criteria) {
        Ok(QueryOutcome::Matches(records)) => records,
        Ok(QueryOutcome::NoMatches) => {
            info!(criteria = criteria.active_count(), "search found nothing");
            println!("{}", NO_RESULTS_MESSAGE);
            return Ok(());
        }
        Err(QueryError::EmptyQuery) => {
            println!("{}", QueryError::EmptyQuery);
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    let mut view = TableView::new(matches);
    for column in sort {
        view.click(*column);
    }

    if json {
        render::print_json(view.rows())?;
    } else {
        render::print_table(view.rows(), view.sort_state());
    }
    Ok(())
}
