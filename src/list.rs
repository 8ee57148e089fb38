//! The `summit list` command: the "all hikes" and "completed hikes" views.

use anyhow::Result;

use summit_core::sort::{Column, TableView};

use crate::config::Config;
use crate::render;
use crate::sqlite_source;

pub async fn run_list(config: &Config, completed_only: bool, sort: &[Column], json: bool) -> Result<()> {
    let catalog = sqlite_source::load_catalog(config).await?;

    let rows = if completed_only {
        catalog.completed_hikes()
    } else {
        catalog.all_hikes()
    };

    if rows.is_empty() && !json {
        if completed_only {
            println!("No completed hikes yet.");
        } else {
            println!("No hikes in the catalog.");
        }
        return Ok(());
    }

    let mut view = TableView::new(rows);
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
