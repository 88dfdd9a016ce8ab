//! Tags subcommand handler.

use serde::Serialize;
use tabled::Tabled;

use crate::cli::GlobalOpts;
use crate::error::CliError;
use crate::output;

use super::util::SnapshotContext;

#[derive(Serialize)]
struct TagCount {
    tag: String,
    events: usize,
}

#[derive(Tabled)]
struct TagRow {
    #[tabled(rename = "Tag")]
    tag: String,
    #[tabled(rename = "Events")]
    events: usize,
}

impl From<&TagCount> for TagRow {
    fn from(tc: &TagCount) -> Self {
        Self {
            tag: tc.tag.clone(),
            events: tc.events,
        }
    }
}

/// List the distinct tags across the snapshot, with how many events carry each.
pub fn handle(ctx: &SnapshotContext, global: &GlobalOpts) -> Result<(), CliError> {
    let counts: Vec<TagCount> = ctx
        .catalog
        .tag_counts()
        .into_iter()
        .map(|(tag, events)| TagCount { tag, events })
        .collect();

    let out = output::render_list(&global.output, &counts, |tc| TagRow::from(tc), |tc| tc.tag.clone());
    output::print_output(&out, global.quiet);
    Ok(())
}
