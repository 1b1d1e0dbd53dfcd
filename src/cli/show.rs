use anyhow::Result;
use clap::Args;
use tracing::info;

use super::root::StateArgs;
use crate::config::PaginatorConfig;
use crate::paginator::options::displayed_page_size_options;
use crate::paginator::strip::{plain_text, render_with_label, StripStyle};
use crate::paginator::Paginator;

/// Print the page strip for a pagination state
#[derive(Debug, Args)]
pub struct ShowCommand {
    #[command(flatten)]
    pub state: StateArgs,

    /// Print the render plan as JSON instead of the strip
    #[arg(long)]
    pub json: bool,
}

impl ShowCommand {
    pub fn execute(&self, mut config: PaginatorConfig) -> Result<()> {
        self.state.apply(&mut config);
        config.validate()?;

        let paginator = Paginator::from_config(&config);
        let plan = paginator.plan();
        info!(
            page_index = paginator.state().page_index(),
            page_count = paginator.state().page_count(),
            "Rendering page strip"
        );

        if self.json {
            println!("{}", serde_json::to_string_pretty(&plan)?);
            return Ok(());
        }

        println!("{}", plain_text(&render_with_label(&plan, &StripStyle::default())));
        let sizes: Vec<String> = displayed_page_size_options(
            &config.page_size_options,
            paginator.state().page_size(),
        )
        .iter()
        .map(ToString::to_string)
        .collect();
        println!("Items per page: {}", sizes.join(" | "));
        Ok(())
    }
}
