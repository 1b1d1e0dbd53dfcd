use anyhow::Result;
use clap::Args;
use tracing::info;

use super::root::StateArgs;
use crate::config::PaginatorConfig;
use crate::paginator::strip::{plain_text, render_strip, StripStyle};
use crate::paginator::{Command, Paginator};

/// Apply a sequence of activations and print every step
#[derive(Debug, Args)]
pub struct SimulateCommand {
    #[command(flatten)]
    pub state: StateArgs,

    /// Activations: next, prev, first, last, skip:forward, skip:backward,
    /// page:N (zero-based)
    pub commands: Vec<Command>,
}

impl SimulateCommand {
    pub fn execute(&self, mut config: PaginatorConfig) -> Result<()> {
        self.state.apply(&mut config);
        config.validate()?;

        let mut paginator = Paginator::from_config(&config);
        let style = StripStyle::default();
        println!("  {}", plain_text(&render_strip(&paginator.plan(), &style)));

        for command in &self.commands {
            match paginator.activate(*command) {
                Some(event) => println!("{} -> {}", command, serde_json::to_string(&event)?),
                None => println!("{} -> ignored", command),
            }
            println!("  {}", plain_text(&render_strip(&paginator.plan(), &style)));
        }

        info!(
            page_index = paginator.state().page_index(),
            "Simulation finished"
        );
        Ok(())
    }
}
