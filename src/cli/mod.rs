mod root;
mod schema;
mod show;
mod simulate;

pub use root::Cli;
pub use schema::SchemaCommand;
pub use show::ShowCommand;
pub use simulate::SimulateCommand;
