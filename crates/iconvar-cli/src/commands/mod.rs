use crate::cli::{Commands, GlobalFlags};

pub mod build;
pub mod list;
pub mod strip;

/// Route a parsed command to its handler.
pub fn dispatch(command: &Commands, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Build(args) => build::handle(args, flags),
        Commands::List(args) => list::handle(args, flags),
        Commands::Strip(args) => strip::handle(args, flags),
    }
}
