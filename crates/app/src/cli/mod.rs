use clap::{Parser, Subcommand};

mod ad_space;
mod db;

#[derive(Debug, Parser)]
#[command(name = "adbooking-app", about = "Ad booking administration CLI", long_about = None)]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    AdSpace(ad_space::AdSpaceCommand),
    Db(db::DbCommand),
}

impl Cli {
    pub(crate) async fn run(self) -> Result<(), String> {
        match self.command {
            Commands::AdSpace(command) => ad_space::run(command).await,
            Commands::Db(command) => db::run(command).await,
        }
    }
}
