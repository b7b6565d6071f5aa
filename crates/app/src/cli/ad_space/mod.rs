use adbooking_app::domain::ad_spaces::records::AdSpaceRecord;
use clap::{Args, Subcommand};

mod create;
mod list;

#[derive(Debug, Args)]
pub(crate) struct AdSpaceCommand {
    #[command(subcommand)]
    command: AdSpaceSubcommand,
}

#[derive(Debug, Subcommand)]
enum AdSpaceSubcommand {
    Create(create::CreateAdSpaceArgs),
    List(list::ListAdSpacesArgs),
}

pub(crate) async fn run(command: AdSpaceCommand) -> Result<(), String> {
    match command.command {
        AdSpaceSubcommand::Create(args) => create::run(args).await,
        AdSpaceSubcommand::List(args) => list::run(args).await,
    }
}

fn print_ad_space(ad_space: &AdSpaceRecord) {
    println!("ad_space_uuid: {}", ad_space.uuid);
    println!("name: {}", ad_space.name);
    println!("type: {}", ad_space.ad_space_type);
    println!("city: {}", ad_space.city);
    println!("address: {}", ad_space.address);
    println!("price_per_day: {}", ad_space.price_per_day);
    println!("availability_status: {}", ad_space.availability_status);
}
