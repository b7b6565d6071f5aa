use adbooking_app::{
    database::{self, Db},
    domain::ad_spaces::{
        AdSpacesService, PgAdSpacesService, data::AdSpaceFilter, records::AdSpaceType,
    },
};
use clap::Args;

#[derive(Debug, Args)]
pub(crate) struct ListAdSpacesArgs {
    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,

    /// Only list spaces of this type
    #[arg(long = "type")]
    ad_space_type: Option<AdSpaceType>,

    /// Only list spaces in this city
    #[arg(long)]
    city: Option<String>,
}

pub(crate) async fn run(args: ListAdSpacesArgs) -> Result<(), String> {
    let pool = database::connect(&args.database_url)
        .await
        .map_err(|error| format!("failed to connect to database: {error}"))?;

    let service = PgAdSpacesService::new(Db::new(pool));

    let ad_spaces = service
        .list_available_ad_spaces(AdSpaceFilter {
            ad_space_type: args.ad_space_type,
            city: args.city,
        })
        .await
        .map_err(|error| format!("failed to list ad spaces: {error}"))?;

    if ad_spaces.is_empty() {
        println!("no available ad spaces found");
        return Ok(());
    }

    for ad_space in &ad_spaces {
        super::print_ad_space(ad_space);
        println!();
    }

    Ok(())
}
