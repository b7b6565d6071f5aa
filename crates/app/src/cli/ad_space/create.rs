use adbooking_app::{
    database::{self, Db},
    domain::ad_spaces::{
        AdSpacesService, PgAdSpacesService,
        data::NewAdSpace,
        records::{AdSpaceAvailabilityStatus, AdSpaceType, AdSpaceUuid},
    },
};
use clap::Args;
use rust_decimal::Decimal;
use uuid::Uuid;

#[derive(Debug, Args)]
pub(crate) struct CreateAdSpaceArgs {
    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,

    /// Display name
    #[arg(long)]
    name: String,

    /// One of BILLBOARD, BUS_STOP, MALL_DISPLAY, TRANSIT_AD
    #[arg(long = "type")]
    ad_space_type: AdSpaceType,

    #[arg(long)]
    city: String,

    #[arg(long)]
    address: String,

    /// Daily price, e.g. 125.50
    #[arg(long)]
    price_per_day: Decimal,

    /// One of AVAILABLE, BOOKED, MAINTENANCE
    #[arg(long, default_value = "AVAILABLE")]
    availability_status: AdSpaceAvailabilityStatus,

    /// Optional ad space UUID; generated when omitted
    #[arg(long)]
    ad_space_uuid: Option<Uuid>,
}

pub(crate) async fn run(args: CreateAdSpaceArgs) -> Result<(), String> {
    let pool = database::connect(&args.database_url)
        .await
        .map_err(|error| format!("failed to connect to database: {error}"))?;

    let service = PgAdSpacesService::new(Db::new(pool));

    let uuid = args
        .ad_space_uuid
        .map_or_else(AdSpaceUuid::new, AdSpaceUuid::from_uuid);

    let ad_space = service
        .create_ad_space(NewAdSpace {
            uuid,
            name: args.name,
            ad_space_type: args.ad_space_type,
            city: args.city,
            address: args.address,
            price_per_day: args.price_per_day,
            availability_status: args.availability_status,
        })
        .await
        .map_err(|error| format!("failed to create ad space: {error}"))?;

    super::print_ad_space(&ad_space);

    Ok(())
}
