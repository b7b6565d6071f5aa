//! App Router

use salvo::Router;

use crate::{ad_spaces, booking_requests};

pub fn app_router() -> Router {
    Router::new()
        .push(
            Router::with_path("ad-spaces")
                .get(ad_spaces::index::handler)
                .push(Router::with_path("{ad_space}").get(ad_spaces::get::handler)),
        )
        .push(
            Router::with_path("booking-requests")
                .get(booking_requests::index::handler)
                .post(booking_requests::create::handler)
                .push(
                    Router::with_path("{booking_request}")
                        .get(booking_requests::get::handler)
                        .push(
                            Router::with_path("approve")
                                .patch(booking_requests::approve::handler),
                        )
                        .push(
                            Router::with_path("reject").patch(booking_requests::reject::handler),
                        ),
                ),
        )
}
