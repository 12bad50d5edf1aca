//! OpenAPI documentation for the HTTP interface.

use utoipa::OpenApi;

use awards_compute::{ProducerIntervalEntry, ProducerIntervalReport};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "awards-server API",
        version = "0.1.0",
        description = "Producer win-interval report over a static film awards dataset.",
    ),
    tags(
        (name = "Producers", description = "Shortest and longest gaps between a producer's wins"),
    ),
    paths(crate::api::producers::producers),
    components(schemas(ProducerIntervalReport, ProducerIntervalEntry))
)]
pub struct ApiDoc;
