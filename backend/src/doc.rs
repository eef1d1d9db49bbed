//! OpenAPI documentation configuration.
//!
//! Defines the [`ApiDoc`] struct which generates the OpenAPI specification
//! for the REST API: the listing endpoint, the health probes, and the error
//! envelope schemas. The generated specification backs Swagger UI in debug
//! builds.

use utoipa::OpenApi;

use crate::inbound::http::pokemons::{PokemonDto, PokemonListResponse};
use crate::inbound::http::schemas::{ErrorCodeSchema, ErrorSchema};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Pokédex catalogue API",
        description = "Paginated, filterable, sortable listing over a CSV-seeded catalogue."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::pokemons::list_pokemons,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(PokemonListResponse, PokemonDto, ErrorSchema, ErrorCodeSchema)),
    tags(
        (name = "pokemons", description = "Catalogue listing operations"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
