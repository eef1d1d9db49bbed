//! Catalogue listing endpoint.
//!
//! ```text
//! GET /api/pokemons  Paginated, filterable, sortable catalogue listing
//! ```
//!
//! All parameters are optional. Enumerated parameters (`sort`, `order`)
//! silently fall back to their defaults on unrecognised values; numeric
//! parameters fail the request with a 400 when they do not parse. That
//! asymmetry is part of the wire contract.

use actix_web::{get, web};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

use crate::domain::{ListingParams, ListingSelection, PageMetadata, Pokemon, SortColumn, SortOrder};
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;

/// Query parameters accepted by the listing endpoint.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
pub struct ListPokemonsParams {
    /// Requested page, 1-based. Defaults to 1.
    pub page: Option<u32>,
    /// Page size. Defaults to 10.
    pub per_page: Option<u32>,
    /// Case-insensitive substring match on the name.
    pub search: Option<String>,
    /// Sort column: `name`, `base_experience`, `height` or `weight`.
    /// Unrecognised values fall back to `name`.
    pub sort: Option<String>,
    /// Sort direction: `asc` or `desc` (case-insensitive). Unrecognised
    /// values fall back to `asc`.
    pub order: Option<String>,
    /// Lower inclusive bound on base experience.
    pub base_experience_min: Option<i32>,
    /// Upper inclusive bound on base experience.
    pub base_experience_max: Option<i32>,
    /// Lower inclusive bound on height.
    pub height_min: Option<i32>,
    /// Upper inclusive bound on height.
    pub height_max: Option<i32>,
    /// Lower inclusive bound on weight.
    pub weight_min: Option<i32>,
    /// Upper inclusive bound on weight.
    pub weight_max: Option<i32>,
}

impl From<ListPokemonsParams> for ListingParams {
    fn from(params: ListPokemonsParams) -> Self {
        Self {
            page: params.page,
            per_page: params.per_page,
            search: params.search,
            sort: params.sort,
            order: params.order,
            base_experience_min: params.base_experience_min,
            base_experience_max: params.base_experience_max,
            height_min: params.height_min,
            height_max: params.height_max,
            weight_min: params.weight_min,
            weight_max: params.weight_max,
        }
    }
}

/// One record in the listing response.
#[derive(Debug, Clone, serde::Serialize, ToSchema)]
pub struct PokemonDto {
    /// Surrogate key.
    pub id: i32,
    /// Display name.
    pub name: Option<String>,
    /// Base experience points.
    pub base_experience: Option<i32>,
    /// Height.
    pub height: Option<i32>,
    /// Weight.
    pub weight: Option<i32>,
    /// Image URL.
    pub image_url: Option<String>,
}

impl From<Pokemon> for PokemonDto {
    fn from(record: Pokemon) -> Self {
        Self {
            id: record.id,
            name: record.name,
            base_experience: record.base_experience,
            height: record.height,
            weight: record.weight,
            image_url: record.image_url,
        }
    }
}

/// Listing response envelope.
#[derive(Debug, Clone, serde::Serialize, ToSchema)]
pub struct PokemonListResponse {
    /// The page of records, in the requested order.
    pub data: Vec<PokemonDto>,
    /// Page actually served, 1-based.
    pub page: u32,
    /// Page size actually used.
    pub per_page: u32,
    /// Records matching every filter, before pagination.
    pub total_items: u64,
    /// `ceil(total_items / per_page)`.
    pub total_pages: u64,
    /// Validated sort column actually used.
    #[schema(value_type = String, example = "name")]
    pub sorting_column: SortColumn,
    /// Validated sort direction actually used.
    #[schema(value_type = String, example = "asc")]
    pub sorting_order: SortOrder,
}

/// List catalogue records.
///
/// # Errors
///
/// - `400 Bad Request`: non-numeric `page`, `per_page` or range bound, or a
///   zero page window value.
/// - `503 Service Unavailable`: the store cannot be reached.
/// - `500 Internal Server Error`: the store query failed.
#[utoipa::path(
    get,
    path = "/api/pokemons",
    params(ListPokemonsParams),
    responses(
        (status = 200, description = "One page of the catalogue", body = PokemonListResponse),
        (status = 400, description = "Invalid request", body = crate::inbound::http::schemas::ErrorSchema),
        (status = 503, description = "Service unavailable", body = crate::inbound::http::schemas::ErrorSchema),
        (status = 500, description = "Internal server error", body = crate::inbound::http::schemas::ErrorSchema)
    ),
    tags = ["pokemons"],
    operation_id = "listPokemons"
)]
#[get("/pokemons")]
pub async fn list_pokemons(
    state: web::Data<HttpState>,
    params: web::Query<ListPokemonsParams>,
) -> ApiResult<web::Json<PokemonListResponse>> {
    let selection = ListingSelection::from_params(params.into_inner().into())?;
    let page = state.pokemons.list(&selection).await?;
    let metadata = PageMetadata::new(page.total_items, selection.per_page());

    Ok(web::Json(PokemonListResponse {
        data: page.records.into_iter().map(PokemonDto::from).collect(),
        page: selection.page(),
        per_page: selection.per_page(),
        total_items: metadata.total_items,
        total_pages: metadata.total_pages,
        sorting_column: selection.sort(),
        sorting_order: selection.order(),
    }))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::http::StatusCode;
    use actix_web::{App, test as actix_test, web};
    use async_trait::async_trait;
    use rstest::rstest;
    use serde_json::Value;

    use crate::domain::Error;
    use crate::domain::ports::{FixturePokemonsQuery, PokemonPage, PokemonsQuery};
    use crate::inbound::http::error::query_error_handler;

    use super::*;

    struct SinglePageQuery;

    #[async_trait]
    impl PokemonsQuery for SinglePageQuery {
        async fn list(&self, _selection: &ListingSelection) -> Result<PokemonPage, Error> {
            Ok(PokemonPage {
                records: vec![Pokemon {
                    id: 4,
                    name: Some("Charmander".to_owned()),
                    base_experience: Some(62),
                    height: Some(6),
                    weight: Some(85),
                    image_url: Some("https://img.example/4.png".to_owned()),
                }],
                total_items: 1,
            })
        }
    }

    fn test_app(
        query: Arc<dyn PokemonsQuery>,
    ) -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .app_data(web::Data::new(HttpState::new(query)))
            .app_data(web::QueryConfig::default().error_handler(query_error_handler))
            .service(web::scope("/api").service(list_pokemons))
    }

    #[actix_web::test]
    async fn listing_returns_wire_contract_keys() {
        let app = actix_test::init_service(test_app(Arc::new(SinglePageQuery))).await;
        let request = actix_test::TestRequest::get()
            .uri("/api/pokemons")
            .to_request();

        let body: Value = actix_test::call_and_read_body_json(&app, request).await;

        assert_eq!(body["page"], 1);
        assert_eq!(body["per_page"], 10);
        assert_eq!(body["total_items"], 1);
        assert_eq!(body["total_pages"], 1);
        assert_eq!(body["sorting_column"], "name");
        assert_eq!(body["sorting_order"], "asc");
        let record = &body["data"][0];
        assert_eq!(record["id"], 4);
        assert_eq!(record["name"], "Charmander");
        assert_eq!(record["base_experience"], 62);
        assert_eq!(record["height"], 6);
        assert_eq!(record["weight"], 85);
        assert_eq!(record["image_url"], "https://img.example/4.png");
    }

    #[actix_web::test]
    async fn empty_catalogue_lists_cleanly() {
        let app = actix_test::init_service(test_app(Arc::new(FixturePokemonsQuery))).await;
        let request = actix_test::TestRequest::get()
            .uri("/api/pokemons")
            .to_request();

        let body: Value = actix_test::call_and_read_body_json(&app, request).await;

        assert_eq!(body["data"], serde_json::json!([]));
        assert_eq!(body["total_items"], 0);
        assert_eq!(body["total_pages"], 0);
    }

    #[actix_web::test]
    async fn validated_sort_values_are_echoed_back() {
        let app = actix_test::init_service(test_app(Arc::new(FixturePokemonsQuery))).await;
        let request = actix_test::TestRequest::get()
            .uri("/api/pokemons?sort=attack_power&order=DESC")
            .to_request();

        let body: Value = actix_test::call_and_read_body_json(&app, request).await;

        // Unknown sort falls back to name; order is case-insensitive.
        assert_eq!(body["sorting_column"], "name");
        assert_eq!(body["sorting_order"], "desc");
    }

    #[rstest]
    #[case("/api/pokemons?page=two")]
    #[case("/api/pokemons?per_page=ten")]
    #[case("/api/pokemons?base_experience_min=low")]
    #[case("/api/pokemons?weight_max=9.5")]
    #[actix_web::test]
    async fn non_numeric_parameters_fail_with_the_error_envelope(#[case] uri: &str) {
        let app = actix_test::init_service(test_app(Arc::new(FixturePokemonsQuery))).await;
        let request = actix_test::TestRequest::get().uri(uri).to_request();

        let response = actix_test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body: Value = actix_test::read_body_json(response).await;
        assert_eq!(body["code"], "invalid_request");
    }

    #[rstest]
    #[case("/api/pokemons?page=0")]
    #[case("/api/pokemons?per_page=0")]
    #[actix_web::test]
    async fn zero_page_window_values_are_rejected(#[case] uri: &str) {
        let app = actix_test::init_service(test_app(Arc::new(FixturePokemonsQuery))).await;
        let request = actix_test::TestRequest::get().uri(uri).to_request();

        let response = actix_test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
