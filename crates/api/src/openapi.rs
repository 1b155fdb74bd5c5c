//! OpenAPI document for the video archive API.
//!
//! Served as JSON at [`OPENAPI_JSON_PATH`] with Swagger UI at [`DOCS_PATH`].

use archive_db::models::video::{CreateVideo, UpdateVideo, Video};
use utoipa::OpenApi;

use crate::error::ErrorBody;
use crate::handlers::video;
use crate::routes::health::{self, HealthResponse};

pub const OPENAPI_JSON_PATH: &str = "/openapi.json";
pub const DOCS_PATH: &str = "/docs";

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Video Archive API",
        description = "CRUD over stored video records. Ids are 24-character hex strings."
    ),
    paths(
        health::health_check,
        video::list,
        video::create,
        video::get_by_id,
        video::update,
        video::delete,
    ),
    components(schemas(Video, CreateVideo, UpdateVideo, ErrorBody, HealthResponse)),
    tags(
        (name = "health", description = "Service health checks"),
        (name = "videos", description = "Video record create, read, update and delete"),
    )
)]
pub struct ApiDoc;
