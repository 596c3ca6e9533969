//! OpenAPI documentation, served at `/api/openapi.json`.

use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::error::{ApiEnvelope, ErrorDetails, ErrorResponse};
use crate::handlers;
use crate::services::upload::PresignedUpload;
use pixgate_core::ImageMetadata;

struct BearerAuth;

impl Modify for BearerAuth {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Pixgate API",
        version = "0.1.0",
        description = "Authenticated image ingestion: verifies a bearer token, checks the image type, size and signature, and stores it under the uploader's namespace."
    ),
    paths(
        handlers::image_upload::upload_image,
        handlers::presigned_upload::generate_presigned_url,
        handlers::health::health_check,
    ),
    components(
        schemas(
            ImageMetadata,
            PresignedUpload,
            ApiEnvelope<ImageMetadata>,
            ApiEnvelope<PresignedUpload>,
            ErrorDetails,
            ErrorResponse,
            handlers::health::HealthResponse,
        )
    ),
    modifiers(&BearerAuth),
    tags(
        (name = "images", description = "Image upload operations"),
        (name = "health", description = "Service health")
    )
)]
pub struct ApiDoc;

pub fn get_openapi_spec() -> utoipa::openapi::OpenApi {
    ApiDoc::openapi()
}
