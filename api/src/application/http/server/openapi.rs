use crate::application::http::{
    allergen::router::AllergenApiDoc, allergy_profile::router::AllergyProfileApiDoc,
    authentication::router::AuthenticationApiDoc, scan::router::ScanApiDoc,
};
use utoipa::{
    Modify, OpenApi,
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
};

struct BearerSecurity;

impl Modify for BearerSecurity {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}

#[derive(OpenApi)]
#[openapi(
    info(
        title = "AllerScan API"
    ),
    modifiers(&BearerSecurity),
    nest(
        (path = "/auth", api = AuthenticationApiDoc),
        (path = "/profile", api = AllergyProfileApiDoc),
        (path = "", api = ScanApiDoc),
        (path = "/allergens", api = AllergenApiDoc),
    )
)]
pub struct ApiDoc;
