use utoipa::{Modify, OpenApi};

use crate::features::ads::{dtos as ads_dtos, handlers as ads_handlers};
use crate::features::categories::{dtos as categories_dtos, handlers as categories_handlers};
use crate::features::occasions::{dtos as occasions_dtos, handlers as occasions_handlers};
use crate::features::pages::handlers as pages_handlers;
use crate::features::products::{dtos as products_dtos, handlers as products_handlers};
use crate::shared::types::{ApiResponse, Meta};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Ads
        ads_handlers::create_ad,
        ads_handlers::list_ads,
        ads_handlers::get_ad,
        ads_handlers::update_ad,
        ads_handlers::delete_ad,
        // Categories
        categories_handlers::create_category,
        categories_handlers::list_categories,
        categories_handlers::get_category,
        categories_handlers::get_category_products,
        categories_handlers::update_category,
        categories_handlers::delete_category,
        // Products
        products_handlers::create_product,
        products_handlers::list_products,
        products_handlers::get_product,
        products_handlers::update_product,
        products_handlers::delete_product,
        // Occasions
        occasions_handlers::list_occasions,
        // Pages
        pages_handlers::kids_page,
        pages_handlers::new_arrivals_page,
        pages_handlers::sale_page,
    ),
    components(
        schemas(
            // Shared
            Meta,
            // Ads
            ads_dtos::CreateAdDto,
            ads_dtos::UpdateAdDto,
            ads_dtos::AdResponseDto,
            ApiResponse<ads_dtos::AdResponseDto>,
            ApiResponse<Vec<ads_dtos::AdResponseDto>>,
            // Categories
            categories_dtos::CreateCategoryDto,
            categories_dtos::UpdateCategoryDto,
            categories_dtos::CategoryResponseDto,
            categories_dtos::CategoryWithProductsDto,
            ApiResponse<categories_dtos::CategoryResponseDto>,
            ApiResponse<Vec<categories_dtos::CategoryResponseDto>>,
            ApiResponse<categories_dtos::CategoryWithProductsDto>,
            // Products
            products_dtos::CreateProductDto,
            products_dtos::UpdateProductDto,
            products_dtos::ProductResponseDto,
            ApiResponse<products_dtos::ProductResponseDto>,
            ApiResponse<Vec<products_dtos::ProductResponseDto>>,
            // Occasions
            occasions_dtos::OccasionResponseDto,
            ApiResponse<Vec<occasions_dtos::OccasionResponseDto>>,
        )
    ),
    tags(
        (name = "ads", description = "Promotional ads"),
        (name = "categories", description = "Product categories"),
        (name = "products", description = "Products"),
        (name = "occasions", description = "Occasions lookup (seeded)"),
        (name = "pages", description = "Static category landing pages"),
    ),
    info(
        title = "Larana API",
        version = "0.1.0",
        description = "API documentation for the Larana storefront",
    )
)]
pub struct ApiDoc;

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
