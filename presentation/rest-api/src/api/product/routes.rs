use std::sync::Arc;

use poem::Body;
use poem_openapi::{OpenApi, param::Path, payload::Json};
use tracing::warn;

use business::domain::product::errors::ProductError;
use business::domain::product::use_cases::create::CreateProductUseCase;
use business::domain::product::use_cases::delete::{DeleteProductParams, DeleteProductUseCase};
use business::domain::product::use_cases::get_all::GetAllProductsUseCase;
use business::domain::product::use_cases::get_by_id::{
    GetProductByIdParams, GetProductByIdUseCase,
};
use business::domain::product::use_cases::update::UpdateProductUseCase;
use business::domain::product::write_policy::{WriteOperation, WritePolicy};
use business::domain::shared::value_objects::ProductId;

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::product::dto::{CreateProductRequest, ProductResponse, UpdateProductRequest};
use crate::api::tags::ApiTags;

pub struct ProductApi {
    write_policy: Arc<dyn WritePolicy>,
    create_use_case: Arc<dyn CreateProductUseCase>,
    get_all_use_case: Arc<dyn GetAllProductsUseCase>,
    get_by_id_use_case: Arc<dyn GetProductByIdUseCase>,
    update_use_case: Arc<dyn UpdateProductUseCase>,
    delete_use_case: Arc<dyn DeleteProductUseCase>,
}

impl ProductApi {
    pub fn new(
        write_policy: Arc<dyn WritePolicy>,
        create_use_case: Arc<dyn CreateProductUseCase>,
        get_all_use_case: Arc<dyn GetAllProductsUseCase>,
        get_by_id_use_case: Arc<dyn GetProductByIdUseCase>,
        update_use_case: Arc<dyn UpdateProductUseCase>,
        delete_use_case: Arc<dyn DeleteProductUseCase>,
    ) -> Self {
        Self {
            write_policy,
            create_use_case,
            get_all_use_case,
            get_by_id_use_case,
            update_use_case,
            delete_use_case,
        }
    }

    fn authorize(&self, operation: WriteOperation) -> Result<(), ProductError> {
        self.write_policy.authorize(operation).inspect_err(|_| {
            warn!(operation = %operation, "Refused catalog write");
        })
    }
}

fn invalid_body() -> Json<ErrorResponse> {
    Json(ErrorResponse::new("ValidationError", "product.invalid_body"))
}

/// Product catalog API
///
/// The catalog is read-only: writes go through the write policy first and are
/// refused with 403 while no authentication exists.
#[OpenApi]
impl ProductApi {
    /// Create a product
    ///
    /// The body is only read once the write policy allows the request.
    #[oai(path = "/products", method = "post", tag = "ApiTags::Products")]
    async fn create_product(&self, body: Body) -> CreateProductResponse {
        if let Err(err) = self.authorize(WriteOperation::Create) {
            return CreateProductResponse::from_error(err);
        }

        let request: CreateProductRequest = match body.into_json().await {
            Ok(request) => request,
            Err(_) => return CreateProductResponse::BadRequest(invalid_body()),
        };

        match self.create_use_case.execute(request.into()).await {
            Ok(product) => CreateProductResponse::Created(Json(product.into())),
            Err(err) => CreateProductResponse::from_error(err),
        }
    }

    /// List all products
    ///
    /// Returns the whole catalog in insertion order.
    #[oai(path = "/products", method = "get", tag = "ApiTags::Products")]
    async fn get_all_products(&self) -> GetAllProductsResponse {
        match self.get_all_use_case.execute().await {
            Ok(products) => {
                let responses: Vec<ProductResponse> =
                    products.into_iter().map(|p| p.into()).collect();
                GetAllProductsResponse::Ok(Json(responses))
            }
            Err(err) => {
                let (_status, json) = err.into_error_response();
                GetAllProductsResponse::InternalError(json)
            }
        }
    }

    /// Get a product by ID
    ///
    /// Ids are opaque, so any unknown id is a 404.
    #[oai(path = "/products/:id", method = "get", tag = "ApiTags::Products")]
    async fn get_product_by_id(&self, id: Path<String>) -> GetProductByIdResponse {
        match self
            .get_by_id_use_case
            .execute(GetProductByIdParams {
                id: ProductId::new(id.0),
            })
            .await
        {
            Ok(product) => GetProductByIdResponse::Ok(Json(product.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => GetProductByIdResponse::NotFound(json),
                    _ => GetProductByIdResponse::InternalError(json),
                }
            }
        }
    }

    /// Update a product
    ///
    /// Partial update merged over the stored record.
    #[oai(path = "/products/:id", method = "put", tag = "ApiTags::Products")]
    async fn update_product(&self, id: Path<String>, body: Body) -> UpdateProductResponse {
        if let Err(err) = self.authorize(WriteOperation::Update) {
            return UpdateProductResponse::from_error(err);
        }

        let request: UpdateProductRequest = match body.into_json().await {
            Ok(request) => request,
            Err(_) => return UpdateProductResponse::BadRequest(invalid_body()),
        };

        match self
            .update_use_case
            .execute(request.into_params(ProductId::new(id.0)))
            .await
        {
            Ok(product) => UpdateProductResponse::Ok(Json(product.into())),
            Err(err) => UpdateProductResponse::from_error(err),
        }
    }

    /// Delete a product
    #[oai(path = "/products/:id", method = "delete", tag = "ApiTags::Products")]
    async fn delete_product(&self, id: Path<String>) -> DeleteProductResponse {
        if let Err(err) = self.authorize(WriteOperation::Delete) {
            return DeleteProductResponse::from_error(err);
        }

        match self
            .delete_use_case
            .execute(DeleteProductParams {
                id: ProductId::new(id.0),
            })
            .await
        {
            Ok(()) => DeleteProductResponse::NoContent,
            Err(err) => DeleteProductResponse::from_error(err),
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum CreateProductResponse {
    #[oai(status = 201)]
    Created(Json<ProductResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 403)]
    Forbidden(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

impl CreateProductResponse {
    fn from_error(err: ProductError) -> Self {
        let (status, json) = err.into_error_response();
        match status.as_u16() {
            400 => CreateProductResponse::BadRequest(json),
            403 => CreateProductResponse::Forbidden(json),
            _ => CreateProductResponse::InternalError(json),
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetAllProductsResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<ProductResponse>>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetProductByIdResponse {
    #[oai(status = 200)]
    Ok(Json<ProductResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum UpdateProductResponse {
    #[oai(status = 200)]
    Ok(Json<ProductResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 403)]
    Forbidden(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

impl UpdateProductResponse {
    fn from_error(err: ProductError) -> Self {
        let (status, json) = err.into_error_response();
        match status.as_u16() {
            400 => UpdateProductResponse::BadRequest(json),
            403 => UpdateProductResponse::Forbidden(json),
            404 => UpdateProductResponse::NotFound(json),
            _ => UpdateProductResponse::InternalError(json),
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum DeleteProductResponse {
    #[oai(status = 204)]
    NoContent,
    #[oai(status = 403)]
    Forbidden(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

impl DeleteProductResponse {
    fn from_error(err: ProductError) -> Self {
        let (status, json) = err.into_error_response();
        match status.as_u16() {
            403 => DeleteProductResponse::Forbidden(json),
            404 => DeleteProductResponse::NotFound(json),
            _ => DeleteProductResponse::InternalError(json),
        }
    }
}
