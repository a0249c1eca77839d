//! Address routes, scoped through the owning contact.
//!
//! Every handler first confirms that the path's contact belongs to the
//! current user; only then does it touch the addresses table. This is what
//! makes the user -> contact -> address ownership chain transitive.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::app::AppState;
use crate::error::ApiError;
use crate::extractors::CurrentUser;
use crate::response::DataBody;
use domain::models::Address;
use persistence::repositories::{AddressRepository, ContactRepository};

const CONTACT_NOT_FOUND: &str = "Contact not found";
const ADDRESS_NOT_FOUND: &str = "Address not found";

/// Address information in responses.
#[derive(Debug, Clone, Serialize)]
pub struct AddressResponse {
    pub id: i64,
    pub street: Option<String>,
    pub city: Option<String>,
    pub province: Option<String>,
    pub country: String,
    pub postal_code: String,
}

impl From<Address> for AddressResponse {
    fn from(address: Address) -> Self {
        Self {
            id: address.id,
            street: address.street,
            city: address.city,
            province: address.province,
            country: address.country,
            postal_code: address.postal_code,
        }
    }
}

/// Fails with 404 unless the contact exists and is owned by `username`.
async fn ensure_contact_owned(
    state: &AppState,
    username: &str,
    contact_id: i64,
) -> Result<(), ApiError> {
    let owned = ContactRepository::new(state.pool.clone())
        .exists(username, contact_id)
        .await?;

    if owned {
        Ok(())
    } else {
        Err(ApiError::NotFound(CONTACT_NOT_FOUND.to_string()))
    }
}

/// Request body for creating an address.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateAddressRequest {
    #[validate(length(max = 255, message = "Street must be at most 255 characters"))]
    pub street: Option<String>,

    #[validate(length(max = 100, message = "City must be at most 100 characters"))]
    pub city: Option<String>,

    #[validate(length(max = 100, message = "Province must be at most 100 characters"))]
    pub province: Option<String>,

    #[validate(
        length(min = 1, max = 100, message = "Country must be 1-100 characters"),
        custom(function = "shared::validation::validate_not_blank")
    )]
    pub country: String,

    #[validate(
        length(min = 1, max = 10, message = "Postal code must be 1-10 characters"),
        custom(function = "shared::validation::validate_not_blank")
    )]
    pub postal_code: String,
}

/// Create an address under a contact.
///
/// POST /api/contacts/:contact_id/addresses
pub async fn create_address(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(contact_id): Path<i64>,
    Json(request): Json<CreateAddressRequest>,
) -> Result<Json<DataBody<AddressResponse>>, ApiError> {
    request.validate()?;
    ensure_contact_owned(&state, &user.username, contact_id).await?;

    let address = AddressRepository::new(state.pool.clone())
        .create(
            contact_id,
            request.street.as_deref(),
            request.city.as_deref(),
            request.province.as_deref(),
            &request.country,
            &request.postal_code,
        )
        .await?;

    Ok(Json(DataBody::new(address.into())))
}

/// Get an address by id.
///
/// GET /api/contacts/:contact_id/addresses/:address_id
pub async fn get_address(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path((contact_id, address_id)): Path<(i64, i64)>,
) -> Result<Json<DataBody<AddressResponse>>, ApiError> {
    ensure_contact_owned(&state, &user.username, contact_id).await?;

    let address = AddressRepository::new(state.pool.clone())
        .find_by_id(contact_id, address_id)
        .await?
        .ok_or_else(|| ApiError::NotFound(ADDRESS_NOT_FOUND.to_string()))?;

    Ok(Json(DataBody::new(address.into())))
}

/// List all addresses of a contact.
///
/// GET /api/contacts/:contact_id/addresses
pub async fn list_addresses(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(contact_id): Path<i64>,
) -> Result<Json<DataBody<Vec<AddressResponse>>>, ApiError> {
    ensure_contact_owned(&state, &user.username, contact_id).await?;

    let addresses = AddressRepository::new(state.pool.clone())
        .list_by_contact(contact_id)
        .await?;

    Ok(Json(DataBody::new(
        addresses.into_iter().map(AddressResponse::from).collect(),
    )))
}

/// Request body for updating an address. All fields are optional; only
/// provided fields are applied.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateAddressRequest {
    #[validate(length(max = 255, message = "Street must be at most 255 characters"))]
    pub street: Option<String>,

    #[validate(length(max = 100, message = "City must be at most 100 characters"))]
    pub city: Option<String>,

    #[validate(length(max = 100, message = "Province must be at most 100 characters"))]
    pub province: Option<String>,

    #[validate(
        length(min = 1, max = 100, message = "Country must be 1-100 characters"),
        custom(function = "shared::validation::validate_not_blank")
    )]
    pub country: Option<String>,

    #[validate(
        length(min = 1, max = 10, message = "Postal code must be 1-10 characters"),
        custom(function = "shared::validation::validate_not_blank")
    )]
    pub postal_code: Option<String>,
}

/// Update an address.
///
/// PUT /api/contacts/:contact_id/addresses/:address_id
pub async fn update_address(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path((contact_id, address_id)): Path<(i64, i64)>,
    Json(request): Json<UpdateAddressRequest>,
) -> Result<Json<DataBody<AddressResponse>>, ApiError> {
    request.validate()?;
    ensure_contact_owned(&state, &user.username, contact_id).await?;

    let repo = AddressRepository::new(state.pool.clone());

    let existing = repo
        .find_by_id(contact_id, address_id)
        .await?
        .ok_or_else(|| ApiError::NotFound(ADDRESS_NOT_FOUND.to_string()))?;

    // Merge the provided fields over the stored record.
    let street = request.street.or(existing.street);
    let city = request.city.or(existing.city);
    let province = request.province.or(existing.province);
    let country = request.country.unwrap_or(existing.country);
    let postal_code = request.postal_code.unwrap_or(existing.postal_code);

    let updated = repo
        .update(
            contact_id,
            address_id,
            street.as_deref(),
            city.as_deref(),
            province.as_deref(),
            &country,
            &postal_code,
        )
        .await?
        .ok_or_else(|| ApiError::NotFound(ADDRESS_NOT_FOUND.to_string()))?;

    Ok(Json(DataBody::new(updated.into())))
}

/// Delete an address.
///
/// DELETE /api/contacts/:contact_id/addresses/:address_id
///
/// Deleting the same address twice succeeds once; the second call is 404.
pub async fn delete_address(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path((contact_id, address_id)): Path<(i64, i64)>,
) -> Result<Json<DataBody<bool>>, ApiError> {
    ensure_contact_owned(&state, &user.username, contact_id).await?;

    let deleted = AddressRepository::new(state.pool.clone())
        .delete(contact_id, address_id)
        .await?;

    if !deleted {
        return Err(ApiError::NotFound(ADDRESS_NOT_FOUND.to_string()));
    }

    Ok(Json(DataBody::new(true)))
}
