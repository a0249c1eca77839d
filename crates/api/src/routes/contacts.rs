//! Contact routes: CRUD plus filtered search with paging.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::app::AppState;
use crate::error::ApiError;
use crate::extractors::CurrentUser;
use crate::response::{DataBody, PageBody};
use domain::models::{Contact, ContactSearchQuery};
use persistence::repositories::ContactRepository;
use shared::pagination::PageRequest;

const CONTACT_NOT_FOUND: &str = "Contact not found";

/// Contact information in responses.
///
/// Optional fields serialize as explicit nulls so a sparse contact still
/// has a stable shape.
#[derive(Debug, Clone, Serialize)]
pub struct ContactResponse {
    pub id: i64,
    pub first_name: String,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

impl From<Contact> for ContactResponse {
    fn from(contact: Contact) -> Self {
        Self {
            id: contact.id,
            first_name: contact.first_name,
            last_name: contact.last_name,
            email: contact.email,
            phone: contact.phone,
        }
    }
}

/// Request body for creating a contact.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateContactRequest {
    #[validate(
        length(min = 1, max = 100, message = "First name must be 1-100 characters"),
        custom(function = "shared::validation::validate_not_blank")
    )]
    pub first_name: String,

    #[validate(length(max = 100, message = "Last name must be at most 100 characters"))]
    pub last_name: Option<String>,

    #[validate(
        email(message = "Invalid email format"),
        length(max = 100, message = "Email must be at most 100 characters")
    )]
    pub email: Option<String>,

    #[validate(length(max = 20, message = "Phone must be at most 20 characters"))]
    pub phone: Option<String>,
}

/// Create a contact owned by the current user.
///
/// POST /api/contacts
pub async fn create_contact(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Json(request): Json<CreateContactRequest>,
) -> Result<Json<DataBody<ContactResponse>>, ApiError> {
    request.validate()?;

    let contact = ContactRepository::new(state.pool.clone())
        .create(
            &user.username,
            &request.first_name,
            request.last_name.as_deref(),
            request.email.as_deref(),
            request.phone.as_deref(),
        )
        .await?;

    Ok(Json(DataBody::new(contact.into())))
}

/// Get a contact by id.
///
/// GET /api/contacts/:contact_id
///
/// A contact owned by someone else is reported as not found, never as
/// forbidden.
pub async fn get_contact(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(contact_id): Path<i64>,
) -> Result<Json<DataBody<ContactResponse>>, ApiError> {
    let contact = ContactRepository::new(state.pool.clone())
        .find_by_id(&user.username, contact_id)
        .await?
        .ok_or_else(|| ApiError::NotFound(CONTACT_NOT_FOUND.to_string()))?;

    Ok(Json(DataBody::new(contact.into())))
}

/// Request body for updating a contact. All fields are optional; only
/// provided fields are applied.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateContactRequest {
    #[validate(
        length(min = 1, max = 100, message = "First name must be 1-100 characters"),
        custom(function = "shared::validation::validate_not_blank")
    )]
    pub first_name: Option<String>,

    #[validate(length(max = 100, message = "Last name must be at most 100 characters"))]
    pub last_name: Option<String>,

    #[validate(
        email(message = "Invalid email format"),
        length(max = 100, message = "Email must be at most 100 characters")
    )]
    pub email: Option<String>,

    #[validate(length(max = 20, message = "Phone must be at most 20 characters"))]
    pub phone: Option<String>,
}

/// Update a contact.
///
/// PUT /api/contacts/:contact_id
pub async fn update_contact(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(contact_id): Path<i64>,
    Json(request): Json<UpdateContactRequest>,
) -> Result<Json<DataBody<ContactResponse>>, ApiError> {
    request.validate()?;

    let repo = ContactRepository::new(state.pool.clone());

    let existing = repo
        .find_by_id(&user.username, contact_id)
        .await?
        .ok_or_else(|| ApiError::NotFound(CONTACT_NOT_FOUND.to_string()))?;

    // Merge the provided fields over the stored record.
    let first_name = request.first_name.unwrap_or(existing.first_name);
    let last_name = request.last_name.or(existing.last_name);
    let email = request.email.or(existing.email);
    let phone = request.phone.or(existing.phone);

    let updated = repo
        .update(
            &user.username,
            contact_id,
            &first_name,
            last_name.as_deref(),
            email.as_deref(),
            phone.as_deref(),
        )
        .await?
        .ok_or_else(|| ApiError::NotFound(CONTACT_NOT_FOUND.to_string()))?;

    Ok(Json(DataBody::new(updated.into())))
}

/// Delete a contact.
///
/// DELETE /api/contacts/:contact_id
pub async fn delete_contact(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(contact_id): Path<i64>,
) -> Result<Json<DataBody<bool>>, ApiError> {
    let deleted = ContactRepository::new(state.pool.clone())
        .delete(&user.username, contact_id)
        .await?;

    if !deleted {
        return Err(ApiError::NotFound(CONTACT_NOT_FOUND.to_string()));
    }

    Ok(Json(DataBody::new(true)))
}

/// Search the current user's contacts.
///
/// GET /api/contacts?name=&email=&phone=&page=&size=
///
/// Absent filters place no constraint. Pages past the end come back empty
/// with the requested page number echoed in the paging metadata.
pub async fn search_contacts(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Query(query): Query<ContactSearchQuery>,
) -> Result<Json<PageBody<ContactResponse>>, ApiError> {
    let page = PageRequest::new(query.page, query.size);

    let (contacts, total) = ContactRepository::new(state.pool.clone())
        .search(&user.username, &query, page)
        .await?;

    Ok(Json(PageBody {
        data: contacts.into_iter().map(ContactResponse::from).collect(),
        paging: page.paging(total),
    }))
}
