use crate::dtos::{PersonInput, PersonResponse};
use crate::error::{AppError, ErrorResponse};
use crate::models::Person;
use crate::startup::AppState;
use axum::{
    extract::{Path, State},
    Json,
};
use futures::stream::TryStreamExt;
use mongodb::bson::doc;
use mongodb::options::{FindOneAndUpdateOptions, ReturnDocument};

/// List every person in the collection, in the store's natural order.
#[utoipa::path(
    get,
    path = "/people",
    responses(
        (status = 200, description = "All person records", body = [PersonResponse]),
        (status = 418, description = "Store operation failed", body = ErrorResponse)
    ),
    tag = "People"
)]
pub async fn list_people(
    State(state): State<AppState>,
) -> Result<Json<Vec<PersonResponse>>, AppError> {
    let mut cursor = state
        .db
        .people()
        .find(doc! {}, None)
        .await
        .map_err(AppError::store_teapot)?;

    let mut people = Vec::new();
    while let Some(person) = cursor.try_next().await.map_err(AppError::store_teapot)? {
        people.push(PersonResponse::from(person));
    }

    Ok(Json(people))
}

/// Create a person from whatever fields the body provides. The service
/// assigns the id; nothing is validated.
#[utoipa::path(
    post,
    path = "/people",
    request_body = PersonInput,
    responses(
        (status = 200, description = "The created record, including its assigned id", body = PersonResponse),
        (status = 418, description = "Store operation failed", body = ErrorResponse)
    ),
    tag = "People"
)]
pub async fn create_person(
    State(state): State<AppState>,
    Json(input): Json<PersonInput>,
) -> Result<Json<PersonResponse>, AppError> {
    let person = Person::new(input.name, input.image, input.title);

    state
        .db
        .people()
        .insert_one(&person, None)
        .await
        .map_err(AppError::store_teapot)?;

    tracing::info!(person_id = %person.id, "Created person");

    Ok(Json(PersonResponse::from(person)))
}

/// Merge the provided fields into the addressed record and return it after
/// the update. A miss is not an error: the body is `null` with status 200.
#[utoipa::path(
    put,
    path = "/people/{id}",
    params(("id" = String, Path, description = "Person id")),
    request_body = PersonInput,
    responses(
        (status = 200, description = "The updated record, or null when no record matched", body = PersonResponse),
        (status = 400, description = "Store operation failed", body = ErrorResponse)
    ),
    tag = "People"
)]
pub async fn update_person(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(input): Json<PersonInput>,
) -> Result<Json<Option<PersonResponse>>, AppError> {
    let people = state.db.people();
    let update = input.to_update_document();

    // An empty body has nothing to merge; return the current record (or null)
    // with the same success semantics as a real update.
    let updated = if update.is_empty() {
        people
            .find_one(doc! { "_id": &id }, None)
            .await
            .map_err(AppError::store_bad_request)?
    } else {
        let options = FindOneAndUpdateOptions::builder()
            .return_document(ReturnDocument::After)
            .build();
        people
            .find_one_and_update(doc! { "_id": &id }, doc! { "$set": update }, options)
            .await
            .map_err(AppError::store_bad_request)?
    };

    Ok(Json(updated.map(PersonResponse::from)))
}

/// Remove the addressed record and return it as it existed before removal,
/// or `null` when no record matched.
#[utoipa::path(
    delete,
    path = "/people/{id}",
    params(("id" = String, Path, description = "Person id")),
    responses(
        (status = 200, description = "The removed record, or null when no record matched", body = PersonResponse),
        (status = 400, description = "Store operation failed", body = ErrorResponse)
    ),
    tag = "People"
)]
pub async fn delete_person(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Option<PersonResponse>>, AppError> {
    let removed = state
        .db
        .people()
        .find_one_and_delete(doc! { "_id": &id }, None)
        .await
        .map_err(AppError::store_bad_request)?;

    Ok(Json(removed.map(PersonResponse::from)))
}
