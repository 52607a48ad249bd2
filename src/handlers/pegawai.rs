use actix_web::{web, HttpResponse};
use chrono::NaiveDate;
use log::error;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::json;
use validator::Validate;

use crate::db::pegawai::PegawaiStore;
use crate::errors::AppError;
use crate::models::pegawai::{Pegawai, PegawaiFields};
use crate::utils::validation::validate_payload;

const NOT_FOUND: &str = "Pegawai not found";
const FETCH_FAILED: &str = "Failed to fetch pegawai";
const CREATE_FAILED: &str = "Failed to create pegawai";
const UPDATE_FAILED: &str = "Failed to update pegawai";
const DELETE_FAILED: &str = "Failed to delete pegawai";

#[derive(Deserialize, Validate, Debug)]
pub struct NewPegawai {
    #[serde(alias = "name")]
    #[validate(length(min = 1, max = 60))]
    nm_pegawai: String,
    #[serde(alias = "address")]
    #[validate(length(min = 1, max = 100))]
    alamat_pegawai: String,
    #[serde(alias = "birth_date")]
    tgl_lahir_pegawai: NaiveDate,
    #[serde(alias = "status_id", deserialize_with = "status_id_from_number_or_string")]
    id_m_status_pegawai: i32,
}

/// Full replacement; empty strings are written as given.
#[derive(Deserialize, Validate, Debug)]
pub struct PegawaiUpdate {
    #[serde(alias = "name")]
    #[validate(length(max = 60))]
    nm_pegawai: String,
    #[serde(alias = "address")]
    #[validate(length(max = 100))]
    alamat_pegawai: String,
    #[serde(alias = "birth_date")]
    tgl_lahir_pegawai: NaiveDate,
    #[serde(alias = "status_id", deserialize_with = "status_id_from_number_or_string")]
    id_m_status_pegawai: i32,
}

impl From<NewPegawai> for PegawaiFields {
    fn from(input: NewPegawai) -> Self {
        PegawaiFields {
            nm_pegawai: input.nm_pegawai,
            alamat_pegawai: input.alamat_pegawai,
            tgl_lahir_pegawai: input.tgl_lahir_pegawai,
            id_m_status_pegawai: input.id_m_status_pegawai,
        }
    }
}

impl From<PegawaiUpdate> for PegawaiFields {
    fn from(input: PegawaiUpdate) -> Self {
        PegawaiFields {
            nm_pegawai: input.nm_pegawai,
            alamat_pegawai: input.alamat_pegawai,
            tgl_lahir_pegawai: input.tgl_lahir_pegawai,
            id_m_status_pegawai: input.id_m_status_pegawai,
        }
    }
}

#[derive(Serialize)]
struct CreatedPegawaiResponse {
    id: i32,
    #[serde(flatten)]
    pegawai: Pegawai,
}

#[derive(Serialize)]
struct UpdatedPegawaiResponse {
    id: i32,
    #[serde(flatten)]
    fields: PegawaiFields,
}

// HTML number inputs submit their value as a string.
fn status_id_from_number_or_string<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumberOrString {
        Number(i32),
        String(String),
    }

    match NumberOrString::deserialize(deserializer)? {
        NumberOrString::Number(n) => Ok(n),
        NumberOrString::String(s) => s
            .trim()
            .parse()
            .map_err(|_| serde::de::Error::custom(format!("invalid status id: {:?}", s))),
    }
}

/// A malformed id can never match a row, so it is reported as not found.
fn parse_id(raw: &str) -> Result<i32, AppError> {
    if raw.starts_with('+') {
        return Err(AppError::NotFound(NOT_FOUND.to_string()));
    }
    raw.parse()
        .map_err(|_| AppError::NotFound(NOT_FOUND.to_string()))
}

fn store_error(message: &'static str) -> impl Fn(sqlx::Error) -> AppError {
    move |err| {
        error!("{}: {:?}", message, err);
        AppError::DatabaseError(message.to_string())
    }
}

pub async fn get_pegawai_list<S: PegawaiStore>(store: web::Data<S>) -> Result<HttpResponse, AppError> {
    let rows = store.list().await.map_err(store_error(FETCH_FAILED))?;
    Ok(HttpResponse::Ok().json(rows))
}

pub async fn get_pegawai<S: PegawaiStore>(
    store: web::Data<S>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let id = parse_id(&id)?;

    let pegawai = store
        .find_by_id(id)
        .await
        .map_err(store_error(FETCH_FAILED))?
        .ok_or_else(|| AppError::NotFound(NOT_FOUND.to_string()))?;

    Ok(HttpResponse::Ok().json(pegawai))
}

pub async fn create_pegawai<S: PegawaiStore>(
    store: web::Data<S>,
    new_pegawai: web::Json<NewPegawai>,
) -> Result<HttpResponse, AppError> {
    validate_payload(&*new_pegawai)?;
    let fields = PegawaiFields::from(new_pegawai.into_inner());

    let pegawai = store
        .create(&fields)
        .await
        .map_err(store_error(CREATE_FAILED))?;

    Ok(HttpResponse::Created().json(CreatedPegawaiResponse {
        id: pegawai.id_pegawai,
        pegawai,
    }))
}

/// Responds with the submitted fields rather than re-reading the row.
pub async fn update_pegawai<S: PegawaiStore>(
    store: web::Data<S>,
    id: web::Path<String>,
    updates: web::Json<PegawaiUpdate>,
) -> Result<HttpResponse, AppError> {
    let id = parse_id(&id)?;
    validate_payload(&*updates)?;
    let fields = PegawaiFields::from(updates.into_inner());

    let updated = store
        .update(id, &fields)
        .await
        .map_err(store_error(UPDATE_FAILED))?;
    if !updated {
        return Err(AppError::NotFound(NOT_FOUND.to_string()));
    }

    Ok(HttpResponse::Ok().json(UpdatedPegawaiResponse { id, fields }))
}

pub async fn delete_pegawai<S: PegawaiStore>(
    store: web::Data<S>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let id = parse_id(&id)?;

    let deleted = store
        .delete(id)
        .await
        .map_err(store_error(DELETE_FAILED))?;
    if !deleted {
        return Err(AppError::NotFound(NOT_FOUND.to_string()));
    }

    Ok(HttpResponse::Ok().json(json!({
        "message": "Pegawai deleted successfully",
    })))
}
