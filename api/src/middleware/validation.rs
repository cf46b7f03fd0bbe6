//! Request validation extractors
//!
//! Each extractor checks the request body or query against its schema
//! before the handler runs. A rejection answers 400 with the schema's
//! message and the handler is never called.

use std::collections::HashSet;

use actix_web::{dev::Payload, web, Error, FromRequest, HttpRequest};
use futures_util::future::LocalBoxFuture;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use std::future::{ready, Ready};
use validator::Validate;

use pb_core::domain::entities::{ContactFilter, ContactPatch, NewContact};
use pb_core::errors::{DomainError, ValidationError};
use pb_shared::types::pagination::{DEFAULT_LIMIT, DEFAULT_PAGE, MAX_LIMIT};
use pb_shared::validation::parse_bool_flag;
use pb_shared::Pagination;

use crate::dto::{ContactFieldsPatch, CredentialsRequest, EmailRequest, NewContactRequest};
use crate::handlers::error::ApiError;

/// Contact keys in the order they are checked
const CONTACT_FIELDS: [&str; 3] = ["name", "email", "phone"];

/// Read the body as JSON; an empty body counts as `{}`
fn json_body<T, F>(req: &HttpRequest, payload: &mut Payload, check: F) -> LocalBoxFuture<'static, Result<T, Error>>
where
    T: 'static,
    F: FnOnce(Value) -> Result<T, DomainError> + 'static,
{
    let bytes = web::Bytes::from_request(req, payload);
    let path = req.path().to_string();

    Box::pin(async move {
        let bytes = bytes.await?;
        let body = if bytes.iter().all(u8::is_ascii_whitespace) {
            Value::Object(Map::new())
        } else {
            serde_json::from_slice(&bytes)
                .map_err(|e| ApiError::InvalidJson(format!("Invalid JSON body: {}", e)))?
        };

        check(body).map_err(|error| {
            tracing::debug!(path = %path, error = %error, "Request body rejected");
            ApiError::from(error).into()
        })
    })
}

/// Validate the contact keys of `body` against `T`
///
/// Returns the first failing key: known keys in check order (wrong type,
/// missing when required, or rule violation), then unknown keys.
fn contact_fields<T>(body: &Value) -> Result<T, String>
where
    T: DeserializeOwned + Validate,
{
    let object = body.as_object().ok_or_else(|| String::from("body"))?;

    let mut strings = Map::new();
    let mut failed: Vec<&str> = Vec::new();
    for key in CONTACT_FIELDS {
        match object.get(key) {
            Some(Value::String(value)) => {
                strings.insert(key.to_string(), Value::String(value.clone()));
            }
            Some(_) => failed.push(key),
            None => {}
        }
    }

    let fields: T =
        serde_json::from_value(Value::Object(strings)).map_err(|_| String::from("body"))?;

    if let Err(errors) = fields.validate() {
        let field_errors = errors.field_errors();
        failed.extend(
            CONTACT_FIELDS
                .iter()
                .copied()
                .filter(|key| field_errors.contains_key(*key)),
        );
    }

    if let Some(key) = CONTACT_FIELDS.iter().find(|key| failed.contains(*key)) {
        return Err(key.to_string());
    }

    if let Some(unknown) = object
        .keys()
        .find(|key| !CONTACT_FIELDS.contains(&key.as_str()))
    {
        return Err(unknown.clone());
    }

    Ok(fields)
}

/// Body of `POST /api/contacts`
#[derive(Debug, Clone)]
pub struct ValidatedContact(pub NewContact);

impl FromRequest for ValidatedContact {
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        json_body(req, payload, |body| {
            contact_fields::<NewContactRequest>(&body)
                .map(|fields| ValidatedContact(fields.into()))
                .map_err(|key| ValidationError::missing(key).into())
        })
    }
}

/// Body of `PUT /api/contacts/{id}`
#[derive(Debug, Clone)]
pub struct ValidatedContactPatch(pub ContactPatch);

impl FromRequest for ValidatedContactPatch {
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        json_body(req, payload, |body| {
            let empty = body.as_object().map_or(true, Map::is_empty);
            if empty {
                return Err(ValidationError::MissingFields.into());
            }

            contact_fields::<ContactFieldsPatch>(&body)
                .map(|fields| ValidatedContactPatch(fields.into()))
                .map_err(|_| ValidationError::MissingFields.into())
        })
    }
}

/// Body of `PATCH /api/contacts/{id}/favorite`
#[derive(Debug, Clone, Copy)]
pub struct ValidatedFavorite(pub bool);

fn favorite_flag(body: &Value) -> Option<bool> {
    let object = body.as_object()?;
    if object.len() != 1 {
        return None;
    }

    match object.get("favorite")? {
        Value::Bool(flag) => Some(*flag),
        Value::String(text) => parse_bool_flag(text),
        _ => None,
    }
}

impl FromRequest for ValidatedFavorite {
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        json_body(req, payload, |body| {
            favorite_flag(&body)
                .map(ValidatedFavorite)
                .ok_or_else(|| ValidationError::MissingFavorite.into())
        })
    }
}

/// Query of `GET /api/contacts`
#[derive(Debug, Clone, Copy)]
pub struct ContactQuery(pub ContactFilter);

/// Positive whole number, written as an integer or an integral decimal
fn positive_integer(value: &str) -> Option<u32> {
    let number: f64 = value.trim().parse().ok()?;
    if !number.is_finite() || number.fract() != 0.0 || number < 1.0 || number > u32::MAX as f64 {
        return None;
    }
    Some(number as u32)
}

/// Each key may appear once; a repeated key is rejected like an unknown one
fn parse_contact_query(query: &[(String, String)]) -> Option<ContactFilter> {
    let mut page = DEFAULT_PAGE;
    let mut limit = DEFAULT_LIMIT;
    let mut favorite = None;
    let mut seen = HashSet::new();

    for (key, value) in query {
        if !seen.insert(key.as_str()) {
            return None;
        }

        match key.as_str() {
            "page" => page = positive_integer(value)?,
            "limit" => {
                limit = positive_integer(value).filter(|limit| *limit <= MAX_LIMIT)?;
            }
            "favorite" => favorite = Some(parse_bool_flag(value)?),
            _ => return None,
        }
    }

    Some(ContactFilter::new(Pagination::new(page, limit), favorite))
}

impl FromRequest for ContactQuery {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let filter = web::Query::<Vec<(String, String)>>::from_query(req.query_string())
            .ok()
            .and_then(|query| parse_contact_query(&query));

        ready(match filter {
            Some(filter) => Ok(ContactQuery(filter)),
            None => {
                tracing::debug!(query = %req.query_string(), "Contact query rejected");
                Err(ApiError::from(ValidationError::WrongQueryField).into())
            }
        })
    }
}

/// Body of register and login: `{email, password}`
#[derive(Debug, Clone)]
pub struct ValidatedCredentials {
    pub email: String,
    pub password: String,
}

fn credentials(body: &Value) -> Result<CredentialsRequest, ValidationError> {
    let object = body
        .as_object()
        .ok_or_else(|| ValidationError::missing("email"))?;

    let field = |key: &str, invalid: ValidationError| -> Result<String, ValidationError> {
        match object.get(key) {
            None | Some(Value::Null) => Err(ValidationError::missing(key)),
            Some(Value::String(value)) => Ok(value.clone()),
            Some(_) => Err(invalid),
        }
    };

    let request = CredentialsRequest {
        email: field("email", ValidationError::InvalidEmail)?,
        password: field("password", ValidationError::InvalidPassword)?,
    };

    if let Err(errors) = request.validate() {
        let field_errors = errors.field_errors();
        if field_errors.contains_key("email") {
            return Err(ValidationError::InvalidEmail);
        }
        return Err(ValidationError::InvalidPassword);
    }

    Ok(request)
}

impl FromRequest for ValidatedCredentials {
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        json_body(req, payload, |body| {
            credentials(&body)
                .map(|request| ValidatedCredentials {
                    email: request.email,
                    password: request.password,
                })
                .map_err(DomainError::from)
        })
    }
}

/// Body of the verification resend: `{email}`
#[derive(Debug, Clone)]
pub struct ValidatedEmail(pub String);

fn resend_email(body: &Value) -> Option<String> {
    let email = body.as_object()?.get("email")?.as_str()?.to_string();
    let request = EmailRequest { email };
    request.validate().ok()?;
    Some(request.email)
}

impl FromRequest for ValidatedEmail {
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        json_body(req, payload, |body| {
            resend_email(&body)
                .map(ValidatedEmail)
                .ok_or_else(|| ValidationError::MissingEmail.into())
        })
    }
}

/// Body of the subscription change: `{subscription}`
///
/// Only presence is checked here; the tier itself is checked by the service.
#[derive(Debug, Clone)]
pub struct SubscriptionBody(pub String);

fn subscription_value(body: &Value) -> Result<String, DomainError> {
    match body.get("subscription") {
        None | Some(Value::Null) => Err(ValidationError::missing("subscription").into()),
        Some(Value::String(value)) => Ok(value.clone()),
        Some(_) => Err(pb_core::errors::AuthError::InvalidSubscription.into()),
    }
}

impl FromRequest for SubscriptionBody {
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        json_body(req, payload, |body| subscription_value(&body).map(SubscriptionBody))
    }
}
