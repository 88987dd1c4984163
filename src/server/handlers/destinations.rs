use axum::extract::{Extension, Json};
use axum::http::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::entities::{Destination, NewDestination};
use crate::error::{create_failed_error, fetch_failed_error, missing_fields_error, Error};
use crate::server::DynAPI;

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateParams {
    #[serde(default)]
    name: Value,
    #[serde(default)]
    budget: Value,
    #[serde(default)]
    travel_time: Value,
    #[serde(default)]
    route: Value,
}

pub async fn list(Extension(api): Extension<DynAPI>) -> Result<Json<Vec<Destination>>, Error> {
    let destinations = api.list_destinations().await.map_err(|err| {
        tracing::error!("failed to fetch destinations: {:?}", err);
        fetch_failed_error()
    })?;

    Ok(destinations.into())
}

pub async fn create(
    Extension(api): Extension<DynAPI>,
    Json(params): Json<CreateParams>,
) -> Result<(StatusCode, Json<Destination>), Error> {
    let fields = validate(&params).ok_or_else(missing_fields_error)?;

    let destination = api.create_destination(fields).await.map_err(|err| {
        tracing::error!("failed to add destination: {:?}", err);
        create_failed_error()
    })?;

    Ok((StatusCode::CREATED, destination.into()))
}

/// Checks the four required fields against wire falsiness: null, false, 0
/// and "" all count as missing. `budget` and `travelTime` are then coerced
/// to integers; a value that survives the presence check but is not numeric
/// becomes the stored null sentinel.
fn validate(params: &CreateParams) -> Option<NewDestination> {
    if !present(&params.name)
        || !present(&params.budget)
        || !present(&params.travel_time)
        || !present(&params.route)
    {
        return None;
    }

    Some(NewDestination {
        name: text(&params.name)?,
        budget: coerce_int(&params.budget),
        travel_time: coerce_int(&params.travel_time),
        route: text(&params.route)?,
    })
}

fn present(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().map_or(true, |n| n != 0.0),
        Value::String(text) => !text.is_empty(),
        _ => true,
    }
}

fn text(value: &Value) -> Option<String> {
    value.as_str().map(str::to_owned)
}

fn coerce_int(value: &Value) -> Option<i64> {
    match value {
        Value::Number(number) => number
            .as_i64()
            .or_else(|| number.as_f64().map(|n| n as i64)),
        Value::String(text) => {
            let text = text.trim();

            text.parse::<i64>().ok().or_else(|| {
                text.parse::<f64>()
                    .ok()
                    .filter(|n| n.is_finite())
                    .map(|n| n as i64)
            })
        }
        _ => None,
    }
}
