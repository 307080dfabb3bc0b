//! The services talking to the library backend (by sending GET and POST requests from the browser)

use bookshelf_shared::{
    urls::ApiOrigin, ApiError, Book, CreateScheduleRequest, CreateScheduleResponse, Schedule,
};
use reqwasm::http::{Request, Response};
use serde::de::DeserializeOwned;

/// Check the status and decode the body of a response
async fn read_json<T: DeserializeOwned>(res: Response) -> Result<T, ApiError> {
    if !res.ok() {
        return Err(ApiError::Status {
            status: res.status(),
            status_text: res.status_text(),
        });
    }
    res.json::<T>()
        .await
        .map_err(|err| ApiError::Decode(err.to_string()))
}

/// Search books by subject
pub async fn get_books(origin: &ApiOrigin, subject: &str) -> Result<Vec<Book>, ApiError> {
    let res = Request::get(&origin.books_url(subject))
        .send()
        .await
        .map_err(|err| ApiError::Network(err.to_string()))?;
    read_json(res).await
}

/// List all pickup schedules
pub async fn get_pickup_schedules(origin: &ApiOrigin) -> Result<Vec<Schedule>, ApiError> {
    let res = Request::get(&origin.pickup_schedules_url())
        .send()
        .await
        .map_err(|err| ApiError::Network(err.to_string()))?;
    read_json(res).await
}

/// Ask the backend to schedule a pickup with a POST request
pub async fn create_pickup_schedule(
    origin: &ApiOrigin,
    request: &CreateScheduleRequest,
) -> Result<CreateScheduleResponse, ApiError> {
    let body = serde_json::to_string(request).map_err(|err| ApiError::Encode(err.to_string()))?;
    let res = Request::post(&origin.create_pickup_schedule_url())
        .body(body)
        .send()
        .await
        .map_err(|err| ApiError::Network(err.to_string()))?;
    read_json(res).await
}
