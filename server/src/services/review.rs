//! Review services - Recensioni dei tester sulle app

use crate::core::{AppError, AppState};
use crate::dtos::{CreateReviewDTO, NewReviewDTO, ReviewDTO};
use crate::entities::User;
use crate::repositories::{Create, Read};
use axum::{
    Extension,
    extract::{Json, Path, State},
    http::StatusCode,
};
use chrono::Utc;
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};
use validator::Validate;

const DEFAULT_RATING: i32 = 5;

#[instrument(skip(state), fields(app_id = %app_id))]
pub async fn list_reviews(
    State(state): State<Arc<AppState>>,
    Path(app_id): Path<i32>,
) -> Result<Json<Vec<ReviewDTO>>, AppError> {
    debug!("Listing reviews");
    let reviews = state.review.find_by_app(&app_id).await?;

    info!("Found {} reviews", reviews.len());
    Ok(Json(reviews.into_iter().map(ReviewDTO::from).collect()))
}

#[instrument(skip(state, current_user, body), fields(user_id = %current_user.user_id, app_id = %body.app_id))]
pub async fn create_review(
    State(state): State<Arc<AppState>>,
    Extension(current_user): Extension<User>,
    Json(body): Json<NewReviewDTO>,
) -> Result<(StatusCode, Json<ReviewDTO>), AppError> {
    debug!("Submitting review");
    body.validate()?;

    if state.app.read(&body.app_id).await?.is_none() {
        warn!("Review for unknown app");
        return Err(AppError::bad_request("App not found"));
    }

    let review = state
        .review
        .create(&CreateReviewDTO {
            app_id: body.app_id,
            tester_id: current_user.user_id,
            rating: body.rating.unwrap_or(DEFAULT_RATING),
            content: body.content,
            image: body.image,
            created_at: Utc::now(),
        })
        .await?;

    info!("Review {} submitted", review.review_id);
    Ok((StatusCode::CREATED, Json(ReviewDTO::from(review))))
}
