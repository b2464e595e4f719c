use axum::Json;
use tower_sessions::Session;

use super::store;
use crate::error::GameResult;
use crate::game::core::messages::{Ack, NameClaimed, NameStatus, SetNameRequest};

pub async fn check_name(session: Session) -> GameResult<Json<NameStatus>> {
    let identity = store::lookup(&session).await?;
    Ok(Json(NameStatus::from(identity)))
}

pub async fn set_name(
    session: Session,
    Json(SetNameRequest { username, avatar }): Json<SetNameRequest>,
) -> GameResult<Json<NameClaimed>> {
    let identity = store::claim(&session, &username, &avatar).await?;
    Ok(Json(NameClaimed {
        success: true,
        username: identity.name,
        avatar: identity.avatar,
    }))
}

pub async fn change_name(session: Session) -> GameResult<Json<Ack>> {
    store::clear(&session).await?;
    Ok(Json(Ack::ok()))
}
