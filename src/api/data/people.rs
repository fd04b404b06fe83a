//! Person endpoints

use axum::extract::{Query, State};
use serde::Serialize;

use super::places::Address;
use super::{DataResponse, generate};
use crate::api::state::AppState;
use crate::api::types::DataQuery;
use crate::domain::generator::GeneratorContext;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub username: String,
    pub avatar: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUser {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub username: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Profile {
    pub user: ProfileUser,
    pub address: Address,
}

fn draw_profile_user(ctx: &mut GeneratorContext) -> ProfileUser {
    let first_name = ctx.first_name();
    let last_name = ctx.last_name();

    ProfileUser {
        email: ctx.email(&first_name, &last_name),
        username: ctx.username(&first_name, &last_name),
        first_name,
        last_name,
    }
}

/// GET /user
pub async fn user(State(state): State<AppState>, Query(query): Query<DataQuery>) -> DataResponse<User> {
    generate("/user", &state, &query, query.locale.as_deref(), state.count, |ctx| {
        let ProfileUser {
            first_name,
            last_name,
            email,
            username,
        } = draw_profile_user(ctx);

        User {
            first_name,
            last_name,
            email,
            username,
            avatar: ctx.avatar(),
        }
    })
}

/// GET /profile
pub async fn profile(
    State(state): State<AppState>,
    Query(query): Query<DataQuery>,
) -> DataResponse<Profile> {
    generate("/profile", &state, &query, query.locale.as_deref(), state.count, |ctx| Profile {
        user: draw_profile_user(ctx),
        address: Address::draw_without_coordinates(ctx),
    })
}
