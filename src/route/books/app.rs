use axum::{routing::get, Router};

use crate::state::ApiState;

pub fn app() -> Router<ApiState> {
    Router::<ApiState>::new().route(
        "/book",
        get(super::get_book::get_book)
            .post(super::create_book::create_book)
            .put(super::update_book::replace_book)
            .patch(super::update_book::patch_book)
            .delete(super::delete_book::delete_book)
            .options(super::book_options::book_options),
    )
}
