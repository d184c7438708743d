use dioxus::prelude::*;
use store::User;
use ui::use_auth;

use crate::Route;

/// The signed-in user, for pages that need one. Once the session has been restored,
/// visitors without a user are sent to the login page.
pub(crate) fn use_signed_in_user() -> Option<User> {
    let auth = use_auth();
    let nav = use_navigator();

    use_effect(move || {
        let state = auth();
        if !state.loading && state.user.is_none() {
            nav.replace(Route::Login {});
        }
    });

    auth().user
}
