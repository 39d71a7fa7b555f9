//! Submission Workflows
//!
//! One request per form: join the form state machines, the session and
//! the API. All failures end here; none escape to the caller's caller
//! except token persistence problems.

use crate::client::RecidivismApi;
use crate::error::StoreError;
use crate::login::LoginForm;
use crate::prediction::PredictionPanel;
use crate::session::{Route, Session, TokenStore};

/// Run one login attempt.
///
/// Returns the route to navigate to: `/predict` on success, `/login`
/// (unchanged) on failure. Session state is untouched on failure. A token
/// that cannot be stored is returned as the error, with the form released.
pub async fn submit_login<A, S>(
    api: &A,
    session: &mut Session<S>,
    form: &mut LoginForm,
) -> Result<Route, StoreError>
where
    A: RecidivismApi + ?Sized,
    S: TokenStore,
{
    let credentials = match form.begin() {
        Some(credentials) => credentials,
        None => return Ok(Route::Login),
    };

    match api.login(&credentials).await {
        Ok(response) => {
            if let Err(e) = session.login(&response.token) {
                form.fail_to_persist(&e);
                return Err(e);
            }
            form.succeed();
            tracing::info!(username = %credentials.username, "Logged in");
            Ok(Route::Predict)
        }
        Err(e) => {
            form.fail(&e);
            Ok(Route::Login)
        }
    }
}

/// Run one prediction request if the form allows it.
///
/// Returns `false` when nothing was sent (invalid form or request
/// already in flight).
pub async fn submit_prediction<A>(api: &A, panel: &mut PredictionPanel) -> bool
where
    A: RecidivismApi + ?Sized,
{
    let request = match panel.begin_submit() {
        Some(request) => request,
        None => return false,
    };

    let outcome = api.predict(&request).await;
    panel.finish(outcome);
    true
}
