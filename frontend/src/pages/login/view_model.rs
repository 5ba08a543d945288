use crate::api::{ApiError, Identity, LoginRequest};
use crate::state::auth;
use crate::utils::{redirect, validation::FieldErrors, validation::LoginForm};
use leptos::*;

#[derive(Clone, Copy)]
pub struct LoginViewModel {
    pub email: RwSignal<String>,
    pub password: RwSignal<String>,
    pub field_errors: RwSignal<FieldErrors>,
    pub error: RwSignal<Option<ApiError>>,
    pub redirect_target: Signal<String>,
    pub login_action: Action<LoginRequest, Result<Identity, ApiError>>,
}

/// Returns true when the login succeeded and the page should move on.
fn apply_login_result(
    result: Option<Result<Identity, ApiError>>,
    error: RwSignal<Option<ApiError>>,
    password: RwSignal<String>,
) -> bool {
    match result {
        Some(Ok(_)) => {
            error.set(None);
            true
        }
        Some(Err(err)) => {
            password.set(String::new());
            error.set(Some(err));
            false
        }
        None => false,
    }
}

impl LoginViewModel {
    /// `redirect_target` is where a successful login lands, already sanitized.
    pub fn new(redirect_target: Signal<String>) -> Self {
        let email = create_rw_signal(String::new());
        let password = create_rw_signal(String::new());
        let field_errors = create_rw_signal(FieldErrors::default());
        let error = create_rw_signal(None::<ApiError>);
        let login_action = auth::use_login_action();

        create_effect(move |_| {
            if apply_login_result(login_action.value().get(), error, password) {
                redirect::navigate_to(&redirect_target.get_untracked());
            }
        });

        Self {
            email,
            password,
            field_errors,
            error,
            redirect_target,
            login_action,
        }
    }

    pub fn form(&self) -> LoginForm {
        LoginForm {
            email: self.email.get_untracked(),
            password: self.password.get_untracked(),
        }
    }

    /// Validates and dispatches; returns whether a request was sent.
    pub fn submit(&self) -> bool {
        if self.login_action.pending().get_untracked() {
            return false;
        }
        match self.form().check() {
            Ok(request) => {
                self.field_errors.set(FieldErrors::default());
                self.error.set(None);
                self.login_action.dispatch(request);
                true
            }
            Err(errors) => {
                self.field_errors.set(errors);
                false
            }
        }
    }
}
