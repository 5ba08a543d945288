use crate::api::{ApiError, Identity, SignupRequest};
use crate::state::auth;
use crate::utils::{
    redirect,
    validation::{FieldErrors, SignupForm},
};
use leptos::*;

#[derive(Clone, Copy)]
pub struct RegisterViewModel {
    pub name: RwSignal<String>,
    pub email: RwSignal<String>,
    pub password: RwSignal<String>,
    pub field_errors: RwSignal<FieldErrors>,
    pub error: RwSignal<Option<ApiError>>,
    pub signup_action: Action<SignupRequest, Result<Identity, ApiError>>,
}

impl RegisterViewModel {
    pub fn new() -> Self {
        let name = create_rw_signal(String::new());
        let email = create_rw_signal(String::new());
        let password = create_rw_signal(String::new());
        let field_errors = create_rw_signal(FieldErrors::default());
        let error = create_rw_signal(None::<ApiError>);
        let signup_action = auth::use_signup_action();

        create_effect(move |_| match signup_action.value().get() {
            Some(Ok(_)) => {
                error.set(None);
                redirect::navigate_to(redirect::DEFAULT_AFTER_LOGIN);
            }
            Some(Err(err)) => error.set(Some(err)),
            None => {}
        });

        Self {
            name,
            email,
            password,
            field_errors,
            error,
            signup_action,
        }
    }

    pub fn form(&self) -> SignupForm {
        SignupForm {
            name: self.name.get_untracked(),
            email: self.email.get_untracked(),
            password: self.password.get_untracked(),
        }
    }

    pub fn submit(&self) -> bool {
        if self.signup_action.pending().get_untracked() {
            return false;
        }
        match self.form().check() {
            Ok(request) => {
                self.field_errors.set(FieldErrors::default());
                self.error.set(None);
                self.signup_action.dispatch(request);
                true
            }
            Err(errors) => {
                self.field_errors.set(errors);
                false
            }
        }
    }
}

impl Default for RegisterViewModel {
    fn default() -> Self {
        Self::new()
    }
}
