use crate::{
    api::{ApiClient, ApiError, Identity, LoginRequest, SignupRequest},
    pages::login::repository::AuthRepository,
};
use leptos::*;
use std::rc::Rc;

type AuthContext = (ReadSignal<AuthState>, WriteSignal<AuthState>);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionPhase {
    /// Startup, the identity check has not answered yet.
    #[default]
    Unknown,
    Authenticated,
    Anonymous,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuthState {
    pub phase: SessionPhase,
    pub user: Option<Identity>,
}

impl AuthState {
    pub fn authenticated(user: Identity) -> Self {
        Self {
            phase: SessionPhase::Authenticated,
            user: Some(user),
        }
    }

    pub fn anonymous() -> Self {
        Self {
            phase: SessionPhase::Anonymous,
            user: None,
        }
    }

    pub fn authenticate(&mut self, user: Identity) {
        self.phase = SessionPhase::Authenticated;
        self.user = Some(user);
    }

    pub fn clear(&mut self) {
        self.phase = SessionPhase::Anonymous;
        self.user = None;
    }

    pub fn is_authenticated(&self) -> bool {
        self.phase == SessionPhase::Authenticated
    }
}

fn auth_repository() -> AuthRepository {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    AuthRepository::new_with_client(Rc::new(api))
}

fn create_auth_context() -> AuthContext {
    let (auth_state, set_auth_state) = create_signal(AuthState::default());
    let repo = auth_repository();
    spawn_local(async move {
        restore_session(&repo, set_auth_state).await;
    });
    (auth_state, set_auth_state)
}

#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let ctx = create_auth_context();
    provide_context::<AuthContext>(ctx);
    view! { <>{children()}</> }
}

pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().unwrap_or_else(|| create_signal(AuthState::default()))
}

pub async fn restore_session(repo: &AuthRepository, set_auth_state: WriteSignal<AuthState>) {
    match repo.current_user().await {
        Ok(user) => {
            log::debug!("session restored for user {}", user.id);
            set_auth_state.update(|state| state.authenticate(user));
        }
        Err(err) => {
            log::warn!("session check failed: {}", err);
            set_auth_state.update(|state| state.clear());
        }
    }
}

pub async fn login_request(
    request: LoginRequest,
    repo: &AuthRepository,
    set_auth_state: WriteSignal<AuthState>,
) -> Result<Identity, ApiError> {
    let response = repo.login(request).await?;
    set_auth_state.update(|state| state.authenticate(response.user.clone()));
    Ok(response.user)
}

pub async fn signup_request(
    request: SignupRequest,
    repo: &AuthRepository,
    set_auth_state: WriteSignal<AuthState>,
) -> Result<Identity, ApiError> {
    let response = repo.signup(request).await?;
    set_auth_state.update(|state| state.authenticate(response.user.clone()));
    Ok(response.user)
}

/// Ends the local session even when the backend call fails; the error is still returned.
pub async fn logout(
    repo: &AuthRepository,
    set_auth_state: WriteSignal<AuthState>,
) -> Result<(), ApiError> {
    let result = repo.logout().await;
    if let Err(err) = &result {
        log::warn!("logout request failed: {}", err);
    }
    set_auth_state.update(|state| state.clear());
    result
}

pub fn use_login_action() -> Action<LoginRequest, Result<Identity, ApiError>> {
    let (_auth, set_auth) = use_auth();
    let repo = auth_repository();

    create_action(move |request: &LoginRequest| {
        let payload = request.clone();
        let repo = repo.clone();
        async move { login_request(payload, &repo, set_auth).await }
    })
}

pub fn use_signup_action() -> Action<SignupRequest, Result<Identity, ApiError>> {
    let (_auth, set_auth) = use_auth();
    let repo = auth_repository();

    create_action(move |request: &SignupRequest| {
        let payload = request.clone();
        let repo = repo.clone();
        async move { signup_request(payload, &repo, set_auth).await }
    })
}

pub fn use_logout_action() -> Action<(), Result<(), ApiError>> {
    let (_auth, set_auth) = use_auth();
    let repo = auth_repository();

    create_action(move |_: &()| {
        let repo = repo.clone();
        async move { logout(&repo, set_auth).await }
    })
}
