//! Application state and effect dispatch.
//!
//! Screens never call other screens or the network directly; they return
//! [`Effect`]s, and the app executes them: navigation goes through the view
//! registry, API calls are spawned on the runtime with the session token
//! captured at spawn time, and their outcomes are routed back to the screen
//! that issued them.

use std::sync::mpsc;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::api::{ApiClient, ApiError, Flashcard, FlashcardFields, UserSession};
use crate::keyboard::KeyboardHub;
use crate::registry::{RegistryError, ViewId, ViewRegistry};
use crate::session::SessionContext;
use crate::ui::events::AppEvent;
use crate::ui::status::{StatusKind, StatusLine};
use crate::ui::views::{
    ChangePasswordScreen, CreateCardScreen, DeleteCardScreen, HomeScreen, OptionsScreen,
    ReviewScreen, Screen, SignInScreen, SignUpScreen, UpdateCardScreen,
};

/// A network call a screen wants made on its behalf.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ApiCall {
    SignUp {
        email: String,
        password: String,
        password_confirmation: String,
    },
    SignIn {
        email: String,
        password: String,
    },
    SignOut,
    ChangePassword {
        old: String,
        new: String,
    },
    CreateCard {
        fields: FlashcardFields,
    },
    UpdateCard {
        id: String,
        fields: FlashcardFields,
    },
    DeleteCard {
        id: String,
    },
    ListCards,
}

impl ApiCall {
    /// Sign-up and sign-in are the only anonymous calls.
    pub fn requires_token(&self) -> bool {
        !matches!(self, ApiCall::SignUp { .. } | ApiCall::SignIn { .. })
    }
}

/// Completion of an [`ApiCall`], delivered to the originating screen.
#[derive(Debug)]
pub enum ApiOutcome {
    SignedUp(Result<(), ApiError>),
    SignedIn(Result<UserSession, ApiError>),
    SignedOut(Result<(), ApiError>),
    PasswordChanged(Result<(), ApiError>),
    CardCreated(Result<Flashcard, ApiError>),
    CardUpdated(Result<(), ApiError>),
    CardDeleted(Result<(), ApiError>),
    CardsListed(Result<Vec<Flashcard>, ApiError>),
}

/// What a screen asks the app to do in response to an event.
#[derive(Debug)]
pub enum Effect {
    Navigate(ViewId),
    Call(ApiCall),
    ShowStatus(StatusKind, String),
    Quit,
}

pub struct App {
    registry: ViewRegistry<Box<dyn Screen>>,
    session: SessionContext,
    status: StatusLine,
    api: ApiClient,
    rt: tokio::runtime::Handle,
    events_tx: mpsc::Sender<AppEvent>,
    should_quit: bool,
}

impl App {
    /// Builds every screen, registers each with the view registry, and
    /// performs the initial transition to the home view.
    pub fn new(
        base_url: impl Into<String>,
        rt: tokio::runtime::Handle,
        events_tx: mpsc::Sender<AppEvent>,
    ) -> Result<Self, RegistryError> {
        let api = ApiClient::new(base_url);
        let hub = KeyboardHub::new();

        let mut registry: ViewRegistry<Box<dyn Screen>> = ViewRegistry::new();
        registry.register(ViewId::Home, Box::new(HomeScreen::new()))?;
        registry.register(ViewId::SignUp, Box::new(SignUpScreen::new()))?;
        registry.register(ViewId::SignIn, Box::new(SignInScreen::new()))?;
        registry.register(ViewId::Options, Box::new(OptionsScreen::new()))?;
        registry.register(ViewId::CreateCard, Box::new(CreateCardScreen::new(&hub)))?;
        registry.register(ViewId::UpdateCard, Box::new(UpdateCardScreen::new(&hub)))?;
        registry.register(ViewId::DeleteCard, Box::new(DeleteCardScreen::new(&hub)))?;
        registry.register(ViewId::Review, Box::new(ReviewScreen::new(&hub)))?;
        registry.register(ViewId::ChangePassword, Box::new(ChangePasswordScreen::new()))?;

        registry.transition_to(ViewId::Home)?;

        Ok(Self {
            registry,
            session: SessionContext::new(),
            status: StatusLine::new(),
            api,
            rt,
            events_tx,
            should_quit: false,
        })
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn registry(&self) -> &ViewRegistry<Box<dyn Screen>> {
        &self.registry
    }

    pub fn session(&self) -> &SessionContext {
        &self.session
    }

    pub fn status(&self) -> &StatusLine {
        &self.status
    }

    pub fn hints(&self) -> &'static str {
        self.registry
            .active_view()
            .map(|screen| screen.hints())
            .unwrap_or("")
    }

    pub fn on_key(&mut self, key: KeyEvent) -> Result<(), RegistryError> {
        if key.kind != KeyEventKind::Press {
            return Ok(());
        }
        if key.code == KeyCode::Char('q') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return Ok(());
        }

        let origin = self.registry.active();
        let effects = match self.registry.active_view_mut() {
            Some(screen) => screen.handle_key(key, &mut self.session),
            None => Vec::new(),
        };
        self.apply_effects(origin, effects)
    }

    /// Completion callbacks may show status and navigate directly.
    pub fn on_api(&mut self, origin: ViewId, outcome: ApiOutcome) -> Result<(), RegistryError> {
        let effects = match self.registry.get_mut(origin) {
            Some(screen) => screen.on_api(outcome, &mut self.session),
            None => Vec::new(),
        };
        self.apply_effects(Some(origin), effects)
    }

    pub fn on_tick(&mut self) {
        self.registry
            .for_each_view_mut(|_, screen| screen.on_tick());
    }

    fn apply_effects(
        &mut self,
        origin: Option<ViewId>,
        effects: Vec<Effect>,
    ) -> Result<(), RegistryError> {
        for effect in effects {
            match effect {
                Effect::Navigate(id) => self.registry.transition_to(id)?,
                Effect::Call(call) => self.spawn_call(origin, call),
                Effect::ShowStatus(kind, message) => self.status.display_message(kind, message),
                Effect::Quit => self.should_quit = true,
            }
        }
        Ok(())
    }

    /// Fires one network call on the runtime. The session token is read
    /// here, once, so the call is pinned to the session that issued it.
    /// Nothing guards against overlapping calls; outcomes apply in arrival
    /// order.
    ///
    /// A token-requiring call issued without a session never reaches the
    /// network; it fails with [`ApiError::NotAuthenticated`] and is routed
    /// back to the issuing view like any other API failure.
    fn spawn_call(&mut self, origin: Option<ViewId>, call: ApiCall) {
        let Some(origin) = origin else {
            return;
        };
        let token = self.session.token().map(str::to_string);
        if call.requires_token() && token.is_none() {
            tracing::warn!(target: "app", view = %origin, "authenticated call without a session");
            let _ = self.events_tx.send(AppEvent::Api {
                origin,
                outcome: not_authenticated(call),
            });
            return;
        }

        let api = self.api.clone();
        let events_tx = self.events_tx.clone();
        self.rt.spawn(async move {
            let outcome = run_call(api, token, call).await;
            let _ = events_tx.send(AppEvent::Api { origin, outcome });
        });
    }
}

/// The outcome a call collapses to when it cannot even be issued.
fn not_authenticated(call: ApiCall) -> ApiOutcome {
    match call {
        ApiCall::SignUp { .. } => ApiOutcome::SignedUp(Err(ApiError::NotAuthenticated)),
        ApiCall::SignIn { .. } => ApiOutcome::SignedIn(Err(ApiError::NotAuthenticated)),
        ApiCall::SignOut => ApiOutcome::SignedOut(Err(ApiError::NotAuthenticated)),
        ApiCall::ChangePassword { .. } => {
            ApiOutcome::PasswordChanged(Err(ApiError::NotAuthenticated))
        }
        ApiCall::CreateCard { .. } => ApiOutcome::CardCreated(Err(ApiError::NotAuthenticated)),
        ApiCall::UpdateCard { .. } => ApiOutcome::CardUpdated(Err(ApiError::NotAuthenticated)),
        ApiCall::DeleteCard { .. } => ApiOutcome::CardDeleted(Err(ApiError::NotAuthenticated)),
        ApiCall::ListCards => ApiOutcome::CardsListed(Err(ApiError::NotAuthenticated)),
    }
}

async fn run_call(api: ApiClient, token: Option<String>, call: ApiCall) -> ApiOutcome {
    let token = token.unwrap_or_default();
    match call {
        ApiCall::SignUp {
            email,
            password,
            password_confirmation,
        } => ApiOutcome::SignedUp(api.sign_up(&email, &password, &password_confirmation).await),
        ApiCall::SignIn { email, password } => {
            ApiOutcome::SignedIn(api.sign_in(&email, &password).await)
        }
        ApiCall::SignOut => ApiOutcome::SignedOut(api.sign_out(&token).await),
        ApiCall::ChangePassword { old, new } => {
            ApiOutcome::PasswordChanged(api.change_password(&old, &new, &token).await)
        }
        ApiCall::CreateCard { fields } => {
            ApiOutcome::CardCreated(api.create_flashcard(&fields, &token).await)
        }
        ApiCall::UpdateCard { id, fields } => {
            ApiOutcome::CardUpdated(api.update_flashcard(&id, &fields, &token).await)
        }
        ApiCall::DeleteCard { id } => ApiOutcome::CardDeleted(api.delete_flashcard(&id, &token).await),
        ApiCall::ListCards => ApiOutcome::CardsListed(api.list_flashcards(&token).await),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_app() -> (App, mpsc::Receiver<AppEvent>, tokio::runtime::Runtime) {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        let (tx, rx) = mpsc::channel();
        let app = App::new("http://localhost:4741", rt.handle().clone(), tx).unwrap();
        (app, rx, rt)
    }

    #[test]
    fn token_calls_without_a_session_fail_without_touching_the_network() {
        let (mut app, rx, _rt) = test_app();

        app.apply_effects(Some(ViewId::Review), vec![Effect::Call(ApiCall::ListCards)])
            .unwrap();

        // The failure is delivered to the issuing view like any other
        // completed call.
        match rx.try_recv().unwrap() {
            AppEvent::Api {
                origin,
                outcome: ApiOutcome::CardsListed(Err(ApiError::NotAuthenticated)),
            } => assert_eq!(origin, ViewId::Review),
            _ => panic!("expected a not-authenticated listing failure"),
        }
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn anonymous_calls_do_not_need_a_session() {
        let (mut app, rx, _rt) = test_app();

        app.apply_effects(
            Some(ViewId::SignIn),
            vec![Effect::Call(ApiCall::SignIn {
                email: "a@b.c".to_string(),
                password: "p".to_string(),
            })],
        )
        .unwrap();

        // The call was spawned, not rejected; no synthetic failure arrives
        // ahead of the network outcome.
        assert!(rx.try_recv().is_err());
    }
}
