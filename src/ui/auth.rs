//! Login and registration screens
//!
//! The forms write an [`AuthRequest`]; [`start_auth_task`] validates the form
//! and runs the matching workflow on the `AsyncComputeTaskPool`. The task is
//! polled every frame by [`handle_auth_task`], which records the session or the
//! error and fires the flow trigger. At most one [`AuthTask`] exists at a time.

use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;
use bevy::tasks::{AsyncComputeTaskPool, Task};
use bevy_egui::{egui, EguiContexts, EguiPrimaryContextPass};
use futures_lite::future;

use crate::auth::{
    self, AuthResult, AuthServices, CurrentSession, IdentityHandle, LoginForm, RegistrationForm,
    Session,
};
use crate::core::{FlowTrigger, Screen};
use crate::ui::theme;

// --- Resources ---

#[derive(Resource, Default)]
pub struct AuthState {
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub error: Option<String>,
    /// Positive feedback, e.g. after registering
    pub notice: Option<String>,
    pub is_loading: bool,
}

impl AuthState {
    fn login_form(&self) -> LoginForm {
        LoginForm {
            email: self.email.clone(),
            password: self.password.clone(),
        }
    }

    fn registration_form(&self) -> RegistrationForm {
        RegistrationForm {
            email: self.email.clone(),
            password: self.password.clone(),
            confirm_password: self.confirm_password.clone(),
        }
    }

    fn clear_secrets(&mut self) {
        self.password.clear();
        self.confirm_password.clear();
    }
}

/// Submit button pressed on one of the forms
#[derive(Message, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthRequest {
    SignIn,
    Register,
}

#[derive(Debug)]
pub enum AuthOutcome {
    SignedIn(Session),
    Registered(IdentityHandle),
}

#[derive(Resource)]
pub struct AuthTask(Task<AuthResult<AuthOutcome>>);

// --- Plugin ---

pub struct AuthUiPlugin;

impl Plugin for AuthUiPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<AuthState>()
            .init_resource::<CurrentSession>()
            .add_message::<AuthRequest>()
            .add_systems(OnEnter(Screen::Login), enter_login)
            .add_systems(OnEnter(Screen::Register), enter_register)
            .add_systems(
                EguiPrimaryContextPass,
                (
                    login_ui_system.run_if(in_state(Screen::Login)),
                    register_ui_system.run_if(in_state(Screen::Register)),
                ),
            )
            .add_systems(
                Update,
                (start_auth_task, handle_auth_task)
                    .chain()
                    .run_if(in_state(Screen::Login).or(in_state(Screen::Register))),
            );
    }
}

// --- Systems ---

fn enter_login(mut auth_state: ResMut<AuthState>) {
    auth_state.error = None;
    auth_state.is_loading = false;
    auth_state.clear_secrets();
}

fn enter_register(mut auth_state: ResMut<AuthState>) {
    auth_state.error = None;
    auth_state.notice = None;
    auth_state.is_loading = false;
    auth_state.clear_secrets();
}

fn login_ui_system(
    mut contexts: EguiContexts,
    mut auth_state: ResMut<AuthState>,
    mut requests: MessageWriter<AuthRequest>,
    mut flow: MessageWriter<FlowTrigger>,
) -> Result {
    let ctx = contexts.ctx_mut()?;

    egui::CentralPanel::default()
        .frame(egui::Frame::NONE.fill(theme::BACKGROUND))
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(50.0);
                theme::title(ui, "TapChess");
                ui.add_space(30.0);
                feedback(ui, &auth_state);

                let submitted = theme::form_scope(ui, |ui| {
                    theme::text_input(ui, &mut auth_state.email, "Email", false);
                    ui.add_space(15.0);
                    let password = theme::text_input(ui, &mut auth_state.password, "Password", true);
                    password.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter))
                });

                ui.add_space(30.0);
                if auth_state.is_loading {
                    ui.spinner();
                    return;
                }
                if theme::primary_button(ui, "LOGIN").clicked() || submitted {
                    requests.write(AuthRequest::SignIn);
                }
                ui.add_space(20.0);
                if theme::secondary_button(ui, "CREATE NEW ACCOUNT").clicked() {
                    flow.write(FlowTrigger::OpenRegister);
                }
            });
        });
    Ok(())
}

fn register_ui_system(
    mut contexts: EguiContexts,
    mut auth_state: ResMut<AuthState>,
    mut requests: MessageWriter<AuthRequest>,
    mut flow: MessageWriter<FlowTrigger>,
) -> Result {
    let ctx = contexts.ctx_mut()?;

    egui::CentralPanel::default()
        .frame(egui::Frame::NONE.fill(theme::BACKGROUND))
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(50.0);
                theme::heading(ui, "Create account");
                ui.add_space(30.0);
                feedback(ui, &auth_state);

                theme::form_scope(ui, |ui| {
                    theme::text_input(ui, &mut auth_state.email, "Email", false);
                    ui.add_space(15.0);
                    theme::text_input(ui, &mut auth_state.password, "Password", true);
                    ui.add_space(15.0);
                    theme::text_input(
                        ui,
                        &mut auth_state.confirm_password,
                        "Confirm password",
                        true,
                    );
                });

                ui.add_space(30.0);
                if auth_state.is_loading {
                    ui.spinner();
                    return;
                }
                if theme::primary_button(ui, "CREATE ACCOUNT").clicked() {
                    requests.write(AuthRequest::Register);
                }
                ui.add_space(20.0);
                if theme::secondary_button(ui, "BACK TO LOGIN").clicked() {
                    flow.write(FlowTrigger::OpenLogin);
                }
            });
        });
    Ok(())
}

fn feedback(ui: &mut egui::Ui, auth_state: &AuthState) {
    if let Some(err) = &auth_state.error {
        ui.label(egui::RichText::new(err).size(16.0).color(theme::DANGER));
        ui.add_space(20.0);
    } else if let Some(notice) = &auth_state.notice {
        ui.label(egui::RichText::new(notice).size(16.0).color(theme::SUCCESS));
        ui.add_space(20.0);
    }
}

/// Validate the form and spawn the workflow for the latest request
pub fn start_auth_task(
    mut commands: Commands,
    mut requests: MessageReader<AuthRequest>,
    mut auth_state: ResMut<AuthState>,
    services: Res<AuthServices>,
    running: Option<Res<AuthTask>>,
) {
    let Some(&request) = requests.read().last() else {
        return;
    };
    if running.is_some() || auth_state.is_loading {
        debug!("[AUTH] {:?} ignored, request already running", request);
        return;
    }

    auth_state.error = None;
    auth_state.notice = None;
    let thread_pool = AsyncComputeTaskPool::get();

    let task = match request {
        AuthRequest::SignIn => {
            let form = auth_state.login_form();
            if let Err(e) = form.validate() {
                auth_state.error = Some(e.to_string());
                return;
            }
            let identity = services.identity.clone();
            thread_pool.spawn(async move {
                auth::sign_in(identity.as_ref(), &form).map(AuthOutcome::SignedIn)
            })
        }
        AuthRequest::Register => {
            let form = auth_state.registration_form();
            if let Err(e) = form.validate() {
                auth_state.error = Some(e.to_string());
                return;
            }
            let identity = services.identity.clone();
            let records = services.records.clone();
            thread_pool.spawn(async move {
                auth::register(identity.as_ref(), records.as_ref(), &form)
                    .map(AuthOutcome::Registered)
            })
        }
    };

    info!("[AUTH] {:?} started", request);
    auth_state.is_loading = true;
    commands.insert_resource(AuthTask(task));
}

pub fn handle_auth_task(
    mut commands: Commands,
    auth_task: Option<ResMut<AuthTask>>,
    mut auth_state: ResMut<AuthState>,
    mut session: ResMut<CurrentSession>,
    mut flow: MessageWriter<FlowTrigger>,
) {
    let Some(mut task) = auth_task else {
        return;
    };
    let Some(result) = future::block_on(future::poll_once(&mut task.0)) else {
        return;
    };

    auth_state.is_loading = false;
    match result {
        Ok(AuthOutcome::SignedIn(new_session)) => {
            info!("[AUTH] Authenticated as: {}", new_session.email);
            session.0 = Some(new_session);
            auth_state.clear_secrets();
            flow.write(FlowTrigger::SignedIn);
        }
        Ok(AuthOutcome::Registered(handle)) => {
            auth_state.notice = Some(format!(
                "Account created for {}. Please sign in.",
                handle.email
            ));
            auth_state.clear_secrets();
            flow.write(FlowTrigger::Registered);
        }
        Err(e) => {
            warn!("[AUTH] {}", e);
            auth_state.error = Some(e.to_string());
        }
    }
    commands.remove_resource::<AuthTask>();
}
