//! Production tracker page state
//!
//! Forms, the fetched record list and the in-flight requests. Requests are
//! started from UI actions and their results folded in by [`ProductionState::poll`]
//! once per frame.

use super::forms::{AuthForm, AuthSubmission, RecordForm};
use super::task::{take_finished, Spawner, TaskSlot};
use crate::api::{ApiClient, ApiError};
use crate::auth::AuthSession;
use chrono::NaiveDate;
use folio_types::{AuthResponse, ProductionRecord, User};
use tracing::{info, warn};

pub struct ProductionState {
    pub auth_form: AuthForm,
    pub record_form: RecordForm,
    pub records: Vec<ProductionRecord>,
    /// Inline error for the form that triggered the last request
    pub error: Option<String>,
    pub notice: Option<String>,
    needs_refresh: bool,

    pending_auth: Option<TaskSlot<AuthResponse>>,
    pending_user: Option<TaskSlot<User>>,
    pending_records: Option<TaskSlot<Vec<ProductionRecord>>>,
    pending_save: Option<TaskSlot<ProductionRecord>>,
    /// Latest server copy of the record being edited
    pending_edit: Option<TaskSlot<ProductionRecord>>,
    pending_delete: Option<TaskSlot<String>>,
    pending_logout: Option<TaskSlot<()>>,
}

impl ProductionState {
    pub fn new(today: NaiveDate, logged_in: bool) -> Self {
        Self {
            auth_form: AuthForm::default(),
            record_form: RecordForm::new(today),
            records: Vec::new(),
            error: None,
            notice: None,
            needs_refresh: logged_in,
            pending_auth: None,
            pending_user: None,
            pending_records: None,
            pending_save: None,
            pending_edit: None,
            pending_delete: None,
            pending_logout: None,
        }
    }

    pub fn is_busy(&self) -> bool {
        self.pending_auth.is_some()
            || self.pending_user.is_some()
            || self.pending_records.is_some()
            || self.pending_save.is_some()
            || self.pending_edit.is_some()
            || self.pending_delete.is_some()
            || self.pending_logout.is_some()
    }

    pub fn is_authenticating(&self) -> bool {
        self.pending_auth.is_some()
    }

    pub fn is_saving(&self) -> bool {
        self.pending_save.is_some()
    }

    /// True once after login (or at startup with a stored session)
    pub fn take_refresh_request(&mut self) -> bool {
        std::mem::take(&mut self.needs_refresh)
    }

    // =========================================================================
    // ACTIONS
    // =========================================================================

    pub fn submit_auth(&mut self, client: &ApiClient, spawner: &Spawner) {
        if self.pending_auth.is_some() {
            return;
        }
        let submission = match self.auth_form.submission() {
            Ok(s) => s,
            Err(e) => {
                self.error = Some(e.to_string());
                return;
            }
        };
        self.error = None;
        let client = client.clone();
        self.pending_auth = Some(match submission {
            AuthSubmission::Login(request) => {
                spawner.spawn(async move { client.login(&request).await })
            }
            AuthSubmission::Register(request) => {
                spawner.spawn(async move { client.register(&request).await })
            }
        });
        self.auth_form.forget_password();
    }

    pub fn refresh(&mut self, client: &ApiClient, spawner: &Spawner) {
        if self.pending_records.is_some() {
            return;
        }
        let client = client.clone();
        self.pending_records = Some(spawner.spawn(async move { client.list_records().await }));
    }

    /// Re-check a restored session against `GET /auth/me`
    pub fn load_user(&mut self, client: &ApiClient, spawner: &Spawner) {
        if self.pending_user.is_some() {
            return;
        }
        let client = client.clone();
        self.pending_user = Some(spawner.spawn(async move { client.current_user().await }));
    }

    pub fn submit_record(&mut self, client: &ApiClient, spawner: &Spawner) {
        if self.pending_save.is_some() {
            return;
        }
        let record = match self.record_form.to_record() {
            Ok(r) => r,
            Err(e) => {
                self.error = Some(e.to_string());
                return;
            }
        };
        self.error = None;
        self.notice = None;
        let client = client.clone();
        let editing = self.record_form.editing.clone();
        self.pending_save = Some(spawner.spawn(async move {
            match editing {
                Some(id) => client.update_record(&id, &record).await,
                None => client.create_record(&record).await,
            }
        }));
    }

    pub fn delete_record(&mut self, id: &str, client: &ApiClient, spawner: &Spawner) {
        if self.pending_delete.is_some() {
            return;
        }
        let client = client.clone();
        let id = id.to_string();
        self.pending_delete = Some(spawner.spawn(async move {
            client.delete_record(&id).await.map(|_| id)
        }));
    }

    /// Prefill from the local copy, then fetch the server's latest version
    pub fn edit_record(
        &mut self,
        record: &ProductionRecord,
        client: &ApiClient,
        spawner: &Spawner,
    ) {
        self.record_form = RecordForm::edit(record);
        self.notice = None;
        let client = client.clone();
        let id = record.id.clone();
        self.pending_edit = Some(spawner.spawn(async move { client.get_record(&id).await }));
    }

    pub fn cancel_edit(&mut self, today: NaiveDate) {
        self.record_form = RecordForm::new(today);
    }

    /// Logout is local-first: the session is cleared before the server answers
    pub fn logout(
        &mut self,
        session: &mut AuthSession,
        client: &ApiClient,
        spawner: &Spawner,
        today: NaiveDate,
    ) {
        if session.token().is_some() {
            let client = client.clone();
            self.pending_logout = Some(spawner.spawn(async move { client.logout().await }));
        }
        session.clear();
        self.reset(today);
    }

    fn reset(&mut self, today: NaiveDate) {
        self.records.clear();
        self.record_form = RecordForm::new(today);
        self.error = None;
        self.notice = None;
        self.needs_refresh = false;
        self.pending_user = None;
        self.pending_records = None;
        self.pending_save = None;
        self.pending_edit = None;
        self.pending_delete = None;
    }

    // =========================================================================
    // RESULTS
    // =========================================================================

    /// Fold finished requests into the page. Returns true if anything changed.
    pub fn poll(&mut self, session: &mut AuthSession, today: NaiveDate) -> bool {
        let mut changed = false;

        if let Some(result) = take_finished(&self.pending_auth) {
            self.pending_auth = None;
            changed = true;
            match result {
                Ok(response) => {
                    session.establish(response);
                    self.auth_form = AuthForm::default();
                    self.error = None;
                    self.needs_refresh = true;
                }
                Err(e) => self.fail(e, session, today),
            }
        }

        if let Some(result) = take_finished(&self.pending_user) {
            self.pending_user = None;
            changed = true;
            match result {
                Ok(user) => session.set_user(user),
                Err(e) => self.fail(e, session, today),
            }
        }

        if let Some(result) = take_finished(&self.pending_records) {
            self.pending_records = None;
            changed = true;
            match result {
                Ok(mut records) => {
                    records.sort_by(|a, b| b.date.cmp(&a.date));
                    self.records = records;
                }
                Err(e) => self.fail(e, session, today),
            }
        }

        if let Some(result) = take_finished(&self.pending_save) {
            self.pending_save = None;
            changed = true;
            match result {
                Ok(saved) => {
                    info!("Saved production record {}", saved.id);
                    self.notice = Some(format!("Saved {} x {}", saved.quantity, saved.product));
                    match self.records.iter_mut().find(|r| r.id == saved.id) {
                        Some(existing) => *existing = saved,
                        None => self.records.insert(0, saved),
                    }
                    self.record_form = RecordForm::new(today);
                }
                Err(e) => self.fail(e, session, today),
            }
        }

        if let Some(result) = take_finished(&self.pending_edit) {
            self.pending_edit = None;
            changed = true;
            match result {
                Ok(latest) => {
                    // Only reload the form if the user is still on that record
                    if self.record_form.editing.as_deref() == Some(latest.id.as_str()) {
                        self.record_form = RecordForm::edit(&latest);
                    }
                    if let Some(existing) = self.records.iter_mut().find(|r| r.id == latest.id) {
                        *existing = latest;
                    }
                }
                Err(e) => self.fail(e, session, today),
            }
        }

        if let Some(result) = take_finished(&self.pending_delete) {
            self.pending_delete = None;
            changed = true;
            match result {
                Ok(id) => {
                    info!("Deleted production record {id}");
                    self.records.retain(|r| r.id != id);
                    if self.record_form.editing.as_deref() == Some(id.as_str()) {
                        self.record_form = RecordForm::new(today);
                    }
                }
                Err(e) => self.fail(e, session, today),
            }
        }

        if let Some(result) = take_finished(&self.pending_logout) {
            self.pending_logout = None;
            if let Err(e) = result {
                warn!("Remote logout failed, local session already cleared: {e}");
            }
        }

        changed
    }

    fn fail(&mut self, error: ApiError, session: &mut AuthSession, today: NaiveDate) {
        warn!("Request failed: {error}");
        if error == ApiError::Unauthorized {
            session.clear();
            self.reset(today);
        }
        self.error = Some(error.to_string());
    }
}
