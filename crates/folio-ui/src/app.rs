//! Folio Application
//!
//! Layout:
//! ┌──────────────────────────────────────┐
//! │ progress bar                         │
//! ├──────────────────────────────────────┤
//! │ nav bar (desktop only)               │
//! ├──────────────────────────────────────┤
//! │ mobile:  every section, stacked      │
//! │ desktop: the routed section          │
//! │ or a standalone page (either mode)   │
//! └──────────────────────────────────────┘
//!
//! The active route always comes from the location. Scroll state lives here
//! because egui's scroll areas only report their offset after rendering.

use crate::api::ApiClient;
use crate::auth::AuthSession;
use crate::config::SiteConfig;
use crate::content::PortfolioContent;
use crate::gate::VerificationGate;
use crate::panels::{
    about_section, challenge_page, contact_section, home_section, nav_bar, production_page,
    projects_section, resume_section, section_heading, AboutState, ChallengeState, ContactState,
    NavBarData,
};
use crate::platform::{KeyValueStore, Location};
use crate::routes::{normalize_path, Page, Route, RouteTable, PRODUCTION_PATH};
use crate::scroll::{
    click_target, NavTrigger, ProgressTracker, ScrollMetrics, SectionNavigator,
    SinglePageDocument, SmoothScroll,
};
use crate::state::{ProductionState, Spawner};
use crate::view::{
    visible_fraction, Composition, Reveal, SectionSlot, SectionTransition, ViewComposer,
};
use crate::viewport::{ViewportClassifier, ViewportMode};
use crate::widgets::{progress_bar, BAR_HEIGHT};
use eframe::egui;
use egui::containers::scroll_area::ScrollAreaOutput;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};

/// Desktop entry animation length
const TRANSITION_SECS: f64 = 0.35;

/// Offsets closer than this count as "not scrolled"
const SCROLL_EPSILON: f32 = 0.5;

/// Requests collected while rendering, applied after the frame's panels
#[derive(Default)]
struct Requests {
    navigate: Option<String>,
    open_url: Option<String>,
}

/// Input that asks the section navigator to look at the scroll position.
///
/// Frames where the app moved the scroll area itself, or where a link already
/// asked for a navigation, never evaluate.
fn navigator_trigger(
    touch_end: bool,
    user_scrolled: bool,
    forced: bool,
    navigation_requested: bool,
) -> Option<NavTrigger> {
    if forced || navigation_requested {
        None
    } else if touch_end {
        Some(NavTrigger::TouchEnd)
    } else if user_scrolled {
        Some(NavTrigger::Scroll)
    } else {
        None
    }
}

// =============================================================================
// SCROLL STATE
// =============================================================================

struct ScrollState {
    document: SinglePageDocument,
    /// Offset reported by the scroll area last frame
    offset: Option<f32>,
    viewport_height: f32,
    /// Instant jump applied next frame
    jump: Option<f32>,
    smooth: Option<SmoothScroll>,
    /// Section to snap to once its position is known
    anchor_to: Option<usize>,
}

impl ScrollState {
    fn new(section_count: usize) -> Self {
        Self {
            document: SinglePageDocument::new(section_count),
            offset: None,
            viewport_height: 0.0,
            jump: None,
            smooth: None,
            anchor_to: None,
        }
    }

    /// Forget the previous scroll area (layout or page changed)
    fn restart(&mut self) {
        self.offset = None;
        self.smooth = None;
        self.jump = Some(0.0);
        self.anchor_to = None;
    }

    /// Snap to a stacked section, now or as soon as it has been laid out
    fn snap_to_section(&mut self, index: usize) {
        self.smooth = None;
        self.anchor_to = Some(index);
        self.resolve_anchor();
    }

    fn resolve_anchor(&mut self) {
        if let Some(index) = self.anchor_to {
            if let Some(top) = self.document.anchor(index) {
                self.jump = Some(top);
                self.anchor_to = None;
            }
        }
    }

    fn glide_to(&mut self, target: f32, now: f64, duration_secs: f64) {
        let from = self.offset.unwrap_or(0.0);
        self.jump = None;
        self.smooth = Some(SmoothScroll::new(from, target, now, duration_secs));
    }

    /// Offset to force on the scroll area this frame, if any
    fn forced_offset(&mut self, now: f64) -> Option<f32> {
        self.resolve_anchor();
        if let Some(y) = self.jump.take() {
            self.smooth = None;
            return Some(y);
        }
        let smooth = self.smooth?;
        if smooth.is_complete(now) {
            self.smooth = None;
        }
        Some(smooth.offset_at(now))
    }

    /// Record what the scroll area reported; returns true if the user moved it
    fn observe<R>(&mut self, output: &ScrollAreaOutput<R>, forced: bool) -> bool {
        let offset = output.state.offset.y;
        let moved = !forced
            && self
                .offset
                .is_some_and(|last| (last - offset).abs() > SCROLL_EPSILON);
        self.offset = Some(offset);
        self.viewport_height = output.inner_rect.height();
        self.document.set_height(output.content_size.y);
        moved
    }

    fn metrics(&self) -> ScrollMetrics {
        self.document
            .document_metrics(self.offset.unwrap_or(0.0), self.viewport_height)
    }

    fn is_animating(&self) -> bool {
        self.jump.is_some() || self.smooth.is_some() || self.anchor_to.is_some()
    }
}

// =============================================================================
// SECTION CONTENT
// =============================================================================

/// Borrowed view of everything the content sections need
struct Sections<'a> {
    content: &'a PortfolioContent,
    routes: &'a RouteTable,
    about: &'a mut AboutState,
    contact: &'a mut ContactState,
    recipient: &'a str,
}

impl Sections<'_> {
    fn show(
        &mut self,
        ui: &mut egui::Ui,
        route: &Route,
        revealed: bool,
        compact: bool,
        now: f64,
        requests: &mut Requests,
    ) {
        match route.id.as_str() {
            "home" => {
                if let Some(path) = home_section(ui, &self.content.profile, self.routes) {
                    requests.navigate = Some(path);
                }
            }
            "about" => about_section(ui, &self.content.about, self.about, revealed, now),
            "resume" => resume_section(ui, &self.content.resume),
            "projects" => {
                if let Some(path) = projects_section(ui, &self.content.projects, compact) {
                    requests.navigate = Some(path);
                }
            }
            "contact" => {
                if let Some(url) = contact_section(ui, self.contact, self.recipient) {
                    requests.open_url = Some(url);
                }
            }
            _ => section_heading(ui, &route.title),
        }
    }
}

// =============================================================================
// APP
// =============================================================================

pub struct FolioApp {
    config: SiteConfig,
    content: PortfolioContent,
    routes: Arc<RouteTable>,

    classifier: ViewportClassifier,
    composer: ViewComposer,
    navigator: SectionNavigator,
    location: Box<dyn Location>,
    /// Path seen last frame; a difference means the browser moved (back/forward)
    last_path: String,

    gate: VerificationGate,
    session: AuthSession,
    api: ApiClient,
    spawner: Spawner,

    progress: ProgressTracker,
    scroll: ScrollState,
    transition: SectionTransition,
    reveals: Vec<Reveal>,

    about: AboutState,
    contact: ContactState,
    production: ProductionState,
    challenge: ChallengeState,
}

impl FolioApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        #[cfg(target_arch = "wasm32")]
        let (location, session_store, local_store): (
            Box<dyn Location>,
            Box<dyn KeyValueStore>,
            Box<dyn KeyValueStore>,
        ) = {
            use crate::platform::{BrowserLocation, WebStorage};
            (
                Box::new(BrowserLocation::new(&cc.egui_ctx)),
                Box::new(WebStorage::session()),
                Box::new(WebStorage::local()),
            )
        };

        #[cfg(not(target_arch = "wasm32"))]
        let (location, session_store, local_store): (
            Box<dyn Location>,
            Box<dyn KeyValueStore>,
            Box<dyn KeyValueStore>,
        ) = {
            use crate::platform::{MemoryLocation, MemoryStore};
            let _ = cc;
            (
                Box::new(MemoryLocation::default()),
                Box::new(MemoryStore::new()),
                Box::new(MemoryStore::new()),
            )
        };

        Self::with_platform(
            SiteConfig::load(),
            PortfolioContent::load(),
            location,
            session_store,
            local_store,
        )
    }

    /// Build the app around explicit browser stand-ins
    pub fn with_platform(
        config: SiteConfig,
        content: PortfolioContent,
        location: Box<dyn Location>,
        session_store: Box<dyn KeyValueStore>,
        local_store: Box<dyn KeyValueStore>,
    ) -> Self {
        let routes = Arc::new(RouteTable::from_config_or_default(&config.routes));
        let session = AuthSession::new(config.auth.clone(), local_store);
        let today = chrono::Local::now().date_naive();
        let reveal_secs = config.scroll.reveal_ms as f64 / 1000.0;
        let last_path = location.path();

        info!(
            "Folio starting at {last_path} with {} sections (logged in: {})",
            routes.len(),
            session.is_logged_in()
        );

        Self {
            classifier: ViewportClassifier::new(config.breakpoint_px),
            composer: ViewComposer::new(routes.clone()),
            navigator: SectionNavigator::new(routes.clone(), &config.navigator),
            location,
            last_path,
            gate: VerificationGate::new(config.gate.clone(), session_store),
            api: ApiClient::new(&config.api.base_url),
            spawner: Spawner::new(),
            progress: ProgressTracker::new(),
            scroll: ScrollState::new(routes.len()),
            transition: SectionTransition::new(TRANSITION_SECS),
            reveals: (0..routes.len())
                .map(|_| Reveal::new(reveal_secs, config.scroll.reveal_fraction))
                .collect(),
            about: AboutState::new(&content.about),
            contact: ContactState::default(),
            production: ProductionState::new(today, session.is_logged_in()),
            challenge: ChallengeState::default(),
            session,
            routes,
            content,
            config,
        }
    }

    fn smooth_scroll_secs(&self) -> f64 {
        self.config.scroll.smooth_scroll_ms as f64 / 1000.0
    }

    /// Client carrying the current token
    fn client(&self) -> ApiClient {
        self.api.with_token(self.session.token())
    }

    // =========================================================================
    // LOCATION
    // =========================================================================

    /// React to location changes we did not make ourselves
    fn sync_location(&mut self, mode: ViewportMode) -> String {
        let path = normalize_path(&self.location.path());
        if path != self.last_path {
            debug!("Location changed externally: {} -> {path}", self.last_path);
            self.last_path = path.clone();
            match (mode, self.routes.index_of_path(&path)) {
                (ViewportMode::Mobile, Some(index)) => self.scroll.snap_to_section(index),
                _ => self.scroll.restart(),
            }
        }
        path
    }

    fn go_to(&mut self, path: &str, mode: ViewportMode, now: f64) {
        let path = normalize_path(path);
        if path == self.last_path {
            return;
        }
        let was_standalone = self.routes.resolve(&self.last_path).is_standalone();
        self.location.navigate(&path);
        self.last_path = path.clone();

        match (mode, self.routes.index_of_path(&path)) {
            // Already on the stacked page: glide to the section
            (ViewportMode::Mobile, Some(index)) if !was_standalone => {
                if let Some(top) = self.scroll.document.anchor(index) {
                    let secs = self.smooth_scroll_secs();
                    self.scroll.glide_to(top, now, secs);
                } else {
                    self.scroll.snap_to_section(index);
                }
            }
            (ViewportMode::Mobile, Some(index)) => {
                self.scroll.offset = None;
                self.scroll.snap_to_section(index);
            }
            _ => self.scroll.restart(),
        }
    }

    fn apply(&mut self, ctx: &egui::Context, requests: Requests, mode: ViewportMode, now: f64) {
        if let Some(path) = requests.navigate {
            self.go_to(&path, mode, now);
        }
        if let Some(url) = requests.open_url {
            ctx.open_url(egui::OpenUrl::same_tab(url));
        }
    }

    // =========================================================================
    // LAYOUTS
    // =========================================================================

    fn show_single_page(
        &mut self,
        ui: &mut egui::Ui,
        slots: &[SectionSlot],
        active: Option<usize>,
        mode: ViewportMode,
        now: f64,
        requests: &mut Requests,
    ) {
        let forced = self.scroll.forced_offset(now);
        let mut area = egui::ScrollArea::vertical()
            .id_salt("single_page")
            .auto_shrink([false, false]);
        if let Some(y) = forced {
            area = area.vertical_scroll_offset(y);
        }

        let mut sections = Sections {
            content: &self.content,
            routes: &self.routes,
            about: &mut self.about,
            contact: &mut self.contact,
            recipient: &self.config.contact.recipient,
        };
        let routes = &self.routes;
        let reveals = &mut self.reveals;
        let document = &mut self.scroll.document;

        let output = area.show(ui, |ui| {
            let origin = ui.min_rect().top();
            let clip = ui.clip_rect();
            // Each section fills at least one screen so it can be paged through
            let min_height = clip.height();

            for slot in slots {
                let (Some(route), Some(reveal)) =
                    (routes.get(slot.index), reveals.get_mut(slot.index))
                else {
                    continue;
                };
                let opacity = reveal.opacity(now);
                let revealed = reveal.is_revealed();

                let response = ui
                    .push_id(&slot.anchor, |ui| {
                        ui.set_min_height(min_height);
                        ui.set_opacity(opacity);
                        sections.show(ui, route, revealed, true, now, requests);
                    })
                    .response;

                let rect = response.rect;
                document.record(slot.index, rect.top() - origin, rect.height());
                reveal.observe(visible_fraction(rect, clip), now);
                ui.separator();
            }
        });

        let user_scrolled = self.scroll.observe(&output, forced.is_some());
        self.progress.observe(ui.ctx().cumulative_pass_nr(), &self.scroll.metrics());

        let touch_end = ui.input(|i| {
            i.events.iter().any(|e| {
                matches!(
                    e,
                    egui::Event::Touch {
                        phase: egui::TouchPhase::End,
                        ..
                    }
                )
            })
        });
        let trigger = navigator_trigger(
            touch_end,
            user_scrolled,
            forced.is_some(),
            requests.navigate.is_some(),
        );

        if let Some(trigger) = trigger {
            let offset = self.scroll.offset.unwrap_or(0.0);
            let metrics =
                self.scroll
                    .document
                    .metrics_for(active, offset, self.scroll.viewport_height);
            if let Some(nav) =
                self.navigator
                    .evaluate(trigger, mode, &metrics, &self.last_path, now)
            {
                self.location.navigate(&nav.to_path);
                self.last_path = normalize_path(&nav.to_path);
                if nav.reset_scroll {
                    self.scroll.snap_to_section(nav.to_index);
                }
            }
        }
    }

    fn show_routed(
        &mut self,
        ui: &mut egui::Ui,
        section: Option<usize>,
        transition_key: &str,
        now: f64,
        requests: &mut Requests,
    ) {
        if self.transition.observe(transition_key, now) {
            self.scroll.restart();
        }

        let Some(route) = section.and_then(|i| self.routes.get(i)) else {
            // Outside the route table: nav bar only
            self.progress
                .observe(ui.ctx().cumulative_pass_nr(), &ScrollMetrics::new(0.0, 0.0, 0.0));
            return;
        };

        let forced = self.scroll.forced_offset(now);
        let mut area = egui::ScrollArea::vertical()
            .id_salt("routed")
            .auto_shrink([false, false]);
        if let Some(y) = forced {
            area = area.vertical_scroll_offset(y);
        }

        let opacity = self.transition.opacity(now);
        let slide = self.transition.offset_y(now);
        let mut sections = Sections {
            content: &self.content,
            routes: &self.routes,
            about: &mut self.about,
            contact: &mut self.contact,
            recipient: &self.config.contact.recipient,
        };

        let output = area.show(ui, |ui| {
            ui.add_space(slide);
            ui.set_opacity(opacity);
            sections.show(ui, route, true, false, now, requests);
        });

        self.scroll.observe(&output, forced.is_some());
        self.progress
            .observe(ui.ctx().cumulative_pass_nr(), &self.scroll.metrics());
    }

    fn show_production(
        &mut self,
        ui: &mut egui::Ui,
        mode: ViewportMode,
        now: f64,
        requests: &mut Requests,
    ) {
        let today = chrono::Local::now().date_naive();
        let forced = self.scroll.forced_offset(now);
        let mut area = egui::ScrollArea::vertical()
            .id_salt("production")
            .auto_shrink([false, false]);
        if let Some(y) = forced {
            area = area.vertical_scroll_offset(y);
        }

        let logged_in = self.session.is_logged_in();
        let production = &mut self.production;
        let user = self.session.user();
        let output = area.show(ui, |ui| production_page(ui, production, user, logged_in, mode));
        self.scroll.observe(&output, forced.is_some());
        self.progress
            .observe(ui.ctx().cumulative_pass_nr(), &self.scroll.metrics());

        let action = output.inner;
        let client = self.client();
        if action.submit_auth {
            self.production.submit_auth(&client, &self.spawner);
        }
        if action.submit_record {
            self.production.submit_record(&client, &self.spawner);
        }
        if action.refresh {
            self.production.refresh(&client, &self.spawner);
        }
        if let Some(record) = action.edit {
            self.production.edit_record(&record, &client, &self.spawner);
        }
        if action.cancel_edit {
            self.production.cancel_edit(today);
        }
        if let Some(id) = action.delete {
            self.production.delete_record(&id, &client, &self.spawner);
        }
        if action.logout {
            self.production
                .logout(&mut self.session, &client, &self.spawner, today);
        }
        if action.back_home {
            requests.navigate = Some(self.routes.first().path.clone());
        }
    }

    fn show_challenge(&mut self, ui: &mut egui::Ui, requests: &mut Requests) {
        let verified = self.gate.is_verified();
        let action = challenge_page(ui, &mut self.challenge, self.gate.question(), verified);
        if action.submit {
            self.challenge.submit(&mut self.gate);
        }
        if action.reset {
            self.challenge.reset(&mut self.gate);
        }
        if action.back_home {
            requests.navigate = Some(self.routes.first().path.clone());
        }
    }

    fn is_animating(&self, now: f64) -> bool {
        self.transition.is_animating(now)
            || self.reveals.iter().any(|r| r.is_animating(now))
            || self.about.is_animating(now)
            || self.scroll.is_animating()
    }
}

impl FolioApp {
    /// Everything one frame does; `update` only forwards here
    fn run_frame(&mut self, ctx: &egui::Context) {
        let now = ctx.input(|i| i.time);
        let today = chrono::Local::now().date_naive();

        if self.classifier.update(ctx.screen_rect().width()) {
            let mode = self.classifier.mode();
            match (mode, self.routes.index_of_path(&self.last_path)) {
                (ViewportMode::Mobile, Some(index)) => {
                    self.scroll.offset = None;
                    self.scroll.snap_to_section(index);
                }
                _ => self.scroll.restart(),
            }
        }
        let mode = self.classifier.mode();

        // Fold in finished requests
        self.production.poll(&mut self.session, today);
        if self.production.take_refresh_request() && self.session.is_logged_in() {
            let client = self.client();
            self.production.refresh(&client, &self.spawner);
            self.production.load_user(&client, &self.spawner);
        }

        let path = self.sync_location(mode);
        let composition = self.composer.compose(mode, &path);
        let mut requests = Requests::default();

        let on_hyperspace = matches!(composition, Composition::Standalone(Page::Hyperspace));
        if !on_hyperspace {
            let secs = self.smooth_scroll_secs();
            egui::TopBottomPanel::top("progress")
                .exact_height(BAR_HEIGHT)
                .frame(egui::Frame::none())
                .show(ctx, |ui| {
                    if let Some(fraction) = progress_bar(ui, self.progress.progress()) {
                        let target = click_target(fraction, &self.scroll.metrics());
                        self.scroll.glide_to(target, now, secs);
                    }
                });
        }

        if !mode.is_mobile() {
            let active = match &composition {
                Composition::Routed { section, .. } => *section,
                _ => None,
            };
            egui::TopBottomPanel::top("nav").show(ctx, |ui| {
                let data = NavBarData {
                    brand: &self.content.profile.name,
                    routes: &self.routes,
                    active,
                    on_production: path == PRODUCTION_PATH,
                };
                if let Some(path) = nav_bar(ui, &data) {
                    requests.navigate = Some(path);
                }
            });
        }

        egui::CentralPanel::default().show(ctx, |ui| match composition {
            Composition::SinglePage { sections, active } => {
                self.show_single_page(ui, &sections, active, mode, now, &mut requests)
            }
            Composition::Routed {
                section,
                transition_key,
            } => self.show_routed(ui, section, &transition_key, now, &mut requests),
            Composition::Standalone(Page::Production) => {
                self.show_production(ui, mode, now, &mut requests)
            }
            Composition::Standalone(_) => self.show_challenge(ui, &mut requests),
        });

        self.apply(ctx, requests, mode, now);

        if self.is_animating(now) {
            ctx.request_repaint();
        } else if self.production.is_busy() {
            ctx.request_repaint_after(Duration::from_millis(100));
        }
    }
}

impl eframe::App for FolioApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.run_frame(ctx);
    }
}
