use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::Result;
use tracing::warn;

use crate::app::Config;
use crate::backend::{create_generator, Generator};
use crate::compose::{
    compute_stats, CheckOptions, CheckRequest, CitationRequest, DraftRequest, DraftStats,
    RevisionRequest,
};
use crate::constants::{PLACEHOLDER_MARKER, TOAST_LIFETIME_MS};
use crate::store::{export_essay, Settings, SettingsStore, Workspace, WorkspaceStore};
use crate::utils::{copy_to_clipboard, html_to_text};

use super::form::Form;
use super::tab::Tab;
use super::theme::Theme;

/// A display region: either a placeholder or generated markup.
///
/// The placeholder is itself markup carrying a marker class, matching what
/// gets persisted; `is_placeholder` checks for the marker the same way the
/// load path does.
pub struct Region {
    tab: Tab,
    html: String,
}

impl Region {
    fn new(tab: Tab) -> Self {
        Self {
            tab,
            html: placeholder_markup(tab),
        }
    }

    pub fn html(&self) -> &str {
        &self.html
    }

    /// Plain text of the region's markup
    pub fn text(&self) -> String {
        html_to_text(&self.html)
    }

    pub fn is_placeholder(&self) -> bool {
        self.html.contains(PLACEHOLDER_MARKER)
    }

    pub fn set(&mut self, html: String) {
        self.html = html;
    }

    /// Replace a placeholder, otherwise append after existing content
    pub fn append(&mut self, html: &str) {
        if self.is_placeholder() {
            self.html = html.to_string();
        } else {
            self.html.push_str(html);
        }
    }

    pub fn clear(&mut self) {
        self.html = placeholder_markup(self.tab);
    }
}

fn placeholder_markup(tab: Tab) -> String {
    format!(
        "<div class=\"placeholder\"><i class=\"fas fa-{}\"></i><p>{}</p></div>",
        tab.placeholder_icon(),
        tab.placeholder_message()
    )
}

/// The four display regions
pub struct Regions {
    pub essay: Region,
    pub improved: Region,
    pub citations: Region,
    pub grammar: Region,
}

impl Regions {
    fn new() -> Self {
        Self {
            essay: Region::new(Tab::Draft),
            improved: Region::new(Tab::Revise),
            citations: Region::new(Tab::Cite),
            grammar: Region::new(Tab::Check),
        }
    }

    pub fn for_tab(&self, tab: Tab) -> &Region {
        match tab {
            Tab::Draft => &self.essay,
            Tab::Revise => &self.improved,
            Tab::Cite => &self.citations,
            Tab::Check => &self.grammar,
        }
    }

    fn for_tab_mut(&mut self, tab: Tab) -> &mut Region {
        match tab {
            Tab::Draft => &mut self.essay,
            Tab::Revise => &mut self.improved,
            Tab::Cite => &mut self.citations,
            Tab::Check => &mut self.grammar,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

/// A transient notification. Toasts are independent: they stack, and each
/// disappears on its own schedule.
pub struct Toast {
    pub message: String,
    pub kind: ToastKind,
    created_at: Instant,
}

impl Toast {
    fn new(message: impl Into<String>, kind: ToastKind) -> Self {
        Self {
            message: message.into(),
            kind,
            created_at: Instant::now(),
        }
    }

    pub fn expired(&self) -> bool {
        self.created_at.elapsed() >= Duration::from_millis(TOAST_LIFETIME_MS)
    }
}

/// UI action identifiers, decoupled from key bindings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    NextTab,
    PrevTab,
    SwitchTab(Tab),
    FocusNextField,
    FocusPrevField,
    Generate,
    CopyOutput,
    ClearOutput,
    Save,
    Export,
    OpenSettings,
    CloseSettings,
    SaveSettings,
    ScrollUp,
    ScrollDown,
    Quit,
}

/// The request begin_generation handed out for one tool run
pub enum ToolRequest {
    Draft(DraftRequest),
    Revise(RevisionRequest),
    Cite(CitationRequest),
    Check(CheckRequest),
}

/// Work the event loop must hand to the backend
pub struct PendingGeneration {
    pub tab: Tab,
    pub request: ToolRequest,
}

/// Application state
pub struct App {
    /// Current tool tab
    pub active_tab: Tab,
    /// Per-tool forms
    pub draft_form: Form,
    pub revise_form: Form,
    pub cite_form: Form,
    pub check_form: Form,
    /// Settings dialog state
    pub settings_form: Form,
    pub show_settings: bool,
    /// The four output regions
    pub regions: Regions,
    /// Stats over the draft region
    pub stats: DraftStats,
    /// Active notifications
    pub toasts: Vec<Toast>,
    /// Loading overlay message, if showing
    pub loading: Option<String>,
    /// Output pane scroll offset
    pub output_scroll: u16,
    /// Is the app running?
    pub running: bool,
    /// Generation backend
    pub generator: Arc<dyn Generator>,
    /// Runtime settings (API key placeholder, model)
    pub settings: Settings,
    /// Timestamp of the last save, for the header
    pub last_saved: Option<String>,
    /// Color theme
    pub theme: Theme,

    config: Config,
    workspace_store: WorkspaceStore,
    settings_store: SettingsStore,
    /// Deadline of the pending debounced autosave
    autosave_at: Option<Instant>,
}

impl App {
    pub fn new(
        config: Config,
        settings: Settings,
        settings_store: SettingsStore,
        workspace_store: WorkspaceStore,
        generator: Arc<dyn Generator>,
    ) -> Self {
        let theme = Theme::by_name(&config.ui.theme);
        let settings_form = Form::settings(&settings.api_key, &settings.model);

        Self {
            active_tab: Tab::default(),
            draft_form: Form::draft(),
            revise_form: Form::revise(),
            cite_form: Form::cite(),
            check_form: Form::check(),
            settings_form,
            show_settings: false,
            regions: Regions::new(),
            stats: DraftStats::default(),
            toasts: Vec::new(),
            loading: None,
            output_scroll: 0,
            running: true,
            generator,
            settings,
            last_saved: None,
            theme,
            config,
            workspace_store,
            settings_store,
            autosave_at: None,
        }
    }

    /// Form backing the currently visible panel
    pub fn active_form_mut(&mut self) -> &mut Form {
        if self.show_settings {
            return &mut self.settings_form;
        }
        match self.active_tab {
            Tab::Draft => &mut self.draft_form,
            Tab::Revise => &mut self.revise_form,
            Tab::Cite => &mut self.cite_form,
            Tab::Check => &mut self.check_form,
        }
    }

    pub fn active_form(&self) -> &Form {
        if self.show_settings {
            return &self.settings_form;
        }
        match self.active_tab {
            Tab::Draft => &self.draft_form,
            Tab::Revise => &self.revise_form,
            Tab::Cite => &self.cite_form,
            Tab::Check => &self.check_form,
        }
    }

    /// Execute a UI command. Only `Generate` produces follow-up work for
    /// the event loop.
    pub fn dispatch(&mut self, command: Command) -> Option<PendingGeneration> {
        match command {
            Command::NextTab => self.switch_tab(self.active_tab.cycle()),
            Command::PrevTab => self.switch_tab(self.active_tab.cycle_reverse()),
            Command::SwitchTab(tab) => self.switch_tab(tab),
            Command::FocusNextField => self.active_form_mut().focus_next(),
            Command::FocusPrevField => self.active_form_mut().focus_prev(),
            Command::Generate => return self.begin_generation(),
            Command::CopyOutput => self.copy_output(),
            Command::ClearOutput => self.clear_output(),
            Command::Save => self.save_workspace(),
            Command::Export => self.export(),
            Command::OpenSettings => self.open_settings(),
            Command::CloseSettings => self.show_settings = false,
            Command::SaveSettings => self.save_settings(),
            Command::ScrollUp => self.output_scroll = self.output_scroll.saturating_sub(1),
            Command::ScrollDown => self.output_scroll = self.output_scroll.saturating_add(1),
            Command::Quit => self.running = false,
        }
        None
    }

    fn switch_tab(&mut self, tab: Tab) {
        self.active_tab = tab;
        self.output_scroll = 0;
    }

    /// Validate the active form and, if it passes, show the loading overlay
    /// and hand back the request to run.
    fn begin_generation(&mut self) -> Option<PendingGeneration> {
        let tab = self.active_tab;
        let request = match tab {
            Tab::Draft => {
                let req = self.draft_request();
                if req.topic.trim().is_empty() {
                    self.notify_error(tab.validation_message());
                    return None;
                }
                ToolRequest::Draft(req)
            }
            Tab::Revise => {
                let req = self.revision_request();
                if req.original_text.trim().is_empty() {
                    self.notify_error(tab.validation_message());
                    return None;
                }
                ToolRequest::Revise(req)
            }
            Tab::Cite => {
                let req = self.citation_request();
                if req.title.trim().is_empty() || req.author.trim().is_empty() {
                    self.notify_error(tab.validation_message());
                    return None;
                }
                ToolRequest::Cite(req)
            }
            Tab::Check => {
                let req = self.check_request();
                if req.text.trim().is_empty() {
                    self.notify_error(tab.validation_message());
                    return None;
                }
                ToolRequest::Check(req)
            }
        };

        self.loading = Some(tab.loading_message().to_string());
        Some(PendingGeneration { tab, request })
    }

    /// Apply a finished generation to the owning region.
    pub fn finish_generation(&mut self, tab: Tab, result: Result<String>) {
        self.loading = None;

        let html = match result {
            Ok(html) => html,
            Err(e) => {
                warn!("generation failed: {:#}", e);
                self.notify_error(tab.failure_message());
                return;
            }
        };

        match tab {
            Tab::Draft => {
                self.regions
                    .essay
                    .set(wrap_generated(&html));
                self.update_stats();
                self.save_workspace();
            }
            Tab::Revise => {
                self.regions.improved.set(wrap_generated(&html));
                self.mark_dirty();
            }
            Tab::Cite => {
                self.regions.citations.append(&html);
                self.mark_dirty();
            }
            Tab::Check => {
                self.regions.grammar.set(wrap_generated(&html));
                self.mark_dirty();
            }
        }
        self.output_scroll = 0;
    }

    fn draft_request(&self) -> DraftRequest {
        let form = &self.draft_form;
        DraftRequest {
            essay_type: form.value("essay_type"),
            topic: form.value("topic"),
            target_length: form.value("target_length"),
            academic_level: form.value("academic_level"),
            style: form.value("style"),
            citation_style: form.value("citation_style"),
            key_points: form.value("key_points"),
            sources: form.value("sources"),
            instructions: form.value("instructions"),
        }
    }

    fn revision_request(&self) -> RevisionRequest {
        RevisionRequest {
            original_text: self.revise_form.value("original_text"),
            focus: self.revise_form.value("focus"),
        }
    }

    fn citation_request(&self) -> CitationRequest {
        let form = &self.cite_form;
        CitationRequest {
            style: form.value("style"),
            source_type: form.value("source_type"),
            title: form.value("title"),
            author: form.value("author"),
            year: form.value("year"),
            url: form.value("url"),
            publisher: form.value("publisher"),
        }
    }

    fn check_request(&self) -> CheckRequest {
        let form = &self.check_form;
        CheckRequest {
            text: form.value("text"),
            options: CheckOptions {
                grammar: form.checked("grammar"),
                spelling: form.checked("spelling"),
                style: form.checked("style"),
                punctuation: form.checked("punctuation"),
            },
        }
    }

    /// Recompute stats from the draft region (zero while it is empty)
    pub fn update_stats(&mut self) {
        self.stats = if self.regions.essay.is_placeholder() {
            DraftStats::default()
        } else {
            compute_stats(&self.regions.essay.text())
        };
    }

    /// Persist all four regions, placeholder markup included.
    pub fn save_workspace(&mut self) {
        let workspace = Workspace::new(
            self.regions.essay.html().to_string(),
            self.regions.improved.html().to_string(),
            self.regions.citations.html().to_string(),
            self.regions.grammar.html().to_string(),
        );

        match self.workspace_store.save(&workspace) {
            Ok(()) => {
                self.last_saved = Some(workspace.timestamp.clone());
                self.notify_success("Data saved successfully!");
            }
            Err(e) => {
                warn!("workspace save failed: {:#}", e);
                self.notify_error("Failed to save data");
            }
        }
        self.autosave_at = None;
    }

    /// Restore saved regions. Regions that were placeholders at save time
    /// stay placeholders.
    pub fn load_workspace(&mut self) {
        let workspace = match self.workspace_store.load() {
            Ok(Some(workspace)) => workspace,
            Ok(None) => return,
            Err(e) => {
                warn!("workspace load failed: {:#}", e);
                return;
            }
        };

        for (region, saved) in [
            (&mut self.regions.essay, &workspace.essay),
            (&mut self.regions.improved, &workspace.improved_essay),
            (&mut self.regions.citations, &workspace.citations),
            (&mut self.regions.grammar, &workspace.grammar_results),
        ] {
            if !saved.is_empty() && !saved.contains(PLACEHOLDER_MARKER) {
                region.set(saved.clone());
            }
        }

        self.last_saved = Some(workspace.timestamp);
        self.update_stats();
    }

    /// Schedule a debounced autosave; a new change replaces the deadline.
    fn mark_dirty(&mut self) {
        let debounce = Duration::from_millis(self.config.autosave.debounce_ms);
        self.autosave_at = Some(Instant::now() + debounce);
    }

    /// Periodic housekeeping: toast expiry and due autosaves.
    pub fn tick(&mut self) {
        self.toasts.retain(|toast| !toast.expired());

        if matches!(self.autosave_at, Some(at) if at <= Instant::now()) {
            self.save_workspace();
        }
    }

    fn copy_output(&mut self) {
        let text = self.regions.for_tab(self.active_tab).text();
        match copy_to_clipboard(&text) {
            Ok(()) => self.notify_success("Copied to clipboard!"),
            Err(e) => {
                warn!("clipboard copy failed: {}", e);
                self.notify_error("Failed to copy text");
            }
        }
    }

    fn clear_output(&mut self) {
        self.regions.for_tab_mut(self.active_tab).clear();
        if self.active_tab == Tab::Draft {
            self.update_stats();
        }
        self.output_scroll = 0;
    }

    fn export(&mut self) {
        let essay = self.regions.essay.text();
        if self.regions.essay.is_placeholder() || essay.trim().is_empty() {
            self.notify_error("No essay to export");
            return;
        }

        let dir = self
            .config
            .storage
            .export_dir
            .clone()
            .unwrap_or_else(|| std::path::PathBuf::from("."));
        match export_essay(&essay, &dir) {
            Ok(path) => {
                tracing::info!("exported essay to {}", path.display());
                self.notify_success("Essay exported successfully!");
            }
            Err(e) => {
                warn!("export failed: {}", e);
                self.notify_error("Failed to export essay");
            }
        }
    }

    fn open_settings(&mut self) {
        self.settings_form = Form::settings(&self.settings.api_key, &self.settings.model);
        self.show_settings = true;
    }

    fn save_settings(&mut self) {
        self.settings = Settings {
            api_key: self.settings_form.value("api_key"),
            model: self.settings_form.value("model"),
        };

        match self.settings_store.save(&self.settings) {
            Ok(()) => self.notify_success("Settings saved successfully!"),
            Err(e) => {
                warn!("settings save failed: {:#}", e);
                self.notify_error("Failed to save settings");
            }
        }

        // The backend presents as the configured model, so rebuild it
        self.generator = create_generator(&self.settings, &self.config);
        self.show_settings = false;
    }

    pub fn notify_success(&mut self, message: impl Into<String>) {
        self.toasts.push(Toast::new(message, ToastKind::Success));
    }

    pub fn notify_error(&mut self, message: impl Into<String>) {
        self.toasts.push(Toast::new(message, ToastKind::Error));
    }
}

fn wrap_generated(html: &str) -> String {
    format!("<div class=\"generated-content\">{}</div>", html)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::{GeneratorLatency, MockGenerator, TemplateGenerator};
    use tempfile::TempDir;

    fn test_app_with(generator: Arc<dyn Generator>) -> (App, TempDir) {
        let dir = TempDir::new().unwrap();
        let mut config = Config::default();
        config.autosave.debounce_ms = 0;
        config.storage.export_dir = Some(dir.path().to_path_buf());

        let app = App::new(
            config,
            Settings::default(),
            SettingsStore::new(dir.path()).unwrap(),
            WorkspaceStore::new(dir.path()).unwrap(),
            generator,
        );
        (app, dir)
    }

    fn test_app() -> (App, TempDir) {
        test_app_with(Arc::new(TemplateGenerator::new(
            "gpt-4",
            GeneratorLatency::none(),
        )))
    }

    #[test]
    fn test_initial_state() {
        let (app, _dir) = test_app();
        assert_eq!(app.active_tab, Tab::Draft);
        assert!(app.regions.essay.is_placeholder());
        assert!(app.regions.citations.is_placeholder());
        assert_eq!(app.stats, DraftStats::default());
        assert!(app.loading.is_none());
    }

    #[test]
    fn test_tab_switching() {
        let (mut app, _dir) = test_app();
        app.dispatch(Command::NextTab);
        assert_eq!(app.active_tab, Tab::Revise);
        app.dispatch(Command::SwitchTab(Tab::Check));
        assert_eq!(app.active_tab, Tab::Check);
        app.dispatch(Command::PrevTab);
        assert_eq!(app.active_tab, Tab::Cite);
    }

    #[test]
    fn test_generate_requires_topic() {
        let (mut app, _dir) = test_app();
        let pending = app.dispatch(Command::Generate);
        assert!(pending.is_none());
        assert!(app.loading.is_none());
        assert_eq!(app.toasts.len(), 1);
        assert_eq!(app.toasts[0].kind, ToastKind::Error);
        assert_eq!(app.toasts[0].message, "Please enter an essay topic");
    }

    #[test]
    fn test_generate_shows_loading() {
        let (mut app, _dir) = test_app();
        app.draft_form.set_text("topic", "Climate Policy");
        let pending = app.dispatch(Command::Generate).unwrap();
        assert_eq!(pending.tab, Tab::Draft);
        assert_eq!(app.loading.as_deref(), Some("Generating your essay..."));
    }

    #[tokio::test]
    async fn test_draft_generation_cycle() {
        let (mut app, _dir) = test_app();
        app.draft_form.set_text("topic", "Climate Policy");
        app.draft_form.set_text("target_length", "600");
        app.draft_form.select_value("citation_style", "mla");

        let pending = app.dispatch(Command::Generate).unwrap();
        let result = match pending.request {
            ToolRequest::Draft(req) => app.generator.clone().draft(&req).await,
            _ => panic!("expected a draft request"),
        };
        app.finish_generation(pending.tab, result);

        assert!(app.loading.is_none());
        assert!(!app.regions.essay.is_placeholder());
        assert!(app.regions.essay.html().contains("<h1>Climate Policy</h1>"));
        assert_eq!(app.regions.essay.html().matches("Body Paragraph").count(), 1);
        assert!(app.stats.words > 0);
        // Draft generation persists immediately
        assert!(app.last_saved.is_some());
        assert!(app
            .toasts
            .iter()
            .any(|t| t.message == "Data saved successfully!"));
    }

    #[test]
    fn test_citations_accumulate() {
        let (mut app, _dir) = test_app();
        app.finish_generation(Tab::Cite, Ok("<div class=\"citation-item\">one</div>".into()));
        app.finish_generation(Tab::Cite, Ok("<div class=\"citation-item\">two</div>".into()));

        let html = app.regions.citations.html();
        assert!(html.contains("one") && html.contains("two"));
        assert!(!html.contains(PLACEHOLDER_MARKER));
    }

    #[test]
    fn test_generation_failure_surfaces_toast() {
        let (mut app, _dir) = test_app();
        app.finish_generation(Tab::Check, Err(anyhow::anyhow!("backend down")));
        assert!(app.regions.grammar.is_placeholder());
        assert_eq!(
            app.toasts.last().unwrap().message,
            "Failed to check grammar. Please try again."
        );
    }

    #[test]
    fn test_clear_draft_resets_stats() {
        let (mut app, _dir) = test_app();
        app.finish_generation(Tab::Draft, Ok("<h1>T</h1>\n\n<p>words here</p>".into()));
        assert!(app.stats.words > 0);

        app.dispatch(Command::ClearOutput);
        assert!(app.regions.essay.is_placeholder());
        assert_eq!(app.stats, DraftStats::default());
    }

    #[test]
    fn test_workspace_round_trip_skips_placeholders() {
        let (mut app, dir) = test_app();
        app.finish_generation(Tab::Draft, Ok("<h1>Saved Essay</h1>".into()));

        // Fresh session over the same store
        let mut restored = App::new(
            Config::default(),
            Settings::default(),
            SettingsStore::new(dir.path()).unwrap(),
            WorkspaceStore::new(dir.path()).unwrap(),
            Arc::new(TemplateGenerator::new("gpt-4", GeneratorLatency::none())),
        );
        restored.load_workspace();

        assert!(restored.regions.essay.html().contains("Saved Essay"));
        // Regions that were placeholders at save time stay placeholders
        assert!(restored.regions.improved.is_placeholder());
        assert!(restored.regions.citations.is_placeholder());
        assert!(restored.last_saved.is_some());
    }

    #[test]
    fn test_autosave_fires_after_deadline() {
        let (mut app, _dir) = test_app();
        // Non-draft results schedule the debounced save instead of saving
        app.finish_generation(Tab::Revise, Ok("<h3>Improved</h3>".into()));
        assert!(app.last_saved.is_none());

        // Zero debounce: the next tick is already past the deadline
        app.tick();
        assert!(app.last_saved.is_some());
    }

    #[test]
    fn test_settings_dialog_round_trip() {
        let (mut app, _dir) = test_app();
        app.dispatch(Command::OpenSettings);
        assert!(app.show_settings);

        app.settings_form.set_text("api_key", "sk-test");
        app.settings_form.select_value("model", "claude-3-sonnet");
        app.dispatch(Command::SaveSettings);

        assert!(!app.show_settings);
        assert_eq!(app.settings.api_key, "sk-test");
        assert_eq!(app.settings.model, "claude-3-sonnet");
        assert_eq!(app.generator.name(), "claude-3-sonnet");
    }

    #[test]
    fn test_export_requires_content() {
        let (mut app, _dir) = test_app();
        app.dispatch(Command::Export);
        assert_eq!(app.toasts.last().unwrap().message, "No essay to export");

        app.finish_generation(Tab::Draft, Ok("<h1>T</h1>\n<p>body</p>".into()));
        app.toasts.clear();
        app.dispatch(Command::Export);
        assert_eq!(
            app.toasts.last().unwrap().message,
            "Essay exported successfully!"
        );
    }

    #[tokio::test]
    async fn test_scripted_backend_is_honored() {
        let mut mock = MockGenerator::new();
        mock.expect_revise()
            .returning(|_| Ok("<h3>Improved Essay (general focus)</h3>".to_string()));

        let (mut app, _dir) = test_app_with(Arc::new(mock));
        app.dispatch(Command::SwitchTab(Tab::Revise));
        app.revise_form.set_text("original_text", "Original essay text.");

        let pending = app.dispatch(Command::Generate).unwrap();
        let result = match pending.request {
            ToolRequest::Revise(req) => app.generator.clone().revise(&req).await,
            _ => panic!("expected a revision request"),
        };
        app.finish_generation(Tab::Revise, result);
        assert!(app.regions.improved.html().contains("Improved Essay"));
    }
}
