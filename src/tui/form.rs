use crossterm::event::{KeyCode, KeyEvent};
use tui_textarea::TextArea;

use crate::constants::MODEL_CHOICES;

/// One selectable option of a fixed-choice field: (stored value, shown label)
#[derive(Debug, Clone, Copy)]
pub struct SelectOption {
    pub value: &'static str,
    pub label: &'static str,
}

const fn opt(value: &'static str, label: &'static str) -> SelectOption {
    SelectOption { value, label }
}

/// Editable state of a single form field
pub enum FieldState {
    /// Single-line free text
    Text(String),
    /// Fixed options cycled with Left/Right
    Select {
        options: &'static [SelectOption],
        selected: usize,
    },
    /// Multi-line editor
    Multiline(TextArea<'static>),
    /// Boolean toggled with Space
    Toggle(bool),
}

/// A named, labeled field
pub struct FormField {
    pub id: &'static str,
    pub label: &'static str,
    pub state: FieldState,
}

impl FormField {
    fn text(id: &'static str, label: &'static str) -> Self {
        Self {
            id,
            label,
            state: FieldState::Text(String::new()),
        }
    }

    fn text_with(id: &'static str, label: &'static str, initial: &str) -> Self {
        Self {
            id,
            label,
            state: FieldState::Text(initial.to_string()),
        }
    }

    fn select(id: &'static str, label: &'static str, options: &'static [SelectOption]) -> Self {
        Self {
            id,
            label,
            state: FieldState::Select {
                options,
                selected: 0,
            },
        }
    }

    fn multiline(id: &'static str, label: &'static str) -> Self {
        Self {
            id,
            label,
            state: FieldState::Multiline(TextArea::default()),
        }
    }

    fn toggle(id: &'static str, label: &'static str) -> Self {
        Self {
            id,
            label,
            state: FieldState::Toggle(true),
        }
    }

    /// Current value as the string a request record carries
    pub fn value(&self) -> String {
        match &self.state {
            FieldState::Text(text) => text.clone(),
            FieldState::Select { options, selected } => options[*selected].value.to_string(),
            FieldState::Multiline(area) => area.lines().join("\n"),
            FieldState::Toggle(on) => on.to_string(),
        }
    }

    pub fn is_multiline(&self) -> bool {
        matches!(self.state, FieldState::Multiline(_))
    }
}

const ESSAY_TYPES: &[SelectOption] = &[
    opt("argumentative", "Argumentative"),
    opt("expository", "Expository"),
    opt("persuasive", "Persuasive"),
    opt("narrative", "Narrative"),
    opt("descriptive", "Descriptive"),
    opt("analytical", "Analytical"),
    opt("compare-contrast", "Compare & Contrast"),
    opt("cause-effect", "Cause & Effect"),
    opt("research", "Research Paper"),
    opt("literary-analysis", "Literary Analysis"),
];

const ACADEMIC_LEVELS: &[SelectOption] = &[
    opt("high-school", "High School"),
    opt("undergraduate", "Undergraduate"),
    opt("graduate", "Graduate"),
    opt("phd", "PhD"),
];

const WRITING_STYLES: &[SelectOption] = &[
    opt("academic", "Academic"),
    opt("formal", "Formal"),
    opt("analytical", "Analytical"),
    opt("narrative", "Narrative"),
];

const DRAFT_CITATION_STYLES: &[SelectOption] = &[
    opt("none", "None"),
    opt("mla", "MLA"),
    opt("apa", "APA"),
    opt("chicago", "Chicago"),
];

const REVISION_FOCUSES: &[SelectOption] = &[
    opt("general", "General"),
    opt("grammar", "Grammar & Style"),
    opt("structure", "Structure"),
    opt("academic", "Academic Tone"),
    opt("clarity", "Clarity"),
    opt("argument", "Argument"),
];

const CITATION_STYLES: &[SelectOption] = &[opt("mla", "MLA"), opt("apa", "APA")];

const SOURCE_TYPES: &[SelectOption] = &[
    opt("book", "Book"),
    opt("journal", "Journal Article"),
    opt("website", "Website"),
];

/// A focused sequence of fields backing one tool's panel
pub struct Form {
    pub fields: Vec<FormField>,
    pub focused: usize,
}

impl Form {
    pub fn new(fields: Vec<FormField>) -> Self {
        Self { fields, focused: 0 }
    }

    /// The essay drafting form
    pub fn draft() -> Self {
        Self::new(vec![
            FormField::select("essay_type", "Essay type", ESSAY_TYPES),
            FormField::text("topic", "Topic"),
            FormField::text_with("target_length", "Word count", "500"),
            FormField::select("academic_level", "Academic level", ACADEMIC_LEVELS),
            FormField::select("style", "Writing style", WRITING_STYLES),
            FormField::select("citation_style", "Citation style", DRAFT_CITATION_STYLES),
            FormField::multiline("key_points", "Key points"),
            FormField::multiline("sources", "Sources"),
            FormField::text("instructions", "Additional instructions"),
        ])
    }

    /// The essay revision form
    pub fn revise() -> Self {
        Self::new(vec![
            FormField::select("focus", "Improvement focus", REVISION_FOCUSES),
            FormField::multiline("original_text", "Essay to improve"),
        ])
    }

    /// The citation form
    pub fn cite() -> Self {
        Self::new(vec![
            FormField::select("style", "Citation style", CITATION_STYLES),
            FormField::select("source_type", "Source type", SOURCE_TYPES),
            FormField::text("title", "Title"),
            FormField::text("author", "Author"),
            FormField::text("year", "Year"),
            FormField::text("url", "URL"),
            FormField::text("publisher", "Publisher"),
        ])
    }

    /// The grammar check form
    pub fn check() -> Self {
        Self::new(vec![
            FormField::multiline("text", "Text to check"),
            FormField::toggle("grammar", "Grammar"),
            FormField::toggle("spelling", "Spelling"),
            FormField::toggle("style", "Style"),
            FormField::toggle("punctuation", "Punctuation"),
        ])
    }

    /// The settings dialog form
    pub fn settings(api_key: &str, model: &str) -> Self {
        let mut form = Self::new(vec![
            FormField::text_with("api_key", "API key", api_key),
            FormField::select("model", "Model", model_options()),
        ]);
        form.select_value("model", model);
        form
    }

    pub fn focused_field(&self) -> &FormField {
        &self.fields[self.focused]
    }

    pub fn focus_next(&mut self) {
        self.focused = (self.focused + 1) % self.fields.len();
    }

    pub fn focus_prev(&mut self) {
        self.focused = (self.focused + self.fields.len() - 1) % self.fields.len();
    }

    /// Route a key press into the focused field. Returns true if consumed.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        let field = &mut self.fields[self.focused];
        match &mut field.state {
            FieldState::Text(text) => match key.code {
                KeyCode::Char(c) => {
                    text.push(c);
                    true
                }
                KeyCode::Backspace => {
                    text.pop();
                    true
                }
                _ => false,
            },
            FieldState::Select { options, selected } => match key.code {
                KeyCode::Right => {
                    *selected = (*selected + 1) % options.len();
                    true
                }
                KeyCode::Left => {
                    *selected = (*selected + options.len() - 1) % options.len();
                    true
                }
                _ => false,
            },
            FieldState::Multiline(area) => area.input(key),
            FieldState::Toggle(on) => match key.code {
                KeyCode::Char(' ') => {
                    *on = !*on;
                    true
                }
                _ => false,
            },
        }
    }

    /// Value of the field with the given id (empty string if absent)
    pub fn value(&self, id: &str) -> String {
        self.fields
            .iter()
            .find(|f| f.id == id)
            .map(|f| f.value())
            .unwrap_or_default()
    }

    /// Toggle state of the field with the given id
    pub fn checked(&self, id: &str) -> bool {
        self.fields
            .iter()
            .find(|f| f.id == id)
            .map(|f| matches!(f.state, FieldState::Toggle(true)))
            .unwrap_or(false)
    }

    /// Point a select field at the option holding `value`, if present
    pub fn select_value(&mut self, id: &str, value: &str) {
        for field in &mut self.fields {
            if field.id == id {
                if let FieldState::Select { options, selected } = &mut field.state {
                    if let Some(index) = options.iter().position(|o| o.value == value) {
                        *selected = index;
                    }
                }
            }
        }
    }

    /// Replace a text or multiline field's content
    pub fn set_text(&mut self, id: &str, value: &str) {
        for field in &mut self.fields {
            if field.id == id {
                match &mut field.state {
                    FieldState::Text(text) => *text = value.to_string(),
                    FieldState::Multiline(area) => {
                        *area = TextArea::from(value.lines().map(str::to_string));
                    }
                    _ => {}
                }
            }
        }
    }
}

fn model_options() -> &'static [SelectOption] {
    use once_cell::sync::Lazy;
    static OPTIONS: Lazy<Vec<SelectOption>> = Lazy::new(|| {
        MODEL_CHOICES
            .iter()
            .map(|&m| SelectOption { value: m, label: m })
            .collect()
    });
    OPTIONS.as_slice()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventKind, KeyEventState, KeyModifiers};

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    #[test]
    fn test_focus_wraps() {
        let mut form = Form::cite();
        for _ in 0..form.fields.len() {
            form.focus_next();
        }
        assert_eq!(form.focused, 0);

        form.focus_prev();
        assert_eq!(form.focused, form.fields.len() - 1);
    }

    #[test]
    fn test_text_editing() {
        let mut form = Form::cite();
        form.focused = 2; // title
        form.handle_key(press(KeyCode::Char('h')));
        form.handle_key(press(KeyCode::Char('i')));
        assert_eq!(form.value("title"), "hi");

        form.handle_key(press(KeyCode::Backspace));
        assert_eq!(form.value("title"), "h");
    }

    #[test]
    fn test_select_cycles_and_wraps() {
        let mut form = Form::cite();
        assert_eq!(form.value("style"), "mla");

        form.handle_key(press(KeyCode::Right));
        assert_eq!(form.value("style"), "apa");

        form.handle_key(press(KeyCode::Right));
        assert_eq!(form.value("style"), "mla");

        form.handle_key(press(KeyCode::Left));
        assert_eq!(form.value("style"), "apa");
    }

    #[test]
    fn test_toggle() {
        let mut form = Form::check();
        form.focused = 1; // grammar
        assert!(form.checked("grammar"));
        form.handle_key(press(KeyCode::Char(' ')));
        assert!(!form.checked("grammar"));
    }

    #[test]
    fn test_settings_prefill() {
        let form = Form::settings("sk-123", "gpt-3.5-turbo");
        assert_eq!(form.value("api_key"), "sk-123");
        assert_eq!(form.value("model"), "gpt-3.5-turbo");
    }

    #[test]
    fn test_defaults() {
        let form = Form::draft();
        assert_eq!(form.value("essay_type"), "argumentative");
        assert_eq!(form.value("target_length"), "500");
        assert_eq!(form.value("citation_style"), "none");
    }
}
