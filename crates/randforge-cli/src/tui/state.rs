use rand_chacha::ChaCha8Rng;

use randforge_core::{ColorFormat, GenerationRequest, Mode, generate};

/// Menu entries in display order.
pub const MENU: &[(&str, ModeKind)] = &[
    ("Generate Numbers", ModeKind::Number),
    ("Generate Floating Point Numbers", ModeKind::Float),
    ("Generate Colors", ModeKind::Color),
    ("Generate Strings", ModeKind::String),
    ("Generate Custom Pattern", ModeKind::Custom),
    ("Generate from Custom List", ModeKind::List),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeKind {
    Number,
    Float,
    Color,
    String,
    Custom,
    List,
}

impl ModeKind {
    pub fn title(self) -> &'static str {
        match self {
            ModeKind::Number => "Generate Numbers",
            ModeKind::Float => "Generate Floating Point Numbers",
            ModeKind::Color => "Generate Colors",
            ModeKind::String => "Generate Strings",
            ModeKind::Custom => "Generate Custom Pattern",
            ModeKind::List => "Generate from Custom List",
        }
    }

    pub fn hint(self) -> &'static str {
        match self {
            ModeKind::Number => "Exclusions are comma-separated, e.g. 13,42",
            ModeKind::Float => "Values are rendered with the chosen decimals",
            ModeKind::Color => "Formats: hex, rgb, hsl",
            ModeKind::String => {
                "Patterns: alphanumeric, alpha, numeric, lowercase, uppercase, hex, symbols, \
                 alphanumeric_symbols"
            }
            ModeKind::Custom => "Placeholders: {d} {l} {u} {a} {x} {s} {w}, e.g. {u}{u}-{d}{d}",
            ModeKind::List => "Items are comma-separated, e.g. red,green,blue",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Field {
    pub label: &'static str,
    pub value: String,
}

impl Field {
    fn new(label: &'static str, default: &str) -> Self {
        Self {
            label,
            value: default.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Menu,
    Form,
    Results,
}

/// Interactive session state. One rng instance lives for the whole session so
/// a fixed seed makes the menu deterministic too.
pub struct App {
    pub rng: ChaCha8Rng,
    pub screen: Screen,
    pub menu_idx: usize,
    pub mode: ModeKind,
    pub fields: Vec<Field>,
    pub field_idx: usize,
    pub results: Vec<String>,
    pub error: Option<String>,
    pub should_quit: bool,
}

impl App {
    pub fn new(rng: ChaCha8Rng) -> Self {
        Self {
            rng,
            screen: Screen::Menu,
            menu_idx: 0,
            mode: ModeKind::Number,
            fields: Vec::new(),
            field_idx: 0,
            results: Vec::new(),
            error: None,
            should_quit: false,
        }
    }

    pub fn open_form(&mut self, kind: ModeKind) {
        self.mode = kind;
        self.fields = fields_for(kind);
        self.field_idx = 0;
        self.screen = Screen::Form;
    }

    pub fn back_to_menu(&mut self) {
        self.screen = Screen::Menu;
        self.results.clear();
        self.error = None;
    }

    /// Parses the form, runs the engine, and lands on the results screen with
    /// either the full value list or a single error message.
    pub fn submit(&mut self) {
        match build_request(self.mode, &self.fields) {
            Ok(request) => match generate(&request, &mut self.rng) {
                Ok(values) => {
                    self.results = values;
                    self.error = None;
                }
                Err(err) => {
                    self.results.clear();
                    self.error = Some(err.to_string());
                }
            },
            Err(message) => {
                self.results.clear();
                self.error = Some(message);
            }
        }
        self.screen = Screen::Results;
    }
}

fn fields_for(kind: ModeKind) -> Vec<Field> {
    match kind {
        ModeKind::Number => vec![
            Field::new("Minimum value", "1"),
            Field::new("Maximum value", "100"),
            Field::new("Exclude (comma-separated)", ""),
            Field::new("How many", "1"),
        ],
        ModeKind::Float => vec![
            Field::new("Minimum value", "0"),
            Field::new("Maximum value", "1"),
            Field::new("Decimal places", "2"),
            Field::new("How many", "1"),
        ],
        ModeKind::Color => vec![
            Field::new("Format (hex/rgb/hsl)", "hex"),
            Field::new("How many", "1"),
        ],
        ModeKind::String => vec![
            Field::new("Length", "10"),
            Field::new("Pattern", "alphanumeric"),
            Field::new("Exclude characters", ""),
            Field::new("How many", "1"),
        ],
        ModeKind::Custom => vec![
            Field::new("Template", ""),
            Field::new("How many", "1"),
        ],
        ModeKind::List => vec![
            Field::new("Items (comma-separated)", ""),
            Field::new("Unique only? (y/n)", "n"),
            Field::new("How many", "1"),
        ],
    }
}

fn parse_field<T: std::str::FromStr>(field: &Field) -> Result<T, String> {
    field
        .value
        .trim()
        .parse()
        .map_err(|_| format!("invalid {}: '{}'", field.label.to_lowercase(), field.value))
}

fn parse_csv<T: std::str::FromStr>(field: &Field) -> Result<Vec<T>, String> {
    field
        .value
        .split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(|token| {
            token
                .parse()
                .map_err(|_| format!("invalid value in {}: '{token}'", field.label.to_lowercase()))
        })
        .collect()
}

fn build_request(kind: ModeKind, fields: &[Field]) -> Result<GenerationRequest, String> {
    let (mode, count) = match kind {
        ModeKind::Number => (
            Mode::Number {
                min: parse_field(&fields[0])?,
                max: parse_field(&fields[1])?,
                exclude: parse_csv(&fields[2])?,
            },
            parse_field(&fields[3])?,
        ),
        ModeKind::Float => (
            Mode::Float {
                min: parse_field(&fields[0])?,
                max: parse_field(&fields[1])?,
                decimals: parse_field(&fields[2])?,
            },
            parse_field(&fields[3])?,
        ),
        ModeKind::Color => {
            let format = match fields[0].value.trim() {
                "hex" | "" => ColorFormat::Hex,
                "rgb" => ColorFormat::Rgb,
                "hsl" => ColorFormat::Hsl,
                other => return Err(format!("unknown color format '{other}'")),
            };
            (Mode::Color { format }, parse_field(&fields[1])?)
        }
        ModeKind::String => (
            Mode::String {
                length: parse_field(&fields[0])?,
                pattern: fields[1].value.trim().to_string(),
                exclude_chars: fields[2].value.chars().collect(),
            },
            parse_field(&fields[3])?,
        ),
        ModeKind::Custom => (
            Mode::Custom {
                template: fields[0].value.clone(),
            },
            parse_field(&fields[1])?,
        ),
        ModeKind::List => (
            Mode::List {
                items: fields[0]
                    .value
                    .split(',')
                    .map(|item| item.trim().to_string())
                    .filter(|item| !item.is_empty())
                    .collect(),
                unique: fields[1].value.trim().eq_ignore_ascii_case("y"),
            },
            parse_field(&fields[2])?,
        ),
    };
    Ok(GenerationRequest { mode, count })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(kind: ModeKind, values: &[&str]) -> Vec<Field> {
        let mut fields = fields_for(kind);
        for (field, value) in fields.iter_mut().zip(values) {
            field.value = value.to_string();
        }
        fields
    }

    #[test]
    fn number_form_builds_a_request() {
        let fields = filled(ModeKind::Number, &["1", "10", "3,4", "5"]);
        let request = build_request(ModeKind::Number, &fields).expect("valid form");
        assert_eq!(
            request.mode,
            Mode::Number {
                min: 1,
                max: 10,
                exclude: vec![3, 4],
            }
        );
        assert_eq!(request.count, 5);
    }

    #[test]
    fn defaults_build_without_edits() {
        for (_, kind) in MENU {
            if matches!(kind, ModeKind::Custom | ModeKind::List) {
                continue;
            }
            assert!(build_request(*kind, &fields_for(*kind)).is_ok());
        }
    }

    #[test]
    fn bad_numbers_surface_a_message() {
        let fields = filled(ModeKind::Number, &["one", "10", "", "1"]);
        let err = build_request(ModeKind::Number, &fields).expect_err("invalid form");
        assert!(err.contains("minimum value"));
    }

    #[test]
    fn list_form_parses_items_and_uniqueness() {
        let fields = filled(ModeKind::List, &["a, b ,c", "Y", "2"]);
        let request = build_request(ModeKind::List, &fields).expect("valid form");
        assert_eq!(
            request.mode,
            Mode::List {
                items: vec!["a".to_string(), "b".to_string(), "c".to_string()],
                unique: true,
            }
        );
    }
}
