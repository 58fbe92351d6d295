//! Sections and their formatting modifiers.

use super::{Colour, Font, Table};
use serde::{Deserialize, Serialize};
use std::collections::btree_map;
use std::collections::BTreeMap;
use std::fmt;

/// A maximal run of text sharing one set of modifiers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Section {
    /// The text content
    pub text: String,

    /// Formatting snapshot taken when the section was emitted
    pub modifiers: Modifiers,
}

impl Section {
    /// Create a new section.
    pub fn new(text: impl Into<String>, modifiers: Modifiers) -> Self {
        Self {
            text: text.into(),
            modifiers,
        }
    }

    /// Create an unformatted section.
    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text, Modifiers::new())
    }

    /// The table carried by this section, if any.
    pub fn table(&self) -> Option<&Table> {
        self.modifiers.table()
    }

    /// Mutable access to the carried table.
    pub fn table_mut(&mut self) -> Option<&mut Table> {
        self.modifiers.table_mut()
    }

    /// Check whether the section carries a table.
    pub fn is_table(&self) -> bool {
        self.table().is_some()
    }

    /// Get plain text content, expanding tables.
    pub fn plain_text(&self) -> String {
        match self.table() {
            Some(table) => table.plain_text(),
            None => self.text.clone(),
        }
    }
}

/// Keys a section may carry in its modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModifierKey {
    Font,
    FontSize,
    Bold,
    Italic,
    Underline,
    Superscript,
    Subscript,
    Strikethrough,
    #[serde(rename = "smallcaps")]
    SmallCaps,
    ForegroundColour,
    BackgroundColour,
    Justification,
    FirstLineIndent,
    LeftIndent,
    RightIndent,
    LeftMargin,
    RightMargin,
    TopMargin,
    BottomMargin,
    SpaceBefore,
    SpaceAfter,
    Picture,
    PictureFormat,
    PictureWidth,
    PictureHeight,
    PictureGoalWidth,
    PictureGoalHeight,
    PictureScaleX,
    PictureScaleY,
    Table,
    Paragraph,
    Newline,
    Tab,
    #[serde(rename = "lquote")]
    LQuote,
    #[serde(rename = "rquote")]
    RQuote,
    #[serde(rename = "ldblquote")]
    LDblQuote,
    #[serde(rename = "rdblquote")]
    RDblQuote,
    #[serde(rename = "emdash")]
    EmDash,
    #[serde(rename = "endash")]
    EnDash,
    Nbsp,
}

impl ModifierKey {
    /// Boundary markers that never carry over into a nested group.
    pub const NON_INHERITED: [ModifierKey; 7] = [
        ModifierKey::Paragraph,
        ModifierKey::Newline,
        ModifierKey::Tab,
        ModifierKey::LQuote,
        ModifierKey::RQuote,
        ModifierKey::LDblQuote,
        ModifierKey::RDblQuote,
    ];

    /// Whether a nested group inherits this key from its parent.
    pub fn is_inherited(self) -> bool {
        !Self::NON_INHERITED.contains(&self)
    }
}

/// Paragraph justification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Justification {
    Left,
    Right,
    Center,
    Full,
}

/// A modifier value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Bool(bool),
    Integer(i32),
    Float(f64),
    Justification(Justification),
    Text(String),
    Colour(Colour),
    Font(Font),
    Table(Table),
}

impl Value {
    /// Get the value as a boolean.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Get the value as a float. Integers are widened.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            Value::Integer(i) => Some(f64::from(*i)),
            _ => None,
        }
    }

    /// Get the value as an integer.
    pub fn as_i32(&self) -> Option<i32> {
        match self {
            Value::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// Get the value as a string slice.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Bool(b) => write!(f, "{}", b),
            Value::Integer(i) => write!(f, "{}", i),
            Value::Float(x) => write!(f, "{}", x),
            Value::Justification(j) => write!(f, "{:?}", j),
            Value::Text(s) => write!(f, "{:?}", s),
            Value::Colour(c) => write!(f, "{}", c),
            Value::Font(font) => write!(f, "{}", font),
            Value::Table(table) => write!(
                f,
                "table ({} rows, {} columns)",
                table.row_count(),
                table.column_count()
            ),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Integer(i)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<Justification> for Value {
    fn from(j: Justification) -> Self {
        Value::Justification(j)
    }
}

impl From<Colour> for Value {
    fn from(c: Colour) -> Self {
        Value::Colour(c)
    }
}

impl From<Font> for Value {
    fn from(f: Font) -> Self {
        Value::Font(f)
    }
}

impl From<Table> for Value {
    fn from(t: Table) -> Self {
        Value::Table(t)
    }
}

/// An owned mapping of modifier keys to values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Modifiers(BTreeMap<ModifierKey, Value>);

impl Modifiers {
    /// Create an empty modifier set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a modifier, replacing any previous value.
    pub fn insert(&mut self, key: ModifierKey, value: impl Into<Value>) {
        self.0.insert(key, value.into());
    }

    /// Remove a modifier.
    pub fn remove(&mut self, key: ModifierKey) -> Option<Value> {
        self.0.remove(&key)
    }

    /// Get a modifier value.
    pub fn get(&self, key: ModifierKey) -> Option<&Value> {
        self.0.get(&key)
    }

    /// Check if a modifier is present.
    pub fn contains(&self, key: ModifierKey) -> bool {
        self.0.contains_key(&key)
    }

    /// Remove every modifier.
    pub fn clear(&mut self) {
        self.0.clear();
    }

    /// Number of modifiers set.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if no modifiers are set.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over key/value pairs in key order.
    pub fn iter(&self) -> btree_map::Iter<'_, ModifierKey, Value> {
        self.0.iter()
    }

    /// Copy of these modifiers without the non-inherited boundary markers.
    pub fn inherited(&self) -> Self {
        Self(
            self.0
                .iter()
                .filter(|(key, _)| key.is_inherited())
                .map(|(key, value)| (*key, value.clone()))
                .collect(),
        )
    }

    /// True when the key is set to `true`.
    pub fn flag(&self, key: ModifierKey) -> bool {
        self.get(key).and_then(Value::as_bool).unwrap_or(false)
    }

    /// Numeric value of a key.
    pub fn number(&self, key: ModifierKey) -> Option<f64> {
        self.get(key).and_then(Value::as_f64)
    }

    /// Font size in points.
    pub fn font_size(&self) -> Option<f64> {
        self.number(ModifierKey::FontSize)
    }

    /// The selected font.
    pub fn font(&self) -> Option<&Font> {
        match self.get(ModifierKey::Font) {
            Some(Value::Font(font)) => Some(font),
            _ => None,
        }
    }

    /// A colour modifier (foreground or background).
    pub fn colour(&self, key: ModifierKey) -> Option<&Colour> {
        match self.get(key) {
            Some(Value::Colour(colour)) => Some(colour),
            _ => None,
        }
    }

    /// Paragraph justification.
    pub fn justification(&self) -> Option<Justification> {
        match self.get(ModifierKey::Justification) {
            Some(Value::Justification(j)) => Some(*j),
            _ => None,
        }
    }

    /// The carried table.
    pub fn table(&self) -> Option<&Table> {
        match self.get(ModifierKey::Table) {
            Some(Value::Table(table)) => Some(table),
            _ => None,
        }
    }

    /// Mutable access to the carried table.
    pub fn table_mut(&mut self) -> Option<&mut Table> {
        match self.0.get_mut(&ModifierKey::Table) {
            Some(Value::Table(table)) => Some(table),
            _ => None,
        }
    }
}

impl FromIterator<(ModifierKey, Value)> for Modifiers {
    fn from_iter<I: IntoIterator<Item = (ModifierKey, Value)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Modifiers {
    type Item = (&'a ModifierKey, &'a Value);
    type IntoIter = btree_map::Iter<'a, ModifierKey, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inherited_drops_boundary_markers() {
        let mut mods = Modifiers::new();
        mods.insert(ModifierKey::Bold, true);
        mods.insert(ModifierKey::Italic, true);
        mods.insert(ModifierKey::Newline, true);
        mods.insert(ModifierKey::LDblQuote, true);

        let child = mods.inherited();
        assert_eq!(child.len(), 2);
        assert!(child.flag(ModifierKey::Bold));
        assert!(child.flag(ModifierKey::Italic));
        assert!(!child.contains(ModifierKey::Newline));
        assert!(!child.contains(ModifierKey::LDblQuote));
    }

    #[test]
    fn test_inherited_is_a_snapshot() {
        let mut parent = Modifiers::new();
        parent.insert(ModifierKey::Bold, true);
        let mut child = parent.inherited();
        child.insert(ModifierKey::Underline, true);

        assert!(!parent.contains(ModifierKey::Underline));
    }

    #[test]
    fn test_non_inherited_keys() {
        assert!(!ModifierKey::Paragraph.is_inherited());
        assert!(!ModifierKey::Tab.is_inherited());
        assert!(ModifierKey::FontSize.is_inherited());
        assert!(ModifierKey::Table.is_inherited());
    }

    #[test]
    fn test_value_accessors() {
        assert_eq!(Value::from(15.0).as_f64(), Some(15.0));
        assert_eq!(Value::from(3).as_f64(), Some(3.0));
        assert_eq!(Value::from(true).as_bool(), Some(true));
        assert_eq!(Value::from("jpeg").as_str(), Some("jpeg"));
        assert_eq!(Value::from(true).as_i32(), None);
    }

    #[test]
    fn test_section_plain_text_expands_table() {
        let mut table = Table::new();
        table.add_row();
        if let Some(row) = table.current_row_mut() {
            row.cell_mut(0).sections.push(Section::plain("a"));
            row.cell_mut(1).sections.push(Section::plain("b"));
        }
        let mut mods = Modifiers::new();
        mods.insert(ModifierKey::Table, table);
        let section = Section::new("", mods);

        assert!(section.is_table());
        assert_eq!(section.plain_text(), "a\tb");
    }

    #[test]
    fn test_modifiers_serialize_as_map() {
        let mut mods = Modifiers::new();
        mods.insert(ModifierKey::FontSize, 15.0);
        mods.insert(ModifierKey::SmallCaps, true);
        let json = serde_json::to_string(&mods).unwrap();
        assert_eq!(json, r#"{"font_size":15.0,"smallcaps":true}"#);
    }
}
