use std::collections::BTreeMap;

use super::{EditBuffer, Field};

/// Open state and chosen value of the labeled dropdowns.
///
/// Every dropdown label projects onto the [`Field`] named by its lower-cased
/// label, the table is resolved once in [`SelectionState::new`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    fields: BTreeMap<String, Field>,
    open: BTreeMap<String, bool>,
    chosen: BTreeMap<String, String>,
}

impl SelectionState {
    /// # Errors
    /// Returns the first label whose lower-cased form is not a field name.
    pub fn new<'a>(labels: impl IntoIterator<Item = &'a str>) -> Result<Self, UnknownLabel> {
        let fields = labels
            .into_iter()
            .map(|label| {
                Field::from_name(&label.to_lowercase())
                    .map(|field| (label.to_owned(), field))
                    .ok_or_else(|| UnknownLabel(label.to_owned()))
            })
            .collect::<Result<_, _>>()?;

        Ok(Self {
            fields,
            ..Default::default()
        })
    }

    pub fn field(&self, label: &str) -> Option<Field> {
        self.fields.get(label).copied()
    }

    pub fn is_open(&self, label: &str) -> bool {
        self.open.get(label).copied().unwrap_or(false)
    }

    pub fn chosen(&self, label: &str) -> Option<&str> {
        self.chosen.get(label).map(String::as_str)
    }

    /// Flip the open state of one dropdown. Closed dropdowns leave the map.
    pub fn toggle(&mut self, label: &str) {
        if self.open.remove(label).is_none() {
            self.open.insert(label.to_owned(), true);
        }
    }

    /// Choose `value` for `label`, mirror it into the buffer and close the
    /// dropdown. Returns `None` without touching anything for unknown labels.
    pub fn select(&mut self, label: &str, value: String, buffer: &mut EditBuffer) -> Option<Field> {
        let field = self.field(label)?;

        buffer.set(field, value.clone());
        self.chosen.insert(label.to_owned(), value);
        self.open.remove(label);

        Some(field)
    }

    /// Replace all chosen values with the buffer's values.
    pub fn reseed(&mut self, buffer: &EditBuffer) {
        self.chosen = self
            .fields
            .iter()
            .map(|(label, field)| (label.clone(), buffer.get(*field).to_owned()))
            .collect();
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownLabel(pub String);

impl core::fmt::Display for UnknownLabel {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "dropdown label {:?} does not name an editable field", self.0)
    }
}

impl std::error::Error for UnknownLabel {}

#[cfg(test)]
mod tests {
    use super::*;

    fn selection() -> SelectionState {
        SelectionState::new(["Category", "Visibility"]).unwrap()
    }

    #[test]
    fn labels_resolve_to_fields() {
        let selection = selection();

        assert_eq!(selection.field("Category"), Some(Field::Category));
        assert_eq!(selection.field("Visibility"), Some(Field::Visibility));
        assert_eq!(selection.field("Tags"), None);
    }

    #[test]
    fn unknown_labels_are_rejected_up_front() {
        let result = SelectionState::new(["Category", "Tags"]);

        assert_eq!(result, Err(UnknownLabel("Tags".to_owned())));
    }

    #[test]
    fn absent_labels_are_closed() {
        assert!(!selection().is_open("Category"));
    }

    #[test]
    fn toggles_are_independent() {
        let mut selection = selection();

        selection.toggle("Visibility");
        selection.toggle("Category");
        assert!(selection.is_open("Category"));
        assert!(selection.is_open("Visibility"));

        selection.toggle("Category");
        assert!(!selection.is_open("Category"));
        assert!(selection.is_open("Visibility"));
    }

    #[test]
    fn select_mirrors_into_buffer_and_closes() {
        for initially_open in [true, false] {
            let mut selection = selection();
            let mut buffer = EditBuffer::default();
            if initially_open {
                selection.toggle("Visibility");
            }

            let field = selection.select("Visibility", "Private".to_owned(), &mut buffer);

            assert_eq!(field, Some(Field::Visibility));
            assert_eq!(selection.chosen("Visibility"), Some("Private"));
            assert_eq!(buffer.visibility, "Private");
            assert!(!selection.is_open("Visibility"));
        }
    }

    #[test]
    fn closed_dropdowns_compare_equal_however_they_were_closed() {
        let mut toggled = selection();
        toggled.toggle("Category");
        toggled.toggle("Category");

        let mut selected = selection();
        let mut buffer = EditBuffer::default();
        selected.toggle("Category");
        selected.select("Category", "Pets".to_owned(), &mut buffer);
        selected.reseed(&EditBuffer::default());

        let mut untouched = selection();
        untouched.reseed(&EditBuffer::default());
        toggled.reseed(&EditBuffer::default());

        assert_eq!(toggled, untouched);
        assert_eq!(selected, untouched);
    }

    #[test]
    fn select_on_unknown_label_changes_nothing() {
        let mut selection = selection();
        let mut buffer = EditBuffer::default();

        assert_eq!(selection.select("Tags", "x".to_owned(), &mut buffer), None);
        assert_eq!(buffer, EditBuffer::default());
        assert_eq!(selection.chosen("Tags"), None);
    }

    #[test]
    fn reseed_replaces_every_choice() {
        let mut selection = selection();
        let mut buffer = EditBuffer::default();
        selection.select("Category", "Music".to_owned(), &mut buffer);

        let seed = EditBuffer {
            category: "Pets".to_owned(),
            visibility: "Public".to_owned(),
            ..Default::default()
        };
        selection.reseed(&seed);

        assert_eq!(selection.chosen("Category"), Some("Pets"));
        assert_eq!(selection.chosen("Visibility"), Some("Public"));
    }
}
