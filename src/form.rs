use serde::{Deserialize, Serialize};

use crate::fields::{FieldId, FORM_FIELDS};

/// Current value of every style field. Always fully populated; mutated one
/// field at a time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormData {
    pub photo_style: String,
    pub background: String,
    pub angle: String,
    pub color_tone: String,
    pub depth_of_field: String,
    pub props: String,
    pub output_type: String,
}

impl Default for FormData {
    fn default() -> Self {
        let mut data = Self {
            photo_style: String::new(),
            background: String::new(),
            angle: String::new(),
            color_tone: String::new(),
            depth_of_field: String::new(),
            props: String::new(),
            output_type: String::new(),
        };
        for descriptor in FORM_FIELDS {
            data.set(descriptor.id, descriptor.default_value);
        }
        data
    }
}

impl FormData {
    /// Replaces the value for one field, leaving the others untouched. Free
    /// text is taken as-is; choice values are constrained by the presentation
    /// layer, not here.
    pub fn set(&mut self, id: FieldId, value: impl Into<String>) {
        let value = value.into();
        match id {
            FieldId::PhotoStyle => self.photo_style = value,
            FieldId::Background => self.background = value,
            FieldId::Angle => self.angle = value,
            FieldId::ColorTone => self.color_tone = value,
            FieldId::DepthOfField => self.depth_of_field = value,
            FieldId::Props => self.props = value,
            FieldId::OutputType => self.output_type = value,
        }
    }

    pub fn get(&self, id: FieldId) -> &str {
        match id {
            FieldId::PhotoStyle => &self.photo_style,
            FieldId::Background => &self.background,
            FieldId::Angle => &self.angle,
            FieldId::ColorTone => &self.color_tone,
            FieldId::DepthOfField => &self.depth_of_field,
            FieldId::Props => &self.props,
            FieldId::OutputType => &self.output_type,
        }
    }

    /// Appends a freeform styling snippet to the props field: the sole
    /// content (first letter capitalized) when props is empty, otherwise
    /// joined after a comma.
    pub fn apply_inspiration(&mut self, idea: &str) {
        let current = self.props.trim();
        self.props = if current.is_empty() {
            capitalize_first(idea)
        } else {
            format!("{current}, {idea}")
        };
    }
}

fn capitalize_first(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_come_from_the_catalog() {
        let data = FormData::default();
        assert_eq!(data.photo_style, "Natural light");
        assert_eq!(data.background, "Wooden table");
        assert_eq!(data.angle, "45-degree angle");
        assert_eq!(data.color_tone, "Warm tones");
        assert_eq!(data.depth_of_field, "Shallow depth (blurred background)");
        assert_eq!(data.props, "Cutlery, napkin, lemon slices");
        assert_eq!(data.output_type, "Menu image");
    }

    #[test]
    fn set_replaces_exactly_one_field_and_is_idempotent() {
        let mut data = FormData::default();
        let before = data.clone();

        data.set(FieldId::Background, "Marble surface");
        assert_eq!(data.background, "Marble surface");
        assert_eq!(data.photo_style, before.photo_style);
        assert_eq!(data.props, before.props);

        let once = data.clone();
        data.set(FieldId::Background, "Marble surface");
        assert_eq!(data, once);
    }

    #[test]
    fn inspiration_on_empty_props_capitalizes() {
        let mut data = FormData::default();
        data.set(FieldId::Props, "");
        data.apply_inspiration("a dollop of cream");
        assert_eq!(data.props, "A dollop of cream");
    }

    #[test]
    fn inspiration_on_existing_props_appends_unchanged() {
        let mut data = FormData::default();
        data.set(FieldId::Props, "Cutlery");
        data.apply_inspiration("a dollop of cream");
        assert_eq!(data.props, "Cutlery, a dollop of cream");
    }

    #[test]
    fn inspiration_trims_existing_props_before_joining() {
        let mut data = FormData::default();
        data.set(FieldId::Props, "  Cutlery  ");
        data.apply_inspiration("lemon slices");
        assert_eq!(data.props, "Cutlery, lemon slices");
    }
}
