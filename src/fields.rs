use serde::{Deserialize, Serialize};

/// Identifier for one style field. The set is fixed; every field always
/// carries a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldId {
    PhotoStyle,
    Background,
    Angle,
    ColorTone,
    DepthOfField,
    Props,
    OutputType,
}

impl FieldId {
    pub fn as_str(self) -> &'static str {
        match self {
            FieldId::PhotoStyle => "photo_style",
            FieldId::Background => "background",
            FieldId::Angle => "angle",
            FieldId::ColorTone => "color_tone",
            FieldId::DepthOfField => "depth_of_field",
            FieldId::Props => "props",
            FieldId::OutputType => "output_type",
        }
    }
}

/// How a field is edited: a fixed choice list or free text. Renderers dispatch
/// on the variant, never on a type string.
#[derive(Debug, Clone, Copy)]
pub enum FieldKind {
    Select { options: &'static [&'static str] },
    Textarea { placeholder: &'static str },
}

#[derive(Debug, Clone, Copy)]
pub struct FormField {
    pub id: FieldId,
    pub label: &'static str,
    pub description: &'static str,
    pub kind: FieldKind,
    pub default_value: &'static str,
}

pub const FORM_FIELDS: &[FormField] = &[
    FormField {
        id: FieldId::PhotoStyle,
        label: "Photography Style",
        description: "The overall lighting and feel of the shot.",
        kind: FieldKind::Select {
            options: &[
                "Natural light",
                "Studio lighting",
                "Moody tone",
                "Bright & airy",
                "Minimalist",
                "Rustic",
                "Cinematic",
                "Vintage film",
                "Gourmet magazine",
                "High contrast",
            ],
        },
        default_value: "Natural light",
    },
    FormField {
        id: FieldId::Background,
        label: "Background",
        description: "The surface or setting for the dish.",
        kind: FieldKind::Select {
            options: &[
                "Wooden table",
                "Marble surface",
                "Dark textured background",
                "Plain pastel color",
                "Restaurant setup",
                "Outdoor daylight",
            ],
        },
        default_value: "Wooden table",
    },
    FormField {
        id: FieldId::Angle,
        label: "Camera Angle",
        description: "The perspective from which the photo is taken.",
        kind: FieldKind::Select {
            options: &["Top-down (flat lay)", "45-degree angle", "Eye-level shot"],
        },
        default_value: "45-degree angle",
    },
    FormField {
        id: FieldId::ColorTone,
        label: "Color Tone & Mood",
        description: "The color cast that influences the mood.",
        kind: FieldKind::Select {
            options: &["Warm tones", "Cool tones", "Neutral tones"],
        },
        default_value: "Warm tones",
    },
    FormField {
        id: FieldId::DepthOfField,
        label: "Depth of Field",
        description: "How much of the background is in focus.",
        kind: FieldKind::Select {
            options: &[
                "Shallow depth (blurred background)",
                "Deep focus (everything sharp)",
            ],
        },
        default_value: "Shallow depth (blurred background)",
    },
    FormField {
        id: FieldId::Props,
        label: "Props (Optional)",
        description: "Mention optional props like cutlery, napkins, herbs, etc.",
        kind: FieldKind::Textarea {
            placeholder:
                "e.g., A silver fork, a white linen napkin, and a few scattered fresh herbs.",
        },
        default_value: "Cutlery, napkin, lemon slices",
    },
    FormField {
        id: FieldId::OutputType,
        label: "Output Intent",
        description: "The intended use for the final image.",
        kind: FieldKind::Select {
            options: &[
                "Social media post",
                "Menu image",
                "Advertisement",
                "Website hero image",
            ],
        },
        default_value: "Menu image",
    },
];

/// Ready-made prop and garnish snippets offered next to the props field.
pub const PREDEFINED_INSPIRATIONS: &[&str] = &[
    "A swirl of balsamic glaze",
    "Scattered fresh herbs",
    "A side of lemon wedges",
    "Dusted with powdered sugar",
    "A dollop of cream",
    "Elegant silver cutlery",
    "A rustic linen napkin",
    "Splashes of olive oil",
    "Toasted sesame seeds",
    "A sprinkle of chili flakes",
];

pub fn field(id: FieldId) -> &'static FormField {
    FORM_FIELDS
        .iter()
        .find(|descriptor| descriptor.id == id)
        .expect("every field id has a descriptor")
}
