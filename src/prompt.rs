use crate::form::FormData;

/// Maps the form state to the instruction text sent alongside the photo.
/// Deterministic: the same state always yields byte-identical output, and
/// every field's current value appears verbatim.
pub fn build_prompt(data: &FormData) -> String {
    let props = if data.props.is_empty() {
        "none"
    } else {
        data.props.as_str()
    };

    format!(
        "Style: {photo_style} on a {background} with a {angle}. \
         The mood is set by {color_tone} and a {depth_of_field}. \
         Subtle props include {props}. \
         The image is high-resolution, photorealistic, and suitable for a {output_type}.",
        photo_style = data.photo_style,
        background = data.background,
        angle = data.angle,
        color_tone = data.color_tone,
        depth_of_field = data.depth_of_field,
        props = props,
        output_type = data.output_type,
    )
}
