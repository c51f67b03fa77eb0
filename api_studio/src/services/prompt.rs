use common::error::{AppError, Res};

use crate::misc::styles;

/// Resolves an optional style id to its descriptive prompt text.
/// Absent or empty means "no style"; an unknown id is a validation error.
pub fn resolve_style(style_id: Option<&str>) -> Res<Option<&'static str>> {
    match style_id.map(str::trim) {
        None | Some("") => Ok(None),
        Some(id) => styles::find_style(id)
            .map(|style| Some(style.prompt))
            .ok_or_else(|| AppError::BadRequest(format!("Unknown style: {}", id))),
    }
}

/// Joins the free-text instructions with the selected style's prompt.
/// `free_text + " " + style`, trimmed; an empty result is rejected before
/// any credit check or network call.
pub fn compose_prompt(free_text: &str, style: Option<&str>) -> Res<String> {
    let full = match style {
        Some(style) => format!("{} {}", free_text, style).trim().to_string(),
        None => free_text.trim().to_string(),
    };
    if full.is_empty() {
        return Err(AppError::BadRequest(
            "Please describe the change or choose a style.".to_string(),
        ));
    }
    Ok(full)
}

pub fn compose_from_request(prompt: &str, style_id: Option<&str>) -> Res<String> {
    let style = resolve_style(style_id)?;
    compose_prompt(prompt, style)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_prompt_and_no_style_is_invalid() {
        assert!(compose_prompt("", None).is_err());
        assert!(compose_prompt("   ", Some("")).is_err());
    }

    #[test]
    fn free_text_alone_passes_through_trimmed() {
        assert_eq!(
            compose_prompt("paint walls blue", None).unwrap(),
            "paint walls blue"
        );
        assert_eq!(compose_prompt("  paint  ", None).unwrap(), "paint");
    }

    #[test]
    fn style_alone_is_enough() {
        assert_eq!(
            compose_prompt("", Some("Modern style text")).unwrap(),
            "Modern style text"
        );
    }

    #[test]
    fn free_text_and_style_joined_by_single_space() {
        assert_eq!(
            compose_prompt("paint walls blue", Some("Modern style text")).unwrap(),
            "paint walls blue Modern style text"
        );
    }

    #[test]
    fn known_style_id_resolves_to_prompt_text() {
        let style = resolve_style(Some("modern")).unwrap();
        assert!(style.unwrap().contains("modern"));
    }

    #[test]
    fn unknown_style_id_is_rejected() {
        assert!(resolve_style(Some("brutalist")).is_err());
    }

    #[test]
    fn missing_style_id_means_no_style() {
        assert_eq!(resolve_style(None).unwrap(), None);
        assert_eq!(resolve_style(Some("  ")).unwrap(), None);
    }
}
