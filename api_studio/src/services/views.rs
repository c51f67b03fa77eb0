use common::error::{AppError, Res};
use gemini::{ImageModel, InlineImage};

/// The five fixed interior perspectives, in the order they are attempted.
pub const VIEW_CATEGORIES: [&str; 5] = [
    "of the living room, showing the sofa and the TV area",
    "of the kitchen, focusing on the countertop and the cabinets",
    "of the main bedroom, showing the bed and the window",
    "of the main bathroom, focusing on the shower and the sink",
    "of a wide angle of the dining area, showing the table and the chairs",
];

fn view_prompt(design_prompt: &str, view: &str) -> String {
    format!(
        "From this 3D scale model, generate a single photorealistic eye-level image of an internal view {}. The image should look as if a person were standing inside the space. Incorporate the following design instructions: \"{}\". Generate ONLY the image, with no text or explanation.",
        view, design_prompt
    )
}

/// Attempts all five views sequentially against the 3D concept image.
/// Individual failures are logged and skipped; the order of the successes
/// follows the category order. Zero successes is a terminal failure.
///
/// Sequential on purpose: one in-flight call at a time avoids provider
/// rate limits and lets partial batches succeed.
pub async fn generate_internal_views<M: ImageModel>(
    model: &M,
    concept: &InlineImage,
    design_prompt: &str,
) -> Res<Vec<InlineImage>> {
    let mut generated = Vec::new();

    for view in VIEW_CATEGORIES {
        let prompt = view_prompt(design_prompt, view);
        match model.generate_image(Some(concept), &prompt).await {
            Ok(image) => generated.push(image),
            Err(e) => {
                log::error!("Failed to generate the internal view {}: {}", view, e);
            }
        }
    }

    if generated.is_empty() {
        return Err(AppError::Upstream(
            "The AI could not generate any of the internal views. This may be a temporary problem, or the 3D model may not have been clear enough. Try generating a variation of the model or try again later.".to_string(),
        ));
    }

    Ok(generated)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    /// Scripted model: one outcome per call, in order. `None` simulates a
    /// failed call; `Some(tag)` yields an image tagged with the prompt seen.
    struct ScriptedModel {
        outcomes: RefCell<Vec<Option<&'static str>>>,
        prompts: RefCell<Vec<String>>,
    }

    impl ScriptedModel {
        fn new(outcomes: Vec<Option<&'static str>>) -> Self {
            Self {
                outcomes: RefCell::new(outcomes),
                prompts: RefCell::new(Vec::new()),
            }
        }
    }

    impl ImageModel for ScriptedModel {
        fn generate_image(
            &self,
            _image: Option<&InlineImage>,
            prompt: &str,
        ) -> impl Future<Output = Res<InlineImage>> {
            self.prompts.borrow_mut().push(prompt.to_string());
            let outcome = self.outcomes.borrow_mut().remove(0);
            async move {
                match outcome {
                    Some(tag) => Ok(InlineImage {
                        mime_type: "image/png".to_string(),
                        data: tag.to_string(),
                    }),
                    None => Err(AppError::Upstream("no image".to_string())),
                }
            }
        }
    }

    fn concept() -> InlineImage {
        InlineImage {
            mime_type: "image/png".to_string(),
            data: "Y29uY2VwdA==".to_string(),
        }
    }

    #[tokio::test]
    async fn partial_success_keeps_order_and_skips_failures() {
        let model = ScriptedModel::new(vec![
            Some("living"),
            None,
            Some("bedroom"),
            None,
            Some("dining"),
        ]);

        let views = generate_internal_views(&model, &concept(), "warm tones")
            .await
            .unwrap();

        let tags: Vec<&str> = views.iter().map(|v| v.data.as_str()).collect();
        assert_eq!(tags, vec!["living", "bedroom", "dining"]);
    }

    #[tokio::test]
    async fn all_five_attempts_run_even_after_failures() {
        let model = ScriptedModel::new(vec![None, None, None, None, Some("dining")]);

        let views = generate_internal_views(&model, &concept(), "warm tones")
            .await
            .unwrap();

        assert_eq!(views.len(), 1);
        let prompts = model.prompts.borrow();
        assert_eq!(prompts.len(), 5);
        for (prompt, view) in prompts.iter().zip(VIEW_CATEGORIES) {
            assert!(prompt.contains(view));
            assert!(prompt.contains("warm tones"));
        }
    }

    #[tokio::test]
    async fn zero_successes_is_a_terminal_error() {
        let model = ScriptedModel::new(vec![None; 5]);

        let outcome = generate_internal_views(&model, &concept(), "warm tones").await;

        match outcome {
            Err(AppError::Upstream(message)) => assert!(!message.is_empty()),
            other => panic!("expected terminal upstream error, got {:?}", other.is_ok()),
        }
    }
}
