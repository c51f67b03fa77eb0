use common::error::Res;
use db::models::profile::Profile;
use gemini::{GeminiClient, InlineImage};
use sqlx::PgPool;

use crate::{
    dtos::studio::{
        CreativityRequest, EstimateRequest, EstimateResponse, GenerateRequest,
        InternalViewsResponse, PaidImageResponse,
    },
    services::{
        credits::{self, PgLedger},
        estimate, prompt, views,
    },
};

fn redesign_instruction(full_prompt: &str) -> String {
    format!(
        "Edit the image to apply the following instructions. Generate only the resulting image, with no text, commentary or explanation: \"{}\"",
        full_prompt
    )
}

fn concept_instruction(full_prompt: &str) -> String {
    format!(
        "From this floor plan, create a high-definition photorealistic 3D rendering with an isometric view. The rendering should look like a professional scale model. Incorporate the following design instructions. Generate only the resulting image, with no text or explanation: \"{}\"",
        full_prompt
    )
}

fn creativity_instruction(prompt: &str) -> String {
    format!(
        "Create a high-quality photorealistic image based on the following description: \"{}\". Generate ONLY the resulting image, with no text, commentary or explanation.",
        prompt
    )
}

/// Shared flow of the three image-conditioned single-image operations:
/// validate, charge-check, generate, debit on success.
async fn generate_from_image(
    pool: &PgPool,
    client: &GeminiClient,
    profile: &Profile,
    req: GenerateRequest,
    cost: i32,
    instruction: fn(&str) -> String,
) -> Res<PaidImageResponse> {
    let full_prompt = prompt::compose_from_request(&req.prompt, req.style_id.as_deref())?;
    let input = InlineImage::from_data_url(&req.image)?;

    let paid = credits::run_paid(profile, cost, &PgLedger(pool), || async {
        client.generate_image(Some(&input), &instruction(&full_prompt)).await
    })
    .await?;

    Ok(PaidImageResponse {
        image: paid.result.to_data_url(),
        cost,
        credits: paid.credits,
        warning: paid.warning,
    })
}

pub async fn redesign(
    pool: &PgPool,
    client: &GeminiClient,
    profile: &Profile,
    req: GenerateRequest,
) -> Res<PaidImageResponse> {
    generate_from_image(
        pool,
        client,
        profile,
        req,
        credits::REDESIGN_COST,
        redesign_instruction,
    )
    .await
}

pub async fn concept_from_plan(
    pool: &PgPool,
    client: &GeminiClient,
    profile: &Profile,
    req: GenerateRequest,
) -> Res<PaidImageResponse> {
    generate_from_image(
        pool,
        client,
        profile,
        req,
        credits::CONCEPT_COST,
        concept_instruction,
    )
    .await
}

/// A variation re-runs the redesign instruction against a prior result.
pub async fn variation(
    pool: &PgPool,
    client: &GeminiClient,
    profile: &Profile,
    req: GenerateRequest,
) -> Res<PaidImageResponse> {
    generate_from_image(
        pool,
        client,
        profile,
        req,
        credits::VARIATION_COST,
        redesign_instruction,
    )
    .await
}

/// Text-to-image without a reference image ("creativity" mode).
pub async fn creativity(
    pool: &PgPool,
    client: &GeminiClient,
    profile: &Profile,
    req: CreativityRequest,
) -> Res<PaidImageResponse> {
    let full_prompt = prompt::compose_prompt(&req.prompt, None)?;

    let paid = credits::run_paid(profile, credits::CREATIVITY_COST, &PgLedger(pool), || async {
        client
            .generate_image(None, &creativity_instruction(&full_prompt))
            .await
    })
    .await?;

    Ok(PaidImageResponse {
        image: paid.result.to_data_url(),
        cost: credits::CREATIVITY_COST,
        credits: paid.credits,
        warning: paid.warning,
    })
}

/// The batch of up to five interior perspectives, derived from a prior
/// 3D concept. Partial success is a normal outcome.
pub async fn internal_views(
    pool: &PgPool,
    client: &GeminiClient,
    profile: &Profile,
    req: GenerateRequest,
) -> Res<InternalViewsResponse> {
    let full_prompt = prompt::compose_from_request(&req.prompt, req.style_id.as_deref())?;
    let concept = InlineImage::from_data_url(&req.image)?;

    let paid = credits::run_paid(
        profile,
        credits::INTERNAL_VIEWS_COST,
        &PgLedger(pool),
        || views::generate_internal_views(client, &concept, &full_prompt),
    )
    .await?;

    Ok(InternalViewsResponse {
        images: paid.result.iter().map(InlineImage::to_data_url).collect(),
        cost: credits::INTERNAL_VIEWS_COST,
        credits: paid.credits,
        warning: paid.warning,
    })
}

pub async fn estimate_cost(
    pool: &PgPool,
    client: &GeminiClient,
    profile: &Profile,
    req: EstimateRequest,
) -> Res<EstimateResponse> {
    let full_prompt = prompt::compose_from_request(&req.prompt, req.style_id.as_deref())?;

    let paid = credits::run_paid(profile, credits::ESTIMATE_COST, &PgLedger(pool), || async {
        let raw = client
            .generate_structured(
                &estimate::estimation_prompt(&full_prompt),
                estimate::response_schema(),
            )
            .await?;
        estimate::parse_estimate(&raw)
    })
    .await?;

    Ok(EstimateResponse {
        estimate: paid.result,
        cost: credits::ESTIMATE_COST,
        credits: paid.credits,
        warning: paid.warning,
    })
}
