use common::error::{AppError, Res};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

/// One renovation line item, material and labor split out.
/// Field names are camelCase on the wire: the shape is dictated by the
/// response schema sent to the text model.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CostEstimateItem {
    pub item: String,
    pub material_cost: f64,
    pub labor_cost: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CostEstimate {
    pub items: Vec<CostEstimateItem>,
    pub total_material_cost: f64,
    pub total_labor_cost: f64,
    pub total_cost: f64,
}

/// Float drift allowed when checking the model's totals against the items.
const TOTALS_TOLERANCE: f64 = 0.01;

pub fn estimation_prompt(full_prompt: &str) -> String {
    format!(
        "Based on the following renovation description: \"{}\", and considering the generated image, create a detailed cost estimate in BRL for a mid-sized Brazilian city. Separate material and labor costs for each item. Provide the result as JSON.",
        full_prompt
    )
}

/// Response schema sent with the structured generation call.
pub fn response_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "items": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "item": { "type": "STRING", "description": "Name of the renovation item or service." },
                        "materialCost": { "type": "NUMBER", "description": "Estimated material cost in BRL." },
                        "laborCost": { "type": "NUMBER", "description": "Estimated labor cost in BRL." },
                    },
                    "required": ["item", "materialCost", "laborCost"],
                },
            },
            "totalMaterialCost": { "type": "NUMBER", "description": "Sum of all material costs." },
            "totalLaborCost": { "type": "NUMBER", "description": "Sum of all labor costs." },
            "totalCost": { "type": "NUMBER", "description": "Total renovation cost (material + labor)." },
        },
        "required": ["items", "totalMaterialCost", "totalLaborCost", "totalCost"],
    })
}

/// The model sometimes wraps its JSON in a markdown code block.
fn strip_markdown_fences(raw: &str) -> &str {
    let trimmed = raw.trim();
    let without_open = trimmed
        .strip_prefix("```json")
        .or_else(|| trimmed.strip_prefix("```"))
        .unwrap_or(trimmed);
    without_open
        .strip_suffix("```")
        .unwrap_or(without_open)
        .trim()
}

/// Parses and validates the structured estimate. Parse and shape failures
/// are `UpstreamParse`, distinct from the API failures of the call itself.
/// The three totals are recomputed and verified rather than trusted.
pub fn parse_estimate(raw: &str) -> Res<CostEstimate> {
    let estimate: CostEstimate = serde_json::from_str(strip_markdown_fences(raw)).map_err(|e| {
        AppError::UpstreamParse(format!(
            "Could not process the cost estimate returned by the AI: {}",
            e
        ))
    })?;

    if estimate.items.is_empty() {
        return Err(AppError::UpstreamParse(
            "The cost estimate contains no line items.".to_string(),
        ));
    }

    let negative = estimate
        .items
        .iter()
        .any(|item| item.material_cost < 0.0 || item.labor_cost < 0.0)
        || estimate.total_material_cost < 0.0
        || estimate.total_labor_cost < 0.0
        || estimate.total_cost < 0.0;
    if negative {
        return Err(AppError::UpstreamParse(
            "The cost estimate contains negative amounts.".to_string(),
        ));
    }

    let material_sum: f64 = estimate.items.iter().map(|item| item.material_cost).sum();
    let labor_sum: f64 = estimate.items.iter().map(|item| item.labor_cost).sum();
    let consistent = (estimate.total_material_cost - material_sum).abs() <= TOTALS_TOLERANCE
        && (estimate.total_labor_cost - labor_sum).abs() <= TOTALS_TOLERANCE
        && (estimate.total_cost - (estimate.total_material_cost + estimate.total_labor_cost)).abs()
            <= TOTALS_TOLERANCE;
    if !consistent {
        return Err(AppError::UpstreamParse(
            "The cost estimate totals do not match the line items.".to_string(),
        ));
    }

    Ok(estimate)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn well_formed() -> String {
        json!({
            "items": [
                { "item": "Wall painting", "materialCost": 350.0, "laborCost": 500.0 },
                { "item": "New flooring", "materialCost": 1800.5, "laborCost": 950.0 },
            ],
            "totalMaterialCost": 2150.5,
            "totalLaborCost": 1450.0,
            "totalCost": 3600.5,
        })
        .to_string()
    }

    #[test]
    fn parses_a_well_formed_estimate() {
        let estimate = parse_estimate(&well_formed()).unwrap();
        assert_eq!(estimate.items.len(), 2);
        assert_eq!(estimate.total_cost, 3600.5);
    }

    #[test]
    fn strips_markdown_fences_before_parsing() {
        let fenced = format!("```json\n{}\n```", well_formed());
        assert!(parse_estimate(&fenced).is_ok());
    }

    #[test]
    fn totals_mismatch_is_a_parse_error() {
        let raw = json!({
            "items": [{ "item": "Painting", "materialCost": 100.0, "laborCost": 50.0 }],
            "totalMaterialCost": 100.0,
            "totalLaborCost": 50.0,
            "totalCost": 999.0,
        })
        .to_string();
        assert!(matches!(
            parse_estimate(&raw),
            Err(AppError::UpstreamParse(_))
        ));
    }

    #[test]
    fn negative_amounts_are_rejected() {
        let raw = json!({
            "items": [{ "item": "Painting", "materialCost": -100.0, "laborCost": 50.0 }],
            "totalMaterialCost": -100.0,
            "totalLaborCost": 50.0,
            "totalCost": -50.0,
        })
        .to_string();
        assert!(matches!(
            parse_estimate(&raw),
            Err(AppError::UpstreamParse(_))
        ));
    }

    #[test]
    fn non_json_payload_is_a_parse_error_not_an_api_error() {
        assert!(matches!(
            parse_estimate("sorry, I cannot help with that"),
            Err(AppError::UpstreamParse(_))
        ));
    }

    #[test]
    fn empty_item_list_is_rejected() {
        let raw = json!({
            "items": [],
            "totalMaterialCost": 0.0,
            "totalLaborCost": 0.0,
            "totalCost": 0.0,
        })
        .to_string();
        assert!(parse_estimate(&raw).is_err());
    }
}
