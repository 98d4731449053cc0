//! Prompt sent with every part photo.
//!
//! The wording and the response language are fixed at compile time. Field
//! values are interpolated as-is without escaping.

use crate::models::VehicleDetails;

/// Replacement-part line the model is asked to produce.
pub const PART_LINK_FORMAT: &str = "Part Name: https://www.gallacenter.com/part-link";

/// Build the instruction text for one analysis.
pub fn build_prompt(details: &VehicleDetails) -> String {
    format!(
        "This is an image of a vehicle part.
Vehicle Details:
- Type: {part_type}
- Brand: {brand}
- Model: {model}
- Year: {year}

Task:
1. Analyze the image to identify the part and any potential issues or damage (e.g., rust, cracks, wear and tear).
2. Provide a detailed diagnosis and suggest a solution for the identified problem.
3. Based on the diagnosis, recommend a replacement part. The format for the recommendation should be: \"{link}\". Use a mock link for this purpose.
4. Provide the response in Turkish.
",
        part_type = details.part_type,
        brand = details.brand,
        model = details.model,
        year = details.year,
        link = PART_LINK_FORMAT,
    )
}
