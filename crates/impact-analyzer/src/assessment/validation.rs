use super::domain::{AssessmentRequest, ImpactScore};

/// Boundary limits applied before scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssessmentLimits {
    pub max_description_chars: usize,
}

impl Default for AssessmentLimits {
    fn default() -> Self {
        Self {
            max_description_chars: 500,
        }
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("product name is required")]
    MissingName,
    #[error("product category is required")]
    MissingCategory,
    #[error("description has {actual} characters, limit is {limit}")]
    DescriptionTooLong { limit: usize, actual: usize },
    #[error("quantity must be a positive number, got {0}")]
    InvalidQuantity(f64),
}

impl ValidationError {
    /// Zero-valued score describing the failure, for clients that always
    /// expect the score shape.
    pub fn degraded_score(&self) -> ImpactScore {
        let detail = match self {
            ValidationError::MissingName | ValidationError::MissingCategory => {
                "Please provide product name and category".to_string()
            }
            ValidationError::DescriptionTooLong { limit, .. } => {
                format!("Description cannot exceed {limit} characters")
            }
            ValidationError::InvalidQuantity(_) => {
                "Quantity must be a positive number".to_string()
            }
        };
        ImpactScore::degraded("Invalid request", detail)
    }
}

/// Validate a raw request and normalize it for scoring.
///
/// Name and category are trimmed and must be non-empty. A blank description is
/// replaced with `"Product: <name>"`, a missing quantity defaults to 1, and a
/// blank location is dropped.
pub fn prepare(
    request: AssessmentRequest,
    limits: &AssessmentLimits,
) -> Result<AssessmentRequest, ValidationError> {
    let AssessmentRequest {
        name,
        description,
        category,
        quantity,
        location,
    } = request;

    let name = name.trim().to_string();
    if name.is_empty() {
        return Err(ValidationError::MissingName);
    }
    let category = category.trim().to_string();
    if category.is_empty() {
        return Err(ValidationError::MissingCategory);
    }

    let actual = description.chars().count();
    if actual > limits.max_description_chars {
        return Err(ValidationError::DescriptionTooLong {
            limit: limits.max_description_chars,
            actual,
        });
    }

    let quantity = match quantity {
        Some(value) if !value.is_finite() || value <= 0.0 => {
            return Err(ValidationError::InvalidQuantity(value));
        }
        Some(value) => value,
        None => 1.0,
    };

    let description = if description.trim().is_empty() {
        format!("Product: {name}")
    } else {
        description
    };

    let location = location.filter(|value| !value.trim().is_empty());

    Ok(AssessmentRequest {
        name,
        description,
        category,
        quantity: Some(quantity),
        location,
    })
}
