use serde::{Deserialize, Deserializer, Serialize};
use tracing::warn;

/// Request body for creating an expense.
///
/// The original client posted the whole form state, so `amount` may arrive as
/// a JSON number or a string, and `customCategory` rides along with the
/// selected category.
#[derive(Debug, Deserialize)]
pub struct NewExpenseRequest {
    pub description: String,
    #[serde(deserialize_with = "amount_from_json")]
    pub amount: f64,
    pub category: String,
    #[serde(default, alias = "customCategory")]
    pub custom_category: Option<String>,
}

/// Response for DELETE /expenses/:id.
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub deleted: u64,
}

/// Per-category sum, ordered by first occurrence in the expense list.
#[derive(Debug, Serialize, PartialEq)]
pub struct CategoryTotal {
    pub category: String,
    pub total: f64,
}

/// Response for GET /expenses/summary.
#[derive(Debug, Serialize)]
pub struct SummaryResponse {
    pub total: f64,
    pub categories: Vec<String>,
    pub category_totals: Vec<CategoryTotal>,
}

/// Accepts a number or a numeric string; anything unparseable coerces to 0.
fn amount_from_json<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    let amount = match &value {
        serde_json::Value::Number(n) => n.as_f64(),
        serde_json::Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    Ok(amount.unwrap_or_else(|| {
        warn!(value = %value, "non-numeric amount coerced to 0");
        0.0
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn amount_accepts_json_number() {
        let req: NewExpenseRequest =
            serde_json::from_str(r#"{"description":"coffee","amount":3.5,"category":"food"}"#)
                .unwrap();
        assert_eq!(req.amount, 3.5);
        assert_eq!(req.custom_category, None);
    }

    #[test]
    fn amount_accepts_numeric_string() {
        let req: NewExpenseRequest =
            serde_json::from_str(r#"{"description":"bus","amount":"2.75","category":"transit"}"#)
                .unwrap();
        assert_eq!(req.amount, 2.75);
    }

    #[test]
    fn non_numeric_amount_coerces_to_zero() {
        let req: NewExpenseRequest =
            serde_json::from_str(r#"{"description":"???","amount":"abc","category":"misc"}"#)
                .unwrap();
        assert_eq!(req.amount, 0.0);
    }

    #[test]
    fn custom_category_accepts_camel_case_key() {
        let req: NewExpenseRequest = serde_json::from_str(
            r#"{"description":"flight","amount":120,"category":"Otra","customCategory":"travel"}"#,
        )
        .unwrap();
        assert_eq!(req.custom_category.as_deref(), Some("travel"));
    }
}
