//! Movement display formatting

use crate::models::Movement;

/// Format movements as an aligned table, in ledger order
pub fn format_movement_list(movements: &[Movement]) -> String {
    if movements.is_empty() {
        return "No movements recorded.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:>10}  {:<8}  {:>8}  {:<19}\n",
        "Product", "Kind", "Qty", "Date",
    ));
    output.push_str(&format!(
        "{:->10}  {:-<8}  {:->8}  {:-<19}\n",
        "", "", "", "",
    ));

    for movement in movements {
        output.push_str(&format!(
            "{:>10}  {:<8}  {:>8}  {:<19}\n",
            movement.product_id.to_string(),
            movement.kind.token(),
            movement.quantity,
            movement.formatted_timestamp(),
        ));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{MovementKind, ProductId};
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_empty_list() {
        let output = format_movement_list(&[]);
        assert!(output.contains("No movements recorded."));
    }

    #[test]
    fn test_list_contains_fields() {
        let ts = Utc.with_ymd_and_hms(2024, 6, 1, 14, 30, 5).unwrap();
        let movements = vec![
            Movement::new(ProductId::new(1), MovementKind::Inflow, 5, ts),
            Movement::new(ProductId::new(1), MovementKind::Outflow, 2, ts),
        ];
        let output = format_movement_list(&movements);

        assert!(output.contains("entrada"));
        assert!(output.contains("saida"));
        assert!(output.contains("2024-06-01 14:30:05"));
    }
}
