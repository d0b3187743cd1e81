//! List handler

use anyhow::Result;
use colored::*;
use serde_json::Value;

use crate::api::{AarlyClient, FundingApi, FundingRecord, PAGE_LIMIT};
use crate::schema::Category;

pub async fn run(client: &AarlyClient, category: Category) -> Result<()> {
    let records = client.list_records(category, PAGE_LIMIT).await?;
    if records.is_empty() {
        println!("No {} records found", category.label());
        return Ok(());
    }

    println!(
        "{} ({} records)",
        category.label().bold(),
        records.len().to_string().cyan()
    );
    for record in &records {
        println!("  {}  {}{}", record.id.dimmed(), record.name(), location(record));
    }

    Ok(())
}

fn location(record: &FundingRecord) -> String {
    let city = record.fields.get("city").and_then(Value::as_str);
    let country = record.fields.get("country").and_then(Value::as_str);
    match (city, country) {
        (Some(city), Some(country)) if !city.is_empty() && !country.is_empty() => {
            format!(" — {}, {}", city, country)
        }
        (Some(place), _) | (_, Some(place)) if !place.is_empty() => format!(" — {}", place),
        _ => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(fields: Value) -> FundingRecord {
        FundingRecord {
            id: "1".to_string(),
            fields: fields.as_object().unwrap().clone(),
        }
    }

    #[test]
    fn test_location_formats() {
        let both = record(json!({"city": "Mumbai", "country": "India"}));
        assert_eq!(location(&both), " — Mumbai, India");

        let country_only = record(json!({"city": "", "country": "India"}));
        assert_eq!(location(&country_only), " — India");

        let neither = record(json!({}));
        assert_eq!(location(&neither), "");
    }
}
