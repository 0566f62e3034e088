//! # Exporter
//!
//! Read-only reports over stored orders.
//!
//! - [`export_orders_by_employee`] - one employee's orders of one type, JSON
//! - [`export_category_statistics`] - best-selling item per category, XML

use serde::Serialize;
use tracing::{debug, info};

use crate::error::{ProcessorError, ProcessorResult};
use fastfood_core::dto::{
    CategoriesExportDocument, CategoryExportDto, EmployeeOrdersExportDto,
    MostPopularItemExportDto, OrderExportDto,
};
use fastfood_core::{CoreError, CoreResult, Money};
use fastfood_db::Database;

/// Declaration written in front of every XML report.
pub const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="utf-8"?>"#;

/// Exports the orders of `order_type` taken by `employee_name` as indented
/// JSON `{Name, Orders, TotalMade}`.
///
/// Orders are sorted by `TotalPrice` descending, then by number of lines
/// descending. An `order_type` that names no known type matches nothing.
pub async fn export_orders_by_employee(
    db: &Database,
    employee_name: &str,
    order_type: &str,
) -> ProcessorResult<String> {
    let details = db
        .employees()
        .get_details_by_name(employee_name)
        .await?
        .ok_or_else(|| ProcessorError::EmployeeNotFound(employee_name.to_string()))?;

    let mut orders = details
        .orders
        .iter()
        .filter(|o| o.order.order_type.as_str() == order_type)
        .map(OrderExportDto::try_from)
        .collect::<CoreResult<Vec<_>>>()?;

    orders.sort_by(|a, b| {
        b.total_price
            .cmp(&a.total_price)
            .then_with(|| b.items.len().cmp(&a.items.len()))
    });

    let total_made = Money::checked_sum(orders.iter().map(|o| o.total_price))
        .ok_or(CoreError::AmountOverflow { what: "employee total" })?;

    debug!(
        employee = employee_name,
        order_type,
        matched = orders.len(),
        of = details.orders.len(),
        "Filtered employee orders"
    );

    let export = EmployeeOrdersExportDto {
        name: details.employee.name,
        orders,
        total_made,
    };

    let json = serde_json::to_string_pretty(&export)?;
    info!(employee = employee_name, %total_made, "Exported orders by employee");

    Ok(json)
}

/// Exports the most popular item of every named category as indented XML.
///
/// `categories_csv` is split on `,` with empty segments dropped; names match
/// exactly. Categories without items are left out. Categories are sorted
/// by the most popular item's `TotalMade` descending, then `TimesSold`
/// descending.
pub async fn export_category_statistics(
    db: &Database,
    categories_csv: &str,
) -> ProcessorResult<String> {
    let names: Vec<&str> = categories_csv
        .split(',')
        .filter(|name| !name.is_empty())
        .collect();

    let details = db.categories().load_details(&names).await?;

    let mut categories = Vec::with_capacity(details.len());
    for category in &details {
        let Some(item) = category.most_popular_item()? else {
            debug!(category = %category.category.name, "Skipping category without items");
            continue;
        };
        categories.push(CategoryExportDto {
            name: category.category.name.clone(),
            most_popular_item: MostPopularItemExportDto::try_from(item)?,
        });
    }

    categories.sort_by(|a, b| {
        let (a, b) = (&a.most_popular_item, &b.most_popular_item);
        b.total_made
            .cmp(&a.total_made)
            .then_with(|| b.times_sold.cmp(&a.times_sold))
    });

    info!(
        requested = names.len(),
        exported = categories.len(),
        "Exported category statistics"
    );

    to_xml(&CategoriesExportDocument { categories })
}

/// Serializes `value` as indented XML with a leading declaration.
fn to_xml<T: Serialize>(value: &T) -> ProcessorResult<String> {
    let mut body = String::new();
    let mut serializer = quick_xml::se::Serializer::new(&mut body);
    serializer.indent(' ', 2);
    value.serialize(serializer)?;

    Ok(format!("{}\n{}", XML_DECLARATION, body))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::importer::{import_employees, import_items, import_orders};
    use fastfood_db::DbConfig;

    async fn shop() -> Database {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        import_employees(
            &db,
            r#"[{"Name": "Avery Quinn", "Age": 24, "Position": "Cashier"}]"#,
        )
        .await
        .unwrap();
        import_items(
            &db,
            r#"[
                {"Name": "Cheeseburger", "Price": 5.5, "Category": "Grill"},
                {"Name": "Hot Dog", "Price": 3.25, "Category": "Grill"},
                {"Name": "Cola", "Price": 1.5, "Category": "Beverages"}
            ]"#,
        )
        .await
        .unwrap();
        db
    }

    #[tokio::test]
    async fn test_unknown_employee() {
        let db = shop().await;
        let err = export_orders_by_employee(&db, "Nobody", "ToGo")
            .await
            .unwrap_err();
        assert!(matches!(err, ProcessorError::EmployeeNotFound(ref n) if n == "Nobody"));
    }

    #[tokio::test]
    async fn test_employee_without_orders() {
        let db = shop().await;
        let json = export_orders_by_employee(&db, "Avery Quinn", "ToGo")
            .await
            .unwrap();

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["Name"], "Avery Quinn");
        assert_eq!(value["Orders"].as_array().unwrap().len(), 0);
        assert_eq!(value["TotalMade"].as_f64(), Some(0.0));
    }

    #[tokio::test]
    async fn test_category_statistics_xml_shape() {
        let db = shop().await;
        import_orders(
            &db,
            r#"<Orders>
  <Order>
    <Customer>Garry</Customer>
    <Employee>Avery Quinn</Employee>
    <DateTime>21/08/2017 13:22</DateTime>
    <Type>ToGo</Type>
    <Items>
      <Item><Name>Hot Dog</Name><Quantity>2</Quantity></Item>
      <Item><Name>Cola</Name><Quantity>1</Quantity></Item>
    </Items>
  </Order>
</Orders>"#,
        )
        .await
        .unwrap();

        let xml = export_category_statistics(&db, "Grill,,Beverages,Desserts,")
            .await
            .unwrap();

        assert!(xml.starts_with(r#"<?xml version="1.0" encoding="utf-8"?>"#));
        assert!(!xml.contains("xmlns"));

        let grill = xml.find("<Name>Grill</Name>").unwrap();
        let beverages = xml.find("<Name>Beverages</Name>").unwrap();
        assert!(grill < beverages);

        assert!(xml.contains("<Name>Hot Dog</Name>"));
        assert!(xml.contains("<TotalMade>6.50</TotalMade>"));
        assert!(xml.contains("<TimesSold>2</TimesSold>"));
        assert!(xml.contains("<TotalMade>1.50</TotalMade>"));
    }

    #[tokio::test]
    async fn test_employee_total_overflow_is_an_error() {
        let db = shop().await;
        import_items(
            &db,
            r#"[{"Name": "Golden Burger", "Price": 50000000000000000, "Category": "Grill"}]"#,
        )
        .await
        .unwrap();
        // Each order fits on its own, the employee total does not
        let order = |customer: &str| {
            format!(
                "<Order><Customer>{}</Customer><Employee>Avery Quinn</Employee>\
                 <DateTime>21/08/2017 13:22</DateTime><Type>ToGo</Type>\
                 <Items><Item><Name>Golden Burger</Name><Quantity>1</Quantity></Item></Items>\
                 </Order>",
                customer
            )
        };
        let xml = format!("<Orders>{}{}</Orders>", order("Garry"), order("Billy"));
        import_orders(&db, &xml).await.unwrap();

        let err = export_orders_by_employee(&db, "Avery Quinn", "ToGo")
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            ProcessorError::Core(CoreError::AmountOverflow { what: "employee total" })
        ));
    }

    #[tokio::test]
    async fn test_category_statistics_empty_selection() {
        let db = shop().await;
        let xml = export_category_statistics(&db, ",,").await.unwrap();
        assert!(xml.starts_with(XML_DECLARATION));
        assert!(!xml.contains("<Category>"));
    }
}
