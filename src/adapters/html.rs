//! Reduces the vendor's HTML pages to plain row and cell records.
//!
//! Rows and cells are recognised the way the vendor marks them up: a service
//! row is a `<tr>` whose class (or id) contains `fila_`, a free seat is a `<td>`
//! whose class (or id) contains `libre`.

use crate::domain::model::{FormControl, ServiceRow};
use scraper::{ElementRef, Html, Selector};
use std::sync::OnceLock;

const ROW_MARKER: &str = "fila_";
const FREE_SEAT_MARKER: &str = "libre";

struct Selectors {
    row: Selector,
    cell: Selector,
    input: Selector,
}

fn selectors() -> &'static Selectors {
    static SELECTORS: OnceLock<Selectors> = OnceLock::new();
    SELECTORS.get_or_init(|| Selectors {
        row: Selector::parse("tr").expect("tr selector is valid"),
        cell: Selector::parse("td").expect("td selector is valid"),
        input: Selector::parse("input").expect("input selector is valid"),
    })
}

fn has_marker(element: &ElementRef<'_>, marker: &str) -> bool {
    let value = element.value();
    value.attr("class").is_some_and(|class| class.contains(marker))
        || value.id().is_some_and(|id| id.contains(marker))
}

fn text_of(element: &ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}

/// 解析班次列表頁，每個 `fila_` 列轉成一筆 `ServiceRow`
pub fn parse_service_rows(html: &str) -> Vec<ServiceRow> {
    let document = Html::parse_document(html);
    let sel = selectors();

    document
        .select(&sel.row)
        .filter(|row| has_marker(row, ROW_MARKER))
        .map(|row| {
            let cells: Vec<ElementRef<'_>> = row.select(&sel.cell).collect();
            let control = cells
                .first()
                .and_then(|first| first.select(&sel.input).next())
                .map(|input| FormControl {
                    name: input.value().attr("name").map(String::from),
                    value: input.value().attr("value").map(String::from),
                });

            ServiceRow {
                cells: cells.iter().map(text_of).collect(),
                control,
            }
        })
        .collect()
}

/// 解析班次座位頁，回傳所有空位格子的文字
pub fn parse_free_seats(html: &str) -> Vec<String> {
    let document = Html::parse_document(html);

    document
        .select(&selectors().cell)
        .filter(|cell| has_marker(cell, FREE_SEAT_MARKER))
        .map(|cell| text_of(&cell))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SERVICES_PAGE: &str = r#"
<html><body>
<table>
  <tr class="cabezal"><td>Sel</td><td>Hora</td><td>Destino</td><td>Empresa</td><td>Precio</td><td>Tipo</td></tr>
  <tr class="fila_par">
    <td><input type="radio" name="srv_ida" value="1234|5"></td>
    <td> 08:30 </td><td>SALTO</td><td>EDP</td><td>100</td>
    <td>
      Executive
    </td>
  </tr>
  <tr id="fila_3">
    <td><input type="hidden" name="other" value="x"></td>
    <td>09:00</td><td>SALTO</td><td>EDP</td><td>100</td><td>Comun</td>
  </tr>
  <tr class="fila_impar"></tr>
</table>
</body></html>
"#;

    #[test]
    fn test_parse_service_rows_filters_by_marker() {
        let rows = parse_service_rows(SERVICES_PAGE);

        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].cells.len(), 6);
        assert_eq!(rows[0].cells[1], "08:30");
        assert_eq!(rows[0].cells[5], "Executive");
        assert_eq!(
            rows[0].control,
            Some(FormControl {
                name: Some("srv_ida".to_string()),
                value: Some("1234|5".to_string()),
            })
        );

        assert_eq!(rows[1].control.as_ref().unwrap().name.as_deref(), Some("other"));
        assert!(rows[2].cells.is_empty());
        assert!(rows[2].control.is_none());
    }

    #[test]
    fn test_parse_free_seats() {
        let html = r#"
<table>
  <tr>
    <td class="libre_v">A2</td>
    <td class="ocupado">A1</td>
    <td class="asiento libre"> B1 </td>
    <td>C1</td>
  </tr>
</table>
"#;
        assert_eq!(parse_free_seats(html), vec!["A2", "B1"]);
    }

    #[test]
    fn test_parse_empty_page() {
        assert!(parse_service_rows("").is_empty());
        assert!(parse_free_seats("<p>sin servicios</p>").is_empty());
    }
}
