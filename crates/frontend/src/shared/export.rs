/// Экспорт текущей страницы таблицы в CSV и PDF (через печать браузера)
use crate::shared::components::table::number_format::{format_money, format_number_with_decimals};
use crate::shared::config::ExportConfig;
use crate::shared::error::TableError;
use crate::shared::table_state::{FieldValue, TableRow};
use contracts::shared::table::{FieldDef, FieldKind};
use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

/// Cell text for CSV: plain numbers, no thousands separators
pub fn csv_cell(field: &FieldDef, value: &FieldValue) -> String {
    match (field.kind, value) {
        (FieldKind::Money, FieldValue::Number(n)) => format!("{:.2}", n),
        _ => value.display_text(),
    }
}

/// Cell text for the screen and the printed report
pub fn display_cell(field: &FieldDef, value: &FieldValue) -> String {
    match (field.kind, value) {
        (FieldKind::Money, FieldValue::Number(n)) => format_money(*n),
        (FieldKind::Number, FieldValue::Number(n)) if n.fract() == 0.0 => {
            format_number_with_decimals(*n, 0)
        }
        (FieldKind::Number, FieldValue::Number(n)) => format_number_with_decimals(*n, 2),
        (FieldKind::Date, FieldValue::Text(s)) => display_date(s),
        _ => value.display_text(),
    }
}

/// "2024-03-05T10:20:00Z" → "2024-03-05 10:20"; anything unparsable is shown as is.
fn display_date(raw: &str) -> String {
    if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(raw) {
        return dt.format("%Y-%m-%d %H:%M").to_string();
    }
    if let Ok(dt) = chrono::NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S") {
        return dt.format("%Y-%m-%d %H:%M").to_string();
    }
    raw.to_string()
}

/// Header of display labels plus one record per row. Cells with commas,
/// quotes or line breaks are quoted.
pub fn build_csv<T: TableRow>(rows: &[T]) -> Result<String, TableError> {
    let schema = T::SCHEMA;
    let mut writer = csv::WriterBuilder::new()
        .delimiter(b',')
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    writer
        .write_record(schema.labels())
        .map_err(|e| TableError::Export(e.to_string()))?;
    for row in rows {
        let record: Vec<String> = schema
            .fields
            .iter()
            .map(|f| csv_cell(f, &row.field_value(f.id)))
            .collect();
        writer
            .write_record(&record)
            .map_err(|e| TableError::Export(e.to_string()))?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| TableError::Export(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| TableError::Export(e.to_string()))
}

/// `<table id>_<timestamp>.<ext>`
pub fn export_filename(table_id: &str, ext: &str, at: chrono::NaiveDateTime) -> String {
    format!("{}_{}.{}", table_id, at.format("%Y%m%d_%H%M"), ext)
}

/// Builds the CSV of `rows` and starts the download.
pub fn download_csv<T: TableRow>(rows: &[T]) -> Result<(), TableError> {
    if rows.is_empty() {
        return Err(TableError::Export("Nothing to export".to_string()));
    }
    // UTF-8 BOM для корректного отображения в Excel
    let content = format!("\u{FEFF}{}", build_csv(rows)?);
    let blob = create_blob(&content, "text/csv;charset=utf-8;")?;
    let filename = export_filename(T::SCHEMA.id, "csv", chrono::Local::now().naive_local());
    download_blob(&blob, &filename)
}

/// Printable report: header block and a table body
#[derive(Debug, Clone, PartialEq)]
pub struct PrintDocument {
    pub company_name: String,
    pub title: String,
    pub generated_at: String,
    pub logo_url: Option<String>,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl PrintDocument {
    pub fn from_rows<T: TableRow>(
        rows: &[T],
        config: &ExportConfig,
        generated_at: chrono::NaiveDateTime,
    ) -> Self {
        let schema = T::SCHEMA;
        Self {
            company_name: config.company_name.clone(),
            title: schema.title.to_string(),
            generated_at: generated_at.format("%Y-%m-%d %H:%M").to_string(),
            logo_url: config.logo_url.clone().filter(|u| !u.trim().is_empty()),
            headers: schema.labels().into_iter().map(String::from).collect(),
            rows: rows
                .iter()
                .map(|row| {
                    schema
                        .fields
                        .iter()
                        .map(|f| display_cell(f, &row.field_value(f.id)))
                        .collect()
                })
                .collect(),
        }
    }

    /// Full HTML page that opens the print dialog once loaded. A logo that
    /// fails to load removes itself and leaves the text header.
    pub fn to_html(&self) -> String {
        let mut html = String::with_capacity(1024 + self.rows.len() * 128);
        html.push_str("<!DOCTYPE html><html><head><meta charset=\"utf-8\">");
        html.push_str(&format!("<title>{}</title>", escape_html(&self.title)));
        html.push_str(
            "<style>body{font-family:sans-serif;font-size:11px;margin:24px}\
             .report-header{display:flex;align-items:center;gap:16px;margin-bottom:16px}\
             .report-header img{max-height:48px}\
             table{border-collapse:collapse;width:100%}\
             th,td{border:1px solid #999;padding:4px 6px;text-align:left}\
             th{background:#eee}</style>",
        );
        html.push_str("</head><body><div class=\"report-header\">");
        if let Some(logo) = &self.logo_url {
            html.push_str(&format!(
                "<img src=\"{}\" alt=\"\" onerror=\"this.remove()\">",
                escape_html(logo)
            ));
        }
        html.push_str(&format!(
            "<div><h2>{}</h2><h3>{}</h3><p>Generated {} · {} rows</p></div></div>",
            escape_html(&self.company_name),
            escape_html(&self.title),
            escape_html(&self.generated_at),
            self.rows.len()
        ));

        html.push_str("<table><thead><tr>");
        for header in &self.headers {
            html.push_str(&format!("<th>{}</th>", escape_html(header)));
        }
        html.push_str("</tr></thead><tbody>");
        for row in &self.rows {
            html.push_str("<tr>");
            for cell in row {
                html.push_str(&format!("<td>{}</td>", escape_html(cell)));
            }
            html.push_str("</tr>");
        }
        html.push_str("</tbody></table>");
        html.push_str("<script>window.onload=function(){window.print();};</script>");
        html.push_str("</body></html>");
        html
    }
}

fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Opens the report in a new window and lets the browser print it to PDF.
pub fn print_pdf<T: TableRow>(rows: &[T], config: &ExportConfig) -> Result<(), TableError> {
    if rows.is_empty() {
        return Err(TableError::Export("Nothing to export".to_string()));
    }
    let document = PrintDocument::from_rows(rows, config, chrono::Local::now().naive_local());
    let blob = create_blob(&document.to_html(), "text/html;charset=utf-8")?;
    let url = Url::create_object_url_with_blob(&blob)
        .map_err(|e| TableError::Export(format!("Failed to create object URL: {:?}", e)))?;

    let window = web_sys::window().ok_or_else(|| TableError::Export("No window object".into()))?;
    let opened = window
        .open_with_url_and_target(&url, "_blank")
        .map_err(|e| TableError::Export(format!("{:?}", e)))?;
    if opened.is_none() {
        let _ = Url::revoke_object_url(&url);
        return Err(TableError::Export(
            "The print window was blocked. Allow pop-ups for this site and try again.".into(),
        ));
    }

    // the new window needs the URL until it has loaded
    gloo_timers::callback::Timeout::new(60_000, move || {
        let _ = Url::revoke_object_url(&url);
    })
    .forget();
    Ok(())
}

fn create_blob(content: &str, mime: &str) -> Result<Blob, TableError> {
    let array = js_sys::Array::new();
    array.push(&wasm_bindgen::JsValue::from_str(content));

    let properties = BlobPropertyBag::new();
    properties.set_type(mime);

    Blob::new_with_str_sequence_and_options(&array, &properties)
        .map_err(|e| TableError::Export(format!("Failed to create blob: {:?}", e)))
}

/// Инициирует скачивание Blob через браузер
fn download_blob(blob: &Blob, filename: &str) -> Result<(), TableError> {
    let fail = |what: &str, e: wasm_bindgen::JsValue| TableError::Export(format!("{}: {:?}", what, e));
    let window = web_sys::window().ok_or_else(|| TableError::Export("No window object".into()))?;
    let document = window
        .document()
        .ok_or_else(|| TableError::Export("No document object".into()))?;
    let body = document
        .body()
        .ok_or_else(|| TableError::Export("No body element".into()))?;

    let url = Url::create_object_url_with_blob(blob).map_err(|e| fail("Failed to create object URL", e))?;

    let anchor = document
        .create_element("a")
        .map_err(|e| fail("Failed to create anchor", e))?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|e| fail("Failed to cast to anchor", e.into()))?;

    anchor.set_href(&url);
    anchor.set_download(filename);
    anchor
        .style()
        .set_property("display", "none")
        .map_err(|e| fail("Failed to set style", e))?;

    body.append_child(&anchor)
        .map_err(|e| fail("Failed to append anchor", e))?;
    anchor.click();
    body.remove_child(&anchor)
        .map_err(|e| fail("Failed to remove anchor", e))?;

    Url::revoke_object_url(&url).map_err(|e| fail("Failed to revoke URL", e))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::table::TableSchema;

    const FIELDS: &[FieldDef] = &[
        FieldDef::text("name", "Name"),
        FieldDef::number("qty", "Qty"),
        FieldDef::money("price", "Unit Price"),
        FieldDef::date("at", "Updated"),
    ];

    #[derive(Clone)]
    struct Row {
        name: &'static str,
        qty: f64,
        price: f64,
    }

    impl TableRow for Row {
        const SCHEMA: TableSchema = TableSchema {
            id: "export_test",
            title: "Stock <report>",
            fields: FIELDS,
        };

        fn row_id(&self) -> String {
            self.name.to_string()
        }

        fn field_value(&self, field: &str) -> FieldValue {
            match field {
                "name" => FieldValue::text(self.name),
                "qty" => FieldValue::Number(self.qty),
                "price" => FieldValue::Number(self.price),
                "at" => FieldValue::text("2024-03-05T10:20:00Z"),
                _ => FieldValue::Empty,
            }
        }
    }

    fn rows() -> Vec<Row> {
        vec![
            Row {
                name: "Bolt, M8",
                qty: 1200.0,
                price: 0.5,
            },
            Row {
                name: "Nut \"hex\"",
                qty: 3.0,
                price: 1234.567,
            },
        ]
    }

    #[test]
    fn test_csv_header_and_quoting() {
        let csv = build_csv(&rows()).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "Name,Qty,Unit Price,Updated");
        assert_eq!(lines[1], "\"Bolt, M8\",1200,0.50,2024-03-05T10:20:00Z");
        assert_eq!(lines[2], "\"Nut \"\"hex\"\"\",3,1234.57,2024-03-05T10:20:00Z");
    }

    #[test]
    fn test_csv_of_empty_page_is_header_only() {
        assert_eq!(build_csv::<Row>(&[]).unwrap(), "Name,Qty,Unit Price,Updated\n");
    }

    #[test]
    fn test_print_document() {
        let config = ExportConfig {
            company_name: "ACME & Co".into(),
            logo_url: Some("/logo.png".into()),
        };
        let at = chrono::NaiveDate::from_ymd_opt(2024, 3, 5)
            .unwrap()
            .and_hms_opt(9, 30, 0)
            .unwrap();
        let doc = PrintDocument::from_rows(&rows(), &config, at);
        assert_eq!(doc.rows[0], vec!["Bolt, M8", "1 200", "0.50", "2024-03-05 10:20"]);
        assert_eq!(doc.generated_at, "2024-03-05 09:30");

        let html = doc.to_html();
        assert!(html.contains("<h2>ACME &amp; Co</h2>"));
        assert!(html.contains("<h3>Stock &lt;report&gt;</h3>"));
        assert!(html.contains("onerror=\"this.remove()\""));
        assert!(html.contains("<td>Nut &quot;hex&quot;</td>"));
        assert!(html.contains("2 rows"));
    }

    #[test]
    fn test_print_document_without_logo() {
        let config = ExportConfig {
            company_name: "ACME".into(),
            logo_url: Some("  ".into()),
        };
        let at = chrono::NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        let doc = PrintDocument::from_rows(&rows(), &config, at);
        assert!(doc.logo_url.is_none());
        assert!(!doc.to_html().contains("<img"));
        assert_eq!(export_filename("p901_low_stock", "csv", at), "p901_low_stock_20240101_0000.csv");
    }
}
