use crate::domain::listing::{ListingKind, ListingRecord};
use crate::errors::ServerError;
use crate::responses::xlsx_response;
use crate::responses::ResultResp;
use rust_xlsxwriter::{Format, Workbook};

const HEADERS: [&str; 9] = [
    "ID",
    "Name",
    "Email",
    "Phone Number",
    "Location",
    "Price Range",
    "Property Type",
    "Area",
    "Construction Status",
];

/// One row per record, in the order given (the filtered order).
pub fn listings_workbook(records: &[&ListingRecord], kind: ListingKind) -> Result<Vec<u8>, ServerError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet
        .set_name(format!("{} Listings", kind.label()))
        .map_err(|e| ServerError::XlsxError(format!("Failed to name sheet: {e}")))?;

    let bold = Format::new().set_bold();
    for (col, header) in HEADERS.iter().enumerate() {
        worksheet
            .write_string_with_format(0, col as u16, *header, &bold)
            .map_err(|e| ServerError::XlsxError(format!("Failed to write header '{header}': {e}")))?;
    }

    for (i, record) in records.iter().enumerate() {
        let r = (i + 1) as u32;
        let cells = [
            record.id.as_deref(),
            record.name.as_deref(),
            record.email.as_deref(),
            record.phone_number.as_deref(),
            record.location.as_deref(),
            record.price_range.as_deref(),
            record.property_type.as_ref().map(|t| t.as_str()),
            record.area.as_deref(),
            record.construction_status.as_ref().map(|s| s.as_str()),
        ];
        for (col, value) in cells.iter().enumerate() {
            worksheet
                .write_string(r, col as u16, value.unwrap_or(""))
                .map_err(|e| ServerError::XlsxError(format!("Failed to write row {r}: {e}")))?;
        }
    }

    worksheet.autofit();

    workbook
        .save_to_buffer()
        .map_err(|e| ServerError::XlsxError(format!("Failed to save workbook: {e}")))
}

pub fn export_listings_xlsx(records: &[&ListingRecord], kind: ListingKind) -> ResultResp {
    let buffer = listings_workbook(records, kind)?;
    let filename = format!(
        "{}_listings_{}.xlsx",
        kind.label().to_lowercase(),
        chrono::Utc::now().format("%Y%m%d")
    );
    xlsx_response(buffer, &filename)
}
