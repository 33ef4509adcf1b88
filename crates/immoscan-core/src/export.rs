//! CSV serialization of property batches.
//!
//! Output targets spreadsheet applications: UTF-8 BOM so Excel doesn't
//! guess a legacy code page, CRLF row endings, and every field quoted.

use crate::PropertyRecord;

/// Fallback name when the upload filename has no `.pdf` suffix to swap.
pub const DEFAULT_EXPORT_NAME: &str = "extraction.csv";

const UTF8_BOM: &str = "\u{feff}";

const BASIC_HEADER: [&str; 5] = ["Adresse", "Prix", "Type", "Ville", "Rue"];

const ENHANCED_HEADER: [&str; 11] = [
    "Centris #",
    "Adresse complète",
    "Quartier",
    "Type de propriété",
    "Prix actuel",
    "Prix original",
    "Propriétaire(s): nom(s) et adresse(s)",
    "Représentant(s): nom(s) et adresse(s)",
    "Courtier(s): nom(s)",
    "Courtier(s): téléphone(s)",
    "Courtier(s): courriel(s)",
];

/// Encode a batch of records as a BOM-prefixed CSV document.
///
/// The first record alone picks the schema: enhanced records get the
/// 11-column Centris header, everything else (including an empty batch)
/// gets the 5-column basic header. Missing fields render as empty strings.
pub fn export_csv(properties: &[PropertyRecord]) -> String {
    let enhanced = properties.first().is_some_and(PropertyRecord::is_enhanced);

    let mut out = String::from(UTF8_BOM);
    if enhanced {
        push_row(&mut out, &ENHANCED_HEADER);
        for r in properties {
            push_row(
                &mut out,
                &[
                    opt(&r.centris_no),
                    opt(&r.address),
                    opt(&r.district),
                    opt(&r.property_type),
                    opt(&r.current_price),
                    opt(&r.original_price),
                    opt(&r.owners),
                    opt(&r.representatives),
                    opt(&r.broker_names),
                    opt(&r.broker_phones),
                    opt(&r.broker_emails),
                ],
            );
        }
    } else {
        push_row(&mut out, &BASIC_HEADER);
        for r in properties {
            push_row(
                &mut out,
                &[
                    opt(&r.address),
                    opt(&r.price),
                    opt(&r.kind),
                    opt(&r.city),
                    opt(&r.street),
                ],
            );
        }
    }
    out
}

/// Derive the download filename: a `.pdf` suffix (any case) becomes `.csv`,
/// anything else falls back to [`DEFAULT_EXPORT_NAME`].
pub fn export_filename(upload: &str) -> String {
    let n = upload.len();
    if n > 4 && upload.is_char_boundary(n - 4) && upload[n - 4..].eq_ignore_ascii_case(".pdf") {
        format!("{}.csv", &upload[..n - 4])
    } else {
        DEFAULT_EXPORT_NAME.to_string()
    }
}

fn opt(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("")
}

/// Quote every field; literal quotes are doubled. No other escaping is
/// required once a field is quoted.
fn csv_field(value: &str) -> String {
    format!("\"{}\"", value.replace('"', "\"\""))
}

fn push_row(out: &mut String, fields: &[&str]) {
    for (i, field) in fields.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        out.push_str(&csv_field(field));
    }
    out.push_str("\r\n");
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Minimal RFC-4180 field splitter so tests can round-trip a row.
    fn parse_row(line: &str) -> Vec<String> {
        let mut fields = Vec::new();
        let mut current = String::new();
        let mut in_quotes = false;
        let mut chars = line.chars().peekable();
        while let Some(c) = chars.next() {
            match c {
                '"' if in_quotes => {
                    if chars.peek() == Some(&'"') {
                        chars.next();
                        current.push('"');
                    } else {
                        in_quotes = false;
                    }
                }
                '"' => in_quotes = true,
                ',' if !in_quotes => {
                    fields.push(std::mem::take(&mut current));
                }
                c => current.push(c),
            }
        }
        fields.push(current);
        fields
    }

    fn enhanced_record() -> PropertyRecord {
        PropertyRecord {
            centris_no: Some("28934716".into()),
            address: Some("1247 Rue Sainte-Catherine O, Montréal (Ville-Marie)".into()),
            district: Some("Ville-Marie".into()),
            property_type: Some("Condo".into()),
            current_price: Some("485 000 $".into()),
            original_price: Some("499 000 $".into()),
            owners: Some("He said \"hi\"".into()),
            representatives: Some(String::new()),
            broker_names: Some("M. Tremblay".into()),
            broker_phones: Some("514-555-0134".into()),
            broker_emails: Some("m.tremblay@example.com".into()),
            ..Default::default()
        }
    }

    #[test]
    fn output_starts_with_utf8_bom() {
        let csv = export_csv(&[]);
        assert!(csv.starts_with('\u{feff}'));
    }

    #[test]
    fn empty_batch_is_header_only() {
        let csv = export_csv(&[]);
        let body = csv.strip_prefix('\u{feff}').unwrap();
        assert_eq!(body, "\"Adresse\",\"Prix\",\"Type\",\"Ville\",\"Rue\"\r\n");
    }

    #[test]
    fn embedded_quotes_are_doubled_and_round_trip() {
        let csv = export_csv(&[enhanced_record()]);
        assert!(csv.contains("\"He said \"\"hi\"\"\""));

        let body = csv.strip_prefix('\u{feff}').unwrap();
        let rows: Vec<&str> = body.split("\r\n").filter(|r| !r.is_empty()).collect();
        assert_eq!(rows.len(), 2);
        let fields = parse_row(rows[1]);
        assert_eq!(fields.len(), 11);
        assert_eq!(fields[0], "28934716");
        assert_eq!(fields[6], "He said \"hi\"");
    }

    #[test]
    fn first_record_picks_the_schema() {
        let mut later = enhanced_record();
        later.centris_no = Some("12345678".into());
        let batch = vec![
            PropertyRecord::basic("1 Rue A, Laval", "200 000 $", "Condo", "Laval", "1 Rue A"),
            later,
        ];
        let csv = export_csv(&batch);
        let body = csv.strip_prefix('\u{feff}').unwrap();
        assert!(body.starts_with("\"Adresse\",\"Prix\",\"Type\",\"Ville\",\"Rue\"\r\n"));
        // Still one row per record, rendered through the basic columns.
        assert_eq!(body.matches("\r\n").count(), 3);
    }

    #[test]
    fn enhanced_first_record_emits_centris_header() {
        let csv = export_csv(&[enhanced_record()]);
        let body = csv.strip_prefix('\u{feff}').unwrap();
        let header = parse_row(body.split("\r\n").next().unwrap());
        assert_eq!(header[0], "Centris #");
        assert_eq!(header[10], "Courtier(s): courriel(s)");
    }

    #[test]
    fn missing_fields_render_empty() {
        let record = PropertyRecord {
            address: Some("9 Rue B, Longueuil".into()),
            ..Default::default()
        };
        let csv = export_csv(&[record]);
        let body = csv.strip_prefix('\u{feff}').unwrap();
        let row = parse_row(body.split("\r\n").nth(1).unwrap());
        assert_eq!(row, vec!["9 Rue B, Longueuil", "", "", "", ""]);
    }

    #[test]
    fn filename_swaps_pdf_suffix_case_insensitively() {
        assert_eq!(export_filename("listing.pdf"), "listing.csv");
        assert_eq!(
            export_filename("Metrique_Detaille_courtier3569.PDF"),
            "Metrique_Detaille_courtier3569.csv"
        );
    }

    #[test]
    fn filename_without_pdf_suffix_uses_default() {
        assert_eq!(export_filename("notes.txt"), DEFAULT_EXPORT_NAME);
        assert_eq!(export_filename(""), DEFAULT_EXPORT_NAME);
        assert_eq!(export_filename(".pdf"), DEFAULT_EXPORT_NAME);
    }
}
