//! The fixed demonstration dataset returned when real extraction is
//! unavailable.

use crate::PropertyRecord;

/// Message attached to reports built from demo data.
pub const DEMO_MESSAGE: &str = "Extraction service unavailable - returning demonstration data. \
     Configure EXTRACTOR_URL to enable real PDF extraction.";

/// The three canned records every fallback response carries.
///
/// Basic shape only: demo records never claim Centris metadata they don't
/// have, so exports of a demo batch use the 5-column format.
pub fn demo_properties() -> Vec<PropertyRecord> {
    vec![
        PropertyRecord::basic(
            "1247 Rue Sainte-Catherine O, Montréal (Ville-Marie)",
            "485 000 $",
            "Condo",
            "Montréal",
            "1247 Rue Sainte-Catherine O",
        ),
        PropertyRecord::basic(
            "5680 Avenue du Parc, Montréal (Le Plateau-Mont-Royal)",
            "729 000 $",
            "Duplex",
            "Montréal",
            "5680 Avenue du Parc",
        ),
        PropertyRecord::basic(
            "312 Chemin Sainte-Foy, Québec (Montcalm)",
            "1 150 000 $",
            "Maison",
            "Québec",
            "312 Chemin Sainte-Foy",
        ),
    ]
}
