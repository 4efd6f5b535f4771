//! Contact-card payloads and the QR image URL built from them.
//!
//! Pure string formatting. The QR image itself is rendered by an external
//! service; the deck only stores the URL.

/// QR rendering service endpoint.
pub const QR_SERVICE: &str = "https://api.qrserver.com/v1/create-qr-code/";

/// Edge length in pixels of the generated QR image.
pub const QR_SIZE_PX: u32 = 300;

/// Personal contact fields encoded into a vCard 3.0 text block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactCard {
    pub family_name: String,
    pub given_name: String,
    /// Display name (`FN`).
    pub full_name: String,
    pub organization: Option<String>,
    pub role: Option<String>,
    /// Mobile number (`TEL;TYPE=CELL`).
    pub phone: Option<String>,
}

impl ContactCard {
    /// Render the card as vCard 3.0 text, lines joined with `\n`.
    pub fn to_vcard(&self) -> String {
        let mut lines = vec![
            "BEGIN:VCARD".to_string(),
            "VERSION:3.0".to_string(),
            format!("N:{};{};;;", self.family_name, self.given_name),
            format!("FN:{}", self.full_name),
        ];
        if let Some(org) = &self.organization {
            lines.push(format!("ORG:{}", org));
        }
        if let Some(role) = &self.role {
            lines.push(format!("TITLE:{}", role));
        }
        if let Some(phone) = &self.phone {
            lines.push(format!("TEL;TYPE=CELL:{}", phone));
        }
        lines.push("END:VCARD".to_string());
        lines.join("\n")
    }

    /// URL of a QR image encoding this card.
    pub fn qr_code_url(&self) -> String {
        qr_code_url(&self.to_vcard())
    }
}

/// URL of a black-on-white QR image encoding `payload`.
pub fn qr_code_url(payload: &str) -> String {
    format!(
        "{}?size={size}x{size}&data={}&bgcolor=ffffff&color=000000&margin=10",
        QR_SERVICE,
        urlencoding::encode(payload),
        size = QR_SIZE_PX,
    )
}
