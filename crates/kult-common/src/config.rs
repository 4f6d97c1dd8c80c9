//! Shared configuration types.
//!
//! Both the server and the CLI build share links, so the settings that
//! shape those links live here.

use serde::{Deserialize, Serialize};

/// Settings for public share links and QR codes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShareSettings {
    /// Public origin of the web app, used to build `/shared/{id}` links.
    ///
    /// Environment variable: `KULT_PUBLIC_BASE_URL`
    pub public_base_url: String,
    /// QR-code image service. Receives the share link in its `data` parameter.
    ///
    /// Environment variable: `KULT_QR_SERVICE_URL`
    pub qr_service_url: String,
    /// Edge length of the generated QR image, in pixels.
    ///
    /// Environment variable: `KULT_QR_SIZE`
    pub qr_size: u32,
}

impl Default for ShareSettings {
    fn default() -> Self {
        Self {
            public_base_url: "http://localhost:3000".to_string(),
            qr_service_url: "https://api.qrserver.com/v1/create-qr-code/".to_string(),
            qr_size: 200,
        }
    }
}
