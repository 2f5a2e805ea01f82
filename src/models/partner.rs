use serde::{Deserialize, Serialize};

use super::location::{Coordinates, LatLng};

pub const FEATURED_MARKER_COLOR: &str = "#FACC15";
pub const STANDARD_MARKER_COLOR: &str = "#3B82F6";

const MAPS_LOOKUP_URL: &str = "https://maps.google.com/?q=";

/// Punto de venta mostrado en el mapa de "Onde encontrar"
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Partner {
    pub id: String,
    pub name: String,
    pub address: String,
    #[serde(default)]
    pub logo: Option<String>,
    pub coordinates: Coordinates,
    #[serde(default)]
    pub featured: bool,
    /// Derivada de `coordinates`, nunca editada a mano
    pub google_maps_url: String,
}

impl Partner {
    pub fn from_draft(id: impl Into<String>, draft: PartnerDraft) -> Self {
        let google_maps_url = maps_url(draft.coordinates);
        Self {
            id: id.into(),
            name: draft.name,
            address: draft.address,
            logo: draft.logo,
            coordinates: draft.coordinates,
            featured: draft.featured,
            google_maps_url,
        }
    }

    pub fn position(&self) -> LatLng {
        self.coordinates.to_lat_lng()
    }

    pub fn marker_color(&self) -> &'static str {
        if self.featured {
            FEATURED_MARKER_COLOR
        } else {
            STANDARD_MARKER_COLOR
        }
    }

    /// Contenido HTML del info window del marcador
    pub fn info_window_html(&self) -> String {
        format!(
            r#"<div class="p-2"><h3 class="font-bold text-black">{}</h3><p class="text-gray-700 text-sm">{}</p><a href="{}" target="_blank" rel="noopener" class="text-blue-600 text-sm font-medium mt-2 inline-block">Abrir no Google Maps</a></div>"#,
            escape_html(&self.name),
            escape_html(&self.address),
            escape_html(&self.google_maps_url),
        )
    }
}

/// Datos editables de un parceiro (formulario admin)
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PartnerDraft {
    pub name: String,
    pub address: String,
    pub logo: Option<String>,
    pub coordinates: Coordinates,
    pub featured: bool,
}

impl From<&Partner> for PartnerDraft {
    fn from(partner: &Partner) -> Self {
        Self {
            name: partner.name.clone(),
            address: partner.address.clone(),
            logo: partner.logo.clone(),
            coordinates: partner.coordinates,
            featured: partner.featured,
        }
    }
}

/// URL de Google Maps para las coordenadas (lat primero)
pub fn maps_url(coordinates: Coordinates) -> String {
    format!("{}{},{}", MAPS_LOOKUP_URL, coordinates.latitude, coordinates.longitude)
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

fn seed(id: &str, name: &str, address: &str, longitude: f64, latitude: f64, featured: bool) -> Partner {
    Partner::from_draft(
        id,
        PartnerDraft {
            name: name.to_string(),
            address: address.to_string(),
            logo: Some("/placeholder.svg".to_string()),
            coordinates: Coordinates::new(longitude, latitude),
            featured,
        },
    )
}

/// Parceiros de la landing page
pub fn seed_partners() -> Vec<Partner> {
    vec![
        seed("1", "Posto São João", "Av. Paulista, 1000, São Paulo", -46.6546, -23.5646, true),
        seed("2", "Supermercado Express", "Rua Augusta, 500, São Paulo", -46.6499, -23.5566, false),
        seed("3", "Conveniência 24h", "Av. Rebouças, 1234, São Paulo", -46.6752, -23.5708, false),
        seed("4", "Bar do Zé", "Rua Oscar Freire, 987, São Paulo", -46.6680, -23.5622, true),
    ]
}

/// Lista inicial del panel admin (independiente de la landing)
pub fn admin_seed_partners() -> Vec<Partner> {
    seed_partners().into_iter().take(2).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_url_puts_latitude_first() {
        let url = maps_url(Coordinates::new(-46.6546, -23.5646));
        assert_eq!(url, "https://maps.google.com/?q=-23.5646,-46.6546");
    }

    #[test]
    fn seed_data_matches_landing_and_admin_lists() {
        let landing = seed_partners();
        let admin = admin_seed_partners();
        assert_eq!(landing.len(), 4);
        assert_eq!(admin.len(), 2);
        assert_eq!(admin[..], landing[..2]);
        assert_eq!(landing[0].google_maps_url, "https://maps.google.com/?q=-23.5646,-46.6546");
        assert!(landing.iter().all(|p| p.google_maps_url == maps_url(p.coordinates)));
    }

    #[test]
    fn marker_color_depends_on_featured_flag() {
        let partners = seed_partners();
        assert_eq!(partners[0].marker_color(), FEATURED_MARKER_COLOR);
        assert_eq!(partners[1].marker_color(), STANDARD_MARKER_COLOR);
    }

    #[test]
    fn position_swaps_coordinate_order() {
        let partner = &seed_partners()[2];
        let position = partner.position();
        assert_eq!(position.lat, -23.5708);
        assert_eq!(position.lng, -46.6752);
    }

    #[test]
    fn info_window_escapes_partner_text() {
        let mut partner = seed_partners().remove(1);
        partner.name = "<b>Bar & Co</b>".to_string();
        let html = partner.info_window_html();
        assert!(html.contains("&lt;b&gt;Bar &amp; Co&lt;/b&gt;"));
        assert!(html.contains("Rua Augusta, 500, São Paulo"));
        assert!(html.contains(r#"href="https://maps.google.com/?q=-23.5566,-46.6499""#));
        assert!(!html.contains("<b>"));
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let json = serde_json::to_value(&seed_partners()[0]).unwrap();
        assert_eq!(json["googleMapsUrl"], "https://maps.google.com/?q=-23.5646,-46.6546");
        assert_eq!(json["coordinates"]["longitude"], -46.6546);
        assert_eq!(json["featured"], true);
    }
}
