// ============================================================================
// PARTNER FORM VIEWMODEL - Estado del formulario del panel admin
// ============================================================================
// Crear o editar un parceiro. Las coordenadas se guardan como texto tal cual
// se escriben y se convierten al guardar.
// ============================================================================

use crate::models::{Coordinates, Partner, PartnerDraft};
use crate::stores::{PartnerError, PartnerStore};

/// Campo de texto del formulario
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Address,
    Longitude,
    Latitude,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct PartnerFormViewModel {
    pub visible: bool,
    /// Id del parceiro en edición; None = creación
    pub editing: Option<String>,
    pub name: String,
    pub address: String,
    pub longitude: String,
    pub latitude: String,
    pub logo: Option<String>,
    pub featured: bool,
}

impl PartnerFormViewModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// "+ Adicionar Parceiro": formulario vacío en modo creación
    pub fn open_new(&mut self) {
        *self = Self {
            visible: true,
            longitude: "0".to_string(),
            latitude: "0".to_string(),
            ..Self::default()
        };
    }

    /// Cargar un parceiro existente en el formulario
    pub fn open_edit(&mut self, partner: &Partner) {
        *self = Self {
            visible: true,
            editing: Some(partner.id.clone()),
            name: partner.name.clone(),
            address: partner.address.clone(),
            longitude: partner.coordinates.longitude.to_string(),
            latitude: partner.coordinates.latitude.to_string(),
            logo: partner.logo.clone(),
            featured: partner.featured,
        };
    }

    /// Descartar el borrador
    pub fn cancel(&mut self) {
        *self = Self::default();
    }

    pub fn is_editing(&self) -> bool {
        self.editing.is_some()
    }

    pub fn title(&self) -> &'static str {
        if self.is_editing() {
            "Editar Parceiro"
        } else {
            "Adicionar Novo Parceiro"
        }
    }

    pub fn description(&self) -> &'static str {
        if self.is_editing() {
            "Atualize os dados do parceiro"
        } else {
            "Preencha os dados do novo parceiro"
        }
    }

    pub fn apply(&mut self, field: FormField, value: String) {
        match field {
            FormField::Name => self.name = value,
            FormField::Address => self.address = value,
            FormField::Longitude => self.longitude = value,
            FormField::Latitude => self.latitude = value,
        }
    }

    pub fn set_featured(&mut self, featured: bool) {
        self.featured = featured;
    }

    /// URL (object URL) del logo elegido
    pub fn set_logo(&mut self, logo: Option<String>) {
        self.logo = logo;
    }

    pub fn draft(&self) -> PartnerDraft {
        PartnerDraft {
            name: self.name.clone(),
            address: self.address.clone(),
            logo: self.logo.clone(),
            coordinates: Coordinates::new(
                parse_coordinate(&self.longitude),
                parse_coordinate(&self.latitude),
            ),
            featured: self.featured,
        }
    }

    /// Guardar en el store; si va bien el formulario se cierra y se limpia
    ///
    /// Con error no se toca ni el store ni el borrador.
    pub fn save(&mut self, store: &mut PartnerStore) -> Result<Partner, PartnerError> {
        let draft = self.draft();
        let saved = match self.editing.as_deref() {
            Some(id) => store.update(id, draft)?,
            None => store.create(draft)?,
        };
        self.cancel();
        Ok(saved)
    }
}

/// Conversión tolerante como `parseFloat`: vale el prefijo numérico más
/// largo; sin prefijo, o con -0, el resultado es 0
pub fn parse_coordinate(raw: &str) -> f64 {
    let trimmed = raw.trim();
    let numeric_len = trimmed
        .find(|c: char| !(c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E')))
        .unwrap_or(trimmed.len());
    let candidate = &trimmed[..numeric_len];

    (1..=candidate.len())
        .rev()
        .find_map(|end| candidate[..end].parse::<f64>().ok())
        .filter(|v| v.is_finite())
        .map(|v| v + 0.0)
        .unwrap_or(0.0)
}
