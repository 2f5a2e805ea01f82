// ============================================================================
// PARTNER STORE - Colección en memoria de parceiros (panel admin)
// ============================================================================
// Sin persistencia: se pierde al recargar la página
// ============================================================================

use std::fmt;

use uuid::Uuid;

use crate::models::{Partner, PartnerDraft};

/// Error de operaciones CRUD sobre parceiros
#[derive(Debug, Clone, PartialEq)]
pub enum PartnerError {
    /// Nombre o dirección vacíos
    MissingRequiredFields,
    NotFound(String),
}

impl fmt::Display for PartnerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PartnerError::MissingRequiredFields => write!(f, "Nome e endereço são obrigatórios"),
            PartnerError::NotFound(id) => write!(f, "Parceiro {} não encontrado", id),
        }
    }
}

impl std::error::Error for PartnerError {}

/// Lista ordenada de parceiros indexada por id
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PartnerStore {
    partners: Vec<Partner>,
}

impl PartnerStore {
    pub fn new(seed: Vec<Partner>) -> Self {
        Self { partners: seed }
    }

    pub fn partners(&self) -> &[Partner] {
        &self.partners
    }

    pub fn get(&self, id: &str) -> Option<&Partner> {
        self.partners.iter().find(|p| p.id == id)
    }

    pub fn len(&self) -> usize {
        self.partners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.partners.is_empty()
    }

    /// Crear parceiro nuevo al final de la lista con id generado
    pub fn create(&mut self, draft: PartnerDraft) -> Result<Partner, PartnerError> {
        validate(&draft)?;
        let partner = Partner::from_draft(Uuid::new_v4().to_string(), draft);
        log::info!("➕ Parceiro criado: {} ({})", partner.name, partner.id);
        self.partners.push(partner.clone());
        Ok(partner)
    }

    /// Reemplazar los datos de un parceiro manteniendo id y posición
    pub fn update(&mut self, id: &str, draft: PartnerDraft) -> Result<Partner, PartnerError> {
        validate(&draft)?;
        let slot = self
            .partners
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| PartnerError::NotFound(id.to_string()))?;
        *slot = Partner::from_draft(id, draft);
        log::info!("✏️ Parceiro atualizado: {} ({})", slot.name, id);
        Ok(slot.clone())
    }

    pub fn delete(&mut self, id: &str) -> Result<Partner, PartnerError> {
        let index = self
            .partners
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(|| PartnerError::NotFound(id.to_string()))?;
        let removed = self.partners.remove(index);
        log::info!("🗑️ Parceiro excluído: {} ({})", removed.name, id);
        Ok(removed)
    }
}

/// Nombre y dirección son obligatorios (solo espacios cuenta como vacío)
pub fn validate(draft: &PartnerDraft) -> Result<(), PartnerError> {
    if draft.name.trim().is_empty() || draft.address.trim().is_empty() {
        return Err(PartnerError::MissingRequiredFields);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{admin_seed_partners, maps_url, seed_partners, Coordinates};

    fn draft(name: &str, address: &str) -> PartnerDraft {
        PartnerDraft {
            name: name.to_string(),
            address: address.to_string(),
            logo: None,
            coordinates: Coordinates::new(-46.70, -23.60),
            featured: false,
        }
    }

    #[test]
    fn create_then_read_returns_input_plus_id_and_url() {
        let mut store = PartnerStore::new(admin_seed_partners());
        let input = PartnerDraft {
            logo: Some("blob:logo".to_string()),
            featured: true,
            ..draft("Empório Central", "Rua da Consolação, 10")
        };

        let created = store.create(input.clone()).unwrap();
        let read = store.get(&created.id).unwrap();

        assert_eq!(read, &created);
        assert!(!read.id.is_empty());
        assert!(admin_seed_partners().iter().all(|p| p.id != read.id));
        assert_eq!(PartnerDraft::from(read), input);
        assert_eq!(read.google_maps_url, maps_url(input.coordinates));
        assert_eq!(store.partners().last(), Some(read));
    }

    #[test]
    fn create_generates_distinct_ids() {
        let mut store = PartnerStore::default();
        let a = store.create(draft("A", "Rua 1")).unwrap();
        let b = store.create(draft("B", "Rua 2")).unwrap();
        assert_ne!(a.id, b.id);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn create_rejects_missing_name_or_address() {
        let mut store = PartnerStore::new(admin_seed_partners());
        assert_eq!(store.create(draft("", "Rua 1")), Err(PartnerError::MissingRequiredFields));
        assert_eq!(store.create(draft("Loja", "   ")), Err(PartnerError::MissingRequiredFields));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn delete_removes_exactly_one_and_keeps_order() {
        let mut store = PartnerStore::new(seed_partners());
        let removed = store.delete("2").unwrap();

        assert_eq!(removed.id, "2");
        let ids: Vec<&str> = store.partners().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "3", "4"]);
    }

    #[test]
    fn delete_unknown_id_leaves_store_untouched() {
        let mut store = PartnerStore::new(seed_partners());
        assert_eq!(store.delete("99"), Err(PartnerError::NotFound("99".to_string())));
        assert_eq!(store.partners(), &seed_partners()[..]);
    }

    #[test]
    fn update_preserves_identifier_and_position() {
        let mut store = PartnerStore::new(seed_partners());
        let mut edit = PartnerDraft::from(store.get("3").unwrap());
        edit.name = "Conveniência 24h Plus".to_string();
        edit.coordinates = Coordinates::new(-46.6, -23.5);

        let updated = store.update("3", edit).unwrap();

        assert_eq!(updated.id, "3");
        assert_eq!(store.partners()[2], updated);
        assert_eq!(updated.name, "Conveniência 24h Plus");
        assert_eq!(updated.google_maps_url, "https://maps.google.com/?q=-23.5,-46.6");
    }

    #[test]
    fn update_validates_before_touching_the_record() {
        let mut store = PartnerStore::new(seed_partners());
        assert_eq!(store.update("1", draft("", "")), Err(PartnerError::MissingRequiredFields));
        assert_eq!(store.get("1"), seed_partners().first());
        assert_eq!(
            store.update("nope", draft("X", "Y")),
            Err(PartnerError::NotFound("nope".to_string()))
        );
    }

    #[test]
    fn validation_message_is_user_facing() {
        assert_eq!(
            PartnerError::MissingRequiredFields.to_string(),
            "Nome e endereço são obrigatórios"
        );
    }
}
