//! i18n - Internationalization Module
//!
//! Simple translation lookups over a static string table.

use std::collections::HashMap;
use std::sync::OnceLock;

use gpui::SharedString;

/// Supported locales
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Locale {
    /// English (US)
    #[default]
    EnUS,
    /// Spanish (Spain)
    EsES,
}

impl Locale {
    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            Locale::EnUS => "English",
            Locale::EsES => "Español",
        }
    }
}

/// Translation resources
static TRANSLATIONS: OnceLock<HashMap<&'static str, (&'static str, &'static str)>> = OnceLock::new();

/// Initialize translations (key -> (en, es))
fn init_translations() -> HashMap<&'static str, (&'static str, &'static str)> {
    let mut map = HashMap::new();

    // App
    map.insert("app-title", ("MDT", "MDT"));

    // Navigation
    map.insert("nav-dashboard", ("Dashboard", "Panel"));
    map.insert("nav-roster", ("Roster", "Plantilla"));

    // Roster table
    map.insert("col-name", ("Name", "Nombre"));
    map.insert("col-call-sign", ("Call Sign", "Indicativo"));
    map.insert("col-state-id", ("State ID", "ID estatal"));
    map.insert("col-rank", ("Rank", "Rango"));
    map.insert("roster-officers", ("officers", "agentes"));
    map.insert("roster-view-details", ("View details", "Ver detalles"));
    map.insert("roster-details-title", ("Officer details", "Detalles del agente"));
    map.insert("roster-unit", ("Unit", "Unidad"));
    map.insert("table-no-records", ("No officers found", "No se encontraron agentes"));
    map.insert("table-loading", ("Loading...", "Cargando..."));

    // Dashboard feed
    map.insert("dashboard-announcements", ("Announcements", "Anuncios"));
    map.insert("dashboard-empty", ("No announcements yet", "Aún no hay anuncios"));

    // Actions
    map.insert("action-retry", ("Retry", "Reintentar"));
    map.insert("action-refresh", ("Refresh", "Actualizar"));
    map.insert("action-edit", ("Edit", "Editar"));
    map.insert("action-delete", ("Delete", "Eliminar"));
    map.insert("action-save", ("Save", "Guardar"));
    map.insert("action-cancel", ("Cancel", "Cancelar"));
    map.insert("action-confirm", ("Confirm", "Confirmar"));

    // Modals
    map.insert("modal-edit-title", ("Edit announcement", "Editar anuncio"));
    map.insert("modal-delete-title", ("Delete announcement", "Eliminar anuncio"));
    map.insert(
        "modal-delete-body",
        (
            "Are you sure you want to delete this announcement?",
            "¿Seguro que quieres eliminar este anuncio?",
        ),
    );

    // Errors
    map.insert(
        "error-fetch-failed",
        ("Could not reach the host", "No se pudo contactar con el host"),
    );

    map
}

fn translations() -> &'static HashMap<&'static str, (&'static str, &'static str)> {
    TRANSLATIONS.get_or_init(init_translations)
}

/// Translate a key
pub fn t(locale: Locale, key: &str) -> SharedString {
    if let Some(&(en, es)) = translations().get(key) {
        match locale {
            Locale::EnUS => SharedString::from(en),
            Locale::EsES => SharedString::from(es),
        }
    } else {
        // Fallback: return the key itself
        SharedString::from(key.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_key_translates() {
        assert_eq!(t(Locale::EnUS, "nav-roster"), "Roster");
        assert_eq!(t(Locale::EsES, "nav-roster"), "Plantilla");
    }

    #[test]
    fn test_unknown_key_falls_back_to_key() {
        assert_eq!(t(Locale::EnUS, "does-not-exist"), "does-not-exist");
    }
}
