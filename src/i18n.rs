pub const DEFAULT_LANGUAGE: &str = "en";

/// Languages with a dictionary, in settings-screen cycle order.
pub const SUPPORTED_LANGUAGES: [&str; 4] = ["en", "fr", "es", "de"];

type Dictionary = &'static [(&'static str, &'static str)];

static EN: Dictionary = &[
    ("app.tagline", "reviews from people like you"),
    ("tab.feed", "Feed"),
    ("tab.products", "Products"),
    ("tab.notifications", "Notifications"),
    ("tab.settings", "Settings"),
    ("tab.help", "Help"),
    ("feed.empty", "Nothing here yet. Press 'r' to refresh."),
    ("feed.count", "{{count}} posts"),
    ("feed.hint", "r: Refresh   m: Load more   Up/Down: Scroll"),
    ("products.empty", "No products match the current filter."),
    ("products.all", "All"),
    ("products.filter", "Category: {{category}}"),
    ("products.ratings", "{{count}} ratings"),
    ("products.hint", "f: Filter category   /: Search   Enter: Open"),
    ("product.reviews", "Reviews"),
    ("product.no_reviews", "No reviews yet."),
    ("product.hint", "r: More reviews   esc: Back"),
    ("search.prompt", "Search: "),
    ("search.hint", "Type to search, Enter to apply, Esc to cancel"),
    ("notifications.empty", "You're all caught up."),
    ("notifications.unread", "{{count}} unread"),
    ("notifications.hint", "space: Mark read   a: Mark all read   r: Refresh"),
    ("notification.like", "{{actor}} liked your review"),
    ("notification.comment", "{{actor}} commented on your post"),
    ("notification.follow", "{{actor}} started following you"),
    ("notification.review", "{{actor}} reviewed a product you follow"),
    ("settings.theme", "Theme"),
    ("settings.language", "Language"),
    ("settings.active", "Active scheme"),
    ("settings.hint", "t: Cycle theme   l: Cycle language"),
    ("theme.system", "System"),
    ("theme.light", "Light"),
    ("theme.dark", "Dark"),
    ("category.electronics", "Electronics"),
    ("category.restaurants", "Restaurants"),
    ("category.beauty", "Beauty"),
    ("category.travel", "Travel"),
    ("category.home_services", "Home Services"),
    ("help.title", "Key bindings"),
    ("help.global", "Global"),
    ("help.lists", "Lists"),
    ("help.screens", "Screens"),
    ("hint.global", "1-5: Tabs   Tab: Focus tab bar   ?: Help   q: Quit"),
    ("hint.tabbar", "Tab: Back to content   Left/Right: Choose tab   Enter: Open"),
    ("help.close", "Press ? or Esc to close this screen"),
];

static FR: Dictionary = &[
    ("app.tagline", "des avis de gens comme vous"),
    ("tab.feed", "Fil"),
    ("tab.products", "Produits"),
    ("tab.notifications", "Notifications"),
    ("tab.settings", "Réglages"),
    ("tab.help", "Aide"),
    ("feed.empty", "Rien pour l'instant. Appuyez sur 'r' pour actualiser."),
    ("feed.count", "{{count}} publications"),
    ("feed.hint", "r : Actualiser   m : Charger plus   Haut/Bas : Défiler"),
    ("products.empty", "Aucun produit ne correspond au filtre."),
    ("products.all", "Tous"),
    ("products.filter", "Catégorie : {{category}}"),
    ("products.ratings", "{{count}} notes"),
    ("products.hint", "f : Filtrer   / : Rechercher   Entrée : Ouvrir"),
    ("product.reviews", "Avis"),
    ("product.no_reviews", "Pas encore d'avis."),
    ("product.hint", "r : Plus d'avis   échap : Retour"),
    ("search.prompt", "Recherche : "),
    ("search.hint", "Tapez pour chercher, Entrée pour valider, Échap pour annuler"),
    ("notifications.empty", "Vous êtes à jour."),
    ("notifications.unread", "{{count}} non lues"),
    ("notifications.hint", "espace : Marquer lu   a : Tout marquer lu   r : Actualiser"),
    ("notification.like", "{{actor}} a aimé votre avis"),
    ("notification.comment", "{{actor}} a commenté votre publication"),
    ("notification.follow", "{{actor}} vous suit"),
    ("notification.review", "{{actor}} a évalué un produit que vous suivez"),
    ("settings.theme", "Thème"),
    ("settings.language", "Langue"),
    ("settings.active", "Schéma actif"),
    ("settings.hint", "t : Changer de thème   l : Changer de langue"),
    ("theme.system", "Système"),
    ("theme.light", "Clair"),
    ("theme.dark", "Sombre"),
    ("category.electronics", "Électronique"),
    ("category.restaurants", "Restaurants"),
    ("category.beauty", "Beauté"),
    ("category.travel", "Voyage"),
    ("category.home_services", "Services à domicile"),
    ("help.title", "Raccourcis"),
    ("help.global", "Général"),
    ("help.lists", "Listes"),
    ("help.screens", "Écrans"),
    ("hint.global", "1-5 : Onglets   Tab : Barre d'onglets   ? : Aide   q : Quitter"),
    ("hint.tabbar", "Tab : Retour au contenu   Gauche/Droite : Choisir   Entrée : Ouvrir"),
    ("help.close", "Appuyez sur ? ou Échap pour fermer"),
];

static ES: Dictionary = &[
    ("app.tagline", "reseñas de gente como tú"),
    ("tab.feed", "Inicio"),
    ("tab.products", "Productos"),
    ("tab.notifications", "Notificaciones"),
    ("tab.settings", "Ajustes"),
    ("tab.help", "Ayuda"),
    ("feed.empty", "Aún no hay nada. Pulsa 'r' para actualizar."),
    ("feed.count", "{{count}} publicaciones"),
    ("feed.hint", "r: Actualizar   m: Cargar más   Arriba/Abajo: Desplazar"),
    ("products.empty", "Ningún producto coincide con el filtro."),
    ("products.all", "Todos"),
    ("products.filter", "Categoría: {{category}}"),
    ("products.ratings", "{{count}} valoraciones"),
    ("products.hint", "f: Filtrar   /: Buscar   Intro: Abrir"),
    ("product.reviews", "Reseñas"),
    ("product.no_reviews", "Todavía no hay reseñas."),
    ("product.hint", "r: Más reseñas   esc: Volver"),
    ("search.prompt", "Buscar: "),
    ("search.hint", "Escribe para buscar, Intro para aplicar, Esc para cancelar"),
    ("notifications.empty", "Estás al día."),
    ("notifications.unread", "{{count}} sin leer"),
    ("notifications.hint", "espacio: Marcar leída   a: Marcar todas   r: Actualizar"),
    ("notification.like", "A {{actor}} le gustó tu reseña"),
    ("notification.comment", "{{actor}} comentó tu publicación"),
    ("notification.follow", "{{actor}} empezó a seguirte"),
    ("notification.review", "{{actor}} reseñó un producto que sigues"),
    ("settings.theme", "Tema"),
    ("settings.language", "Idioma"),
    ("settings.active", "Esquema activo"),
    ("settings.hint", "t: Cambiar tema   l: Cambiar idioma"),
    ("theme.system", "Sistema"),
    ("theme.light", "Claro"),
    ("theme.dark", "Oscuro"),
    ("category.electronics", "Electrónica"),
    ("category.restaurants", "Restaurantes"),
    ("category.beauty", "Belleza"),
    ("category.travel", "Viajes"),
    ("category.home_services", "Servicios del hogar"),
    ("help.title", "Atajos"),
    ("help.global", "General"),
    ("help.lists", "Listas"),
    ("help.screens", "Pantallas"),
    ("hint.global", "1-5: Pestañas   Tab: Barra de pestañas   ?: Ayuda   q: Salir"),
    ("hint.tabbar", "Tab: Volver al contenido   Izq/Der: Elegir   Intro: Abrir"),
    ("help.close", "Pulsa ? o Esc para cerrar"),
];

static DE: Dictionary = &[
    ("app.tagline", "Bewertungen von Leuten wie dir"),
    ("tab.feed", "Feed"),
    ("tab.products", "Produkte"),
    ("tab.notifications", "Mitteilungen"),
    ("tab.settings", "Einstellungen"),
    ("tab.help", "Hilfe"),
    ("feed.empty", "Noch nichts da. Mit 'r' aktualisieren."),
    ("feed.count", "{{count}} Beiträge"),
    ("feed.hint", "r: Aktualisieren   m: Mehr laden   Hoch/Runter: Blättern"),
    ("products.empty", "Keine Produkte passen zum Filter."),
    ("products.all", "Alle"),
    ("products.filter", "Kategorie: {{category}}"),
    ("products.ratings", "{{count}} Bewertungen"),
    ("products.hint", "f: Filtern   /: Suchen   Enter: Öffnen"),
    ("product.reviews", "Rezensionen"),
    ("product.no_reviews", "Noch keine Rezensionen."),
    ("product.hint", "r: Mehr Rezensionen   esc: Zurück"),
    ("search.prompt", "Suche: "),
    ("search.hint", "Tippen zum Suchen, Enter übernimmt, Esc bricht ab"),
    ("notifications.empty", "Alles erledigt."),
    ("notifications.unread", "{{count}} ungelesen"),
    ("notifications.hint", "Leertaste: Gelesen   a: Alle gelesen   r: Aktualisieren"),
    ("notification.like", "{{actor}} gefällt deine Bewertung"),
    ("notification.comment", "{{actor}} hat deinen Beitrag kommentiert"),
    ("notification.follow", "{{actor}} folgt dir jetzt"),
    ("notification.review", "{{actor}} hat ein Produkt bewertet, dem du folgst"),
    ("settings.theme", "Design"),
    ("settings.language", "Sprache"),
    ("settings.active", "Aktives Schema"),
    ("settings.hint", "t: Design wechseln   l: Sprache wechseln"),
    ("theme.system", "System"),
    ("theme.light", "Hell"),
    ("theme.dark", "Dunkel"),
    ("category.electronics", "Elektronik"),
    ("category.restaurants", "Restaurants"),
    ("category.beauty", "Beauty"),
    ("category.travel", "Reisen"),
    ("category.home_services", "Haushaltsdienste"),
    ("help.title", "Tastenkürzel"),
    ("help.global", "Allgemein"),
    ("help.lists", "Listen"),
    ("help.screens", "Ansichten"),
    ("hint.global", "1-5: Tabs   Tab: Tableiste   ?: Hilfe   q: Beenden"),
    ("hint.tabbar", "Tab: Zurück zum Inhalt   Links/Rechts: Wählen   Enter: Öffnen"),
    ("help.close", "? oder Esc schließt diese Ansicht"),
];

fn dictionary(code: &str) -> Option<Dictionary> {
    match code {
        "en" => Some(EN),
        "fr" => Some(FR),
        "es" => Some(ES),
        "de" => Some(DE),
        _ => None,
    }
}

fn lookup(dictionary: Dictionary, key: &str) -> Option<&'static str> {
    dictionary
        .iter()
        .find(|(candidate, _)| *candidate == key)
        .map(|(_, value)| *value)
}

pub fn is_supported(code: &str) -> bool {
    dictionary(code).is_some()
}

/// The language after `current` in `SUPPORTED_LANGUAGES`, wrapping around.
/// Unknown codes restart the cycle.
pub fn next_language(current: &str) -> &'static str {
    match SUPPORTED_LANGUAGES.iter().position(|code| *code == current) {
        Some(index) => SUPPORTED_LANGUAGES[(index + 1) % SUPPORTED_LANGUAGES.len()],
        None => SUPPORTED_LANGUAGES[0],
    }
}

/// Holds the active language and resolves keys against it.
#[derive(Clone, Debug)]
pub struct Translator {
    active: String,
}

impl Default for Translator {
    fn default() -> Self {
        Self::new(DEFAULT_LANGUAGE)
    }
}

impl Translator {
    pub fn new(code: &str) -> Self {
        Self {
            active: code.to_string(),
        }
    }

    /// Switch dictionaries. Unsupported codes stay active; their lookups
    /// fall back to English.
    pub fn change_language(&mut self, code: &str) {
        if !is_supported(code) {
            tracing::warn!(code, "no dictionary for language; falling back to English");
        }
        self.active = code.to_string();
    }

    pub fn active_language(&self) -> &str {
        &self.active
    }

    /// Active dictionary, then English, then `fallback`. `{{name}}`
    /// placeholders are filled from `params`.
    pub fn translate(&self, key: &str, fallback: &str, params: &[(&str, &str)]) -> String {
        let template = dictionary(&self.active)
            .and_then(|dict| lookup(dict, key))
            .or_else(|| lookup(EN, key))
            .unwrap_or(fallback);
        interpolate(template, params)
    }

    /// Shorthand for keys without placeholders; the key doubles as fallback.
    pub fn t(&self, key: &str) -> String {
        self.translate(key, key, &[])
    }
}

fn interpolate(template: &str, params: &[(&str, &str)]) -> String {
    let mut out = template.to_string();
    for (name, value) in params {
        out = out.replace(&format!("{{{{{name}}}}}"), value);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_dictionary_covers_english_keys() {
        for code in SUPPORTED_LANGUAGES {
            let dict = dictionary(code).unwrap();
            for (key, _) in EN {
                assert!(lookup(dict, key).is_some(), "{code} is missing {key}");
            }
        }
    }

    #[test]
    fn translates_active_language() {
        let mut translator = Translator::default();
        assert_eq!(translator.t("settings.language"), "Language");
        translator.change_language("fr");
        assert_eq!(translator.active_language(), "fr");
        assert_eq!(translator.t("settings.language"), "Langue");
    }

    #[test]
    fn unsupported_language_falls_back_to_english() {
        let mut translator = Translator::default();
        translator.change_language("ja");
        assert_eq!(translator.active_language(), "ja");
        assert_eq!(translator.t("tab.feed"), "Feed");
    }

    #[test]
    fn unknown_key_uses_fallback() {
        let translator = Translator::new("de");
        assert_eq!(translator.translate("missing.key", "Fallback", &[]), "Fallback");
    }

    #[test]
    fn interpolates_placeholders() {
        let translator = Translator::new("es");
        assert_eq!(
            translator.translate("notification.follow", "", &[("actor", "Ana")]),
            "Ana empezó a seguirte"
        );
        assert_eq!(
            translator.translate("feed.count", "", &[("count", "12")]),
            "12 publicaciones"
        );
    }

    #[test]
    fn language_cycle_wraps() {
        assert_eq!(next_language("en"), "fr");
        assert_eq!(next_language("de"), "en");
        assert_eq!(next_language("ja"), "en");
    }
}
