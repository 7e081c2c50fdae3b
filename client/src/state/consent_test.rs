use super::*;

// =============================================================
// Presets
// =============================================================

#[test]
fn accept_all_grants_everything() {
    let prefs = ConsentPreferences::accept_all(1.0);
    assert!(prefs.allows(ConsentCategory::Functional));
    assert!(prefs.allows(ConsentCategory::Analytics));
    assert!(prefs.allows(ConsentCategory::Marketing));
    assert_eq!(prefs.version, CONSENT_VERSION);
}

#[test]
fn essential_only_keeps_functional() {
    let prefs = ConsentPreferences::essential_only(1.0);
    assert!(prefs.allows(ConsentCategory::Functional));
    assert!(!prefs.allows(ConsentCategory::Analytics));
    assert!(!prefs.allows(ConsentCategory::Marketing));
}

#[test]
fn custom_always_grants_functional() {
    let prefs = ConsentPreferences::custom(true, false, 5.0);
    assert!(prefs.functional);
    assert!(prefs.analytics);
    assert!(!prefs.marketing);
}

// =============================================================
// Stored records
// =============================================================

#[test]
fn from_stored_accepts_current_version() {
    let raw = serde_json::to_string(&ConsentPreferences::custom(false, true, 42.0)).unwrap();
    let prefs = ConsentPreferences::from_stored(&raw).unwrap();
    assert!(prefs.marketing);
    assert!((prefs.timestamp - 42.0).abs() < f64::EPSILON);
}

#[test]
fn from_stored_rejects_old_version() {
    let raw = serde_json::json!({
        "functional": true,
        "analytics": true,
        "marketing": true,
        "version": "0.9",
        "timestamp": 1.0
    })
    .to_string();
    assert_eq!(ConsentPreferences::from_stored(&raw), None);
}

#[test]
fn from_stored_rejects_garbage() {
    assert_eq!(ConsentPreferences::from_stored("yes please"), None);
    assert_eq!(ConsentPreferences::from_stored("{}"), None);
}

// =============================================================
// ConsentCategory
// =============================================================

#[test]
fn category_parses_attribute_values() {
    assert_eq!(ConsentCategory::from_attr("required"), Some(ConsentCategory::Functional));
    assert_eq!(ConsentCategory::from_attr("Functional"), Some(ConsentCategory::Functional));
    assert_eq!(ConsentCategory::from_attr(" analytics "), Some(ConsentCategory::Analytics));
    assert_eq!(ConsentCategory::from_attr("marketing"), Some(ConsentCategory::Marketing));
    assert_eq!(ConsentCategory::from_attr("tracking"), None);
}
