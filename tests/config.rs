use cui_edit::{TextArea, TextAreaConfig};

#[test]
fn default_config_does_not_wrap() {
    let ta = TextArea::with_config(TextAreaConfig::default());
    assert!(!ta.config().auto_wrap);
    assert_eq!(ta.config().auto_wrap_width, 0);
}

#[test]
fn zero_width_disables_wrapping() {
    let mut ta = TextArea::with_config(TextAreaConfig::wrapped(0));
    ta.set_content("abc def ghi");
    assert!(ta.soft_breaks().is_empty());
}

#[test]
fn set_config_rewraps() {
    let mut ta = TextArea::new();
    ta.set_content("abc def");
    ta.take_dirty();

    ta.set_config(TextAreaConfig::wrapped(4));
    assert!(ta.take_dirty());
    assert_eq!(ta.wrapped_content(), "abc \ndef");

    // Same config again changes nothing.
    ta.set_config(TextAreaConfig::wrapped(4));
    assert!(!ta.is_dirty());
}

#[cfg(feature = "serde")]
mod serde_config {
    use super::*;

    #[test]
    fn round_trips_through_json() {
        let config = TextAreaConfig::wrapped(72);
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(json, r#"{"auto_wrap":true,"auto_wrap_width":72}"#);

        let back: TextAreaConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn missing_fields_use_defaults() {
        let config: TextAreaConfig =
            serde_json::from_str(r#"{"auto_wrap_width":40}"#).unwrap();
        assert_eq!(
            config,
            TextAreaConfig {
                auto_wrap: false,
                auto_wrap_width: 40,
            }
        );

        let config: TextAreaConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, TextAreaConfig::default());
    }
}
