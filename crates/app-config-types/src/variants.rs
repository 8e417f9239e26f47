//! Default configuration instances for the shipped deployment variants.
//!
//! Each deployment holds exactly one [`AppConfig`]; no variant is canonical,
//! so the defaults are explicit constructors rather than a `Default` impl.

use crate::app::AppConfig;

/// Defaults for the improv-game deployment.
pub fn improv_battle() -> AppConfig {
    AppConfig {
        company_name: "Improv Battle".to_string(),
        page_title: "Improv Battle - Voice Improv Game".to_string(),
        page_description: "Test your improv skills with AI! Face scenarios, perform in \
                           character, and get real-time feedback."
            .to_string(),

        supports_chat_input: true,
        supports_video_input: true,
        supports_screen_share: true,
        is_pre_connect_buffer_enabled: true,

        logo: "/lk-logo.svg".to_string(),
        accent: Some("#8b5cf6".to_string()),
        logo_dark: Some("/lk-logo-dark.svg".to_string()),
        accent_dark: Some("#a78bfa".to_string()),
        start_button_text: "🎭 Start Improv Battle".to_string(),

        sandbox_id: None,
        agent_name: None,
    }
}

/// Defaults for the fantasy-adventure deployment.
pub fn eldoria_adventures() -> AppConfig {
    AppConfig {
        company_name: "Eldoria Adventures".to_string(),
        page_title: "D&D Voice Game Master".to_string(),
        page_description: "An interactive fantasy adventure powered by voice AI".to_string(),

        supports_chat_input: true,
        supports_video_input: true,
        supports_screen_share: true,
        is_pre_connect_buffer_enabled: true,

        logo: "/lk-logo.svg".to_string(),
        accent: Some("#7c3aed".to_string()),
        logo_dark: Some("/lk-logo-dark.svg".to_string()),
        accent_dark: Some("#a78bfa".to_string()),
        start_button_text: "⚔️ Begin Adventure".to_string(),

        sandbox_id: None,
        agent_name: None,
    }
}

/// Defaults for the shopping-assistant deployment.
pub fn online_store() -> AppConfig {
    AppConfig {
        company_name: "Your Online Store".to_string(),
        page_title: "Voice Shopping Assistant".to_string(),
        page_description: "Shop with your voice - browse products, manage cart, and place \
                           orders effortlessly"
            .to_string(),

        supports_chat_input: true,
        supports_video_input: true,
        supports_screen_share: true,
        is_pre_connect_buffer_enabled: true,

        logo: "/lk-logo.svg".to_string(),
        accent: Some("#14b8a6".to_string()),
        logo_dark: Some("/lk-logo-dark.svg".to_string()),
        accent_dark: Some("#5eead4".to_string()),
        start_button_text: "🛒 Start Shopping".to_string(),

        sandbox_id: None,
        agent_name: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_variants_validate() {
        for config in [improv_battle(), eldoria_adventures(), online_store()] {
            config.validate().unwrap();
        }
    }

    #[test]
    fn test_improv_battle_defaults() {
        let config = improv_battle();
        assert_eq!(config.company_name, "Improv Battle");
        assert_eq!(config.accent.as_deref(), Some("#8b5cf6"));
        assert_eq!(config.start_button_text, "🎭 Start Improv Battle");
    }

    #[test]
    fn test_eldoria_adventures_defaults() {
        let config = eldoria_adventures();
        assert_eq!(config.company_name, "Eldoria Adventures");
        assert_eq!(config.accent.as_deref(), Some("#7c3aed"));
        assert_eq!(config.accent_dark.as_deref(), Some("#a78bfa"));
        assert_eq!(config.start_button_text, "⚔️ Begin Adventure");
    }

    #[test]
    fn test_online_store_defaults() {
        let config = online_store();
        assert_eq!(config.company_name, "Your Online Store");
        assert_eq!(config.accent.as_deref(), Some("#14b8a6"));
        assert_eq!(config.accent_dark.as_deref(), Some("#5eead4"));
        assert_eq!(config.start_button_text, "🛒 Start Shopping");
    }

    #[test]
    fn test_variants_leave_sandbox_fields_unset() {
        for config in [improv_battle(), eldoria_adventures(), online_store()] {
            assert_eq!(config.sandbox_id, None);
            assert_eq!(config.agent_name, None);

            let json = serde_json::to_value(&config).unwrap();
            let obj = json.as_object().unwrap();
            assert!(!obj.contains_key("sandboxId"));
            assert!(!obj.contains_key("agentName"));
        }
    }

    #[test]
    fn test_variants_enable_all_input_modes() {
        for config in [improv_battle(), eldoria_adventures(), online_store()] {
            assert!(config.supports_chat_input);
            assert!(config.supports_video_input);
            assert!(config.supports_screen_share);
            assert!(config.is_pre_connect_buffer_enabled);
        }
    }

    #[test]
    fn test_variant_round_trip() {
        let config = eldoria_adventures();
        let json = serde_json::to_string(&config).unwrap();
        let parsed: AppConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, parsed);
    }
}
