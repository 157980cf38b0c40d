//! Scripted food-safety assistant.
//!
//! Replies are looked up by keyword: the first rule with any keyword contained
//! in the lower-cased message wins. There is no language understanding beyond
//! that, so "this" triggers the greeting because it contains "hi".

use crate::models::SafetyGuideline;

const FOOD_SAFETY_REPLY: &str = "I can help you with food safety guidelines! Here are the key points: Food must be within expiry date, prepared food should be donated within 2 hours, keep food at proper temperature, and package food securely. What specific food safety question do you have?";
const EXPIRY_REPLY: &str = "Food donations must be within their expiry date. For prepared foods, they should be donated within 2 hours of preparation. Please check the expiry date on packaged foods before donating.";
const TEMPERATURE_REPLY: &str = "Temperature control is crucial! Keep cold foods below 40°F (4°C) and hot foods above 140°F (60°C). If you're unsure about temperature safety, it's better to be cautious.";
const PACKAGING_REPLY: &str = "Please package food securely to prevent contamination. Use clean containers, seal properly, and label with preparation time if applicable. Original packaging is preferred when possible.";
const DONATION_REPLY: &str = "I'm here to help you donate food safely! I can guide you through our food safety guidelines and help you prepare your donation. What type of food are you looking to donate?";
const GREETING_REPLY: &str = "Hello! Welcome to FoodShare AI. I'm here to help you donate surplus food safely and efficiently. How can I assist you with your food donation today?";
const FALLBACK_REPLY: &str = "I'm here to help you with food donations and safety guidelines. You can ask me about food safety, expiry dates, proper packaging, or temperature requirements. How can I assist you?";

/// Keyword rules, checked in order
const RULES: &[(&[&str], &str)] = &[
    (&["food safety", "safe"], FOOD_SAFETY_REPLY),
    (&["expiry", "expire"], EXPIRY_REPLY),
    (&["temperature", "cold", "hot"], TEMPERATURE_REPLY),
    (&["packaging", "package"], PACKAGING_REPLY),
    (&["donate", "donation"], DONATION_REPLY),
    (&["hello", "hi"], GREETING_REPLY),
];

/// Response type recorded alongside every reply
pub const REPLY_TYPE: &str = "food_safety_guidance";

/// Chat type recorded alongside every user message
pub const CHAT_TYPE: &str = "food_donation";

/// Pick the canned reply for a user message
pub fn reply_to(message: &str) -> &'static str {
    let message = message.to_lowercase();

    RULES
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|keyword| message.contains(keyword)))
        .map(|(_, reply)| *reply)
        .unwrap_or(FALLBACK_REPLY)
}

const LIVE_GUIDELINES: [SafetyGuideline; 5] = [
    SafetyGuideline {
        title: "Food must be within expiry date",
        description: "Check all expiry dates before donating",
        icon: "⚠️",
    },
    SafetyGuideline {
        title: "Prepared food should be donated within 2 hours",
        description: "Freshly prepared food has a 2-hour window for safe donation",
        icon: "⚠️",
    },
    SafetyGuideline {
        title: "Keep food at proper temperature",
        description: "Cold foods below 40°F, hot foods above 140°F",
        icon: "⚠️",
    },
    SafetyGuideline {
        title: "Package food securely",
        description: "Use clean containers and proper sealing",
        icon: "⚠️",
    },
    SafetyGuideline {
        title: "Label with preparation time if applicable",
        description: "Include preparation time for homemade items",
        icon: "⚠️",
    },
];

const DEMO_GUIDELINES: [SafetyGuideline; 4] = [
    SafetyGuideline {
        title: "Temperature Control",
        description: "Keep food at proper temperature during transport",
        icon: "🌡️",
    },
    SafetyGuideline {
        title: "Expiry Check",
        description: "Ensure food is within expiry date",
        icon: "📅",
    },
    SafetyGuideline {
        title: "Proper Packaging",
        description: "Package food securely to prevent contamination",
        icon: "📦",
    },
    SafetyGuideline {
        title: "Clean Handling",
        description: "Use clean utensils and containers",
        icon: "🧤",
    },
];

/// Full guideline catalogue, served when the datastore is configured
pub fn food_safety_guidelines() -> Vec<SafetyGuideline> {
    LIVE_GUIDELINES.to_vec()
}

/// Short catalogue served in demo mode
pub fn demo_guidelines() -> Vec<SafetyGuideline> {
    DEMO_GUIDELINES.to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rules_checked_in_order() {
        // "safe" wins over "donate"
        assert_eq!(reply_to("Is it safe to donate rice?"), FOOD_SAFETY_REPLY);
        assert_eq!(reply_to("When does milk EXPIRE?"), EXPIRY_REPLY);
        assert_eq!(reply_to("keep it cold"), TEMPERATURE_REPLY);
        assert_eq!(reply_to("how should I package it"), PACKAGING_REPLY);
        assert_eq!(reply_to("I want to make a donation"), DONATION_REPLY);
        assert_eq!(reply_to("Hello there"), GREETING_REPLY);
    }

    #[test]
    fn test_substring_matching_quirk() {
        assert_eq!(reply_to("this"), GREETING_REPLY);
        assert_eq!(reply_to("shot"), TEMPERATURE_REPLY);
    }

    #[test]
    fn test_fallback() {
        assert_eq!(reply_to(""), FALLBACK_REPLY);
        assert_eq!(reply_to("where are you located"), FALLBACK_REPLY);
    }

    #[test]
    fn test_catalogues() {
        assert_eq!(food_safety_guidelines().len(), 5);
        assert_eq!(demo_guidelines().len(), 4);
        assert_eq!(food_safety_guidelines()[0].title, "Food must be within expiry date");
        assert!(food_safety_guidelines().iter().all(|g| g.icon == "⚠️"));
        assert_eq!(demo_guidelines()[0].icon, "🌡️");
    }
}
